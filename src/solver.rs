//! Core abstraction shared by every placement heuristic.
//!
//! A `Solver` is a stateless value: all per-run state lives in an
//! accumulator local to one `solve` call, so a solver may be reused across
//! instances and threads.

use crate::error::SolveError;
use crate::instance::Instance;
use crate::location::Point;

/// A placement heuristic producing tower sites that cover every city.
pub trait Solver: Send + Sync {
    /// Registry name, used for selection and logging.
    fn name(&self) -> &str;

    /// Place towers so that every city of `instance` is covered.
    ///
    /// Returns an empty placement when the instance has no cities. Never
    /// returns a partial placement: if some city cannot be covered the
    /// solver fails instead.
    fn solve(&self, instance: &Instance) -> Result<Vec<Point>, SolveError>;
}

/// Caps the number of towers a solver may place. Every iteration covers at
/// least one new city, so running out indicates a broken invariant rather
/// than a hard instance.
#[derive(Clone, Copy, Debug)]
pub(crate) struct IterationGuard {
    limit: usize,
    iterations: usize,
}

impl IterationGuard {
    pub(crate) fn new(limit: usize) -> Self {
        IterationGuard {
            limit,
            iterations: 0,
        }
    }

    pub(crate) fn for_instance(instance: &Instance) -> Self {
        IterationGuard::new(instance.num_cities())
    }

    /// Account for one more iteration, failing once the limit is spent.
    pub(crate) fn tick(&mut self) -> Result<(), SolveError> {
        if self.iterations >= self.limit {
            return Err(SolveError::IterationLimit { limit: self.limit });
        }
        self.iterations += 1;
        Ok(())
    }
}
