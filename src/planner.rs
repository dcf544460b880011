//! Public API for tower planning.
//!
//! The `PlannerBuilder` provides a fluent API for choosing and configuring a
//! solver. The resulting `Planner` runs it against an instance and hands back
//! a `Solution`, validated unless validation was switched off.

use crate::constants::*;
use crate::error::*;
use crate::instance::Instance;
use crate::solution::Solution;
use crate::solver::Solver;
use crate::solvers::*;
use log::*;

/// Fluent builder for a `Planner`.
#[derive(Clone, Debug)]
pub struct PlannerBuilder {
    kind: SolverKind,
    pool_size: usize,
    validate: bool,
}

impl PlannerBuilder {
    /// Start from the set-cover solver with its default pool size.
    pub fn new() -> Self {
        PlannerBuilder {
            kind: SolverKind::SetCover,
            pool_size: DEFAULT_SET_COVER_POOL_SIZE,
            validate: true,
        }
    }

    pub fn solver(mut self, kind: SolverKind) -> Self {
        self.kind = kind;
        self
    }

    /// Select a solver by registry name.
    pub fn solver_named(self, name: &str) -> Result<Self, SolveError> {
        Ok(self.solver(name.parse()?))
    }

    /// Number of highest-gain groups the set-cover solver compares per
    /// iteration (default: 5). Ignored by the other solvers.
    pub fn pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Whether `Planner::plan` checks the placement against the instance
    /// before returning it (default: true).
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn build(self) -> Planner {
        let solver: Box<dyn Solver> = match self.kind {
            SolverKind::SetCover => Box::new(SetCoverSolver::new(self.pool_size)),
            other => other.solver(),
        };

        Planner {
            solver,
            validate: self.validate,
        }
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        PlannerBuilder::new()
    }
}

/// A configured solver ready to run.
pub struct Planner {
    solver: Box<dyn Solver>,
    validate: bool,
}

impl Planner {
    pub fn solver_name(&self) -> &str {
        self.solver.name()
    }

    pub fn plan<'a>(&self, instance: &'a Instance) -> Result<Solution<'a>, PlanError> {
        let towers = self.solver.solve(instance)?;
        let solution = Solution::new(instance, towers);

        if self.validate {
            solution.validate()?;
        }

        debug!(
            "{}: {} towers, penalty {:.3}",
            self.solver.name(),
            solution.towers().len(),
            solution.penalty()
        );

        Ok(solution)
    }
}

/// Run the named solver with default settings and validate its output.
pub fn plan_towers<'a>(instance: &'a Instance, solver: &str) -> Result<Solution<'a>, PlanError> {
    PlannerBuilder::new().solver_named(solver)?.build().plan(instance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Point;

    fn instance() -> Instance {
        Instance::new(
            10,
            3.0,
            2.0,
            vec![Point::new(1, 1), Point::new(8, 8), Point::new(2, 7)],
        )
        .unwrap()
    }

    #[test]
    fn test_every_registered_solver_plans_validly() {
        let inst = instance();
        for kind in SolverKind::ALL {
            let solution = PlannerBuilder::new().solver(kind).build().plan(&inst).unwrap();
            assert!(solution.is_valid(), "{} produced an invalid plan", kind);
        }
    }

    #[test]
    fn test_pool_size_reaches_solver() {
        let planner = PlannerBuilder::new().pool_size(1).build();
        assert_eq!(planner.solver_name(), "set-cover");
        assert!(planner.plan(&instance()).is_ok());
    }

    #[test]
    fn test_unknown_solver_name() {
        assert!(matches!(
            plan_towers(&instance(), "bogus"),
            Err(PlanError::Solve(SolveError::UnknownSolver(_)))
        ));
    }

    #[test]
    fn test_validation_catches_short_service_shape() {
        // The service neighborhood reaches sqrt(8) diagonally, beyond a
        // coverage radius of 1, so max-min-overlap output fails validation.
        let inst = Instance::new(9, 1.0, 0.0, vec![Point::new(4, 4)]).unwrap();
        let validated = PlannerBuilder::new()
            .solver(SolverKind::MaxMinOverlap)
            .build()
            .plan(&inst);
        assert!(matches!(validated, Err(PlanError::Invalid(_))));

        let unchecked = PlannerBuilder::new()
            .solver(SolverKind::MaxMinOverlap)
            .validate(false)
            .build()
            .plan(&inst)
            .unwrap();
        assert_eq!(unchecked.towers().len(), 1);
    }
}
