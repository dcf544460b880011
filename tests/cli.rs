#![cfg(feature = "cli")]

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tower_placer::*;

const INSTANCE: &str = "4\n10\n2\n3\n0 0\n1 1\n8 8\n9 9\n";

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tower-placer"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_writes_valid_solution_to_stdout() {
    let instance: Instance = INSTANCE.parse().unwrap();

    for kind in SolverKind::ALL {
        let output = run_with_stdin(&["-", "--solver", kind.name()], INSTANCE);
        assert!(output.status.success(), "{}: {:?}", kind, output);

        let text = String::from_utf8(output.stdout).unwrap();
        assert!(text.starts_with("# Penalty: "), "{}", text);
        let solution = Solution::parse(&instance, text.lines()).unwrap();
        assert_eq!(solution.validate(), Ok(()), "{}", kind);
    }
}

#[test]
fn test_writes_solution_file() {
    let dir = std::env::temp_dir().join(format!("tower-placer-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let input = dir.join("instance.txt");
    let output = dir.join("solution.txt");
    std::fs::write(&input, INSTANCE).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_tower-placer"))
        .arg(&input)
        .arg(&output)
        .args(["--solver", "set-cover", "--pool-size", "2"])
        .status()
        .unwrap();
    assert!(status.success());

    let instance: Instance = INSTANCE.parse().unwrap();
    let text = std::fs::read_to_string(&output).unwrap();
    assert!(Solution::parse(&instance, text.lines()).unwrap().is_valid());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_invalid_instance_fails() {
    let output = run_with_stdin(&["-", "--solver", "naive"], "1\n5\n-1\n3\n0 0\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("coverage radius"), "{}", stderr);
}

#[test]
fn test_unknown_solver_fails() {
    let output = run_with_stdin(&["-", "--solver", "annealing"], INSTANCE);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("annealing"), "{}", stderr);
}

#[test]
fn test_verbose_logs_to_stderr() {
    let mut command = Command::new(env!("CARGO_BIN_EXE_tower-placer"));
    command.env_remove("RUST_LOG");
    let mut child = command
        .args(["-", "--solver", "max-min-overlap", "-vv"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(INSTANCE.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("max-min-overlap: placed"), "{}", stderr);
}
