use std::process::{Command, Output};

fn run_rshape(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rshape"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Unable to run rshape")
}

const EXPECTED: &str = "Square (side=5.000000) is larger than 16.000000: true\n\
                        Circle (radius=2.000000) is larger than 16.000000: false\n";

#[test]
fn test_run_without_arguments() {
    let output = run_rshape(&[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
}

#[test]
fn test_run_enum_dispatch() {
    let output = run_rshape(&["--dispatch", "enum"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
}

#[test]
fn test_run_verbose_keeps_stdout_clean() {
    let output = run_rshape(&["-vvv"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), EXPECTED);
    assert!(!output.stderr.is_empty());
}
