use std::process::{Command, Output};

fn indir_sort(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_indir_sort"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn missing_seed_prints_usage() {
    let output = indir_sort(&["10", "25"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("Usage"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn zero_modulus_fails_with_message() {
    let output = indir_sort(&["5", "0", "1"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("modulus"), "{stderr}");
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn prints_report() {
    let output = indir_sort(&["4", "10", "1"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Input array"), "{stdout}");
    assert!(stdout.contains("Sorted array after"), "{stdout}");
}

#[test]
fn unknown_algorithm_is_rejected() {
    let output = indir_sort(&["4", "10", "1", "--algorithm", "bogosort"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("bogosort"), "{stderr}");
}
