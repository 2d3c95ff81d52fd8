use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const PIPELINE_VARS: [&str; 4] = [
    "SYSTEM_ACCESSTOKEN",
    "BUILD_REPOSITORY_ID",
    "SYSTEM_PULLREQUEST_PULLREQUESTID",
    "SYSTEM_COLLECTIONURI",
];

/// Run `razorcheck check` from `cwd` with the pipeline environment stripped,
/// so no network call is ever attempted.
fn run_check(cwd: &Path, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_razorcheck"));
    cmd.arg("check").args(args).current_dir(cwd);
    for var in PIPELINE_VARS {
        cmd.env_remove(var);
    }
    cmd.output().unwrap()
}

#[test]
fn violation_fails_the_run_and_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("a")).unwrap();
    fs::write(root.join("a/b.razor"), "<h1>hi</h1>").unwrap();
    fs::write(root.join("a/c.razor"), "@code { }").unwrap();

    let output = run_check(root, &["."]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr.contains("@code blocks were found in razor files."),
        "stderr: {stderr}"
    );
    assert!(stdout.contains("b.razor"), "stdout: {stdout}");
    assert!(
        stdout.contains("Found \"@code\" in file:") && stdout.contains("c.razor"),
        "stdout: {stdout}"
    );
}

#[test]
fn clean_tree_succeeds_and_ignores_filtered_files() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("x.txt"), "@code { }").unwrap();
    fs::write(root.join("y.razor"), "no markers here").unwrap();

    let output = run_check(root, &["."]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "stdout: {stdout}");
    assert!(stdout.contains("y.razor"));
    assert!(!stdout.contains("x.txt"));
    assert!(stdout.contains("No @code blocks found in any razor files."));
}

#[test]
fn empty_directory_succeeds() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_check(dir.path(), &["."]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("No @code blocks found in any razor files."));
}

#[test]
fn missing_directory_fails_with_the_error_message() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_check(dir.path(), &["does-not-exist"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("directory not found"), "stderr: {stderr}");
}

#[test]
fn missing_pipeline_context_warns_per_value_but_does_not_change_the_verdict() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("y.razor"), "no markers here").unwrap();

    let output = run_check(dir.path(), &["."]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    for warning in [
        "Could not get system access token. Not posting pull request status.",
        "Could not get repository id. Not posting pull request status.",
        "Could not get pull request id. Not posting pull request status.",
        "Could not get collection URL. Not posting pull request status.",
    ] {
        assert!(stderr.contains(warning), "missing {warning:?} in: {stderr}");
    }
}

#[test]
fn no_status_flag_suppresses_context_warnings() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("y.razor"), "no markers here").unwrap();

    let output = run_check(dir.path(), &[".", "--no-status"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(output.status.success());
    assert!(
        !stderr.contains("Not posting pull request status."),
        "stderr: {stderr}"
    );
}

#[test]
fn explicit_config_flag_loads_the_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(
        root.join("strict.toml"),
        "[policy]\nmarker = \"@inject\"\n",
    )
    .unwrap();
    fs::write(root.join("page.razor"), "@inject IThing Thing").unwrap();

    let output = run_check(root, &[".", "--config", "strict.toml"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr.contains("@inject blocks were found in razor files."),
        "stderr: {stderr}"
    );
}

#[test]
fn unreadable_explicit_config_is_a_startup_error() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_check(dir.path(), &[".", "--config", "missing.toml"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    // Startup failure, not a check verdict.
    assert!(
        !stderr.contains("blocks were found"),
        "stderr: {stderr}"
    );
}

#[test]
fn config_file_can_change_extension_and_marker() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(
        root.join(".razorcheck.toml"),
        "[policy]\nextension = \".cshtml\"\nmarker = \"@inject\"\n",
    )
    .unwrap();
    fs::write(root.join("page.cshtml"), "@inject IThing Thing").unwrap();
    fs::write(root.join("page.razor"), "@code { }").unwrap();

    let output = run_check(root, &["."]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr.contains("@inject blocks were found in cshtml files."),
        "stderr: {stderr}"
    );
    assert!(
        stdout.contains("Found \"@inject\" in file:") && stdout.contains("page.cshtml"),
        "stdout: {stdout}"
    );
}
