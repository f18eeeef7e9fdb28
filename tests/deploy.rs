//! End-to-end tests for the `deploy` binary, run against a stub
//! `dotnet` placed first on PATH.

#![cfg(unix)]

use {
    std::{
        env, fs,
        os::unix::fs::PermissionsExt,
        path::{Path, PathBuf},
        process::Command,
    },
    tempfile::TempDir,
};

const DOTNET_STUB: &str = r#"#!/bin/sh
echo "dotnet $*"
env | grep _PACKAGE_VERSION | sort || true
case "$1" in
  build)
    if [ -n "$STUB_BUILD_STDERR" ]; then
      echo "CS0000: something went wrong" >&2
    fi
    ;;
  nuget)
    if [ -n "$STUB_PUSH_FAIL" ]; then
      echo "Response status code does not indicate success: 403" >&2
      exit 1
    fi
    ;;
esac
exit 0
"#;

struct Fixture {
    root: TempDir,
    stub_dir: PathBuf,
}

fn setup() -> Fixture {
    let root = tempfile::tempdir().unwrap();
    let root_path = root.path();

    Command::new("git")
        .args(["init"])
        .current_dir(root_path)
        .output()
        .unwrap();

    fs::create_dir_all(root_path.join("KzBsv")).unwrap();
    fs::write(root_path.join("KzBsv/.version"), "0.1.2\n").unwrap();

    let stub_dir = root_path.join("stub-bin");
    fs::create_dir_all(&stub_dir).unwrap();
    let stub = stub_dir.join("dotnet");
    fs::write(&stub, DOTNET_STUB).unwrap();
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

    Fixture { root, stub_dir }
}

fn deploy_cmd(fixture: &Fixture) -> Command {
    let bin = assert_cmd::cargo::cargo_bin("deploy");
    let mut cmd = Command::new(bin);
    let path = format!(
        "{}:{}",
        fixture.stub_dir.display(),
        env::var("PATH").unwrap_or_default()
    );
    cmd.current_dir(fixture.root.path())
        .env("PATH", path)
        .env_remove("NUGET_KEY")
        .env_remove("STUB_BUILD_STDERR")
        .env_remove("STUB_PUSH_FAIL");
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn write_nupkg(root: &Path) {
    let dir = root.join("KzBsv/bin/Release");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("KzBsv.0.1.2.nupkg"), "not a real package").unwrap();
}

#[test]
fn versions_lists_exported_variables() {
    let fixture = setup();

    let output = deploy_cmd(&fixture).args(["versions"]).output().unwrap();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(stdout_of(&output).contains("KzBsv_PACKAGE_VERSION=0.1.2"));
}

#[test]
fn build_runs_release_build_with_versions_in_env() {
    let fixture = setup();

    let output = deploy_cmd(&fixture).args(["build"]).output().unwrap();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    // the stub echoes its argv and its environment
    assert!(stdout.contains("dotnet build -c Release"));
    assert!(stdout.contains("KzBsv_PACKAGE_VERSION=0.1.2"));
}

#[test]
fn build_aborts_on_captured_stderr() {
    let fixture = setup();

    let output = deploy_cmd(&fixture)
        .args(["build"])
        .env("STUB_BUILD_STDERR", "1")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("release build failed"));
}

#[test]
fn deploy_survives_a_failing_push() {
    let fixture = setup();
    write_nupkg(fixture.root.path());

    let output = deploy_cmd(&fixture)
        .args(["deploy"])
        .env("NUGET_KEY", "test-key")
        .env("STUB_PUSH_FAIL", "1")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("dotnet build -c Release"));
    assert!(stdout.contains("dotnet nuget push"));
}

#[test]
fn deploy_pushes_with_key_and_source() {
    let fixture = setup();
    write_nupkg(fixture.root.path());

    let output = deploy_cmd(&fixture)
        .args(["deploy"])
        .env("NUGET_KEY", "test-key")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    assert!(stdout.contains(
        "dotnet nuget push */**/Release/*.nupkg --skip-duplicate -k test-key -s \
         https://api.nuget.org/v3/index.json"
    ));
}

#[test]
fn push_is_skipped_without_a_key() {
    let fixture = setup();
    write_nupkg(fixture.root.path());

    let output = deploy_cmd(&fixture).args(["push"]).output().unwrap();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert!(!stdout_of(&output).contains("dotnet nuget push"));
    assert!(stderr_of(&output).contains("NUGET_KEY is not set"));
}

#[test]
fn deploy_dry_run_emits_json_summary() {
    let fixture = setup();

    let output = deploy_cmd(&fixture)
        .args(["deploy", "--dry-run", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    let stdout = stdout_of(&output);
    let json_start = stdout.find('{').unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();

    assert_eq!(
        summary["versions"][0]["variable"],
        "KzBsv_PACKAGE_VERSION"
    );
    assert_eq!(summary["versions"][0]["version"], "0.1.2");
    let push = summary["steps"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["step"] == "push")
        .unwrap();
    assert_eq!(push["status"], "skipped");
}
