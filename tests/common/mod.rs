//! Fixtures for the end-to-end CLI tests: disposable project directories
//! with a fake Go toolchain on PATH.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Creates an empty project directory.
pub fn project() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().to_path_buf();
    (dir, path)
}

/// Installs a fake `go` into `<project>/bin` that appends its arguments to
/// `<project>/calls.log` and exits with `exit_code`.
pub fn install_fake_go(project: &Path, exit_code: i32) {
    let bin = project.join("bin");
    fs::create_dir_all(&bin).expect("Failed to create bin dir");

    let log = project.join("calls.log");
    let script = format!(
        "#!/bin/sh\necho \"$@\" >> \"{}\"\nexit {}\n",
        log.display(),
        exit_code
    );
    let script_path = bin.join("go");
    fs::write(&script_path, script).expect("Failed to write fake go");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&script_path)
            .expect("Failed to get metadata")
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script_path, perms).expect("Failed to set permissions");
    }
}

/// Every fake toolchain invocation so far, one argument line per call.
pub fn calls(project: &Path) -> Vec<String> {
    match fs::read_to_string(project.join("calls.log")) {
        Ok(content) => content.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}

/// Adds an example source file to the project.
pub fn write_example(project: &Path, rel: &str) {
    let path = project.join(rel);
    fs::create_dir_all(path.parent().expect("examples live in a subdirectory"))
        .expect("Failed to create example dir");
    fs::write(&path, "package main\n\nfunc main() {}\n").expect("Failed to write example");
}

/// The helper binary, started in `project` with the fake toolchain first
/// on PATH.
pub fn helper(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("helper").expect("helper binary should exist");
    let path = match std::env::var("PATH") {
        Ok(current) => format!("{}:{current}", project.join("bin").display()),
        Err(_) => project.join("bin").display().to_string(),
    };
    cmd.current_dir(project).env("PATH", path);
    cmd
}
