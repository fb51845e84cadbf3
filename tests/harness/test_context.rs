//! Shared testing harness for `dockctx` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated project directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Project directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `dockctx` binary in the project directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("dockctx").expect("Failed to locate dockctx binary");
        cmd.current_dir(&self.work_dir).env("HOME", self.home()).env_remove("RUST_LOG");
        cmd
    }

    /// Write `dockctx.toml` into the project directory.
    pub(crate) fn write_config(&self, content: &str) {
        self.write_file("dockctx.toml", content);
    }

    /// Write a file relative to the project directory, creating parents.
    pub(crate) fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file relative to the project directory.
    pub(crate) fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Install an executable shell script under the temp root and point
    /// `[tools] docker` at it.
    #[cfg(unix)]
    pub(crate) fn use_fake_docker(&self, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.root.path().join("fake-docker");
        fs::write(&path, format!("#!/bin/sh\n{}\n", script)).expect("Failed to write fake docker");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark fake docker executable");
        self.write_config(&format!("[tools]\ndocker = \"{}\"\n", path.display()));
    }
}
