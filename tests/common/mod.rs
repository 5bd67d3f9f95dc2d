//! Shared fixtures: a scratch grading directory with shell-script interpreters.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    /// An empty `Test/` directory with a `cat` reference and a subject that
    /// rewrites every `B` to `X`.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("Test")).unwrap();
        let ws = Self { dir };
        ws.script("reference.sh", "cat");
        ws.script("subject.sh", "sed 's/B/X/g'");
        ws
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn trace(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join("Test").join(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// The grader pointed at the scripts, with building and color off.
    pub fn grader(&self) -> Command {
        let mut cmd = Command::cargo_bin("basic-grader").unwrap();
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .args([
                "--skip-build",
                "--color",
                "never",
                "--subject",
                "./subject.sh",
                "--reference",
                "./reference.sh",
            ]);
        cmd
    }
}
