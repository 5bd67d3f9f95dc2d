//! Compiling the subject interpreter.

use std::io;
use std::path::Path;
use std::process::Command;

use crate::config::GraderConfig;
use crate::errors::{GraderError, GraderResult};

/// The compiler invocation that produces the subject binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl BuildCommand {
    /// `<compiler> <flags...> -o <subject> <sources...>`
    pub fn from_config(config: &GraderConfig) -> Self {
        let mut args = config.compiler_flags.clone();
        args.push("-o".to_string());
        args.push(config.subject.display().to_string());
        args.extend(config.sources.iter().map(|s| s.display().to_string()));
        Self {
            program: config.compiler.clone(),
            args,
        }
    }

    /// Shell-like rendering for messages.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Runs the compiler with inherited stdio so its diagnostics reach the user.
    pub fn run(&self) -> GraderResult<()> {
        tracing::info!(command = %self.display(), "compiling subject");
        let status = Command::new(&self.program)
            .args(&self.args)
            .status()
            .map_err(|source| GraderError::BuildSpawn {
                program: self.program.clone(),
                source,
            })?;
        if !status.success() {
            return Err(GraderError::BuildFailed {
                command: self.display(),
                status: status.to_string(),
            });
        }
        tracing::info!("subject compiled");
        Ok(())
    }
}

/// Adds execute permission to `path` when it exists without it.
///
/// Reference binaries often arrive from archives that drop the mode bits.
/// A failed chmod only warns: the user may be able to run a binary they do
/// not own, and a binary that really cannot run fails later at launch.
pub fn ensure_executable(path: &Path) {
    add_execute_bits(path, set_mode);
}

#[cfg(unix)]
fn add_execute_bits(path: &Path, set: impl FnOnce(&Path, u32) -> io::Result<()>) {
    use std::os::unix::fs::PermissionsExt;

    let Ok(meta) = std::fs::metadata(path) else {
        return;
    };
    let mode = meta.permissions().mode();
    if mode & 0o111 == 0o111 {
        return;
    }
    tracing::debug!(path = %path.display(), mode = %format!("{:o}", mode), "adding execute permission");
    if let Err(e) = set(path, mode | 0o111) {
        tracing::warn!(path = %path.display(), error = %e, "could not add execute permission");
    }
}

#[cfg(not(unix))]
fn add_execute_bits(_path: &Path, _set: impl FnOnce(&Path, u32) -> io::Result<()>) {}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> io::Result<()> {
    Ok(())
}

/// Deletes the compiled subject after grading. Missing is fine.
pub fn remove_subject(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "removed subject binary"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not remove subject binary")
        }
    }
}
