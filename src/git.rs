use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Trait for git operations - allows mocking in tests
pub trait GitOperations: Send + Sync {
    /// Clones `url` into `destination`.
    fn clone_repo(&self, url: &str, destination: &Path) -> Result<()>;
}

/// The default implementation of `GitOperations`, which runs the system's
/// `git` command.
pub struct GitCli;

impl GitOperations for GitCli {
    fn clone_repo(&self, url: &str, destination: &Path) -> Result<()> {
        clone(url, destination)
    }
}

/// Clone a repository into `destination`, creating the directory first.
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Any authentication configured in ~/.gitconfig
///
/// On failure the error carries git's combined stdout and stderr.
pub fn clone(url: &str, destination: &Path) -> Result<()> {
    // git clones into an existing directory as long as it is empty
    std::fs::create_dir_all(destination)?;

    log::info!("Cloning {} into {}", url, destination.display());
    let output = Command::new("git")
        .arg("clone")
        .arg(url)
        .arg(destination)
        .output()
        .map_err(|e| Error::GitClone {
            url: url.to_string(),
            path: destination.display().to_string(),
            output: e.to_string(),
        })?;

    if !output.status.success() {
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        return Err(Error::GitClone {
            url: url.to_string(),
            path: destination.display().to_string(),
            output: combined,
        });
    }

    Ok(())
}
