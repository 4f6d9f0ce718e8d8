//! Host integration: checking and opening the external paths files point at.
//!
//! The namespace never touches the filesystem itself. It asks a [`FileHost`] whether a
//! path still exists and, if so, hands the path over to be opened.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

pub trait FileHost {
    /// Whether `path` exists on the underlying storage.
    fn path_exists(&self, path: &str) -> bool;

    /// Open `path` in the platform's default viewer.
    fn open(&self, path: &str) -> io::Result<()>;
}

/// [`FileHost`] backed by the local filesystem and the desktop's default opener.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHost;

impl SystemHost {
    fn opener(path: &str) -> Command {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        }
        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(path);
            cmd
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
    }
}

impl FileHost for SystemHost {
    fn path_exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn open(&self, path: &str) -> io::Result<()> {
        spawn_reaped(Self::opener(path))?;
        debug!(%path, "Spawned default opener");
        Ok(())
    }
}

/// Spawn `command` with null stdio and wait for it on a detached thread so the child is
/// reaped without blocking the caller.
fn spawn_reaped(mut command: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    let pid = child.id();
    Ok(thread::spawn(move || {
        let status = child.wait();
        match &status {
            Ok(status) if !status.success() => warn!(pid, %status, "Opener exited with failure"),
            Ok(_) => debug!(pid, "Opener exited"),
            Err(e) => warn!(pid, error = %e, "Failed to wait for opener"),
        }
        status
    }))
}
