// launcher.rs

use crate::error::{PortfolioError, Result};
use std::process::{Child, Command, Stdio};
use std::thread::{self, JoinHandle};

/// Opens an external target (a `mailto:` link or a web URL).
pub trait Launcher {
    fn open(&self, target: &str) -> Result<()>;
}

/// Hands the target to the desktop's opener.
pub struct SystemLauncher;

impl SystemLauncher {
    fn command(target: &str) -> Command {
        #[cfg(target_os = "macos")]
        let cmd = {
            let mut cmd = Command::new("open");
            cmd.arg(target);
            cmd
        };
        #[cfg(target_os = "windows")]
        let cmd = {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(target);
            cmd
        };
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let cmd = {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(target);
            cmd
        };
        cmd
    }
}

impl Launcher for SystemLauncher {
    fn open(&self, target: &str) -> Result<()> {
        let child = Self::command(target)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| PortfolioError::Launch {
                target: target.to_string(),
                source,
            })?;
        log::info!("opened {target} (pid {})", child.id());
        reap(child);
        Ok(())
    }
}

/// Waits for the opener on a detached thread so it does not linger as a
/// zombie while the session runs.
fn reap(mut child: Child) -> JoinHandle<()> {
    thread::spawn(move || match child.wait() {
        Ok(status) if status.success() => log::debug!("opener {} exited", child.id()),
        Ok(status) => log::warn!("opener {} exited with {status}", child.id()),
        Err(err) => log::warn!("waiting on opener {}: {err}", child.id()),
    })
}

/// Used when launching is switched off; the response text still shows.
pub struct DisabledLauncher;

impl Launcher for DisabledLauncher {
    fn open(&self, target: &str) -> Result<()> {
        log::info!("launching disabled, not opening {target}");
        Ok(())
    }
}
