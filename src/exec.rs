use std::io;

use tracing::debug;

/// Captured output of a finished external process
pub struct CmdResult {
  pub stdout: String,
  pub stderr: String,
  pub status: i32,
}

/// Seam over process spawning
///
/// Trait wrapper to support testing with canned output instead of real processes
pub trait CommandExecutor {
  fn exec(&self, cmd: &str, args: &[&str]) -> io::Result<CmdResult>;
}

/// Executor that spawns real processes, blocking until they exit
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
  fn exec(&self, cmd: &str, args: &[&str]) -> io::Result<CmdResult> {
    debug!("executing {cmd} {}", args.join(" "));
    let output = std::process::Command::new(cmd).args(args).output()?;

    Ok(CmdResult {
      stdout: String::from_utf8_lossy(&output.stdout).to_string(),
      stderr: String::from_utf8_lossy(&output.stderr).to_string(),
      status: output.status.code().unwrap_or(1),
    })
  }
}
