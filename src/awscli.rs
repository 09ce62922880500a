use std::env;

use regex_lite::Regex;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::{
  exec::{CommandExecutor, SystemExecutor},
  version::Version,
};

/// Name of the AWS command line executable
pub const NAME: &str = "aws";

/// Minimum version of the AWS command line utility required
pub const REQUIRED: &str = "1.1.0";

/// Environment variable expected to name the AWS config file
pub const CONFIG: &str = "AWS_CONFIG_FILE";

#[derive(Debug, Error)]
pub enum AwsCliError {
  /// The utility is missing, unconfigured, or below the minimum version
  #[error("AWS command line utility prerequisites have not been met")]
  PrereqsNotMet,

  #[error("failed to execute `{command}`")]
  Spawn {
    command: String,
    #[source]
    source: std::io::Error,
  },

  /// The utility produced output that does not parse as JSON
  #[error("AWS command failed. Command was:\n{command}\n\nOutput was:\n{output}")]
  MalformedOutput { command: String, output: String },
}

/// Adapter over the AWS command line utility
///
/// Commands are spawned through the [`CommandExecutor`] seam so tests can
/// substitute canned output for real processes. One blocking spawn per call;
/// nothing is retried and no timeout is applied.
pub struct AwsCli<E = SystemExecutor> {
  executor: E,
  config_file: Option<String>,
}

impl AwsCli<SystemExecutor> {
  /// Construct with the real process executor, reading `AWS_CONFIG_FILE` from
  /// the environment
  pub fn new() -> Self {
    AwsCli::with_executor(SystemExecutor)
  }
}

impl Default for AwsCli<SystemExecutor> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E: CommandExecutor> AwsCli<E> {
  pub fn with_executor(executor: E) -> Self {
    AwsCli {
      executor,
      config_file: env::var(CONFIG).ok(),
    }
  }

  /// Construct with an explicit config file path instead of the environment lookup
  pub fn with_config_file<S: Into<String>>(executor: E, config_file: Option<S>) -> Self {
    AwsCli {
      executor,
      config_file: config_file.map(Into::into),
    }
  }

  #[cfg(test)]
  pub(crate) fn executor(&self) -> &E {
    &self.executor
  }

  /// Whether the utility is on the path and a config file has been named
  pub fn available(&self) -> bool {
    if self.config_file.is_none() {
      return false;
    }
    match self.executor.exec("which", &[NAME]) {
      Ok(result) => !result.stdout.trim().is_empty(),
      Err(_) => false,
    }
  }

  /// Current version of the utility, or `None` if it is not available
  ///
  /// The `aws-cli/X.Y.Z` triple is extracted from the banner when present;
  /// otherwise the raw text passes through unmodified.
  pub fn version(&self) -> Option<Version> {
    if !self.available() {
      return None;
    }

    let result = self.executor.exec(NAME, &["--version"]).ok()?;
    // Older releases print the version banner to stderr
    let text = match result.stdout.trim().is_empty() {
      true => result.stderr,
      false => result.stdout,
    };
    let text = text.trim();

    let re = Regex::new(r"aws-cli/(\d+\.\d+\.\d+)").ok()?;
    match re.captures(text).and_then(|cap| cap.get(1)) {
      Some(ver) => Some(Version::new(ver.as_str())),
      None => Some(Version::new(text)),
    }
  }

  /// Whether the prerequisites have been met to run the utility
  pub fn prereqs_met(&self) -> bool {
    match self.version() {
      Some(ver) => ver.satisfies(&Version::new(REQUIRED)),
      None => false,
    }
  }

  /// Run an AWS command and parse its JSON output
  ///
  /// `args` should *not* include the leading `aws` literal. Empty output
  /// yields an empty JSON object.
  pub fn run(&self, args: &[&str]) -> Result<Value, AwsCliError> {
    if !self.prereqs_met() {
      return Err(AwsCliError::PrereqsNotMet);
    }

    let command = format!("{NAME} {}", args.join(" "));
    debug!("running {command}");

    let result = self.executor.exec(NAME, args).map_err(|source| AwsCliError::Spawn {
      command: command.clone(),
      source,
    })?;

    let text = result.stdout.trim();
    if text.is_empty() {
      return Ok(Value::Object(Map::new()));
    }

    serde_json::from_str(text).map_err(|_| AwsCliError::MalformedOutput {
      command,
      output: text.to_string(),
    })
  }
}
