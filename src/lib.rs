//! Utilities for driving the AWS command line utility from automation code
//!
//! The [`awscli`] module locates the `aws` executable, gates invocations on an
//! availability and minimum-version check, and parses command output as JSON.
//! The [`opsworks`] module builds on it to create and look up OpsWorks stacks.
//!
//! All calls are synchronous and spawn one blocking external process each;
//! nothing is cached, retried, or logged beyond `tracing` diagnostics.

pub mod awscli;
pub mod exec;
pub mod opsworks;
pub mod version;

pub use awscli::{AwsCli, AwsCliError};
pub use exec::{CmdResult, CommandExecutor, SystemExecutor};
pub use opsworks::{
  CookbookSource, CreateStackInput, HostnameTheme, JsonArg, OpsWorksError, Os, SourceType, StackDefaults, StackManager,
};
pub use version::Version;
