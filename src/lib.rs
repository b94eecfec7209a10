pub mod command;
pub mod config;
pub mod detect;
pub mod error;
pub mod process;
pub mod report;
pub mod resolve;

pub use command::Command;
pub use config::{CommandOptions, ErrorIndicators, ErrorSource, OnError, RunVia};
pub use error::{CmdError, ConfigError, ResolveError, RunError};
pub use process::{FailureReason, ProcessResult, ProcessStatus};
