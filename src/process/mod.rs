//! Process execution and the per-run result record
//!
//! A run is carried out by an [`ExecutionStrategy`]: [`CaptureStrategy`]
//! spawns the executable directly and collects its output line by line,
//! [`ShellStrategy`] hands the command line to the system shell and leaves the
//! child's output on the terminal.
//!
//! # Working directory
//!
//! Both strategies pass the working directory to the spawn primitive, so the
//! parent's current directory is never changed by a run.
//!
//! # Concurrency
//!
//! Runs block until the child exits. There is no timeout: a child that never
//! exits blocks the caller indefinitely.

mod exit;
mod output;
mod result;
mod strategy;

#[cfg(test)]
mod tests;

pub use exit::exit_code;
pub use output::read_lines;
pub use result::{FailureReason, ProcessResult, ProcessStatus};
pub use strategy::{
    strategy_for, CaptureStrategy, CommandLine, Execution, ExecutionStrategy, ShellStrategy,
};
