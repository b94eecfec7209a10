//! Command runner
//!
//! A [`Command`] is resolved and validated once, at construction. Each call to
//! [`Command::run`] launches the child with the configured strategy, builds a
//! fresh [`ProcessResult`](crate::process::ProcessResult), runs the error
//! detector over the enabled sources and then applies the on-error policy.
//!
//! Sources are always evaluated in the same order: return code, stderr,
//! stdout, log file. The failure reason is the source of the first failure, so
//! an earlier source wins when several fail in the same run.

mod classify;
mod log_file;
mod policy;
mod runner;

#[cfg(test)]
mod tests;

pub use classify::classify;
pub use runner::Command;
