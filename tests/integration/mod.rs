//! Integration tests for cmdvet
//!
//! These run real child processes through the public API and the binary.

pub mod cli;
pub mod end_to_end;
pub mod helpers;
pub mod policies;
