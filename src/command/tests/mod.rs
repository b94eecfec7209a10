//! Tests for the command runner
