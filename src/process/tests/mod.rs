//! Tests for process execution
