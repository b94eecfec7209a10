//! Tests for command configuration
