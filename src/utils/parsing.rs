//! Parsing utilities
//!
//! This module provides utilities for reading configuration values from
//! the environment with lenient fallback behavior.

use std::env;

/// Reads a `u64` from an environment variable.
///
/// Falls back to `default` when the variable is unset or does not parse
/// as a number.
pub fn parse_env_u64(name: &str, default: u64) -> u64 {
	env::var(name)
		.ok()
		.and_then(|value| value.trim().parse().ok())
		.unwrap_or(default)
}

/// Reads a `usize` from an environment variable.
///
/// Falls back to `default` when the variable is unset or does not parse
/// as a number.
pub fn parse_env_usize(name: &str, default: usize) -> usize {
	env::var(name)
		.ok()
		.and_then(|value| value.trim().parse().ok())
		.unwrap_or(default)
}
