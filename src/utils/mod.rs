//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used
//! across the application. Currently includes:
//!
//! - logging: Logging utilities
//! - parsing: Environment value parsing utilities

pub mod logging;
pub mod parsing;
