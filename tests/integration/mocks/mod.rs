//! Mock implementations and helpers shared by the integration tests.

mod clients;

pub use clients::*;
