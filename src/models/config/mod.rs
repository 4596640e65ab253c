mod client_config;

pub use client_config::{ClientConfig, MAX_REQUESTS_ENV, REQUEST_TIMEOUT_ENV};
