//! Handling of untrusted backend payloads.
//!
//! Everything in here operates on `serde_json::Value` and never fails:
//! the backend has no contract with us, so shape drift is expected.

pub mod coerce;
pub mod sanitize;
