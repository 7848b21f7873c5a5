//! Transport adapters for the `Transport` port.

pub mod http;
pub mod stub;
