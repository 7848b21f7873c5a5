//! SOAP wire format: envelope construction and response flattening.

pub mod parser;
pub mod requests;
