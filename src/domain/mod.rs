//! Domain types: what a charge is made of, what comes back, and the
//! transport port the application layer talks through.

pub mod address;
pub mod credit_card;
pub mod money;
pub mod options;
pub mod ports;
pub mod response;
