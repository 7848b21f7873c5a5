pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
pub mod logging;

pub use application::express::PaypalExpressGateway;
pub use application::gateway::PaypalGateway;
pub use error::{GatewayError, Result};
