use crate::domain::response::Response;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// The request was rejected locally, before anything was sent.
    #[error("{0}")]
    Input(String),
    /// The vendor answered with a SOAP fault. The normalized response is kept so
    /// callers can still inspect `faultcode`, `faultstring` and `detail`.
    #[error("{}", .0.message())]
    Fault(Box<Response>),
    #[error("Protocol error: {0}")]
    Protocol(String),
    #[error("Timed out after {0} seconds waiting for the gateway")]
    Timeout(u64),
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("Cannot serialize request: {0}")]
    Serialize(#[from] quick_xml::DeError),
}

impl GatewayError {
    pub fn missing_parameter(name: &str) -> Self {
        Self::Input(format!("Missing required parameter: {name}"))
    }

    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input(_))
    }

    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }

    /// Transport failures and server-side faults may succeed on a later attempt.
    /// Client-side faults and local input errors will not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout(_) => true,
            Self::Fault(response) => response
                .params()
                .get("faultcode")
                .is_some_and(|code| code.ends_with("Server")),
            _ => false,
        }
    }

    /// The normalized response carried by a SOAP fault.
    pub fn fault_response(&self) -> Option<&Response> {
        match self {
            Self::Fault(response) => Some(response.as_ref()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
