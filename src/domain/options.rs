use super::address::Address;
use crate::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which vendor environment requests are sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayMode {
    #[default]
    Test,
    Live,
}

impl FromStr for GatewayMode {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "test" | "sandbox" => Ok(GatewayMode::Test),
            "live" | "production" => Ok(GatewayMode::Live),
            other => Err(GatewayError::Input(format!("Unknown gateway mode: {other}"))),
        }
    }
}

impl fmt::Display for GatewayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayMode::Test => f.write_str("test"),
            GatewayMode::Live => f.write_str("live"),
        }
    }
}

/// API credentials as supplied by the caller.
#[derive(Clone)]
pub struct Credentials {
    pub login: String,
    pub password: String,
    /// Client certificate and key in PEM form.
    pub pem: Option<String>,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            pem: None,
        }
    }

    pub fn with_pem(mut self, pem: impl Into<String>) -> Self {
        self.pem = Some(pem.into());
        self
    }
}

/// Resolved options a gateway instance runs with.
#[derive(Clone, PartialEq)]
pub struct GatewayOptions {
    pub login: String,
    pub password: String,
    pub pem: Option<String>,
    pub mode: GatewayMode,
}

impl GatewayOptions {
    pub fn test(&self) -> bool {
        self.mode == GatewayMode::Test
    }
}

impl fmt::Debug for GatewayOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayOptions")
            .field("login", &self.login)
            .field("password", &"[FILTERED]")
            .field("pem", &self.pem.as_ref().map(|_| "[FILTERED]"))
            .field("mode", &self.mode)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PurchaseOptions {
    /// Buyer's IP address; the vendor requires it for fraud scoring.
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpressSetupOptions {
    #[serde(default)]
    pub return_url: Option<String>,
    #[serde(default)]
    pub cancel_return_url: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub no_shipping: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpressPurchaseOptions {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub payer_id: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Returns the value of a required option, rejecting missing or blank ones.
pub(crate) fn require<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(GatewayError::missing_parameter(name)),
    }
}
