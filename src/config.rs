//! Gateway configuration.
//!
//! Defaults that apply to every gateway instance (certificate, mode) are passed
//! explicitly at construction instead of living in global state. `EnvConfig`
//! collects them from `PAYPAL_GATEWAY_*` environment variables.

use crate::domain::options::GatewayMode;
use crate::error::{GatewayError, Result};
use crate::logging::LogLevel;
use std::env;
use std::path::Path;

/// Environment variable prefix
const ENV_PREFIX: &str = "PAYPAL_GATEWAY";

pub const TEST_ENDPOINT: &str = "https://api-aa.sandbox.paypal.com/2.0/";
pub const LIVE_ENDPOINT: &str = "https://api-aa.paypal.com/2.0/";

/// Settings applied to gateways that do not override them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GatewayDefaults {
    /// Client certificate used when none is passed to the gateway.
    pub pem: Option<String>,
    pub mode: GatewayMode,
}

impl GatewayDefaults {
    pub fn with_pem(mut self, pem: impl Into<String>) -> Self {
        self.pem = Some(pem.into());
        self
    }

    pub fn with_mode(mut self, mode: GatewayMode) -> Self {
        self.mode = mode;
        self
    }
}

pub fn endpoint(mode: GatewayMode) -> &'static str {
    match mode {
        GatewayMode::Test => TEST_ENDPOINT,
        GatewayMode::Live => LIVE_ENDPOINT,
    }
}

/// Raw values read from the environment.
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// PAYPAL_GATEWAY_LOGIN
    pub login: Option<String>,
    /// PAYPAL_GATEWAY_PASSWORD
    pub password: Option<String>,
    /// PAYPAL_GATEWAY_PEM_FILE
    pub pem_file: Option<String>,
    /// PAYPAL_GATEWAY_MODE
    pub mode: Option<String>,
    /// PAYPAL_GATEWAY_TIMEOUT, in seconds
    pub timeout: Option<String>,
    /// PAYPAL_GATEWAY_LOG
    pub log_level: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup, keyed by full variable name.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(&format!("{ENV_PREFIX}_{name}")).filter(|value| !value.trim().is_empty())
        };

        Self {
            login: get("LOGIN"),
            password: get("PASSWORD"),
            pem_file: get("PEM_FILE"),
            mode: get("MODE"),
            timeout: get("TIMEOUT"),
            log_level: get("LOG"),
        }
    }

    /// Resolves the defaults: reads the PEM file, parses the mode.
    pub fn defaults(&self) -> Result<GatewayDefaults> {
        let mode = match &self.mode {
            Some(mode) => mode.parse()?,
            None => GatewayMode::default(),
        };
        let pem = self.pem_file.as_deref().map(read_pem).transpose()?;
        Ok(GatewayDefaults { pem, mode })
    }

    /// The HTTP timeout in whole seconds. Anything but a positive integer is rejected.
    pub fn timeout(&self) -> Result<Option<u64>> {
        let Some(raw) = &self.timeout else {
            return Ok(None);
        };
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Ok(Some(secs)),
            _ => Err(GatewayError::Input(format!(
                "Invalid {ENV_PREFIX}_TIMEOUT: {raw}"
            ))),
        }
    }

    pub fn log_level(&self) -> Result<Option<LogLevel>> {
        self.log_level.as_deref().map(str::parse::<LogLevel>).transpose()
    }
}

pub fn read_pem(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| {
        GatewayError::Input(format!("Cannot read PEM file {}: {e}", path.display()))
    })
}
