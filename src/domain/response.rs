use serde::Serialize;
use std::collections::HashMap;

/// The normalized outcome of one gateway round trip.
///
/// A declined transaction is still a `Response` (with `success == false`); only
/// communication and protocol problems surface as errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    success: bool,
    message: String,
    params: HashMap<String, String>,
    test: bool,
    authorization: Option<String>,
}

impl Response {
    pub fn new(
        success: bool,
        message: impl Into<String>,
        params: HashMap<String, String>,
        test: bool,
    ) -> Self {
        Self {
            success,
            message: message.into(),
            params,
            test,
            authorization: None,
        }
    }

    pub fn with_authorization(mut self, authorization: Option<String>) -> Self {
        self.authorization = authorization;
        self
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Raw response fields, keyed by the snake_cased vendor element name.
    pub fn params(&self) -> &HashMap<String, String> {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Whether the response was produced against the test environment.
    pub fn test(&self) -> bool {
        self.test
    }

    pub fn authorization(&self) -> Option<&str> {
        self.authorization.as_deref()
    }
}
