use crate::config::{self, GatewayDefaults};
use crate::domain::options::{Credentials, GatewayOptions};
use crate::domain::ports::TransportRef;
use crate::domain::response::Response;
use crate::error::{GatewayError, Result};
use crate::interfaces::soap::parser::{self, ParsedReply};
use tracing::{debug, info, warn};

/// `Ack` values that mean the vendor accepted the request.
const SUCCESS_CODES: &[&str] = &["Success", "SuccessWithWarning"];

/// Credentials, mode and transport shared by the direct and Express gateways.
#[derive(Clone)]
pub(crate) struct ApiClient {
    pub(crate) options: GatewayOptions,
    transport: TransportRef,
}

impl ApiClient {
    pub(crate) fn new(
        credentials: Credentials,
        defaults: &GatewayDefaults,
        transport: TransportRef,
    ) -> Result<Self> {
        if credentials.login.trim().is_empty() {
            return Err(GatewayError::missing_parameter("login"));
        }
        if credentials.password.is_empty() {
            return Err(GatewayError::missing_parameter("password"));
        }

        let options = GatewayOptions {
            login: credentials.login,
            password: credentials.password,
            pem: credentials.pem.or_else(|| defaults.pem.clone()),
            mode: defaults.mode,
        };
        Ok(Self { options, transport })
    }

    /// Posts one envelope and normalizes the reply.
    ///
    /// `authorization_field` names the reply field that identifies the result
    /// (`transaction_id` for payments, `token` for checkout setup).
    pub(crate) async fn commit(
        &self,
        action: &str,
        envelope: String,
        authorization_field: &str,
    ) -> Result<Response> {
        let url = config::endpoint(self.options.mode);
        info!(action, mode = %self.options.mode, url, "Submitting gateway request");

        let raw = self.transport.post(url, envelope).await?;
        debug!(action, bytes = raw.len(), "Parsing gateway response");

        let reply = parser::parse(&raw)?;
        let response = build_response(reply, self.options.test(), authorization_field)?;

        if response.success() {
            info!(action, authorization = response.authorization(), "Gateway request approved");
        } else {
            warn!(
                action,
                ack = response.param("ack"),
                error_code = response.param("error_code"),
                message = response.message(),
                "Gateway request declined"
            );
        }
        Ok(response)
    }
}

/// Maps a parsed reply onto a `Response`, or onto an error when the reply is a
/// fault or is missing its acknowledgement.
pub(crate) fn build_response(
    reply: ParsedReply,
    test: bool,
    authorization_field: &str,
) -> Result<Response> {
    let fields = reply.fields;

    if reply.fault {
        let part = |key: &str| fields.get(key).map(String::as_str).unwrap_or_default();
        let message = format!(
            "{}: {} - {}",
            part("faultcode"),
            part("faultstring"),
            part("detail")
        );
        warn!(%message, "Gateway returned a SOAP fault");
        return Err(GatewayError::Fault(Box::new(Response::new(
            false, message, fields, test,
        ))));
    }

    let Some(ack) = fields.get("ack").cloned() else {
        return Err(GatewayError::Protocol(
            "Response carries neither an Ack nor a Fault".to_string(),
        ));
    };

    let success = SUCCESS_CODES.contains(&ack.as_str());
    let message = fields
        .get("long_message")
        .or_else(|| fields.get("short_message"))
        .cloned()
        .unwrap_or(ack);
    let authorization = fields.get(authorization_field).cloned();

    Ok(Response::new(success, message, fields, test).with_authorization(authorization))
}
