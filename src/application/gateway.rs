use super::api_client::ApiClient;
use super::express::PaypalExpressGateway;
use crate::config::GatewayDefaults;
use crate::domain::credit_card::CreditCard;
use crate::domain::money::Amount;
use crate::domain::options::{Credentials, GatewayOptions, PurchaseOptions, require};
use crate::domain::ports::TransportRef;
use crate::domain::response::Response;
use crate::error::{GatewayError, Result};
use crate::infrastructure::http::HttpTransport;
use crate::interfaces::soap::requests::{self, DirectPayment, OrderTotal};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

pub const SUCCESS_MESSAGE: &str = "Bogus Gateway: Forced success";
pub const FAILURE_MESSAGE: &str = "Bogus Gateway: Forced failure";
pub const ERROR_MESSAGE: &str =
    "Bogus Gateway: Use CreditCard number 1 for success, 2 for exception and anything else for error";
const TEST_RECEIPT_ID: &str = "#0001";

/// Direct credit card payments through the SOAP API.
///
/// Each call is an independent round trip; the gateway holds no per-call state
/// and can be shared across tasks.
#[derive(Clone)]
pub struct PaypalGateway {
    api: ApiClient,
}

impl PaypalGateway {
    /// Builds a gateway over an existing transport.
    ///
    /// The certificate is `credentials.pem` when given, otherwise `defaults.pem`.
    pub fn new(
        credentials: Credentials,
        defaults: &GatewayDefaults,
        transport: TransportRef,
    ) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(credentials, defaults, transport)?,
        })
    }

    /// Builds a gateway that talks HTTPS, presenting the resolved certificate.
    pub fn connect(
        credentials: Credentials,
        defaults: &GatewayDefaults,
        timeout_secs: u64,
    ) -> Result<Self> {
        let pem = credentials.pem.as_deref().or(defaults.pem.as_deref());
        let transport = HttpTransport::new(pem, timeout_secs)?;
        Self::new(credentials, defaults, Arc::new(transport))
    }

    pub fn options(&self) -> &GatewayOptions {
        &self.api.options
    }

    /// Formats an amount the way the vendor expects it (`1034` -> `"10.34"`).
    pub fn amount(&self, amount: impl Into<Amount>) -> Result<String> {
        amount.into().to_decimal_string()
    }

    /// Charges a card in a single step.
    ///
    /// A declined charge is `Ok` with `success() == false`. Faults, malformed
    /// replies and transport failures are errors.
    pub async fn purchase(
        &self,
        amount: impl Into<Amount>,
        card: &CreditCard,
        options: &PurchaseOptions,
    ) -> Result<Response> {
        let ip = require(&options.ip, "ip")?;
        let amount = amount.into();
        let value = amount.to_decimal_string()?;

        if self.options().test()
            && let Some(result) = test_card_result(card)
        {
            debug!(card = %card.display_number(), "Answering with a test card result");
            return result;
        }

        info!(
            amount = %value,
            currency = %amount.currency(),
            card = %card.display_number(),
            order_id = options.order_id.as_deref(),
            "Purchasing"
        );

        let envelope = requests::direct_payment(
            self.options(),
            &DirectPayment {
                total: OrderTotal {
                    value: &value,
                    currency: amount.currency().code(),
                },
                card,
                address: options.address.as_ref(),
                email: options.email.as_deref(),
                ip,
                order_id: options.order_id.as_deref(),
                description: options.description.as_deref(),
            },
        )?;

        self.api
            .commit("DoDirectPayment", envelope, "transaction_id")
            .await
    }

    /// An Express Checkout gateway with the same credentials, certificate and mode.
    pub fn express(&self) -> PaypalExpressGateway {
        PaypalExpressGateway::from_api(self.api.clone())
    }
}

/// Canned results for the test-mode card numbers `1`, `2` and `3`.
fn test_card_result(card: &CreditCard) -> Option<Result<Response>> {
    let receipt = || HashMap::from([("receiptid".to_string(), TEST_RECEIPT_ID.to_string())]);
    match card.number.trim() {
        "1" => Some(Ok(Response::new(true, SUCCESS_MESSAGE, receipt(), true))),
        "2" => Some(Ok(Response::new(false, FAILURE_MESSAGE, receipt(), true))),
        "3" => Some(Err(GatewayError::Protocol(ERROR_MESSAGE.to_string()))),
        _ => None,
    }
}
