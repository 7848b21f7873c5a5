use super::api_client::ApiClient;
use crate::config::GatewayDefaults;
use crate::domain::money::Amount;
use crate::domain::options::{
    Credentials, ExpressPurchaseOptions, ExpressSetupOptions, GatewayMode, GatewayOptions, require,
};
use crate::domain::ports::TransportRef;
use crate::domain::response::Response;
use crate::error::{GatewayError, Result};
use crate::interfaces::soap::requests::{self, ExpressPayment, ExpressSetup, OrderTotal};
use tracing::info;
use url::form_urlencoded;

pub const TEST_REDIRECT_URL: &str =
    "https://www.sandbox.paypal.com/cgi-bin/webscr?cmd=_express-checkout&token=";
pub const LIVE_REDIRECT_URL: &str =
    "https://www.paypal.com/cgi-bin/webscr?cmd=_express-checkout&token=";

/// Express Checkout: the buyer approves the payment on the vendor's site.
///
/// The flow is `setup_purchase` -> redirect the buyer -> `details_for` (optional)
/// -> `purchase` with the returned token and payer id.
#[derive(Clone)]
pub struct PaypalExpressGateway {
    api: ApiClient,
}

impl PaypalExpressGateway {
    pub fn new(
        credentials: Credentials,
        defaults: &GatewayDefaults,
        transport: TransportRef,
    ) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(credentials, defaults, transport)?,
        })
    }

    pub(crate) fn from_api(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn options(&self) -> &GatewayOptions {
        &self.api.options
    }

    pub fn redirect_url(&self) -> &'static str {
        match self.options().mode {
            GatewayMode::Test => TEST_REDIRECT_URL,
            GatewayMode::Live => LIVE_REDIRECT_URL,
        }
    }

    /// The page the buyer is sent to; the token is query-encoded.
    pub fn redirect_url_for(&self, token: &str) -> String {
        let token: String = form_urlencoded::byte_serialize(token.as_bytes()).collect();
        format!("{}{}", self.redirect_url(), token)
    }

    /// Starts a checkout. On success the authorization is the checkout token.
    pub async fn setup_purchase(
        &self,
        amount: impl Into<Amount>,
        options: &ExpressSetupOptions,
    ) -> Result<Response> {
        let return_url = require(&options.return_url, "return_url")?;
        let cancel_return_url = require(&options.cancel_return_url, "cancel_return_url")?;
        let amount = amount.into();
        let value = amount.to_decimal_string()?;

        info!(amount = %value, currency = %amount.currency(), "Setting up express checkout");
        let envelope = requests::set_express_checkout(
            self.options(),
            &ExpressSetup {
                total: OrderTotal {
                    value: &value,
                    currency: amount.currency().code(),
                },
                return_url,
                cancel_return_url,
                order_id: options.order_id.as_deref(),
                description: options.description.as_deref(),
                email: options.email.as_deref(),
                no_shipping: options.no_shipping,
            },
        )?;

        self.api.commit("SetExpressCheckout", envelope, "token").await
    }

    /// Looks up the payer behind a checkout token.
    pub async fn details_for(&self, token: &str) -> Result<Response> {
        if token.trim().is_empty() {
            return Err(GatewayError::missing_parameter("token"));
        }
        let envelope = requests::get_express_checkout_details(self.options(), token.trim())?;
        self.api
            .commit("GetExpressCheckoutDetails", envelope, "token")
            .await
    }

    /// Completes a checkout the buyer has approved.
    pub async fn purchase(
        &self,
        amount: impl Into<Amount>,
        options: &ExpressPurchaseOptions,
    ) -> Result<Response> {
        let token = require(&options.token, "token")?;
        let payer_id = require(&options.payer_id, "payer_id")?;
        let amount = amount.into();
        let value = amount.to_decimal_string()?;

        info!(amount = %value, currency = %amount.currency(), "Completing express checkout");
        let envelope = requests::do_express_checkout_payment(
            self.options(),
            &ExpressPayment {
                total: OrderTotal {
                    value: &value,
                    currency: amount.currency().code(),
                },
                token,
                payer_id,
                order_id: options.order_id.as_deref(),
                description: options.description.as_deref(),
            },
        )?;

        self.api
            .commit("DoExpressCheckoutPayment", envelope, "transaction_id")
            .await
    }
}
