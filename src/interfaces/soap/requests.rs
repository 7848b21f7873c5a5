//! SOAP request envelopes for the direct payment and Express Checkout APIs.
//!
//! Each action is a serde struct rendered with `quick_xml::se`. The two wrapper
//! elements every action needs (`{Action}Req` and `{Action}Request`) are named
//! through the `Action` trait.

use crate::domain::address::Address;
use crate::domain::credit_card::CreditCard;
use crate::domain::options::GatewayOptions;
use crate::error::Result;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

pub const API_VERSION: &str = "52.0";
pub const BUTTON_SOURCE: &str = "PayPalGatewayRust";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";
const ENV_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";
const PAYPAL_NAMESPACE: &str = "urn:ebay:api:PayPalAPI";
const EBAY_NAMESPACE: &str = "urn:ebay:apis:eBLBaseComponents";
const PAYMENT_ACTION: &str = "Sale";

/// An amount already rendered in vendor format, with its currency code.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OrderTotal<'a> {
    #[serde(rename = "@currencyID")]
    pub currency: &'a str,
    #[serde(rename = "$text")]
    pub value: &'a str,
}

pub struct DirectPayment<'a> {
    pub total: OrderTotal<'a>,
    pub card: &'a CreditCard,
    pub address: Option<&'a Address>,
    pub email: Option<&'a str>,
    pub ip: &'a str,
    pub order_id: Option<&'a str>,
    pub description: Option<&'a str>,
}

pub struct ExpressSetup<'a> {
    pub total: OrderTotal<'a>,
    pub return_url: &'a str,
    pub cancel_return_url: &'a str,
    pub order_id: Option<&'a str>,
    pub description: Option<&'a str>,
    pub email: Option<&'a str>,
    pub no_shipping: bool,
}

pub struct ExpressPayment<'a> {
    pub total: OrderTotal<'a>,
    pub token: &'a str,
    pub payer_id: &'a str,
    pub order_id: Option<&'a str>,
    pub description: Option<&'a str>,
}

/// An API call body; names its `{Action}Req` and `{Action}Request` wrappers.
trait Action: Serialize {
    const REQ: &'static str;
    const REQUEST: &'static str;
}

#[derive(Serialize)]
#[serde(rename = "env:Envelope", bound(serialize = "A: Action"))]
struct Envelope<'a, A> {
    #[serde(rename = "@xmlns:xsi")]
    xsi: &'static str,
    #[serde(rename = "@xmlns:xsd")]
    xsd: &'static str,
    #[serde(rename = "@xmlns:env")]
    env: &'static str,
    #[serde(rename = "env:Header")]
    header: Header<'a>,
    #[serde(rename = "env:Body")]
    body: Body<A>,
}

#[derive(Serialize)]
struct Header<'a> {
    #[serde(rename = "RequesterCredentials")]
    requester_credentials: RequesterCredentials<'a>,
}

#[derive(Serialize)]
struct RequesterCredentials<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "@xmlns:n1")]
    n1: &'static str,
    #[serde(rename = "@env:mustUnderstand")]
    must_understand: &'static str,
    #[serde(rename = "n1:Credentials")]
    credentials: Credentials<'a>,
}

#[derive(Serialize)]
struct Credentials<'a> {
    #[serde(rename = "n1:Username")]
    username: &'a str,
    #[serde(rename = "n1:Password")]
    password: &'a str,
    #[serde(rename = "n1:Subject")]
    subject: Empty,
}

#[derive(Serialize)]
struct Empty {}

struct Body<A>(A);

impl<A: Action> Serialize for Body<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut body = serializer.serialize_struct("Body", 1)?;
        body.serialize_field(A::REQ, &Req(&self.0))?;
        body.end()
    }
}

struct Req<'r, A>(&'r A);

impl<A: Action> Serialize for Req<'_, A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut req = serializer.serialize_struct("Req", 2)?;
        req.serialize_field("@xmlns", PAYPAL_NAMESPACE)?;
        req.serialize_field(A::REQUEST, self.0)?;
        req.end()
    }
}

#[derive(Serialize)]
struct DoDirectPaymentRequest<'a> {
    #[serde(rename = "@xmlns:n2")]
    xmlns: &'static str,
    #[serde(rename = "n2:Version")]
    version: &'static str,
    #[serde(rename = "n2:DoDirectPaymentRequestDetails")]
    details: DirectPaymentDetails<'a>,
}

impl Action for DoDirectPaymentRequest<'_> {
    const REQ: &'static str = "DoDirectPaymentReq";
    const REQUEST: &'static str = "DoDirectPaymentRequest";
}

#[derive(Serialize)]
struct DirectPaymentDetails<'a> {
    #[serde(rename = "n2:PaymentAction")]
    payment_action: &'static str,
    #[serde(rename = "n2:PaymentDetails")]
    payment_details: PaymentDetails<'a>,
    #[serde(rename = "n2:CreditCard")]
    credit_card: CreditCardDetails<'a>,
    #[serde(rename = "n2:IPAddress")]
    ip_address: &'a str,
}

#[derive(Serialize)]
struct PaymentDetails<'a> {
    #[serde(rename = "n2:OrderTotal")]
    order_total: OrderTotal<'a>,
    #[serde(rename = "n2:OrderDescription", skip_serializing_if = "Option::is_none")]
    order_description: Option<&'a str>,
    #[serde(rename = "n2:InvoiceID", skip_serializing_if = "Option::is_none")]
    invoice_id: Option<&'a str>,
    #[serde(rename = "n2:ButtonSource")]
    button_source: &'static str,
}

impl<'a> PaymentDetails<'a> {
    fn new(total: OrderTotal<'a>, description: Option<&'a str>, order_id: Option<&'a str>) -> Self {
        Self {
            order_total: total,
            order_description: description,
            invoice_id: order_id,
            button_source: BUTTON_SOURCE,
        }
    }
}

#[derive(Serialize)]
struct CreditCardDetails<'a> {
    #[serde(rename = "n2:CreditCardType", skip_serializing_if = "Option::is_none")]
    card_type: Option<&'static str>,
    #[serde(rename = "n2:CreditCardNumber")]
    number: &'a str,
    #[serde(rename = "n2:ExpMonth")]
    exp_month: String,
    #[serde(rename = "n2:ExpYear")]
    exp_year: u16,
    #[serde(rename = "n2:CVV2", skip_serializing_if = "Option::is_none")]
    cvv2: Option<&'a str>,
    #[serde(rename = "n2:CardOwner")]
    card_owner: CardOwner<'a>,
}

#[derive(Serialize)]
struct CardOwner<'a> {
    #[serde(rename = "n2:Payer", skip_serializing_if = "Option::is_none")]
    payer: Option<&'a str>,
    #[serde(rename = "n2:PayerName")]
    payer_name: PayerName<'a>,
    #[serde(rename = "n2:PayerBusiness", skip_serializing_if = "Option::is_none")]
    payer_business: Option<&'a str>,
    #[serde(rename = "n2:Address", skip_serializing_if = "Option::is_none")]
    address: Option<AddressDetails<'a>>,
}

#[derive(Serialize)]
struct PayerName<'a> {
    #[serde(rename = "n2:FirstName")]
    first_name: &'a str,
    #[serde(rename = "n2:LastName")]
    last_name: &'a str,
}

#[derive(Serialize)]
struct AddressDetails<'a> {
    #[serde(rename = "n2:Street1", skip_serializing_if = "Option::is_none")]
    street1: Option<&'a str>,
    #[serde(rename = "n2:Street2", skip_serializing_if = "Option::is_none")]
    street2: Option<&'a str>,
    #[serde(rename = "n2:CityName", skip_serializing_if = "Option::is_none")]
    city_name: Option<&'a str>,
    #[serde(rename = "n2:StateOrProvince", skip_serializing_if = "Option::is_none")]
    state_or_province: Option<&'a str>,
    #[serde(rename = "n2:Country", skip_serializing_if = "Option::is_none")]
    country: Option<String>,
    #[serde(rename = "n2:PostalCode", skip_serializing_if = "Option::is_none")]
    postal_code: Option<&'a str>,
    #[serde(rename = "n2:Phone", skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
}

impl<'a> From<&'a Address> for AddressDetails<'a> {
    fn from(address: &'a Address) -> Self {
        Self {
            street1: address.address1.as_deref(),
            street2: address.address2.as_deref(),
            city_name: address.city.as_deref(),
            state_or_province: address.state.as_deref(),
            country: address.country_code(),
            postal_code: address.zip.as_deref(),
            phone: address.phone.as_deref(),
        }
    }
}

#[derive(Serialize)]
struct SetExpressCheckoutRequest<'a> {
    #[serde(rename = "@xmlns:n2")]
    xmlns: &'static str,
    #[serde(rename = "n2:Version")]
    version: &'static str,
    #[serde(rename = "n2:SetExpressCheckoutRequestDetails")]
    details: ExpressSetupDetails<'a>,
}

impl Action for SetExpressCheckoutRequest<'_> {
    const REQ: &'static str = "SetExpressCheckoutReq";
    const REQUEST: &'static str = "SetExpressCheckoutRequest";
}

#[derive(Serialize)]
struct ExpressSetupDetails<'a> {
    #[serde(rename = "n2:PaymentAction")]
    payment_action: &'static str,
    #[serde(rename = "n2:OrderTotal")]
    order_total: OrderTotal<'a>,
    #[serde(rename = "n2:ReturnURL")]
    return_url: &'a str,
    #[serde(rename = "n2:CancelURL")]
    cancel_url: &'a str,
    #[serde(rename = "n2:NoShipping")]
    no_shipping: &'static str,
    #[serde(rename = "n2:OrderDescription", skip_serializing_if = "Option::is_none")]
    order_description: Option<&'a str>,
    #[serde(rename = "n2:InvoiceID", skip_serializing_if = "Option::is_none")]
    invoice_id: Option<&'a str>,
    #[serde(rename = "n2:BuyerEmail", skip_serializing_if = "Option::is_none")]
    buyer_email: Option<&'a str>,
}

#[derive(Serialize)]
struct GetExpressCheckoutDetailsRequest<'a> {
    #[serde(rename = "@xmlns:n2")]
    xmlns: &'static str,
    #[serde(rename = "n2:Version")]
    version: &'static str,
    #[serde(rename = "Token")]
    token: &'a str,
}

impl Action for GetExpressCheckoutDetailsRequest<'_> {
    const REQ: &'static str = "GetExpressCheckoutDetailsReq";
    const REQUEST: &'static str = "GetExpressCheckoutDetailsRequest";
}

#[derive(Serialize)]
struct DoExpressCheckoutPaymentRequest<'a> {
    #[serde(rename = "@xmlns:n2")]
    xmlns: &'static str,
    #[serde(rename = "n2:Version")]
    version: &'static str,
    #[serde(rename = "n2:DoExpressCheckoutPaymentRequestDetails")]
    details: ExpressPaymentDetails<'a>,
}

impl Action for DoExpressCheckoutPaymentRequest<'_> {
    const REQ: &'static str = "DoExpressCheckoutPaymentReq";
    const REQUEST: &'static str = "DoExpressCheckoutPaymentRequest";
}

#[derive(Serialize)]
struct ExpressPaymentDetails<'a> {
    #[serde(rename = "n2:PaymentAction")]
    payment_action: &'static str,
    #[serde(rename = "n2:Token")]
    token: &'a str,
    #[serde(rename = "n2:PayerID")]
    payer_id: &'a str,
    #[serde(rename = "n2:PaymentDetails")]
    payment_details: PaymentDetails<'a>,
}

/// Wraps an action in the SOAP envelope carrying the API credentials.
fn render<A: Action>(options: &GatewayOptions, action: A) -> Result<String> {
    let envelope = Envelope {
        xsi: XSI_NAMESPACE,
        xsd: XSD_NAMESPACE,
        env: ENV_NAMESPACE,
        header: Header {
            requester_credentials: RequesterCredentials {
                xmlns: PAYPAL_NAMESPACE,
                n1: EBAY_NAMESPACE,
                must_understand: "0",
                credentials: Credentials {
                    username: &options.login,
                    password: &options.password,
                    subject: Empty {},
                },
            },
        },
        body: Body(action),
    };
    Ok(format!(
        "{XML_DECLARATION}{}",
        quick_xml::se::to_string(&envelope)?
    ))
}

pub fn direct_payment(options: &GatewayOptions, request: &DirectPayment<'_>) -> Result<String> {
    let card = request.card;
    render(
        options,
        DoDirectPaymentRequest {
            xmlns: EBAY_NAMESPACE,
            version: API_VERSION,
            details: DirectPaymentDetails {
                payment_action: PAYMENT_ACTION,
                payment_details: PaymentDetails::new(
                    request.total,
                    request.description,
                    request.order_id,
                ),
                credit_card: CreditCardDetails {
                    card_type: card.card_type().map(|t| t.vendor_name()),
                    number: &card.number,
                    exp_month: card.padded_month(),
                    exp_year: card.year,
                    cvv2: card.verification_value.as_deref(),
                    card_owner: CardOwner {
                        payer: request.email,
                        payer_name: PayerName {
                            first_name: &card.first_name,
                            last_name: &card.last_name,
                        },
                        payer_business: request.address.and_then(|a| a.company.as_deref()),
                        address: request.address.map(AddressDetails::from),
                    },
                },
                ip_address: request.ip,
            },
        },
    )
}

pub fn set_express_checkout(options: &GatewayOptions, request: &ExpressSetup<'_>) -> Result<String> {
    render(
        options,
        SetExpressCheckoutRequest {
            xmlns: EBAY_NAMESPACE,
            version: API_VERSION,
            details: ExpressSetupDetails {
                payment_action: PAYMENT_ACTION,
                order_total: request.total,
                return_url: request.return_url,
                cancel_url: request.cancel_return_url,
                no_shipping: if request.no_shipping { "1" } else { "0" },
                order_description: request.description,
                invoice_id: request.order_id,
                buyer_email: request.email,
            },
        },
    )
}

pub fn get_express_checkout_details(options: &GatewayOptions, token: &str) -> Result<String> {
    render(
        options,
        GetExpressCheckoutDetailsRequest {
            xmlns: EBAY_NAMESPACE,
            version: API_VERSION,
            token,
        },
    )
}

pub fn do_express_checkout_payment(
    options: &GatewayOptions,
    request: &ExpressPayment<'_>,
) -> Result<String> {
    render(
        options,
        DoExpressCheckoutPaymentRequest {
            xmlns: EBAY_NAMESPACE,
            version: API_VERSION,
            details: ExpressPaymentDetails {
                payment_action: PAYMENT_ACTION,
                token: request.token,
                payer_id: request.payer_id,
                payment_details: PaymentDetails::new(
                    request.total,
                    request.description,
                    request.order_id,
                ),
            },
        },
    )
}
