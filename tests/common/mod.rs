use paypal_gateway::PaypalGateway;
use paypal_gateway::config::GatewayDefaults;
use paypal_gateway::domain::address::Address;
use paypal_gateway::domain::credit_card::CreditCard;
use paypal_gateway::domain::options::{Credentials, PurchaseOptions};
use paypal_gateway::infrastructure::stub::StubTransport;
use std::sync::Arc;

pub fn address() -> Address {
    Address {
        address1: Some("1234 My Street".to_string()),
        address2: Some("Apt 1".to_string()),
        company: Some("Widgets Inc".to_string()),
        city: Some("Ottawa".to_string()),
        state: Some("ON".to_string()),
        zip: Some("K1C2N6".to_string()),
        country: Some("Canada".to_string()),
        phone: Some("(555)555-5555".to_string()),
    }
}

pub fn credit_card(number: &str) -> CreditCard {
    CreditCard::new(number, 8, 2006, "Longbob", "Longsen")
}

pub fn purchase_options() -> PurchaseOptions {
    PurchaseOptions {
        ip: Some("127.0.0.1".to_string()),
        order_id: Some("1".to_string()),
        address: Some(address()),
        ..Default::default()
    }
}

/// A test-mode gateway over a stub transport; the returned stub shares its queues.
pub fn gateway_with(replies: &[&str]) -> (PaypalGateway, StubTransport) {
    let transport = StubTransport::with_replies(replies.iter().copied());
    let gateway = PaypalGateway::new(
        Credentials::new("cody", "test").with_pem(""),
        &GatewayDefaults::default(),
        Arc::new(transport.clone()),
    )
    .unwrap();
    (gateway, transport)
}

pub fn successful_purchase_response() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xmlns:ebl="urn:ebay:apis:eBLBaseComponents">
  <SOAP-ENV:Header>
    <Security xmlns="http://schemas.xmlsoap.org/ws/2002/12/secext" xsi:type="wsse:SecurityType"/>
    <RequesterCredentials xmlns="urn:ebay:api:PayPalAPI" xsi:type="ebl:CustomSecurityHeaderType">
      <Credentials xmlns="urn:ebay:apis:eBLBaseComponents" xsi:type="ebl:UserIdPasswordType">
        <Username xsi:type="xs:string"/>
        <Password xsi:type="xs:string"/>
        <Subject xsi:type="xs:string"/>
      </Credentials>
    </RequesterCredentials>
  </SOAP-ENV:Header>
  <SOAP-ENV:Body id="_0">
    <DoDirectPaymentResponse xmlns="urn:ebay:api:PayPalAPI">
      <Timestamp xmlns="urn:ebay:apis:eBLBaseComponents">2006-08-01T20:13:57Z</Timestamp>
      <Ack xmlns="urn:ebay:apis:eBLBaseComponents">Success</Ack>
      <CorrelationID xmlns="urn:ebay:apis:eBLBaseComponents">2e2e3c2a0b5a5</CorrelationID>
      <Version xmlns="urn:ebay:apis:eBLBaseComponents">52.000000</Version>
      <Build xmlns="urn:ebay:apis:eBLBaseComponents">1.0006</Build>
      <Amount xsi:type="cc:BasicAmountType" currencyID="CAD">1.00</Amount>
      <AVSCode xsi:type="xs:string">X</AVSCode>
      <CVV2Code xsi:type="xs:string">M</CVV2Code>
      <TransactionID>62U664727W5914806</TransactionID>
    </DoDirectPaymentResponse>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#
}

pub fn declined_purchase_response() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <SOAP-ENV:Body id="_0">
    <DoDirectPaymentResponse xmlns="urn:ebay:api:PayPalAPI">
      <Ack xmlns="urn:ebay:apis:eBLBaseComponents">Failure</Ack>
      <Errors xmlns="urn:ebay:apis:eBLBaseComponents" xsi:type="ebl:ErrorType">
        <ShortMessage xsi:type="xs:string">Invalid Data</ShortMessage>
        <LongMessage xsi:type="xs:string">This transaction cannot be processed. Please enter a valid credit card number and type.</LongMessage>
        <ErrorCode xsi:type="xs:token">10527</ErrorCode>
        <SeverityCode xsi:type="ebl:SeverityCodeType">Error</SeverityCode>
      </Errors>
      <Amount currencyID="CAD">1.00</Amount>
      <TransactionID>62U664727W5914807</TransactionID>
    </DoDirectPaymentResponse>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#
}

pub fn paypal_timeout_error_response() -> &'static str {
    r#"<?xml version='1.0' encoding='UTF-8'?>
<SOAP-ENV:Envelope xmlns:cc='urn:ebay:apis:CoreComponentTypes' xmlns:sizeship='urn:ebay:api:PayPalAPI/sizeship.xsd' xmlns:SOAP-ENV='http://schemas.xmlsoap.org/soap/envelope/' xmlns:SOAP-ENC='http://schemas.xmlsoap.org/soap/encoding/' xmlns:saml='urn:oasis:names:tc:SAML:1.0:assertion' xmlns:xsi='http://www.w3.org/2001/XMLSchema-instance' xmlns:wsu='http://schemas.xmlsoap.org/ws/2002/07/utility' xmlns:ebl='urn:ebay:apis:eBLBaseComponents' xmlns:ds='http://www.w3.org/2000/09/xmldsig#' xmlns:xs='http://www.w3.org/2001/XMLSchema' xmlns:ns='urn:ebay:api:PayPalAPI' xmlns:market='urn:ebay:apis:Market' xmlns:ship='urn:ebay:apis:ship' xmlns:auction='urn:ebay:apis:Auction' xmlns:wsse='http://schemas.xmlsoap.org/ws/2002/12/secext' xmlns:xsd='http://www.w3.org/2001/XMLSchema'>
  <SOAP-ENV:Header>
    <Security xsi:type='wsse:SecurityType' xmlns='http://schemas.xmlsoap.org/ws/2002/12/secext'/>
    <RequesterCredentials xsi:type='ebl:CustomSecurityHeaderType' xmlns='urn:ebay:api:PayPalAPI'>
      <Credentials xsi:type='ebl:UserIdPasswordType' xmlns='urn:ebay:apis:eBLBaseComponents'>
        <Username xsi:type='xs:string'/>
        <Password xsi:type='xs:string'/>
        <Subject xsi:type='xs:string'/>
      </Credentials>
    </RequesterCredentials>
  </SOAP-ENV:Header>
  <SOAP-ENV:Body id='_0'>
    <SOAP-ENV:Fault>
      <faultcode>SOAP-ENV:Server</faultcode>
      <faultstring>Internal error</faultstring>
      <detail>Timeout processing request</detail>
    </SOAP-ENV:Fault>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#
}

pub fn express_setup_response() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
  <SOAP-ENV:Body id="_0">
    <SetExpressCheckoutResponse xmlns="urn:ebay:api:PayPalAPI">
      <Ack xmlns="urn:ebay:apis:eBLBaseComponents">Success</Ack>
      <Token>EC-6WS104951Y388951L</Token>
    </SetExpressCheckoutResponse>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#
}

pub fn express_details_response() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
  <SOAP-ENV:Body id="_0">
    <GetExpressCheckoutDetailsResponse xmlns="urn:ebay:api:PayPalAPI">
      <Ack xmlns="urn:ebay:apis:eBLBaseComponents">Success</Ack>
      <GetExpressCheckoutDetailsResponseDetails xmlns="urn:ebay:apis:eBLBaseComponents">
        <Token>EC-6WS104951Y388951L</Token>
        <PayerInfo>
          <Payer>buyer@example.com</Payer>
          <PayerID>FWRVKNRRZ3WUC</PayerID>
          <PayerStatus>verified</PayerStatus>
          <PayerName>
            <FirstName>Fred</FirstName>
            <LastName>Brooks</LastName>
          </PayerName>
          <PayerCountry>US</PayerCountry>
        </PayerInfo>
      </GetExpressCheckoutDetailsResponseDetails>
    </GetExpressCheckoutDetailsResponse>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#
}
