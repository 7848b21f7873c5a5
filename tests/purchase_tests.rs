mod common;

use common::{
    credit_card, declined_purchase_response, gateway_with, purchase_options,
    successful_purchase_response,
};
use paypal_gateway::GatewayError;
use paypal_gateway::config::TEST_ENDPOINT;
use paypal_gateway::domain::money::Money;
use paypal_gateway::domain::options::PurchaseOptions;
use paypal_gateway::infrastructure::stub::StubReply;

#[tokio::test]
async fn test_no_ip_address() {
    let (gateway, transport) = gateway_with(&[successful_purchase_response()]);
    let options = PurchaseOptions {
        ip: None,
        ..purchase_options()
    };

    for number in ["4242424242424242", "1", "2", "3"] {
        let err = gateway
            .purchase(Money::ca_dollar(100), &credit_card(number), &options)
            .await
            .unwrap_err();
        assert!(err.is_input(), "card {number}: {err}");
        assert_eq!(err.to_string(), "Missing required parameter: ip");
    }
    assert_eq!(transport.request_count().await, 0);
}

#[tokio::test]
async fn test_purchase_success() {
    let (gateway, _) = gateway_with(&[]);

    let response = gateway
        .purchase(Money::ca_dollar(100), &credit_card("1"), &purchase_options())
        .await
        .unwrap();
    assert_eq!(response.param("receiptid"), Some("#0001"));
    assert!(response.success());
    assert!(response.test());
}

#[tokio::test]
async fn test_purchase_error() {
    let (gateway, _) = gateway_with(&[]);

    let response = gateway
        .purchase(Money::ca_dollar(100), &credit_card("2"), &purchase_options())
        .await
        .unwrap();
    assert_eq!(response.param("receiptid"), Some("#0001"));
    assert!(!response.success());
}

#[tokio::test]
async fn test_purchase_exceptions() {
    let (gateway, _) = gateway_with(&[]);

    let err = gateway
        .purchase(Money::ca_dollar(100), &credit_card("3"), &purchase_options())
        .await
        .unwrap_err();
    assert!(!err.is_input());
    assert!(matches!(err, GatewayError::Protocol(_)));
}

#[tokio::test]
async fn test_approved_by_vendor() {
    let (gateway, transport) = gateway_with(&[successful_purchase_response()]);

    let response = gateway
        .purchase(
            Money::ca_dollar(100),
            &credit_card("4242424242424242"),
            &purchase_options(),
        )
        .await
        .unwrap();

    assert!(response.success());
    assert_eq!(response.message(), "Success");
    assert_eq!(response.param("transaction_id"), Some("62U664727W5914806"));
    assert_eq!(response.authorization(), Some("62U664727W5914806"));
    assert_eq!(response.param("avs_code"), Some("X"));
    assert_eq!(response.param("cvv2_code"), Some("M"));

    let requests = transport.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, TEST_ENDPOINT);
}

#[tokio::test]
async fn test_declined_by_vendor() {
    let (gateway, _) = gateway_with(&[declined_purchase_response()]);

    let response = gateway
        .purchase(
            Money::ca_dollar(100),
            &credit_card("4242424242424242"),
            &purchase_options(),
        )
        .await
        .unwrap();

    assert!(!response.success());
    assert_eq!(response.param("transaction_id"), Some("62U664727W5914807"));
    assert_eq!(response.param("error_code"), Some("10527"));
    assert_eq!(
        response.message(),
        "This transaction cannot be processed. Please enter a valid credit card number and type."
    );
}

#[tokio::test]
async fn test_request_carries_credentials_amount_card_and_owner() {
    let (gateway, transport) = gateway_with(&[successful_purchase_response()]);
    let options = PurchaseOptions {
        email: Some("longbob@example.com".to_string()),
        ..purchase_options()
    };

    gateway
        .purchase(
            Money::ca_dollar(1034),
            &credit_card("4242424242424242"),
            &options,
        )
        .await
        .unwrap();

    let body = &transport.requests().await[0].body;
    assert!(body.contains("<n1:Username>cody</n1:Username>"));
    assert!(body.contains("<n1:Password>test</n1:Password>"));
    assert!(body.contains("<n2:OrderTotal currencyID=\"CAD\">10.34</n2:OrderTotal>"));
    assert!(body.contains("<n2:CreditCardNumber>4242424242424242</n2:CreditCardNumber>"));
    assert!(body.contains("<n2:FirstName>Longbob</n2:FirstName>"));
    assert!(body.contains("<n2:Payer>longbob@example.com</n2:Payer>"));
    assert!(body.contains("<n2:PayerBusiness>Widgets Inc</n2:PayerBusiness>"));
    assert!(body.contains("<n2:Street2>Apt 1</n2:Street2>"));
    assert!(body.contains("<n2:Country>CA</n2:Country>"));
    assert!(body.contains("<n2:IPAddress>127.0.0.1</n2:IPAddress>"));
}

#[tokio::test]
async fn test_malformed_response_is_not_a_decline() {
    let (gateway, _) = gateway_with(&["<html>502 Bad Gateway</html>", "<Envelope><Body>"]);
    let card = credit_card("4242424242424242");

    let err = gateway
        .purchase(100i64, &card, &purchase_options())
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Protocol(_)));

    let err = gateway
        .purchase(100i64, &card, &purchase_options())
        .await
        .unwrap_err();
    assert!(!err.is_input());
}

#[tokio::test]
async fn test_transport_timeout_surfaces_as_error() {
    let (gateway, transport) = gateway_with(&[]);
    transport.push_reply(StubReply::Timeout).await;

    let err = gateway
        .purchase(
            100i64,
            &credit_card("4242424242424242"),
            &purchase_options(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Timeout(_)));
    assert!(err.is_retryable());
}
