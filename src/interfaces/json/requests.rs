use crate::domain::credit_card::CreditCard;
use crate::domain::money::Amount;
use crate::domain::options::{ExpressPurchaseOptions, ExpressSetupOptions, PurchaseOptions};
use crate::error::{GatewayError, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::io::Read;

/// A direct card charge as read from JSON.
///
/// `amount` stays loosely typed so that a string or float is reported as an
/// amount error rather than a generic parse failure.
#[derive(Debug, Deserialize)]
pub struct ChargeRequest {
    pub amount: Value,
    pub card: CreditCard,
    #[serde(flatten)]
    pub options: PurchaseOptions,
}

#[derive(Debug, Deserialize)]
pub struct ExpressSetupRequest {
    pub amount: Value,
    #[serde(flatten)]
    pub options: ExpressSetupOptions,
}

#[derive(Debug, Deserialize)]
pub struct ExpressPurchaseRequest {
    pub amount: Value,
    #[serde(flatten)]
    pub options: ExpressPurchaseOptions,
}

macro_rules! amount_accessor {
    ($($request:ty),*) => {
        $(impl $request {
            pub fn amount(&self) -> Result<Amount> {
                Amount::try_from(&self.amount)
            }
        })*
    };
}

amount_accessor!(ChargeRequest, ExpressSetupRequest, ExpressPurchaseRequest);

pub struct RequestReader<R: Read> {
    source: R,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn read<T: DeserializeOwned>(self) -> Result<T> {
        serde_json::from_reader(self.source)
            .map_err(|e| GatewayError::Input(format!("Invalid request: {e}")))
    }
}
