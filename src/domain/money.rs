use crate::error::{GatewayError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Currencies the direct payment API accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Cad,
    Eur,
    Gbp,
    Aud,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Cad => "CAD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Aud => "AUD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "CAD" => Ok(Currency::Cad),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "AUD" => Ok(Currency::Aud),
            other => Err(GatewayError::Input(format!("Unsupported currency: {other}"))),
        }
    }
}

/// A currency-tagged amount held in minor units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub cents: i64,
    #[serde(default)]
    pub currency: Currency,
}

impl Money {
    pub fn new(cents: i64) -> Self {
        Self {
            cents,
            currency: Currency::default(),
        }
    }

    pub fn with_currency(cents: i64, currency: Currency) -> Self {
        Self { cents, currency }
    }

    pub fn us_dollar(cents: i64) -> Self {
        Self::with_currency(cents, Currency::Usd)
    }

    pub fn ca_dollar(cents: i64) -> Self {
        Self::with_currency(cents, Currency::Cad)
    }
}

/// Anything the gateway accepts as a charge amount: bare minor units or `Money`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amount {
    MinorUnits(i64),
    Money(Money),
}

impl Amount {
    pub fn cents(&self) -> i64 {
        match self {
            Amount::MinorUnits(cents) => *cents,
            Amount::Money(money) => money.cents,
        }
    }

    pub fn currency(&self) -> Currency {
        match self {
            Amount::MinorUnits(_) => Currency::default(),
            Amount::Money(money) => money.currency,
        }
    }

    /// Renders the amount in the vendor's fixed two-decimal format.
    pub fn to_decimal_string(&self) -> Result<String> {
        let cents = self.cents();
        if cents < 0 {
            return Err(GatewayError::Input(format!(
                "Amount must be a non-negative number of cents, got {cents}"
            )));
        }
        Ok(Decimal::new(cents, 2).to_string())
    }
}

impl From<i64> for Amount {
    fn from(cents: i64) -> Self {
        Amount::MinorUnits(cents)
    }
}

impl From<Money> for Amount {
    fn from(money: Money) -> Self {
        Amount::Money(money)
    }
}

/// Loosely typed amounts, as found in JSON charge requests. Only an integer
/// number of cents or a `{ "cents": .., "currency": .. }` object is accepted.
impl TryFrom<&Value> for Amount {
    type Error = GatewayError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(Amount::MinorUnits).ok_or_else(|| {
                GatewayError::Input(format!(
                    "Amount must be an integer number of cents, got {n}"
                ))
            }),
            Value::Object(_) => serde_json::from_value::<Money>(value.clone())
                .map(Amount::Money)
                .map_err(|e| GatewayError::Input(format!("Invalid money value: {e}"))),
            other => Err(GatewayError::Input(format!(
                "Amount must be a Money object or an integer number of cents, got {other}"
            ))),
        }
    }
}
