use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

const COUNTRY_CODES: &[(&str, &str)] = &[
    ("australia", "AU"),
    ("austria", "AT"),
    ("belgium", "BE"),
    ("brazil", "BR"),
    ("canada", "CA"),
    ("denmark", "DK"),
    ("finland", "FI"),
    ("france", "FR"),
    ("germany", "DE"),
    ("ireland", "IE"),
    ("italy", "IT"),
    ("japan", "JP"),
    ("mexico", "MX"),
    ("netherlands", "NL"),
    ("new zealand", "NZ"),
    ("norway", "NO"),
    ("spain", "ES"),
    ("sweden", "SE"),
    ("switzerland", "CH"),
    ("united kingdom", "GB"),
    ("united states", "US"),
    ("united states of america", "US"),
];

impl Address {
    /// ISO 3166 alpha-2 code for the country, as the vendor expects it.
    pub fn country_code(&self) -> Option<String> {
        let country = self.country.as_deref()?.trim();
        if country.len() == 2 {
            return Some(country.to_ascii_uppercase());
        }
        let lower = country.to_lowercase();
        let code = COUNTRY_CODES
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, code)| code.to_string());
        Some(code.unwrap_or_else(|| country.to_string()))
    }
}
