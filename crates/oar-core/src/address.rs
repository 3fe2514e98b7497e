//! Postal addresses as they appear in the order report.

use std::fmt;

use serde_json::Value;

use crate::error::{value_kind, Error};

/// One postal address from a `FulfillmentData` or `BillingData` block.
///
/// Every field is optional: the report omits whatever the marketplace has
/// no value for, and present-but-empty strings are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressRecord {
    pub name: Option<String>,
    pub field_one: Option<String>,
    pub field_two: Option<String>,
    pub field_three: Option<String>,
    pub city: Option<String>,
    pub state_or_region: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub phone_number: Option<String>,
}

impl AddressRecord {
    /// Build from a raw address map. Fails unless the value is a map; an
    /// empty map is fine and yields an all-`None` record.
    pub fn from_raw(raw: &Value) -> Result<Self, Error> {
        let Value::Object(map) = raw else {
            return Err(Error::InvalidInput {
                expected: "address",
                found: value_kind(raw),
            });
        };
        let field = |key: &str| map.get(key).and_then(Value::as_str).map(str::to_owned);
        Ok(Self {
            name: field("Name"),
            field_one: field("AddressFieldOne"),
            field_two: field("AddressFieldTwo"),
            field_three: field("AddressFieldThree"),
            city: field("City"),
            state_or_region: field("StateOrRegion"),
            postal_code: field("PostalCode"),
            country_code: field("CountryCode"),
            phone_number: field("PhoneNumber"),
        })
    }
}

impl fmt::Display for AddressRecord {
    /// One-line postal form: name and street lines, then
    /// "City Region Postal", then the country code. Absent and empty parts
    /// are skipped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments: Vec<String> = Vec::new();
        for part in [&self.name, &self.field_one, &self.field_two, &self.field_three] {
            if let Some(text) = part.as_deref().filter(|t| !t.is_empty()) {
                segments.push(text.to_owned());
            }
        }
        let locality: Vec<&str> = [&self.city, &self.state_or_region, &self.postal_code]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|t| !t.is_empty())
            .collect();
        if !locality.is_empty() {
            segments.push(locality.join(" "));
        }
        if let Some(country) = self.country_code.as_deref().filter(|t| !t.is_empty()) {
            segments.push(country.to_owned());
        }
        write!(f, "{}", segments.join(", "))
    }
}
