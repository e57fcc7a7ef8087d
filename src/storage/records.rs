//! Basket Records
//!
//! Serialized form of baskets in a store document:
//!
//! ```yaml
//! baskets:
//!   customer-42:
//!     facility_service_id: DRIVE-01
//!     offers:
//!       - gtin: "3017620422003"
//!         quantity: 2
//!         unit_price: "3.49 EUR"
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::baskets::models::{Basket, BasketError, Offer, OfferError, UnitPrice};

/// Record decoding errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// Price is not of the form `AMOUNT CURRENCY`.
    #[error("invalid price format: {0}")]
    InvalidPrice(String),

    /// Currency code is not an ISO-4217 code.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// An offer record violates offer invariants.
    #[error(transparent)]
    Offer(#[from] OfferError),

    /// A basket record violates basket invariants.
    #[error(transparent)]
    Basket(#[from] BasketError),
}

/// Whole store document, keyed by owner.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreDocument {
    /// Basket records by owner key.
    #[serde(default)]
    pub baskets: BTreeMap<String, BasketRecord>,
}

/// Basket Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketRecord {
    /// Facility service id.
    pub facility_service_id: String,

    /// Offer records in basket order.
    #[serde(default)]
    pub offers: Vec<OfferRecord>,
}

/// Offer Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferRecord {
    /// Product identifier.
    pub gtin: String,

    /// Number of units.
    pub quantity: u64,

    /// Unit price (e.g., "3.49 EUR").
    pub unit_price: String,
}

impl BasketRecord {
    /// Decode this record into the basket owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordError`] if a price cannot be parsed or the offers
    /// break basket invariants.
    pub fn into_basket(self, owner: &str) -> Result<Basket, RecordError> {
        let offers = self
            .offers
            .into_iter()
            .map(|record| {
                let unit_price = parse_price(&record.unit_price)?;

                Ok(Offer::new(record.gtin, record.quantity, unit_price)?)
            })
            .collect::<Result<Vec<_>, RecordError>>()?;

        Ok(Basket::new(owner, self.facility_service_id, offers)?)
    }
}

impl From<&Basket> for BasketRecord {
    fn from(basket: &Basket) -> Self {
        Self {
            facility_service_id: basket.facility_service_id().to_string(),
            offers: basket
                .offers()
                .iter()
                .map(|offer| OfferRecord {
                    gtin: offer.gtin().to_string(),
                    quantity: offer.quantity(),
                    unit_price: format_price(offer.unit_price()),
                })
                .collect(),
        }
    }
}

impl StoreDocument {
    /// Document holding a single basket, used for printing.
    pub fn single(basket: &Basket) -> Self {
        Self {
            baskets: BTreeMap::from([(basket.owner().to_string(), basket.into())]),
        }
    }
}

/// Parse a price string (e.g., "3.49 EUR") into an exact money amount.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a decimal number, or if the currency code is not
/// recognised.
pub fn parse_price(s: &str) -> Result<UnitPrice, RecordError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(RecordError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| RecordError::InvalidPrice(s.to_string()))?;

    let currency = iso::find(currency_code)
        .ok_or_else(|| RecordError::UnknownCurrency(currency_code.to_string()))?;

    Ok(Money::from_decimal(amount, currency))
}

/// Format a price as "AMOUNT CURRENCY", keeping every stored decimal place.
pub fn format_price(price: &UnitPrice) -> String {
    format!("{} {}", price.amount(), price.currency().iso_alpha_code)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{EUR, GBP, USD};
    use testresult::TestResult;

    use crate::test::helpers::{basket, offer};

    use super::*;

    #[test]
    fn parse_price_rejects_invalid_format() {
        for input in ["2.99GBP", "2.99", "2.99 GBP extra", ""] {
            let result = parse_price(input);

            assert!(
                matches!(result, Err(RecordError::InvalidPrice(_))),
                "expected InvalidPrice for {input:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn parse_price_rejects_bad_amount() {
        let result = parse_price("two GBP");

        assert!(matches!(result, Err(RecordError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(RecordError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_keeps_exact_amount() -> TestResult {
        let usd = parse_price("1.00 USD")?;
        let eur = parse_price("0.125 EUR")?;

        assert_eq!(usd.currency(), USD);
        assert_eq!(*usd.amount(), Decimal::new(100, 2));
        assert_eq!(eur.currency(), EUR);
        assert_eq!(*eur.amount(), Decimal::new(125, 3));

        Ok(())
    }

    #[test]
    fn format_price_prints_amount_and_code() {
        let price = Money::from_decimal(Decimal::new(349, 2), GBP);

        assert_eq!(format_price(&price), "3.49 GBP");
    }

    #[test]
    fn basket_record_round_trips_offers_in_order() -> TestResult {
        let original = basket(
            "customer",
            "DRIVE-01",
            vec![offer("563214", 3)?, offer("123456", 1)?],
        )?;

        let decoded = BasketRecord::from(&original).into_basket("customer")?;

        assert_eq!(decoded, original);

        Ok(())
    }

    #[test]
    fn into_basket_rejects_duplicate_gtins() {
        let record = BasketRecord {
            facility_service_id: "DRIVE-01".to_string(),
            offers: vec![
                OfferRecord {
                    gtin: "123456".to_string(),
                    quantity: 1,
                    unit_price: "1.00 EUR".to_string(),
                },
                OfferRecord {
                    gtin: "123456".to_string(),
                    quantity: 2,
                    unit_price: "1.00 EUR".to_string(),
                },
            ],
        };

        let result = record.into_basket("customer");

        assert_eq!(
            result,
            Err(RecordError::Basket(BasketError::DuplicateGtin(
                "123456".to_string()
            )))
        );
    }

    #[test]
    fn into_basket_rejects_empty_gtin() {
        let record = BasketRecord {
            facility_service_id: "DRIVE-01".to_string(),
            offers: vec![OfferRecord {
                gtin: String::new(),
                quantity: 1,
                unit_price: "1.00 EUR".to_string(),
            }],
        };

        let result = record.into_basket("customer");

        assert_eq!(result, Err(RecordError::Offer(OfferError::EmptyGtin)));
    }
}
