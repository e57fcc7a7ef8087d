//! Basket Models

use rustc_hash::FxHashSet;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Unit price of an offer, in an ISO currency with an exact decimal amount.
pub type UnitPrice = Money<'static, Currency>;

/// Errors raised while constructing an [`Offer`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OfferError {
    /// The product identifier was empty.
    #[error("offer gtin must not be empty")]
    EmptyGtin,
}

/// Errors raised while constructing a [`Basket`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BasketError {
    /// Two offers share the same product identifier.
    #[error("basket already contains an offer for gtin {0}")]
    DuplicateGtin(String),
}

/// A priced, quantified line item.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    gtin: String,
    quantity: u64,
    unit_price: UnitPrice,
}

impl Offer {
    /// Create a new offer.
    ///
    /// # Errors
    ///
    /// Returns [`OfferError::EmptyGtin`] when `gtin` is empty.
    pub fn new(
        gtin: impl Into<String>,
        quantity: u64,
        unit_price: UnitPrice,
    ) -> Result<Self, OfferError> {
        let gtin = gtin.into();

        if gtin.is_empty() {
            return Err(OfferError::EmptyGtin);
        }

        Ok(Self {
            gtin,
            quantity,
            unit_price,
        })
    }

    /// Product identifier.
    pub fn gtin(&self) -> &str {
        &self.gtin
    }

    /// Number of units.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Price of a single unit.
    pub fn unit_price(&self) -> &UnitPrice {
        &self.unit_price
    }

    /// Returns a copy of this offer with a different quantity.
    #[must_use]
    pub fn with_quantity(&self, quantity: u64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}

/// A customer's or session's basket of offers.
///
/// The owner slot holds the customer id for authenticated baskets and the
/// session id for anonymous ones. Offers keep their insertion order and no
/// two offers share a gtin.
#[derive(Debug, Clone, PartialEq)]
pub struct Basket {
    owner: String,
    facility_service_id: String,
    offers: Vec<Offer>,
}

impl Basket {
    /// Create a new basket.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::DuplicateGtin`] if two offers share a gtin.
    pub fn new(
        owner: impl Into<String>,
        facility_service_id: impl Into<String>,
        offers: impl Into<Vec<Offer>>,
    ) -> Result<Self, BasketError> {
        let offers = offers.into();

        let mut seen = FxHashSet::default();

        for offer in &offers {
            if !seen.insert(offer.gtin()) {
                return Err(BasketError::DuplicateGtin(offer.gtin().to_string()));
            }
        }

        Ok(Self {
            owner: owner.into(),
            facility_service_id: facility_service_id.into(),
            offers,
        })
    }

    /// Owner key (customer or session id).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Facility service the basket was filled against.
    pub fn facility_service_id(&self) -> &str {
        &self.facility_service_id
    }

    /// Offers in insertion order.
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Find the offer for the given gtin.
    pub fn offer(&self, gtin: &str) -> Option<&Offer> {
        self.offers.iter().find(|offer| offer.gtin() == gtin)
    }

    /// Check whether the basket holds an offer for the given gtin.
    pub fn contains(&self, gtin: &str) -> bool {
        self.offer(gtin).is_some()
    }

    /// Get the number of offers in the basket.
    pub fn len(&self) -> usize {
        self.offers.len()
    }

    /// Check if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }

    /// Returns the same basket owned by `owner`.
    #[must_use]
    pub fn rekey(self, owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            ..self
        }
    }

    /// Union of this basket's offers with `other`'s, keyed on gtin.
    ///
    /// This basket's offers come first and win on collision; offers from
    /// `other` are appended in their original order only when their gtin is
    /// not already present. Quantities are never summed. Owner and facility
    /// service are taken from `self`.
    #[must_use]
    pub fn union(self, other: Basket) -> Self {
        let mut gtins: FxHashSet<String> = self
            .offers
            .iter()
            .map(|offer| offer.gtin().to_string())
            .collect();

        let mut offers = self.offers;

        offers.extend(
            other
                .offers
                .into_iter()
                .filter(|offer| gtins.insert(offer.gtin().to_string())),
        );

        Self { offers, ..self }
    }
}
