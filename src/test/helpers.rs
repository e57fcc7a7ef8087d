//! Test Helpers

use rusty_money::{Money, iso::EUR};

use crate::domain::baskets::models::{Basket, BasketError, Offer, OfferError};

pub(crate) const CUSTOMER_ID: &str = "customerId";
pub(crate) const SESSION_ID: &str = "sessionId";

/// An offer priced at 1.99 EUR.
pub(crate) fn offer(gtin: &str, quantity: u64) -> Result<Offer, OfferError> {
    Offer::new(gtin, quantity, Money::from_minor(1_99, EUR))
}

pub(crate) fn basket(
    owner: &str,
    facility_service_id: &str,
    offers: Vec<Offer>,
) -> Result<Basket, BasketError> {
    Basket::new(owner, facility_service_id, offers)
}
