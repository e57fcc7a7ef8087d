//! Basket Merge
//!
//! Reconciles a session's anonymous basket with a customer's basket when the
//! customer logs in: one basket's identity and content survive, the other's
//! offers can be unioned in by gtin, and the session basket is removed.

pub mod config;
pub mod context;
pub mod domain;
pub mod observability;
pub mod storage;

#[cfg(test)]
mod test;
