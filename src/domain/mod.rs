//! Basket Merge Domain Concerns

pub mod baskets;
