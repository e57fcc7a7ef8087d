//! Baskets

pub mod data;
pub mod errors;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::BasketsServiceError;
pub use repository::{BasketsRepository, MockBasketsRepository};
pub use service::*;
