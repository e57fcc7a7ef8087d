//! Basket storage adapters.

mod errors;
pub mod file;
pub mod memory;
pub mod records;

pub use errors::StorageError;
pub use file::FileBasketsRepository;
pub use memory::InMemoryBasketsRepository;
