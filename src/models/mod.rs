mod catalog;
pub mod errors;
mod transaction;

pub use catalog::{Nature, TypeCatalog, TypeDescriptor};
pub use transaction::{ParsedBatch, ParsedTransaction};
