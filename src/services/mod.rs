// Service exports
pub mod catalog;

pub use catalog::{ListingCatalog, CatalogError};
