//! Catalog store adapters.

mod store;

pub use store::{CatalogStore, FsCatalogStore};
