pub mod cart;
pub mod snapshot;

pub use crate::domain::model::{AddOutcome, LineItem, SkipReason, Totals};
pub use crate::domain::ports::{CatalogClient, ConfigProvider, PriceLookup};
pub use crate::utils::error::Result;
