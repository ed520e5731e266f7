pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http_catalog::HttpCatalogClient;
pub use config::{cli::ItemSpec, toml_config::TomlConfig};
pub use crate::core::{cart::ShoppingCart, snapshot::CartSnapshot};
pub use domain::model::{AddOutcome, LineItem, SkipReason, Totals, TAX_RATE};
pub use domain::ports::{CatalogClient, ConfigProvider, PriceLookup};
pub use utils::error::{CartError, CatalogError, Result};
