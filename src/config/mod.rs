pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_CATALOG_ENDPOINT: &str = "http://localhost:3001/products";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-cart")]
#[command(about = "Price a shopping cart against a product catalog")]
pub struct CliConfig {
    #[arg(long, help = "Catalog URL [default: http://localhost:3001/products]")]
    pub catalog_endpoint: Option<String>,

    #[arg(long = "item", value_delimiter = ',', help = "Item to add, as <product-id>:<quantity>")]
    pub items: Vec<cli::ItemSpec>,

    #[arg(long, help = "Symbol printed before amounts [default: ₹]")]
    pub currency_symbol: Option<String>,

    #[arg(long, help = "Catalog request timeout; waits indefinitely when unset")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "TOML configuration file; flags given explicitly override its values")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn catalog_endpoint(&self) -> &str {
        self.catalog_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_CATALOG_ENDPOINT)
    }

    fn currency_symbol(&self) -> &str {
        self.currency_symbol
            .as_deref()
            .unwrap_or(crate::core::cart::DEFAULT_CURRENCY_SYMBOL)
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("catalog_endpoint", self.catalog_endpoint())?;
        validate_non_empty_string("currency_symbol", self.currency_symbol())?;
        if let Some(secs) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", secs, 1)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Applies the catalog and display flags that were passed explicitly on
    /// top of a file config, and appends the command line items after the
    /// file's items.
    pub fn overlay(&self, mut file: toml_config::TomlConfig) -> toml_config::TomlConfig {
        if let Some(endpoint) = &self.catalog_endpoint {
            file.catalog.endpoint = endpoint.clone();
        }
        if let Some(secs) = self.timeout_seconds {
            file.catalog.timeout_seconds = Some(secs);
        }
        if let Some(symbol) = &self.currency_symbol {
            file.display.currency_symbol = symbol.clone();
        }
        file.items.extend(self.items.iter().cloned());
        file
    }
}
