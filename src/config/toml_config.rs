use crate::config::cli::ItemSpec;
use crate::config::DEFAULT_CATALOG_ENDPOINT;
use crate::core::cart::DEFAULT_CURRENCY_SYMBOL;
use crate::core::ConfigProvider;
use crate::utils::error::{CartError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Cart settings read from a TOML file.
///
/// ```toml
/// [catalog]
/// endpoint = "http://localhost:3001/products"
/// timeout_seconds = 10
///
/// [display]
/// currency_symbol = "₹"
///
/// [[items]]
/// product_id = "cornflakes"
/// quantity = 2
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_endpoint() -> String {
    DEFAULT_CATALOG_ENDPOINT.to_string()
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl TomlConfig {
    /// Reads and validates a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading cart config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("catalog.endpoint", &self.catalog.endpoint)?;
        validate_non_empty_string("display.currency_symbol", &self.display.currency_symbol)?;
        if let Some(secs) = self.catalog.timeout_seconds {
            validate_positive_number("catalog.timeout_seconds", secs, 1)?;
        }
        for item in &self.items {
            validate_non_empty_string("items.product_id", &item.product_id)?;
            if item.quantity == 0 {
                return Err(CartError::InvalidQuantity {
                    product_id: item.product_id.clone(),
                });
            }
        }
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn catalog_endpoint(&self) -> &str {
        &self.catalog.endpoint
    }

    fn currency_symbol(&self) -> &str {
        &self.display.currency_symbol
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.catalog.timeout_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_full_config() {
        let config = TomlConfig::parse(
            r#"
[catalog]
endpoint = "http://shop.local/products"
timeout_seconds = 5

[display]
currency_symbol = "$"

[[items]]
product_id = "cornflakes"
quantity = 2

[[items]]
product_id = "weetabix"
"#,
        )
        .unwrap();

        assert_eq!(config.catalog_endpoint(), "http://shop.local/products");
        assert_eq!(config.timeout_seconds(), Some(5));
        assert_eq!(config.currency_symbol(), "$");
        assert_eq!(
            config.items,
            vec![ItemSpec::new("cornflakes", 2), ItemSpec::new("weetabix", 1)]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::parse("").unwrap();

        assert_eq!(config.catalog_endpoint(), DEFAULT_CATALOG_ENDPOINT);
        assert_eq!(config.currency_symbol(), "₹");
        assert_eq!(config.timeout_seconds(), None);
        assert!(config.items.is_empty());
    }

    #[test]
    fn test_validation_rejects_zero_quantity() {
        let config = TomlConfig::parse(
            r#"
[[items]]
product_id = "cornflakes"
quantity = 0
"#,
        )
        .unwrap();

        assert!(matches!(
            config.validate(),
            Err(CartError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[catalog]\nendpoint = \"https://catalog.example.com/products\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();

        assert_eq!(config.catalog_endpoint(), "https://catalog.example.com/products");
    }

    #[test]
    fn test_from_file_invalid_endpoint() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[catalog]\nendpoint = \"not a url\"").unwrap();

        assert!(matches!(
            TomlConfig::from_file(file.path()),
            Err(CartError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_from_file_missing() {
        assert!(matches!(
            TomlConfig::from_file("/nonexistent/cart.toml"),
            Err(CartError::IoError(_))
        ));
    }
}
