use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid item '{spec}': {reason}")]
    InvalidItemSpec { spec: String, reason: String },

    #[error("Product id cannot be empty")]
    EmptyProductId,

    #[error("Quantity for '{product_id}' must be greater than zero")]
    InvalidQuantity { product_id: String },

    #[error("Quantity for '{product_id}' would overflow")]
    QuantityOverflow { product_id: String },

    #[error("Adding '{product_id}' would overflow the cart total")]
    TotalOverflow { product_id: String },
}

impl CartError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CartError::IoError(_) => "Check that the file exists and is readable",
            CartError::HttpClientError(_) => "Check the catalog endpoint and timeout settings",
            CartError::TomlError(_) => "Fix the syntax of the configuration file",
            CartError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line flags"
            }
            CartError::InvalidItemSpec { .. } => "Items are written as <product-id>:<quantity>",
            CartError::EmptyProductId | CartError::InvalidQuantity { .. } => {
                "Pass a product id and a quantity of at least 1"
            }
            CartError::QuantityOverflow { .. } | CartError::TotalOverflow { .. } => {
                "Split the order across several carts"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CartError>;

/// Reasons a catalog lookup could not produce an answer.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error! Status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Unexpected catalog response format: {message}")]
    MalformedPayload { message: String },
}
