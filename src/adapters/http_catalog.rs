use crate::domain::model::{round_cents, same_product_id, CatalogProduct};
use crate::domain::ports::{CatalogClient, ConfigProvider, PriceLookup};
use crate::utils::error::{CatalogError, Result};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

/// Catalog client that reads the full product listing over HTTP on every
/// lookup.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    endpoint: String,
    client: Client,
}

impl HttpCatalogClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        match config.timeout_seconds() {
            Some(secs) => Self::with_timeout(config.catalog_endpoint(), Duration::from_secs(secs)),
            None => Ok(Self::new(config.catalog_endpoint())),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_catalog(&self) -> std::result::Result<Vec<serde_json::Value>, CatalogError> {
        tracing::debug!("Making catalog request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("Catalog response status: {}", status);
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body = response.bytes().await?;
        let json_data: serde_json::Value =
            serde_json::from_slice(&body).map_err(|e| CatalogError::MalformedPayload {
                message: format!("invalid JSON: {}", e),
            })?;

        let serde_json::Value::Array(items) = json_data else {
            return Err(CatalogError::MalformedPayload {
                message: "expected an array".to_string(),
            });
        };
        tracing::debug!("Catalog returned {} records", items.len());

        Ok(items)
    }
}

/// First record whose `id` matches. Records without a string id are passed
/// over, so one broken record does not hide the rest of the catalog.
fn find_record<'a>(
    records: &'a [serde_json::Value],
    product_id: &str,
) -> Option<&'a serde_json::Value> {
    records.iter().find(|record| {
        record
            .get("id")
            .and_then(serde_json::Value::as_str)
            .is_some_and(|id| same_product_id(id, product_id))
    })
}

fn decode_price(record: &serde_json::Value) -> std::result::Result<Decimal, CatalogError> {
    let product = CatalogProduct::deserialize(record).map_err(|e| {
        CatalogError::MalformedPayload {
            message: format!("invalid product record: {}", e),
        }
    })?;

    if product.price.is_sign_negative() && !product.price.is_zero() {
        return Err(CatalogError::MalformedPayload {
            message: format!("negative price {} for '{}'", product.price, product.id),
        });
    }
    Ok(round_cents(product.price))
}

#[async_trait::async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_price(&self, product_id: &str) -> PriceLookup {
        tracing::info!("Fetching price for: {}", product_id);

        let records = match self.fetch_catalog().await {
            Ok(records) => records,
            Err(e) => {
                tracing::error!("Error fetching price: {}", e);
                return PriceLookup::Unavailable(e);
            }
        };

        let Some(record) = find_record(&records, product_id) else {
            tracing::warn!("Product '{}' not found.", product_id);
            return PriceLookup::NotFound;
        };

        match decode_price(record) {
            Ok(price) => PriceLookup::Found(price),
            Err(e) => {
                tracing::error!("Error fetching price: {}", e);
                PriceLookup::Unavailable(e)
            }
        }
    }
}
