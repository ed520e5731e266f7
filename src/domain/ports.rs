use crate::domain::model::SkipReason;
use crate::utils::error::CatalogError;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Result of resolving a product's unit price.
#[derive(Debug)]
pub enum PriceLookup {
    Found(Decimal),
    NotFound,
    Unavailable(CatalogError),
}

impl PriceLookup {
    /// Collapses the lookup to a bare price, with 0 for anything not found.
    pub fn price(&self) -> Decimal {
        match self {
            PriceLookup::Found(price) => *price,
            PriceLookup::NotFound | PriceLookup::Unavailable(_) => Decimal::ZERO,
        }
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            PriceLookup::Found(_) => None,
            PriceLookup::NotFound => Some(SkipReason::NotFound),
            PriceLookup::Unavailable(_) => Some(SkipReason::Unavailable),
        }
    }
}

#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn fetch_price(&self, product_id: &str) -> PriceLookup;
}

#[async_trait]
impl<T: CatalogClient + ?Sized> CatalogClient for std::sync::Arc<T> {
    async fn fetch_price(&self, product_id: &str) -> PriceLookup {
        (**self).fetch_price(product_id).await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn catalog_endpoint(&self) -> &str;
    fn currency_symbol(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_collapses_failures_to_zero() {
        assert_eq!(PriceLookup::Found(dec!(2.52)).price(), dec!(2.52));
        assert_eq!(PriceLookup::NotFound.price(), Decimal::ZERO);

        let unavailable = PriceLookup::Unavailable(CatalogError::MalformedPayload {
            message: "not an array".to_string(),
        });
        assert_eq!(unavailable.price(), Decimal::ZERO);
        assert_eq!(unavailable.skip_reason(), Some(SkipReason::Unavailable));
    }

    #[test]
    fn test_free_product_is_not_skipped() {
        assert_eq!(PriceLookup::Found(Decimal::ZERO).skip_reason(), None);
        assert_eq!(PriceLookup::NotFound.skip_reason(), Some(SkipReason::NotFound));
    }
}
