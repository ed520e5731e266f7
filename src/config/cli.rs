use crate::utils::error::{CartError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A product id and quantity to put in the cart, written `<id>:<qty>` on the
/// command line. The quantity defaults to 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl ItemSpec {
    pub fn new(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

impl FromStr for ItemSpec {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| CartError::InvalidItemSpec {
            spec: s.to_string(),
            reason: reason.to_string(),
        };

        let (product_id, quantity) = match s.rsplit_once(':') {
            Some((id, qty)) => {
                let quantity = qty
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| invalid("quantity must be a whole number"))?;
                (id.trim(), quantity)
            }
            None => (s.trim(), default_quantity()),
        };

        if product_id.is_empty() {
            return Err(invalid("product id is empty"));
        }
        if quantity == 0 {
            return Err(invalid("quantity must be at least 1"));
        }

        Ok(Self::new(product_id, quantity))
    }
}
