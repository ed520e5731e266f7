use crate::core::snapshot::{CartSnapshot, SnapshotLine};
use crate::domain::model::{round_cents, AddOutcome, LineItem, Totals, TAX_RATE};
use crate::domain::ports::CatalogClient;
use crate::utils::error::{CartError, Result};
use std::io::Write;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Ordered collection of line items priced through a catalog client.
pub struct ShoppingCart<C: CatalogClient> {
    catalog: C,
    items: Vec<LineItem>,
    currency_symbol: String,
}

impl<C: CatalogClient> ShoppingCart<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_currency_symbol(catalog, DEFAULT_CURRENCY_SYMBOL)
    }

    pub fn with_currency_symbol(catalog: C, currency_symbol: impl Into<String>) -> Self {
        Self {
            catalog,
            items: Vec::new(),
            currency_symbol: currency_symbol.into(),
        }
    }

    /// Prices `product_id` through the catalog and adds `quantity` of it.
    ///
    /// A product the catalog cannot price is skipped and the cart is left
    /// untouched. A product already in the cart keeps its original unit
    /// price and only has its quantity increased.
    pub async fn add_item(&mut self, product_id: &str, quantity: u32) -> Result<AddOutcome> {
        if product_id.trim().is_empty() {
            return Err(CartError::EmptyProductId);
        }
        if quantity == 0 {
            return Err(CartError::InvalidQuantity {
                product_id: product_id.to_string(),
            });
        }

        let lookup = self.catalog.fetch_price(product_id).await;
        if let Some(reason) = lookup.skip_reason() {
            tracing::debug!("Skipping '{}': {:?}", product_id, reason);
            return Ok(AddOutcome::Skipped(reason));
        }
        let price = lookup.price();

        let index = self.items.iter().position(|item| item.matches(product_id));
        let candidate = match index {
            Some(i) => {
                let existing = &self.items[i];
                let merged = existing.quantity.checked_add(quantity).ok_or_else(|| {
                    CartError::QuantityOverflow {
                        product_id: existing.product_id.clone(),
                    }
                })?;
                LineItem {
                    quantity: merged,
                    ..existing.clone()
                }
            }
            None => LineItem {
                product_id: product_id.to_string(),
                quantity,
                unit_price: price,
            },
        };

        // The stored cart must always have computable totals.
        let others = self
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != index)
            .map(|(_, item)| item);
        if Totals::checked_from(others.chain([&candidate])).is_none() {
            return Err(CartError::TotalOverflow {
                product_id: product_id.to_string(),
            });
        }

        let outcome = match index {
            Some(i) => {
                let quantity = candidate.quantity;
                self.items[i] = candidate;
                AddOutcome::Merged { quantity }
            }
            None => {
                self.items.push(candidate);
                AddOutcome::Added
            }
        };

        tracing::info!(
            "{} x {} added to cart at {}{:.2} each.",
            quantity,
            product_id,
            self.currency_symbol,
            round_cents(price)
        );
        Ok(outcome)
    }

    pub fn compute_totals(&self) -> Totals {
        Totals::checked_from(&self.items)
            .expect("add_item rejects items that overflow the totals")
    }

    pub fn render_snapshot(&self) -> CartSnapshot {
        if self.items.is_empty() {
            return CartSnapshot::Empty;
        }

        let lines = self
            .items
            .iter()
            .map(|item| SnapshotLine {
                product_id: item.product_id.clone(),
                quantity: item.quantity,
                unit_price: round_cents(item.unit_price),
            })
            .collect();
        let totals = self.compute_totals();

        CartSnapshot::Items {
            lines,
            subtotal: round_cents(totals.subtotal),
            tax: round_cents(totals.tax),
            total: round_cents(totals.total),
            tax_rate: TAX_RATE,
            currency_symbol: self.currency_symbol.clone(),
        }
    }

    pub fn display_cart<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", self.render_snapshot())?;
        Ok(())
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn get(&self, product_id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.matches(product_id))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    #[cfg(test)]
    pub(crate) fn with_items(catalog: C, items: Vec<LineItem>) -> Self {
        Self {
            catalog,
            items,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}
