use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Tax applied to every cart subtotal (12.5%).
pub const TAX_RATE: Decimal = Decimal::from_parts(125, 0, 0, false, 3);

/// Rounds a money amount to whole cents, halves away from zero.
pub fn round_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Product ids compare case-insensitively everywhere.
pub fn same_product_id(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// One record of the catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl LineItem {
    /// `unit_price × quantity`, or `None` when it does not fit in a `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }

    pub fn matches(&self, product_id: &str) -> bool {
        same_product_id(&self.product_id, product_id)
    }
}

/// Derived cart totals. `subtotal` is left unrounded; `tax` and `total` are
/// rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl Totals {
    /// Totals over `items`, or `None` if any step overflows.
    pub fn checked_from<'a>(items: impl IntoIterator<Item = &'a LineItem>) -> Option<Self> {
        let subtotal = items
            .into_iter()
            .try_fold(Decimal::ZERO, |sum, item| sum.checked_add(item.line_total()?))?;
        let tax = round_cents(subtotal.checked_mul(TAX_RATE)?);
        let total = round_cents(subtotal.checked_add(tax)?);
        Some(Self {
            subtotal,
            tax,
            total,
        })
    }
}

/// Outcome of adding an item to the cart.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Added,
    Merged { quantity: u32 },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotFound,
    Unavailable,
}
