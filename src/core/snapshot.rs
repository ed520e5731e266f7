use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Point-in-time view of a cart with every amount rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CartSnapshot {
    Empty,
    Items {
        lines: Vec<SnapshotLine>,
        subtotal: Decimal,
        tax: Decimal,
        total: Decimal,
        tax_rate: Decimal,
        currency_symbol: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotLine {
    pub product_id: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl fmt::Display for CartSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartSnapshot::Empty => writeln!(f, "{}", EMPTY_CART_MESSAGE),
            CartSnapshot::Items {
                lines,
                subtotal,
                tax,
                total,
                tax_rate,
                currency_symbol: sym,
            } => {
                writeln!(f, "\nYour Shopping Cart:")?;
                for line in lines {
                    writeln!(
                        f,
                        "{} x {} - {}{:.2} each",
                        line.quantity, line.product_id, sym, line.unit_price
                    )?;
                }
                let percent = (*tax_rate * Decimal::ONE_HUNDRED).normalize();
                writeln!(f)?;
                writeln!(f, "Subtotal: {}{:.2}", sym, subtotal)?;
                writeln!(f, "Tax ({}%): {}{:.2}", percent, sym, tax)?;
                writeln!(f, "Total: {}{:.2}", sym, total)
            }
        }
    }
}
