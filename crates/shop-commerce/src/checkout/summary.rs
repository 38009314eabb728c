//! Order summary shown on the checkout page.

use serde::Serialize;

use crate::cart::Cart;
use crate::money::Money;

/// One "name × quantity" row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: String,
    pub total: Money,
}

/// The cart as listed on the checkout page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub lines: Vec<SummaryLine>,
    pub total: Money,
}

impl OrderSummary {
    /// Summarise a cart. An empty cart gives no lines and a zero total.
    pub fn from_cart(cart: &Cart) -> Self {
        let lines = cart
            .items()
            .iter()
            .map(|item| SummaryLine {
                label: format!("{} \u{00d7} {}", item.product.name, item.quantity),
                total: item.line_total(),
            })
            .collect();

        Self {
            lines,
            total: cart.total_price(),
        }
    }

    /// Check if there is nothing to order.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
