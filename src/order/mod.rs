//! Order extraction module.
//!
//! This module provides:
//! * [`Order`] / [`OrderLine`] — the extracted order: canonical menu name →
//!   accumulated quantity, in catalog order.
//! * [`NumeralResolver`] — Korean numeral words and digit strings → positive
//!   integers.
//! * [`OrderExtractor`] — the rule-based extraction pass over a menu catalog.
//!
//! # Quick start
//!
//! ```rust
//! use voice_order::menu::MenuCatalog;
//! use voice_order::order::OrderExtractor;
//!
//! let catalog = MenuCatalog::default();
//! let extractor = OrderExtractor::new(&catalog).unwrap();
//!
//! let order = extractor.extract("돼지국밥 두 그릇 주세요");
//! assert_eq!(order.quantity_of("돼지국밥"), Some(2));
//! assert_eq!(order.total_price(&catalog), 18_000);
//! ```

pub mod extract;
pub mod numeral;

pub use extract::OrderExtractor;
pub use numeral::NumeralResolver;

use serde::Serialize;

use crate::menu::MenuCatalog;

// ---------------------------------------------------------------------------
// OrderLine
// ---------------------------------------------------------------------------

/// One extracted order line: canonical menu name and accumulated quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    /// Canonical menu name (never an alias).
    pub name: String,
    /// Accumulated quantity, always ≥ 1.
    pub quantity: u32,
}

// ---------------------------------------------------------------------------
// Order
// ---------------------------------------------------------------------------

/// An extracted order: lines in catalog order, one per mentioned menu item.
///
/// Built fresh per extraction call; a menu item absent from the input is
/// absent from the order (never present with quantity 0).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    /// Add `quantity` to the running total for `name`, appending a new line
    /// when the name was not seen before.  Quantities for the same menu
    /// mentioned multiple times are summed, not overwritten.
    pub fn add(&mut self, name: &str, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.name == name) {
            line.quantity += quantity;
        } else {
            self.lines.push(OrderLine {
                name: name.to_string(),
                quantity,
            });
        }
    }

    /// Quantity for `name`, or `None` when the item was not ordered.
    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.lines
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.quantity)
    }

    /// Order lines in catalog order.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Returns `true` when nothing was ordered — the caller should treat
    /// this as "order not understood" and prompt for re-entry.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of individual items across all lines.
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Total price in KRW, priced against `catalog`.  Lines whose name is
    /// missing from the catalog (impossible for extractor output) price at 0.
    pub fn total_price(&self, catalog: &MenuCatalog) -> u64 {
        self.lines
            .iter()
            .map(|l| {
                let unit = catalog.get(&l.name).map_or(0, |item| item.price);
                u64::from(unit) * u64::from(l.quantity)
            })
            .sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
