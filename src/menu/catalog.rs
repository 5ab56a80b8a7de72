//! Menu catalog — canonical menu names, prices and alias keyword sets.
//!
//! The catalog is loaded once at process start and is immutable afterwards.
//! Iteration order is insertion order; it determines match precedence when
//! alias keywords overlap across items, so more specific items must come
//! before generic ones (e.g. "수육 반접시" before "수육 한접시", whose bare
//! "수육" alias would otherwise claim every 수육 mention).

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// MenuError
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or validating a menu catalog.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The catalog file could not be read.
    #[error("failed to read menu file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not valid TOML.
    #[error("failed to parse menu file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The catalog contains no items.
    #[error("menu catalog is empty")]
    Empty,

    /// Two items share the same canonical name.
    #[error("duplicate canonical menu name: {0}")]
    DuplicateName(String),

    /// An item has no alias keywords.
    #[error("menu item has no aliases: {0}")]
    NoAliases(String),

    /// The same alias keyword appears under two different items.
    #[error("alias {alias:?} is claimed by both {first:?} and {second:?}")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },

    /// An item has a price of zero.
    #[error("menu item has zero price: {0}")]
    ZeroPrice(String),
}

// ---------------------------------------------------------------------------
// MenuItem
// ---------------------------------------------------------------------------

/// A single menu entry: canonical name, unit price and alias keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Canonical name — the key used in extracted orders.
    pub name: String,
    /// Unit price in KRW.
    pub price: u32,
    /// Surface-form keywords that identify the item in free text, most
    /// specific first.  The first alias found in the text wins.
    pub aliases: Vec<String>,
}

impl MenuItem {
    /// Convenience constructor for static catalog definitions.
    fn new(name: &str, price: u32, aliases: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            price,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// MenuCatalog
// ---------------------------------------------------------------------------

/// Ordered, immutable collection of [`MenuItem`]s.
///
/// # Example
/// ```rust
/// use voice_order::menu::MenuCatalog;
///
/// let catalog = MenuCatalog::default();
/// assert_eq!(catalog.get("돼지국밥").unwrap().price, 9_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

/// On-disk TOML shape: a list of `[[item]]` tables.
#[derive(Deserialize)]
struct MenuFile {
    item: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Build a catalog from `items`, validating the invariants the extractor
    /// relies on: at least one item, unique canonical names, at least one
    /// alias per item, no alias claimed by two items, positive prices.
    pub fn new(items: Vec<MenuItem>) -> Result<Self, MenuError> {
        if items.is_empty() {
            return Err(MenuError::Empty);
        }

        for (i, item) in items.iter().enumerate() {
            if item.aliases.is_empty() {
                return Err(MenuError::NoAliases(item.name.clone()));
            }
            if item.price == 0 {
                return Err(MenuError::ZeroPrice(item.name.clone()));
            }
            for earlier in &items[..i] {
                if earlier.name == item.name {
                    return Err(MenuError::DuplicateName(item.name.clone()));
                }
                for alias in &item.aliases {
                    if earlier.aliases.contains(alias) {
                        return Err(MenuError::DuplicateAlias {
                            alias: alias.clone(),
                            first: earlier.name.clone(),
                            second: item.name.clone(),
                        });
                    }
                }
            }
        }

        Ok(Self { items })
    }

    /// Load a substitute catalog from a TOML file:
    ///
    /// ```toml
    /// [[item]]
    /// name = "돼지국밥"
    /// price = 9000
    /// aliases = ["돼지국밥", "돼지 국밥", "돼지"]
    /// ```
    pub fn load_from(path: &Path) -> Result<Self, MenuError> {
        let content = std::fs::read_to_string(path)?;
        let file: MenuFile = toml::from_str(&content)?;
        Self::new(file.item)
    }

    /// Items in insertion order (match precedence order).
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look up an item by canonical name.
    pub fn get(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the catalog has no items (never the case for a
    /// validated catalog).
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MenuCatalog {
    /// The built-in gukbap restaurant menu.
    ///
    /// Ordering matters: the two 수육 items come last with the half-plate
    /// before the full plate, so "수육 반" is consumed before the bare
    /// "수육" alias of the full plate can claim it.
    fn default() -> Self {
        // Must satisfy every invariant new() checks; covered by
        // default_catalog_passes_validation.
        Self {
            items: vec![
                MenuItem::new("돼지국밥", 9_000, &["돼지국밥", "돼지 국밥", "돼지"]),
                MenuItem::new("순대국밥", 10_000, &["순대국밥", "순대 국밥", "순대"]),
                MenuItem::new("내장국밥", 9_500, &["내장국밥", "내장 국밥", "내장"]),
                MenuItem::new("섞어국밥", 9_500, &["섞어국밥", "섞어 국밥", "섞어"]),
                MenuItem::new(
                    "수육 반접시",
                    13_000,
                    &["수육 반접시", "수육 반 접시", "수육 반", "반접시"],
                ),
                MenuItem::new(
                    "수육 한접시",
                    25_000,
                    &["수육 한접시", "수육 한 접시", "한접시", "수육"],
                ),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
