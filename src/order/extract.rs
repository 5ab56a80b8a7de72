//! Order extraction — the rule-based core.
//!
//! [`OrderExtractor`] scans a (corrected or raw) transcript against the menu
//! catalog.  For each catalog item, in catalog order, the first alias keyword
//! contained in the remaining text buffer is matched, a fixed-precedence
//! family of quantity patterns anchored to that alias is searched, the
//! captured token is resolved via [`NumeralResolver`], and the alias's first
//! occurrence is removed from the buffer so a later item's alias set cannot
//! re-claim the same mention.
//!
//! The extractor never fails: unresolvable quantities default to 1, items
//! without an alias match are omitted, and fully-unmatched input yields an
//! empty [`Order`].  The caller decides whether an empty order means
//! "please repeat".

use regex::Regex;

use crate::menu::MenuCatalog;
use crate::order::numeral::NumeralResolver;
use crate::order::Order;

// ---------------------------------------------------------------------------
// Quantity pattern family
// ---------------------------------------------------------------------------

/// Counter words (classifier nouns) that confirm an adjacent numeral
/// quantifies the alias.  "인승" is a frequent ASR mis-hearing of "인분".
const COUNTERS: &str = "개|그릇|접시|인분|인승|명|병|잔";

/// A numeral token: a run of Hangul syllables or a run of decimal digits.
const NUMERAL: &str = r"[가-힣]+|\d+";

/// Build the six quantity patterns for one alias keyword, strongest first.
///
/// Precedence: counter-word phrasing beats bare adjacency, and a pattern
/// before the alias beats the same pattern after it.  The first pattern
/// whose capture matches wins; the rest are not tried.
fn quantity_patterns(alias: &str) -> Result<Vec<Regex>, regex::Error> {
    let k = regex::escape(alias);
    let sources = [
        // numeral + counter word, before the alias: "두 그릇 수육"
        format!(r"({NUMERAL})\s*(?:{COUNTERS})\s*{k}"),
        // alias, then numeral + counter word: "수육 두 그릇"
        format!(r"{k}\s*({NUMERAL})\s*(?:{COUNTERS})"),
        // bare numeral before the alias: "두 수육"
        format!(r"({NUMERAL})\s+{k}"),
        // bare numeral after the alias: "수육 둘"
        format!(r"{k}\s+({NUMERAL})"),
        // digits before the alias, optional counter: "2개 수육", "2 수육"
        format!(r"(\d+)\s*(?:{COUNTERS})?\s*{k}"),
        // digits after the alias, optional counter: "수육2", "수육 2개"
        format!(r"{k}\s*(\d+)\s*(?:{COUNTERS})?"),
    ];
    sources.iter().map(|s| Regex::new(s)).collect()
}

// ---------------------------------------------------------------------------
// Compiled matchers
// ---------------------------------------------------------------------------

/// One alias keyword with its precompiled quantity patterns.
struct AliasPatterns {
    keyword: String,
    patterns: Vec<Regex>,
}

/// One catalog item with its alias matchers, in alias precedence order.
struct ItemMatcher {
    name: String,
    aliases: Vec<AliasPatterns>,
}

// ---------------------------------------------------------------------------
// OrderExtractor
// ---------------------------------------------------------------------------

/// Rule-based order extractor over a fixed menu catalog.
///
/// Construction precompiles every quantity pattern; extraction itself is
/// synchronous, allocation-light, and touches no shared mutable state, so a
/// single extractor can be shared across threads without locking.
///
/// # Example
/// ```rust
/// use voice_order::menu::MenuCatalog;
/// use voice_order::order::OrderExtractor;
///
/// let extractor = OrderExtractor::new(&MenuCatalog::default()).unwrap();
/// let order = extractor.extract("섞어국밥 5개 주세요");
/// assert_eq!(order.quantity_of("섞어국밥"), Some(5));
/// ```
pub struct OrderExtractor {
    items: Vec<ItemMatcher>,
    numerals: NumeralResolver,
}

impl OrderExtractor {
    /// Build an extractor for `catalog` with the built-in numeral table.
    pub fn new(catalog: &MenuCatalog) -> Result<Self, regex::Error> {
        Self::with_resolver(catalog, NumeralResolver::default())
    }

    /// Build an extractor with a substitute numeral table.
    pub fn with_resolver(
        catalog: &MenuCatalog,
        numerals: NumeralResolver,
    ) -> Result<Self, regex::Error> {
        let mut items = Vec::with_capacity(catalog.len());
        for item in catalog.items() {
            let mut aliases = Vec::with_capacity(item.aliases.len());
            for keyword in &item.aliases {
                aliases.push(AliasPatterns {
                    keyword: keyword.clone(),
                    patterns: quantity_patterns(keyword)?,
                });
            }
            items.push(ItemMatcher {
                name: item.name.clone(),
                aliases,
            });
        }
        Ok(Self { items, numerals })
    }

    /// Extract an [`Order`] from `text`.
    ///
    /// Per catalog item, in catalog order:
    /// 1. the first alias contained in the remaining buffer wins; no alias →
    ///    the item contributes nothing;
    /// 2. the first quantity pattern with a capture wins; later patterns are
    ///    not tried;
    /// 3. the captured token is resolved; an unresolvable token — or no
    ///    pattern match at all — means quantity 1 (a bare mention is "one");
    /// 4. the quantity is added to the item's running total;
    /// 5. the first occurrence of the matched alias keyword (not the whole
    ///    quantity phrase) is removed from the buffer.
    ///
    /// Never errors: worst case is an empty order.
    pub fn extract(&self, text: &str) -> Order {
        let mut order = Order::default();
        let mut buffer = text.to_string();

        for item in &self.items {
            let Some(alias) = item.aliases.iter().find(|a| buffer.contains(&a.keyword)) else {
                continue;
            };

            let captured = alias.patterns.iter().find_map(|re| {
                re.captures(&buffer)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().trim().to_string())
            });

            let quantity = captured
                .and_then(|token| self.numerals.resolve(&token))
                .unwrap_or(1);

            order.add(&item.name, quantity);

            buffer = buffer.replacen(&alias.keyword, "", 1);
        }

        order
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
