// src/pricing/mod.rs
//
// Order cost derivation. An order's detail text is a free-form,
// comma-separated list written by waitstaff ("2 x Pollo a la brasa,
// S/5.00 extra"). Cost is recomputed from the current menu on every
// read path, never stored, so displayed totals follow menu price edits.
//
// Calculations use `Decimal` internally; callers convert to f64 only at
// the serialization boundary.

use regex::Regex;
use rust_decimal::prelude::*;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

// "<quantity> x <name>", quantity first, case-insensitive separator
static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+)\s*x\s*(.+)$").unwrap());

// currency token: "S/ 5.00", "S/. 5", "s/5.50"
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)S/\.?\s*(\d+(?:\.\d+)?)").unwrap());

/// Serialization-boundary conversion. Monetary `Decimal`s stay well
/// inside f64 range; a non-representable value is logged and zeroed
/// rather than poisoning the response.
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_else(|| {
            tracing::error!(%value, "Decimal not representable as f64, defaulting to zero");
            0.0
        })
}

/// Menu name -> unit price snapshot used for a single pricing pass.
#[derive(Debug, Default)]
pub struct Catalog {
    prices: HashMap<String, Decimal>,
}

impl Catalog {
    pub fn new(entries: impl IntoIterator<Item = (String, Decimal)>) -> Self {
        Self {
            prices: entries.into_iter().collect(),
        }
    }

    /// Exact-name lookup. Misses are the caller's designed no-op.
    pub fn price_of(&self, name: &str) -> Option<Decimal> {
        self.prices.get(name).copied()
    }
}

/// A catalog-priced item extracted from one detail segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub quantity: i64,
    /// Lookup key: the written name truncated at the first '(' and trimmed,
    /// so annotations like "(500ml)" don't defeat the menu match.
    pub name: String,
}

/// One comma-separated segment of detail text. The two patterns are not
/// exclusive: a segment may name a catalog item AND carry an explicit
/// "S/" amount, and both contribute to the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub item: Option<LineItem>,
    pub extra: Option<Decimal>,
}

/// Split detail text into segments. Segments matching neither pattern
/// are dropped; they price at zero anyway.
pub fn parse_detail(text: &str) -> Vec<Segment> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(parse_segment)
        .collect()
}

fn parse_segment(segment: &str) -> Option<Segment> {
    let item = ITEM_RE.captures(segment).and_then(|caps| {
        let quantity = caps[1].parse::<i64>().ok()?;
        let name = lookup_key(&caps[2]);
        if name.is_empty() {
            return None;
        }
        Some(LineItem { quantity, name })
    });

    let extra = AMOUNT_RE
        .captures(segment)
        .and_then(|caps| Decimal::from_str(&caps[1]).ok());

    if item.is_none() && extra.is_none() {
        return None;
    }
    Some(Segment { item, extra })
}

fn lookup_key(written: &str) -> String {
    let stripped = match written.find('(') {
        Some(idx) => &written[..idx],
        None => written,
    };
    stripped.trim().to_string()
}

/// Best-effort total for a detail string: quantity x unit price for every
/// catalog hit, plus any explicit amounts, rounded half-up to cents.
/// Names the menu doesn't know contribute nothing; the text was never
/// validated against the menu and old orders must keep pricing cleanly.
pub fn compute_cost(text: &str, catalog: &Catalog) -> Decimal {
    let mut total = Decimal::ZERO;
    for segment in parse_detail(text) {
        if let Some(item) = segment.item {
            if let Some(unit_price) = catalog.price_of(&item.name) {
                total += Decimal::from(item.quantity) * unit_price;
            }
        }
        if let Some(extra) = segment.extra {
            total += extra;
        }
    }
    total.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new([
            ("Pollo a la brasa".to_string(), Decimal::new(2500, 2)),
            ("Inca Kola".to_string(), Decimal::new(600, 2)),
            ("Lomo Saltado".to_string(), Decimal::new(1850, 2)),
        ])
    }

    #[test]
    fn quantity_and_name_extracted() {
        let segments = parse_detail("2 x Pollo a la brasa");
        assert_eq!(
            segments,
            vec![Segment {
                item: Some(LineItem {
                    quantity: 2,
                    name: "Pollo a la brasa".to_string()
                }),
                extra: None,
            }]
        );
    }

    #[test]
    fn separator_is_case_insensitive_and_tolerates_spacing() {
        for text in ["3X Inca Kola", "3 X Inca Kola", "3x Inca Kola", "3  x  Inca Kola"] {
            let segments = parse_detail(text);
            let item = segments[0].item.as_ref().unwrap();
            assert_eq!(item.quantity, 3, "failed on {text:?}");
            assert_eq!(item.name, "Inca Kola");
        }
    }

    #[test]
    fn parenthetical_stripped_from_lookup_key() {
        assert_eq!(compute_cost("1 x Inca Kola (500ml)", &catalog()), Decimal::new(600, 2));
    }

    #[test]
    fn unmatched_names_contribute_zero() {
        assert_eq!(compute_cost("2 x Ceviche, 1 x Chicha Morada", &catalog()), Decimal::ZERO);
    }

    #[test]
    fn explicit_amount_added_to_catalog_match() {
        let cost = compute_cost("2 x Pollo a la brasa, S/5.00 extra", &catalog());
        assert_eq!(cost, Decimal::new(5500, 2));
    }

    #[test]
    fn amount_and_item_on_one_segment_both_count() {
        // name truncates at '(', so the catalog hit and the explicit
        // surcharge both land: 18.50 + 2.50
        let cost = compute_cost("1 x Lomo Saltado (doble carne) S/2.50", &catalog());
        assert_eq!(cost, Decimal::new(2100, 2));
    }

    #[test]
    fn inline_amount_without_parenthetical_defeats_the_name_match() {
        // the whole tail is the lookup key, so only the explicit amount
        // survives; totals are best-effort, not validated
        let cost = compute_cost("1 x Lomo Saltado S/2.50", &catalog());
        assert_eq!(cost, Decimal::new(250, 2));
    }

    #[test]
    fn amount_token_variants() {
        for text in ["S/5.00", "S/. 5", "s/ 5.0", "S/.5"] {
            let cost = compute_cost(text, &catalog());
            assert_eq!(cost, Decimal::new(500, 2), "failed on {text:?}");
        }
    }

    #[test]
    fn gibberish_segments_are_skipped() {
        let cost = compute_cost("sin aji, , cuenta rapida por favor", &catalog());
        assert_eq!(cost, Decimal::ZERO);
        assert!(parse_detail("sin aji, , rapido").is_empty());
    }

    #[test]
    fn empty_detail_prices_at_zero() {
        assert_eq!(compute_cost("", &catalog()), Decimal::ZERO);
    }

    #[test]
    fn total_is_rounded_to_cents() {
        let catalog = Catalog::new([("Te".to_string(), Decimal::from_str("1.005").unwrap())]);
        // 3 * 1.005 = 3.015 -> 3.02 half-up
        assert_eq!(compute_cost("3 x Te", &catalog), Decimal::new(302, 2));
    }

    #[test]
    fn overlong_quantity_does_not_panic() {
        let cost = compute_cost("99999999999999999999 x Inca Kola", &catalog());
        assert_eq!(cost, Decimal::ZERO);
    }
}
