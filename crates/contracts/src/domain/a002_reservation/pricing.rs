//! Price and turnaround derivation for a main service plus add-ons

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::a001_service_category::ServiceCategoryNode;

/// Derived totals of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceQuote {
    pub price: u64,
    pub time: u32,
}

/// Price split shown on the confirmation screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub main: u64,
    pub extras: u64,
    pub total: u64,
}

/// `main + Σ selected eligible add-ons` for both price and duration.
///
/// A missing main service counts as 0/0. Selected ids that are not in
/// `eligible` contribute nothing. Sums saturate instead of overflowing.
pub fn compute_quote(
    main: Option<&ServiceCategoryNode>,
    eligible: &[ServiceCategoryNode],
    selected: &BTreeSet<i64>,
) -> PriceQuote {
    let base = PriceQuote {
        price: main.map(|m| m.price).unwrap_or(0),
        time: main.map(|m| m.duration).unwrap_or(0),
    };

    eligible
        .iter()
        .filter(|a| selected.contains(&a.id))
        .fold(base, |acc, a| PriceQuote {
            price: acc.price.saturating_add(a.price),
            time: acc.time.saturating_add(a.duration),
        })
}

pub fn compute_breakdown(
    main: Option<&ServiceCategoryNode>,
    eligible: &[ServiceCategoryNode],
    selected: &BTreeSet<i64>,
) -> PriceBreakdown {
    let quote = compute_quote(main, eligible, selected);
    let main_price = main.map(|m| m.price).unwrap_or(0);
    PriceBreakdown {
        main: main_price,
        extras: quote.price.saturating_sub(main_price),
        total: quote.price,
    }
}

/// `38000` -> `"38,000원"`
pub fn format_won(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.push('원');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_service_category::aggregate::fixtures::{catalog, node};

    fn ids(list: &[i64]) -> BTreeSet<i64> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_additivity() {
        let main = node(1, "기본청소", 30000, 3, 0);
        let add_ons = vec![node(2, "창문", 5000, 1, 1), node(3, "베란다", 3000, 0, 1)];
        let quote = compute_quote(Some(&main), &add_ons, &ids(&[2, 3]));
        assert_eq!(quote, PriceQuote { price: 38000, time: 4 });
    }

    #[test]
    fn test_ineligible_ids_are_ignored() {
        let catalog = catalog();
        let main = catalog.find_main(1);
        let eligible = catalog.eligible_add_ons(1);
        let plain = compute_quote(main, eligible, &BTreeSet::new());
        let with_foreign = compute_quote(main, eligible, &ids(&[21, 999]));
        assert_eq!(plain, with_foreign);
        assert_eq!(plain, PriceQuote { price: 30000, time: 3 });
    }

    #[test]
    fn test_missing_main_defaults_to_zero() {
        let add_ons = vec![node(2, "창문", 5000, 1, 1)];
        assert_eq!(
            compute_quote(None, &add_ons, &ids(&[2])),
            PriceQuote { price: 5000, time: 1 }
        );
        assert_eq!(compute_quote(None, &[], &BTreeSet::new()), PriceQuote::default());
    }

    #[test]
    fn test_deterministic() {
        let catalog = catalog();
        let selected = ids(&[11, 12]);
        let a = compute_quote(catalog.find_main(1), catalog.eligible_add_ons(1), &selected);
        let b = compute_quote(catalog.find_main(1), catalog.eligible_add_ons(1), &selected);
        assert_eq!(a, b);
        assert_eq!(a, PriceQuote { price: 40000, time: 4 });
    }

    #[test]
    fn test_breakdown() {
        let catalog = catalog();
        let breakdown =
            compute_breakdown(catalog.find_main(1), catalog.eligible_add_ons(1), &ids(&[12]));
        assert_eq!(
            breakdown,
            PriceBreakdown {
                main: 30000,
                extras: 10000,
                total: 40000
            }
        );
    }

    #[test]
    fn test_huge_values_saturate() {
        let main = node(1, "m", u64::MAX, u32::MAX, 0);
        let add_ons = vec![node(2, "a", 1, 1, 1)];
        let quote = compute_quote(Some(&main), &add_ons, &ids(&[2]));
        assert_eq!(quote, PriceQuote { price: u64::MAX, time: u32::MAX });
        let breakdown = compute_breakdown(Some(&main), &add_ons, &ids(&[2]));
        assert_eq!(breakdown.extras, 0);
        assert_eq!(breakdown.total, u64::MAX);
    }

    #[test]
    fn test_format_won() {
        assert_eq!(format_won(0), "0원");
        assert_eq!(format_won(500), "500원");
        assert_eq!(format_won(38000), "38,000원");
        assert_eq!(format_won(1234567), "1,234,567원");
    }
}
