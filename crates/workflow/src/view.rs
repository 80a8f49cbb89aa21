//! Display shaping: search, sort and paging over the loaded records.
//!
//! The displayed order can diverge arbitrarily from storage order; nothing
//! here knows about storage positions. Mapping a displayed record back to
//! its row is the controller's position-resolution seam.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use inflow_core::{InwardRecord, quantity};

/// Displayed column to sort on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Date,
    ItemCode,
    ItemName,
    Quantity,
    Unit,
    Supplier,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// A 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub number: usize,
    pub size: usize,
}

/// Current search/sort/page settings of the view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Case-insensitive substring matched against item code, item name and
    /// supplier. Blank matches everything.
    pub query: String,
    pub sort: Option<(SortKey, SortOrder)>,
    pub page: Option<Page>,
}

/// Apply the view settings, in order: filter, sort, page.
pub fn apply<'a>(records: &'a [InwardRecord], options: &ViewOptions) -> Vec<&'a InwardRecord> {
    let needle = options.query.trim().to_lowercase();
    let mut visible: Vec<&InwardRecord> = records
        .iter()
        .filter(|r| matches_query(r, &needle))
        .collect();

    if let Some((key, order)) = options.sort {
        visible.sort_by(|a, b| {
            let ordering = compare(a, b, key);
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }

    if let Some(page) = options.page {
        let size = page.size.max(1);
        let start = page.number.saturating_sub(1) * size;
        visible = visible
            .into_iter()
            .skip(start)
            .take(size)
            .collect();
    }

    visible
}

fn matches_query(record: &InwardRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.item_code.to_lowercase().contains(needle)
        || record.item_name.to_lowercase().contains(needle)
        || record.supplier.to_lowercase().contains(needle)
}

fn compare(a: &InwardRecord, b: &InwardRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => text_cmp(&a.date, &b.date),
        SortKey::ItemCode => text_cmp(&a.item_code, &b.item_code),
        SortKey::ItemName => text_cmp(&a.item_name, &b.item_name),
        SortKey::Unit => text_cmp(&a.unit, &b.unit),
        SortKey::Supplier => text_cmp(&a.supplier, &b.supplier),
        SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        SortKey::Quantity => numeric(&a.quantity).cmp(&numeric(&b.quantity)),
    }
}

fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Unparseable quantities sort as zero rather than poisoning the ordering.
fn numeric(raw: &str) -> Decimal {
    quantity::parse_decimal(raw).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inflow_core::InwardStatus;

    fn record(code: &str, name: &str, qty: &str, supplier: &str) -> InwardRecord {
        InwardRecord {
            record_id: None,
            date: "2025-01-15".to_string(),
            item_code: code.to_string(),
            item_name: name.to_string(),
            quantity: qty.to_string(),
            unit: "pcs".to_string(),
            supplier: supplier.to_string(),
            status: InwardStatus::Pending,
            last_updated: String::new(),
        }
    }

    fn fixture() -> Vec<InwardRecord> {
        vec![
            record("AB001", "Bearing", "25", "V1"),
            record("CD202", "Shaft", "3", "ACME9"),
            record("EF303", "Coupling", "100", "V2"),
        ]
    }

    #[test]
    fn search_is_case_insensitive_across_three_columns() {
        let records = fixture();

        let view = ViewOptions {
            query: "bear".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(&records, &view).len(), 1);

        let view = ViewOptions {
            query: "acme".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(&records, &view)[0].item_code, "CD202");

        let view = ViewOptions {
            query: "ef3".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(&records, &view)[0].item_name, "Coupling");
    }

    #[test]
    fn quantity_sorts_numerically_not_lexically() {
        let records = fixture();
        let view = ViewOptions {
            sort: Some((SortKey::Quantity, SortOrder::Ascending)),
            ..Default::default()
        };
        let quantities: Vec<&str> = apply(&records, &view)
            .iter()
            .map(|r| r.quantity.as_str())
            .collect();
        assert_eq!(quantities, vec!["3", "25", "100"]);
    }

    #[test]
    fn descending_reverses_the_order() {
        let records = fixture();
        let view = ViewOptions {
            sort: Some((SortKey::ItemCode, SortOrder::Descending)),
            ..Default::default()
        };
        let codes: Vec<&str> = apply(&records, &view)
            .iter()
            .map(|r| r.item_code.as_str())
            .collect();
        assert_eq!(codes, vec!["EF303", "CD202", "AB001"]);
    }

    #[test]
    fn paging_windows_the_filtered_sorted_view() {
        let records = fixture();
        let view = ViewOptions {
            sort: Some((SortKey::ItemCode, SortOrder::Ascending)),
            page: Some(Page { number: 2, size: 2 }),
            ..Default::default()
        };
        let codes: Vec<&str> = apply(&records, &view)
            .iter()
            .map(|r| r.item_code.as_str())
            .collect();
        assert_eq!(codes, vec!["EF303"]);
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let records = fixture();
        let view = ViewOptions {
            page: Some(Page { number: 5, size: 10 }),
            ..Default::default()
        };
        assert!(apply(&records, &view).is_empty());
    }
}
