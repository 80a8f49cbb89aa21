//! Stock items and inward-material records as they appear on the wire.
//!
//! The row store hands back header-keyed rows; every cell is stringly typed
//! but numbers occasionally arrive as JSON numbers, so field access coerces.

use serde::Serialize;
use serde_json::Value;

use crate::id::RecordId;
use crate::status::InwardStatus;

/// One header-keyed row as delivered by the row-store collaborator.
pub type Row = serde_json::Map<String, Value>;

/// Read a row cell as a trimmed string, coercing scalar JSON values the way
/// the upstream store does. Blank cells count as absent.
pub fn field_str(row: &Row, key: &str) -> Option<String> {
    let value = row.get(key)?;
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

/// One stock-catalog row.
///
/// Only the catalog columns are typed. The full raw row is retained so the
/// vendor extractor can see the vendor payload under whatever field name and
/// shape it arrived; the catalog makes no promises about that part.
#[derive(Debug, Clone, PartialEq)]
pub struct StockItem {
    pub item_code: String,
    pub item_name: String,
    pub unit: String,
    /// Numeric string, e.g. "100" or "12.5". Parsed only at the adjustment
    /// seam.
    pub current_stock: String,
    pub last_updated: String,
    pub raw: Row,
}

impl StockItem {
    /// Build from a header-keyed row. Returns `None` when the key column is
    /// missing or blank; every other column degrades to an empty string.
    pub fn from_row(row: &Row) -> Option<Self> {
        let item_code = field_str(row, "itemCode")?;
        Some(Self {
            item_code,
            item_name: field_str(row, "itemName").unwrap_or_default(),
            unit: field_str(row, "unit").unwrap_or_default(),
            current_stock: field_str(row, "currentStock").unwrap_or_default(),
            last_updated: field_str(row, "lastUpdated").unwrap_or_default(),
            raw: row.clone(),
        })
    }
}

/// One receipt-of-material transaction awaiting or having completed stock
/// reconciliation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InwardRecord {
    /// Stable synthetic id stamped at creation. Rows written before ids were
    /// introduced have none; position resolution then falls back to field
    /// identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<RecordId>,
    /// ISO date string.
    pub date: String,
    pub item_code: String,
    pub item_name: String,
    /// Positive decimal as string.
    pub quantity: String,
    pub unit: String,
    /// Vendor code.
    pub supplier: String,
    pub status: InwardStatus,
    /// ISO timestamp string, stamped on every write.
    pub last_updated: String,
}

impl InwardRecord {
    /// Build from a header-keyed row.
    ///
    /// Returns `None` when the row is unusable (no item code, or a status
    /// value outside the lifecycle); callers skip such rows rather than fail
    /// the whole listing.
    pub fn from_row(row: &Row) -> Option<Self> {
        let item_code = field_str(row, "itemCode")?;
        let status = match field_str(row, "status") {
            Some(s) => s.parse::<InwardStatus>().ok()?,
            None => return None,
        };
        let record_id = field_str(row, "recordId").and_then(|s| s.parse::<RecordId>().ok());
        Some(Self {
            record_id,
            date: field_str(row, "date").unwrap_or_default(),
            item_code,
            item_name: field_str(row, "itemName").unwrap_or_default(),
            quantity: field_str(row, "quantity").unwrap_or_default(),
            unit: field_str(row, "unit").unwrap_or_default(),
            supplier: field_str(row, "supplier").unwrap_or_default(),
            status,
            last_updated: field_str(row, "lastUpdated").unwrap_or_default(),
        })
    }

    /// Serialize back to a header-keyed row.
    pub fn to_row(&self) -> Row {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Row::new(),
        }
    }

    /// Field identity for rows that carry no synthetic id.
    pub fn matches_identity(&self, other: &Self) -> bool {
        self.date == other.date
            && self.item_code == other.item_code
            && self.quantity == other.quantity
            && self.unit == other.unit
            && self.supplier == other.supplier
            && self.status == other.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(map) => map,
            _ => panic!("row fixture must be an object"),
        }
    }

    #[test]
    fn stock_item_requires_an_item_code() {
        let full = row(json!({
            "itemCode": "AB001",
            "itemName": "Bearing",
            "unit": "pcs",
            "currentStock": "100",
            "lastUpdated": "2025-01-01T00:00:00Z"
        }));
        let item = StockItem::from_row(&full).unwrap();
        assert_eq!(item.item_code, "AB001");
        assert_eq!(item.current_stock, "100");

        assert!(StockItem::from_row(&row(json!({"itemName": "No code"}))).is_none());
        assert!(StockItem::from_row(&row(json!({"itemCode": "  "}))).is_none());
    }

    #[test]
    fn stock_item_coerces_numeric_cells() {
        let item = StockItem::from_row(&row(json!({
            "itemCode": "AB001",
            "currentStock": 100
        })))
        .unwrap();
        assert_eq!(item.current_stock, "100");
    }

    #[test]
    fn inward_record_round_trips_through_a_row() {
        let record = InwardRecord {
            record_id: Some(RecordId::new()),
            date: "2025-01-15".to_string(),
            item_code: "AB001".to_string(),
            item_name: "Bearing".to_string(),
            quantity: "25".to_string(),
            unit: "pcs".to_string(),
            supplier: "V1".to_string(),
            status: InwardStatus::Pending,
            last_updated: "2025-01-15T10:00:00Z".to_string(),
        };

        let as_row = record.to_row();
        assert_eq!(as_row["itemCode"], json!("AB001"));
        assert_eq!(as_row["status"], json!("Pending"));

        let back = InwardRecord::from_row(&as_row).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn rows_with_unknown_status_are_skipped() {
        let bad = row(json!({
            "itemCode": "AB001",
            "status": "Cancelled"
        }));
        assert!(InwardRecord::from_row(&bad).is_none());

        let missing = row(json!({"itemCode": "AB001"}));
        assert!(InwardRecord::from_row(&missing).is_none());
    }
}
