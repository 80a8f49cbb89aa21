//! Exactly-once stock-quantity adjustment.

use chrono::{SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde_json::Value;

use inflow_core::{InwardError, InwardResult, field_str, quantity};
use inflow_rowstore::{RowStore, position_for_index};

/// Which way the stock level moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustDirection {
    /// Material received: stock increases.
    Inward,
    /// Material dispatched: stock decreases.
    Outward,
}

/// Applies a quantity delta to one stock-catalog row.
///
/// The caller decides *when* (the status state machine's single authorization
/// point); this service only knows *how*. The write is a plain row overwrite;
/// the store has no transactions, so an adjustment that fails after the
/// inward record already committed leaves the two out of step, and the error
/// is surfaced rather than hidden.
#[derive(Debug, Clone)]
pub struct StockAdjustmentService<S> {
    store: S,
    collection: String,
}

impl<S: RowStore> StockAdjustmentService<S> {
    pub fn new(store: S, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Apply `quantity_delta` to the item's current stock. Returns the new
    /// stock level.
    pub async fn adjust(
        &self,
        item_code: &str,
        quantity_delta: Decimal,
        direction: AdjustDirection,
    ) -> InwardResult<Decimal> {
        let rows = self.store.list(&self.collection).await?;
        let found = rows
            .iter()
            .enumerate()
            .find(|(_, row)| field_str(row, "itemCode").as_deref() == Some(item_code));
        let Some((index, row)) = found else {
            return Err(InwardError::not_found(item_code));
        };

        let current = match field_str(row, "currentStock").and_then(|s| quantity::parse_decimal(&s))
        {
            Some(value) => value,
            None => {
                tracing::warn!(item_code, "unreadable currentStock; treating as 0");
                Decimal::ZERO
            }
        };

        let new_stock = match direction {
            AdjustDirection::Inward => current + quantity_delta,
            AdjustDirection::Outward => current - quantity_delta,
        };

        let mut updated = row.clone();
        updated.insert(
            "currentStock".to_string(),
            Value::String(quantity::format_decimal(new_stock)),
        );
        updated.insert(
            "lastUpdated".to_string(),
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
        );
        self.store
            .update(&self.collection, position_for_index(index), updated)
            .await?;

        tracing::info!(
            item_code,
            delta = %quantity_delta,
            new_stock = %new_stock,
            "stock adjusted"
        );
        Ok(new_stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use inflow_rowstore::InMemoryRowStore;
    use serde_json::json;

    fn stock_row(code: &str, stock: &str) -> inflow_core::Row {
        match json!({"itemCode": code, "itemName": "Bearing", "currentStock": stock}) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn service(store: Arc<InMemoryRowStore>) -> StockAdjustmentService<Arc<InMemoryRowStore>> {
        StockAdjustmentService::new(store, "Stock")
    }

    #[tokio::test]
    async fn inward_adds_and_outward_subtracts() {
        let store = Arc::new(InMemoryRowStore::new());
        store.seed("Stock", vec![stock_row("AB001", "100")]);
        let svc = service(store.clone());

        let new_stock = svc
            .adjust("AB001", "25".parse().unwrap(), AdjustDirection::Inward)
            .await
            .unwrap();
        assert_eq!(new_stock.to_string(), "125");
        assert_eq!(store.rows("Stock")[0]["currentStock"], json!("125"));

        svc.adjust("AB001", "12.5".parse().unwrap(), AdjustDirection::Outward)
            .await
            .unwrap();
        assert_eq!(store.rows("Stock")[0]["currentStock"], json!("112.5"));
    }

    #[tokio::test]
    async fn missing_item_fails_with_not_found() {
        let store = Arc::new(InMemoryRowStore::new());
        store.seed("Stock", vec![stock_row("AB001", "100")]);

        let err = service(store)
            .adjust("ZZ999", "1".parse().unwrap(), AdjustDirection::Inward)
            .await
            .unwrap_err();
        assert_eq!(err, InwardError::not_found("ZZ999"));
    }

    #[tokio::test]
    async fn unreadable_stock_counts_as_zero() {
        let store = Arc::new(InMemoryRowStore::new());
        store.seed("Stock", vec![stock_row("AB001", "n/a")]);

        let new_stock = service(store.clone())
            .adjust("AB001", "10".parse().unwrap(), AdjustDirection::Inward)
            .await
            .unwrap();
        assert_eq!(new_stock.to_string(), "10");
    }

    #[tokio::test]
    async fn adjustment_touches_the_right_row() {
        let store = Arc::new(InMemoryRowStore::new());
        store.seed(
            "Stock",
            vec![stock_row("AA1", "1"), stock_row("AB001", "100"), stock_row("AC3", "7")],
        );

        service(store.clone())
            .adjust("AB001", "5".parse().unwrap(), AdjustDirection::Inward)
            .await
            .unwrap();

        let rows = store.rows("Stock");
        assert_eq!(rows[0]["currentStock"], json!("1"));
        assert_eq!(rows[1]["currentStock"], json!("105"));
        assert_eq!(rows[2]["currentStock"], json!("7"));
    }
}
