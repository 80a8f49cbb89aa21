//! Typed CRUD over the inward-material collection.

use std::collections::HashSet;

use chrono::{SecondsFormat, Utc};

use inflow_core::{InwardRecord, InwardResult, RecordId};
use inflow_rowstore::{RowStore, position_for_index};

use crate::validate::validate_record;

fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// CRUD wrapper over the inward collection of the row-store collaborator.
///
/// Rows are addressed by storage position (`data index + 2`); the position a
/// caller computed from a displayed view can go stale whenever any session
/// inserts or deletes, so callers resolve positions against a fresh listing
/// (see the controller's position seam).
#[derive(Debug, Clone)]
pub struct InwardRecordStore<S> {
    store: S,
    collection: String,
}

impl<S: RowStore> InwardRecordStore<S> {
    pub fn new(store: S, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// All parseable records, in storage order.
    pub async fn list(&self) -> InwardResult<Vec<InwardRecord>> {
        Ok(self
            .list_with_positions()
            .await?
            .into_iter()
            .map(|(_, record)| record)
            .collect())
    }

    /// Records paired with their true storage positions.
    ///
    /// Unparseable rows are skipped with a warning but still occupy their
    /// position, so the pairing stays correct past them.
    pub async fn list_with_positions(&self) -> InwardResult<Vec<(u32, InwardRecord)>> {
        let rows = self.store.list(&self.collection).await?;
        let mut records = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let position = position_for_index(index);
            match InwardRecord::from_row(row) {
                Some(record) => records.push((position, record)),
                None => tracing::warn!(
                    collection = %self.collection,
                    position,
                    "skipping unparseable inward row"
                ),
            }
        }
        Ok(records)
    }

    /// Validate, stamp id and timestamp, append one row.
    ///
    /// Nothing is written when validation fails.
    pub async fn create(
        &self,
        mut record: InwardRecord,
        known_item_codes: &HashSet<String>,
    ) -> InwardResult<InwardRecord> {
        validate_record(&record, known_item_codes)?;
        if record.record_id.is_none() {
            record.record_id = Some(RecordId::new());
        }
        record.last_updated = timestamp_now();
        self.store.append(&self.collection, record.to_row()).await?;
        tracing::info!(
            collection = %self.collection,
            item_code = %record.item_code,
            "inward record created"
        );
        Ok(record)
    }

    /// Stamp the timestamp and overwrite the row at `position`.
    pub async fn update(&self, position: u32, mut record: InwardRecord) -> InwardResult<InwardRecord> {
        record.last_updated = timestamp_now();
        self.store
            .update(&self.collection, position, record.to_row())
            .await?;
        tracing::info!(
            collection = %self.collection,
            position,
            item_code = %record.item_code,
            "inward record updated"
        );
        Ok(record)
    }

    /// Remove the row at `position`.
    pub async fn delete(&self, position: u32) -> InwardResult<()> {
        self.store.delete(&self.collection, position).await?;
        tracing::info!(collection = %self.collection, position, "inward record deleted");
        Ok(())
    }
}
