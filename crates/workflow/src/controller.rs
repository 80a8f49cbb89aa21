//! Workflow orchestration: load, selection, submission, lifecycle.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use inflow_core::{
    InwardError, InwardRecord, InwardResult, InwardStatus, StatusTransition, StockItem,
    VendorReference, quantity,
};
use inflow_rowstore::RowStore;
use inflow_vendors::{VendorFallbackResolver, extract_vendor_references};

use crate::adjustment::{AdjustDirection, StockAdjustmentService};
use crate::record_store::InwardRecordStore;
use crate::validate::{InwardDraft, validate_record};
use crate::view::{self, Page, SortKey, SortOrder, ViewOptions};

/// Collection names on the row-store collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub stock_collection: String,
    pub inward_collection: String,
    pub vendor_collection: String,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            stock_collection: "Stock".to_string(),
            inward_collection: "MaterialInward".to_string(),
            vendor_collection: "Vendors".to_string(),
        }
    }
}

/// What item selection feeds back into the entry form.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSelection {
    pub item_code: String,
    pub item_name: String,
    pub unit: String,
    /// Pre-filled only when at least one vendor reference was found;
    /// otherwise the caller forces a manual choice.
    pub supplier: Option<String>,
    pub vendors: Vec<VendorReference>,
}

/// One workflow session.
///
/// Single-threaded and cooperative: every store call is awaited in place, so
/// no two requests of one session are ever in flight together. Sessions are
/// not coordinated with each other: two of them editing the same rows can
/// silently overwrite one another, which matches the upstream store's
/// (absent) transaction model.
pub struct InwardWorkflowController<S: RowStore + Clone> {
    store: S,
    config: WorkflowConfig,
    records_store: InwardRecordStore<S>,
    adjustments: StockAdjustmentService<S>,
    fallback: VendorFallbackResolver<S>,
    stock: Vec<StockItem>,
    records: Vec<InwardRecord>,
    notifications: Vec<String>,
    view: ViewOptions,
}

impl<S: RowStore + Clone> InwardWorkflowController<S> {
    pub fn new(store: S, config: WorkflowConfig) -> Self {
        let records_store = InwardRecordStore::new(store.clone(), config.inward_collection.clone());
        let adjustments = StockAdjustmentService::new(store.clone(), config.stock_collection.clone());
        let fallback = VendorFallbackResolver::new(store.clone(), config.vendor_collection.clone());
        Self {
            store,
            config,
            records_store,
            adjustments,
            fallback,
            stock: Vec::new(),
            records: Vec::new(),
            notifications: Vec::new(),
            view: ViewOptions::default(),
        }
    }

    /// Fetch both sources. Each call is caught on its own: a failed fetch
    /// degrades that source to an empty list and records a notification
    /// instead of aborting the whole view.
    pub async fn load(&mut self) {
        self.notifications.clear();

        match self.store.list(&self.config.stock_collection).await {
            Ok(rows) => {
                self.stock = rows.iter().filter_map(StockItem::from_row).collect();
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load stock items");
                self.stock.clear();
                self.notifications
                    .push(format!("failed to load stock items: {err}"));
            }
        }

        match self.records_store.list().await {
            Ok(records) => self.records = records,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load inward records");
                self.records.clear();
                self.notifications
                    .push(format!("failed to load inward records: {err}"));
            }
        }

        tracing::debug!(
            stock_items = self.stock.len(),
            inward_records = self.records.len(),
            "workflow loaded"
        );
    }

    pub fn stock_items(&self) -> &[StockItem] {
        &self.stock
    }

    pub fn records(&self) -> &[InwardRecord] {
        &self.records
    }

    /// Degradation notes collected by the last [`load`](Self::load).
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.view.query = query.into();
    }

    pub fn set_sort(&mut self, key: SortKey, order: SortOrder) {
        self.view.sort = Some((key, order));
    }

    pub fn clear_sort(&mut self) {
        self.view.sort = None;
    }

    pub fn set_page(&mut self, number: usize, size: usize) {
        self.view.page = Some(Page { number, size });
    }

    /// The records as currently displayed: filtered, sorted, paged.
    pub fn visible_records(&self) -> Vec<&InwardRecord> {
        view::apply(&self.records, &self.view)
    }

    /// Run extraction for the selected item; consult the registry fallback
    /// only when extraction found nothing.
    pub async fn select_item(&self, item_code: &str) -> InwardResult<ItemSelection> {
        let item = self
            .stock
            .iter()
            .find(|i| i.item_code == item_code)
            .ok_or_else(|| InwardError::not_found(item_code))?;

        let mut vendors = extract_vendor_references(&item.raw);
        if vendors.is_empty() {
            tracing::debug!(item_code, "extraction empty; consulting vendor registry");
            vendors = self.fallback.resolve().await;
        }

        let supplier = vendors.first().map(|v| v.code.clone());
        Ok(ItemSelection {
            item_code: item.item_code.clone(),
            item_name: item.item_name.clone(),
            unit: item.unit.clone(),
            supplier,
            vendors,
        })
    }

    /// Validate and persist a new Pending record.
    pub async fn submit(&mut self, draft: InwardDraft) -> InwardResult<InwardRecord> {
        let record = self.record_from_draft(draft, InwardStatus::Pending, None);
        let stored = self
            .records_store
            .create(record, &self.known_item_codes())
            .await?;
        self.load().await;
        Ok(stored)
    }

    /// Persist edits to the record at `display_index` of the current view.
    ///
    /// The status transition is diffed against the stored record at the
    /// moment of update; the stock adjustment fires exactly on the
    /// Pending → Completed edge. If the adjustment fails, the record write
    /// has already committed; the error is surfaced, not rolled back.
    pub async fn update_record(
        &mut self,
        display_index: usize,
        edited: InwardDraft,
        requested_status: InwardStatus,
    ) -> InwardResult<InwardRecord> {
        let (position, stored) = self.resolve_position(display_index).await?;

        let transition = StatusTransition::new(stored.status, requested_status);
        if !transition.is_allowed() {
            return Err(InwardError::validation(format!(
                "status cannot change from {} to {}",
                transition.from, transition.to
            )));
        }

        let record = self.record_from_draft(edited, requested_status, stored.record_id);
        validate_record(&record, &self.known_item_codes())?;

        let written = self.records_store.update(position, record).await?;

        let adjustment = if transition.triggers_stock_adjustment() {
            match quantity::parse_positive(&written.quantity) {
                Some(delta) => self
                    .adjustments
                    .adjust(&written.item_code, delta, AdjustDirection::Inward)
                    .await
                    .map(Some),
                None => Err(InwardError::validation(
                    "quantity must be a positive number",
                )),
            }
        } else {
            Ok(None)
        };

        self.load().await;
        adjustment?;
        Ok(written)
    }

    /// Delete the record at `display_index` of the current view.
    pub async fn delete_record(&mut self, display_index: usize) -> InwardResult<InwardRecord> {
        let (position, stored) = self.resolve_position(display_index).await?;
        self.records_store.delete(position).await?;
        self.load().await;
        Ok(stored)
    }

    /// The position-resolution seam.
    ///
    /// Display order diverges from storage order under filter/sort/paging,
    /// and other sessions shift positions at will. So: take the identity of
    /// the displayed record, re-list the collection, and find its current
    /// storage position: by synthetic id when the row has one, by field
    /// identity otherwise.
    async fn resolve_position(&self, display_index: usize) -> InwardResult<(u32, InwardRecord)> {
        let target = self
            .visible_records()
            .get(display_index)
            .copied()
            .cloned()
            .ok_or_else(|| {
                InwardError::validation(format!("no displayed record at index {display_index}"))
            })?;

        let listed = self.records_store.list_with_positions().await?;
        let found = match target.record_id {
            Some(id) => listed.into_iter().find(|(_, r)| r.record_id == Some(id)),
            None => listed
                .into_iter()
                .find(|(_, r)| r.matches_identity(&target)),
        };

        found.ok_or_else(|| {
            InwardError::validation("record no longer exists in the store".to_string())
        })
    }

    fn known_item_codes(&self) -> HashSet<String> {
        self.stock.iter().map(|i| i.item_code.clone()).collect()
    }

    fn record_from_draft(
        &self,
        draft: InwardDraft,
        status: InwardStatus,
        record_id: Option<inflow_core::RecordId>,
    ) -> InwardRecord {
        let item_code = draft.item_code.trim().to_string();
        let item_name = if draft.item_name.trim().is_empty() {
            self.stock
                .iter()
                .find(|i| i.item_code == item_code)
                .map(|i| i.item_name.clone())
                .unwrap_or_default()
        } else {
            draft.item_name.trim().to_string()
        };

        InwardRecord {
            record_id,
            date: draft.date.trim().to_string(),
            item_code,
            item_name,
            quantity: draft.quantity.trim().to_string(),
            unit: draft.unit.trim().to_string(),
            supplier: draft.supplier.trim().to_string(),
            status,
            last_updated: String::new(),
        }
    }
}
