//! `inflow-workflow` — the material-inward record lifecycle.
//!
//! Orchestrates loading, item selection, validation, submission and the
//! Pending → Completed transition that adjusts stock levels exactly once.
//! All persistence goes through the [`inflow_rowstore::RowStore`]
//! collaborator; the store has no native transactions, so the ordering and
//! failure notes on each operation matter.

pub mod adjustment;
pub mod controller;
pub mod record_store;
pub mod validate;
pub mod view;

pub use adjustment::{AdjustDirection, StockAdjustmentService};
pub use controller::{InwardWorkflowController, ItemSelection, WorkflowConfig};
pub use record_store::InwardRecordStore;
pub use validate::{InwardDraft, validate_record};
pub use view::{Page, SortKey, SortOrder, ViewOptions};
