//! `inflow-core` — domain foundation for the material-inward workflow.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the inward/stock record model, the status lifecycle, the error taxonomy and
//! the numeric-string quantity handling shared by the other crates.

pub mod error;
pub mod id;
pub mod quantity;
pub mod record;
pub mod status;
pub mod vendor;

pub use error::{InwardError, InwardResult};
pub use id::RecordId;
pub use record::{InwardRecord, Row, StockItem, field_str};
pub use status::{InwardStatus, StatusTransition};
pub use vendor::VendorReference;
