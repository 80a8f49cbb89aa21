//! Inward record status lifecycle.
//!
//! The only exposed lifecycle is Pending → Completed; Completed is terminal.
//! The transition is always detected by diffing the stored (pre-edit) status
//! against the requested (post-edit) status at the moment of update, never
//! taken from a caller-supplied flag.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InwardError;

/// Status of an inward-material record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InwardStatus {
    Pending,
    Completed,
}

impl InwardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InwardStatus::Pending => "Pending",
            InwardStatus::Completed => "Completed",
        }
    }
}

impl core::fmt::Display for InwardStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InwardStatus {
    type Err = InwardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Pending" => Ok(InwardStatus::Pending),
            "Completed" => Ok(InwardStatus::Completed),
            other => Err(InwardError::validation(format!(
                "unknown status: {other}"
            ))),
        }
    }
}

/// A requested status change, diffed from the stored status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransition {
    pub from: InwardStatus,
    pub to: InwardStatus,
}

impl StatusTransition {
    pub fn new(from: InwardStatus, to: InwardStatus) -> Self {
        Self { from, to }
    }

    /// Transition table. Completed → Pending is not exposed.
    pub fn is_allowed(&self) -> bool {
        matches!(
            (self.from, self.to),
            (InwardStatus::Pending, InwardStatus::Pending)
                | (InwardStatus::Pending, InwardStatus::Completed)
                | (InwardStatus::Completed, InwardStatus::Completed)
        )
    }

    /// Single authorization point for the stock-quantity side effect.
    ///
    /// True exactly when a record first becomes Completed. Re-saving an
    /// already-Completed record never fires the adjustment again.
    pub fn triggers_stock_adjustment(&self) -> bool {
        matches!(
            (self.from, self.to),
            (InwardStatus::Pending, InwardStatus::Completed)
        )
    }
}
