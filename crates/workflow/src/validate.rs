//! Record validation.
//!
//! Every problem is collected before reporting, so the caller sees all
//! messages at once; nothing is written when validation fails.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use inflow_core::{InwardError, InwardRecord, quantity};

/// Caller-supplied fields of a new or edited inward record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InwardDraft {
    pub date: String,
    pub item_code: String,
    /// Auto-populated on selection; filled from the catalog when left blank.
    pub item_name: String,
    pub quantity: String,
    pub unit: String,
    pub supplier: String,
}

/// Validate the user-editable fields of a record against the stock catalog.
pub fn validate_record(
    record: &InwardRecord,
    known_item_codes: &HashSet<String>,
) -> Result<(), InwardError> {
    let mut messages: Vec<String> = Vec::new();

    if record.date.trim().is_empty() {
        messages.push("date is required".to_string());
    }

    let item_code = record.item_code.trim();
    if item_code.is_empty() {
        messages.push("item code is required".to_string());
    } else if !known_item_codes.contains(item_code) {
        messages.push(format!("unknown item code: {item_code}"));
    }

    if quantity::parse_positive(&record.quantity).is_none() {
        messages.push("quantity must be a positive number".to_string());
    }

    if record.unit.trim().is_empty() {
        messages.push("unit is required".to_string());
    }

    if record.supplier.trim().is_empty() {
        messages.push("supplier is required".to_string());
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(InwardError::Validation(messages))
    }
}
