//! The ordered extraction strategies.
//!
//! Each strategy is total: it inspects the row, feeds whatever it recognizes
//! into the accumulator and ignores the rest. No strategy errors, none
//! mutates the row.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use inflow_core::Row;

use crate::extract::VendorAccumulator;
use crate::{repair, scan};

/// Canonical scalar code aliases, in lookup order.
const CODE_ALIASES: &[&str] = &[
    "vendorCode",
    "VendorCode",
    "vendor_code",
    "vendorcode",
    "supplierCode",
    "SupplierCode",
    "supplier_code",
    "vendor",
    "Vendor",
    "supplier",
    "Supplier",
];

const NAME_ALIASES: &[&str] = &[
    "vendorName",
    "VendorName",
    "vendor_name",
    "supplierName",
    "SupplierName",
    "supplier_name",
];

const ARRAY_ALIASES: &[&str] = &[
    "vendors",
    "Vendors",
    "suppliers",
    "Suppliers",
    "vendorList",
    "supplierList",
    "vendorCodes",
    "supplierCodes",
];

/// The designated "vendor details" payload field.
const PAYLOAD_ALIASES: &[&str] = &[
    "vendorDetails",
    "VendorDetails",
    "vendor_details",
    "supplierDetails",
    "SupplierDetails",
    "supplier_details",
];

/// Object-shaped entries use their own key aliases.
const OBJECT_CODE_KEYS: &[&str] = &["vendorCode", "code", "supplierCode", "vendorId"];
const OBJECT_NAME_KEYS: &[&str] = &["vendorName", "name", "supplierName"];

/// Catalog columns that never carry vendor data; excluded from free-text
/// scans so an item's own code is not read back as its vendor.
const RESERVED_ITEM_FIELDS: &[&str] = &["itemCode", "itemName", "unit", "currentStock", "lastUpdated"];

static VENDOR_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)vendor|supplier").expect("vendor field pattern"));

static NAME_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)name").expect("name field pattern"));

fn scalar_str(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

fn is_delimited(text: &str) -> bool {
    text.contains(',') || text.contains(';')
}

fn split_delimited(text: &str) -> impl Iterator<Item = &str> {
    text.split([',', ';']).map(str::trim).filter(|s| !s.is_empty())
}

fn object_entry(map: &serde_json::Map<String, Value>) -> Option<(String, Option<String>)> {
    let code = OBJECT_CODE_KEYS
        .iter()
        .find_map(|k| map.get(*k).and_then(scalar_str))?;
    let name = OBJECT_NAME_KEYS
        .iter()
        .find_map(|k| map.get(*k).and_then(scalar_str));
    Some((code, name))
}

fn collect_array(items: &[Value], acc: &mut VendorAccumulator, source: &str) {
    for item in items {
        match item {
            Value::Object(map) => {
                if let Some((code, name)) = object_entry(map) {
                    acc.add(&code, name.as_deref(), source);
                }
            }
            other => {
                if let Some(code) = scalar_str(other) {
                    acc.add(&code, None, source);
                }
            }
        }
    }
}

/// Dispatch a successfully parsed payload value.
fn collect_structured(value: &Value, acc: &mut VendorAccumulator, source: &str) {
    match value {
        Value::Array(items) => collect_array(items, acc, source),
        Value::Object(map) => {
            if let Some((code, name)) = object_entry(map) {
                acc.add(&code, name.as_deref(), source);
            }
        }
        other => {
            if let Some(code) = scalar_str(other) {
                acc.add(&code, None, source);
            }
        }
    }
}

/// Everything outside the catalog columns, rendered as one text blob.
fn unclaimed_text(row: &Row) -> String {
    let mut text = String::new();
    for (key, value) in row {
        if RESERVED_ITEM_FIELDS.contains(&key.as_str()) {
            continue;
        }
        if !text.is_empty() {
            text.push(' ');
        }
        match value {
            Value::String(s) => text.push_str(s),
            other => text.push_str(&other.to_string()),
        }
    }
    text
}

/// Strategy 1: scalar code fields under the canonical aliases; the first
/// present scalar name alias pairs with the first code found.
pub(crate) fn scalar_aliases(row: &Row, acc: &mut VendorAccumulator, consumed: &mut HashSet<String>) {
    let mut pending_name: Option<String> = None;
    for key in NAME_ALIASES {
        if let Some(name) = row.get(*key).and_then(scalar_str) {
            pending_name = Some(name);
            consumed.insert((*key).to_string());
            break;
        }
    }

    for key in CODE_ALIASES {
        let Some(code) = row.get(*key).and_then(scalar_str) else {
            continue;
        };
        // Delimited lists belong to the next strategy.
        if is_delimited(&code) {
            continue;
        }
        acc.add(&code, pending_name.take().as_deref(), "scalar-alias");
        consumed.insert((*key).to_string());
    }
}

/// Strategy 2: comma/semicolon separated code lists under the same scalar
/// aliases.
pub(crate) fn delimited_strings(row: &Row, acc: &mut VendorAccumulator, consumed: &mut HashSet<String>) {
    for key in CODE_ALIASES {
        let Some(text) = row.get(*key).and_then(scalar_str) else {
            continue;
        };
        if !is_delimited(&text) {
            continue;
        }
        for code in split_delimited(&text) {
            acc.add(code, None, "delimited-string");
        }
        consumed.insert((*key).to_string());
    }
}

/// Strategy 3: array fields of plain strings or `{code,name}`-shaped objects.
pub(crate) fn array_fields(row: &Row, acc: &mut VendorAccumulator, consumed: &mut HashSet<String>) {
    for key in ARRAY_ALIASES {
        let Some(Value::Array(items)) = row.get(*key) else {
            continue;
        };
        collect_array(items, acc, "array-field");
        consumed.insert((*key).to_string());
    }
}

/// Strategy 4: the designated vendor-details payload.
///
/// Attempted in order: structured parse; truncation repair and re-parse;
/// literal key/value scan with ordinal pairing; vendor-code-shape scan over
/// the row's unclaimed text. Parse failures degrade, they never escape.
pub(crate) fn vendor_details(row: &Row, acc: &mut VendorAccumulator, consumed: &mut HashSet<String>) {
    let mut saw_payload = false;
    let before = acc.len();

    for key in PAYLOAD_ALIASES {
        let Some(value) = row.get(*key) else {
            continue;
        };
        saw_payload = true;
        consumed.insert((*key).to_string());

        match value {
            Value::String(text) => collect_payload_text(text, acc),
            other => collect_structured(other, acc, "payload-value"),
        }
    }

    if saw_payload && acc.len() == before {
        // The payload carried nothing recognizable; last resort is the
        // code-shape scan over everything unclaimed on the row.
        for code in scan::code_tokens(&unclaimed_text(row)) {
            acc.add(&code, None, "payload-token-scan");
        }
    }
}

fn collect_payload_text(text: &str, acc: &mut VendorAccumulator) {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        collect_structured(&value, acc, "payload-parsed");
        return;
    }

    if let Some(repaired) = repair::repair_truncated(text) {
        if let Ok(value) = serde_json::from_str::<Value>(&repaired) {
            tracing::debug!("vendor payload repaired after truncation");
            collect_structured(&value, acc, "payload-repaired");
            return;
        }
    }

    let pairs = scan::literal_pairs(text);
    if !pairs.is_empty() {
        tracing::debug!(count = pairs.len(), "vendor payload scanned for literal pairs");
        for (code, name) in pairs {
            acc.add(&code, name.as_deref(), "payload-literal-scan");
        }
    }
}

/// Strategy 5: generic sweep of every remaining field whose name mentions
/// vendor/supplier, re-applying the scalar/delimited/array logic.
pub(crate) fn generic_sweep(row: &Row, acc: &mut VendorAccumulator, consumed: &mut HashSet<String>) {
    for (key, value) in row {
        if consumed.contains(key) || RESERVED_ITEM_FIELDS.contains(&key.as_str()) {
            continue;
        }
        if !VENDOR_FIELD_RE.is_match(key) {
            continue;
        }
        // Name-only fields hold names, not codes.
        if NAME_FIELD_RE.is_match(key) {
            continue;
        }
        match value {
            Value::Array(items) => collect_array(items, acc, "sweep-array"),
            Value::Object(map) => {
                if let Some((code, name)) = object_entry(map) {
                    acc.add(&code, name.as_deref(), "sweep-object");
                }
            }
            other => {
                if let Some(text) = scalar_str(other) {
                    if is_delimited(&text) {
                        for code in split_delimited(&text) {
                            acc.add(code, None, "sweep-delimited");
                        }
                    } else {
                        acc.add(&text, None, "sweep-scalar");
                    }
                }
            }
        }
    }
}

/// Strategy 6: absolute fallback, one more code-shape scan when everything
/// above produced nothing.
pub(crate) fn full_text_fallback(row: &Row, acc: &mut VendorAccumulator) {
    for code in scan::code_tokens(&unclaimed_text(row)) {
        acc.add(&code, None, "full-text-scan");
    }
}
