//! The extractor: composition of the strategy chain.

use std::collections::HashMap;
use std::collections::HashSet;

use inflow_core::{Row, VendorReference};

use crate::strategies;

/// Ordered, code-deduplicated collection point shared by all strategies.
///
/// First occurrence of a code wins its slot; later strategies may only fill
/// a missing name, never overwrite a populated one.
#[derive(Debug, Default)]
pub(crate) struct VendorAccumulator {
    refs: Vec<VendorReference>,
    by_code: HashMap<String, usize>,
}

impl VendorAccumulator {
    pub(crate) fn add(&mut self, code: &str, name: Option<&str>, source: &str) {
        let code = code.trim();
        if code.is_empty() {
            return;
        }
        let name = name.map(str::trim).filter(|n| !n.is_empty());

        match self.by_code.get(code) {
            Some(&i) => {
                if self.refs[i].name.is_none() {
                    if let Some(n) = name {
                        self.refs[i].name = Some(n.to_string());
                    }
                }
            }
            None => {
                tracing::debug!(code, source, "vendor reference extracted");
                self.by_code.insert(code.to_string(), self.refs.len());
                self.refs.push(VendorReference {
                    code: code.to_string(),
                    name: name.map(str::to_string),
                });
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.refs.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    fn into_refs(self) -> Vec<VendorReference> {
        self.refs
    }
}

/// Extract every vendor reference embedded in one opaque stock-item row.
///
/// Runs the strategy chain in order; each strategy only adds unseen codes and
/// fills missing names. Total: malformed data means fewer references, never
/// an error, and the row is never mutated.
pub fn extract_vendor_references(row: &Row) -> Vec<VendorReference> {
    let mut acc = VendorAccumulator::default();
    let mut consumed: HashSet<String> = HashSet::new();

    strategies::scalar_aliases(row, &mut acc, &mut consumed);
    strategies::delimited_strings(row, &mut acc, &mut consumed);
    strategies::array_fields(row, &mut acc, &mut consumed);
    strategies::vendor_details(row, &mut acc, &mut consumed);
    strategies::generic_sweep(row, &mut acc, &mut consumed);
    if acc.is_empty() {
        strategies::full_text_fallback(row, &mut acc);
    }

    acc.into_refs()
}
