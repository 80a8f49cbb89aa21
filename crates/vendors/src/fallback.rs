//! Registry fallback for items whose rows carry no extractable vendor.

use inflow_core::{Row, VendorReference, field_str};
use inflow_rowstore::RowStore;

const REGISTRY_CODE_ALIASES: &[&str] = &["vendorCode", "code", "supplierCode", "vendorId"];
const REGISTRY_NAME_ALIASES: &[&str] = &["vendorName", "name", "supplierName"];

/// Resolves the full vendor registry when extraction came up empty.
///
/// Read-only consumer of the registry collection. Registry failures are
/// absorbed: the caller gets an empty list and picks a supplier manually.
#[derive(Debug, Clone)]
pub struct VendorFallbackResolver<S> {
    store: S,
    collection: String,
}

impl<S: RowStore> VendorFallbackResolver<S> {
    pub fn new(store: S, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Fetch and map the registry. Entries without a code are dropped.
    pub async fn resolve(&self) -> Vec<VendorReference> {
        let rows = match self.store.list(&self.collection).await {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(
                    collection = %self.collection,
                    error = %err,
                    "vendor registry lookup failed; continuing without fallback"
                );
                return Vec::new();
            }
        };

        rows.iter().filter_map(registry_reference).collect()
    }
}

fn registry_reference(row: &Row) -> Option<VendorReference> {
    let code = REGISTRY_CODE_ALIASES
        .iter()
        .find_map(|k| field_str(row, k))?;
    let name = REGISTRY_NAME_ALIASES
        .iter()
        .find_map(|k| field_str(row, k));
    Some(VendorReference { code, name })
}
