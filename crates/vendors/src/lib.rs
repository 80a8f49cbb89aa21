//! `inflow-vendors` — vendor-reference normalization.
//!
//! Stock rows arrive with their supplier information embedded under
//! unpredictable field names and shapes: a plain scalar code, a delimited
//! list, an array of strings or objects, or a "vendor details" blob that is
//! sometimes truncated mid-array. The extractor runs an ordered chain of
//! total parsing strategies over one opaque row and returns a de-duplicated
//! reference list; it never fails and never mutates its input. When nothing
//! at all is found, the fallback resolver consults the external vendor
//! registry instead.

pub mod extract;
pub mod fallback;
mod repair;
mod scan;
mod strategies;

pub use extract::extract_vendor_references;
pub use fallback::VendorFallbackResolver;
