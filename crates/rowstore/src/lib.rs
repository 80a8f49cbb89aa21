//! `inflow-rowstore` — the remote row-store collaborator boundary.
//!
//! The real store is a remote tabular backend addressed by collection name
//! and 1-based row position, with one header row before the data. Transport,
//! authentication and wire protocol live entirely behind the [`RowStore`]
//! trait; this crate ships the contract plus an in-memory implementation for
//! tests and development.

pub mod in_memory;
pub mod store;

pub use in_memory::InMemoryRowStore;
pub use store::{RowStore, StoreError, index_for_position, position_for_index};
