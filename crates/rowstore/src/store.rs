//! Row-store contract and position arithmetic.

use std::sync::Arc;

use thiserror::Error;

use inflow_core::{InwardError, Row};

/// Convert a zero-based data-row index to the collaborator's row position
/// (one header row + 1-based offset).
pub fn position_for_index(index: usize) -> u32 {
    index as u32 + 2
}

/// Inverse of [`position_for_index`]. Positions 0 and 1 address nothing a
/// caller may touch (1 is the header row).
pub fn index_for_position(position: u32) -> Option<usize> {
    position.checked_sub(2).map(|i| i as usize)
}

/// Row-store operation error.
///
/// These are infrastructure failures; domain validation never originates
/// here. There are no retry or timeout semantics; a call resolves or errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("position {position} out of range for collection '{collection}'")]
    PositionOutOfRange { collection: String, position: u32 },
}

impl StoreError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn out_of_range(collection: impl Into<String>, position: u32) -> Self {
        Self::PositionOutOfRange {
            collection: collection.into(),
            position,
        }
    }
}

impl From<StoreError> for InwardError {
    fn from(err: StoreError) -> Self {
        InwardError::Transport(err.to_string())
    }
}

/// Remote row-oriented store addressed by collection name and row position.
///
/// Calls are non-blocking requests: the caller suspends at the await point
/// and resumes on completion. Implementations make no atomicity promises
/// beyond a single call, and no two sessions are coordinated. That matches
/// the upstream backend, which has no native transactions.
#[async_trait::async_trait]
pub trait RowStore: Send + Sync {
    /// All data rows of a collection, in storage order, header-keyed.
    async fn list(&self, collection: &str) -> Result<Vec<Row>, StoreError>;

    /// Append one row after the current last data row.
    async fn append(&self, collection: &str, row: Row) -> Result<(), StoreError>;

    /// Overwrite the row at `position` (`position = data index + 2`).
    async fn update(&self, collection: &str, position: u32, row: Row) -> Result<(), StoreError>;

    /// Remove the row at `position`. Positions of the rows after it shift.
    async fn delete(&self, collection: &str, position: u32) -> Result<(), StoreError>;
}

#[async_trait::async_trait]
impl<S> RowStore for Arc<S>
where
    S: RowStore + ?Sized,
{
    async fn list(&self, collection: &str) -> Result<Vec<Row>, StoreError> {
        (**self).list(collection).await
    }

    async fn append(&self, collection: &str, row: Row) -> Result<(), StoreError> {
        (**self).append(collection, row).await
    }

    async fn update(&self, collection: &str, position: u32, row: Row) -> Result<(), StoreError> {
        (**self).update(collection, position, row).await
    }

    async fn delete(&self, collection: &str, position: u32) -> Result<(), StoreError> {
        (**self).delete(collection, position).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_arithmetic_round_trips() {
        assert_eq!(position_for_index(0), 2);
        assert_eq!(position_for_index(4), 6);
        assert_eq!(index_for_position(2), Some(0));
        assert_eq!(index_for_position(6), Some(4));
        assert_eq!(index_for_position(1), None);
        assert_eq!(index_for_position(0), None);
    }
}
