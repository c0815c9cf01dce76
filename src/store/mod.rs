//! Assignment store seam.
//!
//! Routes talk to `AssignmentStore` only; the sea-orm adapter is the
//! production implementation and the in-memory adapter backs the integration
//! tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod memory;
pub mod sea;

/// Wire-shape assignment record: exactly the six public fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),
    #[error("store call exceeded its deadline")]
    Timeout,
}

#[async_trait]
pub trait AssignmentStore: Send + Sync + std::fmt::Debug {
    /// Insert one document with exactly the record's six fields.
    async fn insert(&self, doc: Assignment) -> Result<(), StoreError>;

    /// All documents whose `id` matches, internal row key excluded.
    async fn find_by_id(&self, id: i64) -> Result<Vec<Assignment>, StoreError>;
}
