//! In-memory assignment store, used by the integration tests.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::store::{Assignment, AssignmentStore, StoreError};

#[derive(Debug, Default)]
pub struct MemStore {
    docs: RwLock<Vec<Assignment>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.read().is_empty()
    }
}

#[async_trait]
impl AssignmentStore for MemStore {
    async fn insert(&self, doc: Assignment) -> Result<(), StoreError> {
        self.docs.write().push(doc);
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Vec<Assignment>, StoreError> {
        Ok(self
            .docs
            .read()
            .iter()
            .filter(|doc| doc.id == id)
            .cloned()
            .collect())
    }
}
