//! SeaORM adapter for the assignment store.

use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    Set,
};
use tokio::time::timeout;

use crate::entities::assignments;
use crate::error::AppError;
use crate::store::{Assignment, AssignmentStore, StoreError};

/// Per-call deadline. The driver has its own timeouts but this layer does not
/// inherit them blindly; every store call is bounded here.
const STORE_DEADLINE: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct SeaStore {
    conn: DatabaseConnection,
    deadline: Duration,
}

impl SeaStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            deadline: STORE_DEADLINE,
        }
    }

    pub async fn connect(database_url: &str) -> Result<Self, AppError> {
        let conn = Database::connect(database_url)
            .await
            .map_err(|e| AppError::internal(format!("store connect failed: {e}")))?;
        Ok(Self::new(conn))
    }
}

impl From<assignments::Model> for Assignment {
    fn from(model: assignments::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            title: model.title,
            description: model.description,
            kind: model.kind,
            duration: model.duration,
        }
    }
}

#[async_trait]
impl AssignmentStore for SeaStore {
    async fn insert(&self, doc: Assignment) -> Result<(), StoreError> {
        let active = assignments::ActiveModel {
            doc_id: NotSet,
            id: Set(doc.id),
            name: Set(doc.name),
            title: Set(doc.title),
            description: Set(doc.description),
            kind: Set(doc.kind),
            duration: Set(doc.duration),
        };

        timeout(self.deadline, active.insert(&self.conn))
            .await
            .map_err(|_| StoreError::Timeout)?
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Vec<Assignment>, StoreError> {
        let rows = timeout(
            self.deadline,
            assignments::Entity::find()
                .filter(assignments::Column::Id.eq(id))
                .all(&self.conn),
        )
        .await
        .map_err(|_| StoreError::Timeout)?
        .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(rows.into_iter().map(Assignment::from).collect())
    }
}
