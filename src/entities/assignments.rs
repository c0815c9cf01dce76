use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One assignment document. `doc_id` is the store-internal row key and never
/// leaves the adapter; the public record is the six remaining fields.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub doc_id: i64,
    pub id: i64,
    pub name: String,
    pub title: String,
    pub description: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub duration: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
