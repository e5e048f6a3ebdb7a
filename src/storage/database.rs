use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseConnection, EntityTrait, Set, sea_query::OnConflict};

use super::KeyValueStore;
use crate::{
    entity::storage_entries::{ActiveModel, Column, Entity as StorageEntries},
    error::AppResult,
};

/// Stores each key as one row of `storage_entries`.
#[derive(Clone)]
pub struct DatabaseStore {
    orm: DatabaseConnection,
}

impl DatabaseStore {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self { orm }
    }
}

#[async_trait]
impl KeyValueStore for DatabaseStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entry = StorageEntries::find_by_id(key.to_string())
            .one(&self.orm)
            .await?;
        Ok(entry.map(|model| model.value))
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        let active = ActiveModel {
            key: Set(key.to_string()),
            value: Set(value),
            updated_at: Set(Utc::now().fixed_offset()),
        };
        StorageEntries::insert(active)
            .on_conflict(
                OnConflict::column(Column::Key)
                    .update_columns([Column::Value, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.orm)
            .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        StorageEntries::delete_by_id(key.to_string())
            .exec(&self.orm)
            .await?;
        Ok(())
    }
}
