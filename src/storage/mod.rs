//! Key-value persistence for carts and reviews.
//!
//! Every piece of shopper state is mirrored as one serialized value under a
//! namespaced key, the same way a browser keeps it in local storage. The
//! backend is injected through [`KeyValueStore`] so the server can run
//! against process memory or a database table.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::{error::AppResult, middleware::session::Session, models::Category};

mod database;
mod memory;

pub use database::DatabaseStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<String>>;
    async fn set(&self, key: &str, value: String) -> AppResult<()>;
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// What a key holds within one session namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Cart(Category),
    Reviews,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Cart(category) => write!(f, "cart:{}", category.slug()),
            Slot::Reviews => f.write_str("reviews"),
        }
    }
}

#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn KeyValueStore>,
    prefix: Arc<str>,
}

impl Storage {
    pub fn new(backend: Arc<dyn KeyValueStore>, prefix: impl Into<String>) -> Self {
        let prefix: String = prefix.into();
        Self {
            backend,
            prefix: Arc::from(prefix),
        }
    }

    pub fn memory(prefix: impl Into<String>) -> Self {
        Self::new(Arc::new(MemoryStore::default()), prefix)
    }

    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.backend
    }

    /// `{prefix}:{session}:{slot}`
    pub fn key(&self, session: &Session, slot: Slot) -> String {
        format!("{}:{}:{}", self.prefix, session.as_str(), slot)
    }

    /// Reads a mirrored value. A missing key or a value that no longer parses
    /// both yield `T::default()`; the unreadable value is replaced on the next
    /// write.
    pub async fn load_json<T>(&self, key: &str) -> AppResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.backend.get(key).await? else {
            return Ok(T::default());
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding unreadable stored value");
                Ok(T::default())
            }
        }
    }

    pub async fn save_json<T>(&self, key: &str, value: &T) -> AppResult<()>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.backend.set(key, raw).await
    }

    pub async fn remove(&self, key: &str) -> AppResult<()> {
        self.backend.remove(key).await
    }
}
