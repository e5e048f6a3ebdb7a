use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, MutexGuard, RwLock};

use crate::{catalog::SearchItem, middleware::session::Session, storage::Storage};

const MAX_HANDOFFS: usize = 10_000;

#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    handoffs: Arc<RwLock<HashMap<Session, Vec<SearchItem>>>>,
    writes: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(storage: Storage) -> Self {
        Self {
            storage,
            handoffs: Arc::default(),
            writes: Arc::default(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Storage::memory("stirling"))
    }

    /// Held across a load-modify-save cycle so each mutation sees the
    /// previous one's result.
    pub async fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().await
    }

    /// Last search results of `session`; never persisted.
    pub async fn search_handoff(&self, session: &Session) -> Vec<SearchItem> {
        self.handoffs
            .read()
            .await
            .get(session)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn set_search_handoff(&self, session: &Session, results: Vec<SearchItem>) {
        let mut handoffs = self.handoffs.write().await;
        if handoffs.len() >= MAX_HANDOFFS && !handoffs.contains_key(session) {
            tracing::debug!(dropped = handoffs.len(), "search hand-off table full, clearing");
            handoffs.clear();
        }
        handoffs.insert(session.clone(), results);
    }
}
