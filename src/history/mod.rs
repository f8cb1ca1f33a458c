mod memory;
use async_trait::async_trait;
use log::info;
use std::sync::Arc;
use crate::error::Result;
use crate::models::chat::{ ChatMessage, Role };

pub use memory::MemoryHistoryStore;

/// Ordered transcript of the session. Alternation of roles is left to the caller.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn add_message(&self, role: Role, content: &str) -> Result<()>;

    /// Snapshot of every message appended so far, oldest first.
    async fn get_conversation(&self) -> Result<Vec<ChatMessage>>;

    async fn clear(&self) -> Result<()>;

    async fn len(&self) -> Result<usize> {
        Ok(self.get_conversation().await?.len())
    }
}

pub fn initialize_history_store() -> Arc<dyn HistoryStore> {
    info!("Chat history will be kept in memory until cleared or restarted");
    Arc::new(MemoryHistoryStore::new())
}
