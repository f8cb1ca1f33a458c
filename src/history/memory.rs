use async_trait::async_trait;
use crate::error::Result;
use crate::history::HistoryStore;
use crate::models::chat::{ ChatMessage, Role };
use log::debug;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct MemoryHistoryStore {
    messages: Mutex<Vec<ChatMessage>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn add_message(&self, role: Role, content: &str) -> Result<()> {
        let mut messages = self.messages.lock().await;
        messages.push(ChatMessage::new(role, content));
        debug!("Appended {} message ({} total)", role, messages.len());
        Ok(())
    }

    async fn get_conversation(&self) -> Result<Vec<ChatMessage>> {
        Ok(self.messages.lock().await.clone())
    }

    async fn clear(&self) -> Result<()> {
        let mut messages = self.messages.lock().await;
        debug!("Dropping {} messages", messages.len());
        messages.clear();
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.messages.lock().await.len())
    }
}
