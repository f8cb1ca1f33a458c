use crate::error::Result;
use crate::history::HistoryStore;
use crate::models::chat::{ ChatMessage, Role };
use crate::responder::generate_response;

use log::{ info, debug };
use std::sync::Arc;

#[derive(Clone)]
pub struct Agent {
    history_store: Arc<dyn HistoryStore>,
}

impl Agent {
    pub fn new(history_store: Arc<dyn HistoryStore>) -> Self {
        Self { history_store }
    }

    /// Records the query, picks a reply and records the reply. A failed append is
    /// returned as-is; nothing already stored is rolled back.
    pub async fn process_message(&self, content: &str) -> Result<String> {
        debug!("Processing query: {:?}", content);
        self.history_store.add_message(Role::User, content).await?;

        let response = generate_response(content);

        self.history_store.add_message(Role::Assistant, response).await?;
        Ok(response.to_string())
    }

    pub async fn conversation(&self) -> Result<Vec<ChatMessage>> {
        self.history_store.get_conversation().await
    }

    pub async fn clear(&self) -> Result<()> {
        let dropped = self.history_store.len().await?;
        self.history_store.clear().await?;
        info!("Conversation cleared ({} messages dropped)", dropped);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistoryStore;

    fn agent() -> Agent {
        Agent::new(Arc::new(MemoryHistoryStore::new()))
    }

    #[tokio::test]
    async fn query_cycle_appends_user_then_assistant() {
        let agent = agent();
        let reply = agent.process_message("hi").await.unwrap();
        assert_eq!(reply, "Hello! How can I help you today?");

        let conversation = agent.conversation().await.unwrap();
        assert_eq!(
            conversation,
            vec![ChatMessage::new(Role::User, "hi"), ChatMessage::new(Role::Assistant, reply)]
        );
    }

    #[tokio::test]
    async fn sequential_queries_keep_order() {
        let agent = agent();
        agent.process_message("hi").await.unwrap();
        agent.process_message("bye").await.unwrap();

        let conversation = agent.conversation().await.unwrap();
        let pairs: Vec<(Role, &str)> = conversation
            .iter()
            .map(|m| (m.role, m.content.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (Role::User, "hi"),
                (Role::Assistant, "Hello! How can I help you today?"),
                (Role::User, "bye"),
                (Role::Assistant, "Goodbye! Feel free to ask for assistance anytime.")
            ]
        );
    }

    #[tokio::test]
    async fn clear_forgets_history() {
        let agent = agent();
        agent.process_message("weather?").await.unwrap();
        agent.clear().await.unwrap();
        assert!(agent.conversation().await.unwrap().is_empty());
    }
}
