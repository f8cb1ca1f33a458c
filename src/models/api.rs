use serde::{ Serialize, Deserialize };
use crate::models::chat::ChatMessage;

/// Body of `GET /api/health`, `POST /api/clear` and every error reply.
#[derive(Serialize, Deserialize, Debug)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn new(status: &str, message: impl Into<String>) -> Self {
        Self { status: status.to_string(), message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("error", message)
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct QueryResponse {
    pub status: String,
    pub response: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ConversationResponse {
    pub status: String,
    pub conversation: Vec<ChatMessage>,
}
