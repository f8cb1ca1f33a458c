use thiserror::Error;

pub type Result<T> = std::result::Result<T, AgentError>;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("No query provided")]
    MissingQuery,

    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("query must be a string, got {0}")]
    InvalidQuery(String),

    #[error("history store error: {0}")]
    History(String),
}

impl AgentError {
    /// Rejected input, as opposed to a failure while handling valid input.
    pub fn is_validation(&self) -> bool {
        matches!(self, AgentError::MissingQuery)
    }
}
