use crate::agent::Agent;
use crate::error::{ AgentError, Result };
use crate::models::api::{ ConversationResponse, QueryResponse, StatusResponse };
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use axum::{
    body::Bytes,
    routing::{ get, post },
    Router,
    Json,
    extract::State,
    response::{ IntoResponse, Response },
    http::StatusCode,
};
use serde_json::Value;
use tower_http::cors::{ Any, CorsLayer };
use log::{ info, warn, error, debug };

#[derive(Clone)]
struct AppState {
    agent: Arc<Mutex<Agent>>,
}

impl IntoResponse for AgentError {
    fn into_response(self) -> Response {
        let code = if self.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (code, Json(StatusResponse::error(self.to_string()))).into_response()
    }
}

pub fn build_router(agent: Agent) -> Router {
    let app_state = AppState {
        agent: Arc::new(Mutex::new(agent)),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/query", post(query_handler))
        .route("/api/conversation", get(conversation_handler))
        .route("/api/clear", post(clear_handler))
        .layer(cors)
        .with_state(app_state)
}

/// Binds `host` (an IP literal or a resolvable name) on `port`.
pub async fn bind_listener(
    host: &str,
    port: u16,
) -> std::result::Result<TcpListener, Box<dyn Error + Send + Sync>> {
    let listener = TcpListener::bind((host, port)).await.map_err(|e| {
        format!(
            "Failed to bind HTTP server to '{}' port {}: {}. Try a different port.",
            host,
            port,
            e
        )
    })?;
    Ok(listener)
}

pub async fn start_http_server(
    host: &str,
    port: u16,
    agent: Agent,
) -> std::result::Result<(), Box<dyn Error + Send + Sync>> {
    let app = build_router(agent);

    let listener = bind_listener(host, port).await?;
    info!("HTTP API server listening on: http://{}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Pulls the `query` string out of a request body. The body is read as JSON whatever
/// its content type; an empty body counts as a missing query.
pub fn parse_query(body: &[u8]) -> Result<String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AgentError::MissingQuery);
    }
    let value: Value = serde_json::from_slice(body)?;
    match value.get("query") {
        None => Err(AgentError::MissingQuery),
        Some(Value::String(query)) => Ok(query.clone()),
        Some(other) => Err(AgentError::InvalidQuery(json_kind(other).to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

async fn health_handler() -> impl IntoResponse {
    debug!("Health check");
    (StatusCode::OK, Json(StatusResponse::new("ok", "Jarvis API is running")))
}

async fn query_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let query = match parse_query(&body) {
        Ok(q) => q,
        Err(e) if e.is_validation() => {
            warn!("Rejected query request: {}", e);
            return e.into_response();
        }
        Err(e) => {
            error!("Failed to read query request: {}", e);
            return e.into_response();
        }
    };

    let agent = state.agent.lock().await;
    match agent.process_message(&query).await {
        Ok(response) => {
            info!("Answered query ({} chars)", query.chars().count());
            (
                StatusCode::OK,
                Json(QueryResponse {
                    status: "success".into(),
                    response,
                }),
            ).into_response()
        }
        Err(e) => {
            error!("Agent processing error: {}", e);
            e.into_response()
        }
    }
}

async fn conversation_handler(State(state): State<AppState>) -> Response {
    let agent = state.agent.lock().await;
    match agent.conversation().await {
        Ok(conversation) => {
            debug!("Returning {} messages", conversation.len());
            (
                StatusCode::OK,
                Json(ConversationResponse {
                    status: "success".into(),
                    conversation,
                }),
            ).into_response()
        }
        Err(e) => {
            error!("Failed to read conversation: {}", e);
            e.into_response()
        }
    }
}

async fn clear_handler(State(state): State<AppState>) -> Response {
    let agent = state.agent.lock().await;
    match agent.clear().await {
        Ok(()) => {
            (StatusCode::OK, Json(StatusResponse::new("success", "Conversation cleared"))).into_response()
        }
        Err(e) => {
            error!("Failed to clear conversation: {}", e);
            e.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_blank_body_is_a_missing_query() {
        assert!(matches!(parse_query(b""), Err(AgentError::MissingQuery)));
        assert!(matches!(parse_query(b"  \n"), Err(AgentError::MissingQuery)));
    }

    #[test]
    fn body_without_query_key_is_a_missing_query() {
        assert!(matches!(parse_query(b"{}"), Err(AgentError::MissingQuery)));
        assert!(matches!(parse_query(br#"{"text":"hi"}"#), Err(AgentError::MissingQuery)));
        assert!(matches!(parse_query(b"null"), Err(AgentError::MissingQuery)));
        assert!(matches!(parse_query(b"[1,2]"), Err(AgentError::MissingQuery)));
    }

    #[test]
    fn string_query_is_extracted() {
        assert_eq!(parse_query(br#"{"query":"hi"}"#).unwrap(), "hi");
        assert_eq!(parse_query(br#"{"query":""}"#).unwrap(), "");
    }

    #[test]
    fn malformed_json_is_an_internal_failure() {
        let err = parse_query(b"{not json").unwrap_err();
        assert!(matches!(err, AgentError::InvalidJson(_)));
        assert!(!err.is_validation());
    }

    #[test]
    fn non_string_query_is_an_internal_failure() {
        let err = parse_query(br#"{"query":42}"#).unwrap_err();
        assert_eq!(err.to_string(), "query must be a string, got number");
        let err = parse_query(br#"{"query":null}"#).unwrap_err();
        assert_eq!(err.to_string(), "query must be a string, got null");
    }

    #[tokio::test]
    async fn binds_ip_literals_and_host_names() {
        let listener = bind_listener("127.0.0.1", 0).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());

        let listener = bind_listener("localhost", 0).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
