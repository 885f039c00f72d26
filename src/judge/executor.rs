//! Execution service client
//!
//! Wraps the external compiler/execution service: one POST per test case
//! with `{code, language, input}`, answered by `{output}`. All transport
//! and service failures surface as [`ExecutionError`] values so a failing
//! case never aborts the rest of a judging batch. No retries: a failed
//! execution is a legitimate fail signal, not necessarily a transient
//! fault.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    config::ExecutorConfig,
    error::{AppError, AppResult},
};

/// Errors from a single execution call
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error("execution request timed out after {0}s")]
    Timeout(u64),

    #[error("execution service unreachable: {0}")]
    Transport(String),

    #[error("execution service returned {status}: {message}")]
    Service { status: u16, message: String },
}

/// Seam between the judge engine and the execution service
#[async_trait]
pub trait CodeExecutor: Send + Sync {
    /// Run `code` in `language` against `input`, returning the raw stdout
    async fn execute(&self, code: &str, language: &str, input: &str)
        -> Result<String, ExecutionError>;
}

/// HTTP client for the external execution service
#[derive(Debug, Clone)]
pub struct ExecutionClient {
    http: reqwest::Client,
    url: String,
    timeout_seconds: u64,
}

#[derive(Serialize)]
struct ExecuteRequest<'a> {
    code: &'a str,
    language: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct ExecuteResponse {
    #[serde(default)]
    output: String,
}

impl ExecutionClient {
    /// Create a client bound to the configured endpoint and timeout
    pub fn new(config: &ExecutorConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Configuration(format!("execution client: {e}")))?;

        Ok(Self {
            http,
            url: config.url.clone(),
            timeout_seconds: config.timeout_seconds,
        })
    }
}

#[async_trait]
impl CodeExecutor for ExecutionClient {
    async fn execute(
        &self,
        code: &str,
        language: &str,
        input: &str,
    ) -> Result<String, ExecutionError> {
        let response = self
            .http
            .post(&self.url)
            .json(&ExecuteRequest {
                code,
                language,
                input,
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ExecutionError::Timeout(self.timeout_seconds)
                } else {
                    ExecutionError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ExecutionError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body: ExecuteResponse = response
            .json()
            .await
            .map_err(|e| ExecutionError::Transport(format!("invalid response body: {e}")))?;

        Ok(body.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use tokio_test::assert_ok;

    fn client_for(url: String) -> ExecutionClient {
        ExecutionClient::new(&ExecutorConfig {
            url,
            timeout_seconds: 5,
        })
        .unwrap()
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/execute")
    }

    #[tokio::test]
    async fn test_returns_service_output() {
        let router = Router::new().route(
            "/execute",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["language"], "cpp");
                Json(serde_json::json!({ "output": format!("echo:{}", body["input"].as_str().unwrap()) }))
            }),
        );
        let client = client_for(serve(router).await);

        let output = assert_ok!(client.execute("int main(){}", "cpp", "1 2").await);
        assert_eq!(output, "echo:1 2");
    }

    #[tokio::test]
    async fn test_missing_output_field_defaults_to_empty() {
        let router = Router::new().route(
            "/execute",
            post(|| async { Json(serde_json::json!({})) }),
        );
        let client = client_for(serve(router).await);

        let output = assert_ok!(client.execute("code", "python", "").await);
        assert_eq!(output, "");
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_service_error() {
        let router = Router::new().route(
            "/execute",
            post(|| async { (StatusCode::BAD_REQUEST, "compile error") }),
        );
        let client = client_for(serve(router).await);

        let err = client.execute("bad code", "c", "").await.unwrap_err();
        match err {
            ExecutionError::Service { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "compile error");
            }
            other => panic!("expected service error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_is_a_transport_error() {
        // Nothing listens on this port; connect fails immediately.
        let client = client_for("http://127.0.0.1:1/execute".to_string());

        let err = client.execute("code", "rust", "").await.unwrap_err();
        assert!(matches!(err, ExecutionError::Transport(_)));
    }
}
