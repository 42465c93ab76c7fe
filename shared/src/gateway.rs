//! Authenticated access to the finance API.
//!
//! The gateway owns the rules every call shares: attach the bearer token,
//! refuse to call out without one, drop the token on a 401, and turn error
//! responses into a message the user can read. The actual HTTP exchange and
//! the token storage are behind the [`Transport`] and [`SessionStore`] seams
//! so the browser and the tests can each plug in their own.

use async_trait::async_trait;
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully prepared API call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub bearer_token: String,
    /// JSON-encoded body
    pub body: Option<String>,
}

/// Raw response as seen by the transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request over the network. Errors are transport failures only;
/// HTTP error statuses come back as a normal [`ApiResponse`].
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String>;
}

/// Where the session token lives between page loads
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    fn clear_token(&self);
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    #[error("Session expired. Please log in again.")]
    SessionExpired,
    #[error("Not authorized. Please log in again.")]
    Unauthorized,
    #[error("API Error: {message}")]
    Api { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Whether the user has to sign in again before anything else can work
    pub fn requires_login(&self) -> bool {
        matches!(self, GatewayError::SessionExpired | GatewayError::Unauthorized)
    }
}

#[derive(Clone)]
pub struct Gateway<T, S> {
    base_url: String,
    transport: T,
    session: S,
}

impl<T: Transport, S: SessionStore> Gateway<T, S> {
    pub fn new(base_url: impl Into<String>, transport: T, session: S) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            session,
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Perform one authenticated call and decode the JSON body into `R`
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<R, GatewayError> {
        let token = match self.session.token() {
            Some(token) if !token.trim().is_empty() => token,
            _ => {
                warn!("{} {} refused: no session token", method.as_str(), endpoint);
                return Err(GatewayError::SessionExpired);
            }
        };

        let request = ApiRequest {
            method,
            url: self.url(endpoint),
            bearer_token: token,
            body,
        };

        debug!("{} {}", method.as_str(), request.url);
        let response = self.transport.send(request).await.map_err(|e| {
            error!("{} {} failed: {}", method.as_str(), endpoint, e);
            GatewayError::Network(e)
        })?;

        if response.status == 401 {
            warn!("{} {} returned 401, clearing session", method.as_str(), endpoint);
            self.session.clear_token();
            return Err(GatewayError::Unauthorized);
        }

        if !response.is_success() {
            let message = error_message(&response);
            error!(
                "{} {} returned {}: {}",
                method.as_str(),
                endpoint,
                response.status,
                message
            );
            return Err(GatewayError::Api {
                status: response.status,
                message,
            });
        }

        let body = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };
        serde_json::from_str(body).map_err(|e| {
            error!("Failed to decode {} response: {}", endpoint, e);
            GatewayError::Decode(e.to_string())
        })
    }

    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, GatewayError> {
        self.request(Method::Get, endpoint, None).await
    }

    pub async fn post<B: Serialize>(
        &self,
        endpoint: &str,
        payload: &B,
    ) -> Result<serde_json::Value, GatewayError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| GatewayError::Decode(format!("Failed to serialize request: {}", e)))?;
        self.request(Method::Post, endpoint, Some(body)).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<serde_json::Value, GatewayError> {
        self.request(Method::Delete, endpoint, None).await
    }
}

/// Message from a JSON `{"message": ...}` error body, else the status text
fn error_message(response: &ApiResponse) -> String {
    let from_body = serde_json::from_str::<serde_json::Value>(&response.body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .filter(|m| !m.trim().is_empty());

    match from_body {
        Some(message) => message,
        None if !response.status_text.is_empty() => response.status_text.clone(),
        None => format!("HTTP {}", response.status),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[tokio::test]
    async fn test_attaches_bearer_token_and_decodes_body() {
        let transport = FakeTransport::default();
        transport.respond(200, r#"{"ok": true}"#);
        let session = MemorySession::with_token("abc123");
        let gateway = gateway(&transport, &session);

        let value: serde_json::Value = gateway.get("data/all").await.unwrap();
        assert_eq!(value["ok"], true);

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].url, "http://api.test/api/data/all");
        assert_eq!(requests[0].bearer_token, "abc123");
        assert_eq!(requests[0].method, Method::Get);
    }

    #[tokio::test]
    async fn test_missing_token_never_reaches_network() {
        let transport = FakeTransport::default();
        let session = MemorySession::default();
        let gateway = gateway(&transport, &session);

        let result: Result<serde_json::Value, _> = gateway.get("data/all").await;
        assert_eq!(result.unwrap_err(), GatewayError::SessionExpired);
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_blank_token_counts_as_missing() {
        let transport = FakeTransport::default();
        let session = MemorySession::with_token("  ");
        let gateway = gateway(&transport, &session);

        let result = gateway.delete("contas/1").await;
        assert!(result.unwrap_err().requires_login());
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_clears_token() {
        let transport = FakeTransport::default();
        transport.respond(401, r#"{"message": "token expired"}"#);
        let session = MemorySession::with_token("stale");
        let gateway = gateway(&transport, &session);

        let err = gateway.delete("transacoes/4").await.unwrap_err();
        assert_eq!(err, GatewayError::Unauthorized);
        assert!(err.requires_login());
        assert_eq!(session.token(), None);
    }

    #[tokio::test]
    async fn test_error_message_from_body() {
        let transport = FakeTransport::default();
        transport.respond(400, r#"{"message": "Categoria já existe"}"#);
        let session = MemorySession::with_token("t");
        let gateway = gateway(&transport, &session);

        let err = gateway
            .post("categorias", &serde_json::json!({"nome": "Lazer"}))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            GatewayError::Api {
                status: 400,
                message: "Categoria já existe".to_string()
            }
        );
        assert_eq!(err.to_string(), "API Error: Categoria já existe");
        assert_eq!(session.token().as_deref(), Some("t"));
    }

    #[tokio::test]
    async fn test_error_message_falls_back_to_status_text() {
        let transport = FakeTransport::default();
        transport.respond(500, "<html>boom</html>");
        transport.respond(418, "");
        let session = MemorySession::with_token("t");
        let gateway = gateway(&transport, &session);

        let err = gateway.delete("contas/1").await.unwrap_err();
        assert_eq!(err.to_string(), "API Error: Internal Server Error");

        let err = gateway.delete("contas/1").await.unwrap_err();
        assert_eq!(err.to_string(), "API Error: HTTP 418");
    }

    #[tokio::test]
    async fn test_network_and_decode_failures() {
        let transport = FakeTransport::default();
        transport.fail("connection refused");
        transport.respond(200, "not json");
        let session = MemorySession::with_token("t");
        let gateway = gateway(&transport, &session);

        let err = gateway.delete("contas/1").await.unwrap_err();
        assert_eq!(err, GatewayError::Network("connection refused".to_string()));
        assert!(!err.requires_login());

        let err = gateway.delete("contas/1").await.unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let transport = FakeTransport::default();
        transport.respond(200, "");
        let session = MemorySession::with_token("t");
        let gateway = gateway(&transport, &session);

        let value = gateway.delete("connect/3").await.unwrap();
        assert!(value.is_null());
    }

    #[test]
    fn test_url_joining() {
        let transport = FakeTransport::default();
        let session = MemorySession::default();
        let gateway = Gateway::new("http://x/api/", transport, session);
        assert_eq!(gateway.url("/contas"), "http://x/api/contas");
        assert_eq!(gateway.url("transacoes/transfer"), "http://x/api/transacoes/transfer");
    }
}
