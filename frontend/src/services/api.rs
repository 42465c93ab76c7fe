use async_trait::async_trait;
use gloo::net::http::Request;
use shared::controller::Dashboard;
use shared::gateway::{ApiRequest, ApiResponse, Gateway, Method, Transport};
use shared::DashboardConfig;

use super::storage::BrowserSession;

/// The dashboard's API client as wired up in the browser
pub type ApiClient = Dashboard<FetchTransport, BrowserSession>;

/// Build the API client for the configured backend
pub fn api_client(config: &DashboardConfig) -> ApiClient {
    let session = BrowserSession::new(config.storage_keys.clone());
    Dashboard::new(Gateway::new(
        config.api_base_url.clone(),
        FetchTransport,
        session,
    ))
}

/// Sends requests with the browser's fetch through gloo
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .header("Content-Type", "application/json")
        .header("Authorization", &format!("Bearer {}", request.bearer_token));

        let sent = match request.body {
            Some(body) => {
                builder
                    .body(body)
                    .map_err(|e| format!("Failed to build request: {}", e))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|e| e.to_string())?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        Ok(ApiResponse {
            status,
            status_text,
            body,
        })
    }
}
