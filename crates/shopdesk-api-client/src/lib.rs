//! Shared HTTP client for the Shopdesk backend.
//!
//! Every screen goes through this client: it attaches the bearer token,
//! tracks the number of requests in flight (the loading indicator reads it),
//! and surfaces backend error text on failure. Domain methods per resource
//! live in [`resources`]; multipart save bodies are built in [`forms`].

pub mod forms;
pub mod resources;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use shopdesk_core::{AdminConfig, SessionStore};

/// API path prefix. Set SHOPDESK_API_PREFIX to match the backend mount point.
pub fn api_prefix() -> String {
    std::env::var("SHOPDESK_API_PREFIX").unwrap_or_else(|_| "/api".to_string())
}

/// Count of requests currently in flight, shared by clones.
///
/// Replaces an ambient global loading flag: the client bumps the count for
/// the duration of every request through an RAII guard, and anything that
/// renders a spinner reads `count()`.
#[derive(Clone, Debug, Default)]
pub struct InFlight {
    count: Arc<AtomicUsize>,
}

impl InFlight {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn is_idle(&self) -> bool {
        self.count() == 0
    }

    fn begin(&self) -> InFlightGuard {
        self.count.fetch_add(1, Ordering::SeqCst);
        InFlightGuard {
            count: Arc::clone(&self.count),
        }
    }
}

struct InFlightGuard {
    count: Arc<AtomicUsize>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.count.fetch_sub(1, Ordering::SeqCst);
    }
}

/// HTTP client for the Shopdesk backend with bearer auth.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    in_flight: InFlight,
    cancel: Option<CancellationToken>,
}

impl ApiClient {
    pub fn new(base_url: String, token: Option<String>) -> Result<Self> {
        Self::with_timeout(base_url, token, Duration::from_secs(60))
    }

    pub fn with_timeout(base_url: String, token: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            in_flight: InFlight::default(),
            cancel: None,
        })
    }

    /// Build a client from config plus the stored session. An explicit
    /// SHOPDESK_API_TOKEN wins over the token saved at login.
    pub fn from_config(config: &AdminConfig, session: &SessionStore) -> Result<Self> {
        let token = config.api_token.clone().or_else(|| session.token.clone());
        Self::with_timeout(
            config.api_url.clone(),
            token,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    /// Attach a cancellation token. A cancelled token fails any request
    /// still in flight instead of letting it race a re-submission.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Gauge of requests in flight; clone it into whatever renders progress.
    pub fn in_flight(&self) -> InFlight {
        self.in_flight.clone()
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }

    /// Send a prepared request: race cancellation, check the status, and
    /// surface backend error text on failure. Callers hold the in-flight
    /// guard so the gauge spans the whole call, body included.
    async fn send_checked(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let send = request.send();
        let response = match &self.cancel {
            Some(cancel) => tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!("request dropped by cancellation token");
                    return Err(anyhow::anyhow!("Request cancelled"));
                }
                result = send => result.context("Failed to send request")?,
            },
            None => send.await.context("Failed to send request")?,
        };

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!(
                "API request failed with status {}: {}",
                status,
                error_text
            ));
        }

        Ok(response)
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let _guard = self.in_flight.begin();
        let response = self.send_checked(request).await?;
        response
            .json()
            .await
            .context("Failed to parse response as JSON")
    }

    /// GET request with optional query parameters. Deserializes JSON response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let mut request = self.apply_auth(self.client.get(self.build_url(path)));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute_json(request).await
    }

    /// POST JSON body and deserialize response.
    pub async fn post_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.apply_auth(self.client.post(self.build_url(path)).json(body));
        self.execute_json(request).await
    }

    /// PUT JSON body and deserialize response.
    pub async fn put_json<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.apply_auth(self.client.put(self.build_url(path)).json(body));
        self.execute_json(request).await
    }

    /// POST multipart form and deserialize response.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let request = self.apply_auth(self.client.post(self.build_url(path)).multipart(form));
        self.execute_json(request).await
    }

    /// Update through a multipart body. The backend routes updates through
    /// POST with a method override field, the convention its forms use.
    pub async fn post_multipart_update<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let form = form.text("_method", "PUT");
        self.post_multipart(path, form).await
    }

    /// POST with no body to an action endpoint, deserializing the response.
    pub async fn post_action<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.apply_auth(self.client.post(self.build_url(path)));
        self.execute_json(request).await
    }

    /// DELETE request. Returns Ok(()) on success.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let request = self.apply_auth(self.client.delete(self.build_url(path)));
        let _guard = self.in_flight.begin();
        self.send_checked(request).await?;
        Ok(())
    }

    /// Raw client for custom requests. Caller must apply auth and the
    /// in-flight gauge themselves.
    pub fn client(&self) -> &Client {
        &self.client
    }
}
