use std::fmt;

use reqwest::{header, StatusCode, Url};
use serde::de::DeserializeOwned;
use tokio::time::sleep;

use crate::{
    retry::{classify_transport, should_retry},
    ClientOptions, PosFlowError, RequestOptions, Result,
};

/// Base URL of a backend running on the local machine.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

#[derive(Clone)]
/// HTTP client for the POSFlow REST API.
///
/// Construct once and hand clones to every consumer; clones share the
/// underlying connection pool and hold no per-call state.
pub struct PosFlowClient {
    http: reqwest::Client,
    base_url: String,
    options: ClientOptions,
}

impl fmt::Debug for PosFlowClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PosFlowClient")
            .field("base_url", &self.base_url)
            .field("options", &self.options)
            .finish()
    }
}

impl PosFlowClient {
    /// Creates a client for the API rooted at `base_url`
    /// (e.g. `http://localhost:8000/api/v1`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_owned();
        Self {
            http: reqwest::Client::new(),
            base_url,
            options: ClientOptions::default(),
        }
    }

    /// Creates a client for [`DEFAULT_BASE_URL`].
    pub fn localhost() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `POSFLOW_API_URL` — API base URL (required)
    /// - `POSFLOW_TIMEOUT_MS`, `POSFLOW_MAX_ATTEMPTS`, `POSFLOW_RETRY_DELAY_MS` —
    ///   optional overrides of [`ClientOptions`]
    ///
    /// # Example
    ///
    /// ```no_run
    /// use posflow_client::PosFlowClient;
    ///
    /// let api = PosFlowClient::from_env().expect("missing POSFLOW_API_URL");
    /// ```
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("POSFLOW_API_URL").map_err(|_| {
            PosFlowError::Config("missing POSFLOW_API_URL environment variable".to_owned())
        })?;
        if url.trim().is_empty() {
            return Err(PosFlowError::Config(
                "POSFLOW_API_URL is set but empty".to_owned(),
            ));
        }

        let defaults = ClientOptions::default();
        let options = ClientOptions {
            timeout_ms: env_number("POSFLOW_TIMEOUT_MS")?.unwrap_or(defaults.timeout_ms),
            max_attempts: env_number("POSFLOW_MAX_ATTEMPTS")?.unwrap_or(defaults.max_attempts),
            retry_delay_ms: env_number("POSFLOW_RETRY_DELAY_MS")?
                .unwrap_or(defaults.retry_delay_ms),
        };
        Ok(Self::new(url).with_options(options))
    }

    /// Applies client options such as timeout and retry behavior.
    pub fn with_options(mut self, opts: ClientOptions) -> Self {
        self.options = opts;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Performs one logical request and returns the JSON body verbatim.
    ///
    /// Timeouts and connection failures are retried after a fixed delay until
    /// [`ClientOptions::max_attempts`] is reached. HTTP error statuses fail
    /// immediately with [`PosFlowError::Http`].
    pub async fn request(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<serde_json::Value> {
        let url = self.endpoint_url(endpoint)?;
        let max_attempts = self.options.attempt_limit();
        let mut attempt = 1u32;

        loop {
            #[cfg(feature = "tracing")]
            tracing::debug!(method = %options.method, %url, attempt, "sending request");

            match self.send_once(&url, &options, attempt).await {
                Ok(value) => return Ok(value),
                Err(err) if should_retry(&err, attempt, max_attempts) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        attempt,
                        max_attempts,
                        delay_ms = self.options.retry_delay_ms,
                        error = %err,
                        "request failed, retrying"
                    );
                    sleep(self.options.retry_delay()).await;
                    attempt += 1;
                }
                Err(err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(%url, attempt, error = %err, "request failed");
                    return Err(err);
                }
            }
        }
    }

    /// Same as [`PosFlowClient::request`], decoding the body into `T`.
    pub async fn request_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let value = self.request(endpoint, options).await?;
        serde_json::from_value(value)
            .map_err(|err| PosFlowError::Decode(format!("unexpected response shape: {err}")))
    }

    /// Returns `true` if the backend liveness probe answers with a 2xx status.
    ///
    /// The probe lives at `/health` on the server root, outside the API prefix.
    /// A single attempt is made.
    pub async fn health_check(&self) -> bool {
        let Some(url) = health_url(&self.base_url) else {
            return false;
        };
        match self
            .http
            .get(url)
            .timeout(self.options.timeout())
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_err, "health check failed");
                false
            }
        }
    }

    async fn send_once(
        &self,
        url: &str,
        options: &RequestOptions,
        attempt: u32,
    ) -> Result<serde_json::Value> {
        let timeout_ms = self.options.timeout_ms;

        // The timeout covers connecting, sending and reading the whole body.
        let mut builder = self
            .http
            .request(options.method.clone(), url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .headers(options.headers.clone())
            .timeout(self.options.timeout());
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| classify_transport(err, url, timeout_ms, attempt))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| classify_transport(err, url, timeout_ms, attempt))?;

        if !status.is_success() {
            return Err(http_error(status, &body));
        }

        parse_success_body(&body)
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<String> {
        let endpoint = endpoint.trim();
        if endpoint.is_empty() {
            return Err(PosFlowError::InvalidEndpoint(endpoint.to_owned()));
        }
        if endpoint.starts_with('/') {
            Ok(format!("{}{endpoint}", self.base_url))
        } else {
            Ok(format!("{}/{endpoint}", self.base_url))
        }
    }
}

fn env_number<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| PosFlowError::Config(format!("{name} must be a number, got '{raw}'"))),
        Err(_) => Ok(None),
    }
}

fn http_error(status: StatusCode, body: &str) -> PosFlowError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .filter(|message| !message.is_empty())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));

    PosFlowError::Http {
        status: status.as_u16(),
        message,
    }
}

fn parse_success_body(body: &str) -> Result<serde_json::Value> {
    if body.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(body).map_err(|err| {
        PosFlowError::Decode(format!(
            "invalid response JSON: {err}; body: {}",
            body_excerpt(body)
        ))
    })
}

/// Longest body prefix quoted in error messages, in characters.
const BODY_EXCERPT_CHARS: usize = 200;

fn body_excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_owned(),
    }
}

fn health_url(base_url: &str) -> Option<Url> {
    Url::parse(base_url).ok()?.join("/health").ok()
}
