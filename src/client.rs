//! Authenticated HTTP client.
//!
//! Every request to the backend goes through [`ApiClient`]. The client
//! merges the current credential into outgoing requests (the resolved token
//! always wins over any caller-supplied authorization header) and enforces
//! the one globally-handled status: a 401 clears the whole session and
//! surfaces as [`Error::SessionExpired`] — the original response never
//! reaches the caller. Every other status passes through untouched, with no
//! retries.

use std::time::{Duration, Instant};

use reqwest::{Method, RequestBuilder, Response, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use mindmeter_config::ApiConfig;
use mindmeter_core::{Error, Result};
use mindmeter_session::Session;

/// HTTP client bound to a session store.
///
/// Cheap to clone; clones share the connection pool and the session.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: Session,
}

impl ApiClient {
    /// Builds a client from configuration and an injected session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: ApiConfig, session: Session) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            config,
            session,
        })
    }

    /// The session this client reads credentials from.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// GET a JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.http.get(self.config.url(path));
        let response = self.send(Method::GET, path, builder).await?;
        Self::read_json(response).await
    }

    /// GET a JSON response with query parameters.
    pub async fn get_json_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let builder = self.http.get(self.config.url(path)).query(query);
        let response = self.send(Method::GET, path, builder).await?;
        Self::read_json(response).await
    }

    /// GET a JSON response, falling back to a default on any failure.
    ///
    /// For non-critical reads (notification counts and the like) where a
    /// failure should leave prior state rather than surface an error. The
    /// 401 contract still applies before the fallback.
    pub async fn get_json_or_default<T: DeserializeOwned + Default>(&self, path: &str) -> T {
        match self.get_json(path).await {
            Ok(value) => value,
            Err(Error::SessionExpired) => T::default(),
            Err(e) => {
                debug!(path, error = %e, "Non-critical read failed, using default");
                T::default()
            }
        }
    }

    /// POST a JSON body, expecting a JSON response.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let builder = self.http.post(self.config.url(path)).json(body);
        let response = self.send(Method::POST, path, builder).await?;
        Self::read_json(response).await
    }

    /// POST without a body, discarding any response payload.
    pub async fn post_empty(&self, path: &str) -> Result<()> {
        let builder = self.http.post(self.config.url(path));
        let response = self.send(Method::POST, path, builder).await?;
        Self::check_status(response).await
    }

    /// PUT a JSON body, expecting a JSON response.
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let builder = self.http.put(self.config.url(path)).json(body);
        let response = self.send(Method::PUT, path, builder).await?;
        Self::read_json(response).await
    }

    /// DELETE, discarding any response payload.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let builder = self.http.delete(self.config.url(path));
        let response = self.send(Method::DELETE, path, builder).await?;
        Self::check_status(response).await
    }

    /// Attaches the current credential and executes the request.
    ///
    /// Invariants enforced here, for every request:
    ///
    /// - the stored token overwrites any caller-supplied auth header;
    /// - a 401 clears the session and aborts the call;
    /// - a response that completes after the session was cleared (a logout
    ///   racing an in-flight request) is discarded, not returned.
    async fn send(&self, method: Method, path: &str, builder: RequestBuilder) -> Result<Response> {
        let start = Instant::now();

        let token = self.session.current_token();
        let had_token = token.is_some();
        let builder = match token {
            Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        };

        debug!(method = %method, path, "Sending request");

        let response = builder.send().await?;
        let status = response.status();
        let latency_ms = start.elapsed().as_millis();

        if status == StatusCode::UNAUTHORIZED {
            warn!(
                method = %method,
                path,
                latency_ms,
                "Backend rejected the session, forcing logout"
            );
            self.session.clear_all();
            return Err(Error::SessionExpired);
        }

        if had_token && self.session.current_token().is_none() {
            debug!(path, "Discarding response that completed after logout");
            return Err(Error::SessionExpired);
        }

        debug!(
            method = %method,
            path,
            status = %status.as_u16(),
            latency_ms,
            "Request completed"
        );

        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::api(status.as_u16(), Self::error_message(response).await));
        }
        Ok(response.json().await?)
    }

    async fn check_status(response: Response) -> Result<()> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::api(status.as_u16(), Self::error_message(response).await));
        }
        Ok(())
    }

    /// Extracts a human-readable message from an error response body.
    ///
    /// The backend answers errors as `{"message": ...}` (sometimes
    /// `{"error": ...}`); anything else falls back to the status reason.
    async fn error_message(response: Response) -> String {
        let status = response.status();
        let fallback = || {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        };

        match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("message")
                .or_else(|| body.get("error"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(fallback),
            Err(_) => fallback(),
        }
    }
}
