// Attendance backend HTTP client
//
// Wraps `reqwest::Client` with base-URL construction, FastAPI-style
// `{"detail": "..."}` error extraction, and session-cookie handling.
// Endpoint families (employees, admins, photos, ...) are implemented
// as inherent methods via separate files to keep this module focused
// on transport mechanics.

use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// FastAPI error body: `{"detail": "..."}`.
#[derive(serde::Deserialize)]
struct DetailBody {
    detail: Option<String>,
}

/// HTTP client for the attendance backend.
///
/// Every request goes through the shared cookie jar, so a successful
/// login credentials all subsequent calls. There is no token refresh
/// and no retry policy; each operation is a single request-response
/// cycle and every failure is terminal for that operation.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    /// Jar reference for session persistence (one-shot CLI invocations
    /// re-seed it from disk before the startup probe).
    cookie_jar: Arc<Jar>,
}

impl ApiClient {
    /// Create a new client from a base URL and transport settings.
    ///
    /// If the config doesn't already include a cookie jar, one is
    /// created automatically: session auth requires cookies.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let config = if transport.cookie_jar.is_some() {
            transport.clone()
        } else {
            transport.clone().with_cookie_jar()
        };
        let cookie_jar = config
            .cookie_jar
            .clone()
            .unwrap_or_else(|| Arc::new(Jar::default()));
        let http = config.build_client()?;
        Ok(Self {
            http,
            base_url,
            cookie_jar,
        })
    }

    /// Create a client with a pre-built `reqwest::Client` (tests).
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url,
            cookie_jar: Arc::new(Jar::default()),
        }
    }

    /// The backend base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── Session cookie persistence ───────────────────────────────────

    /// Extract the current session cookie header value, if any.
    ///
    /// Returns the `Cookie` header string (e.g. `"access_token=abc"`)
    /// for saving between CLI invocations.
    pub fn cookie_header(&self) -> Option<String> {
        let cookies = self.cookie_jar.cookies(&self.base_url)?;
        cookies.to_str().ok().map(String::from)
    }

    /// Seed the jar with a previously saved cookie header value.
    pub fn restore_cookie(&self, header: &str) {
        trace!("restoring session cookie");
        for cookie in header.split("; ") {
            self.cookie_jar.add_cookie_str(cookie, &self.base_url);
        }
    }

    // ── URL builder ─────────────────────────────────────────────────

    /// Build a full URL for an API path relative to the base URL.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    // ── Request helpers ─────────────────────────────────────────────

    /// Send a GET request and decode the JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        self.parse_response(resp).await
    }

    /// Send a POST request with a JSON body.
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl serde::Serialize + Sync),
    ) -> Result<T, Error> {
        debug!("POST {}", url);
        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.parse_response(resp).await
    }

    /// Send a POST request with an empty body.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("POST {}", url);
        let resp = self.http.post(url).send().await.map_err(Error::Transport)?;
        self.parse_response(resp).await
    }

    /// Send a POST request with form-encoded fields (login, passwords).
    pub(crate) async fn post_form<T: DeserializeOwned>(
        &self,
        url: Url,
        fields: &[(&str, &str)],
    ) -> Result<T, Error> {
        debug!("POST {} (form)", url);
        let resp = self
            .http
            .post(url)
            .form(fields)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.parse_response(resp).await
    }

    /// Send a POST request with a multipart form (uploads).
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        url: Url,
        form: reqwest::multipart::Form,
    ) -> Result<T, Error> {
        debug!("POST {} (multipart)", url);
        let resp = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.parse_response(resp).await
    }

    /// Send a PUT request with a multipart form.
    pub(crate) async fn put_multipart<T: DeserializeOwned>(
        &self,
        url: Url,
        form: reqwest::multipart::Form,
    ) -> Result<T, Error> {
        debug!("PUT {} (multipart)", url);
        let resp = self
            .http
            .put(url)
            .multipart(form)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.parse_response(resp).await
    }

    /// Send a DELETE request.
    pub(crate) async fn delete<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("DELETE {}", url);
        let resp = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.parse_response(resp).await
    }

    /// Decode a response, mapping error statuses to [`Error`] with the
    /// backend's `detail` message where one is present.
    ///
    /// 401 becomes [`Error::Authentication`] so callers can distinguish
    /// the expected-unauthenticated probe outcome from real failures.
    pub(crate) async fn parse_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        if !status.is_success() {
            let detail = serde_json::from_str::<DetailBody>(&body)
                .ok()
                .and_then(|b| b.detail)
                .unwrap_or_else(|| format!("HTTP {status}"));

            if status == reqwest::StatusCode::UNAUTHORIZED {
                return Err(Error::Authentication { message: detail });
            }
            return Err(Error::Api {
                status: status.as_u16(),
                message: detail,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    }
}
