//! Common utilities for the LibreNMS API client
//!
//! Provides the request/response pipeline shared by every resource
//! namespace: URL resolution against `/api/v0/`, auth header injection,
//! JSON body encoding, status checking and envelope decoding.

pub mod query;

use crate::error::LibreNmsError;
use crate::models::scalar::null_default;
use query::QueryParams;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use url::Url;

/// API version segment appended to the base URL
pub const API_VERSION: &str = "v0";

/// Header carrying the API token
pub const AUTH_HEADER: &str = "X-Auth-Token";

/// Error envelope returned by LibreNMS on non-2xx responses
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default, deserialize_with = "null_default")]
    #[allow(dead_code, reason = "decoded for completeness, only message is surfaced")]
    status: String,
    #[serde(default, deserialize_with = "null_default")]
    message: String,
}

/// HTTP client wrapper with authentication
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    api_root: Url,
    token: String,
}

impl HttpClient {
    /// Create a new HTTP client wrapper.
    ///
    /// `base_url` must be `http[s]://<host>[:port]` with an optional trailing
    /// slash and no path.
    pub fn new(client: Client, base_url: &str, token: String) -> Result<Self, LibreNmsError> {
        Ok(Self {
            client,
            api_root: api_root(base_url)?,
            token,
        })
    }

    /// The versioned API root, e.g. `http://librenms:8000/api/v0/`
    pub fn base_url(&self) -> &Url {
        &self.api_root
    }

    /// The API token sent in `X-Auth-Token`
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Get the underlying HTTP client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Resolve a path relative to the API root and attach the query string
    pub fn build_url(&self, path: &str, query: Option<&QueryParams>) -> Result<Url, LibreNmsError> {
        let mut url = self.api_root.join(path.trim_start_matches('/'))?;
        match query {
            Some(q) if !q.is_empty() => url.set_query(Some(&q.encode())),
            _ => url.set_query(None),
        }
        Ok(url)
    }

    /// Build a request for `method path` with an optional JSON body
    pub fn build_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<&QueryParams>,
    ) -> Result<Request, LibreNmsError> {
        let url = self.build_url(path, query)?;

        let mut builder = self
            .client
            .request(method.clone(), url.clone())
            .header(ACCEPT, "application/json")
            .header(AUTH_HEADER, &self.token);

        if let Some(body) = body {
            let payload = serde_json::to_vec(body)?;
            trace!(body = %String::from_utf8_lossy(&payload), "request body");
            builder = builder.header(CONTENT_TYPE, "application/json").body(payload);
        }

        debug!(method = %method, url = %url, "http request");
        Ok(builder.build()?)
    }

    /// Send a request and check the status, returning the raw response
    async fn execute(&self, request: Request) -> Result<Response, LibreNmsError> {
        let method = request.method().clone();
        let url = request.url().clone();

        let response = self.client.execute(request).await?;
        debug!(method = %method, url = %url, status = %response.status(), "http response");

        check_response(response).await
    }

    /// Send a request and return the raw body bytes.
    ///
    /// For endpoints that do not return JSON (graph images).
    pub async fn send_raw(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
    ) -> Result<Vec<u8>, LibreNmsError> {
        let request = self.build_request::<()>(method, path, None, query)?;
        let response = self.execute(request).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Send a request and decode the JSON response
    pub async fn send<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: Option<&QueryParams>,
    ) -> Result<T, LibreNmsError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let request = self.build_request(method, path, body, query)?;
        let response = self.execute(request).await?;
        let bytes = response.bytes().await?;
        decode_body(&bytes)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned + Default>(
        &self,
        path: &str,
        query: Option<&QueryParams>,
    ) -> Result<T, LibreNmsError> {
        self.send::<T, ()>(Method::GET, path, None, query).await
    }

    /// Make a POST request
    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, LibreNmsError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, body, None).await
    }

    /// Make a PUT request
    pub async fn put<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, LibreNmsError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, body, None).await
    }

    /// Make a PATCH request
    pub async fn patch<T, B>(&self, path: &str, body: Option<&B>) -> Result<T, LibreNmsError>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        self.send(Method::PATCH, path, body, None).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned + Default>(&self, path: &str) -> Result<T, LibreNmsError> {
        self.send::<T, ()>(Method::DELETE, path, None, None).await
    }
}

/// Validate `base_url` and append `api/v0/`
fn api_root(base_url: &str) -> Result<Url, LibreNmsError> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }

    let url = Url::parse(&base).map_err(|e| LibreNmsError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.path() != "/" || url.cannot_be_a_base() {
        return Err(LibreNmsError::InvalidBaseUrl(base_url.to_string()));
    }

    Ok(url.join(&format!("api/{API_VERSION}/"))?)
}

/// Turn a non-2xx response into `LibreNmsError::Api`
async fn check_response(response: Response) -> Result<Response, LibreNmsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.text().await {
        Ok(body) => error_message(&body),
        Err(e) => {
            warn!(status = %status, error = %e, "failed to read error response body");
            format!("failed to read response body: {e}")
        }
    };
    Err(LibreNmsError::Api { status, message })
}

/// Message of an error envelope, or the raw body when it does not decode as one
fn error_message(body: &str) -> String {
    if body.trim().is_empty() {
        return String::new();
    }
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.message,
        Err(_) => body.to_string(),
    }
}

/// Decode a 2xx body; an empty body is success with the default value
fn decode_body<T: DeserializeOwned + Default>(bytes: &[u8]) -> Result<T, LibreNmsError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    trace!(body = %String::from_utf8_lossy(bytes), "response body");
    serde_json::from_slice(bytes).map_err(LibreNmsError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BaseResponse;

    fn http(base: &str) -> HttpClient {
        HttpClient::new(Client::new(), base, "token".to_string()).unwrap()
    }

    #[test]
    fn base_url_gets_api_root() {
        assert_eq!(http("http://librenms:8000").base_url().as_str(), "http://librenms:8000/api/v0/");
        assert_eq!(http("https://nms.example.com/").base_url().as_str(), "https://nms.example.com/api/v0/");
    }

    #[test]
    fn base_url_with_path_is_rejected() {
        let err = HttpClient::new(Client::new(), "http://nms/librenms", "t".into()).unwrap_err();
        assert!(matches!(err, LibreNmsError::InvalidBaseUrl(_)));

        let err = HttpClient::new(Client::new(), "not a url", "t".into()).unwrap_err();
        assert!(matches!(err, LibreNmsError::InvalidBaseUrl(_)));

        let err = HttpClient::new(Client::new(), "ftp://nms/", "t".into()).unwrap_err();
        assert!(matches!(err, LibreNmsError::InvalidBaseUrl(_)));
    }

    #[test]
    fn build_url_joins_relative_paths() {
        let client = http("http://nms:8000/");
        let url = client.build_url("devices/core-sw1/ports", None).unwrap();
        assert_eq!(url.as_str(), "http://nms:8000/api/v0/devices/core-sw1/ports");

        let url = client.build_url("/system", None).unwrap();
        assert_eq!(url.as_str(), "http://nms:8000/api/v0/system");
    }

    #[test]
    fn build_url_skips_empty_query() {
        let client = http("http://nms/");
        let url = client.build_url("alerts", Some(&QueryParams::new())).unwrap();
        assert_eq!(url.query(), None);

        let mut q = QueryParams::new();
        q.set("state", 0).set("severity", "critical");
        let url = client.build_url("alerts", Some(&q)).unwrap();
        assert_eq!(url.query(), Some("severity=critical&state=0"));
    }

    #[test]
    fn request_carries_auth_and_json_headers() {
        let client = http("http://nms/");
        let body = serde_json::json!({ "note": "<b>ack</b>" });
        let req = client
            .build_request(Method::PUT, "alerts/5", Some(&body), None)
            .unwrap();

        assert_eq!(req.method(), Method::PUT);
        assert_eq!(req.headers()[AUTH_HEADER], "token");
        assert_eq!(req.headers()[ACCEPT], "application/json");
        assert_eq!(req.headers()[CONTENT_TYPE], "application/json");
        let sent = req.body().and_then(reqwest::Body::as_bytes).unwrap();
        assert_eq!(sent, br#"{"note":"<b>ack</b>"}"#);
    }

    #[test]
    fn request_without_body_has_no_content_type() {
        let client = http("http://nms/");
        let req = client.build_request::<()>(Method::GET, "system", None, None).unwrap();
        assert!(req.headers().get(CONTENT_TYPE).is_none());
        assert!(req.body().is_none());
    }

    #[test]
    fn error_message_prefers_envelope() {
        assert_eq!(
            error_message(r#"{"status":"error","message":"Device not found"}"#),
            "Device not found"
        );
        assert_eq!(error_message("Internal Server Error"), "Internal Server Error");
        assert_eq!(error_message(r#"{"status":"error"}"#), "");
        assert_eq!(error_message(r#"{"status":"error","message":null}"#), "");
        assert_eq!(error_message("[1, 2]"), "[1, 2]");
        assert_eq!(error_message(""), "");
    }

    #[test]
    fn empty_body_decodes_to_default() {
        let resp: BaseResponse = decode_body(b"").unwrap();
        assert_eq!(resp, BaseResponse::default());

        let resp: BaseResponse = decode_body(b"  \n").unwrap();
        assert!(resp.status.is_empty());
    }

    #[test]
    fn invalid_body_is_a_decode_error() {
        let err = decode_body::<BaseResponse>(b"<html>").unwrap_err();
        assert!(matches!(err, LibreNmsError::Decode(_)));
    }
}
