// src/http/client.rs

use nexis_api::{ApiPayload, ErrorResponse};
use reqwest::header::{CONTENT_TYPE, COOKIE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Response, Url};
use serde::de::DeserializeOwned;

use super::body::RequestBody;
use crate::config::Config;
use crate::error::ClientError;

/// HTTP adapter for the nexis backend.
///
/// Every call resolves `path` against the configured base URI, attaches the
/// shared headers and turns the outcome into either a decoded body or a
/// [`ClientError`]. Cloning is cheap; clones share the connection pool and
/// cookie store.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
    headers: HeaderMap,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .cookie_store(config.with_credentials)
            .build()?;

        let mut headers = HeaderMap::new();
        if let Some((name, value)) = config.bypass_warning() {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }

        Ok(Self {
            http,
            base: with_trailing_slash(config.api_uri.clone()),
            headers,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Copy of this client that sends `cookie_header` with every request.
    pub fn forwarding_cookies(&self, cookie_header: &str) -> Result<Self, ClientError> {
        let mut forwarded = self.clone();
        forwarded
            .headers
            .insert(COOKIE, HeaderValue::from_str(cookie_header)?);
        Ok(forwarded)
    }

    // === GET ===

    pub async fn get(&self, path: &str) -> Result<ApiPayload, ClientError> {
        let response = self.execute(Method::GET, path, RequestBody::Empty).await?;
        Self::payload(response).await
    }

    /// GET for endpoints whose body has a known type
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.execute(Method::GET, path, RequestBody::Empty).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // === POST / PUT / PATCH / DELETE ===

    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<ApiPayload, ClientError> {
        let response = self.execute(method, path, body).await?;
        Self::payload(response).await
    }

    pub async fn post(&self, path: &str, body: RequestBody) -> Result<ApiPayload, ClientError> {
        self.send(Method::POST, path, body).await
    }

    pub async fn put(&self, path: &str, body: RequestBody) -> Result<ApiPayload, ClientError> {
        self.send(Method::PUT, path, body).await
    }

    pub async fn patch(&self, path: &str, body: RequestBody) -> Result<ApiPayload, ClientError> {
        self.send(Method::PATCH, path, body).await
    }

    pub async fn delete(&self, path: &str) -> Result<ApiPayload, ClientError> {
        self.send(Method::DELETE, path, RequestBody::Empty).await
    }

    // === Internals ===

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidPath {
                path: path.to_string(),
                reason: e.to_string(),
            })
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<Response, ClientError> {
        let url = self.url(path)?;
        tracing::debug!(%method, %url, body = body.kind(), "Sending request");

        let request = self
            .http
            .request(method.clone(), url.clone())
            .headers(self.headers.clone());

        let response = body.apply(request).send().await.map_err(|e| {
            tracing::error!(%method, %url, error = %e, "Request could not be sent");
            ClientError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(%method, %url, %status, "Request succeeded");
            return Ok(response);
        }

        let err = Self::failure(response).await;
        tracing::warn!(%method, %url, %status, error = %err, "Request failed");
        Err(err)
    }

    /// Reads the `error` field of a JSON failure body, if there is one
    async fn failure(response: Response) -> ClientError {
        let status = response.status();
        if !is_json(response.headers()) {
            return ClientError::unknown_status(status);
        }

        match response.json::<ErrorResponse>().await {
            Ok(body) => ClientError::Status {
                status,
                message: body.error,
            },
            Err(e) => {
                tracing::debug!(%status, error = %e, "Failure body has no error field");
                ClientError::unknown_status(status)
            }
        }
    }

    async fn payload(response: Response) -> Result<ApiPayload, ClientError> {
        let status = response.status();
        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ApiPayload::Empty);
        }

        let value: serde_json::Value = serde_json::from_slice(&bytes)?;
        match ApiPayload::classify(value)? {
            ApiPayload::Error(body) => Err(ClientError::Status {
                status,
                message: body.error,
            }),
            payload => {
                tracing::debug!(kind = payload.kind(), "Response classified");
                Ok(payload)
            }
        }
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| {
            let mime = content_type
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
