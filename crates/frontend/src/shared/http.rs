//! JSON-over-HTTP transport.
//!
//! Panels talk to the API through [`ApiClient`] so the request logic can be
//! exercised without a browser. [`GlooClient`] is the real implementation.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::shared::api_utils::api_url;
use crate::shared::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base, query string included.
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            body: Some(body),
        }
    }
}

#[async_trait(?Send)]
pub trait ApiClient {
    /// Issue the request; any non-2xx status is an error.
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError>;
}

/// Browser `fetch` transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooClient;

#[async_trait(?Send)]
impl ApiClient for GlooClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = api_url(&request.path);
        let builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        let sent = match &request.body {
            // `json` sets `Content-Type: application/json`.
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| {
            log::error!("{} {} failed: {}", request.method.as_str(), request.path, e);
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        if !response.ok() {
            log::warn!(
                "{} {} -> {}",
                request.method.as_str(),
                request.path,
                status
            );
            return Err(ApiError::from_error_body(status, &text));
        }

        parse_body(&text)
    }
}

/// An empty 2xx body is `null`, anything else must be JSON.
pub fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET `path` and decode the body as `T`.
pub async fn get_json<T, C>(client: &C, path: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    C: ApiClient + ?Sized,
{
    let value = client.send(ApiRequest::get(path)).await?;
    serde_json::from_value(value).map_err(|e| {
        log::warn!("GET {}: unexpected body: {}", path, e);
        ApiError::Decode(e.to_string())
    })
}

/// Serialize `body` and send it with `method` (POST or PUT).
pub async fn send_json<B, C>(client: &C, method: Method, path: &str, body: &B) -> Result<Value, ApiError>
where
    B: Serialize + ?Sized,
    C: ApiClient + ?Sized,
{
    let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let request = match method {
        Method::Put => ApiRequest::put(path, body),
        _ => ApiRequest::post(path, body),
    };
    client.send(request).await
}

#[cfg(test)]
pub(crate) mod mock {
    //! In-memory [`ApiClient`] that records every request.

    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    #[derive(Default)]
    pub struct MockClient {
        sent: RefCell<Vec<ApiRequest>>,
        responses: RefCell<VecDeque<Result<Value, ApiError>>>,
    }

    impl MockClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(self, response: Result<Value, ApiError>) -> Self {
            self.responses.borrow_mut().push_back(response);
            self
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.sent.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl ApiClient for MockClient {
        async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
            self.sent.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or(Ok(Value::Null))
        }
    }
}
