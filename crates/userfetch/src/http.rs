//! Reqwest-backed HTTP port implementation.

use async_trait::async_trait;

use crate::ports::{HttpError, HttpGet, HttpResponse};

/// Real HTTP access through a shared reqwest client.
#[derive(Clone)]
pub struct ReqwestHttp {
    client: reqwest::Client,
}

impl ReqwestHttp {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestHttp {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpGet for ReqwestHttp {
    async fn get(&self, url: &str) -> Result<Box<dyn HttpResponse>, HttpError> {
        tracing::debug!(url, "issuing GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;
        Ok(Box::new(ReqwestResponse(response)))
    }
}

/// Owns the reqwest response until it is read or dropped.
struct ReqwestResponse(reqwest::Response);

#[async_trait]
impl HttpResponse for ReqwestResponse {
    fn status(&self) -> u16 {
        self.0.status().as_u16()
    }

    async fn bytes(self: Box<Self>) -> Result<Vec<u8>, HttpError> {
        let bytes = self
            .0
            .bytes()
            .await
            .map_err(|e| HttpError::new(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
