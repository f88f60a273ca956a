//! Port traits for injecting HTTP access.

use async_trait::async_trait;

/// Transport-level failure raised by an HTTP port.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct HttpError(String);

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A response whose status is visible before the body is read.
///
/// Reading the body consumes the response; dropping it unread releases the
/// underlying connection resources on early-return paths.
#[async_trait]
pub trait HttpResponse: Send {
    /// HTTP status code of the response.
    fn status(&self) -> u16;

    /// Read the full response body.
    async fn bytes(self: Box<Self>) -> Result<Vec<u8>, HttpError>;
}

/// Issues HTTP GET requests.
///
/// The one method consumers need from a full HTTP client.
#[async_trait]
pub trait HttpGet: Send + Sync {
    async fn get(&self, url: &str) -> Result<Box<dyn HttpResponse>, HttpError>;
}
