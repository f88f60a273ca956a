//! User fetch through the HTTP port.

use serde::Deserialize;
use thiserror::Error;

use crate::ports::{HttpError, HttpGet};

/// Base URL of the user directory.
const USERS_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// A user record as served by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub name: String,
}

/// Errors from fetching a user, one variant per failure point.
#[derive(Debug, Error)]
pub enum FetchUserError {
    /// The GET itself failed.
    #[error("failed to fetch user: {0}")]
    Fetch(HttpError),

    /// The server answered with something other than 200.
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    /// The body could not be read.
    #[error("failed to read response: {0}")]
    ReadBody(HttpError),

    /// The body was not a valid user document.
    #[error("failed to parse user: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch a user by id.
///
/// The response is dropped unread when the status check fails, which
/// releases the connection on that path as well.
pub async fn get_user(client: &dyn HttpGet, id: u64) -> Result<User, FetchUserError> {
    let url = format!("{USERS_BASE_URL}/users/{id}");

    let response = client.get(&url).await.map_err(FetchUserError::Fetch)?;

    let status = response.status();
    if status != 200 {
        return Err(FetchUserError::UnexpectedStatus(status));
    }

    let body = response.bytes().await.map_err(FetchUserError::ReadBody)?;

    let user = serde_json::from_slice(&body)?;
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::HttpResponse;
    use async_trait::async_trait;

    /// Stub port returning a canned outcome for every GET.
    struct StubHttp {
        status: u16,
        body: &'static str,
        get_error: Option<&'static str>,
        read_error: Option<&'static str>,
    }

    impl StubHttp {
        fn ok(body: &'static str) -> Self {
            Self {
                status: 200,
                body,
                get_error: None,
                read_error: None,
            }
        }

        fn with_status(status: u16) -> Self {
            Self {
                status,
                body: "",
                get_error: None,
                read_error: None,
            }
        }

        fn failing(message: &'static str) -> Self {
            Self {
                status: 0,
                body: "",
                get_error: Some(message),
                read_error: None,
            }
        }

        fn unreadable(message: &'static str) -> Self {
            Self {
                status: 200,
                body: "",
                get_error: None,
                read_error: Some(message),
            }
        }
    }

    #[async_trait]
    impl HttpGet for StubHttp {
        async fn get(&self, _url: &str) -> Result<Box<dyn HttpResponse>, HttpError> {
            if let Some(message) = self.get_error {
                return Err(HttpError::new(message));
            }
            Ok(Box::new(StubResponse {
                status: self.status,
                body: self.body,
                read_error: self.read_error,
            }))
        }
    }

    struct StubResponse {
        status: u16,
        body: &'static str,
        read_error: Option<&'static str>,
    }

    #[async_trait]
    impl HttpResponse for StubResponse {
        fn status(&self) -> u16 {
            self.status
        }

        async fn bytes(self: Box<Self>) -> Result<Vec<u8>, HttpError> {
            match self.read_error {
                Some(message) => Err(HttpError::new(message)),
                None => Ok(self.body.as_bytes().to_vec()),
            }
        }
    }

    #[tokio::test]
    async fn returns_the_decoded_user_on_success() {
        let client = StubHttp::ok(r#"{"name": "John Doe"}"#);

        let user = get_user(&client, 1).await.expect("fetch should succeed");

        assert_eq!(user.name, "John Doe");
    }

    #[tokio::test]
    async fn wraps_transport_failures() {
        let client = StubHttp::failing("connection reset");

        let err = get_user(&client, 1).await.expect_err("fetch should fail");

        assert!(err.to_string().contains("failed to fetch user"));
    }

    #[tokio::test]
    async fn rejects_non_ok_statuses() {
        let client = StubHttp::with_status(404);

        let err = get_user(&client, 1).await.expect_err("fetch should fail");

        assert_eq!(err.to_string(), "unexpected status code: 404");
    }

    #[tokio::test]
    async fn surfaces_body_read_failures() {
        let client = StubHttp::unreadable("stream truncated");

        let err = get_user(&client, 1).await.expect_err("fetch should fail");

        assert!(err.to_string().contains("failed to read response"));
    }

    #[tokio::test]
    async fn rejects_malformed_bodies() {
        let client = StubHttp::ok("invalid json");

        let err = get_user(&client, 1).await.expect_err("fetch should fail");

        assert!(err.to_string().contains("failed to parse user"));
    }

    #[tokio::test]
    async fn fetching_twice_yields_identical_results() {
        let client = StubHttp::ok(r#"{"name": "John Doe"}"#);

        let first = get_user(&client, 1).await.expect("first fetch");
        let second = get_user(&client, 1).await.expect("second fetch");

        assert_eq!(first, second);
    }
}
