pub mod error;
pub mod routes;

use std::{future::Future, sync::Arc, time::Duration};

use sso_core::{AuthError, Authenticator};

pub use error::{ApiError, ErrorResponse};

/// Route state: the authenticator plus the deadline every call runs under.
pub struct Gateway<A> {
    authenticator: Arc<A>,
    request_timeout: Duration,
}

impl<A> Clone for Gateway<A> {
    fn clone(&self) -> Self {
        Self {
            authenticator: Arc::clone(&self.authenticator),
            request_timeout: self.request_timeout,
        }
    }
}

impl<A> Gateway<A>
where
    A: Authenticator,
{
    pub fn new(authenticator: Arc<A>, request_timeout: Duration) -> Self {
        Self {
            authenticator,
            request_timeout,
        }
    }

    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }

    /// Run `call` under the request deadline. When the deadline passes the
    /// future is dropped, which abandons any pending store round trip.
    pub async fn with_deadline<T, F>(&self, call: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, AuthError>>,
    {
        match tokio::time::timeout(self.request_timeout, call).await {
            Ok(result) => result.map_err(ApiError::from),
            Err(_) => {
                tracing::warn!(timeout = ?self.request_timeout, "request deadline exceeded");
                Err(ApiError::DeadlineExceeded)
            }
        }
    }
}
