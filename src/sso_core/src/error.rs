use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Caller-facing failure categories of the auth domain.
///
/// Callers branch on the kind; the message text is not part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AuthErrorKind {
    /// Unknown email or wrong password. The two are deliberately indistinguishable.
    #[error("invalid credential")]
    InvalidCredential,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("user not found")]
    UserNotFound,
    #[error("invalid app_id")]
    InvalidAppId,
    /// Any storage, hashing or signing failure not classified above.
    #[error("internal error")]
    Internal,
}

/// Error returned by the auth domain service.
///
/// Carries the name of the operation that failed and, for diagnostics, the
/// underlying cause. The cause must never be shown to end users.
#[derive(Debug, Error)]
#[error("{op}: {kind}")]
pub struct AuthError {
    op: &'static str,
    kind: AuthErrorKind,
    #[source]
    source: Option<BoxError>,
}

impl AuthError {
    pub fn new(op: &'static str, kind: AuthErrorKind) -> Self {
        Self {
            op,
            kind,
            source: None,
        }
    }

    pub fn with_source(op: &'static str, kind: AuthErrorKind, source: impl Into<BoxError>) -> Self {
        Self {
            op,
            kind,
            source: Some(source.into()),
        }
    }

    pub fn internal(op: &'static str, source: impl Into<BoxError>) -> Self {
        Self::with_source(op, AuthErrorKind::Internal, source)
    }

    pub fn op(&self) -> &'static str {
        self.op
    }

    pub fn kind(&self) -> AuthErrorKind {
        self.kind
    }

    pub fn is(&self, kind: AuthErrorKind) -> bool {
        self.kind == kind
    }
}
