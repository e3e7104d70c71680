use std::fmt;

use serde::{Deserialize, Serialize};

use super::validation_error::ValidationError;

/// Identifier assigned to a user by the credential store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parse an id coming from a request, where zero means "not provided".
    pub fn parse(id: i64) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::UserIdRequired);
        }
        Ok(Self(id))
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an application (tenant) a token is issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(i32);

impl AppId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Parse an id coming from a request, where zero means "not provided".
    pub fn parse(id: i32) -> Result<Self, ValidationError> {
        if id == 0 {
            return Err(ValidationError::AppIdRequired);
        }
        Ok(Self(id))
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
