use secrecy::{ExposeSecret, Secret};

use super::ids::AppId;

/// An application (tenant). Tokens issued for it are signed with its own secret.
#[derive(Debug, Clone)]
pub struct App {
    id: AppId,
    name: String,
    secret: Secret<String>,
}

impl App {
    pub fn new(id: AppId, name: impl Into<String>, secret: Secret<String>) -> Self {
        Self {
            id,
            name: name.into(),
            secret,
        }
    }

    pub fn id(&self) -> AppId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn secret(&self) -> &Secret<String> {
        &self.secret
    }

    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}
