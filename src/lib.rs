//! # SSO - Single Sign-On Authentication Service
//!
//! Facade crate re-exporting the public APIs of the SSO service components.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! sso = { path = "../sso" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `App`, `Token`
//! - **Store traits**: `UserSaver`, `UserProvider`, `AppProvider`
//! - **Application**: `AuthService`, implementing `Authenticator`
//! - **Adapters**: `HashMapCredentialStore`, `PostgresCredentialStore`, `Argon2PasswordHasher`, `JwtTokenIssuer`
//! - **Service**: `SsoService` - HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types, ports and errors
pub mod core {
    pub use sso_core::*;
}

pub use sso_core::{
    App, AppId, AuthError, AuthErrorKind, Email, Password, PasswordHash, Token, User, UserId,
    ValidationError,
};

// ============================================================================
// Ports
// ============================================================================

/// Credential store trait definitions
pub mod repositories {
    pub use sso_core::{AppProvider, AppStoreError, UserProvider, UserSaver, UserStoreError};
}

pub use sso_core::{
    AppProvider, Authenticator, PasswordHasher, TokenIssuer, UserProvider, UserSaver,
};

// ============================================================================
// Application Layer
// ============================================================================

pub use sso_application::AuthService;

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use sso_adapters::http::*;
    }

    /// Credential store implementations
    pub mod persistence {
        pub use sso_adapters::persistence::*;
    }

    /// Password hashing and token issuing
    pub mod auth {
        pub use sso_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use sso_adapters::config::*;
    }
}

pub use sso_adapters::{
    auth::{Argon2PasswordHasher, JwtTokenIssuer},
    config::Settings,
    persistence::{HashMapCredentialStore, PostgresCredentialStore},
};

// ============================================================================
// SSO Service (Main Entry Point)
// ============================================================================

pub use sso_service::{SsoService, StartupError, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing store traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
