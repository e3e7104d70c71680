pub mod helpers;
pub mod sso_service;
mod tracing;

pub use helpers::{StartupError, get_postgres_pool};
pub use sso_service::SsoService;
