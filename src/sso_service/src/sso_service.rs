use std::{sync::Arc, time::Duration};

use axum::{Router, routing::post};
use secrecy::ExposeSecret;
use sso_adapters::{
    auth::{Argon2PasswordHasher, JwtTokenIssuer},
    config::{Settings, StorageSettings},
    http::{
        Gateway,
        routes::{is_admin, login, register},
    },
    persistence::{HashMapCredentialStore, PostgresCredentialStore},
};
use sso_application::AuthService;
use sso_core::{AppProvider, Authenticator, UserProvider, UserSaver};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::helpers::{StartupError, get_postgres_pool};
use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The SSO HTTP service: register, login and admin lookup routes.
pub struct SsoService {
    router: Router,
}

impl SsoService {
    /// Create a new SsoService around an authenticator
    ///
    /// # Arguments
    /// * `authenticator` - The auth domain service the routes drive
    /// * `request_timeout` - Deadline applied to every authenticator call
    pub fn new<A>(authenticator: Arc<A>, request_timeout: Duration) -> Self
    where
        A: Authenticator + 'static,
    {
        let gateway = Gateway::new(authenticator, request_timeout);

        let router = Router::new()
            .route("/register", post(register::<A>))
            .route("/login", post(login::<A>))
            .route("/is-admin", post(is_admin::<A>))
            .with_state(gateway);

        Self { router }
    }

    /// Wire an [`AuthService`] over a store that implements every
    /// credential store capability.
    pub fn with_store<S>(
        store: S,
        password_hasher: Argon2PasswordHasher,
        token_ttl: Duration,
        request_timeout: Duration,
    ) -> Self
    where
        S: UserSaver + UserProvider + AppProvider + Clone + 'static,
    {
        let auth_service = AuthService::new(
            store.clone(),
            store.clone(),
            store,
            password_hasher,
            JwtTokenIssuer::new(),
            token_ttl,
        );

        Self::new(Arc::new(auth_service), request_timeout)
    }

    /// Build the service described by `settings`: pick the store, apply
    /// migrations when needed and provision the configured applications.
    pub async fn from_settings(settings: &Settings) -> Result<Self, StartupError> {
        let password_hasher = Argon2PasswordHasher::new(&settings.hashing)?;
        let token_ttl = settings.token_ttl();
        let request_timeout = settings.http.timeout();

        match &settings.storage {
            StorageSettings::InMemory => {
                let store = HashMapCredentialStore::new();
                for app in settings.apps() {
                    store.add_app(app).await;
                }
                tracing::info!("initialised in-memory storage");

                Ok(Self::with_store(
                    store,
                    password_hasher,
                    token_ttl,
                    request_timeout,
                ))
            }
            StorageSettings::Postgres {
                url,
                max_connections,
            } => {
                let pool = get_postgres_pool(url.expose_secret(), *max_connections).await?;
                let store = PostgresCredentialStore::new(pool);
                store.migrate().await?;
                for app in settings.apps() {
                    store.upsert_app(&app).await?;
                }
                tracing::info!("initialised PostgreSQL storage");

                Ok(Self::with_store(
                    store,
                    password_hasher,
                    token_ttl,
                    request_timeout,
                ))
            }
        }
    }

    /// Convert the SsoService into a router that can be nested into another
    /// application.
    pub fn into_router(self) -> Router {
        self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        )
    }

    /// Serve until Ctrl-C or SIGTERM, then drain in-flight requests.
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        self.run_until(listener, shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves.
    pub async fn run_until<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.into_router();

        tracing::info!("SSO service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("SSO service stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received, stopping");
}
