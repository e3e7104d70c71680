use std::time::Duration;

use fake::{Fake, faker::internet::en::SafeEmail};
use secrecy::Secret;
use serde::Serialize;
use sso_adapters::{
    auth::Argon2PasswordHasher,
    config::{HashingSettings, test::APP_ADDRESS},
    persistence::HashMapCredentialStore,
};
use sso_core::{App, AppId};
use sso_service::SsoService;

pub const APP_ID: i32 = 1;
pub const APP_SECRET: &str = "test-secret";
pub const TOKEN_TTL: Duration = Duration::from_secs(3600);

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub store: HashMapCredentialStore,
}

impl TestApp {
    pub async fn new() -> Self {
        let store = HashMapCredentialStore::new();
        store
            .add_app(App::new(
                AppId::new(APP_ID),
                "test",
                Secret::new(APP_SECRET.to_owned()),
            ))
            .await;

        // Cheap work factor so the suite stays fast.
        let hashing = HashingSettings {
            memory_kib: 64,
            iterations: 1,
            parallelism: 1,
        };
        let hasher = Argon2PasswordHasher::new(&hashing).expect("Failed to build password hasher");

        let service = SsoService::with_store(
            store.clone(),
            hasher,
            TOKEN_TTL,
            Duration::from_secs(5),
        );

        let listener = tokio::net::TcpListener::bind(APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!(
            "http://{}",
            listener.local_addr().expect("Failed to read local address")
        );

        tokio::spawn(service.run_until(listener, std::future::pending()));

        let http_client = reqwest::Client::builder()
            .build()
            .expect("Failed to build http client");

        Self {
            address,
            http_client,
            store,
        }
    }

    pub async fn post_register<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.post("/register", body).await
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.post("/login", body).await
    }

    pub async fn post_is_admin<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.post("/is-admin", body).await
    }

    async fn post<Body>(&self, path: &str, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a fresh account and return its id.
    pub async fn register(&self, email: &str, password: &str) -> i64 {
        let response = self
            .post_register(&serde_json::json!({ "email": email, "password": password }))
            .await;
        assert_eq!(response.status().as_u16(), 201);

        let body: serde_json::Value = response.json().await.expect("Invalid register body");
        body["user_id"].as_i64().expect("user_id missing")
    }
}

pub fn get_random_email() -> String {
    SafeEmail().fake()
}

pub async fn error_message(response: reqwest::Response) -> String {
    let body: serde_json::Value = response.json().await.expect("Invalid error body");
    body["error"]
        .as_str()
        .expect("error field missing")
        .to_owned()
}
