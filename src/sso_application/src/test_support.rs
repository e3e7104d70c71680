//! Hand-written port doubles shared by the use case tests.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use sso_core::{
    App, AppId, AppProvider, AppStoreError, Email, Password, PasswordHash, PasswordHasher,
    PasswordHasherError, Token, TokenIssuer, TokenIssuerError, User, UserId, UserProvider,
    UserSaver, UserStoreError,
};
use tokio::sync::RwLock;

use crate::AuthService;

pub const TOKEN_TTL: Duration = Duration::from_secs(3600);

pub fn email(value: &str) -> Email {
    Email::try_from(Secret::from(value.to_owned())).unwrap()
}

pub fn password(value: &str) -> Password {
    Password::try_from(Secret::from(value.to_owned())).unwrap()
}

pub fn test_app(id: i32) -> App {
    App::new(AppId::new(id), "test", Secret::from("test-secret".to_owned()))
}

pub fn service() -> (
    AuthService<MockStore, MockStore, MockStore, MockPasswordHasher, MockTokenIssuer>,
    MockStore,
) {
    let store = MockStore::default();
    let service = service_with(store.clone(), MockPasswordHasher::default());
    (service, store)
}

pub fn service_with<St, H>(store: St, hasher: H) -> AuthService<St, St, St, H, MockTokenIssuer>
where
    St: UserSaver + UserProvider + AppProvider + Clone,
    H: PasswordHasher,
{
    AuthService::new(
        store.clone(),
        store.clone(),
        store,
        hasher,
        MockTokenIssuer,
        TOKEN_TTL,
    )
}

#[derive(Default)]
struct MockStoreState {
    users: HashMap<UserId, User>,
    apps: HashMap<AppId, App>,
    next_id: i64,
}

#[derive(Clone, Default)]
pub struct MockStore {
    state: Arc<RwLock<MockStoreState>>,
}

impl MockStore {
    pub async fn add_app(&self, app: App) {
        self.state.write().await.apps.insert(app.id(), app);
    }

    pub async fn set_admin(&self, user_id: UserId) {
        let mut state = self.state.write().await;
        let user = state.users.get(&user_id).cloned().unwrap();
        state.users.insert(
            user_id,
            User::new(user_id, user.email().clone(), user.password_hash().clone(), true),
        );
    }

    pub async fn user_count(&self) -> usize {
        self.state.read().await.users.len()
    }

    pub async fn stored_hash(&self, email: &Email) -> Option<String> {
        let state = self.state.read().await;
        state
            .users
            .values()
            .find(|user| user.email() == email)
            .map(|user| user.password_hash().as_str().to_owned())
    }
}

#[async_trait]
impl UserSaver for MockStore {
    async fn save_user(
        &self,
        email: &Email,
        password_hash: &PasswordHash,
    ) -> Result<UserId, UserStoreError> {
        let mut state = self.state.write().await;
        if state.users.values().any(|user| user.email() == email) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        state.next_id += 1;
        let id = UserId::new(state.next_id);
        state.users.insert(
            id,
            User::new(id, email.clone(), password_hash.clone(), false),
        );
        Ok(id)
    }
}

#[async_trait]
impl UserProvider for MockStore {
    async fn user(&self, email: &Email) -> Result<User, UserStoreError> {
        let state = self.state.read().await;
        state
            .users
            .values()
            .find(|user| user.email() == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, UserStoreError> {
        let state = self.state.read().await;
        state
            .users
            .get(&user_id)
            .map(User::is_admin)
            .ok_or(UserStoreError::UserNotFound)
    }
}

#[async_trait]
impl AppProvider for MockStore {
    async fn app(&self, app_id: AppId) -> Result<App, AppStoreError> {
        let state = self.state.read().await;
        state
            .apps
            .get(&app_id)
            .cloned()
            .ok_or(AppStoreError::AppNotFound)
    }
}

#[derive(Clone)]
pub struct FailingStore;

#[async_trait]
impl UserSaver for FailingStore {
    async fn save_user(
        &self,
        _email: &Email,
        _password_hash: &PasswordHash,
    ) -> Result<UserId, UserStoreError> {
        Err(UserStoreError::UnexpectedError("disk full".to_owned()))
    }
}

#[async_trait]
impl UserProvider for FailingStore {
    async fn user(&self, _email: &Email) -> Result<User, UserStoreError> {
        Err(UserStoreError::UnexpectedError("connection reset".to_owned()))
    }

    async fn is_admin(&self, _user_id: UserId) -> Result<bool, UserStoreError> {
        Err(UserStoreError::UnexpectedError("connection reset".to_owned()))
    }
}

#[async_trait]
impl AppProvider for FailingStore {
    async fn app(&self, _app_id: AppId) -> Result<App, AppStoreError> {
        Err(AppStoreError::UnexpectedError("connection reset".to_owned()))
    }
}

/// Reversible stand-in for a real hasher that counts verifications.
pub struct MockPasswordHasher {
    verifications: Arc<AtomicUsize>,
    dummy: PasswordHash,
}

impl Default for MockPasswordHasher {
    fn default() -> Self {
        Self {
            verifications: Arc::default(),
            dummy: PasswordHash::new(Secret::from(Self::expected_hash("dummy password"))),
        }
    }
}

impl MockPasswordHasher {
    pub fn expected_hash(password: &str) -> String {
        format!("hashed:{password}")
    }

    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let hash = Self::expected_hash(password.as_ref().expose_secret());
        Ok(PasswordHash::new(Secret::from(hash)))
    }

    async fn verify(
        &self,
        expected: &PasswordHash,
        candidate: &Password,
    ) -> Result<(), PasswordHasherError> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        if expected.as_str() == Self::expected_hash(candidate.as_ref().expose_secret()) {
            Ok(())
        } else {
            Err(PasswordHasherError::Mismatch)
        }
    }

    fn dummy_hash(&self) -> &PasswordHash {
        &self.dummy
    }
}

pub struct FailingHasher {
    dummy: PasswordHash,
}

impl Default for FailingHasher {
    fn default() -> Self {
        Self {
            dummy: PasswordHash::new(Secret::from("not a phc string".to_owned())),
        }
    }
}

#[async_trait]
impl PasswordHasher for FailingHasher {
    async fn hash(&self, _password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        Err(PasswordHasherError::UnexpectedError("out of memory".to_owned()))
    }

    async fn verify(
        &self,
        _expected: &PasswordHash,
        _candidate: &Password,
    ) -> Result<(), PasswordHasherError> {
        Err(PasswordHasherError::UnexpectedError("out of memory".to_owned()))
    }

    fn dummy_hash(&self) -> &PasswordHash {
        &self.dummy
    }
}

pub struct MockTokenIssuer;

impl MockTokenIssuer {
    pub fn expected_token(user_id: UserId, email: &str, app_id: AppId, ttl: Duration) -> String {
        format!("{user_id}.{email}.{app_id}.{}", ttl.as_secs())
    }
}

impl TokenIssuer for MockTokenIssuer {
    fn issue(&self, user: &User, app: &App, ttl: Duration) -> Result<Token, TokenIssuerError> {
        Ok(Token::new(Self::expected_token(
            user.id(),
            user.email().as_str(),
            app.id(),
            ttl,
        )))
    }
}

pub struct FailingIssuer;

impl TokenIssuer for FailingIssuer {
    fn issue(&self, _user: &User, _app: &App, _ttl: Duration) -> Result<Token, TokenIssuerError> {
        Err(TokenIssuerError::EmptySecret)
    }
}
