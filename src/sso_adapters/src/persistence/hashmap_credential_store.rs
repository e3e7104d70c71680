use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use sso_core::{
    App, AppId, AppProvider, AppStoreError, Email, PasswordHash, User, UserId, UserProvider,
    UserSaver, UserStoreError,
};

#[derive(Default)]
struct Users {
    by_id: HashMap<UserId, User>,
    ids_by_email: HashMap<Email, UserId>,
    last_id: i64,
}

/// In-memory credential store. Clones share the same underlying maps.
#[derive(Default, Clone)]
pub struct HashMapCredentialStore {
    users: Arc<RwLock<Users>>,
    apps: Arc<RwLock<HashMap<AppId, App>>>,
}

impl HashMapCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provision (or replace) an application.
    pub async fn add_app(&self, app: App) {
        let mut apps = self.apps.write().await;
        apps.insert(app.id(), app);
    }

    /// Set the admin flag of an existing user.
    pub async fn set_admin(&self, user_id: UserId, is_admin: bool) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users
            .by_id
            .get_mut(&user_id)
            .ok_or(UserStoreError::UserNotFound)?;

        *user = User::new(
            user_id,
            user.email().clone(),
            user.password_hash().clone(),
            is_admin,
        );
        Ok(())
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.by_id.len()
    }
}

#[async_trait::async_trait]
impl UserSaver for HashMapCredentialStore {
    async fn save_user(
        &self,
        email: &Email,
        password_hash: &PasswordHash,
    ) -> Result<UserId, UserStoreError> {
        let mut users = self.users.write().await;
        if users.ids_by_email.contains_key(email) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        users.last_id += 1;
        let user_id = UserId::new(users.last_id);
        users.ids_by_email.insert(email.clone(), user_id);
        users.by_id.insert(
            user_id,
            User::new(user_id, email.clone(), password_hash.clone(), false),
        );
        Ok(user_id)
    }
}

#[async_trait::async_trait]
impl UserProvider for HashMapCredentialStore {
    async fn user(&self, email: &Email) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .ids_by_email
            .get(email)
            .and_then(|id| users.by_id.get(id))
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, UserStoreError> {
        let users = self.users.read().await;
        users
            .by_id
            .get(&user_id)
            .map(User::is_admin)
            .ok_or(UserStoreError::UserNotFound)
    }
}

#[async_trait::async_trait]
impl AppProvider for HashMapCredentialStore {
    async fn app(&self, app_id: AppId) -> Result<App, AppStoreError> {
        let apps = self.apps.read().await;
        apps.get(&app_id).cloned().ok_or(AppStoreError::AppNotFound)
    }
}
