use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row, migrate::MigrateError, postgres::PgRow};
use sso_core::{
    App, AppId, AppProvider, AppStoreError, Email, PasswordHash, User, UserId, UserProvider,
    UserSaver, UserStoreError,
};

/// Credential store backed by PostgreSQL.
///
/// Email uniqueness is enforced by the `users.email` unique constraint, so
/// concurrent registrations of the same address cannot both succeed.
#[derive(Clone)]
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresCredentialStore { pool }
    }

    /// Apply the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    /// Provision an application, replacing name and secret if the id exists.
    #[tracing::instrument(name = "Upserting app in PostgreSQL", skip_all, fields(app_id = %app.id()))]
    pub async fn upsert_app(&self, app: &App) -> Result<(), AppStoreError> {
        sqlx::query(
            r#"
                INSERT INTO apps (id, name, secret)
                VALUES ($1, $2, $3)
                ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, secret = EXCLUDED.secret
            "#,
        )
        .bind(app.id().as_i32())
        .bind(app.name())
        .bind(app.secret().expose_secret().as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| AppStoreError::UnexpectedError(e.to_string()))?;

        Ok(())
    }

    /// Set the admin flag of an existing user.
    #[tracing::instrument(name = "Setting admin flag in PostgreSQL", skip_all)]
    pub async fn set_admin(&self, user_id: UserId, is_admin: bool) -> Result<(), UserStoreError> {
        let result = sqlx::query("UPDATE users SET is_admin = $1 WHERE id = $2")
            .bind(is_admin)
            .bind(user_id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl UserSaver for PostgresCredentialStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn save_user(
        &self,
        email: &Email,
        password_hash: &PasswordHash,
    ) -> Result<UserId, UserStoreError> {
        let row = sqlx::query(
            r#"
                INSERT INTO users (email, pass_hash)
                VALUES ($1, $2)
                RETURNING id
            "#,
        )
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(UserId::new(id))
    }
}

#[async_trait::async_trait]
impl UserProvider for PostgresCredentialStore {
    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn user(&self, email: &Email) -> Result<User, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, pass_hash, is_admin
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        user_from_row(&row).map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
    }

    #[tracing::instrument(name = "Checking admin flag in PostgreSQL", skip_all)]
    async fn is_admin(&self, user_id: UserId) -> Result<bool, UserStoreError> {
        let row = sqlx::query("SELECT is_admin FROM users WHERE id = $1")
            .bind(user_id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };

        row.try_get("is_admin")
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))
    }
}

#[async_trait::async_trait]
impl AppProvider for PostgresCredentialStore {
    #[tracing::instrument(name = "Retrieving app from PostgreSQL", skip_all)]
    async fn app(&self, app_id: AppId) -> Result<App, AppStoreError> {
        let row = sqlx::query("SELECT id, name, secret FROM apps WHERE id = $1")
            .bind(app_id.as_i32())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(AppStoreError::AppNotFound);
        };

        app_from_row(&row).map_err(|e| AppStoreError::UnexpectedError(e.to_string()))
    }
}

fn user_from_row(row: &PgRow) -> Result<User, Box<dyn std::error::Error + Send + Sync>> {
    let id: i64 = row.try_get("id")?;
    let email: String = row.try_get("email")?;
    let pass_hash: String = row.try_get("pass_hash")?;
    let is_admin: bool = row.try_get("is_admin")?;

    Ok(User::new(
        UserId::new(id),
        Email::try_from(Secret::from(email))?,
        PasswordHash::new(Secret::from(pass_hash)),
        is_admin,
    ))
}

fn app_from_row(row: &PgRow) -> Result<App, sqlx::Error> {
    let id: i32 = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let secret: String = row.try_get("secret")?;

    Ok(App::new(AppId::new(id), name, Secret::from(secret)))
}
