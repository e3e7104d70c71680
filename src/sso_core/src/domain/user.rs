use super::{email::Email, ids::UserId, password_hash::PasswordHash};

/// A registered user as stored by the credential store.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    email: Email,
    password_hash: PasswordHash,
    is_admin: bool,
}

impl User {
    pub fn new(id: UserId, email: Email, password_hash: PasswordHash, is_admin: bool) -> Self {
        Self {
            id,
            email,
            password_hash,
            is_admin,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}
