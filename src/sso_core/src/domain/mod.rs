pub mod app;
pub mod email;
pub mod ids;
pub mod password;
pub mod password_hash;
pub mod token;
pub mod user;
pub mod validation_error;
