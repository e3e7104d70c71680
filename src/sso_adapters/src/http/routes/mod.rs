mod is_admin;
mod login;
mod register;

pub use is_admin::{IsAdminRequest, IsAdminResponse, is_admin};
pub use login::{LoginRequest, LoginResponse, login};
pub use register::{RegisterRequest, RegisterResponse, register};

use secrecy::Secret;

// Absent fields are validated as empty so callers get the specific message.
fn or_empty(field: Option<Secret<String>>) -> Secret<String> {
    field.unwrap_or_else(|| Secret::from(String::new()))
}
