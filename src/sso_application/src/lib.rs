pub mod auth_service;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use auth_service::AuthService;
pub use use_cases::{
    is_admin::OP_IS_ADMIN, login::OP_LOGIN, register_new_user::OP_REGISTER_NEW_USER,
};
