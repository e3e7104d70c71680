pub mod argon2_hasher;
pub mod jwt;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt::{Claims, JwtTokenIssuer, TokenError, generate_token, validate_token};
