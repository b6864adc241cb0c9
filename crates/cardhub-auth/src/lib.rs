//! # cardhub-auth
//!
//! Authentication primitives for CardHub.
//!
//! - `jwt`: signing and validating the bearer access token
//! - `password`: Argon2id password hashing

pub mod jwt;
pub mod password;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
