//! Infrastructure behind the account ports: Postgres and in-memory stores,
//! Argon2 hashing, JWT issuing, Cloudinary media hosting, request
//! authentication and configuration loading.

pub mod auth_validation;
pub mod config;
pub mod hashing;
pub mod media;
pub mod persistence;
pub mod tokens;

pub use auth_validation::{
    AccessGuard, AccessGuardError, HttpRequestParts, create_auth_cookie, create_removal_cookie,
};
pub use hashing::Argon2CredentialHasher;
pub use media::{CloudinaryMediaHost, MockMediaHost};
pub use persistence::{HashMapUserStore, PostgresUserStore};
pub use tokens::JwtTokenIssuer;
