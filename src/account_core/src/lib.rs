pub mod api_response;
pub mod domain;
pub mod errors;
pub mod http_abstraction;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    email::Email,
    full_name::FullName,
    media::{MediaAsset, MediaSlot, public_id_from_url},
    password::{Password, PasswordHash},
    tokens::{AccessToken, RefreshToken, TokenClaims, TokenClass, TokenError, TokenPair},
    user::{AccountUpdate, NewUser, PublicUser, User, UserError},
    user_id::UserId,
    username::Username,
};

pub use ports::{
    repositories::{SessionStore, SessionStoreError, UserStore, UserStoreError},
    services::{CredentialHasher, HasherError, MediaHost, MediaHostError, TokenIssuer},
};

pub use api_response::{ApiResponse, EnvelopeError};
pub use errors::AccountError;
pub use http_abstraction::{AuthRequest, extract_access_token};
pub use strategies::auth_validator::AuthValidator;
