use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::user_id::UserId;

/// The two credential kinds minted by a token issuer. Each class is signed
/// with its own secret, so a token of one class never verifies as the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Access,
    Refresh,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token has expired")]
    Expired,
    #[error("Token signature is invalid")]
    InvalidSignature,
    #[error("Token is malformed")]
    Malformed,
    #[error("Unexpected token error: {0}")]
    UnexpectedError(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: u64,
    pub exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

impl TokenClaims {
    pub fn subject(&self) -> Result<UserId, TokenError> {
        self.sub.parse().map_err(|_| TokenError::Malformed)
    }
}

macro_rules! token_newtype {
    ($name:ident) => {
        #[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(token: String) -> Self {
                Self(token)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(concat!(stringify!($name), "([REDACTED])"))
            }
        }
    };
}

token_newtype!(AccessToken);
token_newtype!(RefreshToken);

/// Freshly minted credentials handed to the client after login or refresh.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: AccessToken,
    pub refresh_token: RefreshToken,
}
