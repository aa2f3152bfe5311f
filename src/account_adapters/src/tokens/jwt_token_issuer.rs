use account_core::{TokenClaims, TokenClass, TokenError, TokenIssuer, UserId};
use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::ExposeSecret;
use uuid::Uuid;

use crate::config::{AuthSettings, JwtSettings};

/// HS256 issuer with an independent secret and lifetime per token class.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    access: JwtSettings,
    refresh: JwtSettings,
}

impl JwtTokenIssuer {
    pub fn new(settings: &AuthSettings) -> Self {
        Self {
            access: settings.access_token.clone(),
            refresh: settings.refresh_token.clone(),
        }
    }

    fn settings(&self, class: TokenClass) -> &JwtSettings {
        match class {
            TokenClass::Access => &self.access,
            TokenClass::Refresh => &self.refresh,
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, subject: &UserId, class: TokenClass) -> Result<String, TokenError> {
        let settings = self.settings(class);

        let delta = chrono::Duration::try_seconds(settings.time_to_live).ok_or(
            TokenError::UnexpectedError("Failed to create token duration".to_string()),
        )?;
        let now = Utc::now();
        let exp = now
            .checked_add_signed(delta)
            .ok_or(TokenError::UnexpectedError(
                "Duration out of range".to_string(),
            ))?
            .timestamp();

        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: to_unsigned(now.timestamp())?,
            exp: to_unsigned(exp)?,
            // Keeps two refresh tokens minted within the same second distinct.
            jti: match class {
                TokenClass::Access => None,
                TokenClass::Refresh => Some(Uuid::new_v4().to_string()),
            },
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(settings.secret.expose_secret().as_bytes()),
        )
        .map_err(|e| TokenError::UnexpectedError(e.to_string()))
    }

    fn verify(&self, token: &str, class: TokenClass) -> Result<TokenClaims, TokenError> {
        let settings = self.settings(class);

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(settings.secret.expose_secret().as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        })
    }
}

fn to_unsigned(timestamp: i64) -> Result<u64, TokenError> {
    timestamp
        .try_into()
        .map_err(|_| TokenError::UnexpectedError("Failed to cast i64 to u64".to_string()))
}
