//! Framework-neutral view of an inbound HTTP request.
//!
//! Transport crates implement [`AuthRequest`] on a newtype around their own
//! request type, so the access-token lookup rules live here once and are
//! shared by every framework integration.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  account_core: AuthRequest trait         │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  account_adapters: HttpRequestParts      │
//! │  impl AuthRequest for HttpRequestParts   │
//! └──────────────────────────────────────────┘
//! ```

pub const AUTHORIZATION_HEADER: &str = "authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

/// Read-only access to the parts of a request that carry credentials.
pub trait AuthRequest {
    /// Header lookup is case-insensitive. Returns `None` for missing or
    /// non UTF-8 values.
    fn header(&self, name: &str) -> Option<&str>;

    fn cookie(&self, name: &str) -> Option<&str>;
}

/// Locates the access token on a request: the named cookie wins, otherwise
/// an `Authorization: Bearer <token>` header is used.
pub fn extract_access_token<'a, R: AuthRequest + ?Sized>(
    request: &'a R,
    cookie_name: &str,
) -> Option<&'a str> {
    if let Some(token) = request.cookie(cookie_name).filter(|t| !t.is_empty()) {
        return Some(token);
    }

    request
        .header(AUTHORIZATION_HEADER)?
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
