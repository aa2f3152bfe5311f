use account_adapters::{create_auth_cookie, create_removal_cookie};
use account_core::TokenPair;
use axum_extra::extract::CookieJar;

use crate::state::CookieNames;

pub fn with_session_cookies(jar: CookieJar, names: &CookieNames, tokens: &TokenPair) -> CookieJar {
    jar.add(create_auth_cookie(
        names.access.clone(),
        tokens.access_token.as_str().to_owned(),
    ))
    .add(create_auth_cookie(
        names.refresh.clone(),
        tokens.refresh_token.as_str().to_owned(),
    ))
}

// `CookieJar::remove` only emits a removal for cookies the client sent, so
// removal cookies are added explicitly.
pub fn without_session_cookies(jar: CookieJar, names: &CookieNames) -> CookieJar {
    jar.add(create_removal_cookie(names.access.clone()))
        .add(create_removal_cookie(names.refresh.clone()))
}
