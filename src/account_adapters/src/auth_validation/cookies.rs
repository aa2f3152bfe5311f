use axum_extra::extract::cookie::{Cookie, SameSite};

// Create cookie and set the value to the passed-in token string
pub fn create_auth_cookie(cookie_name: String, token: String) -> Cookie<'static> {
    Cookie::build((cookie_name, token))
        .path("/") // apply cookie to all URLs on the server
        .http_only(true) // prevent JavaScript from accessing the cookie
        .secure(true)
        .same_site(SameSite::Lax)
        .build()
}

pub fn create_removal_cookie(cookie_name: String) -> Cookie<'static> {
    let mut cookie = create_auth_cookie(cookie_name, String::new());
    cookie.make_removal();
    cookie
}
