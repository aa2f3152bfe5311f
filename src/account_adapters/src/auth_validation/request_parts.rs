use account_core::AuthRequest;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

/// Borrowed view of request parts implementing [`AuthRequest`], so token
/// lookup works without touching the body.
pub struct HttpRequestParts<'a> {
    parts: &'a Parts,
    cookies: CookieJar,
}

impl<'a> HttpRequestParts<'a> {
    pub fn new(parts: &'a Parts) -> Self {
        Self {
            parts,
            cookies: CookieJar::from_headers(&parts.headers),
        }
    }
}

impl AuthRequest for HttpRequestParts<'_> {
    fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name)?.to_str().ok()
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(|cookie| cookie.value())
    }
}
