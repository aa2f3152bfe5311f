pub mod access_guard;
pub mod cookies;
pub mod request_parts;

pub use access_guard::{AccessGuard, AccessGuardError};
pub use cookies::{create_auth_cookie, create_removal_cookie};
pub use request_parts::HttpRequestParts;
