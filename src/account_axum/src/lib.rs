//! axum transport for the account service.
//!
//! Handlers parse JSON and multipart input, hand it to the
//! [`AccountService`](account_application::AccountService) held in
//! [`AppState`], then translate the outcome into cookies and the JSON
//! envelope. Protected routes sit behind [`require_auth`].

pub mod cookies;
pub mod error;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
pub mod upload;

pub use error::ApiError;
pub use middleware::{AuthenticatedUser, require_auth};
pub use response::envelope;
pub use state::{AppState, CookieNames, SharedAccessGuard, SharedAccountService};
pub use upload::UploadForm;
