//! Assembles the account routes into a runnable service: router, CORS,
//! request tracing, static files and Postgres bootstrap.

mod account_api;
pub mod helpers;
pub mod tracing;

pub use account_api::{AccountApi, USERS_PATH};
pub use helpers::{build_state, configure_postgresql, get_postgres_pool};
