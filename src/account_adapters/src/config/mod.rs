pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AccountServiceSettings, AllowedOrigins, ApplicationSettings, AuthSettings, HashingSettings,
    JwtSettings, MediaHostSettings, PostgresSettings, SettingsError,
};
