//! # Accounts - User Account Session Service
//!
//! Facade crate that re-exports the public APIs of the account service
//! components.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Username`, `Password`, `User`, `PublicUser`, etc.
//! - **Ports**: `UserStore`, `SessionStore`, `CredentialHasher`, `TokenIssuer`, `MediaHost`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, etc., behind `AccountService`
//! - **Adapters**: `PostgresUserStore`, `Argon2CredentialHasher`, `JwtTokenIssuer`,
//!   `CloudinaryMediaHost`, etc.
//! - **Service**: `AccountApi` - the router serving `/api/v1/users`

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use account_core::*;
}

pub use account_core::{
    AccountError, ApiResponse, Email, FullName, MediaAsset, MediaSlot, Password, PasswordHash,
    PublicUser, TokenPair, User, UserError, UserId, Username,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use account_core::{
        CredentialHasher, HasherError, MediaHost, MediaHostError, SessionStore, SessionStoreError,
        TokenIssuer, UserStore, UserStoreError,
    };
}

pub use ports::{CredentialHasher, MediaHost, SessionStore, TokenIssuer, UserStore};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use account_application::*;
}

pub use account_application::{AccountDetails, AccountService, LoginOutcome, Registration};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use account_adapters::persistence::*;
    }

    /// Media host implementations
    pub mod media {
        pub use account_adapters::media::*;
    }

    /// Access token authentication and cookies
    pub mod auth {
        pub use account_adapters::auth_validation::*;
    }

    /// Configuration
    pub mod config {
        pub use account_adapters::config::*;
    }
}

pub use account_adapters::{
    Argon2CredentialHasher, CloudinaryMediaHost, HashMapUserStore, JwtTokenIssuer,
    MockMediaHost, PostgresUserStore,
};

// ============================================================================
// HTTP Layer and Service
// ============================================================================

/// axum handlers and state
pub mod http {
    pub use account_axum::*;
}

pub use account_axum::{AppState, CookieNames};
pub use account_service::{AccountApi, build_state, configure_postgresql, get_postgres_pool};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
