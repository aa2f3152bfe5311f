use std::{path::PathBuf, sync::Arc};

use account_adapters::AccessGuard;
use account_application::AccountService;
use account_core::{CredentialHasher, MediaHost, SessionStore, TokenIssuer, UserStore};

pub type SharedAccountService = AccountService<
    Arc<dyn UserStore>,
    Arc<dyn SessionStore>,
    Arc<dyn CredentialHasher>,
    Arc<dyn TokenIssuer>,
    Arc<dyn MediaHost>,
>;

pub type SharedAccessGuard = AccessGuard<Arc<dyn UserStore>, Arc<dyn TokenIssuer>>;

/// Names of the two session cookies.
#[derive(Debug, Clone)]
pub struct CookieNames {
    pub access: String,
    pub refresh: String,
}

/// State shared by every route.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<SharedAccountService>,
    pub guard: SharedAccessGuard,
    pub cookies: CookieNames,
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn new<U, S, H, T, M>(
        user_store: U,
        session_store: S,
        hasher: H,
        token_issuer: T,
        media_host: M,
        cookies: CookieNames,
        upload_dir: PathBuf,
    ) -> Self
    where
        U: UserStore + 'static,
        S: SessionStore + 'static,
        H: CredentialHasher + 'static,
        T: TokenIssuer + 'static,
        M: MediaHost + 'static,
    {
        let user_store: Arc<dyn UserStore> = Arc::new(user_store);
        let token_issuer: Arc<dyn TokenIssuer> = Arc::new(token_issuer);

        let guard = AccessGuard::new(
            user_store.clone(),
            token_issuer.clone(),
            cookies.access.clone(),
        );
        let accounts = AccountService::new(
            user_store,
            Arc::new(session_store) as Arc<dyn SessionStore>,
            Arc::new(hasher) as Arc<dyn CredentialHasher>,
            token_issuer,
            Arc::new(media_host) as Arc<dyn MediaHost>,
        );

        Self {
            accounts: Arc::new(accounts),
            guard,
            cookies,
            upload_dir,
        }
    }
}
