use account_adapters::{
    Argon2CredentialHasher, CloudinaryMediaHost, JwtTokenIssuer, PostgresUserStore,
    config::{AccountServiceSettings, PostgresSettings},
};
use account_axum::{AppState, CookieNames};
use color_eyre::eyre::Result;
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Connects to Postgres and runs pending migrations.
pub async fn configure_postgresql(settings: &PostgresSettings) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(settings.url.expose_secret(), settings.max_connections).await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;

    Ok(pg_pool)
}

pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}

/// Wires the production adapters: Postgres for users and sessions, Argon2,
/// JWT and Cloudinary.
pub fn build_state(settings: &AccountServiceSettings, pg_pool: PgPool) -> Result<AppState> {
    let user_store = PostgresUserStore::new(pg_pool);
    let hasher = Argon2CredentialHasher::new(&settings.hashing)?;
    let token_issuer = JwtTokenIssuer::new(&settings.auth);

    let http_client = reqwest::Client::builder()
        .timeout(settings.media_host.timeout())
        .build()?;
    let media_host = CloudinaryMediaHost::new(&settings.media_host, http_client);

    Ok(AppState::new(
        user_store.clone(),
        user_store,
        hasher,
        token_issuer,
        media_host,
        CookieNames {
            access: settings.auth.access_token.cookie_name.clone(),
            refresh: settings.auth.refresh_token.cookie_name.clone(),
        },
        settings.application.upload_dir.clone(),
    ))
}
