use account_adapters::config::AccountServiceSettings;
use account_service::{AccountApi, build_state, configure_postgresql, tracing::init_tracing};
use color_eyre::eyre::Result;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = AccountServiceSettings::load()?;

    let pg_pool = configure_postgresql(&settings.postgres).await?;
    let state = build_state(&settings, pg_pool)?;

    tokio::fs::create_dir_all(&settings.application.upload_dir).await?;

    let listener = TcpListener::bind(&settings.application.address).await?;
    AccountApi::new(state, &settings.application)
        .run_standalone(listener, Some(settings.application.allowed_origins.clone()))
        .await?;

    Ok(())
}
