use std::sync::Arc;

use anyhow::Result;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::account_service::AccountService;
use application::catalog_service::CatalogService;
use data::repositories::mysql::listing_repository::MySqlListingRepository;
use data::repositories::mysql::site_repository::MySqlSiteRepository;
use data::repositories::mysql::user_repository::MySqlUserRepository;
use infrastructure::database::{create_pool, run_migrations};
use infrastructure::jwt::TokenVerifier;
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database_url).await?;
    run_migrations(&pool).await?;

    let verifier = Arc::new(TokenVerifier::new(
        &settings.token_secret,
        settings.token_ttl_seconds,
    ));
    let catalog = Arc::new(CatalogService::new(MySqlListingRepository::new(
        pool.clone(),
    )));
    let accounts = Arc::new(AccountService::new(
        MySqlUserRepository::new(pool.clone()),
        MySqlSiteRepository::new(pool),
    ));

    let state = AppState::new(catalog, accounts, verifier);

    server::run_http(&settings, state).await
}
