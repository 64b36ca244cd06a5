use std::sync::Arc;

use crate::application::account_service::AccountService;
use crate::application::catalog_service::CatalogService;
use crate::data::repositories::mysql::listing_repository::MySqlListingRepository;
use crate::data::repositories::mysql::site_repository::MySqlSiteRepository;
use crate::data::repositories::mysql::user_repository::MySqlUserRepository;
use crate::infrastructure::jwt::TokenVerifier;

pub(crate) mod http;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) catalog: Arc<CatalogService<MySqlListingRepository>>,
    pub(crate) accounts: Arc<AccountService<MySqlUserRepository, MySqlSiteRepository>>,
    pub(crate) verifier: Arc<TokenVerifier>,
}

impl AppState {
    pub(crate) fn new(
        catalog: Arc<CatalogService<MySqlListingRepository>>,
        accounts: Arc<AccountService<MySqlUserRepository, MySqlSiteRepository>>,
        verifier: Arc<TokenVerifier>,
    ) -> Self {
        Self {
            catalog,
            accounts,
            verifier,
        }
    }
}
