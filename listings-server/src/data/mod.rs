pub(crate) mod listing_repository;
pub(crate) mod repositories;
pub(crate) mod site_repository;
pub(crate) mod user_repository;
