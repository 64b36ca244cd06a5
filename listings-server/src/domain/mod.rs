pub(crate) mod auth;
pub(crate) mod error;
pub(crate) mod listing;
pub(crate) mod site_message;
pub(crate) mod user;
