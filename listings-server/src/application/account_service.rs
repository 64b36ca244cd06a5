use tracing::error;

use crate::data::site_repository::SiteRepository;
use crate::data::user_repository::UserRepository;
use crate::domain::site_message::SiteMessage;
use crate::domain::user::User;

/// User profile and site banner reads plus the saved-set write, with the
/// same sentinel conversion as the catalog side.
pub(crate) struct AccountService<U: UserRepository, S: SiteRepository> {
    users: U,
    site: S,
}

impl<U: UserRepository, S: SiteRepository> AccountService<U, S> {
    pub(crate) fn new(users: U, site: S) -> Self {
        Self { users, site }
    }

    pub(crate) async fn get_user(&self, id: i64) -> Option<User> {
        match self.users.get_user(id).await {
            Ok(user) => user,
            Err(err) => {
                error!(%err, id, "user lookup failed");
                None
            }
        }
    }

    /// Overwrites the user's bookmarked listing set.
    pub(crate) async fn update_saved(&self, id: i64, saved: &[i64]) -> bool {
        match self.users.update_saved(id, saved).await {
            Ok(()) => true,
            Err(err) => {
                error!(%err, id, "saved-set update failed");
                false
            }
        }
    }

    pub(crate) async fn site_message(&self) -> Option<SiteMessage> {
        match self.site.site_message().await {
            Ok(message) => message,
            Err(err) => {
                error!(%err, "site message lookup failed");
                None
            }
        }
    }
}
