use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::user::User;

#[async_trait]
pub(crate) trait UserRepository: Send + Sync {
    async fn get_user(&self, id: i64) -> Result<Option<User>, DomainError>;
    async fn update_saved(&self, id: i64, saved: &[i64]) -> Result<(), DomainError>;
}
