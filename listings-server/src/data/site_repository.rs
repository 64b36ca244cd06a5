use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::site_message::SiteMessage;

#[async_trait]
pub(crate) trait SiteRepository: Send + Sync {
    async fn site_message(&self) -> Result<Option<SiteMessage>, DomainError>;
}
