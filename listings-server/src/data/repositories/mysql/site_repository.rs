use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::data::site_repository::SiteRepository;
use crate::domain::error::DomainError;
use crate::domain::site_message::SiteMessage;

const SITE_MESSAGE_ID: i64 = 1;

#[derive(Debug, Clone)]
pub(crate) struct MySqlSiteRepository {
    pool: MySqlPool,
}

impl MySqlSiteRepository {
    pub(crate) fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SiteMessageRow {
    sitemessage_text: String,
    sitemessage_type: String,
}

#[async_trait]
impl SiteRepository for MySqlSiteRepository {
    async fn site_message(&self) -> Result<Option<SiteMessage>, DomainError> {
        let row = sqlx::query_as::<_, SiteMessageRow>(
            "SELECT sitemessage_text, sitemessage_type FROM Admin WHERE id = ?",
        )
        .bind(SITE_MESSAGE_ID)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| DomainError::Unexpected(err.to_string()))?;

        Ok(row.map(|row| SiteMessage {
            text: row.sitemessage_text,
            kind: row.sitemessage_type,
        }))
    }
}
