use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::listing::{Listing, ListingFilter};

/// Mutable field set for create/update. `price_pence` is integer minor
/// units, exactly as persisted.
#[derive(Debug, Clone)]
pub(crate) struct ListingDraft {
    pub(crate) kind: i64,
    pub(crate) rent: bool,
    pub(crate) newly_built: bool,
    pub(crate) address: String,
    pub(crate) description: String,
    pub(crate) cover_image: String,
    pub(crate) images: Vec<String>,
    pub(crate) price_pence: i64,
    pub(crate) bedrooms: i64,
    pub(crate) bathrooms: i64,
    pub(crate) receptions: i64,
    pub(crate) garden: bool,
    pub(crate) pets: bool,
    pub(crate) pets_info: String,
    pub(crate) sold: bool,
}

#[async_trait]
pub(crate) trait ListingRepository: Send + Sync {
    async fn get(&self, id: i64) -> Result<Option<Listing>, DomainError>;
    async fn trending(&self) -> Result<Vec<Listing>, DomainError>;
    async fn new_in(&self) -> Result<Vec<Listing>, DomainError>;
    async fn filtered(&self, filter: ListingFilter) -> Result<Vec<Listing>, DomainError>;
    async fn create(&self, draft: ListingDraft) -> Result<(), DomainError>;
    async fn update(&self, id: i64, draft: ListingDraft) -> Result<(), DomainError>;
}
