use tracing::error;

use crate::data::listing_repository::{ListingDraft, ListingRepository};
use crate::domain::listing::{Listing, ListingFilter};

/// Listing reads and writes. This is the operation boundary: storage errors
/// are logged here and converted to sentinels (absent or empty for reads,
/// `false` for writes). Callers never see a propagated storage error.
pub(crate) struct CatalogService<R: ListingRepository> {
    repo: R,
}

impl<R: ListingRepository> CatalogService<R> {
    pub(crate) fn new(repo: R) -> Self {
        Self { repo }
    }

    pub(crate) async fn get_listing(&self, id: i64) -> Option<Listing> {
        match self.repo.get(id).await {
            Ok(listing) => listing,
            Err(err) => {
                error!(%err, id, "listing lookup failed");
                None
            }
        }
    }

    /// At most 3 unsold listings, most clicked first.
    pub(crate) async fn trending(&self) -> Vec<Listing> {
        match self.repo.trending().await {
            Ok(listings) => listings,
            Err(err) => {
                error!(%err, "trending query failed");
                Vec::new()
            }
        }
    }

    /// At most 3 unsold listings, most recently listed first.
    pub(crate) async fn new_in(&self) -> Vec<Listing> {
        match self.repo.new_in().await {
            Ok(listings) => listings,
            Err(err) => {
                error!(%err, "new-in query failed");
                Vec::new()
            }
        }
    }

    pub(crate) async fn filtered(&self, filter: ListingFilter) -> Vec<Listing> {
        match self.repo.filtered(filter).await {
            Ok(listings) => listings,
            Err(err) => {
                error!(%err, "filtered listing query failed");
                Vec::new()
            }
        }
    }

    pub(crate) async fn create_listing(&self, draft: ListingDraft) -> bool {
        match self.repo.create(draft).await {
            Ok(()) => true,
            Err(err) => {
                error!(%err, "listing create failed");
                false
            }
        }
    }

    pub(crate) async fn update_listing(&self, id: i64, draft: ListingDraft) -> bool {
        match self.repo.update(id, draft).await {
            Ok(()) => true,
            Err(err) => {
                error!(%err, id, "listing update failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::CatalogService;
    use crate::data::listing_repository::{ListingDraft, ListingRepository};
    use crate::domain::error::DomainError;
    use crate::domain::listing::{Listing, ListingFilter, PriceSort};

    #[derive(Clone, Default)]
    struct FakeListingRepo {
        listings: Arc<Mutex<Vec<Listing>>>,
        fail: Arc<Mutex<bool>>,
        created_input: Arc<Mutex<Option<ListingDraft>>>,
        updated_input: Arc<Mutex<Option<(i64, ListingDraft)>>>,
        filter_seen: Arc<Mutex<Option<ListingFilter>>>,
    }

    impl FakeListingRepo {
        fn with_listings(listings: Vec<Listing>) -> Self {
            let repo = Self::default();
            *repo.listings.lock().expect("listings mutex poisoned") = listings;
            repo
        }

        fn failing() -> Self {
            let repo = Self::default();
            *repo.fail.lock().expect("fail mutex poisoned") = true;
            repo
        }

        fn check_fail(&self) -> Result<(), DomainError> {
            if *self.fail.lock().expect("fail mutex poisoned") {
                return Err(DomainError::Unexpected("connection refused".to_string()));
            }
            Ok(())
        }

        fn take_created(&self) -> Option<ListingDraft> {
            self.created_input
                .lock()
                .expect("created mutex poisoned")
                .take()
        }

        fn take_updated(&self) -> Option<(i64, ListingDraft)> {
            self.updated_input
                .lock()
                .expect("updated mutex poisoned")
                .take()
        }
    }

    #[async_trait]
    impl ListingRepository for FakeListingRepo {
        async fn get(&self, id: i64) -> Result<Option<Listing>, DomainError> {
            self.check_fail()?;
            Ok(self
                .listings
                .lock()
                .expect("listings mutex poisoned")
                .iter()
                .find(|listing| listing.id == id)
                .cloned())
        }

        async fn trending(&self) -> Result<Vec<Listing>, DomainError> {
            self.check_fail()?;
            Ok(self
                .listings
                .lock()
                .expect("listings mutex poisoned")
                .clone())
        }

        async fn new_in(&self) -> Result<Vec<Listing>, DomainError> {
            self.check_fail()?;
            Ok(self
                .listings
                .lock()
                .expect("listings mutex poisoned")
                .clone())
        }

        async fn filtered(&self, filter: ListingFilter) -> Result<Vec<Listing>, DomainError> {
            self.check_fail()?;
            *self.filter_seen.lock().expect("filter mutex poisoned") = Some(filter);
            Ok(self
                .listings
                .lock()
                .expect("listings mutex poisoned")
                .clone())
        }

        async fn create(&self, draft: ListingDraft) -> Result<(), DomainError> {
            self.check_fail()?;
            *self.created_input.lock().expect("created mutex poisoned") = Some(draft);
            Ok(())
        }

        async fn update(&self, id: i64, draft: ListingDraft) -> Result<(), DomainError> {
            self.check_fail()?;
            *self.updated_input.lock().expect("updated mutex poisoned") = Some((id, draft));
            Ok(())
        }
    }

    fn sample_listing(id: i64) -> Listing {
        Listing::new(
            id,
            2,
            false,
            false,
            false,
            "1 High Street",
            "A lovely terrace",
            "cover.jpg",
            vec![],
            950.0,
            3,
            1,
            1,
            false,
            false,
            "",
            12,
            Utc::now(),
        )
        .expect("sample listing must be valid")
    }

    fn sample_draft() -> ListingDraft {
        ListingDraft {
            kind: 2,
            rent: false,
            newly_built: true,
            address: "1 High Street".to_string(),
            description: "A lovely terrace".to_string(),
            cover_image: "cover.jpg".to_string(),
            images: vec!["a.jpg".to_string()],
            price_pence: 95_000_00,
            bedrooms: 3,
            bathrooms: 1,
            receptions: 1,
            garden: true,
            pets: false,
            pets_info: String::new(),
            sold: false,
        }
    }

    #[tokio::test]
    async fn get_listing_returns_matching_row() {
        let repo = FakeListingRepo::with_listings(vec![sample_listing(7)]);
        let service = CatalogService::new(repo);

        let listing = service.get_listing(7).await.expect("listing must exist");
        assert_eq!(listing.id, 7);
        assert!(service.get_listing(8).await.is_none());
    }

    #[tokio::test]
    async fn get_listing_converts_storage_error_to_absent() {
        let service = CatalogService::new(FakeListingRepo::failing());
        assert!(service.get_listing(7).await.is_none());
    }

    #[tokio::test]
    async fn read_lists_convert_storage_error_to_empty() {
        let service = CatalogService::new(FakeListingRepo::failing());
        assert!(service.trending().await.is_empty());
        assert!(service.new_in().await.is_empty());
        assert!(service.filtered(ListingFilter::default()).await.is_empty());
    }

    #[tokio::test]
    async fn filtered_passes_filter_through_to_repository() {
        let repo = FakeListingRepo::with_listings(vec![sample_listing(1)]);
        let service = CatalogService::new(repo.clone());

        let filter = ListingFilter {
            kind: Some(2),
            sort: PriceSort::Low,
            include_sold: false,
        };
        let result = service.filtered(filter).await;
        assert_eq!(result.len(), 1);

        let seen = repo
            .filter_seen
            .lock()
            .expect("filter mutex poisoned")
            .expect("filter must be recorded");
        assert_eq!(seen.kind, Some(2));
        assert_eq!(seen.sort, PriceSort::Low);
        assert!(!seen.include_sold);
    }

    #[tokio::test]
    async fn create_listing_reports_success_and_forwards_draft() {
        let repo = FakeListingRepo::default();
        let service = CatalogService::new(repo.clone());

        assert!(service.create_listing(sample_draft()).await);

        let created = repo.take_created().expect("create must be called");
        assert_eq!(created.price_pence, 95_000_00);
        assert_eq!(created.images, vec!["a.jpg".to_string()]);
    }

    #[tokio::test]
    async fn update_listing_targets_the_given_id() {
        let repo = FakeListingRepo::default();
        let service = CatalogService::new(repo.clone());

        assert!(service.update_listing(7, sample_draft()).await);

        let (id, draft) = repo.take_updated().expect("update must be called");
        assert_eq!(id, 7);
        assert_eq!(draft.bedrooms, 3);
    }

    #[tokio::test]
    async fn writes_convert_storage_error_to_false() {
        let service = CatalogService::new(FakeListingRepo::failing());
        assert!(!service.create_listing(sample_draft()).await);
        assert!(!service.update_listing(7, sample_draft()).await);
    }
}
