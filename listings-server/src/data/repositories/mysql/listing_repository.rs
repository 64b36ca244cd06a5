use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::MySqlPool;

use crate::data::listing_repository::{ListingDraft, ListingRepository};
use crate::domain::error::DomainError;
use crate::domain::listing::{Listing, ListingFilter, PriceSort, pence_to_pounds};

#[derive(Debug, Clone)]
pub(crate) struct MySqlListingRepository {
    pool: MySqlPool,
}

impl MySqlListingRepository {
    pub(crate) fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

const LISTING_COLUMNS: &str = "id, type, rent, sold, newlyBuilt, address, description, \
     coverimage, images, price, bedrooms, bathrooms, receptions, garden, pets, pets_info, \
     clicks, listed";

#[derive(Debug, sqlx::FromRow)]
struct ListingRow {
    id: i64,
    #[sqlx(rename = "type")]
    kind: i64,
    rent: bool,
    sold: bool,
    #[sqlx(rename = "newlyBuilt")]
    newly_built: bool,
    address: String,
    description: String,
    coverimage: String,
    images: String,
    price: i64,
    bedrooms: i64,
    bathrooms: i64,
    receptions: i64,
    garden: bool,
    pets: bool,
    pets_info: String,
    clicks: i64,
    listed: DateTime<Utc>,
}

/// Builds the catalog read query as an AND of the active predicates. Filter
/// values are always bound as parameters, never spliced into the SQL text.
fn filtered_sql(filter: &ListingFilter) -> String {
    let mut predicates: Vec<&str> = Vec::new();
    if !filter.include_sold {
        predicates.push("sold = FALSE");
    }
    if filter.kind.is_some() {
        predicates.push("type = ?");
    }

    let mut sql = format!("SELECT {LISTING_COLUMNS} FROM Products");
    if !predicates.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&predicates.join(" AND "));
    }
    sql.push_str(" ORDER BY ");
    sql.push_str(order_clause(filter.sort));
    sql
}

fn order_clause(sort: PriceSort) -> &'static str {
    match sort {
        PriceSort::High => "price DESC",
        PriceSort::Low => "price ASC",
        PriceSort::Id => "id ASC",
        PriceSort::Default => "listed DESC",
    }
}

#[async_trait]
impl ListingRepository for MySqlListingRepository {
    async fn get(&self, id: i64) -> Result<Option<Listing>, DomainError> {
        let sql = format!("SELECT {LISTING_COLUMNS} FROM Products WHERE id = ?");
        let row = sqlx::query_as::<_, ListingRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(map_row_to_listing).transpose()
    }

    async fn trending(&self) -> Result<Vec<Listing>, DomainError> {
        let sql = format!(
            "SELECT {LISTING_COLUMNS} FROM Products WHERE sold = FALSE \
             ORDER BY clicks DESC LIMIT 3"
        );
        let rows = sqlx::query_as::<_, ListingRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(map_row_to_listing).collect()
    }

    async fn new_in(&self) -> Result<Vec<Listing>, DomainError> {
        let sql = format!(
            "SELECT {LISTING_COLUMNS} FROM Products WHERE sold = FALSE \
             ORDER BY listed DESC LIMIT 3"
        );
        let rows = sqlx::query_as::<_, ListingRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(map_row_to_listing).collect()
    }

    async fn filtered(&self, filter: ListingFilter) -> Result<Vec<Listing>, DomainError> {
        let sql = filtered_sql(&filter);
        let mut query = sqlx::query_as::<_, ListingRow>(&sql);
        if let Some(kind) = filter.kind {
            query = query.bind(kind);
        }
        let rows = query.fetch_all(&self.pool).await.map_err(map_db_error)?;

        rows.into_iter().map(map_row_to_listing).collect()
    }

    async fn create(&self, draft: ListingDraft) -> Result<(), DomainError> {
        let images = encode_images(&draft.images)?;
        sqlx::query(
            "INSERT INTO Products (type, rent, newlyBuilt, address, description, coverimage, \
             images, price, bedrooms, bathrooms, receptions, garden, pets, pets_info, sold) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(draft.kind)
        .bind(draft.rent)
        .bind(draft.newly_built)
        .bind(&draft.address)
        .bind(&draft.description)
        .bind(&draft.cover_image)
        .bind(images)
        .bind(draft.price_pence)
        .bind(draft.bedrooms)
        .bind(draft.bathrooms)
        .bind(draft.receptions)
        .bind(draft.garden)
        .bind(draft.pets)
        .bind(&draft.pets_info)
        .bind(draft.sold)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn update(&self, id: i64, draft: ListingDraft) -> Result<(), DomainError> {
        let images = encode_images(&draft.images)?;
        sqlx::query(
            "UPDATE Products SET type = ?, rent = ?, newlyBuilt = ?, address = ?, \
             description = ?, coverimage = ?, images = ?, price = ?, bedrooms = ?, \
             bathrooms = ?, receptions = ?, garden = ?, pets = ?, pets_info = ?, sold = ? \
             WHERE id = ?",
        )
        .bind(draft.kind)
        .bind(draft.rent)
        .bind(draft.newly_built)
        .bind(&draft.address)
        .bind(&draft.description)
        .bind(&draft.cover_image)
        .bind(images)
        .bind(draft.price_pence)
        .bind(draft.bedrooms)
        .bind(draft.bathrooms)
        .bind(draft.receptions)
        .bind(draft.garden)
        .bind(draft.pets)
        .bind(&draft.pets_info)
        .bind(draft.sold)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

fn map_row_to_listing(row: ListingRow) -> Result<Listing, DomainError> {
    // A stored value that fails to parse degrades to an empty image list
    // rather than poisoning the whole read.
    let images = decode_images(&row.images);

    Listing::new(
        row.id,
        row.kind,
        row.rent,
        row.sold,
        row.newly_built,
        row.address,
        row.description,
        row.coverimage,
        images,
        pence_to_pounds(row.price),
        row.bedrooms,
        row.bathrooms,
        row.receptions,
        row.garden,
        row.pets,
        row.pets_info,
        row.clicks,
        row.listed,
    )
    .map_err(|err| DomainError::Unexpected(err.to_string()))
}

fn encode_images(images: &[String]) -> Result<String, DomainError> {
    serde_json::to_string(images).map_err(|err| DomainError::Unexpected(err.to_string()))
}

fn decode_images(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn map_db_error(err: sqlx::Error) -> DomainError {
    DomainError::Unexpected(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{decode_images, encode_images, filtered_sql};
    use crate::domain::listing::{ListingFilter, PriceSort};

    #[test]
    fn filtered_sql_defaults_to_unsold_newest_first() {
        let sql = filtered_sql(&ListingFilter::default());
        assert!(sql.ends_with("WHERE sold = FALSE ORDER BY listed DESC"));
    }

    #[test]
    fn filtered_sql_joins_active_predicates_with_and() {
        let filter = ListingFilter {
            kind: Some(2),
            sort: PriceSort::Low,
            include_sold: false,
        };
        let sql = filtered_sql(&filter);
        assert!(sql.ends_with("WHERE sold = FALSE AND type = ? ORDER BY price ASC"));
    }

    #[test]
    fn filtered_sql_drops_where_clause_when_everything_matches() {
        let filter = ListingFilter {
            kind: None,
            sort: PriceSort::Id,
            include_sold: true,
        };
        let sql = filtered_sql(&filter);
        assert!(!sql.contains("WHERE"));
        assert!(sql.ends_with("ORDER BY id ASC"));
    }

    #[test]
    fn filtered_sql_binds_type_as_parameter_only() {
        let filter = ListingFilter {
            kind: Some(7),
            sort: PriceSort::High,
            include_sold: true,
        };
        let sql = filtered_sql(&filter);
        assert!(sql.ends_with("WHERE type = ? ORDER BY price DESC"));
        assert!(!sql.contains('7'));
    }

    #[test]
    fn images_round_trip_through_json_text() {
        let images = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        let encoded = encode_images(&images).expect("must encode");
        assert_eq!(decode_images(&encoded), images);
    }

    #[test]
    fn malformed_images_text_degrades_to_empty_list() {
        assert!(decode_images("not json").is_empty());
        assert!(decode_images("").is_empty());
    }
}
