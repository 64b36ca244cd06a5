use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::data::listing_repository::ListingDraft;
use crate::domain::listing::{Listing, ListingFilter, PriceSort, format_price};
use crate::presentation::AppState;
use crate::presentation::http::app_error::{AppError, AppResult};
use crate::presentation::http::middleware::auth::AuthenticatedUser;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ListingDto {
    pub(crate) id: i64,
    #[serde(rename = "type")]
    pub(crate) kind: i64,
    pub(crate) rent: bool,
    pub(crate) sold: bool,
    #[serde(rename = "newlyBuilt")]
    pub(crate) newly_built: bool,
    pub(crate) address: String,
    pub(crate) description: String,
    pub(crate) coverimage: String,
    pub(crate) images: Vec<String>,
    /// Decimal major units (pounds).
    pub(crate) price: f64,
    pub(crate) price_display: String,
    pub(crate) bedrooms: i64,
    pub(crate) bathrooms: i64,
    pub(crate) receptions: i64,
    pub(crate) garden: bool,
    pub(crate) pets: bool,
    pub(crate) pets_info: String,
    pub(crate) clicks: i64,
    pub(crate) listed: DateTime<Utc>,
}

impl From<Listing> for ListingDto {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            kind: listing.kind,
            rent: listing.rent,
            sold: listing.sold,
            newly_built: listing.newly_built,
            address: listing.address,
            description: listing.description,
            coverimage: listing.cover_image,
            images: listing.images,
            price: listing.price,
            price_display: format_price(listing.price),
            bedrooms: listing.bedrooms,
            bathrooms: listing.bathrooms,
            receptions: listing.receptions,
            garden: listing.garden,
            pets: listing.pets,
            pets_info: listing.pets_info,
            clicks: listing.clicks,
            listed: listing.listed,
        }
    }
}

/// Raw query parameters. Values are coerced leniently: a non-numeric `type`
/// degrades to "no filter" and anything but true/1 keeps sold listings hidden.
#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct ListingQuery {
    #[serde(rename = "type")]
    pub(crate) kind: Option<String>,
    pub(crate) sort: Option<String>,
    pub(crate) sold: Option<String>,
}

impl ListingQuery {
    fn into_filter(self) -> ListingFilter {
        ListingFilter {
            kind: self.kind.as_deref().and_then(|raw| raw.parse().ok()),
            sort: PriceSort::parse(self.sort.as_deref()),
            include_sold: matches!(self.sold.as_deref(), Some("true") | Some("1")),
        }
    }
}

/// Mutable listing fields; `price` is integer minor units (pence).
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub(crate) struct WriteListingDto {
    #[serde(rename = "type")]
    pub(crate) kind: i64,
    pub(crate) rent: bool,
    #[serde(rename = "newlyBuilt")]
    pub(crate) newly_built: bool,
    pub(crate) address: String,
    pub(crate) description: String,
    pub(crate) coverimage: String,
    pub(crate) images: Vec<String>,
    #[validate(range(min = 0))]
    pub(crate) price: i64,
    #[validate(range(min = 0))]
    pub(crate) bedrooms: i64,
    #[validate(range(min = 0))]
    pub(crate) bathrooms: i64,
    #[validate(range(min = 0))]
    pub(crate) receptions: i64,
    pub(crate) garden: bool,
    pub(crate) pets: bool,
    #[serde(default)]
    pub(crate) pets_info: String,
    pub(crate) sold: bool,
}

impl WriteListingDto {
    fn into_draft(self) -> ListingDraft {
        ListingDraft {
            kind: self.kind,
            rent: self.rent,
            newly_built: self.newly_built,
            address: self.address,
            description: self.description,
            cover_image: self.coverimage,
            images: self.images,
            price_pence: self.price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            receptions: self.receptions,
            garden: self.garden,
            pets: self.pets,
            pets_info: self.pets_info,
            sold: self.sold,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/listings",
    tag = "listings",
    params(
        ("type" = Option<String>, Query, description = "Category code to filter by; non-numeric values are ignored"),
        ("sort" = Option<String>, Query, description = "high | low | id, anything else sorts newest first"),
        ("sold" = Option<String>, Query, description = "true or 1 to include sold listings (default false)")
    ),
    responses(
        (status = 200, description = "Matching listings", body = [ListingDto])
    )
)]
pub(crate) async fn list_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Json<Vec<ListingDto>> {
    let listings = state.catalog.filtered(query.into_filter()).await;
    Json(listings.into_iter().map(ListingDto::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/listings/trending",
    tag = "listings",
    responses(
        (status = 200, description = "Up to 3 most clicked unsold listings", body = [ListingDto])
    )
)]
pub(crate) async fn trending(State(state): State<AppState>) -> Json<Vec<ListingDto>> {
    let listings = state.catalog.trending().await;
    Json(listings.into_iter().map(ListingDto::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/listings/new-in",
    tag = "listings",
    responses(
        (status = 200, description = "Up to 3 most recently listed unsold listings", body = [ListingDto])
    )
)]
pub(crate) async fn new_in(State(state): State<AppState>) -> Json<Vec<ListingDto>> {
    let listings = state.catalog.new_in().await;
    Json(listings.into_iter().map(ListingDto::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/listings/{id}",
    tag = "listings",
    params(
        ("id" = i64, Path, description = "Listing id")
    ),
    responses(
        (status = 200, description = "Listing found", body = ListingDto),
        (status = 404, description = "No such listing")
    )
)]
pub(crate) async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ListingDto>> {
    let listing = state
        .catalog
        .get_listing(id)
        .await
        .ok_or(AppError::NotFound)?;

    Ok(Json(ListingDto::from(listing)))
}

#[utoipa::path(
    post,
    path = "/api/listings",
    tag = "listings",
    request_body = WriteListingDto,
    responses(
        (status = 201, description = "Listing created"),
        (status = 302, description = "No or invalid session token"),
        (status = 403, description = "Caller is not an admin"),
        (status = 500, description = "Storage failure")
    ),
    security(("cookie_auth" = []))
)]
pub(crate) async fn create_listing(
    user: AuthenticatedUser,
    State(state): State<AppState>,
    Json(dto): Json<WriteListingDto>,
) -> AppResult<StatusCode> {
    if !user.admin {
        return Err(AppError::Forbidden);
    }
    dto.validate()?;

    if !state.catalog.create_listing(dto.into_draft()).await {
        return Err(AppError::Storage);
    }
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    put,
    path = "/api/listings/{id}",
    tag = "listings",
    params(
        ("id" = i64, Path, description = "Listing id")
    ),
    request_body = WriteListingDto,
    responses(
        (status = 204, description = "Listing updated"),
        (status = 302, description = "No or invalid session token"),
        (status = 403, description = "Caller is not an admin"),
        (status = 500, description = "Storage failure")
    ),
    security(("cookie_auth" = []))
)]
pub(crate) async fn update_listing(
    user: AuthenticatedUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(dto): Json<WriteListingDto>,
) -> AppResult<StatusCode> {
    if !user.admin {
        return Err(AppError::Forbidden);
    }
    dto.validate()?;

    if !state.catalog.update_listing(id, dto.into_draft()).await {
        return Err(AppError::Storage);
    }
    Ok(StatusCode::NO_CONTENT)
}
