use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// A property listing as read from storage. `price` is decimal major units
/// (pounds); the persisted value is always integer minor units (pence).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Listing {
    pub(crate) id: i64,
    pub(crate) kind: i64,
    pub(crate) rent: bool,
    pub(crate) sold: bool,
    pub(crate) newly_built: bool,
    pub(crate) address: String,
    pub(crate) description: String,
    pub(crate) cover_image: String,
    pub(crate) images: Vec<String>,
    pub(crate) price: f64,
    pub(crate) bedrooms: i64,
    pub(crate) bathrooms: i64,
    pub(crate) receptions: i64,
    pub(crate) garden: bool,
    pub(crate) pets: bool,
    pub(crate) pets_info: String,
    pub(crate) clicks: i64,
    pub(crate) listed: DateTime<Utc>,
}

impl Listing {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        id: i64,
        kind: i64,
        rent: bool,
        sold: bool,
        newly_built: bool,
        address: impl Into<String>,
        description: impl Into<String>,
        cover_image: impl Into<String>,
        images: Vec<String>,
        price: f64,
        bedrooms: i64,
        bathrooms: i64,
        receptions: i64,
        garden: bool,
        pets: bool,
        pets_info: impl Into<String>,
        clicks: i64,
        listed: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(DomainError::Validation {
                field: "id",
                message: "must be > 0",
            });
        }
        if price < 0.0 {
            return Err(DomainError::Validation {
                field: "price",
                message: "must be >= 0",
            });
        }
        validate_non_negative("bedrooms", bedrooms)?;
        validate_non_negative("bathrooms", bathrooms)?;
        validate_non_negative("receptions", receptions)?;
        validate_non_negative("clicks", clicks)?;

        Ok(Self {
            id,
            kind,
            rent,
            sold,
            newly_built,
            address: address.into(),
            description: description.into(),
            cover_image: cover_image.into(),
            images,
            price,
            bedrooms,
            bathrooms,
            receptions,
            garden,
            pets,
            pets_info: pets_info.into(),
            clicks,
            listed,
        })
    }
}

fn validate_non_negative(field: &'static str, value: i64) -> Result<(), DomainError> {
    if value < 0 {
        return Err(DomainError::Validation {
            field,
            message: "must be >= 0",
        });
    }
    Ok(())
}

/// Sort order for the catalog listing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PriceSort {
    #[default]
    Default,
    High,
    Low,
    Id,
}

impl PriceSort {
    /// Unknown or absent values fall back to the default (newest first).
    pub(crate) fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("high") => PriceSort::High,
            Some("low") => PriceSort::Low,
            Some("id") => PriceSort::Id,
            _ => PriceSort::Default,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ListingFilter {
    pub(crate) kind: Option<i64>,
    pub(crate) sort: PriceSort,
    pub(crate) include_sold: bool,
}

pub(crate) fn pence_to_pounds(pence: i64) -> f64 {
    pence as f64 / 100.0
}

pub(crate) fn format_price(price: f64) -> String {
    format!("£{price:.2}")
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::{DomainError, Listing, PriceSort, format_price, pence_to_pounds};

    fn sample_listing(id: i64, price: f64, bedrooms: i64) -> Result<Listing, DomainError> {
        Listing::new(
            id,
            2,
            false,
            false,
            true,
            "1 High Street",
            "A lovely terrace",
            "cover.jpg",
            vec!["a.jpg".to_string(), "b.jpg".to_string()],
            price,
            bedrooms,
            1,
            1,
            true,
            false,
            "",
            0,
            Utc::now(),
        )
    }

    #[test]
    fn listing_new_rejects_non_positive_id() {
        assert!(sample_listing(0, 1000.0, 2).is_err());
        assert!(sample_listing(-5, 1000.0, 2).is_err());
    }

    #[test]
    fn listing_new_rejects_negative_price_and_rooms() {
        assert!(sample_listing(1, -0.01, 2).is_err());
        assert!(sample_listing(1, 1000.0, -1).is_err());
    }

    #[test]
    fn listing_new_accepts_valid_fields() {
        let listing = sample_listing(7, 950.0, 3).expect("listing should be valid");
        assert_eq!(listing.id, 7);
        assert_eq!(listing.images.len(), 2);
    }

    #[test]
    fn price_sort_parse_recognizes_known_modes() {
        assert_eq!(PriceSort::parse(Some("high")), PriceSort::High);
        assert_eq!(PriceSort::parse(Some("low")), PriceSort::Low);
        assert_eq!(PriceSort::parse(Some("id")), PriceSort::Id);
    }

    #[test]
    fn price_sort_parse_falls_back_to_default() {
        assert_eq!(PriceSort::parse(None), PriceSort::Default);
        assert_eq!(PriceSort::parse(Some("")), PriceSort::Default);
        assert_eq!(PriceSort::parse(Some("HIGH")), PriceSort::Default);
        assert_eq!(PriceSort::parse(Some("cheapest")), PriceSort::Default);
    }

    #[test]
    fn pence_convert_to_decimal_pounds() {
        assert_eq!(pence_to_pounds(123_456), 1234.56);
        assert_eq!(pence_to_pounds(0), 0.0);
        assert_eq!(pence_to_pounds(99), 0.99);
    }

    #[test]
    fn format_price_renders_two_decimal_places() {
        assert_eq!(format_price(1234.5), "£1234.50");
        assert_eq!(format_price(0.0), "£0.00");
    }
}
