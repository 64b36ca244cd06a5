use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::presentation::http::handlers::account::{SavedDto, SiteMessageDto, UserDto};
use crate::presentation::http::handlers::listings::{ListingDto, ListingQuery, WriteListingDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::handlers::listings::list_listings,
        crate::presentation::http::handlers::listings::trending,
        crate::presentation::http::handlers::listings::new_in,
        crate::presentation::http::handlers::listings::get_listing,
        crate::presentation::http::handlers::listings::create_listing,
        crate::presentation::http::handlers::listings::update_listing,
        crate::presentation::http::handlers::account::me,
        crate::presentation::http::handlers::account::update_saved,
        crate::presentation::http::handlers::account::site_message
    ),
    components(
        schemas(
            ListingDto,
            ListingQuery,
            WriteListingDto,
            UserDto,
            SavedDto,
            SiteMessageDto
        )
    ),
    tags(
        (name = "listings", description = "Property listing catalog"),
        (name = "account", description = "Account and site message endpoints")
    ),
    modifiers(&SecurityAddon)
)]
pub(crate) struct ApiDoc;

pub(crate) struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let mut components = openapi.components.take().unwrap_or_default();
        components.add_security_scheme(
            "cookie_auth",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("auth"))),
        );
        openapi.components = Some(components);
    }
}
