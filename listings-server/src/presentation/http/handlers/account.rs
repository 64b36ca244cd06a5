use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::site_message::SiteMessage;
use crate::domain::user::User;
use crate::presentation::AppState;
use crate::presentation::http::app_error::{AppError, AppResult};
use crate::presentation::http::middleware::auth::AuthenticatedUser;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct UserDto {
    pub(crate) id: i64,
    pub(crate) admin: bool,
    pub(crate) email: String,
    pub(crate) firstname: String,
    pub(crate) lastname: String,
    pub(crate) saved: Vec<i64>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            admin: user.admin,
            email: user.email,
            firstname: user.firstname,
            lastname: user.lastname,
            saved: user.saved,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct SavedDto {
    pub(crate) saved: Vec<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct SiteMessageDto {
    pub(crate) sitemessage_text: String,
    pub(crate) sitemessage_type: String,
}

impl From<SiteMessage> for SiteMessageDto {
    fn from(message: SiteMessage) -> Self {
        Self {
            sitemessage_text: message.text,
            sitemessage_type: message.kind,
        }
    }
}

#[utoipa::path(
    get,
    path = "/account/me",
    tag = "account",
    responses(
        (status = 200, description = "Profile of the session's subject", body = UserDto),
        (status = 302, description = "No or invalid session token"),
        (status = 404, description = "Subject row no longer exists")
    ),
    security(("cookie_auth" = []))
)]
pub(crate) async fn me(
    user: AuthenticatedUser,
    State(state): State<AppState>,
) -> AppResult<Json<UserDto>> {
    let profile = state
        .accounts
        .get_user(user.id)
        .await
        .ok_or(AppError::NotFound)?;

    Ok(Json(UserDto::from(profile)))
}

#[utoipa::path(
    put,
    path = "/account/saved",
    tag = "account",
    request_body = SavedDto,
    responses(
        (status = 204, description = "Saved set overwritten"),
        (status = 302, description = "No or invalid session token"),
        (status = 500, description = "Storage failure")
    ),
    security(("cookie_auth" = []))
)]
pub(crate) async fn update_saved(
    user: AuthenticatedUser,
    State(state): State<AppState>,
    Json(dto): Json<SavedDto>,
) -> AppResult<StatusCode> {
    if !state.accounts.update_saved(user.id, &dto.saved).await {
        return Err(AppError::Storage);
    }
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/sitemessage",
    tag = "account",
    responses(
        (status = 200, description = "Current site-wide banner", body = SiteMessageDto),
        (status = 404, description = "No banner configured")
    )
)]
pub(crate) async fn site_message(State(state): State<AppState>) -> AppResult<Json<SiteMessageDto>> {
    let message = state
        .accounts
        .site_message()
        .await
        .ok_or(AppError::NotFound)?;

    Ok(Json(SiteMessageDto::from(message)))
}
