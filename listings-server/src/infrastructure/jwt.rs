use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::auth::AuthResult;

#[derive(Debug, Error)]
pub(crate) enum JwtError {
    #[error("token encode failed")]
    Encode(#[source] jsonwebtoken::errors::Error),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub(crate) struct Claims {
    pub(crate) id: i64,
    pub(crate) admin: bool,
    pub(crate) exp: i64,
}

/// Verifies session tokens against the server-held secret. Verification is
/// pure: no I/O beyond the signature check.
pub(crate) struct TokenVerifier {
    secret: String,
    ttl_seconds: i64,
}

impl TokenVerifier {
    const DEFAULT_TTL_SECONDS: i64 = 24 * 60 * 60;

    pub(crate) fn new(secret: &str, ttl_seconds: i64) -> Self {
        let ttl_seconds = if ttl_seconds > 0 {
            ttl_seconds
        } else {
            Self::DEFAULT_TTL_SECONDS
        };

        TokenVerifier {
            secret: secret.into(),
            ttl_seconds,
        }
    }

    /// Issues a signed token carrying the subject id and admin flag. The
    /// login flow that calls this lives outside this crate's routes.
    pub(crate) fn issue(&self, id: i64, admin: bool) -> Result<String, JwtError> {
        let exp = (Utc::now() + Duration::seconds(self.ttl_seconds)).timestamp();

        let claims = Claims { id, admin, exp };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(JwtError::Encode)
    }

    /// Absent token, bad signature, expiry and malformed claims all collapse
    /// into the non-ok variants; nothing is ever thrown to the caller.
    pub(crate) fn verify(&self, token: Option<&str>) -> AuthResult {
        let Some(token) = token else {
            return AuthResult::NoToken;
        };

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 10;

        match decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        ) {
            Ok(data) => AuthResult::Ok {
                id: data.claims.id,
                admin: data.claims.admin,
            },
            Err(_) => AuthResult::Invalid,
        }
    }
}
