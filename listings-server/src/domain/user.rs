use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Account profile plus the user's bookmarked listing ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) admin: bool,
    pub(crate) email: String,
    pub(crate) firstname: String,
    pub(crate) lastname: String,
    pub(crate) saved: Vec<i64>,
}

impl User {
    pub(crate) fn new(
        id: i64,
        admin: bool,
        email: impl Into<String>,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        saved: Vec<i64>,
    ) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(DomainError::Validation {
                field: "id",
                message: "must be > 0",
            });
        }
        let email = email.into().trim().to_lowercase();
        if email.is_empty() {
            return Err(DomainError::Validation {
                field: "email",
                message: "must not be empty",
            });
        }

        Ok(Self {
            id,
            admin,
            email,
            firstname: firstname.into(),
            lastname: lastname.into(),
            saved,
        })
    }
}
