use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::user::User;

#[derive(Debug, Clone)]
pub(crate) struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub(crate) fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    admin: bool,
    email: String,
    firstname: String,
    lastname: String,
    saved: Option<String>,
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn get_user(&self, id: i64) -> Result<Option<User>, DomainError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, admin, email, firstname, lastname, saved FROM Users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(map_row_to_user).transpose()
    }

    async fn update_saved(&self, id: i64, saved: &[i64]) -> Result<(), DomainError> {
        let saved = serde_json::to_string(saved)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;

        sqlx::query("UPDATE Users SET saved = ? WHERE id = ?")
            .bind(saved)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}

fn map_row_to_user(row: UserRow) -> Result<User, DomainError> {
    User::new(
        row.id,
        row.admin,
        row.email,
        row.firstname,
        row.lastname,
        decode_saved(row.saved.as_deref()),
    )
    .map_err(|err| DomainError::Unexpected(err.to_string()))
}

// NULL or malformed stored text degrades to an empty bookmark set.
fn decode_saved(raw: Option<&str>) -> Vec<i64> {
    raw.and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_default()
}

fn map_db_error(err: sqlx::Error) -> DomainError {
    DomainError::Unexpected(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::decode_saved;

    #[test]
    fn decode_saved_parses_json_id_list() {
        assert_eq!(decode_saved(Some("[3,5,8]")), vec![3, 5, 8]);
    }

    #[test]
    fn decode_saved_handles_null_and_garbage() {
        assert!(decode_saved(None).is_empty());
        assert!(decode_saved(Some("not json")).is_empty());
        assert!(decode_saved(Some("")).is_empty());
    }
}
