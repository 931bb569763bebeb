//! PostgreSQL Repository Implementations

use sqlx::PgPool;

use crate::domain::entity::credential::Credential;
use crate::domain::repository::CredentialRepository;
use crate::error::AuthResult;

/// PostgreSQL-backed credential repository
#[derive(Clone)]
pub struct PgCredentialRepository {
    pool: PgPool,
}

impl PgCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CredentialRepository for PgCredentialRepository {
    async fn find_by_username(&self, username: &str) -> AuthResult<Option<Credential>> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT
                client_id,
                username,
                password_hash
            FROM api_users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CredentialRow::into_credential))
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct CredentialRow {
    client_id: i32,
    username: String,
    password_hash: String,
}

impl CredentialRow {
    fn into_credential(self) -> Credential {
        Credential {
            client_id: self.client_id,
            username: self.username,
            password_hash: self.password_hash,
        }
    }
}
