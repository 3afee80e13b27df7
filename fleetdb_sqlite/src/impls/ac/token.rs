use async_trait::async_trait;
use chrono::Utc;
use fleetcore::{
    ac::{
        principal::Principal,
        traits::IdentityBackend,
    },
    error::BackendError,
};

use crate::SqliteBackend;

async fn principal_by_token_sqlite(
    backend: &SqliteBackend,
    token: &str,
) -> Result<Option<Principal>, BackendError> {
    let rec = sqlx::query_as::<_, (String, String, i64)>(
        r#"
SELECT
    principal.id,
    principal.name,
    principal.created_ts
FROM
    principal_token
JOIN
    principal ON principal_token.principal_id = principal.id
WHERE
    principal_token.token = ?1
        "#,
    )
    .bind(token)
    .fetch_optional(&*backend.pool)
    .await?
    .map(|(id, name, created_ts)| Principal {
        id,
        name,
        created_ts,
    });
    Ok(rec)
}

async fn issue_token_sqlite(
    backend: &SqliteBackend,
    principal_id: &str,
    token: &str,
) -> Result<(), BackendError> {
    let ts = Utc::now().timestamp();
    sqlx::query(
        r#"
INSERT INTO principal_token (
    token,
    principal_id,
    created_ts
)
VALUES ( ?1, ?2, ?3 )
        "#,
    )
    .bind(token)
    .bind(principal_id)
    .bind(ts)
    .execute(&*backend.pool)
    .await?;
    Ok(())
}

async fn revoke_token_sqlite(
    backend: &SqliteBackend,
    token: &str,
) -> Result<bool, BackendError> {
    Ok(sqlx::query(
        r#"
DELETE FROM
    principal_token
WHERE
    token = ?1
        "#,
    )
    .bind(token)
    .execute(&*backend.pool)
    .await?
    .rows_affected() > 0)
}

#[async_trait]
impl IdentityBackend for SqliteBackend {
    async fn principal_by_token(
        &self,
        token: &str,
    ) -> Result<Option<Principal>, BackendError> {
        principal_by_token_sqlite(self, token).await
    }

    async fn issue_token(
        &self,
        principal_id: &str,
        token: &str,
    ) -> Result<(), BackendError> {
        issue_token_sqlite(self, principal_id, token).await
    }

    async fn revoke_token(
        &self,
        token: &str,
    ) -> Result<bool, BackendError> {
        revoke_token_sqlite(self, token).await
    }
}
