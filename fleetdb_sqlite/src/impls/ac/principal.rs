use async_trait::async_trait;
use chrono::Utc;
use fleetcore::{
    ac::{
        principal::Principal,
        traits::PrincipalBackend,
    },
    error::BackendError,
};

use crate::SqliteBackend;

async fn add_principal_sqlite(
    backend: &SqliteBackend,
    id: &str,
    name: &str,
) -> Result<(), BackendError> {
    let ts = Utc::now().timestamp();
    sqlx::query(
        r#"
INSERT INTO principal (
    id,
    name,
    created_ts
)
VALUES ( ?1, ?2, ?3 )
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(ts)
    .execute(&*backend.pool)
    .await?;
    Ok(())
}

async fn get_principal_sqlite(
    backend: &SqliteBackend,
    id: &str,
) -> Result<Option<Principal>, BackendError> {
    let rec = sqlx::query_as::<_, (String, String, i64)>(
        r#"
SELECT
    id,
    name,
    created_ts
FROM
    principal
WHERE
    id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(&*backend.pool)
    .await?
    .map(|(id, name, created_ts)| Principal {
        id,
        name,
        created_ts,
    });
    Ok(rec)
}

async fn set_super_admin_sqlite(
    backend: &SqliteBackend,
    id: &str,
    value: bool,
) -> Result<bool, BackendError> {
    Ok(sqlx::query(
        r#"
UPDATE
    principal
SET
    super_admin = ?2
WHERE
    id = ?1
        "#,
    )
    .bind(id)
    .bind(value)
    .execute(&*backend.pool)
    .await?
    .rows_affected() > 0)
}

#[async_trait]
impl PrincipalBackend for SqliteBackend {
    async fn add_principal(
        &self,
        id: &str,
        name: &str,
    ) -> Result<(), BackendError> {
        add_principal_sqlite(self, id, name).await
    }

    async fn get_principal(
        &self,
        id: &str,
    ) -> Result<Option<Principal>, BackendError> {
        get_principal_sqlite(self, id).await
    }

    async fn set_super_admin(
        &self,
        id: &str,
        value: bool,
    ) -> Result<bool, BackendError> {
        set_super_admin_sqlite(self, id, value).await
    }
}
