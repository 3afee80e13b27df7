use async_trait::async_trait;
use futures::TryStreamExt;
use fleetcore::{
    ac::{
        grant::Grant,
        principal::Principal,
        role::Roles,
        traits::{
            PermissionBackend,
            PolicyBackend,
        },
    },
    error::BackendError,
};

use crate::SqliteBackend;

async fn is_super_admin_sqlite(
    backend: &SqliteBackend,
    principal: &Principal,
) -> Result<bool, BackendError> {
    let flag = sqlx::query_scalar::<_, i64>(
        r#"
SELECT
    super_admin
FROM
    principal
WHERE
    id = ?1
        "#,
    )
    .bind(&principal.id)
    .fetch_optional(&*backend.pool)
    .await?;
    Ok(flag.unwrap_or(0) != 0)
}

async fn roles_of_sqlite(
    backend: &SqliteBackend,
    principal: &Principal,
) -> Result<Roles, BackendError> {
    Ok(sqlx::query_scalar::<_, String>(
        r#"
SELECT
    role
FROM
    principal_role
WHERE
    principal_id = ?1
        "#,
    )
    .bind(&principal.id)
    .fetch(&*backend.pool)
    .try_collect::<Vec<_>>()
    .await?
    .into_iter()
    .collect())
}

async fn all_grants_sqlite(
    backend: &SqliteBackend,
) -> Result<Vec<Grant>, BackendError> {
    Ok(sqlx::query_as::<_, (String, String, i64, i64)>(
        r#"
SELECT
    role,
    page_key,
    can_view,
    can_edit
FROM
    role_page_permission
ORDER BY
    role, page_key
        "#,
    )
    .fetch_all(&*backend.pool)
    .await?
    .into_iter()
    .map(|(role, page_key, can_view, can_edit)| Grant {
        role,
        page_key,
        can_view: can_view != 0,
        can_edit: can_edit != 0,
    })
    .collect())
}

async fn grant_role_to_principal_sqlite(
    backend: &SqliteBackend,
    principal_id: &str,
    role: &str,
) -> Result<bool, BackendError> {
    match sqlx::query(
        r#"
INSERT INTO principal_role (
    principal_id,
    role
)
VALUES ( ?1, ?2 )
        "#,
    )
    .bind(principal_id)
    .bind(role)
    .execute(&*backend.pool)
    .await {
        Ok(_) => Ok(true),
        Err(e) => {
            match e.as_database_error() {
                Some(db_e) if db_e.is_unique_violation() => Ok(false),
                _ => Err(e)?,
            }
        }
    }
}

async fn revoke_role_from_principal_sqlite(
    backend: &SqliteBackend,
    principal_id: &str,
    role: &str,
) -> Result<bool, BackendError> {
    Ok(sqlx::query(
        r#"
DELETE FROM
    principal_role
WHERE
    principal_id = ?1 AND
    role = ?2
        "#,
    )
    .bind(principal_id)
    .bind(role)
    .execute(&*backend.pool)
    .await?
    .rows_affected() > 0)
}

async fn set_grant_sqlite(
    backend: &SqliteBackend,
    grant: &Grant,
) -> Result<(), BackendError> {
    sqlx::query(
        r#"
INSERT INTO role_page_permission (
    role,
    page_key,
    can_view,
    can_edit
)
VALUES ( ?1, ?2, ?3, ?4 )
ON CONFLICT(role, page_key) DO UPDATE SET
    can_view = excluded.can_view,
    can_edit = excluded.can_edit
        "#,
    )
    .bind(&grant.role)
    .bind(&grant.page_key)
    .bind(grant.can_view)
    .bind(grant.can_edit)
    .execute(&*backend.pool)
    .await?;
    Ok(())
}

async fn remove_grant_sqlite(
    backend: &SqliteBackend,
    role: &str,
    page_key: &str,
) -> Result<bool, BackendError> {
    Ok(sqlx::query(
        r#"
DELETE FROM
    role_page_permission
WHERE
    role = ?1 AND
    page_key = ?2
        "#,
    )
    .bind(role)
    .bind(page_key)
    .execute(&*backend.pool)
    .await?
    .rows_affected() > 0)
}

#[async_trait]
impl PermissionBackend for SqliteBackend {
    async fn is_super_admin(
        &self,
        principal: &Principal,
    ) -> Result<bool, BackendError> {
        is_super_admin_sqlite(self, principal).await
    }

    async fn roles_of(
        &self,
        principal: &Principal,
    ) -> Result<Roles, BackendError> {
        roles_of_sqlite(self, principal).await
    }

    async fn all_grants(
        &self,
    ) -> Result<Vec<Grant>, BackendError> {
        all_grants_sqlite(self).await
    }
}

#[async_trait]
impl PolicyBackend for SqliteBackend {
    async fn grant_role_to_principal(
        &self,
        principal_id: &str,
        role: &str,
    ) -> Result<bool, BackendError> {
        grant_role_to_principal_sqlite(self, principal_id, role).await
    }

    async fn revoke_role_from_principal(
        &self,
        principal_id: &str,
        role: &str,
    ) -> Result<bool, BackendError> {
        revoke_role_from_principal_sqlite(self, principal_id, role).await
    }

    async fn set_grant(
        &self,
        grant: &Grant,
    ) -> Result<(), BackendError> {
        set_grant_sqlite(self, grant).await
    }

    async fn remove_grant(
        &self,
        role: &str,
        page_key: &str,
    ) -> Result<bool, BackendError> {
        remove_grant_sqlite(self, role, page_key).await
    }
}
