use fleetcore::platform::{
    ConnectorOption,
    PlatformUrl,
};
use sqlx::{
    migrate::MigrateDatabase,
    Sqlite,
    SqlitePool,
};
use std::sync::Arc;

use crate::SqliteBackend;

mod ac;

impl PlatformUrl for SqliteBackend {
    fn url(&self) -> &str {
        self.url.as_ref()
    }
}

impl SqliteBackend {
    pub async fn connect(opts: ConnectorOption) -> Result<SqliteBackend, sqlx::Error> {
        if opts.should_create_db() && !Sqlite::database_exists(opts.url()).await.unwrap_or(false) {
            log::warn!("sqlite database {} does not exist; creating...", opts.url());
            Sqlite::create_database(opts.url()).await?
        }

        let pool = SqlitePool::connect(opts.url()).await?;
        Ok(SqliteBackend {
            pool: Arc::new(pool),
            url: opts.into_url(),
        })
    }

    pub async fn migrate_ac(self) -> Result<Self, sqlx::Error> {
        sqlx::migrate!("migrations/fleetac").run(&*self.pool).await?;
        Ok(self)
    }

    /// Connect and bring the access control schema up to date.
    pub async fn ac(opts: impl Into<ConnectorOption>) -> Result<Self, sqlx::Error> {
        Self::connect(opts.into())
            .await?
            .migrate_ac()
            .await
    }
}

mod default_impl {
    use fleetcore::platform::DefaultACPlatform;
    use crate::SqliteBackend;

    impl DefaultACPlatform for SqliteBackend {}
}

#[cfg(test)]
pub(crate) mod tests {
    use fleetcore::platform::ACPlatform;
    use crate::SqliteBackend;

    #[async_std::test]
    async fn smoke() -> anyhow::Result<()> {
        let backend = SqliteBackend::ac("sqlite::memory:").await?;
        let platform: &dyn ACPlatform = backend.as_dyn();
        assert_eq!(platform.url(), "sqlite::memory:");
        assert!(platform.all_grants().await?.is_empty());
        Ok(())
    }
}
