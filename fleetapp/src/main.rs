use clap::Parser;
use fleetac::platform::Builder as ACPlatformBuilder;
use fleetapp::{
    conf::Cli,
    server::router,
};
use fleetcore::platform::ConnectorOption;
use fleetdb_sqlite::SqliteBackend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    stderrlog::new()
        .module(module_path!())
        .module("fleetac")
        .module("fleetrbac")
        .module("fleetdb_sqlite")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let platform = ACPlatformBuilder::new()
        .ac_platform(
            SqliteBackend::ac(
                ConnectorOption::from(&args.fleetac_db_url)
                    .create_db(true)
            ).await?
        )
        .build()?;

    let app = router(platform);

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    log::info!("listening on http://{}", &args.listen);
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to install Ctrl+C handler: {e}");
        std::future::pending::<()>().await
    }
}
