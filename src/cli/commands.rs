use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::catalog::StationCatalog;
use crate::cli::args::Cli;
use crate::error::Result;
use crate::utils::constants::STATIONS_FILE;
use crate::web::{create_router, AppState};

pub async fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);

    // The catalog is a startup dependency: the process must not come up
    // without it.
    let catalog = StationCatalog::load(&cli.data_dir.join(STATIONS_FILE))?;
    tracing::info!(stations = catalog.len(), "Loaded station catalog");

    let state = AppState::new(catalog, cli.data_dir);
    let app = create_router(state);

    let addr = SocketAddr::from((cli.host, cli.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "ecad_api=debug,tower_http=debug"
    } else {
        "ecad_api=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
