use anyhow::Context;
use bulletin::{app, Board, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bulletin=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let board = Board::with_config(config.board_config());
    let _sweeper = board.spawn_sweeper();

    let (host, port) = config.addr();
    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    tracing::info!("bulletin listening on {}", listener.local_addr()?);
    tracing::info!(
        "messages live for {}s, swept every {}s",
        board.config().ttl.as_secs(),
        config.sweep_interval.as_secs()
    );

    axum::serve(listener, app(board))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
