//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use timecheck_common::{AppConfig, AppError, AppResult};
use timecheck_db::{create_pool, PgClockRepository, PoolConfig};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize the connection pool and create AppState
///
/// Must be called from within a tokio runtime.
pub fn create_app_state(config: &AppConfig) -> AppResult<AppState> {
    let pool_config = PoolConfig::from(&config.database);
    let pool = create_pool(&pool_config).map_err(AppError::database)?;
    info!(
        max_connections = pool_config.max_connections,
        acquire_timeout_secs = pool_config.acquire_timeout.as_secs(),
        "PostgreSQL pool created"
    );

    let clock = Arc::new(PgClockRepository::with_query_timeout(
        pool,
        config.database.query_timeout(),
    ));
    Ok(AppState::new(clock, config.server.request_timeout()))
}

/// Bind the TCP listener for the configured address
pub async fn bind_listener(addr: SocketAddr) -> AppResult<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })
}

/// Serve `app` on `listener` until a shutdown signal arrives
pub async fn run_server(listener: TcpListener, app: Router) -> AppResult<()> {
    serve_until(listener, app, shutdown_signal()).await
}

/// Serve `app` on `listener` until `shutdown` resolves, then drain in-flight requests
pub async fn serve_until<F>(listener: TcpListener, app: Router, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(AppError::Server)?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.server.socket_addr()?;

    let state = create_app_state(&config)?;
    let app = create_app(state);

    let listener = bind_listener(addr).await?;
    let port = listener.local_addr().map_err(AppError::Server)?.port();
    info!(%addr, "Backend running on {}", port);

    run_server(listener, app).await
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
