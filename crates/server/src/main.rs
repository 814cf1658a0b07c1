//! Sabzi Mandi API server.
//!
//! This binary serves the storefront REST API on port 5000.
//!
//! # Architecture
//!
//! - Axum web framework with JSON request/response bodies
//! - `PostgreSQL` for users, products, addresses, and orders
//! - Stateless token auth (JWT in a `token` header)
//! - Sentry error tracking with tracing integration
//!
//! All request handling lives in the `sabzi_server` library crate; this
//! binary only loads configuration, builds the router, and runs it.

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use sentry::integrations::tracing as sentry_tracing;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sabzi_server::config::ServerConfig;
use sabzi_server::state::AppState;
use sabzi_server::{db, middleware, routes};

/// Start Sentry if a DSN is configured. The returned guard flushes
/// pending events on drop, so it must outlive the server.
fn init_sentry(config: &ServerConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_deref()?;

    let options = sentry::ClientOptions {
        release: sentry::release_name!(),
        attach_stacktrace: true,
        ..Default::default()
    };
    let guard = sentry::init((dsn, options));

    tracing::info!("Sentry error reporting enabled");
    Some(guard)
}

/// Route tracing events into Sentry: errors and warnings become events,
/// routine logs become breadcrumbs attached to the next event.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    use sentry_tracing::EventFilter;
    use tracing::Level;

    match *metadata.level() {
        Level::ERROR | Level::WARN => EventFilter::Event,
        Level::INFO | Level::DEBUG => EventFilter::Breadcrumb,
        _ => EventFilter::Ignore,
    }
}

/// Install the tracing subscriber with an env filter and Sentry forwarding.
///
/// `RUST_LOG` overrides the default of info for this crate plus
/// tower-http request logs at debug.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sabzi_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

/// Assemble the full router: API routes, health probes, and middleware.
fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        // The browser client is served from a different origin
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        // Sentry layers go outermost so every request is covered
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

#[tokio::main]
async fn main() {
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Sentry first so the tracing layer below can feed it
    let _sentry_guard = init_sentry(&config);
    init_tracing();

    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    // Migrations are applied out of band: cargo run -p sabzi-cli -- migrate

    let state = AppState::new(config.clone(), pool);
    let app = build_app(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!("api server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness probe. Answers as long as the process is up.
async fn health() -> &'static str {
    "ok"
}

/// Readiness probe. Runs a trivial query so load balancers stop
/// routing traffic here when the database drops out.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    let db_up = sqlx::query("SELECT 1").fetch_one(state.pool()).await.is_ok();
    if db_up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// Resolve once the process receives Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    use tokio::signal;

    let interrupt = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => {}
        () = terminate => {}
    }

    tracing::info!("Shutdown signal received, draining in-flight requests");
}
