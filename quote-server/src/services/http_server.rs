use crate::core::{Config, ServerState};
use axum::{Router, middleware};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use parking_lot::RwLock;
use tower::Service;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

pub type OneshotResult =
    Result<http::Response<axum::body::Body>, Box<dyn std::error::Error + Send + Sync>>;

/// HTTP access log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = std::time::Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis();

    tracing::info!(target: "http_access", "{} {} {} {}ms", method, uri, status, elapsed_ms);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::estimate::router())
        .merge(crate::api::catalog::router())
        .merge(crate::api::pricing_rules::router())
}

/// Router with state and the tower-http middleware stack applied
pub fn build_router(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);
    build_app()
        .with_state(state)
        .layer(TimeoutLayer::new(timeout))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}

#[derive(Clone, Debug)]
pub struct HttpService {
    config: Config,
    router: Arc<RwLock<Option<Router>>>,
}

impl HttpService {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            router: Arc::new(RwLock::new(None)),
        }
    }

    /// Build and cache the router for the given state
    pub fn initialize(&self, state: ServerState) {
        *self.router.write() = Some(build_router(state));
    }

    pub fn router(&self) -> Option<Router> {
        self.router.read().clone()
    }

    /// Dispatch one request through the cached router without a socket
    pub async fn oneshot(&self, request: http::Request<axum::body::Body>) -> OneshotResult {
        let Some(mut service) = self.router() else {
            return Err(crate::utils::AppError::internal("HttpService not initialized").into());
        };
        match service.call(request).await {
            Ok(response) => Ok(response),
            Err(_) => Err(crate::utils::AppError::internal("Oneshot call failed").into()),
        }
    }

    /// Serve until `shutdown_signal` resolves
    pub async fn start_server<F>(&self, shutdown_signal: F) -> crate::core::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let app = self.router().ok_or_else(|| {
            crate::core::ServerError::Config("HttpService not initialized with router".into())
        })?;

        let addr = SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|source| {
            crate::core::ServerError::Bind {
                addr: addr.to_string(),
                source,
            }
        })?;
        tracing::info!("🚀 Starting HTTP server on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| anyhow::anyhow!("Server error: {e}"))?;

        Ok(())
    }
}
