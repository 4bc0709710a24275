//! HTTP server with graceful shutdown

use axum::Router;
use http::StatusCode;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};

use crate::{
    config::{Config, CorsMode},
    error::Result,
    middleware::{request_id_layer, request_id_propagation_layer, sensitive_headers_layer},
};

/// Server instance
pub struct Server {
    config: Config,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Wrap `app` in the middleware stack
    ///
    /// Layers added later wrap the earlier ones, so the catch-panic layer ends
    /// up innermost and CORS outermost. Request IDs are generated inside the
    /// propagation layer so a generated id reaches the response.
    pub fn layer(&self, app: Router) -> Router {
        let middleware = &self.config.middleware;

        let app = if middleware.catch_panic {
            app.layer(CatchPanicLayer::new())
        } else {
            app
        };

        let app = app
            .layer(request_id_propagation_layer())
            .layer(request_id_layer())
            .layer(sensitive_headers_layer())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().include_headers(true))
                    .on_response(DefaultOnResponse::new().include_headers(true)),
            )
            .layer(RequestBodyLimitLayer::new(middleware.body_limit_bytes()))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                self.config.service.timeout(),
            ));

        let app = if middleware.compression {
            app.layer(CompressionLayer::new())
        } else {
            app
        };

        match self.build_cors_layer() {
            Some(cors) => app.layer(cors),
            None => app,
        }
    }

    /// Run the server with the given router until SIGINT or SIGTERM
    pub async fn serve(self, app: Router) -> Result<()> {
        let addr = self.config.service.bind_address();
        let listener = TcpListener::bind(&addr).await?;
        self.serve_on(listener, app).await
    }

    /// Run the server on an already bound listener
    pub async fn serve_on(self, listener: TcpListener, app: Router) -> Result<()> {
        tracing::info!(
            service = %self.config.service.name,
            address = %listener.local_addr()?,
            "Server listening"
        );
        self.log_middleware_config();

        let app = self.layer(app);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    fn log_middleware_config(&self) {
        let middleware = &self.config.middleware;
        tracing::info!(
            catch_panic = middleware.catch_panic,
            compression = middleware.compression,
            cors_mode = ?middleware.cors_mode,
            body_limit_mb = middleware.body_limit_mb,
            timeout_secs = self.config.service.timeout_secs,
            "Middleware configuration"
        );
    }

    fn build_cors_layer(&self) -> Option<CorsLayer> {
        match self.config.middleware.cors_mode {
            CorsMode::Permissive => Some(CorsLayer::permissive()),
            CorsMode::Restrictive => Some(CorsLayer::new()),
            CorsMode::Disabled => None,
        }
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Unable to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Unable to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl+C), starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
