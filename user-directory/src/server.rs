//! HTTP server

use axum::{
    http::{header, Method},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{config::Config, error::Result};

/// Server instance
pub struct Server {
    config: Config,
}

impl Server {
    /// Create a new server instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Wrap the router in the CORS and tracing layers
    pub fn app(&self, router: Router) -> Result<Router> {
        let cors_layer = self.build_cors_layer()?;

        Ok(router
            // CORS runs inside tracing so rejected preflights are still logged
            .layer(cors_layer)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            ))
    }

    /// Run the server with the given router until the process exits
    pub async fn serve(self, router: Router) -> Result<()> {
        let addr = self.config.service.socket_addr();
        let app = self.app(router)?;

        tracing::info!("Starting {} on {}", self.config.service.name, addr);
        tracing::info!("  - CORS origin: {}", self.config.cors.allowed_origin);

        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Single-origin CORS with a fixed method and header allow-list
    fn build_cors_layer(&self) -> Result<CorsLayer> {
        let origin = self.config.cors.origin_header()?;
        tracing::debug!("Allowing cross-origin requests from {:?}", origin);

        // Allow-Origin is echoed only for a matching request origin
        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list([origin]))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
    }
}
