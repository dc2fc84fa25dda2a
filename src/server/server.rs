//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{Config, ServerConfig};
use crate::server::handlers::health_check;
use crate::server::middleware::RequestIdMiddleware;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_web::{App, HttpServer as ActixHttpServer, middleware::DefaultHeaders, web};
use std::time::Duration;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let state = AppState::from_config(config.clone()).await?;

        Ok(Self {
            config: config.gateway.server.clone(),
            state,
        })
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let max_body_size = state.config.gateway.server.max_body_size;

        let json_config = web::JsonConfig::default()
            .limit(max_body_size)
            .error_handler(|err, _req| {
                GatewayError::validation(format!("Invalid request body: {}", err)).into()
            });
        let form_config = web::FormConfig::default()
            .limit(max_body_size)
            .error_handler(|err, _req| {
                GatewayError::validation(format!("Invalid form body: {}", err)).into()
            });

        App::new()
            .app_data(state)
            .app_data(json_config)
            .app_data(form_config)
            .wrap(RequestIdMiddleware)
            .wrap(DefaultHeaders::new().add(("Server", "chat-gateway")))
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();

        info!("Starting HTTP server on {}", bind_addr);

        let limiter = self.state.gateway.limiter().clone();
        let cleanup = limiter.is_enabled().then(|| limiter.start_cleanup_task());
        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .client_request_timeout(Duration::from_secs(self.config.timeout));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| GatewayError::Config(format!("Failed to bind {}: {}", bind_addr, e)))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        let result = server.await;
        if let Some(cleanup) = cleanup {
            cleanup.abort();
        }
        result.map_err(|e| GatewayError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
