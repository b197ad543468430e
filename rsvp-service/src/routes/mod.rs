use axum::{
    extract::Request,
    middleware,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::client::RouterClient;
use crate::config::{RsvpConfig, ServiceConfig};
use crate::handlers::{
    health,
    page_handlers::{show_page, submit_form, PageState},
    rsvp_handlers::submit_rsvp,
    RsvpState,
};
use rsvp_shared::mail::{smtp::SmtpMailer, Mailer};

pub const RSVP_PATH: &str = "/api/rsvp";

/// Creates a router with the SMTP mailer, configured from the environment
pub fn create_router() -> Router {
    info!("Creating router with SMTP mailer");

    let config = RsvpConfig::from_env();
    let service = ServiceConfig::from_env();
    info!("Using route prefix: '{}'", service.base_path);

    let mailer = Arc::new(SmtpMailer::new(config.smtp.clone()));
    create_router_with_mailer(mailer, config, &service.base_path)
}

/// Creates a router with a given mailer implementation
pub fn create_router_with_mailer<M>(mailer: Arc<M>, config: RsvpConfig, prefix: &str) -> Router
where
    M: Mailer,
{
    info!("Setting up routes with prefix: '{}'", prefix);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Logging middleware to trace all requests
    async fn logging_middleware(
        req: Request,
        next: axum::middleware::Next,
    ) -> impl axum::response::IntoResponse {
        info!(
            "Router received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    let api_routes = Router::new()
        .route(RSVP_PATH, post(submit_rsvp::<M>))
        .route("/health", get(health))
        .with_state(RsvpState::new(mailer, config));

    // The page posts through the API router, not around it
    let client: PageState = Arc::new(RouterClient::new(api_routes.clone(), RSVP_PATH));
    let page_routes = Router::new()
        .route("/", get(show_page).post(submit_form))
        .with_state(client);

    let app = api_routes.merge(page_routes);

    let router = if prefix.is_empty() {
        app
    } else {
        Router::new().nest(prefix, app)
    };

    let router = router
        .layer(cors)
        .layer(middleware::from_fn(logging_middleware));

    // Add a fallback handler for 404s
    router.fallback(|req: Request| async move {
        warn!("No route matched for: {} {}", req.method(), req.uri());
        (
            axum::http::StatusCode::NOT_FOUND,
            "The requested resource was not found".to_string(),
        )
    })
}
