use std::sync::Arc;

use axum::Json;

use crate::config::RsvpConfig;
use crate::models::HealthResponse;

pub mod page_handlers;
pub mod rsvp_handlers;

/// State shared by the submission routes: the mail transport and the
/// addressing config. Nothing in here changes between requests.
pub struct RsvpState<M: ?Sized> {
    pub mailer: Arc<M>,
    pub config: Arc<RsvpConfig>,
}

impl<M: ?Sized> RsvpState<M> {
    pub fn new(mailer: Arc<M>, config: RsvpConfig) -> Self {
        Self {
            mailer,
            config: Arc::new(config),
        }
    }
}

// Manual impl: derive would require M: Clone
impl<M: ?Sized> Clone for RsvpState<M> {
    fn clone(&self) -> Self {
        Self {
            mailer: Arc::clone(&self.mailer),
            config: Arc::clone(&self.config),
        }
    }
}

// GET /health - Liveness check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
