//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on prebuilt proxy handlers and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserOfId;
use crate::inbound::proxy::Logger;

use super::show_user::{ShowUserHandler, show_user_handler};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub show_user: Arc<ShowUserHandler>,
}

impl HttpState {
    /// Build the state from a directory port and an optional invocation
    /// logger.
    pub fn new(user_of_id: Arc<dyn UserOfId>, logger: Option<Arc<dyn Logger>>) -> Self {
        Self {
            show_user: Arc::new(show_user_handler(user_of_id, logger)),
        }
    }
}
