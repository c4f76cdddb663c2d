//! Builders for the directory client and HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use user_directory::inbound::http::state::HttpState;
use user_directory::inbound::proxy::TracingLogger;
use user_directory::outbound::directory::{
    DirectoryClient, InMemoryDirectoryClient, RedisDirectoryClient, UserOfIdRepository,
};

use super::ServerConfig;

/// Build the directory client: Redis when configured, otherwise in-memory.
///
/// # Errors
/// Returns [`std::io::Error`] when the Redis pool cannot be built.
pub(super) async fn build_directory_client(
    config: &ServerConfig,
) -> std::io::Result<Arc<dyn DirectoryClient>> {
    match &config.redis {
        Some(redis) => {
            let client = RedisDirectoryClient::connect(redis.clone())
                .await
                .map_err(|e| std::io::Error::other(format!("redis directory unavailable: {e}")))?;
            info!("user directory backed by redis");
            Ok(Arc::new(client))
        }
        None => {
            warn!("no redis url configured; using an empty in-memory user directory");
            Ok(Arc::new(InMemoryDirectoryClient::new()))
        }
    }
}

/// Wire repository, service and proxy handler into the shared HTTP state.
pub(super) fn build_http_state(
    config: &ServerConfig,
    client: Arc<dyn DirectoryClient>,
) -> web::Data<HttpState> {
    let repository = UserOfIdRepository::new(config.user_table_name.clone(), client);
    info!(table = repository.table_name(), "user directory repository ready");
    web::Data::new(HttpState::new(
        Arc::new(repository),
        Some(Arc::new(TracingLogger)),
    ))
}
