//! Extension mxrserver pour la consultation de la file Auto DJ

use crate::QueueService;
use crate::api::queue_api_router;
use crate::openapi::ApiDoc;
use anyhow::Result;
use mxrserver::Server;
use tracing::info;
use utoipa::OpenApi;

/// Trait pour étendre mxrserver avec `/queue` et `/status`
///
/// # Exemple
///
/// ```rust,ignore
/// use mxrqueue::{QueueApiExt, QueueReader, QueueService};
///
/// let reader = QueueReader::open(&db_path)?;
/// server.init_queue_api(QueueService::new(reader)).await?;
/// ```
pub trait QueueApiExt {
    async fn init_queue_api(&mut self, service: QueueService) -> Result<()>;
}

impl QueueApiExt for Server {
    async fn init_queue_api(&mut self, service: QueueService) -> Result<()> {
        info!(
            window_size = service.window_size(),
            timeout = ?service.query_timeout(),
            "Registering queue routes"
        );
        self.add_openapi("/", queue_api_router(service), ApiDoc::openapi(), "queue")
            .await;
        Ok(())
    }
}
