//! Façade asynchrone du lecteur de file
//!
//! rusqlite est bloquant : chaque requête part sur le pool bloquant de Tokio
//! et reste bornée par un délai maximal.

use crate::model::{QueueItem, QueueSnapshot, TrackSummary};
use crate::reader::QueueReader;
use crate::{QueueError, Result};
use std::time::Duration;
use tracing::warn;

/// Délai maximal d'une requête
///
/// Doit rester supérieur à [`DEFAULT_BUSY_TIMEOUT`](crate::DEFAULT_BUSY_TIMEOUT).
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_millis(2000);

/// Taille par défaut de la fenêtre renvoyée par `/queue`
pub const DEFAULT_WINDOW_SIZE: usize = 20;

#[derive(Debug, Clone)]
pub struct QueueService {
    reader: QueueReader,
    query_timeout: Duration,
    window_size: usize,
}

impl QueueService {
    pub fn new(reader: QueueReader) -> Self {
        Self {
            reader,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn with_window_size(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn reader(&self) -> &QueueReader {
        &self.reader
    }

    pub async fn locate_queue_entity(&self) -> Result<Option<i64>> {
        self.run(|reader| reader.locate_queue_entity()).await
    }

    pub async fn head(&self) -> Result<QueueSnapshot<TrackSummary>> {
        self.run(|reader| reader.head_of()).await
    }

    /// Fenêtre de la taille configurée
    pub async fn window(&self) -> Result<QueueSnapshot<Vec<QueueItem>>> {
        self.window_of(self.window_size).await
    }

    pub async fn window_of(&self, limit: usize) -> Result<QueueSnapshot<Vec<QueueItem>>> {
        self.run(move |reader| reader.window_of(limit)).await
    }

    /// Exécute `query` sur le pool bloquant, borné par `query_timeout`
    ///
    /// Après un timeout, le worker continue de tenir le mutex du lecteur
    /// jusqu'à ce que SQLite abandonne (busy timeout du lecteur). Le busy
    /// timeout doit donc rester inférieur à `query_timeout`, sinon les
    /// requêtes suivantes s'accumulent derrière le mutex.
    async fn run<T, F>(&self, query: F) -> Result<T>
    where
        F: FnOnce(&QueueReader) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let reader = self.reader.clone();
        let task = tokio::task::spawn_blocking(move || query(&reader));

        match tokio::time::timeout(self.query_timeout, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(QueueError::Worker(join_error.to_string())),
            Err(_) => {
                warn!(timeout = ?self.query_timeout, "Mixxx database query timed out");
                Err(QueueError::Timeout(self.query_timeout))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_BUSY_TIMEOUT;

    #[test]
    fn test_busy_timeout_below_query_timeout() {
        assert!(DEFAULT_BUSY_TIMEOUT < DEFAULT_QUERY_TIMEOUT);
    }
}
