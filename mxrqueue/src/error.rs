//! Types d'erreurs pour mxrqueue

use std::time::Duration;

/// Erreurs d'accès à la base Mixxx
///
/// Distinctes des absences ordinaires (pas de playlist Auto DJ, file vide),
/// qui sont des [`QueueSnapshot::Missing`](crate::QueueSnapshot::Missing).
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("Failed to open Mixxx database: {0}")]
    Open(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Query timed out after {0:?}")]
    Timeout(Duration),

    #[error("Query worker failed: {0}")]
    Worker(String),
}

impl From<rusqlite::Error> for QueueError {
    fn from(e: rusqlite::Error) -> Self {
        QueueError::Query(e.to_string())
    }
}

/// Type Result spécialisé pour mxrqueue
pub type Result<T> = std::result::Result<T, QueueError>;
