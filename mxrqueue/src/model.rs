//! Valeurs renvoyées par le lecteur de file Auto DJ

use serde::Serialize;

/// Absence ordinaire : ce n'est pas une erreur de la base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueFailure {
    /// Aucune playlist dont le nom contient "auto dj" ou "autodj"
    NoQueueEntity,
    /// La playlist existe mais ne contient aucun morceau
    QueueEmpty,
}

impl QueueFailure {
    /// Raison exposée dans les réponses JSON
    pub fn reason(self) -> &'static str {
        match self {
            QueueFailure::NoQueueEntity => "no_autodj_playlist",
            QueueFailure::QueueEmpty => "queue_empty",
        }
    }
}

impl std::fmt::Display for QueueFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// Résultat d'une lecture de la file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueSnapshot<T> {
    Found(T),
    Missing(QueueFailure),
}

impl<T> QueueSnapshot<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, QueueSnapshot::Found(_))
    }

    pub fn found(self) -> Option<T> {
        match self {
            QueueSnapshot::Found(value) => Some(value),
            QueueSnapshot::Missing(_) => None,
        }
    }

    pub fn failure(&self) -> Option<QueueFailure> {
        match self {
            QueueSnapshot::Found(_) => None,
            QueueSnapshot::Missing(failure) => Some(*failure),
        }
    }
}

/// Le prochain morceau de la file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "mxrserver", derive(utoipa::ToSchema))]
pub struct TrackSummary {
    pub artist: Option<String>,
    pub title: Option<String>,
}

/// Une ligne de la fenêtre de file, avec sa position d'origine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "mxrserver", derive(utoipa::ToSchema))]
pub struct QueueItem {
    pub position: i64,
    pub artist: Option<String>,
    pub title: Option<String>,
}
