//! Lecture seule de la file Auto DJ dans la base SQLite de Mixxx

use crate::model::{QueueFailure, QueueItem, QueueSnapshot, TrackSummary};
use crate::{QueueError, Result};
use rusqlite::{Connection, OpenFlags, OptionalExtension, params};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info};

/// Attente maximale quand Mixxx tient un verrou d'écriture
///
/// Doit rester inférieure au délai de requête de
/// [`QueueService`](crate::QueueService), qui ne peut pas interrompre SQLite.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(1000);

const LOCATE_SQL: &str = "SELECT id FROM Playlists \
     WHERE lower(name) LIKE '%auto dj%' OR lower(name) LIKE '%autodj%' \
     ORDER BY id ASC LIMIT 1";

const HEAD_SQL: &str = "SELECT l.artist, l.title \
     FROM PlaylistTracks pt JOIN library l ON l.id = pt.track_id \
     WHERE pt.playlist_id = ?1 \
     ORDER BY pt.position ASC LIMIT 1";

const WINDOW_SQL: &str = "SELECT pt.position, l.artist, l.title \
     FROM PlaylistTracks pt JOIN library l ON l.id = pt.track_id \
     WHERE pt.playlist_id = ?1 \
     ORDER BY pt.position ASC LIMIT ?2";

/// Lecteur de la file Auto DJ
///
/// La connexion est ouverte une seule fois, en lecture seule, et partagée
/// derrière un mutex. Aucune transaction n'englobe la recherche de la
/// playlist et la lecture de ses morceaux.
#[derive(Clone)]
pub struct QueueReader {
    conn: Arc<Mutex<Connection>>,
}

impl QueueReader {
    /// Ouvre la base Mixxx en lecture seule
    ///
    /// Échoue si le fichier n'existe pas ou ne contient pas les tables
    /// `Playlists`, `PlaylistTracks` et `library`.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_busy_timeout(path, DEFAULT_BUSY_TIMEOUT)
    }

    pub fn open_with_busy_timeout(path: &Path, busy_timeout: Duration) -> Result<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| QueueError::Open(format!("{}: {}", path.display(), e)))?;

        conn.busy_timeout(busy_timeout)
            .map_err(|e| QueueError::Open(format!("Failed to set busy timeout: {}", e)))?;

        // Vérifie le schéma sans rien lire
        for table in ["Playlists", "PlaylistTracks", "library"] {
            conn.prepare(&format!("SELECT * FROM {} LIMIT 0", table))
                .map_err(|e| {
                    QueueError::Open(format!("{} is not a Mixxx database: {}", path.display(), e))
                })?;
        }

        info!("📀 Mixxx database opened read-only: {}", path.display());

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Cherche la playlist Auto DJ
    ///
    /// Heuristique : nom contenant "auto dj" ou "autodj" sans tenir compte de
    /// la casse ; la plus petite id l'emporte.
    pub fn locate_queue_entity(&self) -> Result<Option<i64>> {
        let conn = self.lock();
        let id = conn
            .query_row(LOCATE_SQL, [], |row| row.get::<_, i64>(0))
            .optional()?;
        debug!(?id, "located Auto DJ playlist");
        Ok(id)
    }

    /// Prochain morceau de la file (position la plus basse)
    pub fn head_of(&self) -> Result<QueueSnapshot<TrackSummary>> {
        let Some(playlist_id) = self.locate_queue_entity()? else {
            return Ok(QueueSnapshot::Missing(QueueFailure::NoQueueEntity));
        };

        let conn = self.lock();
        let head = conn
            .query_row(HEAD_SQL, params![playlist_id], |row| {
                Ok(TrackSummary {
                    artist: row.get(0)?,
                    title: row.get(1)?,
                })
            })
            .optional()?;

        Ok(match head {
            Some(track) => QueueSnapshot::Found(track),
            None => QueueSnapshot::Missing(QueueFailure::QueueEmpty),
        })
    }

    /// Les `limit` premiers morceaux de la file, dans l'ordre des positions
    ///
    /// Une playlist sans morceau donne une liste vide : ce n'est pas un échec.
    pub fn window_of(&self, limit: usize) -> Result<QueueSnapshot<Vec<QueueItem>>> {
        let Some(playlist_id) = self.locate_queue_entity()? else {
            return Ok(QueueSnapshot::Missing(QueueFailure::NoQueueEntity));
        };

        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let conn = self.lock();
        let mut stmt = conn.prepare(WINDOW_SQL)?;
        let items = stmt
            .query_map(params![playlist_id, limit], |row| {
                Ok(QueueItem {
                    position: row.get(0)?,
                    artist: row.get(1)?,
                    title: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(QueueSnapshot::Found(items))
    }
}

impl std::fmt::Debug for QueueReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueReader").finish_non_exhaustive()
    }
}
