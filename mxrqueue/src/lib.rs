//! # mxrqueue - Lecture de la file Auto DJ de Mixxx
//!
//! Mixxx conserve sa file Auto DJ dans une playlist de sa base SQLite
//! (`mixxxdb.sqlite`). Le schéma ne marque pas cette playlist : on la
//! retrouve par son nom.
//!
//! La base est ouverte en lecture seule ; rien n'y est jamais écrit.
//!
//! ## Exemple
//!
//! ```no_run
//! use mxrqueue::{QueueReader, QueueSnapshot};
//! use std::path::Path;
//!
//! let reader = QueueReader::open(Path::new("/home/dj/.mixxx/mixxxdb.sqlite"))?;
//! match reader.head_of()? {
//!     QueueSnapshot::Found(track) => println!("next: {:?} - {:?}", track.artist, track.title),
//!     QueueSnapshot::Missing(failure) => println!("nothing queued: {}", failure),
//! }
//! # Ok::<(), mxrqueue::QueueError>(())
//! ```

mod error;
mod model;
mod reader;
mod service;

#[cfg(feature = "mxrconfig")]
mod config_ext;

#[cfg(feature = "mxrserver")]
pub mod api;
#[cfg(feature = "mxrserver")]
pub mod openapi;
#[cfg(feature = "mxrserver")]
mod server_ext;

pub use error::{QueueError, Result};
pub use model::{QueueFailure, QueueItem, QueueSnapshot, TrackSummary};
pub use reader::{DEFAULT_BUSY_TIMEOUT, QueueReader};
pub use service::{DEFAULT_QUERY_TIMEOUT, DEFAULT_WINDOW_SIZE, QueueService};

#[cfg(feature = "mxrconfig")]
pub use config_ext::{QueueConfigExt, default_mixxx_db_path};

#[cfg(feature = "mxrserver")]
pub use server_ext::QueueApiExt;
