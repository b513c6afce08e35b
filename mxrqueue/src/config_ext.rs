//! Extension de mxrconfig pour la base Mixxx et la file

use crate::service::{DEFAULT_QUERY_TIMEOUT, DEFAULT_WINDOW_SIZE};
use anyhow::{Result, anyhow};
use mxrconfig::Config;
use serde_yaml::{Number, Value};
use std::path::PathBuf;
use std::time::Duration;

/// Trait d'extension pour mxrconfig::Config
pub trait QueueConfigExt {
    /// Chemin de `mixxxdb.sqlite` (`mixxx.database`)
    ///
    /// Vide : emplacement par défaut de Mixxx sur la plateforme.
    /// Relatif : résolu depuis le répertoire de configuration.
    fn get_mixxx_db_path(&self) -> Result<PathBuf>;

    fn set_mixxx_db_path(&self, path: &str) -> Result<()>;

    /// Nombre de morceaux renvoyés par `/queue` (`queue.window_size`)
    fn get_queue_window_size(&self) -> Result<usize>;

    fn set_queue_window_size(&self, size: usize) -> Result<()>;

    /// Délai maximal d'une requête (`queue.query_timeout_ms`)
    fn get_query_timeout(&self) -> Result<Duration>;

    fn set_query_timeout(&self, timeout: Duration) -> Result<()>;
}

/// Emplacement de la base Mixxx par défaut
pub fn default_mixxx_db_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Cannot determine home directory"))?;
    if cfg!(windows) {
        Ok(home
            .join("AppData")
            .join("Local")
            .join("Mixxx")
            .join("mixxxdb.sqlite"))
    } else {
        Ok(home.join(".mixxx").join("mixxxdb.sqlite"))
    }
}

impl QueueConfigExt for Config {
    fn get_mixxx_db_path(&self) -> Result<PathBuf> {
        match self.get_value(&["mixxx", "database"]) {
            Ok(Value::String(s)) if !s.trim().is_empty() => Ok(self.resolve_path(s.trim())),
            _ => default_mixxx_db_path(),
        }
    }

    fn set_mixxx_db_path(&self, path: &str) -> Result<()> {
        self.set_value(&["mixxx", "database"], Value::String(path.to_string()))
    }

    fn get_queue_window_size(&self) -> Result<usize> {
        match self.get_value(&["queue", "window_size"]) {
            Ok(Value::Number(n)) => match n.as_u64() {
                Some(size) if size > 0 => Ok(size as usize),
                _ => Ok(DEFAULT_WINDOW_SIZE),
            },
            _ => {
                self.set_queue_window_size(DEFAULT_WINDOW_SIZE)?;
                Ok(DEFAULT_WINDOW_SIZE)
            }
        }
    }

    fn set_queue_window_size(&self, size: usize) -> Result<()> {
        self.set_value(
            &["queue", "window_size"],
            Value::Number(Number::from(size as u64)),
        )
    }

    fn get_query_timeout(&self) -> Result<Duration> {
        match self.get_value(&["queue", "query_timeout_ms"]) {
            Ok(Value::Number(n)) => match n.as_u64() {
                Some(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
                _ => Ok(DEFAULT_QUERY_TIMEOUT),
            },
            _ => {
                self.set_query_timeout(DEFAULT_QUERY_TIMEOUT)?;
                Ok(DEFAULT_QUERY_TIMEOUT)
            }
        }
    }

    fn set_query_timeout(&self, timeout: Duration) -> Result<()> {
        self.set_value(
            &["queue", "query_timeout_ms"],
            Value::Number(Number::from(timeout.as_millis() as u64)),
        )
    }
}
