#![allow(dead_code)]

use mxrqueue::QueueReader;
use rusqlite::{Connection, params};
use std::path::PathBuf;
use tempfile::TempDir;

/// Base Mixxx minimale dans un répertoire temporaire
///
/// Seules les colonnes lues par mxrqueue sont créées.
pub struct MixxxDb {
    _dir: TempDir,
    pub path: PathBuf,
}

impl MixxxDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mixxxdb.sqlite");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE Playlists (
                id INTEGER PRIMARY KEY,
                name VARCHAR(48)
            );
            CREATE TABLE PlaylistTracks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                playlist_id INTEGER REFERENCES Playlists(id),
                track_id INTEGER REFERENCES library(id),
                position INTEGER
            );
            CREATE TABLE library (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                artist VARCHAR(64),
                title VARCHAR(128)
            );",
        )
        .unwrap();
        Self { _dir: dir, path }
    }

    fn conn(&self) -> Connection {
        Connection::open(&self.path).unwrap()
    }

    pub fn playlist(&self, id: i64, name: &str) -> &Self {
        self.conn()
            .execute(
                "INSERT INTO Playlists (id, name) VALUES (?1, ?2)",
                params![id, name],
            )
            .unwrap();
        self
    }

    pub fn track(&self, id: i64, artist: Option<&str>, title: &str) -> &Self {
        self.conn()
            .execute(
                "INSERT INTO library (id, artist, title) VALUES (?1, ?2, ?3)",
                params![id, artist, title],
            )
            .unwrap();
        self
    }

    pub fn member(&self, playlist_id: i64, track_id: i64, position: i64) -> &Self {
        self.conn()
            .execute(
                "INSERT INTO PlaylistTracks (playlist_id, track_id, position) VALUES (?1, ?2, ?3)",
                params![playlist_id, track_id, position],
            )
            .unwrap();
        self
    }

    /// Playlist `playlist_id` remplie de `count` morceaux, positions 0..count
    pub fn fill(&self, playlist_id: i64, count: i64) -> &Self {
        for i in 0..count {
            let track_id = 100 + i;
            self.track(track_id, Some(&format!("Artist {}", i)), &format!("Title {}", i));
            self.member(playlist_id, track_id, i);
        }
        self
    }

    pub fn reader(&self) -> QueueReader {
        QueueReader::open(&self.path).unwrap()
    }

    pub fn bytes(&self) -> Vec<u8> {
        std::fs::read(&self.path).unwrap()
    }
}

/// Scénario de bout en bout : playlist 7 "AutoDJ" avec deux morceaux
pub fn end_to_end_db() -> MixxxDb {
    let db = MixxxDb::new();
    db.playlist(7, "AutoDJ")
        .track(10, Some("Artist A"), "Title A")
        .track(11, Some("Artist B"), "Title B")
        .member(7, 10, 0)
        .member(7, 11, 1);
    db
}
