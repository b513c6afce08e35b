#![cfg(feature = "mxrserver")]

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{MixxxDb, end_to_end_db};
use mxrqueue::QueueService;
use mxrqueue::api::queue_api_router;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn get(service: QueueService, uri: &str) -> (StatusCode, Value) {
    let response = queue_api_router(service)
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_queue_end_to_end() {
    let db = end_to_end_db();

    let (status, body) = get(QueueService::new(db.reader()), "/queue").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "ok": true,
            "items": [
                {"position": 0, "artist": "Artist A", "title": "Title A"},
                {"position": 1, "artist": "Artist B", "title": "Title B"}
            ]
        })
    );
}

#[tokio::test]
async fn test_status_end_to_end() {
    let db = end_to_end_db();

    let (status, body) = get(QueueService::new(db.reader()), "/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "ok": true,
            "nextAutoDj": {"ok": true, "artist": "Artist A", "title": "Title A"},
            "queue": {
                "ok": true,
                "items": [
                    {"position": 0, "artist": "Artist A", "title": "Title A"},
                    {"position": 1, "artist": "Artist B", "title": "Title B"}
                ]
            }
        })
    );
}

#[tokio::test]
async fn test_no_autodj_playlist() {
    let db = MixxxDb::new();
    db.playlist(1, "Favorites");

    let (status, body) = get(QueueService::new(db.reader()), "/queue").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"ok": false, "reason": "no_autodj_playlist", "items": []})
    );

    let (_, body) = get(QueueService::new(db.reader()), "/status").await;
    assert_eq!(
        body["nextAutoDj"],
        json!({"ok": false, "reason": "no_autodj_playlist"})
    );
    assert_eq!(body["queue"]["reason"], "no_autodj_playlist");
}

#[tokio::test]
async fn test_empty_queue() {
    let db = MixxxDb::new();
    db.playlist(1, "Auto DJ");

    let (_, body) = get(QueueService::new(db.reader()), "/status").await;
    assert_eq!(body["nextAutoDj"], json!({"ok": false, "reason": "queue_empty"}));
    assert_eq!(body["queue"], json!({"ok": true, "items": []}));
}

#[tokio::test]
async fn test_null_artist_is_kept() {
    let db = MixxxDb::new();
    db.playlist(1, "AutoDJ").track(1, None, "Untitled Jam").member(1, 1, 0);

    let (_, body) = get(QueueService::new(db.reader()), "/status").await;
    assert_eq!(
        body["nextAutoDj"],
        json!({"ok": true, "artist": null, "title": "Untitled Jam"})
    );
}

#[tokio::test]
async fn test_store_unavailable() {
    let db = end_to_end_db();
    let reader =
        mxrqueue::QueueReader::open_with_busy_timeout(&db.path, std::time::Duration::from_millis(10))
            .unwrap();

    let writer = rusqlite::Connection::open(&db.path).unwrap();
    writer.execute_batch("BEGIN EXCLUSIVE;").unwrap();

    let (status, body) = get(QueueService::new(reader.clone()), "/queue").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        body,
        json!({"ok": false, "reason": "store_unavailable", "items": []})
    );

    let (status, body) = get(QueueService::new(reader), "/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["nextAutoDj"]["reason"], "store_unavailable");
    assert_eq!(body["queue"]["reason"], "store_unavailable");

    writer.execute_batch("ROLLBACK;").unwrap();
}
