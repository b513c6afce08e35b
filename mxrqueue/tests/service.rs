mod common;

use common::{MixxxDb, end_to_end_db};
use mxrqueue::{QueueError, QueueFailure, QueueReader, QueueService, QueueSnapshot};
use std::time::Duration;

#[tokio::test]
async fn test_service_window_uses_configured_size() {
    let db = MixxxDb::new();
    db.playlist(1, "AutoDJ").fill(1, 30);

    let service = QueueService::new(db.reader());
    assert_eq!(service.window().await.unwrap().found().unwrap().len(), 20);

    let service = service.with_window_size(4);
    assert_eq!(service.window().await.unwrap().found().unwrap().len(), 4);
}

#[tokio::test]
async fn test_service_head_and_missing() {
    let db = end_to_end_db();
    let service = QueueService::new(db.reader());
    let head = service.head().await.unwrap().found().unwrap();
    assert_eq!(head.title.as_deref(), Some("Title A"));

    let db = MixxxDb::new();
    let service = QueueService::new(db.reader());
    assert_eq!(service.locate_queue_entity().await.unwrap(), None);
    assert_eq!(
        service.head().await.unwrap(),
        QueueSnapshot::Missing(QueueFailure::NoQueueEntity)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_locked_database_times_out() {
    let db = end_to_end_db();
    let reader = QueueReader::open_with_busy_timeout(&db.path, Duration::from_secs(2)).unwrap();
    let service = QueueService::new(reader).with_query_timeout(Duration::from_millis(50));

    // Un autre processus (Mixxx) tient un verrou exclusif
    let writer = rusqlite::Connection::open(&db.path).unwrap();
    writer.execute_batch("BEGIN EXCLUSIVE;").unwrap();

    let result = service.head().await;
    assert!(matches!(result, Err(QueueError::Timeout(d)) if d == Duration::from_millis(50)));

    writer.execute_batch("ROLLBACK;").unwrap();
}

#[tokio::test]
async fn test_locked_database_busy_error_is_reported() {
    let db = end_to_end_db();
    let reader = QueueReader::open_with_busy_timeout(&db.path, Duration::from_millis(10)).unwrap();
    let service = QueueService::new(reader);

    let writer = rusqlite::Connection::open(&db.path).unwrap();
    writer.execute_batch("BEGIN EXCLUSIVE;").unwrap();

    assert!(matches!(service.window().await, Err(QueueError::Query(_))));

    writer.execute_batch("ROLLBACK;").unwrap();
}
