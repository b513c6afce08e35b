//! Routes HTTP de consultation de la file Auto DJ (`/queue`, `/status`)

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::{QueueError, QueueItem, QueueService, QueueSnapshot, TrackSummary};

/// Raison renvoyée quand la base Mixxx ne répond pas
pub const STORE_UNAVAILABLE: &str = "store_unavailable";

/// Fenêtre de la file
///
/// `items` est toujours présent, vide en cas d'échec.
#[derive(Debug, Serialize, ToSchema)]
pub struct QueueResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub items: Vec<QueueItem>,
}

impl QueueResponse {
    fn failed(reason: &str) -> Self {
        Self {
            ok: false,
            reason: Some(reason.to_string()),
            items: Vec::new(),
        }
    }
}

impl From<QueueSnapshot<Vec<QueueItem>>> for QueueResponse {
    fn from(snapshot: QueueSnapshot<Vec<QueueItem>>) -> Self {
        match snapshot {
            QueueSnapshot::Found(items) => Self {
                ok: true,
                reason: None,
                items,
            },
            QueueSnapshot::Missing(failure) => Self::failed(failure.reason()),
        }
    }
}

/// Prochain morceau
///
/// Succès : `{ok: true, artist, title}` (valeurs éventuellement nulles).
/// Échec : `{ok: false, reason}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HeadResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
}

impl HeadResponse {
    fn failed(reason: &str) -> Self {
        Self {
            ok: false,
            reason: Some(reason.to_string()),
            artist: None,
            title: None,
        }
    }
}

impl From<QueueSnapshot<TrackSummary>> for HeadResponse {
    fn from(snapshot: QueueSnapshot<TrackSummary>) -> Self {
        match snapshot {
            QueueSnapshot::Found(track) => Self {
                ok: true,
                reason: None,
                artist: Some(track.artist),
                title: Some(track.title),
            },
            QueueSnapshot::Missing(failure) => Self::failed(failure.reason()),
        }
    }
}

/// État combiné affiché par la télécommande
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub ok: bool,
    #[serde(rename = "nextAutoDj")]
    pub next_auto_dj: HeadResponse,
    pub queue: QueueResponse,
}

/// Router de consultation, monté à la racine du serveur
pub fn queue_api_router(service: QueueService) -> Router {
    Router::new()
        .route("/queue", get(get_queue))
        .route("/status", get(get_status))
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "/queue",
    tag = "queue",
    responses(
        (status = 200, description = "Fenêtre de la file Auto DJ (ok=false si absente)", body = QueueResponse),
        (status = 503, description = "Base Mixxx indisponible", body = QueueResponse)
    )
)]
pub async fn get_queue(State(service): State<QueueService>) -> Response {
    match service.window().await {
        Ok(snapshot) => (StatusCode::OK, Json(QueueResponse::from(snapshot))).into_response(),
        Err(e) => {
            log_store_error("queue", &e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(QueueResponse::failed(STORE_UNAVAILABLE)),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/status",
    tag = "queue",
    responses(
        (status = 200, description = "Prochain morceau et fenêtre de la file", body = StatusResponse)
    )
)]
pub async fn get_status(State(service): State<QueueService>) -> Json<StatusResponse> {
    let (head, window) = tokio::join!(service.head(), service.window());

    let next_auto_dj = head.map(HeadResponse::from).unwrap_or_else(|e| {
        log_store_error("status head", &e);
        HeadResponse::failed(STORE_UNAVAILABLE)
    });
    let queue = window.map(QueueResponse::from).unwrap_or_else(|e| {
        log_store_error("status window", &e);
        QueueResponse::failed(STORE_UNAVAILABLE)
    });

    Json(StatusResponse {
        ok: true,
        next_auto_dj,
        queue,
    })
}

fn log_store_error(what: &str, error: &QueueError) {
    warn!(request = what, "Mixxx database unavailable: {}", error);
}
