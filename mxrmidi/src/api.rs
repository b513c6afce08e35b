//! Routes HTTP de contrôle (`/fade_now`, `/skip_next`, ..., `/master/{v}`)

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::{Action, ControlDispatcher, ControlError, MASTER_GAIN};

/// Raison renvoyée quand la sortie MIDI est inutilisable
pub const CONTROL_UNAVAILABLE: &str = "control_unavailable";

/// Accusé de réception des commandes
#[derive(Debug, Serialize, ToSchema)]
pub struct ControlResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ControlResponse {
    fn ack() -> Self {
        Self {
            ok: true,
            reason: None,
        }
    }
}

/// Router des commandes, monté à la racine du serveur
pub fn control_api_router(dispatcher: ControlDispatcher) -> Router {
    Router::new()
        .route(Action::CommitTransition.path(), get(fade_now))
        .route(Action::AdvanceQueue.path(), get(skip_next))
        .route(Action::SeekForward1.path(), get(forward))
        .route(Action::SeekBackward1.path(), get(backward))
        .route(Action::SeekForward2.path(), get(forward2))
        .route(Action::SeekBackward2.path(), get(backward2))
        .route("/master/{v}", get(master_gain))
        .with_state(dispatcher)
}

#[utoipa::path(
    get,
    path = "/fade_now",
    tag = "control",
    responses(
        (status = 200, description = "Fondu Auto DJ déclenché", body = ControlResponse),
        (status = 503, description = "Sortie MIDI indisponible", body = ControlResponse)
    )
)]
pub async fn fade_now(State(dispatcher): State<ControlDispatcher>) -> Response {
    pulse_response(&dispatcher, Action::CommitTransition)
}

#[utoipa::path(
    get,
    path = "/skip_next",
    tag = "control",
    responses(
        (status = 200, description = "Morceau suivant", body = ControlResponse),
        (status = 503, description = "Sortie MIDI indisponible", body = ControlResponse)
    )
)]
pub async fn skip_next(State(dispatcher): State<ControlDispatcher>) -> Response {
    pulse_response(&dispatcher, Action::AdvanceQueue)
}

#[utoipa::path(
    get,
    path = "/forward",
    tag = "control",
    responses(
        (status = 200, description = "Avance rapide platine 1", body = ControlResponse),
        (status = 503, description = "Sortie MIDI indisponible", body = ControlResponse)
    )
)]
pub async fn forward(State(dispatcher): State<ControlDispatcher>) -> Response {
    pulse_response(&dispatcher, Action::SeekForward1)
}

#[utoipa::path(
    get,
    path = "/backward",
    tag = "control",
    responses(
        (status = 200, description = "Retour rapide platine 1", body = ControlResponse),
        (status = 503, description = "Sortie MIDI indisponible", body = ControlResponse)
    )
)]
pub async fn backward(State(dispatcher): State<ControlDispatcher>) -> Response {
    pulse_response(&dispatcher, Action::SeekBackward1)
}

#[utoipa::path(
    get,
    path = "/forward2",
    tag = "control",
    responses(
        (status = 200, description = "Avance rapide platine 2", body = ControlResponse),
        (status = 503, description = "Sortie MIDI indisponible", body = ControlResponse)
    )
)]
pub async fn forward2(State(dispatcher): State<ControlDispatcher>) -> Response {
    pulse_response(&dispatcher, Action::SeekForward2)
}

#[utoipa::path(
    get,
    path = "/backward2",
    tag = "control",
    responses(
        (status = 200, description = "Retour rapide platine 2", body = ControlResponse),
        (status = 503, description = "Sortie MIDI indisponible", body = ControlResponse)
    )
)]
pub async fn backward2(State(dispatcher): State<ControlDispatcher>) -> Response {
    pulse_response(&dispatcher, Action::SeekBackward2)
}

#[utoipa::path(
    get,
    path = "/master/{v}",
    tag = "control",
    params(
        ("v" = String, Path, description = "Gain master 0..=127 ; hors bornes ramené, non numérique = 0")
    ),
    responses(
        (status = 200, description = "Gain envoyé", body = ControlResponse),
        (status = 503, description = "Sortie MIDI indisponible", body = ControlResponse)
    )
)]
pub async fn master_gain(
    State(dispatcher): State<ControlDispatcher>,
    Path(v): Path<String>,
) -> Response {
    respond(dispatcher.set_level_raw(MASTER_GAIN, &v))
}

fn pulse_response(dispatcher: &ControlDispatcher, action: Action) -> Response {
    respond(dispatcher.pulse(action))
}

fn respond(result: crate::Result<()>) -> Response {
    match result {
        Ok(()) => (StatusCode::OK, Json(ControlResponse::ack())).into_response(),
        Err(err) => map_error(err),
    }
}

fn map_error(error: ControlError) -> Response {
    warn!("Control command failed: {}", error);
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(ControlResponse {
            ok: false,
            reason: Some(CONTROL_UNAVAILABLE.to_string()),
        }),
    )
        .into_response()
}
