//! Documentation OpenAPI de la consultation de file.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::get_queue,
        crate::api::get_status,
    ),
    components(
        schemas(
            crate::api::QueueResponse,
            crate::api::HeadResponse,
            crate::api::StatusResponse,
            crate::QueueItem,
            crate::TrackSummary,
        )
    ),
    tags(
        (name = "queue", description = "File Auto DJ de Mixxx, en lecture seule")
    ),
    info(
        title = "Mixxx Remote Queue API",
        version = "0.1.0",
        description = r#"
# File Auto DJ

La file est la première playlist (plus petite id) dont le nom contient
`auto dj` ou `autodj`, sans tenir compte de la casse.

Raisons d'échec :

- `no_autodj_playlist` : aucune playlist ne correspond
- `queue_empty` : la playlist est vide (seulement pour le prochain morceau)
- `store_unavailable` : la base Mixxx n'a pas répondu
        "#,
        license(
            name = "MIT",
        ),
    )
)]
pub struct ApiDoc;
