//! Documentation OpenAPI des commandes de la télécommande.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::fade_now,
        crate::api::skip_next,
        crate::api::forward,
        crate::api::backward,
        crate::api::forward2,
        crate::api::backward2,
        crate::api::master_gain,
    ),
    components(
        schemas(crate::api::ControlResponse)
    ),
    tags(
        (name = "control", description = "Commandes MIDI envoyées à Mixxx")
    ),
    info(
        title = "Mixxx Remote Control API",
        version = "0.1.0",
        description = r#"
# Commandes

Chaque bouton envoie une impulsion MIDI (Note On vélocité 127, puis Note Off
20 ms plus tard) sur le port de la télécommande :

| Route        | Note |
|--------------|------|
| `/fade_now`  | 60   |
| `/skip_next` | 61   |
| `/forward`   | 62   |
| `/backward`  | 63   |
| `/forward2`  | 64   |
| `/backward2` | 65   |

`/master/{v}` envoie le Control Change 7 avec `v` ramené dans 0..=127.

Réponse : `{"ok": true}`, ou `503 {"ok": false, "reason": "control_unavailable"}`
si la sortie MIDI est absente.
        "#,
        license(
            name = "MIT",
        ),
    )
)]
pub struct ApiDoc;
