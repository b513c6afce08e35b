//! Extension mxrserver pour les commandes MIDI
//!
//! `mxrmidi` ajoute ses routes à `mxrserver::Server` sans que le serveur
//! dépende de `mxrmidi`.

use crate::ControlDispatcher;
use crate::api::control_api_router;
use crate::openapi::ApiDoc;
use anyhow::Result;
use mxrserver::Server;
use tracing::info;
use utoipa::OpenApi;

/// Trait pour étendre mxrserver avec les commandes de la télécommande
///
/// # Routes enregistrées
///
/// - `GET /fade_now`, `/skip_next`, `/forward`, `/backward`, `/forward2`, `/backward2`
/// - `GET /master/{v}`
/// - `GET /swagger-ui/control`
///
/// # Exemple
///
/// ```rust,ignore
/// use mxrmidi::{ControlApiExt, ControlChannel, ControlDispatcher, DEFAULT_PULSE_DELAY};
/// use mxrserver::ServerBuilder;
///
/// let mut server = ServerBuilder::new_configured().build();
/// let channel = ControlChannel::open("MixxxWebRemote")?;
/// server
///     .init_control_api(ControlDispatcher::new(channel, DEFAULT_PULSE_DELAY))
///     .await?;
/// ```
pub trait ControlApiExt {
    async fn init_control_api(&mut self, dispatcher: ControlDispatcher) -> Result<()>;
}

impl ControlApiExt for Server {
    async fn init_control_api(&mut self, dispatcher: ControlDispatcher) -> Result<()> {
        info!(
            port = dispatcher.channel().name(),
            available = dispatcher.channel().is_available(),
            "Registering control routes"
        );
        self.add_openapi("/", control_api_router(dispatcher), ApiDoc::openapi(), "control")
            .await;
        Ok(())
    }
}
