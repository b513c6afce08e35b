//! # mxrapp - Page de télécommande pour Mixxx
//!
//! Une page HTML unique, embarquée dans le binaire avec `RustEmbed` et servie
//! à la racine par `mxrserver`. Elle n'a pas de build séparé : le fichier
//! `webapp/index.html` est inclus tel quel.
//!
//! La page appelle les routes de la télécommande :
//!
//! - boutons : `/fade_now`, `/skip_next`, `/backward`, `/forward`,
//!   `/backward2`, `/forward2`
//! - curseur de gain : `/master/{v}`
//! - rafraîchissement périodique de `/status` (prochain morceau et file)
//!
//! ## Utilisation
//!
//! ```rust,ignore
//! use mxrapp::{RemoteApp, WebAppExt};
//!
//! server.add_webapp::<RemoteApp>("/").await;
//! ```

use rust_embed::RustEmbed;

#[cfg(feature = "mxrserver")]
mod server_ext;

/// Fichiers de la page de télécommande
#[derive(RustEmbed, Clone)]
#[folder = "webapp/"]
pub struct RemoteApp;

/// Trait pour monter une webapp embarquée sur `mxrserver::Server`
#[cfg(feature = "mxrserver")]
pub trait WebAppExt {
    async fn add_webapp<W>(&mut self, path: &str)
    where
        W: RustEmbed + Clone + Send + Sync + 'static;
}
