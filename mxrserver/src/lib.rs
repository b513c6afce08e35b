//! # mxrserver - Serveur web haut niveau basé sur Axum
//!
//! Cette crate fournit l'abstraction HTTP de la télécommande Mixxx : un
//! [`Server`] auquel les autres crates ajoutent leurs routes via des traits
//! d'extension (`ControlApiExt` dans `mxrmidi`, `QueueApiExt` dans `mxrqueue`,
//! `WebAppExt` dans `mxrapp`), sans que `mxrserver` les connaisse.
//!
//! ## Fonctionnalités
//!
//! - **Routes JSON simples** : `add_route()`
//! - **Sous-routers** : `add_router()` (merge à la racine ou nest)
//! - **Documentation OpenAPI** : `add_openapi()` monte un router et son Swagger UI
//! - **Applications embarquées** : `add_spa()` via `RustEmbed`
//! - **Logs** : buffer circulaire, flux SSE `/log-sse`, dump `/log-dump`
//! - **Arrêt gracieux** : sur Ctrl+C
//!
//! ## Exemple d'utilisation
//!
//! ```rust,no_run
//! use mxrserver::{ServerBuilder, logs::LoggingOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut server = ServerBuilder::new_configured().build();
//!     server.init_logging(LoggingOptions::default()).await?;
//!
//!     server.add_route("/info", || async {
//!         serde_json::json!({"status": "ok"})
//!     }).await;
//!
//!     server.start().await?;
//!     server.wait().await;
//!     Ok(())
//! }
//! ```

pub mod logs;
pub mod server;

pub use logs::{LogState, SseLayer, log_dump, log_sse};
pub use server::{Server, ServerBuilder, ServerInfo};
