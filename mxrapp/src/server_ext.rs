//! Implémentation de [`WebAppExt`](crate::WebAppExt) pour `mxrserver::Server`

use crate::WebAppExt;
use mxrserver::Server;
use rust_embed::RustEmbed;

impl WebAppExt for Server {
    async fn add_webapp<W>(&mut self, path: &str)
    where
        W: RustEmbed + Clone + Send + Sync + 'static,
    {
        self.add_spa::<W>(&normalize_mount_path(path)).await;
    }
}

/// `"app/"` devient `"/app"` ; `""` et `"/"` restent `"/"`
fn normalize_mount_path(path: &str) -> String {
    let trimmed = path.trim();

    if trimmed.is_empty() || trimmed == "/" {
        "/".to_string()
    } else {
        format!("/{}", trimmed.trim_matches('/'))
    }
}
