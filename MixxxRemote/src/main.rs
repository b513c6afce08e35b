use anyhow::Result;
use mxrapp::{RemoteApp, WebAppExt};
use mxrconfig::get_config;
use mxrmidi::{ControlApiExt, ControlChannel, ControlDispatcher, MidiConfigExt, open_virtual_input};
use mxrqueue::{QueueApiExt, QueueConfigExt, QueueReader, QueueService};
use mxrserver::{ServerBuilder, logs::LoggingOptions};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = get_config();

    let mut server = ServerBuilder::new_configured().build();
    server
        .init_logging(LoggingOptions::from_config(&config))
        .await?;

    // ========== PHASE 1 : Sortie MIDI ==========

    let port_name = config.get_midi_port_name()?;
    let pulse_delay = config.get_pulse_delay()?;

    info!("🎛️ Opening MIDI port '{}'...", port_name);
    let channel = match ControlChannel::open(&port_name) {
        Ok(channel) => channel,
        Err(e) => {
            // Les commandes répondront 503, la consultation de file reste utilisable
            error!("❌ MIDI output unavailable: {}", e);
            ControlChannel::unavailable(&port_name)
        }
    };

    // Doit vivre aussi longtemps que le processus
    let _midi_input = open_virtual_input(&port_name).unwrap_or_else(|e| {
        warn!("⚠️ Virtual MIDI input not created: {}", e);
        None
    });

    // ========== PHASE 2 : Base Mixxx ==========

    let db_path = config.get_mixxx_db_path()?;
    info!("📀 Opening Mixxx database {}...", db_path.display());
    let reader = match QueueReader::open(&db_path) {
        Ok(reader) => reader,
        Err(e) => {
            error!("❌ Cannot open Mixxx database: {}", e);
            return Err(e.into());
        }
    };

    let service = QueueService::new(reader)
        .with_window_size(config.get_queue_window_size()?)
        .with_query_timeout(config.get_query_timeout()?);

    // ========== PHASE 3 : Routes HTTP ==========

    let server_info = server.info();
    server
        .add_route("/info", move || {
            let server_info = server_info.clone();
            async move { server_info }
        })
        .await;

    server
        .init_control_api(ControlDispatcher::new(channel, pulse_delay))
        .await?;
    server.init_queue_api(service).await?;

    info!("📡 Registering remote page...");
    server.add_webapp::<RemoteApp>("/").await;

    // ========== PHASE 4 : Démarrage ==========

    info!("🌐 Starting HTTP server...");
    server.start().await?;

    let server_info = server.info();
    info!(
        "✅ Mixxx Web Remote is ready on http://{}:{}",
        server_info.base_url, server_info.http_port
    );
    info!("Press Ctrl+C to stop...");
    server.wait().await;

    Ok(())
}
