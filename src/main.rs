use anyhow::Context;
use cervantes::application::client::PageClient;
use cervantes::application::page_loader::PageLoader;
use cervantes::config::Config;
use cervantes::infrastructure::CervantesApiClient;
use cervantes::interfaces::ui::TranslationPageApp;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

// A writer that sends logs to the UI via a crossbeam channel
struct ChannelWriter {
    sender: crossbeam_channel::Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).to_string();
        let _ = self.sender.try_send(msg);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Clone)]
struct ChannelWriterFactory {
    sender: crossbeam_channel::Sender<String>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Bounded so a hidden log panel cannot grow without limit.
    let (log_tx, log_rx) = crossbeam_channel::bounded(1024);

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory { sender: log_tx })
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    info!("Starting Cervantes {}...", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;
    info!("Backend: {}", config.http.base_url);

    // Fetches run here; the UI owns the main thread.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?;

    let backend = Arc::new(CervantesApiClient::new(&config.http)?);
    let client = PageClient::new(PageLoader::from_backend(backend), runtime.handle().clone())
        .with_log_receiver(log_rx);
    let app = TranslationPageApp::new(client, config.selection.clone());

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_title("Cervantes"),
        ..Default::default()
    };

    eframe::run_native(
        "Cervantes",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    runtime.shutdown_timeout(std::time::Duration::from_secs(1));
    Ok(())
}
