use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use lyrebird::application::ports::AudioFetcher;
use lyrebird::application::services::LyricsService;
use lyrebird::infrastructure::audio::WhisperEngine;
use lyrebird::infrastructure::observability::{TracingConfig, init_tracing};
use lyrebird::infrastructure::smb::SmbAudioFetcher;
use lyrebird::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    tracing::info!(model = %settings.whisper.model, "Loading whisper model");

    // A failed load leaves the service up but degraded: /health reports 503
    // and /transcribe refuses work until a restart.
    let lyrics_service = match WhisperEngine::load(&settings.whisper.model_path()) {
        Ok(engine) => {
            let fetcher: Arc<dyn AudioFetcher> = Arc::new(SmbAudioFetcher::new());
            Some(Arc::new(LyricsService::new(
                fetcher,
                Arc::new(engine),
                settings.scratch.dir.clone(),
            )))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to load whisper model");
            None
        }
    };

    let state = AppState {
        lyrics_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
