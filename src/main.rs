use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use speech_relay::controllers::{pages::PagesController, speech::SpeechController};
use speech_relay::domain::speech::SpeechService;
use speech_relay::infrastructure::config::{Config, LogFormat};
use speech_relay::infrastructure::http::start_http_server;
use speech_relay::infrastructure::repositories::{
    AzureSpeechRepository, HardcodedLanguageCatalogRepository, SpeechEndpoints,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Missing speech credentials abort startup here
    let config = Config::from_env()?;

    init_logging(&config);

    tracing::info!(
        "Starting Speech Relay on {}:{}",
        config.host,
        config.port
    );

    let endpoints = SpeechEndpoints::from_config(&config);
    tracing::info!(
        region = %config.speech.region,
        token_url = %endpoints.token_url,
        synthesis_url = %endpoints.synthesis_url,
        "Azure Speech endpoints configured"
    );

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject credentials)
    tracing::info!("Instantiating repositories...");
    let speech_repo = Arc::new(AzureSpeechRepository::with_endpoints(
        config.speech.clone(),
        endpoints,
    ));
    let catalog_repo = Arc::new(HardcodedLanguageCatalogRepository::new());

    // 2. Instantiate services
    tracing::info!("Instantiating services...");
    let speech_service = Arc::new(SpeechService::new(speech_repo, catalog_repo.clone()));

    // 3. Instantiate controllers
    tracing::info!("Instantiating controllers...");
    let speech_controller = Arc::new(SpeechController::new(speech_service));
    let pages_controller = Arc::new(PagesController::new(catalog_repo));

    start_http_server(config, speech_controller, pages_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "speech_relay=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
