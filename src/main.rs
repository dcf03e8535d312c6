use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use studyflow::application::services::{TopicExtractionService, TopicPromptBuilder, TopicSanitizer};
use studyflow::domain::KeywordBlacklist;
use studyflow::infrastructure::llm::GenerationBackendFactory;
use studyflow::infrastructure::observability::{TracingConfig, init_tracing};
use studyflow::infrastructure::text_processing::{ExtractorFactory, TextNormalizer};
use studyflow::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment.as_str()),
        settings.server.port,
    );

    let blacklist =
        KeywordBlacklist::with_extra_terms(&settings.normalizer.extra_blacklist_terms);
    tracing::info!(terms = blacklist.terms().len(), "Keyword blacklist loaded");

    let file_loader = ExtractorFactory::create(&settings.extraction);
    let backend = GenerationBackendFactory::create(&settings.oracle)
        .context("failed to create generation backend")?;

    let topic_service = Arc::new(TopicExtractionService::new(
        file_loader,
        backend,
        TextNormalizer::new(blacklist.clone()),
        TopicPromptBuilder::new(settings.oracle.max_prompt_chars),
        TopicSanitizer::new(blacklist),
    ));

    let state = AppState {
        topic_service,
        max_upload_bytes: settings.extraction.max_file_size_bytes(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server host/port")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
