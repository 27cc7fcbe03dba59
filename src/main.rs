use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use babel::application::services::TranscriptionPipeline;
use babel::infrastructure::appwrite::AppwriteClient;
use babel::infrastructure::audio::OpenAiWhisperEngine;
use babel::infrastructure::llm::OpenAiClient;
use babel::infrastructure::observability::{TracingConfig, init_tracing};
use babel::infrastructure::persistence::AppwriteHistoryRepository;
use babel::infrastructure::storage::{AppwriteBucketStore, TempFileStore};
use babel::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment);

    let json_logs = settings.as_ref().map(|s| s.logging.json).unwrap_or(false);
    init_tracing(&TracingConfig::new(environment.as_str(), json_logs));

    let settings = settings.inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration, refusing to start");
    })?;
    let secrets = settings.secrets()?;

    let mut http_builder = reqwest::Client::builder();
    if let Some(secs) = settings.provider.request_timeout_secs {
        http_builder = http_builder.timeout(Duration::from_secs(secs));
    }
    let http = http_builder.build()?;

    let transcription_engine = Arc::new(OpenAiWhisperEngine::new(
        http.clone(),
        secrets.provider_api_key.to_string(),
        settings.provider.base_url.clone(),
        settings.provider.transcription_model.clone(),
    ));
    let llm_client = Arc::new(OpenAiClient::new(
        http.clone(),
        secrets.provider_api_key.to_string(),
        settings.provider.base_url.clone(),
        settings.provider.translation_model.clone(),
    ));

    let appwrite = AppwriteClient::new(
        http,
        secrets.appwrite_endpoint,
        secrets.appwrite_project_id,
        secrets.appwrite_api_key,
    );
    let blob_store = Arc::new(AppwriteBucketStore::new(appwrite.clone()));
    let history_repository = Arc::new(AppwriteHistoryRepository::new(
        appwrite,
        settings.appwrite.database_id.clone(),
        settings.appwrite.collection_id.clone(),
    ));

    let temp_dir = settings
        .pipeline
        .temp_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("babel"));
    let temp_store = Arc::new(TempFileStore::new(temp_dir)?);

    let pipeline = Arc::new(TranscriptionPipeline::new(
        transcription_engine,
        llm_client,
        blob_store,
        temp_store,
        history_repository,
        settings.pipeline.translation_prompt.clone(),
    ));

    let state = AppState::new(pipeline, settings.appwrite.bucket_id.as_str());
    let router = create_router(state, settings.max_upload_bytes());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        addr = %addr,
        transcription_model = %settings.provider.transcription_model,
        translation_model = %settings.provider.translation_model,
        "Listening"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
