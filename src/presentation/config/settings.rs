use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;

use super::Environment;

/// Platform-provided variables that override file and `BABEL_*` settings.
const PLATFORM_OVERRIDES: [(&str, &str); 4] = [
    ("provider.api_key", "GROQ_API_KEY"),
    ("appwrite.endpoint", "APPWRITE_FUNCTION_API_ENDPOINT"),
    ("appwrite.project_id", "APPWRITE_FUNCTION_PROJECT_ID"),
    ("appwrite.api_key", "APPWRITE_FUNCTION_API_KEY"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    pub appwrite: AppwriteSettings,
    pub pipeline: PipelineSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub transcription_model: String,
    pub translation_model: String,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppwriteSettings {
    pub endpoint: Option<String>,
    pub project_id: Option<String>,
    pub api_key: Option<String>,
    pub database_id: String,
    pub collection_id: String,
    pub bucket_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PipelineSettings {
    pub temp_dir: Option<String>,
    pub max_upload_mb: usize,
    pub translation_prompt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json: bool,
}

/// Secrets resolved after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secrets<'a> {
    pub provider_api_key: &'a str,
    pub appwrite_endpoint: &'a str,
    pub appwrite_project_id: &'a str,
    pub appwrite_api_key: &'a str,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("missing required setting: {0}")]
    MissingSecret(&'static str),
}

impl Settings {
    /// Defaults, then `appsettings.<Environment>`, then `BABEL_*` variables,
    /// then the platform variables in [`PLATFORM_OVERRIDES`].
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let builder = Self::defaults()?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("BABEL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let builder = PLATFORM_OVERRIDES
            .iter()
            .try_fold(builder, |builder, (key, var)| {
                builder.set_override_option(*key, std::env::var(var).ok())
            })?;

        Self::from_builder(builder)
    }

    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, SettingsError> {
        let builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("provider.base_url", "https://api.groq.com/openai/v1")?
            .set_default(
                "provider.transcription_model",
                crate::infrastructure::audio::DEFAULT_TRANSCRIPTION_MODEL,
            )?
            .set_default(
                "provider.translation_model",
                crate::infrastructure::llm::DEFAULT_TRANSLATION_MODEL,
            )?
            .set_default("appwrite.database_id", "babel_db")?
            .set_default("appwrite.collection_id", "historial")?
            .set_default("appwrite.bucket_id", "audios")?
            .set_default("pipeline.max_upload_mb", 25_i64)?
            .set_default(
                "pipeline.translation_prompt",
                crate::application::services::DEFAULT_TRANSLATION_PROMPT,
            )?
            .set_default("logging.json", false)?;
        Ok(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.secrets()?;
        Ok(settings)
    }

    pub fn secrets(&self) -> Result<Secrets<'_>, SettingsError> {
        Ok(Secrets {
            provider_api_key: required(&self.provider.api_key, "provider.api_key")?,
            appwrite_endpoint: required(&self.appwrite.endpoint, "appwrite.endpoint")?,
            appwrite_project_id: required(&self.appwrite.project_id, "appwrite.project_id")?,
            appwrite_api_key: required(&self.appwrite.api_key, "appwrite.api_key")?,
        })
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.pipeline.max_upload_mb * 1024 * 1024
    }
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, SettingsError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(SettingsError::MissingSecret(name))
}
