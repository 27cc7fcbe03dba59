mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AppwriteSettings, LoggingSettings, PipelineSettings, ProviderSettings, Secrets,
    ServerSettings, Settings, SettingsError,
};
