/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
}

impl TracingConfig {
    /// `LOG_FORMAT=json` forces JSON output regardless of settings.
    pub fn new(environment: impl Into<String>, json_from_settings: bool) -> Self {
        let json_from_env = std::env::var("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        Self {
            environment: environment.into(),
            json_format: json_from_settings || json_from_env,
        }
    }
}
