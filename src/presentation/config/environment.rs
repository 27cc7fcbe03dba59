use std::fmt;
use std::str::FromStr;

pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

/// Application runtime environment; selects the `appsettings.<Environment>` file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Local,
    Test,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "Local",
            Environment::Test => "Test",
            Environment::Prod => "Prod",
        }
    }

    /// Reads [`ENVIRONMENT_VAR`], falling back to `Local` when unset.
    pub fn from_env() -> Result<Self, String> {
        match std::env::var(ENVIRONMENT_VAR) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Self::default()),
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Prod),
            other => Err(format!(
                "Invalid environment: {}. Expected: local, test, or prod",
                other
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
