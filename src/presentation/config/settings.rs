use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

pub const ENV_PREFIX: &str = "VOXGUARD";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub detection: DetectionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectionSettings {
    pub provider: DetectionProvider,
    #[serde(default)]
    pub rest: RestDetectionSettings,
    #[serde(default)]
    pub generative: GenerativeSettings,
    #[serde(default)]
    pub scaffold: ScaffoldSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionProvider {
    Rest,
    Generative,
    Scaffold,
}

impl DetectionProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionProvider::Rest => "rest",
            DetectionProvider::Generative => "generative",
            DetectionProvider::Scaffold => "scaffold",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestDetectionSettings {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerativeSettings {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScaffoldSettings {
    #[serde(default)]
    pub response_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layers `config/base`, `config/<environment>` and `VOXGUARD__*` variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let environment_file = format!("config/{}", environment.config_name());

        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("detection.provider", "scaffold")?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .add_source(File::with_name("config/base").required(false))
            .add_source(File::with_name(&environment_file).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
