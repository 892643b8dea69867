mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    DetectionProvider, DetectionSettings, ENV_PREFIX, GenerativeSettings, LoggingSettings,
    RestDetectionSettings, ScaffoldSettings, ServerSettings, Settings,
};
