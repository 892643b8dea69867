use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::DetectionClient;
use crate::presentation::config::{DetectionProvider, DetectionSettings};

use super::{GenerativeDetectionClient, RestDetectionClient, ScaffoldDetectionClient};

pub struct DetectionClientFactory;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DetectionClientFactoryError {
    #[error("missing API key: the {0} provider requires a credential")]
    MissingApiKey(&'static str),
    #[error("missing endpoint: the rest provider requires detection.rest.endpoint")]
    MissingEndpoint,
}

impl DetectionClientFactory {
    pub fn create(
        settings: &DetectionSettings,
    ) -> Result<Arc<dyn DetectionClient>, DetectionClientFactoryError> {
        match settings.provider {
            DetectionProvider::Rest => {
                let endpoint = settings
                    .rest
                    .endpoint
                    .as_deref()
                    .filter(|e| !e.is_empty())
                    .ok_or(DetectionClientFactoryError::MissingEndpoint)?;
                let key = non_empty(settings.rest.api_key.as_deref())
                    .ok_or(DetectionClientFactoryError::MissingApiKey("rest"))?;
                tracing::info!(endpoint = %endpoint, "Using REST voice detection backend");
                Ok(Arc::new(RestDetectionClient::new(endpoint, key)))
            }
            DetectionProvider::Generative => {
                let key = non_empty(settings.generative.api_key.as_deref())
                    .ok_or(DetectionClientFactoryError::MissingApiKey("generative"))?;
                let client = GenerativeDetectionClient::new(
                    settings.generative.base_url.clone(),
                    settings.generative.model.clone(),
                    key.to_string(),
                );
                tracing::info!(
                    model = settings.generative.model.as_deref().unwrap_or("default"),
                    "Using generative model backend"
                );
                Ok(Arc::new(client))
            }
            DetectionProvider::Scaffold => {
                tracing::warn!("Using scaffold detection provider; results are simulated");
                Ok(Arc::new(ScaffoldDetectionClient::new(Duration::from_millis(
                    settings.scaffold.response_delay_ms,
                ))))
            }
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
