mod detection_client_factory;
mod generative_detection_client;
mod rest_detection_client;
mod scaffold_detection_client;

pub use detection_client_factory::{DetectionClientFactory, DetectionClientFactoryError};
pub use generative_detection_client::{
    DEFAULT_GENERATIVE_BASE_URL, DEFAULT_GENERATIVE_MODEL, GenerativeDetectionClient,
};
pub use rest_detection_client::{API_KEY_HEADER, RestDetectionClient};
pub use scaffold_detection_client::{SIMULATED_CONFIDENCE, ScaffoldDetectionClient};
