use voxguard::application::ports::DetectionClient;
use voxguard::domain::{EncodedPayload, Language};
use voxguard::infrastructure::detection::{DetectionClientFactory, DetectionClientFactoryError};
use voxguard::presentation::config::{
    DetectionProvider, DetectionSettings, GenerativeSettings, RestDetectionSettings,
    ScaffoldSettings,
};

use crate::helpers::MP3_HEADER;

fn settings(provider: DetectionProvider) -> DetectionSettings {
    DetectionSettings {
        provider,
        rest: RestDetectionSettings::default(),
        generative: GenerativeSettings::default(),
        scaffold: ScaffoldSettings::default(),
    }
}

#[tokio::test]
async fn given_scaffold_provider_when_creating_then_client_classifies_offline() {
    let client = DetectionClientFactory::create(&settings(DetectionProvider::Scaffold)).unwrap();

    let result = client
        .classify(&EncodedPayload::encode(MP3_HEADER), Language::Hindi)
        .await;

    assert!(result.is_success());
}

#[test]
fn given_rest_provider_without_endpoint_when_creating_then_fails() {
    let mut settings = settings(DetectionProvider::Rest);
    settings.rest.api_key = Some("key".to_string());

    let result = DetectionClientFactory::create(&settings);

    assert!(matches!(
        result,
        Err(DetectionClientFactoryError::MissingEndpoint)
    ));
}

#[test]
fn given_rest_provider_with_blank_key_when_creating_then_fails() {
    let mut settings = settings(DetectionProvider::Rest);
    settings.rest.endpoint = Some("http://localhost:8000/api/voice-detection".to_string());
    settings.rest.api_key = Some("   ".to_string());

    let result = DetectionClientFactory::create(&settings);

    assert!(matches!(
        result,
        Err(DetectionClientFactoryError::MissingApiKey("rest"))
    ));
}

#[test]
fn given_complete_rest_settings_when_creating_then_succeeds() {
    let mut settings = settings(DetectionProvider::Rest);
    settings.rest.endpoint = Some("http://localhost:8000/api/voice-detection".to_string());
    settings.rest.api_key = Some("sk_test_123456789".to_string());

    assert!(DetectionClientFactory::create(&settings).is_ok());
}

#[test]
fn given_generative_provider_without_key_when_creating_then_fails() {
    let result = DetectionClientFactory::create(&settings(DetectionProvider::Generative));

    assert!(matches!(
        result,
        Err(DetectionClientFactoryError::MissingApiKey("generative"))
    ));
}

#[test]
fn given_generative_provider_with_key_when_creating_then_succeeds() {
    let mut settings = settings(DetectionProvider::Generative);
    settings.generative.api_key = Some("gemini-key".to_string());

    assert!(DetectionClientFactory::create(&settings).is_ok());
}
