use std::sync::Arc;

use crate::application::services::VerificationService;
use crate::presentation::config::DetectionProvider;

#[derive(Clone)]
pub struct AppState {
    pub verification_service: Arc<VerificationService>,
    pub provider: DetectionProvider,
}

impl AppState {
    pub fn new(verification_service: Arc<VerificationService>, provider: DetectionProvider) -> Self {
        Self {
            verification_service,
            provider,
        }
    }
}
