mod result_normalizer;
mod verification_service;

pub use result_normalizer::{GENERIC_FAILURE_MESSAGE, normalize_response};
pub use verification_service::{
    UNREADABLE_RECORDING_MESSAGE, VerificationError, VerificationService, VerifyOutcome,
};
