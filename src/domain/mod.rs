mod audio_sample;
mod classification;
mod confidence_score;
mod detection_result;
mod encoded_payload;
mod history;
mod language;
mod session_state;

pub use audio_sample::{AudioFormat, AudioSample, AudioSampleError, AudioSource};
pub use classification::Classification;
pub use confidence_score::ConfidenceScore;
pub use detection_result::{Detection, DetectionResult};
pub use encoded_payload::EncodedPayload;
pub use history::{History, HistoryEntry, HistoryEntryId};
pub use language::Language;
pub use session_state::{
    FileSummary, PendingVerification, SessionError, SessionSnapshot, SessionState,
};
