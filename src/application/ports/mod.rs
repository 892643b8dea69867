mod audio_encoder;
mod detection_client;

pub use audio_encoder::{AudioEncoder, EncodeError};
pub use detection_client::{DetectionClient, DetectionError};
