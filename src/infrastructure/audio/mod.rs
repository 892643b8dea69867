mod base64_audio_encoder;

pub use base64_audio_encoder::Base64AudioEncoder;
