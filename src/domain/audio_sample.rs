use std::path::PathBuf;

use bytes::Bytes;

const MP3_EXTENSION: &str = ".mp3";
const MP3_MIME_TYPES: [&str; 2] = ["audio/mpeg", "audio/mp3"];

/// The single audio container accepted by every provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AudioFormat {
    #[default]
    Mp3,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mp3",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AudioSource {
    Memory(Bytes),
    File(PathBuf),
}

/// A user-selected recording that passed the MP3 check.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSample {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub size_bytes: u64,
    pub source: AudioSource,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AudioSampleError {
    #[error("System restricted to MP3 format only: {file_name}")]
    InvalidFileType {
        file_name: String,
        mime_type: Option<String>,
    },
    #[error("selected file is empty: {0}")]
    EmptySample(String),
}

impl AudioSample {
    /// Accepts the file when either the declared MIME type or the extension says MP3.
    pub fn is_mp3(file_name: &str, mime_type: Option<&str>) -> bool {
        let mime_ok = mime_type
            .map(|m| MP3_MIME_TYPES.iter().any(|t| m.eq_ignore_ascii_case(t)))
            .unwrap_or(false);
        mime_ok || file_name.to_ascii_lowercase().ends_with(MP3_EXTENSION)
    }

    pub fn from_bytes(
        file_name: impl Into<String>,
        mime_type: Option<String>,
        data: Bytes,
    ) -> Result<Self, AudioSampleError> {
        let file_name = file_name.into();
        Self::check_type(&file_name, mime_type.as_deref())?;
        if data.is_empty() {
            return Err(AudioSampleError::EmptySample(file_name));
        }

        Ok(Self {
            file_name,
            mime_type,
            size_bytes: data.len() as u64,
            source: AudioSource::Memory(data),
        })
    }

    /// Path-backed sample; bytes are read lazily when the sample is encoded.
    pub fn from_path(
        path: impl Into<PathBuf>,
        size_bytes: u64,
    ) -> Result<Self, AudioSampleError> {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::check_type(&file_name, None)?;
        if size_bytes == 0 {
            return Err(AudioSampleError::EmptySample(file_name));
        }

        Ok(Self {
            file_name,
            mime_type: None,
            size_bytes,
            source: AudioSource::File(path),
        })
    }

    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }

    fn check_type(file_name: &str, mime_type: Option<&str>) -> Result<(), AudioSampleError> {
        if Self::is_mp3(file_name, mime_type) {
            Ok(())
        } else {
            Err(AudioSampleError::InvalidFileType {
                file_name: file_name.to_string(),
                mime_type: mime_type.map(String::from),
            })
        }
    }
}
