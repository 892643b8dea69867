use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Origin label reported by a provider.
///
/// `Human` is organic speech, `AiGenerated` is synthetic (machine-generated) speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Classification {
    #[serde(rename = "HUMAN")]
    Human,
    #[serde(rename = "AI_GENERATED")]
    AiGenerated,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Human => "HUMAN",
            Classification::AiGenerated => "AI_GENERATED",
        }
    }
}

impl FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HUMAN" => Ok(Classification::Human),
            "AI_GENERATED" => Ok(Classification::AiGenerated),
            _ => Err(format!("Invalid classification: {}", s)),
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
