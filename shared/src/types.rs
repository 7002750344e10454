//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// GPS coordinates in decimal degrees
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GpsCoordinates {
    pub lat: f64,
    pub lon: f64,
}

impl GpsCoordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Supported languages for farmer-facing content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
    Telugu,
    Tamil,
    Kannada,
    Punjabi,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
            Language::Telugu => "te",
            Language::Tamil => "ta",
            Language::Kannada => "kn",
            Language::Punjabi => "pa",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" | "english" => Ok(Language::English),
            "hi" | "hindi" => Ok(Language::Hindi),
            "mr" | "marathi" => Ok(Language::Marathi),
            "te" | "telugu" => Ok(Language::Telugu),
            "ta" | "tamil" => Ok(Language::Tamil),
            "kn" | "kannada" => Ok(Language::Kannada),
            "pa" | "punjabi" => Ok(Language::Punjabi),
            other => Err(format!("Unknown language: {}", other)),
        }
    }
}
