use serde::{Deserialize, Serialize};

/// Configuration for a calculation session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Unique session identifier (e.g., "calc-2026-08-07-kitchen")
    pub session_id: String,

    /// BCP 47 language tag handed to the capture source
    pub language: String,

    /// Voice parameters handed to the announcer
    pub voice: VoiceSettings,
}

/// Rate, pitch, and volume for one utterance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSettings {
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            rate: 1.0,
            pitch: 1.0,
            volume: 1.0,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("calc-{}", uuid::Uuid::new_v4()),
            language: "en-US".to_string(),
            voice: VoiceSettings::default(),
        }
    }
}
