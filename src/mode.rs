//! Context modes describing how the application intends to use audio
//!
//! A mode is a declaration of intent ("playing ambient sound" vs "in a
//! voice call"); the platform routing category is derived from it.

use serde::{Deserialize, Serialize};

use crate::session::Category;

/// The four audio context modes an application can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Background ambience, mixes with other audio
    Ambient,
    /// Offline audio processing (legacy alias, routes like SpatialMultitrack)
    AudioProcessing,
    /// Multitrack spatial playback
    SpatialMultitrack,
    /// Two-way voice chat, needs the microphone
    VoiceChat,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Ambient
    }
}

impl Mode {
    /// Parse a textual label into a mode
    ///
    /// Recognizes the exact labels `"audioProcessing"`, `"spatialMultitrack"`
    /// and `"voiceChat"`. Anything else, including a missing or empty label,
    /// falls back to `Ambient`. Total by design: callers pass through
    /// whatever the embedding application configured and always get a usable
    /// mode back.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("audioProcessing") => Mode::AudioProcessing,
            Some("spatialMultitrack") => Mode::SpatialMultitrack,
            Some("voiceChat") => Mode::VoiceChat,
            _ => Mode::Ambient,
        }
    }

    /// Derive the platform routing category for this mode
    ///
    /// Exhaustive on purpose: a new mode variant must pick its category
    /// here before the crate compiles again.
    pub fn category(self) -> Category {
        match self {
            Mode::Ambient => Category::Ambient,
            Mode::AudioProcessing => Category::Playback,
            Mode::SpatialMultitrack => Category::Playback,
            Mode::VoiceChat => Category::PlayAndRecord,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Ambient => write!(f, "ambient"),
            Mode::AudioProcessing => write!(f, "audioProcessing"),
            Mode::SpatialMultitrack => write!(f, "spatialMultitrack"),
            Mode::VoiceChat => write!(f, "voiceChat"),
        }
    }
}
