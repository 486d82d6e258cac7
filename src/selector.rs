//! Context selector: maps a declared mode onto the audio session
//!
//! A `ContextSelector` is a cheap value object holding one immutable mode.
//! Applying it derives the routing category for that mode and asks the
//! session to adopt it. Activation failures are logged and swallowed: the
//! call is a non-critical convenience and callers are not expected to
//! branch on its outcome.

use tracing::error;

use crate::mode::Mode;
use crate::session::{AudioSession, SessionError};

/// Selects and activates an audio-session category for one context mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextSelector {
    mode: Mode,
}

impl ContextSelector {
    /// Canonical selector for ambient background sound
    pub const AMBIENT: ContextSelector = ContextSelector::new(Mode::Ambient);
    /// Canonical selector for audio processing (legacy)
    pub const AUDIO_PROCESSING: ContextSelector = ContextSelector::new(Mode::AudioProcessing);
    /// Canonical selector for spatial multitrack playback
    pub const SPATIAL_MULTITRACK: ContextSelector = ContextSelector::new(Mode::SpatialMultitrack);
    /// Canonical selector for voice chat
    pub const VOICE_CHAT: ContextSelector = ContextSelector::new(Mode::VoiceChat);

    /// Create a selector for the given mode
    pub const fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Create a selector from a textual label
    ///
    /// Unrecognized, empty, or missing labels select `Mode::Ambient`; see
    /// [`Mode::from_label`].
    pub fn parse(label: Option<&str>) -> Self {
        Self::new(Mode::from_label(label))
    }

    /// The mode this selector was built with
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Apply this context to the audio session
    ///
    /// Sets the derived category and activates the session. A rejection by
    /// the session is logged and otherwise ignored; routing simply does not
    /// change.
    pub fn apply(&self, session: &dyn AudioSession) {
        if let Err(e) = self.try_apply(session) {
            error!(
                mode = %self.mode,
                category = %self.mode.category(),
                error = %e,
                "failed to activate audio session"
            );
        }
    }

    /// Alias for [`apply`](Self::apply), for call sites that read better
    /// as an activation
    pub fn activate(&self, session: &dyn AudioSession) {
        self.apply(session);
    }

    fn try_apply(&self, session: &dyn AudioSession) -> Result<(), SessionError> {
        session.set_category(self.mode.category())?;
        session.set_active(true)?;
        Ok(())
    }
}
