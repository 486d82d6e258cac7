//! Audio session capability
//!
//! The platform audio session (AVAudioSession and kin) is a process-wide
//! singleton owned by the operating system. It is abstracted here as an
//! injected trait so the selection logic never touches real hardware state
//! directly and tests can substitute fakes.

use serde::{Deserialize, Serialize};

/// Platform-level audio routing policy enforced by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Playback that mixes with other audio and respects the mute switch
    Ambient,
    /// Foreground playback
    Playback,
    /// Simultaneous playback and recording
    PlayAndRecord,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Ambient => write!(f, "ambient"),
            Category::Playback => write!(f, "playback"),
            Category::PlayAndRecord => write!(f, "playAndRecord"),
        }
    }
}

/// Errors raised by a session implementation
///
/// The session can refuse a request when another app owns audio routing or
/// the hardware is unavailable. These are never propagated past
/// `ContextSelector::apply`; they surface only as a diagnostic log line.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("category change rejected: {0}")]
    CategoryRejected(String),

    #[error("activation rejected: {0}")]
    ActivationRejected(String),
}

/// The process-wide audio session, as seen by this crate
///
/// Implementations wrap the platform singleton. Thread safety is whatever
/// the platform session guarantees; this crate adds no locking of its own.
pub trait AudioSession {
    /// Request the session to switch to the given routing category
    fn set_category(&self, category: Category) -> Result<(), SessionError>;

    /// Request the session to become active (or inactive)
    fn set_active(&self, active: bool) -> Result<(), SessionError>;
}

/// A session that accepts every request and does nothing
///
/// Used by the diagnostic binary for dry runs and by embedders on platforms
/// without a native audio session.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSession;

impl AudioSession for NullSession {
    fn set_category(&self, _category: Category) -> Result<(), SessionError> {
        Ok(())
    }

    fn set_active(&self, _active: bool) -> Result<(), SessionError> {
        Ok(())
    }
}
