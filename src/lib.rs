//! audio-context: audio-session category selection for context modes
//!
//! An application declares how it intends to use audio (ambient sound,
//! audio processing, spatial multitrack playback, voice chat) and this
//! crate derives and applies the matching platform routing category:
//! - Four context modes, parsed permissively from textual labels
//! - A pure, exhaustive mode-to-category mapping
//! - Fire-and-forget activation against an injected session capability
//!
//! The platform audio session itself is an external singleton; embedders
//! implement [`AudioSession`] over it and pass it to
//! [`ContextSelector::apply`]. Activation failures are logged, never
//! propagated.

pub mod config;
pub mod mode;
pub mod selector;
pub mod session;

pub use config::Config;
pub use mode::Mode;
pub use selector::ContextSelector;
pub use session::{AudioSession, Category, NullSession, SessionError};
