//! Configuration loading and management

use crate::selector::ContextSelector;

/// Environment variable holding the context mode label
pub const CONTEXT_ENV_VAR: &str = "AUDIO_CONTEXT";

/// Crate configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Selector for the configured context mode
    pub context: ContextSelector,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Reads `AUDIO_CONTEXT` and parses it permissively: an unset, empty,
    /// or unrecognized value selects the ambient context. Loading never
    /// fails.
    pub fn load() -> Self {
        let label = std::env::var(CONTEXT_ENV_VAR).ok();
        Self::from_label(label.as_deref())
    }

    fn from_label(label: Option<&str>) -> Self {
        Self {
            context: ContextSelector::parse(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::Mode;

    #[test]
    fn test_config_from_label() {
        let config = Config::from_label(Some("spatialMultitrack"));
        assert_eq!(config.context.mode(), Mode::SpatialMultitrack);

        let config = Config::from_label(Some("not-a-mode"));
        assert_eq!(config.context.mode(), Mode::Ambient);

        let config = Config::from_label(None);
        assert_eq!(config.context.mode(), Mode::Ambient);
    }

    #[test]
    fn test_config_load_from_env() {
        std::env::set_var(CONTEXT_ENV_VAR, "voiceChat");
        let config = Config::load();
        assert_eq!(config.context.mode(), Mode::VoiceChat);

        std::env::remove_var(CONTEXT_ENV_VAR);
        let config = Config::load();
        assert_eq!(config.context.mode(), Mode::Ambient);
    }
}
