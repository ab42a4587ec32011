//! Engine configuration.

const DEFAULT_EARLY_EXIT: bool = true;

/// Knobs for `ShortestPathEngine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Stop relaxing once a full pass changes nothing. Results are identical
    /// either way; this only skips passes that cannot update anything.
    pub early_exit: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            early_exit: DEFAULT_EARLY_EXIT,
        }
    }
}

impl EngineConfig {
    /// Build a config from `BELLMAN_EARLY_EXIT`, falling back to defaults.
    pub fn from_env() -> Self {
        let early_exit = std::env::var("BELLMAN_EARLY_EXIT")
            .ok()
            .and_then(|s| parse_flag(&s))
            .unwrap_or(DEFAULT_EARLY_EXIT);

        Self { early_exit }
    }

    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("OFF"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::default().with_early_exit(false);
        assert!(!config.early_exit);
        assert!(EngineConfig::default().early_exit);
    }

    #[test]
    fn test_from_env() {
        std::env::set_var("BELLMAN_EARLY_EXIT", "off");
        assert!(!EngineConfig::from_env().early_exit);

        std::env::set_var("BELLMAN_EARLY_EXIT", "sometimes");
        assert_eq!(EngineConfig::from_env(), EngineConfig::default());

        std::env::remove_var("BELLMAN_EARLY_EXIT");
        assert!(EngineConfig::from_env().early_exit);
    }
}
