// Configuration module for specnav
// Reads from environment variables with sensible defaults

use std::env;
use std::sync::OnceLock;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Pairing-convention configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory of spec files (SPECNAV_SPEC_DIR)
    pub spec_dir: String,

    /// Suffix inserted before the extension of spec files (SPECNAV_SPEC_SUFFIX)
    pub spec_suffix: String,

    /// Conventional root directory of application sources (SPECNAV_APP_DIR)
    pub app_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spec_dir: "spec".to_string(),
            spec_suffix: "_spec".to_string(),
            app_dir: "app".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(val) = env::var("SPECNAV_SPEC_DIR") {
            if is_valid_segment(&val) {
                config.spec_dir = val;
            } else {
                eprintln!(
                    "specnav: Warning: Invalid SPECNAV_SPEC_DIR value: {:?}, using default: {}",
                    val, config.spec_dir
                );
            }
        }

        if let Ok(val) = env::var("SPECNAV_SPEC_SUFFIX") {
            if is_valid_segment(&val) {
                config.spec_suffix = val;
            } else {
                eprintln!(
                    "specnav: Warning: Invalid SPECNAV_SPEC_SUFFIX value: {:?}, using default: {}",
                    val, config.spec_suffix
                );
            }
        }

        if let Ok(val) = env::var("SPECNAV_APP_DIR") {
            if is_valid_segment(&val) {
                config.app_dir = val;
            } else {
                eprintln!(
                    "specnav: Warning: Invalid SPECNAV_APP_DIR value: {:?}, using default: {}",
                    val, config.app_dir
                );
            }
        }

        config
    }

    /// Get the global configuration, loading it on first access
    pub fn get() -> &'static Config {
        CONFIG.get_or_init(Config::from_env)
    }
}

fn is_valid_segment(value: &str) -> bool {
    !value.is_empty() && !value.contains('/') && !value.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_rails_conventions() {
        let config = Config::default();
        assert_eq!(config.spec_dir, "spec");
        assert_eq!(config.spec_suffix, "_spec");
        assert_eq!(config.app_dir, "app");
    }

    #[test]
    fn segment_validation_rejects_separators() {
        assert!(is_valid_segment("spec"));
        assert!(!is_valid_segment(""));
        assert!(!is_valid_segment("spec/unit"));
    }
}
