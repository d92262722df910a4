//! Logging initialization

use serde::{Deserialize, Serialize};
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Human-readable output; the binary at info, library crates at warn
    #[default]
    Development,
    /// JSON structured output, info level
    Production,
    /// No output; tests install the capture layer instead
    Test,
}

impl Profile {
    fn default_filter(&self) -> &'static str {
        match self {
            Profile::Development => "gymadmin_core=warn,gymadmin_store=warn,gymadmin_cli=info",
            Profile::Production | Profile::Test => {
                "gymadmin_core=info,gymadmin_store=info,gymadmin_cli=info"
            }
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility with the profile's default filter
///
/// Only the first call has an effect, and it never replaces a subscriber
/// installed elsewhere (e.g. the test capture layer). `RUST_LOG` overrides
/// the filter.
pub fn init(profile: Profile) {
    init_with_filter(profile, None);
}

/// Initialize the logging facility with an explicit filter directive
///
/// Precedence: `RUST_LOG`, then `filter`, then the profile default.
pub fn init_with_filter(profile: Profile, filter: Option<&str>) {
    INIT_ONCE.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(filter.unwrap_or_else(|| profile.default_filter()))
        });

        match profile {
            Profile::Development => {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_writer(std::io::stderr)
                    .try_init();
            }
            Profile::Production => {
                let _ = tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(env_filter)
                    .with_writer(std::io::stderr)
                    .try_init();
            }
            Profile::Test => {
                let _ = tracing_subscriber::registry().try_init();
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
        init_with_filter(Profile::Test, Some("gymadmin_core=trace"));
    }

    #[test]
    fn test_profile_parses_from_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            profile: Profile,
        }
        let parsed: Wrapper = toml::from_str("profile = \"production\"").unwrap();
        assert_eq!(parsed.profile, Profile::Production);
    }

    #[test]
    fn test_no_default_filter_enables_debug() {
        for profile in [Profile::Development, Profile::Production, Profile::Test] {
            assert!(!profile.default_filter().contains("debug"), "{:?}", profile);
        }
        assert!(Profile::Development
            .default_filter()
            .contains("gymadmin_core=warn"));
    }
}
