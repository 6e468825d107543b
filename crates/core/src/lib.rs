pub mod analysis;
pub mod domain;
pub mod error;
pub mod format;
pub mod session;
pub mod storage;

pub mod config {
    use anyhow::Context;

    const DEFAULT_PORT: u16 = 3000;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub sentry_dsn: Option<String>,
        /// Raw `PORT`; only the HTTP service parses it, see [`Settings::require_port`].
        pub port: Option<String>,
        /// Start sessions from the built-in sample campaigns.
        pub seed_sample_campaigns: bool,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let seed_sample_campaigns = std::env::var("CLICKWISE_SEED_SAMPLES")
                .map(|s| parse_flag(&s))
                .unwrap_or(true);

            Ok(Self {
                sentry_dsn: std::env::var("SENTRY_DSN").ok().filter(|s| !s.is_empty()),
                port: std::env::var("PORT").ok(),
                seed_sample_campaigns,
            })
        }

        pub fn require_port(&self) -> anyhow::Result<u16> {
            parse_port(self.port.as_deref())
        }

        pub fn initial_session(&self) -> crate::session::Session {
            if self.seed_sample_campaigns {
                crate::session::Session::seeded()
            } else {
                crate::session::Session::empty()
            }
        }
    }

    fn parse_port(raw: Option<&str>) -> anyhow::Result<u16> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => s
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number (got {s:?})")),
            None => Ok(DEFAULT_PORT),
        }
    }

    fn parse_flag(s: &str) -> bool {
        !matches!(s.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off")
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn flag_values() {
            assert!(parse_flag("1"));
            assert!(parse_flag("true"));
            assert!(!parse_flag("0"));
            assert!(!parse_flag(" False "));
            assert!(!parse_flag("off"));
        }

        #[test]
        fn port_defaults_and_rejects_garbage() {
            assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
            assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
            assert_eq!(parse_port(Some(" 8080 ")).unwrap(), 8080);
            assert!(parse_port(Some("http")).is_err());
        }

        #[test]
        fn invalid_port_only_fails_when_required() {
            let settings = Settings {
                sentry_dsn: None,
                port: Some("not-a-port".to_string()),
                seed_sample_campaigns: true,
            };
            assert_eq!(settings.initial_session().campaigns.len(), 2);
            assert!(settings.require_port().is_err());
        }

        #[test]
        fn initial_session_follows_seed_flag() {
            let mut settings = Settings {
                sentry_dsn: None,
                port: None,
                seed_sample_campaigns: true,
            };
            assert_eq!(settings.initial_session().campaigns.len(), 2);
            settings.seed_sample_campaigns = false;
            assert!(settings.initial_session().campaigns.is_empty());
        }
    }
}
