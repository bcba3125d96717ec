use anyhow::{Context, Result};
use url::Url;

/// Deployed Streamlit instance of the analyzer app.
pub const DEFAULT_ANALYZER_URL: &str =
    "https://legalizer-gen-ai-ixq3l2dwx7du62zittqlcv.streamlit.app/";

const LAUNCH_MESSAGE: &str = "Opening Legalizer AI Analyzer...";

/// Where the launch endpoint sends users. The destination is injected here
/// instead of living in the handler so tests can point it somewhere fake.
#[derive(Clone, Debug)]
pub struct LaunchConfig {
    analyzer_url: Option<Url>,
    message: String,
}

impl LaunchConfig {
    pub fn new(analyzer_url: Option<Url>) -> Self {
        LaunchConfig {
            analyzer_url,
            message: LAUNCH_MESSAGE.to_string(),
        }
    }

    /// ANALYZER_APP_URL overrides the deployed default. Setting it to an
    /// empty string disables launching, which makes the endpoint answer 503.
    pub fn from_env() -> Result<Self> {
        match std::env::var("ANALYZER_APP_URL") {
            Ok(raw) if raw.trim().is_empty() => Ok(LaunchConfig::new(None)),
            Ok(raw) => {
                let url = Url::parse(raw.trim())
                    .context("ANALYZER_APP_URL is not a valid absolute URL")?;
                Ok(LaunchConfig::new(Some(url)))
            }
            Err(_) => {
                let url = Url::parse(DEFAULT_ANALYZER_URL)
                    .context("default analyzer URL failed to parse")?;
                Ok(LaunchConfig::new(Some(url)))
            }
        }
    }

    pub fn analyzer_url(&self) -> Option<&Url> {
        self.analyzer_url.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_destination_parses() {
        let url = Url::parse(DEFAULT_ANALYZER_URL).unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn disabled_config_has_no_destination() {
        let config = LaunchConfig::new(None);
        assert!(config.analyzer_url().is_none());
        assert!(!config.message().is_empty());
    }
}
