use cakewalk_browser::{SessionConfig, WaitConfig};
use std::path::PathBuf;

/// The public site the suite runs against by default.
pub const DEFAULT_BASE_URL: &str = "https://www.cakedefi.com/";

/// Suite-level settings, projected into a fresh [`SessionConfig`] per check.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub base_url: String,
    pub chrome_path: Option<PathBuf>,
    pub headless: bool,
    pub profile: Option<String>,
    pub wait: WaitConfig,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chrome_path: None,
            headless: true,
            profile: None,
            wait: WaitConfig::default(),
        }
    }
}

impl SuiteConfig {
    /// Browser-level settings for one session.
    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            chrome_path: self.chrome_path.clone(),
            headless: self.headless,
            profile: self.profile.clone(),
            wait: self.wait,
            ..SessionConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_live_site() {
        let config = SuiteConfig::default();

        assert_eq!(config.base_url, "https://www.cakedefi.com/");
        assert!(config.headless);
    }

    #[test]
    fn test_session_projection_carries_browser_settings() {
        let config = SuiteConfig {
            chrome_path: Some(PathBuf::from("/opt/chrome")),
            headless: false,
            profile: Some("nightly".to_string()),
            ..SuiteConfig::default()
        };

        let session = config.session();
        assert_eq!(session.chrome_path, Some(PathBuf::from("/opt/chrome")));
        assert!(!session.headless);
        assert_eq!(session.profile.as_deref(), Some("nightly"));
        assert_eq!(session.debugging_port, 9222);
    }
}
