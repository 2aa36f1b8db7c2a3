use crate::{Error, Result};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

/// Manages the Chrome process the suite drives.
pub struct ChromeLauncher {
    chrome_path: PathBuf,
    profile_path: PathBuf,
    headless: bool,
    debugging_port: u16,
}

impl ChromeLauncher {
    /// Create a launcher for the given binary and profile directory.
    pub fn new(chrome_path: PathBuf, profile_path: PathBuf) -> Self {
        Self {
            chrome_path,
            profile_path,
            headless: true,
            debugging_port: 9222,
        }
    }

    /// Run with a visible window instead of headless mode.
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Override the remote debugging port.
    pub fn debugging_port(mut self, port: u16) -> Self {
        self.debugging_port = port;
        self
    }

    /// Spawn the Chrome process.
    pub fn launch(&self) -> Result<Child> {
        let args = self.build_args();
        tracing::debug!("Launching {} {}", self.chrome_path.display(), args.join(" "));

        Command::new(&self.chrome_path)
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Browser(format!("Failed to launch Chrome: {}", e)))
    }

    /// Build Chrome command-line arguments.
    fn build_args(&self) -> Vec<String> {
        let mut args = vec![
            format!("--remote-debugging-port={}", self.debugging_port),
            "--no-first-run".to_string(),
            "--no-default-browser-check".to_string(),
            format!("--user-data-dir={}", self.profile_path.display()),
        ];

        if self.headless {
            args.push("--headless=new".to_string());
            args.push("--disable-gpu".to_string());
            // Hover menus need a desktop-sized viewport
            args.push("--window-size=1920,1080".to_string());
        }

        args.push("about:blank".to_string());

        args
    }

    /// The remote debugging port Chrome will listen on.
    pub fn port(&self) -> u16 {
        self.debugging_port
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn launcher() -> ChromeLauncher {
        ChromeLauncher::new(
            PathBuf::from("/usr/bin/google-chrome"),
            PathBuf::from("/tmp/profile"),
        )
    }

    #[test]
    fn test_launcher_builds_base_args() {
        let args = launcher().headless(false).build_args();

        assert!(args.contains(&"--remote-debugging-port=9222".to_string()));
        assert!(args.contains(&"--no-first-run".to_string()));
        assert!(args.contains(&"--no-default-browser-check".to_string()));
        assert!(args.iter().any(|a| a.starts_with("--user-data-dir=")));
        assert!(args.contains(&"about:blank".to_string()));
        assert!(!args.iter().any(|a| a.starts_with("--headless")));
    }

    #[test]
    fn test_launcher_headless_args() {
        let args = launcher().build_args();

        assert!(args.contains(&"--headless=new".to_string()));
        assert!(args.contains(&"--disable-gpu".to_string()));
        assert!(args.contains(&"--window-size=1920,1080".to_string()));
    }

    #[test]
    fn test_launcher_custom_port() {
        let launcher = launcher().debugging_port(9333);

        assert_eq!(launcher.port(), 9333);
        assert!(
            launcher
                .build_args()
                .contains(&"--remote-debugging-port=9333".to_string())
        );
    }
}
