use crate::{ChromeFinder, ChromeLauncher, Driver, Error, ProfileManager, Result, WaitConfig};
use chromiumoxide::browser::Browser;
use futures::StreamExt;
use std::path::PathBuf;
use std::process::Child;
use tokio::task::JoinHandle;

const CONNECT_ATTEMPTS: u32 = 10;
const CONNECT_RETRY_DELAY_MS: u64 = 500;

/// Settings for one browser session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Explicit Chrome binary, bypassing discovery.
    pub chrome_path: Option<PathBuf>,
    pub headless: bool,
    pub debugging_port: u16,
    /// Named persistent profile; a scratch profile when absent.
    pub profile: Option<String>,
    pub wait: WaitConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            chrome_path: None,
            headless: true,
            debugging_port: 9222,
            profile: None,
            wait: WaitConfig::default(),
        }
    }
}

/// A live Chrome process with an attached CDP connection.
///
/// Owns the process, the profile directory, and the CDP handler task; hand
/// out [`Driver`] clones to interact with the page.
pub struct Session {
    child: Child,
    browser: Browser,
    handler_task: JoinHandle<()>,
    driver: Driver,
    // Held so a temporary profile outlives the Chrome process
    _profile: ProfileManager,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

impl Session {
    /// Find Chrome, launch it, and connect over CDP.
    pub async fn start(config: &SessionConfig) -> Result<Self> {
        let chrome_binary = ChromeFinder::new(config.chrome_path.clone()).find()?;
        tracing::info!("Using Chrome at {}", chrome_binary.display());

        let profile = match &config.profile {
            Some(name) => {
                tracing::info!("Using profile '{}'", name);
                ProfileManager::named(name)?
            }
            None => ProfileManager::temporary()?,
        };

        let launcher = ChromeLauncher::new(chrome_binary, profile.path().to_path_buf())
            .headless(config.headless)
            .debugging_port(config.debugging_port);
        let child = launcher.launch()?;

        // Chrome is not ready to accept CDP connections immediately after spawn
        let debug_url = format!("http://localhost:{}", config.debugging_port);
        let (browser, mut handler) = {
            let mut retries = CONNECT_ATTEMPTS;
            loop {
                tracing::debug!("Attempting CDP connection to {}...", debug_url);
                match Browser::connect(&debug_url).await {
                    Ok(result) => {
                        tracing::debug!("CDP connection established");
                        break result;
                    }
                    Err(e) => {
                        retries -= 1;
                        if retries == 0 {
                            return Err(Error::Cdp(format!(
                                "Failed to connect to Chrome after {} attempts: {}",
                                CONNECT_ATTEMPTS, e
                            )));
                        }
                        tracing::debug!(
                            "CDP connection attempt failed, retrying... ({} left)",
                            retries
                        );
                        tokio::time::sleep(std::time::Duration::from_millis(
                            CONNECT_RETRY_DELAY_MS,
                        ))
                        .await;
                    }
                }
            }
        };

        // The handler stream must be polled for any CDP command to make progress
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    // Some CDP events are not fully parseable; keep going
                    tracing::debug!("CDP handler event error (continuing): {}", e);
                }
            }
        });

        // Wait for Chrome to create its initial page
        tokio::time::sleep(std::time::Duration::from_millis(500)).await;

        let page = if let Some(page) = browser.pages().await?.first() {
            page.clone()
        } else {
            browser.new_page("about:blank").await?
        };

        tracing::info!("CDP session established on port {}", config.debugging_port);

        Ok(Self {
            child,
            browser,
            handler_task,
            driver: Driver::new(page, config.wait),
            _profile: profile,
        })
    }

    /// A driver handle bound to the session's page.
    pub fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Close the browser and reap the Chrome process.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Err(e) = self.browser.close().await {
            tracing::debug!("Browser close failed, killing process: {}", e);
        }
        self.handler_task.abort();
        let _ = self.child.kill();
        let _ = self.child.wait();
        Ok(())
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.handler_task.abort();
        let _ = self.child.kill();
    }
}
