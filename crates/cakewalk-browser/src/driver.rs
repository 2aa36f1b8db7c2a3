use crate::{Error, Result, WaitConfig};
use chromiumoxide::cdp::browser_protocol::input::{
    DispatchMouseEventParams, DispatchMouseEventType,
};
use chromiumoxide::{Element, Page};
use std::time::Instant;
use url::Url;

/// In-page probe for element visibility. CDP has no displayed-ness query, so
/// ask the renderer directly.
const VISIBILITY_PROBE: &str = "function() { \
    const rect = this.getBoundingClientRect(); \
    const style = window.getComputedStyle(this); \
    return rect.width > 0 && rect.height > 0 \
        && style.display !== 'none' && style.visibility !== 'hidden'; \
}";

/// Element driver bound to one browser page.
///
/// Locators poll until the configured deadline, then fail with
/// [`Error::ElementNotFound`]; they never return an empty success.
#[derive(Clone)]
pub struct Driver {
    page: Page,
    wait: WaitConfig,
}

impl Driver {
    pub(crate) fn new(page: Page, wait: WaitConfig) -> Self {
        Self { page, wait }
    }

    /// The locator polling policy in effect.
    pub fn wait(&self) -> &WaitConfig {
        &self.wait
    }

    /// Navigate to `url` and wait for the navigation to settle.
    ///
    /// A bare hostname is promoted to `https://`.
    pub async fn visit(&self, url: &str) -> Result<()> {
        let url = normalize_url(url)?;
        tracing::info!("Visiting {}", url);

        self.page.goto(url.as_str()).await?;
        self.page.wait_for_navigation().await?;

        Ok(())
    }

    /// First element matching the XPath expression.
    pub async fn getx(&self, xpath: &str) -> Result<Elem> {
        self.getx_within(xpath, &self.wait).await
    }

    /// First element matching the XPath expression, with a caller-chosen
    /// deadline.
    pub async fn getx_within(&self, xpath: &str, wait: &WaitConfig) -> Result<Elem> {
        let deadline = Instant::now() + wait.timeout;

        loop {
            match self.page.find_xpath(xpath).await {
                Ok(element) => return Ok(Elem::new(element, self.page.clone())),
                Err(e) => {
                    if Instant::now() >= deadline {
                        tracing::debug!("XPath `{}` never matched: {}", xpath, e);
                        return Err(not_found(xpath, wait));
                    }
                    tokio::time::sleep(wait.poll_interval).await;
                }
            }
        }
    }

    /// All elements matching the CSS selector.
    pub async fn find(&self, css: &str) -> Result<Vec<Elem>> {
        let deadline = Instant::now() + self.wait.timeout;

        loop {
            match self.page.find_elements(css).await {
                Ok(elements) if !elements.is_empty() => {
                    return Ok(self.wrap_all(elements));
                }
                Ok(_) | Err(_) => {
                    if Instant::now() >= deadline {
                        return Err(not_found(css, &self.wait));
                    }
                    tokio::time::sleep(self.wait.poll_interval).await;
                }
            }
        }
    }

    /// All elements matching the XPath expression.
    pub async fn findx(&self, xpath: &str) -> Result<Vec<Elem>> {
        let deadline = Instant::now() + self.wait.timeout;

        loop {
            match self.page.find_xpaths(xpath).await {
                Ok(elements) if !elements.is_empty() => {
                    return Ok(self.wrap_all(elements));
                }
                Ok(_) | Err(_) => {
                    if Instant::now() >= deadline {
                        return Err(not_found(xpath, &self.wait));
                    }
                    tokio::time::sleep(self.wait.poll_interval).await;
                }
            }
        }
    }

    fn wrap_all(&self, elements: Vec<Element>) -> Vec<Elem> {
        elements
            .into_iter()
            .map(|element| Elem::new(element, self.page.clone()))
            .collect()
    }
}

fn not_found(selector: &str, wait: &WaitConfig) -> Error {
    Error::ElementNotFound {
        selector: selector.to_string(),
        timeout_ms: wait.timeout.as_millis() as u64,
    }
}

fn normalize_url(raw: &str) -> Result<Url> {
    let with_scheme = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };

    Url::parse(&with_scheme).map_err(|e| Error::InvalidUrl {
        url: with_scheme.clone(),
        reason: e.to_string(),
    })
}

/// A located page element.
pub struct Elem {
    inner: Element,
    page: Page,
}

impl Elem {
    fn new(inner: Element, page: Page) -> Self {
        Self { inner, page }
    }

    /// Click the element.
    pub async fn click(&self) -> Result<()> {
        self.inner.click().await?;
        Ok(())
    }

    /// Move the mouse to the element's clickable point.
    ///
    /// This is a trusted CDP input event; the site's hover menus do not open
    /// for synthetic JS mouseover events.
    pub async fn hover(&self) -> Result<()> {
        self.inner.scroll_into_view().await?;
        let point = self.inner.clickable_point().await?;

        let event = DispatchMouseEventParams::builder()
            .r#type(DispatchMouseEventType::MouseMoved)
            .x(point.x)
            .y(point.y)
            .build()
            .map_err(Error::Cdp)?;
        self.page.execute(event).await?;
        Ok(())
    }

    /// The element's rendered text, empty when the node has none.
    pub async fn text(&self) -> Result<String> {
        Ok(self.inner.inner_text().await?.unwrap_or_default())
    }

    /// Whether the element is actually rendered and visible.
    pub async fn is_displayed(&self) -> Result<bool> {
        let returns = self.inner.call_js_fn(VISIBILITY_PROBE, false).await?;
        Ok(returns
            .result
            .value
            .and_then(|value| value.as_bool())
            .unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_adds_https_scheme() {
        let url = normalize_url("www.cakedefi.com").unwrap();
        assert_eq!(url.as_str(), "https://www.cakedefi.com/");
    }

    #[test]
    fn test_normalize_url_keeps_explicit_scheme() {
        let url = normalize_url("http://localhost:8080/landing").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.path(), "/landing");
    }

    #[test]
    fn test_normalize_url_rejects_garbage() {
        let result = normalize_url("https://");
        assert!(matches!(result, Err(Error::InvalidUrl { .. })));
    }

    // Locator polling and element interaction need a live Chrome and are
    // covered by the ignored tests in cakewalk-suite.
}
