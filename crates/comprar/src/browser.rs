//! Browser control for the suite.
//!
//! With the `browser` feature enabled this drives a real Chromium via the
//! Chrome DevTools Protocol (chromiumoxide). Without it, `Page` is a
//! scripted stand-in: unit tests script routes, elements and click effects
//! and the page objects run against that script unchanged.
//!
//! All `Page` methods take `&self`; the handle is borrowed by every page
//! object in a scenario, one logical owner at a time.

use crate::locator::Locator;
use crate::result::{ComprarError, ComprarResult};

/// Browser configuration
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode
    pub headless: bool,
    /// Viewport width
    pub viewport_width: u32,
    /// Viewport height
    pub viewport_height: u32,
    /// Path to chromium binary (None = auto-detect)
    pub chromium_path: Option<String>,
    /// Sandbox mode (disable for containers)
    pub sandbox: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1280,
            viewport_height: 800,
            chromium_path: None,
            sandbox: true,
        }
    }
}

impl BrowserConfig {
    /// Set viewport dimensions
    #[must_use]
    pub const fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }

    /// Set headless mode
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Set chromium path
    #[must_use]
    pub fn with_chromium_path(mut self, path: impl Into<String>) -> Self {
        self.chromium_path = Some(path.into());
        self
    }

    /// Disable sandbox (for containers/CI)
    #[must_use]
    pub const fn with_no_sandbox(mut self) -> Self {
        self.sandbox = false;
        self
    }
}

// ============================================================================
// Real CDP implementation (when the `browser` feature is enabled)
// ============================================================================

#[cfg(feature = "browser")]
mod cdp {
    use super::{BrowserConfig, ComprarError, ComprarResult, Locator};
    use crate::locator::ResolvedQuery;
    use chromiumoxide::browser::{Browser as CdpBrowser, BrowserConfig as CdpConfig};
    use chromiumoxide::element::Element;
    use chromiumoxide::page::Page as CdpPage;
    use futures::StreamExt;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Browser instance with a live CDP connection
    #[derive(Debug)]
    pub struct Browser {
        config: BrowserConfig,
        inner: Arc<Mutex<CdpBrowser>>,
        #[allow(dead_code)]
        handle: tokio::task::JoinHandle<()>,
    }

    impl Browser {
        /// Launch a new browser instance
        pub async fn launch(config: BrowserConfig) -> ComprarResult<Self> {
            let mut builder =
                CdpConfig::builder().window_size(config.viewport_width, config.viewport_height);

            if !config.headless {
                builder = builder.with_head();
            }

            if !config.sandbox {
                builder = builder.no_sandbox();
            }

            if let Some(ref path) = config.chromium_path {
                builder = builder.chrome_executable(path);
            }

            let cdp_config = builder.build().map_err(|e| ComprarError::BrowserLaunch {
                message: e.to_string(),
            })?;

            let (browser, mut handler) = CdpBrowser::launch(cdp_config).await.map_err(|e| {
                ComprarError::BrowserLaunch {
                    message: e.to_string(),
                }
            })?;

            // Drive CDP events until the connection drops
            let handle = tokio::spawn(async move {
                while let Some(event) = handler.next().await {
                    if event.is_err() {
                        break;
                    }
                }
            });

            Ok(Self {
                config,
                inner: Arc::new(Mutex::new(browser)),
                handle,
            })
        }

        /// Create a new page
        pub async fn new_page(&self) -> ComprarResult<Page> {
            let browser = self.inner.lock().await;
            let cdp_page =
                browser
                    .new_page("about:blank")
                    .await
                    .map_err(|e| ComprarError::Page {
                        message: e.to_string(),
                    })?;

            Ok(Page {
                inner: Arc::new(Mutex::new(cdp_page)),
            })
        }

        /// Get the browser configuration
        #[must_use]
        pub const fn config(&self) -> &BrowserConfig {
            &self.config
        }

        /// Close the browser
        pub async fn close(self) -> ComprarResult<()> {
            let mut browser = self.inner.lock().await;
            browser
                .close()
                .await
                .map_err(|e| ComprarError::BrowserLaunch {
                    message: e.to_string(),
                })?;
            Ok(())
        }
    }

    /// A browser page backed by CDP
    #[derive(Debug)]
    pub struct Page {
        inner: Arc<Mutex<CdpPage>>,
    }

    impl Page {
        /// Navigate to a URL and wait for the navigation to settle
        pub async fn goto(&self, url: &str) -> ComprarResult<()> {
            let page = self.inner.lock().await;
            page.goto(url)
                .await
                .map_err(|e| ComprarError::Navigation {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            page.wait_for_navigation()
                .await
                .map_err(|e| ComprarError::Navigation {
                    url: url.to_string(),
                    message: e.to_string(),
                })?;
            Ok(())
        }

        /// Current URL of the page
        pub async fn current_url(&self) -> ComprarResult<String> {
            let page = self.inner.lock().await;
            let url = page.url().await.map_err(|e| ComprarError::Page {
                message: e.to_string(),
            })?;
            Ok(url.unwrap_or_else(|| String::from("about:blank")))
        }

        /// Current document title
        pub async fn title(&self) -> ComprarResult<String> {
            let page = self.inner.lock().await;
            let title = page.get_title().await.map_err(|e| ComprarError::Page {
                message: e.to_string(),
            })?;
            Ok(title.unwrap_or_default())
        }

        /// Click the element the locator resolves to
        pub async fn click(&self, locator: &Locator) -> ComprarResult<()> {
            let page = self.inner.lock().await;
            let element = Self::find(&page, locator).await?;
            element.click().await.map_err(|e| ComprarError::Page {
                message: e.to_string(),
            })?;
            Ok(())
        }

        /// Focus the element and type the given text into it
        pub async fn fill(&self, locator: &Locator, text: &str) -> ComprarResult<()> {
            let page = self.inner.lock().await;
            let element = Self::find(&page, locator).await?;
            element.click().await.map_err(|e| ComprarError::Page {
                message: e.to_string(),
            })?;
            element.type_str(text).await.map_err(|e| ComprarError::Page {
                message: e.to_string(),
            })?;
            Ok(())
        }

        /// Text content of the element the locator resolves to
        pub async fn text_content(&self, locator: &Locator) -> ComprarResult<String> {
            let page = self.inner.lock().await;
            let element = Self::find(&page, locator).await?;
            let text = element.inner_text().await.map_err(|e| ComprarError::Page {
                message: e.to_string(),
            })?;
            Ok(text.unwrap_or_default())
        }

        /// Number of elements the locator resolves to
        pub async fn count(&self, locator: &Locator) -> ComprarResult<usize> {
            let page = self.inner.lock().await;
            let found = match locator.resolve() {
                ResolvedQuery::Css(query) => page.find_elements(query).await,
                ResolvedQuery::XPath(query) => page.find_xpaths(query).await,
            };
            Ok(found.map_or(0, |elements| elements.len()))
        }

        async fn find(page: &CdpPage, locator: &Locator) -> ComprarResult<Element> {
            let found = match locator.resolve() {
                ResolvedQuery::Css(query) => page.find_element(query).await,
                ResolvedQuery::XPath(query) => page.find_xpath(query).await,
            };
            found.map_err(|_| ComprarError::ElementNotFound {
                selector: locator.describe(),
            })
        }
    }
}

// ============================================================================
// Scripted implementation (when the `browser` feature is NOT enabled)
// ============================================================================

#[cfg(not(feature = "browser"))]
#[allow(clippy::unused_async, clippy::significant_drop_tightening)]
mod scripted {
    use super::{BrowserConfig, ComprarError, ComprarResult, Locator};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Browser instance (scripted stand-in)
    #[derive(Debug)]
    pub struct Browser {
        config: BrowserConfig,
    }

    impl Browser {
        /// Launch a new browser instance
        pub async fn launch(config: BrowserConfig) -> ComprarResult<Self> {
            Ok(Self { config })
        }

        /// Create a new page
        pub async fn new_page(&self) -> ComprarResult<Page> {
            Ok(Page::default())
        }

        /// Get the browser configuration
        #[must_use]
        pub const fn config(&self) -> &BrowserConfig {
            &self.config
        }

        /// Close the browser
        pub async fn close(self) -> ComprarResult<()> {
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct PageState {
        url: String,
        title: String,
        /// Resolved query -> text of each matching element
        elements: HashMap<String, Vec<String>>,
        /// Resolved query -> URL clicking the element navigates to
        click_targets: HashMap<String, String>,
        /// URL -> document title
        routes: HashMap<String, String>,
        /// Resolved query -> last filled value
        filled: HashMap<String, String>,
    }

    impl PageState {
        fn navigate(&mut self, url: &str) {
            self.url = url.to_string();
            self.title = self.routes.get(url).cloned().unwrap_or_default();
        }
    }

    /// A scripted page: replays routes, elements and click effects
    /// registered by the test
    #[derive(Debug, Default)]
    pub struct Page {
        state: Mutex<PageState>,
    }

    impl Page {
        fn lock(&self) -> std::sync::MutexGuard<'_, PageState> {
            // A poisoned lock only happens after a panic in the same test
            self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
        }

        /// Script the document title served at a URL
        pub fn script_route(&self, url: &str, title: &str) {
            let mut state = self.lock();
            state.routes.insert(url.to_string(), title.to_string());
        }

        /// Script an element with the given text content
        pub fn script_element(&self, locator: &Locator, text: &str) {
            let mut state = self.lock();
            state
                .elements
                .entry(locator.resolve().to_string())
                .or_default()
                .push(text.to_string());
        }

        /// Script that clicking an element navigates to a URL
        pub fn script_click(&self, locator: &Locator, target_url: &str) {
            let key = locator.resolve().to_string();
            let mut state = self.lock();
            state.elements.entry(key.clone()).or_default();
            state.click_targets.insert(key, target_url.to_string());
        }

        /// Value last filled into an element, if any
        #[must_use]
        pub fn filled_value(&self, locator: &Locator) -> Option<String> {
            self.lock().filled.get(&locator.resolve().to_string()).cloned()
        }

        /// Navigate to a URL
        pub async fn goto(&self, url: &str) -> ComprarResult<()> {
            self.lock().navigate(url);
            Ok(())
        }

        /// Current URL of the page
        pub async fn current_url(&self) -> ComprarResult<String> {
            Ok(self.lock().url.clone())
        }

        /// Current document title
        pub async fn title(&self) -> ComprarResult<String> {
            Ok(self.lock().title.clone())
        }

        /// Click the element the locator resolves to
        pub async fn click(&self, locator: &Locator) -> ComprarResult<()> {
            let key = locator.resolve().to_string();
            let mut state = self.lock();
            if !state.elements.contains_key(&key) {
                return Err(ComprarError::ElementNotFound {
                    selector: locator.describe(),
                });
            }
            if let Some(target) = state.click_targets.get(&key).cloned() {
                state.navigate(&target);
            }
            Ok(())
        }

        /// Type the given text into the element
        pub async fn fill(&self, locator: &Locator, text: &str) -> ComprarResult<()> {
            let key = locator.resolve().to_string();
            let mut state = self.lock();
            if !state.elements.contains_key(&key) {
                return Err(ComprarError::ElementNotFound {
                    selector: locator.describe(),
                });
            }
            state.filled.insert(key, text.to_string());
            Ok(())
        }

        /// Text content of the element the locator resolves to
        pub async fn text_content(&self, locator: &Locator) -> ComprarResult<String> {
            let state = self.lock();
            state
                .elements
                .get(&locator.resolve().to_string())
                .and_then(|texts| texts.first().cloned())
                .ok_or_else(|| ComprarError::ElementNotFound {
                    selector: locator.describe(),
                })
        }

        /// Number of elements the locator resolves to
        pub async fn count(&self, locator: &Locator) -> ComprarResult<usize> {
            let state = self.lock();
            Ok(state
                .elements
                .get(&locator.resolve().to_string())
                .map_or(0, Vec::len))
        }
    }
}

// Re-export based on feature
#[cfg(feature = "browser")]
pub use cdp::{Browser, Page};

#[cfg(not(feature = "browser"))]
pub use scripted::{Browser, Page};

#[cfg(all(test, not(feature = "browser")))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::locator::Role;

    #[tokio::test]
    async fn test_launch_and_new_page() {
        let browser = Browser::launch(BrowserConfig::default()).await.unwrap();
        assert!(browser.config().headless);
        let page = browser.new_page().await.unwrap();
        assert_eq!(page.current_url().await.unwrap(), "");
        browser.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_goto_picks_up_scripted_title() {
        let page = Page::default();
        page.script_route("https://shop.test/", "A better demo store");
        page.goto("https://shop.test/").await.unwrap();
        assert_eq!(page.title().await.unwrap(), "A better demo store");
        assert_eq!(page.current_url().await.unwrap(), "https://shop.test/");
    }

    #[tokio::test]
    async fn test_click_navigates_when_scripted() {
        let page = Page::default();
        let link = Locator::role(Role::Link, "Login or register");
        page.script_route("https://shop.test/login", "Account Login");
        page.script_click(&link, "https://shop.test/login");

        page.click(&link).await.unwrap();
        assert_eq!(page.current_url().await.unwrap(), "https://shop.test/login");
        assert_eq!(page.title().await.unwrap(), "Account Login");
    }

    #[tokio::test]
    async fn test_click_unscripted_element_fails() {
        let page = Page::default();
        let missing = Locator::css("#nope");
        let err = page.click(&missing).await.unwrap_err();
        assert!(matches!(
            err,
            crate::result::ComprarError::ElementNotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_fill_records_value() {
        let page = Page::default();
        let field = Locator::css("#loginFrm_loginname");
        page.script_element(&field, "");
        page.fill(&field, "autotester").await.unwrap();
        assert_eq!(page.filled_value(&field).unwrap(), "autotester");
    }

    #[tokio::test]
    async fn test_count_reflects_scripted_elements() {
        let page = Page::default();
        let rows = Locator::css(".cart-info td.align_left");
        assert_eq!(page.count(&rows).await.unwrap(), 0);
        page.script_element(&rows, "Delicate Oil-Free Powder Blush");
        page.script_element(&rows, "Skinsheen Bronzer Stick");
        assert_eq!(page.count(&rows).await.unwrap(), 2);
    }
}
