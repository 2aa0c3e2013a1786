//! Polling assertions over a [`Page`].
//!
//! Every navigation-causing page-object operation funnels through these
//! assertions: the expected condition (URL, title, text) is re-checked at a
//! fixed interval until it holds or the bounded wait elapses. A timeout
//! fails the current step; there is no retry beyond the poll loop.

use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

use crate::browser::Page;
use crate::locator::{Locator, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_MS};
use crate::result::{ComprarError, ComprarResult};
use crate::url::UrlPattern;

/// Assertion builder for a page (Playwright's `expect()`)
#[derive(Debug)]
pub struct Expect<'a> {
    page: &'a Page,
    timeout: Duration,
    poll_interval: Duration,
}

/// Create an expectation for a page
#[must_use]
pub fn expect(page: &Page) -> Expect<'_> {
    Expect {
        page,
        timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
    }
}

impl<'a> Expect<'a> {
    /// Override the bounded wait
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the polling interval
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Assert the page URL matches the given pattern
    pub async fn to_have_url(&self, pattern: &UrlPattern) -> ComprarResult<()> {
        self.poll_until(|| async {
            let url = self.page.current_url().await?;
            if pattern.matches(&url) {
                Ok(None)
            } else {
                Ok(Some(format!("expected URL matching {pattern}, got '{url}'")))
            }
        })
        .await
    }

    /// Assert the document title equals the expected string exactly
    pub async fn to_have_title(&self, expected: &str) -> ComprarResult<()> {
        self.poll_until(|| async {
            let title = self.page.title().await?;
            if title == expected {
                Ok(None)
            } else {
                Ok(Some(format!("expected title '{expected}', got '{title}'")))
            }
        })
        .await
    }

    /// Assert the element's text equals the expected string byte-for-byte
    pub async fn to_have_text(&self, locator: &Locator, expected: &str) -> ComprarResult<()> {
        self.poll_until(|| async {
            match self.page.text_content(locator).await {
                Ok(text) if text == expected => Ok(None),
                Ok(text) => Ok(Some(format!("expected text '{expected}', got '{text}'"))),
                Err(ComprarError::ElementNotFound { selector }) => {
                    Ok(Some(format!("element not found: {selector}")))
                }
                Err(e) => Err(e),
            }
        })
        .await
    }

    /// Assert the element's text contains the expected substring
    pub async fn to_contain_text(&self, locator: &Locator, expected: &str) -> ComprarResult<()> {
        self.poll_until(|| async {
            match self.page.text_content(locator).await {
                Ok(text) if text.contains(expected) => Ok(None),
                Ok(text) => Ok(Some(format!(
                    "expected text containing '{expected}', got '{text}'"
                ))),
                Err(ComprarError::ElementNotFound { selector }) => {
                    Ok(Some(format!("element not found: {selector}")))
                }
                Err(e) => Err(e),
            }
        })
        .await
    }

    /// Assert how many elements the locator resolves to
    pub async fn to_have_count(&self, locator: &Locator, expected: usize) -> ComprarResult<()> {
        self.poll_until(|| async {
            let count = self.page.count(locator).await?;
            if count == expected {
                Ok(None)
            } else {
                Ok(Some(format!(
                    "expected {expected} element(s) for {}, got {count}",
                    locator.describe()
                )))
            }
        })
        .await
    }

    /// Re-run the check until it passes or the bounded wait elapses.
    ///
    /// The check returns `None` on success and a failure description
    /// otherwise; an element that has not appeared yet is a failure
    /// description, not a hard error.
    async fn poll_until<F, Fut>(&self, mut check: F) -> ComprarResult<()>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ComprarResult<Option<String>>>,
    {
        let deadline = Instant::now() + self.timeout;
        loop {
            match check().await? {
                None => return Ok(()),
                Some(failure) => {
                    if Instant::now() >= deadline {
                        return Err(ComprarError::assertion(
                            failure,
                            self.timeout.as_millis() as u64,
                        ));
                    }
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
        }
    }
}

#[cfg(all(test, not(feature = "browser")))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fast(page: &Page) -> Expect<'_> {
        expect(page)
            .with_timeout(Duration::from_millis(200))
            .with_poll_interval(Duration::from_millis(20))
    }

    #[tokio::test]
    async fn test_to_have_url_passes() {
        let page = Page::default();
        page.goto("https://shop.test/index.php?rt=account/login")
            .await
            .unwrap();
        fast(&page)
            .to_have_url(&UrlPattern::Contains("rt=account/login".to_string()))
            .await
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_to_have_url_times_out() {
        let page = Page::default();
        page.goto("https://shop.test/").await.unwrap();
        let err = fast(&page)
            .to_have_url(&UrlPattern::Contains("rt=account/account".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ComprarError::Assertion { timeout_ms: 200, .. }
        ));
    }

    #[tokio::test]
    async fn test_to_have_title_exact() {
        let page = Page::default();
        page.script_route("https://shop.test/face", "Face");
        page.goto("https://shop.test/face").await.unwrap();
        fast(&page).to_have_title("Face").await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_to_have_text_single_character_difference_fails() {
        let page = Page::default();
        let welcome = Locator::css(".menu_text");
        page.script_element(&welcome, "Welcome back Auto Tester");
        let expect = fast(&page);
        expect
            .to_have_text(&welcome, "Welcome back Auto Tester")
            .await
            .unwrap();
        let err = expect
            .to_have_text(&welcome, "Welcome back Auto Tester!")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("expected text"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_element_reported_as_assertion_not_hard_error() {
        let page = Page::default();
        let err = fast(&page)
            .to_have_text(&Locator::css("#ghost"), "anything")
            .await
            .unwrap_err();
        assert!(matches!(err, ComprarError::Assertion { .. }));
        assert!(err.to_string().contains("element not found"));
    }

    #[tokio::test]
    async fn test_to_have_count() {
        let page = Page::default();
        let rows = Locator::css(".cart-info td.align_left");
        page.script_element(&rows, "Delicate Oil-Free Powder Blush");
        fast(&page).to_have_count(&rows, 1).await.unwrap();
    }

    #[tokio::test]
    async fn test_to_contain_text() {
        let page = Page::default();
        let banner = Locator::css("#address_book");
        page.script_element(&banner, "Auto Tester, 42 Demo Street, Testville");
        fast(&page)
            .to_contain_text(&banner, "Demo Street")
            .await
            .unwrap();
    }
}
