//! Account dashboard.

use tracing::info;

use crate::browser::Page;
use crate::config::SuiteConfig;
use crate::expect::{expect, Expect};
use crate::result::ComprarResult;
use crate::selectors;

/// The account dashboard reached after a successful login
#[derive(Debug)]
pub struct DashboardPage<'a> {
    page: &'a Page,
    config: &'a SuiteConfig,
}

impl<'a> DashboardPage<'a> {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(page: &'a Page, config: &'a SuiteConfig) -> Self {
        Self { page, config }
    }

    fn expect(&self) -> Expect<'a> {
        expect(self.page).with_timeout(self.config.default_timeout)
    }

    /// Assert the welcome banner shows exactly the configured text
    pub async fn verify_welcome_message(&self) -> ComprarResult<()> {
        self.expect()
            .to_have_text(
                &selectors::dashboard::welcome_message(),
                &self.config.welcome_message,
            )
            .await?;
        info!("Verified the welcome message");
        Ok(())
    }

    /// Text of the address book block. Pure read, no assertion.
    pub async fn address_book_contacts(&self) -> ComprarResult<String> {
        self.page
            .text_content(&selectors::dashboard::address_book_contacts())
            .await
    }
}

#[cfg(all(test, not(feature = "browser")))]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config() -> SuiteConfig {
        SuiteConfig::new("https://shop.test").with_timeout(Duration::from_millis(100))
    }

    #[tokio::test]
    async fn test_welcome_message_matches() {
        let page = Page::default();
        let config = config();
        page.script_element(
            &selectors::dashboard::welcome_message(),
            "Welcome back Auto Tester",
        );

        let dashboard = DashboardPage::new(&page, &config);
        dashboard.verify_welcome_message().await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_welcome_message_is_exact() {
        let page = Page::default();
        let config = config();
        // Trailing whitespace must fail the byte-for-byte comparison
        page.script_element(
            &selectors::dashboard::welcome_message(),
            "Welcome back Auto Tester ",
        );

        let dashboard = DashboardPage::new(&page, &config);
        assert!(dashboard.verify_welcome_message().await.is_err());
    }

    #[tokio::test]
    async fn test_address_book_read_is_idempotent() {
        let page = Page::default();
        let config = config();
        page.script_element(
            &selectors::dashboard::address_book_contacts(),
            "Auto Tester, 42 Demo Street, Testville",
        );

        let dashboard = DashboardPage::new(&page, &config);
        let first = dashboard.address_book_contacts().await.unwrap();
        let second = dashboard.address_book_contacts().await.unwrap();
        assert_eq!(first, second);
    }
}
