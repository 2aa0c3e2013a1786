//! Storefront home page.

use tracing::info;

use crate::browser::Page;
use crate::config::{page, SuiteConfig};
use crate::expect::{expect, Expect};
use crate::result::ComprarResult;
use crate::selectors;

use super::LoginPage;

/// The storefront landing page
#[derive(Debug)]
pub struct HomePage<'a> {
    page: &'a Page,
    config: &'a SuiteConfig,
}

impl<'a> HomePage<'a> {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(page: &'a Page, config: &'a SuiteConfig) -> Self {
        Self { page, config }
    }

    fn expect(&self) -> Expect<'a> {
        expect(self.page).with_timeout(self.config.default_timeout)
    }

    /// Navigate to the storefront
    pub async fn open(&self) -> ComprarResult<()> {
        let url = self.config.url_for(page::home().path);
        self.page.goto(&url).await?;
        info!(url, "Opened the storefront");
        Ok(())
    }

    /// Open the account login page via the customer menu
    pub async fn open_login_page(&self) -> ComprarResult<LoginPage<'a>> {
        self.page
            .click(&selectors::homepage::login_or_register_link())
            .await?;
        self.expect().to_have_url(&page::login().url).await?;
        info!("Navigated to account login page");
        Ok(LoginPage::new(self.page, self.config))
    }
}
