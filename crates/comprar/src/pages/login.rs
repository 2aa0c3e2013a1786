//! Account login page.

use tracing::info;

use crate::browser::Page;
use crate::config::{page, Credentials, SuiteConfig};
use crate::expect::{expect, Expect};
use crate::result::ComprarResult;
use crate::selectors;

use super::DashboardPage;

/// The account login page
#[derive(Debug)]
pub struct LoginPage<'a> {
    page: &'a Page,
    config: &'a SuiteConfig,
}

impl<'a> LoginPage<'a> {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(page: &'a Page, config: &'a SuiteConfig) -> Self {
        Self { page, config }
    }

    fn expect(&self) -> Expect<'a> {
        expect(self.page).with_timeout(self.config.default_timeout)
    }

    /// Log in with the given credentials.
    ///
    /// Precondition: the page is at the login URL. Fills the credential
    /// fields, submits, and asserts the dashboard URL was reached before
    /// handing back the dashboard.
    pub async fn login(&self, credentials: &Credentials) -> ComprarResult<DashboardPage<'a>> {
        self.expect().to_have_url(&page::login().url).await?;
        self.page
            .fill(&selectors::login::username_field(), &credentials.username)
            .await?;
        self.page
            .fill(&selectors::login::password_field(), &credentials.password)
            .await?;
        self.page.click(&selectors::login::login_button()).await?;
        self.expect().to_have_url(&page::dashboard().url).await?;
        info!("Successfully navigated to the account dashboard");
        Ok(DashboardPage::new(self.page, self.config))
    }

    /// Follow the password recovery link
    pub async fn click_forgot_password_link(&self) -> ComprarResult<()> {
        self.page
            .click(&selectors::login::forgot_password_link())
            .await?;
        self.expect()
            .to_have_url(&page::forgot_password().url)
            .await?;
        info!("Navigated to the password reset page");
        Ok(())
    }

    /// Follow the login name recovery link
    pub async fn click_forgot_login_link(&self) -> ComprarResult<()> {
        self.page
            .click(&selectors::login::forgot_login_link())
            .await?;
        self.expect().to_have_url(&page::forgot_login().url).await?;
        info!("Navigated to the login name reset page");
        Ok(())
    }
}
