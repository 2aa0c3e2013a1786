//! Checkout confirmation and success pages.

use tracing::info;

use crate::browser::Page;
use crate::config::{page, SuiteConfig, ORDER_SUCCESS_MESSAGE};
use crate::expect::{expect, Expect};
use crate::result::ComprarResult;
use crate::selectors::checkout;
use crate::url::UrlPattern;

use super::HomePage;

/// The order confirmation step of checkout
#[derive(Debug)]
pub struct CheckoutConfirmationPage<'a> {
    page: &'a Page,
    config: &'a SuiteConfig,
}

impl<'a> CheckoutConfirmationPage<'a> {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(page: &'a Page, config: &'a SuiteConfig) -> Self {
        Self { page, config }
    }

    fn expect(&self) -> Expect<'a> {
        expect(self.page).with_timeout(self.config.default_timeout)
    }

    /// Confirm the order and land on the success page
    pub async fn confirm_order(&self) -> ComprarResult<CheckoutSuccessPage<'a>> {
        self.page.click(&checkout::confirm_order_button()).await?;
        self.expect()
            .to_have_url(&page::checkout_success().url)
            .await?;
        info!("Order confirmed");
        Ok(CheckoutSuccessPage::new(self.page, self.config))
    }
}

/// The page shown once an order has been placed
#[derive(Debug)]
pub struct CheckoutSuccessPage<'a> {
    page: &'a Page,
    config: &'a SuiteConfig,
}

impl<'a> CheckoutSuccessPage<'a> {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(page: &'a Page, config: &'a SuiteConfig) -> Self {
        Self { page, config }
    }

    fn expect(&self) -> Expect<'a> {
        expect(self.page).with_timeout(self.config.default_timeout)
    }

    /// Assert the success heading shows exactly the expected text
    pub async fn validate_success_message(&self) -> ComprarResult<()> {
        self.expect()
            .to_have_text(&checkout::success_heading(), ORDER_SUCCESS_MESSAGE)
            .await?;
        info!("Validated the order success message");
        Ok(())
    }

    /// Leave checkout and return to the storefront
    pub async fn continue_shopping(&self) -> ComprarResult<HomePage<'a>> {
        self.page.click(&checkout::continue_button()).await?;
        self.expect()
            .to_have_url(&UrlPattern::Prefix(self.config.base_url.clone()))
            .await?;
        info!("Returned to the storefront");
        Ok(HomePage::new(self.page, self.config))
    }
}
