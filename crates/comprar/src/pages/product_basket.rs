//! Shopping cart.

use tracing::info;

use crate::browser::Page;
use crate::config::{page, SuiteConfig};
use crate::expect::{expect, Expect};
use crate::locator::{Locator, Role};
use crate::result::ComprarResult;
use crate::selectors::cart;

use super::CheckoutConfirmationPage;

/// The shopping cart page
#[derive(Debug)]
pub struct ProductBasketPage<'a> {
    page: &'a Page,
    config: &'a SuiteConfig,
}

impl<'a> ProductBasketPage<'a> {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(page: &'a Page, config: &'a SuiteConfig) -> Self {
        Self { page, config }
    }

    fn expect(&self) -> Expect<'a> {
        expect(self.page).with_timeout(self.config.default_timeout)
    }

    /// Number of line items currently in the cart
    pub async fn line_item_count(&self) -> ComprarResult<usize> {
        self.page.count(&cart::line_item_names()).await
    }

    /// Assert the cart holds exactly one line item with this product name
    pub async fn expect_line_item(&self, name: &str) -> ComprarResult<()> {
        self.expect()
            .to_have_count(&Self::item_locator(name), 1)
            .await
    }

    /// Proceed to the order confirmation step
    pub async fn checkout(&self) -> ComprarResult<CheckoutConfirmationPage<'a>> {
        self.page.click(&cart::checkout_button()).await?;
        self.expect()
            .to_have_url(&page::checkout_confirmation().url)
            .await?;
        info!("Proceeded to order confirmation");
        Ok(CheckoutConfirmationPage::new(self.page, self.config))
    }

    fn item_locator(name: &str) -> Locator {
        Locator::role(Role::Link, name).within(".cart-info")
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
    async fn test_line_item_count() {
        let page = Page::default();
        let config = config();
        page.script_element(&cart::line_item_names(), "Delicate Oil-Free Powder Blush");

        let basket = ProductBasketPage::new(&page, &config);
        assert_eq!(basket.line_item_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_expect_line_item_by_name() {
        let page = Page::default();
        let config = config();
        page.script_element(
            &ProductBasketPage::item_locator("Delicate Oil-Free Powder Blush"),
            "Delicate Oil-Free Powder Blush",
        );

        let basket = ProductBasketPage::new(&page, &config);
        basket
            .expect_line_item("Delicate Oil-Free Powder Blush")
            .await
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_expect_line_item_fails_when_absent() {
        let page = Page::default();
        let config = config();

        let basket = ProductBasketPage::new(&page, &config);
        assert!(basket.expect_line_item("Skinsheen Bronzer Stick").await.is_err());
    }

    #[tokio::test]
    async fn test_checkout_reaches_confirmation() {
        let page = Page::default();
        let config = config();
        page.script_click(
            &cart::checkout_button(),
            "https://shop.test/index.php?rt=checkout/confirm",
        );

        let basket = ProductBasketPage::new(&page, &config);
        basket.checkout().await.unwrap();
        assert!(page
            .current_url()
            .await
            .unwrap()
            .contains("rt=checkout/confirm"));
    }
}
