//! Single product view.

use tracing::info;

use crate::browser::Page;
use crate::config::{page, SuiteConfig};
use crate::expect::{expect, Expect};
use crate::result::ComprarResult;
use crate::selectors::product;

use super::ProductBasketPage;

/// The page for one product
#[derive(Debug)]
pub struct ProductViewPage<'a> {
    page: &'a Page,
    config: &'a SuiteConfig,
}

impl<'a> ProductViewPage<'a> {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(page: &'a Page, config: &'a SuiteConfig) -> Self {
        Self { page, config }
    }

    fn expect(&self) -> Expect<'a> {
        expect(self.page).with_timeout(self.config.default_timeout)
    }

    /// Add the displayed product to the cart and land in the basket
    pub async fn add_to_cart(&self, name: &str) -> ComprarResult<ProductBasketPage<'a>> {
        self.page.click(&product::add_to_cart_button()).await?;
        self.expect().to_have_url(&page::cart().url).await?;
        info!(product = name, "Placed product into the basket");
        Ok(ProductBasketPage::new(self.page, self.config))
    }
}
