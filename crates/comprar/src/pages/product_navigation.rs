//! Product navigation: category menu, listing views, add-to-cart and the
//! full purchase chain.

use std::collections::HashMap;
use tracing::info;

use crate::browser::Page;
use crate::config::{page, SuiteConfig};
use crate::expect::{expect, Expect};
use crate::locator::{Locator, Role};
use crate::result::{ComprarError, ComprarResult};
use crate::selectors::product;

use super::{ProductBasketPage, ProductViewPage};

/// Listing view of a category page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductView {
    /// One product per row
    List,
    /// Thumbnail grid
    Grid,
}

/// Known subtypes and subtype click scope for every top category.
///
/// Driven entirely by data so that an unknown category or subtype is a
/// typed error instead of a click into the wrong region.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    entries: HashMap<&'static str, CategoryEntry>,
}

#[derive(Debug, Clone)]
struct CategoryEntry {
    subtypes: &'static [&'static str],
    subtype_scope: &'static str,
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        let mut entries = HashMap::new();
        let mut add = |category, subtypes| {
            entries.insert(
                category,
                CategoryEntry {
                    subtypes,
                    subtype_scope: product::SUBTYPE_SCOPE,
                },
            );
        };
        add(
            "Apparel & accessories",
            &["Shoes", "T-shirts"] as &[&str],
        );
        add(
            "Makeup",
            &["Cheeks", "Eyes", "Face", "Lips", "Nails", "Value Sets"],
        );
        add(
            "Skincare",
            &["Eyes", "Face", "Gift Ideas & Sets", "Hands & Nails", "Sun"],
        );
        add("Fragrance", &["Men", "Women"]);
        add(
            "Men",
            &["Body & Shower", "Fragrance Sets", "Pre-Shave & Shaving", "Skincare"],
        );
        add("Hair Care", &["Conditioner", "Shampoo"]);
        add("Books", &["Audio CD", "Paperback"]);
        Self { entries }
    }
}

impl CategoryCatalog {
    /// Check whether a top category exists
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    /// Known subtypes of a category
    pub fn subtypes(&self, category: &str) -> ComprarResult<&'static [&'static str]> {
        self.entry(category).map(|e| e.subtypes)
    }

    /// Click scope for a category's subtype links; the subtype itself is
    /// validated against the catalog
    pub fn subtype_scope(&self, category: &str, subtype: &str) -> ComprarResult<&'static str> {
        let entry = self.entry(category)?;
        if !entry.subtypes.contains(&subtype) {
            return Err(ComprarError::UnknownCatalogEntry {
                entry: format!("{category} / {subtype}"),
            });
        }
        Ok(entry.subtype_scope)
    }

    fn entry(&self, category: &str) -> ComprarResult<&CategoryEntry> {
        self.entries
            .get(category)
            .ok_or_else(|| ComprarError::UnknownCatalogEntry {
                entry: category.to_string(),
            })
    }
}

/// A product category listing page
#[derive(Debug)]
pub struct ProductNavigationPage<'a> {
    page: &'a Page,
    config: &'a SuiteConfig,
    catalog: CategoryCatalog,
}

impl<'a> ProductNavigationPage<'a> {
    /// Wrap the shared page handle
    #[must_use]
    pub fn new(page: &'a Page, config: &'a SuiteConfig) -> Self {
        Self {
            page,
            config,
            catalog: CategoryCatalog::default(),
        }
    }

    fn expect(&self) -> Expect<'a> {
        expect(self.page).with_timeout(self.config.default_timeout)
    }

    /// The category catalog backing subtype navigation
    #[must_use]
    pub const fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Navigate to a product category, optionally drilling into one of its
    /// subtypes.
    ///
    /// Clicks the category link in the category menu and asserts the page
    /// title equals the category. With a subtype, resolves the click scope
    /// through the catalog (unknown entries are an error), clicks the
    /// subtype link and asserts the title equals the subtype. Finally
    /// asserts the URL matches the category listing pattern.
    pub async fn switch_to_product(
        &self,
        category: &str,
        subtype: Option<&str>,
    ) -> ComprarResult<()> {
        if !self.catalog.has_category(category) {
            return Err(ComprarError::UnknownCatalogEntry {
                entry: category.to_string(),
            });
        }
        self.page.click(&product::category_link(category)).await?;
        info!(category, "Selected product category");
        self.expect().to_have_title(category).await?;

        if let Some(subtype) = subtype {
            let scope = self.catalog.subtype_scope(category, subtype)?;
            self.page
                .click(&Locator::role(Role::Link, subtype).within(scope))
                .await?;
            info!(subtype, "Selected product type");
            self.expect().to_have_title(subtype).await?;
        }

        self.expect()
            .to_have_url(&page::product_navigation().url)
            .await?;
        info!("Validated the product category URL");
        Ok(())
    }

    /// Toggle between the list and grid listing views.
    ///
    /// Exactly one of the two controls is clicked, chosen by the enum.
    pub async fn toggle_product_view(&self, view: ProductView) -> ComprarResult<()> {
        let button = match view {
            ProductView::List => product::list_view_button(),
            ProductView::Grid => product::grid_view_button(),
        };
        self.page.click(&button).await?;
        info!(?view, "Toggled listing view");
        Ok(())
    }

    /// Open a product by its visible name and add it to the cart
    pub async fn add_product_to_cart(&self, name: &str) -> ComprarResult<ProductBasketPage<'a>> {
        self.page.click(&product::product_link(name)).await?;
        self.expect().to_have_url(&page::product_view().url).await?;
        let view = ProductViewPage::new(self.page, self.config);
        let basket = view.add_to_cart(name).await?;
        info!(product = name, "Added product to cart");
        Ok(basket)
    }

    /// Buy a product end to end: add to cart, check out, confirm the
    /// order, validate the success message and continue shopping
    pub async fn buy_product(&self, name: &str) -> ComprarResult<()> {
        let basket = self.add_product_to_cart(name).await?;
        let confirmation = basket.checkout().await?;
        info!(product = name, "Checked out the product");
        let success = confirmation.confirm_order().await?;
        info!(product = name, "Ordered the product");
        success.validate_success_message().await?;
        info!(product = name, "Validated the order success message");
        success.continue_shopping().await?;
        info!("Continued past the order success page");
        Ok(())
    }
}
