//! Per-page selector data.
//!
//! Pure data: each module maps the semantic elements of one store page to
//! its locator. Page objects are the only consumers.

use crate::locator::{Locator, Role};

/// Storefront home page
pub mod homepage {
    use super::{Locator, Role};

    /// "Login or register" entry in the customer menu
    #[must_use]
    pub fn login_or_register_link() -> Locator {
        Locator::role(Role::Link, "Login or register").within("#customer_menu_top")
    }
}

/// Account login page
pub mod login {
    use super::Locator;

    /// Login name input
    #[must_use]
    pub fn username_field() -> Locator {
        Locator::css("#loginFrm_loginname")
    }

    /// Password input
    #[must_use]
    pub fn password_field() -> Locator {
        Locator::css("#loginFrm_password")
    }

    /// Login submit button
    #[must_use]
    pub fn login_button() -> Locator {
        Locator::css("button[title='Login']")
    }

    /// "Forgot your password?" link
    #[must_use]
    pub fn forgot_password_link() -> Locator {
        Locator::css("a[href*='account/forgotten/password']")
    }

    /// "Forgot your login?" link
    #[must_use]
    pub fn forgot_login_link() -> Locator {
        Locator::css("a[href*='account/forgotten/loginname']")
    }
}

/// Account dashboard
pub mod dashboard {
    use super::Locator;

    /// Welcome banner in the customer menu
    #[must_use]
    pub fn welcome_message() -> Locator {
        Locator::css("#customer_menu_top .menu_text")
    }

    /// Address book block on the account page
    #[must_use]
    pub fn address_book_contacts() -> Locator {
        Locator::css("#address_book .content")
    }
}

/// Product navigation (category listings)
pub mod product {
    use super::{Locator, Role};

    /// CSS scope of the top category menu
    pub const CATEGORY_MENU_SCOPE: &str = "#categorymenu";

    /// CSS scope the subtype links live under
    pub const SUBTYPE_SCOPE: &str = "#maincontainer li";

    /// A top category link by its visible name
    #[must_use]
    pub fn category_link(category: &str) -> Locator {
        Locator::role(Role::Link, category).within(CATEGORY_MENU_SCOPE)
    }

    /// A product link by its visible name
    #[must_use]
    pub fn product_link(name: &str) -> Locator {
        Locator::role(Role::Link, name)
    }

    /// List view toggle
    #[must_use]
    pub fn list_view_button() -> Locator {
        Locator::css("#list")
    }

    /// Grid view toggle
    #[must_use]
    pub fn grid_view_button() -> Locator {
        Locator::css("#grid")
    }

    /// Add-to-cart control on a product view page
    #[must_use]
    pub fn add_to_cart_button() -> Locator {
        Locator::css(".productpagecart .cart")
    }
}

/// Shopping cart
pub mod cart {
    use super::Locator;

    /// Product name cells of cart line items
    #[must_use]
    pub fn line_item_names() -> Locator {
        Locator::css(".cart-info td.align_left a")
    }

    /// Checkout control
    #[must_use]
    pub fn checkout_button() -> Locator {
        Locator::css("#cart_checkout1")
    }
}

/// Checkout confirmation and success pages
pub mod checkout {
    use super::Locator;

    /// Confirm order control on the confirmation step
    #[must_use]
    pub fn confirm_order_button() -> Locator {
        Locator::css("#checkout_btn")
    }

    /// Success heading shown once the order is placed
    #[must_use]
    pub fn success_heading() -> Locator {
        Locator::css(".maintext")
    }

    /// Continue control on the success page
    #[must_use]
    pub fn continue_button() -> Locator {
        Locator::css("a.btn-default[title='Continue']")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locator::ResolvedQuery;

    #[test]
    fn test_category_link_is_scoped_to_menu() {
        let locator = product::category_link("Makeup");
        let ResolvedQuery::XPath(query) = locator.resolve() else {
            panic!("expected xpath");
        };
        assert!(query.starts_with("//*[@id='categorymenu']"));
    }

    #[test]
    fn test_view_toggles_are_distinct() {
        assert_ne!(
            product::list_view_button().resolve(),
            product::grid_view_button().resolve()
        );
    }

    #[test]
    fn test_product_link_carries_full_name() {
        let locator = product::product_link("Delicate Oil-Free Powder Blush");
        assert!(locator
            .describe()
            .contains("Delicate Oil-Free Powder Blush"));
    }
}
