//! Page objects for the store.
//!
//! Each page object borrows the shared [`Page`](crate::browser::Page)
//! handle and the suite config, and exposes intention-revealing operations
//! over one logical screen. Operations that navigate assert the resulting
//! URL (and title where the store sets one) against the page config before
//! returning the page object for the next screen. The transition graph
//! lives in the return types, so an illegal transition does not typecheck.
//!
//! ```text
//! Home ──> Login ──> Dashboard
//!                      │
//!            ProductNavigation ──> ProductView ──> Basket ──> Confirmation ──> Success ──> Home
//! ```

mod checkout;
mod dashboard;
mod homepage;
mod login;
mod product_basket;
mod product_navigation;
mod product_view;

pub use checkout::{CheckoutConfirmationPage, CheckoutSuccessPage};
pub use dashboard::DashboardPage;
pub use homepage::HomePage;
pub use login::LoginPage;
pub use product_basket::ProductBasketPage;
pub use product_navigation::{CategoryCatalog, ProductNavigationPage, ProductView};
pub use product_view::ProductViewPage;
