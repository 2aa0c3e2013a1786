//! Comprar: Page Object Model end-to-end suite for the Automation Test
//! Store demo shop.
//!
//! Test scenarios drive page objects; page objects drive the browser
//! through locators, bounded-wait assertions and structured log lines.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                     COMPRAR Architecture                         │
//! ├──────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌──────────────┐    ┌────────────┐           │
//! │   │ Scenario   │    │ Page Objects │    │ Headless   │           │
//! │   │ (steps,    │───►│ (locators +  │───►│ Browser    │           │
//! │   │  tags)     │    │  expect())   │    │ (CDP)      │           │
//! │   └────────────┘    └──────────────┘    └────────────┘           │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! With the `browser` cargo feature the suite controls a real Chromium via
//! the Chrome DevTools Protocol; without it, the same page objects run
//! against a scripted page so flows stay unit-testable offline.

#![warn(missing_docs)]

/// Browser control (CDP or scripted stand-in)
pub mod browser;
/// Suite configuration and per-page oracle data
pub mod config;
/// Polling assertions over a page
pub mod expect;
/// Locator abstraction for element selection
pub mod locator;
/// Page objects for the store
pub mod pages;
/// Result and error types
pub mod result;
/// Scenario and step bookkeeping
pub mod scenario;
/// Per-page selector data
pub mod selectors;
/// URL oracle patterns
pub mod url;

/// Initialize tracing for a test run.
///
/// Reads the filter from `RUST_LOG` (default `info`). Safe to call from
/// every test; only the first call installs the subscriber.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Commonly used types for writing scenarios
pub mod prelude {
    pub use crate::browser::{Browser, BrowserConfig, Page};
    pub use crate::config::{page, Credentials, SuiteConfig};
    pub use crate::expect::expect;
    pub use crate::locator::{Locator, Role, Selector};
    pub use crate::pages::{
        CheckoutConfirmationPage, CheckoutSuccessPage, DashboardPage, HomePage, LoginPage,
        ProductBasketPage, ProductNavigationPage, ProductView, ProductViewPage,
    };
    pub use crate::result::{ComprarError, ComprarResult};
    pub use crate::scenario::{step, Scenario, ScenarioReport, StepResult};
    pub use crate::url::UrlPattern;
}
