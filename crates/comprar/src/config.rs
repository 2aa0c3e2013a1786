//! Suite configuration and per-page oracle data.
//!
//! Page configs are pure data: the route a logical page lives at and the
//! literal text constants asserted against it. Credentials come from the
//! environment once, at the entry point, and are passed into the login
//! flow explicitly; page objects never read the environment themselves.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::browser::BrowserConfig;
use crate::locator::DEFAULT_TIMEOUT_MS;
use crate::result::{ComprarError, ComprarResult};
use crate::url::UrlPattern;

/// Default store under test
pub const DEFAULT_BASE_URL: &str = "https://automationteststore.com";

/// Exact welcome banner text for the default test account
pub const WELCOME_MESSAGE: &str = "Welcome back Auto Tester";

/// Exact heading shown once an order has been placed
pub const ORDER_SUCCESS_MESSAGE: &str = "Your Order Has Been Processed!";

/// Login credentials for the store account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Account login name
    pub username: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// Create credentials from explicit values
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read credentials from the `USERNAME` and `PASSWORD` environment
    /// variables
    pub fn from_env() -> ComprarResult<Self> {
        let username = require_env("USERNAME")?;
        let password = require_env("PASSWORD")?;
        Ok(Self { username, password })
    }
}

fn require_env(name: &str) -> ComprarResult<String> {
    std::env::var(name).map_err(|_| ComprarError::Config {
        message: format!("environment variable {name} is not set"),
    })
}

/// Suite-wide configuration, passed into every page object
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Base URL of the store under test
    pub base_url: String,
    /// Exact welcome banner text expected on the dashboard
    pub welcome_message: String,
    /// Bounded wait applied to assertions
    pub default_timeout: Duration,
    /// Browser launch configuration
    pub browser: BrowserConfig,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            welcome_message: WELCOME_MESSAGE.to_string(),
            default_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            browser: BrowserConfig::default(),
        }
    }
}

impl SuiteConfig {
    /// Create a config for a store at the given base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Read the config from the environment (`BASE_URL` overrides the
    /// default store)
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var("BASE_URL") {
            Ok(base_url) if !base_url.is_empty() => Self::new(base_url),
            _ => Self::default(),
        }
    }

    /// Override the expected welcome banner text
    #[must_use]
    pub fn with_welcome_message(mut self, message: impl Into<String>) -> Self {
        self.welcome_message = message.into();
        self
    }

    /// Override the bounded assertion wait
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Override the browser configuration
    #[must_use]
    pub fn with_browser(mut self, browser: BrowserConfig) -> Self {
        self.browser = browser;
        self
    }

    /// Absolute URL for a store path
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.is_empty() {
            format!("{base}/")
        } else {
            format!("{base}/{path}")
        }
    }
}

/// Expected location of one logical page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Store path used for direct navigation
    pub path: &'static str,
    /// Pattern the URL must match after navigating here
    pub url: UrlPattern,
}

/// Per-page config lookup, mirroring the store's route table
pub mod page {
    use super::{PageConfig, UrlPattern};

    /// Storefront home page
    #[must_use]
    pub fn home() -> PageConfig {
        PageConfig {
            path: "",
            url: UrlPattern::Any,
        }
    }

    /// Account login page
    #[must_use]
    pub fn login() -> PageConfig {
        PageConfig {
            path: "index.php?rt=account/login",
            url: UrlPattern::Contains("rt=account/login".to_string()),
        }
    }

    /// Account dashboard
    #[must_use]
    pub fn dashboard() -> PageConfig {
        PageConfig {
            path: "index.php?rt=account/account",
            url: UrlPattern::Contains("rt=account/account".to_string()),
        }
    }

    /// Forgotten password recovery page
    #[must_use]
    pub fn forgot_password() -> PageConfig {
        PageConfig {
            path: "index.php?rt=account/forgotten/password",
            url: UrlPattern::Contains("rt=account/forgotten/password".to_string()),
        }
    }

    /// Forgotten login name recovery page
    #[must_use]
    pub fn forgot_login() -> PageConfig {
        PageConfig {
            path: "index.php?rt=account/forgotten/loginname",
            url: UrlPattern::Contains("rt=account/forgotten/loginname".to_string()),
        }
    }

    /// Any product category listing
    #[must_use]
    pub fn product_navigation() -> PageConfig {
        PageConfig {
            path: "index.php?rt=product/category",
            url: UrlPattern::Glob("*rt=product/category*".to_string()),
        }
    }

    /// Single product view
    #[must_use]
    pub fn product_view() -> PageConfig {
        PageConfig {
            path: "index.php?rt=product/product",
            url: UrlPattern::Contains("rt=product/product".to_string()),
        }
    }

    /// Shopping cart
    #[must_use]
    pub fn cart() -> PageConfig {
        PageConfig {
            path: "index.php?rt=checkout/cart",
            url: UrlPattern::Contains("rt=checkout/cart".to_string()),
        }
    }

    /// Order confirmation step
    #[must_use]
    pub fn checkout_confirmation() -> PageConfig {
        PageConfig {
            path: "index.php?rt=checkout/confirm",
            url: UrlPattern::Contains("rt=checkout/confirm".to_string()),
        }
    }

    /// Order success page
    #[must_use]
    pub fn checkout_success() -> PageConfig {
        PageConfig {
            path: "index.php?rt=checkout/success",
            url: UrlPattern::Contains("rt=checkout/success".to_string()),
        }
    }
}
