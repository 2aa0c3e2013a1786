//! Result and error types for Comprar.

use thiserror::Error;

/// Result type for Comprar operations
pub type ComprarResult<T> = Result<T, ComprarError>;

/// Errors that can occur while driving the store
#[derive(Debug, Error)]
pub enum ComprarError {
    /// Browser executable not found
    #[error("Browser not found. Install Chromium or set CHROMIUM_PATH")]
    BrowserNotFound,

    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Page error
    #[error("Page error: {message}")]
    Page {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// Element lookup failed
    #[error("Element not found: {selector}")]
    ElementNotFound {
        /// Selector that matched nothing
        selector: String,
    },

    /// Assertion did not hold within its bounded wait
    #[error("Assertion failed after {timeout_ms}ms: {message}")]
    Assertion {
        /// What was expected vs observed
        message: String,
        /// Bounded wait that elapsed
        timeout_ms: u64,
    },

    /// Category or product type absent from the catalog
    #[error("Unknown catalog entry: {entry}")]
    UnknownCatalogEntry {
        /// The category or product type that was requested
        entry: String,
    },

    /// Suite configuration error (missing env var, bad base URL, ...)
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ComprarError {
    /// Shorthand for an assertion failure
    pub(crate) fn assertion(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Assertion {
            message: message.into(),
            timeout_ms,
        }
    }
}
