//! Locator abstraction for element selection.
//!
//! Locators map a semantic element description (a CSS selector, a link by
//! its visible name, ...) to the concrete query the browser runs. They are
//! strict: every interaction expects exactly one matching element.
//!
//! Role- and text-based selectors resolve to XPath so they can be scoped to
//! a container region, e.g. the category menu of the store:
//!
//! ```
//! use comprar::locator::{Locator, Role};
//!
//! let category = Locator::role(Role::Link, "Makeup").within("#categorymenu");
//! ```

use serde::{Deserialize, Serialize};

/// Default timeout for bounded waits (5 seconds)
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default polling interval for bounded waits (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// ARIA-style role of an element, used for name-based lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// An anchor element
    Link,
    /// A button element
    Button,
}

impl Role {
    /// HTML tag this role resolves to
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Link => "a",
            Self::Button => "button",
        }
    }
}

/// Selector type for locating elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// CSS selector (e.g., `#loginFrm_loginname`)
    Css(String),
    /// Element containing the given text
    Text(String),
    /// Element of a given role matched by its visible name
    Role {
        /// Role of the element
        role: Role,
        /// Visible (accessible) name, matched after whitespace normalization
        name: String,
    },
}

impl Selector {
    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Create a text selector
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a role selector
    #[must_use]
    pub fn role(role: Role, name: impl Into<String>) -> Self {
        Self::Role {
            role,
            name: name.into(),
        }
    }
}

/// The concrete query a locator resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedQuery {
    /// Plain CSS query
    Css(String),
    /// XPath query (role/text selectors, scoped selectors)
    XPath(String),
}

impl std::fmt::Display for ResolvedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Css(q) => write!(f, "css={q}"),
            Self::XPath(q) => write!(f, "xpath={q}"),
        }
    }
}

/// A locator for finding one element within the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    selector: Selector,
    /// Optional CSS scope the element must live under (e.g. `#categorymenu`)
    scope: Option<String>,
}

impl Locator {
    /// Create a locator with a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self {
            selector: Selector::Css(selector.into()),
            scope: None,
        }
    }

    /// Create a locator matching an element by contained text
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            selector: Selector::Text(text.into()),
            scope: None,
        }
    }

    /// Create a locator matching an element by role and visible name
    #[must_use]
    pub fn role(role: Role, name: impl Into<String>) -> Self {
        Self {
            selector: Selector::role(role, name),
            scope: None,
        }
    }

    /// Restrict the lookup to a container region given as a simple CSS
    /// scope (`#id`, `.class` and tag segments separated by whitespace)
    #[must_use]
    pub fn within(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Get the selector
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Get the scope, if any
    #[must_use]
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Resolve this locator into the query the browser runs.
    ///
    /// Plain CSS selectors stay CSS (with the scope prepended as a
    /// descendant combinator). Role and text selectors become XPath so the
    /// visible-name match can normalize whitespace the way the store's
    /// markup requires.
    #[must_use]
    pub fn resolve(&self) -> ResolvedQuery {
        match &self.selector {
            Selector::Css(css) => match &self.scope {
                Some(scope) => ResolvedQuery::Css(format!("{scope} {css}")),
                None => ResolvedQuery::Css(css.clone()),
            },
            Selector::Text(text) => {
                let prefix = self.scope_xpath();
                ResolvedQuery::XPath(format!(
                    "{prefix}//*[contains(normalize-space(.), {})]",
                    xpath_literal(text)
                ))
            }
            Selector::Role { role, name } => {
                let prefix = self.scope_xpath();
                ResolvedQuery::XPath(format!(
                    "{prefix}//{}[normalize-space(.)={}]",
                    role.tag(),
                    xpath_literal(name)
                ))
            }
        }
    }

    fn scope_xpath(&self) -> String {
        self.scope.as_deref().map(scope_to_xpath).unwrap_or_default()
    }

    /// Human-readable description for error messages
    #[must_use]
    pub fn describe(&self) -> String {
        self.resolve().to_string()
    }
}

/// Convert a simple CSS scope into an XPath prefix.
///
/// Supports the selector forms the store pages actually use: `#id`,
/// `.class` and bare tag segments separated by whitespace (descendant
/// combinator). `#maincontainer li` becomes `//*[@id='maincontainer']//li`.
#[must_use]
pub fn scope_to_xpath(scope: &str) -> String {
    let mut out = String::new();
    for segment in scope.split_whitespace() {
        out.push_str("//");
        if let Some(id) = segment.strip_prefix('#') {
            out.push_str(&format!("*[@id={}]", xpath_literal(id)));
        } else if let Some(class) = segment.strip_prefix('.') {
            out.push_str(&format!(
                "*[contains(concat(' ', normalize-space(@class), ' '), {})]",
                xpath_literal(&format!(" {class} "))
            ));
        } else {
            out.push_str(segment);
        }
    }
    out
}

/// Quote a string as an XPath literal.
///
/// XPath 1.0 has no escape sequences, so a value containing both quote
/// kinds is split into a `concat()` of single-quoted and double-quoted
/// pieces. Product names with apostrophes rely on this.
#[must_use]
pub fn xpath_literal(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{value}'");
    }
    if !value.contains('"') {
        return format!("\"{value}\"");
    }
    let mut parts = Vec::new();
    for (i, piece) in value.split('\'').enumerate() {
        if i > 0 {
            parts.push("\"'\"".to_string());
        }
        if !piece.is_empty() {
            parts.push(format!("'{piece}'"));
        }
    }
    format!("concat({})", parts.join(", "))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod selector_tests {
        use super::*;

        #[test]
        fn test_css_selector() {
            let locator = Locator::css("#loginFrm_loginname");
            assert_eq!(
                locator.resolve(),
                ResolvedQuery::Css("#loginFrm_loginname".to_string())
            );
        }

        #[test]
        fn test_scoped_css_selector() {
            let locator = Locator::css("li a").within("#maincontainer");
            assert_eq!(
                locator.resolve(),
                ResolvedQuery::Css("#maincontainer li a".to_string())
            );
        }

        #[test]
        fn test_role_link_resolves_to_xpath() {
            let locator = Locator::role(Role::Link, "Makeup").within("#categorymenu");
            let ResolvedQuery::XPath(query) = locator.resolve() else {
                panic!("expected xpath");
            };
            assert_eq!(
                query,
                "//*[@id='categorymenu']//a[normalize-space(.)='Makeup']"
            );
        }

        #[test]
        fn test_role_button() {
            let locator = Locator::role(Role::Button, "Confirm Order");
            let ResolvedQuery::XPath(query) = locator.resolve() else {
                panic!("expected xpath");
            };
            assert!(query.starts_with("//button["));
            assert!(query.contains("'Confirm Order'"));
        }

        #[test]
        fn test_text_selector() {
            let locator = Locator::text("Welcome back");
            let ResolvedQuery::XPath(query) = locator.resolve() else {
                panic!("expected xpath");
            };
            assert!(query.contains("contains(normalize-space(.), 'Welcome back')"));
        }

        #[test]
        fn test_describe_includes_query_kind() {
            assert!(Locator::css("#cart").describe().starts_with("css="));
            assert!(Locator::text("Cart").describe().starts_with("xpath="));
        }
    }

    mod scope_tests {
        use super::*;

        #[test]
        fn test_id_scope() {
            assert_eq!(scope_to_xpath("#categorymenu"), "//*[@id='categorymenu']");
        }

        #[test]
        fn test_descendant_scope() {
            assert_eq!(
                scope_to_xpath("#maincontainer li"),
                "//*[@id='maincontainer']//li"
            );
        }

        #[test]
        fn test_class_scope() {
            let xpath = scope_to_xpath(".menu_text");
            assert!(xpath.contains("normalize-space(@class)"));
            assert!(xpath.contains("' menu_text '"));
        }
    }

    mod xpath_literal_tests {
        use super::*;
        use proptest::prelude::*;

        #[test]
        fn test_plain_value() {
            assert_eq!(xpath_literal("Face"), "'Face'");
        }

        #[test]
        fn test_value_with_apostrophe() {
            assert_eq!(
                xpath_literal("Women's Fragrances"),
                "\"Women's Fragrances\""
            );
        }

        #[test]
        fn test_value_with_both_quote_kinds() {
            let lit = xpath_literal(r#"a'b"c"#);
            assert_eq!(lit, r#"concat('a', "'", 'b"c')"#);
        }

        #[test]
        fn test_leading_apostrophe_with_both_kinds() {
            let lit = xpath_literal(r#"'a"b"#);
            assert_eq!(lit, r#"concat("'", 'a"b')"#);
        }

        proptest! {
            #[test]
            fn literal_never_panics(value in ".{0,60}") {
                let _ = xpath_literal(&value);
            }

            // Every produced literal is either a quoted string whose quote
            // kind does not occur inside it, or a concat() of such pieces.
            #[test]
            fn quoting_is_sound(value in "[ -~]{0,40}") {
                let lit = xpath_literal(&value);
                if let Some(inner) = lit.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')) {
                    prop_assert!(!inner.contains('\''));
                } else if let Some(inner) = lit.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
                    prop_assert!(!inner.contains('"'));
                } else {
                    prop_assert!(lit.starts_with("concat("));
                }
            }
        }
    }

    mod default_tests {
        use super::*;

        #[test]
        fn test_bounded_wait_defaults() {
            assert_eq!(DEFAULT_TIMEOUT_MS, 5000);
            assert_eq!(DEFAULT_POLL_INTERVAL_MS, 50);
        }
    }
}
