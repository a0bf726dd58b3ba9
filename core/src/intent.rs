//! Link activation classification
//!
//! Decides what a click on an anchor-like control means before any signal
//! is raised. Only a real route transition shows the bar; new-tab opens,
//! clicks on the current path, and in-page fragment jumps never do.

use std::fmt;

/// Where a link points
///
/// Either a raw href-style path or pre-split parts. Parts without a
/// pathname resolve to the empty path rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Raw path, e.g. `/dashboard` or `#section`
    Path(String),
    /// Structured parts, assembled into an href on demand
    Parts(DestinationParts),
}

/// Pre-split destination, for callers that build links programmatically
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationParts {
    pub pathname: Option<String>,
    /// Query string without the leading `?`
    pub query: Option<String>,
    /// Fragment without the leading `#`
    pub fragment: Option<String>,
}

impl Destination {
    /// Path component used for classification
    ///
    /// Structured parts that carry no pathname degrade to `""`.
    pub fn path(&self) -> &str {
        match self {
            Destination::Path(p) => p,
            Destination::Parts(parts) => parts.pathname.as_deref().unwrap_or(""),
        }
    }

    /// Full href for the rendered anchor
    pub fn href(&self) -> String {
        match self {
            Destination::Path(p) => p.clone(),
            Destination::Parts(parts) => {
                let mut href = parts.pathname.clone().unwrap_or_default();
                if let Some(query) = &parts.query {
                    href.push('?');
                    href.push_str(query);
                }
                if let Some(fragment) = &parts.fragment {
                    href.push('#');
                    href.push_str(fragment);
                }
                href
            }
        }
    }
}

impl From<&str> for Destination {
    fn from(path: &str) -> Self {
        Destination::Path(path.to_string())
    }
}

impl From<String> for Destination {
    fn from(path: String) -> Self {
        Destination::Path(path)
    }
}

impl From<DestinationParts> for Destination {
    fn from(parts: DestinationParts) -> Self {
        Destination::Parts(parts)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// What a link activation means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Opens in a new tab; the current document stays put
    NewTab,
    /// Destination path equals the current one
    SamePage,
    /// In-page fragment jump
    Fragment,
    /// A real route transition
    Navigate,
}

impl NavigationIntent {
    /// Classify an activation
    ///
    /// Checked in order: a `_blank` target wins over everything (even a
    /// same-path destination opens a fresh tab), then the current path,
    /// then fragment destinations. Whatever remains is a route transition.
    pub fn classify(destination: &Destination, target: Option<&str>, current_path: &str) -> Self {
        let path = destination.path();

        if target == Some("_blank") {
            return NavigationIntent::NewTab;
        }
        if path == current_path {
            return NavigationIntent::SamePage;
        }
        if path.starts_with('#') {
            return NavigationIntent::Fragment;
        }
        NavigationIntent::Navigate
    }

    /// Whether this activation raises the navigation signal
    pub fn raises_signal(self) -> bool {
        matches!(self, NavigationIntent::Navigate)
    }

    /// Whether the interceptor takes over from the browser
    ///
    /// Route transitions and same-path clicks are handed to the host
    /// router; new tabs and fragment jumps keep their default behavior.
    pub fn delegates(self) -> bool {
        matches!(self, NavigationIntent::Navigate | NavigationIntent::SamePage)
    }
}
