//! Full-page navigation commands.

/// Path of the search entry page.
pub const SEARCH_PATH: &str = "/";

/// Path of the character detail page.
pub const DETAIL_PATH: &str = "/character";

/// Query parameter carrying the search text on the detail page.
pub const NAME_PARAM: &str = "name";

/// A one-shot "go to this location" command.
///
/// Navigations replace the current page entirely; nothing survives from
/// the page that issued them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    location: String,
}

impl Navigation {
    /// Build a navigation to `path` with the given parameters, in order.
    ///
    /// Keys and values are percent-encoded.
    pub fn to(path: &str, params: &[(&str, &str)]) -> Self {
        let mut location = path.to_string();
        for (i, (key, value)) in params.iter().enumerate() {
            location.push(if i == 0 { '?' } else { '&' });
            location.push_str(&urlencoding::encode(key));
            location.push('=');
            location.push_str(&urlencoding::encode(value));
        }
        Self { location }
    }

    /// Navigation to the detail page for `query`.
    pub fn detail(query: &str) -> Self {
        Self::to(DETAIL_PATH, &[(NAME_PARAM, query)])
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}
