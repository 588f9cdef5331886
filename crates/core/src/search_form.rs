//! Search form state and its submit command.

use crate::navigation::Navigation;

/// The search control: a single text value, initially empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchForm {
    query: String,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror the control's content exactly. No trimming.
    pub fn on_input(&mut self, value: impl Into<String>) {
        self.query = value.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Submit the form.
    ///
    /// Returns `None` for an empty query: nothing happens and no error is
    /// shown. Otherwise returns the navigation to the detail page.
    pub fn submit(&self) -> Option<Navigation> {
        if self.query.is_empty() {
            return None;
        }
        Some(Navigation::detail(&self.query))
    }
}
