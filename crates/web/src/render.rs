//! HTML rendering for the search and detail pages.
//!
//! Templates are embedded at compile time and compiled once at startup.
//! Template names end in `.html`, so minijinja escapes every interpolated
//! value.

use holonet_core::view::DetailView;
use minijinja::{context, Environment};

const LAYOUT_TEMPLATE: &str = "layout.html";
const SEARCH_TEMPLATE: &str = "search.html";
const DETAIL_TEMPLATE: &str = "detail.html";

/// Compiled page templates.
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(LAYOUT_TEMPLATE, include_str!("../templates/layout.html"))?;
        env.add_template(SEARCH_TEMPLATE, include_str!("../templates/search.html"))?;
        env.add_template(DETAIL_TEMPLATE, include_str!("../templates/detail.html"))?;
        Ok(Self { env })
    }

    /// The search entry page.
    pub fn render_search(&self) -> Result<String, minijinja::Error> {
        self.env.get_template(SEARCH_TEMPLATE)?.render(())
    }

    /// The detail page for an already resolved view. Same input, same output.
    pub fn render_detail(&self, view: &DetailView) -> Result<String, minijinja::Error> {
        self.env.get_template(DETAIL_TEMPLATE)?.render(context! {
            view => view,
            message => view.message(),
        })
    }
}
