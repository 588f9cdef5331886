//! Domain layer for the character search app.
//!
//! Holds the directory record types, the seam to the external character
//! directory, detail resolution, the detail view model and the search form.
//! Nothing in this crate performs I/O on its own.

pub mod character;
pub mod detail;
pub mod directory;
pub mod error;
pub mod navigation;
pub mod search_form;
pub mod view;
