//! HTML querying for review listing pages.
//!
//! Pages are parsed with the `scraper` crate, which recovers from malformed
//! markup instead of failing. All lookups go through the named selectors in
//! [`selectors`] and the helpers in [`utils`].

pub mod selectors;
mod utils;

pub use utils::{first_attr, first_text, select_first, text_content};
