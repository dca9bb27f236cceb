//! Pipeline entry points for building sitemap page sets.
//!
//! - `CompiledFilter`: include/exclude evaluation
//! - `build_locale_pages`: cross-locale alternates
//! - `PagesApi`: fetch → filter → alternates for one upstream
//! - `run_fetch`: the above plus config validation and snapshot storage

pub mod alternates;
pub mod fetch;
pub mod filter;
pub mod pages;

pub use alternates::{LocalePaths, build_locale_pages};
pub use fetch::run_fetch;
pub use filter::CompiledFilter;
pub use pages::PagesApi;
