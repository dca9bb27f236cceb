// src/models/mod.rs

//! Domain models for the sitemap page builder.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod filter;
mod page;
mod sitemap;

// Re-export all public types
pub use config::{ApiConfig, Config, FetchConfig, FetchOptions};
pub use filter::{FilterRules, FilterSpec};
pub use page::{PageBatch, PageRecord, Pagination};
pub use sitemap::{Alternate, ChangeFreq, Locale, LocalePages, PAGE_FREQ, PAGE_PRIORITY, PageDescriptor};
