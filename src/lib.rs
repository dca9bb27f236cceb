// src/lib.rs

//! Sitemap page-set builder library.
//!
//! Pulls a paginated content listing from an upstream API, filters it, and
//! produces per-locale page descriptors with cross-locale alternates.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
