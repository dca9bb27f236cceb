//! Sitemap page descriptors handed to the sitemap writer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Priority given to every listed page.
pub const PAGE_PRIORITY: f32 = 0.4;

/// Change frequency given to every listed page.
pub const PAGE_FREQ: ChangeFreq = ChangeFreq::Monthly;

/// An opaque locale token (e.g. `"en"`, `"pt-BR"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(locale: &str) -> Self {
        Self::new(locale)
    }
}

impl From<String> for Locale {
    fn from(locale: String) -> Self {
        Self(locale)
    }
}

/// Sitemap `<changefreq>` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

/// The same path published under another locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternate {
    pub lang: Locale,
    pub path: String,
}

/// One sitemap entry for one locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDescriptor {
    /// Sitemap-relative path (e.g. `game/book-of-tests`)
    pub path: String,

    /// Locale this entry belongs to
    pub lang: Locale,

    pub priority: f32,

    pub freq: ChangeFreq,

    /// Other locales carrying the same path, in request order. Always present.
    pub alternates: Vec<Alternate>,
}

/// All sitemap entries for one locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalePages {
    pub locale: Locale,
    pub pages: Vec<PageDescriptor>,
}
