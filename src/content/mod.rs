//! Content records, request validation, the fallback corpus, and keyword matching.

pub mod corpus;
pub mod matcher;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    Blog,
    CustomerStory,
    Resource,
}

impl ContentKind {
    /// Kind shown to readers. Resources are presented as blog posts; the
    /// three-way kind is kept everywhere else.
    pub fn presentation_kind(self) -> ContentKind {
        match self {
            ContentKind::Resource => ContentKind::Blog,
            kind => kind,
        }
    }

    pub fn label(self) -> &'static str {
        match self.presentation_kind() {
            ContentKind::CustomerStory => "Customer Story",
            _ => "Blog Post",
        }
    }
}

/// One discovered document. Two records with the same `url` are the same document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub url: String,
    #[serde(rename = "language")]
    pub locale: Locale,
    pub excerpt: String,
    pub publish_date: NaiveDate,
    pub tags: Vec<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("at least one keyword is required")]
    NoKeywords,

    #[error("at least one locale is required")]
    NoLocales,
}

/// A validated search: normalized keywords and at least one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    keywords: Vec<String>,
    locales: Vec<Locale>,
}

impl SearchRequest {
    /// Keywords are trimmed and lower-cased; blanks and repeats are dropped.
    /// Locale repeats are dropped. First occurrence order is kept for both.
    pub fn new<K, L>(keywords: K, locales: L) -> Result<Self, RequestError>
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        L: IntoIterator<Item = Locale>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = normalize_keyword(keyword.as_ref());
            if !keyword.is_empty() && !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }
        if normalized.is_empty() {
            return Err(RequestError::NoKeywords);
        }

        let mut unique: Vec<Locale> = Vec::new();
        for locale in locales {
            if !unique.contains(&locale) {
                unique.push(locale);
            }
        }
        if unique.is_empty() {
            return Err(RequestError::NoLocales);
        }

        Ok(Self {
            keywords: normalized,
            locales: unique,
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn includes_locale(&self, locale: &Locale) -> bool {
        self.locales.contains(locale)
    }
}

pub fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}
