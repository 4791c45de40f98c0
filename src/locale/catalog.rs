use std::env;

use serde::Serialize;
use tracing::warn;
use url::Url;

use super::Locale;
use crate::content::ContentKind;

pub const DEFAULT_BASE_URL: &str = "https://www.docusign.com";

/// Content sections inspected for every locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    CustomerStories,
    Blog,
    Resources,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::CustomerStories, Section::Blog, Section::Resources];

    /// Root-relative path of the section, identical across locales.
    pub fn path(self) -> &'static str {
        match self {
            Section::CustomerStories => "/customer-stories",
            Section::Blog => "/blog",
            Section::Resources => "/resources",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::CustomerStories => "Customer Stories",
            Section::Blog => "Blog",
            Section::Resources => "Resources",
        }
    }
}

/// URLs planned for one locale, for progress display.
#[derive(Debug, Clone, Serialize)]
pub struct CrawlPlan {
    pub locale: Locale,
    pub locale_name: String,
    pub targets: Vec<CrawlTarget>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrawlTarget {
    pub section: Section,
    pub url: String,
}

/// Maps locales to the content URLs of one site.
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    base_url: String,
}

impl Default for LocaleCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl LocaleCatalog {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads `POLYSCOUT_BASE_URL`; falls back to the public site when unset or invalid.
    pub fn from_env() -> Self {
        Self::from_setting(env::var("POLYSCOUT_BASE_URL").ok().as_deref())
    }

    /// The base must be a bare http(s) origin: locale prefixes are read back
    /// from the first path segment, so a base path would hide them.
    fn from_setting(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
            return Self::default();
        };

        match Url::parse(raw) {
            Ok(url)
                if matches!(url.scheme(), "http" | "https")
                    && url.path() == "/"
                    && url.query().is_none()
                    && url.fragment().is_none() =>
            {
                Self::new(raw)
            }
            _ => {
                warn!(
                    base_url = %raw,
                    "ignoring POLYSCOUT_BASE_URL (expected an http(s) origin without path)"
                );
                Self::default()
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The default locale lives at the site root; others get a `/<segment>` prefix.
    pub fn build_url(&self, locale: &Locale, section_path: &str) -> String {
        if locale.is_default() {
            format!("{}{section_path}", self.base_url)
        } else {
            format!("{}/{}{section_path}", self.base_url, locale.url_segment())
        }
    }

    pub fn sections_for_locale(&self, _locale: &Locale) -> &'static [Section] {
        &Section::ALL
    }

    /// Locales × sections, locale-major.
    pub fn enumerate_urls(&self, locales: &[Locale]) -> Vec<String> {
        locales
            .iter()
            .flat_map(|locale| {
                self.sections_for_locale(locale)
                    .iter()
                    .map(move |section| self.build_url(locale, section.path()))
            })
            .collect()
    }

    pub fn crawl_summary(&self, locales: &[Locale]) -> Vec<CrawlPlan> {
        locales
            .iter()
            .map(|locale| CrawlPlan {
                locale: locale.clone(),
                locale_name: locale.display_name().to_string(),
                targets: self
                    .sections_for_locale(locale)
                    .iter()
                    .map(|&section| CrawlTarget {
                        section,
                        url: self.build_url(locale, section.path()),
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Locale encoded in the first path segment (`/fr-fr/...`), or the default
/// locale when the URL carries no such prefix.
pub fn infer_locale_from_url(url: &str) -> Locale {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .path_segments()
                .and_then(|mut segments| segments.next())
                .map(str::to_string)
        })
        .filter(|segment| is_locale_segment(segment))
        .map(|segment| Locale::from_url_segment(&segment))
        .unwrap_or_default()
}

fn is_locale_segment(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 5
        && bytes[2] == b'-'
        && bytes[..2].iter().all(u8::is_ascii_lowercase)
        && bytes[3..].iter().all(u8::is_ascii_lowercase)
}

/// Kind from the section path in the URL; blog takes precedence over
/// customer stories, anything else is a resource.
pub fn infer_content_kind(url: &str) -> ContentKind {
    if url.contains(Section::Blog.path()) {
        ContentKind::Blog
    } else if url.contains(Section::CustomerStories.path()) {
        ContentKind::CustomerStory
    } else {
        ContentKind::Resource
    }
}
