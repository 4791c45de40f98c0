//! Locale codes, display names, and URL planning per locale.

pub mod catalog;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A content locale such as `de_de`.
///
/// The eight site locales are closed variants. Any other code is carried
/// through untouched as [`Locale::Other`] so URL building and display keep
/// working with the raw code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Locale {
    #[default]
    EnUs,
    DeDe,
    NlNl,
    FrFr,
    EsEs,
    ItIt,
    PtBr,
    JaJp,
    Other(String),
}

/// Every known locale, in the order the site lists them.
pub static KNOWN_LOCALES: [Locale; 8] = [
    Locale::EnUs,
    Locale::DeDe,
    Locale::NlNl,
    Locale::FrFr,
    Locale::EsEs,
    Locale::ItIt,
    Locale::PtBr,
    Locale::JaJp,
];

impl Locale {
    pub fn code(&self) -> &str {
        match self {
            Locale::EnUs => "en_us",
            Locale::DeDe => "de_de",
            Locale::NlNl => "nl_nl",
            Locale::FrFr => "fr_fr",
            Locale::EsEs => "es_es",
            Locale::ItIt => "it_it",
            Locale::PtBr => "pt_br",
            Locale::JaJp => "ja_jp",
            Locale::Other(code) => code,
        }
    }

    /// Human-readable name. Unknown codes fall back to the raw code.
    pub fn display_name(&self) -> &str {
        match self {
            Locale::EnUs => "English (US)",
            Locale::DeDe => "Deutsch (DE)",
            Locale::NlNl => "Nederlands (NL)",
            Locale::FrFr => "Français (FR)",
            Locale::EsEs => "Español (ES)",
            Locale::ItIt => "Italiano (IT)",
            Locale::PtBr => "Português (BR)",
            Locale::JaJp => "日本語 (JP)",
            Locale::Other(code) => code,
        }
    }

    /// The default locale lives at the site root and has no URL prefix.
    pub fn is_default(&self) -> bool {
        matches!(self, Locale::EnUs)
    }

    /// Path segment used in localized URLs: `fr_fr` becomes `fr-fr`.
    pub fn url_segment(&self) -> String {
        self.code().to_lowercase().replacen('_', "-", 1)
    }

    /// Inverse of [`Locale::url_segment`].
    pub fn from_url_segment(segment: &str) -> Self {
        Locale::from(segment.replacen('-', "_", 1))
    }
}

/// Codes are matched case-insensitively; unknown codes are kept lower-cased
/// so that [`Locale::url_segment`] and [`Locale::from_url_segment`] agree.
impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        let code = code.trim().to_lowercase();
        match code.as_str() {
            "en_us" => Locale::EnUs,
            "de_de" => Locale::DeDe,
            "nl_nl" => Locale::NlNl,
            "fr_fr" => Locale::FrFr,
            "es_es" => Locale::EsEs,
            "it_it" => Locale::ItIt,
            "pt_br" => Locale::PtBr,
            "ja_jp" => Locale::JaJp,
            _ => Locale::Other(code),
        }
    }
}

impl From<String> for Locale {
    fn from(code: String) -> Self {
        Locale::from(code.as_str())
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        match locale {
            Locale::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

impl FromStr for Locale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Locale::from(s))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
