//! Keyword expansion: English keywords to per-locale matchable terms.
//!
//! Expansion is a lookup in a fixed table, never machine translation. A
//! keyword pulls in the variants of its exact table entry and of every entry
//! related to it by substring containment in either direction, so
//! `"contracts"` reaches the `"contract"` family and `"estate"` reaches
//! `"real estate"`. This favours recall; short keywords such as `"auto"`
//! reach several families at once.

mod table;

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::content::normalize_keyword;
use crate::locale::Locale;
use table::{KEYWORD_TABLE, TranslationEntry};

/// Matchable terms per requested locale.
pub type LocaleTerms = BTreeMap<Locale, BTreeSet<String>>;

/// Read-only view over a keyword table. Share the [`TranslationIndex::builtin`]
/// instance by reference; nothing mutates it after startup.
#[derive(Debug)]
pub struct TranslationIndex {
    entries: &'static [TranslationEntry],
}

static BUILTIN: TranslationIndex = TranslationIndex {
    entries: KEYWORD_TABLE,
};

impl TranslationIndex {
    pub fn builtin() -> &'static TranslationIndex {
        &BUILTIN
    }

    pub fn canonical_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.canonical)
    }

    fn lookup(&self, keyword: &str) -> Option<&'static TranslationEntry> {
        self.entries.iter().find(|entry| entry.canonical == keyword)
    }

    /// Terms to search for in `locale`: every normalized keyword itself, plus
    /// the variants of its exact entry and of all substring-related entries.
    pub fn expand<S: AsRef<str>>(&self, keywords: &[S], locale: &Locale) -> BTreeSet<String> {
        let code = locale.code();
        let mut terms = BTreeSet::new();

        for keyword in keywords {
            let keyword = normalize_keyword(keyword.as_ref());
            // An empty keyword is a substring of every key.
            if keyword.is_empty() {
                continue;
            }

            if let Some(entry) = self.lookup(&keyword) {
                add_variants(&mut terms, entry, code);
            }

            for entry in self.entries {
                if entry.canonical.contains(keyword.as_str()) || keyword.contains(entry.canonical) {
                    add_variants(&mut terms, entry, code);
                }
            }

            terms.insert(keyword);
        }

        terms
    }

    /// [`TranslationIndex::expand`] for each locale independently.
    pub fn expand_for_locales<S: AsRef<str>>(&self, keywords: &[S], locales: &[Locale]) -> LocaleTerms {
        locales
            .iter()
            .map(|locale| {
                let terms = self.expand(keywords, locale);
                debug!(locale = %locale, terms = terms.len(), "keywords expanded");
                (locale.clone(), terms)
            })
            .collect()
    }

    /// Known variants of one keyword in `locale`, without the keyword itself.
    pub fn variants_only(&self, keyword: &str, locale: &Locale) -> Vec<String> {
        let literal = normalize_keyword(keyword);
        self.expand(&[keyword], locale)
            .into_iter()
            .filter(|term| *term != literal)
            .collect()
    }
}

fn add_variants(terms: &mut BTreeSet<String>, entry: &TranslationEntry, code: &str) {
    terms.extend(entry.variants_for(code).iter().map(|v| v.to_lowercase()));
}
