use std::collections::BTreeSet;

use super::{ContentRecord, SearchRequest};
use crate::translate::LocaleTerms;

/// True when any term occurs (case-insensitively) in the record's title,
/// excerpt, or tags. An empty term set never matches.
pub fn matches(record: &ContentRecord, terms: &BTreeSet<String>) -> bool {
    if terms.is_empty() {
        return false;
    }
    let blob = search_blob(record);
    terms.iter().any(|term| blob.contains(&term.to_lowercase()))
}

fn search_blob(record: &ContentRecord) -> String {
    format!(
        "{} {} {}",
        record.title,
        record.excerpt,
        record.tags.join(" ")
    )
    .to_lowercase()
}

/// Records from `corpus` whose locale was requested and whose text matches
/// that locale's translated terms. Corpus order is kept.
pub fn filter_corpus(
    corpus: &[ContentRecord],
    request: &SearchRequest,
    terms: &LocaleTerms,
) -> Vec<ContentRecord> {
    corpus
        .iter()
        .filter(|record| request.includes_locale(&record.locale))
        .filter(|record| {
            terms
                .get(&record.locale)
                .is_some_and(|locale_terms| matches(record, locale_terms))
        })
        .cloned()
        .collect()
}
