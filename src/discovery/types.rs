use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::content::{ContentKind, ContentRecord};
use crate::locale::Locale;
use crate::locale::catalog::{infer_content_kind, infer_locale_from_url};
use crate::translate::LocaleTerms;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryRequest {
    pub urls: Vec<String>,
    pub translated_keywords: BTreeMap<Locale, Vec<String>>,
}

impl DiscoveryRequest {
    pub fn new(urls: Vec<String>, terms: &LocaleTerms) -> Self {
        Self {
            urls,
            translated_keywords: terms
                .iter()
                .map(|(locale, set)| (locale.clone(), set.iter().cloned().collect()))
                .collect(),
        }
    }
}

/// A record as the backend sends it. `type` and `language` may be omitted,
/// in which case they are inferred from the URL.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRecord {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: Option<ContentKind>,
    pub url: String,
    pub language: Option<Locale>,
    #[serde(default)]
    pub excerpt: String,
    #[serde(deserialize_with = "date_prefix")]
    pub publish_date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// `YYYY-MM-DD`, or the date part of a timestamp such as `2024-10-05T12:00:00Z`.
fn date_prefix<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    let date = raw.trim().split(['T', ' ']).next().unwrap_or_default();
    date.parse::<NaiveDate>().map_err(serde::de::Error::custom)
}

impl WireRecord {
    /// `None` for records without a URL, which cannot be deduplicated.
    pub fn into_record(self) -> Option<ContentRecord> {
        let url = self.url.trim().to_string();
        if url.is_empty() {
            return None;
        }
        Some(ContentRecord {
            id: if self.id.is_empty() { url.clone() } else { self.id },
            title: self.title,
            kind: self.kind.unwrap_or_else(|| infer_content_kind(&url)),
            locale: self.language.unwrap_or_else(|| infer_locale_from_url(&url)),
            url,
            excerpt: self.excerpt,
            publish_date: self.publish_date,
            tags: self.tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn request_serializes_wire_shape() {
        let mut terms = LocaleTerms::new();
        terms.insert(
            Locale::DeDe,
            BTreeSet::from(["vertrag".to_string(), "contract".to_string()]),
        );
        let request = DiscoveryRequest::new(
            vec!["https://www.docusign.com/de-de/blog".into()],
            &terms,
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "urls": ["https://www.docusign.com/de-de/blog"],
                "translatedKeywords": { "de_de": ["contract", "vertrag"] }
            })
        );
    }

    #[test]
    fn full_record_keeps_backend_metadata() {
        let wire: WireRecord = serde_json::from_value(serde_json::json!({
            "id": "crawled-1",
            "title": "Guide",
            "type": "resource",
            "url": "https://www.docusign.com/fr-fr/blog/guide",
            "language": "fr_fr",
            "excerpt": "Un guide",
            "publishDate": "2024-10-05",
            "tags": ["contrat"]
        }))
        .unwrap();

        let record = wire.into_record().unwrap();
        assert_eq!(record.kind, ContentKind::Resource);
        assert_eq!(record.locale, Locale::FrFr);
        assert_eq!(record.tags, ["contrat"]);
    }

    #[test]
    fn publish_date_accepts_timestamps() {
        for raw in ["2024-10-05T12:00:00Z", "2024-10-05 08:30:00", " 2024-10-05 "] {
            let wire: WireRecord = serde_json::from_value(serde_json::json!({
                "title": "Guide",
                "url": "https://www.docusign.com/blog/guide",
                "publishDate": raw
            }))
            .unwrap();
            assert_eq!(wire.publish_date, NaiveDate::from_ymd_opt(2024, 10, 5).unwrap(), "{raw}");
        }
    }

    #[test]
    fn publish_date_rejects_non_dates() {
        let result = serde_json::from_value::<WireRecord>(serde_json::json!({
            "title": "Guide",
            "url": "https://www.docusign.com/blog/guide",
            "publishDate": "last tuesday"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn missing_metadata_is_inferred_from_url() {
        let wire: WireRecord = serde_json::from_value(serde_json::json!({
            "title": "Renault",
            "url": "https://www.docusign.com/fr-fr/customer-stories/renault",
            "publishDate": "2024-08-22"
        }))
        .unwrap();

        let record = wire.into_record().unwrap();
        assert_eq!(record.kind, ContentKind::CustomerStory);
        assert_eq!(record.locale, Locale::FrFr);
        assert_eq!(record.id, record.url);
        assert!(record.tags.is_empty());
    }

    #[test]
    fn record_without_url_is_dropped() {
        let wire: WireRecord = serde_json::from_value(serde_json::json!({
            "title": "Nowhere",
            "url": "  ",
            "publishDate": "2024-08-22"
        }))
        .unwrap();

        assert!(wire.into_record().is_none());
    }
}
