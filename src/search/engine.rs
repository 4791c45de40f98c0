use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::content::matcher::filter_corpus;
use crate::content::{ContentRecord, SearchRequest};
use crate::discovery::{DiscoveryClient, DiscoveryError, DiscoveryRequest};
use crate::locale::catalog::LocaleCatalog;
use crate::translate::{LocaleTerms, TranslationIndex};

/// Steps of one search. A failed discovery call goes straight from
/// `Dispatching` to `Matching`; there is no error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Expanding,
    Dispatching,
    Matching,
    Aggregating,
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DiscoveryOutcome {
    Succeeded { records: usize },
    Failed { reason: String },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    pub records: Vec<ContentRecord>,
    pub translated_keywords: LocaleTerms,
    pub urls: Vec<String>,
    pub discovery: DiscoveryOutcome,
    pub fallback_matches: usize,
    pub duplicates_dropped: usize,
    #[serde(skip)]
    pub phases: Vec<SearchPhase>,
}

impl SearchReport {
    pub fn fallback_only(&self) -> bool {
        matches!(self.discovery, DiscoveryOutcome::Failed { .. })
    }
}

/// Merges discovery results with the fallback corpus. Holds only shared
/// read-only tables, so one aggregator serves any number of searches.
pub struct ResultAggregator<'a, D> {
    index: &'a TranslationIndex,
    catalog: &'a LocaleCatalog,
    corpus: &'a [ContentRecord],
    discovery: Option<&'a D>,
}

impl<'a, D: DiscoveryClient> ResultAggregator<'a, D> {
    pub fn new(
        index: &'a TranslationIndex,
        catalog: &'a LocaleCatalog,
        corpus: &'a [ContentRecord],
        discovery: Option<&'a D>,
    ) -> Self {
        Self {
            index,
            catalog,
            corpus,
            discovery,
        }
    }

    /// Runs one search. Never fails: discovery errors degrade to
    /// fallback-only results. Discovery records come first, then fallback
    /// records, keeping the first record per URL.
    pub async fn search(&self, request: &SearchRequest) -> SearchReport {
        let mut phases = vec![SearchPhase::Idle];
        let mut enter = |phase: SearchPhase| {
            debug!(?phase, "search phase");
            phases.push(phase);
        };

        enter(SearchPhase::Expanding);
        let terms = self
            .index
            .expand_for_locales(request.keywords(), request.locales());

        enter(SearchPhase::Dispatching);
        let urls = self.catalog.enumerate_urls(request.locales());
        let (discovered, outcome) = match self.dispatch(&urls, &terms).await {
            Ok(records) => {
                let count = records.len();
                (records, DiscoveryOutcome::Succeeded { records: count })
            }
            Err(e) => {
                warn!(error = %e, "discovery unavailable (continuing with fallback corpus)");
                (
                    Vec::new(),
                    DiscoveryOutcome::Failed {
                        reason: e.to_string(),
                    },
                )
            }
        };

        enter(SearchPhase::Matching);
        let fallback = filter_corpus(self.corpus, request, &terms);
        let fallback_matches = fallback.len();

        enter(SearchPhase::Aggregating);
        let combined: Vec<ContentRecord> = discovered.into_iter().chain(fallback).collect();
        let total = combined.len();
        let records = dedupe_by_url(combined);
        let duplicates_dropped = total - records.len();

        enter(SearchPhase::Done);
        info!(
            keywords = request.keywords().len(),
            locales = request.locales().len(),
            results = records.len(),
            duplicates_dropped,
            "search complete"
        );

        SearchReport {
            records,
            translated_keywords: terms,
            urls,
            discovery: outcome,
            fallback_matches,
            duplicates_dropped,
            phases,
        }
    }

    async fn dispatch(
        &self,
        urls: &[String],
        terms: &LocaleTerms,
    ) -> Result<Vec<ContentRecord>, DiscoveryError> {
        let client = self.discovery.ok_or(DiscoveryError::NotConfigured)?;
        client
            .discover(&DiscoveryRequest::new(urls.to_vec(), terms))
            .await
    }
}

fn dedupe_by_url(records: Vec<ContentRecord>) -> Vec<ContentRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.url.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentKind;
    use crate::content::corpus::fallback_corpus;
    use crate::locale::Locale;
    use chrono::NaiveDate;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct MockDiscovery {
        responses: Mutex<VecDeque<Result<Vec<ContentRecord>, DiscoveryError>>>,
        requests: Mutex<Vec<DiscoveryRequest>>,
    }

    impl MockDiscovery {
        fn returning(records: Vec<ContentRecord>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from([Ok(records)])),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: DiscoveryError) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from([Err(error)])),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn captured_requests(&self) -> Vec<DiscoveryRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl DiscoveryClient for MockDiscovery {
        async fn discover(
            &self,
            request: &DiscoveryRequest,
        ) -> Result<Vec<ContentRecord>, DiscoveryError> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Vec::new()))
        }
    }

    fn discovered(url: &str, locale: Locale, title: &str) -> ContentRecord {
        ContentRecord {
            id: format!("crawled-{url}"),
            title: title.into(),
            kind: ContentKind::Resource,
            url: url.into(),
            locale,
            excerpt: "From the crawler".into(),
            publish_date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            tags: vec!["contract".into()],
        }
    }

    fn ids(report: &SearchReport) -> Vec<&str> {
        report.records.iter().map(|r| r.id.as_str()).collect()
    }

    async fn run(discovery: Option<&MockDiscovery>, request: &SearchRequest) -> SearchReport {
        let catalog = LocaleCatalog::default();
        ResultAggregator::new(
            TranslationIndex::builtin(),
            &catalog,
            fallback_corpus(),
            discovery,
        )
        .search(request)
        .await
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let a = discovered("https://a.com/x", Locale::EnUs, "first");
        let b = discovered("https://a.com/x", Locale::EnUs, "second");
        let c = discovered("https://a.com/y", Locale::EnUs, "third");

        let records = dedupe_by_url(vec![a, b, c]);
        let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["first", "third"]);
    }

    #[tokio::test]
    async fn failing_discovery_falls_back_to_corpus() {
        let mock = MockDiscovery::failing(DiscoveryError::Status {
            code: 502,
            message: "bad gateway".into(),
        });
        let request = SearchRequest::new(["contract"], [Locale::EnUs]).unwrap();

        let report = run(Some(&mock), &request).await;

        assert!(report.fallback_only());
        assert!(report.records.iter().all(|r| r.locale == Locale::EnUs));
        // "agreement" is a known English variant of "contract".
        assert_eq!(ids(&report), ["2", "3", "12", "13"]);
    }

    #[tokio::test]
    async fn missing_discovery_client_is_fallback_only() {
        let request = SearchRequest::new(["onboarding"], [Locale::EnUs]).unwrap();

        let report = run(None, &request).await;

        match &report.discovery {
            DiscoveryOutcome::Failed { reason } => assert!(reason.contains("not configured")),
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(ids(&report), ["14"]);
    }

    #[tokio::test]
    async fn discovery_records_come_first_and_win_ties() {
        let shared_url = "https://www.docusign.com/customer-stories/salesforce";
        let mock = MockDiscovery::returning(vec![
            discovered(shared_url, Locale::EnUs, "Fresh crawl of Salesforce"),
            discovered("https://www.docusign.com/resources/clm-guide", Locale::EnUs, "CLM guide"),
        ]);
        let request = SearchRequest::new(["contract"], [Locale::EnUs]).unwrap();

        let report = run(Some(&mock), &request).await;

        assert!(!report.fallback_only());
        assert_eq!(report.duplicates_dropped, 1);
        let salesforce: Vec<_> = report.records.iter().filter(|r| r.url == shared_url).collect();
        assert_eq!(salesforce.len(), 1);
        assert_eq!(salesforce[0].title, "Fresh crawl of Salesforce");
        assert_eq!(salesforce[0].kind, ContentKind::Resource);
        assert_eq!(report.records[0].url, shared_url);
        assert_eq!(report.records[1].url, "https://www.docusign.com/resources/clm-guide");
        assert_eq!(report.records.len(), 2 + report.fallback_matches - 1);
    }

    #[tokio::test]
    async fn discovery_receives_plan_and_terms() {
        let mock = MockDiscovery::returning(Vec::new());
        let request = SearchRequest::new(["Contracts"], [Locale::EnUs, Locale::DeDe]).unwrap();

        let report = run(Some(&mock), &request).await;

        let captured = mock.captured_requests();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].urls.len(), 6);
        assert_eq!(captured[0].urls, report.urls);
        assert_eq!(captured[0].urls[3], "https://www.docusign.com/de-de/customer-stories");
        assert!(captured[0].translated_keywords[&Locale::DeDe].contains(&"vertrag".to_string()));
        assert!(captured[0].translated_keywords[&Locale::EnUs].contains(&"contracts".to_string()));
    }

    #[tokio::test]
    async fn phases_follow_the_pipeline() {
        let mock = MockDiscovery::failing(DiscoveryError::NotConfigured);
        let request = SearchRequest::new(["digital"], [Locale::FrFr]).unwrap();

        let report = run(Some(&mock), &request).await;

        assert_eq!(
            report.phases,
            [
                SearchPhase::Idle,
                SearchPhase::Expanding,
                SearchPhase::Dispatching,
                SearchPhase::Matching,
                SearchPhase::Aggregating,
                SearchPhase::Done,
            ]
        );
    }

    #[tokio::test]
    async fn report_json_omits_phases() {
        let request = SearchRequest::new(["onboarding"], [Locale::EnUs]).unwrap();

        let report = run(None, &request).await;
        let json = serde_json::to_value(&report).unwrap();

        assert!(json.get("phases").is_none());
        assert_eq!(json["records"][0]["type"], "customer-story");
        assert_eq!(json["records"][0]["publishDate"], "2024-08-30");
    }

    #[tokio::test]
    async fn repeated_search_is_stable() {
        let request =
            SearchRequest::new(["workflow", "automation"], [Locale::DeDe, Locale::JaJp]).unwrap();

        let first = run(None, &request).await;
        let second = run(None, &request).await;

        assert_eq!(first.records, second.records);
        assert_eq!(first.translated_keywords, second.translated_keywords);
    }

    #[tokio::test]
    async fn unknown_locale_does_not_break_search() {
        let request =
            SearchRequest::new(["contract"], [Locale::Other("sv_se".into()), Locale::FrFr]).unwrap();

        let report = run(None, &request).await;

        assert_eq!(report.urls[1], "https://www.docusign.com/sv-se/blog");
        assert!(report.records.iter().all(|r| r.locale == Locale::FrFr));
        assert_eq!(ids(&report), ["9"]);
    }
}
