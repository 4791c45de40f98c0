mod errors;
mod params;

pub use errors::CommandError;
pub use params::{Cli, Command, SearchArgs, TranslateArgs, UrlsArgs};

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::content::SearchRequest;
use crate::content::corpus::fallback_corpus;
use crate::discovery::DiscoveryError;
use crate::discovery::client::HttpDiscoveryClient;
use crate::locale::KNOWN_LOCALES;
use crate::locale::catalog::LocaleCatalog;
use crate::search::engine::ResultAggregator;
use crate::search::{presets, report};
use crate::translate::TranslationIndex;

/// TCP connection establishment timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// Global HTTP client timeout covering DNS + connect + response body.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
/// Maximum redirect hops before aborting.
const MAX_REDIRECTS: usize = 5;

/// Command handler wiring the shared tables to the optional discovery backend.
pub struct Polyscout {
    discovery: Option<HttpDiscoveryClient>,
    catalog: LocaleCatalog,
    index: &'static TranslationIndex,
}

impl Polyscout {
    pub fn from_env() -> Result<Self, CommandError> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(HTTP_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        let discovery = match HttpDiscoveryClient::from_env(http) {
            Ok(client) => {
                info!(endpoint = %client.endpoint(), "discovery backend configured");
                Some(client)
            }
            Err(DiscoveryError::NotConfigured) => {
                info!("no discovery backend configured; using local corpus only");
                None
            }
            Err(e) => {
                warn!("discovery backend disabled: {e}");
                None
            }
        };

        let catalog = LocaleCatalog::from_env();
        debug!(base_url = catalog.base_url(), "locale catalog ready");

        Ok(Self {
            discovery,
            catalog,
            index: TranslationIndex::builtin(),
        })
    }

    pub async fn run(&self, command: Command) -> Result<String, CommandError> {
        match command {
            Command::Search(args) => self.search(args).await,
            Command::Translate(args) => self.translate(args),
            Command::Urls(args) => self.urls(args),
            Command::Examples => Ok(presets::format_examples()),
        }
    }

    async fn search(&self, args: SearchArgs) -> Result<String, CommandError> {
        let request = SearchRequest::new(&args.keywords, args.locales)?;

        info!(
            keywords = ?request.keywords(),
            locales = request.locales().len(),
            "command:search"
        );

        let aggregator = ResultAggregator::new(
            self.index,
            &self.catalog,
            fallback_corpus(),
            self.discovery.as_ref(),
        );
        let outcome = aggregator.search(&request).await;
        debug!(phases = ?outcome.phases, "search finished");

        if args.json {
            Ok(serde_json::to_string_pretty(&outcome)?)
        } else {
            Ok(report::format_report(&outcome, &request))
        }
    }

    fn translate(&self, args: TranslateArgs) -> Result<String, CommandError> {
        let locales = if args.locales.is_empty() {
            KNOWN_LOCALES.to_vec()
        } else {
            args.locales
        };
        let request = SearchRequest::new(&args.keywords, locales)?;

        Ok(report::format_translations(
            self.index,
            request.keywords(),
            request.locales(),
        ))
    }

    fn urls(&self, args: UrlsArgs) -> Result<String, CommandError> {
        let plans = self.catalog.crawl_summary(&args.locales);
        if args.json {
            Ok(serde_json::to_string_pretty(&plans)?)
        } else {
            Ok(report::format_crawl_summary(&plans))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_http_client() -> Client {
        Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(HTTP_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .unwrap()
    }

    fn polyscout() -> Polyscout {
        Polyscout {
            discovery: None,
            catalog: LocaleCatalog::default(),
            index: TranslationIndex::builtin(),
        }
    }

    fn polyscout_with_backend(uri: &str) -> Polyscout {
        Polyscout {
            discovery: Some(HttpDiscoveryClient::with_endpoint(test_http_client(), uri)),
            catalog: LocaleCatalog::default(),
            index: TranslationIndex::builtin(),
        }
    }

    fn search_args(keywords: &[&str], locales: &[Locale], json: bool) -> SearchArgs {
        SearchArgs {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            locales: locales.to_vec(),
            json,
        }
    }

    #[tokio::test]
    async fn search_rejects_blank_keywords() {
        let err = polyscout()
            .run(Command::Search(search_args(&["  "], &[Locale::EnUs], false)))
            .await
            .unwrap_err();
        assert!(matches!(err, CommandError::Request(_)), "got: {err}");
    }

    #[tokio::test]
    async fn search_rejects_empty_locales() {
        let err = polyscout()
            .run(Command::Search(search_args(&["contract"], &[], false)))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("locale"), "got: {err}");
    }

    #[tokio::test]
    async fn search_without_backend_uses_fallback() {
        let text = polyscout()
            .run(Command::Search(search_args(&["contract"], &[Locale::EnUs], false)))
            .await
            .unwrap();

        assert!(text.contains("fallback results only"));
        assert!(text.contains("## Results (4)"));
        assert!(text.contains("Salesforce"));
    }

    #[tokio::test]
    async fn search_merges_backend_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "id": "crawled-fr_fr-blog-0",
                "title": "L'avenir de la gestion des contrats en 2025",
                "type": "blog",
                "url": "https://www.docusign.com/fr-fr/blog/avenir-gestion-contrats-2025",
                "language": "fr_fr",
                "excerpt": "Explorez les tendances émergentes",
                "publishDate": "2025-02-01",
                "tags": ["contrat"]
            }])))
            .mount(&server)
            .await;

        let text = polyscout_with_backend(&server.uri())
            .run(Command::Search(search_args(&["contract"], &[Locale::FrFr], false)))
            .await
            .unwrap();

        assert!(!text.contains("fallback results only"));
        assert!(text.contains("## Results (2)"));
        let crawled = text.find("avenir-gestion-contrats-2025").unwrap();
        let fallback = text.find("customer-stories/renault").unwrap();
        assert!(crawled < fallback, "backend results come first");
    }

    #[tokio::test]
    async fn search_backend_failure_degrades_gracefully() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let text = polyscout_with_backend(&server.uri())
            .run(Command::Search(search_args(&["contract"], &[Locale::EnUs], true)))
            .await
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["discovery"]["status"], "failed");
        assert_eq!(json["records"].as_array().unwrap().len(), 4);
        assert!(
            json["records"]
                .as_array()
                .unwrap()
                .iter()
                .all(|r| r["language"] == "en_us")
        );
    }

    #[tokio::test]
    async fn translate_defaults_to_every_locale() {
        let text = polyscout()
            .run(Command::Translate(TranslateArgs {
                keywords: vec!["signature".into()],
                locales: Vec::new(),
            }))
            .await
            .unwrap();

        for locale in &KNOWN_LOCALES {
            assert!(text.contains(locale.display_name()), "missing {locale}");
        }
        assert!(text.contains("`電子署名`"));
    }

    #[tokio::test]
    async fn urls_lists_plan() {
        let text = polyscout()
            .run(Command::Urls(UrlsArgs {
                locales: vec![Locale::EsEs],
                json: false,
            }))
            .await
            .unwrap();

        assert!(text.contains("https://www.docusign.com/es-es/customer-stories"));
        assert!(text.contains("https://www.docusign.com/es-es/blog"));
        assert!(text.contains("https://www.docusign.com/es-es/resources"));
    }

    #[tokio::test]
    async fn examples_are_listed() {
        let text = polyscout().run(Command::Examples).await.unwrap();
        assert!(text.contains("Contract Automation"));
    }
}
