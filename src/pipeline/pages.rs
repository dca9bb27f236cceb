// src/pipeline/pages.rs

//! Fetch → filter → alternates, for one configured upstream.

use std::sync::Arc;

use crate::error::Result;
use crate::models::{Config, FetchOptions, FilterSpec, Locale, LocalePages};
use crate::pipeline::{CompiledFilter, LocalePaths, build_locale_pages};
use crate::services::{ApiType, PageSource, Paginator, select_source};
use crate::utils::http::Transport;

/// Entry point for producing sitemap page sets from one upstream API.
pub struct PagesApi {
    source: Box<dyn PageSource>,
    paginator: Paginator,
}

impl PagesApi {
    /// Select the adapter for `api_type`. Unknown types fail here, before any request.
    pub fn new(
        api_type: &str,
        url: &str,
        transport: Arc<dyn Transport>,
        options: &FetchOptions,
    ) -> Result<Self> {
        let api_type: ApiType = api_type.parse()?;
        Ok(Self::with_source(
            select_source(api_type, url, transport, options),
            Paginator::from_options(options),
        ))
    }

    pub fn from_config(config: &Config, transport: Arc<dyn Transport>) -> Result<Self> {
        Self::new(
            &config.api.kind,
            &config.api.url,
            transport,
            &config.fetch.options(),
        )
    }

    pub fn with_source(source: Box<dyn PageSource>, paginator: Paginator) -> Self {
        Self { source, paginator }
    }

    /// Fetch the full listing once and build descriptors for every locale.
    ///
    /// Every locale receives the same filtered path list, so each page lists
    /// all other requested locales as alternates.
    pub async fn get_pages(
        &self,
        locales: &[Locale],
        filter: &FilterSpec,
    ) -> Result<Vec<LocalePages>> {
        let filter = CompiledFilter::new(filter)?;
        let records = self.paginator.fetch_all(self.source.as_ref()).await?;

        let paths: Vec<String> = filter
            .apply(&records)
            .into_iter()
            .map(|record| self.source.path_for(record))
            .collect();
        log::info!(
            "{} of {} records kept after filtering",
            paths.len(),
            records.len()
        );

        let by_locale: Vec<LocalePaths> = locales
            .iter()
            .map(|locale| LocalePaths {
                locale: locale.clone(),
                paths: paths.clone(),
            })
            .collect();

        Ok(build_locale_pages(&by_locale))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::AppError;
    use crate::models::{Alternate, FilterRules};
    use crate::utils::http::ApiResponse;
    use crate::utils::http::mock::{MockTransport, Scripted};

    fn options() -> FetchOptions {
        FetchOptions {
            request_delay: Duration::ZERO,
            ..FetchOptions::default()
        }
    }

    fn page(range: std::ops::Range<usize>, current: u32, next: Option<u32>) -> Scripted {
        let data: Vec<_> = range
            .map(|i| {
                let provider = if i % 2 == 0 { "acme" } else { "other" };
                serde_json::json!({
                    "identifier": format!("acme:{i}"),
                    "seo_title": format!("slot-{i}"),
                    "provider": provider,
                    "categories": ["slots"],
                })
            })
            .collect();
        let body = serde_json::json!({
            "data": data,
            "pagination": {"current_page": current, "next_page": next, "prev_page": null, "total_pages": 2, "total_count": 101}
        });
        Ok(ApiResponse::new(200, body.to_string()))
    }

    fn two_pages() -> Arc<MockTransport> {
        Arc::new(MockTransport::new([page(0..100, 1, Some(2)), page(100..101, 2, None)]))
    }

    fn api(transport: &Arc<MockTransport>) -> PagesApi {
        PagesApi::new("games", "https://api.example.com/games", transport.clone(), &options()).unwrap()
    }

    #[tokio::test]
    async fn test_two_pages_two_locales_no_filter() {
        let transport = two_pages();
        let locales = [Locale::new("en"), Locale::new("de")];

        let result = api(&transport)
            .get_pages(&locales, &FilterSpec::default())
            .await
            .unwrap();

        assert_eq!(transport.requests().len(), 2);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].locale, Locale::new("en"));
        assert_eq!(result[1].locale, Locale::new("de"));

        for (own, sibling) in [(0, "de"), (1, "en")] {
            let pages = &result[own].pages;
            assert_eq!(pages.len(), 101);
            for page in pages {
                assert_eq!(
                    page.alternates,
                    vec![Alternate {
                        lang: Locale::new(sibling),
                        path: page.path.clone(),
                    }]
                );
            }
        }
        assert_eq!(result[0].pages[0].path, "game/slot-0");
        assert_eq!(result[0].pages[100].path, "game/slot-100");
    }

    #[tokio::test]
    async fn test_filter_applies_before_paths() {
        let transport = two_pages();
        let filter = FilterSpec::exclude(FilterRules::default().providers(["other"]));

        let result = api(&transport)
            .get_pages(&[Locale::new("en")], &filter)
            .await
            .unwrap();

        let pages = &result[0].pages;
        assert_eq!(pages.len(), 51);
        assert!(pages.iter().all(|p| p.alternates.is_empty()));
        assert_eq!(pages[1].path, "game/slot-2");
    }

    #[tokio::test]
    async fn test_fetch_failure_returns_no_pages() {
        let transport = Arc::new(MockTransport::new([
            page(0..100, 1, Some(2)),
            Ok(ApiResponse::new(500, "down")),
        ]));
        let api = PagesApi::new(
            "games",
            "https://api.example.com/games",
            transport.clone(),
            &FetchOptions {
                max_retries: 0,
                ..options()
            },
        )
        .unwrap();

        let err = api
            .get_pages(&[Locale::new("en")], &FilterSpec::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("(page: 2) down"));
    }

    #[tokio::test]
    async fn test_transport_failure_reports_page() {
        let transport = Arc::new(MockTransport::new([
            page(0..100, 1, Some(2)),
            Err("connection reset".to_string()),
        ]));
        let api = PagesApi::new(
            "games",
            "https://api.example.com/games",
            transport.clone(),
            &FetchOptions {
                max_retries: 0,
                ..options()
            },
        )
        .unwrap();

        let err = api
            .get_pages(&[Locale::new("en")], &FilterSpec::default())
            .await
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("(page: 2)"), "{message}");
        assert!(message.contains("connection reset"), "{message}");
    }

    #[tokio::test]
    async fn test_bad_filter_fails_before_fetching() {
        let transport = two_pages();
        let filter = FilterSpec::include(FilterRules::default().urls(["(("]));

        let result = api(&transport).get_pages(&[Locale::new("en")], &filter).await;

        assert!(matches!(result, Err(AppError::Pattern { .. })));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_unknown_api_type_is_fatal() {
        let transport = Arc::new(MockTransport::default());
        let result = PagesApi::new("ss", "https://api.example.com", transport.clone(), &options());

        assert!(matches!(result, Err(AppError::UnsupportedApi(_))));
        assert!(transport.requests().is_empty());
    }
}
