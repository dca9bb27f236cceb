// src/pipeline/fetch.rs

//! End-to-end fetch run: config → page sets → snapshot.

use std::sync::Arc;

use chrono::Utc;

use crate::error::Result;
use crate::models::Config;
use crate::pipeline::PagesApi;
use crate::storage::{PagesSnapshot, SitemapStorage, WriteMetadata};
use crate::utils::http::Transport;

/// Fetch page sets for every configured locale and store the snapshot.
pub async fn run_fetch(
    config: &Config,
    transport: Arc<dyn Transport>,
    storage: &dyn SitemapStorage,
) -> Result<WriteMetadata> {
    let start_time = Utc::now();
    config.validate()?;

    let api = PagesApi::from_config(config, transport)?;
    let locales = api.get_pages(&config.locales, &config.filter).await?;

    for entry in &locales {
        log::info!("{}: {} pages", entry.locale, entry.pages.len());
    }

    let summary = storage.write_pages(&PagesSnapshot::new(locales)).await?;
    log::info!(
        "Saved {} pages to {} in {}s",
        summary.page_count,
        summary.location,
        (Utc::now() - start_time).num_seconds()
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{ApiConfig, FetchConfig, Locale};
    use crate::storage::LocalStorage;
    use crate::utils::http::ApiResponse;
    use crate::utils::http::mock::MockTransport;
    use tempfile::TempDir;

    fn config() -> Config {
        Config {
            api: ApiConfig {
                kind: "games".to_string(),
                url: "https://api.example.com/games".to_string(),
            },
            fetch: FetchConfig {
                request_delay_ms: 0,
                ..FetchConfig::default()
            },
            locales: vec![Locale::new("en"), Locale::new("fr")],
            ..Config::default()
        }
    }

    fn listing() -> String {
        serde_json::json!({
            "data": [{"identifier": "a", "seo_title": "alpha"}],
            "pagination": {"current_page": 1, "next_page": null, "prev_page": null, "total_pages": 1, "total_count": 1}
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_run_fetch_writes_snapshot() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let transport = Arc::new(MockTransport::new([Ok(ApiResponse::new(200, listing()))]));

        let meta = run_fetch(&config(), transport, &storage).await.unwrap();
        assert_eq!(meta.page_count, 2);
        assert_eq!(meta.locale_count, 2);

        let snapshot = storage.load_pages().await.unwrap().unwrap();
        assert_eq!(snapshot.locales[1].locale, Locale::new("fr"));
        assert_eq!(snapshot.locales[1].pages[0].path, "game/alpha");
        assert_eq!(snapshot.locales[1].pages[0].alternates[0].lang, Locale::new("en"));
    }

    #[tokio::test]
    async fn test_run_fetch_rejects_invalid_config() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());
        let transport = Arc::new(MockTransport::default());

        let mut config = config();
        config.api.kind = "unknown".to_string();

        let result = run_fetch(&config, transport.clone(), &storage).await;
        assert!(matches!(result, Err(AppError::UnsupportedApi(_))));
        assert!(transport.requests().is_empty());
        assert!(storage.load_pages().await.unwrap().is_none());
    }
}
