use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tracing::{info, warn};

use crate::parser;
use crate::record::MetadataRecord;

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed pause after every page, failed or not. Courtesy rate limit against
/// the NCBI servers; deliberately not adaptive and not configurable.
pub const COURTESY_DELAY: Duration = Duration::from_secs(1);

/// Scrape stats returned after completion.
pub struct ScrapeStats {
    pub total: usize,
    pub ok: usize,
    pub errors: usize,
}

/// Fetch and extract every URL in order, one at a time.
///
/// Returns one record per input URL, in input order. A page that cannot be
/// fetched (transport error, timeout, non-2xx status) is logged and recorded
/// as an all-ERROR sentinel row; it never aborts the run. Only setup failures
/// (the HTTP client itself) propagate as errors.
pub async fn scrape_all(urls: &[String]) -> Result<(Vec<MetadataRecord>, ScrapeStats)> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let total = urls.len();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    let mut records = Vec::with_capacity(total);
    let mut ok = 0usize;
    let mut errors = 0usize;

    for url in urls {
        match fetch_page(&client, url).await {
            Ok(body) => {
                records.push(parser::extract_record(url, &body));
                ok += 1;
            }
            Err(e) => {
                warn!("Failed to process {}: {}", url, e);
                records.push(MetadataRecord::error(url));
                errors += 1;
            }
        }
        pb.inc(1);
        tokio::time::sleep(COURTESY_DELAY).await;
    }

    pb.finish_and_clear();
    info!("Scraped {} pages ({} ok, {} errors)", total, ok, errors);

    Ok((records, ScrapeStats { total, ok, errors }))
}

async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ERROR_MARKER;

    // An address reqwest rejects before any network I/O, so the test stays offline.
    #[tokio::test]
    async fn unfetchable_url_becomes_sentinel_row() {
        let urls = vec!["not-a-valid-url".to_string()];
        let (records, stats) = scrape_all(&urls).await.unwrap();

        assert_eq!(stats.total, 1);
        assert_eq!(stats.ok, 0);
        assert_eq!(stats.errors, 1);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].url(), "not-a-valid-url");
        assert!(records[0].is_error());
        assert_eq!(records[0].value("Title"), ERROR_MARKER);
    }

    #[tokio::test]
    async fn empty_list_yields_no_records() {
        let (records, stats) = scrape_all(&[]).await.unwrap();
        assert!(records.is_empty());
        assert_eq!(stats.total, 0);
    }
}
