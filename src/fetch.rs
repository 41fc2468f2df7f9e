use std::time::Duration;

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use tracing::{debug, info};

use crate::settings::Settings;

pub const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";
pub const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9";

/// One-shot page fetcher: fixed pause, then a single GET. No retries.
pub struct Fetcher {
    client: reqwest::Client,
    delay: Duration,
}

impl Fetcher {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            delay: settings.delay(),
        })
    }

    /// Fetch the raw HTML at `url`. Any network error or non-2xx status is fatal.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        self.pause().await;

        info!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("HTTP {} for {}", status, url);
        }

        let body = response
            .text()
            .await
            .context("Failed to read response body")?;
        info!("Fetched {} bytes ({})", body.len(), status);
        Ok(body)
    }

    async fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }
        debug!("Sleeping {:.1}s before request", self.delay.as_secs_f64());

        let pb = ProgressBar::new_spinner();
        pb.set_message(format!("Waiting {}s before request...", self.delay.as_secs()));
        pb.enable_steady_tick(Duration::from_millis(120));
        tokio::time::sleep(self.delay).await;
        pb.finish_and_clear();
    }
}
