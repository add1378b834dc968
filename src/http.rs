//! 共通HTTPヘルパー

use crate::error::{HubError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::time::Duration;

/// User-Agent
const USER_AGENT: &str = "molt-cli";

/// フィード取得用の reqwest::Client を構築
pub fn build_client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// プログレスバー付きダウンロード
pub async fn download_with_progress(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();

    if !response.status().is_success() {
        return Err(HubError::Feed {
            url: url.to_string(),
            status,
        });
    }

    let total_size = response.content_length().unwrap_or(0);

    let pb = if total_size > 0 {
        let pb = ProgressBar::new(total_size);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} Downloading...")
                .unwrap(),
        );
        pb
    };

    let bytes = response.bytes().await?;
    pb.finish_and_clear();

    Ok(bytes.to_vec())
}

/// リトライ付きで非同期処理を実行
///
/// リトライ可能なエラー（ネットワーク断、5xx）のみ再試行する。
pub async fn with_retry<T, F, Fut>(mut operation: F, max_retries: u32) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempt < max_retries => {
                attempt += 1;
                let backoff = Duration::from_millis(200 * u64::from(attempt));
                tokio::time::sleep(backoff).await;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
