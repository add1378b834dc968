//! molt fetch コマンド
//!
//! config.json に設定されたフィードを取得し、データディレクトリへ保存する。
//! 保存は一時ファイル経由のアトミック書き込み。

use crate::catalog::{parse_news_file, parse_skills_file};
use crate::commands::print_warnings;
use crate::config::{FeedSource, SiteConfig};
use crate::error::{HubError, Result as HubResult};
use crate::http;
use crate::output::CommandSummary;
use clap::Parser;
use owo_colors::OwoColorize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Parser)]
pub struct Args {
    /// リトライ回数
    #[arg(long, default_value_t = 2)]
    pub retries: u32,
}

/// フィード種別（保存先サブディレクトリと検証方法を決める）
#[derive(Clone, Copy)]
enum FeedKind {
    News,
    Skills,
}

impl FeedKind {
    fn subdir(&self) -> &'static str {
        match self {
            FeedKind::News => "news",
            FeedKind::Skills => "skills",
        }
    }
}

pub async fn run(args: Args, data_dir: &Path) -> Result<(), String> {
    let (config, warning) = SiteConfig::load(data_dir);
    if let Some(w) = warning {
        print_warnings(&[w]);
    }

    let feeds: Vec<(FeedKind, &FeedSource)> = config
        .news_feeds
        .iter()
        .map(|f| (FeedKind::News, f))
        .chain(config.skill_feeds.iter().map(|f| (FeedKind::Skills, f)))
        .collect();

    if feeds.is_empty() {
        println!("No feeds configured in config.json");
        return Ok(());
    }

    let client = http::build_client();
    let mut success = 0usize;
    let mut failure = 0usize;

    for (kind, feed) in feeds {
        match fetch_feed(&client, kind, feed, data_dir, args.retries).await {
            Ok(count) => {
                success += 1;
                println!(
                    "{} {} ({} entries)",
                    "✓".green(),
                    feed.name,
                    count
                );
            }
            Err(e) => {
                failure += 1;
                eprintln!("{} {}: {}", "✗".red(), feed.name, e);
            }
        }
    }

    let summary = CommandSummary::format(success, failure, "feed(s) fetched");
    println!("{} {}", summary.prefix, summary.message);

    if failure > 0 {
        return Err(format!("{} feed(s) failed", failure));
    }
    Ok(())
}

/// 1フィードを取得・検証して保存する
async fn fetch_feed(
    client: &reqwest::Client,
    kind: FeedKind,
    feed: &FeedSource,
    data_dir: &Path,
    retries: u32,
) -> HubResult<usize> {
    let bytes = http::with_retry(
        || http::download_with_progress(client, &feed.url),
        retries,
    )
    .await?;

    // 保存前に中身を検証する（壊れたフィードで既存データを潰さない）
    let label = format!("{}.json", feed.name);
    let content = String::from_utf8_lossy(&bytes);
    let entry_count = validate_feed(kind, &label, &content)?;

    let target = data_dir.join(kind.subdir()).join(&label);
    write_atomic(&target, &bytes)?;

    Ok(entry_count)
}

/// フィード内容を検証し、有効なエントリ数を返す
fn validate_feed(kind: FeedKind, label: &str, content: &str) -> HubResult<usize> {
    serde_json::from_str::<serde_json::Value>(content)?;

    let (entry_count, warnings) = match kind {
        FeedKind::News => {
            let (items, warnings) = parse_news_file(label, content);
            (items.len(), warnings)
        }
        FeedKind::Skills => {
            let (items, warnings) = parse_skills_file(label, content);
            (items.len(), warnings)
        }
    };

    if entry_count == 0 {
        let reason = warnings
            .first()
            .cloned()
            .unwrap_or_else(|| "no valid entries".to_string());
        return Err(HubError::InvalidEntry {
            file: label.to_string(),
            reason,
        });
    }

    Ok(entry_count)
}

/// 一時ファイル経由のアトミック書き込み
fn write_atomic(path: &Path, bytes: &[u8]) -> HubResult<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| HubError::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
#[path = "fetch_test.rs"]
mod tests;
