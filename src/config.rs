//! サイト設定（data/config.json）

use serde::{Deserialize, Serialize};
use std::path::Path;

/// リモートフィードの定義
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSource {
    /// 保存先ファイル名の元になる名前（例: "official"）
    pub name: String,
    pub url: String,
}

/// サイト設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub github_url: String,
    pub docs_url: String,
    #[serde(default)]
    pub news_feeds: Vec<FeedSource>,
    #[serde(default)]
    pub skill_feeds: Vec<FeedSource>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Moltbot".to_string(),
            title: "Moltbot - AI Assistant Hub".to_string(),
            description: Some("OpenClaw AI 助手新闻与技能插件中心".to_string()),
            github_url: "https://github.com/moltbot/moltbot".to_string(),
            docs_url: "https://docs.molt.bot".to_string(),
            news_feeds: Vec::new(),
            skill_feeds: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// JSONからパース
    pub fn parse(content: &str) -> Result<Self, String> {
        serde_json::from_str(content).map_err(|e| format!("Failed to parse config.json: {}", e))
    }

    /// データディレクトリから読み込む
    ///
    /// ファイル欠損・パース失敗は既定値へフォールバックし、警告を返す。
    pub fn load(data_dir: &Path) -> (Self, Option<String>) {
        let path = data_dir.join("config.json");
        if !path.exists() {
            return (
                Self::default(),
                Some("config.json not found, using defaults".to_string()),
            );
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(format!("config.json: {}", e))),
            },
            Err(e) => (Self::default(), Some(format!("config.json: {}", e))),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
