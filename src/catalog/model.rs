//! ハブデータモデル
//!
//! JSON データファイルから読み込まれるレコード型。
//! バリデーションはローダ境界（`loader`）で行い、不正なレコードは
//! レンダラに到達する前に除外される。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// ニュース記事
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub source: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

impl NewsItem {
    /// 必須フィールドの検証
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title is empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("category is empty".to_string());
        }
        validate_url("url", &self.url)?;
        if let Some(image_url) = &self.image_url {
            validate_url("image_url", image_url)?;
        }
        if let Some(published_at) = &self.published_at {
            if parse_date(published_at).is_none() {
                return Err(format!("published_at is not a date: {}", published_at));
            }
        }
        Ok(())
    }

    /// 公開日（`YYYY-MM-DD` または RFC3339）
    pub fn published_date(&self) -> Option<NaiveDate> {
        self.published_at.as_deref().and_then(parse_date)
    }
}

/// スキルプラグイン
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    pub name: String,
    pub description: String,
    pub category: String,
    pub github_url: String,
    pub install_command: String,
}

impl SkillItem {
    /// 必須フィールドの検証
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is empty".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("category is empty".to_string());
        }
        if self.install_command.trim().is_empty() {
            return Err("install_command is empty".to_string());
        }
        validate_url("github_url", &self.github_url)?;
        Ok(())
    }
}

/// フィルタチップ描画用のカテゴリメタデータ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl Category {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.key.trim().is_empty() {
            return Err("key is empty".to_string());
        }
        if self.label.trim().is_empty() {
            return Err("label is empty".to_string());
        }
        Ok(())
    }
}

fn validate_url(field: &str, value: &str) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is empty", field));
    }
    if !value.starts_with("https://") && !value.starts_with("http://") {
        return Err(format!("{} is not an http(s) URL: {}", field, value));
    }
    Ok(())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
