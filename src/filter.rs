//! フィルタエンジン
//!
//! コレクションをカテゴリキーで絞り込む純粋関数群。
//! 副作用なし・決定的で、元の相対順序を保持する（安定フィルタ）。

use crate::catalog::{NewsItem, SkillItem};

/// 「すべて」を表すフィルタキー
pub const ALL_KEY: &str = "all";

/// カテゴリを持つレコード
pub trait Categorized {
    fn category(&self) -> &str;
}

impl Categorized for NewsItem {
    fn category(&self) -> &str {
        &self.category
    }
}

impl Categorized for SkillItem {
    fn category(&self) -> &str {
        &self.category
    }
}

/// カテゴリキーでコレクションを絞り込む
///
/// - `key == "all"` なら全件返却
/// - それ以外はカテゴリ完全一致のみ
pub fn filter_by_category<'a, T: Categorized>(items: &'a [T], key: &str) -> Vec<&'a T> {
    if key == ALL_KEY {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.category() == key).collect()
}

/// テキストで対象にマッチするレコード（TUI 検索用）
pub trait TextMatch {
    fn matches(&self, query_lower: &str) -> bool;
}

impl TextMatch for NewsItem {
    fn matches(&self, query_lower: &str) -> bool {
        self.title.to_lowercase().contains(query_lower)
            || self.source.to_lowercase().contains(query_lower)
    }
}

impl TextMatch for SkillItem {
    fn matches(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
    }
}

/// テキスト部分一致での絞り込み
///
/// `query` が空なら全件返却。case-insensitive。
pub fn search_items<'a, T: TextMatch>(items: &[&'a T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.to_vec();
    }
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches(&query))
        .copied()
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;

#[cfg(test)]
#[path = "filter_proptests.rs"]
mod proptests;
