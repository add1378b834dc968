//! UI 状態（タブ + フィルタ選択）
//!
//! タブ・フィルタの状態遷移を UI フレームワークから切り離した純粋なモデル。
//! 状態を変更するのはここで定義する遷移関数のみ。

use crate::filter::ALL_KEY;

/// タブ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    News,
    Skills,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::News, Tab::Skills]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::News => "新闻资讯",
            Tab::Skills => "技能插件",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::News => 0,
            Tab::Skills => 1,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index % 2 {
            0 => Tab::News,
            _ => Tab::Skills,
        }
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// タブ/フィルタコントローラの状態
///
/// 不変条件: アクティブなタブは常に 1 つ、各セクションのアクティブな
/// フィルタキーは常に 1 つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    active_tab: Tab,
    news_filter: String,
    skill_filter: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    /// 初期状態: ニュースタブ、両セクションとも「すべて」フィルタ
    pub fn new() -> Self {
        Self {
            active_tab: Tab::News,
            news_filter: ALL_KEY.to_string(),
            skill_filter: ALL_KEY.to_string(),
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn news_filter(&self) -> &str {
        &self.news_filter
    }

    pub fn skill_filter(&self) -> &str {
        &self.skill_filter
    }

    /// アクティブタブを切り替える
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// ニュースフィルタを更新する
    pub fn filter_news(&mut self, key: &str) {
        self.news_filter = key.to_string();
    }

    /// スキルフィルタを更新する
    pub fn filter_skills(&mut self, key: &str) {
        self.skill_filter = key.to_string();
    }

    /// 指定タブのセクションが表示対象かどうか
    pub fn is_visible(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }

    /// アクティブタブのフィルタキー
    pub fn active_filter(&self) -> &str {
        match self.active_tab {
            Tab::News => &self.news_filter,
            Tab::Skills => &self.skill_filter,
        }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
