//! ハブ閲覧 TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: アプリケーション全体の状態（データ + UI状態 + 選択）
//! - `Msg`: アプリケーションへのメッセージ
//! - `update`: 状態遷移

use crate::catalog::{Catalog, NewsItem, SkillItem};
use crate::clipboard::{copy_text, Clipboard, SystemClipboard};
use crate::config::SiteConfig;
use crate::filter::{filter_by_category, search_items, ALL_KEY};
use crate::state::{Tab, UiState};
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
pub enum Msg {
    /// 終了
    Quit,
    /// 次のタブへ
    NextTab,
    /// 前のタブへ
    PrevTab,
    /// 次のフィルタキーへ
    NextFilter,
    /// 前のフィルタキーへ
    PrevFilter,
    /// 選択を下へ
    SelectNext,
    /// 選択を上へ
    SelectPrev,
    /// 選択中スキルのインストールコマンドをコピー
    CopyInstall,
    /// 検索欄にフォーカス移動
    SearchFocus,
    /// 検索欄からフォーカス解除
    SearchUnfocus,
    /// 検索文字入力
    SearchInput(char),
    /// 検索文字削除
    SearchBackspace,
    /// 検索クリア
    SearchClear,
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    /// 読み込み済みデータ
    pub catalog: Catalog,
    /// サイト設定
    pub config: SiteConfig,
    /// タブ/フィルタ状態
    pub state: UiState,
    /// ニュースタブの選択状態
    pub news_list: ListState,
    /// スキルタブの選択状態
    pub skills_list: ListState,
    /// 検索テキスト（全タブ共通）
    pub search_text: String,
    /// 検索欄にフォーカスしているか
    pub search_focused: bool,
    /// 非ブロッキング通知（コピー結果など）
    pub notice: Option<String>,
    /// 終了フラグ
    pub should_quit: bool,
    clipboard: Box<dyn Clipboard>,
}

impl Model {
    /// 新しいモデルを作成
    pub fn new(catalog: Catalog, config: SiteConfig) -> Self {
        Self::with_clipboard(catalog, config, Box::new(SystemClipboard::new()))
    }

    /// クリップボード実装を差し替えて作成
    pub fn with_clipboard(
        catalog: Catalog,
        config: SiteConfig,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let mut news_list = ListState::default();
        if !catalog.news.is_empty() {
            news_list.select(Some(0));
        }
        let mut skills_list = ListState::default();
        if !catalog.skills.is_empty() {
            skills_list.select(Some(0));
        }

        let notice = if catalog.warnings.is_empty() {
            None
        } else {
            Some(format!("数据加载警告 {} 条", catalog.warnings.len()))
        };

        Self {
            catalog,
            config,
            state: UiState::new(),
            news_list,
            skills_list,
            search_text: String::new(),
            search_focused: false,
            notice,
            should_quit: false,
            clipboard,
        }
    }

    /// 表示中のニュース（カテゴリフィルタ + 検索を適用）
    pub fn visible_news(&self) -> Vec<&NewsItem> {
        let filtered = filter_by_category(&self.catalog.news, self.state.news_filter());
        search_items(&filtered, &self.search_text)
    }

    /// 表示中のスキル（カテゴリフィルタ + 検索を適用）
    pub fn visible_skills(&self) -> Vec<&SkillItem> {
        let filtered = filter_by_category(&self.catalog.skills, self.state.skill_filter());
        search_items(&filtered, &self.search_text)
    }

    /// アクティブタブのフィルタキー候補（先頭は常に "all"）
    pub fn filter_keys(&self) -> Vec<String> {
        let mut keys = vec![ALL_KEY.to_string()];
        match self.state.active_tab() {
            Tab::News => keys.extend(self.catalog.news_category_keys()),
            Tab::Skills => keys.extend(self.catalog.categories.iter().map(|c| c.key.clone())),
        }
        keys
    }

    /// 選択中のスキル
    pub fn selected_skill(&self) -> Option<&SkillItem> {
        let visible = self.visible_skills();
        self.skills_list
            .selected()
            .and_then(|index| visible.get(index).copied())
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        if self.search_focused {
            // 検索欄にフォーカス中のキー処理
            match key {
                KeyCode::Esc if !self.search_text.is_empty() => Some(Msg::SearchClear),
                KeyCode::Esc => Some(Msg::SearchUnfocus),
                KeyCode::Down | KeyCode::Enter => Some(Msg::SearchUnfocus),
                KeyCode::Backspace => Some(Msg::SearchBackspace),
                KeyCode::Char(c) => Some(Msg::SearchInput(c)),
                _ => None,
            }
        } else {
            match key {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Tab => Some(Msg::NextTab),
                KeyCode::BackTab => Some(Msg::PrevTab),
                KeyCode::Right => Some(Msg::NextFilter),
                KeyCode::Left => Some(Msg::PrevFilter),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::SelectNext),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::SelectPrev),
                KeyCode::Char('c') | KeyCode::Enter => Some(Msg::CopyInstall),
                KeyCode::Char('/') => Some(Msg::SearchFocus),
                _ => None,
            }
        }
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    model.notice = None;

    match msg {
        Msg::Quit => model.should_quit = true,
        Msg::NextTab => {
            model.search_focused = false;
            let next = model.state.active_tab().next();
            model.state.switch_tab(next);
            clamp_selection(model);
        }
        Msg::PrevTab => {
            model.search_focused = false;
            let prev = model.state.active_tab().prev();
            model.state.switch_tab(prev);
            clamp_selection(model);
        }
        Msg::NextFilter => cycle_filter(model, 1),
        Msg::PrevFilter => cycle_filter(model, -1),
        Msg::SelectNext => move_selection(model, 1),
        Msg::SelectPrev => move_selection(model, -1),
        Msg::CopyInstall => copy_selected_install(model),
        Msg::SearchFocus => model.search_focused = true,
        Msg::SearchUnfocus => model.search_focused = false,
        Msg::SearchInput(c) => {
            model.search_text.push(c);
            clamp_selection(model);
        }
        Msg::SearchBackspace => {
            model.search_text.pop();
            clamp_selection(model);
        }
        Msg::SearchClear => {
            model.search_text.clear();
            clamp_selection(model);
        }
    }
}

/// アクティブタブのフィルタキーを前後に巡回させる
fn cycle_filter(model: &mut Model, step: isize) {
    let keys = model.filter_keys();
    if keys.is_empty() {
        return;
    }

    let current = match model.state.active_tab() {
        Tab::News => model.state.news_filter().to_string(),
        Tab::Skills => model.state.skill_filter().to_string(),
    };
    let index = keys.iter().position(|k| *k == current).unwrap_or(0) as isize;
    let next = (index + step).rem_euclid(keys.len() as isize) as usize;

    match model.state.active_tab() {
        Tab::News => model.state.filter_news(&keys[next]),
        Tab::Skills => model.state.filter_skills(&keys[next]),
    }
    reset_selection(model);
}

/// フィルタ変更後は選択を先頭へ戻す
fn reset_selection(model: &mut Model) {
    let (len, list) = match model.state.active_tab() {
        Tab::News => (model.visible_news().len(), &mut model.news_list),
        Tab::Skills => (model.visible_skills().len(), &mut model.skills_list),
    };
    list.select(if len > 0 { Some(0) } else { None });
}

/// 選択位置を表示件数に収める
fn clamp_selection(model: &mut Model) {
    let (len, list) = match model.state.active_tab() {
        Tab::News => (model.visible_news().len(), &mut model.news_list),
        Tab::Skills => (model.visible_skills().len(), &mut model.skills_list),
    };

    match list.selected() {
        Some(_) if len == 0 => list.select(None),
        Some(index) if index >= len => list.select(Some(len - 1)),
        None if len > 0 => list.select(Some(0)),
        _ => {}
    }
}

/// 選択を上下に移動する
fn move_selection(model: &mut Model, step: isize) {
    let (len, list) = match model.state.active_tab() {
        Tab::News => (model.visible_news().len(), &mut model.news_list),
        Tab::Skills => (model.visible_skills().len(), &mut model.skills_list),
    };
    if len == 0 {
        list.select(None);
        return;
    }

    let current = list.selected().unwrap_or(0) as isize;
    let next = (current + step).clamp(0, len as isize - 1) as usize;
    list.select(Some(next));
}

/// 選択中スキルのインストールコマンドをコピーする
///
/// 失敗しても通知を出すだけで処理は続行する。
fn copy_selected_install(model: &mut Model) {
    if model.state.active_tab() != Tab::Skills {
        return;
    }

    let command = match model.selected_skill() {
        Some(skill) => skill.install_command.clone(),
        None => return,
    };

    model.notice = if copy_text(model.clipboard.as_mut(), &command) {
        Some(format!("已复制: {}", command))
    } else {
        Some("复制失败，请手动复制安装命令".to_string())
    };
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
