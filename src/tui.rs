//! ハブ閲覧 TUI
//!
//! ニュースとスキルをタブで切り替えて閲覧する TUI。
//!
//! ## モジュール構成
//!
//! - `app`: アプリケーション状態（Model, Msg, update）
//! - `view`: 画面描画

mod app;
mod view;

pub use app::{update, Model, Msg};

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout};

/// TUI を実行
pub fn run(catalog: Catalog, config: SiteConfig) -> io::Result<()> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut model = Model::new(catalog, config);

    // メインループ
    while !model.should_quit {
        terminal.draw(|f| view::draw(f, &mut model))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(msg) = model.key_to_msg(key.code) {
                    update(&mut model, msg);
                }
            }
        }
    }

    // ターミナルを復元
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}
