//! 画面描画
//!
//! Model を読み取り ratatui ウィジェットへ変換する。状態は変更しない
//! （ListState のスクロール位置を除く）。

use super::app::Model;
use crate::filter::ALL_KEY;
use crate::state::Tab;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap};

/// 画面を描画
pub fn draw(f: &mut Frame, model: &mut Model) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // タブバー
            Constraint::Length(1), // フィルタ行
            Constraint::Length(1), // 検索行
            Constraint::Min(1),    // コンテンツ
            Constraint::Length(1), // 通知/ヘルプ
        ])
        .split(f.area());

    draw_tabs(f, model, chunks[0]);
    draw_filter_bar(f, model, chunks[1]);
    draw_search(f, model, chunks[2]);

    match model.state.active_tab() {
        Tab::News => draw_news(f, model, chunks[3]),
        Tab::Skills => draw_skills(f, model, chunks[3]),
    }

    draw_status(f, model, chunks[4]);
}

fn draw_tabs(f: &mut Frame, model: &Model, area: Rect) {
    let titles: Vec<String> = Tab::all()
        .iter()
        .map(|t| format!(" {} ", t.title()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(model.state.active_tab().index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    f.render_widget(tabs, area);
}

fn draw_filter_bar(f: &mut Frame, model: &Model, area: Rect) {
    let active = model.state.active_filter().to_string();
    let mut spans = vec![Span::styled("筛选: ", Style::default().fg(Color::DarkGray))];

    for key in model.filter_keys() {
        let style = if key == active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let label = if key == ALL_KEY { "全部".to_string() } else { key };
        spans.push(Span::styled(format!("[{}] ", label), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_search(f: &mut Frame, model: &Model, area: Rect) {
    let style = if model.search_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = format!("搜索: {}", model.search_text);
    f.render_widget(Paragraph::new(line).style(style), area);
}

fn draw_news(f: &mut Frame, model: &mut Model, area: Rect) {
    let items: Vec<ListItem> = model
        .visible_news()
        .iter()
        .map(|item| {
            let date = item.published_at.clone().unwrap_or_default();
            let line = Line::from(vec![
                Span::styled(
                    item.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", item.category),
                    Style::default().fg(Color::Magenta),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{} {}", item.source, date),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let count = items.len();
    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" 新闻 ({}) ", count))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut model.news_list);
}

fn draw_skills(f: &mut Frame, model: &mut Model, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let items: Vec<ListItem> = model
        .visible_skills()
        .iter()
        .map(|skill| {
            let line = Line::from(vec![
                Span::styled(
                    skill.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("[{}]", skill.category),
                    Style::default().fg(Color::Magenta),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let count = items.len();
    let detail = model.selected_skill().cloned();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" 技能插件 ({}) ", count))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, columns[0], &mut model.skills_list);

    let detail_text = match detail {
        Some(skill) => Text::from(vec![
            Line::from(Span::styled(
                skill.name,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("分类: {}", skill.category),
                Style::default().fg(Color::Magenta),
            )),
            Line::raw(""),
            Line::raw(skill.description),
            Line::raw(""),
            Line::from(Span::styled(
                skill.install_command,
                Style::default().fg(Color::Cyan),
            )),
            Line::from(Span::styled(
                skill.github_url,
                Style::default().fg(Color::Blue),
            )),
        ]),
        None => Text::raw("没有匹配的技能"),
    };

    let detail_panel = Paragraph::new(detail_text)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" 详情 ").borders(Borders::ALL));
    f.render_widget(detail_panel, columns[1]);
}

fn draw_status(f: &mut Frame, model: &Model, area: Rect) {
    let (text, style) = match &model.notice {
        Some(notice) => (notice.clone(), Style::default().fg(Color::Green)),
        None => (
            " Tab: 切换标签 | ←/→: 筛选 | ↑/↓: 选择 | c: 复制安装命令 | /: 搜索 | q: 退出"
                .to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };
    f.render_widget(Paragraph::new(text).style(style), area);
}
