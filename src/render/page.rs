//! ページ組み立て
//!
//! ヘッダ・ヒーロー・2セクション・フッタからなる単一ページを組み立てる。
//! スタイルは外部 css/ ファイルとして出力する（インラインは使わない）。

use super::document::{html_escape, Document};
use super::news::{news_filter_chips, render_news, NEWS_GRID_ID};
use super::skills::{render_skills, render_skill_filters, SKILLS_GRID_ID, SKILL_FILTERS_ID};
use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::filter::filter_by_category;
use crate::state::{Tab, UiState};

/// 出力する外部スタイルシート（ファイル名, 内容）
pub const STYLESHEETS: &[(&str, &str)] = &[
    ("variables.css", include_str!("../../assets/css/variables.css")),
    ("reset.css", include_str!("../../assets/css/reset.css")),
    ("layout.css", include_str!("../../assets/css/layout.css")),
    ("components.css", include_str!("../../assets/css/components.css")),
    ("themes.css", include_str!("../../assets/css/themes.css")),
];

/// ページ全体を描画する
///
/// グリッドとフィルタ列は `state` のフィルタ選択を反映し、
/// 表示セクションは `state` のアクティブタブに従う。
pub fn render_page(config: &SiteConfig, catalog: &Catalog, state: &UiState) -> String {
    let mut doc = Document::new();
    doc.add_container(NEWS_GRID_ID);
    doc.add_container(SKILLS_GRID_ID);
    doc.add_container(SKILL_FILTERS_ID);

    let news = filter_by_category(&catalog.news, state.news_filter());
    render_news(&mut doc, NEWS_GRID_ID, &news);

    let skills = filter_by_category(&catalog.skills, state.skill_filter());
    render_skills(&mut doc, SKILLS_GRID_ID, &skills);
    render_skill_filters(
        &mut doc,
        SKILL_FILTERS_ID,
        &catalog.categories,
        state.skill_filter(),
    );

    assemble(config, catalog, state, &doc)
}

fn assemble(config: &SiteConfig, catalog: &Catalog, state: &UiState, doc: &Document) -> String {
    let title = html_escape(&config.title);
    let name = html_escape(&config.name);
    let github_url = html_escape(&config.github_url);
    let docs_url = html_escape(&config.docs_url);
    let description = html_escape(config.description.as_deref().unwrap_or_default());

    let stylesheet_links = STYLESHEETS
        .iter()
        .map(|(file, _)| format!(r#"  <link rel="stylesheet" href="css/{}">"#, file))
        .collect::<Vec<_>>()
        .join("\n");

    let news_chips = news_filter_chips(&catalog.news_category_keys(), state.news_filter());

    let news_grid = doc.content(NEWS_GRID_ID).unwrap_or_default();
    let skills_grid = doc.content(SKILLS_GRID_ID).unwrap_or_default();
    let skill_filters = doc.content(SKILL_FILTERS_ID).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <link rel="preconnect" href="https://fonts.googleapis.com">
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Noto+Sans+SC:wght@400;500;700&display=swap">
{stylesheet_links}
</head>
<body>
<header>
  <div class="logo">{name}</div>
  <nav class="tabs">
    <button class="{news_tab_class}" onclick="switchTab('news')">{news_tab_title}</button>
    <button class="{skills_tab_class}" onclick="switchTab('skills')">{skills_tab_title}</button>
  </nav>
</header>

<section class="hero">
  <h1>{name} · OpenClaw AI 助手</h1>
  <p>{description}</p>
</section>

<section id="news-section" class="{news_section_class}">
  <div class="filter-bar">
{news_chips}  </div>
  <div id="news-grid" class="card-grid">
{news_grid}  </div>
</section>

<section id="skills-section" class="{skills_section_class}">
  <div id="skill-filters" class="filter-bar">
{skill_filters}  </div>
  <div id="skills-grid" class="card-grid">
{skills_grid}  </div>
</section>

<footer>
  <a href="{github_url}" target="_blank" rel="noopener noreferrer">GitHub</a>
  <a href="{docs_url}" target="_blank" rel="noopener noreferrer">文档</a>
</footer>
</body>
</html>
"#,
        news_tab_class = tab_class(state, Tab::News),
        skills_tab_class = tab_class(state, Tab::Skills),
        news_tab_title = Tab::News.title(),
        skills_tab_title = Tab::Skills.title(),
        news_section_class = section_class(state, Tab::News),
        skills_section_class = section_class(state, Tab::Skills),
    )
}

fn tab_class(state: &UiState, tab: Tab) -> &'static str {
    if state.is_visible(tab) {
        "tab-btn active"
    } else {
        "tab-btn"
    }
}

fn section_class(state: &UiState, tab: Tab) -> &'static str {
    if state.is_visible(tab) {
        "tab-section"
    } else {
        "tab-section hidden"
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
