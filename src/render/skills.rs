//! スキルレンダラ
//!
//! SkillItem 配列をスキルカード断片へ変換し、コンテナへ書き込む。
//! フィルタボタン列は categories.json のエントリから生成する。

use super::document::{html_escape, Document};
use crate::catalog::{Category, SkillItem};
use crate::filter::ALL_KEY;

/// スキルグリッドのコンテナID
pub const SKILLS_GRID_ID: &str = "skills-grid";

/// スキルフィルタのコンテナID
pub const SKILL_FILTERS_ID: &str = "skill-filters";

/// スキルカードをコンテナへ描画する
pub fn render_skills(doc: &mut Document, container_id: &str, items: &[&SkillItem]) {
    let html = items.iter().map(|item| skill_card(item)).collect::<String>();
    doc.replace(container_id, html);
}

/// スキルカード1枚分のマークアップ
///
/// インストールコマンドブロックとコピー操作、新しいタブで開く
/// GitHub リンクを含む。
pub fn skill_card(item: &SkillItem) -> String {
    let name = html_escape(&item.name);
    let description = html_escape(&item.description);
    let category = html_escape(&item.category);
    let github_url = html_escape(&item.github_url);
    let install_command = html_escape(&item.install_command);

    format!(
        r#"  <article class="skill-card" data-category="{category}">
    <div class="skill-head">
      <h3 class="skill-name">{name}</h3>
      <span class="skill-tag">{category}</span>
    </div>
    <p class="skill-desc">{description}</p>
    <div class="install-block">
      <code class="install-command">{install_command}</code>
      <button class="copy-btn" data-command="{install_command}" onclick="copyText(this.dataset.command)">复制</button>
    </div>
    <a class="skill-link" href="{github_url}" target="_blank" rel="noopener noreferrer">GitHub</a>
  </article>
"#
    )
}

/// スキルフィルタボタン列をコンテナへ描画する
///
/// カテゴリエントリごとに1つ + 先頭の「全部」。アクティブは常に1つ。
pub fn render_skill_filters(
    doc: &mut Document,
    container_id: &str,
    categories: &[Category],
    active_key: &str,
) {
    let mut html = String::new();
    html.push_str(&skill_filter_button(ALL_KEY, "全部", None, active_key == ALL_KEY));
    for category in categories {
        html.push_str(&skill_filter_button(
            &category.key,
            &category.label,
            category.icon.as_deref(),
            category.key == active_key,
        ));
    }
    doc.replace(container_id, html);
}

fn skill_filter_button(key: &str, label: &str, icon: Option<&str>, active: bool) -> String {
    let class = if active {
        "skill-filter-btn active"
    } else {
        "skill-filter-btn"
    };
    let label = match icon {
        Some(icon) => format!("{} {}", html_escape(icon), html_escape(label)),
        None => html_escape(label),
    };
    format!(
        r#"  <button class="{}" data-filter="{}" onclick="filterSkills('{}')">{}</button>
"#,
        class,
        html_escape(key),
        html_escape(key),
        label
    )
}

#[cfg(test)]
#[path = "skills_test.rs"]
mod tests;
