//! ニュースレンダラ
//!
//! フィルタ済みの NewsItem 配列をカード断片へ変換し、コンテナへ書き込む。

use super::document::{html_escape, Document};
use crate::catalog::NewsItem;
use crate::filter::ALL_KEY;

/// ニュースグリッドのコンテナID
pub const NEWS_GRID_ID: &str = "news-grid";

/// ニュースカードをコンテナへ描画する
///
/// コンテナの既存内容は丸ごと置き換える。空コレクションはカード0枚。
pub fn render_news(doc: &mut Document, container_id: &str, items: &[&NewsItem]) {
    let html = items.iter().map(|item| news_card(item)).collect::<String>();
    doc.replace(container_id, html);
}

/// ニュースカード1枚分のマークアップ
pub fn news_card(item: &NewsItem) -> String {
    let title = html_escape(&item.title);
    let source = html_escape(&item.source);
    let url = html_escape(&item.url);
    let category = html_escape(&item.category);

    let media = match &item.image_url {
        Some(image_url) => format!(
            r#"    <div class="card-media"><img src="{}" alt="{}" loading="lazy"></div>
"#,
            html_escape(image_url),
            title
        ),
        None => String::new(),
    };

    let published = match &item.published_at {
        Some(date) => format!(
            r#"<time datetime="{}">{}</time>"#,
            html_escape(date),
            html_escape(date)
        ),
        None => String::new(),
    };

    format!(
        r#"  <article class="unified-card" data-category="{category}">
{media}    <div class="card-body">
      <span class="card-tag">{category}</span>
      <h3 class="card-title"><a href="{url}" target="_blank" rel="noopener noreferrer">{title}</a></h3>
      <div class="card-meta">
        <a class="card-source" href="{url}" target="_blank" rel="noopener noreferrer">{source}</a>
        {published}
      </div>
    </div>
  </article>
"#
    )
}

/// ニュースのフィルタチップ列
///
/// 先頭に「全部」、続けてカテゴリキーごとに1つ。アクティブは常に1つ。
pub fn news_filter_chips(keys: &[String], active_key: &str) -> String {
    let mut html = String::new();
    html.push_str(&filter_chip(ALL_KEY, "全部", active_key == ALL_KEY));
    for key in keys {
        html.push_str(&filter_chip(key, key, key == active_key));
    }
    html
}

fn filter_chip(key: &str, label: &str, active: bool) -> String {
    let class = if active {
        "filter-chip active"
    } else {
        "filter-chip"
    };
    format!(
        r#"  <button class="{}" data-filter="{}" onclick="filterNews('{}')">{}</button>
"#,
        class,
        html_escape(key),
        html_escape(key),
        html_escape(label)
    )
}

#[cfg(test)]
#[path = "news_test.rs"]
mod tests;
