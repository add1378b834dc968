use super::*;
use crate::catalog::{NewsItem, SkillItem};

fn make_news(title: &str, category: &str) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        source: "Moltbot Blog".to_string(),
        url: "https://molt.bot/blog".to_string(),
        image_url: None,
        category: category.to_string(),
        published_at: None,
    }
}

fn make_skill(name: &str, category: &str) -> SkillItem {
    SkillItem {
        name: name.to_string(),
        description: "说明".to_string(),
        category: category.to_string(),
        github_url: "https://github.com/moltbot/skill".to_string(),
        install_command: format!("npx molthub@latest install {}", name),
    }
}

#[test]
fn all_key_returns_everything() {
    let items = vec![make_news("一", "新闻"), make_news("二", "教程")];
    let result = filter_by_category(&items, ALL_KEY);
    assert_eq!(result.len(), 2);
}

#[test]
fn category_key_keeps_only_matches() {
    let items = vec![
        make_skill("天气查询", "生活助手"),
        make_skill("日程助手", "生产力"),
        make_skill("番茄钟", "生产力"),
    ];
    let result = filter_by_category(&items, "生产力");
    assert_eq!(result.len(), 2);
    assert!(result.iter().all(|s| s.category == "生产力"));
}

#[test]
fn relative_order_is_preserved() {
    let items = vec![
        make_news("三", "新闻"),
        make_news("一", "教程"),
        make_news("二", "新闻"),
    ];
    let result = filter_by_category(&items, "新闻");
    let titles: Vec<&str> = result.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["三", "二"]);
}

#[test]
fn unknown_key_returns_empty() {
    let items = vec![make_news("一", "新闻")];
    assert!(filter_by_category(&items, "不存在").is_empty());
}

#[test]
fn empty_collection_returns_empty() {
    let items: Vec<NewsItem> = Vec::new();
    assert!(filter_by_category(&items, ALL_KEY).is_empty());
    assert!(filter_by_category(&items, "新闻").is_empty());
}

#[test]
fn search_empty_query_returns_all() {
    let items = vec![make_skill("天气查询", "生活助手")];
    let refs: Vec<&SkillItem> = items.iter().collect();
    assert_eq!(search_items(&refs, "").len(), 1);
}

#[test]
fn search_matches_name_and_description_case_insensitive() {
    let items = vec![
        make_skill("GitHub 趋势", "开发工具"),
        make_skill("天气查询", "生活助手"),
    ];
    let refs: Vec<&SkillItem> = items.iter().collect();

    let by_name = search_items(&refs, "github");
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "GitHub 趋势");

    let by_description = search_items(&refs, "说明");
    assert_eq!(by_description.len(), 2);
}

#[test]
fn search_no_match_returns_empty() {
    let items = vec![make_news("一", "新闻")];
    let refs: Vec<&NewsItem> = items.iter().collect();
    assert!(search_items(&refs, "xyz").is_empty());
}
