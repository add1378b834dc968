use super::*;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn write_file(dir: &std::path::Path, name: &str, content: &str) {
    if let Some(parent) = dir.join(name).parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(dir.join(name), content).unwrap();
}

fn news_entry(title: &str, category: &str, date: &str) -> String {
    format!(
        r#"{{"title":"{}","source":"Moltbot Blog","url":"https://molt.bot/blog/x","category":"{}","published_at":"{}"}}"#,
        title, category, date
    )
}

#[test]
fn loads_wrapped_and_bare_news_files_in_name_order() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "news/a.json",
        &format!(r#"{{"items":[{}]}}"#, news_entry("第一篇", "新闻", "2025-07-01")),
    );
    write_file(
        dir.path(),
        "news/b.json",
        &format!("[{}]", news_entry("第二篇", "社区", "2025-07-01")),
    );
    write_file(dir.path(), "skills/skills.json", r#"{"skills":[]}"#);
    write_file(dir.path(), "categories.json", r#"{"categories":[]}"#);

    let catalog = load(dir.path());

    let titles: Vec<&str> = catalog.news.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["第一篇", "第二篇"]);
}

#[test]
fn news_sorted_newest_first() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "news/a.json",
        &format!(
            "[{},{}]",
            news_entry("旧闻", "新闻", "2025-06-01"),
            news_entry("新闻稿", "新闻", "2025-07-15")
        ),
    );

    let catalog = load(dir.path());
    assert_eq!(catalog.news[0].title, "新闻稿");
    assert_eq!(catalog.news[1].title, "旧闻");
}

#[test]
fn invalid_file_is_skipped_with_warning() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "news/ok.json", &format!("[{}]", news_entry("好文", "新闻", "2025-07-01")));
    write_file(dir.path(), "news/broken.json", "{ not json");

    let catalog = load(dir.path());

    assert_eq!(catalog.news.len(), 1);
    assert!(catalog
        .warnings
        .iter()
        .any(|w| w.contains("broken.json")));
}

#[test]
fn invalid_entry_is_skipped_entry_wise() {
    let (items, warnings) = parse_news_file(
        "mixed.json",
        &format!(
            r#"[{}, {{"title":"","source":"x","url":"https://molt.bot","category":"新闻"}}]"#,
            news_entry("有效", "新闻", "2025-07-01")
        ),
    );

    assert_eq!(items.len(), 1);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("mixed.json[1]"));
}

#[test]
fn skills_file_accepts_both_shapes() {
    let skill = r#"{"name":"天气查询","description":"天气","category":"生活助手","github_url":"https://github.com/moltbot/skill-weather","install_command":"npx molthub@latest install weather"}"#;

    let (wrapped, _) = parse_skills_file("a.json", &format!(r#"{{"skills":[{}]}}"#, skill));
    let (bare, _) = parse_skills_file("b.json", &format!("[{}]", skill));

    assert_eq!(wrapped.len(), 1);
    assert_eq!(bare, wrapped);
}

#[test]
fn empty_data_dir_falls_back_to_embedded_dataset() {
    let dir = TempDir::new().unwrap();

    let catalog = load(dir.path());

    assert!(!catalog.news.is_empty());
    assert!(!catalog.skills.is_empty());
    assert!(!catalog.categories.is_empty());
    assert!(catalog
        .warnings
        .iter()
        .any(|w| w.contains("embedded dataset")));
}

#[test]
fn missing_data_dir_is_nonfatal() {
    let catalog = load(std::path::Path::new("/nonexistent/molt-data"));
    assert!(!catalog.news.is_empty());
    assert!(catalog.warnings.iter().any(|w| w.contains("not found")));
}

#[test]
fn find_skill_is_case_insensitive_fallback() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "skills/skills.json",
        r#"[{"name":"Weather","description":"天气","category":"生活助手","github_url":"https://github.com/moltbot/skill-weather","install_command":"npx molthub@latest install weather"}]"#,
    );

    let catalog = load(dir.path());

    assert!(catalog.find_skill("Weather").is_some());
    assert!(catalog.find_skill("weather").is_some());
    assert!(catalog.find_skill("缺失").is_none());
}

#[test]
fn news_category_keys_are_distinct_in_first_appearance_order() {
    let dir = TempDir::new().unwrap();
    write_file(
        dir.path(),
        "news/a.json",
        &format!(
            "[{},{},{}]",
            news_entry("一", "新闻", "2025-07-03"),
            news_entry("二", "教程", "2025-07-02"),
            news_entry("三", "新闻", "2025-07-01")
        ),
    );

    let catalog = load(dir.path());
    assert_eq!(catalog.news_category_keys(), vec!["新闻", "教程"]);
}

#[test]
#[serial]
fn resolve_data_dir_priority() {
    std::env::remove_var(DATA_DIR_ENV);
    assert_eq!(
        resolve_data_dir(None),
        std::path::PathBuf::from(DEFAULT_DATA_DIR)
    );

    std::env::set_var(DATA_DIR_ENV, "/tmp/molt-data");
    assert_eq!(
        resolve_data_dir(None),
        std::path::PathBuf::from("/tmp/molt-data")
    );
    assert_eq!(
        resolve_data_dir(Some(std::path::Path::new("/explicit"))),
        std::path::PathBuf::from("/explicit")
    );
    std::env::remove_var(DATA_DIR_ENV);
}
