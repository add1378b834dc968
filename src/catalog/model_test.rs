use super::*;

fn valid_news() -> NewsItem {
    NewsItem {
        title: "Moltbot 0.2 发布".to_string(),
        source: "Moltbot Blog".to_string(),
        url: "https://molt.bot/blog/release-0-2".to_string(),
        image_url: Some("https://molt.bot/img/news/release-0-2.png".to_string()),
        category: "发布".to_string(),
        published_at: Some("2025-07-20".to_string()),
    }
}

fn valid_skill() -> SkillItem {
    SkillItem {
        name: "天气查询".to_string(),
        description: "实时天气与未来三天预报".to_string(),
        category: "生活助手".to_string(),
        github_url: "https://github.com/moltbot/skill-weather".to_string(),
        install_command: "npx molthub@latest install weather".to_string(),
    }
}

#[test]
fn valid_news_item_passes() {
    assert!(valid_news().validate().is_ok());
}

#[test]
fn news_empty_title_rejected() {
    let mut item = valid_news();
    item.title = "  ".to_string();
    assert!(item.validate().is_err());
}

#[test]
fn news_non_http_url_rejected() {
    let mut item = valid_news();
    item.url = "ftp://molt.bot/blog".to_string();
    assert!(item.validate().is_err());
}

#[test]
fn news_missing_image_is_ok() {
    let mut item = valid_news();
    item.image_url = None;
    assert!(item.validate().is_ok());
}

#[test]
fn news_bad_date_rejected() {
    let mut item = valid_news();
    item.published_at = Some("昨天".to_string());
    assert!(item.validate().is_err());
}

#[test]
fn news_rfc3339_date_parses() {
    let mut item = valid_news();
    item.published_at = Some("2025-07-20T08:30:00Z".to_string());
    assert!(item.validate().is_ok());
    assert_eq!(
        item.published_date(),
        NaiveDate::from_ymd_opt(2025, 7, 20)
    );
}

#[test]
fn valid_skill_passes() {
    assert!(valid_skill().validate().is_ok());
}

#[test]
fn skill_empty_install_command_rejected() {
    let mut skill = valid_skill();
    skill.install_command = String::new();
    assert!(skill.validate().is_err());
}

#[test]
fn skill_bad_github_url_rejected() {
    let mut skill = valid_skill();
    skill.github_url = "github.com/moltbot/skill-weather".to_string();
    assert!(skill.validate().is_err());
}

#[test]
fn category_requires_key_and_label() {
    let category = Category {
        key: "生产力".to_string(),
        label: "生产力".to_string(),
        icon: Some("⚡".to_string()),
        count: None,
    };
    assert!(category.validate().is_ok());

    let empty_key = Category {
        key: String::new(),
        label: "生产力".to_string(),
        icon: None,
        count: None,
    };
    assert!(empty_key.validate().is_err());
}

#[test]
fn news_item_json_roundtrip_keeps_optional_fields_out() {
    let mut item = valid_news();
    item.image_url = None;
    item.published_at = None;
    let json = serde_json::to_string(&item).unwrap();
    assert!(!json.contains("image_url"));
    assert!(!json.contains("published_at"));
}
