use super::*;
use crate::catalog::Category;
use crate::clipboard::MockClipboard;

fn make_catalog() -> Catalog {
    Catalog {
        news: vec![
            news("Moltbot 0.2 发布", "发布"),
            news("五分钟上手技能开发", "教程"),
            news("社区精选", "社区"),
        ],
        skills: vec![
            skill("天气查询", "生活助手"),
            skill("日程助手", "生产力"),
            skill("番茄钟", "生产力"),
        ],
        categories: vec![category("生产力"), category("生活助手")],
        warnings: Vec::new(),
    }
}

fn news(title: &str, cat: &str) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        source: "Moltbot Blog".to_string(),
        url: "https://molt.bot/blog/x".to_string(),
        image_url: None,
        category: cat.to_string(),
        published_at: None,
    }
}

fn skill(name: &str, cat: &str) -> SkillItem {
    SkillItem {
        name: name.to_string(),
        description: "说明".to_string(),
        category: cat.to_string(),
        github_url: "https://github.com/moltbot/skill-x".to_string(),
        install_command: format!("npx molthub@latest install {}", name),
    }
}

fn category(key: &str) -> Category {
    Category {
        key: key.to_string(),
        label: key.to_string(),
        icon: None,
        count: None,
    }
}

fn make_model() -> Model {
    Model::with_clipboard(
        make_catalog(),
        SiteConfig::default(),
        Box::new(MockClipboard::new()),
    )
}

#[test]
fn initial_state_is_news_tab_all_filter() {
    let model = make_model();
    assert_eq!(model.state.active_tab(), Tab::News);
    assert_eq!(model.state.news_filter(), ALL_KEY);
    assert_eq!(model.visible_news().len(), 3);
    assert_eq!(model.news_list.selected(), Some(0));
}

#[test]
fn next_tab_switches_to_skills() {
    let mut model = make_model();
    update(&mut model, Msg::NextTab);

    assert_eq!(model.state.active_tab(), Tab::Skills);
    assert!(model.state.is_visible(Tab::Skills));
    assert!(!model.state.is_visible(Tab::News));
}

#[test]
fn filter_keys_follow_active_tab() {
    let mut model = make_model();
    assert_eq!(model.filter_keys(), vec!["all", "发布", "教程", "社区"]);

    update(&mut model, Msg::NextTab);
    assert_eq!(model.filter_keys(), vec!["all", "生产力", "生活助手"]);
}

#[test]
fn cycle_filter_narrows_news() {
    let mut model = make_model();
    update(&mut model, Msg::NextFilter);

    assert_eq!(model.state.news_filter(), "发布");
    assert_eq!(model.visible_news().len(), 1);
    assert_eq!(model.news_list.selected(), Some(0));
}

#[test]
fn cycle_filter_wraps_backwards_to_last_key() {
    let mut model = make_model();
    update(&mut model, Msg::PrevFilter);
    assert_eq!(model.state.news_filter(), "社区");
}

#[test]
fn skill_filter_keeps_only_matching_category() {
    let mut model = make_model();
    update(&mut model, Msg::NextTab);
    update(&mut model, Msg::NextFilter);

    assert_eq!(model.state.skill_filter(), "生产力");
    let visible = model.visible_skills();
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|s| s.category == "生产力"));
}

#[test]
fn news_filter_survives_tab_roundtrip() {
    let mut model = make_model();
    update(&mut model, Msg::NextFilter);
    update(&mut model, Msg::NextTab);
    update(&mut model, Msg::NextTab);

    assert_eq!(model.state.active_tab(), Tab::News);
    assert_eq!(model.state.news_filter(), "发布");
}

#[test]
fn selection_moves_and_clamps() {
    let mut model = make_model();
    update(&mut model, Msg::SelectNext);
    assert_eq!(model.news_list.selected(), Some(1));

    update(&mut model, Msg::SelectNext);
    update(&mut model, Msg::SelectNext);
    assert_eq!(model.news_list.selected(), Some(2));

    update(&mut model, Msg::SelectPrev);
    assert_eq!(model.news_list.selected(), Some(1));
}

#[test]
fn search_narrows_and_clamps_selection() {
    let mut model = make_model();
    update(&mut model, Msg::SelectNext);
    update(&mut model, Msg::SelectNext);
    update(&mut model, Msg::SearchFocus);
    for c in "社区".chars() {
        update(&mut model, Msg::SearchInput(c));
    }

    assert_eq!(model.visible_news().len(), 1);
    assert_eq!(model.news_list.selected(), Some(0));

    update(&mut model, Msg::SearchClear);
    assert_eq!(model.visible_news().len(), 3);
}

#[test]
fn search_with_no_match_clears_selection() {
    let mut model = make_model();
    update(&mut model, Msg::SearchFocus);
    update(&mut model, Msg::SearchInput('x'));
    update(&mut model, Msg::SearchInput('y'));

    assert!(model.visible_news().is_empty());
    assert_eq!(model.news_list.selected(), None);
}

#[test]
fn copy_install_on_skills_tab_sets_notice() {
    let mut model = make_model();
    update(&mut model, Msg::NextTab);
    update(&mut model, Msg::CopyInstall);

    let notice = model.notice.as_deref().unwrap();
    assert!(notice.contains("已复制"));
    assert!(notice.contains("npx molthub@latest install 天气查询"));
}

#[test]
fn copy_install_failure_is_nonfatal_notice() {
    let mut model = Model::with_clipboard(
        make_catalog(),
        SiteConfig::default(),
        Box::new(MockClipboard::failing()),
    );
    update(&mut model, Msg::NextTab);
    update(&mut model, Msg::CopyInstall);

    assert!(model.notice.as_deref().unwrap().contains("复制失败"));
    assert!(!model.should_quit);
}

#[test]
fn copy_install_on_news_tab_is_noop() {
    let mut model = make_model();
    update(&mut model, Msg::CopyInstall);
    assert!(model.notice.is_none());
}

#[test]
fn quit_key_maps_to_quit() {
    let model = make_model();
    assert!(matches!(model.key_to_msg(KeyCode::Char('q')), Some(Msg::Quit)));
    assert!(matches!(model.key_to_msg(KeyCode::Tab), Some(Msg::NextTab)));
}

#[test]
fn search_focus_swallows_q() {
    let mut model = make_model();
    update(&mut model, Msg::SearchFocus);
    assert!(matches!(
        model.key_to_msg(KeyCode::Char('q')),
        Some(Msg::SearchInput('q'))
    ));
}
