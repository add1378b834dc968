use super::*;

#[test]
fn truncate_keeps_short_titles() {
    assert_eq!(truncate("短标题", 48), "短标题");
}

#[test]
fn truncate_cuts_long_titles_by_chars() {
    let long = "很".repeat(60);
    let result = truncate(&long, 48);
    assert_eq!(result.chars().count(), 49);
    assert!(result.ends_with('…'));
}

#[test]
fn truncate_counts_chars_not_bytes() {
    // マルチバイト文字の途中で切らない
    let title = "Moltbot 发布新版本公告";
    let result = truncate(title, 10);
    assert!(result.ends_with('…'));
    assert_eq!(result.chars().count(), 11);
}
