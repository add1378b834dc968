//! 組み込みフォールバックデータセット
//!
//! データディレクトリが欠損・全滅している場合でも UI を空にしないための
//! 最小データ。ビルド時にバイナリへ埋め込まれる。

use super::loader::{parse_categories_file, parse_news_file, parse_skills_file};
use super::model::{Category, NewsItem, SkillItem};

const NEWS_JSON: &str = include_str!("../../assets/data/news.json");
const SKILLS_JSON: &str = include_str!("../../assets/data/skills.json");
const CATEGORIES_JSON: &str = include_str!("../../assets/data/categories.json");

pub fn news(warnings: &mut Vec<String>) -> Vec<NewsItem> {
    let (items, parse_warnings) = parse_news_file("embedded:news.json", NEWS_JSON);
    warnings.extend(parse_warnings);
    items
}

pub fn skills(warnings: &mut Vec<String>) -> Vec<SkillItem> {
    let (items, parse_warnings) = parse_skills_file("embedded:skills.json", SKILLS_JSON);
    warnings.extend(parse_warnings);
    items
}

pub fn categories(warnings: &mut Vec<String>) -> Vec<Category> {
    let (items, parse_warnings) =
        parse_categories_file("embedded:categories.json", CATEGORIES_JSON);
    warnings.extend(parse_warnings);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_is_valid() {
        let mut warnings = Vec::new();
        let news = news(&mut warnings);
        let skills = skills(&mut warnings);
        let categories = categories(&mut warnings);

        assert!(warnings.is_empty(), "warnings: {:?}", warnings);
        assert!(!news.is_empty());
        assert!(!skills.is_empty());
        assert!(!categories.is_empty());
    }

    #[test]
    fn embedded_skills_reference_known_categories() {
        let mut warnings = Vec::new();
        let skills = skills(&mut warnings);
        let categories = categories(&mut warnings);

        for skill in &skills {
            assert!(
                categories.iter().any(|c| c.key == skill.category),
                "unknown category: {}",
                skill.category
            );
        }
    }
}
