//! データローダ
//!
//! データディレクトリ配下の JSON リソースを型付きレコードへ読み込む。
//! 個々のリソースの読み込み・パース失敗は警告として記録して処理を続行し、
//! ローダ境界の外へはエラーを出さない。

use super::fallback;
use super::model::{Category, NewsItem, SkillItem};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// データディレクトリの既定パス
pub const DEFAULT_DATA_DIR: &str = "data";

/// データディレクトリ指定用の環境変数
pub const DATA_DIR_ENV: &str = "MOLT_DATA_DIR";

/// 読み込み済みのハブコレクション
#[derive(Debug, Default)]
pub struct Catalog {
    pub news: Vec<NewsItem>,
    pub skills: Vec<SkillItem>,
    pub categories: Vec<Category>,
    /// 読み込み中に発生した非致命的な警告
    pub warnings: Vec<String>,
}

impl Catalog {
    /// スキル名で検索（完全一致を優先し、なければ大文字小文字を無視）
    pub fn find_skill(&self, name: &str) -> Option<&SkillItem> {
        self.skills
            .iter()
            .find(|s| s.name == name)
            .or_else(|| {
                let lower = name.to_lowercase();
                self.skills.iter().find(|s| s.name.to_lowercase() == lower)
            })
    }

    /// ニュースのカテゴリキー一覧（初出順、重複なし）
    pub fn news_category_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for item in &self.news {
            if !keys.iter().any(|k| k == &item.category) {
                keys.push(item.category.clone());
            }
        }
        keys
    }

    /// 指定カテゴリのスキル件数
    pub fn skill_count_for(&self, key: &str) -> usize {
        self.skills.iter().filter(|s| s.category == key).count()
    }
}

/// データディレクトリの解決
///
/// 優先順位: `--data-dir` フラグ > `MOLT_DATA_DIR` 環境変数 > `./data`
pub fn resolve_data_dir(flag: Option<&Path>) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Some(dir) = std::env::var(DATA_DIR_ENV).ok().filter(|s| !s.is_empty()) {
        return PathBuf::from(dir);
    }
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// データディレクトリ全体を読み込む
///
/// コレクションが 1 件も得られなかった場合は組み込みデータセットへ
/// フォールバックする（コレクション単位）。
pub fn load(data_dir: &Path) -> Catalog {
    let mut catalog = Catalog::default();

    if !data_dir.is_dir() {
        catalog
            .warnings
            .push(format!("data directory not found: {}", data_dir.display()));
    } else {
        load_collection_dir(
            &data_dir.join("news"),
            parse_news_file,
            &mut catalog.news,
            &mut catalog.warnings,
        );
        load_collection_dir(
            &data_dir.join("skills"),
            parse_skills_file,
            &mut catalog.skills,
            &mut catalog.warnings,
        );

        let categories_path = data_dir.join("categories.json");
        match std::fs::read_to_string(&categories_path) {
            Ok(content) => {
                let (mut items, warnings) =
                    parse_categories_file("categories.json", &content);
                catalog.categories.append(&mut items);
                catalog.warnings.extend(warnings);
            }
            Err(e) => catalog
                .warnings
                .push(format!("categories.json: {}", e)),
        }
    }

    // 新しい記事を先頭へ（安定ソート、日付なしは末尾）
    catalog
        .news
        .sort_by(|a, b| b.published_date().cmp(&a.published_date()));

    // フォールバック（コレクション単位で空のときのみ）
    if catalog.news.is_empty() {
        catalog.news = fallback::news(&mut catalog.warnings);
        catalog
            .warnings
            .push("no news loaded, using embedded dataset".to_string());
    }
    if catalog.skills.is_empty() {
        catalog.skills = fallback::skills(&mut catalog.warnings);
        catalog
            .warnings
            .push("no skills loaded, using embedded dataset".to_string());
    }
    if catalog.categories.is_empty() {
        catalog.categories = fallback::categories(&mut catalog.warnings);
    }

    catalog
}

/// サブディレクトリ直下の *.json をファイル名順に読み込んでマージする
fn load_collection_dir<T>(
    dir: &Path,
    parse: fn(&str, &str) -> (Vec<T>, Vec<String>),
    out: &mut Vec<T>,
    warnings: &mut Vec<String>,
) {
    if !dir.is_dir() {
        warnings.push(format!("directory not found: {}", dir.display()));
        return;
    }

    for entry in WalkDir::new(dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !path.extension().map_or(false, |e| e == "json") {
            continue;
        }
        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        match std::fs::read_to_string(path) {
            Ok(content) => {
                let (mut items, file_warnings) = parse(&label, &content);
                out.append(&mut items);
                warnings.extend(file_warnings);
            }
            Err(e) => warnings.push(format!("{}: {}", label, e)),
        }
    }
}

/// ニュースファイル（素のリスト、または `items` キーを持つオブジェクト）
#[derive(Deserialize)]
#[serde(untagged)]
enum NewsFile {
    Wrapped { items: Vec<Value> },
    Bare(Vec<Value>),
}

/// スキルファイル（素のリスト、または `skills` キーを持つオブジェクト）
#[derive(Deserialize)]
#[serde(untagged)]
enum SkillsFile {
    Wrapped { skills: Vec<Value> },
    Bare(Vec<Value>),
}

/// カテゴリファイル（素のリスト、または `categories` キーを持つオブジェクト）
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoriesFile {
    Wrapped { categories: Vec<Value> },
    Bare(Vec<Value>),
}

/// ニュースファイルをパースして有効なレコードのみ返す
pub fn parse_news_file(label: &str, content: &str) -> (Vec<NewsItem>, Vec<String>) {
    let values = match serde_json::from_str::<NewsFile>(content) {
        Ok(NewsFile::Wrapped { items }) => items,
        Ok(NewsFile::Bare(items)) => items,
        Err(e) => return (Vec::new(), vec![format!("{}: {}", label, e)]),
    };
    collect_entries(label, values, |item: &NewsItem| item.validate())
}

/// スキルファイルをパースして有効なレコードのみ返す
pub fn parse_skills_file(label: &str, content: &str) -> (Vec<SkillItem>, Vec<String>) {
    let values = match serde_json::from_str::<SkillsFile>(content) {
        Ok(SkillsFile::Wrapped { skills }) => skills,
        Ok(SkillsFile::Bare(skills)) => skills,
        Err(e) => return (Vec::new(), vec![format!("{}: {}", label, e)]),
    };
    collect_entries(label, values, |skill: &SkillItem| skill.validate())
}

/// カテゴリファイルをパースして有効なレコードのみ返す
pub fn parse_categories_file(label: &str, content: &str) -> (Vec<Category>, Vec<String>) {
    let values = match serde_json::from_str::<CategoriesFile>(content) {
        Ok(CategoriesFile::Wrapped { categories }) => categories,
        Ok(CategoriesFile::Bare(categories)) => categories,
        Err(e) => return (Vec::new(), vec![format!("{}: {}", label, e)]),
    };
    collect_entries(label, values, |category: &Category| category.validate())
}

/// エントリ単位のデシリアライズと検証
///
/// 不正なエントリは警告に落とし、残りのエントリで処理を続ける。
fn collect_entries<T: DeserializeOwned>(
    label: &str,
    values: Vec<Value>,
    validate: fn(&T) -> std::result::Result<(), String>,
) -> (Vec<T>, Vec<String>) {
    let mut items = Vec::new();
    let mut warnings = Vec::new();

    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<T>(value) {
            Ok(item) => match validate(&item) {
                Ok(()) => items.push(item),
                Err(reason) => {
                    warnings.push(format!("{}[{}]: {}", label, index, reason));
                }
            },
            Err(e) => warnings.push(format!("{}[{}]: {}", label, index, e)),
        }
    }

    (items, warnings)
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
