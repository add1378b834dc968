//! molt validate コマンド
//!
//! データファイルを検証し、不正なファイル・エントリを報告する。
//! ローダと違いフォールバックせず、問題があれば非ゼロ終了する。

use crate::catalog::{parse_categories_file, parse_news_file, parse_skills_file, Category};
use crate::config::SiteConfig;
use crate::error::HubError;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Parser)]
pub struct Args {}

/// 1ファイル分の検証結果
struct FileReport {
    label: String,
    entry_count: usize,
    problems: Vec<String>,
}

pub async fn run(_args: Args, data_dir: &Path) -> Result<(), String> {
    if !data_dir.is_dir() {
        return Err(HubError::DataDir(data_dir.display().to_string()).to_string());
    }

    let mut reports: Vec<FileReport> = Vec::new();
    let mut skills: Vec<crate::catalog::SkillItem> = Vec::new();
    let mut categories: Vec<Category> = Vec::new();

    // config.json（欠損は許容、破損はエラー）
    let config_path = data_dir.join("config.json");
    if config_path.exists() {
        let report = match std::fs::read_to_string(&config_path) {
            Ok(content) => match SiteConfig::parse(&content) {
                Ok(_) => FileReport {
                    label: "config.json".to_string(),
                    entry_count: 1,
                    problems: Vec::new(),
                },
                Err(e) => FileReport {
                    label: "config.json".to_string(),
                    entry_count: 0,
                    problems: vec![e],
                },
            },
            Err(e) => FileReport {
                label: "config.json".to_string(),
                entry_count: 0,
                problems: vec![e.to_string()],
            },
        };
        reports.push(report);
    } else {
        println!("{} config.json missing (defaults will be used)", "•".yellow());
    }

    // categories.json
    let categories_path = data_dir.join("categories.json");
    match std::fs::read_to_string(&categories_path) {
        Ok(content) => {
            let (items, problems) = parse_categories_file("categories.json", &content);
            reports.push(FileReport {
                label: "categories.json".to_string(),
                entry_count: items.len(),
                problems,
            });
            categories = items;
        }
        Err(e) => reports.push(FileReport {
            label: "categories.json".to_string(),
            entry_count: 0,
            problems: vec![e.to_string()],
        }),
    }

    // news/*.json
    for (label, content) in read_json_files(&data_dir.join("news")) {
        let (items, problems) = parse_news_file(&label, &content);
        reports.push(FileReport {
            label,
            entry_count: items.len(),
            problems,
        });
    }

    // skills/*.json
    for (label, content) in read_json_files(&data_dir.join("skills")) {
        let (items, problems) = parse_skills_file(&label, &content);
        reports.push(FileReport {
            label,
            entry_count: items.len(),
            problems,
        });
        skills.extend(items);
    }

    // スキルのカテゴリが categories.json に存在するか
    let mut cross_problems: Vec<String> = Vec::new();
    for skill in &skills {
        if !categories.iter().any(|c| c.key == skill.category) {
            cross_problems.push(format!(
                "skill '{}' references unknown category '{}'",
                skill.name, skill.category
            ));
        }
    }

    // 結果出力
    let mut error_count = 0usize;
    for report in &reports {
        if report.problems.is_empty() {
            println!(
                "{} {} ({} entries)",
                "✓".green(),
                report.label,
                report.entry_count
            );
        } else {
            error_count += report.problems.len();
            println!("{} {}", "✗".red(), report.label);
            for problem in &report.problems {
                println!("    {}", problem);
            }
        }
    }
    for problem in &cross_problems {
        error_count += 1;
        println!("{} {}", "✗".red(), problem);
    }

    if error_count > 0 {
        return Err(format!("{} problem(s) found", error_count));
    }

    println!("{} All data files are valid", "✓".green());
    Ok(())
}

/// サブディレクトリ直下の *.json を (ファイル名, 内容) で列挙する
fn read_json_files(dir: &Path) -> Vec<(String, String)> {
    let mut files = Vec::new();
    if !dir.is_dir() {
        return files;
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
        if let Ok(content) = std::fs::read_to_string(path) {
            files.push((label, content));
        }
    }

    files
}
