//! molt skills コマンド
//!
//! スキルプラグイン一覧を表示する。

use crate::catalog::{self, SkillItem};
use crate::commands::print_warnings;
use crate::error::HubError;
use crate::filter::{filter_by_category, ALL_KEY};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::Path;

#[derive(Debug, Parser)]
pub struct Args {
    /// Filter by category key (must exist in categories.json)
    #[arg(long)]
    pub category: Option<String>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only skill names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub async fn run(args: Args, data_dir: &Path) -> Result<(), String> {
    let catalog = catalog::load(data_dir);
    print_warnings(&catalog.warnings);

    let key = args.category.as_deref().unwrap_or(ALL_KEY);
    if key != ALL_KEY && !catalog.categories.iter().any(|c| c.key == key) {
        return Err(HubError::CategoryNotFound(key.to_string()).to_string());
    }

    let total_count = catalog.skills.len();
    let filtered = filter_by_category(&catalog.skills, key);

    if args.json {
        print_json(&filtered)?;
    } else if args.simple {
        print_simple(&filtered, total_count);
    } else {
        print_table(&filtered, total_count);
    }

    Ok(())
}

fn print_table(skills: &[&SkillItem], total_count: usize) {
    if skills.is_empty() {
        if total_count == 0 {
            println!("No skills loaded");
        } else {
            println!("No skills matched");
        }
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Category", "Description", "Install"]);

    for skill in skills {
        table.add_row(vec![
            skill.name.clone(),
            skill.category.clone(),
            truncate(&skill.description, 36),
            skill.install_command.clone(),
        ]);
    }

    println!("{table}");
    println!("{} skill(s)", skills.len());
}

fn print_json(skills: &[&SkillItem]) -> Result<(), String> {
    serde_json::to_string_pretty(skills)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize skills: {}", e))
}

fn print_simple(skills: &[&SkillItem], total_count: usize) {
    if skills.is_empty() {
        if total_count == 0 {
            println!("No skills loaded");
        } else {
            println!("No skills matched");
        }
        return;
    }
    for skill in skills {
        println!("{}", skill.name);
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}…", truncated)
}
