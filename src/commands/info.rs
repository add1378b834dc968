//! molt info コマンド
//!
//! スキルの詳細情報を表示する。

use crate::catalog;
use crate::commands::print_warnings;
use crate::error::HubError;
use clap::{Parser, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::Path;

/// 出力形式
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Parser)]
pub struct Args {
    /// スキル名
    pub name: String,

    /// 出力形式
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: OutputFormat,
}

pub async fn run(args: Args, data_dir: &Path) -> Result<(), String> {
    let catalog = catalog::load(data_dir);
    print_warnings(&catalog.warnings);

    let skill = catalog
        .find_skill(&args.name)
        .ok_or_else(|| HubError::SkillNotFound(args.name.clone()).to_string())?;

    match args.format {
        OutputFormat::Table => print_table(skill),
        OutputFormat::Json => {
            serde_json::to_string_pretty(skill)
                .map(|json| println!("{json}"))
                .map_err(|e| format!("Failed to serialize to JSON: {}", e))?;
        }
    }

    Ok(())
}

fn print_table(skill: &catalog::SkillItem) {
    println!("Skill Information");
    println!("=================");
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec!["Name", &skill.name]);
    table.add_row(vec!["Category", &skill.category]);
    table.add_row(vec!["Description", &skill.description]);

    println!("{table}");
    println!();

    println!("Installation");
    println!("------------");

    let mut install_table = Table::new();
    install_table.load_preset(UTF8_FULL);
    install_table.set_header(vec!["Field", "Value"]);

    install_table.add_row(vec!["Command", &skill.install_command]);
    install_table.add_row(vec!["GitHub", &skill.github_url]);

    println!("{install_table}");
}
