//! molt categories コマンド
//!
//! フィルタチップの元になるカテゴリ一覧を表示する。

use crate::catalog;
use crate::commands::print_warnings;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::Path;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args, data_dir: &Path) -> Result<(), String> {
    let catalog = catalog::load(data_dir);
    print_warnings(&catalog.warnings);

    if args.json {
        return serde_json::to_string_pretty(&catalog.categories)
            .map(|json| println!("{json}"))
            .map_err(|e| format!("Failed to serialize categories: {}", e));
    }

    if catalog.categories.is_empty() {
        println!("No categories loaded");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Key", "Label", "Icon", "Skills"]);

    for category in &catalog.categories {
        let count = catalog.skill_count_for(&category.key);
        table.add_row(vec![
            category.key.clone(),
            category.label.clone(),
            category.icon.clone().unwrap_or_else(|| "-".to_string()),
            count.to_string(),
        ]);
    }

    println!("{table}");

    Ok(())
}
