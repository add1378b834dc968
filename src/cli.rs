use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{
    browse, build, categories, copy, fetch, info, news, skills, validate,
};

#[derive(Debug, Parser)]
#[command(name = "molt")]
#[command(about = "Moltbot Hub CLI", long_about = None)]
pub struct Cli {
    /// データディレクトリ（既定: ./data、MOLT_DATA_DIR でも指定可）
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// ニュース一覧を表示
    News(news::Args),

    /// スキルプラグイン一覧を表示
    Skills(skills::Args),

    /// カテゴリ一覧を表示
    Categories(categories::Args),

    /// スキルの詳細表示
    Info(info::Args),

    /// インストールコマンドをクリップボードへコピー
    Copy(copy::Args),

    /// 設定されたフィードを取得してデータを更新
    Fetch(fetch::Args),

    /// 静的サイトを生成
    Build(build::Args),

    /// データファイルの検証
    Validate(validate::Args),

    /// TUI でハブを閲覧
    Browse(browse::Args),
}
