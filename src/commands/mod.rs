use crate::catalog;
use crate::cli::{Cli, Command};
use owo_colors::OwoColorize;

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    let data_dir = catalog::resolve_data_dir(cli.data_dir.as_deref());

    match cli.command {
        Command::News(args) => news::run(args, &data_dir).await,
        Command::Skills(args) => skills::run(args, &data_dir).await,
        Command::Categories(args) => categories::run(args, &data_dir).await,
        Command::Info(args) => info::run(args, &data_dir).await,
        Command::Copy(args) => copy::run(args, &data_dir).await,
        Command::Fetch(args) => fetch::run(args, &data_dir).await,
        Command::Build(args) => build::run(args, &data_dir).await,
        Command::Validate(args) => validate::run(args, &data_dir).await,
        Command::Browse(args) => browse::run(args, &data_dir).await,
    }
}

/// ローダ警告を stderr へ出力する
pub(crate) fn print_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", "warning:".yellow(), warning);
    }
}

pub mod news;
pub mod skills;
pub mod categories;
pub mod info;
pub mod copy;
pub mod fetch;
pub mod build;
pub mod validate;
pub mod browse;
