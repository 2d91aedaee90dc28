#![cfg_attr(not(test), warn(unused_crate_dependencies))]

use std::process::exit;

use args::StanzaArgs;
use clap::Parser;
use colored::Colorize;

mod args;
mod commands;

#[tokio::main]
async fn main() {
    let args = StanzaArgs::parse();
    let _ = args.init_logging();

    if let Err(err) = commands::run(args).await {
        eprintln!("{}: {err:?}", "error".red().bold());
        exit(1);
    }
}
