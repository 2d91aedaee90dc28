use core::fmt;

use anyhow::Result;
use clap::Subcommand;
use tracing::info_span;

pub(crate) mod check;
pub(crate) mod inspect;
pub(crate) mod run;

use check::CheckArgs;
use inspect::InspectArgs;
use run::RunArgs;

use crate::args::StanzaArgs;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Run a scenario script against the world")]
    Run(Box<RunArgs>),
    #[command(about = "Parse a scenario script without executing it")]
    Check(Box<CheckArgs>),
    #[command(about = "List the contracts recorded in the world")]
    Inspect(Box<InspectArgs>),
}

impl fmt::Display for Commands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Commands::Run(_) => write!(f, "Run"),
            Commands::Check(_) => write!(f, "Check"),
            Commands::Inspect(_) => write!(f, "Inspect"),
        }
    }
}

pub async fn run(args: StanzaArgs) -> Result<()> {
    let name = args.command.to_string();
    let span = info_span!("Subcommand", name);
    let _span = span.enter();

    let world_path = args.world_path();
    let network = args.network.clone();

    match args.command {
        Commands::Run(args) => args.run(&world_path, &network).await,
        Commands::Check(args) => args.run(),
        Commands::Inspect(args) => args.run(&world_path),
    }
}
