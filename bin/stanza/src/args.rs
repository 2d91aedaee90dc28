use camino::Utf8PathBuf;
use clap::Parser;
use smol_str::SmolStr;
use tracing::level_filters::LevelFilter;
use tracing_log::{AsTrace, LogTracer};
use tracing_subscriber::FmtSubscriber;

use crate::commands::Commands;

#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
pub struct StanzaArgs {
    #[arg(long)]
    #[arg(global = true)]
    #[arg(env = "STANZA_WORLD")]
    #[arg(help = "Override the path of the world file deployments are recorded into.")]
    pub world: Option<Utf8PathBuf>,

    #[arg(short = 'n', long)]
    #[arg(global = true)]
    #[arg(env = "STANZA_NETWORK", default_value = "development")]
    #[arg(help = "Name of the network the world tracks.")]
    pub network: SmolStr,

    #[clap(help = "Logging verbosity.")]
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    pub command: Commands,
}

impl StanzaArgs {
    pub fn init_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        let verbose = self.verbose.log_level_filter().as_trace() >= LevelFilter::DEBUG;

        let default_log_filter: &str = if verbose {
            "stanza=trace,stanza_script=trace,stanza_world=trace,stanza_utils=trace"
        } else {
            "stanza=info,stanza_script=info,stanza_world=info"
        };

        LogTracer::init()?;

        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_log_filter)),
            )
            .finish();

        Ok(tracing::subscriber::set_global_default(subscriber)?)
    }

    /// The world file for the selected network, unless overridden.
    pub fn world_path(&self) -> Utf8PathBuf {
        self.world
            .clone()
            .unwrap_or_else(|| Utf8PathBuf::from(format!("{}.json", self.network)))
    }
}
