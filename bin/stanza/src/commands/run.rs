use std::fs;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use colored::Colorize;
use stanza_script::builder::PRICE_ORACLE_PROXY;
use stanza_script::process_event;
use stanza_types::Event;
use stanza_utils::{genesis_accounts, ArtifactMeta, InMemoryBackend};
use stanza_world::World;
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(help = "Path to the scenario script to run.")]
    pub script: Utf8PathBuf,

    #[arg(long, default_value = "root")]
    #[arg(help = "Account the deployments originate from.")]
    pub sender: String,
}

impl RunArgs {
    pub async fn run(self, world_path: &Utf8Path, network: &str) -> Result<()> {
        let mut world = load_or_create_world(world_path, network)?;

        for (name, address) in genesis_accounts() {
            if world.account(&name).is_none() {
                world.add_account(name, address);
            }
        }

        let from = world
            .account(&self.sender)
            .cloned()
            .with_context(|| format!("unknown sender account `{}`", self.sender))?;

        let mut backend = default_backend();

        let script = fs::read_to_string(&self.script)
            .with_context(|| format!("failed to read script {}", self.script))?;

        for (lineno, line) in script.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let event = Event::parse(line).with_context(|| {
                format!("{}:{}: failed to parse command", self.script, lineno + 1)
            })?;

            debug!(command = %event, "Processing command.");

            let outcome = process_event(&mut world, &from, &event, &mut backend)
                .await
                .with_context(|| format!("{}:{}: command failed", self.script, lineno + 1))?;

            println!("{} {} at {}", "Deployed".green().bold(), outcome.label(), outcome.address());
        }

        info!(world = %world_path, "Scenario complete.");
        Ok(())
    }
}

fn load_or_create_world(path: &Utf8Path, network: &str) -> Result<World> {
    if path.exists() {
        Ok(World::load_from_path(path)?)
    } else {
        Ok(World::new(network).with_save_path(path.to_path_buf()))
    }
}

/// Backend seeded with the artifacts every scenario can deploy.
fn default_backend() -> InMemoryBackend {
    let mut backend = InMemoryBackend::new();
    backend.register_artifact(
        PRICE_ORACLE_PROXY,
        ArtifactMeta { deploy_gas: 1_500_000, arg_gas: 32_000 },
    );
    backend
}
