use anyhow::{Context, Result};
use camino::Utf8Path;
use clap::Args;
use colored::Colorize;
use stanza_world::World;

#[derive(Debug, Args)]
pub struct InspectArgs {}

impl InspectArgs {
    pub fn run(self, world_path: &Utf8Path) -> Result<()> {
        let world = World::load_from_path(world_path)
            .with_context(|| format!("failed to load world {world_path}"))?;

        println!("{} {} ({})", "World".bold(), world_path, world.network);

        if world.contracts().is_empty() {
            println!("  no contracts recorded");
            return Ok(());
        }

        for record in world.contracts() {
            let description =
                record.data.get("description").and_then(|d| d.as_str()).unwrap_or("-");
            println!("  {:<24} {} {}", record.index.as_str().cyan(), record.address, description);
        }

        println!("{} invocation(s)", world.invocations().len());
        Ok(())
    }
}
