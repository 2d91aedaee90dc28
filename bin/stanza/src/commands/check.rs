use std::fs;

use anyhow::{bail, Context, Result};
use camino::Utf8PathBuf;
use clap::Args;
use colored::Colorize;
use stanza_types::Event;

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[arg(help = "Path to the scenario script to check.")]
    pub script: Utf8PathBuf,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let script = fs::read_to_string(&self.script)
            .with_context(|| format!("failed to read script {}", self.script))?;

        let mut commands = 0;

        for (lineno, line) in script.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match Event::parse(line) {
                Ok(event) => {
                    commands += 1;
                    println!("{:>4}: {event}", lineno + 1);
                }
                Err(err) => bail!("{}:{}: {err}", self.script, lineno + 1),
            }
        }

        println!("{} {commands} command(s) parsed", "OK".green().bold());
        Ok(())
    }
}
