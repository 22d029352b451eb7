use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mappings_fetch::{config::Config, load, logging, target::TargetMapping};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Requests mappings from the server and writes them to the output directory
    Load {
        /// Base URL of the mapping server
        #[arg(long)]
        base_url: Option<String>,

        /// The minecraft version to load mappings for
        #[arg(long)]
        minecraft_version: Option<String>,

        /// The MCP version to load mappings for
        #[arg(long, conflicts_with = "no_mcp")]
        mcp_version: Option<String>,

        /// Send the request without an MCP version
        #[arg(long)]
        no_mcp: bool,

        /// Directory the .srg files are written to
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Give up on the request after this many seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// The target mappings to load
        targets: Vec<String>,
    },
    /// Validates target names and prints their canonical form
    Targets {
        /// The target mappings to check
        targets: Vec<String>,
    },
    /// Prints the effective configuration as TOML
    Config,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging()?;

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    match args.command {
        Commands::Load {
            base_url,
            minecraft_version,
            mcp_version,
            no_mcp,
            out_dir,
            timeout_secs,
            targets,
        } => {
            if let Some(base_url) = base_url {
                config.base_url = base_url;
            }
            if let Some(minecraft_version) = minecraft_version {
                config.minecraft_version = minecraft_version;
            }
            if no_mcp {
                config.mcp_version = None;
            } else if mcp_version.is_some() {
                config.mcp_version = mcp_version;
            }
            if let Some(out_dir) = out_dir {
                config.out_dir = out_dir;
            }
            if timeout_secs.is_some() {
                config.timeout_secs = timeout_secs;
            }
            if !targets.is_empty() {
                config.targets = targets;
            }

            let summary = load::run(&config)?;
            println!(
                "Finished {} targets (server took {}ms)",
                summary.written.len(),
                summary.response_time
            );
        }
        Commands::Targets { targets } => {
            let targets = if targets.is_empty() {
                config.targets
            } else {
                targets
            };
            for name in targets {
                let target: TargetMapping = name
                    .parse()
                    .with_context(|| format!("could not parse target {}", name))?;
                let needs_mcp = if target.needs_mcp_version() {
                    " (needs MCP version)"
                } else {
                    ""
                };
                println!("{}{}", target, needs_mcp);
            }
        }
        Commands::Config => {
            let toml = toml::to_string_pretty(&config).context("could not serialize config")?;
            print!("{}", toml);
        }
    }

    Ok(())
}
