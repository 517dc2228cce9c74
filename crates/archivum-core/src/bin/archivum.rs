//! Archivum CLI
//!
//! Resolve exported URIs from an object manifest and manage the deposit
//! license and news files of a repository.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use archivum_core::{Archivum, ArchivumConfig, Context, Result};
use archivum_identifiers::{parse_manifest, InMemoryMetadata};

#[derive(Parser)]
#[command(name = "archivum", version, about = "Repository identifier export and content tool")]
struct Cli {
    /// Config file (TOML, or JSON with a .json extension)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the repository directory from the config
    #[arg(long, global = true)]
    repository_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the exported URI of every object in a JSON manifest
    Resolve {
        #[arg(long)]
        manifest: PathBuf,

        /// Print results as JSON instead of tab-separated lines
        #[arg(long)]
        json: bool,
    },
    /// Show or replace the default deposit license
    License {
        #[command(subcommand)]
        action: LicenseAction,
    },
    /// Read or write a news file
    News {
        #[command(subcommand)]
        action: NewsAction,
    },
}

#[derive(Subcommand)]
enum LicenseAction {
    Show,
    Set { file: PathBuf },
}

#[derive(Subcommand)]
enum NewsAction {
    Read { name: String },
    Write { name: String, file: PathBuf },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(config: Option<&Path>, repository_dir: Option<PathBuf>) -> Result<ArchivumConfig> {
    let mut loaded = match config {
        Some(path) => ArchivumConfig::load(path)?,
        None => match ArchivumConfig::default_config_path().filter(|p| p.exists()) {
            Some(path) => ArchivumConfig::load(path)?,
            None => ArchivumConfig::default(),
        },
    };
    if let Some(dir) = repository_dir {
        loaded.repository_dir = dir;
    }
    Ok(loaded)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref(), cli.repository_dir)?;
    let archivum = Archivum::from_config(config)?;

    match cli.command {
        Command::Resolve { manifest, json } => {
            let entries = parse_manifest(&std::fs::read_to_string(&manifest)?)?;
            let metadata = InMemoryMetadata::from_manifest(&entries)?;
            let objects: Vec<_> = entries.into_iter().map(|e| e.object).collect();
            let ctx = Context::with_label("cli-resolve");

            if json {
                let exported = archivum.export_uris(&ctx, &objects, &metadata)?;
                println!("{}", serde_json::to_string_pretty(&exported)?);
            } else {
                for object in &objects {
                    let uri = archivum.resolve(&ctx, object, &metadata)?;
                    println!("{}\t{}", object.id, uri.as_deref().unwrap_or("-"));
                }
            }
        }
        Command::License { action } => match action {
            LicenseAction::Show => {
                print!("{}", archivum.license().default_submission_license()?);
            }
            LicenseAction::Set { file } => {
                let text = std::fs::read_to_string(&file)?;
                let license = archivum.license();
                license.write_license_file(license.default_license_path(), &text)?;
                tracing::info!("Default license replaced from {}", file.display());
            }
        },
        Command::News { action } => match action {
            NewsAction::Read { name } => {
                println!("{}", archivum.news().read_news_file(&name)?);
            }
            NewsAction::Write { name, file } => {
                let text = std::fs::read_to_string(&file)?;
                archivum.news().write_news_file(&name, &text)?;
                tracing::info!("News file {} updated", name);
            }
        },
    }

    Ok(())
}
