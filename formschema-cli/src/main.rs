//! # formschema
//!
//! Generate a JSON Schema and a JSON Forms UI schema from a JSON sample or an
//! OpenAPI document.
//!
//! ## Usage
//!
//! ```bash
//! # Generate from a JSON sample
//! formschema sample --input user.json --output forms/user.json
//!
//! # Generate from an OpenAPI component schema
//! formschema openapi --input api.json --schema Pet
//!
//! # Preview without writing
//! formschema sample --input user.json --dry-run
//!
//! # Initialize configuration
//! formschema init
//!
//! # Check an artifact is up-to-date (exit code 2 when stale)
//! formschema validate --path forms/user.json --sample user.json
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use formschema_cli::{
    check_artifact,
    config::{CliArgs, Config, ConfigManager, CONFIG_FILENAME},
    error::{CliError, ConfigError},
    writer::{FileWriter, WriteResult},
    Freshness, Source,
};

#[derive(Parser)]
#[command(name = "formschema")]
#[command(author, version, about = "Generate JSON Schema and JSON Forms UI schema", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    shared: SharedArgs,
}

/// Flags accepted by every subcommand.
#[derive(Args)]
struct SharedArgs {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Artifact file to write
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Print the artifact instead of writing it
    #[arg(long, global = true)]
    dry_run: bool,

    /// Locale for label translation
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Role for field access overrides
    #[arg(long, global = true)]
    role: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate from a JSON object sample
    Sample {
        /// JSON sample file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Generate from an OpenAPI 3 document
    Openapi {
        /// OpenAPI document (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Name under components.schemas
        #[arg(short, long)]
        schema: String,
    },

    /// Initialize a new formschema configuration file
    Init {
        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Validate that an artifact is up-to-date
    Validate {
        /// Artifact file to check
        #[arg(short, long)]
        path: PathBuf,

        /// JSON sample the artifact was generated from
        #[arg(long, conflicts_with = "openapi")]
        sample: Option<PathBuf>,

        /// OpenAPI document the artifact was generated from
        #[arg(long, requires = "schema")]
        openapi: Option<PathBuf>,

        /// Name under components.schemas
        #[arg(short, long)]
        schema: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let shared = cli.shared;

    match cli.command {
        Commands::Sample { input } => cmd_generate(Source::Sample(input), &shared),

        Commands::Openapi { input, schema } => cmd_generate(
            Source::OpenApi {
                path: input,
                schema,
            },
            &shared,
        ),

        Commands::Init { force } => cmd_init(shared.config.as_deref(), force),

        Commands::Validate {
            path,
            sample,
            openapi,
            schema,
        } => {
            let source = match (sample, openapi, schema) {
                (Some(sample), None, _) => Source::Sample(sample),
                (None, Some(openapi), Some(schema)) => Source::OpenApi {
                    path: openapi,
                    schema,
                },
                _ => {
                    return Err(CliError::Usage(
                        "validate needs --sample <file> or --openapi <file> --schema <Name>"
                            .to_string(),
                    ))
                }
            };
            cmd_validate(&path, source, &shared)
        }
    }
}

/// Load the configuration and apply the shared CLI overrides.
fn load_config(shared: &SharedArgs) -> Result<Config, CliError> {
    let config = ConfigManager::load(shared.config.as_deref())?;
    Ok(ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            output: shared.output.clone(),
            locale: shared.locale.clone(),
            role: shared.role.clone(),
        },
    ))
}

/// `sample` and `openapi` command implementation.
fn cmd_generate(source: Source, shared: &SharedArgs) -> Result<(), CliError> {
    let config = load_config(shared)?;

    println!(
        "{} {}",
        "Generating form from".cyan(),
        source.path().display()
    );

    let artifact = source.generate(&config.to_options())?;

    let writer = FileWriter::new(shared.dry_run);
    match writer.write_artifact(&config.output.file, &artifact)? {
        WriteResult::Written { path, bytes } => {
            println!(
                "{} Written {} bytes to {}",
                "✓".green(),
                bytes,
                path.display()
            );
        }
        WriteResult::DryRun { content, path } => {
            println!(
                "{} Would write to {}:",
                "[dry-run]".yellow(),
                path.display()
            );
            println!("{}", "─".repeat(60).dimmed());
            print!("{}", content);
            println!("{}", "─".repeat(60).dimmed());
        }
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(path: Option<&Path>, force: bool) -> Result<(), CliError> {
    let path = path.unwrap_or_else(|| Path::new(CONFIG_FILENAME));

    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        }
        .into());
    }

    FileWriter::new(false).write(path, ConfigManager::default_config_content())?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        path.display()
    );

    Ok(())
}

/// Validate command implementation.
fn cmd_validate(artifact_path: &Path, source: Source, shared: &SharedArgs) -> Result<(), CliError> {
    println!("{} {}", "Validating".cyan(), artifact_path.display());

    let config = load_config(shared)?;
    let artifact = source.generate(&config.to_options())?;

    match check_artifact(artifact_path, &artifact)? {
        Freshness::UpToDate => {
            println!("{} Artifact is up-to-date", "✓".green());
            Ok(())
        }
        Freshness::Stale => {
            println!("{} Artifact is out of date", "✗".red());
            println!("  Regenerate it from {}", source.path().display());
            Err(CliError::Stale {
                path: artifact_path.to_path_buf(),
            })
        }
    }
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
