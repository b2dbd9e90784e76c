mod config;
mod generate_cmd;
mod io;
mod parse_cmd;
#[cfg(test)]
mod test_util;

use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use tabi_core::markdown::TemplateSet;

use config::TabiConfig;
use generate_cmd::GenerateOptions;
use parse_cmd::OutputFormat;

#[derive(Parser)]
#[command(
    name = "tabi",
    version,
    about = "Turn trip plans into LLM prompt Markdown and back"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a tabi config file seeded with the default form values
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Generate a prompt from a plan file (.toml or .json)
    Generate {
        /// Path to the plan file
        plan_file: PathBuf,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Ask the LLM for suggestions beyond the given conditions
        /// (overrides TABI_PROACTIVE and the config file)
        #[arg(long)]
        proactive: bool,
        /// Template file (overrides TABI_TEMPLATES and the config file)
        #[arg(long)]
        templates: Option<PathBuf>,
        /// Leave empty general fields empty instead of filling config defaults
        #[arg(long)]
        no_defaults: bool,
    },
    /// Parse a prompt back into a plan file
    Parse {
        /// Markdown file to parse, or `-` for stdin
        file: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Check that a prompt parses cleanly and survives regeneration
    Check {
        /// Markdown file to check, or `-` for stdin
        file: String,
    },
    /// Export the built-in template set as a starting point for customization
    Templates {
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn cmd_init(force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile::default();
    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  defaults.departure = {}", cfg.defaults.departure);
    println!("  defaults.members = {}", cfg.defaults.members);
    println!("  defaults.theme = {}", cfg.defaults.theme);
    println!("  defaults.priority = {}", cfg.defaults.priority);
    println!("  output.proactive_suggestions = {}", cfg.output.proactive_suggestions);

    Ok(())
}

fn cmd_templates(output: Option<PathBuf>) -> anyhow::Result<()> {
    let content = TemplateSet::builtin()
        .to_toml_string()
        .context("failed to serialize templates")?;
    io::write_output(output.as_deref(), &content)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { force } => {
            cmd_init(force)?;
        }
        Commands::Generate {
            plan_file,
            output,
            proactive,
            templates,
            no_defaults,
        } => {
            let resolved = TabiConfig::resolve(templates.as_deref(), proactive)?;
            let options = GenerateOptions {
                plan_file: &plan_file,
                output: output.as_deref(),
                apply_defaults: !no_defaults,
            };
            generate_cmd::run_generate(&options, &resolved)?;
        }
        Commands::Parse {
            file,
            format,
            output,
        } => {
            parse_cmd::run_parse(&file, format, output.as_deref())?;
        }
        Commands::Check { file } => {
            parse_cmd::run_check(&file)?;
        }
        Commands::Templates { output } => {
            cmd_templates(output)?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "tabi", &mut std::io::stdout());
        }
    }

    Ok(())
}
