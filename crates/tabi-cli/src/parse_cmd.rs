use std::path::Path;

use anyhow::{Context, bail};
use clap::ValueEnum;

use tabi_core::markdown::{generate_markdown, parse_markdown};
use tabi_core::plan::{PlanFormat, TripPlan, render_plan, validate_plan};

use crate::io::{read_input, write_output};

/// Output format for `tabi parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}

impl From<OutputFormat> for PlanFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => PlanFormat::Json,
            OutputFormat::Toml => PlanFormat::Toml,
        }
    }
}

fn parse_input(input: &str) -> anyhow::Result<TripPlan> {
    let markdown = read_input(input)?;
    match parse_markdown(&markdown) {
        Some(plan) => Ok(plan),
        None => bail!("{input}: input is empty"),
    }
}

/// Parse a prompt back into a plan file.
pub fn run_parse(input: &str, format: OutputFormat, output: Option<&Path>) -> anyhow::Result<()> {
    let plan = parse_input(input)?;
    let rendered = render_plan(&plan, format.into()).context("failed to serialize plan")?;
    write_output(output, &rendered)
}

/// Parse a prompt, validate it and confirm it survives regeneration.
pub fn run_check(input: &str) -> anyhow::Result<()> {
    let plan = parse_input(input)?;

    let mode = if plan.is_suggestion_mode {
        "suggestion".to_string()
    } else {
        format!("standard, {} day(s)", plan.days.len())
    };
    println!("{input}: {mode}");

    let warnings = validate_plan(&plan);
    for warning in &warnings {
        println!("  warning: {warning}");
    }

    let regenerated = parse_markdown(&generate_markdown(&plan));
    if regenerated.as_ref() != Some(&plan) {
        bail!("{input}: plan changes when regenerated");
    }
    if !warnings.is_empty() {
        bail!("{input}: {} warning(s)", warnings.len());
    }

    println!("  ok: round-trips");
    Ok(())
}
