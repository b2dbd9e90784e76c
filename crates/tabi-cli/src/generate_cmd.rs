use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use tabi_core::markdown::MarkdownGenerator;
use tabi_core::plan::{load_plan, validate_plan};

use crate::config::TabiConfig;
use crate::io::write_output;

/// Options for `tabi generate`.
pub struct GenerateOptions<'a> {
    pub plan_file: &'a Path,
    pub output: Option<&'a Path>,
    pub apply_defaults: bool,
}

/// Render a plan file as a prompt.
pub fn run_generate(options: &GenerateOptions<'_>, config: &TabiConfig) -> anyhow::Result<()> {
    let mut plan = load_plan(options.plan_file)
        .with_context(|| format!("failed to load plan {}", options.plan_file.display()))?;

    if options.apply_defaults {
        config.defaults.apply(&mut plan.general);
    }

    for warning in validate_plan(&plan) {
        warn!(field = %warning.field, "{}", warning.message);
    }

    let templates = config.template_set()?;
    let generator =
        MarkdownGenerator::new(templates).with_proactive_suggestions(config.proactive_suggestions);
    let markdown = generator.generate(&plan);
    info!(
        suggestion_mode = plan.is_suggestion_mode,
        days = plan.days.len(),
        "generated prompt"
    );

    write_output(options.output, &markdown)
}
