//! `ciadmin diff` - compare generated and current collections
//!
//! Both collections are narrowed by `--grep`, optionally stripped of their
//! descriptions, then printed as a textual or identity diff.

use anyhow::{Context as AnyhowContext, Result};
use declarative::{DiffOptions, Resource, Resources, Styler, id_diff, textual_diff_with};
use regex::Regex;
use serde_json::Value;
use termkit::AnsiStyler;

use crate::Context;
use crate::cli::DiffArgs;
use crate::config::{self, DiffSettings, Settings};

/// Diff options after merging command-line flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffPlan {
    pub grep: Option<String>,
    pub ignore_descriptions: bool,
    pub ids_only: bool,
    pub context_lines: usize,
}

impl DiffPlan {
    pub fn resolve(args: &DiffArgs, settings: &DiffSettings) -> Self {
        Self {
            grep: args.grep.clone(),
            ignore_descriptions: args
                .ignore_descriptions()
                .unwrap_or(settings.ignore_descriptions),
            ids_only: args.ids_only().unwrap_or(settings.ids_only),
            context_lines: args.context_lines.unwrap_or(settings.context_lines),
        }
    }
}

pub fn run(ctx: &Context, args: &DiffArgs) -> Result<()> {
    let settings = Settings::load(ctx.config.as_deref())?;
    let plan = DiffPlan::resolve(args, &settings.diff);
    log::debug!("Diff plan: {plan:?}");

    let generated = config::load_resources(&args.generated)?;
    let current = config::load_resources(&args.current)?;

    let output = render(&generated, &current, &plan, &AnsiStyler)?;
    if output.is_empty() {
        if !ctx.quiet {
            termkit::success("No differences");
        }
    } else {
        println!("{output}");
    }
    Ok(())
}

/// Narrow, normalize and diff two collections
pub fn render(
    generated: &Resources,
    current: &Resources,
    plan: &DiffPlan,
    styler: &dyn Styler,
) -> Result<String> {
    let (generated, current) = prepare(generated, current, plan)?;

    if plan.ids_only {
        let diff = id_diff(&generated, &current)?;
        let summary = diff.summary();
        log::info!(
            "{} added, {} removed, {} changed",
            summary.additions,
            summary.removals,
            summary.changes
        );
        return Ok(diff.render(styler));
    }

    let options = DiffOptions {
        context_lines: plan.context_lines,
    };
    Ok(textual_diff_with(&generated, &current, styler, options)?)
}

fn prepare(
    generated: &Resources,
    current: &Resources,
    plan: &DiffPlan,
) -> Result<(Resources, Resources)> {
    let mut generated = generated.clone();
    let mut current = current.clone();

    if let Some(pattern) = &plan.grep {
        let re =
            Regex::new(pattern).with_context(|| format!("Invalid --grep pattern '{pattern}'"))?;
        generated = generated.filter(|r| re.is_match(r.id()))?;
        current = current.filter(|r| re.is_match(r.id()))?;
        log::debug!(
            "--grep {pattern} kept {} generated and {} current resources",
            generated.len(),
            current.len()
        );
        if generated.is_empty() && current.is_empty() {
            termkit::warn(format!("--grep {pattern} matched no resources"));
        }
    }

    if plan.ignore_descriptions {
        generated = generated.try_map(without_description)?;
        current = current.try_map(without_description)?;
    }

    Ok((generated, current))
}

/// Blank the description of kinds that have one
fn without_description(resource: &Resource) -> declarative::Result<Resource> {
    if resource.has_field("description") {
        resource.evolve([("description", Value::String(String::new()))])
    } else {
        Ok(resource.clone())
    }
}
