//! `ciadmin show` - print a collection

use anyhow::Result;
use declarative::{Resources, Styler};
use std::path::Path;
use termkit::AnsiStyler;

use crate::Context;
use crate::config;

pub fn run(ctx: &Context, file: &Path, json: bool) -> Result<()> {
    let resources = config::load_resources(file)?;
    if !ctx.quiet && !json {
        termkit::header(&file.display().to_string());
        termkit::kv("Resources", &resources.len().to_string());
        println!();
    }
    println!("{}", render(&resources, json, &AnsiStyler)?);
    Ok(())
}

/// Display text, or pretty JSON of the structured form
pub fn render(resources: &Resources, json: bool, styler: &dyn Styler) -> Result<String> {
    if json {
        Ok(resources.to_json()?)
    } else {
        Ok(resources.render(styler)?)
    }
}
