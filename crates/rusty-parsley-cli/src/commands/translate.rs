use anyhow::{Context, Result};
use rusty_parsley::{RuleSet, Translator};
use std::path::Path;

use super::load_config;

pub fn execute(file: &Path, config: Option<&Path>, compact: bool) -> Result<()> {
    let config = load_config(config)?;
    let rule_set = RuleSet::load(file)?;

    let output = Translator::new(config.translator).translate(rule_set.as_spec());

    let json = if compact || !config.output.pretty {
        serde_json::to_string(&output)
    } else {
        serde_json::to_string_pretty(&output)
    }
    .context("Failed to serialize attributes")?;

    println!("{}", json);
    Ok(())
}
