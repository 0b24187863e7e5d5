use anyhow::Result;
use colored::Colorize;
use rusty_parsley::Translator;
use std::path::Path;

use super::load_config;

pub fn execute(rules: &str, config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let attrs = Translator::new(config.translator).translate_field(rules);

    if attrs.is_empty() {
        println!("{}", "No attributes produced".yellow());
        return Ok(());
    }

    for (key, value) in &attrs {
        println!("{}=\"{}\"", key.cyan(), value);
    }

    Ok(())
}
