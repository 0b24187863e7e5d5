pub mod field;
pub mod rules;
pub mod translate;

use anyhow::Result;
use rusty_parsley::Config;
use std::path::Path;

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::load_default(),
    }
}
