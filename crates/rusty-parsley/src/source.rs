// File: rusty-parsley/src/source.rs
// Purpose: Rule providers - anything that can hand out field -> rule-string maps

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::attributes::{build_output_attributes, OutputAttributes};

/// Field name -> pipe-separated rule string, in declaration order
pub type RuleSpec = IndexMap<String, String>;

/// Something that declares validation rules for a form
///
/// Implement `rules()` and get the Parsley attributes for free.
///
/// # Example
///
/// ```
/// use rusty_parsley::{FormRequest, RuleSpec};
///
/// struct CreatePost;
///
/// impl FormRequest for CreatePost {
///     fn rules(&self) -> RuleSpec {
///         RuleSpec::from([("title".to_string(), "required|min:3|max:64".to_string())])
///     }
/// }
///
/// let attrs = CreatePost.parsley_rules();
/// assert_eq!(attrs.get("title").unwrap()["data-parsley-minlength"], "3");
/// ```
pub trait FormRequest {
    fn rules(&self) -> RuleSpec;

    fn parsley_rules(&self) -> OutputAttributes {
        build_output_attributes(&self.rules())
    }
}

impl FormRequest for RuleSpec {
    fn rules(&self) -> RuleSpec {
        self.clone()
    }
}

/// Supported rule file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    Toml,
    Json,
}

impl RuleFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(RuleFormat::Toml),
            Some("json") => Ok(RuleFormat::Json),
            _ => bail!(
                "Unsupported rule file {:?}: expected a .toml or .json extension",
                path
            ),
        }
    }
}

impl std::fmt::Display for RuleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleFormat::Toml => write!(f, "toml"),
            RuleFormat::Json => write!(f, "json"),
        }
    }
}

/// Rules read from a flat `field = "rules"` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: RuleSpec,
}

impl RuleSet {
    pub fn new(rules: RuleSpec) -> Self {
        Self { rules }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML rule set")
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse JSON rule set")
    }

    pub fn parse(content: &str, format: RuleFormat) -> Result<Self> {
        match format {
            RuleFormat::Toml => Self::from_toml_str(content),
            RuleFormat::Json => Self::from_json_str(content),
        }
    }

    /// Load a rule set, picking the format from the file extension
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = RuleFormat::from_path(path)?;

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule file: {:?}", path))?;

        let rule_set = Self::parse(&content, format)
            .with_context(|| format!("Invalid {} rule file: {:?}", format, path))?;

        tracing::info!(?path, fields = rule_set.len(), "loaded rule set");
        Ok(rule_set)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.rules.get(field).map(String::as_str)
    }

    pub fn as_spec(&self) -> &RuleSpec {
        &self.rules
    }
}

impl FormRequest for RuleSet {
    fn rules(&self) -> RuleSpec {
        self.rules.clone()
    }
}
