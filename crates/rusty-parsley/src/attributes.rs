// File: rusty-parsley/src/attributes.rs
// Purpose: Build per-field Parsley data attributes from rule specs

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::TranslatorConfig;
use crate::parser::parse_rule_string;
use crate::source::RuleSpec;
use crate::table::translate_rule;

/// Prefix put in front of every produced suffix
pub const ATTRIBUTE_PREFIX: &str = "data-parsley-";

/// Attribute key -> value for one field, in first-write order
pub type FieldAttributes = IndexMap<String, String>;

/// Field name -> attributes, in the order fields were declared
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutputAttributes(IndexMap<String, FieldAttributes>);

impl OutputAttributes {
    pub fn get(&self, field: &str) -> Option<&FieldAttributes> {
        self.0.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Turns rule specs into output attributes
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    config: TranslatorConfig,
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self { config }
    }

    /// Translate every field of `spec`, keeping field order.
    pub fn translate(&self, spec: &RuleSpec) -> OutputAttributes {
        let fields = spec
            .iter()
            .map(|(field, rule_string)| {
                tracing::debug!(field = %field, rules = %rule_string, "translating field");
                (field.clone(), self.translate_field(rule_string))
            })
            .collect();

        OutputAttributes(fields)
    }

    /// Translate a single rule string.
    ///
    /// A later rule producing an existing key overwrites its value; the key keeps
    /// its first position.
    pub fn translate_field(&self, rule_string: &str) -> FieldAttributes {
        let mut attrs = FieldAttributes::new();

        for rule in parse_rule_string(
            rule_string,
            self.config.empty_tokens,
            self.config.argument_colons,
        ) {
            for entry in translate_rule(&rule.name, &rule.params) {
                attrs.insert(format!("{}{}", ATTRIBUTE_PREFIX, entry.suffix), entry.value);
            }
        }

        attrs
    }
}

/// Translate with the default configuration
pub fn build_output_attributes(spec: &RuleSpec) -> OutputAttributes {
    Translator::default().translate(spec)
}
