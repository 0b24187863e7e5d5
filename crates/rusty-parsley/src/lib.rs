//! Rusty-Parsley
//!
//! Translates server-side request-validation rule strings such as
//! `"required|min:3|max:64"` into `data-parsley-*` attributes for the
//! Parsley client-side form validator.
//!
//! ```
//! use rusty_parsley::{build_output_attributes, RuleSpec};
//!
//! let mut spec = RuleSpec::new();
//! spec.insert("age".to_string(), "digits_between:2,3".to_string());
//!
//! let attrs = build_output_attributes(&spec);
//! let age = attrs.get("age").unwrap();
//! assert_eq!(age["data-parsley-type"], "digits");
//! assert_eq!(age["data-parsley-length"], "[2,3]");
//! ```

pub mod attributes;
pub mod config;
pub mod params;
pub mod parser;
pub mod source;
pub mod table;

pub use attributes::{
    build_output_attributes, FieldAttributes, OutputAttributes, Translator, ATTRIBUTE_PREFIX,
};
pub use config::{Config, OutputConfig, TranslatorConfig};
pub use params::RuleParams;
pub use parser::{parse_rule_string, parse_rule_token, ArgumentColons, EmptyTokens, ParsedRule};
pub use source::{FormRequest, RuleFormat, RuleSet, RuleSpec};
pub use table::{is_known_rule, known_rules, translate_rule, AttributeEntry, Translation};
