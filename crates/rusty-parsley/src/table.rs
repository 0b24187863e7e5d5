// File: rusty-parsley/src/table.rs
// Purpose: Rule name -> Parsley attribute translation table

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::params::RuleParams;

/// One produced attribute, before the `data-parsley-` prefix is applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeEntry {
    pub suffix: String,
    pub value: String,
}

impl AttributeEntry {
    pub fn new(suffix: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            value: value.into(),
        }
    }
}

/// Result of translating a single rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Single(AttributeEntry),
    /// Rules such as `digits` need more than one Parsley attribute
    Multi(Vec<AttributeEntry>),
}

impl Translation {
    fn single(suffix: &str, value: impl Into<String>) -> Self {
        Translation::Single(AttributeEntry::new(suffix, value))
    }

    /// Produced entries in write order
    pub fn entries(&self) -> &[AttributeEntry] {
        match self {
            Translation::Single(entry) => std::slice::from_ref(entry),
            Translation::Multi(entries) => entries,
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, Translation::Multi(_))
    }
}

impl IntoIterator for Translation {
    type Item = AttributeEntry;
    type IntoIter = std::vec::IntoIter<AttributeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Translation::Single(entry) => vec![entry].into_iter(),
            Translation::Multi(entries) => entries.into_iter(),
        }
    }
}

type Converter = fn(&RuleParams) -> Translation;

pub const ALPHA_PATTERN: &str = "^[A-z]+$";
pub const ALPHA_DASH_PATTERN: &str = "^[A-z-_]+$";
pub const IPV4_PATTERN: &str = r"\b(?:(?:2(?:[0-4][0-9]|5[0-5])|[0-1]?[0-9]?[0-9])\.){3}(?:(?:2([0-4][0-9]|5[0-5])|[0-1]?[0-9]?[0-9]))\b";
pub const BOOLEAN_PATTERN: &str = "true|false|1|0";
pub const ACCEPTED_PATTERN: &str = "yes|on|1|true";

fn bracketed(params: &RuleParams) -> String {
    format!("[{}]", params.joined(","))
}

fn negative_lookahead(inner: &str) -> String {
    format!("(?!{}).+", inner)
}

static RULE_TABLE: Lazy<HashMap<&'static str, Converter>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, Converter> = HashMap::new();

    table.insert("required", |_| Translation::single("required", "true"));
    table.insert("email", |_| Translation::single("type", "email"));
    table.insert("alpha", |_| Translation::single("pattern", ALPHA_PATTERN));
    table.insert("alpha_dash", |_| {
        Translation::single("pattern", ALPHA_DASH_PATTERN)
    });
    table.insert("alpha_num", |_| Translation::single("type", "alphanum"));

    table.insert("max", |p| Translation::single("maxlength", p.positional(0)));
    table.insert("min", |p| Translation::single("minlength", p.positional(0)));
    table.insert("between", |p| Translation::single("length", bracketed(p)));
    table.insert("size", |p| Translation::single("length", bracketed(p)));

    table.insert("digits", |p| {
        Translation::Multi(vec![
            AttributeEntry::new("type", "digits"),
            AttributeEntry::new("maxlength", p.positional(0)),
        ])
    });
    table.insert("digits_between", |p| {
        Translation::Multi(vec![
            AttributeEntry::new("type", "digits"),
            AttributeEntry::new("length", bracketed(p)),
        ])
    });

    table.insert("ip", |_| Translation::single("pattern", IPV4_PATTERN));
    table.insert("url", |_| Translation::single("type", "url"));
    table.insert("integer", |_| Translation::single("type", "integer"));
    // Maps to integer, not Parsley's "number" type, to match the legacy output
    table.insert("numeric", |_| Translation::single("type", "integer"));
    table.insert("boolean", |_| Translation::single("pattern", BOOLEAN_PATTERN));
    table.insert("accepted", |_| Translation::single("pattern", ACCEPTED_PATTERN));

    table.insert("date_format", |p| Translation::single("pattern", p.positional(0)));
    table.insert("different", |p| {
        Translation::single("pattern", negative_lookahead(p.positional(0)))
    });
    table.insert("in", |p| Translation::single("pattern", p.joined("|")));
    table.insert("not_id", |p| {
        Translation::single("pattern", negative_lookahead(&p.joined("|")))
    });
    table.insert("regex", |p| Translation::single("pattern", p.positional(0)));
    table.insert("string", |_| Translation::single("pattern", ".+"));

    table
});

/// Translate one rule into its Parsley attribute(s).
///
/// Names are matched exactly. Names with no table row echo themselves back as
/// the suffix; the value is the parameters joined by a space, or the name again
/// when no parameter list was given. This never fails.
pub fn translate_rule(name: &str, params: &RuleParams) -> Translation {
    if let Some(convert) = RULE_TABLE.get(name) {
        return convert(params);
    }

    tracing::debug!(rule = name, "unrecognized rule, passing through");

    let value = if params.is_list() {
        params.joined(" ")
    } else {
        name.to_string()
    };
    Translation::single(name, value)
}

pub fn is_known_rule(name: &str) -> bool {
    RULE_TABLE.contains_key(name)
}

/// All rule names with a table row, sorted
pub fn known_rules() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = RULE_TABLE.keys().copied().collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(name: &str, params: &RuleParams) -> (String, String) {
        match translate_rule(name, params) {
            Translation::Single(entry) => (entry.suffix, entry.value),
            other => panic!("expected single entry, got {:?}", other),
        }
    }

    #[test]
    fn test_min_uses_first_param() {
        let params = RuleParams::from_values(["3"]);
        assert_eq!(single("min", &params), ("minlength".into(), "3".into()));
    }

    #[test]
    fn test_digits_produces_two_entries() {
        let translation = translate_rule("digits", &RuleParams::from_values(["4"]));
        assert!(translation.is_multi());
        assert_eq!(
            translation.entries(),
            &[
                AttributeEntry::new("type", "digits"),
                AttributeEntry::new("maxlength", "4"),
            ]
        );
    }

    #[test]
    fn test_names_are_case_exact() {
        let (suffix, value) = single("Required", &RuleParams::Absent);
        assert_eq!(suffix, "Required");
        assert_eq!(value, "Required");
    }

    #[test]
    fn test_fallback_joins_params_with_space() {
        let params = RuleParams::from_values(["bar", "baz"]);
        assert_eq!(single("foo", &params), ("foo".into(), "bar baz".into()));
    }

    #[test]
    fn test_fallback_without_params_echoes_name() {
        assert_eq!(
            single("foo", &RuleParams::Absent),
            ("foo".into(), "foo".into())
        );
    }

    #[test]
    fn test_known_rules_sorted_and_complete() {
        let names = known_rules();
        assert_eq!(names.len(), 23);
        assert_eq!(names.first(), Some(&"accepted"));
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        assert!(is_known_rule("digits_between"));
        assert!(!is_known_rule("confirmed"));
    }

    #[test]
    fn test_translation_into_iter_preserves_order() {
        let suffixes: Vec<String> = translate_rule(
            "digits_between",
            &RuleParams::from_values(["2", "3"]),
        )
        .into_iter()
        .map(|e| e.suffix)
        .collect();
        assert_eq!(suffixes, vec!["type", "length"]);
    }
}
