// File: rusty-parsley/src/parser.rs
// Purpose: Split "name:arg,arg|name2" rule strings into parsed rules

use serde::{Deserialize, Serialize};

use crate::params::RuleParams;

/// What to do with empty tokens such as the one in `"required||min:3"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyTokens {
    /// Translate them like any other unknown rule (name `""`, placeholder params)
    #[default]
    Fallback,
    /// Drop them before translation
    Skip,
}

/// How colons after the first one in a token are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentColons {
    /// Only the text between the first and second `:` is the argument blob;
    /// `date_format:H:i` yields `H`
    #[default]
    Truncate,
    /// Everything after the first `:` is the argument blob
    Keep,
}

/// A rule token split into its name and parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRule {
    pub name: String,
    pub params: RuleParams,
}

/// Parse a single `name` or `name:arg1,arg2` token.
///
/// With [`ArgumentColons::Truncate`] anything past a second `:` is dropped, so
/// `regex:^\d{2}:\d{2}$` yields the blob `^\d{2}`. [`ArgumentColons::Keep`]
/// keeps the whole remainder.
pub fn parse_rule_token(token: &str, colons: ArgumentColons) -> ParsedRule {
    let (name, blob) = match colons {
        ArgumentColons::Truncate => {
            let mut parts = token.split(':');
            (parts.next().unwrap_or(""), parts.next())
        }
        ArgumentColons::Keep => match token.split_once(':') {
            Some((name, blob)) => (name, Some(blob)),
            None => (token, None),
        },
    };

    ParsedRule {
        name: name.to_string(),
        params: blob.map_or_else(RuleParams::placeholders, RuleParams::parse),
    }
}

/// Parse a full pipe-separated rule string, in order
pub fn parse_rule_string(
    rule_string: &str,
    empty_tokens: EmptyTokens,
    colons: ArgumentColons,
) -> Vec<ParsedRule> {
    rule_string
        .split('|')
        .filter(|token| empty_tokens == EmptyTokens::Fallback || !token.is_empty())
        .map(|token| parse_rule_token(token, colons))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_without_params_gets_placeholders() {
        let rule = parse_rule_token("required", ArgumentColons::Truncate);
        assert_eq!(rule.name, "required");
        assert_eq!(rule.params, RuleParams::List(vec![None, None]));
    }

    #[test]
    fn test_token_with_params() {
        let rule = parse_rule_token("between:2,10", ArgumentColons::Truncate);
        assert_eq!(rule.name, "between");
        assert_eq!(rule.params, RuleParams::from_values(["2", "10"]));
    }

    #[test]
    fn test_second_colon_truncates_by_default() {
        let rule = parse_rule_token("date_format:H:i", ArgumentColons::default());
        assert_eq!(rule.name, "date_format");
        assert_eq!(rule.params, RuleParams::from_values(["H"]));
    }

    #[test]
    fn test_keep_colons_takes_whole_remainder() {
        let rule = parse_rule_token("date_format:H:i", ArgumentColons::Keep);
        assert_eq!(rule.name, "date_format");
        assert_eq!(rule.params.positional(0), "H:i");
    }

    #[test]
    fn test_leading_colon_gives_empty_name() {
        let rule = parse_rule_token(":3", ArgumentColons::Truncate);
        assert_eq!(rule.name, "");
        assert_eq!(rule.params, RuleParams::from_values(["3"]));
    }

    #[test]
    fn test_trailing_colon_gives_one_empty_param() {
        for colons in [ArgumentColons::Truncate, ArgumentColons::Keep] {
            let rule = parse_rule_token("max:", colons);
            assert_eq!(rule.params, RuleParams::from_values([""]));
        }
    }

    #[test]
    fn test_rule_string_order() {
        let names: Vec<String> = parse_rule_string(
            "required|min:3|max:64",
            EmptyTokens::default(),
            ArgumentColons::default(),
        )
        .into_iter()
        .map(|r| r.name)
        .collect();
        assert_eq!(names, vec!["required", "min", "max"]);
    }

    #[test]
    fn test_empty_tokens_fallback_keeps_them() {
        let rules = parse_rule_string(
            "required||min:3|",
            EmptyTokens::Fallback,
            ArgumentColons::Truncate,
        );
        assert_eq!(rules.len(), 4);
        assert_eq!(rules[1].name, "");
        assert_eq!(rules[3].params, RuleParams::placeholders());
    }

    #[test]
    fn test_empty_tokens_skip_drops_them() {
        let rules = parse_rule_string(
            "required||min:3|",
            EmptyTokens::Skip,
            ArgumentColons::Truncate,
        );
        assert_eq!(rules.len(), 2);
        assert!(parse_rule_string("", EmptyTokens::Skip, ArgumentColons::Truncate).is_empty());
    }
}
