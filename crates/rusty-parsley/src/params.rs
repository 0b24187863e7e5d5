// File: rusty-parsley/src/params.rs
// Purpose: Positional parameters attached to a single validation rule

/// Parameters of one rule token.
///
/// `Absent` is what a caller gets when no parameter sequence is supplied at all.
/// Rule strings never produce it: a token without `:` carries two null slots
/// (see [`RuleParams::placeholders`]) so positional reads stay safe.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RuleParams {
    #[default]
    Absent,
    List(Vec<Option<String>>),
}

impl RuleParams {
    /// Two null slots, used for tokens written without an argument blob
    pub fn placeholders() -> Self {
        RuleParams::List(vec![None, None])
    }

    /// Split an argument blob on every `,`
    ///
    /// Empty pieces are kept, so `"a,,b"` yields three slots.
    pub fn parse(blob: &str) -> Self {
        RuleParams::List(blob.split(',').map(|p| Some(p.to_string())).collect())
    }

    /// Build a parameter list from plain values
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RuleParams::List(values.into_iter().map(|v| Some(v.into())).collect())
    }

    pub fn is_list(&self) -> bool {
        matches!(self, RuleParams::List(_))
    }

    /// Slot `index` as a string. Missing and null slots read as `""`.
    pub fn positional(&self, index: usize) -> &str {
        match self {
            RuleParams::Absent => "",
            RuleParams::List(values) => values
                .get(index)
                .and_then(|v| v.as_deref())
                .unwrap_or(""),
        }
    }

    /// All slots joined with `separator`, nulls rendered as `""`
    pub fn joined(&self, separator: &str) -> String {
        match self {
            RuleParams::Absent => String::new(),
            RuleParams::List(values) => values
                .iter()
                .map(|v| v.as_deref().unwrap_or(""))
                .collect::<Vec<_>>()
                .join(separator),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RuleParams::Absent => 0,
            RuleParams::List(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_empty_pieces() {
        let params = RuleParams::parse("a,,b");
        assert_eq!(params.len(), 3);
        assert_eq!(params.positional(1), "");
        assert_eq!(params.joined(","), "a,,b");
    }

    #[test]
    fn test_positional_out_of_range() {
        let params = RuleParams::from_values(["3"]);
        assert_eq!(params.positional(0), "3");
        assert_eq!(params.positional(5), "");
        assert_eq!(RuleParams::Absent.positional(0), "");
    }

    #[test]
    fn test_placeholders_join_to_single_space() {
        let params = RuleParams::placeholders();
        assert!(params.is_list());
        assert_eq!(params.joined(" "), " ");
        assert_eq!(params.positional(0), "");
    }

    #[test]
    fn test_absent() {
        assert!(!RuleParams::Absent.is_list());
        assert!(RuleParams::Absent.is_empty());
        assert_eq!(RuleParams::Absent.joined(","), "");
    }
}
