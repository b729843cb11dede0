// Tue Oct 13 2026 - Alex

use crate::output::error::RuleError;
use log::debug;
use regex::Regex;

#[derive(Debug, Clone)]
pub struct RenameRule {
    pattern: Regex,
    replacement: String,
}

impl RenameRule {
    /// A single-character pattern is taken literally; anything longer is a
    /// regular expression.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, RuleError> {
        let source = if pattern.chars().count() == 1 {
            regex::escape(pattern)
        } else {
            pattern.to_string()
        };
        let compiled = Regex::new(&source).map_err(|e| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
            source: e,
        })?;
        Ok(Self {
            pattern: compiled,
            replacement: replacement.to_string(),
        })
    }

    pub fn apply(&self, input: &str) -> String {
        self.pattern.replace_all(input, self.replacement.as_str()).into_owned()
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// Ordered rewrite rules, each applied to the output of the one before.
#[derive(Debug, Clone, Default)]
pub struct NameRules {
    rules: Vec<RenameRule>,
}

impl NameRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `from/to;from/to;...`. Every well-formed pair is kept; the
    /// last problem found, if any, is returned alongside.
    pub fn parse(expr: &str) -> (Self, Option<RuleError>) {
        let mut rules = Self::new();
        let mut last_error = None;

        for pair in split_escaped(expr, ';') {
            if pair.is_empty() {
                continue;
            }
            let mut parts = split_escaped(&pair, '/');
            if parts.len() == 3 && parts[2].is_empty() {
                parts.pop();
            }
            if parts.len() != 2 || parts[0].is_empty() {
                last_error = Some(RuleError::Malformed(pair));
                continue;
            }
            match RenameRule::new(&parts[0], &parts[1]) {
                Ok(rule) => {
                    debug!("Rename rule {:?} -> {:?}", parts[0], parts[1]);
                    rules.rules.push(rule);
                }
                Err(e) => last_error = Some(e),
            }
        }

        (rules, last_error)
    }

    pub fn push(&mut self, rule: RenameRule) {
        self.rules.push(rule);
    }

    pub fn apply(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(input.to_string(), |acc, rule| rule.apply(&acc))
    }

    pub fn rules(&self) -> &[RenameRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Splits on `delim`. `\` followed by `delim` yields a literal `delim`;
/// other backslash pairs pass through intact for the next level.
fn split_escaped(s: &str, delim: char) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) if next == delim => current.push(next),
                Some(next) => {
                    current.push('\\');
                    current.push(next);
                }
                None => current.push('\\'),
            }
        } else if c == delim {
            tokens.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    tokens.push(current);
    tokens
}

#[derive(Debug, Clone, Default)]
pub struct NameSanitizer {
    rules: NameRules,
}

impl NameSanitizer {
    pub fn new(rules: NameRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &NameRules {
        &self.rules
    }

    pub fn sanitize(&self, raw: &str) -> String {
        to_identifier(&self.rules.apply(raw))
    }
}

/// Trims, turns spaces into underscores, capitalises the first character,
/// lower-cases the rest and escapes anything that is not a letter, digit
/// or underscore as `_x<hex>`.
pub fn to_identifier(input: &str) -> String {
    let spaced = input.trim().replace(' ', "_");
    let mut chars = spaced.chars();
    let cased: String = match chars.next() {
        Some(first) => std::iter::once(upper_single(first))
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => return String::new(),
    };

    let mut out = String::with_capacity(cased.len());
    for c in cased.chars() {
        if is_identifier_char(c) {
            out.push(c);
        } else {
            out.push_str(&format!("_x{:02x}", c as u32));
        }
    }
    out
}

/// Upper-case mapping when it is a single character, otherwise `c` itself
/// (`ß` stays `ß`).
fn upper_single(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Letters, decimal digits and `_` as a Go identifier admits them. Digits
/// are ASCII only; `¹` or `½` are numeric but not decimal digits. Non-ASCII
/// letters must be cased or Latin-1, which leaves out letter-like numerals
/// and combining marks.
fn is_identifier_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c == '_';
    }
    if !c.is_alphabetic() || c.is_numeric() || ('\u{300}'..='\u{36f}').contains(&c) {
        return false;
    }
    c <= '\u{ff}' || c.is_lowercase() || c.is_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_basic() {
        assert_eq!(to_identifier("MY FIELD#1"), "My_field_x231");
        assert_eq!(to_identifier("  PSATOLD "), "Psatold");
        assert_eq!(to_identifier("a"), "A");
    }

    #[test]
    fn test_identifier_is_idempotent() {
        for raw in ["MY FIELD#1", "@X.Y/Z", "CVT$ABC", "  lead", "_under", "9LIVES", "\u{df}AB", "\u{ff}X"] {
            let once = to_identifier(raw);
            assert_eq!(to_identifier(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_identifier_escapes_everything_invalid() {
        assert_eq!(to_identifier("@"), "_x40");
        assert_eq!(to_identifier("A-B"), "A_x2db");
        assert_eq!(to_identifier("X\u{7f}"), "X_x7f");
    }

    #[test]
    fn test_identifier_keeps_unicode_letters() {
        assert_eq!(to_identifier("\u{e4}BC"), "\u{c4}bc");
    }

    #[test]
    fn test_identifier_escapes_non_decimal_numerics() {
        let raw = crate::utils::Codepage::decode(&[0xc1, 0xb8, 0xea]);
        assert_eq!(raw, "A\u{bd}\u{b2}");
        assert_eq!(to_identifier(&raw), "A_xbd_xb2");
        assert_eq!(to_identifier("X\u{bc}\u{b9}\u{b3}\u{be}"), "X_xbc_xb9_xb3_xbe");
        assert_eq!(to_identifier("N\u{2163}"), "N_x2173");
        assert_eq!(to_identifier("A\u{301}"), "A_x301");
    }

    #[test]
    fn test_identifier_keeps_latin1_letters() {
        assert_eq!(to_identifier("\u{aa}B\u{b5}"), "\u{aa}b\u{b5}");
        assert_eq!(to_identifier("\u{ff}X"), "\u{178}x");
    }

    #[test]
    fn test_identifier_sharp_s_first_is_kept() {
        assert_eq!(to_identifier("\u{df}AB"), "\u{df}ab");
    }

    #[test]
    fn test_identifier_empty() {
        assert_eq!(to_identifier(""), "");
        assert_eq!(to_identifier("   "), "");
    }

    #[test]
    fn test_rules_apply_in_order() {
        let (rules, err) = NameRules::parse("@/_ptr_;$/_end_");
        assert!(err.is_none());
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.apply("x@y$"), "x_ptr_y_end_");
    }

    #[test]
    fn test_rules_are_cumulative() {
        let (rules, _) = NameRules::parse("A/B;B/C");
        assert_eq!(rules.apply("AB"), "CC");
    }

    #[test]
    fn test_rule_replaces_all_matches() {
        let (rules, _) = NameRules::parse("#/_n");
        assert_eq!(rules.apply("#A#B#"), "_nA_nB_n");
    }

    #[test]
    fn test_multi_char_pattern_is_regex() {
        let (rules, err) = NameRules::parse("^CVT/;[0-9]+$/N");
        assert!(err.is_none());
        assert_eq!(rules.apply("CVTX12"), "XN");
    }

    #[test]
    fn test_capture_group_expansion() {
        let (rules, _) = NameRules::parse("(..)(..)/${2}${1}");
        assert_eq!(rules.apply("ABCD"), "CDAB");
    }

    #[test]
    fn test_escaped_delimiters() {
        let (rules, err) = NameRules::parse(r"a\/b/slash;x\;/semi");
        assert!(err.is_none());
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.apply("a/b"), "slash");
        assert_eq!(rules.apply("x;"), "semi");
    }

    #[test]
    fn test_regex_escapes_survive_splitting() {
        let (rules, err) = NameRules::parse(r"\.\./DOTS");
        assert!(err.is_none());
        assert_eq!(rules.apply("A..B.C"), "ADOTSB.C");
    }

    #[test]
    fn test_malformed_pair_keeps_good_rules() {
        let (rules, err) = NameRules::parse("@/_at_;nodelimiter;#/_h_");
        assert_eq!(rules.len(), 2);
        assert!(matches!(err, Some(RuleError::Malformed(ref s)) if s == "nodelimiter"));
        assert_eq!(rules.apply("@#"), "_at__h_");
    }

    #[test]
    fn test_last_error_wins() {
        let (rules, err) = NameRules::parse("bad;(unclosed/x;@/_");
        assert_eq!(rules.len(), 1);
        assert!(matches!(err, Some(RuleError::InvalidPattern { ref pattern, .. }) if pattern == "(unclosed"));
    }

    #[test]
    fn test_three_parts_is_malformed() {
        let (rules, err) = NameRules::parse("a/b/c");
        assert!(rules.is_empty());
        assert!(err.is_some());
    }

    #[test]
    fn test_trailing_slash_and_empty_replacement() {
        let (rules, err) = NameRules::parse("$/_D_/;#/");
        assert!(err.is_none());
        assert_eq!(rules.apply("A$B#"), "A_D_B");
    }

    #[test]
    fn test_empty_expression_and_segments() {
        let (rules, err) = NameRules::parse("");
        assert!(rules.is_empty() && err.is_none());
        let (rules, err) = NameRules::parse(";@/_;;");
        assert_eq!(rules.len(), 1);
        assert!(err.is_none());
    }

    #[test]
    fn test_sanitizer_applies_rules_first() {
        let (rules, _) = NameRules::parse("@/_ptr_");
        let sanitizer = NameSanitizer::new(rules);
        assert_eq!(sanitizer.sanitize("ASCB@"), "Ascb_ptr_");
        assert_eq!(NameSanitizer::default().sanitize("ASCB@"), "Ascb_x40");
    }
}
