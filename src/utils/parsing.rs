//! String parsing utilities
//!
//! Hardware listing tools print loosely structured `Key: value` text. The
//! extractor here consumes a declarative rule table instead of every
//! collector growing its own scan loop.

use std::collections::HashMap;

/// A line-prefix extraction rule: `prefix` selects the line, `name` keys the
/// extracted value in the resulting field map.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub prefix: &'static str,
    pub name: &'static str,
}

/// Value of `line` after `prefix`, if the line (leading whitespace trimmed)
/// starts with it. Matching is case-sensitive.
fn value_after_prefix<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.trim_start().strip_prefix(prefix).map(str::trim)
}

/// Extract first-match field values per rule.
///
/// First match wins: listing tools repeat sections (one per memory bank,
/// one per device) and the leading summary entry is the one wanted. Lines
/// with an empty value do not count as a match.
pub fn extract_fields(text: &str, rules: &[FieldRule]) -> HashMap<&'static str, String> {
    let mut fields = HashMap::new();
    for line in text.lines() {
        for rule in rules {
            if fields.contains_key(rule.name) {
                continue;
            }
            if let Some(value) = value_after_prefix(line, rule.prefix) {
                if !value.is_empty() {
                    fields.insert(rule.name, value.to_string());
                }
            }
        }
    }
    fields
}

/// Every non-empty value for `prefix`, in line order.
///
/// For fields where the first occurrence may fail a later normalization
/// step and the scan has to move on to the next one.
pub fn extract_prefixed(text: &str, prefix: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| value_after_prefix(line, prefix))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Find a digit-suffixed DDR generation token ("DDR4", "DDR5") in free text.
/// "LPDDR4X" yields "DDR4", matching how memory descriptions abbreviate.
pub fn ddr_token(text: &str) -> Option<String> {
    let mut search = 0;
    while let Some(pos) = text[search..].find("DDR") {
        let start = search + pos;
        let digits_start = start + 3;
        let digits_end = text[digits_start..]
            .find(|c: char| !c.is_ascii_digit())
            .map(|i| digits_start + i)
            .unwrap_or(text.len());
        if digits_end > digits_start {
            return Some(text[start..digits_end].to_string());
        }
        search = digits_start;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const RULES: &[FieldRule] = &[
        FieldRule { prefix: "size:", name: "size" },
        FieldRule { prefix: "clock:", name: "clock" },
    ];

    #[test]
    fn extract_fields_first_match_wins() {
        let text = "  size: 24GiB\n  clock: 2400MHz\n  size: 8GiB\n";
        let fields = extract_fields(text, RULES);
        assert_eq!(fields.get("size").map(String::as_str), Some("24GiB"));
        assert_eq!(fields.get("clock").map(String::as_str), Some("2400MHz"));
    }

    #[test]
    fn extract_fields_skips_empty_values() {
        let text = "size:\nsize: 16GiB\n";
        let fields = extract_fields(text, RULES);
        assert_eq!(fields.get("size").map(String::as_str), Some("16GiB"));
    }

    #[test]
    fn extract_fields_is_prefix_exact() {
        // "SVendor:" must not satisfy a "Vendor:" rule
        let rules = &[FieldRule { prefix: "Vendor:", name: "vendor" }];
        let text = "SVendor:\tLenovo\nVendor:\tIntel Corporation\n";
        let fields = extract_fields(text, rules);
        assert_eq!(
            fields.get("vendor").map(String::as_str),
            Some("Intel Corporation")
        );
    }

    #[test]
    fn extract_prefixed_keeps_order() {
        let text = "size: 64KiB\nother: x\n   size: 24GiB\n";
        assert_eq!(extract_prefixed(text, "size:"), vec!["64KiB", "24GiB"]);
    }

    #[test]
    fn ddr_token_variants() {
        assert_eq!(ddr_token("DDR4 Synchronous 2400 MHz").as_deref(), Some("DDR4"));
        assert_eq!(ddr_token("SODIMM LPDDR4X Synchronous").as_deref(), Some("DDR4"));
        assert_eq!(ddr_token("System Memory"), None);
        assert_eq!(ddr_token("DDR without digits"), None);
    }
}
