//! Structured parsing of contributor names.
//!
//! Providers expose contributors as free-text strings ("Dr. John Q. Public
//! Jr.", "Public, John"). The canonical schema wants name parts, so this
//! module applies the usual conventions: honorifics up front, generational
//! and academic suffixes at the end, an optional "Family, Given" comma
//! form, and first/last/middle for whatever remains.

use std::sync::LazyLock;

use regex::Regex;

/// Recognized honorific prefixes, compared without trailing dots.
const PREFIXES: &[&str] = &[
    "dr", "prof", "professor", "mr", "mrs", "ms", "miss", "sir", "rev", "hon",
];

/// Recognized name suffixes, compared without trailing dots.
const SUFFIXES: &[&str] = &[
    "jr", "sr", "ii", "iii", "iv", "v", "phd", "md", "esq", "dds", "jd",
];

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// A personal name broken into parts. Parts not present are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HumanName {
    pub prefix: String,
    pub given: String,
    pub middle: String,
    pub family: String,
    pub suffix: String,
}

/// Parse a free-text personal name into parts.
///
/// # Examples
/// ```
/// use oai_harvester::name::parse_human_name;
///
/// let name = parse_human_name("Dr. John Q. Public Jr.");
/// assert_eq!(name.prefix, "Dr.");
/// assert_eq!(name.given, "John");
/// assert_eq!(name.middle, "Q.");
/// assert_eq!(name.family, "Public");
/// assert_eq!(name.suffix, "Jr.");
/// ```
#[must_use]
pub fn parse_human_name(raw: &str) -> HumanName {
    let cleaned = WHITESPACE.replace_all(raw.trim(), " ").to_string();
    if cleaned.is_empty() {
        return HumanName::default();
    }

    let mut suffix_parts: Vec<String> = Vec::new();

    // "Family, Given" and "Given Family, Jr." both use a comma.
    let core = match cleaned.split_once(',') {
        Some((head, tail)) => {
            let tail = tail.trim();
            if is_suffix(tail) {
                suffix_parts.push(tail.to_string());
                head.trim().to_string()
            } else {
                format!("{} {}", tail, head.trim())
            }
        }
        None => cleaned,
    };

    let mut tokens: Vec<&str> = core.split(' ').filter(|t| !t.is_empty()).collect();

    let mut prefix_parts: Vec<String> = Vec::new();
    while let Some(first) = tokens.first() {
        if tokens.len() > 1 && is_prefix(first) {
            prefix_parts.push((*first).to_string());
            tokens.remove(0);
        } else {
            break;
        }
    }

    while let Some(last) = tokens.last() {
        if tokens.len() > 1 && is_suffix(last) {
            suffix_parts.insert(0, (*last).to_string());
            tokens.pop();
        } else {
            break;
        }
    }

    let mut name = HumanName {
        prefix: prefix_parts.join(" "),
        suffix: suffix_parts.join(" "),
        ..HumanName::default()
    };

    match tokens.len() {
        0 => {}
        1 => name.given = tokens[0].to_string(),
        n => {
            name.given = tokens[0].to_string();
            name.family = tokens[n - 1].to_string();
            name.middle = tokens[1..n - 1].join(" ");
        }
    }

    name
}

fn is_prefix(token: &str) -> bool {
    PREFIXES.contains(&token.trim_end_matches('.').to_lowercase().as_str())
}

fn is_suffix(token: &str) -> bool {
    SUFFIXES.contains(&token.trim_end_matches('.').to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_name_with_prefix_and_suffix() {
        let name = parse_human_name("Dr. John Q. Public Jr.");
        assert_eq!(name.prefix, "Dr.");
        assert_eq!(name.given, "John");
        assert_eq!(name.middle, "Q.");
        assert_eq!(name.family, "Public");
        assert_eq!(name.suffix, "Jr.");
    }

    #[test]
    fn test_given_family() {
        let name = parse_human_name("Marie Curie");
        assert_eq!(name.given, "Marie");
        assert_eq!(name.middle, "");
        assert_eq!(name.family, "Curie");
    }

    #[test]
    fn test_multiple_middle_names() {
        let name = parse_human_name("Johann Sebastian Emanuel Bach");
        assert_eq!(name.given, "Johann");
        assert_eq!(name.middle, "Sebastian Emanuel");
        assert_eq!(name.family, "Bach");
    }

    #[test]
    fn test_comma_reversed_form() {
        let name = parse_human_name("Public, John");
        assert_eq!(name.given, "John");
        assert_eq!(name.family, "Public");
    }

    #[test]
    fn test_comma_suffix_form() {
        let name = parse_human_name("John Public, Jr.");
        assert_eq!(name.given, "John");
        assert_eq!(name.family, "Public");
        assert_eq!(name.suffix, "Jr.");
    }

    #[test]
    fn test_single_token() {
        let name = parse_human_name("Cher");
        assert_eq!(name.given, "Cher");
        assert_eq!(name.family, "");
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(parse_human_name(""), HumanName::default());
        assert_eq!(parse_human_name("   "), HumanName::default());
    }

    #[test]
    fn test_collapses_internal_whitespace() {
        let name = parse_human_name("  Marie   Curie ");
        assert_eq!(name.given, "Marie");
        assert_eq!(name.family, "Curie");
    }

    #[test]
    fn test_prefix_only_name_not_swallowed() {
        // A lone token that looks like a prefix is still somebody's name.
        let name = parse_human_name("Mr");
        assert_eq!(name.given, "Mr");
        assert_eq!(name.prefix, "");
    }
}
