//! Attribute-token parsing.
//!
//! Raw `name[:type]` tokens become [`AttributeRecord`]s here. Malformed
//! tokens are collected, not thrown: every token is checked, each bad one
//! produces its own message, and the surviving records keep their input
//! order.

use std::collections::HashSet;

/// Default attribute type when a token carries no `:type` suffix.
pub const DEFAULT_ATTRIBUTE_TYPE: &str = "string";

/// Message reported when surviving records share a name.
pub const DUPLICATE_ATTRIBUTES_MESSAGE: &str = "Duplicate attributes not allowed!";

/// One parsed `name[:type]` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRecord {
    /// Attribute name; non-empty, unique within a model.
    pub name: String,
    /// Attribute type; non-empty, any string is accepted.
    pub ty: String,
}

/// Outcome of parsing a raw token list: surviving records plus one message
/// per malformed token.
#[derive(Debug, Default)]
pub struct ParsedAttributes {
    /// Records for the well-formed tokens, in input order.
    pub records: Vec<AttributeRecord>,
    /// One message per malformed token, in input order.
    pub invalid: Vec<String>,
}

/// Parse raw `name[:type]` tokens into attribute records.
///
/// Tokens split on the first `:`, so `meta:json:extended` names a `meta`
/// attribute of type `json:extended`. A token without `:` gets the type
/// `"string"`. An empty name or empty type marks the token invalid; the
/// record is dropped but parsing continues through the remaining tokens.
pub fn parse_attributes(tokens: &[String]) -> ParsedAttributes {
    let mut parsed = ParsedAttributes::default();

    for token in tokens {
        let (name, ty) = match token.split_once(':') {
            Some((name, ty)) => (name, ty),
            None => (token.as_str(), DEFAULT_ATTRIBUTE_TYPE),
        };

        if name.is_empty() || ty.is_empty() {
            parsed.invalid.push(format!("Invalid attribute notation:   \"{token}\""));
            continue;
        }

        parsed.records.push(AttributeRecord {
            name: name.to_string(),
            ty: ty.to_string(),
        });
    }

    parsed
}

/// True when two or more records share a name.
pub fn has_duplicate_names(records: &[AttributeRecord]) -> bool {
    let unique: HashSet<&str> = records.iter().map(|r| r.name.as_str()).collect();
    unique.len() != records.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn parses_name_and_type_tokens() {
        let parsed = parse_attributes(&tokens(&["name:string", "age:number"]));

        assert!(parsed.invalid.is_empty());
        assert_eq!(
            parsed.records,
            vec![
                AttributeRecord {
                    name: "name".to_string(),
                    ty: "string".to_string()
                },
                AttributeRecord {
                    name: "age".to_string(),
                    ty: "number".to_string()
                },
            ]
        );
    }

    #[test]
    fn defaults_missing_type_to_string() {
        let parsed = parse_attributes(&tokens(&["nickname"]));

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].ty, DEFAULT_ATTRIBUTE_TYPE);
    }

    #[test]
    fn splits_on_the_first_colon_only() {
        let parsed = parse_attributes(&tokens(&["meta:json:extended"]));

        assert_eq!(parsed.records[0].name, "meta");
        assert_eq!(parsed.records[0].ty, "json:extended");
    }

    #[test]
    fn rejects_empty_name_with_the_original_token_text() {
        let parsed = parse_attributes(&tokens(&[":number"]));

        assert!(parsed.records.is_empty());
        assert_eq!(parsed.invalid, vec!["Invalid attribute notation:   \":number\""]);
    }

    #[test]
    fn rejects_empty_type_after_colon() {
        let parsed = parse_attributes(&tokens(&["age:"]));

        assert!(parsed.records.is_empty());
        assert_eq!(parsed.invalid, vec!["Invalid attribute notation:   \"age:\""]);
    }

    #[test]
    fn collects_every_malformed_token_and_keeps_parsing() {
        let parsed = parse_attributes(&tokens(&[":number", "name", "age:", "score:float"]));

        assert_eq!(parsed.invalid.len(), 2);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[0].name, "name");
        assert_eq!(parsed.records[1].name, "score");
    }

    #[test]
    fn empty_token_list_parses_to_nothing() {
        let parsed = parse_attributes(&[]);

        assert!(parsed.records.is_empty());
        assert!(parsed.invalid.is_empty());
    }

    #[test]
    fn detects_duplicate_names_across_differing_types() {
        let parsed = parse_attributes(&tokens(&["name:string", "name:number"]));

        assert!(has_duplicate_names(&parsed.records));
    }

    #[test]
    fn unique_names_are_not_duplicates() {
        let parsed = parse_attributes(&tokens(&["name", "age:number"]));

        assert!(!has_duplicate_names(&parsed.records));
    }
}
