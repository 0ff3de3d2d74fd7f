//! JSON to SCSS encoding.
//!
//! Turns a parsed [`JsonValue`] tree into SCSS source:
//!
//! - arrays become lists: `(a,b,c)`, empty arrays `()`
//! - objects become maps: `(key: value,other: value)`
//! - numbers and booleans print unquoted, null prints as `''`
//! - strings are quoted only when empty or when they contain characters that
//!   would break list/map syntax
//!
//! A whole document becomes one `$name: value;` declaration per top-level key.
//!
//! Keys pass through [`key`] filtering at every depth, optionally through
//! [`case::to_kebab_case`] first, and string values optionally through
//! [`link::resolve_internal_links`] before the quoting decision.
//!
//! # Example
//!
//! ```
//! use json_scss_importer::encode::Encoder;
//! use json_scss_importer::json::parse;
//! use json_scss_importer::ImporterOptions;
//!
//! let doc = parse(r##"{"colors": {"red": "#c33", "$skip": 1}, "gap": ""}"##).unwrap();
//! let options = ImporterOptions::default();
//! let scss = Encoder::new(&options)
//!     .encode_document(doc.as_object().unwrap())
//!     .unwrap();
//! assert_eq!(scss, "$colors: (red: #c33);\n$gap: '';");
//! ```

pub mod case;
pub mod key;
pub mod link;

use std::borrow::Cow;

use tracing::trace;

use crate::error::{EncodeError, EncodeResult};
use crate::json::{format_number, JsonValue, Map};
use crate::options::ImporterOptions;

/// Characters that force a string value into quotes.
const RESERVED_CHARS: [char; 9] = ['$', '%', '*', '+', ',', '/', ':', '@', '|'];

/// Quote `value` if it is empty or contains a reserved character.
///
/// Empty values must be quoted since `$x: ;` is a syntax error.
pub fn quote_if_needed(value: &str) -> Cow<'_, str> {
    if value.is_empty() || value.contains(RESERVED_CHARS) {
        Cow::Owned(quote(value, '\''))
    } else {
        Cow::Borrowed(value)
    }
}

/// Wrap `value` in `delimiter`, escaping only the delimiter itself.
///
/// Backslashes pass through untouched, so CSS escapes such as `\f101` read
/// the same quoted or not.
fn quote(value: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(delimiter);
    for c in value.chars() {
        if c == delimiter {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(delimiter);
    out
}

/// Renders JSON values as SCSS using a fixed set of options.
///
/// The encoder holds no state besides the borrowed options, so the same
/// input always yields the same output.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a> {
    options: &'a ImporterOptions,
}

impl<'a> Encoder<'a> {
    /// Create an encoder for the given options.
    pub fn new(options: &'a ImporterOptions) -> Self {
        Self { options }
    }

    /// Encode a document as newline-separated variable declarations.
    pub fn encode_document(&self, document: &Map) -> EncodeResult<String> {
        let mut path = Vec::new();
        let mut lines = Vec::with_capacity(document.len());

        for (raw, name, value) in self.entries(document) {
            path.push(raw.to_string());
            let encoded = self.encode_at(value, 0, &mut path)?;
            path.pop();
            lines.push(format!("${}: {};", name, encoded));
        }

        Ok(lines.join("\n"))
    }

    /// Encode a single value as an SCSS expression.
    pub fn encode_value(&self, value: &JsonValue) -> EncodeResult<String> {
        self.encode_at(value, 0, &mut Vec::new())
    }

    /// Eligible entries with their emitted names, in insertion order.
    fn entries<'m>(
        &self,
        map: &'m Map,
    ) -> impl Iterator<Item = (&'m str, String, &'m JsonValue)> + 'm {
        let convert_case = self.options.convert_case;
        map.iter().filter_map(move |(raw, value)| {
            if !key::is_eligible(raw) {
                trace!(key = %raw, "skipping key with reserved prefix");
                return None;
            }
            if key::is_sentinel(value) {
                trace!(key = %raw, "skipping excluded entry");
                return None;
            }
            let converted: Cow<'_, str> = if convert_case {
                Cow::Owned(case::to_kebab_case(raw))
            } else {
                Cow::Borrowed(raw)
            };
            Some((raw.as_str(), key::normalize(&converted).to_string(), value))
        })
    }

    fn encode_at(
        &self,
        value: &JsonValue,
        depth: usize,
        path: &mut Vec<String>,
    ) -> EncodeResult<String> {
        match value {
            JsonValue::Array(items) => {
                self.check_depth(depth + 1)?;
                let mut parts = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    path.push(index.to_string());
                    parts.push(self.encode_at(item, depth + 1, path)?);
                    path.pop();
                }
                Ok(format!("({})", parts.join(",")))
            }
            JsonValue::Object(map) => {
                self.check_depth(depth + 1)?;
                let mut parts = Vec::with_capacity(map.len());
                for (raw, name, item) in self.entries(map) {
                    path.push(raw.to_string());
                    let encoded = self.encode_at(item, depth + 1, path)?;
                    path.pop();
                    parts.push(format!("{}: {}", self.map_key(&name), encoded));
                }
                Ok(format!("({})", parts.join(",")))
            }
            JsonValue::Number(n) => {
                let printed = format_number(*n).ok_or_else(|| EncodeError::NonFiniteNumber {
                    value: n.to_string(),
                    path: path.join("."),
                })?;
                Ok(self.encode_string(&printed))
            }
            JsonValue::Bool(b) => Ok(self.encode_string(if *b { "true" } else { "false" })),
            JsonValue::Null => Ok(self.encode_string("")),
            JsonValue::String(s) => Ok(self.encode_string(s)),
        }
    }

    fn encode_string(&self, value: &str) -> String {
        let resolved = if self.options.resolve_internal_links {
            link::resolve_internal_links(value)
        } else {
            Cow::Borrowed(value)
        };
        quote_if_needed(&resolved).into_owned()
    }

    fn map_key<'k>(&self, name: &'k str) -> Cow<'k, str> {
        if self.options.stringify_all_keys {
            Cow::Owned(quote(name, '"'))
        } else {
            Cow::Borrowed(name)
        }
    }

    fn check_depth(&self, depth: usize) -> EncodeResult<()> {
        let limit = self.options.limits.max_nesting_depth;
        if depth > limit {
            return Err(EncodeError::NestingTooDeep { depth, limit });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{parse, Limits};

    fn encode_doc(options: &ImporterOptions, input: &str) -> String {
        let doc = parse(input).unwrap();
        Encoder::new(options)
            .encode_document(doc.as_object().unwrap())
            .unwrap()
    }

    fn encode(input: &str) -> String {
        let options = ImporterOptions::default();
        Encoder::new(&options)
            .encode_value(&parse(input).unwrap())
            .unwrap()
    }

    #[test]
    fn test_quote_if_needed() {
        assert_eq!(quote_if_needed("red"), "red");
        assert_eq!(quote_if_needed("#c33"), "#c33");
        assert_eq!(quote_if_needed(""), "''");
        for value in ["a:b", "$x", "a,b", "50%", "2*3", "1+1", "a/b", "@x", "a|b"] {
            assert_eq!(quote_if_needed(value), format!("'{}'", value));
        }
    }

    #[test]
    fn test_quote_escapes_delimiter() {
        assert_eq!(quote_if_needed("it's: here"), r"'it\'s: here'");
    }

    #[test]
    fn test_backslashes_kept_verbatim_quoted_or_not() {
        assert_eq!(quote_if_needed(r"\f101"), r"\f101");
        assert_eq!(quote_if_needed(r"\f101, \f102"), r"'\f101, \f102'");
        assert_eq!(encode(r#""a\\b: c""#), r"'a\b: c'");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(encode("42"), "42");
        assert_eq!(encode("1.50"), "1.5");
        assert_eq!(encode("true"), "true");
        assert_eq!(encode("null"), "''");
        assert_eq!(encode(r#""""#), "''");
        assert_eq!(encode(r#""red""#), "red");
    }

    #[test]
    fn test_lists() {
        assert_eq!(encode("[]"), "()");
        assert_eq!(encode(r##"["#c33", "#3c3"]"##), "(#c33,#3c3)");
        assert_eq!(encode("[[1, 2], [3]]"), "((1,2),(3))");
    }

    #[test]
    fn test_maps() {
        assert_eq!(encode("{}"), "()");
        assert_eq!(encode(r##"{"red": "#c33", "n": 1}"##), "(red: #c33,n: 1)");
    }

    #[test]
    fn test_document_declarations() {
        let options = ImporterOptions::default();
        assert_eq!(
            encode_doc(&options, r##"{"color-red": "#c33", "sizes": [1, 2]}"##),
            "$color-red: #c33;\n$sizes: (1,2);"
        );
        assert_eq!(encode_doc(&options, "{}"), "");
    }

    #[test]
    fn test_filtering_at_every_depth() {
        let options = ImporterOptions::default();
        let input = r##"{
            "$bad": 1, "@bad": 2, "skip": "#", ":hover": "#33c",
            "nested": {":disabled": "#3c3", "$x": 1, "gone": "#", "also-gone": "#"}
        }"##;
        assert_eq!(
            encode_doc(&options, input),
            "$hover: #33c;\n$nested: (disabled: #3c3);"
        );
    }

    #[test]
    fn test_sentinel_inside_list_is_kept() {
        // Filtering applies to entries of maps, not to list items.
        assert_eq!(encode(r##"["#", "a"]"##), "(#,a)");
    }

    #[test]
    fn test_convert_case() {
        let options = ImporterOptions::default().with_convert_case(true);
        assert_eq!(
            encode_doc(&options, r##"{"colorGreen": {"lightBlue": "#acf"}, ":hoverState": 1}"##),
            "$color-green: (light-blue: #acf);\n$hover-state: 1;"
        );

        let verbatim = ImporterOptions::default();
        assert_eq!(encode_doc(&verbatim, r#"{"colorGreen": 1}"#), "$colorGreen: 1;");
    }

    #[test]
    fn test_internal_links() {
        let options = ImporterOptions::default().with_resolve_internal_links(true);
        assert_eq!(
            encode_doc(&options, r#"{"primary": "var:preset|color|primary"}"#),
            "$primary: var(--wp--preset--color--primary);"
        );

        let disabled = ImporterOptions::default();
        assert_eq!(
            encode_doc(&disabled, r#"{"primary": "var:preset|color|primary"}"#),
            "$primary: 'var:preset|color|primary';"
        );
    }

    #[test]
    fn test_stringify_all_keys_quotes_map_keys_only() {
        let options = ImporterOptions::default().with_stringify_all_keys(true);
        assert_eq!(
            encode_doc(&options, r##"{"colors": {"red": "#c33", "blue": "#33c"}}"##),
            r##"$colors: ("red": #c33,"blue": #33c);"##
        );
    }

    #[test]
    fn test_depth_limit() {
        let options = ImporterOptions::default().with_limits(Limits {
            max_nesting_depth: 2,
            ..Limits::default()
        });
        let encoder = Encoder::new(&options);
        assert!(encoder.encode_value(&parse("[[1]]").unwrap()).is_ok());
        assert_eq!(
            encoder.encode_value(&parse("[[[1]]]").unwrap()),
            Err(EncodeError::NestingTooDeep { depth: 3, limit: 2 })
        );
    }

    #[test]
    fn test_non_finite_number_reports_path() {
        let options = ImporterOptions::default();
        let doc: Map = [(
            "sizes".to_string(),
            JsonValue::Array(vec![JsonValue::Number(1.0), JsonValue::Number(f64::NAN)]),
        )]
        .into_iter()
        .collect();
        assert_eq!(
            Encoder::new(&options).encode_document(&doc),
            Err(EncodeError::NonFiniteNumber {
                value: "NaN".to_string(),
                path: "sizes.1".to_string(),
            })
        );
    }

    #[test]
    fn test_out_of_range_number_is_encode_error() {
        let options = ImporterOptions::default();
        let doc = parse(r#"{"big": 1e400}"#).unwrap();
        assert_eq!(
            Encoder::new(&options).encode_document(doc.as_object().unwrap()),
            Err(EncodeError::NonFiniteNumber {
                value: "inf".to_string(),
                path: "big".to_string(),
            })
        );
    }

    #[test]
    fn test_deterministic() {
        let options = ImporterOptions::default()
            .with_convert_case(true)
            .with_resolve_internal_links(true);
        let input = r#"{"aB": [1, {"cD": "var:x|y"}], "e": null}"#;
        assert_eq!(encode_doc(&options, input), encode_doc(&options, input));
    }
}
