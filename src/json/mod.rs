//! Tolerant JSON parsing.
//!
//! Parses JSON with the extensions commonly found in hand-edited config
//! files (JSONC): `//` and `/* */` comments and trailing commas.
//!
//! # Architecture
//!
//! - [`types`] - Core JSON value types
//! - [`limits`] - Size and depth limits
//! - [`lexer`] - Tokenizer with comment and escape handling
//! - [`parser`] - Recursive descent parser
//! - [`number`] - Canonical number formatting
//!
//! # Example
//!
//! ```
//! use json_scss_importer::json::{parse, JsonValue};
//!
//! let value = parse("{\"b\": 2, /* note */ \"a\": [1,],}").unwrap();
//!
//! // Keys stay in source order
//! let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
//! assert_eq!(keys, ["b", "a"]);
//! assert_eq!(value.get("a"), Some(&JsonValue::Array(vec![JsonValue::Number(1.0)])));
//! ```

pub mod lexer;
pub mod limits;
pub mod number;
pub mod parser;
pub mod types;

pub use limits::Limits;
pub use number::format_number;
pub use parser::{parse, parse_with_limits};
pub use types::{JsonValue, Map};
