//! Resource limits for parsing and encoding.
//!
//! Theme and token files are small, so the defaults are generous; they only
//! exist to stop a pathological file from exhausting memory or the stack.

use serde::Deserialize;

/// Size and depth limits shared by the parser and the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Limits {
    /// Maximum input size in bytes
    pub max_input_size: u64,
    /// Maximum nesting depth for arrays/objects
    pub max_nesting_depth: usize,
}

impl Limits {
    /// Default limits.
    pub const fn standard() -> Self {
        Self {
            max_input_size: 16 * 1024 * 1024, // 16 MiB
            max_nesting_depth: 512,
        }
    }

    /// Tight limits, handy for tests and untrusted input.
    pub const fn strict() -> Self {
        Self {
            max_input_size: 1024 * 1024, // 1 MiB
            max_nesting_depth: 32,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_input_size, 16 * 1024 * 1024);
        assert_eq!(limits.max_nesting_depth, 512);
    }

    #[test]
    fn test_strict_is_tighter() {
        let strict = Limits::strict();
        assert!(strict.max_input_size < Limits::standard().max_input_size);
        assert!(strict.max_nesting_depth < Limits::standard().max_nesting_depth);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let limits: Limits = serde_json::from_str(r#"{"maxNestingDepth": 4}"#).unwrap();
        assert_eq!(limits.max_nesting_depth, 4);
        assert_eq!(limits.max_input_size, Limits::standard().max_input_size);
    }
}
