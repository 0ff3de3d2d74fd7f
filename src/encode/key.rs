//! Key eligibility and normalization.
//!
//! `$`, `@` and `:` are prefixes with their own meaning in SCSS, so keys that
//! start with them cannot become variable or map key names. One leading colon
//! is tolerated because theme files use pseudo-state keys such as `:hover`;
//! it is dropped from the emitted name.
//!
//! Entries whose value is the string `"#"` are placeholders meaning "leave
//! this out" and are skipped whatever their key looks like.

use crate::json::JsonValue;

/// Value that marks an entry as intentionally excluded.
pub const SENTINEL_VALUE: &str = "#";

const RESERVED_PREFIXES: [char; 3] = ['$', '@', ':'];

/// Whether `key` may be emitted, ignoring at most one leading colon.
pub fn is_eligible(key: &str) -> bool {
    let rest = key.strip_prefix(':').unwrap_or(key);
    !rest.starts_with(RESERVED_PREFIXES)
}

/// Strip the single leading colon allowed by [`is_eligible`].
pub fn normalize(key: &str) -> &str {
    key.strip_prefix(':').unwrap_or(key)
}

/// Whether `value` is the exclusion placeholder.
pub fn is_sentinel(value: &JsonValue) -> bool {
    value.as_str() == Some(SENTINEL_VALUE)
}
