//! Importer configuration.
//!
//! The options bundle is built once, handed to
//! [`JsonImporter::new`](crate::JsonImporter::new), and never modified
//! afterwards. It can also be read from a JSON file with camelCase keys:
//!
//! ```json
//! {
//!     "loadPaths": ["./tokens", "./vendor/theme"],
//!     "convertCase": true,
//!     "resolveInternalLinks": true,
//!     "stringifyAllKeys": false
//! }
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use crate::json::Limits;

/// Configuration for [`JsonImporter`](crate::JsonImporter).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ImporterOptions {
    /// Extra directories probed after the importing file's own directory.
    pub load_paths: Vec<PathBuf>,
    /// Convert camelCase and PascalCase keys to kebab-case.
    pub convert_case: bool,
    /// Rewrite `var:a|b|c` references to `var(--wp--a--b--c)`.
    #[serde(alias = "resolveWordPressInternals")]
    pub resolve_internal_links: bool,
    /// Quote every nested map key as a string literal.
    #[serde(alias = "stringifyKeys")]
    pub stringify_all_keys: bool,
    /// Parser and encoder limits.
    pub limits: Limits,
}

impl ImporterOptions {
    /// Options with every feature off and no search roots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a search root.
    pub fn with_load_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.load_paths.push(path.into());
        self
    }

    /// Replace the search roots.
    pub fn with_load_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.load_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable kebab-case key conversion.
    pub fn with_convert_case(mut self, enabled: bool) -> Self {
        self.convert_case = enabled;
        self
    }

    /// Enable or disable internal link rewriting.
    pub fn with_resolve_internal_links(mut self, enabled: bool) -> Self {
        self.resolve_internal_links = enabled;
        self
    }

    /// Enable or disable quoting of nested map keys.
    pub fn with_stringify_all_keys(mut self, enabled: bool) -> Self {
        self.stringify_all_keys = enabled;
        self
    }

    /// Override the parser/encoder limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }
}
