//! Loading a resolved document.
//!
//! Read the file, parse it as tolerant JSON, make sure the top level is an
//! object, then encode it. Every failure comes back as a [`LoadError`] that
//! names the file and the step that broke.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;
use url::Url;

use crate::encode::Encoder;
use crate::error::{EncodeError, LoadError, LoadPhase};
use crate::json::{parse_with_limits, JsonValue, Map};
use crate::options::ImporterOptions;
use crate::resolve::Locator;

/// Syntax of the generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// SCSS (brace syntax)
    Scss,
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Syntax::Scss => f.write_str("scss"),
        }
    }
}

/// Generated stylesheet for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutput {
    /// SCSS source text
    pub contents: String,
    /// Syntax of `contents`
    pub syntax: Syntax,
    /// URL of the JSON document, for source maps
    pub source_map_url: Url,
}

/// Turn a parsed root into the map whose entries become declarations.
///
/// A top-level array is wrapped under the file's stem, so `colors.json`
/// holding `["a", "b"]` becomes `$colors: (a,b);`.
pub fn document_root(value: JsonValue, path: &Path) -> Result<Map, EncodeError> {
    match value {
        JsonValue::Object(map) => Ok(map),
        JsonValue::Array(items) => {
            let name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            let mut map = Map::with_capacity(1);
            map.insert(name, JsonValue::Array(items));
            Ok(map)
        }
        other => Err(EncodeError::UnsupportedRoot {
            found: other.type_name(),
        }),
    }
}

/// Loads documents with a fixed set of options.
#[derive(Debug, Clone, Copy)]
pub struct Loader<'a> {
    options: &'a ImporterOptions,
}

impl<'a> Loader<'a> {
    /// Create a loader for the given options.
    pub fn new(options: &'a ImporterOptions) -> Self {
        Self { options }
    }

    /// Load and convert the document at `locator`.
    pub fn load(&self, locator: &Locator) -> Result<ImportOutput, LoadError> {
        let path = locator.path();
        debug!(path = %path.display(), "loading JSON document");

        let text =
            fs::read_to_string(path).map_err(|e| LoadError::new(path, LoadPhase::Read, e))?;
        let contents = self.convert(&text, path)?;

        debug!(path = %path.display(), bytes = contents.len(), "converted JSON document");
        Ok(ImportOutput {
            contents,
            syntax: Syntax::Scss,
            source_map_url: locator.url().clone(),
        })
    }

    /// Convert JSON text as if it had been read from `path`.
    ///
    /// `path` names the document in errors and supplies the variable name
    /// for a top-level array.
    pub fn convert(&self, text: &str, path: &Path) -> Result<String, LoadError> {
        let value = parse_with_limits(text, self.options.limits)
            .map_err(|e| LoadError::new(path, LoadPhase::Parse, e))?;
        document_root(value, path)
            .and_then(|root| Encoder::new(self.options).encode_document(&root))
            .map_err(|e| LoadError::new(path, LoadPhase::Transform, e))
    }
}
