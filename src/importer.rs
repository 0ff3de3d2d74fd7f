//! Host compiler hooks.
//!
//! A stylesheet compiler asks each registered importer two questions:
//! "is this reference yours, and if so which file is it?" ([`Importer::canonicalize`])
//! and "what are the contents of that file?" ([`Importer::load`]).

use std::path::PathBuf;

use tracing::debug;
use url::Url;

use crate::error::LoadError;
use crate::loader::{ImportOutput, Loader};
use crate::options::ImporterOptions;
use crate::resolve::{Locator, PathResolver};

/// Information the host passes along with a reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalizeContext {
    /// URL of the stylesheet containing the import, if known
    pub containing_url: Option<Url>,
}

impl CanonicalizeContext {
    /// Context for a reference made from the file at `url`.
    pub fn containing(url: Url) -> Self {
        Self {
            containing_url: Some(url),
        }
    }

    /// Path of the containing stylesheet, when it lives on disk.
    pub fn containing_path(&self) -> Option<PathBuf> {
        self.containing_url
            .as_ref()
            .filter(|url| url.scheme() == "file")
            .and_then(|url| url.to_file_path().ok())
    }
}

/// The two hooks a stylesheet compiler calls on a custom importer.
pub trait Importer {
    /// Map a reference to a canonical document, or `None` if it is not
    /// handled by this importer.
    fn canonicalize(&self, reference: &str, context: &CanonicalizeContext) -> Option<Locator>;

    /// Produce the stylesheet for a document returned by `canonicalize`.
    fn load(&self, locator: &Locator) -> Result<ImportOutput, LoadError>;
}

/// Imports `.json` files as SCSS variables.
#[derive(Debug, Clone, Default)]
pub struct JsonImporter {
    options: ImporterOptions,
    resolver: PathResolver,
}

impl JsonImporter {
    /// Create an importer. The options are fixed for its lifetime.
    pub fn new(options: ImporterOptions) -> Self {
        let resolver = PathResolver::new(options.load_paths.iter().cloned());
        Self { options, resolver }
    }

    /// Options this importer was built with.
    pub fn options(&self) -> &ImporterOptions {
        &self.options
    }
}

impl Importer for JsonImporter {
    fn canonicalize(&self, reference: &str, context: &CanonicalizeContext) -> Option<Locator> {
        let containing = context.containing_path();
        let locator = self.resolver.resolve(reference, containing.as_deref());
        if locator.is_none() {
            debug!(reference, "JSON importer declined reference");
        }
        locator
    }

    fn load(&self, locator: &Locator) -> Result<ImportOutput, LoadError> {
        Loader::new(&self.options).load(locator)
    }
}

/// Build a [`JsonImporter`] from options.
pub fn json_importer(options: ImporterOptions) -> JsonImporter {
    JsonImporter::new(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_json_importer_factory() {
        let importer = json_importer(ImporterOptions::default().with_convert_case(true));
        assert!(importer.options().convert_case);
    }

    #[test]
    fn test_non_json_reference_declined() {
        let importer = JsonImporter::default();
        assert!(importer
            .canonicalize("file.txt", &CanonicalizeContext::default())
            .is_none());
    }

    #[test]
    fn test_containing_url_directory_is_searched() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("strings.json"), r##"{"color-red": "#c33"}"##).unwrap();
        let scss = dir.path().join("strings.scss");
        let context = CanonicalizeContext::containing(Url::from_file_path(&scss).unwrap());

        let importer = JsonImporter::default();
        let locator = importer.canonicalize("strings.json", &context).unwrap();
        let output = importer.load(&locator).unwrap();
        assert_eq!(output.contents, "$color-red: #c33;");
    }

    #[test]
    fn test_non_file_containing_url_ignored() {
        let context =
            CanonicalizeContext::containing(Url::parse("https://example.com/a.scss").unwrap());
        assert_eq!(context.containing_path(), None);
    }
}
