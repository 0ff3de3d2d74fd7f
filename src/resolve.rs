//! Reference resolution across search roots.
//!
//! A reference such as `"tokens/colors.json"` is tried against an ordered,
//! de-duplicated list of directories: the importing file's directory first,
//! then each configured search root. The first directory holding a readable
//! file wins.
//!
//! Probing never fails loudly. A candidate that is missing, unreadable, or
//! whose path the OS rejects outright (embedded NUL and the like) is logged
//! and skipped, and a reference nobody can satisfy yields `None` so the host
//! can fall back to its own resolution.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use indexmap::IndexSet;
use tracing::debug;
use url::Url;

/// The only extension this importer claims.
pub const JSON_EXTENSION: &str = ".json";

/// Whether `reference` names a JSON document this importer handles.
///
/// Only `.json` qualifies; `.json5`, `.jsonc` and `.js` do not.
pub fn is_json_file(reference: &str) -> bool {
    reference.ends_with(JSON_EXTENSION)
}

/// A resolved document: absolute path plus its `file:` URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    path: PathBuf,
    url: Url,
}

impl Locator {
    /// Build a locator from an absolute path.
    ///
    /// Returns `None` for relative paths, which have no `file:` URL.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let url = Url::from_file_path(&path).ok()?;
        Some(Self { path, url })
    }

    /// Build a locator from a `file:` URL.
    pub fn from_url(url: &Url) -> Option<Self> {
        let path = url.to_file_path().ok()?;
        Some(Self {
            path,
            url: url.clone(),
        })
    }

    /// Absolute file-system path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `file:` URL of the document.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Why a single candidate directory did not produce a match.
#[derive(Debug)]
enum Miss {
    Io(io::Error),
    NotAFile,
    NoUrl,
}

impl fmt::Display for Miss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Miss::Io(e) => write!(f, "{}", e),
            Miss::NotAFile => f.write_str("not a regular file"),
            Miss::NoUrl => f.write_str("path has no file URL"),
        }
    }
}

/// Finds the file a reference points to.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    load_paths: Vec<PathBuf>,
}

impl PathResolver {
    /// Create a resolver over the given search roots, in priority order.
    pub fn new<I, P>(load_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            load_paths: load_paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Ordered, de-duplicated candidate directories.
    ///
    /// The directory of `containing_file` comes first when given.
    pub fn candidates(&self, containing_file: Option<&Path>) -> Vec<PathBuf> {
        let mut dirs = IndexSet::new();
        if let Some(parent) = containing_file.and_then(Path::parent) {
            dirs.insert(parent.to_path_buf());
        }
        for root in &self.load_paths {
            dirs.insert(root.clone());
        }
        dirs.into_iter().collect()
    }

    /// Resolve `reference` to the first readable match.
    ///
    /// Returns `None` when the reference is not a `.json` file or no
    /// candidate directory holds it.
    pub fn resolve(&self, reference: &str, containing_file: Option<&Path>) -> Option<Locator> {
        if !is_json_file(reference) {
            return None;
        }

        for dir in self.candidates(containing_file) {
            match probe(&dir, reference) {
                Ok(locator) => {
                    debug!(
                        reference,
                        dir = %dir.display(),
                        path = %locator.path().display(),
                        "resolved JSON reference"
                    );
                    return Some(locator);
                }
                Err(miss) => {
                    debug!(reference, dir = %dir.display(), %miss, "candidate rejected");
                }
            }
        }

        debug!(reference, "no candidate matched");
        None
    }
}

/// Test one candidate directory.
fn probe(dir: &Path, reference: &str) -> Result<Locator, Miss> {
    let path = absolutize(&dir.join(reference)).map_err(Miss::Io)?;
    let file = fs::File::open(&path).map_err(Miss::Io)?;
    if !file.metadata().map_err(Miss::Io)?.is_file() {
        return Err(Miss::NotAFile);
    }
    Locator::from_path(path).ok_or(Miss::NoUrl)
}

/// Make `path` absolute against the working directory and drop `.`/`..`
/// components without touching the file system.
fn absolutize(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}
