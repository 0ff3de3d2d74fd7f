//! Import JSON documents into SCSS.
//!
//! This crate lets a stylesheet compiler treat a `.json` file (comments and
//! trailing commas allowed) as an importable module. Each top-level key
//! becomes an SCSS variable; arrays become lists and objects become maps.
//!
//! # Architecture
//!
//! - [`json`] - Tolerant JSON parser producing an ordered value tree
//! - [`encode`] - JSON value to SCSS expression rendering
//! - [`resolve`] - Reference resolution across search roots
//! - [`loader`] - Read, parse, wrap and encode one document
//! - [`importer`] - The `canonicalize`/`load` hooks a compiler calls
//! - [`options`] - Immutable importer configuration
//! - [`error`] - Error types for each layer
//!
//! # Example
//!
//! ```no_run
//! use json_scss_importer::{CanonicalizeContext, Importer, ImporterOptions, JsonImporter};
//!
//! let importer = JsonImporter::new(
//!     ImporterOptions::new()
//!         .with_load_path("./tokens")
//!         .with_convert_case(true),
//! );
//!
//! if let Some(locator) = importer.canonicalize("colors.json", &CanonicalizeContext::default()) {
//!     let output = importer.load(&locator)?;
//!     println!("{}", output.contents);
//! }
//! # Ok::<(), json_scss_importer::LoadError>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod encode;
pub mod error;
pub mod importer;
pub mod json;
pub mod loader;
pub mod options;
pub mod resolve;

// Re-export commonly used types
pub use encode::Encoder;
pub use error::{EncodeError, JsonError, LoadError, LoadPhase};
pub use importer::{json_importer, CanonicalizeContext, Importer, JsonImporter};
pub use json::{JsonValue, Limits};
pub use loader::{ImportOutput, Loader, Syntax};
pub use options::ImporterOptions;
pub use resolve::{is_json_file, Locator, PathResolver};
