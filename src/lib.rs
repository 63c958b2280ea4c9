#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Static confusable-to-ASCII substitution table.
pub mod confusables;
/// Centralized constants used across sanitizers, preprocessing, and listing.
pub mod constants;
/// Reusable demo runners shared by the demo binaries.
pub mod example_apps;
/// Homoglyph-aware ASCII normalization.
pub mod homoglyph;
/// Dataset-folder file listing helpers.
pub mod listing;
/// Metadata extraction and file-listing correlation.
pub mod metadata;
/// Identifier-sanitization accounting.
pub mod metrics;
/// Per-record preprocessing into the canonical schema.
pub mod preprocess;
/// Raw and canonical record shapes.
pub mod record;
/// Field sanitizers for identifiers, numerics, and detail blobs.
pub mod sanitize;
/// General text normalization built on the homoglyph pass.
pub mod text;
/// Shared type aliases.
pub mod types;

mod errors;

pub use errors::PipelineError;
pub use homoglyph::{HomoglyphNormalizer, Transliterate, Unidecoder, normalize_homoglyphs};
pub use listing::{FileListing, list_ids_and_paths, list_ids_and_paths_with_extension};
pub use metadata::{MetadataIndex, ProductFields, extract_metadata, resolve_listing};
pub use metrics::{AsinCollision, AsinCollisionReport, asin_collision_report};
pub use preprocess::{Preprocessor, PreprocessorConfig};
pub use record::{CleanedRecord, RawFields, RawRecord};
pub use sanitize::{clean_float, clean_int, clean_parent_asin, parse_details};
pub use text::{TextNormalizer, normalize_to_ascii};
pub use types::{Asin, DetailKey, FileId, PathString};
