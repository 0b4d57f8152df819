mod convert;
mod error;
mod json;
mod path;
mod source;
mod value;

/// Conversion engine entry points and options.
pub use convert::{ConvertOptions, from_source, from_source_with};
/// Error and result aliases.
pub use error::{BoxError, Result, SimpleError};
/// JSON bridge entry points.
pub use json::{from_json, to_json};
/// Conversion path types.
pub use path::{FieldPath, PathStep};
/// Source introspection surface and override hooks.
pub use source::{Field, Hook, Key, KeySource, Shape, Source};
/// Simple value model.
pub use value::Value;
