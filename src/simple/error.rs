use thiserror::Error;

use crate::simple::path::FieldPath;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SimpleError>;

/// Boxed error type accepted from fallible override hooks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced while parsing JSON and converting source data.
///
/// Conversion failures always carry the access path at which the problem
/// occurred; the root path renders as the empty string.
#[derive(Debug, Error)]
pub enum SimpleError {
	/// JSON syntax error from the underlying parser, surfaced verbatim.
	#[error(transparent)]
	Json(#[from] serde_json::Error),
	/// Source shape has no mapping to a simple value.
	#[error("cannot convert value at {path}: cannot convert value of kind {kind} to simple value")]
	UnsupportedKind {
		/// Access path of the offending value.
		path: FieldPath,
		/// Source kind name, e.g. `chan` or `func`.
		kind: &'static str,
	},
	/// Mapping key shape cannot be reduced to text.
	#[error("cannot convert value at {path}: map key with {key_kind} type \"{type_name}\" cannot be stringified")]
	KeyNotStringifiable {
		/// Access path of the mapping holding the key.
		path: FieldPath,
		/// Key kind name, e.g. `array` or `float`.
		key_kind: &'static str,
		/// Key type name as reported by its source.
		type_name: String,
	},
	/// A caller-supplied override hook reported failure.
	#[error("cannot convert value at {path}: {source}")]
	Hook {
		/// Access path of the value the hook was converting.
		path: FieldPath,
		/// Original hook error, preserved as the cause.
		#[source]
		source: BoxError,
	},
	/// Recursion reached the configured depth ceiling.
	#[error("cannot convert value at {path}: value too deep (max depth {max_depth})")]
	TooDeep {
		/// Access path at which the ceiling was hit.
		path: FieldPath,
		/// Configured depth ceiling.
		max_depth: usize,
	},
}
