use std::collections::BTreeMap;

use crate::simple::error::{Result, SimpleError};
use crate::simple::path::{FieldPath, PathStep};
use crate::simple::source::{Hook, Key, Shape, Source};
use crate::simple::value::Value;

/// Hard ceiling on conversion recursion depth, in path segments.
const MAX_DEPTH: usize = 1000;

/// Runtime limits for source conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
	/// Maximum recursion depth, counted in path segments. Reaching the
	/// ceiling yields [`SimpleError::TooDeep`] rather than recursing on.
	pub max_depth: usize,
}

impl Default for ConvertOptions {
	fn default() -> Self {
		Self { max_depth: MAX_DEPTH }
	}
}

/// Reduce any source value to a simple [`Value`] under default limits.
///
/// Channels, functions, and raw pointers do not represent transmittable
/// values and fail with a path-qualified error. A source implementing a
/// conversion [`Hook`] overrides this logic and handles its own
/// simplification.
pub fn from_source(input: &dyn Source) -> Result<Value> {
	from_source_with(input, &ConvertOptions::default())
}

/// Reduce any source value to a simple [`Value`] under explicit limits.
pub fn from_source_with(input: &dyn Source, opt: &ConvertOptions) -> Result<Value> {
	let mut steps = Vec::new();
	convert_node(input, opt, &mut steps)
}

fn convert_node(input: &dyn Source, opt: &ConvertOptions, steps: &mut Vec<PathStep>) -> Result<Value> {
	// The hook wins over everything, including the depth guard.
	if let Some(hook) = input.hook() {
		return match hook {
			Hook::Value(value) => Ok(value),
			Hook::TryValue(Ok(value)) => Ok(value),
			Hook::TryValue(Err(source)) => Err(SimpleError::Hook {
				path: FieldPath::new(steps.clone()),
				source,
			}),
		};
	}

	if steps.len() >= opt.max_depth {
		return Err(SimpleError::TooDeep {
			path: FieldPath::new(steps.clone()),
			max_depth: opt.max_depth,
		});
	}

	match input.shape() {
		Shape::Null => Ok(Value::Null),
		// Dereferencing does not extend the path.
		Shape::Ref(inner) => convert_node(inner, opt, steps),
		Shape::Bool(value) => Ok(Value::Bool(value)),
		Shape::Int(value) => Ok(Value::Number(value as f64)),
		Shape::Uint(value) => Ok(Value::Number(value as f64)),
		Shape::Float(value) => Ok(Value::Number(value)),
		Shape::Text(text) => Ok(Value::String(text.into_owned())),
		Shape::Sequence(items) => {
			let mut out = Vec::with_capacity(items.len());
			for (index, item) in items.into_iter().enumerate() {
				steps.push(PathStep::Index(index));
				let value = convert_node(item, opt, steps)?;
				steps.pop();
				out.push(value);
			}
			Ok(Value::Array(out))
		}
		Shape::Record(fields) => {
			let mut out = BTreeMap::new();
			for field in fields {
				let name = field.name.into_owned();
				steps.push(PathStep::Field(name.clone()));
				let value = convert_node(field.value, opt, steps)?;
				steps.pop();
				out.insert(name, value);
			}
			Ok(Value::Struct(out))
		}
		Shape::Mapping(entries) => {
			let mut out = BTreeMap::new();
			for (key, entry) in entries {
				// Unsupported keys fail at the mapping's own path, before
				// the entry value is looked at.
				let key = stringify_key(key).map_err(|(key_kind, type_name)| SimpleError::KeyNotStringifiable {
					path: FieldPath::new(steps.clone()),
					key_kind,
					type_name,
				})?;
				steps.push(PathStep::Field(key.clone()));
				let value = convert_node(entry, opt, steps)?;
				steps.pop();
				out.insert(key, value);
			}
			Ok(Value::Struct(out))
		}
		Shape::Unsupported { kind } => Err(SimpleError::UnsupportedKind {
			path: FieldPath::new(steps.clone()),
			kind,
		}),
	}
}

fn stringify_key(key: Key<'_>) -> std::result::Result<String, (&'static str, String)> {
	match key {
		Key::Text(text) => Ok(text.into_owned()),
		Key::Int(value) => Ok(value.to_string()),
		Key::Uint(value) => Ok(value.to_string()),
		Key::Bool(true) => Ok("true".to_owned()),
		Key::Bool(false) => Ok("false".to_owned()),
		Key::Unsupported { kind, type_name } => Err((kind, type_name.into_owned())),
	}
}
