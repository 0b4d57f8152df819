use std::collections::BTreeMap;
use std::fmt;

use crate::simple::json::to_json;

/// Structured data with no specific schema, constrained to JSON's type set.
///
/// A value is always exactly one of six kinds. Composite kinds are
/// recursively built from `Value`, so a value is always a finite tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// An intentionally missing value.
	Null,
	/// True or false.
	Bool(bool),
	/// A numeric value. IEEE-754 double precision; no integer distinction.
	Number(f64),
	/// UTF-8 text.
	String(String),
	/// An ordered sequence of values.
	Array(Vec<Value>),
	/// String-keyed mapping to values. Keys are unique; iteration and
	/// rendering follow sorted key order.
	Struct(BTreeMap<String, Value>),
}

impl Value {
	/// Kind name for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Null => "null",
			Value::Bool(_) => "bool",
			Value::Number(_) => "number",
			Value::String(_) => "string",
			Value::Array(_) => "array",
			Value::Struct(_) => "struct",
		}
	}

	/// True for [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Inner boolean, if this is a bool.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Inner number, if this is a number.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Value::Number(value) => Some(*value),
			_ => None,
		}
	}

	/// Inner text, if this is a string.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(value) => Some(value),
			_ => None,
		}
	}

	/// Inner elements, if this is an array.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Value::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Inner fields, if this is a struct.
	pub fn as_struct(&self) -> Option<&BTreeMap<String, Value>> {
		match self {
			Value::Struct(fields) => Some(fields),
			_ => None,
		}
	}

	/// Field lookup on a struct; `None` for any other kind.
	pub fn get(&self, key: &str) -> Option<&Value> {
		match self {
			Value::Struct(fields) => fields.get(key),
			_ => None,
		}
	}
}

impl fmt::Display for Value {
	/// Renders canonical JSON text.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&to_json(self))
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Number(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Number(value as f64)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::String(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Value::Array(items)
	}
}

impl From<BTreeMap<String, Value>> for Value {
	fn from(fields: BTreeMap<String, Value>) -> Self {
		Value::Struct(fields)
	}
}

impl FromIterator<(String, Value)> for Value {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Value::Struct(iter.into_iter().collect())
	}
}

impl FromIterator<Value> for Value {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Value::Array(iter.into_iter().collect())
	}
}
