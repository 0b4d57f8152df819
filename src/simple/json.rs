use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::simple::error::Result;
use crate::simple::value::Value;

/// Instantiate a [`Value`] from JSON text.
///
/// The only possible failure is a JSON syntax error, surfaced verbatim
/// from the underlying parser.
pub fn from_json(text: &str) -> Result<Value> {
	Ok(serde_json::from_str(text)?)
}

/// Render a [`Value`] as canonical JSON text.
///
/// Scalars keep their exact literal forms; struct keys render in sorted
/// order, so output is deterministic.
pub fn to_json(value: &Value) -> String {
	match serde_json::to_string(value) {
		Ok(text) => text,
		// Simple values contain nothing a JSON serializer can reject.
		Err(err) => unreachable!("simple value failed to encode as JSON: {err}"),
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Value::Null => serializer.serialize_unit(),
			Value::Bool(value) => serializer.serialize_bool(*value),
			Value::Number(value) => serializer.serialize_f64(*value),
			Value::String(text) => serializer.serialize_str(text),
			Value::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Value::Struct(fields) => {
				let mut map = serializer.serialize_map(Some(fields.len()))?;
				for (key, value) in fields {
					map.serialize_entry(key, value)?;
				}
				map.end()
			}
		}
	}
}

impl<'de> Deserialize<'de> for Value {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		deserializer.deserialize_any(ValueVisitor)
	}
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
	type Value = Value;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a JSON value")
	}

	fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<Value, E> {
		Ok(Value::Bool(value))
	}

	fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Value, E> {
		Ok(Value::Number(value as f64))
	}

	fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Value, E> {
		Ok(Value::Number(value as f64))
	}

	fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Value, E> {
		Ok(Value::Number(value))
	}

	fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<Value, E> {
		Ok(Value::String(value.to_owned()))
	}

	fn visit_string<E: de::Error>(self, value: String) -> std::result::Result<Value, E> {
		Ok(Value::String(value))
	}

	fn visit_unit<E: de::Error>(self) -> std::result::Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_none<E: de::Error>(self) -> std::result::Result<Value, E> {
		Ok(Value::Null)
	}

	fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<Value, D::Error> {
		deserializer.deserialize_any(ValueVisitor)
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> std::result::Result<Value, A::Error> {
		let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
		while let Some(item) = access.next_element()? {
			items.push(item);
		}
		Ok(Value::Array(items))
	}

	fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Value, A::Error> {
		let mut fields = BTreeMap::new();
		while let Some((key, value)) = access.next_entry::<String, Value>()? {
			fields.insert(key, value);
		}
		Ok(Value::Struct(fields))
	}
}
