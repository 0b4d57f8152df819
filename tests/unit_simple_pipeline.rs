#![allow(missing_docs)]

use std::collections::BTreeMap;

use simpleval::simple::{Field, Shape, Source, Value, from_json, from_source, to_json};

struct RenderJob {
	name: String,
	frames: Vec<u32>,
	paused: Option<bool>,
	scale: f64,
}

impl Source for RenderJob {
	fn shape(&self) -> Shape<'_> {
		Shape::Record(vec![
			Field::new("name", &self.name),
			Field::new("frames", &self.frames),
			Field::new("paused", &self.paused),
			Field::new("scale", &self.scale),
		])
	}
}

#[test]
fn convert_encode_decode_round_trips_user_record() {
	let job = RenderJob {
		name: "turntable".to_owned(),
		frames: vec![1, 2, 3],
		paused: None,
		scale: 0.5,
	};

	let value = from_source(&job).expect("record converts");
	let mut expected = BTreeMap::new();
	expected.insert("name".to_owned(), Value::from("turntable"));
	expected.insert(
		"frames".to_owned(),
		Value::Array(vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]),
	);
	expected.insert("paused".to_owned(), Value::Null);
	expected.insert("scale".to_owned(), Value::Number(0.5));
	assert_eq!(value, Value::Struct(expected));

	let text = to_json(&value);
	assert_eq!(text, r#"{"frames":[1.0,2.0,3.0],"name":"turntable","paused":null,"scale":0.5}"#);

	let decoded = from_json(&text).expect("encoded value decodes");
	assert_eq!(decoded, value);
}

#[test]
fn decoded_documents_are_navigable() {
	let value = from_json(r#"{"scene":{"objects":[{"name":"camera"},{"name":"cube"}]}}"#).expect("document decodes");
	let objects = value.get("scene").and_then(|scene| scene.get("objects")).and_then(Value::as_array).expect("objects array exists");
	assert_eq!(objects.len(), 2);
	assert_eq!(objects[1].get("name").and_then(Value::as_str), Some("cube"));
}
