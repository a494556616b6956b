use crate::value::{FieldPath, PathStep, Value, ValueError};

#[test]
fn parses_fields_indices_and_keys() {
	let path = FieldPath::parse("key.object.field1[2]").expect("path parses");
	assert_eq!(
		path.steps,
		vec![
			PathStep::Field("key".into()),
			PathStep::Field("object".into()),
			PathStep::Field("field1".into()),
			PathStep::Index(2),
		]
	);

	let keyed = FieldPath::parse("labels[\"app.kubernetes.io/name\"].len").expect("keyed path parses");
	assert_eq!(keyed.steps[1], PathStep::Key("app.kubernetes.io/name".into()));
	assert_eq!(keyed.steps[2], PathStep::Field("len".into()));
}

#[test]
fn rejects_malformed_paths() {
	for input in ["", ".a", "a.", "a[", "a[x]", "a[\"open", "a..b", "a-b"] {
		let err = FieldPath::parse(input).expect_err("path should be rejected");
		assert!(matches!(err, ValueError::InvalidPath { .. }), "unexpected error for {input:?}: {err}");
	}
}

#[test]
fn display_round_trips_canonical_form() {
	for input in ["a", "key.object.field1[2]", "matrix[0][1]", "labels[\"x y\"].z", "[\"odd key\"].port", "[3]"] {
		let path = FieldPath::parse(input).expect("path parses");
		assert_eq!(path.to_string(), input);
	}
}

#[test]
fn lookup_walks_objects_and_arrays() {
	let value = Value::object([(
		"servers",
		Value::array([Value::object([("port", Value::from(8080_u16))]), Value::object([("port", Value::from(9090_u16))])]),
	)]);

	let path = FieldPath::parse("servers[1].port").expect("path parses");
	assert_eq!(value.lookup(&path), Some(&Value::from(9090_u16)));

	let missing = FieldPath::parse("servers[5].port").expect("path parses");
	assert_eq!(value.lookup(&missing), None);
	assert_eq!(value.lookup(&FieldPath::default()), Some(&value));
}
