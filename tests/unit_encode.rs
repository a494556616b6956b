#![allow(missing_docs)]

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use cfgval::value::{Fields, Kind, Number, Struct, Value, encode, struct_tags};

#[test]
fn scalars_map_to_their_kinds() {
	assert_eq!(encode(&()), Value::Null);
	assert_eq!(encode(&true), Value::Bool(true));
	assert_eq!(encode(&-7_i8), Value::Number(Number::from_i64(-7)));
	assert_eq!(encode(&u64::MAX).kind(), Kind::Number);
	assert_eq!(encode("text"), Value::string("text"));
	assert_eq!(encode(&String::from("owned")), Value::string("owned"));
	assert_eq!(encode(&Duration::from_millis(300)), Value::string("300ms"));
}

#[test]
fn nan_has_no_number_form() {
	assert!(encode(&f64::NAN).is_null());
	assert!(encode(&f32::NAN).is_null());
	assert_eq!(encode(&f64::INFINITY).kind(), Kind::Number);
}

#[test]
fn absent_options_are_null() {
	assert!(encode(&None::<i32>).is_null());
	assert_eq!(encode(&Some(4_u8)), Value::from(4));
	assert_eq!(encode(&Box::new(Arc::new(9_i64))), Value::from(9));
}

#[test]
fn composites_copy_their_inputs() {
	let mut items = vec![1, 2, 3];
	let value = encode(&items);
	items.push(4);
	assert_eq!(value.len(), Some(3));

	let mut map = HashMap::from([("a".to_owned(), 1)]);
	let value = encode(&map);
	map.insert("b".to_owned(), 2);
	assert_eq!(value.len(), Some(1));
}

#[test]
fn object_keys_are_sorted() {
	let map = BTreeMap::from([("zeta".to_owned(), 1), ("alpha".to_owned(), 2)]);
	let value = encode(&HashMap::<String, i32>::from_iter(map));
	let keys: Vec<_> = value.as_object().map(|map| map.keys().cloned().collect()).unwrap_or_default();
	assert_eq!(keys, ["alpha", "zeta"]);
}

#[derive(Debug, Default)]
struct Backend {
	address: String,
	weight: Option<u32>,
	notes: String,
}

impl Struct for Backend {
	fn describe(fields: &mut Fields<Self>) {
		fields
			.field("address,attr", |s| &s.address, |s| &mut s.address)
			.field("weight,attr,optional", |s| &s.weight, |s| &mut s.weight);
	}
}

cfgval::impl_struct!(Backend);

#[test]
fn structs_encode_tagged_fields_only() {
	let backend = Backend {
		address: "10.0.0.9:80".into(),
		weight: None,
		notes: "not exported".into(),
	};
	let value = encode(&backend);
	assert_eq!(value.len(), Some(2));
	assert_eq!(value.get("address"), Some(&Value::string("10.0.0.9:80")));
	assert_eq!(value.get("weight"), Some(&Value::Null));
	assert!(value.get("notes").is_none());
	assert!(!backend.notes.is_empty());

	let tags = struct_tags::<Backend>();
	assert!(tags[1].optional && tags[1].attr);
}

#[test]
fn capsules_keep_reference_identity() {
	let (tx, _rx) = mpsc::channel::<u8>();
	let value = encode(&tx);
	assert_eq!(value.kind(), Kind::Capsule);
	assert!(value.as_capsule().is_some_and(|capsule| capsule.type_name().contains("Sender")));
	assert_eq!(value.clone(), value);
	assert_ne!(encode(&tx), value);
}

#[test]
fn arrays_serialize_like_json() {
	let value = encode(&vec![Some(1.5), None]);
	assert_eq!(serde_json::to_string(&value).expect("serializes"), "[1.5,null]");
}
