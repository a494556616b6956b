use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::{Number, Value};

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Value::Null => serializer.serialize_unit(),
			Value::Bool(value) => serializer.serialize_bool(*value),
			Value::Number(number) => number.serialize(serializer),
			Value::String(text) => serializer.serialize_str(text),
			Value::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items.iter() {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Value::Object(map) => {
				let mut out = serializer.serialize_map(Some(map.len()))?;
				for (key, item) in map.iter() {
					out.serialize_entry(key, item)?;
				}
				out.end()
			}
			Value::Function(function) => Err(S::Error::custom(format!("cannot serialize function {}", function.type_name()))),
			Value::Capsule(capsule) => Err(S::Error::custom(format!("cannot serialize capsule {}", capsule.type_name()))),
		}
	}
}

impl From<serde_json::Value> for Value {
	fn from(json: serde_json::Value) -> Self {
		match json {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(value) => Value::Bool(value),
			serde_json::Value::Number(number) => from_json_number(&number),
			serde_json::Value::String(text) => Value::string(text),
			serde_json::Value::Array(items) => Value::array(items.into_iter().map(Value::from)),
			serde_json::Value::Object(map) => Value::object(map.into_iter().map(|(key, item)| (key, Value::from(item)))),
		}
	}
}

fn from_json_number(number: &serde_json::Number) -> Value {
	if let Some(value) = number.as_i64() {
		Value::Number(Number::from_i64(value))
	} else if let Some(value) = number.as_u64() {
		Value::Number(Number::from_u64(value))
	} else {
		number.as_f64().map_or(Value::Null, Value::float)
	}
}
