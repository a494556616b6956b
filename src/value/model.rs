use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::value::{Capsule, CapsuleType, FieldPath, Function, Kind, Number, PathStep};

/// Object payload: unique string keys in sorted order.
pub type Map = BTreeMap<String, Value>;

/// Immutable runtime datum of the configuration language.
///
/// Composite payloads are shared behind `Arc` and never mutated, so cloning a
/// `Value` is cheap and values may be read from many threads at once.
#[derive(Debug, Clone, Default)]
pub enum Value {
	/// Absence of a value.
	#[default]
	Null,
	/// Boolean.
	Bool(bool),
	/// Number.
	Number(Number),
	/// Text.
	String(Arc<str>),
	/// Ordered sequence.
	Array(Arc<[Value]>),
	/// String-keyed mapping.
	Object(Arc<Map>),
	/// Shared callable.
	Function(Function),
	/// Opaque host value.
	Capsule(Capsule),
}

impl Value {
	/// String value.
	pub fn string(text: impl Into<Arc<str>>) -> Self {
		Value::String(text.into())
	}

	/// Array value collected into fresh storage.
	pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
		Value::Array(items.into_iter().collect())
	}

	/// Object value collected into fresh storage; later duplicate keys win.
	pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Value)>) -> Self {
		Value::Object(Arc::new(entries.into_iter().map(|(key, value)| (key.into(), value)).collect()))
	}

	/// Float value; NaN has no number representation and becomes `Null`.
	pub fn float(value: f64) -> Self {
		Number::from_f64(value).map_or(Value::Null, Value::Number)
	}

	/// Function value sharing `callable`.
	pub fn function<F: ?Sized + Send + Sync + 'static>(callable: Arc<F>) -> Self {
		Value::Function(Function::new(callable))
	}

	/// Capsule value wrapping `host` without consulting its representation hook.
	pub fn encapsulate<T: CapsuleType>(host: T) -> Self {
		Value::Capsule(Capsule::new(host))
	}

	/// Variant tag.
	pub fn kind(&self) -> Kind {
		match self {
			Value::Null => Kind::Null,
			Value::Bool(_) => Kind::Bool,
			Value::Number(_) => Kind::Number,
			Value::String(_) => Kind::String,
			Value::Array(_) => Kind::Array,
			Value::Object(_) => Kind::Object,
			Value::Function(_) => Kind::Function,
			Value::Capsule(_) => Kind::Capsule,
		}
	}

	/// Whether this is `Null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Boolean payload.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Number payload.
	pub fn as_number(&self) -> Option<Number> {
		match self {
			Value::Number(value) => Some(*value),
			_ => None,
		}
	}

	/// String payload.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(value) => Some(value),
			_ => None,
		}
	}

	/// Array elements.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Value::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Object entries.
	pub fn as_object(&self) -> Option<&Map> {
		match self {
			Value::Object(map) => Some(map),
			_ => None,
		}
	}

	/// Function payload.
	pub fn as_function(&self) -> Option<&Function> {
		match self {
			Value::Function(function) => Some(function),
			_ => None,
		}
	}

	/// Capsule payload.
	pub fn as_capsule(&self) -> Option<&Capsule> {
		match self {
			Value::Capsule(capsule) => Some(capsule),
			_ => None,
		}
	}

	/// Object entry by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.as_object().and_then(|map| map.get(key))
	}

	/// Number of array elements or object entries.
	pub fn len(&self) -> Option<usize> {
		match self {
			Value::Array(items) => Some(items.len()),
			Value::Object(map) => Some(map.len()),
			_ => None,
		}
	}

	/// Host view of the payload handed to from-capsule hooks.
	///
	/// Capsules expose the wrapped host value. Other kinds expose their payload:
	/// `()` for null, `bool`, [`Number`], `Arc<str>`, `Arc<[Value]>`,
	/// `Arc<Map>`, and [`Function`].
	pub fn host(&self) -> &dyn Any {
		match self {
			Value::Null => &(),
			Value::Bool(value) => value,
			Value::Number(value) => value,
			Value::String(value) => value,
			Value::Array(items) => items,
			Value::Object(map) => map,
			Value::Function(function) => function,
			Value::Capsule(capsule) => capsule.as_any(),
		}
	}

	/// Resolve a field path against nested objects and arrays.
	pub fn lookup(&self, path: &FieldPath) -> Option<&Value> {
		let mut current = self;
		for step in &path.steps {
			current = match step {
				PathStep::Field(key) | PathStep::Key(key) => current.get(key)?,
				PathStep::Index(index) => current.as_array()?.get(*index)?,
			};
		}
		Some(current)
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Value::Null, Value::Null) => true,
			(Value::Bool(lhs), Value::Bool(rhs)) => lhs == rhs,
			(Value::Number(lhs), Value::Number(rhs)) => lhs == rhs,
			(Value::String(lhs), Value::String(rhs)) => lhs == rhs,
			(Value::Array(lhs), Value::Array(rhs)) => lhs == rhs,
			(Value::Object(lhs), Value::Object(rhs)) => lhs == rhs,
			(Value::Function(lhs), Value::Function(rhs)) => lhs.ptr_eq(rhs),
			(Value::Capsule(lhs), Value::Capsule(rhs)) => lhs.ptr_eq(rhs),
			_ => false,
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<Number> for Value {
	fn from(value: Number) -> Self {
		Value::Number(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::string(value)
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::string(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Value::Array(items.into())
	}
}

impl From<Map> for Value {
	fn from(map: Map) -> Self {
		Value::Object(Arc::new(map))
	}
}

macro_rules! value_from_int {
	($($ty:ty),+) => {$(
		impl From<$ty> for Value {
			fn from(value: $ty) -> Self {
				Value::Number(Number::from(value))
			}
		}
	)+};
}

value_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
