use std::fmt;

/// Tag identifying which variant a [`Value`](crate::value::Value) holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
	/// Absence of a value.
	Null,
	/// `true` or `false`.
	Bool,
	/// Integer, unsigned, or floating number.
	Number,
	/// UTF-8 text.
	String,
	/// Ordered sequence of values.
	Array,
	/// String-keyed mapping of values.
	Object,
	/// Shared callable.
	Function,
	/// Opaque host value.
	Capsule,
}

impl Kind {
	/// Lowercase name used in diagnostics.
	pub fn as_str(self) -> &'static str {
		match self {
			Kind::Null => "null",
			Kind::Bool => "bool",
			Kind::Number => "number",
			Kind::String => "string",
			Kind::Array => "array",
			Kind::Object => "object",
			Kind::Function => "function",
			Kind::Capsule => "capsule",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Shape category a destination type is classified into before decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
	/// `bool`.
	Bool,
	/// Integer and floating types.
	Number,
	/// Strings and text-bridged types.
	String,
	/// Growable or fixed-size sequences.
	Sequence,
	/// String-keyed maps.
	Mapping,
	/// Types with a tagged field descriptor.
	Struct,
	/// Shared callables.
	Function,
	/// Opaque host types matched by exact type identity.
	Capsule,
	/// Accepts any value unchanged.
	Any,
}

impl Shape {
	/// Kind a source must have for the generic decode rule, `None` for [`Shape::Any`].
	pub fn kind(self) -> Option<Kind> {
		match self {
			Shape::Bool => Some(Kind::Bool),
			Shape::Number => Some(Kind::Number),
			Shape::String => Some(Kind::String),
			Shape::Sequence => Some(Kind::Array),
			Shape::Mapping | Shape::Struct => Some(Kind::Object),
			Shape::Function => Some(Kind::Function),
			Shape::Capsule => Some(Kind::Capsule),
			Shape::Any => None,
		}
	}
}
