use thiserror::Error;

use crate::value::{FieldPath, Kind, Number, PathStep};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, ValueError>;

/// Failure reported by a conversion hook or a struct validator.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced while decoding values into host types.
///
/// Path frames (`Element`, `Field`, `Key`) display only their inner error, so
/// the outward message is always the innermost cause. Use [`ValueError::path`]
/// or [`ValueError::describe`] for location context.
#[derive(Debug, Error)]
pub enum ValueError {
	/// Source kind cannot be used for the destination.
	#[error("expected {expected}, got {got}")]
	TypeMismatch {
		/// Kind the destination accepts.
		expected: Kind,
		/// Kind of the source value.
		got: Kind,
	},
	/// Fixed-size destination length differs from the source array.
	#[error("array has {got} elements, expected {expected}")]
	ArrayLength {
		/// Source array length.
		got: usize,
		/// Destination length.
		expected: usize,
	},
	/// Fractional number decoded into an integer destination.
	#[error("{number} is not an integer")]
	NotIntegral {
		/// Offending number.
		number: Number,
	},
	/// Number outside the destination type's range.
	#[error("{number} overflows {target}")]
	NumberOverflow {
		/// Offending number.
		number: Number,
		/// Destination type name.
		target: &'static str,
	},
	/// Capsule holds a different host type than the destination.
	#[error("expected capsule, got capsule")]
	CapsuleType {
		/// Destination type name.
		expected: &'static str,
		/// Wrapped host type name.
		got: &'static str,
	},
	/// Function has a different callable type than the destination.
	#[error("expected function, got function")]
	FunctionType {
		/// Destination callable type name.
		expected: &'static str,
		/// Wrapped callable type name.
		got: &'static str,
	},
	/// Text rejected by the destination type's parser.
	#[error("{message}")]
	Text {
		/// Parser message, unchanged.
		message: String,
	},
	/// Conversion hook or validator failure.
	#[error("{0}")]
	Hook(#[source] HookError),
	/// Field path expression syntax is invalid.
	#[error("invalid field path: {path}")]
	InvalidPath {
		/// Original path text.
		path: String,
	},
	/// Failure inside an array element.
	#[error("{inner}")]
	Element {
		/// Element index.
		index: usize,
		/// Wrapped failure.
		#[source]
		inner: Box<ValueError>,
	},
	/// Failure inside a struct field.
	#[error("{inner}")]
	Field {
		/// Field tag name.
		name: &'static str,
		/// Wrapped failure.
		#[source]
		inner: Box<ValueError>,
	},
	/// Failure inside a map entry.
	#[error("{inner}")]
	Key {
		/// Map key.
		key: String,
		/// Wrapped failure.
		#[source]
		inner: Box<ValueError>,
	},
}

impl ValueError {
	pub(crate) fn mismatch(expected: Kind, got: Kind) -> Self {
		Self::TypeMismatch { expected, got }
	}

	pub(crate) fn at_index(self, index: usize) -> Self {
		Self::Element { index, inner: Box::new(self) }
	}

	pub(crate) fn at_field(self, name: &'static str) -> Self {
		Self::Field { name, inner: Box::new(self) }
	}

	pub(crate) fn at_key(self, key: &str) -> Self {
		Self::Key {
			key: key.to_owned(),
			inner: Box::new(self),
		}
	}

	/// Innermost failure, with all path frames stripped.
	pub fn root_cause(&self) -> &ValueError {
		let mut current = self;
		while let Some(inner) = current.frame_inner() {
			current = inner;
		}
		current
	}

	/// Location of the innermost failure, root first.
	pub fn path(&self) -> FieldPath {
		let mut steps = Vec::new();
		let mut current = self;
		loop {
			match current {
				Self::Element { index, inner } => {
					steps.push(PathStep::Index(*index));
					current = &**inner;
				}
				Self::Field { name, inner } => {
					steps.push(PathStep::Field((*name).to_owned()));
					current = &**inner;
				}
				Self::Key { key, inner } => {
					steps.push(PathStep::Key(key.clone()));
					current = &**inner;
				}
				_ => break,
			}
		}
		FieldPath { steps }
	}

	/// Message with location, e.g. `at key.object.field1[2]: expected number, got string`.
	pub fn describe(&self) -> String {
		let path = self.path();
		if path.steps.is_empty() {
			self.root_cause().to_string()
		} else {
			format!("at {path}: {}", self.root_cause())
		}
	}

	fn frame_inner(&self) -> Option<&ValueError> {
		match self {
			Self::Element { inner, .. } | Self::Field { inner, .. } | Self::Key { inner, .. } => Some(&**inner),
			_ => None,
		}
	}
}
