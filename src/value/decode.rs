use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::time::Duration;

use crate::value::{ConvertFromCapsule, Conversion, Kind, Number, Result, Shape, Value, ValueError, parse_duration};

/// Addressable host destination populated from a [`Value`].
///
/// Implementors supply the shape classification and the generic rule for a
/// source of the matching kind; [`Decode::decode_value`] wraps that rule with
/// null handling, conversion hooks, and numeric/text coercion.
pub trait Decode: Sized + 'static {
	/// Shape category of this type.
	fn shape() -> Shape;

	/// Generic rule for a source whose kind matches [`Decode::shape`].
	fn decode_kind(&mut self, src: &Value) -> Result<()>;

	/// Reset to the absent zero for a `Null` source.
	///
	/// Types with no meaningful zero keep this default and fail.
	fn decode_null(&mut self) -> Result<()> {
		match Self::shape().kind() {
			Some(expected) => Err(ValueError::mismatch(expected, Kind::Null)),
			None => Ok(()),
		}
	}

	/// Probe for a from-capsule hook declared by this type.
	fn from_capsule_hook(&mut self) -> Option<&mut dyn ConvertFromCapsule> {
		None
	}

	/// Populate `self` from `src`.
	fn decode_value(&mut self, src: &Value) -> Result<()> {
		dispatch(self, src)
	}
}

/// Decode `src` into `dst`.
pub fn decode<T: Decode>(src: &Value, dst: &mut T) -> Result<()> {
	dst.decode_value(src)
}

/// Decode `src` into a freshly defaulted `T`.
pub fn decode_new<T: Decode + Default>(src: &Value) -> Result<T> {
	let mut out = T::default();
	out.decode_value(src)?;
	Ok(out)
}

fn dispatch<T: Decode>(dst: &mut T, src: &Value) -> Result<()> {
	if src.is_null() {
		return dst.decode_null();
	}

	if try_hooks(dst, src)? == Conversion::Converted {
		return Ok(());
	}

	let Some(expected) = T::shape().kind() else {
		return dst.decode_kind(src);
	};
	if src.kind() == expected {
		return dst.decode_kind(src);
	}

	let coerced = coerce(src, expected)?;
	dst.decode_kind(&coerced)
}

fn try_hooks<T: Decode>(dst: &mut T, src: &Value) -> Result<Conversion> {
	if let Some(hook) = dst.from_capsule_hook() {
		if hook.convert_from(src.host()).map_err(ValueError::Hook)? == Conversion::Converted {
			tracing::trace!(source = %src.kind(), target = std::any::type_name::<T>(), "from-capsule hook converted");
			return Ok(Conversion::Converted);
		}
		tracing::trace!(source = %src.kind(), target = std::any::type_name::<T>(), "from-capsule hook declined");
	}

	if let Value::Capsule(capsule) = src
		&& let Some(hook) = capsule.into_hook()
	{
		let target: &mut dyn Any = &mut *dst;
		if hook.convert_into(target).map_err(ValueError::Hook)? == Conversion::Converted {
			tracing::trace!(capsule = capsule.type_name(), target = std::any::type_name::<T>(), "into-capsule hook converted");
			return Ok(Conversion::Converted);
		}
		tracing::trace!(capsule = capsule.type_name(), target = std::any::type_name::<T>(), "into-capsule hook declined");
	}

	Ok(Conversion::Declined)
}

/// Numeric/text coercion applied when the source kind differs from the destination's.
pub(crate) fn coerce(src: &Value, expected: Kind) -> Result<Value> {
	match (src, expected) {
		(Value::Number(number), Kind::String) => Ok(Value::string(number.to_string())),
		(Value::String(text), Kind::Number) => Number::parse(text)
			.map(Value::Number)
			.ok_or(ValueError::mismatch(Kind::Number, Kind::String)),
		_ => Err(ValueError::mismatch(expected, src.kind())),
	}
}

fn expect_number(src: &Value) -> Result<Number> {
	src.as_number().ok_or(ValueError::mismatch(Kind::Number, src.kind()))
}

fn expect_str(src: &Value) -> Result<&str> {
	src.as_str().ok_or(ValueError::mismatch(Kind::String, src.kind()))
}

fn expect_array(src: &Value) -> Result<&[Value]> {
	src.as_array().ok_or(ValueError::mismatch(Kind::Array, src.kind()))
}

impl Decode for Value {
	fn shape() -> Shape {
		Shape::Any
	}

	fn decode_kind(&mut self, src: &Value) -> Result<()> {
		*self = src.clone();
		Ok(())
	}

	fn decode_value(&mut self, src: &Value) -> Result<()> {
		self.decode_kind(src)
	}
}

impl Decode for bool {
	fn shape() -> Shape {
		Shape::Bool
	}

	fn decode_kind(&mut self, src: &Value) -> Result<()> {
		*self = src.as_bool().ok_or(ValueError::mismatch(Kind::Bool, src.kind()))?;
		Ok(())
	}

	fn decode_null(&mut self) -> Result<()> {
		*self = false;
		Ok(())
	}
}

impl Decode for Number {
	fn shape() -> Shape {
		Shape::Number
	}

	fn decode_kind(&mut self, src: &Value) -> Result<()> {
		*self = expect_number(src)?;
		Ok(())
	}

	fn decode_null(&mut self) -> Result<()> {
		*self = Number::default();
		Ok(())
	}
}

macro_rules! decode_int {
	($($ty:ty),+) => {$(
		impl Decode for $ty {
			fn shape() -> Shape {
				Shape::Number
			}

			fn decode_kind(&mut self, src: &Value) -> Result<()> {
				let number = expect_number(src)?;
				*self = number.to_int::<$ty>().ok_or_else(|| number.range_error(stringify!($ty)))?;
				Ok(())
			}

			fn decode_null(&mut self) -> Result<()> {
				*self = 0;
				Ok(())
			}
		}
	)+};
}

decode_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Decode for f32 {
	fn shape() -> Shape {
		Shape::Number
	}

	fn decode_kind(&mut self, src: &Value) -> Result<()> {
		let number = expect_number(src)?;
		*self = number.to_f32().ok_or(ValueError::NumberOverflow { number, target: "f32" })?;
		Ok(())
	}

	fn decode_null(&mut self) -> Result<()> {
		*self = 0.0;
		Ok(())
	}
}

impl Decode for f64 {
	fn shape() -> Shape {
		Shape::Number
	}

	fn decode_kind(&mut self, src: &Value) -> Result<()> {
		*self = expect_number(src)?.as_f64();
		Ok(())
	}

	fn decode_null(&mut self) -> Result<()> {
		*self = 0.0;
		Ok(())
	}
}

impl Decode for String {
	fn shape() -> Shape {
		Shape::String
	}

	fn decode_kind(&mut self, src: &Value) -> Result<()> {
		let text = expect_str(src)?;
		self.clear();
		self.push_str(text);
		Ok(())
	}

	fn decode_null(&mut self) -> Result<()> {
		self.clear();
		Ok(())
	}
}

impl Decode for Duration {
	fn shape() -> Shape {
		Shape::String
	}

	fn decode_kind(&mut self, src: &Value) -> Result<()> {
		let text = expect_str(src)?;
		*self = parse_duration(text).ok_or_else(|| ValueError::Text {
			message: format!("invalid duration {text:?}"),
		})?;
		Ok(())
	}

	fn decode_null(&mut self) -> Result<()> {
		*self = Duration::ZERO;
		Ok(())
	}
}

impl<T: Decode + Default> Decode for Option<T> {
	fn shape() -> Shape {
		T::shape()
	}

	fn decode_kind(&mut self, src: &Value) -> Result<()> {
		match self {
			Some(inner) => inner.decode_kind(src),
			None => {
				let mut inner = T::default();
				inner.decode_kind(src)?;
				*self = Some(inner);
				Ok(())
			}
		}
	}

	fn decode_null(&mut self) -> Result<()> {
		*self = None;
		Ok(())
	}

	fn decode_value(&mut self, src: &Value) -> Result<()> {
		if src.is_null() {
			return self.decode_null();
		}
		match self {
			Some(inner) => inner.decode_value(src),
			None => {
				let mut inner = T::default();
				inner.decode_value(src)?;
				*self = Some(inner);
				Ok(())
			}
		}
	}
}

impl<T: Decode> Decode for Box<T> {
	fn shape() -> Shape {
		T::shape()
	}

	fn decode_kind(&mut self, src: &Value) -> Result<()> {
		(**self).decode_kind(src)
	}

	fn decode_null(&mut self) -> Result<()> {
		(**self).decode_null()
	}

	fn decode_value(&mut self, src: &Value) -> Result<()> {
		(**self).decode_value(src)
	}
}

impl<T: Decode + Default> Decode for Vec<T> {
	fn shape() -> Shape {
		Shape::Sequence
	}

	fn decode_kind(&mut self, src: &Value) -> Result<()> {
		let items = expect_array(src)?;
		let mut out = Vec::with_capacity(items.len());
		for (index, item) in items.iter().enumerate() {
			let mut element = T::default();
			element.decode_value(item).map_err(|err| err.at_index(index))?;
			out.push(element);
		}
		*self = out;
		Ok(())
	}

	fn decode_null(&mut self) -> Result<()> {
		self.clear();
		Ok(())
	}
}

impl<T: Decode, const N: usize> Decode for [T; N] {
	fn shape() -> Shape {
		Shape::Sequence
	}

	fn decode_kind(&mut self, src: &Value) -> Result<()> {
		let items = expect_array(src)?;
		if items.len() != N {
			return Err(ValueError::ArrayLength { got: items.len(), expected: N });
		}
		for (index, (slot, item)) in self.iter_mut().zip(items).enumerate() {
			slot.decode_value(item).map_err(|err| err.at_index(index))?;
		}
		Ok(())
	}

	fn decode_null(&mut self) -> Result<()> {
		for (index, slot) in self.iter_mut().enumerate() {
			slot.decode_null().map_err(|err| err.at_index(index))?;
		}
		Ok(())
	}
}

impl<T: Decode + Default, S: BuildHasher + 'static> Decode for HashMap<String, T, S> {
	fn shape() -> Shape {
		Shape::Mapping
	}

	fn decode_kind(&mut self, src: &Value) -> Result<()> {
		let map = src.as_object().ok_or(ValueError::mismatch(Kind::Object, src.kind()))?;
		for (key, item) in map {
			let mut element = T::default();
			element.decode_value(item).map_err(|err| err.at_key(key))?;
			self.insert(key.clone(), element);
		}
		Ok(())
	}

	fn decode_null(&mut self) -> Result<()> {
		self.clear();
		Ok(())
	}
}

impl<T: Decode + Default> Decode for BTreeMap<String, T> {
	fn shape() -> Shape {
		Shape::Mapping
	}

	fn decode_kind(&mut self, src: &Value) -> Result<()> {
		let map = src.as_object().ok_or(ValueError::mismatch(Kind::Object, src.kind()))?;
		for (key, item) in map {
			let mut element = T::default();
			element.decode_value(item).map_err(|err| err.at_key(key))?;
			self.insert(key.clone(), element);
		}
		Ok(())
	}

	fn decode_null(&mut self) -> Result<()> {
		self.clear();
		Ok(())
	}
}
