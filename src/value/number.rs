use std::fmt;

use crate::value::ValueError;

/// 2^127, first float magnitude outside the `i128` range.
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Numeric payload of a `Number` value.
///
/// Integers that fit `i64` are always stored signed; only larger unsigned
/// values use the unsigned representation. Floats are never NaN.
#[derive(Debug, Clone, Copy)]
pub struct Number(Repr);

#[derive(Debug, Clone, Copy)]
enum Repr {
	Int(i64),
	Uint(u64),
	Float(f64),
}

impl Number {
	/// Signed integer number.
	pub fn from_i64(value: i64) -> Self {
		Self(Repr::Int(value))
	}

	/// Unsigned integer number, normalized to signed storage when it fits.
	pub fn from_u64(value: u64) -> Self {
		match i64::try_from(value) {
			Ok(signed) => Self(Repr::Int(signed)),
			Err(_) => Self(Repr::Uint(value)),
		}
	}

	/// Floating number; `None` for NaN.
	pub fn from_f64(value: f64) -> Option<Self> {
		if value.is_nan() { None } else { Some(Self(Repr::Float(value))) }
	}

	/// Parse decimal text as an integer first, then as a float.
	pub fn parse(text: &str) -> Option<Self> {
		if let Ok(signed) = text.parse::<i64>() {
			return Some(Self::from_i64(signed));
		}
		if let Ok(unsigned) = text.parse::<u64>() {
			return Some(Self::from_u64(unsigned));
		}
		text.parse::<f64>().ok().and_then(Self::from_f64)
	}

	/// Whether the number was stored as a float.
	pub fn is_float(&self) -> bool {
		matches!(self.0, Repr::Float(_))
	}

	/// Whether the number has no fractional part.
	pub fn is_integral(&self) -> bool {
		match self.0 {
			Repr::Int(_) | Repr::Uint(_) => true,
			Repr::Float(value) => value.is_finite() && value.fract() == 0.0,
		}
	}

	/// Value as `f64`; large integers round.
	pub fn as_f64(&self) -> f64 {
		match self.0 {
			Repr::Int(value) => value as f64,
			Repr::Uint(value) => value as f64,
			Repr::Float(value) => value,
		}
	}

	/// Exact `i64` value, if representable.
	pub fn as_i64(&self) -> Option<i64> {
		self.to_int()
	}

	/// Exact `u64` value, if representable.
	pub fn as_u64(&self) -> Option<u64> {
		self.to_int()
	}

	/// Exact conversion into any integer type.
	pub fn to_int<T: TryFrom<i128>>(&self) -> Option<T> {
		self.to_i128().and_then(|value| T::try_from(value).ok())
	}

	/// Conversion into `f32`, failing only when a finite value is out of range.
	pub fn to_f32(&self) -> Option<f32> {
		let value = self.as_f64();
		if value.is_finite() && value.abs() > f64::from(f32::MAX) {
			return None;
		}
		Some(value as f32)
	}

	/// Error explaining why an integer conversion into `target` failed.
	pub(crate) fn range_error(&self, target: &'static str) -> ValueError {
		if self.is_integral() {
			ValueError::NumberOverflow { number: *self, target }
		} else {
			ValueError::NotIntegral { number: *self }
		}
	}

	fn to_i128(&self) -> Option<i128> {
		match self.0 {
			Repr::Int(value) => Some(i128::from(value)),
			Repr::Uint(value) => Some(i128::from(value)),
			Repr::Float(value) => {
				if !self.is_integral() || !(-I128_LIMIT..I128_LIMIT).contains(&value) {
					return None;
				}
				Some(value as i128)
			}
		}
	}
}

impl Default for Number {
	fn default() -> Self {
		Self::from_i64(0)
	}
}

impl PartialEq for Number {
	fn eq(&self, other: &Self) -> bool {
		match (self.to_i128(), other.to_i128()) {
			(Some(lhs), Some(rhs)) => lhs == rhs,
			_ => self.as_f64() == other.as_f64(),
		}
	}
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			Repr::Int(value) => write!(f, "{value}"),
			Repr::Uint(value) => write!(f, "{value}"),
			Repr::Float(value) => write!(f, "{value}"),
		}
	}
}

impl serde::Serialize for Number {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self.0 {
			Repr::Int(value) => serializer.serialize_i64(value),
			Repr::Uint(value) => serializer.serialize_u64(value),
			Repr::Float(value) => serializer.serialize_f64(value),
		}
	}
}

macro_rules! number_from_signed {
	($($ty:ty),+) => {$(
		impl From<$ty> for Number {
			fn from(value: $ty) -> Self {
				Self::from_i64(value as i64)
			}
		}
	)+};
}

macro_rules! number_from_unsigned {
	($($ty:ty),+) => {$(
		impl From<$ty> for Number {
			fn from(value: $ty) -> Self {
				Self::from_u64(value as u64)
			}
		}
	)+};
}

number_from_signed!(i8, i16, i32, i64, isize);
number_from_unsigned!(u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests;
