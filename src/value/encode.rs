use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

use crate::value::{Number, Value, format_duration};

/// Total conversion from a host value into a [`Value`].
pub trait Encode {
	/// Build the value tree for `self`.
	fn encode(&self) -> Value;
}

/// Encode any host value; never fails.
pub fn encode<T: Encode + ?Sized>(host: &T) -> Value {
	host.encode()
}

impl Encode for Value {
	fn encode(&self) -> Value {
		self.clone()
	}
}

impl Encode for () {
	fn encode(&self) -> Value {
		Value::Null
	}
}

impl Encode for bool {
	fn encode(&self) -> Value {
		Value::Bool(*self)
	}
}

impl Encode for Number {
	fn encode(&self) -> Value {
		Value::Number(*self)
	}
}

macro_rules! encode_int {
	($($ty:ty),+) => {$(
		impl Encode for $ty {
			fn encode(&self) -> Value {
				Value::Number(Number::from(*self))
			}
		}
	)+};
}

encode_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Encode for f32 {
	fn encode(&self) -> Value {
		Value::float(f64::from(*self))
	}
}

impl Encode for f64 {
	fn encode(&self) -> Value {
		Value::float(*self)
	}
}

impl Encode for str {
	fn encode(&self) -> Value {
		Value::string(self)
	}
}

impl Encode for String {
	fn encode(&self) -> Value {
		Value::string(self.as_str())
	}
}

impl Encode for Duration {
	fn encode(&self) -> Value {
		Value::string(format_duration(*self))
	}
}

impl<T: Encode + ?Sized> Encode for &T {
	fn encode(&self) -> Value {
		(**self).encode()
	}
}

impl<T: Encode + ?Sized> Encode for Box<T> {
	fn encode(&self) -> Value {
		(**self).encode()
	}
}

impl<T: Encode + ?Sized> Encode for Arc<T> {
	fn encode(&self) -> Value {
		(**self).encode()
	}
}

impl<T: Encode> Encode for Option<T> {
	fn encode(&self) -> Value {
		match self {
			Some(inner) => inner.encode(),
			None => Value::Null,
		}
	}
}

impl<T: Encode> Encode for [T] {
	fn encode(&self) -> Value {
		Value::array(self.iter().map(Encode::encode))
	}
}

impl<T: Encode, const N: usize> Encode for [T; N] {
	fn encode(&self) -> Value {
		self.as_slice().encode()
	}
}

impl<T: Encode> Encode for Vec<T> {
	fn encode(&self) -> Value {
		self.as_slice().encode()
	}
}

impl<T: Encode, S> Encode for HashMap<String, T, S> {
	fn encode(&self) -> Value {
		Value::object(self.iter().map(|(key, item)| (key.as_str(), item.encode())))
	}
}

impl<T: Encode> Encode for BTreeMap<String, T> {
	fn encode(&self) -> Value {
		Value::object(self.iter().map(|(key, item)| (key.as_str(), item.encode())))
	}
}
