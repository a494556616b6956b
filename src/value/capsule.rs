use std::any::{Any, type_name};
use std::fmt;
use std::sync::Arc;
use std::sync::mpsc::{Sender, SyncSender};

use crate::value::{Decode, Encode, HookError, Kind, Result, Shape, Value, ValueError};

/// Outcome of a conversion hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
	/// The hook populated the destination.
	Converted,
	/// The hook does not handle this pairing; decoding falls through to the generic rule.
	Declined,
}

/// Populate `self` from an arbitrary host value.
///
/// `src` is [`Value::host`] of the source: the wrapped value for capsules, the
/// payload for other kinds.
pub trait ConvertFromCapsule {
	/// Attempt the conversion, returning [`Conversion::Declined`] for unsupported sources.
	fn convert_from(&mut self, src: &dyn Any) -> std::result::Result<Conversion, HookError>;
}

/// Populate an arbitrary destination from `self`.
pub trait ConvertIntoCapsule {
	/// Attempt the conversion, returning [`Conversion::Declined`] for unsupported destinations.
	fn convert_into(&self, dst: &mut dyn Any) -> std::result::Result<Conversion, HookError>;

	/// Value to emit instead of an opaque capsule when encoding.
	fn representation(&self) -> Option<Value> {
		None
	}
}

/// Host type carried through the value model as an opaque capsule.
///
/// Hooks are opt-in: override the probes to return `Some(self)`.
pub trait CapsuleType: Any + Send + Sync {
	/// Probe for the from-capsule hook.
	fn from_capsule_hook(&mut self) -> Option<&mut dyn ConvertFromCapsule> {
		None
	}

	/// Probe for the into-capsule hook.
	fn into_capsule_hook(&self) -> Option<&dyn ConvertIntoCapsule> {
		None
	}
}

trait Wrapped: Send + Sync {
	fn as_any(&self) -> &dyn Any;
	fn type_name(&self) -> &'static str;
	fn into_hook(&self) -> Option<&dyn ConvertIntoCapsule>;
}

impl<T: CapsuleType> Wrapped for T {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn type_name(&self) -> &'static str {
		type_name::<T>()
	}

	fn into_hook(&self) -> Option<&dyn ConvertIntoCapsule> {
		self.into_capsule_hook()
	}
}

/// Opaque shared wrapper around a host value.
///
/// Cloning a capsule shares the wrapped allocation; equality is identity.
#[derive(Clone)]
pub struct Capsule {
	inner: Arc<dyn Wrapped>,
}

impl Capsule {
	/// Wrap `host`.
	pub fn new<T: CapsuleType>(host: T) -> Self {
		Self { inner: Arc::new(host) }
	}

	/// Wrapped host type name.
	pub fn type_name(&self) -> &'static str {
		(*self.inner).type_name()
	}

	/// Wrapped host value.
	pub fn as_any(&self) -> &dyn Any {
		(*self.inner).as_any()
	}

	/// Wrapped host value, if it has type `T`.
	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.as_any().downcast_ref::<T>()
	}

	/// Into-capsule hook of the wrapped value, if it declares one.
	pub fn into_hook(&self) -> Option<&dyn ConvertIntoCapsule> {
		(*self.inner).into_hook()
	}

	/// Whether both capsules wrap the same allocation.
	pub fn ptr_eq(&self, other: &Capsule) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl fmt::Debug for Capsule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Capsule({})", self.type_name())
	}
}

/// Opaque shared reference to a callable.
#[derive(Clone)]
pub struct Function {
	inner: Arc<dyn Any + Send + Sync>,
	addr: usize,
	type_name: &'static str,
}

impl Function {
	/// Share `callable`.
	pub fn new<F: ?Sized + Send + Sync + 'static>(callable: Arc<F>) -> Self {
		let addr = Arc::as_ptr(&callable).cast::<()>() as usize;
		Self {
			inner: Arc::new(callable),
			addr,
			type_name: type_name::<F>(),
		}
	}

	/// Callable type name.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Shared handle to the callable, if it has type `F`.
	pub fn downcast<F: ?Sized + 'static>(&self) -> Option<Arc<F>> {
		self.inner.downcast_ref::<Arc<F>>().cloned()
	}

	/// Whether both functions reference the same callable.
	pub fn ptr_eq(&self, other: &Function) -> bool {
		self.addr == other.addr
	}
}

impl fmt::Debug for Function {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Function({})", self.type_name)
	}
}

/// Function-typed destination and source, e.g. `Func<dyn Fn(i64) -> i64 + Send + Sync>`.
///
/// An unset `Func` is the zero value and encodes as `Null`.
pub struct Func<F: ?Sized>(Option<Arc<F>>);

impl<F: ?Sized> Func<F> {
	/// Function sharing `callable`.
	pub fn new(callable: Arc<F>) -> Self {
		Self(Some(callable))
	}

	/// Callable, if set.
	pub fn get(&self) -> Option<&F> {
		self.0.as_deref()
	}

	/// Whether a callable is set.
	pub fn is_set(&self) -> bool {
		self.0.is_some()
	}
}

impl<F: ?Sized> Default for Func<F> {
	fn default() -> Self {
		Self(None)
	}
}

impl<F: ?Sized> Clone for Func<F> {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}

impl<F: ?Sized> fmt::Debug for Func<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			Some(_) => write!(f, "Func({})", type_name::<F>()),
			None => f.write_str("Func(unset)"),
		}
	}
}

impl<F: ?Sized + Send + Sync + 'static> Encode for Func<F> {
	fn encode(&self) -> Value {
		match &self.0 {
			Some(callable) => Value::function(callable.clone()),
			None => Value::Null,
		}
	}
}

impl<F: ?Sized + Send + Sync + 'static> Decode for Func<F> {
	fn shape() -> Shape {
		Shape::Function
	}

	fn decode_kind(&mut self, src: &Value) -> Result<()> {
		let Value::Function(function) = src else {
			return Err(ValueError::mismatch(Kind::Function, src.kind()));
		};
		let callable = function.downcast::<F>().ok_or(ValueError::FunctionType {
			expected: type_name::<F>(),
			got: function.type_name(),
		})?;
		self.0 = Some(callable);
		Ok(())
	}

	fn decode_null(&mut self) -> Result<()> {
		self.0 = None;
		Ok(())
	}
}

/// Encode a capsule type, preferring the representation its into-capsule hook declares.
pub fn encode_capsule<T: CapsuleType + Clone>(host: &T) -> Value {
	if let Some(hook) = host.into_capsule_hook()
		&& let Some(repr) = hook.representation()
	{
		return repr;
	}
	Value::encapsulate(host.clone())
}

/// Assign a capsule holding exactly `T`; the clone shares any reference the type holds.
pub fn assign_capsule<T: CapsuleType + Clone>(dst: &mut T, src: &Value) -> Result<()> {
	let Value::Capsule(capsule) = src else {
		return Err(ValueError::mismatch(Kind::Capsule, src.kind()));
	};
	let host = capsule.downcast_ref::<T>().ok_or(ValueError::CapsuleType {
		expected: type_name::<T>(),
		got: capsule.type_name(),
	})?;
	*dst = host.clone();
	Ok(())
}

/// Implement [`Encode`] and [`Decode`] for [`CapsuleType`] implementors.
#[macro_export]
macro_rules! impl_capsule {
	($($ty:ty),+ $(,)?) => {$(
		impl $crate::value::Encode for $ty {
			fn encode(&self) -> $crate::value::Value {
				$crate::value::encode_capsule(self)
			}
		}

		impl $crate::value::Decode for $ty {
			fn shape() -> $crate::value::Shape {
				$crate::value::Shape::Capsule
			}

			fn decode_kind(&mut self, src: &$crate::value::Value) -> $crate::value::Result<()> {
				$crate::value::assign_capsule(self, src)
			}

			fn from_capsule_hook(&mut self) -> Option<&mut dyn $crate::value::ConvertFromCapsule> {
				$crate::value::CapsuleType::from_capsule_hook(self)
			}
		}
	)+};
}

impl<T: Send + 'static> CapsuleType for Sender<T> {}
impl<T: Send + 'static> CapsuleType for SyncSender<T> {}

macro_rules! channel_capsule {
	($($sender:ident),+) => {$(
		impl<T: Send + 'static> Encode for $sender<T> {
			fn encode(&self) -> Value {
				encode_capsule(self)
			}
		}

		impl<T: Send + 'static> Decode for $sender<T> {
			fn shape() -> Shape {
				Shape::Capsule
			}

			fn decode_kind(&mut self, src: &Value) -> Result<()> {
				assign_capsule(self, src)
			}
		}
	)+};
}

channel_capsule!(Sender, SyncSender);
