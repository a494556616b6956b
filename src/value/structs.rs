use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::value::{Decode, Encode, HookError, Kind, Result, Value, ValueError};

/// Struct-like host type exchanged as an Object of tagged fields.
///
/// `describe` lists the tagged fields once; fields left out are untagged and
/// never read or written by the engine. Pair with [`impl_struct!`](crate::impl_struct).
pub trait Struct: Default + 'static {
	/// Declare tagged fields and embedded sub-structures.
	fn describe(fields: &mut Fields<Self>);

	/// Reset before decoding an Object or on a `Null` source.
	fn set_to_default(&mut self) {
		*self = Self::default();
	}

	/// Check the decoded result; failures surface as [`ValueError::Hook`].
	fn validate(&self) -> std::result::Result<(), HookError> {
		Ok(())
	}
}

/// Parsed field tag: `name[,attr|block|label|optional|enum]`.
///
/// Only `name` drives decoding. The qualifiers are recorded for callers that
/// need the field's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
	/// Object key matched against this field.
	pub name: &'static str,
	/// Leaf attribute.
	pub attr: bool,
	/// Nested block.
	pub block: bool,
	/// Block label.
	pub label: bool,
	/// May be omitted by the source.
	pub optional: bool,
	/// Restricted to an enumerated set of values.
	pub enumerated: bool,
}

impl Tag {
	/// Parse a tag string.
	///
	/// # Panics
	///
	/// On an empty name or an unknown qualifier; tags are static declarations.
	pub fn parse(text: &'static str) -> Tag {
		let mut parts = text.split(',');
		let name = parts.next().unwrap_or_default().trim();
		assert!(!name.is_empty(), "field tag {text:?} has no name");

		let mut tag = Tag {
			name,
			attr: false,
			block: false,
			label: false,
			optional: false,
			enumerated: false,
		};
		for qualifier in parts {
			match qualifier.trim() {
				"attr" => tag.attr = true,
				"block" => tag.block = true,
				"label" => tag.label = true,
				"optional" => tag.optional = true,
				"enum" => tag.enumerated = true,
				other => panic!("field tag {text:?} has unknown qualifier {other:?}"),
			}
		}
		tag
	}
}

type EncodeField<S> = Box<dyn Fn(&S) -> Option<Value> + Send + Sync>;
type DecodeField<S> = Box<dyn Fn(&mut S, &Value) -> Result<()> + Send + Sync>;

struct Entry<S> {
	tag: Tag,
	encode: EncodeField<S>,
	decode: DecodeField<S>,
}

/// Builder for a struct's flattened field table.
pub struct Fields<S> {
	entries: Vec<Entry<S>>,
}

impl<S: 'static> Fields<S> {
	/// Tagged field read through `get` and written through `get_mut`.
	pub fn field<T: Encode + Decode>(&mut self, tag: &'static str, get: fn(&S) -> &T, get_mut: fn(&mut S) -> &mut T) -> &mut Self {
		self.push(Entry {
			tag: Tag::parse(tag),
			encode: Box::new(move |host| Some(get(host).encode())),
			decode: Box::new(move |host, src| get_mut(host).decode_value(src)),
		})
	}

	/// Embedded sub-structure whose tagged fields are promoted into this one.
	pub fn embed<E: Struct>(&mut self, get: fn(&S) -> &E, get_mut: fn(&mut S) -> &mut E) -> &mut Self {
		for inner in &descriptor::<E>().entries {
			self.push(Entry {
				tag: inner.tag,
				encode: Box::new(move |host| (inner.encode)(get(host))),
				decode: Box::new(move |host, src| (inner.decode)(get_mut(host), src)),
			});
		}
		self
	}

	/// Pointer-shaped embedding: allocated when one of its fields is decoded,
	/// skipped on encode while absent.
	pub fn embed_ptr<E: Struct>(&mut self, get: fn(&S) -> &Option<Box<E>>, get_mut: fn(&mut S) -> &mut Option<Box<E>>) -> &mut Self {
		for inner in &descriptor::<E>().entries {
			self.push(Entry {
				tag: inner.tag,
				encode: Box::new(move |host| get(host).as_deref().and_then(|embedded| (inner.encode)(embedded))),
				decode: Box::new(move |host, src| (inner.decode)(&mut **get_mut(host).get_or_insert_with(Box::default), src)),
			});
		}
		self
	}

	fn push(&mut self, entry: Entry<S>) -> &mut Self {
		let name = entry.tag.name;
		assert!(
			!self.entries.iter().any(|existing| existing.tag.name == name),
			"duplicate field tag {name:?} in {}",
			type_name::<S>()
		);
		self.entries.push(entry);
		self
	}
}

struct Descriptor<S> {
	entries: Vec<Entry<S>>,
}

type DescriptorCache = RwLock<HashMap<TypeId, &'static (dyn Any + Send + Sync)>>;

static DESCRIPTORS: OnceLock<DescriptorCache> = OnceLock::new();

fn descriptor<S: Struct>() -> &'static Descriptor<S> {
	let cache = DESCRIPTORS.get_or_init(Default::default);
	let id = TypeId::of::<S>();

	let cached = cache.read().unwrap_or_else(PoisonError::into_inner).get(&id).copied();
	if let Some(found) = cached
		&& let Some(descriptor) = found.downcast_ref::<Descriptor<S>>()
	{
		return descriptor;
	}

	// Built without the lock held: embeddings resolve their own descriptors.
	let mut fields = Fields { entries: Vec::new() };
	S::describe(&mut fields);
	tracing::debug!(ty = type_name::<S>(), fields = fields.entries.len(), "built struct descriptor");
	let built: &'static Descriptor<S> = Box::leak(Box::new(Descriptor { entries: fields.entries }));

	let mut guard = cache.write().unwrap_or_else(PoisonError::into_inner);
	let stored = *guard.entry(id).or_insert(built);
	stored.downcast_ref::<Descriptor<S>>().unwrap_or(built)
}

/// Encode a struct as an Object of its tagged fields.
pub fn encode_struct<S: Struct>(host: &S) -> Value {
	let entries = &descriptor::<S>().entries;
	Value::object(entries.iter().filter_map(|entry| (entry.encode)(host).map(|value| (entry.tag.name, value))))
}

/// Decode an Object into a struct: reset, match tagged fields by name, then validate.
///
/// Keys without a matching field are ignored.
pub fn decode_struct<S: Struct>(dst: &mut S, src: &Value) -> Result<()> {
	let map = src.as_object().ok_or(ValueError::mismatch(Kind::Object, src.kind()))?;
	dst.set_to_default();
	for entry in &descriptor::<S>().entries {
		if let Some(item) = map.get(entry.tag.name) {
			(entry.decode)(dst, item).map_err(|err| err.at_field(entry.tag.name))?;
		}
	}
	dst.validate().map_err(ValueError::Hook)
}

/// Tags of all fields, including promoted ones, in declaration order.
pub fn struct_tags<S: Struct>() -> Vec<Tag> {
	descriptor::<S>().entries.iter().map(|entry| entry.tag).collect()
}

/// Implement [`Encode`] and [`Decode`] for [`Struct`] implementors.
#[macro_export]
macro_rules! impl_struct {
	($($ty:ty),+ $(,)?) => {$(
		impl $crate::value::Encode for $ty {
			fn encode(&self) -> $crate::value::Value {
				$crate::value::encode_struct(self)
			}
		}

		impl $crate::value::Decode for $ty {
			fn shape() -> $crate::value::Shape {
				$crate::value::Shape::Struct
			}

			fn decode_kind(&mut self, src: &$crate::value::Value) -> $crate::value::Result<()> {
				$crate::value::decode_struct(self, src)
			}

			fn decode_null(&mut self) -> $crate::value::Result<()> {
				$crate::value::Struct::set_to_default(self);
				Ok(())
			}
		}
	)+};
}
