mod capsule;
mod decode;
mod encode;
mod error;
mod json;
mod kind;
mod model;
mod number;
mod path;
mod structs;
mod text;

/// Capsule wrapper, callables, and conversion hook protocol.
pub use capsule::{Capsule, CapsuleType, Conversion, ConvertFromCapsule, ConvertIntoCapsule, Func, Function, assign_capsule, encode_capsule};
/// Destination trait and decoding entry points.
pub use decode::{Decode, decode, decode_new};
/// Source trait and encoding entry point.
pub use encode::{Encode, encode};
/// Error and result aliases.
pub use error::{HookError, Result, ValueError};
/// Value kind tags and destination shape categories.
pub use kind::{Kind, Shape};
/// Runtime value tree.
pub use model::{Map, Value};
/// Numeric payload.
pub use number::Number;
/// Field path parser types.
pub use path::{FieldPath, PathStep};
/// Struct descriptors and tagged field mapping.
pub use structs::{Fields, Struct, Tag, decode_struct, encode_struct, struct_tags};
/// Text-exchanged host types and duration grammar.
pub use text::{decode_text, format_duration, parse_duration};
