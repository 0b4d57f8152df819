use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};

use crate::simple::error::BoxError;
use crate::simple::value::Value;

/// Typed data that can describe itself to the conversion engine.
///
/// `shape` returns a descriptor from the closed set of shapes the engine
/// accepts; the engine pattern-matches over it rather than probing the
/// concrete type. `hook` is the conversion override: when it returns
/// `Some`, the engine defers entirely to the hook for this node and never
/// looks at the shape underneath.
pub trait Source {
	/// Descriptor of this value's shape for one conversion step.
	fn shape(&self) -> Shape<'_>;

	/// Conversion override hook; `None` means no override.
	fn hook(&self) -> Option<Hook> {
		None
	}
}

/// Closed set of source shapes the engine dispatches over.
pub enum Shape<'a> {
	/// An absent reference. Converts to [`Value::Null`], not an error.
	Null,
	/// Indirection. The engine dereferences and repeats at the same path.
	Ref(&'a dyn Source),
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar of any width, widened.
	Int(i64),
	/// Unsigned integer scalar of any width, widened.
	Uint(u64),
	/// Floating-point scalar of any width, widened.
	Float(f64),
	/// Text scalar.
	Text(Cow<'a, str>),
	/// Ordered sequence. Elements extend the path with `[index]`.
	Sequence(Vec<&'a dyn Source>),
	/// Struct-like aggregate. Fields extend the path with `.name`.
	Record(Vec<Field<'a>>),
	/// Keyed mapping. Keys must be stringifiable; stringified keys extend
	/// the path with `.key`.
	Mapping(Vec<(Key<'a>, &'a dyn Source)>),
	/// A shape with no simple representation (function, channel, raw
	/// pointer). Always a conversion error.
	Unsupported {
		/// Kind name used in the error message, e.g. `chan`.
		kind: &'static str,
	},
}

/// One named field of a record shape.
pub struct Field<'a> {
	/// Field name, used as the struct key and the path segment.
	pub name: Cow<'a, str>,
	/// Field value.
	pub value: &'a dyn Source,
}

impl<'a> Field<'a> {
	/// Field from a name and a borrowed value.
	pub fn new(name: impl Into<Cow<'a, str>>, value: &'a dyn Source) -> Self {
		Self { name: name.into(), value }
	}
}

/// Mapping key descriptor. Only text, boolean, and integer keys have a
/// canonical text form; everything else is reported as unsupported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key<'a> {
	/// Text key, passed through verbatim.
	Text(Cow<'a, str>),
	/// Signed integer key, rendered in base 10.
	Int(i64),
	/// Unsigned integer key, rendered in base 10.
	Uint(u64),
	/// Boolean key, rendered as `true`/`false`.
	Bool(bool),
	/// Key with no text form. Always a conversion error at the mapping.
	Unsupported {
		/// Key kind name, e.g. `array` or `float`.
		kind: &'static str,
		/// Key type name as it should appear in the error message.
		type_name: Cow<'a, str>,
	},
}

/// Mapping key types that can describe themselves as a [`Key`].
pub trait KeySource {
	/// Key descriptor for this value.
	fn key(&self) -> Key<'_>;
}

/// Outcome of a conversion override hook.
#[derive(Debug)]
pub enum Hook {
	/// Value produced by an infallible hook.
	Value(Value),
	/// Outcome of a fallible hook; errors are wrapped with the path at
	/// which the hook ran and re-surfaced, cause preserved.
	TryValue(std::result::Result<Value, BoxError>),
}

// Scalar sources.

impl Source for bool {
	fn shape(&self) -> Shape<'_> {
		Shape::Bool(*self)
	}
}

macro_rules! signed_source {
	($($ty:ty),* $(,)?) => {$(
		impl Source for $ty {
			fn shape(&self) -> Shape<'_> {
				Shape::Int(*self as i64)
			}
		}
	)*};
}

macro_rules! unsigned_source {
	($($ty:ty),* $(,)?) => {$(
		impl Source for $ty {
			fn shape(&self) -> Shape<'_> {
				Shape::Uint(*self as u64)
			}
		}
	)*};
}

signed_source!(i8, i16, i32, i64, isize);
unsigned_source!(u8, u16, u32, u64, usize);

impl Source for f32 {
	fn shape(&self) -> Shape<'_> {
		Shape::Float(f64::from(*self))
	}
}

impl Source for f64 {
	fn shape(&self) -> Shape<'_> {
		Shape::Float(*self)
	}
}

impl Source for String {
	fn shape(&self) -> Shape<'_> {
		Shape::Text(Cow::Borrowed(self.as_str()))
	}
}

impl Source for str {
	fn shape(&self) -> Shape<'_> {
		Shape::Text(Cow::Borrowed(self))
	}
}

impl Source for char {
	fn shape(&self) -> Shape<'_> {
		Shape::Text(Cow::Owned(self.to_string()))
	}
}

// Absence and indirection.

impl Source for () {
	fn shape(&self) -> Shape<'_> {
		Shape::Null
	}
}

impl<T: Source> Source for Option<T> {
	fn shape(&self) -> Shape<'_> {
		match self {
			Some(value) => Shape::Ref(value),
			None => Shape::Null,
		}
	}
}

// Shared indirections are transparent: they delegate shape and hook, so
// traversal neither extends the path nor hides a pointee's override.

impl<T: Source + ?Sized> Source for &T {
	fn shape(&self) -> Shape<'_> {
		(**self).shape()
	}

	fn hook(&self) -> Option<Hook> {
		(**self).hook()
	}
}

impl<T: Source + ?Sized> Source for Box<T> {
	fn shape(&self) -> Shape<'_> {
		(**self).shape()
	}

	fn hook(&self) -> Option<Hook> {
		(**self).hook()
	}
}

impl<T: Source + ?Sized> Source for Rc<T> {
	fn shape(&self) -> Shape<'_> {
		(**self).shape()
	}

	fn hook(&self) -> Option<Hook> {
		(**self).hook()
	}
}

impl<T: Source + ?Sized> Source for Arc<T> {
	fn shape(&self) -> Shape<'_> {
		(**self).shape()
	}

	fn hook(&self) -> Option<Hook> {
		(**self).hook()
	}
}

// Sequences.

impl<T: Source> Source for [T] {
	fn shape(&self) -> Shape<'_> {
		Shape::Sequence(self.iter().map(|item| item as &dyn Source).collect())
	}
}

impl<T: Source, const N: usize> Source for [T; N] {
	fn shape(&self) -> Shape<'_> {
		Shape::Sequence(self.iter().map(|item| item as &dyn Source).collect())
	}
}

impl<T: Source> Source for Vec<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Sequence(self.iter().map(|item| item as &dyn Source).collect())
	}
}

// Mappings.

impl<K: KeySource, V: Source> Source for HashMap<K, V> {
	fn shape(&self) -> Shape<'_> {
		Shape::Mapping(self.iter().map(|(key, value)| (key.key(), value as &dyn Source)).collect())
	}
}

impl<K: KeySource, V: Source> Source for BTreeMap<K, V> {
	fn shape(&self) -> Shape<'_> {
		Shape::Mapping(self.iter().map(|(key, value)| (key.key(), value as &dyn Source)).collect())
	}
}

// Shapes with no simple representation.

impl<T> Source for Sender<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Unsupported { kind: "chan" }
	}
}

impl<T> Source for Receiver<T> {
	fn shape(&self) -> Shape<'_> {
		Shape::Unsupported { kind: "chan" }
	}
}

impl Source for fn() {
	fn shape(&self) -> Shape<'_> {
		Shape::Unsupported { kind: "func" }
	}
}

impl<T> Source for *const T {
	fn shape(&self) -> Shape<'_> {
		Shape::Unsupported { kind: "ptr" }
	}
}

impl<T> Source for *mut T {
	fn shape(&self) -> Shape<'_> {
		Shape::Unsupported { kind: "ptr" }
	}
}

// Key sources.

impl KeySource for String {
	fn key(&self) -> Key<'_> {
		Key::Text(Cow::Borrowed(self.as_str()))
	}
}

impl KeySource for &str {
	fn key(&self) -> Key<'_> {
		Key::Text(Cow::Borrowed(*self))
	}
}

impl KeySource for bool {
	fn key(&self) -> Key<'_> {
		Key::Bool(*self)
	}
}

macro_rules! signed_key_source {
	($($ty:ty),* $(,)?) => {$(
		impl KeySource for $ty {
			fn key(&self) -> Key<'_> {
				Key::Int(*self as i64)
			}
		}
	)*};
}

macro_rules! unsigned_key_source {
	($($ty:ty),* $(,)?) => {$(
		impl KeySource for $ty {
			fn key(&self) -> Key<'_> {
				Key::Uint(*self as u64)
			}
		}
	)*};
}

signed_key_source!(i8, i16, i32, i64, isize);
unsigned_key_source!(u8, u16, u32, u64, usize);
