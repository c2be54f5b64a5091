use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::EnumError;
use crate::index::{EnumIndex, Variants};
use crate::meta::EnumMeta;

/// Object-safe view of an enumeration instance.
///
/// Implemented for concrete types by [`impl_enumeration!`](crate::impl_enumeration),
/// which reads a `meta: EnumMeta` field. Instances of different concrete types
/// can be mixed behind `&dyn Enumeration`.
///
/// Equality is type-guarded while ordering is not: two instances of different
/// concrete types with the same value are never [`equals`](Self::equals), yet
/// [`compare_to`](Self::compare_to) reports them as [`Ordering::Equal`].
pub trait Enumeration: Any + fmt::Debug + Send + Sync {
	/// Returns the stored `(value, name)` pair.
	fn meta(&self) -> &EnumMeta;

	/// Returns the short name of the concrete type, e.g. `"ExampleType"`.
	fn type_name(&self) -> &'static str;

	/// Upcasts to [`Any`] for concrete type checks.
	fn as_any(&self) -> &dyn Any;

	/// Returns the integer value.
	fn value(&self) -> i32 {
		self.meta().value
	}

	/// Returns the display name.
	fn name(&self) -> &'static str {
		self.meta().name
	}

	/// Returns the display name as an owned string.
	fn to_display_string(&self) -> String {
		self.name().to_owned()
	}

	/// Returns true iff `other` is present, has the same concrete type and
	/// carries the same value.
	fn equals(&self, other: Option<&dyn Enumeration>) -> bool {
		other.is_some_and(|other| {
			self.as_any().type_id() == other.as_any().type_id() && self.value() == other.value()
		})
	}

	/// Orders by value, ascending, without checking the concrete type.
	///
	/// An absent `other` sorts below every instance.
	fn compare_to(&self, other: Option<&dyn Enumeration>) -> Ordering {
		match other {
			Some(other) => self.value().cmp(&other.value()),
			None => Ordering::Greater,
		}
	}
}

impl PartialEq for dyn Enumeration {
	fn eq(&self, other: &Self) -> bool {
		self.equals(Some(other))
	}
}

impl Eq for dyn Enumeration {}

impl Hash for dyn Enumeration {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.value().hash(state);
	}
}

impl fmt::Display for dyn Enumeration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// A concrete variant-set: one type together with its declared instances.
///
/// Only [`TYPE_NAME`](Self::TYPE_NAME) and [`index`](Self::index) are required;
/// [`impl_enumeration!`](crate::impl_enumeration) supplies both.
pub trait VariantSet: Enumeration + Sized {
	/// Short type name used in error messages.
	const TYPE_NAME: &'static str;

	/// Returns the registry of declared instances, built on first access.
	fn index() -> &'static EnumIndex<Self>;

	/// Returns every declared instance in declaration order.
	///
	/// The iterator is `Clone`, so it can be restarted.
	fn all() -> Variants<Self> {
		Self::index().iter()
	}

	/// Returns the number of declared instances.
	fn count() -> usize {
		Self::index().len()
	}

	/// Returns the instance with the given value.
	fn from_value(value: i32) -> Result<&'static Self, EnumError> {
		Self::index().resolve_value(value)
	}

	/// Returns the instance with the given display name.
	fn from_name(name: &str) -> Result<&'static Self, EnumError> {
		Self::index().resolve_name(name)
	}

	/// Returns the instance with the given value, if declared.
	fn try_from_value(value: i32) -> Option<&'static Self> {
		Self::index().get_by_value(value)
	}

	/// Returns the instance with the given display name, if declared.
	fn try_from_name(name: &str) -> Option<&'static Self> {
		Self::index().get_by_name(name)
	}
}
