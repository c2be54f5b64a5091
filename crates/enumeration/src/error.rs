use thiserror::Error;

/// Which key of an instance a lookup or collision refers to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum KeyKind {
	/// The integer value (`meta.value`).
	Value,
	/// The display name (`meta.name`).
	Name,
}

impl std::fmt::Display for KeyKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			KeyKind::Value => write!(f, "value"),
			KeyKind::Name => write!(f, "name"),
		}
	}
}

/// Lookup failure for [`VariantSet::from_value`](crate::VariantSet::from_value)
/// and [`VariantSet::from_name`](crate::VariantSet::from_name).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
	/// No declared instance carries the requested value or name.
	#[error("'{input}' is not a valid {kind} for {type_name}")]
	InvalidArgument {
		input: String,
		kind: KeyKind,
		type_name: &'static str,
	},
}

impl EnumError {
	pub(crate) fn invalid_value(value: i32, type_name: &'static str) -> Self {
		Self::InvalidArgument {
			input: value.to_string(),
			kind: KeyKind::Value,
			type_name,
		}
	}

	pub(crate) fn invalid_name(name: &str, type_name: &'static str) -> Self {
		Self::InvalidArgument {
			input: name.to_owned(),
			kind: KeyKind::Name,
			type_name,
		}
	}
}

/// Two instances of one variant-set share a value or a name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("duplicate {kind} in {label}: key={key:?} existing={existing:?} new={new:?}")]
pub struct DuplicateKey {
	/// Label of the index being built.
	pub label: &'static str,
	/// Whether the value or the name collided.
	pub kind: KeyKind,
	/// The colliding key, rendered as text.
	pub key: String,
	/// Name of the instance that claimed the key first.
	pub existing: &'static str,
	/// Name of the instance that tried to claim it again.
	pub new: &'static str,
}
