/// The `(value, name)` pair stored by every enumeration instance.
///
/// Concrete types keep this in a private `meta` field so that only the
/// declaring module can construct instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumMeta {
	/// Integer value, unique within one variant-set.
	pub value: i32,
	/// Display name, unique within one variant-set.
	pub name: &'static str,
}

impl EnumMeta {
	/// Creates the metadata for one instance.
	pub const fn new(value: i32, name: &'static str) -> Self {
		Self { value, name }
	}
}
