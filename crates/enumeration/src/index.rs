//! Per-type registry of declared instances.
//!
//! Every concrete variant-set owns one [`EnumIndex`], built once behind a
//! `LazyLock` by the code [`impl_enumeration!`](crate::impl_enumeration) emits:
//!
//! ```rust,ignore
//! static INDEX: LazyLock<EnumIndex<Planet>> = LazyLock::new(|| {
//!     EnumBuilder::new("Planet")
//!         .extend([&MERCURY, &VENUS, &EARTH])
//!         .build()
//! });
//! ```

use rustc_hash::FxHashMap as HashMap;

use crate::error::{DuplicateKey, EnumError, KeyKind};
use crate::traits::Enumeration;

/// Restartable iterator over the declared instances of `T`.
pub type Variants<T> = std::iter::Copied<std::slice::Iter<'static, &'static T>>;

/// What building an index does when two instances of one variant-set claim
/// the same value or the same name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
	/// Reject the variant-set; `build` panics and `try_build` returns the
	/// [`DuplicateKey`].
	#[default]
	Panic,
	/// The earlier declaration owns the key, as a lookup that scans the
	/// instances in declaration order would resolve it.
	FirstWins,
	/// The later declaration owns the key.
	LastWins,
}

impl DuplicatePolicy {
	/// Rejects ambiguous variant-sets when debug assertions are on, and
	/// otherwise resolves them to the first declaration.
	#[inline]
	pub fn for_build() -> Self {
		if cfg!(debug_assertions) {
			DuplicatePolicy::Panic
		} else {
			DuplicatePolicy::FirstWins
		}
	}
}

/// Declared instances of one concrete type with O(1) lookup by value and name.
pub struct EnumIndex<T: Enumeration + 'static> {
	label: &'static str,
	items: Vec<&'static T>,
	by_value: HashMap<i32, &'static T>,
	by_name: HashMap<&'static str, &'static T>,
}

impl<T: Enumeration + 'static> EnumIndex<T> {
	/// Returns the label used in diagnostics and error messages.
	#[inline]
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Looks up an instance by value.
	#[inline]
	pub fn get_by_value(&self, value: i32) -> Option<&'static T> {
		self.by_value.get(&value).copied()
	}

	/// Looks up an instance by display name.
	#[inline]
	pub fn get_by_name(&self, name: &str) -> Option<&'static T> {
		self.by_name.get(name).copied()
	}

	/// Looks up an instance by value, failing with [`EnumError::InvalidArgument`].
	pub fn resolve_value(&self, value: i32) -> Result<&'static T, EnumError> {
		self.get_by_value(value)
			.ok_or_else(|| EnumError::invalid_value(value, self.label))
	}

	/// Looks up an instance by display name, failing with [`EnumError::InvalidArgument`].
	pub fn resolve_name(&self, name: &str) -> Result<&'static T, EnumError> {
		self.get_by_name(name)
			.ok_or_else(|| EnumError::invalid_name(name, self.label))
	}

	/// Returns all instances in declaration order.
	#[inline]
	pub fn items(&self) -> &[&'static T] {
		&self.items
	}

	/// Returns the number of declared instances.
	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if no instance was declared.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns an iterator over all instances in declaration order.
	///
	/// Only available on a `'static` index, which is what
	/// [`VariantSet::index`](crate::VariantSet::index) hands out.
	#[inline]
	pub fn iter(&'static self) -> Variants<T> {
		self.items.iter().copied()
	}
}

/// Builder for an [`EnumIndex`].
///
/// Collects instances in declaration order, drops repeated references to the
/// same instance, and validates value and name uniqueness under the
/// configured [`DuplicatePolicy`].
pub struct EnumBuilder<T: Enumeration + 'static> {
	label: &'static str,
	defs: Vec<&'static T>,
	policy: DuplicatePolicy,
}

impl<T: Enumeration + 'static> EnumBuilder<T> {
	/// Creates a new builder labelled with the concrete type name.
	///
	/// The policy defaults to [`DuplicatePolicy::for_build()`].
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			defs: Vec::new(),
			policy: DuplicatePolicy::for_build(),
		}
	}

	/// Overrides the build-dependent [`DuplicatePolicy`].
	pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
		self.policy = policy;
		self
	}

	/// Appends one instance after those already declared.
	pub fn push(mut self, def: &'static T) -> Self {
		self.defs.push(def);
		self
	}

	/// Appends instances in iteration order; that order is what
	/// [`VariantSet::all`](crate::VariantSet::all) yields.
	pub fn extend<I: IntoIterator<Item = &'static T>>(mut self, defs: I) -> Self {
		self.defs.extend(defs);
		self
	}

	/// Builds the index, validating keys according to policy.
	///
	/// # Panics
	///
	/// Panics if two instances share a value or a name and the policy is
	/// [`DuplicatePolicy::Panic`].
	pub fn build(self) -> EnumIndex<T> {
		match self.try_build() {
			Ok(index) => index,
			Err(err) => panic!("{err}"),
		}
	}

	/// Builds the index, returning the first collision as an error when the
	/// policy is [`DuplicatePolicy::Panic`].
	///
	/// With the other policies collisions are resolved, logged and never
	/// returned.
	pub fn try_build(mut self) -> Result<EnumIndex<T>, DuplicateKey> {
		let mut seen = std::collections::HashSet::with_capacity(self.defs.len());
		self.defs.retain(|d| seen.insert(*d as *const T as usize));

		let mut by_value = HashMap::with_capacity_and_hasher(self.defs.len(), Default::default());
		let mut by_name = HashMap::with_capacity_and_hasher(self.defs.len(), Default::default());

		for &def in &self.defs {
			let meta = def.meta();
			self.insert_key(&mut by_value, KeyKind::Value, meta.value, def)?;
			self.insert_key(&mut by_name, KeyKind::Name, meta.name, def)?;
		}

		tracing::debug!(
			label = self.label,
			count = self.defs.len(),
			"built enumeration index"
		);

		Ok(EnumIndex {
			label: self.label,
			items: self.defs,
			by_value,
			by_name,
		})
	}

	fn insert_key<K>(
		&self,
		map: &mut HashMap<K, &'static T>,
		kind: KeyKind,
		key: K,
		def: &'static T,
	) -> Result<(), DuplicateKey>
	where
		K: Eq + std::hash::Hash + std::fmt::Display,
	{
		let Some(&existing) = map.get(&key) else {
			map.insert(key, def);
			return Ok(());
		};

		let collision = DuplicateKey {
			label: self.label,
			kind,
			key: key.to_string(),
			existing: existing.name(),
			new: def.name(),
		};
		match self.policy {
			DuplicatePolicy::Panic => return Err(collision),
			DuplicatePolicy::FirstWins => {
				tracing::warn!(%collision, "keeping first enumeration instance");
			}
			DuplicatePolicy::LastWins => {
				tracing::warn!(%collision, "replacing enumeration instance");
				map.insert(key, def);
			}
		}
		Ok(())
	}
}
