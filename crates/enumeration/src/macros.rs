//! Declaration macros for concrete variant-sets.

/// Implements [`Enumeration`](crate::Enumeration), [`VariantSet`](crate::VariantSet)
/// and the value-based std traits for a type with a `meta: EnumMeta` field.
///
/// The instance list is registered in the given order. Use this when the
/// concrete type carries data beyond its value and name:
///
/// ```
/// use enumclass::{EnumMeta, VariantSet, impl_enumeration};
///
/// #[derive(Debug)]
/// pub struct Planet {
///     meta: EnumMeta,
///     mass: f64,
/// }
///
/// pub static MERCURY: Planet = Planet { meta: EnumMeta::new(1, "Mercury"), mass: 3.303e23 };
/// pub static VENUS: Planet = Planet { meta: EnumMeta::new(2, "Venus"), mass: 4.869e24 };
///
/// impl_enumeration!(Planet, "Planet", [&MERCURY, &VENUS]);
///
/// assert_eq!(Planet::from_name("Venus").unwrap().mass, 4.869e24);
/// ```
///
/// Generated impls:
/// - `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`: by value only
/// - `Display`: the display name
/// - `TryFrom<i32>` and `TryFrom<&str>` for `&'static T`
/// - `From<&T> for i32`
#[macro_export]
macro_rules! impl_enumeration {
	($ty:ty, $type_name:expr, [$($def:expr),* $(,)?]) => {
		impl $crate::Enumeration for $ty {
			fn meta(&self) -> &$crate::EnumMeta {
				&self.meta
			}

			fn type_name(&self) -> &'static str {
				<$ty as $crate::VariantSet>::TYPE_NAME
			}

			fn as_any(&self) -> &dyn ::core::any::Any {
				self
			}
		}

		impl $crate::VariantSet for $ty {
			const TYPE_NAME: &'static str = $type_name;

			fn index() -> &'static $crate::EnumIndex<$ty> {
				static INDEX: ::std::sync::LazyLock<$crate::EnumIndex<$ty>> =
					::std::sync::LazyLock::new(|| {
						$crate::EnumBuilder::new(<$ty as $crate::VariantSet>::TYPE_NAME)
							.extend([$($def),*])
							.build()
					});
				&INDEX
			}
		}

		impl ::core::cmp::PartialEq for $ty {
			fn eq(&self, other: &Self) -> bool {
				self.meta.value == other.meta.value
			}
		}

		impl ::core::cmp::Eq for $ty {}

		impl ::core::hash::Hash for $ty {
			fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
				::core::hash::Hash::hash(&self.meta.value, state);
			}
		}

		impl ::core::cmp::PartialOrd for $ty {
			fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
				::core::option::Option::Some(::core::cmp::Ord::cmp(self, other))
			}
		}

		impl ::core::cmp::Ord for $ty {
			fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
				::core::cmp::Ord::cmp(&self.meta.value, &other.meta.value)
			}
		}

		impl ::core::fmt::Display for $ty {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.write_str(self.meta.name)
			}
		}

		impl ::core::convert::TryFrom<i32> for &'static $ty {
			type Error = $crate::EnumError;

			fn try_from(value: i32) -> ::core::result::Result<Self, Self::Error> {
				<$ty as $crate::VariantSet>::from_value(value)
			}
		}

		impl<'a> ::core::convert::TryFrom<&'a str> for &'static $ty {
			type Error = $crate::EnumError;

			fn try_from(name: &'a str) -> ::core::result::Result<Self, Self::Error> {
				<$ty as $crate::VariantSet>::from_name(name)
			}
		}

		impl ::core::convert::From<&$ty> for i32 {
			fn from(def: &$ty) -> i32 {
				def.meta.value
			}
		}
	};
}

/// Declares a variant-set: the struct, one `static` per instance, an
/// associated `&'static` constant per instance, and every impl from
/// [`impl_enumeration!`].
///
/// The struct derives `Debug`; the type name in error messages is the struct
/// identifier.
///
/// ```
/// use enumclass::{VariantSet, enumeration};
///
/// enumeration! {
///     pub struct Level {
///         LOW = (1, "Low"),
///         HIGH = (2, "High"),
///     }
/// }
///
/// assert_eq!(Level::all().collect::<Vec<_>>(), [Level::LOW, Level::HIGH]);
/// assert_eq!(
///     Level::from_value(7).unwrap_err().to_string(),
///     "'7' is not a valid value for Level"
/// );
/// ```
#[macro_export]
macro_rules! enumeration {
	(
		$(#[$attr:meta])*
		$vis:vis struct $name:ident {
			$(
				$(#[$def_attr:meta])*
				$def:ident = ($value:expr, $label:expr)
			),* $(,)?
		}
	) => {
		$(#[$attr])*
		#[derive(Debug)]
		$vis struct $name {
			meta: $crate::EnumMeta,
		}

		$crate::paste::paste! {
			$(
				#[allow(non_upper_case_globals)]
				static [<__ $name _ $def>]: $name = $name {
					meta: $crate::EnumMeta::new($value, $label),
				};
			)*

			#[allow(non_upper_case_globals)]
			impl $name {
				$(
					$(#[$def_attr])*
					$vis const $def: &'static $name = &[<__ $name _ $def>];
				)*
			}
		}

		$crate::impl_enumeration!($name, stringify!($name), [$($name::$def),*]);
	};
}
