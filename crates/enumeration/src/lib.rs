#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Closed, named, ordered sets of singleton values.
//!
//! An enumeration class is a concrete type whose instances are a fixed list of
//! `static` singletons, each carrying an integer value and a display name. This
//! crate provides the shared pieces:
//! - [`EnumMeta`]: The stored `(value, name)` pair
//! - [`Enumeration`]: Object-safe accessors, type-guarded equality and ordering
//! - [`VariantSet`]: Enumerate-all and lookup by value or name for one concrete type
//! - [`EnumBuilder`] / [`EnumIndex`]: The per-type registry behind [`VariantSet`]
//! - [`enumeration!`] / [`impl_enumeration!`]: Declaration macros
//!
//! ```
//! use enumclass::{VariantSet, enumeration};
//!
//! enumeration! {
//!     /// Kinds of test suites.
//!     pub struct ExampleType {
//!         UNIT = (0, "Unit Tests"),
//!         INTEGRATION = (1, "Integration Tests"),
//!         E2E = (2, "End to End Tests"),
//!     }
//! }
//!
//! assert_eq!(ExampleType::from_value(1).unwrap(), ExampleType::INTEGRATION);
//! assert_eq!(ExampleType::E2E.to_string(), "End to End Tests");
//! assert!(ExampleType::UNIT < ExampleType::INTEGRATION);
//! ```

mod error;
mod index;
mod macros;
mod meta;
mod traits;

pub use error::{DuplicateKey, EnumError, KeyKind};
pub use index::{DuplicatePolicy, EnumBuilder, EnumIndex, Variants};
pub use meta::EnumMeta;
pub use traits::{Enumeration, VariantSet};

#[doc(hidden)]
pub use paste;
