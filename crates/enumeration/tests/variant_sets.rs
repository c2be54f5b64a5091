#![allow(unused_crate_dependencies)]

use std::cmp::Ordering;
use std::collections::HashSet;
use std::thread;

use enumclass::{EnumMeta, Enumeration, VariantSet, enumeration, impl_enumeration};

/// Variant-set carrying data beyond value and name.
#[derive(Debug)]
pub struct Planet {
	meta: EnumMeta,
	mass: f64,
	radius: f64,
}

impl Planet {
	const G: f64 = 6.673_00e-11;

	const fn new(value: i32, name: &'static str, mass: f64, radius: f64) -> Self {
		Self {
			meta: EnumMeta::new(value, name),
			mass,
			radius,
		}
	}

	fn surface_gravity(&self) -> f64 {
		Self::G * self.mass / (self.radius * self.radius)
	}
}

pub static MERCURY: Planet = Planet::new(1, "Mercury", 3.303e23, 2.4397e6);
pub static VENUS: Planet = Planet::new(2, "Venus", 4.869e24, 6.0518e6);
pub static EARTH: Planet = Planet::new(3, "Earth", 5.976e24, 6.37814e6);
pub static MARS: Planet = Planet::new(4, "Mars", 6.421e23, 3.3972e6);

impl_enumeration!(Planet, "Planet", [&MERCURY, &VENUS, &EARTH, &MARS]);

enumeration! {
	/// Declared out of value order on purpose.
	pub struct Priority {
		HIGH = (30, "High"),
		LOW = (10, "Low"),
		MEDIUM = (20, "Medium"),
	}
}

enumeration! {
	/// Shares value and name with `MERCURY`.
	struct Rank {
		FIRST = (1, "Mercury"),
	}
}

enumeration! {
	pub struct Signed {
		NEGATIVE = (-5, "Negative"),
		ZERO = (0, "Zero"),
		MAX = (i32::MAX, "Max"),
	}
}

#[test]
fn test_extra_fields_survive_lookup() {
	let earth = Planet::from_name("Earth").unwrap();
	assert!(std::ptr::eq(earth, &EARTH));
	assert!((earth.surface_gravity() - 9.80).abs() < 0.01);
	assert_eq!(Planet::from_value(4).unwrap().mass, 6.421e23);
}

#[test]
fn test_hand_written_set_error_messages() {
	assert_eq!(
		Planet::from_value(9).unwrap_err().to_string(),
		"'9' is not a valid value for Planet"
	);
	assert_eq!(
		Planet::from_name("Pluto").unwrap_err().to_string(),
		"'Pluto' is not a valid name for Planet"
	);
}

#[test]
fn test_all_keeps_declaration_order_not_value_order() {
	let names: Vec<_> = Priority::all().map(|p| p.name()).collect();
	assert_eq!(names, ["High", "Low", "Medium"]);

	let mut sorted: Vec<_> = Priority::all().collect();
	sorted.sort();
	assert_eq!(sorted, [Priority::LOW, Priority::MEDIUM, Priority::HIGH]);
	assert_eq!(Priority::all().max(), Some(Priority::HIGH));
}

#[test]
fn test_negative_and_extreme_values() {
	assert_eq!(Signed::from_value(-5).unwrap(), Signed::NEGATIVE);
	assert_eq!(Signed::from_value(i32::MAX).unwrap(), Signed::MAX);
	assert_eq!(
		Signed::from_value(i32::MIN).unwrap_err().to_string(),
		"'-2147483648' is not a valid value for Signed"
	);
	assert!(Signed::NEGATIVE < Signed::ZERO);
	assert_eq!(Signed::NEGATIVE.compare_to(None), Ordering::Greater);
}

#[test]
fn test_heterogeneous_instances_behind_dyn() {
	let defs: [&dyn Enumeration; 5] = [
		Priority::LOW,
		&VENUS,
		Signed::ZERO,
		Priority::LOW,
		&MERCURY,
	];

	let distinct: HashSet<&dyn Enumeration> = defs.iter().copied().collect();
	assert_eq!(distinct.len(), 4);

	let rendered: Vec<_> = defs.iter().map(|d| d.to_string()).collect();
	assert_eq!(rendered, ["Low", "Venus", "Zero", "Low", "Mercury"]);

	let types: Vec<_> = defs.iter().map(|d| d.type_name()).collect();
	assert_eq!(types, ["Priority", "Planet", "Signed", "Priority", "Planet"]);
}

#[test]
fn test_equality_is_type_guarded_while_ordering_is_not() {
	let planet: &dyn Enumeration = &MERCURY;
	let rank: &dyn Enumeration = Rank::FIRST;

	assert_eq!(planet.value(), rank.value());
	assert_eq!(planet.name(), rank.name());
	assert!(!planet.equals(Some(rank)));
	assert!(planet != rank);
	assert_eq!(planet.compare_to(Some(rank)), Ordering::Equal);
	assert!(planet.equals(Some(&MERCURY)));
}

#[test]
fn test_concurrent_first_access() {
	let results: Vec<Vec<&'static Planet>> = thread::scope(|s| {
		let handles: Vec<_> = (0..8)
			.map(|i| {
				s.spawn(move || {
					let value = (i % 4) + 1;
					let found = Planet::from_value(value).unwrap();
					assert_eq!(found.value(), value);
					Planet::all().collect::<Vec<_>>()
				})
			})
			.collect();
		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});

	for all in &results {
		assert_eq!(all.len(), 4);
		assert!(std::ptr::eq(all[0], &MERCURY));
		assert!(std::ptr::eq(all[3], &MARS));
	}
	assert!(std::ptr::eq(Planet::index(), Planet::index()));
}

enumeration! {
	/// Two declarations claim value 1.
	struct DuplicateValue {
		FIRST = (1, "First"),
		SECOND = (1, "Second"),
	}
}

/// Two declarations claim the name "Same".
#[derive(Debug)]
struct DuplicateName {
	meta: EnumMeta,
}

static SAME_A: DuplicateName = DuplicateName {
	meta: EnumMeta::new(1, "Same"),
};
static SAME_B: DuplicateName = DuplicateName {
	meta: EnumMeta::new(2, "Same"),
};

impl_enumeration!(DuplicateName, "DuplicateName", [&SAME_A, &SAME_B]);

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "duplicate value in DuplicateValue")]
fn test_declared_duplicate_value_rejected() {
	let _ = DuplicateValue::count();
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "duplicate name in DuplicateName")]
fn test_declared_duplicate_name_rejected() {
	let _ = DuplicateName::from_name("Same");
}

#[cfg(not(debug_assertions))]
#[test]
fn test_declared_duplicates_resolve_to_first() {
	assert!(std::ptr::eq(
		DuplicateValue::from_value(1).unwrap(),
		DuplicateValue::FIRST
	));
	assert_eq!(DuplicateValue::count(), 2);
	assert!(std::ptr::eq(DuplicateName::from_name("Same").unwrap(), &SAME_A));
}
