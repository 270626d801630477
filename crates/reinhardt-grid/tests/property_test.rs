//! Property-based tests for attribute handling and type-tag normalisation

use proptest::prelude::*;
use reinhardt_grid::registry::{normalize_type_name, qualified_type_name};
use reinhardt_grid::{AttributeCategory, AttributeMap, Column, Container, GridError, StrategyKind};
use std::collections::BTreeMap;

const CATEGORIES: [&str; 4] = ["col", "heading", "row", "cell"];

fn category_maps() -> impl Strategy<Value = BTreeMap<String, AttributeMap>> {
	prop::collection::btree_map(
		prop::sample::select(CATEGORIES.to_vec()).prop_map(str::to_string),
		prop::collection::btree_map("[a-z][a-z-]{0,10}", "[ -~]{0,16}", 0..4),
		0..4,
	)
}

proptest! {
	/// Provided categories are replaced, the others keep their previous maps.
	#[test]
	fn prop_set_attributes_replaces_provided_categories(
		initial in category_maps(),
		update in category_maps(),
	) {
		let mut column = Column::new(Container::new());
		column.set_attributes(initial.clone()).unwrap();
		column.set_attributes(update.clone()).unwrap();

		for name in CATEGORIES {
			let category = name.parse::<AttributeCategory>().unwrap();
			let expected = update
				.get(name)
				.or_else(|| initial.get(name))
				.cloned()
				.unwrap_or_default();
			prop_assert_eq!(column.attributes_for(category), &expected);
			prop_assert_eq!(column.attributes(Some(name)).category(), Some(&expected));
		}
	}

	/// Any category name outside the fixed set is rejected without side effects.
	#[test]
	fn prop_unknown_category_rejected(
		name in "[a-z]{1,10}".prop_filter("known category", |n| !CATEGORIES.contains(&n.as_str())),
		before in category_maps(),
	) {
		let mut column = Column::new(Container::new());
		column.set_attributes(before).unwrap();
		let snapshot = column.all_attributes().clone();

		let result = column.set_attributes([(name, [("class", "x")])]);

		prop_assert!(matches!(result, Err(GridError::Validation(_))));
		prop_assert_eq!(column.all_attributes(), &snapshot);
	}

	/// Normalised names drop separators and capitalise every segment.
	#[test]
	fn prop_normalized_name_shape(segments in prop::collection::vec("[a-z]{1,8}", 1..4)) {
		let tag = segments.join("_");
		let name = normalize_type_name(&tag);

		prop_assert!(!name.contains('_'));
		prop_assert_eq!(name.len(), tag.len() - (segments.len() - 1));
		prop_assert_eq!(name.to_lowercase(), segments.concat());
		prop_assert_eq!(
			name.chars().filter(char::is_ascii_uppercase).count(),
			segments.len()
		);
		prop_assert_eq!(
			qualified_type_name(StrategyKind::Render, &tag),
			format!("reinhardt_grid::render::{}", name)
		);
	}

	/// The fallback field is generated once and never empty.
	#[test]
	fn prop_field_fallback_is_stable(name in "[A-Za-z ]{0,12}") {
		let column = Column::with_name(Container::new(), name);
		let first = column.field().to_string();

		prop_assert!(!first.is_empty());
		prop_assert_eq!(column.field(), first.as_str());
	}
}
