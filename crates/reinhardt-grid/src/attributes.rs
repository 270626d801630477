//! Per-column HTML attributes grouped by category
//!
//! A column carries four fixed groups of key/value attributes:
//!
//! - `col`: the `<col>` element of the column group
//! - `heading`: the header cell
//! - `row`: every row the column is rendered in
//! - `cell`: every data cell of the column
//!
//! Any other category name is rejected with [`GridError::Validation`].

use crate::error::{GridError, GridResult};
use crate::html;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Attribute key/value pairs of a single category.
pub type AttributeMap = BTreeMap<String, String>;

/// Fixed set of attribute categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeCategory {
	/// Column group element
	Col,
	/// Header cell
	Heading,
	/// Table row
	Row,
	/// Data cell
	Cell,
}

impl AttributeCategory {
	/// All categories, in declaration order.
	pub const ALL: [AttributeCategory; 4] = [Self::Col, Self::Heading, Self::Row, Self::Cell];

	/// Returns the category name as used in configuration.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Col => "col",
			Self::Heading => "heading",
			Self::Row => "row",
			Self::Cell => "cell",
		}
	}
}

impl fmt::Display for AttributeCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for AttributeCategory {
	type Err = GridError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|category| category.as_str() == s)
			.ok_or_else(|| {
				GridError::Validation(format!(
					"invalid attribute category \"{}\", only {} are allowed",
					s,
					Self::ALL.map(|c| c.as_str()).join(", ")
				))
			})
	}
}

/// Attributes of a column, one map per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attributes {
	col: AttributeMap,
	heading: AttributeMap,
	row: AttributeMap,
	cell: AttributeMap,
}

impl Attributes {
	/// Creates attributes with every category empty.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the map of a category.
	pub fn get(&self, category: AttributeCategory) -> &AttributeMap {
		match category {
			AttributeCategory::Col => &self.col,
			AttributeCategory::Heading => &self.heading,
			AttributeCategory::Row => &self.row,
			AttributeCategory::Cell => &self.cell,
		}
	}

	fn get_mut(&mut self, category: AttributeCategory) -> &mut AttributeMap {
		match category {
			AttributeCategory::Col => &mut self.col,
			AttributeCategory::Heading => &mut self.heading,
			AttributeCategory::Row => &mut self.row,
			AttributeCategory::Cell => &mut self.cell,
		}
	}

	/// Looks up a single attribute value.
	pub fn value(&self, category: AttributeCategory, key: &str) -> Option<&str> {
		self.get(category).get(key).map(String::as_str)
	}

	/// Returns true if the category holds `key`.
	pub fn contains(&self, category: AttributeCategory, key: &str) -> bool {
		self.get(category).contains_key(key)
	}

	/// Replaces the maps of the given categories.
	///
	/// Categories absent from `updates` keep their current maps.
	pub fn replace(&mut self, updates: AttributeUpdates) {
		for (category, map) in updates.0 {
			*self.get_mut(category) = map;
		}
	}

	/// Renders a category as an HTML attribute string.
	pub fn render(&self, category: AttributeCategory) -> String {
		html::attributes(
			self.get(category)
				.iter()
				.map(|(key, value)| (key.as_str(), value.as_str())),
		)
	}
}

/// Validated attribute input, ready to be applied with [`Attributes::replace`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeUpdates(Vec<(AttributeCategory, AttributeMap)>);

impl AttributeUpdates {
	/// Validates typed input: every key must name a known category.
	pub fn from_pairs<I, K, M, AK, AV>(input: I) -> GridResult<Self>
	where
		I: IntoIterator<Item = (K, M)>,
		K: AsRef<str>,
		M: IntoIterator<Item = (AK, AV)>,
		AK: Into<String>,
		AV: Into<String>,
	{
		input
			.into_iter()
			.map(|(category, map)| {
				let category = category.as_ref().parse::<AttributeCategory>()?;
				let map = map
					.into_iter()
					.map(|(key, value)| (key.into(), value.into()))
					.collect();
				Ok((category, map))
			})
			.collect::<GridResult<Vec<_>>>()
			.map(Self)
	}

	/// Validates dynamic input such as a decoded JSON document.
	///
	/// The input must be an object keyed by category whose values are
	/// objects of scalar values. Numbers and booleans are stored in their
	/// textual form.
	pub fn from_value(input: &Value) -> GridResult<Self> {
		let Value::Object(categories) = input else {
			return Err(GridError::Validation(
				"expected attributes to be a mapping".to_string(),
			));
		};

		let mut updates = Vec::with_capacity(categories.len());
		for (name, attributes) in categories {
			let category = name.parse::<AttributeCategory>()?;
			let Value::Object(attributes) = attributes else {
				return Err(GridError::Validation(format!(
					"expected attributes for {} to be a mapping",
					name
				)));
			};

			let mut map = AttributeMap::new();
			for (key, value) in attributes {
				let value = match value {
					Value::String(s) => s.clone(),
					Value::Number(n) => n.to_string(),
					Value::Bool(b) => b.to_string(),
					_ => {
						return Err(GridError::Validation(format!(
							"attribute \"{}.{}\" must be a string, number or boolean",
							name, key
						)));
					}
				};
				map.insert(key.clone(), value);
			}
			updates.push((category, map));
		}
		Ok(Self(updates))
	}
}

/// Result of [`crate::Column::attributes`]: one category or the whole set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeSelection<'a> {
	/// The map of the requested category
	Category(&'a AttributeMap),
	/// Every category, returned when no known category was requested
	All(&'a Attributes),
}

impl<'a> AttributeSelection<'a> {
	/// Returns the category map, if a single category was selected.
	pub fn category(self) -> Option<&'a AttributeMap> {
		match self {
			Self::Category(map) => Some(map),
			Self::All(_) => None,
		}
	}

	/// Returns the full attribute set, if no single category was selected.
	pub fn all(self) -> Option<&'a Attributes> {
		match self {
			Self::Category(_) => None,
			Self::All(attributes) => Some(attributes),
		}
	}
}
