//! Declarative column definitions
//!
//! Grids are usually declared in configuration files. A
//! [`ColumnDefinition`] carries every column property and is turned into a
//! [`Column`](crate::Column) with
//! [`Column::from_definition`](crate::Column::from_definition).

use crate::error::{GridError, GridResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Serialisable description of a column
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnDefinition {
	/// Display label
	pub name: String,

	/// Data field; a unique token is generated when absent
	pub field: Option<String>,

	/// Data source key used for sorting and filtering
	pub index: String,

	/// Attributes keyed by category (`col`, `heading`, `row`, `cell`)
	pub attributes: Map<String, Value>,

	/// Custom template reference
	pub template: Option<String>,

	/// Whether the column can be sorted
	pub sortable: bool,

	/// Filter type tag; empty disables filtering
	pub filter_type: String,

	/// Render type tag; empty disables rendering
	pub render_type: String,

	/// Whether the column only appears in exports
	pub export_only: bool,
}

impl Default for ColumnDefinition {
	fn default() -> Self {
		Self {
			name: String::new(),
			field: None,
			index: String::new(),
			attributes: Map::new(),
			template: None,
			sortable: true,
			filter_type: "text".to_string(),
			render_type: "text".to_string(),
			export_only: false,
		}
	}
}

#[derive(Deserialize)]
struct DefinitionList {
	#[serde(default)]
	columns: Vec<ColumnDefinition>,
}

impl ColumnDefinition {
	/// Parses a single column from TOML.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_grid::ColumnDefinition;
	///
	/// let definition = ColumnDefinition::from_toml_str(r#"
	///     name = "Status"
	///     index = "status"
	///     filter_type = "select"
	/// "#).unwrap();
	///
	/// assert_eq!(definition.name, "Status");
	/// assert_eq!(definition.render_type, "text");
	/// assert!(definition.sortable);
	/// ```
	pub fn from_toml_str(source: &str) -> GridResult<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Parses a `[[columns]]` array of tables from TOML.
	pub fn list_from_toml_str(source: &str) -> GridResult<Vec<Self>> {
		Ok(toml::from_str::<DefinitionList>(source)?.columns)
	}

	/// Parses a single column from a JSON object.
	///
	/// Positional arrays are rejected even though serde would map them onto
	/// the fields in declaration order.
	pub fn from_json_str(source: &str) -> GridResult<Self> {
		let value: Value =
			serde_json::from_str(source).map_err(|err| GridError::Settings(err.to_string()))?;
		if !value.is_object() {
			return Err(GridError::Settings(
				"expected a column definition object".to_string(),
			));
		}
		serde_json::from_value(value).map_err(|err| GridError::Settings(err.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_defaults_match_column_defaults() {
		let definition = ColumnDefinition::from_toml_str("").unwrap();
		assert_eq!(definition, ColumnDefinition::default());
		assert_eq!(definition.filter_type, "text");
		assert!(!definition.export_only);
	}

	#[rstest]
	fn test_list_with_attributes() {
		let columns = ColumnDefinition::list_from_toml_str(
			r#"
			[[columns]]
			name = "ID"
			index = "u.id"
			filter_type = "number"

			[[columns]]
			name = "Created"
			index = "u.created_at"
			filter_type = "date_range"
			render_type = "date"

			[columns.attributes.cell]
			class = "text-right"
			colspan = 2
			"#,
		)
		.unwrap();

		assert_eq!(columns.len(), 2);
		assert_eq!(columns[0].filter_type, "number");
		assert_eq!(columns[1].render_type, "date");
		assert_eq!(
			Value::Object(columns[1].attributes.clone()),
			json!({"cell": {"class": "text-right", "colspan": 2}})
		);
	}

	#[rstest]
	fn test_unknown_property_rejected() {
		let err = ColumnDefinition::from_toml_str("width = 10").unwrap_err();
		assert!(matches!(err, GridError::Settings(_)));
	}

	#[rstest]
	fn test_from_json() {
		let definition = ColumnDefinition::from_json_str(
			r#"{"name": "Active", "render_type": "yes_no", "sortable": false}"#,
		)
		.unwrap();

		assert_eq!(definition.render_type, "yes_no");
		assert!(!definition.sortable);
	}

	#[rstest]
	#[case("[]")]
	#[case(r#"["Status", null, "status"]"#)]
	#[case(r#""Status""#)]
	fn test_from_json_requires_object(#[case] source: &str) {
		let err = ColumnDefinition::from_json_str(source).unwrap_err();
		assert!(matches!(
			err,
			GridError::Settings(ref message) if message == "expected a column definition object"
		));
	}

	#[rstest]
	fn test_from_json_reports_syntax_errors() {
		let err = ColumnDefinition::from_json_str("{").unwrap_err();
		assert!(matches!(err, GridError::Settings(_)));
	}
}
