//! Grid settings consumed by the built-in strategies
//!
//! Settings are registered in the [`Container`] by the host application.
//! Strategies fall back to [`GridSettings::default`] when none are present.

use crate::container::Container;
use crate::error::GridResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Presentation settings for filters and renderers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridSettings {
	/// CSS class applied to filter inputs
	pub input_class: String,

	/// Label of the "no selection" option of select filters
	pub select_empty_label: String,

	/// `strftime` format used by the date renderer
	pub date_format: String,

	/// `strftime` format used by the date-time renderer
	pub date_time_format: String,

	/// Label rendered for true values
	pub yes_label: String,

	/// Label rendered for false values
	pub no_label: String,
}

impl Default for GridSettings {
	fn default() -> Self {
		Self {
			input_class: "form-control".to_string(),
			select_empty_label: String::new(),
			date_format: "%Y-%m-%d".to_string(),
			date_time_format: "%Y-%m-%d %H:%M:%S".to_string(),
			yes_label: "Yes".to_string(),
			no_label: "No".to_string(),
		}
	}
}

#[derive(Deserialize)]
struct SettingsDocument {
	grid: GridSettings,
}

impl GridSettings {
	/// Parses settings from TOML.
	///
	/// Accepts either a document with a `[grid]` table (other tables are
	/// ignored) or a flat table of settings.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_grid::GridSettings;
	///
	/// let settings = GridSettings::from_toml_str(r#"
	///     [grid]
	///     yes_label = "Oui"
	///     no_label = "Non"
	/// "#).unwrap();
	///
	/// assert_eq!(settings.yes_label, "Oui");
	/// assert_eq!(settings.input_class, "form-control");
	/// ```
	pub fn from_toml_str(source: &str) -> GridResult<Self> {
		let table: toml::Table = toml::from_str(source)?;
		if table.contains_key("grid") {
			Ok(toml::from_str::<SettingsDocument>(source)?.grid)
		} else {
			Ok(toml::from_str(source)?)
		}
	}

	/// Returns the settings registered in `container`, or the defaults.
	pub fn from_container(container: &Container) -> Arc<Self> {
		container.get::<Self>().unwrap_or_default()
	}
}
