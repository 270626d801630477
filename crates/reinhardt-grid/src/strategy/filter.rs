//! Built-in filter strategies

use super::FilterStrategy;
use crate::container::Container;
use crate::html::{attributes, escape};
use crate::settings::GridSettings;
use std::any::Any;
use std::sync::Arc;

/// Single `<input>` filter
///
/// Registered as `Text`, `Number` and `Date`.
///
/// # Example
///
/// ```rust
/// use reinhardt_grid::Container;
/// use reinhardt_grid::strategy::{FilterStrategy, InputFilter};
///
/// let mut filter = InputFilter::number(&Container::new());
/// filter.set_index("quantity");
/// assert_eq!(
///     filter.render(),
///     r#"<input type="number" name="quantity" class="form-control" />"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct InputFilter {
	input_type: &'static str,
	index: String,
	settings: Arc<GridSettings>,
}

impl InputFilter {
	fn with_type(container: &Container, input_type: &'static str) -> Self {
		Self {
			input_type,
			index: String::new(),
			settings: GridSettings::from_container(container),
		}
	}

	/// Creates a free text filter
	pub fn text(container: &Container) -> Self {
		Self::with_type(container, "text")
	}

	/// Creates a numeric filter
	pub fn number(container: &Container) -> Self {
		Self::with_type(container, "number")
	}

	/// Creates a date filter
	pub fn date(container: &Container) -> Self {
		Self::with_type(container, "date")
	}

	/// Returns the HTML input type
	pub fn input_type(&self) -> &str {
		self.input_type
	}
}

impl FilterStrategy for InputFilter {
	fn set_index(&mut self, index: &str) {
		self.index = index.to_string();
	}

	fn index(&self) -> &str {
		&self.index
	}

	fn render(&self) -> String {
		format!(
			"<input{} />",
			attributes([
				("type", self.input_type),
				("name", self.index.as_str()),
				("class", self.settings.input_class.as_str()),
			])
		)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Dropdown filter
///
/// The first option always has an empty value and selects every row.
#[derive(Debug, Clone)]
pub struct SelectFilter {
	index: String,
	options: Vec<(String, String)>,
	settings: Arc<GridSettings>,
}

impl SelectFilter {
	/// Creates a select filter without options
	pub fn new(container: &Container) -> Self {
		Self {
			index: String::new(),
			options: Vec::new(),
			settings: GridSettings::from_container(container),
		}
	}

	/// Sets the `(value, label)` options
	pub fn with_options<I, V, L>(mut self, options: I) -> Self
	where
		I: IntoIterator<Item = (V, L)>,
		V: Into<String>,
		L: Into<String>,
	{
		self.options = options
			.into_iter()
			.map(|(value, label)| (value.into(), label.into()))
			.collect();
		self
	}

	/// Returns the configured options
	pub fn options(&self) -> &[(String, String)] {
		&self.options
	}
}

impl FilterStrategy for SelectFilter {
	fn set_index(&mut self, index: &str) {
		self.index = index.to_string();
	}

	fn index(&self) -> &str {
		&self.index
	}

	fn render(&self) -> String {
		let mut html = format!(
			"<select{}>",
			attributes([
				("name", self.index.as_str()),
				("class", self.settings.input_class.as_str()),
			])
		);

		html.push_str(&format!(
			r#"<option value="">{}</option>"#,
			escape(&self.settings.select_empty_label)
		));
		for (value, label) in &self.options {
			html.push_str(&format!(
				r#"<option value="{}">{}</option>"#,
				escape(value),
				escape(label)
			));
		}

		html.push_str("</select>");
		html
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Pair of date inputs bounding a range
///
/// Inputs are named `index[from]` and `index[to]`.
#[derive(Debug, Clone)]
pub struct DateRangeFilter {
	index: String,
	settings: Arc<GridSettings>,
}

impl DateRangeFilter {
	/// Creates a date range filter
	pub fn new(container: &Container) -> Self {
		Self {
			index: String::new(),
			settings: GridSettings::from_container(container),
		}
	}

	fn bound(&self, bound: &str) -> String {
		let name = format!("{}[{}]", self.index, bound);
		format!(
			"<input{} />",
			attributes([
				("type", "date"),
				("name", name.as_str()),
				("class", self.settings.input_class.as_str()),
			])
		)
	}
}

impl FilterStrategy for DateRangeFilter {
	fn set_index(&mut self, index: &str) {
		self.index = index.to_string();
	}

	fn index(&self) -> &str {
		&self.index
	}

	fn render(&self) -> String {
		format!("{}{}", self.bound("from"), self.bound("to"))
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
