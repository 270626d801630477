//! Grid column configuration
//!
//! A [`Column`] holds the display metadata of one grid column and resolves
//! its filter and render strategies on first use. Resolved strategies are
//! cached for the lifetime of the column.

use crate::attributes::{
	AttributeCategory, AttributeMap, AttributeSelection, AttributeUpdates, Attributes,
};
use crate::container::Container;
use crate::definition::ColumnDefinition;
use crate::error::{GridError, GridResult};
use crate::registry::StrategyRegistry;
use crate::strategy::{FilterStrategy, RenderStrategy};
use once_cell::sync::OnceCell;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Configuration of a single grid column
///
/// # Example
///
/// ```rust
/// use reinhardt_grid::{Column, Container};
///
/// let mut column = Column::with_name(Container::new(), "Status");
/// column
///     .set_index("status")
///     .set_filter_type("select")
///     .set_sortable(false);
///
/// let filter = column.filter().unwrap().unwrap();
/// assert_eq!(filter.index(), "status");
/// ```
#[derive(Debug, Clone)]
pub struct Column {
	container: Container,
	name: String,
	field: OnceCell<String>,
	index: String,
	attributes: Attributes,
	template: Option<String>,
	sortable: bool,
	filter_type: String,
	filter: OnceCell<Arc<dyn FilterStrategy>>,
	render_type: String,
	export_only: bool,
	render: OnceCell<Arc<dyn RenderStrategy>>,
}

impl Column {
	/// Creates a column bound to the host container
	pub fn new(container: Container) -> Self {
		Self::with_name(container, "")
	}

	/// Creates a column with a display name
	pub fn with_name(container: Container, name: impl Into<String>) -> Self {
		Self {
			container,
			name: name.into(),
			field: OnceCell::new(),
			index: String::new(),
			attributes: Attributes::new(),
			template: None,
			sortable: true,
			filter_type: "text".to_string(),
			filter: OnceCell::new(),
			render_type: "text".to_string(),
			export_only: false,
			render: OnceCell::new(),
		}
	}

	/// Creates a column from a declarative definition
	///
	/// Attributes go through the same validation as
	/// [`set_attributes_value`](Self::set_attributes_value).
	pub fn from_definition(container: Container, definition: ColumnDefinition) -> GridResult<Self> {
		let mut column = Self::with_name(container, definition.name);
		column
			.set_attributes_value(&Value::Object(definition.attributes))?
			.set_index(definition.index)
			.set_sortable(definition.sortable)
			.set_filter_type(definition.filter_type)
			.set_render_type(definition.render_type)
			.set_export_only(definition.export_only);
		if let Some(field) = definition.field {
			column.set_field(field);
		}
		if let Some(template) = definition.template {
			column.set_template(template);
		}
		Ok(column)
	}

	/// Returns the container handle shared with the strategies
	pub fn container(&self) -> &Container {
		&self.container
	}

	/// Returns the display name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Sets the display name
	pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
		self.name = name.into();
		self
	}

	/// Returns the data field, generating a unique one if none was set
	///
	/// The generated value is kept, so repeated calls agree.
	pub fn field(&self) -> &str {
		self.field.get_or_init(|| {
			let field = Uuid::new_v4().simple().to_string();
			tracing::debug!(column = %self.name, %field, "generated fallback grid field");
			field
		})
	}

	/// Sets the data field; an empty string clears it
	pub fn set_field(&mut self, field: impl Into<String>) -> &mut Self {
		let field = field.into();
		self.field = if field.is_empty() {
			OnceCell::new()
		} else {
			OnceCell::with_value(field)
		};
		self
	}

	/// Returns the data source key
	pub fn index(&self) -> &str {
		&self.index
	}

	/// Sets the data source key
	pub fn set_index(&mut self, index: impl Into<String>) -> &mut Self {
		self.index = index.into();
		self
	}

	/// Replaces the attributes of the given categories
	///
	/// Each key must be one of `col`, `heading`, `row` or `cell`. The maps of
	/// the given categories replace the stored ones; other categories are
	/// left as they are. On error nothing is changed.
	pub fn set_attributes<I, K, M, AK, AV>(&mut self, attributes: I) -> GridResult<&mut Self>
	where
		I: IntoIterator<Item = (K, M)>,
		K: AsRef<str>,
		M: IntoIterator<Item = (AK, AV)>,
		AK: Into<String>,
		AV: Into<String>,
	{
		let updates = AttributeUpdates::from_pairs(attributes)?;
		self.attributes.replace(updates);
		Ok(self)
	}

	/// Replaces attributes from a dynamic value such as decoded JSON
	///
	/// Fails with [`GridError::Validation`] if the value is not an object,
	/// names an unknown category, or maps a category to a non-object.
	pub fn set_attributes_value(&mut self, attributes: &Value) -> GridResult<&mut Self> {
		let updates = AttributeUpdates::from_value(attributes)?;
		self.attributes.replace(updates);
		Ok(self)
	}

	/// Returns one category when `category` names a known one, else everything
	pub fn attributes(&self, category: Option<&str>) -> AttributeSelection<'_> {
		match category.and_then(|name| name.parse::<AttributeCategory>().ok()) {
			Some(category) => AttributeSelection::Category(self.attributes.get(category)),
			None => AttributeSelection::All(&self.attributes),
		}
	}

	/// Returns the map of one category
	pub fn attributes_for(&self, category: AttributeCategory) -> &AttributeMap {
		self.attributes.get(category)
	}

	/// Returns every attribute category
	pub fn all_attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Looks up a single attribute
	pub fn attribute(&self, category: &str, key: &str) -> Option<&str> {
		let category = category.parse::<AttributeCategory>().ok()?;
		self.attributes.value(category, key)
	}

	/// Looks up a single attribute, falling back to `default`
	pub fn attribute_or<'a>(&'a self, category: &str, key: &str, default: &'a str) -> &'a str {
		self.attribute(category, key).unwrap_or(default)
	}

	/// Checks if an attribute is set
	pub fn has_attribute(&self, category: &str, key: &str) -> bool {
		category
			.parse::<AttributeCategory>()
			.is_ok_and(|category| self.attributes.contains(category, key))
	}

	/// Renders a category as an HTML attribute string
	pub fn render_attributes(&self, category: AttributeCategory) -> String {
		self.attributes.render(category)
	}

	/// Returns the custom template reference
	pub fn template(&self) -> Option<&str> {
		self.template.as_deref()
	}

	/// Sets the custom template reference
	pub fn set_template(&mut self, template: impl Into<String>) -> &mut Self {
		self.template = Some(template.into());
		self
	}

	/// Removes the custom template reference
	pub fn clear_template(&mut self) -> &mut Self {
		self.template = None;
		self
	}

	/// Returns whether the column can be sorted
	pub fn sortable(&self) -> bool {
		self.sortable
	}

	/// Sets whether the column can be sorted
	pub fn set_sortable(&mut self, sortable: bool) -> &mut Self {
		self.sortable = sortable;
		self
	}

	/// Returns the filter type tag
	pub fn filter_type(&self) -> &str {
		&self.filter_type
	}

	/// Sets the filter type tag; an empty tag disables filtering
	///
	/// Has no effect on a filter that was already resolved.
	pub fn set_filter_type(&mut self, filter_type: impl Into<String>) -> &mut Self {
		self.filter_type = filter_type.into();
		self
	}

	/// Returns the render type tag
	pub fn render_type(&self) -> &str {
		&self.render_type
	}

	/// Sets the render type tag; an empty tag disables rendering
	///
	/// Has no effect on a renderer that was already resolved.
	pub fn set_render_type(&mut self, render_type: impl Into<String>) -> &mut Self {
		self.render_type = render_type.into();
		self
	}

	/// Returns whether the column only appears in exports
	pub fn export_only(&self) -> bool {
		self.export_only
	}

	/// Sets whether the column only appears in exports
	pub fn set_export_only(&mut self, export_only: bool) -> &mut Self {
		self.export_only = export_only;
		self
	}

	/// Returns the filter strategy, resolving it on first call
	///
	/// Returns `Ok(None)` when the filter type is empty. The resolved filter
	/// receives this column's index and is returned by every later call.
	///
	/// # Errors
	///
	/// [`GridError::Resolution`] when the filter type cannot be resolved.
	pub fn filter(&self) -> GridResult<Option<Arc<dyn FilterStrategy>>> {
		if let Some(filter) = self.filter.get() {
			return Ok(Some(Arc::clone(filter)));
		}
		if self.filter_type.is_empty() {
			return Ok(None);
		}

		let filter = self.filter.get_or_try_init(|| {
			let mut filter = self.with_registry(|registry| {
				registry.create_filter(&self.filter_type, &self.container)
			})?;
			filter.set_index(&self.index);
			tracing::debug!(
				column = %self.name,
				filter_type = %self.filter_type,
				index = %self.index,
				"resolved grid filter"
			);
			Ok::<_, GridError>(Arc::from(filter))
		})?;
		Ok(Some(Arc::clone(filter)))
	}

	/// Renders the filter input, if the column has a filter
	pub fn render_filter(&self) -> GridResult<Option<String>> {
		Ok(self.filter()?.map(|filter| filter.render()))
	}

	/// Returns the render strategy, resolving it on first call
	///
	/// Returns `Ok(None)` when the render type is empty.
	///
	/// # Errors
	///
	/// [`GridError::Resolution`] when the render type cannot be resolved.
	pub fn render(&self) -> GridResult<Option<Arc<dyn RenderStrategy>>> {
		if let Some(render) = self.render.get() {
			return Ok(Some(Arc::clone(render)));
		}
		if self.render_type.is_empty() {
			return Ok(None);
		}

		let render = self.render.get_or_try_init(|| {
			let render = self.with_registry(|registry| {
				registry.create_render(&self.render_type, &self.container)
			})?;
			tracing::debug!(
				column = %self.name,
				render_type = %self.render_type,
				"resolved grid render"
			);
			Ok::<_, GridError>(Arc::from(render))
		})?;
		Ok(Some(Arc::clone(render)))
	}

	/// Renders a cell value, if the column has a renderer
	pub fn render_value(&self, value: &Value) -> GridResult<Option<String>> {
		Ok(self.render()?.map(|render| render.render(value)))
	}

	/// Returns true once the filter has been resolved
	pub fn is_filter_resolved(&self) -> bool {
		self.filter.get().is_some()
	}

	/// Returns true once the renderer has been resolved
	pub fn is_render_resolved(&self) -> bool {
		self.render.get().is_some()
	}

	// The container's registry takes precedence over the global one.
	fn with_registry<T>(&self, f: impl FnOnce(&StrategyRegistry) -> T) -> T {
		match self.container.get::<StrategyRegistry>() {
			Some(registry) => f(&registry),
			None => f(StrategyRegistry::global()),
		}
	}
}
