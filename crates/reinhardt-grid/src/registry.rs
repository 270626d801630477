//! Strategy registry for type-tag resolution.
//!
//! Columns name their strategies with short tags such as `text` or
//! `date_range`. The registry maps type names to factories:
//!
//! 1. A tag that is registered verbatim is used as-is. This is how
//!    fully-qualified custom strategies are addressed.
//! 2. Otherwise the tag is normalised (`date_range` becomes `DateRange`) and
//!    qualified under the namespace of its [`StrategyKind`], giving
//!    `reinhardt_grid::filter::DateRange`.
//!
//! A process-wide registry holding the built-in strategies is available via
//! [`StrategyRegistry::global`]. Applications may register their own registry
//! in the [`Container`]; columns consult it before the global one.

use crate::container::Container;
use crate::error::{GridError, GridResult};
use crate::strategy::{
	DateRangeFilter, DateRender, FilterStrategy, HtmlRender, InputFilter, RenderStrategy,
	SelectFilter, StrategyKind, TextRender, YesNoRender,
};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Factory building a filter strategy from the container.
pub type FilterFactory =
	Arc<dyn Fn(&Container) -> GridResult<Box<dyn FilterStrategy>> + Send + Sync>;

/// Factory building a render strategy from the container.
pub type RenderFactory =
	Arc<dyn Fn(&Container) -> GridResult<Box<dyn RenderStrategy>> + Send + Sync>;

static GLOBAL_REGISTRY: Lazy<StrategyRegistry> = Lazy::new(StrategyRegistry::with_builtins);

/// Converts a short tag into its conventional type name.
///
/// The tag is split on `_` and whitespace, each segment is lowercased and
/// capitalised, and the segments are joined without separator.
///
/// # Examples
///
/// ```
/// use reinhardt_grid::registry::normalize_type_name;
///
/// assert_eq!(normalize_type_name("text"), "Text");
/// assert_eq!(normalize_type_name("date_range"), "DateRange");
/// assert_eq!(normalize_type_name("YES_NO"), "YesNo");
/// assert_eq!(normalize_type_name("date range"), "DateRange");
/// ```
pub fn normalize_type_name(tag: &str) -> String {
	tag.split(|c: char| c == '_' || c.is_whitespace())
		.map(|segment| {
			let lower = segment.to_lowercase();
			let mut chars = lower.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
				None => String::new(),
			}
		})
		.collect()
}

/// Derives the fully-qualified type name of a short tag.
///
/// # Examples
///
/// ```
/// use reinhardt_grid::registry::qualified_type_name;
/// use reinhardt_grid::strategy::StrategyKind;
///
/// assert_eq!(
///     qualified_type_name(StrategyKind::Filter, "date_range"),
///     "reinhardt_grid::filter::DateRange"
/// );
/// ```
pub fn qualified_type_name(kind: StrategyKind, tag: &str) -> String {
	format!("{}::{}", kind.namespace(), normalize_type_name(tag))
}

/// Thread-safe mapping of type names to strategy factories.
#[derive(Default)]
pub struct StrategyRegistry {
	filters: RwLock<HashMap<String, FilterFactory>>,
	renders: RwLock<HashMap<String, RenderFactory>>,
}

impl StrategyRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry holding the built-in strategies.
	///
	/// Filters: `Text`, `Number`, `Select`, `Date`, `DateRange`.
	/// Renders: `Text`, `Date`, `DateTime`, `YesNo`, `Html`.
	pub fn with_builtins() -> Self {
		let registry = Self::new();

		let filter = |tag: &str| qualified_type_name(StrategyKind::Filter, tag);
		registry.register_filter(filter("text"), |c| Ok(Box::new(InputFilter::text(c))));
		registry.register_filter(filter("number"), |c| Ok(Box::new(InputFilter::number(c))));
		registry.register_filter(filter("date"), |c| Ok(Box::new(InputFilter::date(c))));
		registry.register_filter(filter("select"), |c| Ok(Box::new(SelectFilter::new(c))));
		registry.register_filter(filter("date_range"), |c| {
			Ok(Box::new(DateRangeFilter::new(c)))
		});

		let render = |tag: &str| qualified_type_name(StrategyKind::Render, tag);
		registry.register_render(render("text"), |c| Ok(Box::new(TextRender::new(c))));
		registry.register_render(render("date"), |c| Ok(Box::new(DateRender::date(c))));
		registry.register_render(render("date_time"), |c| {
			Ok(Box::new(DateRender::date_time(c)))
		});
		registry.register_render(render("yes_no"), |c| Ok(Box::new(YesNoRender::new(c))));
		registry.register_render(render("html"), |c| Ok(Box::new(HtmlRender::new(c))));

		registry
	}

	/// Returns the process-wide registry.
	///
	/// It is initialised with the built-in strategies on first use.
	pub fn global() -> &'static StrategyRegistry {
		&GLOBAL_REGISTRY
	}

	/// Registers a filter factory under `name`, replacing any previous one.
	///
	/// # Example
	///
	/// ```rust
	/// use reinhardt_grid::registry::StrategyRegistry;
	/// use reinhardt_grid::strategy::SelectFilter;
	///
	/// let registry = StrategyRegistry::new();
	/// registry.register_filter("reinhardt_grid::filter::Status", |c| {
	///     Ok(Box::new(SelectFilter::new(c).with_options([("open", "Open")])))
	/// });
	/// assert!(registry.has_filter("reinhardt_grid::filter::Status"));
	/// ```
	pub fn register_filter<F>(&self, name: impl Into<String>, factory: F)
	where
		F: Fn(&Container) -> GridResult<Box<dyn FilterStrategy>> + Send + Sync + 'static,
	{
		self.filters.write().insert(name.into(), Arc::new(factory));
	}

	/// Registers a render factory under `name`, replacing any previous one.
	pub fn register_render<F>(&self, name: impl Into<String>, factory: F)
	where
		F: Fn(&Container) -> GridResult<Box<dyn RenderStrategy>> + Send + Sync + 'static,
	{
		self.renders.write().insert(name.into(), Arc::new(factory));
	}

	/// Checks if a filter is registered under exactly `name`.
	pub fn has_filter(&self, name: &str) -> bool {
		self.filters.read().contains_key(name)
	}

	/// Checks if a render is registered under exactly `name`.
	pub fn has_render(&self, name: &str) -> bool {
		self.renders.read().contains_key(name)
	}

	/// Returns all registered filter names, sorted.
	pub fn filter_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.filters.read().keys().cloned().collect();
		names.sort();
		names
	}

	/// Returns all registered render names, sorted.
	pub fn render_names(&self) -> Vec<String> {
		let mut names: Vec<String> = self.renders.read().keys().cloned().collect();
		names.sort();
		names
	}

	/// Resolves a tag to the registered type name it designates.
	pub fn resolve_name(&self, kind: StrategyKind, tag: &str) -> Option<String> {
		let registered = |name: &str| match kind {
			StrategyKind::Filter => self.has_filter(name),
			StrategyKind::Render => self.has_render(name),
		};

		if registered(tag) {
			return Some(tag.to_string());
		}
		let qualified = qualified_type_name(kind, tag);
		registered(&qualified).then_some(qualified)
	}

	/// Builds the filter designated by `tag`.
	pub fn create_filter(
		&self,
		tag: &str,
		container: &Container,
	) -> GridResult<Box<dyn FilterStrategy>> {
		let factory = self
			.resolve_name(StrategyKind::Filter, tag)
			.and_then(|name| self.filters.read().get(&name).cloned());
		Self::build(StrategyKind::Filter, tag, factory, container)
	}

	/// Builds the renderer designated by `tag`.
	pub fn create_render(
		&self,
		tag: &str,
		container: &Container,
	) -> GridResult<Box<dyn RenderStrategy>> {
		let factory = self
			.resolve_name(StrategyKind::Render, tag)
			.and_then(|name| self.renders.read().get(&name).cloned());
		Self::build(StrategyKind::Render, tag, factory, container)
	}

	// Factories run outside the lock so they may use the registry themselves.
	fn build<S: ?Sized>(
		kind: StrategyKind,
		tag: &str,
		factory: Option<Arc<dyn Fn(&Container) -> GridResult<Box<S>> + Send + Sync>>,
		container: &Container,
	) -> GridResult<Box<S>> {
		let Some(factory) = factory else {
			tracing::warn!(%kind, tag, "grid strategy type is not registered");
			return Err(GridError::unresolved(kind, tag));
		};

		factory(container).map_err(|err| {
			tracing::warn!(%kind, tag, error = %err, "grid strategy factory failed");
			GridError::Resolution {
				kind,
				type_tag: tag.to_string(),
				source: Some(Box::new(err)),
			}
		})
	}
}

impl fmt::Debug for StrategyRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("StrategyRegistry")
			.field("filters", &self.filter_names())
			.field("renders", &self.render_names())
			.finish()
	}
}
