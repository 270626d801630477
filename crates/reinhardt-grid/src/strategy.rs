//! Filter and render strategies
//!
//! A column delegates two concerns to pluggable objects:
//!
//! - [`FilterStrategy`]: renders the filter input shown above the column
//! - [`RenderStrategy`]: renders a single cell value
//!
//! Strategies are built by factories registered in a
//! [`StrategyRegistry`](crate::registry::StrategyRegistry). Each factory
//! receives the shared [`Container`](crate::Container) and nothing else.

pub mod filter;
pub mod render;

use serde_json::Value;
use std::any::Any;
use std::fmt;

pub use filter::{DateRangeFilter, InputFilter, SelectFilter};
pub use render::{DateRender, HtmlRender, TextRender, YesNoRender};

/// Strategy families a column resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
	/// Filter input strategies
	Filter,
	/// Cell render strategies
	Render,
}

impl StrategyKind {
	/// Namespace conventional type names are qualified under.
	pub fn namespace(&self) -> &'static str {
		match self {
			Self::Filter => "reinhardt_grid::filter",
			Self::Render => "reinhardt_grid::render",
		}
	}
}

impl fmt::Display for StrategyKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Filter => f.write_str("filter"),
			Self::Render => f.write_str("render"),
		}
	}
}

/// Produces the filter input fragment of a column.
pub trait FilterStrategy: fmt::Debug + Send + Sync {
	/// Sets the data source key the filter applies to.
	fn set_index(&mut self, index: &str);

	/// Returns the data source key the filter applies to.
	fn index(&self) -> &str;

	/// Renders the filter input as HTML.
	fn render(&self) -> String;

	/// Returns the strategy as `Any` for downcasting.
	fn as_any(&self) -> &dyn Any;
}

/// Produces the display fragment of a cell value.
pub trait RenderStrategy: fmt::Debug + Send + Sync {
	/// Renders `value` as HTML.
	fn render(&self, value: &Value) -> String;

	/// Returns the strategy as `Any` for downcasting.
	fn as_any(&self) -> &dyn Any;
}
