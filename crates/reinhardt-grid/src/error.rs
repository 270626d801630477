//! Error types for grid column configuration.

use crate::strategy::StrategyKind;
use thiserror::Error;

/// Boxed error produced by a strategy factory.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while configuring a column or resolving its strategies.
#[derive(Debug, Error)]
pub enum GridError {
	/// Malformed column configuration (attributes or definitions).
	#[error("Validation error: {0}")]
	Validation(String),

	/// A filter or render type tag could not be resolved or instantiated.
	#[error("Grid {kind} type \"{type_tag}\" doesn't exist")]
	Resolution {
		/// Which strategy family was being resolved.
		kind: StrategyKind,
		/// The tag as configured on the column.
		type_tag: String,
		/// Failure reported by the factory, if it was found but failed.
		#[source]
		source: Option<BoxError>,
	},

	/// Settings or definition documents could not be parsed.
	#[error("Settings error: {0}")]
	Settings(String),
}

impl GridError {
	/// Creates a resolution error for a tag that has no registered factory.
	pub fn unresolved(kind: StrategyKind, type_tag: impl Into<String>) -> Self {
		Self::Resolution {
			kind,
			type_tag: type_tag.into(),
			source: None,
		}
	}

	/// Returns the offending type tag for resolution errors.
	pub fn type_tag(&self) -> Option<&str> {
		match self {
			Self::Resolution { type_tag, .. } => Some(type_tag),
			_ => None,
		}
	}
}

impl From<toml::de::Error> for GridError {
	fn from(err: toml::de::Error) -> Self {
		Self::Settings(err.to_string())
	}
}

/// Result type alias for grid operations.
pub type GridResult<T> = Result<T, GridError>;
