//! Built-in render strategies

use super::RenderStrategy;
use crate::container::Container;
use crate::html::escape;
use crate::settings::GridSettings;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::any::Any;
use std::fmt::Write;
use std::sync::Arc;

/// Textual form of a cell value; `None` for null.
fn plain_text(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(s) => Some(s.clone()),
		other => Some(other.to_string()),
	}
}

/// Escaped text renderer, registered as `Text`
#[derive(Debug, Clone, Default)]
pub struct TextRender;

impl TextRender {
	/// Creates a text renderer
	pub fn new(_container: &Container) -> Self {
		Self
	}
}

impl RenderStrategy for TextRender {
	fn render(&self, value: &Value) -> String {
		plain_text(value).map(|s| escape(&s)).unwrap_or_default()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Raw markup renderer, registered as `Html`
///
/// The value is emitted as-is and must come from a trusted source.
#[derive(Debug, Clone, Default)]
pub struct HtmlRender;

impl HtmlRender {
	/// Creates a raw markup renderer
	pub fn new(_container: &Container) -> Self {
		Self
	}
}

impl RenderStrategy for HtmlRender {
	fn render(&self, value: &Value) -> String {
		plain_text(value).unwrap_or_default()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Date and date-time renderer, registered as `Date` and `DateTime`
///
/// Accepts RFC 3339 strings, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD` and Unix
/// timestamps. Anything else is rendered as escaped text.
#[derive(Debug, Clone)]
pub struct DateRender {
	format: String,
}

impl DateRender {
	/// Creates a renderer using the configured date format
	pub fn date(container: &Container) -> Self {
		Self {
			format: GridSettings::from_container(container).date_format.clone(),
		}
	}

	/// Creates a renderer using the configured date-time format
	pub fn date_time(container: &Container) -> Self {
		Self {
			format: GridSettings::from_container(container).date_time_format.clone(),
		}
	}

	/// Returns the `strftime` format in use
	pub fn format(&self) -> &str {
		&self.format
	}

	fn parse(value: &Value) -> Option<NaiveDateTime> {
		match value {
			Value::Number(n) => n
				.as_i64()
				.and_then(|secs| DateTime::from_timestamp(secs, 0))
				.map(|dt| dt.naive_utc()),
			Value::String(s) => DateTime::parse_from_rfc3339(s)
				.map(|dt| dt.naive_local())
				.or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
				.ok()
				.or_else(|| {
					NaiveDate::parse_from_str(s, "%Y-%m-%d")
						.ok()
						.and_then(|date| date.and_hms_opt(0, 0, 0))
				}),
			_ => None,
		}
	}
}

impl RenderStrategy for DateRender {
	fn render(&self, value: &Value) -> String {
		if let Some(datetime) = Self::parse(value) {
			let mut formatted = String::new();
			// Invalid format strings surface as fmt errors, not panics
			if write!(formatted, "{}", datetime.format(&self.format)).is_ok() {
				return escape(&formatted);
			}
			tracing::warn!(format = %self.format, "invalid date format in grid settings");
		}
		plain_text(value).map(|s| escape(&s)).unwrap_or_default()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// Boolean renderer, registered as `YesNo`
#[derive(Debug, Clone)]
pub struct YesNoRender {
	settings: Arc<GridSettings>,
}

impl YesNoRender {
	/// Creates a yes/no renderer using the configured labels
	pub fn new(container: &Container) -> Self {
		Self {
			settings: GridSettings::from_container(container),
		}
	}

	fn truth(value: &Value) -> Option<bool> {
		match value {
			Value::Bool(b) => Some(*b),
			Value::Number(n) => match n.as_i64() {
				Some(0) => Some(false),
				Some(1) => Some(true),
				_ => None,
			},
			Value::String(s) => match s.as_str() {
				"1" | "true" => Some(true),
				"0" | "false" => Some(false),
				_ => None,
			},
			_ => None,
		}
	}
}

impl RenderStrategy for YesNoRender {
	fn render(&self, value: &Value) -> String {
		match Self::truth(value) {
			Some(true) => escape(&self.settings.yes_label),
			Some(false) => escape(&self.settings.no_label),
			None => plain_text(value).map(|s| escape(&s)).unwrap_or_default(),
		}
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
