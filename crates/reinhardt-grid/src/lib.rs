//! Grid column configuration for Reinhardt
//!
//! This crate provides the column model of data grids: display metadata,
//! per-category HTML attributes, and pluggable filter/render strategies
//! resolved from short type tags.
//!
//! # Features
//!
//! - **Column**: Name, data field, index key, template reference, sortable and
//!   export-only flags
//! - **Attributes**: `col`, `heading`, `row` and `cell` attribute groups with
//!   validation
//! - **Strategies**: Filters (`text`, `number`, `select`, `date`, `date_range`)
//!   and renderers (`text`, `date`, `date_time`, `yes_no`, `html`)
//! - **Registry**: Tag to factory resolution, extensible per application
//! - **Definitions**: Columns declared in TOML or JSON
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Column] --> B[Attributes]
//!     A --> C[Filter cache]
//!     A --> D[Render cache]
//!     C --> E[StrategyRegistry]
//!     D --> E
//!     E --> F[Factories]
//!     F --> G[Container]
//!     G --> H[GridSettings]
//! ```
//!
//! # Example
//!
//! ```rust
//! use reinhardt_grid::{Column, Container};
//! use serde_json::json;
//!
//! let mut column = Column::with_name(Container::new(), "Active");
//! column.set_index("u.active").set_render_type("yes_no");
//! column.set_attributes([("cell", [("class", "text-center")])]).unwrap();
//!
//! assert_eq!(column.render_value(&json!(true)).unwrap().as_deref(), Some("Yes"));
//! assert_eq!(
//!     column.render_filter().unwrap().as_deref(),
//!     Some(r#"<input type="text" name="u.active" class="form-control" />"#)
//! );
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod attributes;
pub mod column;
pub mod container;
pub mod definition;
pub mod error;
pub mod html;
pub mod registry;
pub mod settings;
pub mod strategy;

// Re-exports for convenience
pub use attributes::{AttributeCategory, AttributeMap, AttributeSelection, Attributes};
pub use column::Column;
pub use container::Container;
pub use definition::ColumnDefinition;
pub use error::{GridError, GridResult};
pub use registry::StrategyRegistry;
pub use settings::GridSettings;
pub use strategy::{FilterStrategy, RenderStrategy, StrategyKind};
