
use fixtures::{container, localized_container, scoped_container, status_column};
use reinhardt_grid::strategy::{DateRangeFilter, DateRender, InputFilter, SelectFilter, YesNoRender};
use reinhardt_grid::{
	AttributeCategory, Column, ColumnDefinition, Container, GridError, StrategyKind,
	StrategyRegistry,
};
use rstest::*;
use serde_json::json;
use std::sync::Arc;

#[rstest]
fn test_status_column_resolves_select(status_column: Column) {
	let filter = status_column.filter().unwrap().unwrap();

	assert!(filter.as_any().is::<SelectFilter>());
	assert_eq!(filter.index(), "status");
	assert_eq!(
		status_column.render_filter().unwrap().as_deref(),
		Some(r#"<select name="status" class="form-control"><option value=""></option></select>"#)
	);
}

#[rstest]
fn test_filter_returns_same_instance(status_column: Column) {
	let first = status_column.filter().unwrap().unwrap();
	let second = status_column.filter().unwrap().unwrap();
	assert!(Arc::ptr_eq(&first, &second));

	let render = status_column.render().unwrap().unwrap();
	assert!(Arc::ptr_eq(&render, &status_column.render().unwrap().unwrap()));
}

#[rstest]
fn test_date_range_filter_gets_index(container: Container) {
	let mut column = Column::with_name(container, "Created");
	column.set_index("u.created_at").set_filter_type("date_range");

	let filter = column.filter().unwrap().unwrap();
	assert!(filter.as_any().is::<DateRangeFilter>());
	assert_eq!(filter.index(), "u.created_at");
}

#[rstest]
fn test_spaced_tag_resolves_like_underscored(container: Container) {
	let mut column = Column::new(container);
	column.set_index("u.created_at").set_filter_type("date range");

	assert!(column.filter().unwrap().unwrap().as_any().is::<DateRangeFilter>());
}

#[rstest]
#[case(StrategyKind::Filter)]
#[case(StrategyKind::Render)]
fn test_unresolvable_tag(container: Container, #[case] kind: StrategyKind) {
	let mut column = Column::new(container);
	let err = match kind {
		StrategyKind::Filter => {
			column.set_filter_type("__nonexistent__");
			column.filter().unwrap_err()
		}
		StrategyKind::Render => {
			column.set_render_type("__nonexistent__");
			column.render().unwrap_err()
		}
	};

	assert!(matches!(err, GridError::Resolution { kind: k, .. } if k == kind));
	assert_eq!(err.type_tag(), Some("__nonexistent__"));
	assert!(err.to_string().contains("\"__nonexistent__\""));
}

#[rstest]
fn test_render_filter_propagates_errors(container: Container) {
	let mut column = Column::new(container);
	column.set_filter_type("slider");

	let err = column.render_filter().unwrap_err();
	assert_eq!(err.type_tag(), Some("slider"));
}

#[rstest]
fn test_fully_qualified_custom_filter(container: Container) {
	StrategyRegistry::global().register_filter("shop::grid::OrderState", |c| {
		Ok(Box::new(
			SelectFilter::new(c).with_options([("paid", "Paid"), ("shipped", "Shipped")]),
		))
	});

	let mut column = Column::with_name(container, "State");
	column
		.set_index("o.state")
		.set_filter_type("shop::grid::OrderState");

	let html = column.render_filter().unwrap().unwrap();
	assert!(html.starts_with(r#"<select name="o.state""#));
	assert!(html.contains(r#"<option value="shipped">Shipped</option>"#));
}

#[rstest]
fn test_conventional_custom_render(scoped_container: Container) {
	let registry = scoped_container.get::<StrategyRegistry>().unwrap();
	registry.register_render("reinhardt_grid::render::UpperText", |_| {
		Ok(Box::new(Shout))
	});

	let mut column = Column::new(scoped_container);
	column.set_render_type("upper_text");

	assert_eq!(
		column.render_value(&json!("late")).unwrap().as_deref(),
		Some("LATE")
	);
	assert!(!StrategyRegistry::global().has_render("reinhardt_grid::render::UpperText"));
}

#[derive(Debug)]
struct Shout;

impl reinhardt_grid::RenderStrategy for Shout {
	fn render(&self, value: &serde_json::Value) -> String {
		value.as_str().unwrap_or_default().to_uppercase()
	}

	fn as_any(&self) -> &dyn std::any::Any {
		self
	}
}

#[rstest]
fn test_strategies_receive_container(localized_container: Container) {
	let mut column = Column::with_name(localized_container, "Paid");
	column
		.set_index("paid")
		.set_filter_type("select")
		.set_render_type("yes_no");

	assert_eq!(
		column.render_filter().unwrap().as_deref(),
		Some(r#"<select name="paid" class="input"><option value="">Tous</option></select>"#)
	);
	assert!(column.render().unwrap().unwrap().as_any().is::<YesNoRender>());
	assert_eq!(column.render_value(&json!(false)).unwrap().as_deref(), Some("Non"));
}

#[rstest]
fn test_date_render_from_settings(localized_container: Container) {
	let mut column = Column::new(localized_container);
	column.set_render_type("date");

	assert!(column.render().unwrap().unwrap().as_any().is::<DateRender>());
	assert_eq!(
		column.render_value(&json!("2024-02-20")).unwrap().as_deref(),
		Some("20/02/2024")
	);
}

#[rstest]
fn test_set_attributes_replaces_given_categories(container: Container) {
	let mut column = Column::new(container);
	column
		.set_attributes([
			("row", vec![("class", "striped"), ("data-id", "7")]),
			("cell", vec![("class", "num")]),
		])
		.unwrap();

	column.set_attributes([("row", vec![("class", "active")])]).unwrap();

	assert_eq!(column.attribute("row", "class"), Some("active"));
	assert!(!column.has_attribute("row", "data-id"));
	assert_eq!(column.attribute("cell", "class"), Some("num"));
	assert!(column.attributes_for(AttributeCategory::Col).is_empty());
}

#[rstest]
fn test_has_attribute_before_and_after(container: Container) {
	let mut column = Column::new(container);
	assert!(!column.has_attribute("row", "class"));

	column.set_attributes_value(&json!({"row": {"class": "x"}})).unwrap();
	assert!(column.has_attribute("row", "class"));
}

#[rstest]
#[case(json!({"footer": {"class": "x"}}))]
#[case(json!({"row": "x"}))]
#[case(json!(["row"]))]
fn test_set_attributes_value_validation(container: Container, #[case] input: serde_json::Value) {
	let mut column = Column::new(container);
	let err = column.set_attributes_value(&input).unwrap_err();
	assert!(matches!(err, GridError::Validation(_)));
	assert_eq!(column.all_attributes(), &reinhardt_grid::Attributes::new());
}

#[rstest]
fn test_render_attributes_for_templates(container: Container) {
	let mut column = Column::new(container);
	column
		.set_attributes_value(&json!({"heading": {"class": "sortable", "data-index": "u.name"}}))
		.unwrap();

	assert_eq!(
		column.render_attributes(AttributeCategory::Heading),
		r#" class="sortable" data-index="u.name""#
	);
}

#[rstest]
fn test_columns_from_toml(container: Container) {
	let definitions = ColumnDefinition::list_from_toml_str(
		r#"
		[[columns]]
		name = "Name"
		index = "u.name"

		[[columns]]
		name = "Active"
		index = "u.active"
		filter_type = "select"
		render_type = "yes_no"

		[[columns]]
		name = "Internal id"
		field = "internal_id"
		filter_type = ""
		export_only = true
		"#,
	)
	.unwrap();

	let columns = definitions
		.into_iter()
		.map(|definition| Column::from_definition(container.clone(), definition))
		.collect::<Result<Vec<_>, _>>()
		.unwrap();

	assert_eq!(columns.len(), 3);
	assert!(columns[0].filter().unwrap().unwrap().as_any().is::<InputFilter>());
	assert_eq!(
		columns[1].render_value(&json!(1)).unwrap().as_deref(),
		Some("Yes")
	);
	assert!(columns[2].export_only());
	assert!(columns[2].render_filter().unwrap().is_none());
	assert_eq!(columns[2].field(), "internal_id");
	assert!(columns.iter().all(|c| c.container().ptr_eq(&container)));
}

#[rstest]
fn test_concurrent_first_access_resolves_once(status_column: Column) {
	let column = Arc::new(status_column);

	let filters: Vec<_> = std::thread::scope(|scope| {
		let handles: Vec<_> = (0..8)
			.map(|_| {
				let column = Arc::clone(&column);
				scope.spawn(move || column.filter().unwrap().unwrap())
			})
			.collect();
		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});

	assert!(filters.iter().all(|f| Arc::ptr_eq(f, &filters[0])));

	let shared = &column;
	let fields: Vec<String> = std::thread::scope(|scope| {
		let handles: Vec<_> = (0..4)
			.map(|_| scope.spawn(move || shared.field().to_string()))
			.collect();
		handles.into_iter().map(|h| h.join().unwrap()).collect()
	});
	assert!(fields.iter().all(|f| f == &fields[0]));
}
