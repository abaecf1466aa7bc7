//! End-to-end update cycles against recording host fakes.

use std::path::PathBuf;

use gridview_config::{DisplayConfig, Theme};
use gridview_core::{GridPosition, RowPath, SelectionId};
use gridview_engine::ValueFormat;
use gridview_protocol::{DataView, HostError, PersistRequest};
use gridview_visual::{NoPersistence, PersistenceHost, SelectionHost, StyleContext, Visual};
use serde_json::json;

// -------------------------------------------------------------------------
// Fakes
// -------------------------------------------------------------------------

#[derive(Default)]
struct RecordingPersistence {
    requests: Vec<PersistRequest>,
}

impl PersistenceHost for RecordingPersistence {
    fn persist_properties(&mut self, request: PersistRequest) -> Result<(), HostError> {
        self.requests.push(request);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingSelection {
    calls: Vec<(SelectionId, bool)>,
    fail: bool,
}

impl SelectionHost for RecordingSelection {
    fn create_selection_id(&self, path: &RowPath) -> SelectionId {
        SelectionId::new(format!("{:?}", path.indices()))
    }

    async fn select(
        &mut self,
        id: &SelectionId,
        multi_select: bool,
    ) -> Result<Vec<SelectionId>, HostError> {
        if self.fail {
            return Err(HostError::Disconnected);
        }
        self.calls.push((id.clone(), multi_select));
        Ok(vec![id.clone()])
    }
}

#[derive(Default)]
struct RootClass {
    class: Option<&'static str>,
}

impl StyleContext for RootClass {
    fn apply_theme(&mut self, theme: Theme) {
        self.class = Some(theme.key());
    }
}

type TestVisual = Visual<RecordingPersistence, RecordingSelection, RootClass>;

fn visual() -> TestVisual {
    Visual::new(
        RecordingPersistence::default(),
        RecordingSelection::default(),
        RootClass::default(),
        DisplayConfig::default(),
    )
}

fn fixture(name: &str) -> DataView {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&contents).unwrap()
}

// -------------------------------------------------------------------------
// Update cycle
// -------------------------------------------------------------------------

#[test]
fn update_renders_fixture_with_persisted_settings() {
    let mut visual = visual();
    let view = visual.update(Some(&fixture("sales_matrix.json"))).unwrap();

    assert_eq!(view.theme, Theme::Dark);
    assert_eq!(view.root_class, "dark");
    assert_eq!(view.controls.value_format.selected, "thousand");
    assert_eq!(view.header_labels(), vec!["Category", "2022", "2023"]);
    for column in &view.table.grid.columns {
        assert_eq!(column.span_label, Some("In Thousand"));
    }

    let grid = &view.table.grid;
    assert_eq!(grid.display_row(0).unwrap(), vec!["Sales", "1.00K", "2.00K"]);
    assert_eq!(grid.display_row(1).unwrap(), vec!["Returns", "-0.25K", ""]);
    assert_eq!(grid.display_row(2).unwrap(), vec!["Launch", "3/1/2023", ""]);
    // Plain strings are text even when they look like dates
    assert_eq!(grid.display_row(3).unwrap(), vec!["Go-live", "2023-03-01", "pending"]);

    // Seeding applies the style but never persists
    assert_eq!(visual.controller().style_context().class, Some("dark"));
    assert!(visual.controller().persistence().requests.is_empty());
}

#[test]
fn update_without_settings_uses_defaults() {
    let mut visual = visual();
    let view = visual.update(Some(&fixture("header_only.json"))).unwrap();

    assert_eq!(view.theme, Theme::Light);
    assert_eq!(view.controls.value_format.selected, "default");
    assert_eq!(view.table.grid.column_count(), 2);
    assert_eq!(view.table.grid.row_count(), 0);
    assert!(view.table.grid.columns.iter().all(|c| c.span_label.is_none()));
}

#[test]
fn update_without_matrix_renders_empty_table() {
    let mut visual = visual();
    let data_view: DataView = serde_json::from_value(json!({"metadata": {}})).unwrap();
    let view = visual.update(Some(&data_view)).unwrap();

    assert!(view.table.grid.is_empty());
    assert_eq!(view.header_labels(), vec!["Category"]);
}

#[test]
fn missing_data_view_clears_output() {
    let mut visual = visual();
    visual.update(Some(&fixture("sales_matrix.json"))).unwrap();

    assert!(visual.update(None).is_none());
    assert!(visual.grid().is_empty());
    // Handlers have nothing to re-render until the next snapshot
    assert!(visual.on_value_format_change("million").is_none());
}

#[test]
fn each_update_reseeds_settings() {
    let mut visual = visual();
    visual.update(Some(&fixture("sales_matrix.json"))).unwrap();
    visual.on_theme_toggle().unwrap();
    assert_eq!(visual.settings().theme, Theme::Light);

    // Host snapshot still says dark: the next cycle wins
    visual.update(Some(&fixture("sales_matrix.json"))).unwrap();
    assert_eq!(visual.settings().theme, Theme::Dark);
}

// -------------------------------------------------------------------------
// Handlers
// -------------------------------------------------------------------------

#[test]
fn theme_toggle_persists_and_styles() {
    let mut visual = visual();
    visual.update(Some(&fixture("header_only.json"))).unwrap();
    let view = visual.on_theme_toggle().unwrap();

    assert_eq!(view.theme, Theme::Dark);
    assert_eq!(visual.settings().theme, Theme::Dark);
    let requests = &visual.controller().persistence().requests;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0], PersistRequest::merge_settings("theme", "dark"));
    assert_eq!(visual.controller().style_context().class, Some("dark"));
}

#[test]
fn value_format_change_rerenders_grid() {
    let mut visual = visual();
    visual.update(Some(&fixture("sales_matrix.json"))).unwrap();
    let view = visual.on_value_format_change("million").unwrap();

    assert_eq!(view.controls.value_format.selected, "million");
    assert_eq!(view.table.grid.cell(0, 1), Some("0.00M"));
    assert_eq!(view.table.grid.columns[0].span_label, Some("In Million"));

    let view = visual.on_value_format_change("default").unwrap();
    assert_eq!(view.table.grid.display_row(0).unwrap(), vec!["Sales", "1000", "2000"]);
    assert_eq!(visual.settings().value_format, ValueFormat::Default);

    let requests = &visual.controller().persistence().requests;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].settings_property("valueFormat"), Some(&json!("million")));
}

#[test]
fn enumerate_reports_current_settings() {
    let mut visual = visual();
    visual.update(Some(&fixture("sales_matrix.json"))).unwrap();
    visual.on_value_format_change("billion");

    let instances = visual.enumerate_object_instances();
    assert_eq!(
        serde_json::to_value(&instances).unwrap(),
        json!([{
            "objectName": "settings",
            "properties": {"theme": "dark", "valueFormat": "billion"},
            "selector": null
        }])
    );
}

// -------------------------------------------------------------------------
// Selection
// -------------------------------------------------------------------------

#[test]
fn row_click_selects_through_host() {
    let mut visual = visual();
    visual.update(Some(&fixture("sales_matrix.json"))).unwrap();

    let view = smol::block_on(visual.on_row_click(1)).unwrap().unwrap();
    assert_eq!(view.table.highlight, Some(GridPosition::row(1)));
    assert_eq!(visual.bridge().host().calls, vec![(SelectionId::new("[1]"), true)]);
}

#[test]
fn cell_click_highlights_cell() {
    let mut visual = visual();
    visual.update(Some(&fixture("sales_matrix.json"))).unwrap();

    let view = smol::block_on(visual.on_cell_click(0, 1)).unwrap().unwrap();
    assert_eq!(view.table.highlight, Some(GridPosition::cell(0, 1)));
}

#[test]
fn selection_failure_propagates() {
    let mut visual = Visual::new(
        NoPersistence,
        RecordingSelection { fail: true, ..Default::default() },
        RootClass::default(),
        DisplayConfig::default(),
    );
    visual.update(Some(&fixture("sales_matrix.json"))).unwrap();

    let err = smol::block_on(visual.on_row_click(0)).unwrap_err();
    assert_eq!(err, HostError::Disconnected);
    assert_eq!(visual.bridge().state().selected(), None);
}

#[test]
fn highlight_survives_format_change_but_not_shrinking_snapshot() {
    let mut visual = visual();
    visual.update(Some(&fixture("sales_matrix.json"))).unwrap();
    smol::block_on(visual.on_row_click(2)).unwrap();

    let view = visual.on_value_format_change("billion").unwrap();
    assert_eq!(view.table.highlight, Some(GridPosition::row(2)));

    let view = visual.update(Some(&fixture("header_only.json"))).unwrap();
    assert_eq!(view.table.highlight, None);
}

#[test]
fn display_config_drives_labels_and_dates() {
    let config = DisplayConfig::from_toml(
        r#"
title = "Revenue"
category_label = "Line item"
date_format = "%Y-%m-%d"
"#,
    )
    .unwrap();
    let mut visual = Visual::new(
        RecordingPersistence::default(),
        RecordingSelection::default(),
        RootClass::default(),
        config,
    );
    let view = visual.update(Some(&fixture("sales_matrix.json"))).unwrap();

    assert_eq!(view.title, "Revenue");
    assert_eq!(view.header_labels()[0], "Line item");
    assert_eq!(view.table.grid.cell(2, 0), Some("2023-03-01"));
    assert_eq!(view.table.grid.cell(3, 0), Some("2023-03-01"));
}
