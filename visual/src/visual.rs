//! The visual: one update cycle per host refresh, plus the UI event handlers.
//!
//! Each `update` takes a fresh snapshot from the host, resolves settings once,
//! and rebuilds the grid from scratch. Handlers mutate settings or selection
//! and re-render from the last snapshot.

use gridview_config::{DisplayConfig, Settings};
use gridview_engine::{Grid, GridBuilder, Matrix};
use gridview_protocol::{DataView, HostError, VisualObjectInstance};

use crate::host::{PersistenceHost, SelectionHost, StyleContext};
use crate::selection_bridge::SelectionBridge;
use crate::settings_controller::SettingsController;
use crate::view::View;

pub struct Visual<P, S, C> {
    config: DisplayConfig,
    controller: SettingsController<P, C>,
    bridge: SelectionBridge<S>,
    /// Last matrix delivered by the host; `None` once cleared
    snapshot: Option<Matrix>,
    grid: Grid,
}

impl<P, S, C> Visual<P, S, C>
where
    P: PersistenceHost,
    S: SelectionHost,
    C: StyleContext,
{
    pub fn new(persistence: P, selection: S, style: C, config: DisplayConfig) -> Self {
        Self {
            config,
            controller: SettingsController::new(persistence, style),
            bridge: SelectionBridge::new(selection),
            snapshot: None,
            grid: Grid::default(),
        }
    }

    /// Host refresh. `None` (no data view) clears the output.
    pub fn update(&mut self, data_view: Option<&DataView>) -> Option<View> {
        let Some(data_view) = data_view else {
            log::debug!("No data view, clearing");
            self.clear();
            return None;
        };

        let settings = Settings::resolve(
            data_view.settings_property("theme"),
            data_view.settings_property("valueFormat"),
        );
        self.controller.reseed(settings);
        self.controller.apply_style();
        self.snapshot = Some(data_view.matrix_or_empty().into_owned());

        let view = self.render();
        log::debug!(
            "Rendered {} row(s) x {} column(s), theme={}, format={}",
            self.grid.row_count(),
            self.grid.column_count(),
            settings.theme,
            settings.value_format,
        );
        view
    }

    /// "Change Theme" button.
    pub fn on_theme_toggle(&mut self) -> Option<View> {
        self.controller.toggle_theme();
        self.render()
    }

    /// Format selector change; `key` is the selected option value.
    pub fn on_value_format_change(&mut self, key: &str) -> Option<View> {
        self.controller.set_value_format_key(key);
        self.render()
    }

    pub async fn on_row_click(&mut self, row: usize) -> Result<Option<View>, HostError> {
        self.bridge.select_row(&self.grid, row).await?;
        Ok(self.render())
    }

    pub async fn on_cell_click(&mut self, row: usize, col: usize) -> Result<Option<View>, HostError> {
        self.bridge.select_cell(&self.grid, row, col).await?;
        Ok(self.render())
    }

    /// Current settings for the host's property pane.
    pub fn enumerate_object_instances(&self) -> Vec<VisualObjectInstance> {
        self.controller.object_instances()
    }

    pub fn settings(&self) -> Settings {
        self.controller.settings()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn controller(&self) -> &SettingsController<P, C> {
        &self.controller
    }

    pub fn bridge(&self) -> &SelectionBridge<S> {
        &self.bridge
    }

    fn clear(&mut self) {
        self.snapshot = None;
        self.grid = Grid::default();
        self.bridge.clear();
    }

    fn render(&mut self) -> Option<View> {
        let matrix = self.snapshot.as_ref()?;
        let builder = GridBuilder::new(self.controller.value_format(), self.config.date_style());
        self.grid = builder.build(matrix);
        self.bridge.sync_with(&self.grid);

        Some(View::new(
            &self.config,
            self.controller.settings(),
            self.grid.clone(),
            self.bridge.state(),
        ))
    }
}
