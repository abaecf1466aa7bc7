//! Declarative description of one render pass.
//!
//! The rendering surface owns layout; the visual only says what to show:
//! a heading, the theme toggle, the format selector, and the table.

use serde::Serialize;

use gridview_config::{DisplayConfig, Settings, Theme, ThemeColors};
use gridview_core::{GridPosition, SelectionState};
use gridview_engine::{Grid, FORMAT_OPTIONS};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub title: String,
    pub theme: Theme,
    /// Class applied to the visual's root element
    pub root_class: &'static str,
    pub palette: ThemeColors,
    pub controls: Controls,
    pub table: Table,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Controls {
    pub theme_toggle: ThemeToggle,
    pub value_format: FormatSelect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeToggle {
    pub label: String,
    pub current: Theme,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormatSelect {
    pub selected: &'static str,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    /// Header of the row-label column
    pub corner_label: String,
    pub grid: Grid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<GridPosition>,
}

impl View {
    pub fn new(
        config: &DisplayConfig,
        settings: Settings,
        grid: Grid,
        selection: &SelectionState,
    ) -> Self {
        let options = FORMAT_OPTIONS
            .iter()
            .map(|option| SelectOption { value: option.key(), label: option.label })
            .collect();

        View {
            title: config.title.clone(),
            theme: settings.theme,
            root_class: settings.theme.key(),
            palette: config.palette(settings.theme),
            controls: Controls {
                theme_toggle: ThemeToggle {
                    label: config.theme_toggle_label.clone(),
                    current: settings.theme,
                },
                value_format: FormatSelect {
                    selected: settings.value_format.key(),
                    options,
                },
            },
            table: Table {
                corner_label: config.category_label.clone(),
                grid,
                highlight: selection.selected(),
            },
        }
    }

    /// Header row as displayed: corner label, then one label per column.
    pub fn header_labels(&self) -> Vec<&str> {
        let mut labels = vec![self.table.corner_label.as_str()];
        labels.extend(self.table.grid.columns.iter().map(|c| c.label.as_str()));
        labels
    }
}
