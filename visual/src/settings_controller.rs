//! Settings state for one visual instance.
//!
//! Seeded once per refresh cycle from the host snapshot, then mutated only by
//! the theme and value-format handlers. Every change is written back to the
//! host immediately; persistence failures are logged and dropped, the local
//! state keeps the change.

use std::collections::BTreeMap;

use serde_json::Value;

use gridview_config::{Settings, Theme};
use gridview_engine::ValueFormat;
use gridview_protocol::{PersistRequest, VisualObjectInstance};

use crate::host::{PersistenceHost, StyleContext};

pub struct SettingsController<P, C> {
    settings: Settings,
    persistence: P,
    style: C,
}

impl<P: PersistenceHost, C: StyleContext> SettingsController<P, C> {
    pub fn new(persistence: P, style: C) -> Self {
        Self {
            settings: Settings::default(),
            persistence,
            style,
        }
    }

    /// Replace the state with a freshly resolved snapshot. Nothing is persisted.
    pub fn reseed(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    pub fn value_format(&self) -> ValueFormat {
        self.settings.value_format
    }

    /// Push the current theme to the style context without persisting.
    pub fn apply_style(&mut self) {
        self.style.apply_theme(self.settings.theme);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
        self.persist("theme", theme.key());
        self.style.apply_theme(theme);
    }

    /// Flip light/dark and return the new theme.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.settings.theme.toggled();
        self.set_theme(theme);
        theme
    }

    pub fn set_value_format(&mut self, format: ValueFormat) {
        self.settings.value_format = format;
        self.persist("valueFormat", format.key());
    }

    /// Entry point for the format selector. Unknown keys select `Default`.
    pub fn set_value_format_key(&mut self, key: &str) -> ValueFormat {
        let format = ValueFormat::from_key(key);
        self.set_value_format(format);
        format
    }

    /// Current settings as the host's `settings` object instance.
    pub fn object_instances(&self) -> Vec<VisualObjectInstance> {
        let mut properties = BTreeMap::new();
        properties.insert("theme".to_string(), Value::from(self.settings.theme.key()));
        properties.insert(
            "valueFormat".to_string(),
            Value::from(self.settings.value_format.key()),
        );
        vec![VisualObjectInstance::settings(properties)]
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn style_context(&self) -> &C {
        &self.style
    }

    fn persist(&mut self, key: &str, value: &str) {
        let request = PersistRequest::merge_settings(key, value);
        if let Err(e) = self.persistence.persist_properties(request) {
            log::warn!("Failed to persist {}={}: {}", key, value, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NoStyleContext;
    use gridview_protocol::HostError;
    use serde_json::json;

    #[derive(Default)]
    struct RecordingPersistence {
        requests: Vec<PersistRequest>,
        fail: bool,
    }

    impl PersistenceHost for RecordingPersistence {
        fn persist_properties(&mut self, request: PersistRequest) -> Result<(), HostError> {
            self.requests.push(request);
            if self.fail {
                Err(HostError::Persistence("rejected".into()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct RecordingStyle {
        applied: Vec<Theme>,
    }

    impl StyleContext for RecordingStyle {
        fn apply_theme(&mut self, theme: Theme) {
            self.applied.push(theme);
        }
    }

    #[test]
    fn test_set_theme_persists_once_and_styles() {
        let mut controller =
            SettingsController::new(RecordingPersistence::default(), RecordingStyle::default());
        controller.set_theme(Theme::Dark);

        assert_eq!(controller.settings().theme, Theme::Dark);
        let requests = &controller.persistence().requests;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0], PersistRequest::merge_settings("theme", "dark"));
        assert_eq!(controller.style_context().applied, vec![Theme::Dark]);
    }

    #[test]
    fn test_set_value_format_persists_key() {
        let mut controller =
            SettingsController::new(RecordingPersistence::default(), NoStyleContext);
        controller.set_value_format(ValueFormat::Billion);

        assert_eq!(controller.value_format(), ValueFormat::Billion);
        let requests = &controller.persistence().requests;
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].settings_property("valueFormat"), Some(&json!("billion")));
        assert_eq!(requests[0].settings_property("theme"), None);
    }

    #[test]
    fn test_unknown_format_key_selects_default() {
        let mut controller =
            SettingsController::new(RecordingPersistence::default(), NoStyleContext);
        controller.set_value_format(ValueFormat::Million);
        let format = controller.set_value_format_key("gazillion");

        assert_eq!(format, ValueFormat::Default);
        assert_eq!(controller.value_format(), ValueFormat::Default);
        assert_eq!(
            controller.persistence().requests[1].settings_property("valueFormat"),
            Some(&json!("default"))
        );
    }

    #[test]
    fn test_toggle_theme_round_trip() {
        let mut controller =
            SettingsController::new(RecordingPersistence::default(), RecordingStyle::default());
        assert_eq!(controller.toggle_theme(), Theme::Dark);
        assert_eq!(controller.toggle_theme(), Theme::Light);
        assert_eq!(controller.persistence().requests.len(), 2);
        assert_eq!(controller.style_context().applied, vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn test_persistence_failure_keeps_local_state() {
        let persistence = RecordingPersistence { fail: true, ..Default::default() };
        let mut controller = SettingsController::new(persistence, RecordingStyle::default());
        controller.set_theme(Theme::Dark);

        assert_eq!(controller.theme(), Theme::Dark);
        assert_eq!(controller.persistence().requests.len(), 1);
        assert_eq!(controller.style_context().applied, vec![Theme::Dark]);
    }

    #[test]
    fn test_reseed_does_not_persist() {
        let mut controller =
            SettingsController::new(RecordingPersistence::default(), RecordingStyle::default());
        controller.reseed(Settings { theme: Theme::Dark, value_format: ValueFormat::Thousand });

        assert_eq!(controller.theme(), Theme::Dark);
        assert!(controller.persistence().requests.is_empty());
        assert!(controller.style_context().applied.is_empty());
        controller.apply_style();
        assert_eq!(controller.style_context().applied, vec![Theme::Dark]);
    }

    #[test]
    fn test_object_instances_reflect_state() {
        let mut controller =
            SettingsController::new(RecordingPersistence::default(), NoStyleContext);
        controller.set_value_format(ValueFormat::Thousand);
        let instances = controller.object_instances();

        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].object_name, "settings");
        assert_eq!(instances[0].selector, None);
        assert_eq!(instances[0].properties["theme"], json!("light"));
        assert_eq!(instances[0].properties["valueFormat"], json!("thousand"));
    }
}
