//! Host wire types for the matrix table visual.
//!
//! This crate defines the shapes exchanged with the hosting report platform:
//! the data view snapshot delivered on every update, the object instances
//! reported for the property pane, and the merge-style property update sent
//! back when a setting changes. Field names follow the host's camelCase JSON.
//!
//! # Usage
//!
//! ```ignore
//! use gridview_protocol::{DataView, PersistRequest};
//!
//! let view: DataView = serde_json::from_str(&snapshot)?;
//! let theme = view.settings_property("theme");
//!
//! let update = PersistRequest::merge_settings("theme", "dark");
//! let json = serde_json::to_string(&update)?;
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use gridview_engine::Matrix;

/// Host object that holds the visual's persisted settings.
pub const SETTINGS_OBJECT: &str = "settings";

// =============================================================================
// Host → Visual
// =============================================================================

/// One data view snapshot, delivered on every refresh.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataView {
    pub metadata: Metadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Matrix>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    /// Persisted objects keyed by object name, then property name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<DataViewObjects>,
}

pub type DataViewObjects = BTreeMap<String, BTreeMap<String, Value>>;

impl DataView {
    /// A string property of the persisted settings object. Non-string values
    /// are treated as absent.
    pub fn settings_property(&self, name: &str) -> Option<&str> {
        self.metadata
            .objects
            .as_ref()?
            .get(SETTINGS_OBJECT)?
            .get(name)?
            .as_str()
    }

    /// The matrix, or an empty one when the snapshot has none.
    pub fn matrix_or_empty(&self) -> std::borrow::Cow<'_, Matrix> {
        match &self.matrix {
            Some(matrix) => std::borrow::Cow::Borrowed(matrix),
            None => std::borrow::Cow::Owned(Matrix::default()),
        }
    }
}

// =============================================================================
// Visual → Host
// =============================================================================

/// A set of properties under one host object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualObjectInstance {
    pub object_name: String,
    pub properties: BTreeMap<String, Value>,
    /// Always null: settings are not scoped to a data point.
    pub selector: Option<Value>,
}

impl VisualObjectInstance {
    pub fn settings(properties: BTreeMap<String, Value>) -> Self {
        Self {
            object_name: SETTINGS_OBJECT.to_string(),
            properties,
            selector: None,
        }
    }
}

/// Property update sent to the host. Only merge semantics are used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistRequest {
    pub merge: Vec<VisualObjectInstance>,
}

impl PersistRequest {
    /// Merge a single property into the settings object.
    pub fn merge_settings(key: &str, value: impl Into<Value>) -> Self {
        let mut properties = BTreeMap::new();
        properties.insert(key.to_string(), value.into());
        Self {
            merge: vec![VisualObjectInstance::settings(properties)],
        }
    }

    /// Look up a merged settings property.
    pub fn settings_property(&self, key: &str) -> Option<&Value> {
        self.merge
            .iter()
            .filter(|instance| instance.object_name == SETTINGS_OBJECT)
            .find_map(|instance| instance.properties.get(key))
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Failure reported by a host capability.
#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    /// The host rejected a property update.
    Persistence(String),
    /// The host rejected a selection request.
    Selection(String),
    /// The host is gone (visual torn down mid-call).
    Disconnected,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Persistence(msg) => write!(f, "persist properties failed: {msg}"),
            Self::Selection(msg) => write!(f, "selection failed: {msg}"),
            Self::Disconnected => write!(f, "host disconnected"),
        }
    }
}

impl std::error::Error for HostError {}
