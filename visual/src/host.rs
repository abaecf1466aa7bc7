//! Host capabilities consumed by the visual.
//!
//! The formatting and grid logic never talk to the host directly; everything
//! host-bound goes through one of these ports so it can be swapped for a
//! recording fake in tests.

use gridview_config::Theme;
use gridview_core::{RowPath, SelectionId};
use gridview_protocol::{HostError, PersistRequest};

/// Merge-style property persistence. Fire-and-forget from the caller's side:
/// an `Err` is logged and otherwise ignored.
pub trait PersistenceHost {
    fn persist_properties(&mut self, request: PersistRequest) -> Result<(), HostError>;
}

/// Cross-visual selection.
#[allow(async_fn_in_trait)]
pub trait SelectionHost {
    /// Mint the identity token for a row node.
    fn create_selection_id(&self, path: &RowPath) -> SelectionId;

    /// Add/toggle `id` in the host's selection, returning the resulting set.
    async fn select(
        &mut self,
        id: &SelectionId,
        multi_select: bool,
    ) -> Result<Vec<SelectionId>, HostError>;
}

/// Whatever styles the surrounding document (e.g. a class on the root element).
pub trait StyleContext {
    fn apply_theme(&mut self, theme: Theme);
}

/// Style context for surfaces that style themselves from `View::theme`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStyleContext;

impl StyleContext for NoStyleContext {
    fn apply_theme(&mut self, _theme: Theme) {}
}

/// Persistence for hosts that do not keep properties. Every update succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPersistence;

impl PersistenceHost for NoPersistence {
    fn persist_properties(&mut self, _request: PersistRequest) -> Result<(), HostError> {
        Ok(())
    }
}
