use tracing::{debug, warn};

use crate::errors::AppError;
use crate::view::{TabId, View};

/// The element pair a tab id resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabBinding {
    pub affordance: &'static str,
    pub panel: &'static str,
    pub label: &'static str,
}

/// Keeps exactly one panel visible and its tab highlighted.
#[derive(Clone)]
pub struct TabController {
    view: View,
    bindings: Vec<(TabId, TabBinding)>,
}

impl TabController {
    pub fn new(view: View) -> Self {
        let bindings = TabId::ALL
            .into_iter()
            .map(|id| {
                let binding = TabBinding {
                    affordance: id.affordance_id(),
                    panel: id.as_str(),
                    label: id.label(),
                };
                (id, binding)
            })
            .collect();
        Self { view, bindings }
    }

    /// Registered tabs in display order.
    pub fn bindings(&self) -> &[(TabId, TabBinding)] {
        &self.bindings
    }

    pub fn active(&self) -> TabId {
        self.view.read(|m| m.tabs.active)
    }

    /// Activates `id`. Switching to the active tab changes nothing and does
    /// not notify the view.
    pub fn switch_to(&self, id: TabId) {
        if self.active() == id {
            debug!("Tab '{}' already active", id.as_str());
            return;
        }
        self.view.update(|m| m.tabs.active = id);
        debug!("Switched to tab '{}'", id.as_str());
    }

    /// Resolves a panel id through the registry. Unknown ids leave the current
    /// tab in place.
    pub fn switch_to_named(&self, panel: &str) -> Result<(), AppError> {
        let Some((tab, _)) = self.bindings.iter().find(|(_, b)| b.panel == panel) else {
            warn!("Tab switch rejected: no panel '{panel}'");
            return Err(AppError::UnknownTab { id: panel.to_string() });
        };
        self.switch_to(*tab);
        Ok(())
    }
}
