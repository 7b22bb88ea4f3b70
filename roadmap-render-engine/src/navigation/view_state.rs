/// Which zoom level the viewer is at.
///
/// The categories mode carries the selected sprint, so a selection exists
/// exactly when the mode is `Categories`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Sprints,
    Categories {
        sprint: usize,
    },
    Overview,
}

impl ViewMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sprints => "sprints",
            Self::Categories { .. } => "categories",
            Self::Overview => "overview",
        }
    }

    pub fn selected_sprint(&self) -> Option<usize> {
        match self {
            Self::Categories { sprint } => Some(*sprint),
            _ => None,
        }
    }
}

/// Navigation state owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub(super) mode: ViewMode,
    pub(super) current_sprint: usize,
    pub(super) current_category: usize,
}

impl ViewState {
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn current_sprint(&self) -> usize {
        self.current_sprint
    }

    pub fn current_category(&self) -> usize {
        self.current_category
    }

    pub fn selected_sprint(&self) -> Option<usize> {
        self.mode.selected_sprint()
    }

    /// Sprint whose info the HUD shows: the selection in categories mode,
    /// otherwise the cursor.
    pub fn focused_sprint(&self) -> usize {
        self.selected_sprint().unwrap_or(self.current_sprint)
    }

    /// Snapshot for host notifications.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "mode": self.mode.name(),
            "sprint_index": self.current_sprint,
            "category_index": self.current_category,
            "selected_sprint": self.selected_sprint(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_only_exists_in_categories_mode() {
        assert_eq!(ViewMode::Sprints.selected_sprint(), None);
        assert_eq!(ViewMode::Overview.selected_sprint(), None);
        assert_eq!(ViewMode::Categories { sprint: 2 }.selected_sprint(), Some(2));
    }

    #[test]
    fn json_snapshot_uses_null_selection_outside_categories() {
        let state = ViewState {
            mode: ViewMode::Overview,
            current_sprint: 3,
            current_category: 1,
        };
        let json = state.to_json();
        assert_eq!(json["mode"], "overview");
        assert_eq!(json["sprint_index"], 3);
        assert!(json["selected_sprint"].is_null());
    }
}
