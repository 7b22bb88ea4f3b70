use bevy::prelude::*;

/// Discrete navigation inputs understood by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    Previous,
    Next,
    /// Drill into the current sprint, re-aim at the current category, or
    /// leave the overview, depending on the mode.
    Focus,
    Back,
    ToggleOverview,
    /// Select a sprint or category directly, e.g. from a navigation dot.
    JumpTo(usize),
}

impl NavigationAction {
    /// Parse the action names used by the host-page RPC surface.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "previous" | "prev" => Some(Self::Previous),
            "next" => Some(Self::Next),
            "focus" => Some(Self::Focus),
            "back" => Some(Self::Back),
            "toggle_overview" | "overview" => Some(Self::ToggleOverview),
            _ => None,
        }
    }
}

/// Source of a navigation request, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSource {
    Keyboard,
    Button,
    NavDot,
    Rpc,
}

/// Event fired by the input router for the controller to apply.
#[derive(Event, Debug, Clone, Copy)]
pub struct NavigationRequest {
    pub action: NavigationAction,
    pub source: ActionSource,
}

impl NavigationRequest {
    pub fn new(action: NavigationAction, source: ActionSource) -> Self {
        Self { action, source }
    }
}
