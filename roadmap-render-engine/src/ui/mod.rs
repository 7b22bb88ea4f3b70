//! Screen-space HUD: info panel, control bar, navigation dots and the
//! loading overlay.
//!
//! The HUD only reads navigation results. Button and dot presses are routed
//! to the controller by the input module.

use crate::engine::core::app_state::AppState;
use bevy::prelude::*;

/// Info panel, control buttons and navigation dots.
pub mod hud;

/// Full-screen overlay shown while the roadmap loads or when there is no data.
pub mod loading_overlay;

use hud::{control_button_hover, refresh_hud_on_view_change, spawn_hud};
use loading_overlay::{OverlayClock, spawn_loading_overlay, update_loading_overlay};

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OverlayClock>()
            .add_systems(Startup, (spawn_hud, spawn_loading_overlay).chain())
            .add_systems(Update, update_loading_overlay)
            .add_systems(
                Update,
                (refresh_hud_on_view_change, control_button_hover)
                    .run_if(in_state(AppState::Running)),
            );
    }
}
