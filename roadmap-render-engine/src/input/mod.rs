//! Routes keyboard, control bar and navigation dot input into
//! `NavigationRequest` events. Host-page requests arrive through the RPC layer.

use crate::engine::core::app_state::AppState;
use bevy::prelude::*;

pub mod keyboard;
pub mod pointer;

use keyboard::route_keyboard;
use pointer::{route_control_buttons, route_nav_dots};

pub struct InputRouterPlugin;

impl Plugin for InputRouterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (route_keyboard, route_control_buttons, route_nav_dots)
                .run_if(in_state(AppState::Running)),
        );
    }
}
