//! View-state machine for sprint/category/overview navigation.
//!
//! Input sources write `NavigationRequest` events; the controller applies
//! them against the curriculum and emits `ViewChanged` for the scene, camera,
//! HUD and host notifications to follow.

use crate::engine::assets::curriculum::Curriculum;
use crate::engine::core::app_state::AppState;
use bevy::prelude::*;

/// Navigation actions and the request event carrying them.
pub mod actions;

/// Navigation controller, camera shots and scene layouts.
pub mod controller;

/// Info panel contents derived from the view state.
pub mod info_panel;

/// Navigation dot strip contents derived from the view state.
pub mod nav_dots;

/// View mode, sprint and category cursors, and their JSON snapshot.
pub mod view_state;

use actions::NavigationRequest;
use controller::{NavigationController, ViewChanged};

pub struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NavigationController>()
            .add_event::<NavigationRequest>()
            .add_event::<ViewChanged>()
            .add_systems(OnEnter(AppState::Running), show_initial_view)
            .add_systems(
                Update,
                apply_navigation_requests.run_if(in_state(AppState::Running)),
            );
    }
}

/// Put the freshly built scene into the sprints view.
pub fn show_initial_view(
    mut controller: ResMut<NavigationController>,
    mut changes: EventWriter<ViewChanged>,
) {
    changes.write(controller.reset());
}

pub fn apply_navigation_requests(
    mut requests: EventReader<NavigationRequest>,
    curriculum: Res<Curriculum>,
    mut controller: ResMut<NavigationController>,
    mut changes: EventWriter<ViewChanged>,
) {
    for request in requests.read() {
        let Some(change) = controller.apply(request.action, &curriculum) else {
            debug!(
                "Navigation {:?} via {:?} ignored in {} view",
                request.action,
                request.source,
                controller.state().mode().name()
            );
            continue;
        };

        info!(
            "Navigation {:?} via {:?} → {} view, sprint {}, category {}",
            request.action,
            request.source,
            change.state.mode().name(),
            change.state.current_sprint(),
            change.state.current_category()
        );
        changes.write(change);
    }
}
