use crate::engine::core::app_state::AppState;
use bevy::prelude::*;
use constants::animation::LOADING_OVERLAY_MIN_SECS;
use constants::palette::{BACKGROUND, HUD_TEXT, HUD_TEXT_DIM};

#[derive(Component)]
pub struct LoadingOverlay;

#[derive(Component)]
pub struct LoadingMessage;

pub const LOADING_MESSAGE: &str = "Loading roadmap…";
pub const NO_DATA_MESSAGE: &str = "No roadmap data available";

/// Time the scene became ready, measured on the app clock.
#[derive(Resource, Debug, Default)]
pub struct OverlayClock {
    ready_at: Option<f32>,
}

/// The overlay covers the loading phase, stays up a moment after the scene
/// is ready, and never leaves while there is nothing to show.
pub fn overlay_visible(state: AppState, secs_since_ready: Option<f32>) -> bool {
    match state {
        AppState::Loading | AppState::NoData => true,
        AppState::Running => secs_since_ready.is_none_or(|secs| secs < LOADING_OVERLAY_MIN_SECS),
    }
}

pub fn spawn_loading_overlay(mut commands: Commands) {
    commands
        .spawn((
            LoadingOverlay,
            Name::new("Loading overlay"),
            BackgroundColor(BACKGROUND),
            GlobalZIndex(10),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|overlay| {
            overlay.spawn((
                Text::new("🗺️"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(HUD_TEXT),
            ));
            overlay.spawn((
                LoadingMessage,
                Text::new(LOADING_MESSAGE),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(HUD_TEXT_DIM),
            ));
        });
}

pub fn update_loading_overlay(
    state: Res<State<AppState>>,
    time: Res<Time>,
    mut clock: ResMut<OverlayClock>,
    mut overlays: Query<&mut Node, With<LoadingOverlay>>,
    mut messages: Query<&mut Text, With<LoadingMessage>>,
) {
    let now = time.elapsed_secs();
    let current = *state.get();

    if state.is_changed() {
        clock.ready_at = (current == AppState::Running).then_some(now);
        let message = match current {
            AppState::NoData => NO_DATA_MESSAGE,
            _ => LOADING_MESSAGE,
        };
        for mut text in &mut messages {
            text.0 = message.to_string();
        }
    }

    let since_ready = clock.ready_at.map(|ready| now - ready);
    let display = if overlay_visible(current, since_ready) {
        Display::Flex
    } else {
        Display::None
    };
    for mut node in &mut overlays {
        if node.display != display {
            node.display = display;
        }
    }
}
