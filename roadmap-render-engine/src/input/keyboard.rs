use crate::navigation::actions::{ActionSource, NavigationAction, NavigationRequest};
use bevy::prelude::*;

/// Keyboard bindings for the navigation actions.
pub fn action_for_key(key: KeyCode) -> Option<NavigationAction> {
    match key {
        KeyCode::ArrowLeft => Some(NavigationAction::Previous),
        KeyCode::ArrowRight => Some(NavigationAction::Next),
        KeyCode::Enter | KeyCode::Space => Some(NavigationAction::Focus),
        KeyCode::Escape | KeyCode::Backspace => Some(NavigationAction::Back),
        _ => None,
    }
}

pub fn route_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: EventWriter<NavigationRequest>,
) {
    for key in keyboard.get_just_pressed() {
        if let Some(action) = action_for_key(*key) {
            requests.write(NavigationRequest::new(action, ActionSource::Keyboard));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_enter_and_escape_are_bound() {
        assert_eq!(action_for_key(KeyCode::ArrowLeft), Some(NavigationAction::Previous));
        assert_eq!(action_for_key(KeyCode::ArrowRight), Some(NavigationAction::Next));
        assert_eq!(action_for_key(KeyCode::Enter), Some(NavigationAction::Focus));
        assert_eq!(action_for_key(KeyCode::Space), Some(NavigationAction::Focus));
        assert_eq!(action_for_key(KeyCode::Escape), Some(NavigationAction::Back));
        assert_eq!(action_for_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn pressed_keys_become_requests() {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_event::<NavigationRequest>()
            .add_systems(Update, route_keyboard);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::ArrowRight);
        app.update();

        let requests: Vec<_> = app
            .world()
            .resource::<Events<NavigationRequest>>()
            .iter_current_update_events()
            .map(|r| (r.action, r.source))
            .collect();
        assert_eq!(
            requests,
            vec![(NavigationAction::Next, ActionSource::Keyboard)]
        );
    }
}
