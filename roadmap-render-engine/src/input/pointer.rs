use crate::navigation::actions::{ActionSource, NavigationAction, NavigationRequest};
use crate::ui::hud::{ControlButton, NavDot};
use bevy::prelude::*;

pub fn route_control_buttons(
    buttons: Query<(&Interaction, &ControlButton), Changed<Interaction>>,
    mut requests: EventWriter<NavigationRequest>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            requests.write(NavigationRequest::new(button.action(), ActionSource::Button));
        }
    }
}

pub fn route_nav_dots(
    dots: Query<(&Interaction, &NavDot), Changed<Interaction>>,
    mut requests: EventWriter<NavigationRequest>,
) {
    for (interaction, dot) in &dots {
        if *interaction == Interaction::Pressed {
            requests.write(NavigationRequest::new(
                NavigationAction::JumpTo(dot.0),
                ActionSource::NavDot,
            ));
        }
    }
}
