use bevy::prelude::*;
use constants::palette::POINT_LIGHTS;

/// Three coloured point lights around the scene. Ambient light and fog are
/// set on the app and the camera.
pub fn spawn_lighting(mut commands: Commands) {
    for (index, light) in POINT_LIGHTS.iter().enumerate() {
        commands.spawn((
            PointLight {
                color: light.colour,
                intensity: light.intensity,
                range: light.range,
                shadows_enabled: false,
                ..default()
            },
            Transform::from_translation(light.position),
            Name::new(format!("Point light {index}")),
        ));
    }
}
