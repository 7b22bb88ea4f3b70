use crate::engine::scene::components::{SprintRing, SprintSphere, StarField};
use crate::navigation::controller::NavigationController;
use crate::navigation::view_state::ViewMode;
use bevy::prelude::*;
use constants::animation::{PULSE_AMPLITUDE, PULSE_FREQUENCY, RING_SPIN, STAR_FIELD_SPIN};

/// Clock for the cosmetic per-frame motion. Stopped motion freezes the star
/// field, the rings and the pulse where they are.
#[derive(Resource, Debug, Default)]
pub struct AmbientMotion {
    running: bool,
    elapsed: f32,
    delta: f32,
}

impl AmbientMotion {
    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.delta = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds of motion since the first start.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn tick(&mut self, delta_secs: f32) {
        if self.running {
            self.delta = delta_secs;
            self.elapsed += delta_secs;
        }
    }
}

pub fn ambient_motion_running(motion: Res<AmbientMotion>) -> bool {
    motion.is_running()
}

pub fn start_ambient_motion(mut motion: ResMut<AmbientMotion>) {
    motion.start();
}

pub fn tick_ambient_motion(mut motion: ResMut<AmbientMotion>, time: Res<Time>) {
    motion.tick(time.delta_secs());
}

/// Scale of the active sprint sphere at `elapsed` seconds.
pub fn pulse_scale(elapsed: f32) -> f32 {
    1.0 + (elapsed * PULSE_FREQUENCY).sin() * PULSE_AMPLITUDE
}

pub fn spin_star_field(
    motion: Res<AmbientMotion>,
    mut stars: Query<&mut Transform, With<StarField>>,
) {
    for mut transform in &mut stars {
        transform.rotate_y(STAR_FIELD_SPIN * motion.delta);
    }
}

/// Rings lie flat through a quarter turn about X, so their own Z is the
/// world vertical.
pub fn spin_sprint_rings(
    motion: Res<AmbientMotion>,
    mut rings: Query<(&mut Transform, &InheritedVisibility), With<SprintRing>>,
) {
    for (mut transform, visibility) in &mut rings {
        if visibility.get() {
            transform.rotate_local_z(RING_SPIN * motion.delta);
        }
    }
}

/// Pulse the visible sphere of the current sprint in the sprints view; every
/// other sphere sits at unit scale.
pub fn pulse_active_sprint(
    motion: Res<AmbientMotion>,
    controller: Res<NavigationController>,
    mut spheres: Query<(&SprintSphere, &InheritedVisibility, &mut Transform)>,
) {
    let state = controller.state();
    let active = match state.mode() {
        ViewMode::Sprints => Some(state.current_sprint()),
        _ => None,
    };

    for (sphere, visibility, mut transform) in &mut spheres {
        let scale = if visibility.get() && active == Some(sphere.sprint_index) {
            pulse_scale(motion.elapsed)
        } else {
            1.0
        };
        transform.scale = Vec3::splat(scale);
    }
}
