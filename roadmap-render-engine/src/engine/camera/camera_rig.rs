use super::tween::Tween;
use crate::navigation::controller::CameraShot;
use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::camera_framing::{
    ORBIT_DAMPING, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, WIDE_EYE, WIDE_TARGET,
};

const ORBIT_SENSITIVITY: f32 = 0.005;
const PAN_SENSITIVITY: f32 = 0.0015;
const PITCH_LIMIT: f32 = 1.5;

/// Camera eye and look-at target. Scripted shots tween both; user input
/// orbits, dollies and pans through damped velocities. A running shot takes
/// precedence over input.
#[derive(Resource, Debug, Clone)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    eye_tween: Option<Tween<Vec3>>,
    target_tween: Option<Tween<Vec3>>,
    /// Pending yaw and pitch in radians, drained with damping.
    orbit_velocity: Vec2,
    /// Pending log-scale distance change.
    zoom_velocity: f32,
    /// Pending pan in camera-local right/up units.
    pan_velocity: Vec2,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye: WIDE_EYE,
            target: WIDE_TARGET,
            eye_tween: None,
            target_tween: None,
            orbit_velocity: Vec2::ZERO,
            zoom_velocity: 0.0,
            pan_velocity: Vec2::ZERO,
        }
    }
}

impl CameraRig {
    /// Start moving towards `shot` from wherever the camera is now. A new
    /// shot replaces any shot still running.
    pub fn animate_to(&mut self, shot: CameraShot) {
        self.eye_tween = Some(Tween::new(self.eye, shot.eye, shot.duration));
        self.target_tween = Some(Tween::new(self.target, shot.target, shot.duration));
        self.orbit_velocity = Vec2::ZERO;
        self.zoom_velocity = 0.0;
        self.pan_velocity = Vec2::ZERO;
    }

    pub fn is_animating(&self) -> bool {
        self.eye_tween.is_some() || self.target_tween.is_some()
    }

    pub fn orbit(&mut self, delta: Vec2) {
        if !self.is_animating() {
            self.orbit_velocity += delta;
        }
    }

    /// Positive `amount` moves closer.
    pub fn dolly(&mut self, amount: f32) {
        if !self.is_animating() {
            self.zoom_velocity -= amount;
        }
    }

    pub fn pan(&mut self, delta: Vec2) {
        if !self.is_animating() {
            self.pan_velocity += delta;
        }
    }

    pub fn distance(&self) -> f32 {
        self.eye.distance(self.target)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye).looking_at(self.target, Vec3::Y)
    }

    pub fn advance(&mut self, delta_secs: f32) {
        if let Some(tween) = self.eye_tween.as_mut() {
            self.eye = tween.advance(delta_secs);
            if tween.is_finished() {
                self.eye_tween = None;
            }
        }
        if let Some(tween) = self.target_tween.as_mut() {
            self.target = tween.advance(delta_secs);
            if tween.is_finished() {
                self.target_tween = None;
            }
        }
        if self.is_animating() {
            return;
        }

        // Fraction of the pending motion applied this frame, normalised to 60 fps.
        let step = 1.0 - (1.0 - ORBIT_DAMPING).powf(delta_secs * 60.0);
        self.apply_orbit(self.orbit_velocity * step);
        self.apply_zoom(self.zoom_velocity * step);
        self.apply_pan(self.pan_velocity * step);
        self.orbit_velocity *= 1.0 - step;
        self.zoom_velocity *= 1.0 - step;
        self.pan_velocity *= 1.0 - step;
    }

    fn apply_orbit(&mut self, delta: Vec2) {
        let offset = self.eye - self.target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }
        let yaw = offset.x.atan2(offset.z) - delta.x;
        let pitch = ((offset.y / distance).clamp(-1.0, 1.0).asin() + delta.y).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        let direction = Vec3::new(
            pitch.cos() * yaw.sin(),
            pitch.sin(),
            pitch.cos() * yaw.cos(),
        );
        self.eye = self.target + direction * distance;
    }

    fn apply_zoom(&mut self, delta: f32) {
        let offset = self.eye - self.target;
        let distance = (offset.length() * delta.exp()).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        self.eye = self.target + offset.normalize_or(Vec3::Z) * distance;
    }

    fn apply_pan(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        let transform = self.transform();
        let scale = self.distance();
        let shift = (transform.right() * -delta.x + transform.up() * delta.y) * scale;
        self.eye += shift;
        self.target += shift;
    }
}

/// Mouse orbit (left drag), pan (right drag) and wheel zoom, then write the
/// rig into the camera transform. Input over HUD buttons is left to the HUD.
pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut rig: ResMut<CameraRig>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    interactions: Query<&Interaction>,
    time: Res<Time>,
) {
    let over_hud = interactions.iter().any(|i| *i != Interaction::None);

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    if !over_hud && mouse_delta != Vec2::ZERO {
        if mouse_button.pressed(MouseButton::Left) {
            rig.orbit(mouse_delta * ORBIT_SENSITIVITY);
        } else if mouse_button.pressed(MouseButton::Right) {
            rig.pan(mouse_delta * PAN_SENSITIVITY);
        }
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 0.1,
            MouseScrollUnit::Pixel => ev.y * 0.002,
        };
    }
    if !over_hud && scroll_accum.abs() > f32::EPSILON {
        rig.dolly(scroll_accum);
    }

    rig.advance(time.delta_secs());

    if let Ok(mut camera_transform) = camera_query.single_mut() {
        *camera_transform = rig.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(rig: &mut CameraRig) {
        for _ in 0..600 {
            rig.advance(1.0 / 60.0);
        }
    }

    #[test]
    fn shots_reach_their_framing() {
        let mut rig = CameraRig::default();
        rig.animate_to(CameraShot::overview());
        assert!(rig.is_animating());

        rig.advance(1.0);
        assert!(rig.is_animating());
        rig.advance(1.0);
        assert!(!rig.is_animating());
        assert_eq!(rig.eye, CameraShot::overview().eye);
        assert_eq!(rig.target, CameraShot::overview().target);
    }

    #[test]
    fn new_shot_retargets_from_current_position() {
        let mut rig = CameraRig::default();
        rig.animate_to(CameraShot::overview());
        rig.advance(1.0);
        let midway = rig.eye;
        assert_ne!(midway, WIDE_EYE);

        let shot = CameraShot::sprint(Vec3::new(20.0, 0.0, 0.0));
        rig.animate_to(shot);
        // Still at the interrupted position, now heading to the new shot.
        assert_eq!(rig.eye, midway);
        rig.advance(shot.duration);
        assert_eq!(rig.eye, shot.eye);
    }

    #[test]
    fn input_is_ignored_while_a_shot_runs() {
        let mut rig = CameraRig::default();
        rig.animate_to(CameraShot::wide());
        rig.orbit(Vec2::new(1.0, 0.0));
        rig.dolly(5.0);
        settle(&mut rig);
        assert!((rig.eye - WIDE_EYE).length() < 1e-3);
    }

    #[test]
    fn orbit_keeps_distance_to_target() {
        let mut rig = CameraRig::default();
        let distance = rig.distance();
        rig.orbit(Vec2::new(0.8, 0.2));
        settle(&mut rig);
        assert!((rig.distance() - distance).abs() < 1e-2);
        assert!(rig.eye.x.abs() > 1.0);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut rig = CameraRig::default();
        rig.dolly(50.0);
        settle(&mut rig);
        assert!((rig.distance() - ORBIT_MIN_DISTANCE).abs() < 1e-3);

        rig.dolly(-50.0);
        settle(&mut rig);
        assert!((rig.distance() - ORBIT_MAX_DISTANCE).abs() < 1e-3);
    }

    #[test]
    fn pan_moves_eye_and_target_together() {
        let mut rig = CameraRig::default();
        let offset = rig.eye - rig.target;
        rig.pan(Vec2::new(0.1, 0.0));
        settle(&mut rig);
        assert!(rig.target.length() > 1.0);
        assert!(((rig.eye - rig.target) - offset).length() < 1e-3);
    }
}
