use crate::engine::camera::camera_rig::CameraRig;
use crate::engine::camera::tween::Tween;
use crate::engine::labels::FloatingLabel;
use crate::engine::scene::components::{DetailGroup, SprintConnector, SprintMarker};
use crate::navigation::controller::{SceneLayout, ViewChanged};
use bevy::prelude::*;
use constants::animation::SPRINT_HEIGHT_SECS;
use constants::layout::FOCUSED_SPRINT_HEIGHT;

/// Animated sprint marker height.
#[derive(Component, Debug)]
pub struct HeightTween(pub Tween<f32>);

fn visible_if(shown: bool) -> Visibility {
    if shown {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

/// Apply each view change to the scene: group visibility, sprint heights,
/// label visibility and the camera shot.
pub fn apply_view_changes(
    mut commands: Commands,
    mut changes: EventReader<ViewChanged>,
    mut rig: ResMut<CameraRig>,
    mut markers: Query<(Entity, &SprintMarker, &Transform, &mut Visibility)>,
    mut details: Query<(&DetailGroup, &mut Visibility), Without<SprintMarker>>,
    mut connectors: Query<
        &mut Visibility,
        (
            With<SprintConnector>,
            Without<SprintMarker>,
            Without<DetailGroup>,
        ),
    >,
    mut labels: Query<
        &mut Visibility,
        (
            With<FloatingLabel>,
            Without<SprintMarker>,
            Without<DetailGroup>,
            Without<SprintConnector>,
        ),
    >,
) {
    for change in changes.read() {
        if let Some(layout) = change.layout {
            let focused = match layout {
                SceneLayout::AllSprints => None,
                SceneLayout::FocusedSprint(index) => Some(index),
            };

            for (entity, marker, transform, mut visibility) in &mut markers {
                let shown = focused.is_none_or(|index| index == marker.index);
                *visibility = visible_if(shown);
                if let Ok(mut label) = labels.get_mut(marker.label) {
                    *label = visible_if(shown);
                }

                let height = if focused == Some(marker.index) {
                    FOCUSED_SPRINT_HEIGHT
                } else {
                    marker.base_height
                };
                if transform.translation.y != height {
                    commands.entity(entity).insert(HeightTween(Tween::new(
                        transform.translation.y,
                        height,
                        SPRINT_HEIGHT_SECS,
                    )));
                }
            }

            for (group, mut visibility) in &mut details {
                let shown = focused == Some(group.sprint_index);
                *visibility = visible_if(shown);
                for &label in &group.labels {
                    if let Ok(mut label) = labels.get_mut(label) {
                        *label = visible_if(shown);
                    }
                }
            }

            for mut visibility in &mut connectors {
                *visibility = visible_if(focused.is_none());
            }
        }

        if let Some(shot) = change.shot {
            rig.animate_to(shot);
        }
    }
}

pub fn advance_height_tweens(
    mut commands: Commands,
    mut markers: Query<(Entity, &mut Transform, &mut HeightTween)>,
    time: Res<Time>,
) {
    for (entity, mut transform, mut tween) in &mut markers {
        transform.translation.y = tween.0.advance(time.delta_secs());
        if tween.0.is_finished() {
            commands.entity(entity).remove::<HeightTween>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::curriculum::{Curriculum, fixtures};
    use crate::engine::labels::LabelAlign;
    use crate::navigation::actions::NavigationAction;
    use crate::navigation::controller::NavigationController;
    use crate::navigation::view_state::ViewMode;
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    fn label(world: &mut World, anchor: Entity) -> Entity {
        world
            .spawn((
                FloatingLabel {
                    anchor,
                    offset: Vec3::ZERO,
                    align: LabelAlign::Centre,
                },
                Visibility::Hidden,
            ))
            .id()
    }

    /// Scene skeleton without meshes: markers, detail groups with one label
    /// each, and connectors between consecutive sprints.
    fn scene_app(curriculum: &Curriculum) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(250)))
            .init_resource::<CameraRig>()
            .add_event::<ViewChanged>()
            .add_systems(Update, (apply_view_changes, advance_height_tweens).chain());

        let world = app.world_mut();
        for sprint in curriculum.sprints() {
            let marker = world
                .spawn((Transform::from_translation(sprint.position), Visibility::Visible))
                .id();
            let marker_label = label(world, marker);
            world.entity_mut(marker).insert(SprintMarker {
                index: sprint.index,
                base_height: sprint.position.y,
                label: marker_label,
            });

            let group = world.spawn(Visibility::Hidden).id();
            let detail_label = label(world, group);
            world.entity_mut(group).insert(DetailGroup {
                sprint_index: sprint.index,
                labels: vec![detail_label],
            });
        }
        for _ in 1..curriculum.len() {
            world.spawn((SprintConnector, Visibility::Visible));
        }
        app
    }

    fn visible_details(app: &mut App) -> Vec<usize> {
        let world = app.world_mut();
        let mut shown: Vec<_> = world
            .query::<(&DetailGroup, &Visibility)>()
            .iter(world)
            .filter(|(_, v)| **v == Visibility::Visible)
            .map(|(group, _)| group.sprint_index)
            .collect();
        shown.sort();
        shown
    }

    fn visible_labels(app: &mut App) -> usize {
        let world = app.world_mut();
        world
            .query::<(&FloatingLabel, &Visibility)>()
            .iter(world)
            .filter(|(_, v)| **v == Visibility::Visible)
            .count()
    }

    #[test]
    fn exactly_one_detail_group_in_categories_mode() {
        let curriculum = fixtures::three_sprints_one_bare();
        let mut app = scene_app(&curriculum);
        let mut controller = NavigationController::default();

        let actions = [
            NavigationAction::Next,
            NavigationAction::Focus,
            NavigationAction::Next,
            NavigationAction::ToggleOverview,
            NavigationAction::Next,
            NavigationAction::Focus,
            NavigationAction::Previous,
            NavigationAction::Focus,
            NavigationAction::Back,
            NavigationAction::JumpTo(2),
            NavigationAction::Focus,
        ];

        for action in actions {
            if let Some(change) = controller.apply(action, &curriculum) {
                app.world_mut().send_event(change);
            }
            app.update();

            let shown = visible_details(&mut app);
            match controller.state().mode() {
                ViewMode::Categories { sprint } => assert_eq!(shown, vec![sprint]),
                _ => assert!(shown.is_empty(), "{action:?} left {shown:?} visible"),
            }
        }
    }

    #[test]
    fn focus_raises_the_sprint_and_back_restores_it() {
        let curriculum = fixtures::two_sprints();
        let mut app = scene_app(&curriculum);
        let mut controller = NavigationController::default();
        app.update();

        let change = controller.apply(NavigationAction::Focus, &curriculum).unwrap();
        app.world_mut().send_event(change);
        for _ in 0..6 {
            app.update();
        }

        let world = app.world_mut();
        let mut markers: Vec<_> = world
            .query::<(&SprintMarker, &Transform, &Visibility)>()
            .iter(world)
            .map(|(m, t, v)| (m.index, t.translation.y, *v))
            .collect();
        markers.sort_by_key(|(index, ..)| *index);
        assert_eq!(markers[0], (0, FOCUSED_SPRINT_HEIGHT, Visibility::Visible));
        assert_eq!(markers[1].2, Visibility::Hidden);
        // Sprint marker label plus the detail label of sprint 0.
        assert_eq!(visible_labels(&mut app), 2);
        assert!(app.world().resource::<CameraRig>().is_animating());

        let change = controller.apply(NavigationAction::Back, &curriculum).unwrap();
        app.world_mut().send_event(change);
        for _ in 0..6 {
            app.update();
        }

        let world = app.world_mut();
        let heights: Vec<_> = world
            .query::<(&SprintMarker, &Transform)>()
            .iter(world)
            .map(|(m, t)| (m.base_height, t.translation.y))
            .collect();
        assert!(heights.iter().all(|(base, y)| base == y));
        assert_eq!(visible_labels(&mut app), 2);
        assert!(visible_details(&mut app).is_empty());

        let world = app.world_mut();
        assert!(world
            .query::<(&SprintConnector, &Visibility)>()
            .iter(world)
            .all(|(_, v)| *v == Visibility::Visible));
    }
}
