use super::components::{DetailGroup, SprintConnector, SprintMarker, SprintRing, SprintSphere};
use super::connectors::{gradient_line_mesh, line_material, line_segments_mesh};
use super::layout::{
    category_connector_span, category_offset_x, lesson_node_y, lesson_trunk_end_y,
};
use crate::engine::assets::curriculum::{Category, Curriculum, Sprint};
use crate::engine::labels::LabelRoot;
use crate::engine::labels::content::{
    spawn_category_label, spawn_lesson_label, spawn_sprint_label,
};
use crate::engine::loading::diagram_loader::PendingDiagram;
use crate::engine::loading::progress::LoadingProgress;
use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use constants::layout::*;
use constants::palette::*;
use std::f32::consts::FRAC_PI_2;

/// Meshes shared by every sprint.
struct SharedMeshes {
    sprint_sphere: Handle<Mesh>,
    ring: Handle<Mesh>,
    category_sphere: Handle<Mesh>,
    lesson_node: Handle<Mesh>,
}

impl SharedMeshes {
    fn new(meshes: &mut Assets<Mesh>) -> Self {
        Self {
            sprint_sphere: meshes.add(Sphere::new(SPRINT_SPHERE_RADIUS).mesh().uv(32, 32)),
            ring: meshes.add(Annulus::new(SPRINT_RING_INNER_RADIUS, SPRINT_RING_OUTER_RADIUS)),
            category_sphere: meshes.add(Sphere::new(CATEGORY_SPHERE_RADIUS).mesh().uv(24, 24)),
            lesson_node: meshes.add(Sphere::new(LESSON_NODE_RADIUS).mesh().uv(12, 12)),
        }
    }
}

/// Lit, translucent material glowing in its own colour.
fn glowing_material(colour: Color, glow: f32, opacity: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: colour.with_alpha(opacity),
        emissive: LinearRgba::from(colour) * glow,
        alpha_mode: AlphaMode::Blend,
        perceptual_roughness: 0.3,
        ..default()
    }
}

fn flat_material(colour: Color, opacity: f32) -> StandardMaterial {
    StandardMaterial {
        double_sided: true,
        cull_mode: None,
        ..line_material(colour, opacity)
    }
}

/// Build every sprint marker, detail group and connector once the curriculum
/// is available. Runs once; the scene is never rebuilt.
pub fn build_scene(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    curriculum: Res<Curriculum>,
    label_root: Res<LabelRoot>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !loading_progress.document_resolved || loading_progress.scene_built || curriculum.is_empty()
    {
        return;
    }

    let shared = SharedMeshes::new(&mut meshes);
    let mut detail_count = 0;

    for sprint in curriculum.sprints() {
        spawn_sprint_marker(&mut commands, label_root.0, &shared, &mut materials, sprint);
        detail_count += spawn_detail_group(
            &mut commands,
            label_root.0,
            &shared,
            &mut meshes,
            &mut materials,
            &asset_server,
            sprint,
        );
    }

    spawn_sprint_connectors(&mut commands, &mut meshes, &mut materials, curriculum.sprints());

    println!(
        "✓ Scene built: {} sprints, {} detail labels",
        curriculum.len(),
        detail_count
    );
    loading_progress.scene_built = true;
}

fn spawn_sprint_marker(
    commands: &mut Commands,
    label_root: Entity,
    shared: &SharedMeshes,
    materials: &mut Assets<StandardMaterial>,
    sprint: &Sprint,
) {
    let marker = commands
        .spawn((
            Transform::from_translation(sprint.position),
            Visibility::Visible,
            Name::new(format!("Sprint {}", sprint.index)),
        ))
        .id();

    let label = spawn_sprint_label(commands, label_root, marker, sprint);
    commands.entity(marker).insert(SprintMarker {
        index: sprint.index,
        base_height: sprint.position.y,
        label,
    });

    commands.spawn((
        Mesh3d(shared.sprint_sphere.clone()),
        MeshMaterial3d(materials.add(glowing_material(
            sprint.colour,
            0.3,
            SPRINT_SPHERE_OPACITY,
        ))),
        Transform::IDENTITY,
        SprintSphere {
            sprint_index: sprint.index,
        },
        ChildOf(marker),
    ));

    commands.spawn((
        Mesh3d(shared.ring.clone()),
        MeshMaterial3d(materials.add(flat_material(sprint.colour, SPRINT_RING_OPACITY))),
        Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        SprintRing,
        ChildOf(marker),
    ));
}

/// Spawn the hidden detail group of one sprint. Returns the number of labels
/// it owns.
fn spawn_detail_group(
    commands: &mut Commands,
    label_root: Entity,
    shared: &SharedMeshes,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    sprint: &Sprint,
) -> usize {
    let group = commands
        .spawn((
            Transform::from_translation(sprint.position),
            Visibility::Hidden,
            Name::new(format!("Sprint {} detail", sprint.index)),
        ))
        .id();

    let count = sprint.category_count();
    let mut labels = Vec::new();

    for (index, category) in sprint.categories.iter().enumerate() {
        let category_entity = commands
            .spawn((
                Mesh3d(shared.category_sphere.clone()),
                MeshMaterial3d(materials.add(glowing_material(
                    category.colour,
                    0.4,
                    CATEGORY_SPHERE_OPACITY,
                ))),
                Transform::from_xyz(category_offset_x(count, index), 0.0, 0.0),
                Visibility::Inherited,
                ChildOf(group),
            ))
            .id();
        labels.push(spawn_category_label(commands, label_root, category_entity, category));

        spawn_lesson_tree(
            commands,
            label_root,
            shared,
            meshes,
            materials,
            category_entity,
            category,
            &mut labels,
        );
    }

    if count > 1 {
        let segments: Vec<_> = (0..count - 1)
            .map(|index| {
                let (start, end) = category_connector_span(count, index);
                (Vec3::new(start, 0.0, 0.0), Vec3::new(end, 0.0, 0.0))
            })
            .collect();
        commands.spawn((
            Mesh3d(meshes.add(line_segments_mesh(&segments))),
            MeshMaterial3d(materials.add(line_material(sprint.colour, CATEGORY_CONNECTOR_OPACITY))),
            Transform::IDENTITY,
            NoFrustumCulling,
            ChildOf(group),
        ));
    }

    let label_count = labels.len();
    let mut group_commands = commands.entity(group);
    group_commands.insert(DetailGroup {
        sprint_index: sprint.index,
        labels,
    });
    if let Some(path) = &sprint.diagram {
        group_commands.insert(PendingDiagram::request(asset_server, path));
    }

    label_count
}

/// Trunk, per-lesson branch, node and numbered label below a category sphere.
#[allow(clippy::too_many_arguments)]
fn spawn_lesson_tree(
    commands: &mut Commands,
    label_root: Entity,
    shared: &SharedMeshes,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    category_entity: Entity,
    category: &Category,
    labels: &mut Vec<Entity>,
) {
    let tree = commands
        .spawn((
            Transform::from_xyz(0.0, LESSON_TREE_OFFSET_Y, 0.0),
            Visibility::Inherited,
            ChildOf(category_entity),
        ))
        .id();

    let lesson_count = category.lessons.len();
    let mut segments = vec![(Vec3::ZERO, Vec3::Y * lesson_trunk_end_y(lesson_count))];
    segments.extend((0..lesson_count).map(|i| {
        let y = lesson_node_y(i);
        (Vec3::new(0.0, y, 0.0), Vec3::new(LESSON_BRANCH_LENGTH, y, 0.0))
    }));

    commands.spawn((
        Mesh3d(meshes.add(line_segments_mesh(&segments))),
        MeshMaterial3d(materials.add(line_material(category.colour, LESSON_LINE_OPACITY))),
        Transform::IDENTITY,
        NoFrustumCulling,
        ChildOf(tree),
    ));

    let node_material = materials.add(line_material(category.colour, LESSON_NODE_OPACITY));
    for (i, lesson) in category.lessons.iter().enumerate() {
        let node = commands
            .spawn((
                Mesh3d(shared.lesson_node.clone()),
                MeshMaterial3d(node_material.clone()),
                Transform::from_xyz(0.0, lesson_node_y(i), 0.0),
                ChildOf(tree),
            ))
            .id();
        labels.push(spawn_lesson_label(
            commands,
            label_root,
            node,
            i + 1,
            lesson,
            category.colour,
        ));
    }
}

/// Gradient lines between consecutive sprints, in document order.
fn spawn_sprint_connectors(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    sprints: &[Sprint],
) {
    let material = materials.add(line_material(Color::WHITE, SPRINT_CONNECTOR_OPACITY));

    for pair in sprints.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        commands.spawn((
            Mesh3d(meshes.add(gradient_line_mesh(
                from.position,
                to.position,
                from.colour,
                to.colour,
            ))),
            MeshMaterial3d(material.clone()),
            Transform::IDENTITY,
            Visibility::Visible,
            NoFrustumCulling,
            SprintConnector,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::curriculum::fixtures;

    fn build(curriculum: Curriculum) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default()))
            .init_asset::<Mesh>()
            .init_asset::<StandardMaterial>()
            .init_asset::<Image>()
            .insert_resource(curriculum)
            .insert_resource(LoadingProgress {
                document_resolved: true,
                ..default()
            })
            .add_systems(Startup, crate::engine::labels::spawn_label_root)
            .add_systems(Update, build_scene);
        app.update();
        app
    }

    #[test]
    fn builds_markers_details_and_connectors() {
        let mut app = build(fixtures::two_sprints());
        let world = app.world_mut();

        assert!(world.resource::<LoadingProgress>().scene_built);
        assert_eq!(world.query::<&SprintMarker>().iter(world).count(), 2);
        assert_eq!(world.query::<&SprintConnector>().iter(world).count(), 1);

        let mut groups: Vec<_> = world
            .query::<(&DetailGroup, &Visibility)>()
            .iter(world)
            .map(|(group, visibility)| (group.sprint_index, group.labels.len(), *visibility))
            .collect();
        groups.sort_by_key(|(index, ..)| *index);
        // A: 2 category labels + 5 lesson labels; B: 1 + 1.
        assert_eq!(
            groups,
            vec![(0, 7, Visibility::Hidden), (1, 2, Visibility::Hidden)]
        );
    }

    #[test]
    fn builds_nothing_for_an_empty_curriculum() {
        let mut app = build(Curriculum::default());
        let world = app.world_mut();
        assert!(!world.resource::<LoadingProgress>().scene_built);
        assert_eq!(world.query::<&SprintMarker>().iter(world).count(), 0);
    }
}
