use crate::engine::assets::curriculum::Curriculum;
use crate::engine::labels::LabelRoot;
use crate::engine::labels::content::spawn_diagram_label;
use crate::engine::scene::components::{DetailGroup, DiagramPanel};
use crate::engine::scene::connectors::{line_material, rectangle_outline_mesh};
use crate::engine::scene::layout::diagram_placement;
use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::render::view::NoFrustumCulling;
use constants::palette::{DIAGRAM_FRAME_OPACITY, DIAGRAM_OPACITY};
use constants::path::DIAGRAM_DIRECTORY;

/// Diagram image requested for a detail group, attached once decoded.
#[derive(Component, Debug)]
pub struct PendingDiagram {
    image: Handle<Image>,
    path: String,
}

impl PendingDiagram {
    pub fn request(asset_server: &AssetServer, path: &str) -> Self {
        let path = diagram_asset_path(path);
        Self {
            image: asset_server.load(path.clone()),
            path,
        }
    }
}

/// Resolve a document image reference against the diagram directory.
/// References that already carry a directory are used as given.
pub fn diagram_asset_path(reference: &str) -> String {
    let reference = reference.trim().trim_start_matches("./");
    if reference.contains('/') {
        reference.to_string()
    } else {
        format!("{DIAGRAM_DIRECTORY}/{reference}")
    }
}

/// Attach the textured panel, frame and label to each detail group whose
/// diagram has decoded. Failed images are logged and dropped.
pub fn attach_loaded_diagrams(
    mut commands: Commands,
    mut groups: Query<(Entity, &PendingDiagram, &mut DetailGroup, &Visibility)>,
    curriculum: Res<Curriculum>,
    label_root: Res<LabelRoot>,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, pending, mut group, visibility) in &mut groups {
        if let Some(LoadState::Failed(reason)) = asset_server.get_load_state(&pending.image) {
            warn!("Diagram '{}' failed to load: {reason}", pending.path);
            commands.entity(entity).remove::<PendingDiagram>();
            continue;
        }
        let Some(image) = images.get(&pending.image) else {
            continue;
        };
        commands.entity(entity).remove::<PendingDiagram>();

        let Some(sprint) = curriculum.sprint(group.sprint_index) else {
            continue;
        };
        let Some(placement) = diagram_placement(sprint.category_count(), image.size()) else {
            warn!("Diagram '{}' has no usable size", pending.path);
            continue;
        };

        let panel = commands
            .spawn((
                Mesh3d(meshes.add(Rectangle::from_size(placement.size))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::WHITE.with_alpha(DIAGRAM_OPACITY),
                    base_color_texture: Some(pending.image.clone()),
                    alpha_mode: AlphaMode::Blend,
                    unlit: true,
                    double_sided: true,
                    cull_mode: None,
                    ..default()
                })),
                Transform::from_translation(placement.centre),
                DiagramPanel,
                ChildOf(entity),
            ))
            .id();

        commands.spawn((
            Mesh3d(meshes.add(rectangle_outline_mesh(placement.size))),
            MeshMaterial3d(materials.add(line_material(sprint.colour, DIAGRAM_FRAME_OPACITY))),
            Transform::from_xyz(0.0, 0.0, 0.01),
            NoFrustumCulling,
            ChildOf(panel),
        ));

        let label = spawn_diagram_label(
            &mut commands,
            label_root.0,
            panel,
            placement.label_offset(),
            sprint,
        );
        commands.entity(label).insert(*visibility);
        group.labels.push(label);

        info!("Attached diagram '{}' to sprint {}", pending.path, sprint.index);
    }
}
