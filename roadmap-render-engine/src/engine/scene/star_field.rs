use super::components::StarField;
use crate::engine::core::settings::PlaceholderRng;
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;
use constants::layout::{STAR_COUNT, STAR_FIELD_EXTENT};
use constants::palette::{STAR_COLOURS, STAR_OPACITY};
use rand::Rng;

/// Random star positions in a cube of edge `extent` centred on the origin,
/// each with a colour drawn from the cumulative palette.
pub fn scatter_stars(rng: &mut impl Rng, count: usize, extent: f32) -> Vec<(Vec3, [f32; 3])> {
    let half = extent / 2.0;
    (0..count)
        .map(|_| {
            let position = Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            );
            (position, pick_star_colour(rng.gen_range(0.0..1.0)))
        })
        .collect()
}

fn pick_star_colour(roll: f32) -> [f32; 3] {
    STAR_COLOURS
        .iter()
        .find(|(threshold, _)| roll < *threshold)
        .or(STAR_COLOURS.last())
        .map(|(_, colour)| *colour)
        .unwrap_or([1.0, 1.0, 1.0])
}

pub fn spawn_star_field(
    mut commands: Commands,
    mut rng: ResMut<PlaceholderRng>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let stars = scatter_stars(&mut rng.0, STAR_COUNT, STAR_FIELD_EXTENT);

    let positions: Vec<[f32; 3]> = stars.iter().map(|(p, _)| p.to_array()).collect();
    let colours: Vec<[f32; 4]> = stars
        .iter()
        .map(|(_, c)| LinearRgba::from(Color::srgb(c[0], c[1], c[2])).to_f32_array())
        .collect();

    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colours);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE.with_alpha(STAR_OPACITY),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            fog_enabled: false,
            ..default()
        })),
        Transform::IDENTITY,
        NoFrustumCulling,
        StarField,
        Name::new("Star field"),
    ));
}
