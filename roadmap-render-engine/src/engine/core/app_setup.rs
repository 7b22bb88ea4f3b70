use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::camera_framing::{FAR_PLANE, FIELD_OF_VIEW_DEGREES, NEAR_PLANE};
use constants::palette::{AMBIENT_BRIGHTNESS, BACKGROUND, FOG_DENSITY};
// Crate engine modules
use crate::engine::assets::curriculum::Curriculum;
use crate::engine::assets::roadmap_document::RoadmapDocument;
use crate::engine::camera::camera_rig::{CameraRig, camera_controller};
use crate::engine::core::app_state::{AppState, transition_after_load};
use crate::engine::core::settings::{PlaceholderRng, RoadmapSettings};
use crate::engine::core::window_config::create_window_config;
use crate::engine::labels::projection::project_floating_labels;
use crate::engine::labels::spawn_label_root;
use crate::engine::loading::diagram_loader::attach_loaded_diagrams;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::roadmap_loader::{RoadmapLoader, load_roadmap_system, start_loading};
use crate::engine::scene::lighting::spawn_lighting;
use crate::engine::scene::sprint_builder::build_scene;
use crate::engine::scene::star_field::spawn_star_field;
use crate::engine::systems::ambient_motion::{
    AmbientMotion, ambient_motion_running, pulse_active_sprint, spin_sprint_rings,
    spin_star_field, start_ambient_motion, tick_ambient_motion,
};
use crate::engine::systems::host_notifications::{notify_loading_state, notify_view_changes};
use crate::engine::systems::view_sync::{advance_height_tweens, apply_view_changes};
// Navigation, input, HUD and host RPC
use crate::input::InputRouterPlugin;
use crate::navigation::NavigationPlugin;
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::ui::HudPlugin;

pub fn create_app() -> App {
    let mut app = App::new();
    let settings = RoadmapSettings::default();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        // Registers RoadmapDocument as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<RoadmapDocument>::new(&["json"]))
        .add_plugins(NavigationPlugin)
        .add_plugins(WebRpcPlugin)
        .add_plugins(HudPlugin)
        .add_plugins(InputRouterPlugin);

    // Initialise resources early
    app.insert_resource(PlaceholderRng::from_settings(&settings))
        .insert_resource(settings)
        .insert_resource(ClearColor(BACKGROUND))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        })
        .init_resource::<Curriculum>()
        .init_resource::<LoadingProgress>()
        .init_resource::<RoadmapLoader>()
        .init_resource::<CameraRig>()
        .init_resource::<AmbientMotion>();

    // State-based system scheduling
    app.add_systems(
        Startup,
        (
            spawn_camera,
            spawn_lighting,
            spawn_star_field,
            spawn_label_root,
            start_loading,
            start_ambient_motion,
        )
            .chain(),
    )
    .add_systems(
        Update,
        (load_roadmap_system, build_scene, transition_after_load)
            .chain()
            .run_if(in_state(AppState::Loading)),
    );

    // Runtime systems - only run once the scene is built
    let runtime_systems = (
        (apply_view_changes, advance_height_tweens).chain(),
        camera_controller,
        attach_loaded_diagrams,
        notify_view_changes,
    );
    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)));

    // Cosmetic motion, gated on the explicit start/stop clock
    app.add_systems(
        Update,
        (
            tick_ambient_motion,
            (spin_star_field, spin_sprint_rings, pulse_active_sprint)
                .run_if(ambient_motion_running),
        )
            .chain(),
    );

    app.add_systems(
        Update,
        (
            project_floating_labels.after(camera_controller),
            notify_loading_state,
        ),
    );

    app
}

/// Scene camera at the wide framing, with the clear colour as exponential fog.
fn spawn_camera(mut commands: Commands, rig: Res<CameraRig>) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FIELD_OF_VIEW_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        DistanceFog {
            color: BACKGROUND,
            falloff: FogFalloff::Exponential {
                density: FOG_DENSITY,
            },
            ..default()
        },
        rig.transform(),
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
