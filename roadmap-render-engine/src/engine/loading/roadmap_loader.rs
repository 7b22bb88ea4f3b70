use crate::engine::assets::curriculum::{Curriculum, RoadmapError};
use crate::engine::assets::roadmap_document::RoadmapDocument;
use crate::engine::core::settings::{PlaceholderRng, RoadmapSettings};
use crate::engine::loading::progress::LoadingProgress;
use bevy::asset::LoadState;
use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct RoadmapLoader {
    handle: Option<Handle<RoadmapDocument>>,
}

// Start the loading process
pub fn start_loading(
    mut roadmap_loader: ResMut<RoadmapLoader>,
    settings: Res<RoadmapSettings>,
    asset_server: Res<AssetServer>,
) {
    info!("Loading roadmap document from '{}'", settings.document_path);
    roadmap_loader.handle = Some(asset_server.load(settings.document_path.clone()));
}

/// Resolve the document into the curriculum resource. A failed load or an
/// invalid document leaves the curriculum empty.
pub fn load_roadmap_system(
    mut loading_progress: ResMut<LoadingProgress>,
    roadmap_loader: Res<RoadmapLoader>,
    settings: Res<RoadmapSettings>,
    mut rng: ResMut<PlaceholderRng>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    documents: Res<Assets<RoadmapDocument>>,
) {
    if loading_progress.document_resolved {
        return;
    }
    let Some(ref handle) = roadmap_loader.handle else {
        return;
    };

    let curriculum = if let Some(document) = documents.get(handle) {
        match Curriculum::from_document(document, &mut rng.0) {
            Ok(curriculum) => {
                println!(
                    "✓ Roadmap loaded: {} sprints, {} lessons",
                    curriculum.len(),
                    document.lesson_count()
                );
                curriculum
            }
            Err(error) => {
                error!("{error}");
                Curriculum::default()
            }
        }
    } else if let Some(LoadState::Failed(reason)) = asset_server.get_load_state(handle) {
        let error = RoadmapError::Load {
            path: settings.document_path.clone(),
            reason: reason.to_string(),
        };
        error!("{error}");
        Curriculum::default()
    } else {
        return;
    };

    commands.insert_resource(curriculum);
    loading_progress.document_resolved = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_common_assets::json::JsonAssetPlugin;
    use std::fs;
    use std::path::Path;
    use std::time::Duration;

    const VALID_DOCUMENT: &str = r##"{ "sprints": [ {
        "position": { "x": 0, "y": 0, "z": 0 }, "color": "#00d4ff", "title": "Intro",
        "categories": [ { "color": "#7b2fff", "title": "Basics", "lessons": ["One", "Two"] } ]
    } ] }"##;

    const BAD_COLOUR_DOCUMENT: &str = r##"{ "sprints": [ {
        "position": { "x": 0, "y": 0, "z": 0 }, "color": "not-a-colour", "title": "Intro",
        "categories": []
    } ] }"##;

    fn loader_app(asset_root: &Path, document_path: &str) -> App {
        let settings = RoadmapSettings {
            document_path: document_path.to_string(),
            seed: Some(7),
        };
        let mut app = App::new();
        app.add_plugins((
            MinimalPlugins,
            AssetPlugin {
                file_path: asset_root.to_string_lossy().into_owned(),
                ..default()
            },
            JsonAssetPlugin::<RoadmapDocument>::new(&["json"]),
        ))
        .insert_resource(PlaceholderRng::from_settings(&settings))
        .insert_resource(settings)
        .init_resource::<Curriculum>()
        .init_resource::<LoadingProgress>()
        .init_resource::<RoadmapLoader>()
        .add_systems(Startup, start_loading)
        .add_systems(Update, load_roadmap_system);
        app
    }

    /// Step frames until the loader resolves the document or gives up.
    fn resolve(app: &mut App) -> bool {
        for _ in 0..400 {
            app.update();
            if app.world().resource::<LoadingProgress>().document_resolved {
                return true;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        false
    }

    fn write_document(root: &Path, name: &str, contents: &str) {
        let dir = root.join("roadmap");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn valid_document_becomes_the_curriculum() {
        let root = tempfile::tempdir().unwrap();
        write_document(root.path(), "data.json", VALID_DOCUMENT);

        let mut app = loader_app(root.path(), "roadmap/data.json");
        assert!(resolve(&mut app));
        let curriculum = app.world().resource::<Curriculum>();
        assert_eq!(curriculum.len(), 1);
        assert_eq!(curriculum.sprints()[0].total_lessons(), 2);
    }

    #[test]
    fn missing_document_resolves_to_an_empty_curriculum() {
        let root = tempfile::tempdir().unwrap();

        let mut app = loader_app(root.path(), "roadmap/missing.json");
        assert!(resolve(&mut app));
        assert!(app.world().resource::<Curriculum>().is_empty());
    }

    #[test]
    fn malformed_document_resolves_to_an_empty_curriculum() {
        let root = tempfile::tempdir().unwrap();
        write_document(root.path(), "data.json", "{ not json");

        let mut app = loader_app(root.path(), "roadmap/data.json");
        assert!(resolve(&mut app));
        assert!(app.world().resource::<Curriculum>().is_empty());
    }

    #[test]
    fn invalid_colour_resolves_to_an_empty_curriculum() {
        let root = tempfile::tempdir().unwrap();
        write_document(root.path(), "data.json", BAD_COLOUR_DOCUMENT);

        let mut app = loader_app(root.path(), "roadmap/data.json");
        assert!(resolve(&mut app));
        assert!(app.world().resource::<Curriculum>().is_empty());
    }
}
