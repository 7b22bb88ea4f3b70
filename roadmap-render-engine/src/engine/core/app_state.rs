use crate::engine::assets::curriculum::Curriculum;
use crate::engine::loading::progress::LoadingProgress;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    /// The document failed to load or holds no sprints. Nothing is indexed.
    NoData,
    Running,
}

/// Leave the loading state once the document is resolved and, when there is
/// data, the scene has been built.
pub fn transition_after_load(
    loading_progress: Res<LoadingProgress>,
    curriculum: Res<Curriculum>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !loading_progress.document_resolved {
        return;
    }

    if curriculum.is_empty() {
        println!("→ No roadmap data, transitioning to NoData state");
        next_state.set(AppState::NoData);
    } else if loading_progress.scene_built {
        println!("→ Scene ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
