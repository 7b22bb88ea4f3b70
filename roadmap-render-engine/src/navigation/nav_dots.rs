use crate::engine::assets::curriculum::Curriculum;
use crate::navigation::view_state::{ViewMode, ViewState};
use bevy::prelude::*;

/// One navigation dot: a sprint in the sprint views, a category of the
/// selected sprint in the categories view.
#[derive(Debug, Clone, PartialEq)]
pub struct NavDotSpec {
    pub index: usize,
    pub label: String,
    pub colour: Color,
    pub active: bool,
}

pub fn nav_dots(state: &ViewState, curriculum: &Curriculum) -> Vec<NavDotSpec> {
    match state.mode() {
        ViewMode::Sprints | ViewMode::Overview => curriculum
            .sprints()
            .iter()
            .map(|sprint| NavDotSpec {
                index: sprint.index,
                label: sprint.title.clone(),
                colour: sprint.colour,
                active: sprint.index == state.current_sprint(),
            })
            .collect(),
        ViewMode::Categories { sprint } => curriculum
            .sprint(sprint)
            .map(|sprint| {
                sprint
                    .categories
                    .iter()
                    .enumerate()
                    .map(|(index, category)| NavDotSpec {
                        index,
                        label: category.title.clone(),
                        colour: category.colour,
                        active: index == state.current_category(),
                    })
                    .collect()
            })
            .unwrap_or_default(),
    }
}
