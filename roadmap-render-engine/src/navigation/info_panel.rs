use crate::engine::assets::curriculum::Curriculum;
use crate::navigation::view_state::{ViewMode, ViewState};
use bevy::prelude::*;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelScope {
    Sprint,
    Category,
}

/// Contents of the 2D info panel for the current view.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoPanelContent {
    pub scope: PanelScope,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub accent: Color,
    /// Lessons covered by the panel: the sprint total or the category's own.
    pub item_count: usize,
    /// Progress bar fill in percent. Always 0 for sprints; for categories a
    /// random placeholder in `0..100`, there is no progress data behind it.
    pub progress_percent: u32,
}

impl InfoPanelContent {
    /// Build the panel for `state`. `None` only for an empty curriculum.
    pub fn for_state(
        state: &ViewState,
        curriculum: &Curriculum,
        rng: &mut impl Rng,
    ) -> Option<Self> {
        let sprint = curriculum.sprint(state.focused_sprint())?;

        if let ViewMode::Categories { .. } = state.mode() {
            if let Some(category) = sprint.category(state.current_category()) {
                let lessons = category.lessons.len();
                return Some(Self {
                    scope: PanelScope::Category,
                    icon: category.icon.clone(),
                    title: category.title.clone(),
                    subtitle: join_details(&category.subtitle, &[counted(lessons, "lesson")]),
                    accent: category.colour,
                    item_count: lessons,
                    progress_percent: rng.gen_range(0..100),
                });
            }
        }

        let lessons = sprint.total_lessons();
        Some(Self {
            scope: PanelScope::Sprint,
            icon: sprint.icon.clone(),
            title: sprint.title.clone(),
            subtitle: join_details(
                &sprint.subtitle,
                &[
                    counted(sprint.category_count(), "category"),
                    counted(lessons, "lesson"),
                ],
            ),
            accent: sprint.colour,
            item_count: lessons,
            progress_percent: 0,
        })
    }
}

/// Title the info panel shows for `state`, without drawing placeholder values.
pub fn panel_title(state: &ViewState, curriculum: &Curriculum) -> Option<String> {
    let sprint = curriculum.sprint(state.focused_sprint())?;
    let category = match state.mode() {
        ViewMode::Categories { .. } => sprint.category(state.current_category()),
        _ => None,
    };
    Some(category.map_or(&sprint.title, |c| &c.title).clone())
}

fn counted(count: usize, noun: &str) -> String {
    match (count, noun) {
        (1, _) => format!("1 {noun}"),
        (_, "category") => format!("{count} categories"),
        _ => format!("{count} {noun}s"),
    }
}

fn join_details(subtitle: &str, details: &[String]) -> String {
    std::iter::once(subtitle)
        .filter(|s| !s.is_empty())
        .chain(details.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" • ")
}
