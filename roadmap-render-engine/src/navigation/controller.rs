use crate::engine::assets::curriculum::{Curriculum, Sprint};
use crate::engine::scene::layout::category_offset_x;
use crate::navigation::actions::NavigationAction;
use crate::navigation::view_state::{ViewMode, ViewState};
use bevy::prelude::*;
use constants::animation::{CAMERA_MOVE_SECS, OVERVIEW_MOVE_SECS};
use constants::camera_framing::*;

/// Camera eye/target pair to animate towards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraShot {
    pub eye: Vec3,
    pub target: Vec3,
    pub duration: f32,
}

impl CameraShot {
    pub fn wide() -> Self {
        Self {
            eye: WIDE_EYE,
            target: WIDE_TARGET,
            duration: CAMERA_MOVE_SECS,
        }
    }

    pub fn overview() -> Self {
        Self {
            eye: OVERVIEW_EYE,
            target: OVERVIEW_TARGET,
            duration: OVERVIEW_MOVE_SECS,
        }
    }

    /// Close-up of a sprint marker while browsing sprints.
    pub fn sprint(position: Vec3) -> Self {
        Self {
            eye: Vec3::new(position.x, SPRINT_EYE_HEIGHT, position.z + SPRINT_EYE_DISTANCE),
            target: Vec3::new(position.x, SPRINT_TARGET_HEIGHT, position.z),
            duration: CAMERA_MOVE_SECS,
        }
    }

    /// Framing of a sprint's whole detail group on entering the categories view.
    pub fn sprint_detail(position: Vec3) -> Self {
        Self {
            eye: Vec3::new(position.x, DETAIL_EYE_HEIGHT, position.z + DETAIL_EYE_DISTANCE),
            target: Vec3::new(position.x, DETAIL_TARGET_HEIGHT, position.z),
            duration: CAMERA_MOVE_SECS,
        }
    }

    /// Framing of one category's lesson tree.
    pub fn category(sprint: &Sprint, index: usize) -> Self {
        let x = sprint.position.x + category_offset_x(sprint.category_count(), index);
        let z = sprint.position.z;
        Self {
            eye: Vec3::new(x, CATEGORY_EYE_HEIGHT, z + CATEGORY_EYE_DISTANCE),
            target: Vec3::new(x, CATEGORY_TARGET_HEIGHT, z),
            duration: CAMERA_MOVE_SECS,
        }
    }
}

/// Which groups of scene objects are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneLayout {
    /// Every sprint marker at its own height with inter-sprint connectors,
    /// no detail groups or detail labels.
    AllSprints,
    /// Only this sprint's marker (raised) and its detail group and labels.
    FocusedSprint(usize),
}

/// Emitted after every applied navigation action.
///
/// `layout` and `shot` are `None` when the action leaves visibility or the
/// camera untouched; the HUD is refreshed regardless.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ViewChanged {
    pub state: ViewState,
    pub layout: Option<SceneLayout>,
    pub shot: Option<CameraShot>,
}

/// Owns the navigation state and maps actions onto state transitions.
#[derive(Resource, Debug, Clone, Default)]
pub struct NavigationController {
    state: ViewState,
}

impl NavigationController {
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Return to the initial sprints view, keeping the sprint cursor.
    pub fn reset(&mut self) -> ViewChanged {
        self.show_sprints()
    }

    /// Apply one action. Returns `None` when the action has no effect in the
    /// current state, which includes every action on an empty curriculum.
    pub fn apply(
        &mut self,
        action: NavigationAction,
        curriculum: &Curriculum,
    ) -> Option<ViewChanged> {
        if curriculum.is_empty() {
            return None;
        }
        // The cursor is only ever set modulo the sprint count, but the
        // curriculum may have been swapped since.
        self.state.current_sprint %= curriculum.len();

        match action {
            NavigationAction::Previous => self.step(-1, curriculum),
            NavigationAction::Next => self.step(1, curriculum),
            NavigationAction::Focus => self.focus(curriculum),
            NavigationAction::Back => match self.state.mode {
                ViewMode::Categories { .. } => Some(self.show_sprints()),
                _ => None,
            },
            NavigationAction::ToggleOverview => match self.state.mode {
                ViewMode::Overview => Some(self.show_sprints()),
                _ => Some(self.show_overview()),
            },
            NavigationAction::JumpTo(index) => self.jump_to(index, curriculum),
        }
    }

    fn step(&mut self, direction: isize, curriculum: &Curriculum) -> Option<ViewChanged> {
        match self.state.mode {
            ViewMode::Sprints => {
                let index = wrap_index(self.state.current_sprint, direction, curriculum.len());
                Some(self.aim_at_sprint(index, curriculum))
            }
            ViewMode::Overview => {
                self.state.current_sprint =
                    wrap_index(self.state.current_sprint, direction, curriculum.len());
                Some(self.changed(None, None))
            }
            ViewMode::Categories { sprint } => {
                let sprint = curriculum.sprint(sprint)?;
                if sprint.categories.is_empty() {
                    return None;
                }
                let index =
                    wrap_index(self.state.current_category, direction, sprint.category_count());
                Some(self.aim_at_category(sprint, index))
            }
        }
    }

    fn focus(&mut self, curriculum: &Curriculum) -> Option<ViewChanged> {
        match self.state.mode {
            ViewMode::Sprints => {
                let sprint = curriculum.sprint(self.state.current_sprint)?;
                self.state.mode = ViewMode::Categories {
                    sprint: sprint.index,
                };
                self.state.current_category = 0;
                Some(self.changed(
                    Some(SceneLayout::FocusedSprint(sprint.index)),
                    Some(CameraShot::sprint_detail(sprint.position)),
                ))
            }
            ViewMode::Categories { sprint } => {
                let sprint = curriculum.sprint(sprint)?;
                if sprint.categories.is_empty() {
                    let shot = CameraShot::sprint_detail(sprint.position);
                    return Some(self.changed(None, Some(shot)));
                }
                Some(self.aim_at_category(sprint, self.state.current_category))
            }
            ViewMode::Overview => Some(self.show_sprints()),
        }
    }

    fn jump_to(&mut self, index: usize, curriculum: &Curriculum) -> Option<ViewChanged> {
        match self.state.mode {
            ViewMode::Sprints => Some(self.aim_at_sprint(index % curriculum.len(), curriculum)),
            ViewMode::Overview => {
                self.state.current_sprint = index % curriculum.len();
                Some(self.changed(None, None))
            }
            ViewMode::Categories { sprint } => {
                let sprint = curriculum.sprint(sprint)?;
                if sprint.categories.is_empty() {
                    return None;
                }
                Some(self.aim_at_category(sprint, index % sprint.category_count()))
            }
        }
    }

    fn aim_at_sprint(&mut self, index: usize, curriculum: &Curriculum) -> ViewChanged {
        self.state.current_sprint = index;
        let shot = curriculum
            .sprint(index)
            .map(|sprint| CameraShot::sprint(sprint.position));
        self.changed(None, shot)
    }

    fn aim_at_category(&mut self, sprint: &Sprint, index: usize) -> ViewChanged {
        self.state.current_category = index;
        self.changed(None, Some(CameraShot::category(sprint, index)))
    }

    fn show_sprints(&mut self) -> ViewChanged {
        self.state.mode = ViewMode::Sprints;
        self.changed(Some(SceneLayout::AllSprints), Some(CameraShot::wide()))
    }

    fn show_overview(&mut self) -> ViewChanged {
        self.state.mode = ViewMode::Overview;
        self.changed(Some(SceneLayout::AllSprints), Some(CameraShot::overview()))
    }

    fn changed(&self, layout: Option<SceneLayout>, shot: Option<CameraShot>) -> ViewChanged {
        ViewChanged {
            state: self.state,
            layout,
            shot,
        }
    }
}

/// Step `index` by `direction` within `0..len`, wrapping at both ends.
pub fn wrap_index(index: usize, direction: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as isize + direction).rem_euclid(len as isize) as usize
}
