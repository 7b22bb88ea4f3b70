use crate::engine::assets::curriculum::Curriculum;
use crate::engine::core::app_state::AppState;
use crate::navigation::controller::ViewChanged;
use crate::navigation::info_panel::panel_title;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;

/// Push every view change to the host page.
pub fn notify_view_changes(
    mut changes: EventReader<ViewChanged>,
    curriculum: Res<Curriculum>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for change in changes.read() {
        let mut params = change.state.to_json();
        params["title"] = panel_title(&change.state, &curriculum).into();
        rpc_interface.send_notification("view_state_changed", params);
    }
}

pub fn loading_state_name(state: &AppState) -> &'static str {
    match state {
        AppState::Loading => "loading",
        AppState::NoData => "no_data",
        AppState::Running => "ready",
    }
}

/// Tell the host page when loading starts, succeeds or finds no data.
pub fn notify_loading_state(
    state: Res<State<AppState>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if state.is_changed() {
        rpc_interface.send_notification(
            "loading_state",
            serde_json::json!({ "state": loading_state_name(state.get()) }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::curriculum::fixtures;
    use crate::navigation::actions::NavigationAction;
    use crate::navigation::controller::NavigationController;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn view_changes_are_forwarded_with_the_panel_title() {
        let curriculum = fixtures::two_sprints();
        let mut app = App::new();
        app.insert_resource(curriculum.clone())
            .init_resource::<WebRpcInterface>()
            .add_event::<ViewChanged>()
            .add_systems(Update, notify_view_changes);

        let mut controller = NavigationController::default();
        let change = controller.apply(NavigationAction::Focus, &curriculum).unwrap();
        app.world_mut().send_event(change);
        app.update();

        let rpc = app.world().resource::<WebRpcInterface>();
        let notifications = rpc.pending_notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].method, "view_state_changed");
        assert_eq!(notifications[0].params["mode"], "categories");
        assert_eq!(notifications[0].params["selected_sprint"], 0);
        assert_eq!(notifications[0].params["title"], "A1");
    }

    #[test]
    fn loading_state_is_sent_once_per_state() {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<AppState>()
            .init_resource::<WebRpcInterface>()
            .add_systems(Update, notify_loading_state);

        app.update();
        app.update();
        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::NoData);
        app.update();

        let states: Vec<_> = app
            .world()
            .resource::<WebRpcInterface>()
            .pending_notifications()
            .iter()
            .map(|n| n.params["state"].as_str().unwrap_or_default().to_string())
            .collect();
        assert_eq!(states, vec!["loading", "no_data"]);
    }
}
