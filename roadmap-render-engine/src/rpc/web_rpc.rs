use crate::engine::assets::curriculum::Curriculum;
use crate::navigation::actions::{ActionSource, NavigationAction, NavigationRequest};
use crate::navigation::controller::NavigationController;
use crate::navigation::view_state::ViewState;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication between the host page and Bevy.
/// Handles both request-response patterns and notification broadcasting.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    #[cfg(test)]
    pub(crate) fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }
}

/// Plugin establishing WebRPC communication layer for iframe-based deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
        }
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing an incoming RPC message from the host page.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    curriculum: Res<Curriculum>,
    controller: Res<NavigationController>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut navigation_events: EventWriter<NavigationRequest>,
) {
    // Requests queued this frame are applied in order after this system, so
    // each one is answered against the state its predecessors leave behind.
    let mut preview = controller.clone();

    for event in events.read() {
        let request = match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => request,
            Err(parse_error) => {
                warn!("Discarding malformed RPC message: {}", parse_error);
                continue;
            }
        };

        let outcome = dispatch(&request, &mut preview, &curriculum);

        if let Some(action) = outcome.action {
            navigation_events.write(NavigationRequest::new(action, ActionSource::Rpc));
            info!("Navigation event dispatched from RPC: {:?}", action);
        }
        if let Some(response) = outcome.response {
            rpc_interface.queue_response(response);
        }
    }
}

/// What a request asks of the engine: a navigation action to apply and the
/// response owed to the caller. Notifications (no ID) get no response.
#[derive(Debug)]
pub struct RpcOutcome {
    pub action: Option<NavigationAction>,
    pub response: Option<RpcResponse>,
}

/// Map one request onto a navigation action and its response.
///
/// The action is applied to `preview` so the response can say whether it
/// changed the view: `applied` is false for actions that are no-ops in the
/// current mode, such as `back` outside the categories view.
pub fn dispatch(
    request: &RpcRequest,
    preview: &mut NavigationController,
    curriculum: &Curriculum,
) -> RpcOutcome {
    let result = if request.jsonrpc != "2.0" {
        Err(RpcError::invalid_request("Expected jsonrpc '2.0'"))
    } else {
        match request.method.as_str() {
            "navigate" => parse_direction(&request.params),
            "focus" => Ok(NavigationAction::Focus),
            "back" => Ok(NavigationAction::Back),
            "toggle_overview" => Ok(NavigationAction::ToggleOverview),
            "jump_to" => parse_jump(&request.params),
            "get_view_state" => {
                return RpcOutcome {
                    action: None,
                    response: respond(
                        request,
                        Ok(view_state_result(&preview.state(), curriculum)),
                    ),
                };
            }
            _ => {
                warn!("Unknown RPC method: {}", request.method);
                Err(RpcError::method_not_found(&request.method))
            }
        }
    };

    let result = result.and_then(|action| {
        if curriculum.is_empty() {
            Err(RpcError::internal_error("No roadmap data loaded"))
        } else {
            Ok(action)
        }
    });

    match result {
        Ok(action) => {
            let applied = preview.apply(action, curriculum).is_some();
            RpcOutcome {
                action: Some(action),
                response: respond(
                    request,
                    Ok(serde_json::json!({
                        "success": true,
                        "applied": applied,
                        "method": request.method,
                        "view_state": preview.state().to_json(),
                    })),
                ),
            }
        }
        Err(error) => RpcOutcome {
            action: None,
            response: respond(request, Err(error)),
        },
    }
}

fn parse_direction(params: &serde_json::Value) -> Result<NavigationAction, RpcError> {
    #[derive(serde::Deserialize)]
    struct NavigateParams {
        direction: String,
    }

    let parsed = serde_json::from_value::<NavigateParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected 'direction' parameter"))?;

    match NavigationAction::from_name(&parsed.direction) {
        Some(action @ (NavigationAction::Next | NavigationAction::Previous)) => Ok(action),
        _ => Err(RpcError::invalid_params(&format!(
            "Unknown direction: {}",
            parsed.direction
        ))),
    }
}

fn parse_jump(params: &serde_json::Value) -> Result<NavigationAction, RpcError> {
    #[derive(serde::Deserialize)]
    struct JumpParams {
        index: usize,
    }

    serde_json::from_value::<JumpParams>(params.clone())
        .map(|parsed| NavigationAction::JumpTo(parsed.index))
        .map_err(|_| RpcError::invalid_params("Expected non-negative 'index' parameter"))
}

fn view_state_result(state: &ViewState, curriculum: &Curriculum) -> serde_json::Value {
    let mut result = state.to_json();
    result["sprint_count"] = curriculum.len().into();
    result["has_data"] = (!curriculum.is_empty()).into();
    result
}

/// Wrap a result into a response, or nothing for notifications.
fn respond(
    request: &RpcRequest,
    result: Result<serde_json::Value, RpcError>,
) -> Option<RpcResponse> {
    let id = request.id.clone()?;
    let (result, error) = match result {
        Ok(value) => (Some(value), None),
        Err(error) => (None, Some(error)),
    };
    Some(RpcResponse {
        jsonrpc: "2.0".to_string(),
        result,
        error,
        id: Some(id),
    })
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to the parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_request(message: &str) -> Self {
        Self {
            code: -32600,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::curriculum::fixtures;
    use serde_json::json;

    fn request(method: &str, params: serde_json::Value) -> RpcRequest {
        serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 7,
        }))
        .unwrap()
    }

    fn error_code(outcome: &RpcOutcome) -> Option<i32> {
        outcome
            .response
            .as_ref()
            .and_then(|r| r.error.as_ref())
            .map(|e| e.code)
    }

    fn result_of(outcome: RpcOutcome) -> serde_json::Value {
        outcome.response.unwrap().result.unwrap()
    }

    #[test]
    fn navigation_methods_map_to_actions() {
        let curriculum = fixtures::two_sprints();
        let cases = [
            ("navigate", json!({"direction": "next"}), NavigationAction::Next),
            ("navigate", json!({"direction": "previous"}), NavigationAction::Previous),
            ("focus", json!(null), NavigationAction::Focus),
            ("back", json!({}), NavigationAction::Back),
            ("toggle_overview", json!(null), NavigationAction::ToggleOverview),
            ("jump_to", json!({"index": 1}), NavigationAction::JumpTo(1)),
        ];

        for (method, params, expected) in cases {
            let mut controller = NavigationController::default();
            let outcome = dispatch(&request(method, params), &mut controller, &curriculum);
            assert_eq!(outcome.action, Some(expected), "{method}");
            let response = outcome.response.unwrap();
            assert_eq!(response.id, Some(json!(7)));
            assert_eq!(response.result.unwrap()["success"], true);
        }
    }

    #[test]
    fn responses_report_whether_the_view_changed() {
        let curriculum = fixtures::three_sprints_one_bare();
        let mut controller = NavigationController::default();

        let result = result_of(dispatch(&request("back", json!({})), &mut controller, &curriculum));
        assert_eq!(result["applied"], false);
        assert_eq!(result["view_state"]["mode"], "sprints");

        let result = result_of(dispatch(&request("focus", json!({})), &mut controller, &curriculum));
        assert_eq!(result["applied"], true);
        assert_eq!(result["view_state"]["mode"], "categories");

        let result = result_of(dispatch(&request("back", json!({})), &mut controller, &curriculum));
        assert_eq!(result["applied"], true);
        assert_eq!(result["view_state"]["mode"], "sprints");

        // Category cycling inside a sprint without categories changes nothing.
        dispatch(&request("jump_to", json!({"index": 2})), &mut controller, &curriculum);
        dispatch(&request("focus", json!({})), &mut controller, &curriculum);
        let next = request("navigate", json!({"direction": "next"}));
        let result = result_of(dispatch(&next, &mut controller, &curriculum));
        assert_eq!(result["applied"], false);
    }

    #[test]
    fn bad_params_are_rejected() {
        let curriculum = fixtures::two_sprints();
        let mut controller = NavigationController::default();

        let outcome = dispatch(
            &request("navigate", json!({"direction": "up"})),
            &mut controller,
            &curriculum,
        );
        assert_eq!(outcome.action, None);
        assert_eq!(error_code(&outcome), Some(-32602));

        let outcome = dispatch(&request("jump_to", json!({"index": -1})), &mut controller, &curriculum);
        assert_eq!(error_code(&outcome), Some(-32602));
    }

    #[test]
    fn unknown_methods_and_versions_are_errors() {
        let curriculum = fixtures::two_sprints();
        let mut controller = NavigationController::default();

        let outcome = dispatch(&request("teleport", json!({})), &mut controller, &curriculum);
        assert_eq!(error_code(&outcome), Some(-32601));

        let mut old = request("focus", json!({}));
        old.jsonrpc = "1.0".to_string();
        assert_eq!(error_code(&dispatch(&old, &mut controller, &curriculum)), Some(-32600));
    }

    #[test]
    fn navigation_without_data_is_refused() {
        let outcome = dispatch(
            &request("focus", json!({})),
            &mut NavigationController::default(),
            &Curriculum::default(),
        );
        assert_eq!(outcome.action, None);
        assert_eq!(error_code(&outcome), Some(-32603));
    }

    #[test]
    fn notifications_act_without_responding() {
        let mut notification = request("focus", json!({}));
        notification.id = None;
        let outcome = dispatch(
            &notification,
            &mut NavigationController::default(),
            &fixtures::two_sprints(),
        );
        assert_eq!(outcome.action, Some(NavigationAction::Focus));
        assert!(outcome.response.is_none());
    }

    #[test]
    fn incoming_messages_become_navigation_requests() {
        let mut app = App::new();
        app.insert_resource(fixtures::two_sprints())
            .init_resource::<NavigationController>()
            .init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_event::<NavigationRequest>()
            .add_systems(Update, handle_rpc_messages);

        for content in [
            r#"{"jsonrpc":"2.0","method":"navigate","params":{"direction":"next"},"id":1}"#,
            "not json",
            r#"{"jsonrpc":"2.0","method":"back"}"#,
        ] {
            app.world_mut().send_event(IncomingRpcMessage {
                content: content.to_string(),
            });
        }
        app.update();

        let requests: Vec<_> = app
            .world()
            .resource::<Events<NavigationRequest>>()
            .iter_current_update_events()
            .map(|r| (r.action, r.source))
            .collect();
        assert_eq!(
            requests,
            vec![
                (NavigationAction::Next, ActionSource::Rpc),
                (NavigationAction::Back, ActionSource::Rpc),
            ]
        );
        assert_eq!(
            app.world().resource::<WebRpcInterface>().outgoing_responses.len(),
            1
        );
    }

    #[test]
    fn view_state_query_reports_counts() {
        let outcome = dispatch(
            &request("get_view_state", json!({})),
            &mut NavigationController::default(),
            &fixtures::two_sprints(),
        );
        assert_eq!(outcome.action, None);
        let result = outcome.response.unwrap().result.unwrap();
        assert_eq!(result["mode"], "sprints");
        assert_eq!(result["sprint_count"], 2);
        assert_eq!(result["has_data"], true);
    }
}
