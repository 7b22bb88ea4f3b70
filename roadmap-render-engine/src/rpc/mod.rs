//! JSON-RPC 2.0 communication layer for host-page integration.
//!
//! Implements bidirectional messaging between the Bevy engine and an
//! embedding page via iframe postMessage, supporting both request-response
//! and notification patterns.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent)     <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │                                        ├─ Dispatch to navigation
//!        │ <───────────────── Response (with ID) ─┤
//!        │                                        │
//!        │ <────────── Notification (no ID) ─────┤
//! ```
//!
//! ## Calling From The Host Page
//!
//! ```typescript
//! frame.contentWindow.postMessage(JSON.stringify({
//!   jsonrpc: "2.0",
//!   method: "navigate",
//!   params: { direction: "next" },
//!   id: 1
//! }), "*");
//! ```
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error (no roadmap data loaded)
//!
//! ## Methods
//!
//! ### Navigation
//! - `navigate`: `{"direction": "next" | "previous"}`
//! - `focus`: Drill into the current sprint or re-aim at the current category
//! - `back`: Return from categories to sprints
//! - `toggle_overview`: Enter or leave the overview
//! - `jump_to`: `{"index": n}` select a sprint or category directly
//!
//! Navigation responses are `{"success": true, "applied": bool, "method", "view_state"}`.
//! `applied` is false when the action is a no-op in the current mode.
//!
//! ### State
//! - `get_view_state`: Mode, indices, selection and sprint count
//!
//! ## Notifications Sent
//!
//! - `loading_state`: `{"state": "loading" | "ready" | "no_data"}`
//! - `view_state_changed`: view state snapshot plus the info panel title

/// JSON-RPC 2.0 bidirectional communication system for host-page integration.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
