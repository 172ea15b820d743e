/// Typed events raised by the hypermedia client and the handlers that react to them.
///
/// Handlers do not touch the page themselves; they return [`Action`]s for the
/// rendering layer to carry out.
use indexmap::IndexMap;
use serde::Serialize;
use std::str::FromStr;

use crate::toast::{response_error_toast, Toast};

/// Id of the spinner shown while a server-sent event stream is open.
pub const SSE_SPINNER_ID: &str = "sse-spinner";

/// A request that asked for confirmation before being issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    /// Whether the triggering element declared its own confirmation question.
    pub has_confirm_attribute: bool,
    pub question: String,
}

/// Why a server-sent event stream was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SseCloseReason {
    NodeMissing,
    NodeReplaced,
    Message,
}

impl FromStr for SseCloseReason {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nodeMissing" => Ok(SseCloseReason::NodeMissing),
            "nodeReplaced" => Ok(SseCloseReason::NodeReplaced),
            "message" => Ok(SseCloseReason::Message),
            other => anyhow::bail!(
                "Unknown SSE close reason '{}'. Expected: nodeMissing, nodeReplaced, message",
                other
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Confirm(ConfirmRequest),
    ResponseError { status: u16, body: String },
    SseClose(SseCloseReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Confirm,
    ResponseError,
    SseClose,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Confirm(_) => EventKind::Confirm,
            Event::ResponseError { .. } => EventKind::ResponseError,
            Event::SseClose(_) => EventKind::SseClose,
        }
    }
}

/// Something the rendering layer should do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Ask the user; the pending request is issued only if they accept.
    Prompt { title: String, text: String },
    ShowToast(Toast),
    RemoveElement { id: String },
}

/// Type alias for event handlers.
/// Returns `None` when the handler has nothing to do for this event.
pub type Handler = Box<dyn Fn(&Event) -> Option<Action> + Send + Sync>;

#[derive(Default)]
pub struct EventBus {
    handlers: IndexMap<EventKind, Vec<Handler>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bus wired with the application's handlers for confirmations,
    /// failed responses and closed event streams.
    pub fn with_default_handlers() -> Self {
        let mut bus = Self::new();
        bus.subscribe(EventKind::Confirm, Box::new(confirm_with_prompt));
        bus.subscribe(EventKind::ResponseError, Box::new(toast_response_error));
        bus.subscribe(EventKind::SseClose, Box::new(remove_spinner_on_message));
        bus
    }

    pub fn subscribe(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.entry(kind).or_default().push(handler);
    }

    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.handlers.get(&kind).map_or(0, Vec::len)
    }

    /// Run every handler registered for the event's kind, in subscription order.
    pub fn dispatch(&self, event: &Event) -> Vec<Action> {
        let Some(handlers) = self.handlers.get(&event.kind()) else {
            tracing::debug!("No handlers for {:?}", event.kind());
            return Vec::new();
        };

        let actions: Vec<Action> = handlers.iter().filter_map(|h| h(event)).collect();
        tracing::debug!(
            "Dispatched {:?} to {} handler(s), {} action(s)",
            event.kind(),
            handlers.len(),
            actions.len()
        );
        actions
    }
}

fn confirm_with_prompt(event: &Event) -> Option<Action> {
    match event {
        // Elements without their own question keep the client's default behaviour.
        Event::Confirm(req) if req.has_confirm_attribute => Some(Action::Prompt {
            title: "Are you sure?".to_string(),
            text: req.question.clone(),
        }),
        _ => None,
    }
}

fn toast_response_error(event: &Event) -> Option<Action> {
    match event {
        Event::ResponseError { status, body } => {
            tracing::warn!("Request failed with status {}", status);
            Some(Action::ShowToast(response_error_toast(*status, body)))
        }
        _ => None,
    }
}

fn remove_spinner_on_message(event: &Event) -> Option<Action> {
    match event {
        Event::SseClose(SseCloseReason::Message) => Some(Action::RemoveElement {
            id: SSE_SPINNER_ID.to_string(),
        }),
        _ => None,
    }
}
