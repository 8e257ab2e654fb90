//! Per-deck input event handlers.
//!
//! The surface reports pointer input on a card; the table looks up the
//! card's deck and fires that deck's handler for the event kind. Each deck
//! has at most one handler per kind: registering again replaces it.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{CardId, DeckId, TableError};

/// Pointer event kinds a deck can listen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Click,
    MouseOver,
    MouseMove,
    MouseDown,
    MouseUp,
    MouseEnter,
    MouseLeave,
    MouseOut,
}

impl EventKind {
    pub const ALL: [EventKind; 8] = [
        EventKind::Click,
        EventKind::MouseOver,
        EventKind::MouseMove,
        EventKind::MouseDown,
        EventKind::MouseUp,
        EventKind::MouseEnter,
        EventKind::MouseLeave,
        EventKind::MouseOut,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::MouseOver => "mouseover",
            EventKind::MouseMove => "mousemove",
            EventKind::MouseDown => "mousedown",
            EventKind::MouseUp => "mouseup",
            EventKind::MouseEnter => "mouseenter",
            EventKind::MouseLeave => "mouseleave",
            EventKind::MouseOut => "mouseout",
        }
    }
}

impl FromStr for EventKind {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| TableError::UnknownEvent(s.to_string()))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw pointer data forwarded from the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub button: u8,
}

/// What a handler receives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardEvent {
    pub kind: EventKind,
    pub card: CardId,
    pub deck: DeckId,
    pub pointer: PointerEvent,
}

/// Event callback.
pub type Handler = Box<dyn FnMut(&CardEvent)>;

/// Event-kind-to-handler table owned by a deck.
#[derive(Default)]
pub struct EventTable {
    handlers: FxHashMap<EventKind, Handler>,
}

impl EventTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind`, replacing any previous one.
    pub fn on(&mut self, kind: EventKind, handler: impl FnMut(&CardEvent) + 'static) {
        self.handlers.insert(kind, Box::new(handler));
    }

    /// Drop the handler for `kind`. Returns whether one was registered.
    pub fn off(&mut self, kind: EventKind) -> bool {
        self.handlers.remove(&kind).is_some()
    }

    #[must_use]
    pub fn has(&self, kind: EventKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    /// Call the handler for `event.kind`. Returns whether one ran.
    pub fn trigger(&mut self, event: &CardEvent) -> bool {
        match self.handlers.get_mut(&event.kind) {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for EventTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&str> = self.handlers.keys().map(|k| k.name()).collect();
        kinds.sort_unstable();
        f.debug_struct("EventTable").field("handlers", &kinds).finish()
    }
}
