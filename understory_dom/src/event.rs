// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events, keys and bindings.

use understory_event_state::focus_origin::FocusFrom;

use crate::{Namespace, NodeId};

/// Kinds of events a node can be bound to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    /// Primary button click.
    Click,
    /// Primary button press.
    MouseDown,
    /// Pointer movement.
    MouseMove,
    /// Pointer entered the node. Does not bubble.
    MouseEnter,
    /// Pointer left the node. Does not bubble.
    MouseLeave,
    /// Node gained focus. Does not bubble.
    Focus,
    /// Node lost focus. Does not bubble.
    Blur,
    /// Node or a descendant gained focus.
    FocusIn,
    /// Node or a descendant lost focus.
    FocusOut,
    /// Committed value change of a form control.
    Change,
    /// Key pressed.
    KeyDown,
    /// Character produced by a key press.
    KeyPress,
}

impl EventType {
    /// Returns `true` if the event propagates from the target to the root.
    #[must_use]
    pub const fn bubbles(self) -> bool {
        !matches!(
            self,
            Self::MouseEnter | Self::MouseLeave | Self::Focus | Self::Blur
        )
    }

    /// Lowercase DOM name of the event.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseDown => "mousedown",
            Self::MouseMove => "mousemove",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::FocusIn => "focusin",
            Self::FocusOut => "focusout",
            Self::Change => "change",
            Self::KeyDown => "keydown",
            Self::KeyPress => "keypress",
        }
    }
}

/// Keys relevant to form controls.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Space bar.
    Space,
    /// Enter / Return.
    Enter,
    /// Home.
    Home,
    /// End.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Left arrow.
    ArrowLeft,
    /// Up arrow.
    ArrowUp,
    /// Right arrow.
    ArrowRight,
    /// Down arrow.
    ArrowDown,
    /// Tab.
    Tab,
    /// Escape.
    Escape,
    /// A printable character.
    Char(char),
}

impl Key {
    /// The character this key produces on `keypress`, if any.
    #[must_use]
    pub const fn char(self) -> Option<char> {
        match self {
            Self::Char(c) => Some(c),
            Self::Space => Some(' '),
            _ => None,
        }
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers held during an event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 0b0001;
        /// Control.
        const CTRL  = 0b0010;
        /// Alt / Option.
        const ALT   = 0b0100;
        /// Meta / Command.
        const META  = 0b1000;
    }
}

/// Whether an event was produced by user input or by program code.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventSource {
    /// Simulated user input.
    Native,
    /// Triggered by program code.
    Synthetic,
}

/// An event travelling through a [`Document`](crate::Document).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    /// Event kind.
    pub ty: EventType,
    /// Node the event was fired on.
    pub target: NodeId,
    /// User input or program code.
    pub source: EventSource,
    /// Key for keyboard events.
    pub key: Option<Key>,
    /// Modifiers for keyboard and pointer events.
    pub modifiers: Modifiers,
    /// Origin of a focus change, for `focus`/`focusin` events.
    pub focus_from: Option<FocusFrom>,
    /// Set once the event has been re-fired on another node, so it is not
    /// re-fired again.
    pub forwarded: bool,
    /// Stop after the current node's handlers.
    pub propagation_stopped: bool,
    /// Skip the default action.
    pub default_prevented: bool,
}

impl Event {
    fn new(ty: EventType, target: NodeId, source: EventSource) -> Self {
        Self {
            ty,
            target,
            source,
            key: None,
            modifiers: Modifiers::empty(),
            focus_from: None,
            forwarded: false,
            propagation_stopped: false,
            default_prevented: false,
        }
    }

    /// An event caused by (simulated) user input.
    #[must_use]
    pub fn native(ty: EventType, target: NodeId) -> Self {
        Self::new(ty, target, EventSource::Native)
    }

    /// An event triggered by program code.
    #[must_use]
    pub fn synthetic(ty: EventType, target: NodeId) -> Self {
        Self::new(ty, target, EventSource::Synthetic)
    }

    /// Sets the key.
    #[must_use]
    pub fn with_key(mut self, key: Key) -> Self {
        self.key = Some(key);
        self
    }

    /// Sets the modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Sets the focus origin.
    #[must_use]
    pub fn with_focus_from(mut self, from: FocusFrom) -> Self {
        self.focus_from = Some(from);
        self
    }

    /// Returns `true` for user input.
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.source == EventSource::Native
    }

    /// Copy of this event re-targeted at `target` as a synthetic event.
    ///
    /// Key, modifiers, focus origin and the `forwarded` flag are kept;
    /// propagation and default state are reset.
    #[must_use]
    pub fn retarget(&self, target: NodeId) -> Self {
        Self {
            target,
            source: EventSource::Synthetic,
            propagation_stopped: false,
            default_prevented: false,
            ..self.clone()
        }
    }

    /// Stops propagation to ancestors once the current node is done.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Suppresses the default action.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// A handler bound to a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding<A> {
    /// Event kind this binding reacts to.
    pub event: EventType,
    /// Group the binding belongs to.
    pub namespace: Namespace,
    /// Application-defined action.
    pub action: A,
}

/// Selects bindings to remove with [`Document::unbind`](crate::Document::unbind).
///
/// An empty filter matches every binding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BindingFilter {
    /// Only bindings for this event.
    pub event: Option<EventType>,
    /// Only bindings in this namespace.
    pub namespace: Option<Namespace>,
}

impl BindingFilter {
    /// Every binding in `namespace`.
    #[must_use]
    pub fn namespace(namespace: Namespace) -> Self {
        Self {
            event: None,
            namespace: Some(namespace),
        }
    }

    /// Every binding for `event`.
    #[must_use]
    pub fn event(event: EventType) -> Self {
        Self {
            event: Some(event),
            namespace: None,
        }
    }

    /// Narrows the filter to `event`.
    #[must_use]
    pub fn with_event(mut self, event: EventType) -> Self {
        self.event = Some(event);
        self
    }

    /// Returns `true` if `binding` is selected.
    #[must_use]
    pub fn matches<A>(&self, binding: &Binding<A>) -> bool {
        self.event.is_none_or(|e| e == binding.event)
            && self.namespace.is_none_or(|n| n == binding.namespace)
    }
}
