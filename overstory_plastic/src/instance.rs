// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-widget records.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use understory_dom::NodeId;

use crate::Config;
use crate::classes;

/// Identifier of a widget within one [`PlasticContext`](crate::PlasticContext).
///
/// Ids are never reused, so a restored widget's id keeps reporting
/// [`PlasticError::Restored`](crate::PlasticError::Restored).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceId(pub(crate) u32);

impl InstanceId {
    /// Raw numeric id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "widget#{}", self.0)
    }
}

/// Checkbox or radio.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BooleanKind {
    /// Independent on/off control.
    Checkbox,
    /// One of a group sharing a `name`.
    Radio,
}

impl BooleanKind {
    /// The `type` attribute value.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }
}

/// The kind of control a widget wraps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlType {
    /// Single-line text.
    Text,
    /// Password.
    Password,
    /// Multi-line text.
    Textarea,
    /// Checkbox or radio.
    Boolean(BooleanKind),
    /// File chooser.
    File,
    /// Drop-down list.
    Select,
}

impl ControlType {
    /// Short name (`text`, `password`, `checkbox`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Textarea => "textarea",
            Self::Boolean(kind) => kind.name(),
            Self::File => "file",
            Self::Select => "select",
        }
    }

    /// Wrapper class for this control type.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Text => classes::TEXT,
            Self::Password => classes::PASSWORD,
            Self::Textarea => classes::TEXTAREA,
            Self::Boolean(BooleanKind::Checkbox) => classes::CHECKBOX,
            Self::Boolean(BooleanKind::Radio) => classes::RADIO,
            Self::File => classes::FILE,
            Self::Select => classes::SELECT,
        }
    }
}

/// Plugin-style commands accepted by [`PlasticContext::run`](crate::PlasticContext::run).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Transform the element (no-op if it already is a widget).
    Init,
    /// Enable the widget.
    Enable,
    /// Disable the widget.
    Disable,
    /// Put the original element back.
    Restore,
}

/// One entry of a select widget's option list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectItem {
    /// The `li` shown in the dropdown.
    pub item: NodeId,
    /// The `option` it was built from.
    pub option: NodeId,
    /// Value stored when the item is chosen.
    pub value: String,
}

/// Select widget state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectState {
    pub(crate) dropdown: NodeId,
    pub(crate) content: NodeId,
    pub(crate) text_data: NodeId,
    pub(crate) items: Vec<SelectItem>,
    /// Index into `items`.
    pub(crate) current: Option<usize>,
    /// Index into `items`.
    pub(crate) hovered: Option<usize>,
}

impl SelectState {
    /// The dropdown box.
    #[must_use]
    pub fn dropdown(&self) -> NodeId {
        self.dropdown
    }

    /// The element showing the chosen option's text.
    #[must_use]
    pub fn text_data(&self) -> NodeId {
        self.text_data
    }

    /// All option items in document order, including disabled ones.
    #[must_use]
    pub fn items(&self) -> &[SelectItem] {
        &self.items
    }

    /// The chosen item.
    #[must_use]
    pub fn current(&self) -> Option<&SelectItem> {
        self.current.and_then(|i| self.items.get(i))
    }

    /// The item highlighted by keyboard or pointer.
    #[must_use]
    pub fn hovered(&self) -> Option<&SelectItem> {
        self.hovered.and_then(|i| self.items.get(i))
    }
}

/// Per-type widget state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdapterState {
    /// Text, password and textarea widgets keep no extra state.
    Text,
    /// Checkbox or radio.
    Boolean(BooleanKind),
    /// File widget.
    File {
        /// The element showing the chosen file name.
        text_data: NodeId,
    },
    /// Select widget.
    Select(SelectState),
}

/// A live widget.
#[derive(Clone, Debug)]
pub struct WidgetInstance {
    pub(crate) id: InstanceId,
    pub(crate) source: NodeId,
    pub(crate) wrapper: NodeId,
    pub(crate) text_wrapper: NodeId,
    pub(crate) receiver: NodeId,
    pub(crate) input: NodeId,
    pub(crate) control: ControlType,
    pub(crate) disabled: bool,
    pub(crate) config: Config,
    pub(crate) adapter: AdapterState,
    pub(crate) label: Option<NodeId>,
}

impl WidgetInstance {
    /// The widget's id.
    #[must_use]
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// The original element, kept detached while the widget is live.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The outer `div` that replaced the source in the tree.
    #[must_use]
    pub fn wrapper(&self) -> NodeId {
        self.wrapper
    }

    /// The visible box inside the wrapper.
    #[must_use]
    pub fn text_wrapper(&self) -> NodeId {
        self.text_wrapper
    }

    /// The node that takes keyboard focus.
    #[must_use]
    pub fn receiver(&self) -> NodeId {
        self.receiver
    }

    /// The inner form control holding the value.
    #[must_use]
    pub fn input(&self) -> NodeId {
        self.input
    }

    /// Control type.
    #[must_use]
    pub fn control(&self) -> ControlType {
        self.control
    }

    /// Returns `true` while disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Configuration the widget was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Per-type state.
    #[must_use]
    pub fn adapter(&self) -> &AdapterState {
        &self.adapter
    }

    /// The `label[for=id]` wired to the widget, if any.
    #[must_use]
    pub fn label(&self) -> Option<NodeId> {
        self.label
    }

    pub(crate) fn select(&self) -> Option<&SelectState> {
        match &self.adapter {
            AdapterState::Select(s) => Some(s),
            _ => None,
        }
    }

    pub(crate) fn select_mut(&mut self) -> Option<&mut SelectState> {
        match &mut self.adapter {
            AdapterState::Select(s) => Some(s),
            _ => None,
        }
    }
}
