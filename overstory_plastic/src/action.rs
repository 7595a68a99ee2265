// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What a binding does when its event fires.

use understory_dom::Namespace;

use crate::InstanceId;

/// Wiring that lives for the whole life of a widget.
pub const WIDGET: Namespace = Namespace("plasticInput");
/// Bindings that exist only while a widget is enabled.
pub const STATE: Namespace = Namespace("plasticInput-state");
/// Focus blocking and radio group bookkeeping.
pub const INTERNAL: Namespace = Namespace("plasticInput-internal");
/// Document-level handlers of an open select.
pub const OUTSIDE: Namespace = Namespace("plasticInput-select-bind");
/// Application listeners added through [`PlasticContext::on`](crate::PlasticContext::on).
pub const LISTENER: Namespace = Namespace("listener");

/// Identifier of an application listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub(crate) u32);

/// A node of a widget, resolved when an action runs.
///
/// The inner input of a file widget is replaced when it is cleared, so
/// actions refer to parts rather than to nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    /// The outer `div`.
    Wrapper,
    /// The visible box.
    TextWrapper,
    /// The inner form control.
    Input,
    /// The focus receiver.
    Receiver,
}

/// Bound action, interpreted by the context during dispatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Toggle the `focus` class on the text wrapper on focus/blur.
    FocusClass(InstanceId),
    /// Label click: focus or click the receiver.
    LabelClick(InstanceId),
    /// Label enter/leave: toggle `hover` on the text wrapper.
    LabelHover(InstanceId),
    /// Re-fire the event once on another part of the widget, then stop
    /// propagation.
    Forward(InstanceId, Part),
    /// Blur the receiver of a disabled widget as soon as it gains focus.
    BlockFocus(InstanceId),
    /// Stop propagation.
    StopPropagation,
    /// Mirror a text input's value into the text wrapper's title.
    TextTitle(InstanceId),
    /// Space on a checkbox/radio receiver clicks it.
    BooleanKey,
    /// Click on an enabled checkbox/radio toggles it.
    BooleanToggle(InstanceId),
    /// A radio changed: uncheck the others of its group.
    RadioGroup,
    /// File clear button.
    FileClear(InstanceId),
    /// A file was chosen.
    FileChanged(InstanceId),
    /// Open/close a select dropdown.
    SelectToggle(InstanceId),
    /// Keyboard or pointer navigation in a select.
    SelectNavigate(InstanceId),
    /// Choose an option.
    SelectChoose(InstanceId),
    /// Click or focus outside an open select closes it.
    SelectOutside(InstanceId),
    /// Application callback.
    Listener(ListenerId),
}
