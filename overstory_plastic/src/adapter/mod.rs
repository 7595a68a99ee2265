// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-type markup and behavior.
//!
//! Each control family has a [`TypeAdapter`]. Detection tries the adapters in
//! a fixed order and falls back to text.

use alloc::string::String;
use alloc::vec::Vec;

use understory_dom::{Document, EventType, NodeId};

use crate::action::Action;
use crate::{AdapterState, Config, ControlType, InstanceId, PlasticContext, PlasticError, Value};
use crate::{WidgetInstance, classes};

mod boolean;
mod file;
mod select;
mod text;

pub(crate) use boolean::{BooleanAdapter, sync_radio_group, toggle_checked};
pub(crate) use file::{FileAdapter, clear_file, file_changed};
pub(crate) use select::{SelectAdapter, choose, navigate, outside, toggle};
pub(crate) use text::{TextAdapter, mirror_title};

/// Nodes the context creates before the adapter runs.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Parts {
    pub id: InstanceId,
    pub source: NodeId,
    pub text_wrapper: NodeId,
    pub control: ControlType,
}

/// What an adapter built.
#[derive(Debug)]
pub(crate) struct Built {
    /// Inner form control holding the value.
    pub input: NodeId,
    /// Focus receiver when it is not the input.
    pub receiver: Option<NodeId>,
    pub state: AdapterState,
}

/// Receiver binding change on an enabled/disabled transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum StateBinding {
    Bind(Action),
    Unbind,
}

pub(crate) type StateChange = Vec<(EventType, StateBinding)>;

pub(crate) trait TypeAdapter {
    /// The control type `source` would become, if this adapter handles it.
    fn detect(&self, doc: &Document<Action>, source: NodeId) -> Option<ControlType>;

    /// Builds the markup inside `parts.text_wrapper` (or next to it).
    fn build(
        &self,
        cx: &mut PlasticContext,
        parts: &Parts,
        config: &Config,
    ) -> Result<Built, PlasticError>;

    /// Runs once the instance is registered.
    fn init(&self, _cx: &mut PlasticContext, _id: InstanceId) {}

    /// Explicit setter. `None` means there is none and the value goes to the
    /// inner input.
    fn set(
        &self,
        _cx: &mut PlasticContext,
        _id: InstanceId,
        _value: Value,
    ) -> Option<Option<Value>> {
        None
    }

    /// Receiver bindings for the enabled state, or their removal.
    fn on_state_change(
        &self,
        _cx: &mut PlasticContext,
        _id: InstanceId,
        _enabled: bool,
    ) -> StateChange {
        Vec::new()
    }

    /// Runs before the wrapper is torn down.
    fn before_restore(&self, _cx: &mut PlasticContext, _id: InstanceId) {}

    /// Copies the widget's current state onto the source element.
    fn sync_source(&self, cx: &mut PlasticContext, inst: &WidgetInstance) {
        let value = cx.doc.value(inst.input);
        if cx.doc.value(inst.source) != value {
            cx.doc.set_value(inst.source, &value);
        }
    }
}

const DETECTION_ORDER: [&dyn TypeAdapter; 4] =
    [&TextAdapter, &BooleanAdapter, &FileAdapter, &SelectAdapter];

/// Control type of `source`; text when no adapter claims it.
pub(crate) fn detect(doc: &Document<Action>, source: NodeId) -> ControlType {
    DETECTION_ORDER
        .iter()
        .find_map(|a| a.detect(doc, source))
        .unwrap_or(ControlType::Text)
}

pub(crate) fn adapter_for(control: ControlType) -> &'static dyn TypeAdapter {
    match control {
        ControlType::Text | ControlType::Password | ControlType::Textarea => &TextAdapter,
        ControlType::Boolean(_) => &BooleanAdapter,
        ControlType::File => &FileAdapter,
        ControlType::Select => &SelectAdapter,
    }
}

/// `true` if `source` is an `input` of type `ty` or carries `class`.
fn is_input_or_class(doc: &Document<Action>, source: NodeId, ty: &str, class: &str) -> bool {
    doc.input_type(source).as_deref() == Some(ty) || doc.has_class(source, class)
}

/// Wrapper class list: the source's classes without the widget classes,
/// followed by the base and type classes.
pub(crate) fn wrapper_classes(source: Option<&str>, type_class: &str) -> String {
    let mut list: Vec<&str> = source
        .unwrap_or("")
        .split_ascii_whitespace()
        .filter(|c| *c != classes::BASE && *c != type_class)
        .collect();
    list.push(classes::BASE);
    list.push(type_class);
    list.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(doc: &mut Document<Action>, tag: &str, ty: Option<&str>) -> NodeId {
        let n = doc.create_element(tag);
        if let Some(ty) = ty {
            doc.set_attr(n, "type", ty);
        }
        n
    }

    #[test]
    fn detection_order_and_fallback() {
        let mut doc = Document::new();
        let cases = [
            ("input", Some("text"), ControlType::Text),
            ("input", Some("password"), ControlType::Password),
            ("textarea", None, ControlType::Textarea),
            (
                "input",
                Some("checkbox"),
                ControlType::Boolean(crate::BooleanKind::Checkbox),
            ),
            ("input", Some("radio"), ControlType::Boolean(crate::BooleanKind::Radio)),
            ("input", Some("file"), ControlType::File),
            ("select", None, ControlType::Select),
            ("input", Some("email"), ControlType::Text),
            ("div", None, ControlType::Text),
        ];
        for (tag, ty, expected) in cases {
            let n = element(&mut doc, tag, ty);
            assert_eq!(detect(&doc, n), expected, "{tag} {ty:?}");
        }
    }

    #[test]
    fn class_based_detection() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.set_attr(div, "class", "plasticInput-select");
        assert_eq!(detect(&doc, div), ControlType::Select);
        doc.set_attr(div, "class", "plasticInput-file");
        assert_eq!(detect(&doc, div), ControlType::File);
    }

    #[test]
    fn wrapper_class_list() {
        assert_eq!(
            wrapper_classes(Some("wide plasticInput big"), classes::TEXT),
            "wide big plasticInput plasticInput-text"
        );
        assert_eq!(
            wrapper_classes(None, classes::SELECT),
            "plasticInput plasticInput-select"
        );
    }
}
