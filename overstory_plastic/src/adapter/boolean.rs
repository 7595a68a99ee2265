// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checkbox and radio widgets.

use alloc::vec;
use alloc::vec::Vec;

use log::debug;
use understory_dom::{BindingFilter, Document, Event, EventType, NodeId, Selector};

use super::{Built, Parts, StateBinding, StateChange, TypeAdapter, is_input_or_class};
use crate::action::{Action, INTERNAL, WIDGET};
use crate::{AdapterState, BooleanKind, Config, ControlType, InstanceId, PlasticContext};
use crate::{PlasticError, Value, WidgetInstance, classes};

pub(crate) struct BooleanAdapter;

impl TypeAdapter for BooleanAdapter {
    fn detect(&self, doc: &Document<Action>, source: NodeId) -> Option<ControlType> {
        if is_input_or_class(doc, source, "checkbox", classes::CHECKBOX) {
            Some(ControlType::Boolean(BooleanKind::Checkbox))
        } else if is_input_or_class(doc, source, "radio", classes::RADIO) {
            Some(ControlType::Boolean(BooleanKind::Radio))
        } else {
            None
        }
    }

    fn build(
        &self,
        cx: &mut PlasticContext,
        parts: &Parts,
        _config: &Config,
    ) -> Result<Built, PlasticError> {
        let kind = match parts.control {
            ControlType::Boolean(kind) => kind,
            _ => BooleanKind::Checkbox,
        };
        let input = cx.element("input", classes::TEXT_BOX);
        cx.doc.set_attr(input, "type", kind.name());
        cx.doc.set_attr(input, "tabindex", "-1");
        cx.doc.append_child(parts.text_wrapper, input)?;

        let border = cx.element("div", classes::INNER_BORDER);
        let fill = cx.element("div", classes::FILL);
        cx.doc.append_child(border, fill)?;
        cx.doc.append_child(parts.text_wrapper, border)?;

        // The text wrapper takes focus in place of the hidden input.
        cx.doc.set_attr(parts.text_wrapper, "tabindex", "0");
        cx.doc
            .bind(parts.text_wrapper, EventType::KeyDown, WIDGET, Action::BooleanKey);

        if kind == BooleanKind::Radio {
            let mut group = vec![input];
            if let Some(name) = cx.doc.attr(parts.source, "name").filter(|n| !n.is_empty()) {
                let peers = radio_selector(name);
                group.extend(cx.doc.find_all(cx.doc.root(), &peers));
            }
            let only_change = BindingFilter::namespace(INTERNAL).with_event(EventType::Change);
            for radio in group {
                cx.doc.unbind(radio, &only_change);
                cx.doc
                    .bind(radio, EventType::Change, INTERNAL, Action::RadioGroup);
            }
        }

        Ok(Built {
            input,
            receiver: Some(parts.text_wrapper),
            state: AdapterState::Boolean(kind),
        })
    }

    fn init(&self, cx: &mut PlasticContext, id: InstanceId) {
        let Some(inst) = cx.widget(id) else {
            return;
        };
        if cx.doc.is_checked(inst.source) {
            toggle_checked(cx, id, Some(true));
        }
    }

    fn set(&self, cx: &mut PlasticContext, id: InstanceId, value: Value) -> Option<Option<Value>> {
        let target = match value {
            Value::Bool(on) => Some(on),
            _ => None,
        };
        toggle_checked(cx, id, target);
        Some(None)
    }

    fn on_state_change(
        &self,
        _cx: &mut PlasticContext,
        id: InstanceId,
        enabled: bool,
    ) -> StateChange {
        let click = if enabled {
            StateBinding::Bind(Action::BooleanToggle(id))
        } else {
            StateBinding::Unbind
        };
        vec![(EventType::Click, click)]
    }

    fn sync_source(&self, cx: &mut PlasticContext, inst: &WidgetInstance) {
        let checked = cx.doc.is_checked(inst.input);
        cx.doc.set_checked(inst.source, checked);
    }
}

fn radio_selector(name: &str) -> Selector {
    Selector::tag("input")
        .with_type("radio")
        .with_attr("name", name)
}

/// Sets the checked state (`Some`) or toggles it (`None`), then fires
/// `change` on the inner input. A radio cannot be unchecked this way.
pub(crate) fn toggle_checked(cx: &mut PlasticContext, id: InstanceId, target: Option<bool>) {
    let Some(inst) = cx.widget(id) else {
        return;
    };
    let input = inst.input;
    let radio = inst.control == ControlType::Boolean(BooleanKind::Radio);
    let on = target.unwrap_or_else(|| !cx.doc.is_checked(input));
    if radio && !on {
        return;
    }
    mark_checked(cx, input, on);
    debug!("{id} checked: {on}");
    cx.trigger_event(Event::synthetic(EventType::Change, input));
}

/// Checked state on the input, the enclosing wrapper and the text wrapper.
fn mark_checked(cx: &mut PlasticContext, input: NodeId, on: bool) {
    cx.doc.set_checked(input, on);
    if let Some(wrapper) = cx.doc.closest(input, &Selector::class(classes::BASE)) {
        cx.doc.set_checked(wrapper, on);
    }
    if let Some(text_wrapper) = cx.doc.closest(input, &Selector::class(classes::TEXT_WRAPPER)) {
        cx.doc.set_class(text_wrapper, classes::CHECKED, on);
    }
}

/// A radio of a group changed: every other radio with the same name is
/// unchecked.
pub(crate) fn sync_radio_group(cx: &mut PlasticContext, changed: NodeId) {
    if !cx.doc.is_checked(changed) {
        return;
    }
    let Some(name) = cx.doc.attr(changed, "name").filter(|n| !n.is_empty()) else {
        return;
    };
    let others: Vec<NodeId> = cx
        .doc
        .find_all(cx.doc.root(), &radio_selector(name))
        .into_iter()
        .filter(|r| *r != changed)
        .collect();
    for radio in others {
        mark_checked(cx, radio, false);
    }
}
