// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text, password and textarea widgets.

use understory_dom::{AttrCopy, Document, EventType, NodeId};

use super::{Built, Parts, TypeAdapter, is_input_or_class};
use crate::action::{Action, WIDGET};
use crate::{AdapterState, Config, ControlType, InstanceId, PlasticContext, PlasticError};
use crate::{TitleChange, classes};

pub(crate) struct TextAdapter;

impl TypeAdapter for TextAdapter {
    fn detect(&self, doc: &Document<Action>, source: NodeId) -> Option<ControlType> {
        if is_input_or_class(doc, source, "text", classes::TEXT) {
            Some(ControlType::Text)
        } else if is_input_or_class(doc, source, "password", classes::PASSWORD) {
            Some(ControlType::Password)
        } else if doc.tag(source) == Some("textarea") || doc.has_class(source, classes::TEXTAREA) {
            Some(ControlType::Textarea)
        } else {
            None
        }
    }

    fn build(
        &self,
        cx: &mut PlasticContext,
        parts: &Parts,
        config: &Config,
    ) -> Result<Built, PlasticError> {
        let input = if parts.control == ControlType::Textarea {
            let area = cx.element("textarea", classes::TEXT_BOX);
            let value = cx.doc.value(parts.source);
            cx.doc.set_text(area, &value);
            area
        } else {
            let input = cx.element("input", classes::TEXT_BOX);
            cx.doc.set_attr(input, "type", parts.control.name());
            cx.doc
                .copy_attrs(parts.source, input, &AttrCopy::only(&["value", "maxlength", "readonly"]));
            input
        };
        cx.doc.append_child(parts.text_wrapper, input)?;

        if parts.control == ControlType::Text && config.title_change_to == TitleChange::Text {
            cx.doc
                .bind(input, EventType::Change, WIDGET, Action::TextTitle(parts.id));
        }

        Ok(Built {
            input,
            receiver: None,
            state: AdapterState::Text,
        })
    }
}

/// Puts the trimmed input value into the text wrapper's title.
pub(crate) fn mirror_title(cx: &mut PlasticContext, id: InstanceId) {
    let Some(inst) = cx.widget(id) else {
        return;
    };
    let (input, text_wrapper) = (inst.input, inst.text_wrapper);
    let value = cx.doc.value(input);
    cx.doc.set_attr(text_wrapper, "title", value.trim());
}
