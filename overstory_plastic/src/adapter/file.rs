// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! File widgets.

use log::{debug, warn};
use understory_dom::{AttrCopy, Document, EventType, NodeId};

use super::{Built, Parts, TypeAdapter, is_input_or_class};
use crate::action::{Action, WIDGET};
use crate::{AdapterState, Config, ControlType, InstanceId, PlasticContext, PlasticError};
use crate::{Value, classes};

pub(crate) struct FileAdapter;

impl TypeAdapter for FileAdapter {
    fn detect(&self, doc: &Document<Action>, source: NodeId) -> Option<ControlType> {
        is_input_or_class(doc, source, "file", classes::FILE).then_some(ControlType::File)
    }

    fn build(
        &self,
        cx: &mut PlasticContext,
        parts: &Parts,
        config: &Config,
    ) -> Result<Built, PlasticError> {
        let input = file_input(cx, parts.id, parts.source);
        cx.doc.insert_before(parts.text_wrapper, input)?;

        let icon = cx.element("span", classes::FILE_ICON);
        let clear = cx.element("span", classes::CLEAR_FILE);
        cx.doc.set_attr(clear, "title", &config.file.clear_title);
        cx.doc
            .bind(clear, EventType::Click, WIDGET, Action::FileClear(parts.id));
        let text_box = cx.element("div", classes::TEXT_BOX);
        let text_data = cx.element("div", classes::TEXT_DATA);
        cx.doc.set_text(text_data, &config.file.default_text);
        cx.doc.append_child(text_box, text_data)?;
        for node in [icon, clear, text_box] {
            cx.doc.append_child(parts.text_wrapper, node)?;
        }

        Ok(Built {
            input,
            receiver: None,
            state: AdapterState::File { text_data },
        })
    }

    fn set(&self, cx: &mut PlasticContext, id: InstanceId, value: Value) -> Option<Option<Value>> {
        // A file input can only be emptied.
        if value.as_text() == Some("") {
            clear_file(cx, id);
        }
        Some(None)
    }
}

/// A fresh file input carrying the identifying attributes of `from`.
fn file_input(cx: &mut PlasticContext, id: InstanceId, from: NodeId) -> NodeId {
    let input = cx.element("input", classes::FILE_INPUT);
    cx.doc.set_attr(input, "type", "file");
    cx.doc.copy_attrs(
        from,
        input,
        &AttrCopy::only(&["title", "accept", "name", "tabindex", "accesskey"]),
    );
    cx.doc
        .bind(input, EventType::Click, WIDGET, Action::StopPropagation);
    cx.doc
        .bind(input, EventType::Change, WIDGET, Action::FileChanged(id));
    input
}

/// A file was chosen: show its name.
pub(crate) fn file_changed(cx: &mut PlasticContext, id: InstanceId) {
    let Some(inst) = cx.widget(id) else {
        return;
    };
    let AdapterState::File { text_data } = inst.adapter else {
        return;
    };
    let (input, text_wrapper) = (inst.input, inst.text_wrapper);
    let value = cx.doc.value(input);
    cx.doc.add_class(text_wrapper, classes::HAS_FILE);
    cx.doc.set_text(text_data, &value);
}

/// Empties the widget by swapping in a fresh file input.
pub(crate) fn clear_file(cx: &mut PlasticContext, id: InstanceId) {
    let Some(inst) = cx.widget(id) else {
        return;
    };
    let AdapterState::File { text_data } = inst.adapter else {
        return;
    };
    let (old, text_wrapper) = (inst.input, inst.text_wrapper);
    let default_text = inst.config.file.default_text.clone();
    cx.doc.remove_class(text_wrapper, classes::HAS_FILE);
    cx.doc.set_text(text_data, &default_text);

    let fresh = file_input(cx, id, old);
    if let Err(err) = cx.doc.replace(old, fresh) {
        warn!("{id}: cannot swap file input: {err}");
        if let Err(err) = cx.doc.destroy(fresh) {
            warn!("{id}: {err}");
        }
        return;
    }
    cx.swap_input(id, fresh);
    if let Err(err) = cx.doc.destroy(old) {
        warn!("{id}: {err}");
    }
    debug!("{id}: file input replaced");
}
