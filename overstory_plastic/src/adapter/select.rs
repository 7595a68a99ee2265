// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Select widgets: a dropdown list replacing the native `select`.
//!
//! Items are addressed by their index in [`SelectState::items`]; keyboard
//! navigation and `set(Index(_))` count enabled items only.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use log::{debug, warn};
use understory_dom::{
    AttrCopy, BindingFilter, Document, Event, EventType, FocusFrom, Key, Modifiers, NodeId,
};

use super::{Built, Parts, StateBinding, StateChange, TypeAdapter};
use crate::action::{Action, OUTSIDE, WIDGET};
use crate::{AdapterState, Config, ControlType, InstanceId, PlasticContext, PlasticError};
use crate::{SelectItem, SelectState, TitleChange, Value, WidgetInstance, classes};

pub(crate) struct SelectAdapter;

impl TypeAdapter for SelectAdapter {
    fn detect(&self, doc: &Document<Action>, source: NodeId) -> Option<ControlType> {
        (doc.tag(source) == Some("select") || doc.has_class(source, classes::SELECT))
            .then_some(ControlType::Select)
    }

    fn build(
        &self,
        cx: &mut PlasticContext,
        parts: &Parts,
        config: &Config,
    ) -> Result<Built, PlasticError> {
        let id = parts.id;
        let text_wrapper = parts.text_wrapper;

        let dropdown = cx.element("div", classes::DROPDOWN);
        cx.doc.set_attr(dropdown, "tabindex", "-1");
        cx.doc.set_hidden(dropdown, true);
        cx.doc.insert_after(text_wrapper, dropdown)?;
        cx.doc
            .bind(dropdown, EventType::Click, WIDGET, Action::StopPropagation);
        let content = cx.element("ul", classes::DROPDOWN_CONTENT);
        if config.use_overlay {
            let overlay = cx.element("li", classes::OVERLAY);
            cx.doc.append_child(content, overlay)?;
        }
        cx.doc.append_child(dropdown, content)?;

        let input = cx.doc.create_element("input");
        cx.doc.set_attr(input, "type", "hidden");
        cx.doc.set_attr(input, "value", "0");
        cx.doc.insert_before(text_wrapper, input)?;

        cx.doc.set_attr(text_wrapper, "tabindex", "0");
        for ty in [EventType::KeyDown, EventType::KeyPress] {
            cx.doc.bind(text_wrapper, ty, WIDGET, Action::SelectNavigate(id));
        }
        let arrow = cx.element("div", classes::SELECT_ARROW);
        let text_box = cx.element("div", classes::TEXT_BOX);
        let text_data = cx.element("div", classes::TEXT_DATA);
        cx.doc.append_child(text_box, text_data)?;
        cx.doc.append_child(text_wrapper, arrow)?;
        cx.doc.append_child(text_wrapper, text_box)?;

        let mut items = Vec::new();
        for child in cx.doc.children(parts.source).to_vec() {
            match cx.doc.tag(child) {
                Some("optgroup") => {
                    let group = cx.element("li", classes::SELECT_OPTION_GROUP);
                    if let Some(label) = cx.doc.attr(child, "label").filter(|l| !l.is_empty()) {
                        let label = label.to_string();
                        let heading = cx.doc.create_element("h3");
                        cx.doc.set_text(heading, &label);
                        cx.doc.append_child(group, heading)?;
                    }
                    let list = cx.doc.create_element("ul");
                    cx.doc.append_child(group, list)?;
                    cx.doc.append_child(content, group)?;
                    for option in cx.doc.children(child).to_vec() {
                        if cx.doc.tag(option) == Some("option") {
                            items.push(append_option(cx, id, config, option, list)?);
                        }
                    }
                    if cx.doc.is_disabled(child) {
                        cx.doc.add_class(group, classes::DISABLED);
                    }
                }
                Some("option") => items.push(append_option(cx, id, config, child, content)?),
                _ => {}
            }
        }

        Ok(Built {
            input,
            receiver: Some(text_wrapper),
            state: AdapterState::Select(SelectState {
                dropdown,
                content,
                text_data,
                items,
                current: None,
                hovered: None,
            }),
        })
    }

    fn init(&self, cx: &mut PlasticContext, id: InstanceId) {
        let Some(inst) = cx.widget(id) else {
            return;
        };
        let Some(state) = inst.select() else {
            return;
        };
        let shown = cx.doc.selected_option(inst.source);
        let item = state.items.iter().position(|i| Some(i.option) == shown);
        if let Some(item) = item {
            choose_item(cx, id, item);
        }
    }

    fn set(&self, cx: &mut PlasticContext, id: InstanceId, value: Value) -> Option<Option<Value>> {
        let view = View::of(cx, id)?;
        let item = match &value {
            Value::Index(i) => view.enabled.get(*i).copied(),
            Value::Text(text) => {
                let state = cx.widget(id)?.select()?;
                view.enabled
                    .iter()
                    .copied()
                    .find(|i| state.items[*i].value == *text)
            }
            Value::Bool(_) => None,
        };
        match item {
            Some(item) => choose_item(cx, id, item),
            None => debug!("{id}: no enabled option for {value:?}"),
        }
        Some(None)
    }

    fn on_state_change(
        &self,
        cx: &mut PlasticContext,
        id: InstanceId,
        enabled: bool,
    ) -> StateChange {
        let binding = if enabled {
            StateBinding::Bind(Action::SelectToggle(id))
        } else {
            close(cx, id);
            StateBinding::Unbind
        };
        vec![(EventType::FocusIn, binding), (EventType::Click, binding)]
    }

    fn before_restore(&self, cx: &mut PlasticContext, id: InstanceId) {
        close(cx, id);
    }

    fn sync_source(&self, cx: &mut PlasticContext, inst: &WidgetInstance) {
        if let Some(current) = inst.select().and_then(SelectState::current) {
            cx.doc.set_selected(current.option, true);
        }
    }
}

fn append_option(
    cx: &mut PlasticContext,
    id: InstanceId,
    config: &Config,
    option: NodeId,
    parent: NodeId,
) -> Result<SelectItem, PlasticError> {
    let item = cx.element("li", classes::SELECT_OPTION);
    let label = cx.doc.text_content(option);
    cx.doc.set_text(item, &label);

    let from_text = config.option_title_from_text;
    let title = AttrCopy::only(&["title"]).filter("title", move |title| {
        title
            .filter(|t| !t.is_empty())
            .map(|t| if from_text { label.trim() } else { t.trim() }.to_string())
    });
    cx.doc.copy_attrs(option, item, &title);

    cx.doc
        .bind(item, EventType::Click, WIDGET, Action::SelectChoose(id));
    cx.doc
        .bind(item, EventType::MouseMove, WIDGET, Action::SelectNavigate(id));
    if cx.doc.is_disabled(option) {
        cx.doc.add_class(item, classes::DISABLED);
    }
    cx.doc.append_child(parent, item)?;
    Ok(SelectItem {
        item,
        option,
        value: cx.doc.value(option),
    })
}

/// What navigation needs, copied out of the instance.
struct View {
    wrapper: NodeId,
    text_wrapper: NodeId,
    input: NodeId,
    dropdown: NodeId,
    text_data: NodeId,
    nodes: Vec<NodeId>,
    /// Indices of the enabled items, in order.
    enabled: Vec<usize>,
    current: Option<usize>,
    hovered: Option<usize>,
    title_change: TitleChange,
}

impl View {
    fn of(cx: &PlasticContext, id: InstanceId) -> Option<Self> {
        let inst = cx.widget(id)?;
        let state = inst.select()?;
        let nodes: Vec<NodeId> = state.items.iter().map(|i| i.item).collect();
        let enabled = (0..nodes.len())
            .filter(|i| !is_disabled(&cx.doc, state.content, nodes[*i]))
            .collect();
        Some(Self {
            wrapper: inst.wrapper,
            text_wrapper: inst.text_wrapper,
            input: inst.input,
            dropdown: state.dropdown,
            text_data: state.text_data,
            nodes,
            enabled,
            current: state.current,
            hovered: state.hovered,
            title_change: inst.config.title_change_to,
        })
    }

    /// Position of an item among the enabled ones.
    fn position(&self, item: usize) -> Option<usize> {
        self.enabled.iter().position(|e| *e == item)
    }

    fn is_open(&self, doc: &Document<Action>) -> bool {
        !doc.is_hidden(self.dropdown)
    }
}

/// An item is disabled when it or its group carries the `disabled` class.
fn is_disabled(doc: &Document<Action>, content: NodeId, item: NodeId) -> bool {
    doc.path_to_root(item)
        .into_iter()
        .take_while(|n| *n != content)
        .any(|n| doc.has_class(n, classes::DISABLED))
}

fn state_mut(cx: &mut PlasticContext, id: InstanceId) -> Option<&mut SelectState> {
    cx.widget_mut(id).and_then(WidgetInstance::select_mut)
}

fn open(cx: &mut PlasticContext, id: InstanceId) {
    let Some(view) = View::of(cx, id) else {
        return;
    };
    if view.is_open(&cx.doc) {
        return;
    }
    if let Some(other) = cx.open_select.filter(|o| *o != id) {
        close(cx, other);
    }
    cx.open_select = Some(id);

    let root = cx.doc.root();
    cx.doc.unbind(root, &BindingFilter::namespace(OUTSIDE));
    for ty in [EventType::Click, EventType::FocusIn] {
        cx.doc.bind(root, ty, OUTSIDE, Action::SelectOutside(id));
    }

    cx.doc.set_hidden(view.dropdown, false);
    if cx.doc.viewport().y1 < cx.doc.bounds(view.dropdown).y1 {
        cx.doc.add_class(view.dropdown, classes::SELECT_BOTTOM);
    }
    if let Some(current) = view.current {
        scroll(cx, &view, current);
    }
    cx.doc.add_class(view.text_wrapper, classes::FOCUS);
    debug!("{id}: dropdown opened");
}

/// Hides the dropdown, drops the hover mark and blurs the receiver.
fn close(cx: &mut PlasticContext, id: InstanceId) {
    let Some(view) = View::of(cx, id) else {
        return;
    };
    if cx.open_select == Some(id) {
        cx.open_select = None;
        let root = cx.doc.root();
        cx.doc.unbind(root, &BindingFilter::namespace(OUTSIDE));
    }
    let was_open = view.is_open(&cx.doc);
    cx.doc.set_hidden(view.dropdown, true);
    cx.doc.remove_class(view.dropdown, classes::SELECT_BOTTOM);
    if let Some(hovered) = view.hovered {
        cx.doc.remove_class(view.nodes[hovered], classes::HOVER);
    }
    if let Some(state) = state_mut(cx, id) {
        state.hovered = None;
    }
    cx.doc.remove_class(view.text_wrapper, classes::FOCUS);
    if cx.doc.focused() == Some(view.text_wrapper) {
        cx.trigger_event(Event::synthetic(EventType::Blur, view.text_wrapper));
    }
    if was_open {
        debug!("{id}: dropdown closed");
    }
}

/// Receiver click or focus-in.
pub(crate) fn toggle(cx: &mut PlasticContext, id: InstanceId, event: &mut Event) {
    match event.ty {
        EventType::FocusIn => {
            // The click that follows a pointer focus does the toggling.
            if event.focus_from == Some(FocusFrom::Mouse) {
                return;
            }
            event.stop_propagation();
            open(cx, id);
        }
        EventType::Click => {
            let open_now = View::of(cx, id).is_some_and(|v| v.is_open(&cx.doc));
            if open_now {
                close(cx, id);
            } else {
                open(cx, id);
            }
        }
        _ => {}
    }
}

/// Document-level click or focus-in while the dropdown is open.
pub(crate) fn outside(cx: &mut PlasticContext, id: InstanceId, event: &Event) {
    let Some(view) = View::of(cx, id) else {
        return;
    };
    let target = event.target;
    if target == cx.doc.root() || cx.doc.contains(view.wrapper, target) {
        cx.trigger_event(Event::synthetic(EventType::Focus, view.text_wrapper));
    } else {
        close(cx, id);
    }
}

fn is_navigation_key(key: Key) -> bool {
    matches!(
        key,
        Key::PageUp
            | Key::PageDown
            | Key::End
            | Key::Home
            | Key::ArrowLeft
            | Key::ArrowUp
            | Key::ArrowRight
            | Key::ArrowDown
    )
}

/// Next position for a navigation key, wrapping at both ends.
fn step(key: Key, from: usize, last: usize) -> usize {
    // round(last / 5)
    let page = (last + 2) / 5;
    match key {
        Key::Home => 0,
        Key::End => last,
        Key::PageDown if from + page > last => 0,
        Key::PageDown => from + page,
        Key::ArrowDown | Key::ArrowRight if from >= last => 0,
        Key::ArrowDown | Key::ArrowRight => from + 1,
        Key::PageUp => from.checked_sub(page).unwrap_or(last),
        Key::ArrowUp | Key::ArrowLeft => from.checked_sub(1).unwrap_or(last),
        _ => from,
    }
}

fn starts_with_ignore_case(text: &str, ch: char) -> bool {
    text.trim()
        .chars()
        .next()
        .is_some_and(|first| first.to_lowercase().eq(ch.to_lowercase()))
}

/// Keyboard and pointer navigation over the enabled items.
pub(crate) fn navigate(cx: &mut PlasticContext, id: InstanceId, node: NodeId, event: &mut Event) {
    if widget_disabled(cx, id) {
        return;
    }
    let Some(view) = View::of(cx, id) else {
        return;
    };
    let Some(last) = view.enabled.len().checked_sub(1) else {
        return;
    };
    let hovered = view.hovered.and_then(|h| view.position(h));
    let current = view.current.and_then(|c| view.position(c));

    let next = match event.ty {
        EventType::MouseMove => view.enabled.iter().position(|i| view.nodes[*i] == node),
        EventType::KeyDown => {
            let Some(key) = event.key else {
                return;
            };
            if key == Key::Enter {
                choose(cx, id, node, event);
                return;
            }
            if !is_navigation_key(key) {
                return;
            }
            event.prevent_default();
            Some(step(key, hovered.or(current).unwrap_or(0), last))
        }
        EventType::KeyPress => {
            let Some(ch) = event.key.and_then(Key::char) else {
                return;
            };
            let alt = event.modifiers.contains(Modifiers::ALT);
            let ctrl = event.modifiers.contains(Modifiers::CTRL);
            if ch <= ' ' || alt != ctrl {
                return;
            }
            let start = hovered.or(current).map_or(0, |p| p + 1);
            let len = view.enabled.len();
            (start.min(len)..len)
                .chain(0..start.min(len))
                .find(|p| starts_with_ignore_case(cx.doc.text(view.nodes[view.enabled[*p]]), ch))
        }
        _ => None,
    };

    let Some(next) = next else {
        return;
    };
    if Some(next) == hovered {
        return;
    }
    let item = view.enabled[next];
    if let Some(old) = view.hovered {
        cx.doc.remove_class(view.nodes[old], classes::HOVER);
    }
    cx.doc.add_class(view.nodes[item], classes::HOVER);
    if let Some(state) = state_mut(cx, id) {
        state.hovered = Some(item);
    }
    if event.ty != EventType::MouseMove {
        scroll(cx, &view, item);
    }
}

fn scroll(cx: &mut PlasticContext, view: &View, item: usize) {
    if view.enabled.last() == Some(&item) {
        cx.doc.scroll_to_end(view.dropdown);
    } else {
        cx.doc.scroll_to(view.dropdown, view.nodes[item]);
    }
}

/// Item click, or Enter on the hovered item: close and choose.
pub(crate) fn choose(cx: &mut PlasticContext, id: InstanceId, node: NodeId, event: &Event) {
    if widget_disabled(cx, id) {
        return;
    }
    let Some(view) = View::of(cx, id) else {
        return;
    };
    let item = if event.ty == EventType::KeyDown {
        view.hovered
    } else {
        view.nodes.iter().position(|n| *n == node)
    };
    if item.is_some_and(|i| view.position(i).is_none()) {
        return;
    }
    close(cx, id);
    if let Some(item) = item
        && view.current != Some(item)
    {
        choose_item(cx, id, item);
    }
}

fn widget_disabled(cx: &PlasticContext, id: InstanceId) -> bool {
    cx.widget(id).is_some_and(|inst| inst.disabled)
}

/// Makes `item` the current option and fires `change` on the hidden input.
fn choose_item(cx: &mut PlasticContext, id: InstanceId, item: usize) {
    let Some(view) = View::of(cx, id) else {
        return;
    };
    let Some(value) = cx
        .widget(id)
        .and_then(WidgetInstance::select)
        .and_then(|s| s.items.get(item))
        .map(|i| i.value.clone())
    else {
        return;
    };
    if let Some(previous) = view.current {
        cx.doc.remove_class(view.nodes[previous], classes::SELECT_ACTIVE);
    }
    if let Some(state) = state_mut(cx, id) {
        state.current = Some(item);
    }

    let node = view.nodes[item];
    if let Err(err) = cx.set_val(view.input, value) {
        warn!("{id}: cannot store option value: {err}");
    }
    let text = cx.doc.text(node).trim().to_string();
    cx.doc.set_text(view.text_data, &text);
    cx.doc.add_class(node, classes::SELECT_ACTIVE);
    let title: Option<String> = match view.title_change {
        TitleChange::Off => None,
        TitleChange::Text => Some(text),
        TitleChange::Title => Some(cx.doc.attr(node, "title").unwrap_or("").trim().to_string()),
    };
    if let Some(title) = title {
        cx.doc.set_attr(view.text_wrapper, "title", &title);
    }
    debug!("{id}: option {item} chosen");
    cx.trigger_event(Event::synthetic(EventType::Change, view.input));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_wrap() {
        // 11 items: last = 10, page = 2.
        assert_eq!(step(Key::ArrowDown, 10, 10), 0);
        assert_eq!(step(Key::ArrowUp, 0, 10), 10);
        assert_eq!(step(Key::PageDown, 7, 10), 9);
        assert_eq!(step(Key::PageDown, 9, 10), 0);
        assert_eq!(step(Key::PageUp, 1, 10), 10);
        assert_eq!(step(Key::PageUp, 5, 10), 3);
        assert_eq!(step(Key::Home, 5, 10), 0);
        assert_eq!(step(Key::End, 5, 10), 10);
    }

    #[test]
    fn page_is_rounded_fifth() {
        assert_eq!(step(Key::PageDown, 0, 12), 2);
        assert_eq!(step(Key::PageDown, 0, 13), 3);
        // Fewer than three items: a page is zero.
        assert_eq!(step(Key::PageDown, 1, 2), 1);
    }

    #[test]
    fn type_ahead_match() {
        assert!(starts_with_ignore_case("  Banana", 'b'));
        assert!(starts_with_ignore_case("cherry", 'C'));
        assert!(!starts_with_ignore_case("", 'a'));
    }
}
