// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Form-oriented scenarios across tree, bindings and dispatch.

use understory_dom::{
    AttrCopy, BindingFilter, Document, Event, EventType, Namespace, Selector, dispatch,
};

const WIDGET: Namespace = Namespace("widget");
const STATE: Namespace = Namespace("widget-state");

fn form() -> (Document<&'static str>, understory_dom::NodeId) {
    let mut doc = Document::new();
    let form = doc.create_element("form");
    doc.append_child(doc.root(), form).unwrap();
    (doc, form)
}

#[test]
fn label_lookup_by_for_attribute() {
    let (mut doc, form) = form();
    let label = doc.create_element("label");
    doc.set_attr(label, "for", "agree");
    let input = doc.create_element("input");
    doc.set_attr(input, "id", "agree");
    doc.append_child(form, label).unwrap();
    doc.append_child(form, input).unwrap();

    let id = doc.attr(input, "id").unwrap().to_string();
    let found = doc.find(doc.root(), &Selector::tag("label").with_attr("for", &id));
    assert_eq!(found, Some(label));
}

#[test]
fn namespaces_unbind_independently() {
    let (mut doc, form) = form();
    let input = doc.create_element("input");
    doc.append_child(form, input).unwrap();
    doc.bind(input, EventType::Click, WIDGET, "forward");
    doc.bind(input, EventType::Click, STATE, "toggle");
    doc.bind(input, EventType::Change, WIDGET, "changed");

    assert_eq!(
        doc.unbind(input, &BindingFilter::namespace(STATE).with_event(EventType::Click)),
        1
    );
    let actions: Vec<_> = doc.bindings(input).iter().map(|b| b.action).collect();
    assert_eq!(actions, ["forward", "changed"]);
    assert_eq!(doc.unbind(input, &BindingFilter::namespace(WIDGET)), 2);
    assert!(doc.bindings(input).is_empty());
}

#[test]
fn wrapping_and_unwrapping_an_input() {
    let (mut doc, form) = form();
    let source = doc.create_element("input");
    doc.set_attr(source, "id", "name");
    doc.set_attr(source, "class", "big");
    doc.append_child(form, source).unwrap();

    let wrapper = doc.create_element("div");
    doc.insert_after(source, wrapper).unwrap();
    doc.detach(source);
    doc.copy_attrs(source, wrapper, &AttrCopy::only(&["id", "class"]));
    assert_eq!(doc.children(form), &[wrapper]);
    assert!(!doc.is_connected(source));
    assert_eq!(doc.attr(wrapper, "class"), Some("big"));

    doc.insert_before(wrapper, source).unwrap();
    doc.destroy(wrapper).unwrap();
    assert_eq!(doc.children(form), &[source]);
    assert!(doc.is_connected(source));
}

#[test]
fn bubbling_change_reaches_form() {
    let (mut doc, form) = form();
    let input = doc.create_element("input");
    doc.append_child(form, input).unwrap();
    doc.bind(form, EventType::Change, WIDGET, "form-change");
    doc.bind(form, EventType::Blur, WIDGET, "form-blur");

    let mut change = Event::synthetic(EventType::Change, input);
    let seq = doc.dispatch_sequence(&change);
    let mut seen = Vec::new();
    dispatch::run(&seq, &mut change, |d, _| seen.push((d.node, d.action)));
    assert_eq!(seen, [(form, "form-change")]);

    let blur = Event::synthetic(EventType::Blur, input);
    assert!(doc.dispatch_sequence(&blur).is_empty());
}
