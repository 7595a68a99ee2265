// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Select widgets: dropdown, navigation and choice.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::Rect;
use overstory_plastic::{
    AdapterState, Config, ControlType, InstanceId, PlasticContext, SelectState, TitleChange, Value,
    WidgetInstance, classes,
};
use understory_dom::{EventType, Key, Modifiers, NodeId, Selector};

struct Fruit {
    source: NodeId,
    options: Vec<NodeId>,
    w: WidgetInstance,
}

fn option(cx: &mut PlasticContext, parent: NodeId, value: &str, text: &str) -> NodeId {
    let doc = cx.document_mut();
    let option = doc.create_element("option");
    doc.set_attr(option, "value", value);
    doc.set_text(option, text);
    doc.append_child(parent, option).unwrap();
    option
}

/// `Apple`, disabled `Banana`, then a `More` group with `Cherry` and `Date`.
fn fruit_source(cx: &mut PlasticContext) -> (NodeId, Vec<NodeId>) {
    let doc = cx.document_mut();
    let source = doc.create_element("select");
    doc.set_attr(source, "id", "fruit");
    doc.set_attr(source, "name", "fruit");
    doc.append_child(doc.root(), source).unwrap();

    let a = option(cx, source, "a", "Apple");
    let b = option(cx, source, "b", "Banana");
    cx.document_mut().set_attr(b, "disabled", "disabled");
    let doc = cx.document_mut();
    let group = doc.create_element("optgroup");
    doc.set_attr(group, "label", "More");
    doc.append_child(source, group).unwrap();
    let c = option(cx, group, "c", "Cherry");
    let d = option(cx, group, "d", "  Date ");
    cx.document_mut().set_attr(d, "title", " Sweet ");
    (source, vec![a, b, c, d])
}

fn fruit(cx: &mut PlasticContext, config: &Config) -> Fruit {
    let (source, options) = fruit_source(cx);
    let id = cx.transform(source, config).unwrap();
    Fruit {
        source,
        options,
        w: cx.instance(id).unwrap().clone(),
    }
}

fn state(cx: &PlasticContext, id: InstanceId) -> &SelectState {
    match cx.adapter_state(id).unwrap() {
        AdapterState::Select(state) => state,
        other => panic!("not a select: {other:?}"),
    }
}

fn is_open(cx: &PlasticContext, id: InstanceId) -> bool {
    !cx.document().is_hidden(state(cx, id).dropdown())
}

fn item(cx: &PlasticContext, id: InstanceId, index: usize) -> NodeId {
    state(cx, id).items()[index].item
}

fn current(cx: &PlasticContext, id: InstanceId) -> Option<String> {
    state(cx, id).current().map(|i| i.value.clone())
}

fn hovered(cx: &PlasticContext, id: InstanceId) -> Option<String> {
    state(cx, id).hovered().map(|i| i.value.clone())
}

fn key(cx: &mut PlasticContext, node: NodeId, key: Key) -> understory_dom::Event {
    cx.key_down(node, key, Modifiers::empty()).unwrap()
}

#[test]
fn select_markup() {
    let mut cx = PlasticContext::new();
    let f = fruit(&mut cx, &Config::default());
    let id = f.w.id();
    let doc = cx.document();

    assert_eq!(f.w.control(), ControlType::Select);
    assert!(doc.has_class(f.w.wrapper(), classes::SELECT));
    assert_eq!(f.w.receiver(), f.w.text_wrapper());
    assert_eq!(doc.attr(f.w.text_wrapper(), "tabindex"), Some("0"));
    assert_eq!(doc.input_type(f.w.input()).as_deref(), Some("hidden"));
    assert_eq!(doc.attr(f.w.input(), "name"), Some("fruit"));
    assert!(!is_open(&cx, id));

    let s = state(&cx, id);
    let values: Vec<&str> = s.items().iter().map(|i| i.value.as_str()).collect();
    assert_eq!(values, ["a", "b", "c", "d"]);
    let options: Vec<NodeId> = s.items().iter().map(|i| i.option).collect();
    assert_eq!(options, f.options);
    assert_eq!(doc.text(item(&cx, id, 0)), "Apple");
    assert!(doc.has_class(item(&cx, id, 1), classes::DISABLED));
    // Titled options show their text as the title by default.
    assert_eq!(doc.attr(item(&cx, id, 3), "title"), Some("Date"));
    assert_eq!(doc.attr(item(&cx, id, 0), "title"), None);

    let group = doc
        .find(s.dropdown(), &Selector::class(classes::SELECT_OPTION_GROUP))
        .unwrap();
    let heading = doc.find(group, &Selector::tag("h3")).unwrap();
    assert_eq!(doc.text(heading), "More");
    assert!(doc.find(s.dropdown(), &Selector::class(classes::OVERLAY)).is_some());

    // The first enabled option is shown.
    assert_eq!(current(&cx, id).as_deref(), Some("a"));
    assert_eq!(doc.text(s.text_data()), "Apple");
    assert!(doc.has_class(item(&cx, id, 0), classes::SELECT_ACTIVE));
    assert_eq!(doc.attr(f.w.text_wrapper(), "title"), Some("Apple"));
    assert_eq!(cx.val(f.w.wrapper()).unwrap(), Value::from("a"));
}

#[test]
fn selected_source_option_is_shown() {
    let mut cx = PlasticContext::new();
    let (source, options) = fruit_source(&mut cx);
    cx.document_mut().set_selected(options[2], true);
    let id = cx.transform(source, &Config::default()).unwrap();
    assert_eq!(current(&cx, id).as_deref(), Some("c"));
    let wrapper = cx.instance(id).unwrap().wrapper();
    assert_eq!(cx.val(wrapper).unwrap(), Value::from("c"));
}

#[test]
fn click_opens_and_option_click_chooses() {
    let mut cx = PlasticContext::new();
    let f = fruit(&mut cx, &Config::default());
    let id = f.w.id();
    let tw = f.w.text_wrapper();

    // Pointer focus alone does not open; the click does.
    cx.mouse_down(tw).unwrap();
    assert!(!is_open(&cx, id));
    cx.trigger(tw, EventType::Click).unwrap();
    assert!(is_open(&cx, id));
    assert_eq!(cx.open_select(), Some(id));
    assert!(cx.document().has_class(tw, classes::FOCUS));

    let date = item(&cx, id, 3);
    cx.click(date).unwrap();
    assert!(!is_open(&cx, id));
    assert_eq!(cx.open_select(), None);
    assert_eq!(current(&cx, id).as_deref(), Some("d"));
    assert_eq!(cx.val(f.w.wrapper()).unwrap(), Value::from("d"));
    let doc = cx.document();
    assert_eq!(doc.text(state(&cx, id).text_data()), "Date");
    assert_eq!(doc.attr(tw, "title"), Some("Date"));
    assert!(doc.has_class(date, classes::SELECT_ACTIVE));
    assert!(!doc.has_class(item(&cx, id, 0), classes::SELECT_ACTIVE));
    assert!(!doc.has_class(tw, classes::FOCUS));
    assert_eq!(doc.focused(), None);
    assert!(doc.bindings(doc.root()).is_empty());
}

#[test]
fn clicking_the_box_again_closes() {
    let mut cx = PlasticContext::new();
    let f = fruit(&mut cx, &Config::default());
    let tw = f.w.text_wrapper();
    cx.click(tw).unwrap();
    assert!(is_open(&cx, f.w.id()));
    cx.click(tw).unwrap();
    assert!(!is_open(&cx, f.w.id()));
    assert_eq!(current(&cx, f.w.id()).as_deref(), Some("a"));
}

#[test]
fn disabled_options_cannot_be_chosen() {
    let mut cx = PlasticContext::new();
    let f = fruit(&mut cx, &Config::default());
    let id = f.w.id();
    cx.click(f.w.text_wrapper()).unwrap();

    let banana = item(&cx, id, 1);
    cx.mouse_move(banana).unwrap();
    assert_eq!(hovered(&cx, id), None);
    cx.click(banana).unwrap();
    assert!(is_open(&cx, id));
    assert_eq!(current(&cx, id).as_deref(), Some("a"));
    // Focus went back to the box while the list stays open.
    assert_eq!(cx.document().focused(), Some(f.w.text_wrapper()));
}

#[test]
fn outside_clicks_close() {
    let mut cx = PlasticContext::new();
    let f = fruit(&mut cx, &Config::default());
    let id = f.w.id();
    let doc = cx.document_mut();
    let field = doc.create_element("input");
    let note = doc.create_element("div");
    doc.append_child(doc.root(), field).unwrap();
    doc.append_child(doc.root(), note).unwrap();

    cx.click(f.w.text_wrapper()).unwrap();
    assert!(is_open(&cx, id));
    cx.click(note).unwrap();
    assert!(!is_open(&cx, id));
    assert_eq!(cx.document().focused(), None);

    cx.click(f.w.text_wrapper()).unwrap();
    assert!(is_open(&cx, id));
    cx.click(field).unwrap();
    assert!(!is_open(&cx, id));
    assert_eq!(cx.document().focused(), Some(field));
    assert_eq!(current(&cx, id).as_deref(), Some("a"));
}

#[test]
fn only_one_dropdown_is_open() {
    let mut cx = PlasticContext::new();
    let first = fruit(&mut cx, &Config::default());
    let second = fruit(&mut cx, &Config::default());

    cx.click(first.w.text_wrapper()).unwrap();
    assert_eq!(cx.open_select(), Some(first.w.id()));
    cx.click(second.w.text_wrapper()).unwrap();
    assert!(!is_open(&cx, first.w.id()));
    assert!(is_open(&cx, second.w.id()));
    assert_eq!(cx.open_select(), Some(second.w.id()));
}

#[test]
fn keyboard_focus_opens_and_keys_navigate() {
    let mut cx = PlasticContext::new();
    let f = fruit(&mut cx, &Config::default());
    let id = f.w.id();
    let tw = f.w.text_wrapper();

    cx.focus(tw).unwrap();
    assert!(is_open(&cx, id));

    // Navigation skips the disabled option and wraps.
    let ev = key(&mut cx, tw, Key::ArrowDown);
    assert!(ev.default_prevented);
    assert_eq!(hovered(&cx, id).as_deref(), Some("c"));
    assert!(cx.document().has_class(item(&cx, id, 2), classes::HOVER));
    key(&mut cx, tw, Key::ArrowDown);
    assert_eq!(hovered(&cx, id).as_deref(), Some("d"));
    assert!(!cx.document().has_class(item(&cx, id, 2), classes::HOVER));
    key(&mut cx, tw, Key::ArrowRight);
    assert_eq!(hovered(&cx, id).as_deref(), Some("a"));
    key(&mut cx, tw, Key::ArrowUp);
    assert_eq!(hovered(&cx, id).as_deref(), Some("d"));
    key(&mut cx, tw, Key::Home);
    assert_eq!(hovered(&cx, id).as_deref(), Some("a"));
    key(&mut cx, tw, Key::End);
    assert_eq!(hovered(&cx, id).as_deref(), Some("d"));

    // Unrelated keys keep their default.
    let ev = key(&mut cx, tw, Key::Tab);
    assert!(!ev.default_prevented);

    key(&mut cx, tw, Key::Enter);
    assert!(!is_open(&cx, id));
    assert_eq!(current(&cx, id).as_deref(), Some("d"));
    assert_eq!(hovered(&cx, id), None);
    assert_eq!(cx.val(f.w.wrapper()).unwrap(), Value::from("d"));
}

#[test]
fn typing_jumps_to_matching_options() {
    let mut cx = PlasticContext::new();
    let f = fruit(&mut cx, &Config::default());
    let id = f.w.id();
    let tw = f.w.text_wrapper();

    cx.key_press(tw, 'd', Modifiers::empty()).unwrap();
    assert_eq!(hovered(&cx, id).as_deref(), Some("d"));
    // The search continues after the hovered option and wraps around.
    cx.key_press(tw, 'A', Modifiers::empty()).unwrap();
    assert_eq!(hovered(&cx, id).as_deref(), Some("a"));
    // Disabled options are never matched.
    cx.key_press(tw, 'b', Modifiers::empty()).unwrap();
    assert_eq!(hovered(&cx, id).as_deref(), Some("a"));

    // Shortcuts are left alone; AltGr (Ctrl+Alt) still types.
    cx.key_press(tw, 'c', Modifiers::CTRL).unwrap();
    assert_eq!(hovered(&cx, id).as_deref(), Some("a"));
    cx.key_press(tw, 'c', Modifiers::CTRL | Modifiers::ALT).unwrap();
    assert_eq!(hovered(&cx, id).as_deref(), Some("c"));
    cx.key_press(tw, ' ', Modifiers::empty()).unwrap();
    assert_eq!(hovered(&cx, id).as_deref(), Some("c"));
}

#[test]
fn value_setter_by_index_or_value() {
    let mut cx = PlasticContext::new();
    let f = fruit(&mut cx, &Config::default());
    let id = f.w.id();
    let wrapper = f.w.wrapper();

    // Indices count enabled options only.
    cx.set_val(wrapper, Value::Index(1)).unwrap();
    assert_eq!(cx.val(wrapper).unwrap(), Value::from("c"));
    cx.set_val(wrapper, "d").unwrap();
    assert_eq!(current(&cx, id).as_deref(), Some("d"));

    cx.set_val(wrapper, "b").unwrap();
    cx.set_val(wrapper, "nope").unwrap();
    cx.set_val(wrapper, Value::Index(9)).unwrap();
    assert_eq!(cx.val(wrapper).unwrap(), Value::from("d"));
}

#[test]
fn change_reaches_the_wrapper_once_per_choice() {
    let mut cx = PlasticContext::new();
    let f = fruit(&mut cx, &Config::default());
    let changes = Rc::new(Cell::new(0));
    let count = changes.clone();
    cx.on(f.w.wrapper(), EventType::Change, move |_| count.set(count.get() + 1))
        .unwrap();

    cx.set_val(f.w.wrapper(), "c").unwrap();
    assert_eq!(changes.get(), 1);

    // Choosing the current option again fires nothing.
    cx.click(f.w.text_wrapper()).unwrap();
    let cherry = item(&cx, f.w.id(), 2);
    cx.click(cherry).unwrap();
    assert!(!is_open(&cx, f.w.id()));
    assert_eq!(changes.get(), 1);
}

#[test]
fn disabled_select_does_not_open() {
    let mut cx = PlasticContext::new();
    let f = fruit(&mut cx, &Config::default());
    let id = f.w.id();
    cx.click(f.w.text_wrapper()).unwrap();
    cx.disable(id).unwrap();
    assert!(!is_open(&cx, id), "disabling closes the dropdown");

    cx.click(f.w.text_wrapper()).unwrap();
    cx.trigger(f.w.text_wrapper(), EventType::FocusIn).unwrap();
    assert!(!is_open(&cx, id));

    cx.enable(id).unwrap();
    cx.click(f.w.text_wrapper()).unwrap();
    assert!(is_open(&cx, id));
}

#[test]
fn disabled_select_ignores_the_keyboard() {
    let mut cx = PlasticContext::new();
    let f = fruit(&mut cx, &Config::default());
    let id = f.w.id();
    let changes = Rc::new(Cell::new(0));
    let seen = changes.clone();
    cx.on(f.w.wrapper(), EventType::Change, move |_| seen.set(seen.get() + 1))
        .unwrap();
    cx.disable(id).unwrap();

    let receiver = f.w.receiver();
    for key in [Key::ArrowDown, Key::End, Key::Enter] {
        cx.key_down(receiver, key, Modifiers::empty()).unwrap();
    }
    cx.key_press(receiver, 'c', Modifiers::empty()).unwrap();
    cx.key_down(receiver, Key::Enter, Modifiers::empty())
        .unwrap();
    assert_eq!(current(&cx, id).as_deref(), Some("a"));
    assert_eq!(cx.val(f.w.wrapper()).unwrap(), Value::from("a"));
    assert_eq!(changes.get(), 0);

    cx.click(item(&cx, id, 2)).unwrap();
    assert_eq!(current(&cx, id).as_deref(), Some("a"));

    // Keys work again once enabled.
    cx.enable(id).unwrap();
    cx.key_down(receiver, Key::ArrowDown, Modifiers::empty())
        .unwrap();
    cx.key_down(receiver, Key::Enter, Modifiers::empty())
        .unwrap();
    assert_eq!(current(&cx, id).as_deref(), Some("c"));
    assert_eq!(changes.get(), 1);
}

#[test]
fn dropdown_below_the_viewport_opens_upwards() {
    let mut cx = PlasticContext::new();
    let f = fruit(&mut cx, &Config::default());
    let dropdown = state(&cx, f.w.id()).dropdown();
    cx.document_mut()
        .set_bounds(dropdown, Rect::new(0.0, 700.0, 200.0, 900.0));

    cx.click(f.w.text_wrapper()).unwrap();
    assert!(cx.document().has_class(dropdown, classes::SELECT_BOTTOM));
    cx.click(f.w.text_wrapper()).unwrap();
    assert!(!cx.document().has_class(dropdown, classes::SELECT_BOTTOM));
}

#[test]
fn restore_selects_the_current_option() {
    let mut cx = PlasticContext::new();
    let f = fruit(&mut cx, &Config::default());
    cx.set_val(f.w.wrapper(), "c").unwrap();
    cx.click(f.w.text_wrapper()).unwrap();

    let restored = cx.restore(f.w.id()).unwrap();
    assert_eq!(restored, f.source);
    let doc = cx.document();
    assert!(doc.is_selected(f.options[2]));
    assert_eq!(doc.value(f.source), "c");
    assert_eq!(doc.attr(f.source, "id"), Some("fruit"));
    assert_eq!(cx.open_select(), None);
    assert!(doc.bindings(doc.root()).is_empty());
}

#[test]
fn title_options() {
    let mut cx = PlasticContext::new();
    let off = Config::builder()
        .title_change_to(TitleChange::Off)
        .build()
        .unwrap();
    let f = fruit(&mut cx, &off);
    assert_eq!(cx.document().attr(f.w.text_wrapper(), "title"), None);

    let titles = Config::builder()
        .title_change_to(TitleChange::Title)
        .option_title_from_text(true)
        .use_overlay(false)
        .build()
        .unwrap();
    let g = fruit(&mut cx, &titles);
    let own = Config::builder()
        .option_title_from_text(false)
        .build()
        .unwrap();
    let h = fruit(&mut cx, &own);
    assert_eq!(
        cx.document().attr(item(&cx, h.w.id(), 3), "title"),
        Some("Sweet")
    );
    let id = g.w.id();
    assert_eq!(cx.document().attr(g.w.text_wrapper(), "title"), Some(""));
    assert_eq!(cx.document().attr(item(&cx, id, 3), "title"), Some("Date"));
    cx.set_val(g.w.wrapper(), "d").unwrap();
    assert_eq!(cx.document().attr(g.w.text_wrapper(), "title"), Some("Date"));
    let dropdown = state(&cx, id).dropdown();
    assert!(
        cx.document()
            .find(dropdown, &Selector::class(classes::OVERLAY))
            .is_none()
    );
}
