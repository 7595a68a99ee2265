// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plastic form controls basics.
//!
//! Turn a tiny form into plastic widgets, drive them with clicks and keys,
//! read values back through the value hooks, and restore the originals.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example plastic_basics`

use overstory_plastic::{Command, Config, PlasticContext, PlasticError, Value};
use understory_dom::{EventType, Key, Modifiers, NodeId, Selector};
use understory_hooks::{AccessorKind, Handlers, Predicate};

fn element(cx: &mut PlasticContext, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let doc = cx.document_mut();
    let node = doc.create_element(tag);
    for (name, value) in attrs {
        doc.set_attr(node, name, value);
    }
    let root = doc.root();
    let _ = doc.append_child(root, node);
    node
}

fn main() -> Result<(), PlasticError> {
    env_logger::Builder::from_default_env()
        .filter_module("understory_dom", log::LevelFilter::Info)
        .init();

    let mut cx = PlasticContext::new();
    let config = Config::default();

    // A text field with a label.
    element(&mut cx, "label", &[("for", "nick")]);
    let nick = element(&mut cx, "input", &[("id", "nick"), ("value", "ferris")]);

    // A checkbox.
    let terms = element(&mut cx, "input", &[("type", "checkbox"), ("name", "terms")]);

    // A select with three options.
    let size = element(&mut cx, "select", &[("name", "size")]);
    for label in ["Small", "Medium", "Large"] {
        let doc = cx.document_mut();
        let option = doc.create_element("option");
        doc.set_attr(option, "value", &label.to_lowercase());
        doc.set_text(option, label);
        let _ = doc.append_child(size, option);
    }

    let mut widgets = Vec::new();
    for node in [nick, terms, size] {
        let id = cx.transform(node, &config)?;
        widgets.push(cx.instance(id)?.clone());
    }
    let [nick_w, terms_w, size_w] = [&widgets[0], &widgets[1], &widgets[2]];

    println!("nick   = {}", cx.val(nick_w.wrapper())?);
    cx.edit_value(nick_w.input(), "crab")?;
    println!("nick   = {} (edited)", cx.val(nick_w.wrapper())?);

    cx.click(terms_w.receiver())?;
    println!(
        "terms  checked = {}",
        cx.document().is_checked(terms_w.input())
    );

    // Open the dropdown, move down twice, and choose with Enter.
    cx.click(size_w.receiver())?;
    for key in [Key::ArrowDown, Key::ArrowDown, Key::Enter] {
        cx.key_down(size_w.receiver(), key, Modifiers::empty())?;
    }
    println!("size   = {}", cx.val(size_w.wrapper())?);
    cx.set_val(size_w.wrapper(), Value::Index(1))?;
    println!("size   = {} (set by index)", cx.val(size_w.wrapper())?);

    // Application listeners see changes on the wrapper.
    cx.on(size_w.wrapper(), EventType::Change, |ev| {
        println!("change event on {:?}", ev.target);
    })?;
    cx.set_val(size_w.wrapper(), "Small")?;

    // A custom attribute hook next to the widget hooks.
    cx.hooks_mut().registry_mut(AccessorKind::Attribute).register(
        "title",
        Predicate::Static(Selector::tag("select")),
        Handlers::new().with_get(|_, _| Some(Value::from("pick a size"))),
    );

    // Commands address a widget through its wrapper.
    cx.run(terms_w.wrapper(), Command::Disable, &config)?;
    cx.click(terms_w.receiver())?;
    println!(
        "terms  checked = {} (disabled, click ignored)",
        cx.document().is_checked(terms_w.input())
    );

    for widget in &widgets {
        let source = cx.restore(widget.id())?;
        println!(
            "restored <{}> value={} title={:?}",
            cx.document().tag(source).unwrap_or("?"),
            cx.val(source)?,
            cx.attr(source, "title")?,
        );
    }
    println!("value hook installed: {}", cx.is_value_hook_installed());
    Ok(())
}
