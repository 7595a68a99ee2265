// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Plastic: re-skinnable form controls.
//!
//! A *widget* replaces a native form control (text, password, textarea,
//! checkbox, radio, file or select) with styleable markup while keeping its
//! behavior: value access, focus, disabled state, label clicks and change
//! events. The original element is detached and kept, so a widget can be
//! restored with its current state.
//!
//! ## Core Concepts
//!
//! - [`PlasticContext`]: owns an [`understory_dom::Document`], the accessor
//!   hooks and every live widget. Builds, enables, disables and restores.
//! - Markup: a wrapper `div` carrying the [`classes::BASE`] and type classes,
//!   holding a text wrapper (the visible box) and the inner input that keeps
//!   the value. Checkboxes, radios and selects take focus on the text wrapper.
//! - Value hooks: while any widget is live, reading or writing the value of a
//!   wrapper `div` through [`PlasticContext::val`] and
//!   [`PlasticContext::set_val`] reaches the widget. The hook is registered
//!   with the first widget and removed with the last.
//! - Events: [`PlasticContext::click`], [`PlasticContext::focus`] and friends
//!   simulate user input; [`PlasticContext::trigger`] fires program events.
//!   With [`Config::forward_events`], events on the inner input reach the
//!   wrapper and events on the wrapper reach the input, each exactly once.
//! - Focus origin: focus caused by a pointer press is told apart from keyboard
//!   and program focus, so a select opens on click rather than on the focus
//!   that precedes it.
//!
//! ## Example
//!
//! ```rust
//! use overstory_plastic::{Command, Config, PlasticContext, Value, classes};
//!
//! let mut cx = PlasticContext::new();
//! let doc = cx.document_mut();
//! let check = doc.create_element("input");
//! doc.set_attr(check, "type", "checkbox");
//! doc.set_attr(check, "id", "agree");
//! doc.append_child(doc.root(), check).unwrap();
//!
//! let id = cx.run(check, Command::Init, &Config::default()).unwrap().unwrap();
//! let widget = cx.instance(id).unwrap();
//! let (wrapper, receiver) = (widget.wrapper(), widget.receiver());
//! assert!(cx.document().has_class(wrapper, classes::CHECKBOX));
//!
//! cx.click(receiver).unwrap();
//! assert!(cx.document().has_class(receiver, classes::CHECKED));
//!
//! cx.run(wrapper, Command::Disable, &Config::default()).unwrap();
//! cx.click(receiver).unwrap();
//! assert!(cx.document().has_class(receiver, classes::CHECKED));
//!
//! // The source comes back checked and disabled.
//! cx.run(wrapper, Command::Restore, &Config::default()).unwrap();
//! assert!(cx.document().is_checked(check));
//! assert!(cx.document().is_disabled(check));
//! assert_eq!(cx.val(check).unwrap(), Value::from("on"));
//! ```
//!
//! ## Logging
//!
//! Structural changes (widgets built, enabled, restored, dropdowns opened)
//! are logged at `debug`, hook routing and dispatch at `trace`, and calls that
//! were refused or degraded at `warn`, all through the [`log`] facade.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod adapter;
pub mod classes;
mod config;
mod context;
mod error;
mod events;
mod instance;
mod value;

pub use action::{Action, INTERNAL, LISTENER, ListenerId, OUTSIDE, Part, STATE, WIDGET};
pub use config::{Config, ConfigBuilder, ConfigError, FileConfig, TitleChange};
pub use context::{PlasticContext, PlasticHooks};
pub use error::PlasticError;
pub use instance::{
    AdapterState, BooleanKind, Command, ControlType, InstanceId, SelectItem, SelectState,
    WidgetInstance,
};
pub use value::Value;
