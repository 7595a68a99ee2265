// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory DOM: a small in-memory element tree for form widgets.
//!
//! The tree plays the part a browser DOM plays for a widget toolkit. It keeps
//! just enough state to build, restyle and restore form controls:
//!
//! - Structure: a generational arena ([`Document`], [`NodeId`]) with a
//!   permanent root, insertion next to siblings, detaching and destruction.
//! - Content: attributes, classes and text.
//! - Form state: values with HTML defaults, checked and selected flags,
//!   disabled and hidden state.
//! - Matching: single-element [`Selector`]s with `is`, `find` and `closest`.
//! - Focus and simple geometry for scrolling lists into view (via `kurbo`).
//! - Events: namespaced [`Binding`]s of an application-defined action type,
//!   and a [`dispatch`] helper that walks them target → root.
//! - [`AttrCopy`]: copy some or all attributes between elements, optionally
//!   transformed.
//!
//! The document never runs code on its own. Bindings hold plain data (`A`);
//! the embedding layer decides what an action does when [`dispatch::run`]
//! hands it over.
//!
//! ## Example
//!
//! ```rust
//! use understory_dom::{BindingFilter, Document, Event, EventType, Namespace, Selector};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Action { Toggle }
//!
//! let mut doc = Document::new();
//! let field = doc.create_element("input");
//! doc.set_attr(field, "type", "checkbox");
//! doc.append_child(doc.root(), field).unwrap();
//!
//! doc.bind(field, EventType::Click, Namespace("demo"), Action::Toggle);
//! let seq = doc.dispatch_sequence(&Event::native(EventType::Click, field));
//! assert_eq!(seq.len(), 1);
//!
//! assert_eq!(doc.unbind(field, &BindingFilter::namespace(Namespace("demo"))), 1);
//! assert!(doc.is(field, &Selector::tag("input").with_type("checkbox")));
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Enable `libm` instead of `std`
//! for geometry on targets without the standard library.

#![no_std]

extern crate alloc;

mod attrs;
pub mod dispatch;
mod document;
mod error;
mod event;
mod selector;
mod types;

pub use attrs::{AttrCopy, AttrFilter};
pub use dispatch::Dispatch;
pub use document::Document;
pub use error::DomError;
pub use event::{Binding, BindingFilter, Event, EventSource, EventType, Key, Modifiers};
pub use selector::{AttrMatch, Selector, TagMatch, is_form_control_tag};
pub use types::{Namespace, NodeFlags, NodeId};

pub use understory_event_state::focus_origin::FocusFrom;
