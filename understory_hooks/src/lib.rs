// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Hooks: ordered get/set interceptors for element accessors.
//!
//! A *hook* overrides how one accessor type (the value of a `div`, the
//! `checked` property, the `title` attribute, ...) is read or written for the
//! elements a [`Predicate`] selects. Hooks for the same type form a
//! [`HookChain`]: the newest matching entry answers, and a pre-existing native
//! accessor is kept as the lowest, always-matching entry.
//!
//! ## Core Concepts
//!
//! - [`HookSubject`]: the environment hooks run against. It resolves static
//!   selectors, so a predicate can be as simple as a tag name.
//! - [`Handlers`]: an optional getter and an optional setter. A set with
//!   neither is ignored.
//! - [`HookRegistry`]: chains keyed by accessor type. The first registration
//!   installs a router; removing the last custom hook tears it down and
//!   restores the native accessor.
//! - [`HooksManager`]: one registry per [`AccessorKind`].
//!
//! Handles ([`HookHandle`], [`HookId`]) are registration ids, so they stay
//! valid when other hooks are removed.
//!
//! ## Example
//!
//! ```rust
//! use understory_hooks::{AccessorKind, Handlers, HooksManager, HookSubject, Predicate};
//!
//! struct Tags(Vec<&'static str>);
//! impl HookSubject<usize> for Tags {
//!     type Selector = &'static str;
//!     fn is(&self, node: usize, tag: &&'static str) -> bool {
//!         self.0.get(node) == Some(tag)
//!     }
//! }
//!
//! let tags = Tags(vec!["input", "div", "div"]);
//! let mut hooks = HooksManager::<Tags, usize, String>::new();
//! let value = hooks.registry_mut(AccessorKind::Value);
//!
//! // A broad hook, then a narrower one registered later.
//! value.register(
//!     "div",
//!     Predicate::Static("div"),
//!     Handlers::new().with_get(|_, _| Some("any div".into())),
//! );
//! value.register(
//!     "div",
//!     Predicate::dynamic(|_, n| n == 2),
//!     Handlers::new().with_get(|_, _| Some("third node".into())),
//! );
//!
//! assert_eq!(hooks.value().get(&tags, "div", 1).as_deref(), Some("any div"));
//! assert_eq!(hooks.value().get(&tags, "div", 2).as_deref(), Some("third node"));
//! // No hook and no native accessor: the caller falls back to plain access.
//! assert_eq!(hooks.value().get(&tags, "input", 0), None);
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod chain;
mod manager;
mod predicate;
mod registry;

pub use chain::{Direction, HookChain, HookEntry, HookId};
pub use manager::{AccessorKind, HooksManager};
pub use predicate::{Getter, Handlers, HookSubject, Predicate, Setter};
pub use registry::{HookHandle, HookRegistry};
