// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-element selectors.
//!
//! Selectors are predicates over one node (no combinators): an optional tag
//! test, an optional input `type`, required classes and attribute tests.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{Document, NodeId};

/// Tag part of a [`Selector`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TagMatch {
    /// Exact (lowercase) tag name.
    Tag(String),
    /// Any form control: `input`, `textarea`, `select` or `button`.
    FormControl,
}

/// Attribute part of a [`Selector`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttrMatch {
    /// The attribute is present.
    Present(String),
    /// The attribute equals the value.
    Equals(String, String),
}

/// A predicate over a single node.
///
/// ```rust
/// use understory_dom::{Document, Selector};
///
/// let mut doc = Document::<()>::new();
/// let input = doc.create_element("input");
/// doc.set_attr(input, "type", "checkbox");
/// doc.add_class(input, "big");
///
/// assert!(doc.is(input, &Selector::tag("input").with_type("checkbox")));
/// assert!(doc.is(input, &Selector::form_control().with_class("big")));
/// assert!(!doc.is(input, &Selector::tag("input").with_type("radio")));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Optional tag test.
    pub tag: Option<TagMatch>,
    /// Optional input type (`text` when an `input` has no `type`).
    pub input_type: Option<String>,
    /// Required classes.
    pub classes: SmallVec<[String; 2]>,
    /// Attribute tests.
    pub attrs: SmallVec<[AttrMatch; 1]>,
}

impl Selector {
    /// Matches every element.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Matches elements named `tag`.
    #[must_use]
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: Some(TagMatch::Tag(tag.to_ascii_lowercase())),
            ..Self::default()
        }
    }

    /// Matches any form control.
    #[must_use]
    pub fn form_control() -> Self {
        Self {
            tag: Some(TagMatch::FormControl),
            ..Self::default()
        }
    }

    /// Matches elements carrying `class`.
    #[must_use]
    pub fn class(class: &str) -> Self {
        Self::any().with_class(class)
    }

    /// Requires the input type.
    #[must_use]
    pub fn with_type(mut self, ty: &str) -> Self {
        self.input_type = Some(ty.to_ascii_lowercase());
        self
    }

    /// Requires a class.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Requires `name="value"`.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attrs
            .push(AttrMatch::Equals(name.to_ascii_lowercase(), value.to_string()));
        self
    }

    /// Requires the attribute to be present.
    #[must_use]
    pub fn with_attr_present(mut self, name: &str) -> Self {
        self.attrs.push(AttrMatch::Present(name.to_ascii_lowercase()));
        self
    }
}

/// Returns `true` for tags that are form controls.
#[must_use]
pub fn is_form_control_tag(tag: &str) -> bool {
    matches!(tag, "input" | "textarea" | "select" | "button")
}

impl<A> Document<A> {
    /// Returns `true` if the node matches `selector`.
    #[must_use]
    pub fn is(&self, id: NodeId, selector: &Selector) -> bool {
        let Some(tag) = self.tag(id) else {
            return false;
        };
        let tag_ok = match &selector.tag {
            None => true,
            Some(TagMatch::Tag(t)) => t == tag,
            Some(TagMatch::FormControl) => is_form_control_tag(tag),
        };
        tag_ok
            && selector
                .input_type
                .as_ref()
                .is_none_or(|ty| self.input_type(id).as_ref() == Some(ty))
            && selector.classes.iter().all(|c| self.has_class(id, c))
            && selector.attrs.iter().all(|a| match a {
                AttrMatch::Present(name) => self.has_attr(id, name),
                AttrMatch::Equals(name, value) => self.attr(id, name) == Some(value.as_str()),
            })
    }

    /// First descendant of `scope` matching `selector`, in document order.
    #[must_use]
    pub fn find(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .into_iter()
            .find(|d| self.is(*d, selector))
    }

    /// Every descendant of `scope` matching `selector`, in document order.
    #[must_use]
    pub fn find_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|d| self.is(*d, selector))
            .collect()
    }

    /// The node itself or its nearest ancestor matching `selector`.
    #[must_use]
    pub fn closest(&self, id: NodeId, selector: &Selector) -> Option<NodeId> {
        self.path_to_root(id)
            .into_iter()
            .find(|n| self.is(*n, selector))
    }
}
