// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Copying attributes between elements.

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::{Document, NodeId};

/// Per-attribute transform applied while copying.
///
/// Receives the source value (`None` when the source lacks the attribute) and
/// returns the value to write, or `None` to leave the target untouched.
pub type AttrFilter = Rc<dyn Fn(Option<&str>) -> Option<String>>;

/// Which attributes [`Document::copy_attrs`] copies, and how.
///
/// ```rust
/// use understory_dom::{AttrCopy, Document};
///
/// let mut doc = Document::<()>::new();
/// let from = doc.create_element("input");
/// doc.set_attr(from, "class", "plasticInput wide");
/// doc.set_attr(from, "id", "email");
/// let to = doc.create_element("div");
///
/// let copy = AttrCopy::only(&["id", "class", "title"]).filter("class", |v| {
///     v.map(|v| v.replace("plasticInput", "").trim().to_string())
/// });
/// doc.copy_attrs(from, to, &copy);
/// assert_eq!(doc.attr(to, "id"), Some("email"));
/// assert_eq!(doc.attr(to, "class"), Some("wide"));
/// assert_eq!(doc.attr(to, "title"), None);
/// ```
#[derive(Clone, Default)]
pub struct AttrCopy {
    names: Option<Vec<String>>,
    filters: Vec<(String, AttrFilter)>,
}

impl AttrCopy {
    /// Copies every attribute present on the source.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Copies only the listed attributes.
    #[must_use]
    pub fn only(names: &[&str]) -> Self {
        Self {
            names: Some(names.iter().map(|n| n.to_ascii_lowercase()).collect()),
            filters: Vec::new(),
        }
    }

    /// Transforms `name` while copying.
    #[must_use]
    pub fn filter(
        mut self,
        name: &str,
        f: impl Fn(Option<&str>) -> Option<String> + 'static,
    ) -> Self {
        self.filters.push((name.to_ascii_lowercase(), Rc::new(f)));
        self
    }

    fn filter_for(&self, name: &str) -> Option<&AttrFilter> {
        self.filters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f)
    }
}

impl fmt::Debug for AttrCopy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filtered: Vec<&str> = self.filters.iter().map(|(n, _)| n.as_str()).collect();
        f.debug_struct("AttrCopy")
            .field("names", &self.names)
            .field("filters", &filtered)
            .finish()
    }
}

impl<A> Document<A> {
    /// Copies attributes from `from` to `to` as described by `copy`.
    ///
    /// The name `value` reads the live form value of the source rather than
    /// its attribute. Attributes missing on the source leave the target
    /// untouched unless a filter supplies a value.
    pub fn copy_attrs(&mut self, from: NodeId, to: NodeId, copy: &AttrCopy) {
        let names: Vec<String> = match &copy.names {
            Some(names) => names.clone(),
            None => self
                .attributes(from)
                .iter()
                .map(|(k, _)| k.clone())
                .collect(),
        };
        for name in names {
            let current = if name == "value" {
                Some(self.value(from))
            } else {
                self.attr(from, &name).map(ToString::to_string)
            };
            let next = match copy.filter_for(&name) {
                Some(filter) => filter(current.as_deref()),
                None => current,
            };
            if let Some(v) = next {
                self.set_attr(to, &name, &v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_copies_every_attribute() {
        let mut doc = Document::<()>::new();
        let from = doc.create_element("input");
        doc.set_attr(from, "name", "n");
        doc.set_attr(from, "tabindex", "3");
        let to = doc.create_element("input");
        doc.copy_attrs(from, to, &AttrCopy::all());
        assert_eq!(doc.attributes(to), doc.attributes(from));
    }

    #[test]
    fn missing_attributes_leave_target_untouched() {
        let mut doc = Document::<()>::new();
        let from = doc.create_element("input");
        let to = doc.create_element("input");
        doc.set_attr(to, "title", "keep");
        doc.copy_attrs(from, to, &AttrCopy::only(&["title", "accesskey"]));
        assert_eq!(doc.attr(to, "title"), Some("keep"));
        assert!(!doc.has_attr(to, "accesskey"));
    }

    #[test]
    fn filter_can_supply_default() {
        let mut doc = Document::<()>::new();
        let from = doc.create_element("input");
        let to = doc.create_element("span");
        let copy = AttrCopy::only(&["tabindex"])
            .filter("tabindex", |v| Some(v.unwrap_or("0").to_string()));
        doc.copy_attrs(from, to, &copy);
        assert_eq!(doc.attr(to, "tabindex"), Some("0"));
    }

    #[test]
    fn value_copies_live_value() {
        let mut doc = Document::<()>::new();
        let from = doc.create_element("input");
        doc.set_attr(from, "value", "initial");
        doc.set_value(from, "typed");
        let to = doc.create_element("input");
        doc.copy_attrs(from, to, &AttrCopy::only(&["value"]));
        assert_eq!(doc.attr(to, "value"), Some("typed"));
        assert_eq!(doc.value(to), "typed");
    }
}
