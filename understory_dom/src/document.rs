// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The element arena.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Rect, Vec2};
use log::debug;
use smallvec::SmallVec;

use crate::event::{Binding, BindingFilter, EventType};
use crate::selector::is_form_control_tag;
use crate::{DomError, Namespace, NodeFlags, NodeId};

const ROOT_TAG: &str = "#document";

#[derive(Clone, Debug)]
struct Node<A> {
    tag: String,
    attrs: SmallVec<[(String, String); 4]>,
    text: String,
    /// Dirty form value; `None` falls back to the HTML default.
    value: Option<String>,
    flags: NodeFlags,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    bindings: Vec<Binding<A>>,
    bounds: Rect,
    scroll: Vec2,
}

impl<A> Node<A> {
    fn new(tag: String) -> Self {
        Self {
            tag,
            attrs: SmallVec::new(),
            text: String::new(),
            value: None,
            flags: NodeFlags::empty(),
            parent: None,
            children: Vec::new(),
            bindings: Vec::new(),
            bounds: Rect::ZERO,
            scroll: Vec2::ZERO,
        }
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug)]
struct Slot<A> {
    generation: u32,
    node: Option<Node<A>>,
}

/// An in-memory element tree.
///
/// `A` is the action type stored in event bindings.
///
/// Reads on a node that is not alive return empty results and writes are
/// ignored; structural operations report [`DomError::Stale`] instead.
///
/// ```rust
/// use understory_dom::Document;
///
/// let mut doc = Document::<()>::new();
/// let form = doc.create_element("form");
/// let field = doc.create_element("input");
/// doc.append_child(doc.root(), form).unwrap();
/// doc.append_child(form, field).unwrap();
///
/// doc.set_attr(field, "value", "initial");
/// assert_eq!(doc.value(field), "initial");
/// doc.set_value(field, "typed");
/// assert_eq!(doc.value(field), "typed");
/// assert_eq!(doc.attr(field, "value"), Some("initial"));
/// assert!(doc.is_connected(field));
/// ```
#[derive(Clone, Debug)]
pub struct Document<A> {
    slots: Vec<Slot<A>>,
    free: Vec<u32>,
    root: NodeId,
    focused: Option<NodeId>,
    viewport: Rect,
}

impl<A> Document<A> {
    /// Creates a document holding only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: 1,
                node: Some(Node::new(ROOT_TAG.to_string())),
            }],
            free: Vec::new(),
            root: NodeId::new(0, 1),
            focused: None,
            viewport: Rect::new(0.0, 0.0, 1024.0, 768.0),
        }
    }

    /// The permanent root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    fn node(&self, id: NodeId) -> Option<&Node<A>> {
        self.slots
            .get(id.idx())
            .filter(|slot| slot.generation == id.1)
            .and_then(|slot| slot.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<A>> {
        self.slots
            .get_mut(id.idx())
            .filter(|slot| slot.generation == id.1)
            .and_then(|slot| slot.node.as_mut())
    }

    fn live(&self, id: NodeId) -> Result<&Node<A>, DomError> {
        self.node(id).ok_or(DomError::Stale(id))
    }

    // --- structure ---------------------------------------------------------

    /// Creates a detached element. The tag is lowercased.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let node = Node::new(tag.to_ascii_lowercase());
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            slot.node = Some(node);
            NodeId::new(idx, slot.generation)
        } else {
            #[expect(
                clippy::cast_possible_truncation,
                reason = "documents stay far below u32::MAX nodes"
            )]
            let idx = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 1,
                node: Some(node),
            });
            NodeId::new(idx, 1)
        }
    }

    /// Returns `true` if `id` refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Lowercase tag name.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.tag.as_str())
    }

    /// Parent node, if attached.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Children in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], |n| n.children.as_slice())
    }

    /// All descendants of `id` in document order, excluding `id`.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// `id` followed by its ancestors, nearest first.
    #[must_use]
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut cursor = self.is_alive(id).then_some(id);
        while let Some(current) = cursor {
            path.push(current);
            cursor = self.parent(current);
        }
        path
    }

    /// Returns `true` if `id` is attached (transitively) to the root.
    #[must_use]
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.path_to_root(id).last() == Some(&self.root)
    }

    /// Returns `true` if `node` is `ancestor` or one of its descendants.
    #[must_use]
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.path_to_root(node).contains(&ancestor)
    }

    fn check_insert(&self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.live(parent)?;
        self.live(child)?;
        if child == self.root {
            return Err(DomError::Root);
        }
        if self.contains(child, parent) {
            return Err(DomError::Cycle {
                node: child,
                parent,
            });
        }
        Ok(())
    }

    fn insert_at(&mut self, parent: NodeId, index: Option<usize>, child: NodeId) {
        self.detach(child);
        if let Some(p) = self.node_mut(parent) {
            let index = index.unwrap_or(p.children.len()).min(p.children.len());
            p.children.insert(index, child);
        }
        if let Some(c) = self.node_mut(child) {
            c.parent = Some(parent);
        }
    }

    /// Appends `child` to `parent`, moving it if it is attached elsewhere.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.check_insert(parent, child)?;
        self.insert_at(parent, None, child);
        Ok(())
    }

    fn sibling_insert(
        &mut self,
        reference: NodeId,
        node: NodeId,
        offset: usize,
    ) -> Result<(), DomError> {
        let parent = self
            .live(reference)?
            .parent
            .ok_or(DomError::NoParent(reference))?;
        if node == reference {
            return Ok(());
        }
        self.check_insert(parent, node)?;
        self.detach(node);
        let index = self
            .children(parent)
            .iter()
            .position(|c| *c == reference)
            .map(|i| i + offset);
        self.insert_at(parent, index, node);
        Ok(())
    }

    /// Inserts `node` right before `reference`.
    pub fn insert_before(&mut self, reference: NodeId, node: NodeId) -> Result<(), DomError> {
        self.sibling_insert(reference, node, 0)
    }

    /// Inserts `node` right after `reference`.
    pub fn insert_after(&mut self, reference: NodeId, node: NodeId) -> Result<(), DomError> {
        self.sibling_insert(reference, node, 1)
    }

    /// Puts `new` where `old` is and detaches `old`.
    pub fn replace(&mut self, old: NodeId, new: NodeId) -> Result<(), DomError> {
        self.insert_before(old, new)?;
        self.detach(old);
        Ok(())
    }

    /// Detaches `id` from its parent. Focus inside the subtree is dropped.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|c| *c != id);
        }
        if let Some(n) = self.node_mut(id) {
            n.parent = None;
        }
        if self.focused.is_some_and(|f| self.contains(id, f)) {
            self.focused = None;
        }
    }

    /// Detaches `id` and frees it together with its descendants.
    pub fn destroy(&mut self, id: NodeId) -> Result<(), DomError> {
        if id == self.root {
            return Err(DomError::Root);
        }
        self.live(id)?;
        self.detach(id);
        let mut doomed = self.descendants(id);
        doomed.push(id);
        debug!("destroying {id} with {} descendant(s)", doomed.len() - 1);
        for node in doomed {
            if let Some(slot) = self.slots.get_mut(node.idx()) {
                slot.node = None;
                self.free.push(node.0);
            }
        }
        Ok(())
    }

    // --- attributes --------------------------------------------------------

    /// Attribute value.
    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).and_then(|n| n.attr(name))
    }

    /// Returns `true` if the attribute is present.
    #[must_use]
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    /// Sets an attribute. The name is lowercased.
    ///
    /// `checked` and `selected` also set the matching form state.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "checked" => self.set_checked(id, true),
            "selected" => self.set_selected(id, true),
            _ => {}
        }
        let Some(node) = self.node_mut(id) else {
            return;
        };
        if let Some(slot) = node.attrs.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = value.to_string();
        } else {
            node.attrs.push((name, value.to_string()));
        }
    }

    /// Removes an attribute and returns its old value.
    ///
    /// `checked` and `selected` also clear the matching form state.
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "checked" => self.set_checked(id, false),
            "selected" => self.set_selected(id, false),
            _ => {}
        }
        let node = self.node_mut(id)?;
        let pos = node.attrs.iter().position(|(k, _)| *k == name)?;
        Some(node.attrs.remove(pos).1)
    }

    /// All attributes in insertion order.
    #[must_use]
    pub fn attributes(&self, id: NodeId) -> &[(String, String)] {
        self.node(id).map_or(&[], |n| n.attrs.as_slice())
    }

    // --- classes -----------------------------------------------------------

    /// Classes from the `class` attribute.
    pub fn classes(&self, id: NodeId) -> impl Iterator<Item = &str> {
        self.attr(id, "class")
            .unwrap_or("")
            .split_ascii_whitespace()
    }

    /// Returns `true` if the node has `class`.
    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).any(|c| c == class)
    }

    /// Adds each whitespace-separated class that is not present yet.
    pub fn add_class(&mut self, id: NodeId, classes: &str) {
        if !self.is_alive(id) {
            return;
        }
        let mut list: Vec<String> = self.classes(id).map(ToString::to_string).collect();
        let before = list.len();
        for class in classes.split_ascii_whitespace() {
            if !list.iter().any(|c| c == class) {
                list.push(class.to_string());
            }
        }
        if list.len() != before || !self.has_attr(id, "class") {
            self.set_attr(id, "class", &list.join(" "));
        }
    }

    /// Removes each whitespace-separated class.
    pub fn remove_class(&mut self, id: NodeId, classes: &str) {
        if !self.has_attr(id, "class") {
            return;
        }
        let remove: Vec<&str> = classes.split_ascii_whitespace().collect();
        let list: Vec<String> = self
            .classes(id)
            .filter(|c| !remove.contains(c))
            .map(ToString::to_string)
            .collect();
        self.set_attr(id, "class", &list.join(" "));
    }

    /// Adds or removes classes depending on `on`.
    pub fn set_class(&mut self, id: NodeId, classes: &str, on: bool) {
        if on {
            self.add_class(id, classes);
        } else {
            self.remove_class(id, classes);
        }
    }

    // --- text --------------------------------------------------------------

    /// The node's own text.
    #[must_use]
    pub fn text(&self, id: NodeId) -> &str {
        self.node(id).map_or("", |n| n.text.as_str())
    }

    /// Replaces the node's own text.
    pub fn set_text(&mut self, id: NodeId, text: &str) {
        if let Some(n) = self.node_mut(id) {
            n.text = text.to_string();
        }
    }

    /// Own text followed by the text of all descendants.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::from(self.text(id));
        for d in self.descendants(id) {
            out.push_str(self.text(d));
        }
        out
    }

    // --- form state --------------------------------------------------------

    /// Returns `true` for `input`, `textarea`, `select` and `button`.
    #[must_use]
    pub fn is_form_control(&self, id: NodeId) -> bool {
        self.tag(id).is_some_and(is_form_control_tag)
    }

    /// Lowercase `type` of an `input` (`text` when absent); `None` otherwise.
    #[must_use]
    pub fn input_type(&self, id: NodeId) -> Option<String> {
        let node = self.node(id)?;
        (node.tag == "input").then(|| {
            node.attr("type")
                .map_or_else(|| "text".to_string(), str::to_ascii_lowercase)
        })
    }

    /// Current form value.
    ///
    /// A value set through [`set_value`](Self::set_value) wins. Otherwise the
    /// HTML default applies: the `value` attribute, `"on"` for a checkbox or
    /// radio without one, the text of a `textarea`, the text of an `option`
    /// without a `value` attribute, and the selected option of a `select`.
    #[must_use]
    pub fn value(&self, id: NodeId) -> String {
        let Some(node) = self.node(id) else {
            return String::new();
        };
        if let Some(v) = &node.value {
            return v.clone();
        }
        match node.tag.as_str() {
            "select" => self
                .selected_option(id)
                .map(|o| self.value(o))
                .unwrap_or_default(),
            "textarea" => node.text.clone(),
            "option" => node.attr("value").map_or_else(
                || collapse_whitespace(&self.text_content(id)),
                ToString::to_string,
            ),
            _ => match node.attr("value") {
                Some(v) => v.to_string(),
                None => {
                    let ty = self.input_type(id);
                    if matches!(ty.as_deref(), Some("checkbox" | "radio")) {
                        "on".to_string()
                    } else {
                        String::new()
                    }
                }
            },
        }
    }

    /// Sets the form value.
    ///
    /// For a `select` the first option with that value becomes selected; an
    /// unknown value leaves the selection unchanged.
    pub fn set_value(&mut self, id: NodeId, value: &str) {
        if self.tag(id) == Some("select") {
            let option = self
                .options(id)
                .into_iter()
                .find(|o| self.value(*o) == value);
            if let Some(option) = option {
                self.set_selected(option, true);
            }
            return;
        }
        if let Some(n) = self.node_mut(id) {
            n.value = Some(value.to_string());
        }
    }

    fn set_flag(&mut self, id: NodeId, flag: NodeFlags, on: bool) {
        if let Some(n) = self.node_mut(id) {
            n.flags.set(flag, on);
        }
    }

    fn has_flag(&self, id: NodeId, flag: NodeFlags) -> bool {
        self.node(id).is_some_and(|n| n.flags.contains(flag))
    }

    /// Checked state of a checkbox or radio.
    #[must_use]
    pub fn is_checked(&self, id: NodeId) -> bool {
        self.has_flag(id, NodeFlags::CHECKED)
    }

    /// Sets the checked state.
    pub fn set_checked(&mut self, id: NodeId, checked: bool) {
        self.set_flag(id, NodeFlags::CHECKED, checked);
    }

    /// Options of a `select`, including those inside option groups.
    #[must_use]
    pub fn options(&self, select: NodeId) -> Vec<NodeId> {
        self.descendants(select)
            .into_iter()
            .filter(|d| self.tag(*d) == Some("option"))
            .collect()
    }

    /// The nearest enclosing `select` of an option.
    fn owner_select(&self, option: NodeId) -> Option<NodeId> {
        self.path_to_root(option)
            .into_iter()
            .skip(1)
            .find(|n| self.tag(*n) == Some("select"))
    }

    /// Returns `true` if an option is explicitly selected.
    #[must_use]
    pub fn is_selected(&self, option: NodeId) -> bool {
        self.has_flag(option, NodeFlags::SELECTED)
    }

    /// Selects or deselects an option. Selecting deselects the other options
    /// of the same `select`.
    pub fn set_selected(&mut self, option: NodeId, selected: bool) {
        if selected && let Some(select) = self.owner_select(option) {
            for other in self.options(select) {
                self.set_flag(other, NodeFlags::SELECTED, false);
            }
        }
        self.set_flag(option, NodeFlags::SELECTED, selected);
    }

    /// The option a `select` displays: the selected one, or the first enabled
    /// option when none is selected.
    #[must_use]
    pub fn selected_option(&self, select: NodeId) -> Option<NodeId> {
        let options = self.options(select);
        options
            .iter()
            .copied()
            .find(|o| self.is_selected(*o))
            .or_else(|| options.iter().copied().find(|o| !self.is_option_disabled(*o)))
    }

    /// Returns `true` if the `disabled` attribute is present.
    #[must_use]
    pub fn is_disabled(&self, id: NodeId) -> bool {
        self.has_attr(id, "disabled")
    }

    /// Returns `true` if an option or its `optgroup` is disabled.
    #[must_use]
    pub fn is_option_disabled(&self, option: NodeId) -> bool {
        self.is_disabled(option)
            || self
                .parent(option)
                .is_some_and(|p| self.tag(p) == Some("optgroup") && self.is_disabled(p))
    }

    /// Returns `true` if the node itself is hidden.
    #[must_use]
    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.has_flag(id, NodeFlags::HIDDEN)
    }

    /// Shows or hides the node.
    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) {
        self.set_flag(id, NodeFlags::HIDDEN, hidden);
    }

    /// Returns `true` if the node or an ancestor is hidden.
    #[must_use]
    pub fn is_rendered_hidden(&self, id: NodeId) -> bool {
        self.path_to_root(id).into_iter().any(|n| self.is_hidden(n))
    }

    /// Raw flag set.
    #[must_use]
    pub fn flags(&self, id: NodeId) -> NodeFlags {
        self.node(id).map_or(NodeFlags::empty(), |n| n.flags)
    }

    // --- focus -------------------------------------------------------------

    /// The focused node.
    #[must_use]
    pub fn focused(&self) -> Option<NodeId> {
        self.focused.filter(|f| self.is_alive(*f))
    }

    /// Moves focus without firing events. Returns the previous holder.
    pub fn set_focused(&mut self, node: Option<NodeId>) -> Option<NodeId> {
        core::mem::replace(&mut self.focused, node)
    }

    /// Returns `true` if the node can hold focus: a connected, displayed and
    /// enabled form control (other than a hidden input) or element with a
    /// `tabindex`.
    #[must_use]
    pub fn is_focusable(&self, id: NodeId) -> bool {
        if !self.is_connected(id) || self.is_rendered_hidden(id) || self.is_disabled(id) {
            return false;
        }
        if self.input_type(id).as_deref() == Some("hidden") {
            return false;
        }
        self.is_form_control(id)
            || self
                .attr(id, "tabindex")
                .is_some_and(|t| t.trim().parse::<i32>().is_ok())
    }

    // --- geometry ----------------------------------------------------------

    /// Layout box in document coordinates.
    #[must_use]
    pub fn bounds(&self, id: NodeId) -> Rect {
        self.node(id).map_or(Rect::ZERO, |n| n.bounds)
    }

    /// Sets the layout box.
    pub fn set_bounds(&mut self, id: NodeId, bounds: Rect) {
        if let Some(n) = self.node_mut(id) {
            n.bounds = bounds;
        }
    }

    /// The visible area of the document.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Sets the visible area.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Content scroll offset of a container.
    #[must_use]
    pub fn scroll_offset(&self, id: NodeId) -> Vec2 {
        self.node(id).map_or(Vec2::ZERO, |n| n.scroll)
    }

    /// Sets the content scroll offset, clamped at zero.
    pub fn set_scroll_offset(&mut self, id: NodeId, offset: Vec2) {
        if let Some(n) = self.node_mut(id) {
            n.scroll = Vec2::new(offset.x.max(0.0), offset.y.max(0.0));
        }
    }

    /// Scrolls `container` vertically just enough to show `child`.
    pub fn scroll_to(&mut self, container: NodeId, child: NodeId) {
        let frame = self.bounds(container);
        let item = self.bounds(child);
        let mut scroll = self.scroll_offset(container);
        let top = item.y0 - frame.y0;
        let bottom = item.y1 - frame.y0;
        if top < scroll.y {
            scroll.y = top;
        } else if bottom > scroll.y + frame.height() {
            scroll.y = bottom - frame.height();
        }
        self.set_scroll_offset(container, scroll);
    }

    /// Scrolls `container` to the end of its content.
    pub fn scroll_to_end(&mut self, container: NodeId) {
        let frame = self.bounds(container);
        let content_bottom = self
            .descendants(container)
            .into_iter()
            .map(|d| self.bounds(d).y1 - frame.y0)
            .fold(0.0_f64, f64::max);
        let x = self.scroll_offset(container).x;
        self.set_scroll_offset(container, Vec2::new(x, content_bottom - frame.height()));
    }

    // --- bindings ----------------------------------------------------------

    /// Binds `action` to `event` on the node.
    pub fn bind(&mut self, id: NodeId, event: EventType, namespace: Namespace, action: A) {
        if let Some(n) = self.node_mut(id) {
            n.bindings.push(Binding {
                event,
                namespace,
                action,
            });
        }
    }

    /// Removes the bindings selected by `filter`. Returns how many were removed.
    pub fn unbind(&mut self, id: NodeId, filter: &BindingFilter) -> usize {
        let Some(n) = self.node_mut(id) else {
            return 0;
        };
        let before = n.bindings.len();
        n.bindings.retain(|b| !filter.matches(b));
        before - n.bindings.len()
    }

    /// Keeps only the bindings for which `keep` returns `true`. Returns how
    /// many were removed.
    pub fn retain_bindings(
        &mut self,
        id: NodeId,
        mut keep: impl FnMut(&Binding<A>) -> bool,
    ) -> usize {
        let Some(n) = self.node_mut(id) else {
            return 0;
        };
        let before = n.bindings.len();
        n.bindings.retain(|b| keep(b));
        before - n.bindings.len()
    }

    /// Bindings in the order they were added.
    #[must_use]
    pub fn bindings(&self, id: NodeId) -> &[Binding<A>] {
        self.node(id).map_or(&[], |n| n.bindings.as_slice())
    }
}

impl<A> Default for Document<A> {
    fn default() -> Self {
        Self::new()
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached(doc: &mut Document<()>, tag: &str) -> NodeId {
        let n = doc.create_element(tag);
        doc.append_child(doc.root(), n).unwrap();
        n
    }

    #[test]
    fn stale_ids_do_not_alias_reused_slots() {
        let mut doc = Document::<()>::new();
        let a = attached(&mut doc, "div");
        doc.destroy(a).unwrap();
        let b = doc.create_element("span");
        assert_eq!(a.0, b.0, "slot should be reused");
        assert!(!doc.is_alive(a));
        assert_eq!(doc.tag(a), None);
        assert_eq!(doc.tag(b), Some("span"));
        assert_eq!(doc.append_child(doc.root(), a), Err(DomError::Stale(a)));
    }

    #[test]
    fn insert_before_and_after_keep_order() {
        let mut doc = Document::<()>::new();
        let parent = attached(&mut doc, "div");
        let mid = doc.create_element("b");
        doc.append_child(parent, mid).unwrap();
        let first = doc.create_element("a");
        let last = doc.create_element("c");
        doc.insert_before(mid, first).unwrap();
        doc.insert_after(mid, last).unwrap();
        assert_eq!(doc.children(parent), &[first, mid, last]);

        // Moving a sibling keeps the list consistent.
        doc.insert_after(last, first).unwrap();
        assert_eq!(doc.children(parent), &[mid, last, first]);

        let loose = doc.create_element("x");
        assert_eq!(doc.insert_before(loose, mid), Err(DomError::NoParent(loose)));
    }

    #[test]
    fn cycles_and_root_moves_are_rejected() {
        let mut doc = Document::<()>::new();
        let outer = attached(&mut doc, "div");
        let inner = doc.create_element("div");
        doc.append_child(outer, inner).unwrap();
        assert!(matches!(
            doc.append_child(inner, outer),
            Err(DomError::Cycle { .. })
        ));
        assert_eq!(doc.append_child(outer, doc.root()), Err(DomError::Root));
        assert_eq!(doc.destroy(doc.root()), Err(DomError::Root));
    }

    #[test]
    fn replace_swaps_in_place() {
        let mut doc = Document::<()>::new();
        let a = attached(&mut doc, "a");
        let b = attached(&mut doc, "b");
        let c = doc.create_element("c");
        doc.replace(a, c).unwrap();
        assert_eq!(doc.children(doc.root()), &[c, b]);
        assert_eq!(doc.parent(a), None);
        assert!(doc.is_alive(a));
    }

    #[test]
    fn destroy_frees_subtree_and_focus() {
        let mut doc = Document::<()>::new();
        let wrapper = attached(&mut doc, "div");
        let input = doc.create_element("input");
        doc.append_child(wrapper, input).unwrap();
        doc.set_focused(Some(input));
        doc.destroy(wrapper).unwrap();
        assert!(!doc.is_alive(input));
        assert_eq!(doc.focused(), None);
        assert!(doc.children(doc.root()).is_empty());
    }

    #[test]
    fn classes_round_trip() {
        let mut doc = Document::<()>::new();
        let n = doc.create_element("div");
        doc.add_class(n, "a b");
        doc.add_class(n, "b c");
        assert_eq!(doc.attr(n, "class"), Some("a b c"));
        doc.set_class(n, "b", false);
        assert!(!doc.has_class(n, "b"));
        assert_eq!(doc.attr(n, "class"), Some("a c"));
    }

    #[test]
    fn html_default_values() {
        let mut doc = Document::<()>::new();
        let cb = doc.create_element("input");
        doc.set_attr(cb, "type", "CheckBox");
        assert_eq!(doc.value(cb), "on");
        assert_eq!(doc.input_type(cb).as_deref(), Some("checkbox"));

        let area = doc.create_element("textarea");
        doc.set_text(area, "body");
        assert_eq!(doc.value(area), "body");

        let select = doc.create_element("select");
        let group = doc.create_element("optgroup");
        doc.append_child(select, group).unwrap();
        let one = doc.create_element("option");
        doc.set_text(one, "  One \n item ");
        let two = doc.create_element("option");
        doc.set_attr(two, "value", "2");
        doc.append_child(group, one).unwrap();
        doc.append_child(select, two).unwrap();

        assert_eq!(doc.value(select), "One item");
        doc.set_value(select, "2");
        assert_eq!(doc.value(select), "2");
        assert!(!doc.is_selected(one));
        doc.set_value(select, "missing");
        assert_eq!(doc.value(select), "2");
        doc.set_attr(group, "disabled", "disabled");
        assert!(doc.is_option_disabled(one));
    }

    #[test]
    fn checked_attribute_sets_state() {
        let mut doc = Document::<()>::new();
        let radio = doc.create_element("input");
        doc.set_attr(radio, "checked", "checked");
        assert!(doc.is_checked(radio));
        doc.remove_attr(radio, "checked");
        assert!(!doc.is_checked(radio));
    }

    #[test]
    fn focusability() {
        let mut doc = Document::<()>::new();
        let input = attached(&mut doc, "input");
        let hidden = attached(&mut doc, "input");
        doc.set_attr(hidden, "type", "hidden");
        let span = attached(&mut doc, "span");
        let loose = doc.create_element("input");

        assert!(doc.is_focusable(input));
        assert!(!doc.is_focusable(hidden));
        assert!(!doc.is_focusable(span));
        assert!(!doc.is_focusable(loose));
        doc.set_attr(span, "tabindex", "-1");
        assert!(doc.is_focusable(span));
        doc.set_attr(input, "disabled", "disabled");
        assert!(!doc.is_focusable(input));
    }

    #[test]
    fn scroll_to_reveals_child() {
        let mut doc = Document::<()>::new();
        let list = attached(&mut doc, "ul");
        doc.set_bounds(list, Rect::new(0.0, 100.0, 100.0, 150.0));
        let mut items = Vec::new();
        for i in 0_u32..5 {
            let li = doc.create_element("li");
            let y = 100.0 + 20.0 * f64::from(i);
            doc.set_bounds(li, Rect::new(0.0, y, 100.0, y + 20.0));
            doc.append_child(list, li).unwrap();
            items.push(li);
        }
        doc.scroll_to(list, items[3]);
        assert_eq!(doc.scroll_offset(list).y, 30.0);
        doc.scroll_to(list, items[0]);
        assert_eq!(doc.scroll_offset(list).y, 0.0);
        doc.scroll_to_end(list);
        assert_eq!(doc.scroll_offset(list).y, 50.0);
    }

    #[test]
    fn retain_bindings_drops_matching_actions() {
        let mut doc = Document::<u8>::new();
        let n = doc.create_element("div");
        let ns = Namespace("t");
        doc.bind(n, EventType::Click, ns, 1);
        doc.bind(n, EventType::Click, ns, 2);
        doc.bind(n, EventType::Change, ns, 1);
        assert_eq!(doc.retain_bindings(n, |b| b.action != 1), 2);
        assert_eq!(doc.bindings(n).len(), 1);
        assert_eq!(doc.bindings(n)[0].action, 2);
    }
}
