// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget context: document, hooks and live widgets.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use hashbrown::HashMap;
use log::{debug, trace, warn};
use understory_dom::{AttrCopy, BindingFilter, Document, Event, EventType, NodeId, Selector};
use understory_event_state::focus_origin::FocusOriginTracker;
use understory_hooks::{AccessorKind, Handlers, HookHandle, HookSubject, HooksManager, Predicate};

use crate::action::{Action, INTERNAL, ListenerId, Part, STATE, WIDGET};
use crate::adapter::{self, Parts, StateBinding};
use crate::{AdapterState, Command, Config, ControlType, InstanceId, PlasticError, Value};
use crate::{WidgetInstance, classes};

/// Hook registries specialized to the widget context.
pub type PlasticHooks = HooksManager<PlasticContext, NodeId, Value>;

pub(crate) type ListenerFn = Box<dyn FnMut(&mut Event)>;

/// Owns a document and the widgets built in it.
///
/// All state that a browser plugin would keep globally lives here: the hook
/// registries, the live widgets, the open select and the focus-origin
/// tracker. Separate contexts never interact.
///
/// ```rust
/// use overstory_plastic::{Config, PlasticContext, Value};
///
/// let mut cx = PlasticContext::new();
/// let doc = cx.document_mut();
/// let input = doc.create_element("input");
/// doc.set_attr(input, "value", "hello");
/// doc.append_child(doc.root(), input).unwrap();
///
/// let id = cx.transform(input, &Config::default()).unwrap();
/// let wrapper = cx.instance(id).unwrap().wrapper();
/// assert_eq!(cx.val(wrapper).unwrap(), Value::from("hello"));
///
/// cx.set_val(wrapper, "bye").unwrap();
/// let restored = cx.restore(id).unwrap();
/// assert_eq!(restored, input);
/// assert_eq!(cx.document().value(input), "bye");
/// assert!(!cx.is_value_hook_installed());
/// ```
pub struct PlasticContext {
    pub(crate) doc: Document<Action>,
    hooks: PlasticHooks,
    instances: HashMap<InstanceId, WidgetInstance>,
    wrappers: HashMap<NodeId, InstanceId>,
    next_instance: u32,
    value_hook: Option<HookHandle>,
    pub(crate) open_select: Option<InstanceId>,
    pub(crate) focus_origin: FocusOriginTracker<NodeId>,
    pub(crate) listeners: HashMap<ListenerId, (NodeId, ListenerFn)>,
    pub(crate) next_listener: u32,
    routing: RefCell<Vec<(AccessorKind, String)>>,
}

impl HookSubject<NodeId> for PlasticContext {
    type Selector = Selector;

    fn is(&self, node: NodeId, selector: &Selector) -> bool {
        self.doc.is(node, selector)
    }
}

impl PlasticContext {
    /// Creates a context with an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::with_document(Document::new())
    }

    /// Creates a context around an existing document.
    #[must_use]
    pub fn with_document(doc: Document<Action>) -> Self {
        let mut cx = Self {
            doc,
            hooks: HooksManager::new(),
            instances: HashMap::new(),
            wrappers: HashMap::new(),
            next_instance: 1,
            value_hook: None,
            open_select: None,
            focus_origin: FocusOriginTracker::new(),
            listeners: HashMap::new(),
            next_listener: 1,
            routing: RefCell::new(Vec::new()),
        };
        cx.install_core_hooks();
        cx
    }

    /// The document.
    #[must_use]
    pub fn document(&self) -> &Document<Action> {
        &self.doc
    }

    /// Mutable access to the document, for building pages.
    pub fn document_mut(&mut self) -> &mut Document<Action> {
        &mut self.doc
    }

    /// The hook registries.
    #[must_use]
    pub fn hooks(&self) -> &PlasticHooks {
        &self.hooks
    }

    /// Mutable access to the hook registries, for registering hooks.
    pub fn hooks_mut(&mut self) -> &mut PlasticHooks {
        &mut self.hooks
    }

    // --- hooks ---------------------------------------------------------------

    fn install_core_hooks(&mut self) {
        let values = self.hooks.registry_mut(AccessorKind::Value);
        values.install_core(
            "option",
            Handlers::new().with_get(|cx: &Self, node| Some(Value::Text(cx.doc.value(node)))),
        );
        // A disabled selected option has no value.
        values.install_core(
            "select",
            Handlers::new()
                .with_get(|cx: &Self, node| {
                    let value = match cx.doc.selected_option(node) {
                        Some(o) if !cx.doc.is_option_disabled(o) => cx.doc.value(o),
                        _ => String::new(),
                    };
                    Some(Value::Text(value))
                })
                .with_set(|cx: &mut Self, node, value: Value| {
                    cx.doc.set_value(node, &value.to_text());
                    None
                }),
        );
    }

    fn install_value_hook(&mut self) {
        if self.value_hook.is_some() {
            return;
        }
        let predicate = Predicate::dynamic(|cx: &Self, node| cx.wrappers.contains_key(&node));
        let handlers = Handlers::new()
            .with_get(|cx: &Self, wrapper| cx.wrapper_value(wrapper))
            .with_set(|cx: &mut Self, wrapper, value| cx.set_wrapper_value(wrapper, value));
        self.value_hook = self
            .hooks
            .registry_mut(AccessorKind::Value)
            .register("div", predicate, handlers);
        debug!("widget value hook installed");
    }

    fn remove_value_hook(&mut self) {
        if let Some(handle) = self.value_hook.take() {
            self.hooks
                .registry_mut(AccessorKind::Value)
                .unregister(&handle);
            debug!("widget value hook removed");
        }
    }

    /// Returns `true` while the wrapper value hook is registered, which is
    /// exactly while at least one widget is live.
    #[must_use]
    pub fn is_value_hook_installed(&self) -> bool {
        self.value_hook.is_some()
    }

    fn inner_control(&self, wrapper: NodeId) -> Option<NodeId> {
        self.doc.find(wrapper, &Selector::form_control())
    }

    fn wrapper_value(&self, wrapper: NodeId) -> Option<Value> {
        let input = self.inner_control(wrapper)?;
        self.val(input).ok()
    }

    fn set_wrapper_value(&mut self, wrapper: NodeId, value: Value) -> Option<Value> {
        let id = *self.wrappers.get(&wrapper)?;
        let control = self.instances.get(&id)?.control;
        if let Some(result) = adapter::adapter_for(control).set(self, id, value.clone()) {
            return result;
        }
        let input = self.inner_control(wrapper)?;
        if let Err(err) = self.set_val(input, value) {
            warn!("{id}: {err}");
        }
        None
    }

    fn enter(&self, kind: AccessorKind, key: &str) -> Result<(), PlasticError> {
        let mut routing = self.routing.borrow_mut();
        if routing.iter().any(|(k, s)| *k == kind && s == key) {
            warn!("re-entrant {kind} access to `{key}`");
            return Err(PlasticError::Reentrant {
                kind,
                key: key.to_string(),
            });
        }
        routing.push((kind, key.to_string()));
        Ok(())
    }

    fn leave(&self, kind: AccessorKind, key: &str) {
        let mut routing = self.routing.borrow_mut();
        if let Some(pos) = routing.iter().rposition(|(k, s)| *k == kind && s == key) {
            routing.remove(pos);
        }
    }

    fn route_get(
        &self,
        kind: AccessorKind,
        key: &str,
        node: NodeId,
    ) -> Result<Option<Value>, PlasticError> {
        self.enter(kind, key)?;
        let value = self.hooks.registry(kind).get(self, key, node);
        self.leave(kind, key);
        trace!("{kind} get `{key}` on {node}: {value:?}");
        Ok(value)
    }

    /// Runs the setter hook for `key`, if any. Returns `false` when no hook
    /// applies and the native setter should run.
    fn route_set(
        &mut self,
        kind: AccessorKind,
        key: &str,
        node: NodeId,
        value: Value,
    ) -> Result<bool, PlasticError> {
        let Some(setter) = self.hooks.registry(kind).resolve_set(self, key, node) else {
            return Ok(false);
        };
        self.enter(kind, key)?;
        setter(self, node, value);
        self.leave(kind, key);
        trace!("{kind} set `{key}` on {node} handled by hook");
        Ok(true)
    }

    fn live_tag(&self, node: NodeId) -> Result<String, PlasticError> {
        self.doc
            .tag(node)
            .map(ToString::to_string)
            .ok_or(PlasticError::StaleNode(node))
    }

    fn check_node(&self, node: NodeId) -> Result<(), PlasticError> {
        if self.doc.is_alive(node) {
            Ok(())
        } else {
            Err(PlasticError::StaleNode(node))
        }
    }

    // --- accessors -----------------------------------------------------------

    /// Form value of `node`, routed through the value hooks keyed by tag name.
    pub fn val(&self, node: NodeId) -> Result<Value, PlasticError> {
        let tag = self.live_tag(node)?;
        let routed = self.route_get(AccessorKind::Value, &tag, node)?;
        Ok(routed.unwrap_or_else(|| Value::Text(self.doc.value(node))))
    }

    /// Sets the form value of `node`, routed through the value hooks.
    pub fn set_val(&mut self, node: NodeId, value: impl Into<Value>) -> Result<(), PlasticError> {
        let tag = self.live_tag(node)?;
        let value = value.into();
        if !self.route_set(AccessorKind::Value, &tag, node, value.clone())? {
            self.doc.set_value(node, &value.to_text());
        }
        Ok(())
    }

    /// Attribute of `node`, routed through the attribute hooks.
    pub fn attr(&self, node: NodeId, name: &str) -> Result<Option<String>, PlasticError> {
        self.check_node(node)?;
        let name = name.to_ascii_lowercase();
        Ok(match self.route_get(AccessorKind::Attribute, &name, node)? {
            Some(value) => Some(value.to_text()),
            None => self.doc.attr(node, &name).map(ToString::to_string),
        })
    }

    /// Sets an attribute of `node`, routed through the attribute hooks.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), PlasticError> {
        self.check_node(node)?;
        let name = name.to_ascii_lowercase();
        if !self.route_set(AccessorKind::Attribute, &name, node, Value::from(value))? {
            self.doc.set_attr(node, &name, value);
        }
        Ok(())
    }

    /// Property of `node` (`checked`, `selected`, `disabled`, `hidden`,
    /// `value`), routed through the property hooks. Unknown properties
    /// read as `None`.
    pub fn prop(&self, node: NodeId, name: &str) -> Result<Option<Value>, PlasticError> {
        self.check_node(node)?;
        if let Some(value) = self.route_get(AccessorKind::Property, name, node)? {
            return Ok(Some(value));
        }
        let doc = &self.doc;
        Ok(match name {
            "checked" => Some(Value::Bool(doc.is_checked(node))),
            "selected" => Some(Value::Bool(doc.is_selected(node))),
            "disabled" => Some(Value::Bool(doc.is_disabled(node))),
            "hidden" => Some(Value::Bool(doc.is_hidden(node))),
            "value" => Some(Value::Text(doc.value(node))),
            _ => None,
        })
    }

    /// Sets a property of `node`, routed through the property hooks.
    pub fn set_prop(
        &mut self,
        node: NodeId,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<(), PlasticError> {
        self.check_node(node)?;
        let value = value.into();
        if self.route_set(AccessorKind::Property, name, node, value.clone())? {
            return Ok(());
        }
        let on = value.is_truthy();
        match name {
            "checked" => self.doc.set_checked(node, on),
            "selected" => self.doc.set_selected(node, on),
            "disabled" if on => self.doc.set_attr(node, "disabled", "disabled"),
            "disabled" => {
                self.doc.remove_attr(node, "disabled");
            }
            "hidden" => self.doc.set_hidden(node, on),
            "value" => self.doc.set_value(node, &value.to_text()),
            _ => debug!("ignoring unknown property `{name}`"),
        }
        Ok(())
    }

    /// Inline style declaration of `node`, routed through the style hooks.
    pub fn css(&self, node: NodeId, property: &str) -> Result<Option<String>, PlasticError> {
        self.check_node(node)?;
        let property = property.trim().to_ascii_lowercase();
        if let Some(value) = self.route_get(AccessorKind::Style, &property, node)? {
            return Ok(Some(value.to_text()));
        }
        Ok(inline_style(self.doc.attr(node, "style"))
            .into_iter()
            .find(|(k, _)| *k == property)
            .map(|(_, v)| v))
    }

    /// Sets an inline style declaration; an empty value removes it.
    pub fn set_css(&mut self, node: NodeId, property: &str, value: &str) -> Result<(), PlasticError> {
        self.check_node(node)?;
        let property = property.trim().to_ascii_lowercase();
        if self.route_set(AccessorKind::Style, &property, node, Value::from(value))? {
            return Ok(());
        }
        let mut decls = inline_style(self.doc.attr(node, "style"));
        decls.retain(|(k, _)| *k != property);
        if !value.trim().is_empty() {
            decls.push((property, value.trim().to_string()));
        }
        if decls.is_empty() {
            self.doc.remove_attr(node, "style");
        } else {
            let style: Vec<String> = decls.iter().map(|(k, v)| alloc::format!("{k}: {v}")).collect();
            self.doc.set_attr(node, "style", &style.join("; "));
        }
        Ok(())
    }

    // --- lifecycle -----------------------------------------------------------

    pub(crate) fn widget(&self, id: InstanceId) -> Option<&WidgetInstance> {
        self.instances.get(&id)
    }

    pub(crate) fn widget_mut(&mut self, id: InstanceId) -> Option<&mut WidgetInstance> {
        self.instances.get_mut(&id)
    }

    /// Looks up a live widget.
    pub fn instance(&self, id: InstanceId) -> Result<&WidgetInstance, PlasticError> {
        self.instances.get(&id).ok_or_else(|| self.missing(id))
    }

    fn missing(&self, id: InstanceId) -> PlasticError {
        let err = if id.0 > 0 && id.0 < self.next_instance {
            PlasticError::Restored(id)
        } else {
            PlasticError::UnknownInstance(id)
        };
        warn!("{err}");
        err
    }

    /// The widget owning `node` (its wrapper or anything inside it).
    #[must_use]
    pub fn instance_for(&self, node: NodeId) -> Option<InstanceId> {
        self.doc
            .path_to_root(node)
            .into_iter()
            .find_map(|n| self.wrappers.get(&n).copied())
    }

    /// Number of live widgets.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.instances.len()
    }

    /// The select whose dropdown is open, if any.
    #[must_use]
    pub fn open_select(&self) -> Option<InstanceId> {
        self.open_select
    }

    pub(crate) fn part(&self, id: InstanceId, part: Part) -> Option<NodeId> {
        let inst = self.instances.get(&id)?;
        Some(match part {
            Part::Wrapper => inst.wrapper,
            Part::TextWrapper => inst.text_wrapper,
            Part::Input => inst.input,
            Part::Receiver => inst.receiver,
        })
    }

    pub(crate) fn element(&mut self, tag: &str, class: &str) -> NodeId {
        let node = self.doc.create_element(tag);
        self.doc.add_class(node, class);
        node
    }

    /// Turns `source` into a widget.
    ///
    /// The source is detached and kept; a wrapper takes its place. Calling
    /// this on an existing wrapper returns its id.
    pub fn transform(&mut self, source: NodeId, config: &Config) -> Result<InstanceId, PlasticError> {
        if let Some(id) = self.wrappers.get(&source) {
            return Ok(*id);
        }
        self.check_node(source)?;
        if self.doc.parent(source).is_none() {
            return Err(PlasticError::Detached(source));
        }
        let control = adapter::detect(&self.doc, source);
        let id = InstanceId(self.next_instance);
        self.next_instance += 1;

        let wrapper = self.doc.create_element("div");
        self.doc.insert_after(source, wrapper)?;
        self.doc.detach(source);
        let text_wrapper = self.element("div", classes::TEXT_WRAPPER);
        self.doc.append_child(wrapper, text_wrapper)?;
        if config.use_overlay {
            let overlay = self.element("div", classes::OVERLAY);
            self.doc.append_child(text_wrapper, overlay)?;
        }

        let parts = Parts {
            id,
            source,
            text_wrapper,
            control,
        };
        let adapter = adapter::adapter_for(control);
        let built = adapter.build(self, &parts, config)?;
        let input = built.input;
        let receiver = built.receiver.unwrap_or(input);

        self.doc
            .copy_attrs(source, input, &AttrCopy::only(&["name"]));
        self.doc
            .copy_attrs(source, receiver, &AttrCopy::only(&["tabindex", "accesskey"]));
        if control != ControlType::File {
            self.doc
                .copy_attrs(source, text_wrapper, &AttrCopy::only(&["title"]));
        }
        let type_class = control.class();
        let wrapper_attrs = AttrCopy::only(&["id", "class"])
            .filter("class", move |v| Some(adapter::wrapper_classes(v, type_class)));
        self.doc.copy_attrs(source, wrapper, &wrapper_attrs);

        let label = if config.use_label {
            self.doc
                .attr(wrapper, "id")
                .filter(|i| !i.is_empty())
                .map(|i| Selector::tag("label").with_attr("for", i))
                .and_then(|sel| self.doc.find(self.doc.root(), &sel))
        } else {
            None
        };

        self.instances.insert(
            id,
            WidgetInstance {
                id,
                source,
                wrapper,
                text_wrapper,
                receiver,
                input,
                control,
                disabled: false,
                config: config.clone(),
                adapter: built.state,
                label,
            },
        );
        self.wrappers.insert(wrapper, id);
        self.install_value_hook();
        adapter.init(self, id);

        if let Some(label) = label {
            self.doc
                .bind(label, EventType::Click, WIDGET, Action::LabelClick(id));
            for ty in [EventType::MouseEnter, EventType::MouseLeave] {
                self.doc.bind(label, ty, WIDGET, Action::LabelHover(id));
            }
        }
        self.wire_controls(id);
        if config.forward_events {
            self.doc.bind(
                wrapper,
                EventType::Change,
                WIDGET,
                Action::Forward(id, Part::Input),
            );
            for ty in [EventType::Focus, EventType::Blur, EventType::Click] {
                self.doc
                    .bind(wrapper, ty, WIDGET, Action::Forward(id, Part::Receiver));
            }
        }

        let disabled = self.doc.is_disabled(source);
        self.apply_state(id, disabled, true);
        debug!("{id}: transformed {source} as {}", control.name());
        Ok(id)
    }

    /// Bindings on the input and the receiver.
    fn wire_controls(&mut self, id: InstanceId) {
        let Some(inst) = self.instances.get(&id) else {
            return;
        };
        let (input, receiver, control) = (inst.input, inst.receiver, inst.control);
        let forward = inst.config.forward_events;
        if control != ControlType::Select {
            for ty in [EventType::Focus, EventType::Blur] {
                self.doc.bind(receiver, ty, WIDGET, Action::FocusClass(id));
            }
        }
        if forward {
            self.doc.bind(
                input,
                EventType::Change,
                WIDGET,
                Action::Forward(id, Part::Wrapper),
            );
            for ty in [EventType::Focus, EventType::Blur, EventType::Click] {
                self.doc
                    .bind(receiver, ty, WIDGET, Action::Forward(id, Part::Wrapper));
            }
        }
    }

    /// Points the widget at a replacement inner input that also acts as the
    /// receiver, and wires it like the original.
    pub(crate) fn swap_input(&mut self, id: InstanceId, input: NodeId) {
        let Some(inst) = self.instances.get_mut(&id) else {
            return;
        };
        inst.input = input;
        inst.receiver = input;
        let disabled = inst.disabled;
        self.wire_controls(id);
        self.apply_state(id, disabled, true);
    }

    /// Enables the widget. Does nothing if it is enabled.
    pub fn enable(&mut self, id: InstanceId) -> Result<(), PlasticError> {
        self.instance(id)?;
        self.apply_state(id, false, false);
        Ok(())
    }

    /// Disables the widget. Does nothing if it is disabled.
    pub fn disable(&mut self, id: InstanceId) -> Result<(), PlasticError> {
        self.instance(id)?;
        self.apply_state(id, true, false);
        Ok(())
    }

    fn apply_state(&mut self, id: InstanceId, disabled: bool, init: bool) {
        let Some(inst) = self.instances.get_mut(&id) else {
            return;
        };
        if inst.disabled == disabled && !init {
            return;
        }
        inst.disabled = disabled;
        let (wrapper, text_wrapper, input, receiver) =
            (inst.wrapper, inst.text_wrapper, inst.input, inst.receiver);
        let control = inst.control;

        self.doc.set_class(text_wrapper, classes::DISABLED, disabled);
        for node in [text_wrapper, wrapper, input] {
            if disabled {
                self.doc.set_attr(node, "disabled", "disabled");
            } else {
                self.doc.remove_attr(node, "disabled");
            }
        }

        if disabled && self.doc.focused() == Some(receiver) {
            self.trigger_event(Event::synthetic(EventType::Blur, receiver));
        }
        let focus = BindingFilter::namespace(INTERNAL).with_event(EventType::Focus);
        self.doc.unbind(receiver, &focus);
        if disabled {
            self.doc
                .bind(receiver, EventType::Focus, INTERNAL, Action::BlockFocus(id));
        }

        let change = adapter::adapter_for(control).on_state_change(self, id, !disabled);
        for (ty, binding) in change {
            self.doc
                .unbind(receiver, &BindingFilter::namespace(STATE).with_event(ty));
            if let StateBinding::Bind(action) = binding {
                self.doc.bind(receiver, ty, STATE, action);
            }
        }
        debug!("{id}: {}", if disabled { "disabled" } else { "enabled" });
    }

    /// Puts the source element back in place of the widget and returns it.
    ///
    /// The source receives the widget's current value, checked state or
    /// selected option, disabled state, and the wrapper's `id` and classes
    /// (minus the widget classes).
    pub fn restore(&mut self, id: InstanceId) -> Result<NodeId, PlasticError> {
        let inst = self.instance(id)?.clone();
        let adapter = adapter::adapter_for(inst.control);
        adapter.before_restore(self, id);

        if let Some(label) = inst.label {
            self.doc.unbind(label, &BindingFilter::namespace(WIDGET));
        }
        if self.doc.parent(inst.wrapper).is_some() {
            self.doc.insert_before(inst.wrapper, inst.source)?;
        }
        adapter.sync_source(self, &inst);
        self.sync_attributes(&inst);

        self.doc.destroy(inst.wrapper)?;
        self.instances.remove(&id);
        self.wrappers.remove(&inst.wrapper);
        if self.open_select == Some(id) {
            self.open_select = None;
        }
        let doc = &self.doc;
        self.listeners.retain(|_, (node, _)| doc.is_alive(*node));
        if self.instances.is_empty() {
            self.remove_value_hook();
        }
        debug!("{id}: restored {}", inst.source);
        Ok(inst.source)
    }

    fn sync_attributes(&mut self, inst: &WidgetInstance) {
        let source = inst.source;
        if inst.disabled {
            if !self.doc.has_attr(source, "disabled") {
                self.doc.set_attr(source, "disabled", "disabled");
            }
        } else {
            self.doc.remove_attr(source, "disabled");
        }

        match self.doc.attr(inst.wrapper, "id").map(ToString::to_string) {
            Some(wrapper_id) => self.doc.set_attr(source, "id", &wrapper_id),
            None => {
                self.doc.remove_attr(source, "id");
            }
        }

        let type_class = inst.control.class();
        let kept: Vec<String> = self
            .doc
            .classes(inst.wrapper)
            .filter(|c| *c != classes::BASE && *c != type_class)
            .map(ToString::to_string)
            .collect();
        if !kept.is_empty() || self.doc.has_attr(source, "class") {
            self.doc.set_attr(source, "class", &kept.join(" "));
        }
    }

    /// Plugin-style entry point.
    ///
    /// Any command other than [`Command::Restore`] first turns a plain
    /// element into a widget. `Restore` on a plain element does nothing.
    /// Returns the widget id, or `None` once restored.
    pub fn run(
        &mut self,
        node: NodeId,
        command: Command,
        config: &Config,
    ) -> Result<Option<InstanceId>, PlasticError> {
        let id = match (self.wrappers.get(&node).copied(), command) {
            (None, Command::Restore) => return Ok(None),
            (Some(id), _) => id,
            (None, _) => self.transform(node, config)?,
        };
        match command {
            Command::Init => {}
            Command::Enable => self.enable(id)?,
            Command::Disable => self.disable(id)?,
            Command::Restore => {
                self.restore(id)?;
                return Ok(None);
            }
        }
        Ok(Some(id))
    }

    /// Kind-specific state of a live widget.
    pub fn adapter_state(&self, id: InstanceId) -> Result<&AdapterState, PlasticError> {
        Ok(&self.instance(id)?.adapter)
    }
}

impl Default for PlasticContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PlasticContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlasticContext")
            .field("hooks", &self.hooks)
            .field("live", &self.instances.len())
            .field("value_hook", &self.value_hook)
            .field("open_select", &self.open_select)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

/// `a: b; c: d` into lowercase-name/value pairs.
fn inline_style(style: Option<&str>) -> Vec<(String, String)> {
    style
        .unwrap_or("")
        .split(';')
        .filter_map(|decl| {
            let (k, v) = decl.split_once(':')?;
            let k = k.trim().to_ascii_lowercase();
            (!k.is_empty()).then(|| (k, v.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_style_parsing() {
        assert_eq!(
            inline_style(Some("Color: red; ; width:10px ")),
            [
                ("color".to_string(), "red".to_string()),
                ("width".to_string(), "10px".to_string())
            ]
        );
        assert!(inline_style(None).is_empty());
    }

    #[test]
    fn core_select_hook_hides_disabled_selection() {
        let mut cx = PlasticContext::new();
        let doc = cx.document_mut();
        let select = doc.create_element("select");
        let option = doc.create_element("option");
        doc.set_attr(option, "value", "a");
        doc.append_child(select, option).unwrap();
        doc.append_child(doc.root(), select).unwrap();

        assert_eq!(cx.val(select).unwrap(), Value::from("a"));
        cx.document_mut().set_attr(option, "disabled", "disabled");
        cx.document_mut().set_selected(option, true);
        assert_eq!(cx.val(select).unwrap(), Value::from(""));
    }

    #[test]
    fn restored_and_unknown_ids_are_distinguished() {
        let mut cx = PlasticContext::new();
        let doc = cx.document_mut();
        let input = doc.create_element("input");
        doc.append_child(doc.root(), input).unwrap();
        let id = cx.transform(input, &Config::default()).unwrap();
        cx.restore(id).unwrap();
        assert_eq!(cx.enable(id), Err(PlasticError::Restored(id)));
        assert_eq!(cx.restore(id), Err(PlasticError::Restored(id)));
        let never = InstanceId(99);
        assert_eq!(cx.disable(never), Err(PlasticError::UnknownInstance(never)));
    }
}
