// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event entry points and action dispatch.
//!
//! The `click`, `focus`, `key_down`, ... methods simulate user input and
//! produce native events. [`PlasticContext::trigger`] fires synthetic ones,
//! the way program code would.

use alloc::boxed::Box;

use log::{debug, trace};
use understory_dom::{Event, EventType, Key, Modifiers, NodeId, Selector, dispatch};

use crate::action::{Action, LISTENER, ListenerId, Part};
use crate::adapter;
use crate::{PlasticContext, PlasticError, classes};

impl PlasticContext {
    /// Runs the handlers `event` reaches. No default action.
    pub(crate) fn fire(&mut self, mut event: Event) -> Event {
        let seq = self.doc.dispatch_sequence(&event);
        trace!(
            "{} on {}: {} handler(s)",
            event.ty.name(),
            event.target,
            seq.len()
        );
        dispatch::run(&seq, &mut event, |d, ev| self.handle(d.node, d.action, ev));
        event
    }

    /// Fires `event` and performs its default action.
    ///
    /// Focus and blur move focus when the target can take or holds it;
    /// otherwise only the handlers run. A click on a plain checkbox or radio
    /// outside any widget checks it and fires `change`.
    pub(crate) fn trigger_event(&mut self, event: Event) -> Event {
        match event.ty {
            EventType::Focus
                if self.doc.focused() != Some(event.target)
                    && self.doc.is_focusable(event.target) =>
            {
                self.move_focus(Some(event.target), event)
            }
            EventType::Blur if self.doc.focused() == Some(event.target) => {
                self.move_focus(None, event)
            }
            EventType::Click => {
                let native = event.is_native();
                let event = self.fire(event);
                if !event.default_prevented {
                    self.activate(event.target, native);
                }
                event
            }
            _ => self.fire(event),
        }
    }

    /// Moves focus to `to`, firing blur/focusout on the old holder and
    /// focus/focusin on the new one.
    ///
    /// `cause` is the focus event for `to`, or the blur event for the old
    /// holder when `to` is `None`; it is fired as is, so its flags carry over.
    fn move_focus(&mut self, to: Option<NodeId>, cause: Event) -> Event {
        let native = cause.is_native();
        let make = |ty, target| {
            if native {
                Event::native(ty, target)
            } else {
                Event::synthetic(ty, target)
            }
        };
        let mut fired = None;
        if let Some(old) = self.doc.focused() {
            self.doc.set_focused(None);
            let blur = if cause.ty == EventType::Blur {
                cause.clone()
            } else {
                make(EventType::Blur, old)
            };
            fired = Some(self.fire(blur));
            self.fire(make(EventType::FocusOut, old));
        }
        if let Some(new) = to {
            let origin = self.focus_origin.on_focus(new, native);
            self.doc.set_focused(Some(new));
            let mut focus = if cause.ty == EventType::Focus {
                cause.clone()
            } else {
                make(EventType::Focus, new)
            };
            focus.focus_from = Some(origin);
            fired = Some(self.fire(focus));
            // A focus handler may have moved focus on.
            if self.doc.focused() == Some(new) {
                self.fire(make(EventType::FocusIn, new).with_focus_from(origin));
            }
        }
        fired.unwrap_or(cause)
    }

    /// Default click action on plain checkboxes and radios.
    fn activate(&mut self, target: NodeId, native: bool) {
        if self.instance_for(target).is_some() {
            return;
        }
        let checked = self.doc.is_checked(target);
        let on = match self.doc.input_type(target).as_deref() {
            Some("checkbox") => !checked,
            Some("radio") if !checked => true,
            _ => return,
        };
        self.doc.set_checked(target, on);
        let change = if native {
            Event::native(EventType::Change, target)
        } else {
            Event::synthetic(EventType::Change, target)
        };
        self.fire(change);
    }

    fn live(&self, node: NodeId) -> Result<(), PlasticError> {
        if self.doc.is_alive(node) {
            Ok(())
        } else {
            Err(PlasticError::StaleNode(node))
        }
    }

    // --- user input ----------------------------------------------------------

    /// A primary button press on `node`.
    ///
    /// Focus moves to the closest focusable node on the path; pressing
    /// anything else blurs the focused node.
    pub fn mouse_down(&mut self, node: NodeId) -> Result<Event, PlasticError> {
        self.live(node)?;
        let path = self.doc.path_to_root(node);
        self.focus_origin.on_pointer_down(&path, self.doc.focused());
        let event = self.fire(Event::native(EventType::MouseDown, node));
        if event.default_prevented {
            return Ok(event);
        }
        let target = path.into_iter().find(|n| self.doc.is_focusable(*n));
        match (target, self.doc.focused()) {
            (Some(t), focused) if focused != Some(t) => {
                self.move_focus(Some(t), Event::native(EventType::Focus, t));
            }
            (None, Some(focused)) => {
                self.move_focus(None, Event::native(EventType::Blur, focused));
            }
            _ => {}
        }
        Ok(event)
    }

    /// A full click on `node`: press, then click.
    pub fn click(&mut self, node: NodeId) -> Result<Event, PlasticError> {
        self.mouse_down(node)?;
        Ok(self.trigger_event(Event::native(EventType::Click, node)))
    }

    /// Pointer movement over `node`.
    pub fn mouse_move(&mut self, node: NodeId) -> Result<Event, PlasticError> {
        self.live(node)?;
        Ok(self.fire(Event::native(EventType::MouseMove, node)))
    }

    /// The pointer entered `node`.
    pub fn mouse_enter(&mut self, node: NodeId) -> Result<Event, PlasticError> {
        self.live(node)?;
        Ok(self.fire(Event::native(EventType::MouseEnter, node)))
    }

    /// The pointer left `node`.
    pub fn mouse_leave(&mut self, node: NodeId) -> Result<Event, PlasticError> {
        self.live(node)?;
        Ok(self.fire(Event::native(EventType::MouseLeave, node)))
    }

    /// Keyboard focus on `node`, e.g. by tabbing.
    pub fn focus(&mut self, node: NodeId) -> Result<Event, PlasticError> {
        self.live(node)?;
        Ok(self.trigger_event(Event::native(EventType::Focus, node)))
    }

    /// The user moved focus away from `node`.
    pub fn blur(&mut self, node: NodeId) -> Result<Event, PlasticError> {
        self.live(node)?;
        Ok(self.trigger_event(Event::native(EventType::Blur, node)))
    }

    /// A key press on `node`.
    pub fn key_down(
        &mut self,
        node: NodeId,
        key: Key,
        modifiers: Modifiers,
    ) -> Result<Event, PlasticError> {
        self.live(node)?;
        let event = Event::native(EventType::KeyDown, node)
            .with_key(key)
            .with_modifiers(modifiers);
        Ok(self.fire(event))
    }

    /// A character typed on `node`.
    pub fn key_press(
        &mut self,
        node: NodeId,
        ch: char,
        modifiers: Modifiers,
    ) -> Result<Event, PlasticError> {
        self.live(node)?;
        let key = if ch == ' ' { Key::Space } else { Key::Char(ch) };
        let event = Event::native(EventType::KeyPress, node)
            .with_key(key)
            .with_modifiers(modifiers);
        Ok(self.fire(event))
    }

    /// The user edited a control's value and committed it.
    ///
    /// For a file input, `value` is the chosen file name.
    pub fn edit_value(&mut self, node: NodeId, value: &str) -> Result<Event, PlasticError> {
        self.live(node)?;
        self.doc.set_value(node, value);
        Ok(self.fire(Event::native(EventType::Change, node)))
    }

    // --- program events ------------------------------------------------------

    /// Fires a synthetic event on `node`, with its default action.
    pub fn trigger(&mut self, node: NodeId, ty: EventType) -> Result<Event, PlasticError> {
        self.live(node)?;
        Ok(self.trigger_event(Event::synthetic(ty, node)))
    }

    /// Calls `callback` for every `ty` event reaching `node`.
    ///
    /// Listeners run in binding order with the widget's own handlers, so one
    /// bound on a wrapper sees forwarded events.
    pub fn on(
        &mut self,
        node: NodeId,
        ty: EventType,
        callback: impl FnMut(&mut Event) + 'static,
    ) -> Result<ListenerId, PlasticError> {
        self.live(node)?;
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.insert(id, (node, Box::new(callback)));
        self.doc.bind(node, ty, LISTENER, Action::Listener(id));
        Ok(id)
    }

    /// Removes a listener. Returns `false` if it was already gone.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let Some((node, _)) = self.listeners.remove(&id) else {
            return false;
        };
        self.doc
            .retain_bindings(node, |b| b.action != Action::Listener(id));
        true
    }

    // --- actions -------------------------------------------------------------

    fn handle(&mut self, node: NodeId, action: Action, ev: &mut Event) {
        match action {
            Action::FocusClass(id) => {
                if let Some(inst) = self.widget(id) {
                    let text_wrapper = inst.text_wrapper;
                    let on = ev.ty == EventType::Focus;
                    self.doc.set_class(text_wrapper, classes::FOCUS, on);
                }
            }
            Action::LabelClick(id) => {
                ev.stop_propagation();
                let Some(receiver) = self.part(id, Part::Receiver) else {
                    return;
                };
                let ty = if self.doc.is(receiver, &Selector::form_control()) {
                    EventType::Focus
                } else {
                    EventType::Click
                };
                self.trigger_event(Event::synthetic(ty, receiver));
            }
            Action::LabelHover(id) => {
                if let Some(text_wrapper) = self.part(id, Part::TextWrapper) {
                    let on = ev.ty == EventType::MouseEnter;
                    self.doc.set_class(text_wrapper, classes::HOVER, on);
                }
            }
            Action::Forward(id, part) => {
                if !ev.forwarded
                    && let Some(target) = self.part(id, part)
                {
                    ev.forwarded = true;
                    self.trigger_event(ev.retarget(target));
                }
                ev.stop_propagation();
            }
            Action::BlockFocus(id) => {
                debug!("{id}: focus blocked while disabled");
                self.trigger_event(Event::synthetic(EventType::Blur, node));
            }
            Action::StopPropagation => ev.stop_propagation(),
            Action::TextTitle(id) => adapter::mirror_title(self, id),
            Action::BooleanKey => {
                if ev.key == Some(Key::Space) {
                    ev.prevent_default();
                    self.trigger_event(Event::synthetic(EventType::Click, node));
                }
            }
            Action::BooleanToggle(id) => adapter::toggle_checked(self, id, None),
            Action::RadioGroup => adapter::sync_radio_group(self, node),
            Action::FileClear(id) => {
                ev.stop_propagation();
                adapter::clear_file(self, id);
            }
            Action::FileChanged(id) => adapter::file_changed(self, id),
            Action::SelectToggle(id) => adapter::toggle(self, id, ev),
            Action::SelectNavigate(id) => adapter::navigate(self, id, node, ev),
            Action::SelectChoose(id) => adapter::choose(self, id, node, ev),
            Action::SelectOutside(id) => adapter::outside(self, id, ev),
            Action::Listener(id) => {
                // Taken out while it runs; `off` from inside is not possible.
                if let Some((owner, mut callback)) = self.listeners.remove(&id) {
                    callback(ev);
                    self.listeners.insert(id, (owner, callback));
                }
            }
        }
    }
}
