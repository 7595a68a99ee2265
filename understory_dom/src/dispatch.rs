// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher helper: snapshot the bindings an event reaches and walk them.
//!
//! Dispatch happens in two steps so the handler may freely mutate the
//! document (including its bindings) while an event is in flight:
//!
//! 1) [`Document::dispatch_sequence`] copies the matching bindings along the
//!    propagation path (target first, then each ancestor for bubbling
//!    events). Bindings added during dispatch are not part of the snapshot.
//! 2) [`run`] calls the handler for each entry. Once a handler calls
//!    [`Event::stop_propagation`], the remaining entries of the current node
//!    still run and later nodes are skipped.
//!
//! ## Minimal example
//!
//! ```
//! use understory_dom::{dispatch, Document, Event, EventType, Namespace};
//!
//! let mut doc = Document::<&str>::new();
//! let outer = doc.create_element("div");
//! let inner = doc.create_element("span");
//! doc.append_child(doc.root(), outer).unwrap();
//! doc.append_child(outer, inner).unwrap();
//! doc.bind(inner, EventType::Click, Namespace("demo"), "inner");
//! doc.bind(outer, EventType::Click, Namespace("demo"), "outer");
//!
//! let mut event = Event::native(EventType::Click, inner);
//! let seq = doc.dispatch_sequence(&event);
//! let mut seen = Vec::new();
//! let stopped = dispatch::run(&seq, &mut event, |d, _| seen.push(d.action));
//! assert!(!stopped);
//! assert_eq!(seen, ["inner", "outer"]);
//! ```

use alloc::vec::Vec;

use log::trace;

use crate::{Document, Event, NodeId};

/// One handler invocation of a dispatch sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dispatch<A> {
    /// Node the binding is attached to.
    pub node: NodeId,
    /// The bound action.
    pub action: A,
}

impl<A: Clone> Document<A> {
    /// Snapshot of the bindings `event` reaches, in invocation order.
    #[must_use]
    pub fn dispatch_sequence(&self, event: &Event) -> Vec<Dispatch<A>> {
        let path = if event.ty.bubbles() {
            self.path_to_root(event.target)
        } else if self.is_alive(event.target) {
            alloc::vec![event.target]
        } else {
            trace!("{} on dead node {}", event.ty.name(), event.target);
            Vec::new()
        };
        path.into_iter()
            .flat_map(|node| {
                self.bindings(node)
                    .iter()
                    .filter(|b| b.event == event.ty)
                    .map(move |b| Dispatch {
                        node,
                        action: b.action.clone(),
                    })
            })
            .collect()
    }
}

/// Runs `handler` over `seq`, honoring [`Event::stop_propagation`].
///
/// Returns `true` if propagation was stopped.
pub fn run<A>(
    seq: &[Dispatch<A>],
    event: &mut Event,
    mut handler: impl FnMut(&Dispatch<A>, &mut Event),
) -> bool {
    let mut current: Option<NodeId> = None;
    for d in seq {
        if event.propagation_stopped && current != Some(d.node) {
            trace!("{} stopped before {}", event.ty.name(), d.node);
            break;
        }
        current = Some(d.node);
        handler(d, event);
    }
    event.propagation_stopped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EventType, Namespace};
    use alloc::vec;

    const NS: Namespace = Namespace("t");

    fn tree() -> (Document<u8>, NodeId, NodeId) {
        let mut doc = Document::new();
        let outer = doc.create_element("div");
        let inner = doc.create_element("input");
        doc.append_child(doc.root(), outer).unwrap();
        doc.append_child(outer, inner).unwrap();
        (doc, outer, inner)
    }

    #[test]
    fn stop_finishes_current_node_then_halts() {
        let (mut doc, outer, inner) = tree();
        doc.bind(inner, EventType::Change, NS, 1);
        doc.bind(inner, EventType::Change, NS, 2);
        doc.bind(outer, EventType::Change, NS, 3);

        let mut ev = Event::native(EventType::Change, inner);
        let seq = doc.dispatch_sequence(&ev);
        let mut seen = vec![];
        let stopped = run(&seq, &mut ev, |d, e| {
            seen.push(d.action);
            if d.action == 1 {
                e.stop_propagation();
            }
        });
        assert!(stopped);
        assert_eq!(seen, [1, 2]);
    }

    #[test]
    fn non_bubbling_events_stay_on_target() {
        let (mut doc, outer, inner) = tree();
        doc.bind(inner, EventType::Focus, NS, 1);
        doc.bind(outer, EventType::Focus, NS, 2);
        doc.bind(inner, EventType::Blur, NS, 3);

        let seq = doc.dispatch_sequence(&Event::native(EventType::Focus, inner));
        assert_eq!(seq, [Dispatch { node: inner, action: 1 }]);
    }

    #[test]
    fn snapshot_ignores_later_bindings() {
        let (mut doc, _, inner) = tree();
        doc.bind(inner, EventType::Click, NS, 1);
        let mut ev = Event::native(EventType::Click, inner);
        let seq = doc.dispatch_sequence(&ev);
        doc.bind(inner, EventType::Click, NS, 2);
        let mut count = 0;
        run(&seq, &mut ev, |_, _| count += 1);
        assert_eq!(count, 1);
    }
}
