// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered hook chains.
//!
//! A [`HookChain`] holds the hooks registered for one accessor type, in
//! registration order. Routing scans from the newest entry to the oldest, so a
//! later registration shadows an earlier one without removing it.

use alloc::vec::Vec;
use core::fmt;

use crate::predicate::{Getter, Handlers, HookSubject, Predicate, Setter};

/// Stable identifier of a registered hook.
///
/// Ids are never reused within a chain (or within a
/// [`HookRegistry`](crate::HookRegistry)), so removing one entry never
/// invalidates the handles of the others.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HookId(u32);

impl HookId {
    /// Returns the raw numeric id.
    #[must_use]
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    pub(crate) const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}

/// Direction of an accessor call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Read.
    Get,
    /// Write.
    Set,
}

/// One registered hook.
pub struct HookEntry<D: HookSubject<H>, H, V> {
    id: HookId,
    /// `None` marks the wrapped core accessor, which always matches.
    predicate: Option<Predicate<D, H>>,
    handlers: Handlers<D, H, V>,
}

impl<D: HookSubject<H>, H: Copy, V> HookEntry<D, H, V> {
    /// The entry's handle.
    #[must_use]
    pub fn id(&self) -> HookId {
        self.id
    }

    /// The predicate, or `None` for the wrapped core accessor.
    #[must_use]
    pub fn predicate(&self) -> Option<&Predicate<D, H>> {
        self.predicate.as_ref()
    }

    /// Returns `true` if this entry wraps a pre-existing native accessor.
    #[must_use]
    pub fn is_wrapped_core(&self) -> bool {
        self.predicate.is_none()
    }

    /// Returns `true` if the entry handles `direction`.
    #[must_use]
    pub fn handles(&self, direction: Direction) -> bool {
        match direction {
            Direction::Get => self.handlers.get.is_some(),
            Direction::Set => self.handlers.set.is_some(),
        }
    }

    fn matches(&self, subject: &D, node: H) -> bool {
        self.predicate
            .as_ref()
            .is_none_or(|p| p.matches(subject, node))
    }
}

impl<D: HookSubject<H>, H, V> fmt::Debug for HookEntry<D, H, V>
where
    D::Selector: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookEntry")
            .field("id", &self.id)
            .field("predicate", &self.predicate)
            .field("handlers", &self.handlers)
            .finish()
    }
}

/// Ordered list of hooks for one accessor type.
///
/// # Example
///
/// ```rust
/// use understory_hooks::{Handlers, HookChain, HookSubject, Predicate};
///
/// struct Nodes;
/// impl HookSubject<u32> for Nodes {
///     type Selector = u32;
///     fn is(&self, node: u32, selector: &u32) -> bool { node == *selector }
/// }
///
/// let mut chain = HookChain::<Nodes, u32, &str>::new();
/// chain.register(Predicate::dynamic(|_, n| n > 0), Handlers::new().with_get(|_, _| Some("any")));
/// chain.register(Predicate::Static(2), Handlers::new().with_get(|_, _| Some("two")));
///
/// assert_eq!(chain.route_get(&Nodes, 2), Some("two"));
/// assert_eq!(chain.route_get(&Nodes, 1), Some("any"));
/// assert_eq!(chain.route_get(&Nodes, 0), None);
/// ```
pub struct HookChain<D: HookSubject<H>, H, V> {
    entries: Vec<HookEntry<D, H, V>>,
    next_id: u32,
}

impl<D: HookSubject<H>, H: Copy, V> HookChain<D, H, V> {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends a hook and returns its handle.
    ///
    /// A handler set with neither `get` nor `set` is ignored and yields `None`.
    pub fn register(
        &mut self,
        predicate: Predicate<D, H>,
        handlers: Handlers<D, H, V>,
    ) -> Option<HookId> {
        if handlers.is_empty() {
            log::debug!("ignoring hook registration without get or set");
            return None;
        }
        let id = HookId(self.next_id);
        self.push(id, Some(predicate), handlers);
        Some(id)
    }

    pub(crate) fn push(
        &mut self,
        id: HookId,
        predicate: Option<Predicate<D, H>>,
        handlers: Handlers<D, H, V>,
    ) {
        self.next_id = self.next_id.max(id.0 + 1);
        self.entries.push(HookEntry {
            id,
            predicate,
            handlers,
        });
    }

    /// Installs (or replaces) the wrapped core entry at the lowest priority.
    pub(crate) fn set_core(&mut self, id: HookId, handlers: Handlers<D, H, V>) {
        self.entries.retain(|e| !e.is_wrapped_core());
        self.next_id = self.next_id.max(id.0 + 1);
        self.entries.insert(
            0,
            HookEntry {
                id,
                predicate: None,
                handlers,
            },
        );
    }

    /// Removes the entry with handle `id`.
    ///
    /// The wrapped core entry cannot be removed this way. Returns `true` if an
    /// entry was removed.
    pub fn unregister(&mut self, id: HookId) -> bool {
        match self.entries.iter().position(|e| e.id == id) {
            Some(idx) if !self.entries[idx].is_wrapped_core() => {
                self.entries.remove(idx);
                true
            }
            _ => false,
        }
    }

    /// Removes every non-core entry registered with the same predicate.
    ///
    /// Returns the number of removed entries.
    pub fn unregister_predicate(&mut self, predicate: &Predicate<D, H>) -> usize
    where
        D::Selector: PartialEq,
    {
        let before = self.entries.len();
        self.entries
            .retain(|e| e.predicate.as_ref().is_none_or(|p| !p.same(predicate)));
        before - self.entries.len()
    }

    /// Returns `true` if at least one entry other than the wrapped core exists.
    #[must_use]
    pub fn has_custom_entries(&self) -> bool {
        self.entries.iter().any(|e| !e.is_wrapped_core())
    }

    /// Number of entries, including the wrapped core entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the chain has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &HookEntry<D, H, V>> {
        self.entries.iter()
    }

    /// Finds the entry that would answer a call, newest first.
    #[must_use]
    pub fn resolve(&self, subject: &D, node: H, direction: Direction) -> Option<HookId> {
        self.find(subject, node, direction).map(|e| e.id)
    }

    fn find(&self, subject: &D, node: H, direction: Direction) -> Option<&HookEntry<D, H, V>> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.handles(direction) && e.matches(subject, node))
    }

    /// Returns the getter that would answer a read of `node`.
    #[must_use]
    pub fn resolve_get(&self, subject: &D, node: H) -> Option<Getter<D, H, V>> {
        self.find(subject, node, Direction::Get)
            .and_then(|e| e.handlers.get.clone())
    }

    /// Returns the setter that would answer a write to `node`.
    #[must_use]
    pub fn resolve_set(&self, subject: &D, node: H) -> Option<Setter<D, H, V>> {
        self.find(subject, node, Direction::Set)
            .and_then(|e| e.handlers.set.clone())
    }

    /// Routes a read.
    ///
    /// Returns `None` when no entry matches.
    pub fn route_get(&self, subject: &D, node: H) -> Option<V> {
        let entry = self.find(subject, node, Direction::Get)?;
        log::trace!("routing get to hook {:?}", entry.id);
        entry.handlers.get.as_ref().and_then(|get| get(subject, node))
    }

    /// Routes a write.
    ///
    /// A miss is a no-op returning `None`.
    pub fn route_set(&self, subject: &mut D, node: H, value: V) -> Option<V> {
        let set = self.resolve_set(subject, node)?;
        set(subject, node, value)
    }

    /// Routes a read (`value == None`) or a write.
    pub fn route(&self, subject: &mut D, node: H, value: Option<V>) -> Option<V> {
        match value {
            None => self.route_get(subject, node),
            Some(value) => self.route_set(subject, node, value),
        }
    }
}

impl<D: HookSubject<H>, H: Copy, V> Default for HookChain<D, H, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: HookSubject<H>, H, V> fmt::Debug for HookChain<D, H, V>
where
    D::Selector: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookChain")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}
