// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-type hook routing with a preserved native accessor.

use alloc::string::{String, ToString};
use core::fmt;

use hashbrown::HashMap;

use crate::chain::{HookChain, HookId};
use crate::predicate::{Getter, Handlers, HookSubject, Predicate, Setter};

/// Handle returned by [`HookRegistry::register`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HookHandle {
    ty: String,
    id: HookId,
}

impl HookHandle {
    /// The accessor type the hook was registered for.
    #[must_use]
    pub fn ty(&self) -> &str {
        &self.ty
    }

    /// The hook id inside that type's chain.
    #[must_use]
    pub fn id(&self) -> HookId {
        self.id
    }
}

/// Hook chains keyed by accessor type.
///
/// Each type may have a native ("core") accessor. The first registration for
/// a type installs a router: a [`HookChain`] whose lowest entry wraps the core
/// accessor. When the last custom hook goes away the router is torn down and
/// calls reach the core accessor directly again.
///
/// # Example
///
/// ```rust
/// use understory_hooks::{Handlers, HookRegistry, HookSubject, Predicate};
///
/// struct Doc(Vec<&'static str>);
/// impl HookSubject<usize> for Doc {
///     type Selector = &'static str;
///     fn is(&self, node: usize, tag: &&'static str) -> bool {
///         self.0.get(node) == Some(tag)
///     }
/// }
///
/// let doc = Doc(vec!["input", "div"]);
/// let mut reg = HookRegistry::<Doc, usize, String>::new();
/// reg.install_core("value", Handlers::new().with_get(|_, _| Some("native".into())));
///
/// let handle = reg
///     .register("value", Predicate::Static("div"), Handlers::new().with_get(|_, _| Some("hooked".into())))
///     .unwrap();
/// assert_eq!(reg.get(&doc, "value", 1).as_deref(), Some("hooked"));
/// assert_eq!(reg.get(&doc, "value", 0).as_deref(), Some("native"));
///
/// assert!(reg.unregister(&handle));
/// assert!(!reg.is_routed("value"));
/// assert_eq!(reg.get(&doc, "value", 1).as_deref(), Some("native"));
/// ```
pub struct HookRegistry<D: HookSubject<H>, H, V> {
    chains: HashMap<String, HookChain<D, H, V>>,
    core: HashMap<String, (HookId, Handlers<D, H, V>)>,
    next_id: u32,
}

impl<D: HookSubject<H>, H: Copy, V> HookRegistry<D, H, V> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chains: HashMap::new(),
            core: HashMap::new(),
            next_id: 0,
        }
    }

    fn alloc_id(&mut self) -> HookId {
        let id = HookId::from_raw(self.next_id);
        self.next_id += 1;
        id
    }

    /// Defines the native accessor for `ty`.
    ///
    /// If a router is already installed the wrapped core entry is replaced, so
    /// the new accessor is reachable as the fallback right away.
    pub fn install_core(&mut self, ty: &str, handlers: Handlers<D, H, V>) {
        let id = self.alloc_id();
        if let Some(chain) = self.chains.get_mut(ty) {
            chain.set_core(id, handlers.clone());
        }
        self.core.insert(ty.to_string(), (id, handlers));
    }

    /// Returns the native accessor for `ty`, if one was installed.
    #[must_use]
    pub fn core(&self, ty: &str) -> Option<&Handlers<D, H, V>> {
        self.core.get(ty).map(|(_, h)| h)
    }

    /// Installs a router for `ty` unless one exists.
    ///
    /// Returns `true` if a router was installed by this call.
    pub fn ensure_wrapped(&mut self, ty: &str) -> bool {
        if self.chains.contains_key(ty) {
            return false;
        }
        let mut chain = HookChain::new();
        if let Some((id, handlers)) = self.core.get(ty) {
            chain.set_core(*id, handlers.clone());
        }
        self.chains.insert(ty.to_string(), chain);
        log::debug!("installed hook router for {ty:?}");
        true
    }

    /// Registers a hook for `ty`.
    ///
    /// A handler set with neither side is ignored and yields `None`; no router
    /// is installed for it.
    pub fn register(
        &mut self,
        ty: &str,
        predicate: Predicate<D, H>,
        handlers: Handlers<D, H, V>,
    ) -> Option<HookHandle> {
        if handlers.is_empty() {
            log::warn!("ignoring hook for {ty:?} without get or set");
            return None;
        }
        self.ensure_wrapped(ty);
        let id = self.alloc_id();
        let chain = self.chains.get_mut(ty)?;
        chain.push(id, Some(predicate), handlers);
        Some(HookHandle {
            ty: ty.to_string(),
            id,
        })
    }

    /// Removes one hook. Returns `true` if it was registered.
    pub fn unregister(&mut self, handle: &HookHandle) -> bool {
        let removed = self
            .chains
            .get_mut(&handle.ty)
            .is_some_and(|chain| chain.unregister(handle.id));
        if removed {
            self.teardown_if_unused(&handle.ty);
        }
        removed
    }

    /// Removes every hook for `ty` registered with the same predicate.
    ///
    /// Returns the number of removed hooks.
    pub fn unregister_predicate(&mut self, ty: &str, predicate: &Predicate<D, H>) -> usize
    where
        D::Selector: PartialEq,
    {
        let removed = self
            .chains
            .get_mut(ty)
            .map_or(0, |chain| chain.unregister_predicate(predicate));
        if removed > 0 {
            self.teardown_if_unused(ty);
        }
        removed
    }

    fn teardown_if_unused(&mut self, ty: &str) {
        if self
            .chains
            .get(ty)
            .is_some_and(|chain| !chain.has_custom_entries())
        {
            self.chains.remove(ty);
            log::debug!("removed hook router for {ty:?}");
        }
    }

    /// Returns `true` while a router is installed for `ty`.
    #[must_use]
    pub fn is_routed(&self, ty: &str) -> bool {
        self.chains.contains_key(ty)
    }

    /// The router for `ty`, if installed.
    #[must_use]
    pub fn chain(&self, ty: &str) -> Option<&HookChain<D, H, V>> {
        self.chains.get(ty)
    }

    /// Number of installed routers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Returns `true` if no router is installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// The getter a read of `node` through `ty` would use.
    #[must_use]
    pub fn resolve_get(&self, subject: &D, ty: &str, node: H) -> Option<Getter<D, H, V>> {
        match self.chains.get(ty) {
            Some(chain) => chain.resolve_get(subject, node),
            None => self.core(ty).and_then(|h| h.get.clone()),
        }
    }

    /// The setter a write to `node` through `ty` would use.
    #[must_use]
    pub fn resolve_set(&self, subject: &D, ty: &str, node: H) -> Option<Setter<D, H, V>> {
        match self.chains.get(ty) {
            Some(chain) => chain.resolve_set(subject, node),
            None => self.core(ty).and_then(|h| h.set.clone()),
        }
    }

    /// Reads `node` through `ty`.
    ///
    /// `None` means neither a hook nor the core accessor produced a value; the
    /// caller should fall back to its own native access.
    pub fn get(&self, subject: &D, ty: &str, node: H) -> Option<V> {
        let get = self.resolve_get(subject, ty, node)?;
        get(subject, node)
    }

    /// Writes `value` to `node` through `ty`.
    pub fn set(&self, subject: &mut D, ty: &str, node: H, value: V) -> Option<V> {
        let set = self.resolve_set(subject, ty, node)?;
        set(subject, node, value)
    }
}

impl<D: HookSubject<H>, H: Copy, V> Default for HookRegistry<D, H, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: HookSubject<H>, H, V> fmt::Debug for HookRegistry<D, H, V>
where
    D::Selector: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookRegistry")
            .field("chains", &self.chains)
            .field("core", &self.core)
            .field("next_id", &self.next_id)
            .finish()
    }
}
