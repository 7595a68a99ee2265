// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Predicates and handler sets.
//!
//! A hook is selected by a [`Predicate`], which is either a static selector
//! understood by the subject (see [`HookSubject`]) or an arbitrary function.

use alloc::rc::Rc;
use core::fmt;

/// Something hooks can be routed over.
///
/// `D` is the environment handed to predicates and handlers (a document, a
/// widget context, ...). `H` is the element handle being accessed.
pub trait HookSubject<H> {
    /// Static matcher type, e.g. a tag/class selector.
    type Selector;

    /// Returns `true` if `node` matches `selector`.
    fn is(&self, node: H, selector: &Self::Selector) -> bool;
}

/// Boolean test over an element handle.
pub enum Predicate<D: HookSubject<H>, H> {
    /// Static match, delegated to [`HookSubject::is`].
    Static(D::Selector),
    /// Arbitrary function of the subject and the handle.
    Dynamic(Rc<dyn Fn(&D, H) -> bool>),
}

impl<D: HookSubject<H>, H: Copy> Predicate<D, H> {
    /// Creates a dynamic predicate from a closure.
    pub fn dynamic(f: impl Fn(&D, H) -> bool + 'static) -> Self {
        Self::Dynamic(Rc::new(f))
    }

    /// Tests the predicate.
    pub fn matches(&self, subject: &D, node: H) -> bool {
        match self {
            Self::Static(selector) => subject.is(node, selector),
            Self::Dynamic(f) => f(subject, node),
        }
    }

    /// Returns `true` if `other` is the same predicate.
    ///
    /// Dynamic predicates compare by identity (the same `Rc`), static ones by
    /// selector equality.
    pub fn same(&self, other: &Self) -> bool
    where
        D::Selector: PartialEq,
    {
        match (self, other) {
            (Self::Static(a), Self::Static(b)) => a == b,
            (Self::Dynamic(a), Self::Dynamic(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<D: HookSubject<H>, H> Clone for Predicate<D, H>
where
    D::Selector: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::Static(s) => Self::Static(s.clone()),
            Self::Dynamic(f) => Self::Dynamic(f.clone()),
        }
    }
}

impl<D: HookSubject<H>, H> fmt::Debug for Predicate<D, H>
where
    D::Selector: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(s) => f.debug_tuple("Static").field(s).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Read side of a hook.
pub type Getter<D, H, V> = Rc<dyn Fn(&D, H) -> Option<V>>;

/// Write side of a hook. The return value is passed back to the caller.
pub type Setter<D, H, V> = Rc<dyn Fn(&mut D, H, V) -> Option<V>>;

/// A `get`/`set` pair; either side may be absent.
pub struct Handlers<D, H, V> {
    /// Getter, if any.
    pub get: Option<Getter<D, H, V>>,
    /// Setter, if any.
    pub set: Option<Setter<D, H, V>>,
}

impl<D, H, V> Handlers<D, H, V> {
    /// An empty handler set. Registering it is a no-op.
    #[must_use]
    pub fn new() -> Self {
        Self {
            get: None,
            set: None,
        }
    }

    /// Adds a getter.
    #[must_use]
    pub fn with_get(mut self, f: impl Fn(&D, H) -> Option<V> + 'static) -> Self {
        self.get = Some(Rc::new(f));
        self
    }

    /// Adds a setter.
    #[must_use]
    pub fn with_set(mut self, f: impl Fn(&mut D, H, V) -> Option<V> + 'static) -> Self {
        self.set = Some(Rc::new(f));
        self
    }

    /// Returns `true` if neither side is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.get.is_none() && self.set.is_none()
    }
}

impl<D, H, V> Default for Handlers<D, H, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, H, V> Clone for Handlers<D, H, V> {
    fn clone(&self) -> Self {
        Self {
            get: self.get.clone(),
            set: self.set.clone(),
        }
    }
}

impl<D, H, V> fmt::Debug for Handlers<D, H, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("get", &self.get.is_some())
            .field("set", &self.set.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    struct Tags(&'static [&'static str]);

    impl HookSubject<usize> for Tags {
        type Selector = &'static str;

        fn is(&self, node: usize, selector: &&'static str) -> bool {
            self.0.get(node) == Some(selector)
        }
    }

    #[test]
    fn static_predicate_delegates_to_subject() {
        let tags = Tags(&["div", "span"]);
        let p: Predicate<Tags, usize> = Predicate::Static("div");
        assert!(p.matches(&tags, 0));
        assert!(!p.matches(&tags, 1));
        assert!(!p.matches(&tags, 7));
    }

    #[test]
    fn dynamic_predicate_identity() {
        let a: Predicate<Tags, usize> = Predicate::dynamic(|_, n| n == 1);
        let b: Predicate<Tags, usize> = Predicate::dynamic(|_, n| n == 1);
        assert!(a.same(&a.clone()));
        assert!(!a.same(&b));
        assert!(Predicate::<Tags, usize>::Static("div").same(&Predicate::Static("div")));
        assert!(!a.same(&Predicate::Static("div")));
    }

    #[test]
    fn handlers_emptiness_and_debug() {
        let h: Handlers<Tags, usize, u32> = Handlers::new();
        assert!(h.is_empty());
        let h = h.with_get(|_, n| u32::try_from(n).ok());
        assert!(!h.is_empty());
        assert_eq!(format!("{h:?}"), "Handlers { get: true, set: false }");
    }
}
