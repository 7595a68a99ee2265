// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One registry per accessor family.

use core::fmt;

use crate::predicate::HookSubject;
use crate::registry::HookRegistry;

/// Accessor families that can be hooked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    /// Form values. Keyed by element tag name.
    Value,
    /// Attributes. Keyed by attribute name.
    Attribute,
    /// Element properties (`checked`, `disabled`, ...). Keyed by property name.
    Property,
    /// Inline style. Keyed by style property name.
    Style,
}

impl AccessorKind {
    /// All families, in declaration order.
    pub const ALL: [Self; 4] = [Self::Value, Self::Attribute, Self::Property, Self::Style];

    /// Lowercase name, for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Attribute => "attribute",
            Self::Property => "property",
            Self::Style => "style",
        }
    }
}

impl fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four hook registries.
pub struct HooksManager<D: HookSubject<H>, H, V> {
    value: HookRegistry<D, H, V>,
    attribute: HookRegistry<D, H, V>,
    property: HookRegistry<D, H, V>,
    style: HookRegistry<D, H, V>,
}

impl<D: HookSubject<H>, H: Copy, V> HooksManager<D, H, V> {
    /// Creates a manager with four empty registries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: HookRegistry::new(),
            attribute: HookRegistry::new(),
            property: HookRegistry::new(),
            style: HookRegistry::new(),
        }
    }

    /// The registry for `kind`.
    #[must_use]
    pub fn registry(&self, kind: AccessorKind) -> &HookRegistry<D, H, V> {
        match kind {
            AccessorKind::Value => &self.value,
            AccessorKind::Attribute => &self.attribute,
            AccessorKind::Property => &self.property,
            AccessorKind::Style => &self.style,
        }
    }

    /// The registry for `kind`, mutably.
    pub fn registry_mut(&mut self, kind: AccessorKind) -> &mut HookRegistry<D, H, V> {
        match kind {
            AccessorKind::Value => &mut self.value,
            AccessorKind::Attribute => &mut self.attribute,
            AccessorKind::Property => &mut self.property,
            AccessorKind::Style => &mut self.style,
        }
    }

    /// Value hooks.
    #[must_use]
    pub fn value(&self) -> &HookRegistry<D, H, V> {
        &self.value
    }

    /// Attribute hooks.
    #[must_use]
    pub fn attribute(&self) -> &HookRegistry<D, H, V> {
        &self.attribute
    }

    /// Property hooks.
    #[must_use]
    pub fn property(&self) -> &HookRegistry<D, H, V> {
        &self.property
    }

    /// Style hooks.
    #[must_use]
    pub fn style(&self) -> &HookRegistry<D, H, V> {
        &self.style
    }
}

impl<D: HookSubject<H>, H: Copy, V> Default for HooksManager<D, H, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: HookSubject<H>, H, V> fmt::Debug for HooksManager<D, H, V>
where
    D::Selector: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HooksManager")
            .field("value", &self.value)
            .field("attribute", &self.attribute)
            .field("property", &self.property)
            .field("style", &self.style)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Handlers, Predicate};

    struct Any;

    impl HookSubject<u8> for Any {
        type Selector = u8;

        fn is(&self, node: u8, selector: &u8) -> bool {
            node == *selector
        }
    }

    #[test]
    fn families_are_independent() {
        let mut hooks: HooksManager<Any, u8, u8> = HooksManager::new();
        hooks.registry_mut(AccessorKind::Attribute).register(
            "title",
            Predicate::Static(1),
            Handlers::new().with_get(|_, _| Some(9)),
        );

        assert!(hooks.attribute().is_routed("title"));
        for kind in [AccessorKind::Value, AccessorKind::Property, AccessorKind::Style] {
            assert!(hooks.registry(kind).is_empty(), "{kind} should be untouched");
        }
        assert_eq!(hooks.attribute().get(&Any, "title", 1), Some(9));
        assert_eq!(hooks.value().get(&Any, "title", 1), None);
    }
}
