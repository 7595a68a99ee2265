// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node identifiers, flags and binding namespaces.

use core::fmt;

/// Identifier for a node in a [`Document`](crate::Document).
///
/// A slot index plus a generation counter. When a node is destroyed its slot
/// may be reused with a higher generation, so a stale `NodeId` never aliases
/// a different live node. Use [`Document::is_alive`](crate::Document::is_alive)
/// to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.0, self.1)
    }
}

bitflags::bitflags! {
    /// Form and display state that is not expressed as an attribute.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Checkbox or radio is checked.
        const CHECKED  = 0b0000_0001;
        /// Option is selected.
        const SELECTED = 0b0000_0010;
        /// Node is not displayed.
        const HIDDEN   = 0b0000_0100;
    }
}

/// Tag grouping event bindings so they can be removed together.
///
/// Mirrors the `event.namespace` convention of DOM libraries: a widget binds
/// all of its handlers under one namespace and unbinds them in one call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Namespace(pub &'static str);

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
