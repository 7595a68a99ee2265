// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus origin helper: classify a focus change as mouse, keyboard or manual.
//!
//! ## Usage
//!
//! 1) On every pointer press, call [`FocusOriginTracker::on_pointer_down`] with the
//!    nodes under the pointer (target first) and the currently focused node.
//! 2) When a node gains focus, call [`FocusOriginTracker::on_focus`]. Pass
//!    `native = false` for focus requested by program code.
//! 3) Call [`FocusOriginTracker::reset`] when the surface loses input altogether.
//!
//! A node that was already focused is not remembered on press, since no focus
//! event would follow to consume the mark.
//!
//! ## Minimal example
//!
//! ```
//! use understory_event_state::focus_origin::{FocusFrom, FocusOriginTracker};
//!
//! let mut origin = FocusOriginTracker::new();
//! origin.on_pointer_down(&["field", "form"], Some("form"));
//! assert!(origin.is_pending(&"field"));
//! assert!(!origin.is_pending(&"form"));
//!
//! assert_eq!(origin.on_focus("field", true), FocusFrom::Mouse);
//! assert_eq!(FocusFrom::Mouse as u8, 1);
//! ```

use core::hash::Hash;

use hashbrown::HashSet;

/// Where a focus change came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum FocusFrom {
    /// Requested by program code.
    #[default]
    Manual = 0,
    /// Caused by a pointer press.
    Mouse = 1,
    /// Caused by keyboard navigation.
    Keyboard = 2,
}

/// Remembers pointer presses until the focus change they cause.
#[derive(Clone, Debug)]
pub struct FocusOriginTracker<K> {
    pending: HashSet<K>,
}

impl<K: Copy + Eq + Hash> FocusOriginTracker<K> {
    /// Creates a tracker with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: HashSet::new(),
        }
    }

    /// Records a pointer press over `path`.
    ///
    /// `focused` is the node holding focus before the press; it is skipped.
    /// Any marks from an earlier press are dropped.
    pub fn on_pointer_down(&mut self, path: &[K], focused: Option<K>) {
        self.pending.clear();
        self.pending
            .extend(path.iter().copied().filter(|k| Some(*k) != focused));
    }

    /// Classifies a focus change to `node` and clears pending marks.
    ///
    /// `native` is `false` for focus moved by program code, which is always
    /// [`FocusFrom::Manual`].
    pub fn on_focus(&mut self, node: K, native: bool) -> FocusFrom {
        if !native {
            return FocusFrom::Manual;
        }
        let from_mouse = self.pending.contains(&node);
        self.pending.clear();
        if from_mouse {
            FocusFrom::Mouse
        } else {
            FocusFrom::Keyboard
        }
    }

    /// Returns `true` if `node` was under the last press and has not been focused since.
    #[must_use]
    pub fn is_pending(&self, node: &K) -> bool {
        self.pending.contains(node)
    }

    /// Forgets all pending presses.
    pub fn reset(&mut self) {
        self.pending.clear();
    }
}

impl<K: Copy + Eq + Hash> Default for FocusOriginTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}
