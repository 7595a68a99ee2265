// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Event State: Common event state managers for UI interactions.
//!
//! This crate provides small, focused state machines for UI interactions that
//! require stateful tracking across multiple events:
//!
//! - [`focus_origin`]: Tell whether focus came from the pointer, the keyboard
//!   or program code
//!
//! The trackers are generic over the application's node id type and do not
//! look at any tree. Callers hand them what they already know, such as the
//! target→root path of a pointer press, and get a classification back.
//!
//! ## Focus Origin
//!
//! ```rust
//! use understory_event_state::focus_origin::{FocusFrom, FocusOriginTracker};
//!
//! let mut origin = FocusOriginTracker::new();
//!
//! // Pointer pressed over [button, toolbar]; nothing focused yet.
//! origin.on_pointer_down(&[7, 3], None);
//! assert_eq!(origin.on_focus(7, true), FocusFrom::Mouse);
//!
//! // Tabbing to the next control.
//! assert_eq!(origin.on_focus(8, true), FocusFrom::Keyboard);
//!
//! // Program code moving focus.
//! assert_eq!(origin.on_focus(9, false), FocusFrom::Manual);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod focus_origin;
