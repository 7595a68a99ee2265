// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::NodeId;

/// Error returned by structural tree operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomError {
    /// The node was destroyed (or never existed in this document).
    Stale(NodeId),
    /// The reference node has no parent to insert next to.
    NoParent(NodeId),
    /// The operation would make a node its own ancestor.
    Cycle {
        /// Node being moved.
        node: NodeId,
        /// Intended new parent.
        parent: NodeId,
    },
    /// The document root cannot be moved or destroyed.
    Root,
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stale(id) => write!(f, "node {id} is not alive"),
            Self::NoParent(id) => write!(f, "node {id} has no parent"),
            Self::Cycle { node, parent } => {
                write!(f, "inserting {node} under {parent} would create a cycle")
            }
            Self::Root => f.write_str("the document root cannot be moved"),
        }
    }
}

impl core::error::Error for DomError {}
