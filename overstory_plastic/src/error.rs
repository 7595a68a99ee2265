// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use understory_dom::{DomError, NodeId};
use understory_hooks::AccessorKind;

use crate::{ConfigError, InstanceId};

/// Errors reported by [`PlasticContext`](crate::PlasticContext).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlasticError {
    /// The id was never handed out by this context.
    UnknownInstance(InstanceId),
    /// The widget has been restored; its id is no longer usable.
    Restored(InstanceId),
    /// The node does not exist (anymore).
    StaleNode(NodeId),
    /// The source element is not attached to a parent.
    Detached(NodeId),
    /// A hook tried to route the accessor it is serving.
    Reentrant {
        /// Accessor family.
        kind: AccessorKind,
        /// Type key within the family.
        key: String,
    },
    /// A tree operation failed.
    Dom(DomError),
    /// The configuration was rejected.
    Config(ConfigError),
}

impl fmt::Display for PlasticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownInstance(id) => write!(f, "unknown widget {id}"),
            Self::Restored(id) => write!(f, "widget {id} has been restored"),
            Self::StaleNode(node) => write!(f, "node {node} does not exist"),
            Self::Detached(node) => write!(f, "node {node} is not attached"),
            Self::Reentrant { kind, key } => {
                write!(f, "re-entrant {kind} access to `{key}`")
            }
            Self::Dom(err) => write!(f, "tree operation failed: {err}"),
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
        }
    }
}

impl core::error::Error for PlasticError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Dom(err) => Some(err),
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DomError> for PlasticError {
    fn from(err: DomError) -> Self {
        Self::Dom(err)
    }
}

impl From<ConfigError> for PlasticError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}
