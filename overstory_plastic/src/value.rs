// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use core::fmt;

/// A value read from or written to a widget.
///
/// Text controls and selects deal in [`Value::Text`]; checkboxes and radios
/// accept [`Value::Bool`]; selects also accept [`Value::Index`] (position among
/// the enabled options).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// Text value.
    Text(String),
    /// Boolean value.
    Bool(bool),
    /// Option index.
    Index(usize),
}

impl Value {
    /// Loose truthiness: non-empty text, `true`, or any index.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::Index(_) => true,
        }
    }

    /// The text, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Text rendering used when a value is stored in the document.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}
