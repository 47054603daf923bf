//! Opaque node handles and source positions.

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Opaque reference to one IR node.
///
/// A handle is only meaningful to the provider that issued it. The absent
/// ("null") handle of the engine is expressed as `Option<NodeHandle>::None`,
/// which costs no extra space thanks to the non-zero representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(NonZeroU32);

impl NodeHandle {
    /// Create a handle from the engine's raw value; `0` is the null handle.
    #[inline]
    pub fn from_raw(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// Handle for the node stored at `index` in a zero-based table.
    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < u32::MAX as usize, "IR node table exceeds u32 range");
        Self(NonZeroU32::MIN.saturating_add(index as u32))
    }

    /// Zero-based table index of this handle.
    #[inline]
    pub(crate) fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// Get the raw value of this handle.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Source location of a node, as reported by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePosition {
    #[serde(default)]
    pub file: Option<String>,
    pub line: u32,
    pub column: u32,
}

impl SourcePosition {
    pub fn new(file: Option<String>, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file, self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}
