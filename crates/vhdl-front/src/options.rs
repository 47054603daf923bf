//! Limits applied while building.

/// Bounds on traversal, guarding against malformed or hostile IR.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BuildOptions {
    /// Longest chain the walker follows before giving up.
    pub max_chain_length: usize,
    /// Deepest nesting of constructed nodes.
    pub max_depth: usize,
}

impl BuildOptions {
    pub const DEFAULT_MAX_CHAIN_LENGTH: usize = 65_536;
    pub const DEFAULT_MAX_DEPTH: usize = 512;

    pub fn with_max_chain_length(mut self, max_chain_length: usize) -> Self {
        self.max_chain_length = max_chain_length;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_chain_length: Self::DEFAULT_MAX_CHAIN_LENGTH,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
