//! Traversal of `next`-linked chains.

use std::collections::HashSet;

use vhdl_ir::NodeHandle;

use crate::error::ChainDefect;

/// A chain defect together with the node it was detected at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainError {
    pub node: NodeHandle,
    pub defect: ChainDefect,
}

/// Failure of [`ChainWalker::walk_and_build`].
#[derive(Clone, Debug, PartialEq)]
pub enum WalkError<E> {
    /// The chain itself is malformed; nothing was built.
    Chain(ChainError),
    /// Building an element failed.
    Build(E),
}

/// Turns a chain head and a successor function into an ordered sequence.
///
/// The walker holds no reference to the provider; callers pass the `next`
/// accessor, which keeps the walker usable for any linked structure.
#[derive(Clone, Copy, Debug)]
pub struct ChainWalker {
    max_length: usize,
}

impl ChainWalker {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Collect the chain starting at `start` in order of appearance.
    ///
    /// A `None` start is an empty chain. Fails when a node repeats or the
    /// chain grows past the length limit.
    pub fn walk(
        &self,
        start: Option<NodeHandle>,
        mut next: impl FnMut(NodeHandle) -> Option<NodeHandle>,
    ) -> Result<Vec<NodeHandle>, ChainError> {
        let mut nodes = Vec::new();
        let mut seen = HashSet::new();
        let mut current = start;

        while let Some(node) = current {
            if !seen.insert(node) {
                return Err(ChainError {
                    node,
                    defect: ChainDefect::Cycle {
                        repeated: node,
                        length: nodes.len(),
                    },
                });
            }
            if nodes.len() == self.max_length {
                return Err(ChainError {
                    node,
                    defect: ChainDefect::TooLong {
                        limit: self.max_length,
                    },
                });
            }
            nodes.push(node);
            current = next(node);
        }

        Ok(nodes)
    }

    /// Walk the chain, then build every element in order.
    ///
    /// The whole chain is validated before the first element is built, so a
    /// malformed chain never reaches `build`.
    pub fn walk_and_build<T, E>(
        &self,
        start: Option<NodeHandle>,
        next: impl FnMut(NodeHandle) -> Option<NodeHandle>,
        mut build: impl FnMut(NodeHandle) -> Result<T, E>,
    ) -> Result<Vec<T>, WalkError<E>> {
        let nodes = self.walk(start, next).map_err(WalkError::Chain)?;
        nodes
            .into_iter()
            .map(|node| build(node).map_err(WalkError::Build))
            .collect()
    }
}
