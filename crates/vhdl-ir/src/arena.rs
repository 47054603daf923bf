//! In-memory IR provider.
//!
//! `IrArena` stores nodes in a flat table and hands out handles by index.
//! It backs the JSON image loader and is the provider used in tests.

use std::collections::BTreeMap;

use crate::handle::{NodeHandle, SourcePosition};
use crate::kind::{Direction, Field, Flag, Literal, Mode, NodeKind};
use crate::provider::IrProvider;

#[derive(Clone, Debug, PartialEq)]
struct NodeData {
    kind: NodeKind,
    name: Option<String>,
    position: Option<SourcePosition>,
    next: Option<NodeHandle>,
    fields: BTreeMap<Field, NodeHandle>,
    literal: Option<Literal>,
    mode: Option<Mode>,
    direction: Option<Direction>,
    flags: Vec<Flag>,
}

impl NodeData {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            name: None,
            position: None,
            next: None,
            fields: BTreeMap::new(),
            literal: None,
            mode: None,
            direction: None,
            flags: Vec::new(),
        }
    }
}

/// Flat node table implementing [`IrProvider`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IrArena {
    nodes: Vec<NodeData>,
}

impl IrArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Start building a node of `kind`.
    pub fn node(&mut self, kind: NodeKind) -> NodeBuilder<'_> {
        NodeBuilder {
            arena: self,
            data: NodeData::new(kind),
        }
    }

    /// Shorthand for a `SimpleName` node.
    pub fn simple_name(&mut self, name: impl Into<String>) -> NodeHandle {
        self.node(NodeKind::SimpleName).name(name).finish()
    }

    /// Set or clear the chain successor of `node`.
    pub fn set_next(&mut self, node: NodeHandle, next: Option<NodeHandle>) {
        self.data_mut(node).next = next;
    }

    /// Set or clear a field edge of `node`.
    pub fn set_field(&mut self, node: NodeHandle, field: Field, target: Option<NodeHandle>) {
        let fields = &mut self.data_mut(node).fields;
        match target {
            Some(target) => {
                fields.insert(field, target);
            }
            None => {
                fields.remove(&field);
            }
        }
    }

    /// Link `nodes` into a chain in the given order and return its head.
    ///
    /// The last node's successor is cleared. An empty slice yields `None`.
    pub fn chain(&mut self, nodes: &[NodeHandle]) -> Option<NodeHandle> {
        for pair in nodes.windows(2) {
            self.set_next(pair[0], Some(pair[1]));
        }
        if let Some(&last) = nodes.last() {
            self.set_next(last, None);
        }
        nodes.first().copied()
    }

    fn push(&mut self, data: NodeData) -> NodeHandle {
        let handle = NodeHandle::from_index(self.nodes.len());
        self.nodes.push(data);
        handle
    }

    fn data(&self, node: NodeHandle) -> &NodeData {
        &self.nodes[node.index()]
    }

    fn data_mut(&mut self, node: NodeHandle) -> &mut NodeData {
        &mut self.nodes[node.index()]
    }
}

impl IrProvider for IrArena {
    fn kind_of(&self, node: NodeHandle) -> NodeKind {
        self.data(node).kind
    }

    fn name_of(&self, node: NodeHandle) -> Option<&str> {
        self.data(node).name.as_deref()
    }

    fn position_of(&self, node: NodeHandle) -> Option<SourcePosition> {
        self.data(node).position.clone()
    }

    fn field(&self, node: NodeHandle, field: Field) -> Option<NodeHandle> {
        self.data(node).fields.get(&field).copied()
    }

    fn next_of(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.data(node).next
    }

    fn literal_of(&self, node: NodeHandle) -> Option<Literal> {
        self.data(node).literal.clone()
    }

    fn mode_of(&self, node: NodeHandle) -> Option<Mode> {
        self.data(node).mode
    }

    fn direction_of(&self, node: NodeHandle) -> Option<Direction> {
        self.data(node).direction
    }

    fn has_flag(&self, node: NodeHandle, flag: Flag) -> bool {
        self.data(node).flags.contains(&flag)
    }
}

/// Builder for a single arena node; [`NodeBuilder::finish`] inserts it.
#[must_use = "a node is only added to the arena by `finish`"]
pub struct NodeBuilder<'a> {
    arena: &'a mut IrArena,
    data: NodeData,
}

impl NodeBuilder<'_> {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.data.name = Some(name.into());
        self
    }

    pub fn position(mut self, position: SourcePosition) -> Self {
        self.data.position = Some(position);
        self
    }

    pub fn field(mut self, field: Field, target: NodeHandle) -> Self {
        self.data.fields.insert(field, target);
        self
    }

    /// Set `field` when `target` is present; a `None` leaves it absent.
    pub fn field_opt(mut self, field: Field, target: Option<NodeHandle>) -> Self {
        if let Some(target) = target {
            self.data.fields.insert(field, target);
        }
        self
    }

    pub fn next(mut self, next: NodeHandle) -> Self {
        self.data.next = Some(next);
        self
    }

    pub fn literal(mut self, literal: Literal) -> Self {
        self.data.literal = Some(literal);
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.data.mode = Some(mode);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.data.direction = Some(direction);
        self
    }

    pub fn flag(mut self, flag: Flag) -> Self {
        if !self.data.flags.contains(&flag) {
            self.data.flags.push(flag);
        }
        self
    }

    pub fn finish(self) -> NodeHandle {
        self.arena.push(self.data)
    }
}
