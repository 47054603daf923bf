//! JSON IR images.
//!
//! An image is a snapshot of the engine's node graph written by an external
//! exporter. Nodes refer to each other by numeric id; ids are arbitrary but
//! must be unique within an image.
//!
//! ```json
//! {
//!   "root": 1,
//!   "nodes": [
//!     { "id": 1, "kind": "design_file", "fields": { "design_units": 2 } },
//!     { "id": 2, "kind": "design_unit", "fields": { "library_unit": 3 } },
//!     { "id": 3, "kind": "package_declaration", "name": "util" }
//!   ]
//! }
//! ```

use std::collections::{BTreeMap, HashMap};

use derive_more::{Display, Error, From};
use serde::Deserialize;

use crate::arena::IrArena;
use crate::handle::{NodeHandle, SourcePosition};
use crate::kind::{Direction, Field, Flag, Literal, Mode, NodeKind};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ImageRecord {
    root: u32,
    nodes: Vec<NodeRecord>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NodeRecord {
    id: u32,
    kind: NodeKind,
    name: Option<String>,
    position: Option<SourcePosition>,
    next: Option<u32>,
    #[serde(default)]
    fields: BTreeMap<Field, u32>,
    literal: Option<Literal>,
    mode: Option<Mode>,
    direction: Option<Direction>,
    #[serde(default)]
    flags: Vec<Flag>,
}

/// A loaded image: the node table and its root.
#[derive(Clone, Debug, PartialEq)]
pub struct IrImage {
    pub arena: IrArena,
    pub root: NodeHandle,
}

#[derive(Debug, Display, Error, From)]
pub enum IrLoadError {
    #[display("invalid IR image: {_0}")]
    Json(#[error(source)] serde_json::Error),

    #[display("node id {id} is defined more than once")]
    #[from(ignore)]
    DuplicateId { id: u32 },

    #[display("node {from} refers to undefined node id {id}")]
    #[from(ignore)]
    DanglingReference { from: u32, id: u32 },

    #[display("root node id {id} is not defined")]
    #[from(ignore)]
    MissingRoot { id: u32 },
}

/// Parse a JSON image into an arena.
pub fn load_json(text: &str) -> Result<IrImage, IrLoadError> {
    let image: ImageRecord = serde_json::from_str(text)?;

    // Records are inserted in order, so the i-th record gets the i-th handle.
    let mut handles = HashMap::with_capacity(image.nodes.len());
    for (index, record) in image.nodes.iter().enumerate() {
        if handles
            .insert(record.id, NodeHandle::from_index(index))
            .is_some()
        {
            return Err(IrLoadError::DuplicateId { id: record.id });
        }
    }

    let lookup = |from: u32, id: u32| {
        handles
            .get(&id)
            .copied()
            .ok_or(IrLoadError::DanglingReference { from, id })
    };

    let mut arena = IrArena::new();
    for record in image.nodes {
        let mut builder = arena.node(record.kind);
        if let Some(name) = record.name {
            builder = builder.name(name);
        }
        if let Some(position) = record.position {
            builder = builder.position(position);
        }
        if let Some(next) = record.next {
            builder = builder.next(lookup(record.id, next)?);
        }
        for (field, target) in record.fields {
            builder = builder.field(field, lookup(record.id, target)?);
        }
        if let Some(literal) = record.literal {
            builder = builder.literal(literal);
        }
        if let Some(mode) = record.mode {
            builder = builder.mode(mode);
        }
        if let Some(direction) = record.direction {
            builder = builder.direction(direction);
        }
        for flag in record.flags {
            builder = builder.flag(flag);
        }
        builder.finish();
    }

    let root = handles
        .get(&image.root)
        .copied()
        .ok_or(IrLoadError::MissingRoot { id: image.root })?;

    Ok(IrImage { arena, root })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::IrProvider;

    #[test]
    fn test_load_links_fields_and_chains() {
        let text = r#"{
            "root": 10,
            "nodes": [
                { "id": 10, "kind": "function_declaration", "name": "f",
                  "position": { "file": "f.vhdl", "line": 3, "column": 12 },
                  "fields": { "return_type_mark": 30, "interface_chain": 20 },
                  "flags": ["impure"] },
                { "id": 20, "kind": "interface_constant_declaration", "name": "a",
                  "next": 21, "mode": "in", "fields": { "subtype_indication": 31 } },
                { "id": 21, "kind": "interface_constant_declaration", "name": "b",
                  "fields": { "subtype_indication": 31 } },
                { "id": 30, "kind": "simple_name", "name": "Bit" },
                { "id": 31, "kind": "simple_name", "name": "Integer" }
            ]
        }"#;
        let IrImage { arena, root } = load_json(text).unwrap();

        assert_eq!(arena.len(), 5);
        assert_eq!(arena.kind_of(root), NodeKind::FunctionDeclaration);
        assert!(arena.has_flag(root, Flag::Impure));
        assert_eq!(
            arena.position_of(root),
            Some(SourcePosition::new(Some("f.vhdl".into()), 3, 12))
        );

        let mark = arena.return_type_mark(root).unwrap();
        assert_eq!(arena.name_of(mark), Some("Bit"));

        let first = arena.interface_chain_head(root).unwrap();
        assert_eq!(arena.name_of(first), Some("a"));
        assert_eq!(arena.mode_of(first), Some(Mode::In));
        let second = arena.next_of(first).unwrap();
        assert_eq!(arena.name_of(second), Some("b"));
        assert_eq!(arena.next_of(second), None);
    }

    #[test]
    fn test_literals() {
        let text = r#"{
            "root": 1,
            "nodes": [
                { "id": 1, "kind": "integer_literal", "literal": { "integer": 42 } },
                { "id": 2, "kind": "floating_point_literal", "literal": { "real": 0.5 } },
                { "id": 3, "kind": "string_literal", "literal": { "string": "0101" } }
            ]
        }"#;
        let image = load_json(text).unwrap();
        let handles: Vec<_> = (1..=3).filter_map(NodeHandle::from_raw).collect();
        assert_eq!(
            image.arena.literal_of(handles[0]),
            Some(Literal::Integer(42))
        );
        assert_eq!(image.arena.literal_of(handles[1]), Some(Literal::Real(0.5)));
        assert_eq!(
            image.arena.literal_of(handles[2]),
            Some(Literal::String("0101".into()))
        );
    }

    #[test]
    fn test_duplicate_id() {
        let text = r#"{ "root": 1, "nodes": [
            { "id": 1, "kind": "simple_name" },
            { "id": 1, "kind": "simple_name" }
        ] }"#;
        let err = load_json(text).unwrap_err();
        assert!(matches!(err, IrLoadError::DuplicateId { id: 1 }));
    }

    #[test]
    fn test_dangling_reference() {
        let text = r#"{ "root": 1, "nodes": [
            { "id": 1, "kind": "function_declaration", "fields": { "return_type_mark": 9 } }
        ] }"#;
        let err = load_json(text).unwrap_err();
        assert!(matches!(
            err,
            IrLoadError::DanglingReference { from: 1, id: 9 }
        ));
        assert_eq!(err.to_string(), "node 1 refers to undefined node id 9");
    }

    #[test]
    fn test_missing_root() {
        let text = r#"{ "root": 5, "nodes": [ { "id": 1, "kind": "design_file" } ] }"#;
        let err = load_json(text).unwrap_err();
        assert!(matches!(err, IrLoadError::MissingRoot { id: 5 }));
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let text = r#"{ "root": 1, "nodes": [ { "id": 1, "kind": "no_such_kind" } ] }"#;
        let err = load_json(text).unwrap_err();
        assert!(matches!(err, IrLoadError::Json(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
