//! Tests for whole design file construction.

use vhdl_ast::{Declaration, Expression, LibraryUnit, TypeDefinition};
use vhdl_front::{
    BuildOptions, ContractViolation, DomErrorKind, build_design_file, build_design_units,
};
use vhdl_ir::{Field, IrArena, NodeKind, SourcePosition, load_json};

/// A package with a constant, a type and a function, plus its body.
const PACKAGE_IMAGE: &str = r#"{
  "root": 1,
  "nodes": [
    { "id": 1, "kind": "design_file", "fields": { "design_units": 2 } },

    { "id": 2, "kind": "design_unit", "next": 3,
      "fields": { "context_items": 10, "library_unit": 20 } },
    { "id": 10, "kind": "library_clause", "name": "ieee", "next": 11 },
    { "id": 11, "kind": "use_clause", "fields": { "name_chain": 14 } },
    { "id": 12, "kind": "simple_name", "name": "ieee" },
    { "id": 13, "kind": "selected_name", "name": "std_logic_1164", "fields": { "prefix": 12 } },
    { "id": 14, "kind": "selected_by_all_name", "fields": { "prefix": 13 } },

    { "id": 20, "kind": "package_declaration", "name": "util",
      "position": { "file": "util.vhd", "line": 4, "column": 9 },
      "fields": { "declaration_chain": 21 } },
    { "id": 21, "kind": "constant_declaration", "name": "WIDTH", "next": 24,
      "fields": { "subtype_indication": 22, "default_value": 23 } },
    { "id": 22, "kind": "simple_name", "name": "natural" },
    { "id": 23, "kind": "integer_literal", "literal": { "integer": 8 } },
    { "id": 24, "kind": "type_declaration", "name": "state_t", "next": 30,
      "fields": { "type_definition": 25 } },
    { "id": 25, "kind": "enumeration_type_definition", "fields": { "enumeration_literals": 26 } },
    { "id": 26, "kind": "enumeration_literal", "name": "idle", "next": 27 },
    { "id": 27, "kind": "enumeration_literal", "name": "busy" },
    { "id": 30, "kind": "function_declaration", "name": "parity",
      "fields": { "interface_chain": 31, "return_type_mark": 33 } },
    { "id": 31, "kind": "interface_constant_declaration", "name": "v",
      "fields": { "subtype_indication": 32 } },
    { "id": 32, "kind": "simple_name", "name": "std_logic_vector" },
    { "id": 33, "kind": "simple_name", "name": "std_logic" },

    { "id": 3, "kind": "design_unit", "fields": { "library_unit": 40 } },
    { "id": 40, "kind": "package_body", "name": "util",
      "fields": { "declaration_chain": 41 } },
    { "id": 41, "kind": "function_body", "fields": { "subprogram_specification": 30 } }
  ]
}"#;

#[test]
fn test_build_package_image() {
    let image = load_json(PACKAGE_IMAGE).unwrap();
    let file = build_design_file(&image.arena, image.root, BuildOptions::default()).unwrap();

    assert_eq!(file.units.len(), 2);
    let package = &file.units[0];
    assert_eq!(package.context.len(), 2);
    assert_eq!(package.context[1].to_string(), "use ieee.std_logic_1164.all");

    let LibraryUnit::Package(util) = &package.unit else {
        panic!("expected a package, got {:?}", package.unit);
    };
    let names: Vec<_> = util.declarations.iter().filter_map(Declaration::name).collect();
    assert_eq!(names, ["WIDTH", "state_t", "parity"]);

    let Declaration::Constant(width) = &util.declarations[0] else {
        panic!("expected a constant");
    };
    assert_eq!(width.default_value, Some(Expression::Integer(8)));

    let Declaration::Type(state) = &util.declarations[1] else {
        panic!("expected a type");
    };
    assert_eq!(
        state.definition,
        TypeDefinition::Enumeration(vec!["idle".into(), "busy".into()])
    );

    let Declaration::Function(parity) = &util.declarations[2] else {
        panic!("expected a function");
    };
    assert_eq!(parity.return_type.name(), "std_logic");
    assert_eq!(parity.parameters[0].subtype.name(), "std_logic_vector");

    let body = &file.units[1].unit;
    assert_eq!(body.kind_name(), "package body");
    assert_eq!(body.declarations()[0].name(), Some("parity"));
}

#[test]
fn test_build_is_deterministic() {
    let image = load_json(PACKAGE_IMAGE).unwrap();
    let first = build_design_file(&image.arena, image.root, BuildOptions::default()).unwrap();
    let second = build_design_file(&image.arena, image.root, BuildOptions::default()).unwrap();
    assert_eq!(first, second);
}

/// Two entities; the first declares a process in its declaration chain.
const BROKEN_IMAGE: &str = r#"{
  "root": 1,
  "nodes": [
    { "id": 1, "kind": "design_file", "fields": { "design_units": 2 } },
    { "id": 2, "kind": "design_unit", "next": 3, "fields": { "library_unit": 10 } },
    { "id": 3, "kind": "design_unit", "fields": { "library_unit": 20 } },
    { "id": 10, "kind": "entity_declaration", "name": "broken",
      "fields": { "declaration_chain": 11 } },
    { "id": 11, "kind": "process_statement",
      "position": { "file": "top.vhd", "line": 12, "column": 3 } },
    { "id": 20, "kind": "entity_declaration", "name": "fine" }
  ]
}"#;

#[test]
fn test_strict_build_reports_position() {
    let image = load_json(BROKEN_IMAGE).unwrap();
    let error = build_design_file(&image.arena, image.root, BuildOptions::default()).unwrap_err();

    assert_eq!(
        error.kind(),
        &DomErrorKind::UnsupportedNodeKind(NodeKind::ProcessStatement)
    );
    assert_eq!(
        error.position(),
        Some(&SourcePosition::new(Some("top.vhd".into()), 12, 3))
    );
}

#[test]
fn test_batch_build_continues_past_failures() {
    let image = load_json(BROKEN_IMAGE).unwrap();
    let units = build_design_units(&image.arena, image.root, BuildOptions::default()).unwrap();

    assert_eq!(units.len(), 2);
    assert!(units[0].is_err());
    let fine = units[1].as_ref().unwrap();
    assert_eq!(fine.unit.name(), "fine");
}

#[test]
fn test_batch_build_rejects_non_file_root() {
    let mut arena = IrArena::new();
    let entity = arena.node(NodeKind::EntityDeclaration).name("top").finish();

    let error = build_design_units(&arena, entity, BuildOptions::default()).unwrap_err();
    assert_eq!(
        error.kind(),
        &DomErrorKind::UnsupportedNodeKind(NodeKind::EntityDeclaration)
    );
}

#[test]
fn test_self_referencing_type_is_rejected() {
    let mut arena = IrArena::new();
    let decl = arena.node(NodeKind::TypeDeclaration).name("knot").finish();
    // The type's definition edge points back at the declaration itself.
    arena.set_field(decl, Field::TypeDefinition, Some(decl));
    let package = arena
        .node(NodeKind::PackageDeclaration)
        .name("pkg")
        .field(Field::DeclarationChain, decl)
        .finish();
    let unit = arena
        .node(NodeKind::DesignUnit)
        .field(Field::LibraryUnit, package)
        .finish();
    let root = arena.node(NodeKind::DesignFile).field(Field::DesignUnits, unit).finish();

    let error = build_design_file(&arena, root, BuildOptions::default()).unwrap_err();
    assert_eq!(
        error.kind(),
        &DomErrorKind::ProviderContractViolation(ContractViolation::AncestorReference)
    );
    assert_eq!(error.node(), decl);
}
