//! IR to AST conversion for interface lists.

use vhdl_ast::{GenericInterfaceItem, Mode, ParameterClass, ParameterInterfaceItem, PortInterfaceItem};
use vhdl_ir::{Field, NodeHandle, NodeKind};

use crate::error::DomResult;

use super::FromIr;
use super::context::DomCtx;
use super::expressions::optional_expression;
use super::symbols::resolve_subtype_field;

impl FromIr for GenericInterfaceItem {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        // Generic types, packages and subprograms have no item variant.
        ctx.expect_kind(node, &[NodeKind::InterfaceConstantDeclaration])?;

        Ok(GenericInterfaceItem {
            name: ctx.identifier(node)?,
            subtype: resolve_subtype_field(ctx, node, Field::SubtypeIndication)?,
            default_value: optional_expression(ctx, node, Field::DefaultValue)?,
        })
    }
}

impl FromIr for ParameterInterfaceItem {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        let class = match ctx.kind_of(node) {
            NodeKind::InterfaceConstantDeclaration => ParameterClass::Constant,
            NodeKind::InterfaceVariableDeclaration => ParameterClass::Variable,
            NodeKind::InterfaceSignalDeclaration => ParameterClass::Signal,
            NodeKind::InterfaceFileDeclaration => ParameterClass::File,
            _ => return Err(ctx.unsupported(node)),
        };

        Ok(ParameterInterfaceItem {
            class,
            name: ctx.identifier(node)?,
            mode: mode(ctx, node),
            subtype: resolve_subtype_field(ctx, node, Field::SubtypeIndication)?,
            default_value: optional_expression(ctx, node, Field::DefaultValue)?,
        })
    }
}

impl FromIr for PortInterfaceItem {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::InterfaceSignalDeclaration])?;

        Ok(PortInterfaceItem {
            name: ctx.identifier(node)?,
            mode: mode(ctx, node),
            subtype: resolve_subtype_field(ctx, node, Field::SubtypeIndication)?,
            default_value: optional_expression(ctx, node, Field::DefaultValue)?,
        })
    }
}

/// Mode of an interface object; an unstated mode is `in`.
fn mode(ctx: &DomCtx<'_>, node: NodeHandle) -> Mode {
    match ctx.provider().mode_of(node) {
        None | Some(vhdl_ir::Mode::In) => Mode::In,
        Some(vhdl_ir::Mode::Out) => Mode::Out,
        Some(vhdl_ir::Mode::InOut) => Mode::InOut,
        Some(vhdl_ir::Mode::Buffer) => Mode::Buffer,
        Some(vhdl_ir::Mode::Linkage) => Mode::Linkage,
    }
}

#[cfg(test)]
mod tests {
    use vhdl_ast::{Expression, InterfaceItem};
    use vhdl_ir::{IrArena, Literal};

    use super::*;
    use crate::error::DomErrorKind;
    use crate::BuildOptions;

    fn parse<T: FromIr>(arena: &IrArena, node: NodeHandle) -> DomResult<T> {
        DomCtx::new(arena, BuildOptions::default()).parse(node)
    }

    #[test]
    fn test_generic_with_default() {
        // WIDTH : natural := 8
        let mut arena = IrArena::new();
        let natural = arena.simple_name("natural");
        let eight = arena
            .node(NodeKind::IntegerLiteral)
            .literal(Literal::Integer(8))
            .finish();
        let node = arena
            .node(NodeKind::InterfaceConstantDeclaration)
            .name("WIDTH")
            .field(Field::SubtypeIndication, natural)
            .field(Field::DefaultValue, eight)
            .finish();

        let generic: GenericInterfaceItem = parse(&arena, node).unwrap();
        assert_eq!(generic.name(), "WIDTH");
        assert_eq!(generic.subtype().name(), "natural");
        assert_eq!(generic.default_value(), Some(&Expression::Integer(8)));
    }

    #[test]
    fn test_generic_type_is_unsupported() {
        let mut arena = IrArena::new();
        let node = arena
            .node(NodeKind::InterfaceTypeDeclaration)
            .name("T")
            .finish();

        let error = parse::<GenericInterfaceItem>(&arena, node).unwrap_err();
        assert_eq!(
            error.kind(),
            &DomErrorKind::UnsupportedNodeKind(NodeKind::InterfaceTypeDeclaration)
        );
    }

    #[test]
    fn test_parameter_class_and_mode() {
        // variable acc : inout Integer
        let mut arena = IrArena::new();
        let integer = arena.simple_name("Integer");
        let node = arena
            .node(NodeKind::InterfaceVariableDeclaration)
            .name("acc")
            .mode(vhdl_ir::Mode::InOut)
            .field(Field::SubtypeIndication, integer)
            .finish();

        let parameter: ParameterInterfaceItem = parse(&arena, node).unwrap();
        assert_eq!(parameter.class, ParameterClass::Variable);
        assert_eq!(parameter.mode, Mode::InOut);
        assert_eq!(parameter.default_value, None);
    }

    #[test]
    fn test_port_defaults_to_mode_in() {
        let mut arena = IrArena::new();
        let std_logic = arena.simple_name("std_logic");
        let node = arena
            .node(NodeKind::InterfaceSignalDeclaration)
            .name("clk")
            .field(Field::SubtypeIndication, std_logic)
            .finish();

        let port: PortInterfaceItem = parse(&arena, node).unwrap();
        assert_eq!(port.mode, Mode::In);
        assert_eq!(port.subtype.name(), "std_logic");
    }

    #[test]
    fn test_missing_subtype_indication() {
        let mut arena = IrArena::new();
        let node = arena
            .node(NodeKind::InterfaceSignalDeclaration)
            .name("clk")
            .finish();

        let error = parse::<PortInterfaceItem>(&arena, node).unwrap_err();
        assert_eq!(
            error.kind(),
            &DomErrorKind::ProviderContractViolation(
                crate::error::ContractViolation::MissingField {
                    field: Field::SubtypeIndication
                }
            )
        );
    }
}
