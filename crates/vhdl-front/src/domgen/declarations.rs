//! IR to AST conversion for declarations.

use vhdl_ast::{
    AliasDeclaration, AttributeDeclaration, ComponentDeclaration, ConstantDeclaration,
    SignalDeclaration, SubtypeDeclaration, TypeDeclaration, VariableDeclaration,
};
use vhdl_ir::{Field, Flag, NodeHandle, NodeKind};

use crate::error::DomResult;

use super::FromIr;
use super::context::DomCtx;
use super::expressions::optional_expression;
use super::symbols::{resolve_field, resolve_subtype_field, resolve_subtype_indication};

impl FromIr for ConstantDeclaration {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::ConstantDeclaration])?;

        Ok(ConstantDeclaration {
            name: ctx.identifier(node)?,
            subtype: resolve_subtype_field(ctx, node, Field::SubtypeIndication)?,
            default_value: optional_expression(ctx, node, Field::DefaultValue)?,
        })
    }
}

impl FromIr for SignalDeclaration {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::SignalDeclaration])?;

        Ok(SignalDeclaration {
            name: ctx.identifier(node)?,
            subtype: resolve_subtype_field(ctx, node, Field::SubtypeIndication)?,
            default_value: optional_expression(ctx, node, Field::DefaultValue)?,
        })
    }
}

impl FromIr for VariableDeclaration {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::VariableDeclaration])?;

        Ok(VariableDeclaration {
            name: ctx.identifier(node)?,
            subtype: resolve_subtype_field(ctx, node, Field::SubtypeIndication)?,
            default_value: optional_expression(ctx, node, Field::DefaultValue)?,
            shared: ctx.provider().has_flag(node, Flag::Shared),
        })
    }
}

impl FromIr for TypeDeclaration {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::TypeDeclaration])?;

        let name = ctx.identifier(node)?;
        let definition = ctx.field_required(node, Field::TypeDefinition)?;
        let definition = ctx.parse(definition)?;
        Ok(TypeDeclaration { name, definition })
    }
}

impl FromIr for SubtypeDeclaration {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::SubtypeDeclaration])?;

        Ok(SubtypeDeclaration {
            name: ctx.identifier(node)?,
            subtype: resolve_subtype_field(ctx, node, Field::SubtypeIndication)?,
        })
    }
}

impl FromIr for AliasDeclaration {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::AliasDeclaration])?;

        let name = ctx.identifier(node)?;
        let subtype = match ctx.field(node, Field::SubtypeIndication)? {
            Some(indication) => {
                Some(ctx.descend(indication, |ctx| resolve_subtype_indication(ctx, indication))?)
            }
            None => None,
        };
        let target = resolve_field(ctx, node, Field::Name)?;

        Ok(AliasDeclaration {
            name,
            subtype,
            target,
        })
    }
}

impl FromIr for ComponentDeclaration {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::ComponentDeclaration])?;

        let name = ctx.identifier(node)?;
        let head = ctx.generic_chain(node)?;
        let generics = ctx.chain(head, |ctx, item| ctx.parse(item))?;
        let head = ctx.field(node, Field::PortChain)?;
        let ports = ctx.chain(head, |ctx, item| ctx.parse(item))?;

        Ok(ComponentDeclaration {
            name,
            generics,
            ports,
        })
    }
}

impl FromIr for AttributeDeclaration {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::AttributeDeclaration])?;

        Ok(AttributeDeclaration {
            name: ctx.identifier(node)?,
            type_mark: resolve_field(ctx, node, Field::TypeMark)?,
        })
    }
}
