//! IR to AST conversion for type definitions.

use vhdl_ast::{Direction, Range, RecordElement, TypeDefinition};
use vhdl_ir::{Field, NodeHandle, NodeKind};

use crate::error::{ContractViolation, DomResult};

use super::FromIr;
use super::context::DomCtx;
use super::dispatch::construct_expression;
use super::symbols::{resolve_subtype_field, resolve_subtype_indication};

impl FromIr for TypeDefinition {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        let definition = match ctx.kind_of(node) {
            NodeKind::EnumerationTypeDefinition => {
                let head = ctx.field(node, Field::EnumerationLiterals)?;
                let literals = ctx.chain(head, |ctx, literal| {
                    ctx.expect_kind(literal, &[NodeKind::EnumerationLiteral])?;
                    ctx.identifier(literal)
                })?;
                TypeDefinition::Enumeration(literals)
            }
            NodeKind::IntegerTypeDefinition => TypeDefinition::Integer(range_constraint(ctx, node)?),
            NodeKind::FloatingTypeDefinition => {
                TypeDefinition::Floating(range_constraint(ctx, node)?)
            }
            NodeKind::ArrayTypeDefinition => {
                let head = ctx.field(node, Field::IndexSubtypes)?;
                let indices = ctx.chain(head, |ctx, index| {
                    ctx.descend(index, |ctx| resolve_subtype_indication(ctx, index))
                })?;
                let element = resolve_subtype_field(ctx, node, Field::ElementSubtype)?;
                TypeDefinition::Array { indices, element }
            }
            NodeKind::RecordTypeDefinition => {
                let head = ctx.field(node, Field::ElementDeclarations)?;
                let elements = ctx.chain(head, |ctx, element| ctx.parse(element))?;
                TypeDefinition::Record(elements)
            }
            NodeKind::AccessTypeDefinition => {
                TypeDefinition::Access(resolve_subtype_field(ctx, node, Field::DesignatedSubtype)?)
            }
            _ => return Err(ctx.unsupported(node)),
        };
        Ok(definition)
    }
}

fn range_constraint(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Range> {
    let range = ctx.field_required(node, Field::RangeConstraint)?;
    ctx.parse(range)
}

impl FromIr for Range {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::RangeExpression])?;

        let direction = match ctx.provider().direction_of(node) {
            Some(vhdl_ir::Direction::To) => Direction::To,
            Some(vhdl_ir::Direction::Downto) => Direction::Downto,
            None => {
                return Err(ctx.violation(node, ContractViolation::MissingAttribute("direction")));
            }
        };
        let left = ctx.field_required(node, Field::Left)?;
        let left = construct_expression(ctx, left)?;
        let right = ctx.field_required(node, Field::Right)?;
        let right = construct_expression(ctx, right)?;

        Ok(Range {
            left,
            direction,
            right,
        })
    }
}

impl FromIr for RecordElement {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::ElementDeclaration])?;

        Ok(RecordElement {
            name: ctx.identifier(node)?,
            subtype: resolve_subtype_field(ctx, node, Field::SubtypeIndication)?,
        })
    }
}
