//! IR to AST conversion for expressions.

use vhdl_ast::{AggregateElement, Argument, Choice, Expression};
use vhdl_ir::{Field, Literal, NodeHandle, NodeKind};

use crate::error::{ContractViolation, DomResult};

use super::context::DomCtx;
use super::dispatch::{Constructor, construct_expression};
use super::symbols::{resolve_field, resolve_simple_name};

/// Build the expression at `node`, already classified as `constructor`.
///
/// The caller has pushed `node` on the ancestor stack.
pub(super) fn build_expression(
    ctx: &mut DomCtx<'_>,
    node: NodeHandle,
    constructor: Constructor,
) -> DomResult<Expression> {
    match constructor {
        Constructor::Name => resolve_simple_name(ctx, node).map(Expression::Name),
        Constructor::Literal => build_literal(ctx, node),
        Constructor::Unary(op) => {
            let operand = operand(ctx, node, Field::Operand)?;
            Ok(Expression::Unary {
                op,
                operand: Box::new(operand),
            })
        }
        Constructor::Binary(op) => {
            let left = operand(ctx, node, Field::Left)?;
            let right = operand(ctx, node, Field::Right)?;
            Ok(Expression::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            })
        }
        Constructor::Parenthesis => {
            let inner = operand(ctx, node, Field::Expression)?;
            Ok(Expression::Parenthesis(Box::new(inner)))
        }
        Constructor::Aggregate => {
            let head = ctx.field(node, Field::AssociationChain)?;
            let elements = ctx.chain(head, |ctx, element| {
                ctx.descend(element, |ctx| build_aggregate_element(ctx, element))
            })?;
            Ok(Expression::Aggregate(elements))
        }
        Constructor::FunctionCall => {
            let name = resolve_field(ctx, node, Field::Prefix)?;
            let head = ctx.field(node, Field::AssociationChain)?;
            let arguments = ctx.chain(head, |ctx, element| {
                ctx.descend(element, |ctx| build_argument(ctx, element))
            })?;
            Ok(Expression::Call { name, arguments })
        }
        _ => Err(ctx.unsupported(node)),
    }
}

/// Build the expression behind a required field.
fn operand(ctx: &mut DomCtx<'_>, node: NodeHandle, field: Field) -> DomResult<Expression> {
    let target = ctx.field_required(node, field)?;
    construct_expression(ctx, target)
}

/// Build the expression behind an optional field.
pub(super) fn optional_expression(
    ctx: &mut DomCtx<'_>,
    node: NodeHandle,
    field: Field,
) -> DomResult<Option<Expression>> {
    ctx.field(node, field)?
        .map(|target| construct_expression(ctx, target))
        .transpose()
}

fn build_literal(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Expression> {
    let literal = ctx
        .provider()
        .literal_of(node)
        .ok_or_else(|| ctx.violation(node, ContractViolation::MissingAttribute("literal")))?;

    match (ctx.kind_of(node), literal) {
        (NodeKind::IntegerLiteral, Literal::Integer(value)) => Ok(Expression::Integer(value)),
        (NodeKind::FloatingPointLiteral, Literal::Real(value)) => {
            Ok(Expression::Float(value.into()))
        }
        (NodeKind::CharacterLiteral, Literal::Character(c)) => Ok(Expression::Character(c)),
        (NodeKind::StringLiteral, Literal::String(text)) => Ok(Expression::String(text)),
        _ => Err(ctx.violation(node, ContractViolation::LiteralMismatch)),
    }
}

fn build_aggregate_element(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<AggregateElement> {
    let choice = match ctx.kind_of(node) {
        NodeKind::ChoiceByNone => Choice::Positional,
        NodeKind::ChoiceByOthers => Choice::Others,
        NodeKind::ChoiceByExpression => {
            Choice::Expression(operand(ctx, node, Field::ChoiceExpression)?)
        }
        _ => return Err(ctx.unsupported(node)),
    };
    let value = operand(ctx, node, Field::AssociatedExpr)?;
    Ok(AggregateElement { choice, value })
}

fn build_argument(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Argument> {
    let formal = match ctx.kind_of(node) {
        NodeKind::AssociationElementPositional => None,
        NodeKind::AssociationElementByExpression => {
            Some(resolve_field(ctx, node, Field::Formal)?)
        }
        _ => return Err(ctx.unsupported(node)),
    };
    let actual = operand(ctx, node, Field::Actual)?;
    Ok(Argument { formal, actual })
}
