//! Name references to symbols.
//!
//! References are captured by name only. Nothing here looks a name up; the
//! resulting [`Symbol`] is a key for a later binding pass.

use vhdl_ast::Symbol;
use vhdl_ir::{Field, NodeHandle, NodeKind};

use crate::error::{ContractViolation, DomResult};

use super::context::DomCtx;

/// Capture the name referenced by `node`.
///
/// Simple names yield their identifier. Selected names are flattened into
/// dotted form through their prefix chain, so `ieee.std_logic_1164.all`
/// becomes a single symbol.
pub fn resolve_simple_name(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Symbol> {
    match ctx.kind_of(node) {
        NodeKind::SimpleName => Ok(Symbol::new(ctx.identifier(node)?)),
        NodeKind::SelectedName => {
            let prefix = resolve_prefix(ctx, node)?;
            let suffix = ctx.identifier(node)?;
            Ok(Symbol::new(format!("{prefix}.{suffix}")))
        }
        NodeKind::SelectedByAllName => {
            let prefix = resolve_prefix(ctx, node)?;
            Ok(Symbol::new(format!("{prefix}.all")))
        }
        _ => Err(ctx.violation(node, ContractViolation::UnexpectedKind("a name reference"))),
    }
}

fn resolve_prefix(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Symbol> {
    let prefix = ctx.field_required(node, Field::Prefix)?;
    ctx.descend(prefix, |ctx| resolve_simple_name(ctx, prefix))
}

/// Capture the type mark of a subtype indication.
///
/// Constraints are dropped: `std_logic_vector(7 downto 0)` yields
/// `std_logic_vector`.
pub fn resolve_subtype_indication(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Symbol> {
    match ctx.kind_of(node) {
        NodeKind::SimpleName | NodeKind::SelectedName => resolve_simple_name(ctx, node),
        NodeKind::SubtypeDefinition | NodeKind::ArraySubtypeDefinition => {
            resolve_field(ctx, node, Field::SubtypeTypeMark)
        }
        _ => Err(ctx.violation(node, ContractViolation::UnexpectedKind("a subtype indication"))),
    }
}

/// Resolve the name behind a required field of `node`.
pub fn resolve_field(ctx: &mut DomCtx<'_>, node: NodeHandle, field: Field) -> DomResult<Symbol> {
    let target = ctx.field_required(node, field)?;
    ctx.descend(target, |ctx| resolve_simple_name(ctx, target))
}

/// Resolve the subtype indication behind a required field of `node`.
pub fn resolve_subtype_field(
    ctx: &mut DomCtx<'_>,
    node: NodeHandle,
    field: Field,
) -> DomResult<Symbol> {
    let target = ctx.field_required(node, field)?;
    ctx.descend(target, |ctx| resolve_subtype_indication(ctx, target))
}

#[cfg(test)]
mod tests {
    use vhdl_ir::IrArena;

    use super::*;
    use crate::error::{DomErrorKind, NameDefect};
    use crate::BuildOptions;

    fn resolve(arena: &IrArena, node: NodeHandle) -> DomResult<Symbol> {
        let mut ctx = DomCtx::new(arena, BuildOptions::default());
        resolve_simple_name(&mut ctx, node)
    }

    #[test]
    fn test_simple_name() {
        let mut arena = IrArena::new();
        let name = arena.simple_name("Integer");
        assert_eq!(resolve(&arena, name).unwrap(), Symbol::new("Integer"));
    }

    #[test]
    fn test_selected_names_flatten() {
        let mut arena = IrArena::new();
        let ieee = arena.simple_name("ieee");
        let package = arena
            .node(NodeKind::SelectedName)
            .name("std_logic_1164")
            .field(Field::Prefix, ieee)
            .finish();
        let all = arena
            .node(NodeKind::SelectedByAllName)
            .field(Field::Prefix, package)
            .finish();
        assert_eq!(
            resolve(&arena, all).unwrap(),
            Symbol::new("ieee.std_logic_1164.all")
        );
    }

    #[test]
    fn test_missing_identifier() {
        let mut arena = IrArena::new();
        let name = arena.node(NodeKind::SimpleName).finish();
        let error = resolve(&arena, name).unwrap_err();
        assert_eq!(
            error.kind(),
            &DomErrorKind::UnresolvableName(NameDefect::Missing)
        );
        assert_eq!(error.node(), name);
    }

    #[test]
    fn test_non_name_is_contract_violation() {
        let mut arena = IrArena::new();
        let literal = arena.node(NodeKind::IntegerLiteral).finish();
        let error = resolve(&arena, literal).unwrap_err();
        assert!(matches!(
            error.kind(),
            DomErrorKind::ProviderContractViolation(ContractViolation::UnexpectedKind(_))
        ));
    }

    #[test]
    fn test_constrained_subtype_keeps_type_mark() {
        let mut arena = IrArena::new();
        let mark = arena.simple_name("std_logic_vector");
        let constrained = arena
            .node(NodeKind::ArraySubtypeDefinition)
            .field(Field::SubtypeTypeMark, mark)
            .finish();
        let mut ctx = DomCtx::new(&arena, BuildOptions::default());
        let symbol = resolve_subtype_indication(&mut ctx, constrained).unwrap();
        assert_eq!(symbol.name(), "std_logic_vector");
    }

    #[test]
    fn test_self_prefixed_name_is_rejected() {
        let mut arena = IrArena::new();
        let name = arena.node(NodeKind::SelectedName).name("x").finish();
        arena.set_field(name, Field::Prefix, Some(name));
        let mut ctx = DomCtx::new(&arena, BuildOptions::default());
        let error = ctx
            .descend(name, |ctx| resolve_simple_name(ctx, name))
            .unwrap_err();
        assert_eq!(
            error.kind(),
            &DomErrorKind::ProviderContractViolation(ContractViolation::AncestorReference)
        );
    }
}
