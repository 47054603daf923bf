//! IR to AST conversion for subprograms.

use vhdl_ast::{
    Function, GenericInterfaceItem, ParameterInterfaceItem, Procedure, SubprogramBody,
    SubprogramKind,
};
use vhdl_ir::{Field, Flag, NodeHandle, NodeKind};

use crate::error::{ContractViolation, DomResult};

use super::FromIr;
use super::context::DomCtx;
use super::dispatch::construct_declaration;
use super::symbols::resolve_simple_name;
use super::units::skip_statements;

impl FromIr for Function {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::FunctionDeclaration])?;

        let name = ctx.identifier(node)?;
        let is_pure = !ctx.provider().has_flag(node, Flag::Impure);
        let generics = generics(ctx, node)?;
        let parameters = parameters(ctx, node)?;

        // Only the type mark is kept; a constrained return subtype is not
        // expanded.
        let mark = ctx.return_type_mark(node)?;
        let return_type = ctx.descend(mark, |ctx| resolve_simple_name(ctx, mark))?;

        Ok(Function {
            name,
            is_pure,
            generics,
            parameters,
            return_type,
        })
    }
}

impl FromIr for Procedure {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::ProcedureDeclaration])?;

        let name = ctx.identifier(node)?;
        let generics = generics(ctx, node)?;
        let parameters = parameters(ctx, node)?;

        Ok(Procedure {
            name,
            generics,
            parameters,
        })
    }
}

fn generics(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Vec<GenericInterfaceItem>> {
    let head = ctx.generic_chain(node)?;
    ctx.chain(head, |ctx, item| ctx.parse(item))
}

fn parameters(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Vec<ParameterInterfaceItem>> {
    let head = ctx.interface_chain(node)?;
    ctx.chain(head, |ctx, item| ctx.parse(item))
}

impl FromIr for SubprogramBody {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        let kind = match ctx.expect_kind(node, &[NodeKind::FunctionBody, NodeKind::ProcedureBody])? {
            NodeKind::FunctionBody => SubprogramKind::Function,
            _ => SubprogramKind::Procedure,
        };
        subprogram_body(ctx, node, kind)
    }
}

/// Build a body of the given kind. `node` must already be on the ancestor
/// stack.
pub(super) fn subprogram_body(
    ctx: &mut DomCtx<'_>,
    node: NodeHandle,
    kind: SubprogramKind,
) -> DomResult<SubprogramBody> {
    // The body is named by its specification, which must declare the same
    // kind of subprogram.
    let (expected, description) = match kind {
        SubprogramKind::Function => (NodeKind::FunctionDeclaration, "a function declaration"),
        SubprogramKind::Procedure => (NodeKind::ProcedureDeclaration, "a procedure declaration"),
    };
    let specification = ctx.field_required(node, Field::SubprogramSpecification)?;
    if ctx.kind_of(specification) != expected {
        return Err(ctx.violation(
            specification,
            ContractViolation::UnexpectedKind(description),
        ));
    }
    let name = ctx.identifier(specification)?;

    let head = ctx.field(node, Field::DeclarationChain)?;
    let declarations = ctx.chain(head, construct_declaration)?;
    skip_statements(ctx, node)?;

    Ok(SubprogramBody {
        kind,
        name,
        declarations,
    })
}

#[cfg(test)]
mod tests {
    use vhdl_ast::{ParameterClass, Subprogram, Symbol};
    use vhdl_ir::IrArena;

    use super::*;
    use crate::error::DomErrorKind;
    use crate::BuildOptions;

    fn parse<T: FromIr>(arena: &IrArena, node: NodeHandle) -> DomResult<T> {
        DomCtx::new(arena, BuildOptions::default()).parse(node)
    }

    fn parameter(arena: &mut IrArena, name: &str, subtype: &str) -> NodeHandle {
        let subtype = arena.simple_name(subtype);
        arena
            .node(NodeKind::InterfaceConstantDeclaration)
            .name(name)
            .field(Field::SubtypeIndication, subtype)
            .finish()
    }

    #[test]
    fn test_procedure_with_parameters() {
        // procedure proc1 (a : Integer; b : Boolean)
        let mut arena = IrArena::new();
        let a = parameter(&mut arena, "a", "Integer");
        let b = parameter(&mut arena, "b", "Boolean");
        let head = arena.chain(&[a, b]);
        let node = arena
            .node(NodeKind::ProcedureDeclaration)
            .name("proc1")
            .field_opt(Field::InterfaceChain, head)
            .finish();

        let procedure: Procedure = parse(&arena, node).unwrap();
        assert_eq!(procedure.name, "proc1");
        assert!(procedure.generics.is_empty());
        let params: Vec<_> = procedure
            .parameters
            .iter()
            .map(|p| (p.name.as_str(), p.subtype.name(), p.class))
            .collect();
        assert_eq!(
            params,
            [
                ("a", "Integer", ParameterClass::Constant),
                ("b", "Boolean", ParameterClass::Constant),
            ]
        );
        assert_eq!(procedure.return_type(), None);
    }

    #[test]
    fn test_function_return_type() {
        // function f return Bit
        let mut arena = IrArena::new();
        let bit = arena.simple_name("Bit");
        let node = arena
            .node(NodeKind::FunctionDeclaration)
            .name("f")
            .field(Field::ReturnTypeMark, bit)
            .finish();

        let function: Function = parse(&arena, node).unwrap();
        assert_eq!(function.name, "f");
        assert!(function.is_pure);
        assert!(function.generics.is_empty());
        assert!(function.parameters.is_empty());
        assert_eq!(function.return_type, Symbol::new("Bit"));
    }

    #[test]
    fn test_impure_function() {
        let mut arena = IrArena::new();
        let time = arena.simple_name("time");
        let node = arena
            .node(NodeKind::FunctionDeclaration)
            .name("now_ns")
            .flag(Flag::Impure)
            .field(Field::ReturnTypeMark, time)
            .finish();

        let function: Function = parse(&arena, node).unwrap();
        assert!(!function.is_pure);
    }

    #[test]
    fn test_function_without_return_type() {
        let mut arena = IrArena::new();
        let node = arena
            .node(NodeKind::FunctionDeclaration)
            .name("f")
            .finish();

        let error = parse::<Function>(&arena, node).unwrap_err();
        assert_eq!(
            error.kind(),
            &DomErrorKind::ProviderContractViolation(ContractViolation::MissingField {
                field: Field::ReturnTypeMark
            })
        );
    }

    #[test]
    fn test_construction_is_repeatable() {
        let mut arena = IrArena::new();
        let a = parameter(&mut arena, "a", "Integer");
        let bit = arena.simple_name("Bit");
        let node = arena
            .node(NodeKind::FunctionDeclaration)
            .name("f")
            .field(Field::InterfaceChain, a)
            .field(Field::ReturnTypeMark, bit)
            .finish();

        let first: Function = parse(&arena, node).unwrap();
        let second: Function = parse(&arena, node).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_wrong_kind_is_unsupported() {
        let mut arena = IrArena::new();
        let node = arena
            .node(NodeKind::ProcedureDeclaration)
            .name("p")
            .finish();

        let error = parse::<Function>(&arena, node).unwrap_err();
        assert_eq!(
            error.kind(),
            &DomErrorKind::UnsupportedNodeKind(NodeKind::ProcedureDeclaration)
        );
    }

    #[test]
    fn test_body_takes_name_from_specification() {
        let mut arena = IrArena::new();
        let specification = arena
            .node(NodeKind::ProcedureDeclaration)
            .name("reset")
            .finish();
        let body = arena
            .node(NodeKind::ProcedureBody)
            .field(Field::SubprogramSpecification, specification)
            .finish();

        let body: SubprogramBody = parse(&arena, body).unwrap();
        assert_eq!(body.name, "reset");
        assert_eq!(body.kind, SubprogramKind::Procedure);
        assert!(body.declarations.is_empty());
    }

    #[test]
    fn test_body_rejects_mismatched_specification() {
        let mut arena = IrArena::new();
        let signal = arena.node(NodeKind::SignalDeclaration).name("clk").finish();
        let body = arena
            .node(NodeKind::FunctionBody)
            .field(Field::SubprogramSpecification, signal)
            .finish();

        let error = parse::<SubprogramBody>(&arena, body).unwrap_err();
        assert_eq!(
            error.kind(),
            &DomErrorKind::ProviderContractViolation(ContractViolation::UnexpectedKind(
                "a function declaration"
            ))
        );
        assert_eq!(error.node(), signal);
    }

    #[test]
    fn test_function_body_rejects_procedure_specification() {
        let mut arena = IrArena::new();
        let specification = arena
            .node(NodeKind::ProcedureDeclaration)
            .name("reset")
            .finish();
        let body = arena
            .node(NodeKind::FunctionBody)
            .field(Field::SubprogramSpecification, specification)
            .finish();

        let error = parse::<SubprogramBody>(&arena, body).unwrap_err();
        assert!(matches!(
            error.kind(),
            DomErrorKind::ProviderContractViolation(ContractViolation::UnexpectedKind(_))
        ));
        assert_eq!(error.node_kind(), NodeKind::ProcedureDeclaration);
    }
}
