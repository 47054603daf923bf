//! IR to AST conversion for design files, design units and context clauses.

use vhdl_ast::{
    Architecture, Configuration, ContextDeclaration, ContextReference, Declaration, DesignFile,
    DesignUnit, Entity, LibraryClause, Package, PackageBody, Symbol, UseClause,
};
use vhdl_ir::{Field, NodeHandle, NodeKind};

use crate::error::DomResult;

use super::FromIr;
use super::context::DomCtx;
use super::dispatch::{construct_context_item, construct_declaration, construct_library_unit};
use super::symbols::{resolve_field, resolve_simple_name};

impl FromIr for DesignFile {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::DesignFile])?;

        let head = ctx.field(node, Field::DesignUnits)?;
        let units = ctx.chain(head, |ctx, unit| ctx.parse(unit))?;
        Ok(DesignFile { units })
    }
}

impl FromIr for DesignUnit {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::DesignUnit])?;

        let head = ctx.field(node, Field::ContextItems)?;
        let context = ctx.chain(head, construct_context_item)?;
        let library_unit = ctx.field_required(node, Field::LibraryUnit)?;
        let unit = construct_library_unit(ctx, library_unit)?;

        tracing::debug!(
            %node,
            kind = unit.kind_name(),
            name = unit.name(),
            context_items = context.len(),
            "built design unit"
        );
        Ok(DesignUnit { context, unit })
    }
}

fn declarations(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Vec<Declaration>> {
    let head = ctx.field(node, Field::DeclarationChain)?;
    ctx.chain(head, construct_declaration)
}

/// Statement chains are not part of the AST; note that one was left behind.
pub(super) fn skip_statements(ctx: &DomCtx<'_>, node: NodeHandle) -> DomResult<()> {
    if let Some(head) = ctx.field(node, Field::StatementChain)? {
        tracing::debug!(%node, %head, "statements not built");
    }
    Ok(())
}

impl FromIr for Entity {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::EntityDeclaration])?;

        let name = ctx.identifier(node)?;
        let head = ctx.generic_chain(node)?;
        let generics = ctx.chain(head, |ctx, item| ctx.parse(item))?;
        let head = ctx.field(node, Field::PortChain)?;
        let ports = ctx.chain(head, |ctx, item| ctx.parse(item))?;
        let declarations = declarations(ctx, node)?;
        skip_statements(ctx, node)?;

        Ok(Entity {
            name,
            generics,
            ports,
            declarations,
        })
    }
}

impl FromIr for Architecture {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::ArchitectureBody])?;

        let architecture = Architecture {
            name: ctx.identifier(node)?,
            entity: resolve_field(ctx, node, Field::EntityName)?,
            declarations: declarations(ctx, node)?,
        };
        skip_statements(ctx, node)?;
        Ok(architecture)
    }
}

impl FromIr for Package {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::PackageDeclaration])?;

        let name = ctx.identifier(node)?;
        let head = ctx.generic_chain(node)?;
        let generics = ctx.chain(head, |ctx, item| ctx.parse(item))?;
        let declarations = declarations(ctx, node)?;

        Ok(Package {
            name,
            generics,
            declarations,
        })
    }
}

impl FromIr for PackageBody {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::PackageBody])?;

        Ok(PackageBody {
            name: ctx.identifier(node)?,
            declarations: declarations(ctx, node)?,
        })
    }
}

impl FromIr for ContextDeclaration {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::ContextDeclaration])?;

        let name = ctx.identifier(node)?;
        let head = ctx.field(node, Field::ContextItems)?;
        let items = ctx.chain(head, construct_context_item)?;
        Ok(ContextDeclaration { name, items })
    }
}

impl FromIr for Configuration {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::ConfigurationDeclaration])?;

        Ok(Configuration {
            name: ctx.identifier(node)?,
            entity: resolve_field(ctx, node, Field::EntityName)?,
        })
    }
}

impl FromIr for LibraryClause {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::LibraryClause])?;

        Ok(LibraryClause {
            name: ctx.identifier(node)?,
        })
    }
}

fn name_chain(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Vec<Symbol>> {
    let head = ctx.field(node, Field::NameChain)?;
    ctx.chain(head, |ctx, name| {
        ctx.descend(name, |ctx| resolve_simple_name(ctx, name))
    })
}

impl FromIr for UseClause {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::UseClause])?;

        Ok(UseClause {
            names: name_chain(ctx, node)?,
        })
    }
}

impl FromIr for ContextReference {
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self> {
        ctx.expect_kind(node, &[NodeKind::ContextReference])?;

        Ok(ContextReference {
            names: name_chain(ctx, node)?,
        })
    }
}
