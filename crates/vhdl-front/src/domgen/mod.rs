//! IR to AST conversion.
//!
//! This module walks the analysis engine's IR through an [`IrProvider`] and
//! materializes the typed AST of `vhdl-ast`.
//!
//! ## Structure
//!
//! - [`ChainWalker`] turns `next`-linked chains into ordered sequences.
//! - The symbol resolver captures name references as [`vhdl_ast::Symbol`]s.
//! - [`constructor_for`] classifies every node kind; the `construct_*`
//!   functions build nodes at a given position (library unit, declaration,
//!   context item, expression).
//! - Each AST type implements [`FromIr`].
//!
//! All recursion goes through [`DomCtx::descend`], which bounds depth and
//! rejects nodes that refer back to an ancestor.

mod chain;
mod context;
mod declarations;
mod dispatch;
mod expressions;
mod interfaces;
mod subprograms;
mod symbols;
mod types;
mod units;

use vhdl_ast::{AstNode, DesignFile, DesignUnit};
use vhdl_ir::{Field, IrProvider, NodeHandle, NodeKind};

use crate::error::DomResult;
use crate::options::BuildOptions;

pub use chain::{ChainError, ChainWalker, WalkError};
pub use context::DomCtx;
pub use dispatch::{
    Constructor, classify, constructor_for, construct_context_item, construct_declaration,
    construct_expression, construct_library_unit,
};
pub use symbols::{resolve_simple_name, resolve_subtype_indication};

/// An AST type that can be built from a single IR node.
pub trait FromIr: Sized {
    /// Build `Self` from `node`.
    ///
    /// Callers go through [`DomCtx::parse`], which pushes `node` on the
    /// ancestor stack first.
    fn parse(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Self>;
}

// =============================================================================
// Entry Points
// =============================================================================

/// Build the whole design file rooted at `root`.
///
/// The first failure anywhere in the file aborts the build.
pub fn build_design_file(
    provider: &dyn IrProvider,
    root: NodeHandle,
    options: BuildOptions,
) -> DomResult<DesignFile> {
    DomCtx::new(provider, options).parse(root)
}

/// Build each design unit of the file rooted at `root` independently.
///
/// Returns one result per unit, in file order; a failing unit does not stop
/// its siblings. Only a malformed root or unit chain fails the whole call.
pub fn build_design_units(
    provider: &dyn IrProvider,
    root: NodeHandle,
    options: BuildOptions,
) -> DomResult<Vec<DomResult<DesignUnit>>> {
    let mut ctx = DomCtx::new(provider, options);
    ctx.expect_kind(root, &[NodeKind::DesignFile])?;

    ctx.descend(root, |ctx| {
        let head = ctx.field(root, Field::DesignUnits)?;
        let units = ctx.walk(head)?;
        Ok(units
            .into_iter()
            .map(|unit| {
                let result = ctx.parse::<DesignUnit>(unit);
                if let Err(error) = &result {
                    tracing::warn!(%unit, %error, "design unit skipped");
                }
                result
            })
            .collect())
    })
}

/// Build whatever `node` is.
pub fn construct(
    provider: &dyn IrProvider,
    node: NodeHandle,
    options: BuildOptions,
) -> DomResult<AstNode> {
    dispatch::construct(&mut DomCtx::new(provider, options), node)
}

/// Build a specific AST type from `node`.
pub fn build<T: FromIr>(
    provider: &dyn IrProvider,
    node: NodeHandle,
    options: BuildOptions,
) -> DomResult<T> {
    DomCtx::new(provider, options).parse(node)
}
