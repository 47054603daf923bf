//! Abstract syntax tree for analyzed VHDL designs.
//!
//! The tree is built once from the analysis engine's IR and never refers
//! back to it. Type and entity references are captured as [`Symbol`]s, plain
//! names to be bound by a later pass. Every node is immutable after
//! construction and compares field-wise, so two builds of the same IR are
//! equal.
//!
//! ## Layout
//!
//! - [`DesignFile`] holds [`DesignUnit`]s, each a [`LibraryUnit`] plus its
//!   context clause.
//! - Declarative regions hold [`Declaration`]s in source order.
//! - [`Function`] and [`Procedure`] own their generic and parameter lists.
//! - [`Expression`] renders back to VHDL text through `Display`.

mod decl;
mod expr;
mod interface;
mod node;
mod subprogram;
mod symbol;
mod types;
mod unit;

pub use decl::*;
pub use expr::*;
pub use interface::*;
pub use node::AstNode;
pub use subprogram::*;
pub use symbol::Symbol;
pub use types::*;
pub use unit::*;
