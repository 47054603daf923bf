//! DOM construction for analyzed VHDL designs.
//!
//! Builds the typed AST of `vhdl-ast` from an analysis engine's IR, reached
//! only through the [`vhdl_ir::IrProvider`] query interface.
//!
//! ## Example
//!
//! ```
//! use vhdl_front::{BuildOptions, build};
//! use vhdl_ir::{Field, IrArena, NodeKind};
//! use vhdl_ast::Function;
//!
//! let mut arena = IrArena::new();
//! let bit = arena.simple_name("Bit");
//! let f = arena
//!     .node(NodeKind::FunctionDeclaration)
//!     .name("f")
//!     .field(Field::ReturnTypeMark, bit)
//!     .finish();
//!
//! let function: Function = build(&arena, f, BuildOptions::default()).unwrap();
//! assert_eq!(function.return_type.name(), "Bit");
//! ```

pub mod domgen;
pub mod error;
mod options;

pub use domgen::{
    DomCtx, FromIr, build, build_design_file, build_design_units, construct,
    resolve_simple_name,
};
pub use error::{ChainDefect, ContractViolation, DomError, DomErrorKind, DomResult, NameDefect};
pub use options::BuildOptions;
