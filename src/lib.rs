//! Incremental VHDL DOM building.
//!
//! Wraps the construction in `vhdl-front` in a Salsa database: IR images are
//! loaded as [`IrDocument`] inputs, [`build_design`] turns each into a
//! [`vhdl_ast::DesignFile`], and construction failures surface as
//! accumulated [`Diagnostic`]s.

pub mod database;
pub mod diagnostic;
pub mod outline;
pub mod pipeline;

pub use database::{Db, DomDatabase, IrDocument};
pub use diagnostic::{BuildPhase, Diagnostic, DiagnosticSeverity};
pub use outline::{Outline, render_outline};
pub use pipeline::{BuildResult, build_design, build_with_diagnostics};
pub use vhdl_front::BuildOptions;
