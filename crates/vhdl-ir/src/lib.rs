//! Query interface over a VHDL analysis engine's intermediate representation.
//!
//! The engine owns the IR; this crate only describes how to ask questions
//! about it. Nodes are reached through opaque [`NodeHandle`]s, classified by
//! [`NodeKind`], and connected by named [`Field`] edges and `next` links that
//! form singly linked chains.
//!
//! [`IrArena`] is an in-memory implementation of [`IrProvider`], filled either
//! programmatically or from a JSON image with [`load_json`].

mod arena;
mod handle;
mod image;
mod kind;
mod provider;

pub use arena::{IrArena, NodeBuilder};
pub use handle::{NodeHandle, SourcePosition};
pub use image::{IrImage, IrLoadError, load_json};
pub use kind::{Direction, Field, Flag, Literal, Mode, NodeCategory, NodeKind};
pub use provider::IrProvider;
