//! The query surface of the analysis engine.

use crate::handle::{NodeHandle, SourcePosition};
use crate::kind::{Direction, Field, Flag, Literal, Mode, NodeKind};

/// Read-only access to the analysis engine's IR.
///
/// Implementations are expected to be deterministic and side-effect free:
/// asking the same question twice yields the same answer. `None` stands for
/// the engine's null handle and is a normal answer, not an error.
pub trait IrProvider {
    /// Kind tag of `node`.
    fn kind_of(&self, node: NodeHandle) -> NodeKind;

    /// Identifier text of `node`, for definitions and name references.
    fn name_of(&self, node: NodeHandle) -> Option<&str>;

    /// Source location of `node`, when the engine recorded one.
    fn position_of(&self, node: NodeHandle) -> Option<SourcePosition>;

    /// Follow a named child or attribute edge.
    fn field(&self, node: NodeHandle, field: Field) -> Option<NodeHandle>;

    /// Next element of the chain `node` belongs to.
    fn next_of(&self, node: NodeHandle) -> Option<NodeHandle>;

    /// Value of a literal node.
    fn literal_of(&self, node: NodeHandle) -> Option<Literal>;

    /// Mode of an interface declaration.
    fn mode_of(&self, node: NodeHandle) -> Option<Mode>;

    /// Direction of a range expression.
    fn direction_of(&self, node: NodeHandle) -> Option<Direction>;

    /// Whether `flag` is set on `node`.
    fn has_flag(&self, node: NodeHandle, flag: Flag) -> bool;

    /// Head of the generic chain of a subprogram, entity, package or component.
    fn generic_chain_head(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.field(node, Field::GenericChain)
    }

    /// Head of the parameter chain of a subprogram.
    fn interface_chain_head(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.field(node, Field::InterfaceChain)
    }

    /// Declared return type reference of a function.
    fn return_type_mark(&self, node: NodeHandle) -> Option<NodeHandle> {
        self.field(node, Field::ReturnTypeMark)
    }
}
