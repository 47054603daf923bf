//! Error types for DOM construction

use std::fmt;

use derive_more::{Display, Error};
use vhdl_ir::{Field, NodeHandle, NodeKind, SourcePosition};

pub type DomResult<T> = Result<T, DomError>;

/// A construction failure, located at the offending IR node.
#[derive(Clone, Debug, PartialEq, Error)]
pub struct DomError {
    kind: Box<DomErrorKind>,
    node: NodeHandle,
    node_kind: NodeKind,
    position: Option<SourcePosition>,
}

impl DomError {
    pub fn new(
        kind: DomErrorKind,
        node: NodeHandle,
        node_kind: NodeKind,
        position: Option<SourcePosition>,
    ) -> Self {
        Self {
            kind: Box::new(kind),
            node,
            node_kind,
            position,
        }
    }

    pub fn kind(&self) -> &DomErrorKind {
        &self.kind
    }

    /// Handle of the node the failure was detected at.
    pub fn node(&self) -> NodeHandle {
        self.node
    }

    pub fn node_kind(&self) -> NodeKind {
        self.node_kind
    }

    pub fn position(&self) -> Option<&SourcePosition> {
        self.position.as_ref()
    }
}

impl fmt::Display for DomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.node_kind, self.node)?;
        if let Some(position) = &self.position {
            write!(f, " at {position}")?;
        }
        write!(f, ": {}", self.kind)
    }
}

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum DomErrorKind {
    #[display("malformed chain: {_0}")]
    MalformedChain(ChainDefect),

    #[display("unresolvable name: {_0}")]
    UnresolvableName(NameDefect),

    #[display("unsupported node kind {_0}")]
    UnsupportedNodeKind(NodeKind),

    #[display("provider contract violation: {_0}")]
    ProviderContractViolation(ContractViolation),
}

/// Why a chain could not be walked.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum ChainDefect {
    #[display("node {repeated} appears again after {length} elements")]
    Cycle { repeated: NodeHandle, length: usize },

    #[display("chain is longer than {limit} elements")]
    TooLong { limit: usize },
}

/// Why a name reference did not yield an identifier.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum NameDefect {
    #[display("no identifier")]
    Missing,

    #[display("empty identifier")]
    Empty,

    #[display("identifier {_0:?} contains an invalid character")]
    InvalidCharacter(String),
}

/// The provider answered in a way its contract rules out.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum ContractViolation {
    #[display("field {field} is not defined for this kind")]
    FieldNotApplicable { field: Field },

    #[display("required field {field} is absent")]
    MissingField { field: Field },

    #[display("node refers back to one of its ancestors")]
    AncestorReference,

    #[display("nesting deeper than {limit} levels")]
    DepthExceeded { limit: usize },

    #[display("missing {_0} attribute")]
    MissingAttribute(&'static str),

    #[display("literal value does not match the node kind")]
    LiteralMismatch,

    #[display("expected {_0}")]
    UnexpectedKind(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_position() {
        let node = NodeHandle::from_raw(3).unwrap();
        let error = DomError::new(
            DomErrorKind::ProviderContractViolation(ContractViolation::MissingField {
                field: Field::ReturnTypeMark,
            }),
            node,
            NodeKind::FunctionDeclaration,
            Some(SourcePosition::new(Some("pkg.vhd".into()), 4, 12)),
        );
        assert_eq!(
            error.to_string(),
            "FunctionDeclaration #3 at pkg.vhd:4:12: provider contract violation: \
             required field ReturnTypeMark is absent"
        );
    }

    #[test]
    fn test_display_without_position() {
        let node = NodeHandle::from_raw(1).unwrap();
        let error = DomError::new(
            DomErrorKind::UnsupportedNodeKind(NodeKind::ProcessStatement),
            node,
            NodeKind::ProcessStatement,
            None,
        );
        assert_eq!(
            error.to_string(),
            "ProcessStatement #1: unsupported node kind ProcessStatement"
        );
    }

    #[test]
    fn test_is_std_error_without_source() {
        let node = NodeHandle::from_raw(2).unwrap();
        let error = DomError::new(
            DomErrorKind::UnsupportedNodeKind(NodeKind::ProcessStatement),
            node,
            NodeKind::ProcessStatement,
            None,
        );
        assert!(std::error::Error::source(&error).is_none());

        let boxed: Box<dyn std::error::Error> = Box::new(error.clone());
        assert_eq!(boxed.to_string(), error.to_string());
    }
}
