//! Diagnostic messages emitted while building a design.

use std::fmt;

use vhdl_front::DomError;
use vhdl_ir::{IrLoadError, NodeKind, SourcePosition};

/// A diagnostic message (error or warning), located at an IR node
/// when one is known.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[salsa::accumulator]
pub struct Diagnostic {
    pub message: String,
    pub severity: DiagnosticSeverity,
    pub phase: BuildPhase,
    pub node_kind: Option<NodeKind>,
    pub position: Option<SourcePosition>,
}

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// Build phase where a diagnostic was emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuildPhase {
    /// Reading the IR image.
    Loading,
    /// Turning IR nodes into AST nodes.
    Construction,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == DiagnosticSeverity::Error
    }
}

impl From<&IrLoadError> for Diagnostic {
    fn from(error: &IrLoadError) -> Self {
        Diagnostic {
            message: error.to_string(),
            severity: DiagnosticSeverity::Error,
            phase: BuildPhase::Loading,
            node_kind: None,
            position: None,
        }
    }
}

impl From<&DomError> for Diagnostic {
    fn from(error: &DomError) -> Self {
        Diagnostic {
            message: format!("{} {}: {}", error.node_kind(), error.node(), error.kind()),
            severity: DiagnosticSeverity::Error,
            phase: BuildPhase::Construction,
            node_kind: Some(error.node_kind()),
            position: error.position().cloned(),
        }
    }
}

impl fmt::Display for DiagnosticSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticSeverity::Error => write!(f, "ERROR"),
            DiagnosticSeverity::Warning => write!(f, "WARNING"),
        }
    }
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildPhase::Loading => write!(f, "loading"),
            BuildPhase::Construction => write!(f, "construction"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.severity, self.phase)?;
        if let Some(position) = &self.position {
            write!(f, " {position}")?;
        }
        write!(f, ": {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use vhdl_front::{ContractViolation, DomErrorKind};
    use vhdl_ir::{Field, NodeHandle};

    use super::*;

    #[test]
    fn test_from_dom_error() {
        let node = NodeHandle::from_raw(3).unwrap();
        let error = DomError::new(
            DomErrorKind::ProviderContractViolation(ContractViolation::MissingField {
                field: Field::ReturnTypeMark,
            }),
            node,
            NodeKind::FunctionDeclaration,
            Some(SourcePosition::new(Some("pkg.vhd".into()), 4, 12)),
        );

        let diagnostic = Diagnostic::from(&error);
        assert!(diagnostic.is_error());
        assert_eq!(diagnostic.phase, BuildPhase::Construction);
        assert_eq!(diagnostic.node_kind, Some(NodeKind::FunctionDeclaration));
        assert_eq!(
            diagnostic.to_string(),
            "ERROR [construction] pkg.vhd:4:12: FunctionDeclaration #3: \
             provider contract violation: required field ReturnTypeMark is absent"
        );
    }

    #[test]
    fn test_display_without_position() {
        let diagnostic = Diagnostic {
            message: "design file has no design units".to_string(),
            severity: DiagnosticSeverity::Warning,
            phase: BuildPhase::Construction,
            node_kind: None,
            position: None,
        };
        assert_eq!(
            diagnostic.to_string(),
            "WARNING [construction]: design file has no design units"
        );
    }
}
