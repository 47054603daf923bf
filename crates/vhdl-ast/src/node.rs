//! Result of dispatching a single IR node.

use super::decl::Declaration;
use super::expr::Expression;
use super::unit::{ContextItem, DesignFile, DesignUnit, LibraryUnit};

/// Any AST node that can be built directly from an IR handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AstNode {
    DesignFile(DesignFile),
    DesignUnit(DesignUnit),
    LibraryUnit(LibraryUnit),
    ContextItem(ContextItem),
    Declaration(Declaration),
    Expression(Expression),
}

impl AstNode {
    pub fn as_declaration(&self) -> Option<&Declaration> {
        match self {
            AstNode::Declaration(decl) => Some(decl),
            _ => None,
        }
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            AstNode::Expression(expr) => Some(expr),
            _ => None,
        }
    }
}

impl From<Declaration> for AstNode {
    fn from(decl: Declaration) -> Self {
        AstNode::Declaration(decl)
    }
}

impl From<Expression> for AstNode {
    fn from(expr: Expression) -> Self {
        AstNode::Expression(expr)
    }
}

impl From<LibraryUnit> for AstNode {
    fn from(unit: LibraryUnit) -> Self {
        AstNode::LibraryUnit(unit)
    }
}

impl From<ContextItem> for AstNode {
    fn from(item: ContextItem) -> Self {
        AstNode::ContextItem(item)
    }
}
