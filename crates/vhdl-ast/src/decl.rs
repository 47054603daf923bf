//! Declaration types for the AST.
//!
//! Declarations populate the declarative regions of entities, architectures,
//! packages and subprogram bodies:
//! - Subprograms: `function f (a : Integer) return Bit`
//! - Objects: `constant WIDTH : natural := 8`, `signal clk : std_logic`
//! - Types: `type state_t is (idle, busy)`, `subtype byte is bit_vector`
//! - Aliases, components, attributes and use clauses

use super::expr::Expression;
use super::interface::{GenericInterfaceItem, PortInterfaceItem};
use super::subprogram::{Function, Procedure, SubprogramBody};
use super::symbol::Symbol;
use super::types::TypeDefinition;
use super::unit::UseClause;

/// A declaration inside a declarative region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Declaration {
    /// Function declaration.
    Function(Function),
    /// Procedure declaration.
    Procedure(Procedure),
    /// Function or procedure body.
    SubprogramBody(SubprogramBody),
    /// Constant declaration.
    Constant(ConstantDeclaration),
    /// Signal declaration.
    Signal(SignalDeclaration),
    /// Variable declaration, possibly shared.
    Variable(VariableDeclaration),
    /// Type declaration.
    Type(TypeDeclaration),
    /// Subtype declaration.
    Subtype(SubtypeDeclaration),
    /// Alias declaration.
    Alias(AliasDeclaration),
    /// Component declaration.
    Component(ComponentDeclaration),
    /// Attribute declaration.
    Attribute(AttributeDeclaration),
    /// Use clause in a declarative region.
    Use(UseClause),
}

impl Declaration {
    /// Declared identifier. Use clauses declare nothing and return `None`.
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Function(decl) => Some(&decl.name),
            Declaration::Procedure(decl) => Some(&decl.name),
            Declaration::SubprogramBody(body) => Some(&body.name),
            Declaration::Constant(decl) => Some(&decl.name),
            Declaration::Signal(decl) => Some(&decl.name),
            Declaration::Variable(decl) => Some(&decl.name),
            Declaration::Type(decl) => Some(&decl.name),
            Declaration::Subtype(decl) => Some(&decl.name),
            Declaration::Alias(decl) => Some(&decl.name),
            Declaration::Component(decl) => Some(&decl.name),
            Declaration::Attribute(decl) => Some(&decl.name),
            Declaration::Use(_) => None,
        }
    }

    /// VHDL keyword introducing the declaration.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Declaration::Function(_) => "function",
            Declaration::Procedure(_) => "procedure",
            Declaration::SubprogramBody(_) => "subprogram body",
            Declaration::Constant(_) => "constant",
            Declaration::Signal(_) => "signal",
            Declaration::Variable(decl) if decl.shared => "shared variable",
            Declaration::Variable(_) => "variable",
            Declaration::Type(_) => "type",
            Declaration::Subtype(_) => "subtype",
            Declaration::Alias(_) => "alias",
            Declaration::Component(_) => "component",
            Declaration::Attribute(_) => "attribute",
            Declaration::Use(_) => "use",
        }
    }
}

/// Constant declaration: `constant WIDTH : natural := 8`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstantDeclaration {
    pub name: String,
    pub subtype: Symbol,
    /// `None` for a deferred constant in a package declaration.
    pub default_value: Option<Expression>,
}

/// Signal declaration: `signal count : natural := 0`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignalDeclaration {
    pub name: String,
    pub subtype: Symbol,
    pub default_value: Option<Expression>,
}

/// Variable declaration: `shared variable log : text_t`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub name: String,
    pub subtype: Symbol,
    pub default_value: Option<Expression>,
    pub shared: bool,
}

/// Type declaration: `type state_t is (idle, busy)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    pub definition: TypeDefinition,
}

/// Subtype declaration: `subtype byte is std_logic_vector`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubtypeDeclaration {
    pub name: String,
    pub subtype: Symbol,
}

/// Alias declaration: `alias msb : bit is data`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasDeclaration {
    pub name: String,
    pub subtype: Option<Symbol>,
    pub target: Symbol,
}

/// Component declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentDeclaration {
    pub name: String,
    pub generics: Vec<GenericInterfaceItem>,
    pub ports: Vec<PortInterfaceItem>,
}

/// Attribute declaration: `attribute keep : boolean`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeDeclaration {
    pub name: String,
    pub type_mark: Symbol,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_variable_kind_name() {
        let variable = VariableDeclaration {
            name: "log".into(),
            subtype: Symbol::new("text_t"),
            default_value: None,
            shared: true,
        };
        let decl = Declaration::Variable(variable.clone());
        assert_eq!(decl.kind_name(), "shared variable");
        assert_eq!(decl.name(), Some("log"));

        let local = Declaration::Variable(VariableDeclaration {
            shared: false,
            ..variable
        });
        assert_eq!(local.kind_name(), "variable");
    }

    #[test]
    fn test_use_clause_has_no_name() {
        let decl = Declaration::Use(UseClause {
            names: vec![Symbol::new("work.pkg.all")],
        });
        assert_eq!(decl.name(), None);
    }
}
