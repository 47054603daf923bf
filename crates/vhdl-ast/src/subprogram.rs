//! Functions, procedures and subprogram bodies.

use std::fmt;

use super::decl::Declaration;
use super::interface::{GenericInterfaceItem, ParameterInterfaceItem};
use super::symbol::Symbol;

/// Common view over functions and procedures.
pub trait Subprogram {
    fn name(&self) -> &str;
    fn generics(&self) -> &[GenericInterfaceItem];
    fn parameters(&self) -> &[ParameterInterfaceItem];
    /// Declared return type; procedures have none.
    fn return_type(&self) -> Option<&Symbol>;
}

/// Function declaration: `function f (a : Integer) return Bit`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    /// `false` for functions declared `impure`.
    pub is_pure: bool,
    pub generics: Vec<GenericInterfaceItem>,
    pub parameters: Vec<ParameterInterfaceItem>,
    /// Return type mark, captured as a simple subtype symbol.
    pub return_type: Symbol,
}

/// Procedure declaration: `procedure p (a : Integer)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Procedure {
    pub name: String,
    pub generics: Vec<GenericInterfaceItem>,
    pub parameters: Vec<ParameterInterfaceItem>,
}

impl Subprogram for Function {
    fn name(&self) -> &str {
        &self.name
    }

    fn generics(&self) -> &[GenericInterfaceItem] {
        &self.generics
    }

    fn parameters(&self) -> &[ParameterInterfaceItem] {
        &self.parameters
    }

    fn return_type(&self) -> Option<&Symbol> {
        Some(&self.return_type)
    }
}

impl Subprogram for Procedure {
    fn name(&self) -> &str {
        &self.name
    }

    fn generics(&self) -> &[GenericInterfaceItem] {
        &self.generics
    }

    fn parameters(&self) -> &[ParameterInterfaceItem] {
        &self.parameters
    }

    fn return_type(&self) -> Option<&Symbol> {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubprogramKind {
    Function,
    Procedure,
}

impl fmt::Display for SubprogramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SubprogramKind::Function => "function",
            SubprogramKind::Procedure => "procedure",
        })
    }
}

/// Subprogram body. The specification is a separate declaration; the body
/// refers to it by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubprogramBody {
    pub kind: SubprogramKind,
    pub name: String,
    pub declarations: Vec<Declaration>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_procedure_has_no_return_type() {
        let procedure = Procedure {
            name: "proc1".into(),
            generics: Vec::new(),
            parameters: Vec::new(),
        };
        assert_eq!(Subprogram::return_type(&procedure), None);

        let function = Function {
            name: "f".into(),
            is_pure: true,
            generics: Vec::new(),
            parameters: Vec::new(),
            return_type: Symbol::new("Bit"),
        };
        assert_eq!(
            Subprogram::return_type(&function).map(Symbol::name),
            Some("Bit")
        );
    }
}
