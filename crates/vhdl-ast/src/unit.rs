//! Design files, design units and context clauses.

use std::fmt;

use super::decl::Declaration;
use super::interface::{GenericInterfaceItem, PortInterfaceItem};
use super::symbol::Symbol;

/// An analyzed design file.
///
/// This is the top-level AST node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesignFile {
    /// Design units in source order.
    pub units: Vec<DesignUnit>,
}

/// A library unit together with its context clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesignUnit {
    pub context: Vec<ContextItem>,
    pub unit: LibraryUnit,
}

/// Primary or secondary library unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LibraryUnit {
    Entity(Entity),
    Architecture(Architecture),
    Package(Package),
    PackageBody(PackageBody),
    Context(ContextDeclaration),
    Configuration(Configuration),
}

impl LibraryUnit {
    pub fn name(&self) -> &str {
        match self {
            LibraryUnit::Entity(unit) => &unit.name,
            LibraryUnit::Architecture(unit) => &unit.name,
            LibraryUnit::Package(unit) => &unit.name,
            LibraryUnit::PackageBody(unit) => &unit.name,
            LibraryUnit::Context(unit) => &unit.name,
            LibraryUnit::Configuration(unit) => &unit.name,
        }
    }

    /// VHDL keyword introducing the unit.
    pub fn kind_name(&self) -> &'static str {
        match self {
            LibraryUnit::Entity(_) => "entity",
            LibraryUnit::Architecture(_) => "architecture",
            LibraryUnit::Package(_) => "package",
            LibraryUnit::PackageBody(_) => "package body",
            LibraryUnit::Context(_) => "context",
            LibraryUnit::Configuration(_) => "configuration",
        }
    }

    /// Declarations of the unit's declarative region, if it has one.
    pub fn declarations(&self) -> &[Declaration] {
        match self {
            LibraryUnit::Entity(unit) => &unit.declarations,
            LibraryUnit::Architecture(unit) => &unit.declarations,
            LibraryUnit::Package(unit) => &unit.declarations,
            LibraryUnit::PackageBody(unit) => &unit.declarations,
            LibraryUnit::Context(_) | LibraryUnit::Configuration(_) => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub generics: Vec<GenericInterfaceItem>,
    pub ports: Vec<PortInterfaceItem>,
    pub declarations: Vec<Declaration>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Architecture {
    pub name: String,
    /// Entity this architecture implements.
    pub entity: Symbol,
    pub declarations: Vec<Declaration>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Package {
    pub name: String,
    pub generics: Vec<GenericInterfaceItem>,
    pub declarations: Vec<Declaration>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageBody {
    pub name: String,
    pub declarations: Vec<Declaration>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextDeclaration {
    pub name: String,
    pub items: Vec<ContextItem>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    pub name: String,
    pub entity: Symbol,
}

/// Item of a context clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContextItem {
    Library(LibraryClause),
    Use(UseClause),
    ContextReference(ContextReference),
}

/// `library ieee;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LibraryClause {
    pub name: String,
}

/// `use ieee.std_logic_1164.all;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UseClause {
    pub names: Vec<Symbol>,
}

/// `context work.project_ctx;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContextReference {
    pub names: Vec<Symbol>,
}

fn write_names(f: &mut fmt::Formatter<'_>, names: &[Symbol]) -> fmt::Result {
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{name}")?;
    }
    Ok(())
}

impl fmt::Display for ContextItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextItem::Library(clause) => write!(f, "library {}", clause.name),
            ContextItem::Use(clause) => {
                f.write_str("use ")?;
                write_names(f, &clause.names)
            }
            ContextItem::ContextReference(reference) => {
                f.write_str("context ")?;
                write_names(f, &reference.names)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_context_items() {
        let library = ContextItem::Library(LibraryClause { name: "ieee".into() });
        assert_eq!(library.to_string(), "library ieee");

        let use_clause = ContextItem::Use(UseClause {
            names: vec![
                Symbol::new("ieee.std_logic_1164.all"),
                Symbol::new("ieee.numeric_std.all"),
            ],
        });
        assert_eq!(
            use_clause.to_string(),
            "use ieee.std_logic_1164.all, ieee.numeric_std.all"
        );
    }

    #[test]
    fn test_context_unit_has_no_declarations() {
        let unit = LibraryUnit::Context(ContextDeclaration {
            name: "project_ctx".into(),
            items: Vec::new(),
        });
        assert!(unit.declarations().is_empty());
        assert_eq!(unit.kind_name(), "context");
    }
}
