//! Type definitions for the AST.
//!
//! Type definitions appear on the right-hand side of a type declaration:
//! - Enumerations: `(idle, busy, done)`
//! - Integer and floating ranges: `range 0 to 255`
//! - Arrays: `array (natural range <>) of std_logic`
//! - Records: `record re, im : real; end record`
//! - Access types: `access line`

use std::fmt;

use super::expr::Expression;
use super::symbol::Symbol;

/// Right-hand side of a type declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeDefinition {
    /// Enumeration literals in declaration order.
    Enumeration(Vec<String>),
    /// Integer type: `range 0 to 255`
    Integer(Range),
    /// Floating type: `range 0.0 to 1.0`
    Floating(Range),
    /// Array type.
    Array {
        /// Index subtypes, one per dimension.
        indices: Vec<Symbol>,
        /// Element subtype.
        element: Symbol,
    },
    /// Record elements in declaration order.
    Record(Vec<RecordElement>),
    /// Access type designating the given subtype.
    Access(Symbol),
}

impl TypeDefinition {
    /// Short keyword describing the definition.
    pub fn kind_name(&self) -> &'static str {
        match self {
            TypeDefinition::Enumeration(_) => "enumeration",
            TypeDefinition::Integer(_) => "integer",
            TypeDefinition::Floating(_) => "floating",
            TypeDefinition::Array { .. } => "array",
            TypeDefinition::Record(_) => "record",
            TypeDefinition::Access(_) => "access",
        }
    }
}

/// Range direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    To,
    Downto,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::To => "to",
            Direction::Downto => "downto",
        })
    }
}

/// Range constraint: `7 downto 0`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Range {
    pub left: Expression,
    pub direction: Direction,
    pub right: Expression,
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.direction, self.right)
    }
}

/// Record element: `re : real`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordElement {
    pub name: String,
    pub subtype: Symbol,
}

impl fmt::Display for TypeDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDefinition::Enumeration(literals) => write!(f, "({})", literals.join(", ")),
            TypeDefinition::Integer(range) | TypeDefinition::Floating(range) => {
                write!(f, "range {range}")
            }
            TypeDefinition::Array { indices, element } => {
                f.write_str("array (")?;
                for (i, index) in indices.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{index}")?;
                }
                write!(f, ") of {element}")
            }
            TypeDefinition::Record(elements) => {
                f.write_str("record")?;
                for element in elements {
                    write!(f, " {} : {};", element.name, element.subtype)?;
                }
                f.write_str(" end record")
            }
            TypeDefinition::Access(designated) => write!(f, "access {designated}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_range() {
        let range = Range {
            left: Expression::Integer(7),
            direction: Direction::Downto,
            right: Expression::Integer(0),
        };
        assert_eq!(TypeDefinition::Integer(range).to_string(), "range 7 downto 0");
    }

    #[test]
    fn test_display_composites() {
        let array = TypeDefinition::Array {
            indices: vec![Symbol::new("natural")],
            element: Symbol::new("std_logic"),
        };
        assert_eq!(array.to_string(), "array (natural) of std_logic");

        let record = TypeDefinition::Record(vec![
            RecordElement {
                name: "re".into(),
                subtype: Symbol::new("real"),
            },
            RecordElement {
                name: "im".into(),
                subtype: Symbol::new("real"),
            },
        ]);
        assert_eq!(record.to_string(), "record re : real; im : real; end record");

        let states = TypeDefinition::Enumeration(vec!["idle".into(), "busy".into()]);
        assert_eq!(states.to_string(), "(idle, busy)");
    }
}
