//! Unbound name references.

use std::fmt;

/// A captured reference to a type or entity, not yet bound to its definition.
///
/// A symbol is a lookup key: it holds the referenced name and nothing else.
/// Two symbols are equal when their names are equal, regardless of where
/// they were captured. Selected names are kept in dotted form
/// (`ieee.std_logic_1164.std_logic`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    name: String,
}

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_name() {
        let a = Symbol::new("Integer");
        let b = Symbol::new(String::from("Integer"));
        assert_eq!(a, b);
        assert_ne!(a, Symbol::new("Boolean"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::from("ieee.std_logic_1164.all").to_string(), "ieee.std_logic_1164.all");
    }
}
