//! Interface items: generics, ports and subprogram parameters.

use std::fmt;

use super::expr::Expression;
use super::symbol::Symbol;

/// Common view over the interface item variants.
pub trait InterfaceItem {
    /// Declared identifier.
    fn name(&self) -> &str;
    /// Subtype mark of the item.
    fn subtype(&self) -> &Symbol;
    /// Default value expression, if one was declared.
    fn default_value(&self) -> Option<&Expression>;
}

/// Port and parameter mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    In,
    Out,
    InOut,
    Buffer,
    Linkage,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::In => "in",
            Mode::Out => "out",
            Mode::InOut => "inout",
            Mode::Buffer => "buffer",
            Mode::Linkage => "linkage",
        })
    }
}

/// Generic constant: `WIDTH : natural := 8`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericInterfaceItem {
    pub name: String,
    pub subtype: Symbol,
    pub default_value: Option<Expression>,
}

/// Object class of a subprogram parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParameterClass {
    Constant,
    Variable,
    Signal,
    File,
}

impl fmt::Display for ParameterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParameterClass::Constant => "constant",
            ParameterClass::Variable => "variable",
            ParameterClass::Signal => "signal",
            ParameterClass::File => "file",
        })
    }
}

/// Subprogram parameter: `variable acc : inout Integer`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterInterfaceItem {
    pub class: ParameterClass,
    pub name: String,
    pub mode: Mode,
    pub subtype: Symbol,
    pub default_value: Option<Expression>,
}

/// Entity or component port: `clk : in std_logic`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortInterfaceItem {
    pub name: String,
    pub mode: Mode,
    pub subtype: Symbol,
    pub default_value: Option<Expression>,
}

macro_rules! impl_interface_item {
    ($($ty:ty),*) => {
        $(
            impl InterfaceItem for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn subtype(&self) -> &Symbol {
                    &self.subtype
                }

                fn default_value(&self) -> Option<&Expression> {
                    self.default_value.as_ref()
                }
            }
        )*
    };
}

impl_interface_item!(GenericInterfaceItem, ParameterInterfaceItem, PortInterfaceItem);
