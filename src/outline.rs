//! Depth-first outline of a built design.
//!
//! Each node prints on its own line, indented two spaces per level:
//!
//! ```text
//! package util
//!   use ieee.std_logic_1164.all
//!   constant WIDTH : natural := 8
//!   function parity (v : in std_logic_vector) return std_logic
//! ```

use std::fmt::{self, Write as _};

use vhdl_ast::{
    Declaration, DesignFile, DesignUnit, Expression, Function, GenericInterfaceItem, LibraryUnit,
    ParameterClass, ParameterInterfaceItem, PortInterfaceItem, Procedure,
};

/// Displays a design file as an indented outline.
pub struct Outline<'a>(pub &'a DesignFile);

impl fmt::Display for Outline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printer = Printer { out: f, depth: 0 };
        for unit in &self.0.units {
            printer.design_unit(unit)?;
        }
        Ok(())
    }
}

/// Render `design` as an outline.
pub fn render_outline(design: &DesignFile) -> String {
    Outline(design).to_string()
}

struct Printer<'a, 'b> {
    out: &'a mut fmt::Formatter<'b>,
    depth: usize,
}

impl Printer<'_, '_> {
    fn line(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            self.out.write_str("  ")?;
        }
        self.out.write_fmt(args)?;
        self.out.write_char('\n')
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self) -> fmt::Result) -> fmt::Result {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    // =========================================================================
    // Units
    // =========================================================================

    fn design_unit(&mut self, unit: &DesignUnit) -> fmt::Result {
        match &unit.unit {
            LibraryUnit::Architecture(arch) => {
                self.line(format_args!("architecture {} of {}", arch.name, arch.entity))?
            }
            LibraryUnit::Configuration(config) => {
                self.line(format_args!("configuration {} of {}", config.name, config.entity))?
            }
            other => self.line(format_args!("{} {}", other.kind_name(), other.name()))?,
        }

        self.nested(|p| {
            for item in &unit.context {
                p.line(format_args!("{item}"))?;
            }
            match &unit.unit {
                LibraryUnit::Entity(entity) => {
                    p.generics(&entity.generics)?;
                    p.ports(&entity.ports)?;
                }
                LibraryUnit::Package(package) => p.generics(&package.generics)?,
                LibraryUnit::Context(context) => {
                    for item in &context.items {
                        p.line(format_args!("{item}"))?;
                    }
                }
                _ => {}
            }
            p.declarations(unit.unit.declarations())
        })
    }

    fn generics(&mut self, generics: &[GenericInterfaceItem]) -> fmt::Result {
        for item in generics {
            self.line(format_args!(
                "generic {} : {}{}",
                item.name,
                item.subtype,
                DefaultValue(item.default_value.as_ref())
            ))?;
        }
        Ok(())
    }

    fn ports(&mut self, ports: &[PortInterfaceItem]) -> fmt::Result {
        for item in ports {
            self.line(format_args!(
                "port {} : {} {}{}",
                item.name,
                item.mode,
                item.subtype,
                DefaultValue(item.default_value.as_ref())
            ))?;
        }
        Ok(())
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn declarations(&mut self, declarations: &[Declaration]) -> fmt::Result {
        for decl in declarations {
            self.declaration(decl)?;
        }
        Ok(())
    }

    fn declaration(&mut self, decl: &Declaration) -> fmt::Result {
        match decl {
            Declaration::Function(function) => self.function(function),
            Declaration::Procedure(procedure) => self.procedure(procedure),
            Declaration::SubprogramBody(body) => {
                self.line(format_args!("{} body {}", body.kind, body.name))?;
                self.nested(|p| p.declarations(&body.declarations))
            }
            Declaration::Constant(c) => self.line(format_args!(
                "constant {} : {}{}",
                c.name,
                c.subtype,
                DefaultValue(c.default_value.as_ref())
            )),
            Declaration::Signal(s) => self.line(format_args!(
                "signal {} : {}{}",
                s.name,
                s.subtype,
                DefaultValue(s.default_value.as_ref())
            )),
            Declaration::Variable(v) => self.line(format_args!(
                "{} {} : {}{}",
                decl.kind_name(),
                v.name,
                v.subtype,
                DefaultValue(v.default_value.as_ref())
            )),
            Declaration::Type(t) => self.line(format_args!("type {} is {}", t.name, t.definition)),
            Declaration::Subtype(s) => {
                self.line(format_args!("subtype {} is {}", s.name, s.subtype))
            }
            Declaration::Alias(a) => match &a.subtype {
                Some(subtype) => {
                    self.line(format_args!("alias {} : {} is {}", a.name, subtype, a.target))
                }
                None => self.line(format_args!("alias {} is {}", a.name, a.target)),
            },
            Declaration::Component(c) => {
                self.line(format_args!("component {}", c.name))?;
                self.nested(|p| {
                    p.generics(&c.generics)?;
                    p.ports(&c.ports)
                })
            }
            Declaration::Attribute(a) => {
                self.line(format_args!("attribute {} : {}", a.name, a.type_mark))
            }
            Declaration::Use(clause) => {
                self.line(format_args!("use {}", Names(&clause.names)))
            }
        }
    }

    fn function(&mut self, function: &Function) -> fmt::Result {
        let purity = if function.is_pure { "" } else { "impure " };
        self.line(format_args!(
            "{purity}function {}{} return {}",
            function.name,
            Parameters(&function.parameters),
            function.return_type
        ))?;
        self.nested(|p| p.generics(&function.generics))
    }

    fn procedure(&mut self, procedure: &Procedure) -> fmt::Result {
        self.line(format_args!(
            "procedure {}{}",
            procedure.name,
            Parameters(&procedure.parameters)
        ))?;
        self.nested(|p| p.generics(&procedure.generics))
    }
}

/// ` := value`, or nothing.
struct DefaultValue<'a>(Option<&'a Expression>);

impl fmt::Display for DefaultValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, " := {value}"),
            None => Ok(()),
        }
    }
}

/// ` (a : in Integer; signal b : in Boolean)`, or nothing for an empty list.
/// The class is shown unless it is `constant`.
struct Parameters<'a>(&'a [ParameterInterfaceItem]);

impl fmt::Display for Parameters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }
        f.write_str(" (")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            if item.class != ParameterClass::Constant {
                write!(f, "{} ", item.class)?;
            }
            write!(
                f,
                "{} : {} {}{}",
                item.name,
                item.mode,
                item.subtype,
                DefaultValue(item.default_value.as_ref())
            )?;
        }
        f.write_str(")")
    }
}

struct Names<'a>(&'a [vhdl_ast::Symbol]);

impl fmt::Display for Names<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}")?;
        }
        Ok(())
    }
}
