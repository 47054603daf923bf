//! Expression types for the AST.
//!
//! Expressions render back to VHDL text through `Display`. Parentheses are
//! only emitted where the source had them (`Expression::Parenthesis`).

use std::fmt;

use super::symbol::Symbol;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    /// Integer literal: `42`
    Integer(i64),
    /// Floating point literal: `0.5`
    Float(FloatBits),
    /// Character literal: `'1'`
    Character(char),
    /// String or bit-string literal: `"0101"`
    String(String),
    /// Name reference: `clk`, `work.pkg.WIDTH`
    Name(Symbol),
    /// Unary operation: `-x`, `not en`
    Unary {
        op: UnaryOperator,
        operand: Box<Expression>,
    },
    /// Binary operation: `a + b`
    Binary {
        op: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// Parenthesized expression: `(a + b)`
    Parenthesis(Box<Expression>),
    /// Aggregate: `(0 => '1', others => '0')`
    Aggregate(Vec<AggregateElement>),
    /// Function call: `to_integer(x)`
    Call {
        name: Symbol,
        arguments: Vec<Argument>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+x`
    Identity,
    /// `-x`
    Negation,
    /// `abs x`
    Absolute,
    /// `not x`
    Not,
}

impl UnaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Identity => "+",
            UnaryOperator::Negation => "-",
            UnaryOperator::Absolute => "abs",
            UnaryOperator::Not => "not",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    And,
    Or,
    Nand,
    Nor,
    Xor,
    Xnor,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Sll,
    Srl,
    Sla,
    Sra,
    Rol,
    Ror,
    Add,
    Subtract,
    Concatenate,
    Multiply,
    Divide,
    Modulus,
    Remainder,
    Exponentiate,
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::And => "and",
            BinaryOperator::Or => "or",
            BinaryOperator::Nand => "nand",
            BinaryOperator::Nor => "nor",
            BinaryOperator::Xor => "xor",
            BinaryOperator::Xnor => "xnor",
            BinaryOperator::Equal => "=",
            BinaryOperator::NotEqual => "/=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Sll => "sll",
            BinaryOperator::Srl => "srl",
            BinaryOperator::Sla => "sla",
            BinaryOperator::Sra => "sra",
            BinaryOperator::Rol => "rol",
            BinaryOperator::Ror => "ror",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Concatenate => "&",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulus => "mod",
            BinaryOperator::Remainder => "rem",
            BinaryOperator::Exponentiate => "**",
        }
    }
}

/// One element of an aggregate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregateElement {
    pub choice: Choice,
    pub value: Expression,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Positional element.
    Positional,
    /// Named element: `3 => x`
    Expression(Expression),
    /// `others => x`
    Others,
}

/// Actual argument of a call, optionally associated by formal name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument {
    pub formal: Option<Symbol>,
    pub actual: Expression,
}

/// Wrapper for f64 that implements Eq and Hash.
///
/// This is needed because f64 doesn't implement Eq/Hash due to NaN.
/// We use the bit representation for comparison.
#[derive(Clone, Copy, Debug)]
pub struct FloatBits(f64);

impl FloatBits {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for FloatBits {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatBits {}

impl std::hash::Hash for FloatBits {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for FloatBits {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Integer(value) => write!(f, "{value}"),
            Expression::Float(value) => write!(f, "{:?}", value.value()),
            Expression::Character(c) => write!(f, "'{c}'"),
            Expression::String(text) => write!(f, "\"{}\"", text.replace('"', "\"\"")),
            Expression::Name(symbol) => write!(f, "{symbol}"),
            Expression::Unary { op, operand } => match op {
                UnaryOperator::Identity | UnaryOperator::Negation => {
                    write!(f, "{}{operand}", op.symbol())
                }
                UnaryOperator::Absolute | UnaryOperator::Not => {
                    write!(f, "{} {operand}", op.symbol())
                }
            },
            Expression::Binary { op, left, right } => {
                write!(f, "{left} {} {right}", op.symbol())
            }
            Expression::Parenthesis(inner) => write!(f, "({inner})"),
            Expression::Aggregate(elements) => {
                f.write_str("(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match &element.choice {
                        Choice::Positional => {}
                        Choice::Expression(choice) => write!(f, "{choice} => ")?,
                        Choice::Others => f.write_str("others => ")?,
                    }
                    write!(f, "{}", element.value)?;
                }
                f.write_str(")")
            }
            Expression::Call { name, arguments } => {
                write!(f, "{name}")?;
                if arguments.is_empty() {
                    return Ok(());
                }
                f.write_str("(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    if let Some(formal) = &argument.formal {
                        write!(f, "{formal} => ")?;
                    }
                    write!(f, "{}", argument.actual)?;
                }
                f.write_str(")")
            }
        }
    }
}
