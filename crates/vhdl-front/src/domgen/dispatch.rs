//! Node classification and dispatch.
//!
//! [`constructor_for`] is the single table deciding what becomes of each IR
//! kind. It matches every kind by name, so adding a kind to the IR does not
//! compile until the table says whether and how it is built.

use vhdl_ast::{
    AstNode, BinaryOperator, ContextItem, Declaration, Expression, LibraryUnit, SubprogramKind,
    UnaryOperator,
};
use vhdl_ir::{NodeHandle, NodeKind};

use crate::error::DomResult;

use super::context::DomCtx;
use super::expressions::build_expression;
use super::subprograms::subprogram_body;

/// How a node of some kind is turned into an AST node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constructor {
    DesignFile,
    DesignUnit,
    // Library units
    Entity,
    Architecture,
    Package,
    PackageBody,
    Context,
    Configuration,
    // Context items
    LibraryClause,
    UseClause,
    ContextReference,
    // Declarations
    Function,
    Procedure,
    SubprogramBody(SubprogramKind),
    Constant,
    Signal,
    Variable,
    Type,
    Subtype,
    Alias,
    Component,
    Attribute,
    // Expressions
    Name,
    Literal,
    Unary(UnaryOperator),
    Binary(BinaryOperator),
    Parenthesis,
    Aggregate,
    FunctionCall,
}

/// Constructor for `kind`, or `None` when the kind is not built.
pub fn constructor_for(kind: NodeKind) -> Option<Constructor> {
    use Constructor as C;
    use NodeKind::*;

    let constructor = match kind {
        DesignFile => C::DesignFile,
        DesignUnit => C::DesignUnit,

        EntityDeclaration => C::Entity,
        ArchitectureBody => C::Architecture,
        PackageDeclaration => C::Package,
        PackageBody => C::PackageBody,
        ContextDeclaration => C::Context,
        ConfigurationDeclaration => C::Configuration,

        LibraryClause => C::LibraryClause,
        UseClause => C::UseClause,
        ContextReference => C::ContextReference,

        FunctionDeclaration => C::Function,
        ProcedureDeclaration => C::Procedure,
        FunctionBody => C::SubprogramBody(SubprogramKind::Function),
        ProcedureBody => C::SubprogramBody(SubprogramKind::Procedure),
        ConstantDeclaration => C::Constant,
        SignalDeclaration => C::Signal,
        VariableDeclaration => C::Variable,
        TypeDeclaration => C::Type,
        SubtypeDeclaration => C::Subtype,
        AliasDeclaration => C::Alias,
        ComponentDeclaration => C::Component,
        AttributeDeclaration => C::Attribute,
        FileDeclaration | AttributeSpecification | GroupDeclaration => return None,

        // Built by their owners, never on their own.
        InterfaceConstantDeclaration
        | InterfaceSignalDeclaration
        | InterfaceVariableDeclaration
        | InterfaceFileDeclaration => return None,
        InterfaceTypeDeclaration | InterfacePackageDeclaration => return None,

        EnumerationTypeDefinition
        | IntegerTypeDefinition
        | FloatingTypeDefinition
        | PhysicalTypeDefinition
        | ArrayTypeDefinition
        | RecordTypeDefinition
        | AccessTypeDefinition
        | FileTypeDefinition => return None,
        EnumerationLiteral | ElementDeclaration | RangeExpression | SubtypeDefinition
        | ArraySubtypeDefinition => return None,

        SimpleName | SelectedName | SelectedByAllName => C::Name,
        AttributeName | IndexedName => return None,

        IntegerLiteral | FloatingPointLiteral | CharacterLiteral | StringLiteral => C::Literal,
        PhysicalLiteral | NullLiteral => return None,

        IdentityOperator => C::Unary(UnaryOperator::Identity),
        NegationOperator => C::Unary(UnaryOperator::Negation),
        AbsoluteOperator => C::Unary(UnaryOperator::Absolute),
        NotOperator => C::Unary(UnaryOperator::Not),

        AndOperator => C::Binary(BinaryOperator::And),
        OrOperator => C::Binary(BinaryOperator::Or),
        NandOperator => C::Binary(BinaryOperator::Nand),
        NorOperator => C::Binary(BinaryOperator::Nor),
        XorOperator => C::Binary(BinaryOperator::Xor),
        XnorOperator => C::Binary(BinaryOperator::Xnor),
        EqualityOperator => C::Binary(BinaryOperator::Equal),
        InequalityOperator => C::Binary(BinaryOperator::NotEqual),
        LessThanOperator => C::Binary(BinaryOperator::Less),
        LessThanOrEqualOperator => C::Binary(BinaryOperator::LessEqual),
        GreaterThanOperator => C::Binary(BinaryOperator::Greater),
        GreaterThanOrEqualOperator => C::Binary(BinaryOperator::GreaterEqual),
        SllOperator => C::Binary(BinaryOperator::Sll),
        SrlOperator => C::Binary(BinaryOperator::Srl),
        SlaOperator => C::Binary(BinaryOperator::Sla),
        SraOperator => C::Binary(BinaryOperator::Sra),
        RolOperator => C::Binary(BinaryOperator::Rol),
        RorOperator => C::Binary(BinaryOperator::Ror),
        AdditionOperator => C::Binary(BinaryOperator::Add),
        SubtractionOperator => C::Binary(BinaryOperator::Subtract),
        ConcatenationOperator => C::Binary(BinaryOperator::Concatenate),
        MultiplicationOperator => C::Binary(BinaryOperator::Multiply),
        DivisionOperator => C::Binary(BinaryOperator::Divide),
        ModulusOperator => C::Binary(BinaryOperator::Modulus),
        RemainderOperator => C::Binary(BinaryOperator::Remainder),
        ExponentiationOperator => C::Binary(BinaryOperator::Exponentiate),

        Parenthesis => C::Parenthesis,
        Aggregate => C::Aggregate,
        FunctionCall => C::FunctionCall,
        QualifiedExpression | TypeConversion => return None,

        // Elements of aggregates and calls, built by their owners.
        AssociationElementPositional
        | AssociationElementByExpression
        | ChoiceByNone
        | ChoiceByExpression
        | ChoiceByOthers
        | ChoiceByRange => return None,

        ProcessStatement
        | ConcurrentSimpleSignalAssignment
        | ComponentInstantiationStatement
        | BlockStatement
        | IfGenerateStatement
        | ForGenerateStatement => return None,
    };
    Some(constructor)
}

/// Kind tag of `node`.
pub fn classify(ctx: &DomCtx<'_>, node: NodeHandle) -> NodeKind {
    ctx.kind_of(node)
}

fn lookup(ctx: &DomCtx<'_>, node: NodeHandle) -> Option<Constructor> {
    let kind = classify(ctx, node);
    let constructor = constructor_for(kind);
    tracing::trace!(%node, ?kind, ?constructor, depth = ctx.depth(), "dispatch");
    constructor
}

/// Build whatever `node` is.
pub fn construct(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<AstNode> {
    let Some(constructor) = lookup(ctx, node) else {
        return Err(ctx.unsupported(node));
    };

    match constructor {
        Constructor::DesignFile => ctx.parse(node).map(AstNode::DesignFile),
        Constructor::DesignUnit => ctx.parse(node).map(AstNode::DesignUnit),
        Constructor::Entity
        | Constructor::Architecture
        | Constructor::Package
        | Constructor::PackageBody
        | Constructor::Context
        | Constructor::Configuration => {
            construct_library_unit(ctx, node).map(AstNode::from)
        }
        Constructor::LibraryClause | Constructor::UseClause | Constructor::ContextReference => {
            construct_context_item(ctx, node).map(AstNode::from)
        }
        Constructor::Function
        | Constructor::Procedure
        | Constructor::SubprogramBody(_)
        | Constructor::Constant
        | Constructor::Signal
        | Constructor::Variable
        | Constructor::Type
        | Constructor::Subtype
        | Constructor::Alias
        | Constructor::Component
        | Constructor::Attribute => construct_declaration(ctx, node).map(AstNode::from),
        Constructor::Name
        | Constructor::Literal
        | Constructor::Unary(_)
        | Constructor::Binary(_)
        | Constructor::Parenthesis
        | Constructor::Aggregate
        | Constructor::FunctionCall => construct_expression(ctx, node).map(AstNode::from),
    }
}

/// Build the library unit of a design unit.
pub fn construct_library_unit(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<LibraryUnit> {
    let unit = match lookup(ctx, node) {
        Some(Constructor::Entity) => LibraryUnit::Entity(ctx.parse(node)?),
        Some(Constructor::Architecture) => LibraryUnit::Architecture(ctx.parse(node)?),
        Some(Constructor::Package) => LibraryUnit::Package(ctx.parse(node)?),
        Some(Constructor::PackageBody) => LibraryUnit::PackageBody(ctx.parse(node)?),
        Some(Constructor::Context) => LibraryUnit::Context(ctx.parse(node)?),
        Some(Constructor::Configuration) => LibraryUnit::Configuration(ctx.parse(node)?),
        _ => return Err(ctx.unsupported(node)),
    };
    Ok(unit)
}

/// Build one element of a context clause.
pub fn construct_context_item(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<ContextItem> {
    let item = match lookup(ctx, node) {
        Some(Constructor::LibraryClause) => ContextItem::Library(ctx.parse(node)?),
        Some(Constructor::UseClause) => ContextItem::Use(ctx.parse(node)?),
        Some(Constructor::ContextReference) => ContextItem::ContextReference(ctx.parse(node)?),
        _ => return Err(ctx.unsupported(node)),
    };
    Ok(item)
}

/// Build one element of a declaration chain.
pub fn construct_declaration(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Declaration> {
    let decl = match lookup(ctx, node) {
        Some(Constructor::Function) => Declaration::Function(ctx.parse(node)?),
        Some(Constructor::Procedure) => Declaration::Procedure(ctx.parse(node)?),
        Some(Constructor::SubprogramBody(kind)) => Declaration::SubprogramBody(
            ctx.descend(node, |ctx| subprogram_body(ctx, node, kind))?,
        ),
        Some(Constructor::Constant) => Declaration::Constant(ctx.parse(node)?),
        Some(Constructor::Signal) => Declaration::Signal(ctx.parse(node)?),
        Some(Constructor::Variable) => Declaration::Variable(ctx.parse(node)?),
        Some(Constructor::Type) => Declaration::Type(ctx.parse(node)?),
        Some(Constructor::Subtype) => Declaration::Subtype(ctx.parse(node)?),
        Some(Constructor::Alias) => Declaration::Alias(ctx.parse(node)?),
        Some(Constructor::Component) => Declaration::Component(ctx.parse(node)?),
        Some(Constructor::Attribute) => Declaration::Attribute(ctx.parse(node)?),
        Some(Constructor::UseClause) => Declaration::Use(ctx.parse(node)?),
        _ => return Err(ctx.unsupported(node)),
    };
    Ok(decl)
}

/// Build an expression.
pub fn construct_expression(ctx: &mut DomCtx<'_>, node: NodeHandle) -> DomResult<Expression> {
    match lookup(ctx, node) {
        Some(
            constructor @ (Constructor::Name
            | Constructor::Literal
            | Constructor::Unary(_)
            | Constructor::Binary(_)
            | Constructor::Parenthesis
            | Constructor::Aggregate
            | Constructor::FunctionCall),
        ) => ctx.descend(node, |ctx| build_expression(ctx, node, constructor)),
        _ => Err(ctx.unsupported(node)),
    }
}
