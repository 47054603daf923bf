//! Node kinds, fields and attribute enumerations reported by the IR.
//!
//! `NodeKind` mirrors the analysis engine's own kind tags. The list is
//! open-ended: new kinds are appended as the engine grows, and consumers are
//! expected to treat unknown positions explicitly rather than skip them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind tag of an IR node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    // === Structure ===
    DesignFile,
    DesignUnit,

    // === Library units ===
    EntityDeclaration,
    ArchitectureBody,
    PackageDeclaration,
    PackageBody,
    ContextDeclaration,
    ConfigurationDeclaration,

    // === Context items ===
    LibraryClause,
    UseClause,
    ContextReference,

    // === Declarations ===
    FunctionDeclaration,
    ProcedureDeclaration,
    FunctionBody,
    ProcedureBody,
    ConstantDeclaration,
    SignalDeclaration,
    VariableDeclaration,
    FileDeclaration,
    TypeDeclaration,
    SubtypeDeclaration,
    AliasDeclaration,
    ComponentDeclaration,
    AttributeDeclaration,
    AttributeSpecification,
    GroupDeclaration,

    // === Interface declarations ===
    InterfaceConstantDeclaration,
    InterfaceSignalDeclaration,
    InterfaceVariableDeclaration,
    InterfaceFileDeclaration,
    InterfaceTypeDeclaration,
    InterfacePackageDeclaration,

    // === Type definitions ===
    EnumerationTypeDefinition,
    IntegerTypeDefinition,
    FloatingTypeDefinition,
    PhysicalTypeDefinition,
    ArrayTypeDefinition,
    RecordTypeDefinition,
    AccessTypeDefinition,
    FileTypeDefinition,

    // === Type components ===
    EnumerationLiteral,
    ElementDeclaration,
    RangeExpression,
    SubtypeDefinition,
    ArraySubtypeDefinition,

    // === Names ===
    SimpleName,
    SelectedName,
    SelectedByAllName,
    AttributeName,
    IndexedName,

    // === Literals ===
    IntegerLiteral,
    FloatingPointLiteral,
    CharacterLiteral,
    StringLiteral,
    PhysicalLiteral,
    NullLiteral,

    // === Unary operators ===
    IdentityOperator,
    NegationOperator,
    AbsoluteOperator,
    NotOperator,

    // === Binary operators ===
    AndOperator,
    OrOperator,
    NandOperator,
    NorOperator,
    XorOperator,
    XnorOperator,
    EqualityOperator,
    InequalityOperator,
    LessThanOperator,
    LessThanOrEqualOperator,
    GreaterThanOperator,
    GreaterThanOrEqualOperator,
    SllOperator,
    SrlOperator,
    SlaOperator,
    SraOperator,
    RolOperator,
    RorOperator,
    AdditionOperator,
    SubtractionOperator,
    ConcatenationOperator,
    MultiplicationOperator,
    DivisionOperator,
    ModulusOperator,
    RemainderOperator,
    ExponentiationOperator,

    // === Other expressions ===
    Parenthesis,
    Aggregate,
    FunctionCall,
    QualifiedExpression,
    TypeConversion,

    // === Associations and choices ===
    AssociationElementPositional,
    AssociationElementByExpression,
    ChoiceByNone,
    ChoiceByExpression,
    ChoiceByOthers,
    ChoiceByRange,

    // === Statements ===
    ProcessStatement,
    ConcurrentSimpleSignalAssignment,
    ComponentInstantiationStatement,
    BlockStatement,
    IfGenerateStatement,
    ForGenerateStatement,
}

/// Coarse grouping of node kinds by the syntactic position they occupy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    Structure,
    LibraryUnit,
    ContextItem,
    Declaration,
    Interface,
    TypeDefinition,
    TypeComponent,
    Name,
    Literal,
    Operator,
    Expression,
    Association,
    Statement,
}

impl NodeKind {
    /// Every kind, in declaration order.
    pub const ALL: &'static [NodeKind] = &[
        NodeKind::DesignFile,
        NodeKind::DesignUnit,
        NodeKind::EntityDeclaration,
        NodeKind::ArchitectureBody,
        NodeKind::PackageDeclaration,
        NodeKind::PackageBody,
        NodeKind::ContextDeclaration,
        NodeKind::ConfigurationDeclaration,
        NodeKind::LibraryClause,
        NodeKind::UseClause,
        NodeKind::ContextReference,
        NodeKind::FunctionDeclaration,
        NodeKind::ProcedureDeclaration,
        NodeKind::FunctionBody,
        NodeKind::ProcedureBody,
        NodeKind::ConstantDeclaration,
        NodeKind::SignalDeclaration,
        NodeKind::VariableDeclaration,
        NodeKind::FileDeclaration,
        NodeKind::TypeDeclaration,
        NodeKind::SubtypeDeclaration,
        NodeKind::AliasDeclaration,
        NodeKind::ComponentDeclaration,
        NodeKind::AttributeDeclaration,
        NodeKind::AttributeSpecification,
        NodeKind::GroupDeclaration,
        NodeKind::InterfaceConstantDeclaration,
        NodeKind::InterfaceSignalDeclaration,
        NodeKind::InterfaceVariableDeclaration,
        NodeKind::InterfaceFileDeclaration,
        NodeKind::InterfaceTypeDeclaration,
        NodeKind::InterfacePackageDeclaration,
        NodeKind::EnumerationTypeDefinition,
        NodeKind::IntegerTypeDefinition,
        NodeKind::FloatingTypeDefinition,
        NodeKind::PhysicalTypeDefinition,
        NodeKind::ArrayTypeDefinition,
        NodeKind::RecordTypeDefinition,
        NodeKind::AccessTypeDefinition,
        NodeKind::FileTypeDefinition,
        NodeKind::EnumerationLiteral,
        NodeKind::ElementDeclaration,
        NodeKind::RangeExpression,
        NodeKind::SubtypeDefinition,
        NodeKind::ArraySubtypeDefinition,
        NodeKind::SimpleName,
        NodeKind::SelectedName,
        NodeKind::SelectedByAllName,
        NodeKind::AttributeName,
        NodeKind::IndexedName,
        NodeKind::IntegerLiteral,
        NodeKind::FloatingPointLiteral,
        NodeKind::CharacterLiteral,
        NodeKind::StringLiteral,
        NodeKind::PhysicalLiteral,
        NodeKind::NullLiteral,
        NodeKind::IdentityOperator,
        NodeKind::NegationOperator,
        NodeKind::AbsoluteOperator,
        NodeKind::NotOperator,
        NodeKind::AndOperator,
        NodeKind::OrOperator,
        NodeKind::NandOperator,
        NodeKind::NorOperator,
        NodeKind::XorOperator,
        NodeKind::XnorOperator,
        NodeKind::EqualityOperator,
        NodeKind::InequalityOperator,
        NodeKind::LessThanOperator,
        NodeKind::LessThanOrEqualOperator,
        NodeKind::GreaterThanOperator,
        NodeKind::GreaterThanOrEqualOperator,
        NodeKind::SllOperator,
        NodeKind::SrlOperator,
        NodeKind::SlaOperator,
        NodeKind::SraOperator,
        NodeKind::RolOperator,
        NodeKind::RorOperator,
        NodeKind::AdditionOperator,
        NodeKind::SubtractionOperator,
        NodeKind::ConcatenationOperator,
        NodeKind::MultiplicationOperator,
        NodeKind::DivisionOperator,
        NodeKind::ModulusOperator,
        NodeKind::RemainderOperator,
        NodeKind::ExponentiationOperator,
        NodeKind::Parenthesis,
        NodeKind::Aggregate,
        NodeKind::FunctionCall,
        NodeKind::QualifiedExpression,
        NodeKind::TypeConversion,
        NodeKind::AssociationElementPositional,
        NodeKind::AssociationElementByExpression,
        NodeKind::ChoiceByNone,
        NodeKind::ChoiceByExpression,
        NodeKind::ChoiceByOthers,
        NodeKind::ChoiceByRange,
        NodeKind::ProcessStatement,
        NodeKind::ConcurrentSimpleSignalAssignment,
        NodeKind::ComponentInstantiationStatement,
        NodeKind::BlockStatement,
        NodeKind::IfGenerateStatement,
        NodeKind::ForGenerateStatement,
    ];

    /// The syntactic position this kind occupies.
    pub fn category(self) -> NodeCategory {
        use NodeKind::*;
        match self {
            DesignFile | DesignUnit => NodeCategory::Structure,
            EntityDeclaration
            | ArchitectureBody
            | PackageDeclaration
            | PackageBody
            | ContextDeclaration
            | ConfigurationDeclaration => NodeCategory::LibraryUnit,
            LibraryClause | UseClause | ContextReference => NodeCategory::ContextItem,
            FunctionDeclaration
            | ProcedureDeclaration
            | FunctionBody
            | ProcedureBody
            | ConstantDeclaration
            | SignalDeclaration
            | VariableDeclaration
            | FileDeclaration
            | TypeDeclaration
            | SubtypeDeclaration
            | AliasDeclaration
            | ComponentDeclaration
            | AttributeDeclaration
            | AttributeSpecification
            | GroupDeclaration => NodeCategory::Declaration,
            InterfaceConstantDeclaration
            | InterfaceSignalDeclaration
            | InterfaceVariableDeclaration
            | InterfaceFileDeclaration
            | InterfaceTypeDeclaration
            | InterfacePackageDeclaration => NodeCategory::Interface,
            EnumerationTypeDefinition
            | IntegerTypeDefinition
            | FloatingTypeDefinition
            | PhysicalTypeDefinition
            | ArrayTypeDefinition
            | RecordTypeDefinition
            | AccessTypeDefinition
            | FileTypeDefinition => NodeCategory::TypeDefinition,
            EnumerationLiteral
            | ElementDeclaration
            | RangeExpression
            | SubtypeDefinition
            | ArraySubtypeDefinition => NodeCategory::TypeComponent,
            SimpleName | SelectedName | SelectedByAllName | AttributeName | IndexedName => {
                NodeCategory::Name
            }
            IntegerLiteral | FloatingPointLiteral | CharacterLiteral | StringLiteral
            | PhysicalLiteral | NullLiteral => NodeCategory::Literal,
            IdentityOperator | NegationOperator | AbsoluteOperator | NotOperator | AndOperator
            | OrOperator | NandOperator | NorOperator | XorOperator | XnorOperator
            | EqualityOperator | InequalityOperator | LessThanOperator
            | LessThanOrEqualOperator | GreaterThanOperator | GreaterThanOrEqualOperator
            | SllOperator | SrlOperator | SlaOperator | SraOperator | RolOperator
            | RorOperator | AdditionOperator | SubtractionOperator | ConcatenationOperator
            | MultiplicationOperator | DivisionOperator | ModulusOperator
            | RemainderOperator | ExponentiationOperator => NodeCategory::Operator,
            Parenthesis | Aggregate | FunctionCall | QualifiedExpression | TypeConversion => {
                NodeCategory::Expression
            }
            AssociationElementPositional
            | AssociationElementByExpression
            | ChoiceByNone
            | ChoiceByExpression
            | ChoiceByOthers
            | ChoiceByRange => NodeCategory::Association,
            ProcessStatement
            | ConcurrentSimpleSignalAssignment
            | ComponentInstantiationStatement
            | BlockStatement
            | IfGenerateStatement
            | ForGenerateStatement => NodeCategory::Statement,
        }
    }

    /// Fields the engine defines for nodes of this kind.
    ///
    /// Querying any other field is a contract violation on the caller's side.
    pub fn fields(self) -> &'static [Field] {
        use Field::*;
        use NodeKind::*;
        match self {
            DesignFile => &[DesignUnits],
            DesignUnit => &[ContextItems, LibraryUnit],
            EntityDeclaration => &[GenericChain, PortChain, DeclarationChain, StatementChain],
            ArchitectureBody => &[EntityName, DeclarationChain, StatementChain],
            PackageDeclaration => &[GenericChain, DeclarationChain],
            PackageBody => &[DeclarationChain],
            ContextDeclaration => &[ContextItems],
            ConfigurationDeclaration => &[EntityName, DeclarationChain],
            LibraryClause => &[],
            UseClause | ContextReference => &[NameChain],
            FunctionDeclaration => &[GenericChain, InterfaceChain, ReturnTypeMark],
            ProcedureDeclaration => &[GenericChain, InterfaceChain],
            FunctionBody | ProcedureBody => {
                &[SubprogramSpecification, DeclarationChain, StatementChain]
            }
            ConstantDeclaration | SignalDeclaration | VariableDeclaration | FileDeclaration => {
                &[SubtypeIndication, DefaultValue]
            }
            TypeDeclaration => &[TypeDefinition],
            SubtypeDeclaration => &[SubtypeIndication],
            AliasDeclaration => &[SubtypeIndication, Name],
            ComponentDeclaration => &[GenericChain, PortChain],
            AttributeDeclaration => &[TypeMark],
            AttributeSpecification => &[Name, Expression],
            GroupDeclaration => &[NameChain],
            InterfaceConstantDeclaration
            | InterfaceSignalDeclaration
            | InterfaceVariableDeclaration
            | InterfaceFileDeclaration => &[SubtypeIndication, DefaultValue],
            InterfaceTypeDeclaration => &[],
            InterfacePackageDeclaration => &[Name],
            EnumerationTypeDefinition => &[EnumerationLiterals],
            IntegerTypeDefinition | FloatingTypeDefinition | PhysicalTypeDefinition => {
                &[RangeConstraint]
            }
            ArrayTypeDefinition => &[IndexSubtypes, ElementSubtype],
            RecordTypeDefinition => &[ElementDeclarations],
            AccessTypeDefinition | FileTypeDefinition => &[DesignatedSubtype],
            EnumerationLiteral => &[],
            ElementDeclaration => &[SubtypeIndication],
            RangeExpression => &[Left, Right],
            SubtypeDefinition => &[SubtypeTypeMark, RangeConstraint],
            ArraySubtypeDefinition => &[SubtypeTypeMark, IndexConstraints],
            SimpleName => &[],
            SelectedName | SelectedByAllName => &[Prefix],
            AttributeName => &[Prefix],
            IndexedName => &[Prefix, AssociationChain],
            IntegerLiteral | FloatingPointLiteral | CharacterLiteral | StringLiteral
            | NullLiteral => &[],
            PhysicalLiteral => &[Unit],
            IdentityOperator | NegationOperator | AbsoluteOperator | NotOperator => &[Operand],
            AndOperator | OrOperator | NandOperator | NorOperator | XorOperator | XnorOperator
            | EqualityOperator | InequalityOperator | LessThanOperator
            | LessThanOrEqualOperator | GreaterThanOperator | GreaterThanOrEqualOperator
            | SllOperator | SrlOperator | SlaOperator | SraOperator | RolOperator
            | RorOperator | AdditionOperator | SubtractionOperator | ConcatenationOperator
            | MultiplicationOperator | DivisionOperator | ModulusOperator
            | RemainderOperator | ExponentiationOperator => &[Left, Right],
            Parenthesis => &[Expression],
            Aggregate => &[AssociationChain],
            FunctionCall => &[Prefix, AssociationChain],
            QualifiedExpression | TypeConversion => &[TypeMark, Expression],
            AssociationElementPositional => &[Actual],
            AssociationElementByExpression => &[Formal, Actual],
            ChoiceByNone | ChoiceByOthers => &[AssociatedExpr],
            ChoiceByExpression => &[ChoiceExpression, AssociatedExpr],
            ChoiceByRange => &[ChoiceRange, AssociatedExpr],
            ProcessStatement => &[DeclarationChain, StatementChain],
            ConcurrentSimpleSignalAssignment => &[Target, Expression],
            ComponentInstantiationStatement => &[Name, AssociationChain],
            BlockStatement => &[DeclarationChain, StatementChain],
            IfGenerateStatement | ForGenerateStatement => &[StatementChain],
        }
    }

    /// Whether the engine defines `field` for this kind.
    pub fn has_field(self, field: Field) -> bool {
        self.fields().contains(&field)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Named child or attribute edge of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    DesignUnits,
    ContextItems,
    LibraryUnit,
    GenericChain,
    PortChain,
    InterfaceChain,
    DeclarationChain,
    StatementChain,
    EntityName,
    NameChain,
    ReturnTypeMark,
    SubprogramSpecification,
    SubtypeIndication,
    DefaultValue,
    TypeDefinition,
    TypeMark,
    Name,
    EnumerationLiterals,
    RangeConstraint,
    IndexSubtypes,
    IndexConstraints,
    ElementSubtype,
    ElementDeclarations,
    DesignatedSubtype,
    SubtypeTypeMark,
    Left,
    Right,
    Operand,
    Prefix,
    Unit,
    Expression,
    AssociationChain,
    Actual,
    Formal,
    AssociatedExpr,
    ChoiceExpression,
    ChoiceRange,
    Target,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Port and parameter mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    In,
    Out,
    InOut,
    Buffer,
    Linkage,
}

/// Direction of a range constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    To,
    Downto,
}

/// Boolean node flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    /// Variable declared `shared`.
    Shared,
    /// Function declared `impure`.
    Impure,
}

/// Literal value carried by a literal node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Integer(i64),
    Real(f64),
    Character(char),
    String(String),
}
