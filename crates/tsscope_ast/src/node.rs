//! Node definitions.
//!
//! This is the node-shape contract of the analyzer: each node kind has a fixed
//! set of children, and the [`SyntaxKind`] in its [`NodeData`] must agree with
//! the struct that carries it. Children are arena references; lists are arena
//! slices and an empty slice means "absent" for optional lists.

use crate::syntax_kind::SyntaxKind;
use crate::types::*;
use tsscope_core::intern::{InternedString, StringInterner};
use tsscope_core::text::TextRange;

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all nodes.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub kind: SyntaxKind,
    pub range: TextRange,
    pub flags: NodeFlags,
    pub modifier_flags: ModifierFlags,
    pub id: NodeId,
}

impl NodeData {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            kind,
            range: TextRange::new(pos, end),
            flags: NodeFlags::NONE,
            modifier_flags: ModifierFlags::NONE,
            id: NodeId::INVALID,
        }
    }

    pub fn with_id(mut self, id: NodeId) -> Self {
        self.id = id;
        self
    }

    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_modifiers(mut self, modifiers: ModifierFlags) -> Self {
        self.modifier_flags = modifiers;
        self
    }

    #[inline]
    pub fn has_modifier(&self, modifier: ModifierFlags) -> bool {
        self.modifier_flags.contains(modifier)
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

/// An optional arena-allocated node.
pub type OptionalNode<'a, T> = Option<&'a T>;

// ============================================================================
// Source File
// ============================================================================

#[derive(Debug)]
pub struct SourceFile<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
    pub file_name: String,
    /// `.d.ts` files: every declaration is ambient.
    pub is_declaration_file: bool,
    /// The interner that produced every [`Identifier::text`] in this tree.
    pub interner: StringInterner,
}

// ============================================================================
// Names
// ============================================================================

#[derive(Debug, Clone)]
pub struct Identifier {
    pub data: NodeData,
    pub text: InternedString,
}

#[derive(Debug)]
pub enum EntityName<'a> {
    Identifier(Identifier),
    QualifiedName(&'a QualifiedName<'a>),
}

impl<'a> EntityName<'a> {
    /// The leftmost identifier: the only part of a qualified name that is
    /// looked up in scope.
    pub fn leftmost(&self) -> &Identifier {
        match self {
            EntityName::Identifier(id) => id,
            EntityName::QualifiedName(q) => q.left.leftmost(),
        }
    }

    pub fn data(&self) -> &NodeData {
        match self {
            EntityName::Identifier(id) => &id.data,
            EntityName::QualifiedName(q) => &q.data,
        }
    }
}

#[derive(Debug)]
pub struct QualifiedName<'a> {
    pub data: NodeData,
    pub left: EntityName<'a>,
    pub right: Identifier,
}

#[derive(Debug)]
pub struct ComputedPropertyName<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

/// The name of a property, member or enum member. Only computed names
/// contain references.
#[derive(Debug)]
pub enum PropertyName<'a> {
    Identifier(Identifier),
    StringLiteral(LiteralExpression),
    NumericLiteral(LiteralExpression),
    Computed(&'a ComputedPropertyName<'a>),
    PrivateIdentifier(Identifier),
}

impl<'a> PropertyName<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            PropertyName::Identifier(id) | PropertyName::PrivateIdentifier(id) => &id.data,
            PropertyName::StringLiteral(lit) | PropertyName::NumericLiteral(lit) => &lit.data,
            PropertyName::Computed(c) => &c.data,
        }
    }
}

#[derive(Debug)]
pub enum BindingName<'a> {
    Identifier(Identifier),
    ObjectBindingPattern(&'a ObjectBindingPattern<'a>),
    ArrayBindingPattern(&'a ArrayBindingPattern<'a>),
}

impl<'a> BindingName<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            BindingName::Identifier(id) => &id.data,
            BindingName::ObjectBindingPattern(p) => &p.data,
            BindingName::ArrayBindingPattern(p) => &p.data,
        }
    }
}

// ============================================================================
// Binding Patterns
// ============================================================================

#[derive(Debug)]
pub struct ObjectBindingPattern<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, BindingElement<'a>>,
}

#[derive(Debug)]
pub struct ArrayBindingPattern<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, ArrayBindingElement<'a>>,
}

#[derive(Debug)]
pub enum ArrayBindingElement<'a> {
    BindingElement(BindingElement<'a>),
    /// A hole, as in `[, b]`.
    OmittedExpression(NodeData),
}

#[derive(Debug)]
pub struct BindingElement<'a> {
    pub data: NodeData,
    pub dot_dot_dot: bool,
    /// `a` in `{ a: b }`. Absent for shorthand and array elements.
    pub property_name: Option<PropertyName<'a>>,
    pub name: BindingName<'a>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

// ============================================================================
// Type Nodes
// ============================================================================

#[derive(Debug)]
pub enum TypeNode<'a> {
    Keyword(KeywordTypeNode),
    TypeReference(TypeReferenceNode<'a>),
    FunctionType(FunctionTypeNode<'a>),
    TypeQuery(TypeQueryNode<'a>),
    TypeLiteral(TypeLiteralNode<'a>),
    ArrayType(ArrayTypeNode<'a>),
    TupleType(TupleTypeNode<'a>),
    NamedTupleMember(NamedTupleMemberNode<'a>),
    OptionalType(WrappedTypeNode<'a>),
    RestType(WrappedTypeNode<'a>),
    UnionType(UnionOrIntersectionTypeNode<'a>),
    IntersectionType(UnionOrIntersectionTypeNode<'a>),
    ConditionalType(ConditionalTypeNode<'a>),
    InferType(InferTypeNode<'a>),
    ParenthesizedType(WrappedTypeNode<'a>),
    ThisType(NodeData),
    TypeOperator(TypeOperatorNode<'a>),
    IndexedAccessType(IndexedAccessTypeNode<'a>),
    MappedType(MappedTypeNode<'a>),
    LiteralType(LiteralTypeNode<'a>),
    TemplateLiteralType(TemplateLiteralTypeNode<'a>),
    ImportType(ImportTypeNode<'a>),
    TypePredicate(TypePredicateNode<'a>),
}

impl<'a> TypeNode<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            TypeNode::Keyword(n) => &n.data,
            TypeNode::TypeReference(n) => &n.data,
            TypeNode::FunctionType(n) => &n.data,
            TypeNode::TypeQuery(n) => &n.data,
            TypeNode::TypeLiteral(n) => &n.data,
            TypeNode::ArrayType(n) => &n.data,
            TypeNode::TupleType(n) => &n.data,
            TypeNode::NamedTupleMember(n) => &n.data,
            TypeNode::OptionalType(n) | TypeNode::RestType(n) | TypeNode::ParenthesizedType(n) => {
                &n.data
            }
            TypeNode::UnionType(n) | TypeNode::IntersectionType(n) => &n.data,
            TypeNode::ConditionalType(n) => &n.data,
            TypeNode::InferType(n) => &n.data,
            TypeNode::ThisType(data) => data,
            TypeNode::TypeOperator(n) => &n.data,
            TypeNode::IndexedAccessType(n) => &n.data,
            TypeNode::MappedType(n) => &n.data,
            TypeNode::LiteralType(n) => &n.data,
            TypeNode::TemplateLiteralType(n) => &n.data,
            TypeNode::ImportType(n) => &n.data,
            TypeNode::TypePredicate(n) => &n.data,
        }
    }
}

#[derive(Debug)]
pub struct KeywordTypeNode {
    pub data: NodeData,
    /// One of the type keywords, e.g. `NumberKeyword`.
    pub keyword: SyntaxKind,
}

#[derive(Debug)]
pub struct TypeReferenceNode<'a> {
    pub data: NodeData,
    pub type_name: EntityName<'a>,
    pub type_arguments: NodeList<'a, TypeNode<'a>>,
}

/// `(a: A) => R`, or `new (a: A) => R` when `is_constructor` is set.
#[derive(Debug)]
pub struct FunctionTypeNode<'a> {
    pub data: NodeData,
    pub is_constructor: bool,
    pub type_parameters: NodeList<'a, TypeParameterDeclaration<'a>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
}

/// `typeof x.y` in a type position.
#[derive(Debug)]
pub struct TypeQueryNode<'a> {
    pub data: NodeData,
    pub expr_name: EntityName<'a>,
    pub type_arguments: NodeList<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct TypeLiteralNode<'a> {
    pub data: NodeData,
    pub members: NodeList<'a, TypeElement<'a>>,
}

#[derive(Debug)]
pub struct ArrayTypeNode<'a> {
    pub data: NodeData,
    pub element_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct TupleTypeNode<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct NamedTupleMemberNode<'a> {
    pub data: NodeData,
    pub dot_dot_dot: bool,
    pub name: Identifier,
    pub optional: bool,
    pub type_node: &'a TypeNode<'a>,
}

/// Optional `T?`, rest `...T` and parenthesized `(T)` types.
#[derive(Debug)]
pub struct WrappedTypeNode<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct UnionOrIntersectionTypeNode<'a> {
    pub data: NodeData,
    pub types: NodeList<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct ConditionalTypeNode<'a> {
    pub data: NodeData,
    pub check_type: &'a TypeNode<'a>,
    pub extends_type: &'a TypeNode<'a>,
    pub true_type: &'a TypeNode<'a>,
    pub false_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct InferTypeNode<'a> {
    pub data: NodeData,
    pub type_parameter: &'a TypeParameterDeclaration<'a>,
}

#[derive(Debug)]
pub struct TypeOperatorNode<'a> {
    pub data: NodeData,
    /// `KeyOfKeyword`, `UniqueKeyword` or `ReadonlyKeyword`.
    pub operator: SyntaxKind,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct IndexedAccessTypeNode<'a> {
    pub data: NodeData,
    pub object_type: &'a TypeNode<'a>,
    pub index_type: &'a TypeNode<'a>,
}

/// `{ [K in C as N]: T }`
#[derive(Debug)]
pub struct MappedTypeNode<'a> {
    pub data: NodeData,
    pub type_parameter: &'a TypeParameterDeclaration<'a>,
    pub name_type: OptionalNode<'a, TypeNode<'a>>,
    pub type_node: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct LiteralTypeNode<'a> {
    pub data: NodeData,
    /// A literal, or a negated numeric literal.
    pub literal: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct TemplateLiteralTypeNode<'a> {
    pub data: NodeData,
    pub types: NodeList<'a, TypeNode<'a>>,
}

/// `import("mod").A.B<T>`; the qualifier names members of another module.
#[derive(Debug)]
pub struct ImportTypeNode<'a> {
    pub data: NodeData,
    pub is_type_of: bool,
    pub argument: &'a TypeNode<'a>,
    pub qualifier: Option<EntityName<'a>>,
    pub type_arguments: NodeList<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct TypePredicateNode<'a> {
    pub data: NodeData,
    pub asserts: bool,
    pub parameter_name: TypePredicateParameterName,
    pub type_node: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub enum TypePredicateParameterName {
    Identifier(Identifier),
    ThisType(NodeData),
}

/// An entry of an `extends`/`implements` clause.
#[derive(Debug)]
pub struct ExpressionWithTypeArguments<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_arguments: NodeList<'a, TypeNode<'a>>,
}

// ============================================================================
// Type Elements (Interface/Object type members)
// ============================================================================

#[derive(Debug)]
pub enum TypeElement<'a> {
    PropertySignature(PropertySignatureNode<'a>),
    MethodSignature(MethodSignatureNode<'a>),
    CallSignature(CallSignatureNode<'a>),
    IndexSignature(IndexSignatureNode<'a>),
}

impl<'a> TypeElement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            TypeElement::PropertySignature(n) => &n.data,
            TypeElement::MethodSignature(n) => &n.data,
            TypeElement::CallSignature(n) => &n.data,
            TypeElement::IndexSignature(n) => &n.data,
        }
    }
}

#[derive(Debug)]
pub struct PropertySignatureNode<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub optional: bool,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct MethodSignatureNode<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub optional: bool,
    pub type_parameters: NodeList<'a, TypeParameterDeclaration<'a>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
}

/// `(a: A): R` or, with `is_construct`, `new (a: A): R`.
#[derive(Debug)]
pub struct CallSignatureNode<'a> {
    pub data: NodeData,
    pub is_construct: bool,
    pub type_parameters: NodeList<'a, TypeParameterDeclaration<'a>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct IndexSignatureNode<'a> {
    pub data: NodeData,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
}

// ============================================================================
// Shared declaration parts
// ============================================================================

#[derive(Debug)]
pub struct TypeParameterDeclaration<'a> {
    pub data: NodeData,
    pub name: Identifier,
    pub constraint: OptionalNode<'a, TypeNode<'a>>,
    pub default: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct ParameterDeclaration<'a> {
    pub data: NodeData,
    pub decorators: NodeList<'a, Decorator<'a>>,
    pub dot_dot_dot: bool,
    pub name: BindingName<'a>,
    pub optional: bool,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct Decorator<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct HeritageClause<'a> {
    pub data: NodeData,
    /// `ExtendsKeyword` or `ImplementsKeyword`.
    pub token: SyntaxKind,
    pub types: NodeList<'a, ExpressionWithTypeArguments<'a>>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug)]
pub enum Expression<'a> {
    Identifier(Identifier),
    Literal(LiteralExpression),
    Template(TemplateExpression<'a>),
    ArrayLiteral(ArrayLiteralExpression<'a>),
    ObjectLiteral(ObjectLiteralExpression<'a>),
    PropertyAccess(PropertyAccessExpression<'a>),
    ElementAccess(ElementAccessExpression<'a>),
    Call(CallExpression<'a>),
    New(NewExpression<'a>),
    TaggedTemplate(TaggedTemplateExpression<'a>),
    Parenthesized(ParenthesizedExpression<'a>),
    Function(FunctionExpression<'a>),
    Arrow(ArrowFunction<'a>),
    Class(ClassDeclaration<'a>),
    Unary(UnaryExpression<'a>),
    Update(UpdateExpression<'a>),
    Binary(BinaryExpression<'a>),
    Conditional(ConditionalExpression<'a>),
    Yield(YieldExpression<'a>),
    Spread(SpreadElement<'a>),
    As(TypedExpression<'a>),
    Satisfies(TypedExpression<'a>),
    TypeAssertion(TypedExpression<'a>),
    NonNull(NonNullExpression<'a>),
    MetaProperty(MetaPropertyExpression),
    Omitted(NodeData),
    This(NodeData),
    Super(NodeData),
}

impl<'a> Expression<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Expression::Identifier(n) => &n.data,
            Expression::Literal(n) => &n.data,
            Expression::Template(n) => &n.data,
            Expression::ArrayLiteral(n) => &n.data,
            Expression::ObjectLiteral(n) => &n.data,
            Expression::PropertyAccess(n) => &n.data,
            Expression::ElementAccess(n) => &n.data,
            Expression::Call(n) => &n.data,
            Expression::New(n) => &n.data,
            Expression::TaggedTemplate(n) => &n.data,
            Expression::Parenthesized(n) => &n.data,
            Expression::Function(n) => &n.data,
            Expression::Arrow(n) => &n.data,
            Expression::Class(n) => &n.data,
            Expression::Unary(n) => &n.data,
            Expression::Update(n) => &n.data,
            Expression::Binary(n) => &n.data,
            Expression::Conditional(n) => &n.data,
            Expression::Yield(n) => &n.data,
            Expression::Spread(n) => &n.data,
            Expression::As(n) | Expression::Satisfies(n) | Expression::TypeAssertion(n) => &n.data,
            Expression::NonNull(n) => &n.data,
            Expression::MetaProperty(n) => &n.data,
            Expression::Omitted(data) | Expression::This(data) | Expression::Super(data) => data,
        }
    }

    /// Strip parentheses and type-only wrappers, which are transparent for
    /// assignment targets.
    pub fn skip_outer_expressions(&self) -> &Expression<'a> {
        let mut expr = self;
        loop {
            match expr {
                Expression::Parenthesized(p) => expr = p.expression,
                Expression::As(t) | Expression::Satisfies(t) | Expression::TypeAssertion(t) => {
                    expr = t.expression
                }
                Expression::NonNull(n) => expr = n.expression,
                _ => return expr,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    Numeric,
    BigInt,
    RegularExpression,
    NoSubstitutionTemplate,
    True,
    False,
    Null,
}

#[derive(Debug, Clone)]
pub struct LiteralExpression {
    pub data: NodeData,
    pub literal_kind: LiteralKind,
    pub text: InternedString,
}

#[derive(Debug)]
pub struct TemplateExpression<'a> {
    pub data: NodeData,
    pub spans: NodeList<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct ArrayLiteralExpression<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct ObjectLiteralExpression<'a> {
    pub data: NodeData,
    pub properties: NodeList<'a, ObjectLiteralElement<'a>>,
}

#[derive(Debug)]
pub enum ObjectLiteralElement<'a> {
    PropertyAssignment(PropertyAssignment<'a>),
    ShorthandPropertyAssignment(ShorthandPropertyAssignment<'a>),
    SpreadAssignment(SpreadAssignment<'a>),
    Method(MethodDeclaration<'a>),
}

#[derive(Debug)]
pub struct PropertyAssignment<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub initializer: &'a Expression<'a>,
}

/// `{ a }`, or `{ a = 1 }` inside a destructuring assignment target.
#[derive(Debug)]
pub struct ShorthandPropertyAssignment<'a> {
    pub data: NodeData,
    pub name: Identifier,
    pub object_assignment_initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct SpreadAssignment<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct PropertyAccessExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    /// Member name; never a scope reference.
    pub name: Identifier,
}

#[derive(Debug)]
pub struct ElementAccessExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub argument_expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct CallExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_arguments: NodeList<'a, TypeNode<'a>>,
    pub arguments: NodeList<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct NewExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_arguments: NodeList<'a, TypeNode<'a>>,
    pub arguments: NodeList<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct TaggedTemplateExpression<'a> {
    pub data: NodeData,
    pub tag: &'a Expression<'a>,
    pub type_arguments: NodeList<'a, TypeNode<'a>>,
    pub template: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ParenthesizedExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct FunctionExpression<'a> {
    pub data: NodeData,
    pub name: Option<Identifier>,
    pub type_parameters: NodeList<'a, TypeParameterDeclaration<'a>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
    pub body: Block<'a>,
}

#[derive(Debug)]
pub struct ArrowFunction<'a> {
    pub data: NodeData,
    pub type_parameters: NodeList<'a, TypeParameterDeclaration<'a>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
    pub body: ArrowFunctionBody<'a>,
}

#[derive(Debug)]
pub enum ArrowFunctionBody<'a> {
    Block(&'a Block<'a>),
    Expression(&'a Expression<'a>),
}

/// Prefix operators, including `typeof`, `void`, `delete` and `await`.
#[derive(Debug)]
pub struct UnaryExpression<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind,
    pub operand: &'a Expression<'a>,
}

/// `++x`, `x--`, etc.
#[derive(Debug)]
pub struct UpdateExpression<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind,
    pub prefix: bool,
    pub operand: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct BinaryExpression<'a> {
    pub data: NodeData,
    pub left: &'a Expression<'a>,
    pub operator: SyntaxKind,
    pub right: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ConditionalExpression<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub when_true: &'a Expression<'a>,
    pub when_false: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct YieldExpression<'a> {
    pub data: NodeData,
    pub delegate: bool,
    pub expression: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct SpreadElement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

/// `e as T`, `e satisfies T` and `<T>e`.
#[derive(Debug)]
pub struct TypedExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct NonNullExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

/// `new.target` or `import.meta`.
#[derive(Debug)]
pub struct MetaPropertyExpression {
    pub data: NodeData,
    pub keyword: SyntaxKind,
    pub name: Identifier,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug)]
pub enum Statement<'a> {
    VariableStatement(VariableStatement<'a>),
    FunctionDeclaration(FunctionDeclaration<'a>),
    ClassDeclaration(ClassDeclaration<'a>),
    InterfaceDeclaration(InterfaceDeclaration<'a>),
    TypeAliasDeclaration(TypeAliasDeclaration<'a>),
    EnumDeclaration(EnumDeclaration<'a>),
    ModuleDeclaration(ModuleDeclaration<'a>),
    ImportDeclaration(ImportDeclaration<'a>),
    ImportEqualsDeclaration(ImportEqualsDeclaration<'a>),
    ExportDeclaration(ExportDeclaration<'a>),
    ExportAssignment(ExportAssignment<'a>),
    NamespaceExportDeclaration(NamespaceExportDeclaration),
    Block(Block<'a>),
    EmptyStatement(NodeData),
    ExpressionStatement(ExpressionStatement<'a>),
    IfStatement(IfStatement<'a>),
    DoStatement(DoStatement<'a>),
    WhileStatement(WhileStatement<'a>),
    ForStatement(ForStatement<'a>),
    ForInStatement(ForInOrOfStatement<'a>),
    ForOfStatement(ForInOrOfStatement<'a>),
    ContinueStatement(JumpStatement),
    BreakStatement(JumpStatement),
    ReturnStatement(ReturnStatement<'a>),
    WithStatement(WithStatement<'a>),
    SwitchStatement(SwitchStatement<'a>),
    LabeledStatement(LabeledStatement<'a>),
    ThrowStatement(ThrowStatement<'a>),
    TryStatement(TryStatement<'a>),
    DebuggerStatement(NodeData),
}

impl<'a> Statement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Statement::VariableStatement(n) => &n.data,
            Statement::FunctionDeclaration(n) => &n.data,
            Statement::ClassDeclaration(n) => &n.data,
            Statement::InterfaceDeclaration(n) => &n.data,
            Statement::TypeAliasDeclaration(n) => &n.data,
            Statement::EnumDeclaration(n) => &n.data,
            Statement::ModuleDeclaration(n) => &n.data,
            Statement::ImportDeclaration(n) => &n.data,
            Statement::ImportEqualsDeclaration(n) => &n.data,
            Statement::ExportDeclaration(n) => &n.data,
            Statement::ExportAssignment(n) => &n.data,
            Statement::NamespaceExportDeclaration(n) => &n.data,
            Statement::Block(n) => &n.data,
            Statement::EmptyStatement(data) | Statement::DebuggerStatement(data) => data,
            Statement::ExpressionStatement(n) => &n.data,
            Statement::IfStatement(n) => &n.data,
            Statement::DoStatement(n) => &n.data,
            Statement::WhileStatement(n) => &n.data,
            Statement::ForStatement(n) => &n.data,
            Statement::ForInStatement(n) | Statement::ForOfStatement(n) => &n.data,
            Statement::ContinueStatement(n) | Statement::BreakStatement(n) => &n.data,
            Statement::ReturnStatement(n) => &n.data,
            Statement::WithStatement(n) => &n.data,
            Statement::SwitchStatement(n) => &n.data,
            Statement::LabeledStatement(n) => &n.data,
            Statement::ThrowStatement(n) => &n.data,
            Statement::TryStatement(n) => &n.data,
        }
    }

    /// Mutable access for tree producers that attach modifiers after
    /// building a statement.
    pub fn data_mut(&mut self) -> &mut NodeData {
        match self {
            Statement::VariableStatement(n) => &mut n.data,
            Statement::FunctionDeclaration(n) => &mut n.data,
            Statement::ClassDeclaration(n) => &mut n.data,
            Statement::InterfaceDeclaration(n) => &mut n.data,
            Statement::TypeAliasDeclaration(n) => &mut n.data,
            Statement::EnumDeclaration(n) => &mut n.data,
            Statement::ModuleDeclaration(n) => &mut n.data,
            Statement::ImportDeclaration(n) => &mut n.data,
            Statement::ImportEqualsDeclaration(n) => &mut n.data,
            Statement::ExportDeclaration(n) => &mut n.data,
            Statement::ExportAssignment(n) => &mut n.data,
            Statement::NamespaceExportDeclaration(n) => &mut n.data,
            Statement::Block(n) => &mut n.data,
            Statement::EmptyStatement(data) | Statement::DebuggerStatement(data) => data,
            Statement::ExpressionStatement(n) => &mut n.data,
            Statement::IfStatement(n) => &mut n.data,
            Statement::DoStatement(n) => &mut n.data,
            Statement::WhileStatement(n) => &mut n.data,
            Statement::ForStatement(n) => &mut n.data,
            Statement::ForInStatement(n) | Statement::ForOfStatement(n) => &mut n.data,
            Statement::ContinueStatement(n) | Statement::BreakStatement(n) => &mut n.data,
            Statement::ReturnStatement(n) => &mut n.data,
            Statement::WithStatement(n) => &mut n.data,
            Statement::SwitchStatement(n) => &mut n.data,
            Statement::LabeledStatement(n) => &mut n.data,
            Statement::ThrowStatement(n) => &mut n.data,
            Statement::TryStatement(n) => &mut n.data,
        }
    }
}

#[derive(Debug)]
pub struct Block<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct VariableStatement<'a> {
    pub data: NodeData,
    pub declaration_list: VariableDeclarationList<'a>,
}

/// `LET`, `CONST`, `USING` or `AWAIT_USING` in the flags select the
/// declaration keyword; none of them means `var`.
#[derive(Debug)]
pub struct VariableDeclarationList<'a> {
    pub data: NodeData,
    pub declarations: NodeList<'a, VariableDeclaration<'a>>,
}

#[derive(Debug)]
pub struct VariableDeclaration<'a> {
    pub data: NodeData,
    pub name: BindingName<'a>,
    pub definite: bool,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct ExpressionStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct IfStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub then_statement: &'a Statement<'a>,
    pub else_statement: OptionalNode<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct DoStatement<'a> {
    pub data: NodeData,
    pub statement: &'a Statement<'a>,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct WhileStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct ForStatement<'a> {
    pub data: NodeData,
    pub initializer: Option<ForInitializer<'a>>,
    pub condition: OptionalNode<'a, Expression<'a>>,
    pub incrementor: OptionalNode<'a, Expression<'a>>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub enum ForInitializer<'a> {
    VariableDeclarationList(VariableDeclarationList<'a>),
    Expression(&'a Expression<'a>),
}

/// `for (x in o)` and `for (x of it)`; the kind tag tells them apart.
#[derive(Debug)]
pub struct ForInOrOfStatement<'a> {
    pub data: NodeData,
    pub is_await: bool,
    pub initializer: ForInitializer<'a>,
    pub expression: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
}

/// `break` and `continue`. Labels are not scope references.
#[derive(Debug)]
pub struct JumpStatement {
    pub data: NodeData,
    pub label: Option<Identifier>,
}

#[derive(Debug)]
pub struct ReturnStatement<'a> {
    pub data: NodeData,
    pub expression: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct WithStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct SwitchStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub case_block: CaseBlock<'a>,
}

#[derive(Debug)]
pub struct CaseBlock<'a> {
    pub data: NodeData,
    pub clauses: NodeList<'a, CaseClause<'a>>,
}

/// A `case` clause, or the `default` clause when `expression` is absent.
#[derive(Debug)]
pub struct CaseClause<'a> {
    pub data: NodeData,
    pub expression: OptionalNode<'a, Expression<'a>>,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct LabeledStatement<'a> {
    pub data: NodeData,
    pub label: Identifier,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct ThrowStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct TryStatement<'a> {
    pub data: NodeData,
    pub try_block: Block<'a>,
    pub catch_clause: Option<CatchClause<'a>>,
    pub finally_block: Option<Block<'a>>,
}

#[derive(Debug)]
pub struct CatchClause<'a> {
    pub data: NodeData,
    pub variable_declaration: Option<VariableDeclaration<'a>>,
    pub block: Block<'a>,
}

// ============================================================================
// Declarations
// ============================================================================

/// A function declaration. Without a body it is an overload signature or an
/// ambient declaration.
#[derive(Debug)]
pub struct FunctionDeclaration<'a> {
    pub data: NodeData,
    /// Absent only for `export default function () {}`.
    pub name: Option<Identifier>,
    pub type_parameters: NodeList<'a, TypeParameterDeclaration<'a>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
    pub body: Option<Block<'a>>,
}

/// Class declarations and class expressions share this shape; the kind tag is
/// `ClassDeclaration` or `ClassExpression` accordingly.
#[derive(Debug)]
pub struct ClassDeclaration<'a> {
    pub data: NodeData,
    pub decorators: NodeList<'a, Decorator<'a>>,
    pub name: Option<Identifier>,
    pub type_parameters: NodeList<'a, TypeParameterDeclaration<'a>>,
    pub heritage_clauses: NodeList<'a, HeritageClause<'a>>,
    pub members: NodeList<'a, ClassElement<'a>>,
}

#[derive(Debug)]
pub enum ClassElement<'a> {
    Property(PropertyDeclaration<'a>),
    Method(MethodDeclaration<'a>),
    Constructor(ConstructorDeclaration<'a>),
    IndexSignature(IndexSignatureNode<'a>),
    StaticBlock(ClassStaticBlockDeclaration<'a>),
    Semicolon(NodeData),
}

#[derive(Debug)]
pub struct PropertyDeclaration<'a> {
    pub data: NodeData,
    pub decorators: NodeList<'a, Decorator<'a>>,
    pub name: PropertyName<'a>,
    pub optional: bool,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Method,
    Get,
    Set,
}

impl MethodKind {
    pub fn syntax_kind(self) -> SyntaxKind {
        match self {
            MethodKind::Method => SyntaxKind::MethodDeclaration,
            MethodKind::Get => SyntaxKind::GetAccessor,
            MethodKind::Set => SyntaxKind::SetAccessor,
        }
    }
}

/// Methods and accessors of classes and object literals.
#[derive(Debug)]
pub struct MethodDeclaration<'a> {
    pub data: NodeData,
    pub decorators: NodeList<'a, Decorator<'a>>,
    pub method_kind: MethodKind,
    pub name: PropertyName<'a>,
    pub type_parameters: NodeList<'a, TypeParameterDeclaration<'a>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
    pub body: Option<Block<'a>>,
}

#[derive(Debug)]
pub struct ConstructorDeclaration<'a> {
    pub data: NodeData,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub body: Option<Block<'a>>,
}

#[derive(Debug)]
pub struct ClassStaticBlockDeclaration<'a> {
    pub data: NodeData,
    pub body: Block<'a>,
}

#[derive(Debug)]
pub struct InterfaceDeclaration<'a> {
    pub data: NodeData,
    pub name: Identifier,
    pub type_parameters: NodeList<'a, TypeParameterDeclaration<'a>>,
    pub heritage_clauses: NodeList<'a, HeritageClause<'a>>,
    pub members: NodeList<'a, TypeElement<'a>>,
}

#[derive(Debug)]
pub struct TypeAliasDeclaration<'a> {
    pub data: NodeData,
    pub name: Identifier,
    pub type_parameters: NodeList<'a, TypeParameterDeclaration<'a>>,
    pub type_node: &'a TypeNode<'a>,
}

/// `CONST` in the modifier flags marks a `const enum`.
#[derive(Debug)]
pub struct EnumDeclaration<'a> {
    pub data: NodeData,
    pub name: Identifier,
    pub members: NodeList<'a, EnumMemberNode<'a>>,
}

#[derive(Debug)]
pub struct EnumMemberNode<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

/// `namespace A {}`, `module "m" {}` and `declare global {}`.
#[derive(Debug)]
pub struct ModuleDeclaration<'a> {
    pub data: NodeData,
    pub name: ModuleName,
    pub body: Option<ModuleBody<'a>>,
}

#[derive(Debug)]
pub enum ModuleName {
    Identifier(Identifier),
    StringLiteral(LiteralExpression),
}

#[derive(Debug)]
pub enum ModuleBody<'a> {
    Block(ModuleBlock<'a>),
    /// The inner part of `namespace A.B {}`.
    Namespace(&'a ModuleDeclaration<'a>),
}

#[derive(Debug)]
pub struct ModuleBlock<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
}

// ============================================================================
// Import/Export
// ============================================================================

#[derive(Debug)]
pub struct ImportDeclaration<'a> {
    pub data: NodeData,
    pub import_clause: Option<ImportClause<'a>>,
    pub module_specifier: LiteralExpression,
}

#[derive(Debug)]
pub struct ImportClause<'a> {
    pub data: NodeData,
    pub is_type_only: bool,
    pub name: Option<Identifier>,
    pub named_bindings: Option<NamedImportBindings<'a>>,
}

#[derive(Debug)]
pub enum NamedImportBindings<'a> {
    NamespaceImport(NamespaceImport),
    NamedImports(NamedImports<'a>),
}

#[derive(Debug)]
pub struct NamespaceImport {
    pub data: NodeData,
    pub name: Identifier,
}

#[derive(Debug)]
pub struct NamedImports<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, ImportSpecifier>,
}

#[derive(Debug)]
pub struct ImportSpecifier {
    pub data: NodeData,
    pub is_type_only: bool,
    /// The imported name when it differs from the local `name`.
    pub property_name: Option<Identifier>,
    pub name: Identifier,
}

#[derive(Debug)]
pub struct ExportDeclaration<'a> {
    pub data: NodeData,
    pub is_type_only: bool,
    pub export_clause: Option<NamedExportBindings<'a>>,
    /// Present for re-exports, whose names refer to another module.
    pub module_specifier: Option<LiteralExpression>,
}

#[derive(Debug)]
pub enum NamedExportBindings<'a> {
    NamespaceExport(NamespaceExport),
    NamedExports(NamedExports<'a>),
}

#[derive(Debug)]
pub struct NamespaceExport {
    pub data: NodeData,
    pub name: Identifier,
}

#[derive(Debug)]
pub struct NamedExports<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, ExportSpecifier>,
}

#[derive(Debug)]
pub struct ExportSpecifier {
    pub data: NodeData,
    pub is_type_only: bool,
    /// The local name when it differs from the exported `name`.
    pub property_name: Option<Identifier>,
    pub name: Identifier,
}

impl ExportSpecifier {
    /// The identifier naming the local binding being exported.
    pub fn local_name(&self) -> &Identifier {
        self.property_name.as_ref().unwrap_or(&self.name)
    }
}

/// `export default e` or, with `is_export_equals`, `export = e`.
#[derive(Debug)]
pub struct ExportAssignment<'a> {
    pub data: NodeData,
    pub is_export_equals: bool,
    pub expression: &'a Expression<'a>,
}

/// `import x = require("m")` or `import x = A.B`.
#[derive(Debug)]
pub struct ImportEqualsDeclaration<'a> {
    pub data: NodeData,
    pub is_type_only: bool,
    pub name: Identifier,
    pub module_reference: ModuleReference<'a>,
}

#[derive(Debug)]
pub enum ModuleReference<'a> {
    External(ExternalModuleReference),
    EntityName(EntityName<'a>),
}

#[derive(Debug)]
pub struct ExternalModuleReference {
    pub data: NodeData,
    pub expression: LiteralExpression,
}

/// `export as namespace X;`
#[derive(Debug)]
pub struct NamespaceExportDeclaration {
    pub data: NodeData,
    pub name: Identifier,
}
