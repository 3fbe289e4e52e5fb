//! SyntaxKind: the kind tag carried by every node, plus operator tokens.

/// The kind of a node or operator token.
///
/// Node kinds are checked against the shape of the node that carries them;
/// operator kinds appear in the `operator` fields of unary, update and binary
/// expressions and in type operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    Unknown,

    // ========================================================================
    // Operator tokens
    // ========================================================================
    PlusToken,
    MinusToken,
    AsteriskToken,
    AsteriskAsteriskToken,
    SlashToken,
    PercentToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    AmpersandAmpersandToken,
    BarBarToken,
    QuestionQuestionToken,
    CommaToken,
    ExclamationToken,
    TildeToken,
    PlusPlusToken,
    MinusMinusToken,

    // Assignment operators, `EqualsToken` first and the logical ones last.
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    AsteriskAsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    CaretEqualsToken,
    AmpersandAmpersandEqualsToken,
    BarBarEqualsToken,
    QuestionQuestionEqualsToken,

    // ========================================================================
    // Keywords used as operators, heritage tokens and type keywords
    // ========================================================================
    InKeyword,
    InstanceOfKeyword,
    TypeOfKeyword,
    VoidKeyword,
    DeleteKeyword,
    AwaitKeyword,
    ExtendsKeyword,
    ImplementsKeyword,
    KeyOfKeyword,
    UniqueKeyword,
    ReadonlyKeyword,
    AnyKeyword,
    UnknownKeyword,
    NumberKeyword,
    BigIntKeyword,
    StringKeyword,
    BooleanKeyword,
    SymbolKeyword,
    ObjectKeyword,
    NeverKeyword,
    UndefinedKeyword,
    NullKeyword,
    IntrinsicKeyword,
    ThisKeyword,
    SuperKeyword,

    // ========================================================================
    // Names
    // ========================================================================
    Identifier,
    PrivateIdentifier,
    QualifiedName,
    ComputedPropertyName,

    // ========================================================================
    // Expressions
    // ========================================================================
    LiteralExpression,
    TemplateExpression,
    ArrayLiteralExpression,
    ObjectLiteralExpression,
    PropertyAssignment,
    ShorthandPropertyAssignment,
    SpreadAssignment,
    PropertyAccessExpression,
    ElementAccessExpression,
    CallExpression,
    NewExpression,
    TaggedTemplateExpression,
    ParenthesizedExpression,
    FunctionExpression,
    ArrowFunction,
    ClassExpression,
    UnaryExpression,
    UpdateExpression,
    BinaryExpression,
    ConditionalExpression,
    YieldExpression,
    SpreadElement,
    AsExpression,
    SatisfiesExpression,
    NonNullExpression,
    TypeAssertionExpression,
    MetaProperty,
    OmittedExpression,

    // ========================================================================
    // Statements
    // ========================================================================
    Block,
    EmptyStatement,
    VariableStatement,
    VariableDeclarationList,
    VariableDeclaration,
    ExpressionStatement,
    IfStatement,
    DoStatement,
    WhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    ContinueStatement,
    BreakStatement,
    ReturnStatement,
    WithStatement,
    SwitchStatement,
    CaseBlock,
    CaseClause,
    DefaultClause,
    LabeledStatement,
    ThrowStatement,
    TryStatement,
    CatchClause,
    DebuggerStatement,

    // ========================================================================
    // Declarations
    // ========================================================================
    FunctionDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    TypeAliasDeclaration,
    EnumDeclaration,
    EnumMember,
    ModuleDeclaration,
    ModuleBlock,
    ImportDeclaration,
    ImportClause,
    NamespaceImport,
    NamedImports,
    ImportSpecifier,
    ExportDeclaration,
    NamespaceExport,
    NamedExports,
    ExportSpecifier,
    ExportAssignment,
    ImportEqualsDeclaration,
    ExternalModuleReference,
    NamespaceExportDeclaration,
    Parameter,
    TypeParameter,
    Decorator,
    HeritageClause,
    ExpressionWithTypeArguments,

    // Class members
    PropertyDeclaration,
    MethodDeclaration,
    GetAccessor,
    SetAccessor,
    Constructor,
    ClassStaticBlockDeclaration,
    SemicolonClassElement,

    // Type members
    IndexSignature,
    PropertySignature,
    MethodSignature,
    CallSignature,
    ConstructSignature,

    // Binding patterns
    ObjectBindingPattern,
    ArrayBindingPattern,
    BindingElement,

    // ========================================================================
    // Type nodes
    // ========================================================================
    KeywordType,
    TypeReference,
    FunctionType,
    ConstructorType,
    TypeQuery,
    TypeLiteral,
    ArrayType,
    TupleType,
    NamedTupleMember,
    OptionalType,
    RestType,
    UnionType,
    IntersectionType,
    ConditionalType,
    InferType,
    ParenthesizedType,
    ThisType,
    TypeOperator,
    IndexedAccessType,
    MappedType,
    LiteralType,
    TemplateLiteralType,
    ImportType,
    TypePredicate,

    SourceFile,
}

impl SyntaxKind {
    /// `=` and every compound assignment operator.
    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        let v = self as u16;
        v >= SyntaxKind::EqualsToken as u16
            && v <= SyntaxKind::QuestionQuestionEqualsToken as u16
    }

    /// Assignment operators that read their target before writing it.
    #[inline]
    pub fn is_compound_assignment(self) -> bool {
        let v = self as u16;
        v >= SyntaxKind::PlusEqualsToken as u16
            && v <= SyntaxKind::QuestionQuestionEqualsToken as u16
    }

    /// `&&=`, `||=` and `??=`.
    #[inline]
    pub fn is_logical_assignment(self) -> bool {
        matches!(
            self,
            SyntaxKind::AmpersandAmpersandEqualsToken
                | SyntaxKind::BarBarEqualsToken
                | SyntaxKind::QuestionQuestionEqualsToken
        )
    }

    #[inline]
    pub fn is_update_operator(self) -> bool {
        matches!(self, SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken)
    }

    /// Operators accepted by [`UnaryExpression`](crate::node::UnaryExpression).
    #[inline]
    pub fn is_unary_operator(self) -> bool {
        matches!(
            self,
            SyntaxKind::PlusToken
                | SyntaxKind::MinusToken
                | SyntaxKind::TildeToken
                | SyntaxKind::ExclamationToken
                | SyntaxKind::TypeOfKeyword
                | SyntaxKind::VoidKeyword
                | SyntaxKind::DeleteKeyword
                | SyntaxKind::AwaitKeyword
        )
    }

    /// Operators accepted by [`BinaryExpression`](crate::node::BinaryExpression).
    #[inline]
    pub fn is_binary_operator(self) -> bool {
        let v = self as u16;
        (v >= SyntaxKind::PlusToken as u16 && v <= SyntaxKind::CommaToken as u16)
            || self.is_assignment_operator()
            || matches!(self, SyntaxKind::InKeyword | SyntaxKind::InstanceOfKeyword)
    }

    /// Keywords that may appear in a [`KeywordTypeNode`](crate::node::KeywordTypeNode).
    #[inline]
    pub fn is_type_keyword(self) -> bool {
        let v = self as u16;
        (v >= SyntaxKind::AnyKeyword as u16 && v <= SyntaxKind::IntrinsicKeyword as u16)
            || self == SyntaxKind::VoidKeyword
    }

    #[inline]
    pub fn is_type_node(self) -> bool {
        let v = self as u16;
        v >= SyntaxKind::KeywordType as u16 && v <= SyntaxKind::TypePredicate as u16
    }

    /// Nodes that own a function body or a function-like signature.
    #[inline]
    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::FunctionDeclaration
                | SyntaxKind::FunctionExpression
                | SyntaxKind::ArrowFunction
                | SyntaxKind::MethodDeclaration
                | SyntaxKind::GetAccessor
                | SyntaxKind::SetAccessor
                | SyntaxKind::Constructor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_operator_ranges() {
        assert!(SyntaxKind::EqualsToken.is_assignment_operator());
        assert!(!SyntaxKind::EqualsToken.is_compound_assignment());
        assert!(SyntaxKind::PlusEqualsToken.is_compound_assignment());
        assert!(SyntaxKind::QuestionQuestionEqualsToken.is_logical_assignment());
        assert!(!SyntaxKind::EqualsEqualsToken.is_assignment_operator());
    }

    #[test]
    fn test_operator_classes() {
        assert!(SyntaxKind::CommaToken.is_binary_operator());
        assert!(SyntaxKind::InstanceOfKeyword.is_binary_operator());
        assert!(!SyntaxKind::TypeOfKeyword.is_binary_operator());
        assert!(SyntaxKind::TypeOfKeyword.is_unary_operator());
        assert!(SyntaxKind::MinusMinusToken.is_update_operator());
        assert!(SyntaxKind::VoidKeyword.is_type_keyword());
        assert!(!SyntaxKind::ThisKeyword.is_type_keyword());
        assert!(SyntaxKind::MappedType.is_type_node());
        assert!(!SyntaxKind::SourceFile.is_type_node());
    }
}
