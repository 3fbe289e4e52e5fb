//! tsscope_nodebuilder: positioned tree construction.
//!
//! Builds arena-allocated trees that satisfy the node-shape contract of
//! `tsscope_ast` without a parser. Every node gets a fresh [`NodeId`] and a
//! synthetic range: leaves are laid out left to right in the order they are
//! created, and a composite node spans from the start of its first child to
//! the current layout position.
//!
//! Children must therefore be created in source order. Passing names as
//! pre-built [`Identifier`]s (`b.function(b.ident("f"), ...)`) keeps the
//! order right, because Rust evaluates call arguments left to right.

use bumpalo::Bump;
use std::cell::Cell;
use tsscope_ast::*;
use tsscope_core::intern::StringInterner;

/// Declaration keyword of a variable statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarKind {
    Var,
    Let,
    Const,
}

impl VarKind {
    fn flags(self) -> NodeFlags {
        match self {
            VarKind::Var => NodeFlags::NONE,
            VarKind::Let => NodeFlags::LET,
            VarKind::Const => NodeFlags::CONST,
        }
    }
}

/// Anything carrying [`NodeData`].
pub trait Positioned {
    fn node_data(&self) -> &NodeData;

    fn pos(&self) -> u32 {
        self.node_data().range.pos
    }
}

macro_rules! positioned_struct {
    ($($ty:ident),* $(,)?) => {
        $(impl Positioned for $ty<'_> {
            fn node_data(&self) -> &NodeData {
                &self.data
            }
        })*
    };
}

positioned_struct!(
    VariableDeclaration,
    ParameterDeclaration,
    TypeParameterDeclaration,
    BindingElement,
    Block,
    CaseClause,
    HeritageClause,
    ExpressionWithTypeArguments,
    Decorator,
    EnumMemberNode,
    ModuleDeclaration,
    ImportClause,
    VariableDeclarationList,
    CatchClause,
    FunctionDeclaration,
    ClassDeclaration,
    MethodDeclaration,
);

impl Positioned for Identifier {
    fn node_data(&self) -> &NodeData {
        &self.data
    }
}

impl Positioned for ImportSpecifier {
    fn node_data(&self) -> &NodeData {
        &self.data
    }
}

impl Positioned for ExportSpecifier {
    fn node_data(&self) -> &NodeData {
        &self.data
    }
}

impl Positioned for Expression<'_> {
    fn node_data(&self) -> &NodeData {
        self.data()
    }
}

impl Positioned for Statement<'_> {
    fn node_data(&self) -> &NodeData {
        self.data()
    }
}

impl Positioned for TypeNode<'_> {
    fn node_data(&self) -> &NodeData {
        self.data()
    }
}

impl Positioned for TypeElement<'_> {
    fn node_data(&self) -> &NodeData {
        self.data()
    }
}

impl Positioned for BindingName<'_> {
    fn node_data(&self) -> &NodeData {
        self.data()
    }
}

impl Positioned for PropertyName<'_> {
    fn node_data(&self) -> &NodeData {
        self.data()
    }
}

impl Positioned for EntityName<'_> {
    fn node_data(&self) -> &NodeData {
        self.data()
    }
}

impl Positioned for ClassElement<'_> {
    fn node_data(&self) -> &NodeData {
        match self {
            ClassElement::Property(n) => &n.data,
            ClassElement::Method(n) => &n.data,
            ClassElement::Constructor(n) => &n.data,
            ClassElement::IndexSignature(n) => &n.data,
            ClassElement::StaticBlock(n) => &n.data,
            ClassElement::Semicolon(data) => data,
        }
    }
}

impl Positioned for ObjectLiteralElement<'_> {
    fn node_data(&self) -> &NodeData {
        match self {
            ObjectLiteralElement::PropertyAssignment(n) => &n.data,
            ObjectLiteralElement::ShorthandPropertyAssignment(n) => &n.data,
            ObjectLiteralElement::SpreadAssignment(n) => &n.data,
            ObjectLiteralElement::Method(n) => &n.data,
        }
    }
}

impl Positioned for ArrayBindingElement<'_> {
    fn node_data(&self) -> &NodeData {
        match self {
            ArrayBindingElement::BindingElement(e) => &e.data,
            ArrayBindingElement::OmittedExpression(data) => data,
        }
    }
}

impl Positioned for NamedImportBindings<'_> {
    fn node_data(&self) -> &NodeData {
        match self {
            NamedImportBindings::NamespaceImport(n) => &n.data,
            NamedImportBindings::NamedImports(n) => &n.data,
        }
    }
}

impl Positioned for ForInitializer<'_> {
    fn node_data(&self) -> &NodeData {
        match self {
            ForInitializer::VariableDeclarationList(list) => &list.data,
            ForInitializer::Expression(expr) => expr.data(),
        }
    }
}

fn first<T: Positioned>(items: &[T]) -> Option<u32> {
    items.first().map(Positioned::pos)
}

fn opt<T: Positioned>(item: &Option<T>) -> Option<u32> {
    item.as_ref().map(Positioned::pos)
}

pub struct NodeBuilder<'a> {
    arena: &'a Bump,
    interner: StringInterner,
    next_id: Cell<u32>,
    cursor: Cell<u32>,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(arena: &'a Bump) -> Self {
        Self::with_interner(arena, StringInterner::new())
    }

    pub fn with_interner(arena: &'a Bump, interner: StringInterner) -> Self {
        Self {
            arena,
            interner,
            next_id: Cell::new(0),
            cursor: Cell::new(0),
        }
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// The next free layout position.
    pub fn cursor(&self) -> u32 {
        self.cursor.get()
    }

    /// Number of ids handed out so far.
    pub fn node_count(&self) -> u32 {
        self.next_id.get()
    }

    // ========================================================================
    // Layout and allocation
    // ========================================================================

    fn fresh_id(&self) -> NodeId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        NodeId(id)
    }

    fn leaf(&self, kind: SyntaxKind, len: usize) -> NodeData {
        let pos = self.cursor.get();
        let end = pos + (len.max(1) as u32);
        self.cursor.set(end + 1);
        NodeData::new(kind, pos, end).with_id(self.fresh_id())
    }

    /// A node spanning from the earliest of `starts` to the layout position.
    /// Without children it is laid out like a leaf.
    fn span(&self, kind: SyntaxKind, starts: impl IntoIterator<Item = Option<u32>>) -> NodeData {
        match starts.into_iter().flatten().min() {
            Some(pos) => {
                let end = self.cursor.get().max(pos);
                self.cursor.set(end + 1);
                NodeData::new(kind, pos, end).with_id(self.fresh_id())
            }
            None => self.leaf(kind, 1),
        }
    }

    pub fn alloc<T>(&self, value: T) -> &'a T {
        self.arena.alloc(value)
    }

    pub fn list<T>(&self, items: Vec<T>) -> &'a [T] {
        self.arena.alloc_slice_fill_iter(items)
    }

    // ========================================================================
    // Source File
    // ========================================================================

    pub fn source_file(&self, statements: Vec<Statement<'a>>) -> SourceFile<'a> {
        self.source_file_named("input.ts", false, statements)
    }

    /// A `.d.ts` file; everything declared in it is ambient.
    pub fn declaration_file(&self, statements: Vec<Statement<'a>>) -> SourceFile<'a> {
        self.source_file_named("input.d.ts", true, statements)
    }

    pub fn source_file_named(
        &self,
        file_name: &str,
        is_declaration_file: bool,
        statements: Vec<Statement<'a>>,
    ) -> SourceFile<'a> {
        let data = NodeData::new(SyntaxKind::SourceFile, 0, self.cursor.get()).with_id(self.fresh_id());
        SourceFile {
            data,
            statements: self.list(statements),
            file_name: file_name.to_string(),
            is_declaration_file,
            interner: self.interner.clone(),
        }
    }

    // ========================================================================
    // Names
    // ========================================================================

    pub fn ident(&self, name: &str) -> Identifier {
        Identifier {
            data: self.leaf(SyntaxKind::Identifier, name.len()),
            text: self.interner.intern(name),
        }
    }

    /// `#name`
    pub fn private_ident(&self, name: &str) -> Identifier {
        Identifier {
            data: self.leaf(SyntaxKind::PrivateIdentifier, name.len() + 1),
            text: self.interner.intern(&format!("#{}", name)),
        }
    }

    pub fn binding(&self, name: &str) -> BindingName<'a> {
        BindingName::Identifier(self.ident(name))
    }

    pub fn prop_name(&self, name: &str) -> PropertyName<'a> {
        PropertyName::Identifier(self.ident(name))
    }

    pub fn string_prop_name(&self, text: &str) -> PropertyName<'a> {
        PropertyName::StringLiteral(self.literal(LiteralKind::String, text))
    }

    pub fn computed_name(&self, expression: Expression<'a>) -> PropertyName<'a> {
        let data = self.span(SyntaxKind::ComputedPropertyName, [Some(expression.pos())]);
        PropertyName::Computed(self.alloc(ComputedPropertyName {
            data,
            expression: self.alloc(expression),
        }))
    }

    pub fn entity(&self, name: &str) -> EntityName<'a> {
        EntityName::Identifier(self.ident(name))
    }

    pub fn qualified(&self, left: EntityName<'a>, right: &str) -> EntityName<'a> {
        let right = self.ident(right);
        let data = self.span(SyntaxKind::QualifiedName, [Some(left.pos())]);
        EntityName::QualifiedName(self.alloc(QualifiedName { data, left, right }))
    }

    /// `A.B.C` as a left-nested qualified name.
    pub fn entity_path(&self, path: &str) -> EntityName<'a> {
        let mut parts = path.split('.');
        let mut name = self.entity(parts.next().unwrap_or(path));
        for part in parts {
            name = self.qualified(name, part);
        }
        name
    }

    // ========================================================================
    // Binding Patterns
    // ========================================================================

    pub fn object_pattern(&self, elements: Vec<BindingElement<'a>>) -> BindingName<'a> {
        let data = self.span(SyntaxKind::ObjectBindingPattern, [first(&elements)]);
        BindingName::ObjectBindingPattern(self.alloc(ObjectBindingPattern {
            data,
            elements: self.list(elements),
        }))
    }

    /// `None` entries are holes.
    pub fn array_pattern(&self, elements: Vec<Option<BindingElement<'a>>>) -> BindingName<'a> {
        let elements: Vec<ArrayBindingElement<'a>> = elements
            .into_iter()
            .map(|e| match e {
                Some(e) => ArrayBindingElement::BindingElement(e),
                None => ArrayBindingElement::OmittedExpression(self.leaf(SyntaxKind::OmittedExpression, 0)),
            })
            .collect();
        let data = self.span(SyntaxKind::ArrayBindingPattern, [first(&elements)]);
        BindingName::ArrayBindingPattern(self.alloc(ArrayBindingPattern {
            data,
            elements: self.list(elements),
        }))
    }

    /// A shorthand object element or an array element.
    pub fn element(&self, name: BindingName<'a>, initializer: Option<Expression<'a>>) -> BindingElement<'a> {
        self.binding_element(false, None, name, initializer)
    }

    /// `key: name = init` inside an object pattern.
    pub fn prop_element(
        &self,
        property_name: PropertyName<'a>,
        name: BindingName<'a>,
        initializer: Option<Expression<'a>>,
    ) -> BindingElement<'a> {
        self.binding_element(false, Some(property_name), name, initializer)
    }

    pub fn rest_element(&self, name: BindingName<'a>) -> BindingElement<'a> {
        self.binding_element(true, None, name, None)
    }

    fn binding_element(
        &self,
        dot_dot_dot: bool,
        property_name: Option<PropertyName<'a>>,
        name: BindingName<'a>,
        initializer: Option<Expression<'a>>,
    ) -> BindingElement<'a> {
        let data = self.span(
            SyntaxKind::BindingElement,
            [opt(&property_name), Some(name.pos())],
        );
        BindingElement {
            data,
            dot_dot_dot,
            property_name,
            name,
            initializer: initializer.map(|e| self.alloc(e)),
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn literal(&self, literal_kind: LiteralKind, text: &str) -> LiteralExpression {
        LiteralExpression {
            data: self.leaf(SyntaxKind::LiteralExpression, text.len()),
            literal_kind,
            text: self.interner.intern(text),
        }
    }

    pub fn id(&self, name: &str) -> Expression<'a> {
        Expression::Identifier(self.ident(name))
    }

    pub fn num(&self, text: &str) -> Expression<'a> {
        Expression::Literal(self.literal(LiteralKind::Numeric, text))
    }

    pub fn string(&self, text: &str) -> Expression<'a> {
        Expression::Literal(self.literal(LiteralKind::String, text))
    }

    pub fn boolean(&self, value: bool) -> Expression<'a> {
        if value {
            Expression::Literal(self.literal(LiteralKind::True, "true"))
        } else {
            Expression::Literal(self.literal(LiteralKind::False, "false"))
        }
    }

    pub fn null(&self) -> Expression<'a> {
        Expression::Literal(self.literal(LiteralKind::Null, "null"))
    }

    pub fn this(&self) -> Expression<'a> {
        Expression::This(self.leaf(SyntaxKind::ThisKeyword, 4))
    }

    pub fn super_(&self) -> Expression<'a> {
        Expression::Super(self.leaf(SyntaxKind::SuperKeyword, 5))
    }

    pub fn hole(&self) -> Expression<'a> {
        Expression::Omitted(self.leaf(SyntaxKind::OmittedExpression, 0))
    }

    pub fn member(&self, object: Expression<'a>, name: &str) -> Expression<'a> {
        let name = self.ident(name);
        let data = self.span(SyntaxKind::PropertyAccessExpression, [Some(object.pos())]);
        Expression::PropertyAccess(PropertyAccessExpression {
            data,
            expression: self.alloc(object),
            name,
        })
    }

    pub fn element_access(&self, object: Expression<'a>, argument: Expression<'a>) -> Expression<'a> {
        let data = self.span(SyntaxKind::ElementAccessExpression, [Some(object.pos())]);
        Expression::ElementAccess(ElementAccessExpression {
            data,
            expression: self.alloc(object),
            argument_expression: self.alloc(argument),
        })
    }

    pub fn call(&self, callee: Expression<'a>, arguments: Vec<Expression<'a>>) -> Expression<'a> {
        self.call_generic(callee, Vec::new(), arguments)
    }

    pub fn call_generic(
        &self,
        callee: Expression<'a>,
        type_arguments: Vec<TypeNode<'a>>,
        arguments: Vec<Expression<'a>>,
    ) -> Expression<'a> {
        let data = self.span(SyntaxKind::CallExpression, [Some(callee.pos())]);
        Expression::Call(CallExpression {
            data,
            expression: self.alloc(callee),
            type_arguments: self.list(type_arguments),
            arguments: self.list(arguments),
        })
    }

    pub fn new_expr(&self, callee: Expression<'a>, arguments: Vec<Expression<'a>>) -> Expression<'a> {
        let data = self.span(SyntaxKind::NewExpression, [Some(callee.pos())]);
        Expression::New(NewExpression {
            data,
            expression: self.alloc(callee),
            type_arguments: &[],
            arguments: self.list(arguments),
        })
    }

    pub fn binary(&self, left: Expression<'a>, operator: SyntaxKind, right: Expression<'a>) -> Expression<'a> {
        let data = self.span(SyntaxKind::BinaryExpression, [Some(left.pos())]);
        Expression::Binary(BinaryExpression {
            data,
            left: self.alloc(left),
            operator,
            right: self.alloc(right),
        })
    }

    pub fn assign(&self, target: Expression<'a>, value: Expression<'a>) -> Expression<'a> {
        self.binary(target, SyntaxKind::EqualsToken, value)
    }

    pub fn unary(&self, operator: SyntaxKind, operand: Expression<'a>) -> Expression<'a> {
        let data = self.span(SyntaxKind::UnaryExpression, [Some(operand.pos())]);
        Expression::Unary(UnaryExpression {
            data,
            operator,
            operand: self.alloc(operand),
        })
    }

    pub fn typeof_(&self, operand: Expression<'a>) -> Expression<'a> {
        self.unary(SyntaxKind::TypeOfKeyword, operand)
    }

    pub fn update(&self, operator: SyntaxKind, prefix: bool, operand: Expression<'a>) -> Expression<'a> {
        let data = self.span(SyntaxKind::UpdateExpression, [Some(operand.pos())]);
        Expression::Update(UpdateExpression {
            data,
            operator,
            prefix,
            operand: self.alloc(operand),
        })
    }

    pub fn paren(&self, expression: Expression<'a>) -> Expression<'a> {
        let data = self.span(SyntaxKind::ParenthesizedExpression, [Some(expression.pos())]);
        Expression::Parenthesized(ParenthesizedExpression {
            data,
            expression: self.alloc(expression),
        })
    }

    pub fn conditional(
        &self,
        condition: Expression<'a>,
        when_true: Expression<'a>,
        when_false: Expression<'a>,
    ) -> Expression<'a> {
        let data = self.span(SyntaxKind::ConditionalExpression, [Some(condition.pos())]);
        Expression::Conditional(ConditionalExpression {
            data,
            condition: self.alloc(condition),
            when_true: self.alloc(when_true),
            when_false: self.alloc(when_false),
        })
    }

    pub fn spread(&self, expression: Expression<'a>) -> Expression<'a> {
        let data = self.span(SyntaxKind::SpreadElement, [Some(expression.pos())]);
        Expression::Spread(SpreadElement {
            data,
            expression: self.alloc(expression),
        })
    }

    pub fn yield_(&self, expression: Option<Expression<'a>>) -> Expression<'a> {
        let data = self.span(SyntaxKind::YieldExpression, [opt(&expression)]);
        Expression::Yield(YieldExpression {
            data,
            delegate: false,
            expression: expression.map(|e| self.alloc(e)),
        })
    }

    pub fn array(&self, elements: Vec<Expression<'a>>) -> Expression<'a> {
        let data = self.span(SyntaxKind::ArrayLiteralExpression, [first(&elements)]);
        Expression::ArrayLiteral(ArrayLiteralExpression {
            data,
            elements: self.list(elements),
        })
    }

    pub fn object(&self, properties: Vec<ObjectLiteralElement<'a>>) -> Expression<'a> {
        let data = self.span(SyntaxKind::ObjectLiteralExpression, [first(&properties)]);
        Expression::ObjectLiteral(ObjectLiteralExpression {
            data,
            properties: self.list(properties),
        })
    }

    pub fn property(&self, name: PropertyName<'a>, value: Expression<'a>) -> ObjectLiteralElement<'a> {
        let data = self.span(SyntaxKind::PropertyAssignment, [Some(name.pos())]);
        ObjectLiteralElement::PropertyAssignment(PropertyAssignment {
            data,
            name,
            initializer: self.alloc(value),
        })
    }

    pub fn shorthand(&self, name: Identifier, default: Option<Expression<'a>>) -> ObjectLiteralElement<'a> {
        let data = self.span(SyntaxKind::ShorthandPropertyAssignment, [Some(name.pos())]);
        ObjectLiteralElement::ShorthandPropertyAssignment(ShorthandPropertyAssignment {
            data,
            name,
            object_assignment_initializer: default.map(|e| self.alloc(e)),
        })
    }

    pub fn spread_property(&self, expression: Expression<'a>) -> ObjectLiteralElement<'a> {
        let data = self.span(SyntaxKind::SpreadAssignment, [Some(expression.pos())]);
        ObjectLiteralElement::SpreadAssignment(SpreadAssignment {
            data,
            expression: self.alloc(expression),
        })
    }

    pub fn object_method(&self, method: MethodDeclaration<'a>) -> ObjectLiteralElement<'a> {
        ObjectLiteralElement::Method(method)
    }

    pub fn function_expr(
        &self,
        name: Option<Identifier>,
        parameters: Vec<ParameterDeclaration<'a>>,
        body: Vec<Statement<'a>>,
    ) -> Expression<'a> {
        self.function_expr_full(name, Vec::new(), parameters, None, body)
    }

    pub fn function_expr_full(
        &self,
        name: Option<Identifier>,
        type_parameters: Vec<TypeParameterDeclaration<'a>>,
        parameters: Vec<ParameterDeclaration<'a>>,
        return_type: Option<TypeNode<'a>>,
        body: Vec<Statement<'a>>,
    ) -> Expression<'a> {
        let body = self.block_node(body);
        let data = self.span(
            SyntaxKind::FunctionExpression,
            [opt(&name), first(&type_parameters), first(&parameters), Some(body.pos())],
        );
        Expression::Function(FunctionExpression {
            data,
            name,
            type_parameters: self.list(type_parameters),
            parameters: self.list(parameters),
            return_type: return_type.map(|t| self.alloc(t)),
            body,
        })
    }

    pub fn arrow(&self, parameters: Vec<ParameterDeclaration<'a>>, body: Expression<'a>) -> Expression<'a> {
        self.arrow_full(Vec::new(), parameters, None, ArrowFunctionBody::Expression(self.alloc(body)))
    }

    pub fn arrow_block(&self, parameters: Vec<ParameterDeclaration<'a>>, body: Vec<Statement<'a>>) -> Expression<'a> {
        let block = self.block_node(body);
        self.arrow_full(Vec::new(), parameters, None, ArrowFunctionBody::Block(self.alloc(block)))
    }

    pub fn arrow_full(
        &self,
        type_parameters: Vec<TypeParameterDeclaration<'a>>,
        parameters: Vec<ParameterDeclaration<'a>>,
        return_type: Option<TypeNode<'a>>,
        body: ArrowFunctionBody<'a>,
    ) -> Expression<'a> {
        let body_pos = match body {
            ArrowFunctionBody::Block(b) => b.pos(),
            ArrowFunctionBody::Expression(e) => e.pos(),
        };
        let data = self.span(
            SyntaxKind::ArrowFunction,
            [first(&type_parameters), first(&parameters), Some(body_pos)],
        );
        Expression::Arrow(ArrowFunction {
            data,
            type_parameters: self.list(type_parameters),
            parameters: self.list(parameters),
            return_type: return_type.map(|t| self.alloc(t)),
            body,
        })
    }

    pub fn class_expr(
        &self,
        name: Option<Identifier>,
        heritage_clauses: Vec<HeritageClause<'a>>,
        members: Vec<ClassElement<'a>>,
    ) -> Expression<'a> {
        Expression::Class(self.class_node(
            SyntaxKind::ClassExpression,
            Vec::new(),
            name,
            Vec::new(),
            heritage_clauses,
            members,
        ))
    }

    pub fn as_expr(&self, expression: Expression<'a>, type_node: TypeNode<'a>) -> Expression<'a> {
        let data = self.span(SyntaxKind::AsExpression, [Some(expression.pos())]);
        Expression::As(TypedExpression {
            data,
            expression: self.alloc(expression),
            type_node: self.alloc(type_node),
        })
    }

    pub fn satisfies(&self, expression: Expression<'a>, type_node: TypeNode<'a>) -> Expression<'a> {
        let data = self.span(SyntaxKind::SatisfiesExpression, [Some(expression.pos())]);
        Expression::Satisfies(TypedExpression {
            data,
            expression: self.alloc(expression),
            type_node: self.alloc(type_node),
        })
    }

    pub fn non_null(&self, expression: Expression<'a>) -> Expression<'a> {
        let data = self.span(SyntaxKind::NonNullExpression, [Some(expression.pos())]);
        Expression::NonNull(NonNullExpression {
            data,
            expression: self.alloc(expression),
        })
    }

    pub fn template(&self, spans: Vec<Expression<'a>>) -> Expression<'a> {
        let data = self.span(SyntaxKind::TemplateExpression, [first(&spans)]);
        Expression::Template(TemplateExpression {
            data,
            spans: self.list(spans),
        })
    }

    pub fn tagged_template(&self, tag: Expression<'a>, template: Expression<'a>) -> Expression<'a> {
        let data = self.span(SyntaxKind::TaggedTemplateExpression, [Some(tag.pos())]);
        Expression::TaggedTemplate(TaggedTemplateExpression {
            data,
            tag: self.alloc(tag),
            type_arguments: &[],
            template: self.alloc(template),
        })
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn expr_stmt(&self, expression: Expression<'a>) -> Statement<'a> {
        let data = self.span(SyntaxKind::ExpressionStatement, [Some(expression.pos())]);
        Statement::ExpressionStatement(ExpressionStatement {
            data,
            expression: self.alloc(expression),
        })
    }

    pub fn empty(&self) -> Statement<'a> {
        Statement::EmptyStatement(self.leaf(SyntaxKind::EmptyStatement, 1))
    }

    pub fn declarator(
        &self,
        name: BindingName<'a>,
        type_annotation: Option<TypeNode<'a>>,
        initializer: Option<Expression<'a>>,
    ) -> VariableDeclaration<'a> {
        let data = self.span(SyntaxKind::VariableDeclaration, [Some(name.pos())]);
        VariableDeclaration {
            data,
            name,
            definite: false,
            type_annotation: type_annotation.map(|t| self.alloc(t)),
            initializer: initializer.map(|e| self.alloc(e)),
        }
    }

    pub fn decl_list(&self, kind: VarKind, declarations: Vec<VariableDeclaration<'a>>) -> VariableDeclarationList<'a> {
        let data = self
            .span(SyntaxKind::VariableDeclarationList, [first(&declarations)])
            .with_flags(kind.flags());
        VariableDeclarationList {
            data,
            declarations: self.list(declarations),
        }
    }

    pub fn var_statement(&self, kind: VarKind, declarations: Vec<VariableDeclaration<'a>>) -> Statement<'a> {
        let declaration_list = self.decl_list(kind, declarations);
        let data = self.span(SyntaxKind::VariableStatement, [Some(declaration_list.pos())]);
        Statement::VariableStatement(VariableStatement {
            data,
            declaration_list,
        })
    }

    pub fn var(&self, name: BindingName<'a>, initializer: Option<Expression<'a>>) -> Statement<'a> {
        let decl = self.declarator(name, None, initializer);
        self.var_statement(VarKind::Var, vec![decl])
    }

    pub fn let_(&self, name: BindingName<'a>, initializer: Option<Expression<'a>>) -> Statement<'a> {
        let decl = self.declarator(name, None, initializer);
        self.var_statement(VarKind::Let, vec![decl])
    }

    pub fn const_(&self, name: BindingName<'a>, initializer: Expression<'a>) -> Statement<'a> {
        let decl = self.declarator(name, None, Some(initializer));
        self.var_statement(VarKind::Const, vec![decl])
    }

    pub fn block_node(&self, statements: Vec<Statement<'a>>) -> Block<'a> {
        let data = self.span(SyntaxKind::Block, [first(&statements)]);
        Block {
            data,
            statements: self.list(statements),
        }
    }

    pub fn block(&self, statements: Vec<Statement<'a>>) -> Statement<'a> {
        Statement::Block(self.block_node(statements))
    }

    pub fn if_(
        &self,
        condition: Expression<'a>,
        then_statement: Statement<'a>,
        else_statement: Option<Statement<'a>>,
    ) -> Statement<'a> {
        let data = self.span(SyntaxKind::IfStatement, [Some(condition.pos())]);
        Statement::IfStatement(IfStatement {
            data,
            expression: self.alloc(condition),
            then_statement: self.alloc(then_statement),
            else_statement: else_statement.map(|s| self.alloc(s)),
        })
    }

    pub fn while_(&self, condition: Expression<'a>, body: Statement<'a>) -> Statement<'a> {
        let data = self.span(SyntaxKind::WhileStatement, [Some(condition.pos())]);
        Statement::WhileStatement(WhileStatement {
            data,
            expression: self.alloc(condition),
            statement: self.alloc(body),
        })
    }

    pub fn do_while(&self, body: Statement<'a>, condition: Expression<'a>) -> Statement<'a> {
        let data = self.span(SyntaxKind::DoStatement, [Some(body.pos())]);
        Statement::DoStatement(DoStatement {
            data,
            statement: self.alloc(body),
            expression: self.alloc(condition),
        })
    }

    pub fn for_decl(&self, kind: VarKind, declarations: Vec<VariableDeclaration<'a>>) -> ForInitializer<'a> {
        ForInitializer::VariableDeclarationList(self.decl_list(kind, declarations))
    }

    pub fn for_expr(&self, expression: Expression<'a>) -> ForInitializer<'a> {
        ForInitializer::Expression(self.alloc(expression))
    }

    pub fn for_(
        &self,
        initializer: Option<ForInitializer<'a>>,
        condition: Option<Expression<'a>>,
        incrementor: Option<Expression<'a>>,
        body: Statement<'a>,
    ) -> Statement<'a> {
        let data = self.span(
            SyntaxKind::ForStatement,
            [opt(&initializer), opt(&condition), opt(&incrementor), Some(body.pos())],
        );
        Statement::ForStatement(ForStatement {
            data,
            initializer,
            condition: condition.map(|e| self.alloc(e)),
            incrementor: incrementor.map(|e| self.alloc(e)),
            statement: self.alloc(body),
        })
    }

    pub fn for_in(&self, initializer: ForInitializer<'a>, expression: Expression<'a>, body: Statement<'a>) -> Statement<'a> {
        Statement::ForInStatement(self.for_in_or_of(SyntaxKind::ForInStatement, initializer, expression, body))
    }

    pub fn for_of(&self, initializer: ForInitializer<'a>, expression: Expression<'a>, body: Statement<'a>) -> Statement<'a> {
        Statement::ForOfStatement(self.for_in_or_of(SyntaxKind::ForOfStatement, initializer, expression, body))
    }

    fn for_in_or_of(
        &self,
        kind: SyntaxKind,
        initializer: ForInitializer<'a>,
        expression: Expression<'a>,
        body: Statement<'a>,
    ) -> ForInOrOfStatement<'a> {
        let data = self.span(kind, [Some(initializer.pos())]);
        ForInOrOfStatement {
            data,
            is_await: false,
            initializer,
            expression: self.alloc(expression),
            statement: self.alloc(body),
        }
    }

    pub fn return_(&self, expression: Option<Expression<'a>>) -> Statement<'a> {
        let data = self.span(SyntaxKind::ReturnStatement, [opt(&expression)]);
        Statement::ReturnStatement(ReturnStatement {
            data,
            expression: expression.map(|e| self.alloc(e)),
        })
    }

    pub fn throw_(&self, expression: Expression<'a>) -> Statement<'a> {
        let data = self.span(SyntaxKind::ThrowStatement, [Some(expression.pos())]);
        Statement::ThrowStatement(ThrowStatement {
            data,
            expression: self.alloc(expression),
        })
    }

    pub fn break_(&self, label: Option<Identifier>) -> Statement<'a> {
        let data = self.span(SyntaxKind::BreakStatement, [opt(&label)]);
        Statement::BreakStatement(JumpStatement { data, label })
    }

    pub fn continue_(&self, label: Option<Identifier>) -> Statement<'a> {
        let data = self.span(SyntaxKind::ContinueStatement, [opt(&label)]);
        Statement::ContinueStatement(JumpStatement { data, label })
    }

    pub fn labeled(&self, label: Identifier, body: Statement<'a>) -> Statement<'a> {
        let data = self.span(SyntaxKind::LabeledStatement, [Some(label.pos())]);
        Statement::LabeledStatement(LabeledStatement {
            data,
            label,
            statement: self.alloc(body),
        })
    }

    pub fn with(&self, object: Expression<'a>, body: Statement<'a>) -> Statement<'a> {
        let data = self.span(SyntaxKind::WithStatement, [Some(object.pos())]);
        Statement::WithStatement(WithStatement {
            data,
            expression: self.alloc(object),
            statement: self.alloc(body),
        })
    }

    /// A `case` clause, or `default` when `test` is `None`.
    pub fn case(&self, test: Option<Expression<'a>>, statements: Vec<Statement<'a>>) -> CaseClause<'a> {
        let kind = if test.is_some() {
            SyntaxKind::CaseClause
        } else {
            SyntaxKind::DefaultClause
        };
        let data = self.span(kind, [opt(&test), first(&statements)]);
        CaseClause {
            data,
            expression: test.map(|e| self.alloc(e)),
            statements: self.list(statements),
        }
    }

    pub fn switch(&self, discriminant: Expression<'a>, clauses: Vec<CaseClause<'a>>) -> Statement<'a> {
        let discriminant_pos = discriminant.pos();
        let case_data = self.span(SyntaxKind::CaseBlock, [first(&clauses)]);
        let case_block = CaseBlock {
            data: case_data,
            clauses: self.list(clauses),
        };
        let data = self.span(SyntaxKind::SwitchStatement, [Some(discriminant_pos)]);
        Statement::SwitchStatement(SwitchStatement {
            data,
            expression: self.alloc(discriminant),
            case_block,
        })
    }

    pub fn catch(&self, parameter: Option<BindingName<'a>>, body: Vec<Statement<'a>>) -> CatchClause<'a> {
        let variable_declaration = parameter.map(|name| self.declarator(name, None, None));
        let block = self.block_node(body);
        let data = self.span(SyntaxKind::CatchClause, [opt(&variable_declaration), Some(block.pos())]);
        CatchClause {
            data,
            variable_declaration,
            block,
        }
    }

    pub fn try_(
        &self,
        try_block: Vec<Statement<'a>>,
        catch_clause: Option<CatchClause<'a>>,
        finally_block: Option<Vec<Statement<'a>>>,
    ) -> Statement<'a> {
        let try_block = self.block_node(try_block);
        let finally_block = finally_block.map(|stmts| self.block_node(stmts));
        let data = self.span(SyntaxKind::TryStatement, [Some(try_block.pos())]);
        Statement::TryStatement(TryStatement {
            data,
            try_block,
            catch_clause,
            finally_block,
        })
    }

    // ========================================================================
    // Functions
    // ========================================================================

    pub fn param(
        &self,
        name: BindingName<'a>,
        type_annotation: Option<TypeNode<'a>>,
        initializer: Option<Expression<'a>>,
    ) -> ParameterDeclaration<'a> {
        self.param_full(Vec::new(), false, ModifierFlags::NONE, name, type_annotation, initializer)
    }

    pub fn rest_param(&self, name: BindingName<'a>, type_annotation: Option<TypeNode<'a>>) -> ParameterDeclaration<'a> {
        self.param_full(Vec::new(), true, ModifierFlags::NONE, name, type_annotation, None)
    }

    pub fn param_full(
        &self,
        decorators: Vec<Decorator<'a>>,
        dot_dot_dot: bool,
        modifiers: ModifierFlags,
        name: BindingName<'a>,
        type_annotation: Option<TypeNode<'a>>,
        initializer: Option<Expression<'a>>,
    ) -> ParameterDeclaration<'a> {
        let data = self
            .span(SyntaxKind::Parameter, [first(&decorators), Some(name.pos())])
            .with_modifiers(modifiers);
        ParameterDeclaration {
            data,
            decorators: self.list(decorators),
            dot_dot_dot,
            name,
            optional: false,
            type_annotation: type_annotation.map(|t| self.alloc(t)),
            initializer: initializer.map(|e| self.alloc(e)),
        }
    }

    pub fn type_param(
        &self,
        name: Identifier,
        constraint: Option<TypeNode<'a>>,
        default: Option<TypeNode<'a>>,
    ) -> TypeParameterDeclaration<'a> {
        let data = self.span(SyntaxKind::TypeParameter, [Some(name.pos())]);
        TypeParameterDeclaration {
            data,
            name,
            constraint: constraint.map(|t| self.alloc(t)),
            default: default.map(|t| self.alloc(t)),
        }
    }

    pub fn function(
        &self,
        name: Identifier,
        parameters: Vec<ParameterDeclaration<'a>>,
        body: Vec<Statement<'a>>,
    ) -> Statement<'a> {
        Statement::FunctionDeclaration(self.function_full(Some(name), Vec::new(), parameters, None, Some(body)))
    }

    /// Without a body the declaration is an overload signature.
    pub fn function_full(
        &self,
        name: Option<Identifier>,
        type_parameters: Vec<TypeParameterDeclaration<'a>>,
        parameters: Vec<ParameterDeclaration<'a>>,
        return_type: Option<TypeNode<'a>>,
        body: Option<Vec<Statement<'a>>>,
    ) -> FunctionDeclaration<'a> {
        let return_pos = opt(&return_type);
        let body = body.map(|stmts| self.block_node(stmts));
        let data = self.span(
            SyntaxKind::FunctionDeclaration,
            [opt(&name), first(&type_parameters), first(&parameters), return_pos, opt(&body)],
        );
        FunctionDeclaration {
            data,
            name,
            type_parameters: self.list(type_parameters),
            parameters: self.list(parameters),
            return_type: return_type.map(|t| self.alloc(t)),
            body,
        }
    }

    // ========================================================================
    // Classes
    // ========================================================================

    pub fn class(
        &self,
        name: Identifier,
        heritage_clauses: Vec<HeritageClause<'a>>,
        members: Vec<ClassElement<'a>>,
    ) -> Statement<'a> {
        Statement::ClassDeclaration(self.class_node(
            SyntaxKind::ClassDeclaration,
            Vec::new(),
            Some(name),
            Vec::new(),
            heritage_clauses,
            members,
        ))
    }

    pub fn class_full(
        &self,
        decorators: Vec<Decorator<'a>>,
        name: Option<Identifier>,
        type_parameters: Vec<TypeParameterDeclaration<'a>>,
        heritage_clauses: Vec<HeritageClause<'a>>,
        members: Vec<ClassElement<'a>>,
    ) -> Statement<'a> {
        Statement::ClassDeclaration(self.class_node(
            SyntaxKind::ClassDeclaration,
            decorators,
            name,
            type_parameters,
            heritage_clauses,
            members,
        ))
    }

    fn class_node(
        &self,
        kind: SyntaxKind,
        decorators: Vec<Decorator<'a>>,
        name: Option<Identifier>,
        type_parameters: Vec<TypeParameterDeclaration<'a>>,
        heritage_clauses: Vec<HeritageClause<'a>>,
        members: Vec<ClassElement<'a>>,
    ) -> ClassDeclaration<'a> {
        let data = self.span(
            kind,
            [
                first(&decorators),
                opt(&name),
                first(&type_parameters),
                first(&heritage_clauses),
                first(&members),
            ],
        );
        ClassDeclaration {
            data,
            decorators: self.list(decorators),
            name,
            type_parameters: self.list(type_parameters),
            heritage_clauses: self.list(heritage_clauses),
            members: self.list(members),
        }
    }

    pub fn decorator(&self, expression: Expression<'a>) -> Decorator<'a> {
        let data = self.span(SyntaxKind::Decorator, [Some(expression.pos())]);
        Decorator {
            data,
            expression: self.alloc(expression),
        }
    }

    /// `extends` or `implements`, depending on `token`.
    pub fn heritage(&self, token: SyntaxKind, types: Vec<ExpressionWithTypeArguments<'a>>) -> HeritageClause<'a> {
        let data = self.span(SyntaxKind::HeritageClause, [first(&types)]);
        HeritageClause {
            data,
            token,
            types: self.list(types),
        }
    }

    pub fn heritage_type(
        &self,
        expression: Expression<'a>,
        type_arguments: Vec<TypeNode<'a>>,
    ) -> ExpressionWithTypeArguments<'a> {
        let data = self.span(SyntaxKind::ExpressionWithTypeArguments, [Some(expression.pos())]);
        ExpressionWithTypeArguments {
            data,
            expression: self.alloc(expression),
            type_arguments: self.list(type_arguments),
        }
    }

    pub fn extends(&self, expression: Expression<'a>) -> HeritageClause<'a> {
        let ty = self.heritage_type(expression, Vec::new());
        self.heritage(SyntaxKind::ExtendsKeyword, vec![ty])
    }

    pub fn implements(&self, types: Vec<ExpressionWithTypeArguments<'a>>) -> HeritageClause<'a> {
        self.heritage(SyntaxKind::ImplementsKeyword, types)
    }

    pub fn property_decl(
        &self,
        modifiers: ModifierFlags,
        name: PropertyName<'a>,
        type_annotation: Option<TypeNode<'a>>,
        initializer: Option<Expression<'a>>,
    ) -> ClassElement<'a> {
        let data = self
            .span(SyntaxKind::PropertyDeclaration, [Some(name.pos())])
            .with_modifiers(modifiers);
        ClassElement::Property(PropertyDeclaration {
            data,
            decorators: &[],
            name,
            optional: false,
            type_annotation: type_annotation.map(|t| self.alloc(t)),
            initializer: initializer.map(|e| self.alloc(e)),
        })
    }

    pub fn method(
        &self,
        name: PropertyName<'a>,
        parameters: Vec<ParameterDeclaration<'a>>,
        body: Vec<Statement<'a>>,
    ) -> ClassElement<'a> {
        ClassElement::Method(self.method_full(
            MethodKind::Method,
            ModifierFlags::NONE,
            name,
            Vec::new(),
            parameters,
            None,
            Some(body),
        ))
    }

    pub fn method_full(
        &self,
        method_kind: MethodKind,
        modifiers: ModifierFlags,
        name: PropertyName<'a>,
        type_parameters: Vec<TypeParameterDeclaration<'a>>,
        parameters: Vec<ParameterDeclaration<'a>>,
        return_type: Option<TypeNode<'a>>,
        body: Option<Vec<Statement<'a>>>,
    ) -> MethodDeclaration<'a> {
        let body = body.map(|stmts| self.block_node(stmts));
        let data = self
            .span(method_kind.syntax_kind(), [Some(name.pos())])
            .with_modifiers(modifiers);
        MethodDeclaration {
            data,
            decorators: &[],
            method_kind,
            name,
            type_parameters: self.list(type_parameters),
            parameters: self.list(parameters),
            return_type: return_type.map(|t| self.alloc(t)),
            body,
        }
    }

    pub fn constructor(&self, parameters: Vec<ParameterDeclaration<'a>>, body: Vec<Statement<'a>>) -> ClassElement<'a> {
        let body = self.block_node(body);
        let data = self.span(SyntaxKind::Constructor, [first(&parameters), Some(body.pos())]);
        ClassElement::Constructor(ConstructorDeclaration {
            data,
            parameters: self.list(parameters),
            body: Some(body),
        })
    }

    pub fn static_block(&self, body: Vec<Statement<'a>>) -> ClassElement<'a> {
        let body = self.block_node(body);
        let data = self.span(SyntaxKind::ClassStaticBlockDeclaration, [Some(body.pos())]);
        ClassElement::StaticBlock(ClassStaticBlockDeclaration { data, body })
    }

    // ========================================================================
    // Type declarations
    // ========================================================================

    pub fn interface(
        &self,
        name: Identifier,
        type_parameters: Vec<TypeParameterDeclaration<'a>>,
        heritage_clauses: Vec<HeritageClause<'a>>,
        members: Vec<TypeElement<'a>>,
    ) -> Statement<'a> {
        let data = self.span(SyntaxKind::InterfaceDeclaration, [Some(name.pos())]);
        Statement::InterfaceDeclaration(InterfaceDeclaration {
            data,
            name,
            type_parameters: self.list(type_parameters),
            heritage_clauses: self.list(heritage_clauses),
            members: self.list(members),
        })
    }

    pub fn type_alias(
        &self,
        name: Identifier,
        type_parameters: Vec<TypeParameterDeclaration<'a>>,
        type_node: TypeNode<'a>,
    ) -> Statement<'a> {
        let data = self.span(SyntaxKind::TypeAliasDeclaration, [Some(name.pos())]);
        Statement::TypeAliasDeclaration(TypeAliasDeclaration {
            data,
            name,
            type_parameters: self.list(type_parameters),
            type_node: self.alloc(type_node),
        })
    }

    pub fn enum_(&self, name: Identifier, members: Vec<EnumMemberNode<'a>>) -> Statement<'a> {
        let data = self.span(SyntaxKind::EnumDeclaration, [Some(name.pos())]);
        Statement::EnumDeclaration(EnumDeclaration {
            data,
            name,
            members: self.list(members),
        })
    }

    pub fn enum_member(&self, name: PropertyName<'a>, initializer: Option<Expression<'a>>) -> EnumMemberNode<'a> {
        let data = self.span(SyntaxKind::EnumMember, [Some(name.pos())]);
        EnumMemberNode {
            data,
            name,
            initializer: initializer.map(|e| self.alloc(e)),
        }
    }

    pub fn namespace_decl(&self, name: Identifier, body: Vec<Statement<'a>>) -> ModuleDeclaration<'a> {
        let block_data = self.span(SyntaxKind::ModuleBlock, [first(&body)]);
        let block = ModuleBlock {
            data: block_data,
            statements: self.list(body),
        };
        let data = self
            .span(SyntaxKind::ModuleDeclaration, [Some(name.pos())])
            .with_flags(NodeFlags::NAMESPACE);
        ModuleDeclaration {
            data,
            name: ModuleName::Identifier(name),
            body: Some(ModuleBody::Block(block)),
        }
    }

    pub fn namespace(&self, name: Identifier, body: Vec<Statement<'a>>) -> Statement<'a> {
        Statement::ModuleDeclaration(self.namespace_decl(name, body))
    }

    /// `namespace Outer.Inner { ... }` given the already built inner part.
    pub fn namespace_dotted(&self, outer: Identifier, inner: ModuleDeclaration<'a>) -> Statement<'a> {
        let data = self
            .span(SyntaxKind::ModuleDeclaration, [Some(outer.pos())])
            .with_flags(NodeFlags::NAMESPACE);
        Statement::ModuleDeclaration(ModuleDeclaration {
            data,
            name: ModuleName::Identifier(outer),
            body: Some(ModuleBody::Namespace(self.alloc(inner))),
        })
    }

    /// `declare module "name" { ... }`
    pub fn ambient_module(&self, name: &str, body: Vec<Statement<'a>>) -> Statement<'a> {
        let name = self.literal(LiteralKind::String, name);
        let name_pos = name.data.range.pos;
        let block_data = self.span(SyntaxKind::ModuleBlock, [first(&body)]);
        let block = ModuleBlock {
            data: block_data,
            statements: self.list(body),
        };
        let data = self
            .span(SyntaxKind::ModuleDeclaration, [Some(name_pos)])
            .with_modifiers(ModifierFlags::AMBIENT);
        Statement::ModuleDeclaration(ModuleDeclaration {
            data,
            name: ModuleName::StringLiteral(name),
            body: Some(ModuleBody::Block(block)),
        })
    }

    /// `declare global { ... }`
    pub fn declare_global(&self, body: Vec<Statement<'a>>) -> Statement<'a> {
        let name = self.ident("global");
        let mut decl = self.namespace_decl(name, body);
        decl.data.flags = NodeFlags::GLOBAL_AUGMENTATION;
        decl.data.modifier_flags = ModifierFlags::AMBIENT;
        Statement::ModuleDeclaration(decl)
    }

    // ========================================================================
    // Import/Export
    // ========================================================================

    pub fn import(&self, clause: Option<ImportClause<'a>>, from: &str) -> Statement<'a> {
        let module_specifier = self.literal(LiteralKind::String, from);
        let spec_pos = module_specifier.data.range.pos;
        let data = self.span(SyntaxKind::ImportDeclaration, [opt(&clause), Some(spec_pos)]);
        Statement::ImportDeclaration(ImportDeclaration {
            data,
            import_clause: clause,
            module_specifier,
        })
    }

    pub fn import_clause(
        &self,
        is_type_only: bool,
        default: Option<Identifier>,
        named_bindings: Option<NamedImportBindings<'a>>,
    ) -> ImportClause<'a> {
        let data = self.span(SyntaxKind::ImportClause, [opt(&default), opt(&named_bindings)]);
        ImportClause {
            data,
            is_type_only,
            name: default,
            named_bindings,
        }
    }

    /// `import x from "m"`
    pub fn import_default(&self, local: Identifier, from: &str) -> Statement<'a> {
        let clause = self.import_clause(false, Some(local), None);
        self.import(Some(clause), from)
    }

    pub fn named_imports(&self, elements: Vec<ImportSpecifier>) -> NamedImportBindings<'a> {
        let data = self.span(SyntaxKind::NamedImports, [first(&elements)]);
        NamedImportBindings::NamedImports(NamedImports {
            data,
            elements: self.list(elements),
        })
    }

    pub fn namespace_import(&self, local: Identifier) -> NamedImportBindings<'a> {
        let data = self.span(SyntaxKind::NamespaceImport, [Some(local.pos())]);
        NamedImportBindings::NamespaceImport(NamespaceImport { data, name: local })
    }

    /// `imported as local`, or just `local` when `imported` is `None`.
    pub fn import_specifier(&self, is_type_only: bool, imported: Option<Identifier>, local: Identifier) -> ImportSpecifier {
        let data = self.span(SyntaxKind::ImportSpecifier, [opt(&imported), Some(local.pos())]);
        ImportSpecifier {
            data,
            is_type_only,
            property_name: imported,
            name: local,
        }
    }

    /// `import name = A.B`
    pub fn import_equals(&self, name: Identifier, entity: EntityName<'a>) -> Statement<'a> {
        let data = self.span(SyntaxKind::ImportEqualsDeclaration, [Some(name.pos())]);
        Statement::ImportEqualsDeclaration(ImportEqualsDeclaration {
            data,
            is_type_only: false,
            name,
            module_reference: ModuleReference::EntityName(entity),
        })
    }

    /// `import name = require("m")`
    pub fn import_require(&self, name: Identifier, from: &str) -> Statement<'a> {
        let expression = self.literal(LiteralKind::String, from);
        let ext_data = self.span(SyntaxKind::ExternalModuleReference, [Some(expression.data.range.pos)]);
        let data = self.span(SyntaxKind::ImportEqualsDeclaration, [Some(name.pos())]);
        Statement::ImportEqualsDeclaration(ImportEqualsDeclaration {
            data,
            is_type_only: false,
            name,
            module_reference: ModuleReference::External(ExternalModuleReference {
                data: ext_data,
                expression,
            }),
        })
    }

    /// `local as exported`, or just `local` when `exported` is `None`.
    pub fn export_specifier(&self, local: Identifier, exported: Option<Identifier>) -> ExportSpecifier {
        let data = self.span(SyntaxKind::ExportSpecifier, [Some(local.pos())]);
        match exported {
            Some(exported) => ExportSpecifier {
                data,
                is_type_only: false,
                property_name: Some(local),
                name: exported,
            },
            None => ExportSpecifier {
                data,
                is_type_only: false,
                property_name: None,
                name: local,
            },
        }
    }

    /// `export { ... }` or `export { ... } from "m"`.
    pub fn export_named(&self, elements: Vec<ExportSpecifier>, from: Option<&str>) -> Statement<'a> {
        let named_data = self.span(SyntaxKind::NamedExports, [first(&elements)]);
        let named = NamedExports {
            data: named_data,
            elements: self.list(elements),
        };
        let module_specifier = from.map(|m| self.literal(LiteralKind::String, m));
        let data = self.span(SyntaxKind::ExportDeclaration, [Some(named.data.range.pos)]);
        Statement::ExportDeclaration(ExportDeclaration {
            data,
            is_type_only: false,
            export_clause: Some(NamedExportBindings::NamedExports(named)),
            module_specifier,
        })
    }

    /// `export * from "m"`
    pub fn export_star(&self, from: &str) -> Statement<'a> {
        let module_specifier = self.literal(LiteralKind::String, from);
        let data = self.span(SyntaxKind::ExportDeclaration, [Some(module_specifier.data.range.pos)]);
        Statement::ExportDeclaration(ExportDeclaration {
            data,
            is_type_only: false,
            export_clause: None,
            module_specifier: Some(module_specifier),
        })
    }

    /// `export default <expression>`
    pub fn export_default_expr(&self, expression: Expression<'a>) -> Statement<'a> {
        self.export_assignment(false, expression)
    }

    /// `export = <expression>`
    pub fn export_equals(&self, expression: Expression<'a>) -> Statement<'a> {
        self.export_assignment(true, expression)
    }

    fn export_assignment(&self, is_export_equals: bool, expression: Expression<'a>) -> Statement<'a> {
        let data = self.span(SyntaxKind::ExportAssignment, [Some(expression.pos())]);
        Statement::ExportAssignment(ExportAssignment {
            data,
            is_export_equals,
            expression: self.alloc(expression),
        })
    }

    /// `export as namespace Name;`
    pub fn export_as_namespace(&self, name: Identifier) -> Statement<'a> {
        let data = self.span(SyntaxKind::NamespaceExportDeclaration, [Some(name.pos())]);
        Statement::NamespaceExportDeclaration(NamespaceExportDeclaration { data, name })
    }

    // ========================================================================
    // Modifiers
    // ========================================================================

    pub fn with_modifiers(&self, mut stmt: Statement<'a>, modifiers: ModifierFlags) -> Statement<'a> {
        stmt.data_mut().modifier_flags |= modifiers;
        stmt
    }

    pub fn export(&self, stmt: Statement<'a>) -> Statement<'a> {
        self.with_modifiers(stmt, ModifierFlags::EXPORT)
    }

    pub fn export_default(&self, stmt: Statement<'a>) -> Statement<'a> {
        self.with_modifiers(stmt, ModifierFlags::EXPORT_DEFAULT)
    }

    /// `declare ...`
    pub fn declare(&self, stmt: Statement<'a>) -> Statement<'a> {
        self.with_modifiers(stmt, ModifierFlags::AMBIENT)
    }

    // ========================================================================
    // Type Nodes
    // ========================================================================

    pub fn keyword_type(&self, keyword: SyntaxKind) -> TypeNode<'a> {
        TypeNode::Keyword(KeywordTypeNode {
            data: self.leaf(SyntaxKind::KeywordType, 6),
            keyword,
        })
    }

    pub fn number_type(&self) -> TypeNode<'a> {
        self.keyword_type(SyntaxKind::NumberKeyword)
    }

    pub fn string_type(&self) -> TypeNode<'a> {
        self.keyword_type(SyntaxKind::StringKeyword)
    }

    pub fn this_type(&self) -> TypeNode<'a> {
        TypeNode::ThisType(self.leaf(SyntaxKind::ThisType, 4))
    }

    pub fn type_ref(&self, name: EntityName<'a>, type_arguments: Vec<TypeNode<'a>>) -> TypeNode<'a> {
        let data = self.span(SyntaxKind::TypeReference, [Some(name.pos())]);
        TypeNode::TypeReference(TypeReferenceNode {
            data,
            type_name: name,
            type_arguments: self.list(type_arguments),
        })
    }

    /// A type reference to a plain name, `A.B` paths included.
    pub fn tref(&self, name: &str) -> TypeNode<'a> {
        let name = self.entity_path(name);
        self.type_ref(name, Vec::new())
    }

    pub fn type_query(&self, name: EntityName<'a>) -> TypeNode<'a> {
        let data = self.span(SyntaxKind::TypeQuery, [Some(name.pos())]);
        TypeNode::TypeQuery(TypeQueryNode {
            data,
            expr_name: name,
            type_arguments: &[],
        })
    }

    pub fn union(&self, types: Vec<TypeNode<'a>>) -> TypeNode<'a> {
        let data = self.span(SyntaxKind::UnionType, [first(&types)]);
        TypeNode::UnionType(UnionOrIntersectionTypeNode {
            data,
            types: self.list(types),
        })
    }

    pub fn intersection(&self, types: Vec<TypeNode<'a>>) -> TypeNode<'a> {
        let data = self.span(SyntaxKind::IntersectionType, [first(&types)]);
        TypeNode::IntersectionType(UnionOrIntersectionTypeNode {
            data,
            types: self.list(types),
        })
    }

    pub fn array_type(&self, element_type: TypeNode<'a>) -> TypeNode<'a> {
        let data = self.span(SyntaxKind::ArrayType, [Some(element_type.pos())]);
        TypeNode::ArrayType(ArrayTypeNode {
            data,
            element_type: self.alloc(element_type),
        })
    }

    pub fn tuple(&self, elements: Vec<TypeNode<'a>>) -> TypeNode<'a> {
        let data = self.span(SyntaxKind::TupleType, [first(&elements)]);
        TypeNode::TupleType(TupleTypeNode {
            data,
            elements: self.list(elements),
        })
    }

    pub fn paren_type(&self, type_node: TypeNode<'a>) -> TypeNode<'a> {
        let data = self.span(SyntaxKind::ParenthesizedType, [Some(type_node.pos())]);
        TypeNode::ParenthesizedType(WrappedTypeNode {
            data,
            type_node: self.alloc(type_node),
        })
    }

    pub fn function_type(
        &self,
        type_parameters: Vec<TypeParameterDeclaration<'a>>,
        parameters: Vec<ParameterDeclaration<'a>>,
        return_type: TypeNode<'a>,
    ) -> TypeNode<'a> {
        let data = self.span(
            SyntaxKind::FunctionType,
            [first(&type_parameters), first(&parameters), Some(return_type.pos())],
        );
        TypeNode::FunctionType(FunctionTypeNode {
            data,
            is_constructor: false,
            type_parameters: self.list(type_parameters),
            parameters: self.list(parameters),
            return_type: Some(self.alloc(return_type)),
        })
    }

    pub fn type_literal(&self, members: Vec<TypeElement<'a>>) -> TypeNode<'a> {
        let data = self.span(SyntaxKind::TypeLiteral, [first(&members)]);
        TypeNode::TypeLiteral(TypeLiteralNode {
            data,
            members: self.list(members),
        })
    }

    pub fn conditional_type(
        &self,
        check_type: TypeNode<'a>,
        extends_type: TypeNode<'a>,
        true_type: TypeNode<'a>,
        false_type: TypeNode<'a>,
    ) -> TypeNode<'a> {
        let data = self.span(SyntaxKind::ConditionalType, [Some(check_type.pos())]);
        TypeNode::ConditionalType(ConditionalTypeNode {
            data,
            check_type: self.alloc(check_type),
            extends_type: self.alloc(extends_type),
            true_type: self.alloc(true_type),
            false_type: self.alloc(false_type),
        })
    }

    /// `infer name`
    pub fn infer(&self, name: Identifier) -> TypeNode<'a> {
        let type_parameter = self.type_param(name, None, None);
        let data = self.span(SyntaxKind::InferType, [Some(type_parameter.pos())]);
        TypeNode::InferType(InferTypeNode {
            data,
            type_parameter: self.alloc(type_parameter),
        })
    }

    pub fn mapped_type(
        &self,
        type_parameter: TypeParameterDeclaration<'a>,
        name_type: Option<TypeNode<'a>>,
        type_node: Option<TypeNode<'a>>,
    ) -> TypeNode<'a> {
        let data = self.span(SyntaxKind::MappedType, [Some(type_parameter.pos())]);
        TypeNode::MappedType(MappedTypeNode {
            data,
            type_parameter: self.alloc(type_parameter),
            name_type: name_type.map(|t| self.alloc(t)),
            type_node: type_node.map(|t| self.alloc(t)),
        })
    }

    pub fn indexed_access(&self, object_type: TypeNode<'a>, index_type: TypeNode<'a>) -> TypeNode<'a> {
        let data = self.span(SyntaxKind::IndexedAccessType, [Some(object_type.pos())]);
        TypeNode::IndexedAccessType(IndexedAccessTypeNode {
            data,
            object_type: self.alloc(object_type),
            index_type: self.alloc(index_type),
        })
    }

    pub fn keyof(&self, type_node: TypeNode<'a>) -> TypeNode<'a> {
        let data = self.span(SyntaxKind::TypeOperator, [Some(type_node.pos())]);
        TypeNode::TypeOperator(TypeOperatorNode {
            data,
            operator: SyntaxKind::KeyOfKeyword,
            type_node: self.alloc(type_node),
        })
    }

    pub fn literal_type(&self, literal: Expression<'a>) -> TypeNode<'a> {
        let data = self.span(SyntaxKind::LiteralType, [Some(literal.pos())]);
        TypeNode::LiteralType(LiteralTypeNode {
            data,
            literal: self.alloc(literal),
        })
    }

    /// `name is T`, or `asserts name` / `asserts name is T`.
    pub fn type_predicate(&self, asserts: bool, name: Identifier, type_node: Option<TypeNode<'a>>) -> TypeNode<'a> {
        let data = self.span(SyntaxKind::TypePredicate, [Some(name.pos())]);
        TypeNode::TypePredicate(TypePredicateNode {
            data,
            asserts,
            parameter_name: TypePredicateParameterName::Identifier(name),
            type_node: type_node.map(|t| self.alloc(t)),
        })
    }

    /// `import("module").Qualifier`
    pub fn import_type(&self, module: &str, qualifier: Option<&str>) -> TypeNode<'a> {
        let argument = self.literal_type(self.string(module));
        let argument_pos = argument.pos();
        let qualifier = qualifier.map(|q| self.entity_path(q));
        let data = self.span(SyntaxKind::ImportType, [Some(argument_pos)]);
        TypeNode::ImportType(ImportTypeNode {
            data,
            is_type_of: false,
            argument: self.alloc(argument),
            qualifier,
            type_arguments: &[],
        })
    }

    // -- Type elements --

    pub fn property_signature(&self, name: PropertyName<'a>, type_annotation: Option<TypeNode<'a>>) -> TypeElement<'a> {
        let data = self.span(SyntaxKind::PropertySignature, [Some(name.pos())]);
        TypeElement::PropertySignature(PropertySignatureNode {
            data,
            name,
            optional: false,
            type_annotation: type_annotation.map(|t| self.alloc(t)),
        })
    }

    pub fn method_signature(
        &self,
        name: PropertyName<'a>,
        type_parameters: Vec<TypeParameterDeclaration<'a>>,
        parameters: Vec<ParameterDeclaration<'a>>,
        return_type: Option<TypeNode<'a>>,
    ) -> TypeElement<'a> {
        let data = self.span(SyntaxKind::MethodSignature, [Some(name.pos())]);
        TypeElement::MethodSignature(MethodSignatureNode {
            data,
            name,
            optional: false,
            type_parameters: self.list(type_parameters),
            parameters: self.list(parameters),
            return_type: return_type.map(|t| self.alloc(t)),
        })
    }

    pub fn call_signature(
        &self,
        is_construct: bool,
        type_parameters: Vec<TypeParameterDeclaration<'a>>,
        parameters: Vec<ParameterDeclaration<'a>>,
        return_type: Option<TypeNode<'a>>,
    ) -> TypeElement<'a> {
        let kind = if is_construct {
            SyntaxKind::ConstructSignature
        } else {
            SyntaxKind::CallSignature
        };
        let data = self.span(
            kind,
            [first(&type_parameters), first(&parameters), opt(&return_type)],
        );
        TypeElement::CallSignature(CallSignatureNode {
            data,
            is_construct,
            type_parameters: self.list(type_parameters),
            parameters: self.list(parameters),
            return_type: return_type.map(|t| self.alloc(t)),
        })
    }

    pub fn index_signature(&self, parameters: Vec<ParameterDeclaration<'a>>, type_annotation: TypeNode<'a>) -> TypeElement<'a> {
        let data = self.span(SyntaxKind::IndexSignature, [first(&parameters)]);
        TypeElement::IndexSignature(IndexSignatureNode {
            data,
            parameters: self.list(parameters),
            type_annotation: Some(self.alloc(type_annotation)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaves_are_laid_out_in_creation_order() {
        let arena = Bump::new();
        let b = NodeBuilder::new(&arena);
        let a = b.ident("a");
        let bc = b.ident("bc");
        assert!(a.data.range.precedes(bc.data.range));
        assert_eq!(bc.data.range.len(), 2);
        assert_ne!(a.data.id, bc.data.id);
        assert_eq!(b.interner().resolve(bc.text), "bc");
    }

    #[test]
    fn test_composite_spans_its_children() {
        let arena = Bump::new();
        let b = NodeBuilder::new(&arena);
        let stmt = b.let_(b.binding("x"), Some(b.num("1")));
        let Statement::VariableStatement(ref var) = stmt else {
            panic!("expected a variable statement");
        };
        let decl = &var.declaration_list.declarations[0];
        assert!(var.data.range.contains_range(decl.data.range));
        assert!(decl.data.range.contains_range(decl.name.data().range));
        assert!(decl.data.range.contains_range(decl.initializer.unwrap().data().range));
        assert!(var.declaration_list.data.flags.contains(NodeFlags::LET));
    }

    #[test]
    fn test_source_file_shares_interner() {
        let arena = Bump::new();
        let b = NodeBuilder::new(&arena);
        let file = b.source_file(vec![b.expr_stmt(b.id("x"))]);
        assert!(file.interner.same_as(b.interner()));
        assert_eq!(file.statements.len(), 1);
        assert!(file.data.range.contains_range(file.statements[0].data().range));
    }

    #[test]
    fn test_entity_path_nests_left() {
        let arena = Bump::new();
        let b = NodeBuilder::new(&arena);
        let name = b.entity_path("A.B.C");
        assert_eq!(b.interner().resolve(name.leftmost().text), "A");
        let EntityName::QualifiedName(q) = name else {
            panic!("expected a qualified name");
        };
        assert_eq!(b.interner().resolve(q.right.text), "C");
    }

    #[test]
    fn test_modifiers_are_attached() {
        let arena = Bump::new();
        let b = NodeBuilder::new(&arena);
        let stmt = b.export(b.function(b.ident("f"), vec![], vec![]));
        assert!(stmt.data().has_modifier(ModifierFlags::EXPORT));
        let stmt = b.declare(stmt);
        assert!(stmt.data().has_modifier(ModifierFlags::EXPORT | ModifierFlags::AMBIENT));
    }
}
