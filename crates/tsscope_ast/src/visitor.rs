//! Depth-first tree traversal.
//!
//! [`AstVisitor`] has one method per node kind. Every default method forwards
//! to the matching `walk_*` function, which reports the node through
//! [`AstVisitor::visit_node_data`] and then visits the children in source
//! order. Implementors override the methods they care about and call the
//! `walk_*` function to continue into the children.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;

pub trait AstVisitor<'a> {
    /// Called once for every node reached by a `walk_*` function, with the
    /// kind its shape requires.
    fn visit_node_data(&mut self, _data: &NodeData, _expected: SyntaxKind) {}

    fn visit_source_file(&mut self, node: &SourceFile<'a>) {
        walk_source_file(self, node)
    }

    // -- Statements --

    fn visit_statement(&mut self, stmt: &Statement<'a>) {
        walk_statement(self, stmt)
    }

    fn visit_block(&mut self, node: &Block<'a>) {
        walk_block(self, node)
    }

    fn visit_variable_statement(&mut self, node: &VariableStatement<'a>) {
        walk_variable_statement(self, node)
    }

    fn visit_variable_declaration_list(&mut self, node: &VariableDeclarationList<'a>) {
        walk_variable_declaration_list(self, node)
    }

    fn visit_variable_declaration(&mut self, node: &VariableDeclaration<'a>) {
        walk_variable_declaration(self, node)
    }

    fn visit_expression_statement(&mut self, node: &ExpressionStatement<'a>) {
        walk_expression_statement(self, node)
    }

    fn visit_if_statement(&mut self, node: &IfStatement<'a>) {
        walk_if_statement(self, node)
    }

    fn visit_do_statement(&mut self, node: &DoStatement<'a>) {
        walk_do_statement(self, node)
    }

    fn visit_while_statement(&mut self, node: &WhileStatement<'a>) {
        walk_while_statement(self, node)
    }

    fn visit_for_statement(&mut self, node: &ForStatement<'a>) {
        walk_for_statement(self, node)
    }

    fn visit_for_in_statement(&mut self, node: &ForInOrOfStatement<'a>) {
        walk_for_in_or_of_statement(self, node, SyntaxKind::ForInStatement)
    }

    fn visit_for_of_statement(&mut self, node: &ForInOrOfStatement<'a>) {
        walk_for_in_or_of_statement(self, node, SyntaxKind::ForOfStatement)
    }

    fn visit_for_initializer(&mut self, node: &ForInitializer<'a>) {
        walk_for_initializer(self, node)
    }

    fn visit_jump_statement(&mut self, node: &JumpStatement, kind: SyntaxKind) {
        walk_jump_statement(self, node, kind)
    }

    fn visit_return_statement(&mut self, node: &ReturnStatement<'a>) {
        walk_return_statement(self, node)
    }

    fn visit_with_statement(&mut self, node: &WithStatement<'a>) {
        walk_with_statement(self, node)
    }

    fn visit_switch_statement(&mut self, node: &SwitchStatement<'a>) {
        walk_switch_statement(self, node)
    }

    fn visit_case_block(&mut self, node: &CaseBlock<'a>) {
        walk_case_block(self, node)
    }

    fn visit_case_clause(&mut self, node: &CaseClause<'a>) {
        walk_case_clause(self, node)
    }

    fn visit_labeled_statement(&mut self, node: &LabeledStatement<'a>) {
        walk_labeled_statement(self, node)
    }

    fn visit_throw_statement(&mut self, node: &ThrowStatement<'a>) {
        walk_throw_statement(self, node)
    }

    fn visit_try_statement(&mut self, node: &TryStatement<'a>) {
        walk_try_statement(self, node)
    }

    fn visit_catch_clause(&mut self, node: &CatchClause<'a>) {
        walk_catch_clause(self, node)
    }

    // -- Declarations --

    fn visit_function_declaration(&mut self, node: &FunctionDeclaration<'a>) {
        walk_function_declaration(self, node)
    }

    fn visit_class_declaration(&mut self, node: &ClassDeclaration<'a>) {
        walk_class(self, node, SyntaxKind::ClassDeclaration)
    }

    fn visit_class_expression(&mut self, node: &ClassDeclaration<'a>) {
        walk_class(self, node, SyntaxKind::ClassExpression)
    }

    fn visit_class_element(&mut self, elem: &ClassElement<'a>) {
        walk_class_element(self, elem)
    }

    fn visit_property_declaration(&mut self, node: &PropertyDeclaration<'a>) {
        walk_property_declaration(self, node)
    }

    fn visit_method_declaration(&mut self, node: &MethodDeclaration<'a>) {
        walk_method_declaration(self, node)
    }

    fn visit_constructor(&mut self, node: &ConstructorDeclaration<'a>) {
        walk_constructor(self, node)
    }

    fn visit_class_static_block(&mut self, node: &ClassStaticBlockDeclaration<'a>) {
        walk_class_static_block(self, node)
    }

    fn visit_interface_declaration(&mut self, node: &InterfaceDeclaration<'a>) {
        walk_interface_declaration(self, node)
    }

    fn visit_type_alias_declaration(&mut self, node: &TypeAliasDeclaration<'a>) {
        walk_type_alias_declaration(self, node)
    }

    fn visit_enum_declaration(&mut self, node: &EnumDeclaration<'a>) {
        walk_enum_declaration(self, node)
    }

    fn visit_enum_member(&mut self, node: &EnumMemberNode<'a>) {
        walk_enum_member(self, node)
    }

    fn visit_module_declaration(&mut self, node: &ModuleDeclaration<'a>) {
        walk_module_declaration(self, node)
    }

    fn visit_module_block(&mut self, node: &ModuleBlock<'a>) {
        walk_module_block(self, node)
    }

    fn visit_import_declaration(&mut self, node: &ImportDeclaration<'a>) {
        walk_import_declaration(self, node)
    }

    fn visit_import_clause(&mut self, node: &ImportClause<'a>) {
        walk_import_clause(self, node)
    }

    fn visit_import_specifier(&mut self, node: &ImportSpecifier) {
        walk_import_specifier(self, node)
    }

    fn visit_import_equals_declaration(&mut self, node: &ImportEqualsDeclaration<'a>) {
        walk_import_equals_declaration(self, node)
    }

    fn visit_export_declaration(&mut self, node: &ExportDeclaration<'a>) {
        walk_export_declaration(self, node)
    }

    fn visit_export_specifier(&mut self, node: &ExportSpecifier) {
        walk_export_specifier(self, node)
    }

    fn visit_export_assignment(&mut self, node: &ExportAssignment<'a>) {
        walk_export_assignment(self, node)
    }

    fn visit_namespace_export_declaration(&mut self, node: &NamespaceExportDeclaration) {
        walk_namespace_export_declaration(self, node)
    }

    fn visit_parameter(&mut self, node: &ParameterDeclaration<'a>) {
        walk_parameter(self, node)
    }

    fn visit_type_parameter(&mut self, node: &TypeParameterDeclaration<'a>) {
        walk_type_parameter(self, node)
    }

    fn visit_decorator(&mut self, node: &Decorator<'a>) {
        walk_decorator(self, node)
    }

    fn visit_heritage_clause(&mut self, node: &HeritageClause<'a>) {
        walk_heritage_clause(self, node)
    }

    fn visit_expression_with_type_arguments(&mut self, node: &ExpressionWithTypeArguments<'a>) {
        walk_expression_with_type_arguments(self, node)
    }

    // -- Names and patterns --

    /// Every identifier in the tree, whatever its role.
    fn visit_identifier(&mut self, node: &Identifier) {
        self.visit_node_data(&node.data, SyntaxKind::Identifier)
    }

    fn visit_private_identifier(&mut self, node: &Identifier) {
        self.visit_node_data(&node.data, SyntaxKind::PrivateIdentifier)
    }

    fn visit_property_name(&mut self, name: &PropertyName<'a>) {
        walk_property_name(self, name)
    }

    fn visit_entity_name(&mut self, name: &EntityName<'a>) {
        walk_entity_name(self, name)
    }

    fn visit_binding_name(&mut self, name: &BindingName<'a>) {
        walk_binding_name(self, name)
    }

    fn visit_binding_element(&mut self, node: &BindingElement<'a>) {
        walk_binding_element(self, node)
    }

    // -- Expressions --

    fn visit_expression(&mut self, expr: &Expression<'a>) {
        walk_expression(self, expr)
    }

    fn visit_literal(&mut self, node: &LiteralExpression) {
        self.visit_node_data(&node.data, SyntaxKind::LiteralExpression)
    }

    fn visit_object_literal_element(&mut self, elem: &ObjectLiteralElement<'a>) {
        walk_object_literal_element(self, elem)
    }

    fn visit_property_access(&mut self, node: &PropertyAccessExpression<'a>) {
        walk_property_access(self, node)
    }

    fn visit_call_expression(&mut self, node: &CallExpression<'a>) {
        walk_call_expression(self, node)
    }

    fn visit_function_expression(&mut self, node: &FunctionExpression<'a>) {
        walk_function_expression(self, node)
    }

    fn visit_arrow_function(&mut self, node: &ArrowFunction<'a>) {
        walk_arrow_function(self, node)
    }

    fn visit_unary_expression(&mut self, node: &UnaryExpression<'a>) {
        walk_unary_expression(self, node)
    }

    fn visit_update_expression(&mut self, node: &UpdateExpression<'a>) {
        walk_update_expression(self, node)
    }

    fn visit_binary_expression(&mut self, node: &BinaryExpression<'a>) {
        walk_binary_expression(self, node)
    }

    // -- Types --

    fn visit_type_node(&mut self, ty: &TypeNode<'a>) {
        walk_type_node(self, ty)
    }

    fn visit_type_reference(&mut self, node: &TypeReferenceNode<'a>) {
        walk_type_reference(self, node)
    }

    fn visit_function_type(&mut self, node: &FunctionTypeNode<'a>) {
        walk_function_type(self, node)
    }

    fn visit_type_query(&mut self, node: &TypeQueryNode<'a>) {
        walk_type_query(self, node)
    }

    fn visit_conditional_type(&mut self, node: &ConditionalTypeNode<'a>) {
        walk_conditional_type(self, node)
    }

    fn visit_infer_type(&mut self, node: &InferTypeNode<'a>) {
        walk_infer_type(self, node)
    }

    fn visit_mapped_type(&mut self, node: &MappedTypeNode<'a>) {
        walk_mapped_type(self, node)
    }

    fn visit_import_type(&mut self, node: &ImportTypeNode<'a>) {
        walk_import_type(self, node)
    }

    fn visit_type_predicate(&mut self, node: &TypePredicateNode<'a>) {
        walk_type_predicate(self, node)
    }

    fn visit_type_element(&mut self, elem: &TypeElement<'a>) {
        walk_type_element(self, elem)
    }

    fn visit_method_signature(&mut self, node: &MethodSignatureNode<'a>) {
        walk_method_signature(self, node)
    }

    fn visit_call_signature(&mut self, node: &CallSignatureNode<'a>) {
        walk_call_signature(self, node)
    }

    fn visit_index_signature(&mut self, node: &IndexSignatureNode<'a>) {
        walk_index_signature(self, node)
    }
}

// ============================================================================
// Walk functions
// ============================================================================

pub fn walk_source_file<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &SourceFile<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::SourceFile);
    for stmt in node.statements.iter() {
        v.visit_statement(stmt);
    }
}

pub fn walk_statement<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, stmt: &Statement<'a>) {
    match stmt {
        Statement::VariableStatement(n) => v.visit_variable_statement(n),
        Statement::FunctionDeclaration(n) => v.visit_function_declaration(n),
        Statement::ClassDeclaration(n) => v.visit_class_declaration(n),
        Statement::InterfaceDeclaration(n) => v.visit_interface_declaration(n),
        Statement::TypeAliasDeclaration(n) => v.visit_type_alias_declaration(n),
        Statement::EnumDeclaration(n) => v.visit_enum_declaration(n),
        Statement::ModuleDeclaration(n) => v.visit_module_declaration(n),
        Statement::ImportDeclaration(n) => v.visit_import_declaration(n),
        Statement::ImportEqualsDeclaration(n) => v.visit_import_equals_declaration(n),
        Statement::ExportDeclaration(n) => v.visit_export_declaration(n),
        Statement::ExportAssignment(n) => v.visit_export_assignment(n),
        Statement::NamespaceExportDeclaration(n) => v.visit_namespace_export_declaration(n),
        Statement::Block(n) => v.visit_block(n),
        Statement::EmptyStatement(data) => v.visit_node_data(data, SyntaxKind::EmptyStatement),
        Statement::ExpressionStatement(n) => v.visit_expression_statement(n),
        Statement::IfStatement(n) => v.visit_if_statement(n),
        Statement::DoStatement(n) => v.visit_do_statement(n),
        Statement::WhileStatement(n) => v.visit_while_statement(n),
        Statement::ForStatement(n) => v.visit_for_statement(n),
        Statement::ForInStatement(n) => v.visit_for_in_statement(n),
        Statement::ForOfStatement(n) => v.visit_for_of_statement(n),
        Statement::ContinueStatement(n) => v.visit_jump_statement(n, SyntaxKind::ContinueStatement),
        Statement::BreakStatement(n) => v.visit_jump_statement(n, SyntaxKind::BreakStatement),
        Statement::ReturnStatement(n) => v.visit_return_statement(n),
        Statement::WithStatement(n) => v.visit_with_statement(n),
        Statement::SwitchStatement(n) => v.visit_switch_statement(n),
        Statement::LabeledStatement(n) => v.visit_labeled_statement(n),
        Statement::ThrowStatement(n) => v.visit_throw_statement(n),
        Statement::TryStatement(n) => v.visit_try_statement(n),
        Statement::DebuggerStatement(data) => v.visit_node_data(data, SyntaxKind::DebuggerStatement),
    }
}

pub fn walk_block<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &Block<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::Block);
    for stmt in node.statements.iter() {
        v.visit_statement(stmt);
    }
}

pub fn walk_variable_statement<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &VariableStatement<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::VariableStatement);
    v.visit_variable_declaration_list(&node.declaration_list);
}

pub fn walk_variable_declaration_list<'a, V: AstVisitor<'a> + ?Sized>(
    v: &mut V,
    node: &VariableDeclarationList<'a>,
) {
    v.visit_node_data(&node.data, SyntaxKind::VariableDeclarationList);
    for decl in node.declarations.iter() {
        v.visit_variable_declaration(decl);
    }
}

pub fn walk_variable_declaration<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &VariableDeclaration<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::VariableDeclaration);
    v.visit_binding_name(&node.name);
    if let Some(ty) = node.type_annotation {
        v.visit_type_node(ty);
    }
    if let Some(init) = node.initializer {
        v.visit_expression(init);
    }
}

pub fn walk_expression_statement<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ExpressionStatement<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::ExpressionStatement);
    v.visit_expression(node.expression);
}

pub fn walk_if_statement<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &IfStatement<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::IfStatement);
    v.visit_expression(node.expression);
    v.visit_statement(node.then_statement);
    if let Some(else_stmt) = node.else_statement {
        v.visit_statement(else_stmt);
    }
}

pub fn walk_do_statement<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &DoStatement<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::DoStatement);
    v.visit_statement(node.statement);
    v.visit_expression(node.expression);
}

pub fn walk_while_statement<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &WhileStatement<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::WhileStatement);
    v.visit_expression(node.expression);
    v.visit_statement(node.statement);
}

pub fn walk_for_statement<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ForStatement<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::ForStatement);
    if let Some(ref init) = node.initializer {
        v.visit_for_initializer(init);
    }
    if let Some(cond) = node.condition {
        v.visit_expression(cond);
    }
    if let Some(incr) = node.incrementor {
        v.visit_expression(incr);
    }
    v.visit_statement(node.statement);
}

pub fn walk_for_in_or_of_statement<'a, V: AstVisitor<'a> + ?Sized>(
    v: &mut V,
    node: &ForInOrOfStatement<'a>,
    kind: SyntaxKind,
) {
    v.visit_node_data(&node.data, kind);
    v.visit_for_initializer(&node.initializer);
    v.visit_expression(node.expression);
    v.visit_statement(node.statement);
}

pub fn walk_for_initializer<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, init: &ForInitializer<'a>) {
    match init {
        ForInitializer::VariableDeclarationList(list) => v.visit_variable_declaration_list(list),
        ForInitializer::Expression(expr) => v.visit_expression(expr),
    }
}

pub fn walk_jump_statement<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &JumpStatement, kind: SyntaxKind) {
    v.visit_node_data(&node.data, kind);
    if let Some(ref label) = node.label {
        v.visit_identifier(label);
    }
}

pub fn walk_return_statement<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ReturnStatement<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::ReturnStatement);
    if let Some(expr) = node.expression {
        v.visit_expression(expr);
    }
}

pub fn walk_with_statement<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &WithStatement<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::WithStatement);
    v.visit_expression(node.expression);
    v.visit_statement(node.statement);
}

pub fn walk_switch_statement<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &SwitchStatement<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::SwitchStatement);
    v.visit_expression(node.expression);
    v.visit_case_block(&node.case_block);
}

pub fn walk_case_block<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &CaseBlock<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::CaseBlock);
    for clause in node.clauses.iter() {
        v.visit_case_clause(clause);
    }
}

pub fn walk_case_clause<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &CaseClause<'a>) {
    let kind = if node.expression.is_some() {
        SyntaxKind::CaseClause
    } else {
        SyntaxKind::DefaultClause
    };
    v.visit_node_data(&node.data, kind);
    if let Some(expr) = node.expression {
        v.visit_expression(expr);
    }
    for stmt in node.statements.iter() {
        v.visit_statement(stmt);
    }
}

pub fn walk_labeled_statement<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &LabeledStatement<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::LabeledStatement);
    v.visit_identifier(&node.label);
    v.visit_statement(node.statement);
}

pub fn walk_throw_statement<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ThrowStatement<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::ThrowStatement);
    v.visit_expression(node.expression);
}

pub fn walk_try_statement<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &TryStatement<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::TryStatement);
    v.visit_block(&node.try_block);
    if let Some(ref clause) = node.catch_clause {
        v.visit_catch_clause(clause);
    }
    if let Some(ref finally) = node.finally_block {
        v.visit_block(finally);
    }
}

pub fn walk_catch_clause<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &CatchClause<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::CatchClause);
    if let Some(ref decl) = node.variable_declaration {
        v.visit_variable_declaration(decl);
    }
    v.visit_block(&node.block);
}

// -- Declarations --

pub fn walk_function_declaration<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &FunctionDeclaration<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::FunctionDeclaration);
    if let Some(ref name) = node.name {
        v.visit_identifier(name);
    }
    walk_signature(v, node.type_parameters, node.parameters, node.return_type);
    if let Some(ref body) = node.body {
        v.visit_block(body);
    }
}

/// Type parameters, parameters and return type, in that order.
pub fn walk_signature<'a, V: AstVisitor<'a> + ?Sized>(
    v: &mut V,
    type_parameters: &[TypeParameterDeclaration<'a>],
    parameters: &[ParameterDeclaration<'a>],
    return_type: Option<&TypeNode<'a>>,
) {
    for tp in type_parameters.iter() {
        v.visit_type_parameter(tp);
    }
    for param in parameters.iter() {
        v.visit_parameter(param);
    }
    if let Some(ret) = return_type {
        v.visit_type_node(ret);
    }
}

pub fn walk_class<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ClassDeclaration<'a>, kind: SyntaxKind) {
    v.visit_node_data(&node.data, kind);
    for decorator in node.decorators.iter() {
        v.visit_decorator(decorator);
    }
    if let Some(ref name) = node.name {
        v.visit_identifier(name);
    }
    for tp in node.type_parameters.iter() {
        v.visit_type_parameter(tp);
    }
    for clause in node.heritage_clauses.iter() {
        v.visit_heritage_clause(clause);
    }
    for member in node.members.iter() {
        v.visit_class_element(member);
    }
}

pub fn walk_class_element<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, elem: &ClassElement<'a>) {
    match elem {
        ClassElement::Property(n) => v.visit_property_declaration(n),
        ClassElement::Method(n) => v.visit_method_declaration(n),
        ClassElement::Constructor(n) => v.visit_constructor(n),
        ClassElement::IndexSignature(n) => v.visit_index_signature(n),
        ClassElement::StaticBlock(n) => v.visit_class_static_block(n),
        ClassElement::Semicolon(data) => v.visit_node_data(data, SyntaxKind::SemicolonClassElement),
    }
}

pub fn walk_property_declaration<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &PropertyDeclaration<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::PropertyDeclaration);
    for decorator in node.decorators.iter() {
        v.visit_decorator(decorator);
    }
    v.visit_property_name(&node.name);
    if let Some(ty) = node.type_annotation {
        v.visit_type_node(ty);
    }
    if let Some(init) = node.initializer {
        v.visit_expression(init);
    }
}

pub fn walk_method_declaration<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &MethodDeclaration<'a>) {
    v.visit_node_data(&node.data, node.method_kind.syntax_kind());
    for decorator in node.decorators.iter() {
        v.visit_decorator(decorator);
    }
    v.visit_property_name(&node.name);
    walk_signature(v, node.type_parameters, node.parameters, node.return_type);
    if let Some(ref body) = node.body {
        v.visit_block(body);
    }
}

pub fn walk_constructor<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ConstructorDeclaration<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::Constructor);
    for param in node.parameters.iter() {
        v.visit_parameter(param);
    }
    if let Some(ref body) = node.body {
        v.visit_block(body);
    }
}

pub fn walk_class_static_block<'a, V: AstVisitor<'a> + ?Sized>(
    v: &mut V,
    node: &ClassStaticBlockDeclaration<'a>,
) {
    v.visit_node_data(&node.data, SyntaxKind::ClassStaticBlockDeclaration);
    v.visit_block(&node.body);
}

pub fn walk_interface_declaration<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &InterfaceDeclaration<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::InterfaceDeclaration);
    v.visit_identifier(&node.name);
    for tp in node.type_parameters.iter() {
        v.visit_type_parameter(tp);
    }
    for clause in node.heritage_clauses.iter() {
        v.visit_heritage_clause(clause);
    }
    for member in node.members.iter() {
        v.visit_type_element(member);
    }
}

pub fn walk_type_alias_declaration<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &TypeAliasDeclaration<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::TypeAliasDeclaration);
    v.visit_identifier(&node.name);
    for tp in node.type_parameters.iter() {
        v.visit_type_parameter(tp);
    }
    v.visit_type_node(node.type_node);
}

pub fn walk_enum_declaration<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &EnumDeclaration<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::EnumDeclaration);
    v.visit_identifier(&node.name);
    for member in node.members.iter() {
        v.visit_enum_member(member);
    }
}

pub fn walk_enum_member<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &EnumMemberNode<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::EnumMember);
    v.visit_property_name(&node.name);
    if let Some(init) = node.initializer {
        v.visit_expression(init);
    }
}

pub fn walk_module_declaration<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ModuleDeclaration<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::ModuleDeclaration);
    match node.name {
        ModuleName::Identifier(ref id) => v.visit_identifier(id),
        ModuleName::StringLiteral(ref lit) => v.visit_literal(lit),
    }
    match node.body {
        Some(ModuleBody::Block(ref block)) => v.visit_module_block(block),
        Some(ModuleBody::Namespace(inner)) => v.visit_module_declaration(inner),
        None => {}
    }
}

pub fn walk_module_block<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ModuleBlock<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::ModuleBlock);
    for stmt in node.statements.iter() {
        v.visit_statement(stmt);
    }
}

pub fn walk_import_declaration<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ImportDeclaration<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::ImportDeclaration);
    if let Some(ref clause) = node.import_clause {
        v.visit_import_clause(clause);
    }
    v.visit_literal(&node.module_specifier);
}

pub fn walk_import_clause<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ImportClause<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::ImportClause);
    if let Some(ref name) = node.name {
        v.visit_identifier(name);
    }
    match node.named_bindings {
        Some(NamedImportBindings::NamespaceImport(ref ns)) => {
            v.visit_node_data(&ns.data, SyntaxKind::NamespaceImport);
            v.visit_identifier(&ns.name);
        }
        Some(NamedImportBindings::NamedImports(ref named)) => {
            v.visit_node_data(&named.data, SyntaxKind::NamedImports);
            for spec in named.elements.iter() {
                v.visit_import_specifier(spec);
            }
        }
        None => {}
    }
}

pub fn walk_import_specifier<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ImportSpecifier) {
    v.visit_node_data(&node.data, SyntaxKind::ImportSpecifier);
    if let Some(ref prop) = node.property_name {
        v.visit_identifier(prop);
    }
    v.visit_identifier(&node.name);
}

pub fn walk_import_equals_declaration<'a, V: AstVisitor<'a> + ?Sized>(
    v: &mut V,
    node: &ImportEqualsDeclaration<'a>,
) {
    v.visit_node_data(&node.data, SyntaxKind::ImportEqualsDeclaration);
    v.visit_identifier(&node.name);
    match node.module_reference {
        ModuleReference::External(ref ext) => {
            v.visit_node_data(&ext.data, SyntaxKind::ExternalModuleReference);
            v.visit_literal(&ext.expression);
        }
        ModuleReference::EntityName(ref name) => v.visit_entity_name(name),
    }
}

pub fn walk_export_declaration<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ExportDeclaration<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::ExportDeclaration);
    match node.export_clause {
        Some(NamedExportBindings::NamespaceExport(ref ns)) => {
            v.visit_node_data(&ns.data, SyntaxKind::NamespaceExport);
            v.visit_identifier(&ns.name);
        }
        Some(NamedExportBindings::NamedExports(ref named)) => {
            v.visit_node_data(&named.data, SyntaxKind::NamedExports);
            for spec in named.elements.iter() {
                v.visit_export_specifier(spec);
            }
        }
        None => {}
    }
    if let Some(ref spec) = node.module_specifier {
        v.visit_literal(spec);
    }
}

pub fn walk_export_specifier<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ExportSpecifier) {
    v.visit_node_data(&node.data, SyntaxKind::ExportSpecifier);
    if let Some(ref prop) = node.property_name {
        v.visit_identifier(prop);
    }
    v.visit_identifier(&node.name);
}

pub fn walk_export_assignment<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ExportAssignment<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::ExportAssignment);
    v.visit_expression(node.expression);
}

pub fn walk_namespace_export_declaration<'a, V: AstVisitor<'a> + ?Sized>(
    v: &mut V,
    node: &NamespaceExportDeclaration,
) {
    v.visit_node_data(&node.data, SyntaxKind::NamespaceExportDeclaration);
    v.visit_identifier(&node.name);
}

pub fn walk_parameter<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ParameterDeclaration<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::Parameter);
    for decorator in node.decorators.iter() {
        v.visit_decorator(decorator);
    }
    v.visit_binding_name(&node.name);
    if let Some(ty) = node.type_annotation {
        v.visit_type_node(ty);
    }
    if let Some(init) = node.initializer {
        v.visit_expression(init);
    }
}

pub fn walk_type_parameter<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &TypeParameterDeclaration<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::TypeParameter);
    v.visit_identifier(&node.name);
    if let Some(constraint) = node.constraint {
        v.visit_type_node(constraint);
    }
    if let Some(default) = node.default {
        v.visit_type_node(default);
    }
}

pub fn walk_decorator<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &Decorator<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::Decorator);
    v.visit_expression(node.expression);
}

pub fn walk_heritage_clause<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &HeritageClause<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::HeritageClause);
    for ty in node.types.iter() {
        v.visit_expression_with_type_arguments(ty);
    }
}

pub fn walk_expression_with_type_arguments<'a, V: AstVisitor<'a> + ?Sized>(
    v: &mut V,
    node: &ExpressionWithTypeArguments<'a>,
) {
    v.visit_node_data(&node.data, SyntaxKind::ExpressionWithTypeArguments);
    v.visit_expression(node.expression);
    for arg in node.type_arguments.iter() {
        v.visit_type_node(arg);
    }
}

// -- Names and patterns --

pub fn walk_property_name<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, name: &PropertyName<'a>) {
    match name {
        PropertyName::Identifier(id) => v.visit_identifier(id),
        PropertyName::PrivateIdentifier(id) => v.visit_private_identifier(id),
        PropertyName::StringLiteral(lit) | PropertyName::NumericLiteral(lit) => v.visit_literal(lit),
        PropertyName::Computed(computed) => {
            v.visit_node_data(&computed.data, SyntaxKind::ComputedPropertyName);
            v.visit_expression(computed.expression);
        }
    }
}

pub fn walk_entity_name<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, name: &EntityName<'a>) {
    match name {
        EntityName::Identifier(id) => v.visit_identifier(id),
        EntityName::QualifiedName(q) => {
            v.visit_node_data(&q.data, SyntaxKind::QualifiedName);
            v.visit_entity_name(&q.left);
            v.visit_identifier(&q.right);
        }
    }
}

pub fn walk_binding_name<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, name: &BindingName<'a>) {
    match name {
        BindingName::Identifier(id) => v.visit_identifier(id),
        BindingName::ObjectBindingPattern(pattern) => {
            v.visit_node_data(&pattern.data, SyntaxKind::ObjectBindingPattern);
            for elem in pattern.elements.iter() {
                v.visit_binding_element(elem);
            }
        }
        BindingName::ArrayBindingPattern(pattern) => {
            v.visit_node_data(&pattern.data, SyntaxKind::ArrayBindingPattern);
            for elem in pattern.elements.iter() {
                match elem {
                    ArrayBindingElement::BindingElement(e) => v.visit_binding_element(e),
                    ArrayBindingElement::OmittedExpression(data) => {
                        v.visit_node_data(data, SyntaxKind::OmittedExpression)
                    }
                }
            }
        }
    }
}

pub fn walk_binding_element<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &BindingElement<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::BindingElement);
    if let Some(ref prop) = node.property_name {
        v.visit_property_name(prop);
    }
    v.visit_binding_name(&node.name);
    if let Some(init) = node.initializer {
        v.visit_expression(init);
    }
}

// -- Expressions --

pub fn walk_expression<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, expr: &Expression<'a>) {
    match expr {
        Expression::Identifier(id) => v.visit_identifier(id),
        Expression::Literal(lit) => v.visit_literal(lit),
        Expression::Template(n) => {
            v.visit_node_data(&n.data, SyntaxKind::TemplateExpression);
            for span in n.spans.iter() {
                v.visit_expression(span);
            }
        }
        Expression::ArrayLiteral(n) => {
            v.visit_node_data(&n.data, SyntaxKind::ArrayLiteralExpression);
            for elem in n.elements.iter() {
                v.visit_expression(elem);
            }
        }
        Expression::ObjectLiteral(n) => {
            v.visit_node_data(&n.data, SyntaxKind::ObjectLiteralExpression);
            for prop in n.properties.iter() {
                v.visit_object_literal_element(prop);
            }
        }
        Expression::PropertyAccess(n) => v.visit_property_access(n),
        Expression::ElementAccess(n) => {
            v.visit_node_data(&n.data, SyntaxKind::ElementAccessExpression);
            v.visit_expression(n.expression);
            v.visit_expression(n.argument_expression);
        }
        Expression::Call(n) => v.visit_call_expression(n),
        Expression::New(n) => {
            v.visit_node_data(&n.data, SyntaxKind::NewExpression);
            v.visit_expression(n.expression);
            for arg in n.type_arguments.iter() {
                v.visit_type_node(arg);
            }
            for arg in n.arguments.iter() {
                v.visit_expression(arg);
            }
        }
        Expression::TaggedTemplate(n) => {
            v.visit_node_data(&n.data, SyntaxKind::TaggedTemplateExpression);
            v.visit_expression(n.tag);
            for arg in n.type_arguments.iter() {
                v.visit_type_node(arg);
            }
            v.visit_expression(n.template);
        }
        Expression::Parenthesized(n) => {
            v.visit_node_data(&n.data, SyntaxKind::ParenthesizedExpression);
            v.visit_expression(n.expression);
        }
        Expression::Function(n) => v.visit_function_expression(n),
        Expression::Arrow(n) => v.visit_arrow_function(n),
        Expression::Class(n) => v.visit_class_expression(n),
        Expression::Unary(n) => v.visit_unary_expression(n),
        Expression::Update(n) => v.visit_update_expression(n),
        Expression::Binary(n) => v.visit_binary_expression(n),
        Expression::Conditional(n) => {
            v.visit_node_data(&n.data, SyntaxKind::ConditionalExpression);
            v.visit_expression(n.condition);
            v.visit_expression(n.when_true);
            v.visit_expression(n.when_false);
        }
        Expression::Yield(n) => {
            v.visit_node_data(&n.data, SyntaxKind::YieldExpression);
            if let Some(expr) = n.expression {
                v.visit_expression(expr);
            }
        }
        Expression::Spread(n) => {
            v.visit_node_data(&n.data, SyntaxKind::SpreadElement);
            v.visit_expression(n.expression);
        }
        Expression::As(n) => walk_typed_expression(v, n, SyntaxKind::AsExpression),
        Expression::Satisfies(n) => walk_typed_expression(v, n, SyntaxKind::SatisfiesExpression),
        Expression::TypeAssertion(n) => walk_typed_expression(v, n, SyntaxKind::TypeAssertionExpression),
        Expression::NonNull(n) => {
            v.visit_node_data(&n.data, SyntaxKind::NonNullExpression);
            v.visit_expression(n.expression);
        }
        Expression::MetaProperty(n) => {
            v.visit_node_data(&n.data, SyntaxKind::MetaProperty);
            v.visit_identifier(&n.name);
        }
        Expression::Omitted(data) => v.visit_node_data(data, SyntaxKind::OmittedExpression),
        Expression::This(data) => v.visit_node_data(data, SyntaxKind::ThisKeyword),
        Expression::Super(data) => v.visit_node_data(data, SyntaxKind::SuperKeyword),
    }
}

/// `as`, `satisfies` and angle-bracket assertions: expression first, then the
/// type, regardless of source order.
pub fn walk_typed_expression<'a, V: AstVisitor<'a> + ?Sized>(
    v: &mut V,
    node: &TypedExpression<'a>,
    kind: SyntaxKind,
) {
    v.visit_node_data(&node.data, kind);
    if kind == SyntaxKind::TypeAssertionExpression {
        v.visit_type_node(node.type_node);
        v.visit_expression(node.expression);
    } else {
        v.visit_expression(node.expression);
        v.visit_type_node(node.type_node);
    }
}

pub fn walk_object_literal_element<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, elem: &ObjectLiteralElement<'a>) {
    match elem {
        ObjectLiteralElement::PropertyAssignment(n) => {
            v.visit_node_data(&n.data, SyntaxKind::PropertyAssignment);
            v.visit_property_name(&n.name);
            v.visit_expression(n.initializer);
        }
        ObjectLiteralElement::ShorthandPropertyAssignment(n) => {
            v.visit_node_data(&n.data, SyntaxKind::ShorthandPropertyAssignment);
            v.visit_identifier(&n.name);
            if let Some(init) = n.object_assignment_initializer {
                v.visit_expression(init);
            }
        }
        ObjectLiteralElement::SpreadAssignment(n) => {
            v.visit_node_data(&n.data, SyntaxKind::SpreadAssignment);
            v.visit_expression(n.expression);
        }
        ObjectLiteralElement::Method(n) => v.visit_method_declaration(n),
    }
}

pub fn walk_property_access<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &PropertyAccessExpression<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::PropertyAccessExpression);
    v.visit_expression(node.expression);
    v.visit_identifier(&node.name);
}

pub fn walk_call_expression<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &CallExpression<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::CallExpression);
    v.visit_expression(node.expression);
    for arg in node.type_arguments.iter() {
        v.visit_type_node(arg);
    }
    for arg in node.arguments.iter() {
        v.visit_expression(arg);
    }
}

pub fn walk_function_expression<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &FunctionExpression<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::FunctionExpression);
    if let Some(ref name) = node.name {
        v.visit_identifier(name);
    }
    walk_signature(v, node.type_parameters, node.parameters, node.return_type);
    v.visit_block(&node.body);
}

pub fn walk_arrow_function<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ArrowFunction<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::ArrowFunction);
    walk_signature(v, node.type_parameters, node.parameters, node.return_type);
    match node.body {
        ArrowFunctionBody::Block(block) => v.visit_block(block),
        ArrowFunctionBody::Expression(expr) => v.visit_expression(expr),
    }
}

pub fn walk_unary_expression<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &UnaryExpression<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::UnaryExpression);
    v.visit_expression(node.operand);
}

pub fn walk_update_expression<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &UpdateExpression<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::UpdateExpression);
    v.visit_expression(node.operand);
}

pub fn walk_binary_expression<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &BinaryExpression<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::BinaryExpression);
    v.visit_expression(node.left);
    v.visit_expression(node.right);
}

// -- Types --

pub fn walk_type_node<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, ty: &TypeNode<'a>) {
    match ty {
        TypeNode::Keyword(n) => v.visit_node_data(&n.data, SyntaxKind::KeywordType),
        TypeNode::TypeReference(n) => v.visit_type_reference(n),
        TypeNode::FunctionType(n) => v.visit_function_type(n),
        TypeNode::TypeQuery(n) => v.visit_type_query(n),
        TypeNode::TypeLiteral(n) => {
            v.visit_node_data(&n.data, SyntaxKind::TypeLiteral);
            for member in n.members.iter() {
                v.visit_type_element(member);
            }
        }
        TypeNode::ArrayType(n) => {
            v.visit_node_data(&n.data, SyntaxKind::ArrayType);
            v.visit_type_node(n.element_type);
        }
        TypeNode::TupleType(n) => {
            v.visit_node_data(&n.data, SyntaxKind::TupleType);
            for elem in n.elements.iter() {
                v.visit_type_node(elem);
            }
        }
        TypeNode::NamedTupleMember(n) => {
            v.visit_node_data(&n.data, SyntaxKind::NamedTupleMember);
            v.visit_identifier(&n.name);
            v.visit_type_node(n.type_node);
        }
        TypeNode::OptionalType(n) => walk_wrapped_type(v, n, SyntaxKind::OptionalType),
        TypeNode::RestType(n) => walk_wrapped_type(v, n, SyntaxKind::RestType),
        TypeNode::ParenthesizedType(n) => walk_wrapped_type(v, n, SyntaxKind::ParenthesizedType),
        TypeNode::UnionType(n) => walk_union_or_intersection(v, n, SyntaxKind::UnionType),
        TypeNode::IntersectionType(n) => walk_union_or_intersection(v, n, SyntaxKind::IntersectionType),
        TypeNode::ConditionalType(n) => v.visit_conditional_type(n),
        TypeNode::InferType(n) => v.visit_infer_type(n),
        TypeNode::ThisType(data) => v.visit_node_data(data, SyntaxKind::ThisType),
        TypeNode::TypeOperator(n) => {
            v.visit_node_data(&n.data, SyntaxKind::TypeOperator);
            v.visit_type_node(n.type_node);
        }
        TypeNode::IndexedAccessType(n) => {
            v.visit_node_data(&n.data, SyntaxKind::IndexedAccessType);
            v.visit_type_node(n.object_type);
            v.visit_type_node(n.index_type);
        }
        TypeNode::MappedType(n) => v.visit_mapped_type(n),
        TypeNode::LiteralType(n) => {
            v.visit_node_data(&n.data, SyntaxKind::LiteralType);
            v.visit_expression(n.literal);
        }
        TypeNode::TemplateLiteralType(n) => {
            v.visit_node_data(&n.data, SyntaxKind::TemplateLiteralType);
            for span in n.types.iter() {
                v.visit_type_node(span);
            }
        }
        TypeNode::ImportType(n) => v.visit_import_type(n),
        TypeNode::TypePredicate(n) => v.visit_type_predicate(n),
    }
}

pub fn walk_wrapped_type<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &WrappedTypeNode<'a>, kind: SyntaxKind) {
    v.visit_node_data(&node.data, kind);
    v.visit_type_node(node.type_node);
}

pub fn walk_union_or_intersection<'a, V: AstVisitor<'a> + ?Sized>(
    v: &mut V,
    node: &UnionOrIntersectionTypeNode<'a>,
    kind: SyntaxKind,
) {
    v.visit_node_data(&node.data, kind);
    for ty in node.types.iter() {
        v.visit_type_node(ty);
    }
}

pub fn walk_type_reference<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &TypeReferenceNode<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::TypeReference);
    v.visit_entity_name(&node.type_name);
    for arg in node.type_arguments.iter() {
        v.visit_type_node(arg);
    }
}

pub fn walk_function_type<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &FunctionTypeNode<'a>) {
    let kind = if node.is_constructor {
        SyntaxKind::ConstructorType
    } else {
        SyntaxKind::FunctionType
    };
    v.visit_node_data(&node.data, kind);
    walk_signature(v, node.type_parameters, node.parameters, node.return_type);
}

pub fn walk_type_query<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &TypeQueryNode<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::TypeQuery);
    v.visit_entity_name(&node.expr_name);
    for arg in node.type_arguments.iter() {
        v.visit_type_node(arg);
    }
}

pub fn walk_conditional_type<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ConditionalTypeNode<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::ConditionalType);
    v.visit_type_node(node.check_type);
    v.visit_type_node(node.extends_type);
    v.visit_type_node(node.true_type);
    v.visit_type_node(node.false_type);
}

pub fn walk_infer_type<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &InferTypeNode<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::InferType);
    v.visit_type_parameter(node.type_parameter);
}

pub fn walk_mapped_type<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &MappedTypeNode<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::MappedType);
    v.visit_type_parameter(node.type_parameter);
    if let Some(name_type) = node.name_type {
        v.visit_type_node(name_type);
    }
    if let Some(ty) = node.type_node {
        v.visit_type_node(ty);
    }
}

pub fn walk_import_type<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &ImportTypeNode<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::ImportType);
    v.visit_type_node(node.argument);
    if let Some(ref qualifier) = node.qualifier {
        v.visit_entity_name(qualifier);
    }
    for arg in node.type_arguments.iter() {
        v.visit_type_node(arg);
    }
}

pub fn walk_type_predicate<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &TypePredicateNode<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::TypePredicate);
    match node.parameter_name {
        TypePredicateParameterName::Identifier(ref id) => v.visit_identifier(id),
        TypePredicateParameterName::ThisType(ref data) => v.visit_node_data(data, SyntaxKind::ThisType),
    }
    if let Some(ty) = node.type_node {
        v.visit_type_node(ty);
    }
}

pub fn walk_type_element<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, elem: &TypeElement<'a>) {
    match elem {
        TypeElement::PropertySignature(n) => {
            v.visit_node_data(&n.data, SyntaxKind::PropertySignature);
            v.visit_property_name(&n.name);
            if let Some(ty) = n.type_annotation {
                v.visit_type_node(ty);
            }
        }
        TypeElement::MethodSignature(n) => v.visit_method_signature(n),
        TypeElement::CallSignature(n) => v.visit_call_signature(n),
        TypeElement::IndexSignature(n) => v.visit_index_signature(n),
    }
}

pub fn walk_method_signature<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &MethodSignatureNode<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::MethodSignature);
    v.visit_property_name(&node.name);
    walk_signature(v, node.type_parameters, node.parameters, node.return_type);
}

pub fn walk_call_signature<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &CallSignatureNode<'a>) {
    let kind = if node.is_construct {
        SyntaxKind::ConstructSignature
    } else {
        SyntaxKind::CallSignature
    };
    v.visit_node_data(&node.data, kind);
    walk_signature(v, node.type_parameters, node.parameters, node.return_type);
}

pub fn walk_index_signature<'a, V: AstVisitor<'a> + ?Sized>(v: &mut V, node: &IndexSignatureNode<'a>) {
    v.visit_node_data(&node.data, SyntaxKind::IndexSignature);
    for param in node.parameters.iter() {
        v.visit_parameter(param);
    }
    if let Some(ty) = node.type_annotation {
        v.visit_type_node(ty);
    }
}
