//! The traversal: which handler runs for which node.
//!
//! Nodes that neither open a scope, declare a name, nor reference one fall
//! through to the default walks, which report them via `visit_node_data` so
//! they still get an enclosing scope.

use crate::analyzer::Analyzer;
use crate::binding::DefinitionKind;
use crate::pattern::PatternTarget;
use crate::reference::{AccessMode, ReferenceFlags, ReferenceMode};
use crate::scope::{ScopeFlags, ScopeKind};
use tsscope_ast::visitor::*;
use tsscope_ast::*;

fn is_lexical_list(list: &VariableDeclarationList<'_>) -> bool {
    list.data.flags.intersects(NodeFlags::BLOCK_SCOPED)
}

impl<'o> Analyzer<'o> {
    fn visit_for_in_or_of<'a>(&mut self, node: &ForInOrOfStatement<'a>) {
        self.record_node(&node.data);
        let lexical = matches!(
            &node.initializer,
            ForInitializer::VariableDeclarationList(list) if is_lexical_list(list)
        );
        if lexical {
            self.enter_scope(ScopeKind::For, &node.data, ScopeFlags::NONE);
        }
        match &node.initializer {
            ForInitializer::VariableDeclarationList(list) => {
                self.bind_variable_list(list, ModifierFlags::NONE, Some(node.expression.data().range))
            }
            ForInitializer::Expression(expr) => self.visit_assignment_target(expr, AccessMode::Write),
        }
        self.visit_expression(node.expression);
        self.visit_statement(node.statement);
        if lexical {
            self.exit_scope();
        }
    }
}

impl<'a, 'o> AstVisitor<'a> for Analyzer<'o> {
    fn visit_node_data(&mut self, data: &NodeData, _expected: SyntaxKind) {
        self.record_node(data);
    }

    fn visit_source_file(&mut self, node: &SourceFile<'a>) {
        self.record_node(&node.data);
        for stmt in node.statements.iter() {
            self.visit_statement(stmt);
        }
    }

    // -- Statements --

    fn visit_block(&mut self, node: &Block<'a>) {
        self.record_node(&node.data);
        self.enter_scope(ScopeKind::Block, &node.data, ScopeFlags::NONE);
        for stmt in node.statements.iter() {
            self.visit_statement(stmt);
        }
        self.exit_scope();
    }

    fn visit_variable_statement(&mut self, node: &VariableStatement<'a>) {
        self.bind_variable_statement(node);
    }

    fn visit_variable_declaration_list(&mut self, node: &VariableDeclarationList<'a>) {
        self.bind_variable_list(node, ModifierFlags::NONE, None);
    }

    fn visit_for_statement(&mut self, node: &ForStatement<'a>) {
        self.record_node(&node.data);
        let lexical = matches!(
            &node.initializer,
            Some(ForInitializer::VariableDeclarationList(list)) if is_lexical_list(list)
        );
        if lexical {
            self.enter_scope(ScopeKind::For, &node.data, ScopeFlags::NONE);
        }
        if let Some(init) = &node.initializer {
            self.visit_for_initializer(init);
        }
        if let Some(cond) = node.condition {
            self.visit_expression(cond);
        }
        if let Some(incr) = node.incrementor {
            self.visit_expression(incr);
        }
        self.visit_statement(node.statement);
        if lexical {
            self.exit_scope();
        }
    }

    fn visit_for_in_statement(&mut self, node: &ForInOrOfStatement<'a>) {
        self.visit_for_in_or_of(node);
    }

    fn visit_for_of_statement(&mut self, node: &ForInOrOfStatement<'a>) {
        self.visit_for_in_or_of(node);
    }

    fn visit_switch_statement(&mut self, node: &SwitchStatement<'a>) {
        self.record_node(&node.data);
        self.visit_expression(node.expression);
        self.enter_scope(ScopeKind::Switch, &node.data, ScopeFlags::NONE);
        walk_case_block(self, &node.case_block);
        self.exit_scope();
    }

    fn visit_catch_clause(&mut self, node: &CatchClause<'a>) {
        self.record_node(&node.data);
        let scope = self.enter_scope(ScopeKind::Catch, &node.data, ScopeFlags::NONE);
        if let Some(decl) = &node.variable_declaration {
            self.record_node(&decl.data);
            let target = PatternTarget {
                kind: DefinitionKind::CatchParameter,
                scope,
                declaration: decl.data.id,
                init_range: None,
                has_init: false,
                exported: false,
                ambient: false,
            };
            self.bind_pattern(&decl.name, &target);
            if let Some(ty) = decl.type_annotation {
                self.visit_type_node(ty);
            }
        }
        self.visit_block(&node.block);
        self.exit_scope();
    }

    fn visit_with_statement(&mut self, node: &WithStatement<'a>) {
        self.record_node(&node.data);
        self.visit_expression(node.expression);
        self.enter_scope(ScopeKind::With, &node.data, ScopeFlags::DYNAMIC);
        self.visit_statement(node.statement);
        self.exit_scope();
    }

    // -- Declarations --

    fn visit_function_declaration(&mut self, node: &FunctionDeclaration<'a>) {
        self.bind_function_declaration(node);
    }

    fn visit_class_declaration(&mut self, node: &ClassDeclaration<'a>) {
        self.bind_class(node, true);
    }

    fn visit_class_expression(&mut self, node: &ClassDeclaration<'a>) {
        self.bind_class(node, false);
    }

    fn visit_property_declaration(&mut self, node: &PropertyDeclaration<'a>) {
        self.bind_property_declaration(node);
    }

    fn visit_method_declaration(&mut self, node: &MethodDeclaration<'a>) {
        self.bind_method_declaration(node);
    }

    fn visit_constructor(&mut self, node: &ConstructorDeclaration<'a>) {
        self.bind_constructor(node);
    }

    fn visit_class_static_block(&mut self, node: &ClassStaticBlockDeclaration<'a>) {
        self.bind_class_static_block(node);
    }

    fn visit_interface_declaration(&mut self, node: &InterfaceDeclaration<'a>) {
        self.bind_interface_declaration(node);
    }

    fn visit_type_alias_declaration(&mut self, node: &TypeAliasDeclaration<'a>) {
        self.bind_type_alias_declaration(node);
    }

    fn visit_enum_declaration(&mut self, node: &EnumDeclaration<'a>) {
        self.bind_enum_declaration(node);
    }

    fn visit_module_declaration(&mut self, node: &ModuleDeclaration<'a>) {
        self.bind_module_declaration(node, false);
    }

    fn visit_import_declaration(&mut self, node: &ImportDeclaration<'a>) {
        self.bind_import_declaration(node);
    }

    fn visit_import_equals_declaration(&mut self, node: &ImportEqualsDeclaration<'a>) {
        self.bind_import_equals_declaration(node);
    }

    fn visit_export_declaration(&mut self, node: &ExportDeclaration<'a>) {
        self.bind_export_declaration(node);
    }

    fn visit_export_assignment(&mut self, node: &ExportAssignment<'a>) {
        self.bind_export_assignment(node);
    }

    // -- Expressions --

    fn visit_expression(&mut self, expr: &Expression<'a>) {
        match expr {
            Expression::Identifier(id) => {
                self.reference(id, AccessMode::Read, ReferenceMode::Value, ReferenceFlags::NONE);
            }
            _ => walk_expression(self, expr),
        }
    }

    fn visit_object_literal_element(&mut self, elem: &ObjectLiteralElement<'a>) {
        match elem {
            ObjectLiteralElement::ShorthandPropertyAssignment(shorthand) => {
                self.record_node(&shorthand.data);
                self.reference(&shorthand.name, AccessMode::Read, ReferenceMode::Value, ReferenceFlags::NONE);
                if let Some(init) = shorthand.object_assignment_initializer {
                    self.visit_expression(init);
                }
            }
            _ => walk_object_literal_element(self, elem),
        }
    }

    fn visit_call_expression(&mut self, node: &CallExpression<'a>) {
        if let Expression::Identifier(callee) = node.expression {
            if callee.text == self.names.eval {
                self.mark_direct_eval();
            }
        }
        walk_call_expression(self, node);
    }

    fn visit_function_expression(&mut self, node: &FunctionExpression<'a>) {
        self.bind_function_expression(node);
    }

    fn visit_arrow_function(&mut self, node: &ArrowFunction<'a>) {
        self.bind_arrow_function(node);
    }

    fn visit_update_expression(&mut self, node: &UpdateExpression<'a>) {
        self.record_node(&node.data);
        self.visit_assignment_target(node.operand, AccessMode::ReadWrite);
    }

    fn visit_binary_expression(&mut self, node: &BinaryExpression<'a>) {
        if !node.operator.is_assignment_operator() {
            return walk_binary_expression(self, node);
        }
        self.record_node(&node.data);
        let access = if node.operator == SyntaxKind::EqualsToken {
            AccessMode::Write
        } else {
            AccessMode::ReadWrite
        };
        self.visit_assignment_target(node.left, access);
        self.visit_expression(node.right);
    }

    // -- Types --

    fn visit_type_reference(&mut self, node: &TypeReferenceNode<'a>) {
        self.bind_type_reference(node);
    }

    fn visit_type_query(&mut self, node: &TypeQueryNode<'a>) {
        self.bind_type_query(node);
    }

    fn visit_type_predicate(&mut self, node: &TypePredicateNode<'a>) {
        self.bind_type_predicate(node);
    }

    fn visit_conditional_type(&mut self, node: &ConditionalTypeNode<'a>) {
        self.bind_conditional_type(node);
    }

    fn visit_infer_type(&mut self, node: &InferTypeNode<'a>) {
        self.bind_infer_type(node);
    }

    fn visit_mapped_type(&mut self, node: &MappedTypeNode<'a>) {
        self.bind_mapped_type(node);
    }

    fn visit_function_type(&mut self, node: &FunctionTypeNode<'a>) {
        self.record_node(&node.data);
        self.bind_signature(&node.data, node.type_parameters, node.parameters, node.return_type);
    }

    fn visit_method_signature(&mut self, node: &MethodSignatureNode<'a>) {
        self.record_node(&node.data);
        self.visit_property_name(&node.name);
        self.bind_signature(&node.data, node.type_parameters, node.parameters, node.return_type);
    }

    fn visit_call_signature(&mut self, node: &CallSignatureNode<'a>) {
        self.record_node(&node.data);
        self.bind_signature(&node.data, node.type_parameters, node.parameters, node.return_type);
    }

    fn visit_index_signature(&mut self, node: &IndexSignatureNode<'a>) {
        self.bind_index_signature(node);
    }
}
