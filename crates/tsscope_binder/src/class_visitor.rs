//! Classes and their members.
//!
//! A class opens up to two scopes: the generic type-parameter scope (only
//! when it has type parameters) and the class scope. The class scope holds a
//! second binding of the class name so the body keeps seeing the class even
//! if the outer name is reassigned. Field initializers and static blocks run
//! later than the surrounding code and get scopes of their own.

use crate::analyzer::Analyzer;
use crate::binder::{DeclarationSite, FunctionBody, FunctionLike};
use crate::binding::DefinitionKind;
use crate::scope::{ScopeFlags, ScopeKind};
use tsscope_ast::visitor::AstVisitor;
use tsscope_ast::*;

fn method_body<'n, 'a>(body: &'n Option<Block<'a>>) -> FunctionBody<'n, 'a> {
    match body {
        Some(block) => FunctionBody::Block(block),
        None => FunctionBody::Missing,
    }
}

impl<'o> Analyzer<'o> {
    /// `is_declaration` distinguishes `class C {}` statements, whose name is
    /// also bound in the enclosing scope, from class expressions.
    pub(crate) fn bind_class<'a>(&mut self, node: &ClassDeclaration<'a>, is_declaration: bool) {
        self.record_node(&node.data);
        if let (true, Some(name)) = (is_declaration, &node.name) {
            let scope = self.lexical_target();
            self.declare(
                scope,
                DeclarationSite::new(name, DefinitionKind::Class, &node.data).init_range(node.data.range),
            );
        }
        for decorator in node.decorators.iter() {
            self.visit_decorator(decorator);
        }

        self.with_ambient(&node.data, |this| {
            let generic = !node.type_parameters.is_empty();
            if generic {
                this.enter_scope(ScopeKind::GenericTypeParameters, &node.data, ScopeFlags::NONE);
                this.bind_type_parameters(node.type_parameters);
            }
            let class_scope = this.enter_scope(ScopeKind::Class, &node.data, ScopeFlags::NONE);
            if let Some(name) = &node.name {
                this.declare(
                    class_scope,
                    DeclarationSite::new(name, DefinitionKind::Class, &node.data)
                        .init_range(node.data.range)
                        .exported(false),
                );
            }
            for clause in node.heritage_clauses.iter() {
                this.bind_heritage_clause(clause, true);
            }
            for member in node.members.iter() {
                this.visit_class_element(member);
            }
            this.exit_scope();
            if generic {
                this.exit_scope();
            }
        });
    }

    pub(crate) fn bind_property_declaration<'a>(&mut self, node: &PropertyDeclaration<'a>) {
        self.record_node(&node.data);
        for decorator in node.decorators.iter() {
            self.visit_decorator(decorator);
        }
        self.visit_property_name(&node.name);
        if let Some(ty) = node.type_annotation {
            self.visit_type_node(ty);
        }
        if let Some(init) = node.initializer {
            self.enter_scope(ScopeKind::ClassFieldInitializer, init.data(), ScopeFlags::NONE);
            self.visit_expression(init);
            self.exit_scope();
        }
    }

    /// Class methods, accessors and object-literal methods.
    pub(crate) fn bind_method_declaration<'a>(&mut self, node: &MethodDeclaration<'a>) {
        self.record_node(&node.data);
        for decorator in node.decorators.iter() {
            self.visit_decorator(decorator);
        }
        self.visit_property_name(&node.name);
        self.bind_function_like(FunctionLike {
            node: &node.data,
            type_parameters: node.type_parameters,
            parameters: node.parameters,
            return_type: node.return_type,
            body: method_body(&node.body),
            is_arrow: false,
        });
    }

    pub(crate) fn bind_constructor<'a>(&mut self, node: &ConstructorDeclaration<'a>) {
        self.record_node(&node.data);
        self.bind_function_like(FunctionLike {
            node: &node.data,
            type_parameters: &[],
            parameters: node.parameters,
            return_type: None,
            body: method_body(&node.body),
            is_arrow: false,
        });
    }

    pub(crate) fn bind_class_static_block<'a>(&mut self, node: &ClassStaticBlockDeclaration<'a>) {
        self.record_node(&node.data);
        self.enter_scope(ScopeKind::ClassStaticBlock, &node.data, ScopeFlags::NONE);
        self.record_node(&node.body.data);
        for stmt in node.body.statements.iter() {
            self.visit_statement(stmt);
        }
        self.exit_scope();
    }
}
