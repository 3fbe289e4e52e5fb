//! Type positions: interfaces, aliases and the type nodes that open scopes
//! or reference names.

use crate::analyzer::Analyzer;
use crate::binder::DeclarationSite;
use crate::binding::DefinitionKind;
use crate::reference::{AccessMode, ReferenceFlags, ReferenceMode};
use crate::scope::{ScopeFlags, ScopeKind};
use tsscope_ast::visitor::AstVisitor;
use tsscope_ast::*;

impl<'o> Analyzer<'o> {
    pub(crate) fn bind_interface_declaration<'a>(&mut self, node: &InterfaceDeclaration<'a>) {
        self.record_node(&node.data);
        let scope = self.lexical_target();
        self.declare(scope, DeclarationSite::new(&node.name, DefinitionKind::Interface, &node.data));
        self.with_ambient(&node.data, |this| {
            this.enter_scope(ScopeKind::InterfaceBody, &node.data, ScopeFlags::NONE);
            this.bind_type_parameters(node.type_parameters);
            for clause in node.heritage_clauses.iter() {
                this.bind_heritage_clause(clause, false);
            }
            for member in node.members.iter() {
                this.visit_type_element(member);
            }
            this.exit_scope();
        });
    }

    pub(crate) fn bind_type_alias_declaration<'a>(&mut self, node: &TypeAliasDeclaration<'a>) {
        self.record_node(&node.data);
        let scope = self.lexical_target();
        self.declare(scope, DeclarationSite::new(&node.name, DefinitionKind::TypeAlias, &node.data));
        self.with_ambient(&node.data, |this| {
            this.enter_scope(ScopeKind::TypeAlias, &node.data, ScopeFlags::NONE);
            this.bind_type_parameters(node.type_parameters);
            this.visit_type_node(node.type_node);
            this.exit_scope();
        });
    }

    /// `A.B.C<T>`: only `A` is looked up.
    pub(crate) fn bind_type_reference<'a>(&mut self, node: &TypeReferenceNode<'a>) {
        self.record_node(&node.data);
        self.reference(
            node.type_name.leftmost(),
            AccessMode::Read,
            ReferenceMode::Type,
            ReferenceFlags::NONE,
        );
        self.visit_entity_name(&node.type_name);
        for arg in node.type_arguments.iter() {
            self.visit_type_node(arg);
        }
    }

    /// `typeof a.b` reads the value `a`.
    pub(crate) fn bind_type_query<'a>(&mut self, node: &TypeQueryNode<'a>) {
        self.record_node(&node.data);
        let leftmost = node.expr_name.leftmost();
        if leftmost.text != self.names.this {
            self.reference(leftmost, AccessMode::Read, ReferenceMode::Value, ReferenceFlags::TYPE_QUERY);
        }
        self.visit_entity_name(&node.expr_name);
        for arg in node.type_arguments.iter() {
            self.visit_type_node(arg);
        }
    }

    pub(crate) fn bind_type_predicate<'a>(&mut self, node: &TypePredicateNode<'a>) {
        self.record_node(&node.data);
        match &node.parameter_name {
            TypePredicateParameterName::Identifier(id) => {
                self.reference(id, AccessMode::Read, ReferenceMode::Value, ReferenceFlags::TYPE_QUERY);
            }
            TypePredicateParameterName::ThisType(data) => self.record_node(data),
        }
        if let Some(ty) = node.type_node {
            self.visit_type_node(ty);
        }
    }

    /// `C extends E ? T : F`. Names introduced by `infer` in `E` are visible
    /// in `E` and `T`; `C` and `F` lie outside the infer scope.
    pub(crate) fn bind_conditional_type<'a>(&mut self, node: &ConditionalTypeNode<'a>) {
        self.record_node(&node.data);
        self.visit_type_node(node.check_type);
        self.enter_scope(ScopeKind::ConditionalTypeInfer, &node.data, ScopeFlags::NONE);
        self.visit_type_node(node.extends_type);
        self.visit_type_node(node.true_type);
        self.exit_scope();
        self.visit_type_node(node.false_type);
    }

    pub(crate) fn bind_infer_type<'a>(&mut self, node: &InferTypeNode<'a>) {
        self.record_node(&node.data);
        let tp = node.type_parameter;
        self.record_node(&tp.data);
        let scope = self
            .nearest_open(ScopeKind::ConditionalTypeInfer)
            .unwrap_or_else(|| self.current_scope());
        self.declare(scope, DeclarationSite::new(&tp.name, DefinitionKind::TypeParameter, &tp.data));
        if let Some(constraint) = tp.constraint {
            self.visit_type_node(constraint);
        }
    }

    /// `{ [K in C as N]: T }`: `K` is visible in `C`, `N` and `T`.
    pub(crate) fn bind_mapped_type<'a>(&mut self, node: &MappedTypeNode<'a>) {
        self.record_node(&node.data);
        let scope = self.enter_scope(ScopeKind::MappedType, &node.data, ScopeFlags::NONE);
        let tp = node.type_parameter;
        self.record_node(&tp.data);
        self.declare(scope, DeclarationSite::new(&tp.name, DefinitionKind::TypeParameter, &tp.data));
        if let Some(constraint) = tp.constraint {
            self.visit_type_node(constraint);
        }
        if let Some(name_type) = node.name_type {
            self.visit_type_node(name_type);
        }
        if let Some(ty) = node.type_node {
            self.visit_type_node(ty);
        }
        self.exit_scope();
    }

    /// Function and constructor types, method and call signatures: one
    /// function-type scope holding type parameters and parameters.
    pub(crate) fn bind_signature<'a>(
        &mut self,
        node: &NodeData,
        type_parameters: &[TypeParameterDeclaration<'a>],
        parameters: &[ParameterDeclaration<'a>],
        return_type: Option<&TypeNode<'a>>,
    ) {
        self.enter_scope(ScopeKind::FunctionType, node, ScopeFlags::NONE);
        self.bind_type_parameters(type_parameters);
        self.bind_parameters(parameters);
        if let Some(ret) = return_type {
            self.visit_type_node(ret);
        }
        self.exit_scope();
    }

    /// `[key: string]: T` declares nothing.
    pub(crate) fn bind_index_signature<'a>(&mut self, node: &IndexSignatureNode<'a>) {
        self.record_node(&node.data);
        for param in node.parameters.iter() {
            self.record_node(&param.data);
            self.visit_binding_name(&param.name);
            if let Some(ty) = param.type_annotation {
                self.visit_type_node(ty);
            }
        }
        if let Some(ty) = node.type_annotation {
            self.visit_type_node(ty);
        }
    }
}
