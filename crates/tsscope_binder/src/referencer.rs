//! Identifier uses.
//!
//! A reference is raised in the innermost open scope and queued there; the
//! resolver settles it when that scope closes.

use crate::analyzer::Analyzer;
use crate::ids::ReferenceId;
use crate::reference::{AccessMode, Reference, ReferenceFlags, ReferenceMode};
use crate::resolver::PendingReference;
use tracing::trace;
use tsscope_ast::visitor::AstVisitor;
use tsscope_ast::*;

impl<'o> Analyzer<'o> {
    pub(crate) fn reference(
        &mut self,
        ident: &Identifier,
        access: AccessMode,
        mode: ReferenceMode,
        flags: ReferenceFlags,
    ) -> ReferenceId {
        self.record_node(&ident.data);
        let scope = self.current_scope();
        let id = ReferenceId::from_index(self.references.len());
        self.references.push(Reference {
            id,
            name: ident.text,
            node: ident.data.id,
            range: ident.data.range,
            scope,
            access,
            mode,
            resolved: None,
            flags,
        });
        self.scopes[scope.index()].references.push(id);
        self.pending[scope.index()].push(PendingReference::new(id));
        self.reference_nodes.insert(ident.data.id, id);
        trace!(
            name = self.resolve_text(ident.text),
            reference = %id,
            scope = %scope,
            ?access,
            ?mode,
            "reference"
        );
        id
    }

    /// The left side of an assignment, or the head of a for-in/of loop
    /// without a declaration. Plain `=` destructures array and object
    /// literals; default values inside them are ordinary reads.
    pub(crate) fn visit_assignment_target<'a>(&mut self, target: &Expression<'a>, access: AccessMode) {
        match target {
            Expression::Identifier(id) => {
                self.reference(id, access, ReferenceMode::Value, ReferenceFlags::NONE);
            }
            Expression::Parenthesized(paren) => {
                self.record_node(&paren.data);
                self.visit_assignment_target(paren.expression, access);
            }
            Expression::NonNull(non_null) => {
                self.record_node(&non_null.data);
                self.visit_assignment_target(non_null.expression, access);
            }
            Expression::As(typed) | Expression::Satisfies(typed) | Expression::TypeAssertion(typed) => {
                self.record_node(&typed.data);
                self.visit_assignment_target(typed.expression, access);
                self.visit_type_node(typed.type_node);
            }
            Expression::ArrayLiteral(array) if access == AccessMode::Write => {
                self.record_node(&array.data);
                for elem in array.elements.iter() {
                    match elem {
                        Expression::Omitted(data) => self.record_node(data),
                        Expression::Spread(spread) => {
                            self.record_node(&spread.data);
                            self.visit_assignment_target(spread.expression, AccessMode::Write);
                        }
                        other => self.visit_target_with_default(other),
                    }
                }
            }
            Expression::ObjectLiteral(object) if access == AccessMode::Write => {
                self.record_node(&object.data);
                for prop in object.properties.iter() {
                    self.visit_object_target_element(prop);
                }
            }
            other => self.visit_expression(other),
        }
    }

    fn visit_target_with_default<'a>(&mut self, target: &Expression<'a>) {
        match target {
            Expression::Binary(binary) if binary.operator == SyntaxKind::EqualsToken => {
                self.record_node(&binary.data);
                self.visit_assignment_target(binary.left, AccessMode::Write);
                self.visit_expression(binary.right);
            }
            other => self.visit_assignment_target(other, AccessMode::Write),
        }
    }

    fn visit_object_target_element<'a>(&mut self, prop: &ObjectLiteralElement<'a>) {
        match prop {
            ObjectLiteralElement::PropertyAssignment(assignment) => {
                self.record_node(&assignment.data);
                self.visit_property_name(&assignment.name);
                self.visit_target_with_default(assignment.initializer);
            }
            ObjectLiteralElement::ShorthandPropertyAssignment(shorthand) => {
                self.record_node(&shorthand.data);
                self.reference(&shorthand.name, AccessMode::Write, ReferenceMode::Value, ReferenceFlags::NONE);
                if let Some(default) = shorthand.object_assignment_initializer {
                    self.visit_expression(default);
                }
            }
            ObjectLiteralElement::SpreadAssignment(spread) => {
                self.record_node(&spread.data);
                self.visit_assignment_target(spread.expression, AccessMode::Write);
            }
            ObjectLiteralElement::Method(method) => self.visit_method_declaration(method),
        }
    }

    /// `implements` and interface `extends` entries: the leftmost identifier
    /// of a dotted name is a type reference.
    pub(crate) fn visit_type_heritage<'a>(&mut self, expr: &Expression<'a>) {
        match expr {
            Expression::Identifier(id) => {
                self.reference(id, AccessMode::Read, ReferenceMode::Type, ReferenceFlags::NONE);
            }
            Expression::PropertyAccess(access) => {
                self.record_node(&access.data);
                self.visit_type_heritage(access.expression);
                self.record_node(&access.name.data);
            }
            other => self.visit_expression(other),
        }
    }

    /// `class C extends Base<T> implements I<T>`, `interface I extends J`.
    /// Only a class's `extends` is evaluated as a value.
    pub(crate) fn bind_heritage_clause<'a>(&mut self, clause: &HeritageClause<'a>, is_class: bool) {
        self.record_node(&clause.data);
        let as_value = is_class && clause.token == SyntaxKind::ExtendsKeyword;
        for ty in clause.types.iter() {
            self.record_node(&ty.data);
            if as_value {
                self.visit_expression(ty.expression);
            } else {
                self.visit_type_heritage(ty.expression);
            }
            for arg in ty.type_arguments.iter() {
                self.visit_type_node(arg);
            }
        }
    }
}
