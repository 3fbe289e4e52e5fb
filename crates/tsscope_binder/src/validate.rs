//! Node-shape contract checks, run over the whole tree before analysis.

use crate::error::{AnalyzeError, MalformedReason};
use rustc_hash::FxHashSet;
use tsscope_ast::visitor::*;
use tsscope_ast::*;
use tsscope_core::intern::StringInterner;

/// Check every node of `file`. Returns the number of nodes seen.
pub(crate) fn validate_tree(file: &SourceFile<'_>) -> Result<usize, AnalyzeError> {
    let mut validator = TreeValidator {
        interner: &file.interner,
        seen: FxHashSet::default(),
        error: None,
        infer_allowed: false,
    };
    validator.visit_source_file(file);
    match validator.error {
        Some(err) => Err(err),
        None => Ok(validator.seen.len()),
    }
}

struct TreeValidator<'i> {
    interner: &'i StringInterner,
    seen: FxHashSet<NodeId>,
    error: Option<AnalyzeError>,
    /// Inside the extends clause of a conditional type.
    infer_allowed: bool,
}

impl<'i> TreeValidator<'i> {
    fn fail(&mut self, data: &NodeData, reason: MalformedReason) {
        if self.error.is_none() {
            self.error = Some(AnalyzeError::malformed(data.id, data.range, reason));
        }
    }

    fn check_name(&mut self, node: &Identifier) {
        let text = self.interner.resolve(node.text);
        if text.is_empty() || text == "#" {
            self.fail(&node.data, MalformedReason::EmptyIdentifier);
        }
    }

    fn check_for_head(&mut self, init: &ForInitializer<'_>) {
        match init {
            ForInitializer::VariableDeclarationList(list) => {
                if list.declarations.len() != 1 {
                    self.fail(
                        &list.data,
                        MalformedReason::ForInOfDeclaratorCount(list.declarations.len()),
                    );
                }
            }
            ForInitializer::Expression(expr) => {
                if !is_destructuring_target(expr) {
                    self.fail(expr.data(), MalformedReason::InvalidAssignmentTarget);
                }
            }
        }
    }
}

fn is_simple_target(expr: &Expression<'_>) -> bool {
    matches!(
        expr.skip_outer_expressions(),
        Expression::Identifier(_) | Expression::PropertyAccess(_) | Expression::ElementAccess(_)
    )
}

fn is_destructuring_target(expr: &Expression<'_>) -> bool {
    match expr.skip_outer_expressions() {
        Expression::Identifier(_) | Expression::PropertyAccess(_) | Expression::ElementAccess(_) => true,
        Expression::ArrayLiteral(array) => array.elements.iter().all(|elem| match elem {
            Expression::Omitted(_) => true,
            Expression::Spread(spread) => is_destructuring_target(spread.expression),
            other => is_target_with_default(other),
        }),
        Expression::ObjectLiteral(object) => object.properties.iter().all(|prop| match prop {
            ObjectLiteralElement::PropertyAssignment(assignment) => {
                is_target_with_default(assignment.initializer)
            }
            ObjectLiteralElement::ShorthandPropertyAssignment(_) => true,
            ObjectLiteralElement::SpreadAssignment(spread) => is_destructuring_target(spread.expression),
            ObjectLiteralElement::Method(_) => false,
        }),
        _ => false,
    }
}

fn is_target_with_default(expr: &Expression<'_>) -> bool {
    match expr {
        Expression::Binary(binary) if binary.operator == SyntaxKind::EqualsToken => {
            is_destructuring_target(binary.left)
        }
        other => is_destructuring_target(other),
    }
}

impl<'a, 'i> AstVisitor<'a> for TreeValidator<'i> {
    fn visit_node_data(&mut self, data: &NodeData, expected: SyntaxKind) {
        if self.error.is_some() {
            return;
        }
        if !data.id.is_valid() {
            self.fail(data, MalformedReason::InvalidNodeId);
        } else if !self.seen.insert(data.id) {
            self.fail(data, MalformedReason::DuplicateNodeId);
        } else if data.range.is_inverted() {
            self.fail(data, MalformedReason::InvertedRange);
        } else if data.kind != expected {
            self.fail(
                data,
                MalformedReason::KindMismatch {
                    expected,
                    found: data.kind,
                },
            );
        }
    }

    fn visit_identifier(&mut self, node: &Identifier) {
        self.visit_node_data(&node.data, SyntaxKind::Identifier);
        self.check_name(node);
    }

    fn visit_private_identifier(&mut self, node: &Identifier) {
        self.visit_node_data(&node.data, SyntaxKind::PrivateIdentifier);
        self.check_name(node);
    }

    fn visit_binary_expression(&mut self, node: &BinaryExpression<'a>) {
        if node.operator.is_assignment_operator() {
            let valid = if node.operator == SyntaxKind::EqualsToken {
                is_destructuring_target(node.left)
            } else {
                is_simple_target(node.left)
            };
            if !valid {
                self.fail(node.left.data(), MalformedReason::InvalidAssignmentTarget);
            }
        }
        walk_binary_expression(self, node);
    }

    fn visit_update_expression(&mut self, node: &UpdateExpression<'a>) {
        if !is_simple_target(node.operand) {
            self.fail(node.operand.data(), MalformedReason::InvalidAssignmentTarget);
        }
        walk_update_expression(self, node);
    }

    fn visit_for_in_statement(&mut self, node: &ForInOrOfStatement<'a>) {
        self.check_for_head(&node.initializer);
        walk_for_in_or_of_statement(self, node, SyntaxKind::ForInStatement);
    }

    fn visit_for_of_statement(&mut self, node: &ForInOrOfStatement<'a>) {
        self.check_for_head(&node.initializer);
        walk_for_in_or_of_statement(self, node, SyntaxKind::ForOfStatement);
    }

    fn visit_conditional_type(&mut self, node: &ConditionalTypeNode<'a>) {
        self.visit_node_data(&node.data, SyntaxKind::ConditionalType);
        let outer = self.infer_allowed;
        self.visit_type_node(node.check_type);
        self.infer_allowed = true;
        self.visit_type_node(node.extends_type);
        self.infer_allowed = outer;
        self.visit_type_node(node.true_type);
        self.visit_type_node(node.false_type);
    }

    fn visit_infer_type(&mut self, node: &InferTypeNode<'a>) {
        if !self.infer_allowed {
            self.fail(&node.data, MalformedReason::InferOutsideConditional);
        }
        walk_infer_type(self, node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bumpalo::Bump;
    use tsscope_nodebuilder::NodeBuilder;

    #[test]
    fn test_builder_output_is_valid() {
        let arena = Bump::new();
        let b = NodeBuilder::new(&arena);
        let file = b.source_file(vec![
            b.let_(b.binding("x"), Some(b.num("1"))),
            b.expr_stmt(b.assign(b.id("x"), b.num("2"))),
        ]);
        let count = validate_tree(&file).unwrap();
        assert_eq!(count as u32, b.node_count());
    }

    #[test]
    fn test_invalid_assignment_target() {
        let arena = Bump::new();
        let b = NodeBuilder::new(&arena);
        let file = b.source_file(vec![b.expr_stmt(b.assign(b.num("1"), b.num("2")))]);
        let err = validate_tree(&file).unwrap_err();
        assert!(matches!(
            err,
            AnalyzeError::MalformedInput {
                reason: MalformedReason::InvalidAssignmentTarget,
                ..
            }
        ));
    }

    #[test]
    fn test_compound_assignment_rejects_pattern() {
        let arena = Bump::new();
        let b = NodeBuilder::new(&arena);
        let target = b.array(vec![b.id("a")]);
        let file = b.source_file(vec![b.expr_stmt(b.binary(target, SyntaxKind::PlusEqualsToken, b.num("1")))]);
        assert!(validate_tree(&file).is_err());
    }

    #[test]
    fn test_infer_outside_conditional() {
        let arena = Bump::new();
        let b = NodeBuilder::new(&arena);
        let file = b.source_file(vec![b.type_alias(b.ident("T"), vec![], b.infer(b.ident("U")))]);
        let err = validate_tree(&file).unwrap_err();
        assert!(matches!(
            err,
            AnalyzeError::MalformedInput {
                reason: MalformedReason::InferOutsideConditional,
                ..
            }
        ));
    }
}
