//! ScopeManager queries, malformed-input rejection, diagnostics and batch
//! analysis.

mod common;

use bumpalo::Bump;
use common::*;
use tsscope_ast::{Expression, NodeData, NodeId, Statement, SyntaxKind};
use tsscope_binder::{analyze, analyze_all, AnalyzeError, AnalyzeOptions, MalformedReason, ScopeKind, SourceType};
use tsscope_nodebuilder::{NodeBuilder, VarKind};

fn malformed_reason(result: Result<tsscope_binder::ScopeManager, AnalyzeError>) -> MalformedReason {
    match result {
        Err(AnalyzeError::MalformedInput { reason, .. }) => reason,
        Err(other) => panic!("expected malformed input, got {other}"),
        Ok(_) => panic!("expected malformed input, analysis succeeded"),
    }
}

// ============================================================================
// Malformed Input
// ============================================================================

#[test]
fn test_unassigned_node_id_is_rejected() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let ident = tsscope_ast::Identifier {
        data: NodeData::new(SyntaxKind::Identifier, 0, 1),
        text: b.interner().intern("x"),
    };
    let file = b.source_file(vec![b.expr_stmt(Expression::Identifier(ident))]);

    let result = analyze(&file, &AnalyzeOptions::default());
    assert_eq!(malformed_reason(result), MalformedReason::InvalidNodeId);
}

#[test]
fn test_duplicate_node_id_is_rejected() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let ident = b.ident("x");
    let copy = ident.clone();
    let file = b.source_file(vec![
        b.expr_stmt(Expression::Identifier(ident)),
        b.expr_stmt(Expression::Identifier(copy)),
    ]);

    let result = analyze(&file, &AnalyzeOptions::default());
    assert_eq!(malformed_reason(result), MalformedReason::DuplicateNodeId);
}

#[test]
fn test_inverted_range_is_rejected() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let ident = tsscope_ast::Identifier {
        data: NodeData::new(SyntaxKind::Identifier, 5, 2).with_id(NodeId(10_000)),
        text: b.interner().intern("x"),
    };
    let file = b.source_file(vec![b.expr_stmt(Expression::Identifier(ident))]);

    let err = analyze(&file, &AnalyzeOptions::default()).unwrap_err();
    assert!(err.is_malformed_input());
    assert!(err.to_string().contains("malformed input tree"));
    match err {
        AnalyzeError::MalformedInput { node, reason, .. } => {
            assert_eq!(node, NodeId(10_000));
            assert_eq!(reason, MalformedReason::InvertedRange);
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn test_kind_mismatch_is_rejected() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let ident = tsscope_ast::Identifier {
        data: NodeData::new(SyntaxKind::LiteralExpression, 0, 1).with_id(NodeId(10_000)),
        text: b.interner().intern("x"),
    };
    let file = b.source_file(vec![b.expr_stmt(Expression::Identifier(ident))]);

    let result = analyze(&file, &AnalyzeOptions::default());
    assert_eq!(
        malformed_reason(result),
        MalformedReason::KindMismatch {
            expected: SyntaxKind::Identifier,
            found: SyntaxKind::LiteralExpression,
        }
    );
}

#[test]
fn test_for_of_with_two_declarators_is_rejected() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let head = b.for_decl(
        VarKind::Let,
        vec![b.declarator(b.binding("a"), None, None), b.declarator(b.binding("b"), None, None)],
    );
    let file = b.source_file(vec![b.for_of(head, b.id("xs"), b.block(vec![]))]);

    let result = analyze(&file, &AnalyzeOptions::default());
    assert_eq!(malformed_reason(result), MalformedReason::ForInOfDeclaratorCount(2));
}

// ============================================================================
// Node Queries
// ============================================================================

#[test]
fn test_scope_queries_by_node() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let use_site = b.ident("x");
    let use_id = use_site.data.id;
    let function = b.function(
        b.ident("f"),
        vec![b.param(b.binding("x"), None, None)],
        vec![b.expr_stmt(Expression::Identifier(use_site))],
    );
    let function_id = function.data().id;
    let file = b.source_file(vec![function]);

    let manager = analyze_script(&file);
    let body = only_scope(&manager, ScopeKind::Function);

    assert_eq!(manager.scope_for_node(function_id).unwrap().id, body.id);
    assert_eq!(manager.enclosing_scope(function_id).unwrap().id, manager.root().id);
    assert_eq!(manager.scopes_introduced_by(function_id), &[body.id]);

    assert_eq!(manager.enclosing_scope(use_id).unwrap().id, body.id);
    assert_eq!(manager.scope_for_node(use_id).unwrap().id, body.id);
    assert!(manager.scopes_introduced_by(use_id).is_empty());

    let reference = manager.reference_for_node(use_id).unwrap();
    assert_eq!(reference.scope, body.id);
    assert_eq!(reference.resolved, Some(local(body, "x").id));
}

#[test]
fn test_reference_for_declaration_name_is_absent() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let name = b.ident("a");
    let name_id = name.data.id;
    let file = b.source_file(vec![b.var_statement(
        VarKind::Let,
        vec![b.declarator(tsscope_ast::BindingName::Identifier(name), None, None)],
    )]);

    let manager = analyze_script(&file);
    assert!(manager.reference_for_node(name_id).is_none());
    assert_eq!(manager.enclosing_scope(name_id).unwrap().id, manager.root().id);
}

#[test]
fn test_definition_name_range() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let name = b.ident("value");
    let range = name.data.range;
    let file = b.source_file(vec![b.var_statement(
        VarKind::Const,
        vec![b.declarator(tsscope_ast::BindingName::Identifier(name), None, Some(b.num("1")))],
    )]);

    let manager = analyze_script(&file);
    let binding = local(manager.root(), "value");
    let definition = manager.first_definition(binding.id).unwrap();
    assert_eq!(definition.name_range, range);
    assert_eq!(manager.last_definition(binding.id).unwrap().id, definition.id);
    assert!(definition.init_range.is_some());
}

#[test]
fn test_file_identity() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.empty()]);

    let script = analyze_script(&file);
    assert_eq!(script.file_name(), "input.ts");
    assert_eq!(script.source_type(), SourceType::Script);

    let module = analyze_module(&file);
    assert_eq!(module.source_type(), SourceType::Module);
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_anomaly_diagnostics_are_sorted() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.expr_stmt(b.id("a")),
        b.let_(b.binding("b"), None),
        b.let_(b.binding("b"), None),
        b.expr_stmt(b.id("c")),
    ]);

    let manager = analyze_script(&file);
    let diagnostics = manager.anomaly_diagnostics();
    let codes: Vec<u32> = diagnostics.diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![2304, 2451, 2304]);

    let starts: Vec<u32> = manager.anomalies().iter().map(|a| a.range.pos).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
}

// ============================================================================
// Determinism and Batch Analysis
// ============================================================================

fn sample<'a>(b: &NodeBuilder<'a>) -> Vec<Statement<'a>> {
    vec![
        b.let_(b.binding("x"), Some(b.num("1"))),
        b.function(
            b.ident("f"),
            vec![b.param(b.binding("p"), None, Some(b.id("x")))],
            vec![b.return_(Some(b.binary(b.id("p"), SyntaxKind::PlusToken, b.id("missing"))))],
        ),
        b.class(b.ident("C"), vec![], vec![b.method(b.prop_name("m"), vec![], vec![])]),
        b.block(vec![b.let_(b.binding("x"), None), b.expr_stmt(b.id("x"))]),
    ]
}

type Snapshot = (Vec<(ScopeKind, Vec<String>)>, Vec<(String, Option<u32>)>, usize);

fn snapshot(manager: &tsscope_binder::ScopeManager) -> Snapshot {
    let scopes = manager
        .scopes()
        .map(|scope| {
            let names = scope.variable_names().into_iter().map(str::to_owned).collect();
            (scope.kind, names)
        })
        .collect();
    let refs = manager
        .references()
        .iter()
        .map(|r| (manager.name(r.name).to_owned(), r.resolved.map(|id| id.index() as u32)))
        .collect();
    (scopes, refs, manager.anomalies().len())
}

#[test]
fn test_analysis_is_deterministic() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(sample(&b));

    let first = snapshot(&analyze_script(&file));
    let second = snapshot(&analyze_script(&file));
    assert_eq!(first, second);
    assert_eq!(first.2, 1);
}

#[test]
fn test_analyze_all_keeps_input_order() {
    init_tracing();
    let arena_a = Bump::new();
    let a = NodeBuilder::new(&arena_a);
    let good_a = a.source_file(sample(&a));

    let arena_b = Bump::new();
    let b = NodeBuilder::new(&arena_b);
    let ident = tsscope_ast::Identifier {
        data: NodeData::new(SyntaxKind::Identifier, 0, 1),
        text: b.interner().intern("x"),
    };
    let bad = b.source_file(vec![b.expr_stmt(Expression::Identifier(ident))]);

    let arena_c = Bump::new();
    let c = NodeBuilder::new(&arena_c);
    let good_c = c.source_file(vec![c.var(c.binding("only"), None)]);

    let options = AnalyzeOptions::default();
    let results = analyze_all(&[&good_a, &bad, &good_c], &options);
    assert_eq!(results.len(), 3);

    let first = results[0].as_ref().unwrap();
    assert_eq!(snapshot(first), snapshot(&analyze_script(&good_a)));
    assert!(results[1].as_ref().is_err_and(|err| err.is_malformed_input()));
    let third = results[2].as_ref().unwrap();
    local(third.root(), "only");
}
