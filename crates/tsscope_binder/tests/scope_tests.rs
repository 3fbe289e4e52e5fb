//! Scope tree construction.
//!
//! Builds trees with the node builder and checks which scopes the analyzer
//! opens, how they nest and which names land in each.

mod common;

use bumpalo::Bump;
use common::*;
use tsscope_ast::{ModifierFlags, Statement};
use tsscope_binder::{AnalyzeOptions, DefinitionKind, ScopeFlags, ScopeKind};
use tsscope_nodebuilder::{NodeBuilder, VarKind};

fn kinds(manager: &tsscope_binder::ScopeManager, ids: &[tsscope_binder::ScopeId]) -> Vec<ScopeKind> {
    ids.iter().map(|&id| manager.scope(id).kind).collect()
}

// ============================================================================
// Root Scopes
// ============================================================================

#[test]
fn test_script_root_is_global() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.var(b.binding("x"), Some(b.num("1")))]);

    let manager = analyze_script(&file);
    let root = manager.root();
    assert_eq!(root.kind, ScopeKind::Global);
    assert!(root.is_root());
    assert!(root.is_dynamic());
    assert!(!root.is_strict());
    assert_eq!(manager.scope_count(), 1);

    let x = local(root, "x");
    assert_eq!(manager.first_definition(x.id).unwrap().kind, DefinitionKind::Var);
    assert!(!x.is_implicit());
}

#[test]
fn test_module_source_type_adds_module_scope() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.let_(b.binding("x"), None)]);

    let manager = analyze_module(&file);
    let root = manager.root();
    let children: Vec<_> = root.children().collect();
    assert_eq!(children.len(), 1);

    let module = children[0];
    assert_eq!(module.kind, ScopeKind::Module);
    assert!(module.is_strict());
    assert_eq!(module.variable_scope, module.id);
    assert!(root.lookup_local("x").is_none());
    local(module, "x");
}

#[test]
fn test_global_return_wraps_script_in_function() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.var(b.binding("x"), None), b.return_(None)]);

    let options = AnalyzeOptions {
        global_return: true,
        ..AnalyzeOptions::default()
    };
    let manager = analyze_with(&file, &options);
    let wrapper = only_scope(&manager, ScopeKind::Function);
    assert_eq!(wrapper.parent().unwrap().id, manager.root().id);
    assert!(local(wrapper, "arguments").is_implicit());
    local(wrapper, "x");
    assert!(manager.root().lookup_local("x").is_none());
}

#[test]
fn test_use_strict_directive_propagates() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.expr_stmt(b.string("\"use strict\"")),
        b.function(b.ident("f"), vec![], vec![]),
    ]);

    let manager = analyze_script(&file);
    assert!(manager.root().is_strict());
    assert!(only_scope(&manager, ScopeKind::Function).is_strict());
}

#[test]
fn test_implied_strict_option() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.block(vec![])]);

    let options = AnalyzeOptions {
        implied_strict: true,
        ..AnalyzeOptions::default()
    };
    let manager = analyze_with(&file, &options);
    assert!(manager.scopes().all(|scope| scope.is_strict()));
}

// ============================================================================
// Blocks and Hoisting
// ============================================================================

#[test]
fn test_blocks_nest() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.block(vec![
        b.let_(b.binding("a"), None),
        b.block(vec![b.let_(b.binding("b"), None)]),
    ])]);

    let manager = analyze_script(&file);
    let blocks = scopes_of_kind(&manager, ScopeKind::Block);
    assert_eq!(blocks.len(), 2);
    let (outer, inner) = (blocks[0], blocks[1]);
    assert_eq!(inner.parent().unwrap().id, outer.id);
    assert_eq!(outer.children().count(), 1);
    assert_eq!(outer.variable_names(), vec!["a"]);
    assert_eq!(inner.variable_names(), vec!["b"]);
    assert_eq!(inner.variable_scope, manager.root().id);
}

#[test]
fn test_var_hoists_out_of_blocks() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.block(vec![
        b.var(b.binding("v"), Some(b.num("1"))),
        b.let_(b.binding("l"), Some(b.num("2"))),
    ])]);

    let manager = analyze_script(&file);
    let root = manager.root();
    let block = only_scope(&manager, ScopeKind::Block);
    local(root, "v");
    local(block, "l");
    assert!(root.lookup_local("l").is_none());
    assert!(block.lookup_local("v").is_none());
}

#[test]
fn test_scopes_are_pre_order() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.function(b.ident("f"), vec![], vec![b.block(vec![])]),
        b.block(vec![b.block(vec![])]),
    ]);

    let manager = analyze_script(&file);
    for scope in manager.scopes() {
        for child in scope.children() {
            assert!(child.id.index() > scope.id.index());
            assert_eq!(child.parent().unwrap().id, scope.id);
        }
    }
    let order: Vec<ScopeKind> = manager.scopes().map(|scope| scope.kind).collect();
    assert_eq!(
        order,
        vec![
            ScopeKind::Global,
            ScopeKind::Function,
            ScopeKind::Block,
            ScopeKind::Block,
            ScopeKind::Block,
        ]
    );
}

// ============================================================================
// Functions
// ============================================================================

#[test]
fn test_function_declaration_scope() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.function(
        b.ident("f"),
        vec![b.param(b.binding("a"), None, None)],
        vec![b.var(b.binding("x"), None)],
    )]);

    let manager = analyze_script(&file);
    let f_node = file.statements[0].data().id;
    assert_eq!(kinds(&manager, manager.scopes_introduced_by(f_node)), vec![ScopeKind::Function]);

    let body = only_scope(&manager, ScopeKind::Function);
    assert_eq!(body.variable_names(), vec!["arguments", "a", "x"]);
    assert_eq!(manager.first_definition(local(body, "a").id).unwrap().kind, DefinitionKind::Parameter);
    local(manager.root(), "f");
}

#[test]
fn test_default_parameters_split_scope() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.function(
        b.ident("f"),
        vec![b.param(b.binding("a"), None, None), b.param(b.binding("b"), None, Some(b.id("a")))],
        vec![b.let_(b.binding("c"), None)],
    )]);

    let manager = analyze_script(&file);
    let f_node = file.statements[0].data().id;
    assert_eq!(
        kinds(&manager, manager.scopes_introduced_by(f_node)),
        vec![ScopeKind::FunctionParameters, ScopeKind::Function]
    );

    let params = only_scope(&manager, ScopeKind::FunctionParameters);
    let body = only_scope(&manager, ScopeKind::Function);
    assert_eq!(params.variable_names(), vec!["arguments", "a", "b"]);
    assert_eq!(body.variable_names(), vec!["c"]);
    assert_eq!(body.parent().unwrap().id, params.id);
    assert!(manager.anomalies().is_empty());
}

#[test]
fn test_generic_function_scopes() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let function = b.function_full(
        Some(b.ident("id")),
        vec![b.type_param(b.ident("T"), None, None)],
        vec![b.param(b.binding("x"), Some(b.tref("T")), None)],
        Some(b.tref("T")),
        Some(vec![b.return_(Some(b.id("x")))]),
    );
    let file = b.source_file(vec![Statement::FunctionDeclaration(function)]);

    let manager = analyze_script(&file);
    let f_node = file.statements[0].data().id;
    assert_eq!(
        kinds(&manager, manager.scopes_introduced_by(f_node)),
        vec![ScopeKind::GenericTypeParameters, ScopeKind::Function]
    );

    let generic = only_scope(&manager, ScopeKind::GenericTypeParameters);
    assert!(generic.is_type_only());
    let t = local(generic, "T");
    let t_refs = refs_to(&manager, "T");
    assert_eq!(t_refs.len(), 2);
    assert!(t_refs.iter().all(|r| r.resolved == Some(t.id)));
    assert_eq!(only_ref(&manager, "x").resolved, Some(local(only_scope(&manager, ScopeKind::Function), "x").id));
}

#[test]
fn test_type_parameter_and_value_parameter_share_a_name() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let function = b.function_full(
        Some(b.ident("f")),
        vec![b.type_param(b.ident("T"), None, None)],
        vec![b.param(b.binding("T"), Some(b.number_type()), None)],
        None,
        Some(vec![b.return_(Some(b.id("T")))]),
    );
    let file = b.source_file(vec![Statement::FunctionDeclaration(function)]);

    let manager = analyze_script(&file);
    let generic = only_scope(&manager, ScopeKind::GenericTypeParameters);
    let body = only_scope(&manager, ScopeKind::Function);
    let type_param = local(generic, "T");
    let value_param = local(body, "T");
    assert_ne!(type_param.id, value_param.id);
    assert!(type_param.is_type() && !type_param.is_value());
    assert!(value_param.is_value());

    let read = only_ref(&manager, "T");
    assert_eq!(read.resolved, Some(value_param.id));
    assert_eq!(manager.resolve_type(body.id, "T").map(|b| b.id), Some(type_param.id));
    assert!(manager.anomalies().is_empty());
}

#[test]
fn test_arrow_function_has_no_arguments() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.const_(
        b.binding("f"),
        b.arrow(vec![b.param(b.binding("p"), None, None)], b.id("p")),
    )]);

    let manager = analyze_script(&file);
    let body = only_scope(&manager, ScopeKind::Function);
    assert!(body.flags.contains(ScopeFlags::ARROW));
    assert!(body.lookup_local("arguments").is_none());
    assert_eq!(only_ref(&manager, "p").resolved, Some(local(body, "p").id));
}

#[test]
fn test_named_function_expression_scope() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.const_(
        b.binding("g"),
        b.function_expr(Some(b.ident("h")), vec![], vec![b.expr_stmt(b.id("h"))]),
    )]);

    let manager = analyze_script(&file);
    let name_scope = only_scope(&manager, ScopeKind::FunctionExpressionName);
    let body = only_scope(&manager, ScopeKind::Function);
    assert_eq!(body.parent().unwrap().id, name_scope.id);

    let h = local(name_scope, "h");
    assert_eq!(manager.first_definition(h.id).unwrap().kind, DefinitionKind::FunctionExpressionName);
    assert_eq!(only_ref(&manager, "h").resolved, Some(h.id));
    assert!(manager.root().lookup_local("h").is_none());
}

#[test]
fn test_function_declarations_are_block_scoped() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.block(vec![b.function(b.ident("inner"), vec![], vec![])])]);

    let manager = analyze_script(&file);
    local(only_scope(&manager, ScopeKind::Block), "inner");
    assert!(manager.root().lookup_local("inner").is_none());
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_class_scopes() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.class(b.ident("Base"), vec![], vec![]),
        b.class_full(
            vec![],
            Some(b.ident("C")),
            vec![b.type_param(b.ident("T"), None, None)],
            vec![b.extends(b.id("Base"))],
            vec![
                b.property_decl(ModifierFlags::NONE, b.prop_name("x"), None, Some(b.num("1"))),
                b.static_block(vec![b.let_(b.binding("s"), None)]),
                b.method(b.prop_name("m"), vec![], vec![]),
            ],
        ),
    ]);

    let manager = analyze_script(&file);
    let class_node = file.statements[1].data().id;
    assert_eq!(
        kinds(&manager, manager.scopes_introduced_by(class_node)),
        vec![ScopeKind::GenericTypeParameters, ScopeKind::Class]
    );

    let class_scope = manager.scope(manager.scopes_introduced_by(class_node)[1]);
    assert!(class_scope.is_strict());
    let inner = local(class_scope, "C");
    let outer = local(manager.root(), "C");
    assert_ne!(inner.id, outer.id);
    assert_eq!(manager.bindings_for_declaration_node(class_node), &[outer.id, inner.id]);

    let base = local(manager.root(), "Base");
    assert_eq!(only_ref(&manager, "Base").resolved, Some(base.id));

    assert_eq!(scopes_of_kind(&manager, ScopeKind::ClassFieldInitializer).len(), 1);
    local(only_scope(&manager, ScopeKind::ClassStaticBlock), "s");
    let method_bodies = scopes_of_kind(&manager, ScopeKind::Function);
    assert_eq!(method_bodies.len(), 1);
    assert_eq!(method_bodies[0].parent().unwrap().id, class_scope.id);
    assert!(manager.anomalies().is_empty());
}

#[test]
fn test_class_expression_binds_only_inner_name() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.const_(b.binding("K"), b.class_expr(Some(b.ident("Named")), vec![], vec![]))]);

    let manager = analyze_script(&file);
    local(only_scope(&manager, ScopeKind::Class), "Named");
    assert!(manager.root().lookup_local("Named").is_none());
    local(manager.root(), "K");
}

// ============================================================================
// Statement Scopes
// ============================================================================

#[test]
fn test_switch_scope() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.let_(b.binding("k"), Some(b.num("0"))),
        b.switch(b.id("k"), vec![b.case(Some(b.num("1")), vec![b.let_(b.binding("y"), None)])]),
    ]);

    let manager = analyze_script(&file);
    let switch = only_scope(&manager, ScopeKind::Switch);
    assert_eq!(switch.variable_names(), vec!["y"]);
    assert_eq!(only_ref(&manager, "k").scope, manager.root().id);
}

#[test]
fn test_catch_scope() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let catch = b.catch(Some(b.binding("e")), vec![b.expr_stmt(b.id("e"))]);
    let file = b.source_file(vec![b.try_(vec![], Some(catch), None)]);

    let manager = analyze_script(&file);
    let catch_scope = only_scope(&manager, ScopeKind::Catch);
    let e = local(catch_scope, "e");
    assert_eq!(manager.first_definition(e.id).unwrap().kind, DefinitionKind::CatchParameter);

    let body = catch_scope.children().next().unwrap();
    assert_eq!(body.kind, ScopeKind::Block);
    assert_eq!(only_ref(&manager, "e").resolved, Some(e.id));
}

#[test]
fn test_for_scope_only_for_lexical_heads() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.for_(
            Some(b.for_decl(VarKind::Let, vec![b.declarator(b.binding("i"), None, Some(b.num("0")))])),
            Some(b.id("i")),
            None,
            b.block(vec![]),
        ),
        b.for_(
            Some(b.for_decl(VarKind::Var, vec![b.declarator(b.binding("j"), None, Some(b.num("0")))])),
            None,
            None,
            b.block(vec![]),
        ),
    ]);

    let manager = analyze_script(&file);
    let for_scope = only_scope(&manager, ScopeKind::For);
    assert_eq!(for_scope.variable_names(), vec!["i"]);
    local(manager.root(), "j");
    assert_eq!(only_ref(&manager, "i").resolved, Some(local(for_scope, "i").id));
}

#[test]
fn test_with_scope_is_dynamic() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.var(b.binding("o"), None),
        b.with(b.id("o"), b.expr_stmt(b.id("p"))),
    ]);

    let manager = analyze_script(&file);
    let with = only_scope(&manager, ScopeKind::With);
    assert!(with.is_dynamic());
    assert_eq!(only_ref(&manager, "o").scope, manager.root().id);
    assert_eq!(only_ref(&manager, "p").scope, with.id);
}

// ============================================================================
// Type Scopes
// ============================================================================

#[test]
fn test_interface_scopes() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.interface(
        b.ident("I"),
        vec![b.type_param(b.ident("T"), None, None)],
        vec![],
        vec![b.method_signature(
            b.prop_name("m"),
            vec![],
            vec![b.param(b.binding("a"), Some(b.tref("T")), None)],
            Some(b.tref("T")),
        )],
    )]);

    let manager = analyze_script(&file);
    let body = only_scope(&manager, ScopeKind::InterfaceBody);
    assert!(body.is_type_only());
    let t = local(body, "T");

    let signature = only_scope(&manager, ScopeKind::FunctionType);
    assert_eq!(signature.parent().unwrap().id, body.id);
    local(signature, "a");
    assert!(refs_to(&manager, "T").iter().all(|r| r.resolved == Some(t.id)));

    let i = local(manager.root(), "I");
    assert!(i.is_type() && !i.is_value());
}

#[test]
fn test_conditional_type_infer_scope() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.type_alias(
        b.ident("Elem"),
        vec![b.type_param(b.ident("T"), None, None)],
        b.conditional_type(
            b.tref("T"),
            b.type_ref(b.entity("Array"), vec![b.infer(b.ident("E"))]),
            b.tref("E"),
            b.number_type(),
        ),
    )]);

    let manager = analyze_script(&file);
    let alias = only_scope(&manager, ScopeKind::TypeAlias);
    let infer = only_scope(&manager, ScopeKind::ConditionalTypeInfer);
    assert_eq!(infer.parent().unwrap().id, alias.id);

    let e = local(infer, "E");
    assert_eq!(only_ref(&manager, "E").resolved, Some(e.id));
    let t_ref = only_ref(&manager, "T");
    assert_eq!(t_ref.scope, alias.id);
    assert_eq!(t_ref.resolved, Some(local(alias, "T").id));
    assert!(resolved(&manager, only_ref(&manager, "Array")).unwrap().is_implicit());
}

#[test]
fn test_mapped_type_scope() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.type_alias(
        b.ident("M"),
        vec![b.type_param(b.ident("K"), None, None)],
        b.mapped_type(b.type_param(b.ident("P"), Some(b.tref("K")), None), None, Some(b.tref("P"))),
    )]);

    let manager = analyze_script(&file);
    let mapped = only_scope(&manager, ScopeKind::MappedType);
    assert_eq!(only_ref(&manager, "P").resolved, Some(local(mapped, "P").id));
    let alias = only_scope(&manager, ScopeKind::TypeAlias);
    assert_eq!(only_ref(&manager, "K").resolved, Some(local(alias, "K").id));
}

#[test]
fn test_enum_and_namespace_scopes() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.enum_(
            b.ident("E"),
            vec![
                b.enum_member(b.prop_name("A"), None),
                b.enum_member(b.prop_name("B"), Some(b.id("A"))),
            ],
        ),
        b.namespace(b.ident("N"), vec![b.var(b.binding("inside"), None)]),
    ]);

    let manager = analyze_script(&file);
    let enum_scope = only_scope(&manager, ScopeKind::Enum);
    assert_eq!(enum_scope.variable_names(), vec!["A", "B"]);
    assert_eq!(only_ref(&manager, "A").resolved, Some(local(enum_scope, "A").id));

    let namespace = only_scope(&manager, ScopeKind::Namespace);
    assert_eq!(namespace.variable_scope, namespace.id);
    local(namespace, "inside");
    assert!(local(manager.root(), "N").is_value());
}
