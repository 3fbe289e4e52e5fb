//! Declarations: merging, redeclaration conflicts, imports, exports,
//! namespaces and ambient contexts.

mod common;

use bumpalo::Bump;
use common::*;
use tsscope_ast::Statement;
use tsscope_binder::{AnomalyKind, Binding, DefinitionKind, Meaning, ScopeFlags, ScopeKind, ScopeManager, ScopeRef};
use tsscope_nodebuilder::{NodeBuilder, VarKind};

fn bindings_named<'m>(manager: &'m ScopeManager, scope: ScopeRef<'m>, name: &str) -> Vec<&'m Binding> {
    scope.bindings().filter(|b| manager.name(b.name) == name).collect()
}

fn definition_kinds(manager: &ScopeManager, binding: &Binding) -> Vec<DefinitionKind> {
    manager.definitions_of(binding.id).map(|def| def.kind).collect()
}

// ============================================================================
// Merging
// ============================================================================

#[test]
fn test_var_redeclaration_merges() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.var(b.binding("a"), None), b.var(b.binding("a"), Some(b.num("1")))]);

    let manager = analyze_script(&file);
    let bindings = bindings_named(&manager, manager.root(), "a");
    assert_eq!(bindings.len(), 1);
    assert_eq!(definition_kinds(&manager, bindings[0]), vec![DefinitionKind::Var, DefinitionKind::Var]);
    assert!(manager.anomalies().is_empty());
}

#[test]
fn test_function_and_namespace_merge() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.function(b.ident("f"), vec![], vec![]),
        b.namespace(b.ident("f"), vec![]),
    ]);

    let manager = analyze_script(&file);
    let bindings = bindings_named(&manager, manager.root(), "f");
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].meaning, Meaning::BOTH);
    assert_eq!(
        definition_kinds(&manager, bindings[0]),
        vec![DefinitionKind::Function, DefinitionKind::Namespace]
    );
    assert!(manager.anomalies().is_empty());
}

#[test]
fn test_namespace_and_class_merge_in_either_order() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.class(b.ident("A"), vec![], vec![]),
        b.namespace(b.ident("A"), vec![]),
        b.namespace(b.ident("B"), vec![]),
        b.class(b.ident("B"), vec![], vec![]),
    ]);

    let manager = analyze_script(&file);
    let root = manager.root();

    let a = bindings_named(&manager, root, "A");
    assert_eq!(a.len(), 1);
    assert_eq!(a[0].meaning, Meaning::BOTH);
    assert_eq!(definition_kinds(&manager, a[0]), vec![DefinitionKind::Class, DefinitionKind::Namespace]);

    let b_bindings = bindings_named(&manager, root, "B");
    assert_eq!(b_bindings.len(), 1);
    assert_eq!(
        definition_kinds(&manager, b_bindings[0]),
        vec![DefinitionKind::Namespace, DefinitionKind::Class]
    );
    assert!(manager.anomalies().is_empty());
}

#[test]
fn test_namespace_and_enum_merge() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.enum_(b.ident("E"), vec![b.enum_member(b.prop_name("A"), None)]),
        b.namespace(b.ident("E"), vec![b.export(b.const_(b.binding("extra"), b.num("1")))]),
    ]);

    let manager = analyze_script(&file);
    let bindings = bindings_named(&manager, manager.root(), "E");
    assert_eq!(bindings.len(), 1);
    assert_eq!(bindings[0].meaning, Meaning::BOTH);
    assert_eq!(
        definition_kinds(&manager, bindings[0]),
        vec![DefinitionKind::Enum, DefinitionKind::Namespace]
    );
    assert!(manager.anomalies().is_empty());
}

#[test]
fn test_interface_merges_with_class() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.interface(b.ident("C"), vec![], vec![], vec![]),
        b.class(b.ident("C"), vec![], vec![]),
    ]);

    let manager = analyze_script(&file);
    let outer = local(manager.root(), "C");
    assert_eq!(outer.meaning, Meaning::BOTH);
    assert_eq!(
        definition_kinds(&manager, outer),
        vec![DefinitionKind::Interface, DefinitionKind::Class]
    );

    let class_node = file.statements[1].data().id;
    let declared = manager.bindings_for_declaration_node(class_node);
    assert_eq!(declared.len(), 2);
    assert_eq!(declared[0], outer.id);
    assert!(manager.anomalies().is_empty());
}

#[test]
fn test_function_overloads_merge() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let overload = b.function_full(
        Some(b.ident("f")),
        vec![],
        vec![b.param(b.binding("a"), Some(b.string_type()), None)],
        None,
        None,
    );
    let file = b.source_file(vec![
        Statement::FunctionDeclaration(overload),
        b.function(b.ident("f"), vec![b.param(b.binding("a"), None, None)], vec![]),
    ]);

    let manager = analyze_script(&file);
    let bindings = bindings_named(&manager, manager.root(), "f");
    assert_eq!(bindings.len(), 1);
    assert_eq!(manager.definitions_of(bindings[0].id).count(), 2);
    assert!(manager.anomalies().is_empty());
}

#[test]
fn test_parameter_and_var_merge() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.function(
        b.ident("f"),
        vec![b.param(b.binding("a"), None, None)],
        vec![b.var(b.binding("a"), None)],
    )]);

    let manager = analyze_script(&file);
    let body = only_scope(&manager, ScopeKind::Function);
    let bindings = bindings_named(&manager, body, "a");
    assert_eq!(bindings.len(), 1);
    assert_eq!(
        definition_kinds(&manager, bindings[0]),
        vec![DefinitionKind::Parameter, DefinitionKind::Var]
    );
    assert!(manager.anomalies().is_empty());
}

#[test]
fn test_enum_declarations_merge_without_sharing_members() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.enum_(b.ident("E"), vec![b.enum_member(b.prop_name("A"), None)]),
        b.enum_(b.ident("E"), vec![b.enum_member(b.prop_name("B"), Some(b.id("A")))]),
    ]);

    let manager = analyze_script(&file);
    let e = local(manager.root(), "E");
    assert_eq!(definition_kinds(&manager, e), vec![DefinitionKind::Enum, DefinitionKind::Enum]);

    let enums = scopes_of_kind(&manager, ScopeKind::Enum);
    assert_eq!(enums.len(), 2);
    assert_eq!(enums[0].variable_names(), vec!["A"]);
    assert_eq!(enums[1].variable_names(), vec!["B"]);
    assert_eq!(unresolved_names(&manager), vec!["A"]);
}

#[test]
fn test_value_and_type_coexist() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.const_(b.binding("T"), b.num("1")),
        b.type_alias(b.ident("T"), vec![], b.number_type()),
    ]);

    let manager = analyze_script(&file);
    let root = manager.root();
    assert_eq!(bindings_named(&manager, root, "T").len(), 2);
    let name = manager.interner().get("T").unwrap();
    let slot = root.slot(name).unwrap();
    assert_ne!(slot.value, slot.type_);
    assert!(manager.anomalies().is_empty());
}

// ============================================================================
// Conflicts
// ============================================================================

#[test]
fn test_let_redeclaration_conflicts() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.let_(b.binding("a"), None), b.let_(b.binding("a"), None)]);

    let manager = analyze_script(&file);
    let root = manager.root();
    let bindings = bindings_named(&manager, root, "a");
    assert_eq!(bindings.len(), 2);
    let visible = local(root, "a");
    assert_eq!(visible.id, bindings[1].id);

    assert_eq!(manager.anomalies().len(), 1);
    let AnomalyKind::DuplicateDeclaration {
        existing,
        replacement,
        same_declaration,
    } = manager.anomalies()[0].kind
    else {
        panic!("expected a duplicate declaration");
    };
    assert_eq!(existing, bindings[0].id);
    assert_eq!(replacement, bindings[1].id);
    assert!(!same_declaration);

    let diagnostics = manager.anomaly_diagnostics();
    let diagnostic = &diagnostics.diagnostics()[0];
    assert_eq!(diagnostic.code, 2451);
    assert_eq!(diagnostic.related_information[0].code, 6203);
    let first = manager.first_definition(bindings[0].id).unwrap();
    assert_eq!(diagnostic.related_information[0].span, Some(first.name_range.to_span()));
}

#[test]
fn test_var_after_let_conflicts() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.let_(b.binding("a"), None), b.var(b.binding("a"), None)]);

    let manager = analyze_script(&file);
    assert!(manager.anomalies()[0].is_duplicate_declaration());
    assert_eq!(manager.anomaly_diagnostics().diagnostics()[0].code, 2451);
}

#[test]
fn test_class_redeclaration_is_duplicate_identifier() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.class(b.ident("A"), vec![], vec![]), b.class(b.ident("A"), vec![], vec![])]);

    let manager = analyze_script(&file);
    assert_eq!(manager.anomalies().len(), 1);
    assert_eq!(manager.anomaly_diagnostics().diagnostics()[0].code, 2300);
}

#[test]
fn test_parameter_redeclared_by_let_conflicts() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.function(
        b.ident("f"),
        vec![b.param(b.binding("a"), None, None)],
        vec![b.let_(b.binding("a"), None)],
    )]);

    let manager = analyze_script(&file);
    assert_eq!(manager.anomalies().len(), 1);
    assert_eq!(manager.anomaly_diagnostics().diagnostics()[0].code, 2451);
}

#[test]
fn test_duplicate_within_one_pattern() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.var(b.binding("xs"), None),
        b.let_(
            b.array_pattern(vec![Some(b.element(b.binding("a"), None)), Some(b.element(b.binding("a"), None))]),
            Some(b.id("xs")),
        ),
    ]);

    let manager = analyze_script(&file);
    assert_eq!(manager.anomalies().len(), 1);
    assert!(matches!(
        manager.anomalies()[0].kind,
        AnomalyKind::DuplicateDeclaration {
            same_declaration: true,
            ..
        }
    ));
}

// ============================================================================
// Imports and Exports
// ============================================================================

#[test]
fn test_import_bindings() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let clause = b.import_clause(
        false,
        Some(b.ident("d")),
        Some(b.named_imports(vec![
            b.import_specifier(false, Some(b.ident("a")), b.ident("renamed")),
            b.import_specifier(true, None, b.ident("T")),
        ])),
    );
    let namespace = b.import_clause(false, None, Some(b.namespace_import(b.ident("ns"))));
    let file = b.source_file(vec![
        b.import(Some(clause), "m"),
        b.import(Some(namespace), "n"),
        b.expr_stmt(b.id("T")),
    ]);

    let manager = analyze_module(&file);
    let module = only_scope(&manager, ScopeKind::Module);
    assert_eq!(module.variable_names(), vec!["d", "renamed", "T", "ns"]);
    assert!(module.lookup_local("a").is_none());

    assert_eq!(local(module, "d").meaning, Meaning::BOTH);
    assert_eq!(local(module, "T").meaning, Meaning::TYPE);
    for name in ["d", "renamed", "T", "ns"] {
        let binding = local(module, name);
        assert_eq!(definition_kinds(&manager, binding), vec![DefinitionKind::ImportBinding]);
    }
    assert_eq!(unresolved_names(&manager), vec!["T"]);
}

#[test]
fn test_redeclaring_an_import_conflicts() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.import_default(b.ident("x"), "m"), b.var(b.binding("x"), None)]);

    let manager = analyze_module(&file);
    assert_eq!(manager.anomalies().len(), 1);
    assert_eq!(manager.anomaly_diagnostics().diagnostics()[0].code, 2300);
}

#[test]
fn test_export_list_marks_binding_exported() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.export_named(vec![b.export_specifier(b.ident("a"), None)], None),
        b.const_(b.binding("a"), b.num("1")),
    ]);

    let manager = analyze_module(&file);
    let export = only_ref(&manager, "a");
    assert!(export.is_export());
    assert!(!export.is_tdz());
    assert_eq!(export.mode, tsscope_binder::ReferenceMode::ValueOrType);

    let a = local(only_scope(&manager, ScopeKind::Module), "a");
    assert_eq!(export.resolved, Some(a.id));
    assert!(a.is_exported);
    assert!(manager.anomalies().is_empty());
}

#[test]
fn test_renamed_export_references_local_name() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.const_(b.binding("a"), b.num("1")),
        b.export_named(vec![b.export_specifier(b.ident("a"), Some(b.ident("b")))], None),
    ]);

    let manager = analyze_module(&file);
    assert!(only_ref(&manager, "a").is_resolved());
    assert!(refs_to(&manager, "b").is_empty());
}

#[test]
fn test_reexport_references_nothing() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.export_named(vec![b.export_specifier(b.ident("x"), None)], Some("m")),
        b.export_star("n"),
    ]);

    let manager = analyze_module(&file);
    assert!(manager.references().is_empty());
    assert!(manager.anomalies().is_empty());
}

#[test]
fn test_export_modifiers() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.export(b.const_(b.binding("c"), b.num("1"))),
        b.export(b.function(b.ident("f"), vec![], vec![])),
        b.let_(b.binding("hidden"), None),
    ]);

    let manager = analyze_module(&file);
    let module = only_scope(&manager, ScopeKind::Module);
    assert!(local(module, "c").is_exported);
    assert!(local(module, "f").is_exported);
    assert!(!local(module, "hidden").is_exported);
}

#[test]
fn test_export_default_identifier() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.function(b.ident("f"), vec![], vec![]),
        b.export_default_expr(b.id("f")),
    ]);

    let manager = analyze_module(&file);
    let export = only_ref(&manager, "f");
    assert!(export.is_export());
    assert!(local(only_scope(&manager, ScopeKind::Module), "f").is_exported);
}

#[test]
fn test_import_equals_references_entity() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.namespace(b.ident("NS"), vec![b.export(b.const_(b.binding("v"), b.num("1")))]),
        b.import_equals(b.ident("A"), b.entity_path("NS.v")),
    ]);

    let manager = analyze_script(&file);
    let root = manager.root();
    let ns_ref = only_ref(&manager, "NS");
    assert_eq!(ns_ref.mode, tsscope_binder::ReferenceMode::ValueOrType);
    assert_eq!(ns_ref.resolved, Some(local(root, "NS").id));
    assert_eq!(definition_kinds(&manager, local(root, "A")), vec![DefinitionKind::ImportBinding]);
    assert!(refs_to(&manager, "v").is_empty());
}

// ============================================================================
// Namespaces and Ambient Contexts
// ============================================================================

#[test]
fn test_namespace_exports() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.namespace(
        b.ident("N"),
        vec![b.export(b.const_(b.binding("x"), b.num("1"))), b.const_(b.binding("y"), b.num("2"))],
    )]);

    let manager = analyze_script(&file);
    let namespace = only_scope(&manager, ScopeKind::Namespace);
    assert!(local(namespace, "x").is_exported);
    assert!(!local(namespace, "y").is_exported);
    assert!(manager.root().lookup_local("x").is_none());
}

#[test]
fn test_dotted_namespace() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.namespace_dotted(
        b.ident("A"),
        b.namespace_decl(b.ident("B"), vec![b.var(b.binding("v"), None)]),
    )]);

    let manager = analyze_script(&file);
    let namespaces = scopes_of_kind(&manager, ScopeKind::Namespace);
    assert_eq!(namespaces.len(), 2);
    let (outer, inner) = (namespaces[0], namespaces[1]);
    assert_eq!(inner.parent().unwrap().id, outer.id);

    local(manager.root(), "A");
    assert!(local(outer, "B").is_exported);
    local(inner, "v");
}

#[test]
fn test_declare_global_from_module() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.declare_global(vec![b.var_statement(
            VarKind::Var,
            vec![b.declarator(b.binding("gv"), Some(b.number_type()), None)],
        )]),
        b.expr_stmt(b.id("gv")),
    ]);

    let manager = analyze_module(&file);
    let augmentation = only_scope(&manager, ScopeKind::Namespace);
    assert!(augmentation.flags.contains(ScopeFlags::GLOBAL_AUGMENTATION));
    assert!(augmentation.lookup_local("gv").is_none());

    let gv = local(manager.root(), "gv");
    assert!(manager.first_definition(gv.id).unwrap().is_ambient);
    assert_eq!(only_ref(&manager, "gv").resolved, Some(gv.id));
    assert!(manager.root().lookup_local("global").is_none());
}

#[test]
fn test_ambient_module() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![b.ambient_module(
        "m",
        vec![b.export(b.var_statement(
            VarKind::Const,
            vec![b.declarator(b.binding("q"), Some(b.number_type()), None)],
        ))],
    )]);

    let manager = analyze_script(&file);
    let module = only_scope(&manager, ScopeKind::Namespace);
    assert!(module.flags.contains(ScopeFlags::AMBIENT_MODULE));
    let q = local(module, "q");
    assert!(q.is_exported);
    assert!(manager.first_definition(q.id).unwrap().is_ambient);
    assert_eq!(manager.root().bindings().filter(|b| !b.is_implicit()).count(), 0);
}

#[test]
fn test_declare_modifier_and_declaration_files() {
    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.source_file(vec![
        b.declare(b.var_statement(
            VarKind::Const,
            vec![b.declarator(b.binding("c"), Some(b.number_type()), None)],
        )),
        b.var(b.binding("plain"), None),
    ]);

    let manager = analyze_script(&file);
    let root = manager.root();
    assert!(manager.first_definition(local(root, "c").id).unwrap().is_ambient);
    assert!(!manager.first_definition(local(root, "plain").id).unwrap().is_ambient);

    let arena = Bump::new();
    let b = NodeBuilder::new(&arena);
    let file = b.declaration_file(vec![b.function(b.ident("f"), vec![], vec![])]);
    let manager = analyze_script(&file);
    assert!(manager.first_definition(local(manager.root(), "f").id).unwrap().is_ambient);
}
