//! Shared helpers for the analyzer integration tests.

#![allow(dead_code)]

use std::sync::Once;
use tsscope_ast::SourceFile;
use tsscope_binder::{analyze, AnalyzeOptions, Binding, Reference, ScopeKind, ScopeManager, ScopeRef};

static TRACING: Once = Once::new();

/// Route analyzer logs to the test harness. `RUST_LOG=tsscope_binder=trace`
/// shows every declaration and resolution.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn analyze_with(file: &SourceFile<'_>, options: &AnalyzeOptions) -> ScopeManager {
    init_tracing();
    match analyze(file, options) {
        Ok(manager) => manager,
        Err(err) => panic!("analysis failed: {err}"),
    }
}

pub fn analyze_script(file: &SourceFile<'_>) -> ScopeManager {
    analyze_with(file, &AnalyzeOptions::default())
}

pub fn analyze_module(file: &SourceFile<'_>) -> ScopeManager {
    analyze_with(file, &AnalyzeOptions::module())
}

/// Every scope of `kind`, in pre-order.
pub fn scopes_of_kind(manager: &ScopeManager, kind: ScopeKind) -> Vec<ScopeRef<'_>> {
    manager.scopes().filter(|scope| scope.kind == kind).collect()
}

/// The single scope of `kind`.
pub fn only_scope(manager: &ScopeManager, kind: ScopeKind) -> ScopeRef<'_> {
    let scopes = scopes_of_kind(manager, kind);
    assert_eq!(scopes.len(), 1, "expected exactly one {kind} scope, found {}", scopes.len());
    scopes[0]
}

/// The binding `name` has in `scope` itself.
pub fn local<'m>(scope: ScopeRef<'m>, name: &str) -> &'m Binding {
    match scope.lookup_local(name) {
        Some(binding) => binding,
        None => panic!("no '{name}' in {} scope {}", scope.kind, scope.id),
    }
}

/// References to `name` in textual order, without the initializing writes of
/// declarations.
pub fn refs_to<'m>(manager: &'m ScopeManager, name: &str) -> Vec<&'m Reference> {
    let mut refs: Vec<&Reference> = manager
        .references()
        .iter()
        .filter(|r| manager.name(r.name) == name && !r.is_init())
        .collect();
    refs.sort_by_key(|r| r.range.pos);
    refs
}

/// The one non-initializing reference to `name`.
pub fn only_ref<'m>(manager: &'m ScopeManager, name: &str) -> &'m Reference {
    let refs = refs_to(manager, name);
    assert_eq!(refs.len(), 1, "expected one reference to '{name}', found {}", refs.len());
    refs[0]
}

pub fn resolved<'m>(manager: &'m ScopeManager, reference: &Reference) -> Option<&'m Binding> {
    reference.resolved.map(|id| manager.binding(id))
}

/// Names of the unresolved references, in textual order.
pub fn unresolved_names(manager: &ScopeManager) -> Vec<&str> {
    manager
        .unresolved_references()
        .map(|r| manager.name(r.name))
        .collect()
}
