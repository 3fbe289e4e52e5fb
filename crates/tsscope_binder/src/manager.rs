//! The finished scope graph and its query surface.

use crate::anomaly::Anomaly;
use crate::binding::{Binding, Definition};
use crate::ids::{BindingId, DefinitionId, ReferenceId, ScopeId};
use crate::reference::{Reference, ReferenceMode};
use crate::scope::Scope;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::ops::Deref;
use tsscope_ast::NodeId;
use tsscope_core::intern::{InternedString, StringInterner};
use tsscope_diagnostics::DiagnosticCollection;
use tsscope_options::SourceType;

/// Scopes, bindings and references of one analyzed file.
///
/// Scopes are stored in pre-order with the global scope first. All ids
/// handed out by the manager index into its own arenas.
#[derive(Debug)]
pub struct ScopeManager {
    pub(crate) file_name: String,
    pub(crate) interner: StringInterner,
    pub(crate) source_type: SourceType,
    pub(crate) scopes: Vec<Scope>,
    pub(crate) bindings: Vec<Binding>,
    pub(crate) definitions: Vec<Definition>,
    pub(crate) references: Vec<Reference>,
    /// Scopes each node introduces, outermost first.
    pub(crate) node_scopes: FxHashMap<NodeId, SmallVec<[ScopeId; 2]>>,
    /// The scope that was innermost when each node was visited.
    pub(crate) enclosing: FxHashMap<NodeId, ScopeId>,
    pub(crate) reference_nodes: FxHashMap<NodeId, ReferenceId>,
    pub(crate) declaration_bindings: FxHashMap<NodeId, SmallVec<[BindingId; 1]>>,
    pub(crate) unresolved: Vec<ReferenceId>,
    pub(crate) anomalies: Vec<Anomaly>,
}

impl ScopeManager {
    // ========================================================================
    // Scopes
    // ========================================================================

    pub fn root(&self) -> ScopeRef<'_> {
        self.scope(ScopeId::ROOT)
    }

    /// Every scope in pre-order.
    pub fn scopes(&self) -> impl ExactSizeIterator<Item = ScopeRef<'_>> + '_ {
        self.scopes.iter().map(move |scope| ScopeRef { manager: self, scope })
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// # Panics
    ///
    /// If `id` was not produced by this manager.
    pub fn scope(&self, id: ScopeId) -> ScopeRef<'_> {
        ScopeRef {
            manager: self,
            scope: &self.scopes[id.index()],
        }
    }

    /// The outermost scope `node` introduces, or else the scope it was
    /// visited in.
    pub fn scope_for_node(&self, node: NodeId) -> Option<ScopeRef<'_>> {
        self.node_scopes
            .get(&node)
            .and_then(|scopes| scopes.first().copied())
            .or_else(|| self.enclosing.get(&node).copied())
            .map(|id| self.scope(id))
    }

    /// The scope a node sits in, ignoring any scope it opens itself.
    pub fn enclosing_scope(&self, node: NodeId) -> Option<ScopeRef<'_>> {
        self.enclosing.get(&node).map(|&id| self.scope(id))
    }

    /// Scopes `node` introduces, outermost first. A function with type and
    /// default-valued parameters introduces three.
    pub fn scopes_introduced_by(&self, node: NodeId) -> &[ScopeId] {
        self.node_scopes
            .get(&node)
            .map(|scopes| scopes.as_slice())
            .unwrap_or(&[])
    }

    // ========================================================================
    // Bindings, definitions and references
    // ========================================================================

    pub fn binding(&self, id: BindingId) -> &Binding {
        &self.bindings[id.index()]
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn definition(&self, id: DefinitionId) -> &Definition {
        &self.definitions[id.index()]
    }

    pub fn definitions_of(&self, binding: BindingId) -> impl Iterator<Item = &Definition> + '_ {
        self.bindings[binding.index()]
            .definitions
            .iter()
            .map(move |&id| self.definition(id))
    }

    pub fn first_definition(&self, binding: BindingId) -> Option<&Definition> {
        self.definitions_of(binding).next()
    }

    pub fn last_definition(&self, binding: BindingId) -> Option<&Definition> {
        self.bindings[binding.index()]
            .definitions
            .last()
            .map(|&id| self.definition(id))
    }

    pub fn reference(&self, id: ReferenceId) -> &Reference {
        &self.references[id.index()]
    }

    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    /// The reference raised at an identifier node.
    pub fn reference_for_node(&self, node: NodeId) -> Option<&Reference> {
        self.reference_nodes.get(&node).map(|&id| self.reference(id))
    }

    /// The bindings a declaration node created names for. A destructuring
    /// declarator yields one per name; a class declaration yields its outer
    /// and inner name.
    pub fn bindings_for_declaration_node(&self, node: NodeId) -> &[BindingId] {
        self.declaration_bindings
            .get(&node)
            .map(|bindings| bindings.as_slice())
            .unwrap_or(&[])
    }

    /// The binding `name` denotes as a value at `scope`, looking outward.
    pub fn resolve(&self, scope: ScopeId, name: &str) -> Option<&Binding> {
        self.resolve_in(scope, name, ReferenceMode::Value)
    }

    /// The binding `name` denotes as a type at `scope`, looking outward.
    pub fn resolve_type(&self, scope: ScopeId, name: &str) -> Option<&Binding> {
        self.resolve_in(scope, name, ReferenceMode::Type)
    }

    fn resolve_in(&self, scope: ScopeId, name: &str, mode: ReferenceMode) -> Option<&Binding> {
        let name = self.interner.get(name)?;
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = &self.scopes[id.index()];
            if let Some(binding) = scope.lookup(name, mode) {
                return Some(self.binding(binding));
            }
            current = scope.parent;
        }
        None
    }

    /// References that found no binding, in textual order.
    pub fn unresolved_references(&self) -> impl Iterator<Item = &Reference> + '_ {
        self.unresolved.iter().map(move |&id| self.reference(id))
    }

    // ========================================================================
    // Anomalies
    // ========================================================================

    /// Findings ordered by position.
    pub fn anomalies(&self) -> &[Anomaly] {
        &self.anomalies
    }

    pub fn anomaly_diagnostics(&self) -> DiagnosticCollection {
        let mut diagnostics = DiagnosticCollection::new();
        diagnostics.extend(self.anomalies.iter().map(|anomaly| anomaly.to_diagnostic(self)));
        diagnostics.sort();
        diagnostics
    }

    // ========================================================================
    // Names and file
    // ========================================================================

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn name(&self, name: InternedString) -> &str {
        self.interner.resolve(name)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn source_type(&self) -> SourceType {
        self.source_type
    }
}

/// A scope together with the manager it belongs to.
#[derive(Clone, Copy)]
pub struct ScopeRef<'m> {
    manager: &'m ScopeManager,
    scope: &'m Scope,
}

impl<'m> ScopeRef<'m> {
    pub fn parent(&self) -> Option<ScopeRef<'m>> {
        self.scope.parent.map(|id| self.manager.scope(id))
    }

    pub fn children(&self) -> impl Iterator<Item = ScopeRef<'m>> + 'm {
        let manager = self.manager;
        self.scope.children.iter().map(move |&id| manager.scope(id))
    }

    /// Every binding created here, including redeclared ones.
    pub fn bindings(&self) -> impl Iterator<Item = &'m Binding> + 'm {
        let manager = self.manager;
        self.scope.bindings.iter().map(move |&id| manager.binding(id))
    }

    pub fn references(&self) -> impl Iterator<Item = &'m Reference> + 'm {
        let manager = self.manager;
        self.scope.references.iter().map(move |&id| manager.reference(id))
    }

    pub fn through(&self) -> impl Iterator<Item = &'m Reference> + 'm {
        let manager = self.manager;
        self.scope.through.iter().map(move |&id| manager.reference(id))
    }

    /// Value lookup from this scope outward.
    pub fn resolve(&self, name: &str) -> Option<&'m Binding> {
        self.manager.resolve(self.scope.id, name)
    }

    /// The binding visible for `name` in this scope alone, value first.
    pub fn lookup_local(&self, name: &str) -> Option<&'m Binding> {
        let name = self.manager.interner.get(name)?;
        self.scope
            .lookup(name, ReferenceMode::ValueOrType)
            .map(|id| self.manager.binding(id))
    }

    /// Names visible in this scope alone, in declaration order.
    pub fn variable_names(&self) -> Vec<&'m str> {
        let manager = self.manager;
        self.scope.names().map(|(name, _)| manager.name(name)).collect()
    }

    pub fn manager(&self) -> &'m ScopeManager {
        self.manager
    }
}

impl<'m> Deref for ScopeRef<'m> {
    type Target = Scope;

    fn deref(&self) -> &Scope {
        self.scope
    }
}

impl std::fmt::Debug for ScopeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopeRef")
            .field("id", &self.scope.id)
            .field("kind", &self.scope.kind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScopeManager>();
        assert_send_sync::<ScopeRef<'static>>();
    }
}
