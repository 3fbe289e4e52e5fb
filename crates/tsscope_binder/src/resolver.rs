//! Reference resolution.
//!
//! References are settled one scope at a time. When a scope closes, each
//! reference pending in it either finds a binding for its name there or is
//! recorded as passing through and handed to the parent. A reference that
//! leaves the root is unresolved.
//!
//! Because a scope closes only after its whole body has been visited, every
//! hoisted declaration is in place before any reference is looked up.

use crate::analyzer::Analyzer;
use crate::anomaly::Anomaly;
use crate::binding::HoistingClass;
use crate::error::{AnalyzeError, ContractViolation};
use crate::ids::{BindingId, ReferenceId, ScopeId};
use crate::reference::{ReferenceFlags, ReferenceMode};
use crate::scope::ScopeKind;
use tracing::{debug, trace};

/// A reference waiting for the scope it sits in to close.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PendingReference {
    pub reference: ReferenceId,
    /// Left a function-like scope: the enclosing code may already have run
    /// by the time this one does.
    pub crossed_boundary: bool,
    /// Passed through a `with` body.
    pub tainted: bool,
}

impl PendingReference {
    pub fn new(reference: ReferenceId) -> Self {
        Self {
            reference,
            crossed_boundary: false,
            tainted: false,
        }
    }
}

impl<'o> Analyzer<'o> {
    pub(crate) fn close_scope(&mut self, scope: ScopeId) {
        let pending = std::mem::take(&mut self.pending[scope.index()]);
        let kind = self.scopes[scope.index()].kind;
        let parent = self.scopes[scope.index()].parent;
        let mut resolved = 0usize;

        for entry in pending {
            let (name, mode) = {
                let reference = &self.references[entry.reference.index()];
                (reference.name, reference.mode)
            };
            if let Some(binding) = self.scopes[scope.index()].lookup(name, mode) {
                self.resolve_to(entry, scope, binding);
                resolved += 1;
                continue;
            }

            self.scopes[scope.index()].through.push(entry.reference);
            match parent {
                Some(parent) => self.pending[parent.index()].push(PendingReference {
                    reference: entry.reference,
                    crossed_boundary: entry.crossed_boundary || kind.is_function_boundary(),
                    tainted: entry.tainted || kind == ScopeKind::With,
                }),
                None => {
                    let reference = &mut self.references[entry.reference.index()];
                    if entry.tainted {
                        reference.flags |= ReferenceFlags::TAINTED;
                    }
                    let (name, range, id) = (reference.name, reference.range, reference.id);
                    self.anomalies.push(Anomaly::unresolved(id, entry.tainted, name, range));
                }
            }
        }

        let delegated = self.scopes[scope.index()].through.len();
        debug!(scope = %scope, kind = %kind, resolved, delegated, "close scope");
    }

    fn resolve_to(&mut self, entry: PendingReference, scope: ScopeId, binding: BindingId) {
        let tdz = self.in_temporal_dead_zone(&entry, scope, binding);
        let reference = &mut self.references[entry.reference.index()];
        reference.resolved = Some(binding);
        if entry.tainted {
            reference.flags |= ReferenceFlags::TAINTED;
        }
        if tdz {
            reference.flags |= ReferenceFlags::TDZ;
        }
        let (name, range) = (reference.name, reference.range);
        self.bindings[binding.index()].references.push(entry.reference);
        if tdz {
            self.anomalies
                .push(Anomaly::temporal_dead_zone(entry.reference, binding, name, range));
        }
        trace!(reference = %entry.reference, binding = %binding, tdz, "resolved");
    }

    /// A value read that runs before its binding is initialized: it stays in
    /// the same function-like body as the declaration and sits before the
    /// declared name or inside the declaration's own initializer.
    fn in_temporal_dead_zone(&self, entry: &PendingReference, scope: ScopeId, binding: BindingId) -> bool {
        let reference = &self.references[entry.reference.index()];
        if entry.crossed_boundary || reference.mode != ReferenceMode::Value {
            return false;
        }
        let exempt = ReferenceFlags::TYPE_QUERY | ReferenceFlags::EXPORT | ReferenceFlags::INIT;
        if reference.flags.intersects(exempt) {
            return false;
        }
        let hoisting = self.binding_hoisting(binding);
        let eligible = hoisting.has_temporal_dead_zone()
            || (hoisting == HoistingClass::Parameter
                && self.scopes[scope.index()].kind == ScopeKind::FunctionParameters);
        if !eligible {
            return false;
        }
        let Some(first) = self.bindings[binding.index()].definitions.first() else {
            return false;
        };
        let definition = &self.definitions[first.index()];
        reference.range.precedes(definition.name_range)
            || definition
                .init_range
                .is_some_and(|init| init.contains_range(reference.range))
    }

    /// The global pass after the root closes.
    pub(crate) fn settle(&mut self) -> Result<(), AnalyzeError> {
        if let Some(entry) = self.pending.iter().flatten().next() {
            let name = self.resolve_text(self.references[entry.reference.index()].name).to_owned();
            return Err(ContractViolation::PendingReference { name }.into());
        }

        let references = &self.references;
        for binding in &mut self.bindings {
            binding
                .references
                .sort_by_key(|id| (references[id.index()].range.pos, id.index()));
        }
        for reference in &self.references {
            if let (true, Some(binding)) = (reference.is_export(), reference.resolved) {
                self.bindings[binding.index()].is_exported = true;
            }
        }
        self.anomalies.sort_by_key(|anomaly| (anomaly.range.pos, anomaly.order()));
        debug!(anomalies = self.anomalies.len(), "settled references");
        Ok(())
    }
}
