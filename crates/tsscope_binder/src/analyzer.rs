//! Analysis state shared by the binder, referencer and resolver passes.
//!
//! The [`Analyzer`] is driven by one depth-first traversal (see `dispatch`).
//! Scopes are entered and exited as the traversal crosses scope-introducing
//! nodes; closing a scope settles the references pending in it.

use crate::anomaly::Anomaly;
use crate::binding::{Binding, Definition, HoistingClass, Meaning};
use crate::error::AnalyzeError;
use crate::globals::preset_globals;
use crate::ids::{BindingId, ReferenceId, ScopeId};
use crate::manager::ScopeManager;
use crate::reference::Reference;
use crate::resolver::PendingReference;
use crate::scope::{Scope, ScopeFlags, ScopeKind};
use crate::scope_stack::ScopeStack;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;
use tsscope_ast::visitor::AstVisitor;
use tsscope_ast::*;
use tsscope_core::intern::{InternedString, StringInterner};
use tsscope_options::{AnalyzeOptions, SourceType};

/// Names the analyzer compares against.
pub(crate) struct WellKnownNames {
    pub arguments: InternedString,
    pub eval: InternedString,
    pub this: InternedString,
}

impl WellKnownNames {
    fn new(interner: &StringInterner) -> Self {
        Self {
            arguments: interner.intern_static("arguments"),
            eval: interner.intern_static("eval"),
            this: interner.intern_static("this"),
        }
    }
}

pub(crate) struct Analyzer<'o> {
    pub(crate) options: &'o AnalyzeOptions,
    pub(crate) interner: StringInterner,
    pub(crate) names: WellKnownNames,
    pub(crate) file_name: String,
    pub(crate) is_declaration_file: bool,

    pub(crate) scopes: Vec<Scope>,
    pub(crate) bindings: Vec<Binding>,
    pub(crate) definitions: Vec<Definition>,
    pub(crate) references: Vec<Reference>,

    pub(crate) stack: ScopeStack,
    /// Unsettled references per scope, indexed by scope id.
    pub(crate) pending: Vec<Vec<PendingReference>>,

    pub(crate) node_scopes: FxHashMap<NodeId, SmallVec<[ScopeId; 2]>>,
    pub(crate) enclosing: FxHashMap<NodeId, ScopeId>,
    pub(crate) reference_nodes: FxHashMap<NodeId, ReferenceId>,
    pub(crate) declaration_bindings: FxHashMap<NodeId, SmallVec<[BindingId; 1]>>,

    pub(crate) anomalies: Vec<Anomaly>,
    /// The first contract violation hit during traversal. Visitor methods
    /// cannot return errors, so traversal records it and `finish` reports it.
    pub(crate) fault: Option<AnalyzeError>,
    /// Depth of enclosing `declare` contexts.
    pub(crate) ambient_depth: u32,
}

impl<'o> Analyzer<'o> {
    pub(crate) fn new(file: &SourceFile<'_>, options: &'o AnalyzeOptions) -> Self {
        let interner = file.interner.clone();
        let names = WellKnownNames::new(&interner);
        Self {
            options,
            interner,
            names,
            file_name: file.file_name.clone(),
            is_declaration_file: file.is_declaration_file,
            scopes: Vec::new(),
            bindings: Vec::new(),
            definitions: Vec::new(),
            references: Vec::new(),
            stack: ScopeStack::new(),
            pending: Vec::new(),
            node_scopes: FxHashMap::default(),
            enclosing: FxHashMap::default(),
            reference_nodes: FxHashMap::default(),
            declaration_bindings: FxHashMap::default(),
            anomalies: Vec::new(),
            fault: None,
            ambient_depth: 0,
        }
    }

    /// Traverse `file`: open the root (and the module or wrapper function
    /// scope), visit the statements, then close everything but the root.
    pub(crate) fn analyze_file(&mut self, file: &SourceFile<'_>) {
        let prologue_strict = has_use_strict(file.statements, &self.interner);
        let mut root_flags = ScopeFlags::DYNAMIC;
        if self.options.implied_strict || (prologue_strict && self.options.source_type == SourceType::Script) {
            root_flags |= ScopeFlags::STRICT;
        }
        let root = self.enter_scope(ScopeKind::Global, &file.data, root_flags);
        self.seed_globals(root);

        let wrapper = match self.options.source_type {
            SourceType::Module => Some(self.enter_scope(ScopeKind::Module, &file.data, ScopeFlags::STRICT)),
            SourceType::Script if self.options.global_return => {
                let flags = if prologue_strict { ScopeFlags::STRICT } else { ScopeFlags::NONE };
                let scope = self.enter_scope(ScopeKind::Function, &file.data, flags);
                self.declare_implicit(scope, self.names.arguments, Meaning::VALUE);
                Some(scope)
            }
            SourceType::Script => None,
        };

        self.visit_source_file(file);

        if wrapper.is_some() {
            self.exit_scope();
        }
    }

    fn seed_globals(&mut self, root: ScopeId) {
        for preset in self.options.presets() {
            for (name, meaning) in preset_globals(preset) {
                let name = self.interner.intern_static(name);
                self.declare_implicit(root, name, meaning);
            }
        }
        debug!(globals = self.scopes[root.index()].bindings.len(), "seeded global scope");
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    pub(crate) fn enter_scope(&mut self, kind: ScopeKind, node: &NodeData, flags: ScopeFlags) -> ScopeId {
        let id = ScopeId::from_index(self.scopes.len());
        let parent = if self.stack.is_empty() {
            None
        } else {
            Some(self.stack.current())
        };

        let mut flags = flags;
        if kind == ScopeKind::Class {
            flags |= ScopeFlags::STRICT;
        }
        let variable_scope = match parent {
            Some(parent) => {
                let parent_scope = &self.scopes[parent.index()];
                if parent_scope.is_strict() {
                    flags |= ScopeFlags::STRICT;
                }
                if kind.is_variable_scope() {
                    id
                } else {
                    parent_scope.variable_scope
                }
            }
            None => id,
        };

        self.scopes
            .push(Scope::new(id, kind, node.id, node.range, parent, variable_scope, flags));
        if let Some(parent) = parent {
            self.scopes[parent.index()].children.push(id);
        }
        self.pending.push(Vec::new());
        self.node_scopes.entry(node.id).or_default().push(id);
        self.stack.push(id);
        debug!(scope = %id, kind = %kind, node = %node.id, "enter scope");
        id
    }

    pub(crate) fn exit_scope(&mut self) {
        match self.stack.pop() {
            Ok(id) => {
                self.close_scope(id);
                debug!(scope = %id, "exit scope");
            }
            Err(violation) => self.fail(violation.into()),
        }
    }

    #[inline]
    pub(crate) fn current_scope(&self) -> ScopeId {
        self.stack.current()
    }

    #[inline]
    pub(crate) fn scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    /// Direct `eval` can add names to every scope it can see.
    pub(crate) fn mark_direct_eval(&mut self) {
        let current = self.current_scope();
        self.scopes[current.index()].flags |= ScopeFlags::HAS_DIRECT_EVAL;
        let open: SmallVec<[ScopeId; 8]> = self.stack.iter().collect();
        for id in open {
            self.scopes[id.index()].flags |= ScopeFlags::DYNAMIC;
        }
    }

    /// The innermost open scope of `kind`.
    pub(crate) fn nearest_open(&self, kind: ScopeKind) -> Option<ScopeId> {
        self.stack.iter().find(|id| self.scopes[id.index()].kind == kind)
    }

    // ========================================================================
    // Bookkeeping
    // ========================================================================

    pub(crate) fn fail(&mut self, error: AnalyzeError) {
        if self.fault.is_none() {
            self.fault = Some(error);
        }
    }

    /// Remember the scope a node was visited in. The first visit wins.
    #[inline]
    pub(crate) fn record_node(&mut self, data: &NodeData) {
        let scope = self.stack.current();
        self.enclosing.entry(data.id).or_insert(scope);
    }

    /// Run `f` inside the ambient context opened by a `declare` modifier, if
    /// `data` carries one.
    pub(crate) fn with_ambient(&mut self, data: &NodeData, f: impl FnOnce(&mut Self)) {
        let ambient = data.has_modifier(ModifierFlags::AMBIENT);
        if ambient {
            self.ambient_depth += 1;
        }
        f(self);
        if ambient {
            self.ambient_depth -= 1;
        }
    }

    pub(crate) fn resolve_text(&self, name: InternedString) -> &str {
        self.interner.resolve(name)
    }

    // ========================================================================
    // Completion
    // ========================================================================

    /// Close the root, run the global settlement pass and freeze the result.
    pub(crate) fn finish(mut self) -> Result<ScopeManager, AnalyzeError> {
        if let Some(error) = self.fault.take() {
            return Err(error);
        }
        let root = self.stack.pop_root()?;
        self.close_scope(root);
        if let Some(error) = self.fault.take() {
            return Err(error);
        }
        self.settle()?;

        let mut unresolved: Vec<ReferenceId> = self
            .references
            .iter()
            .filter(|r| r.resolved.is_none())
            .map(|r| r.id)
            .collect();
        unresolved.sort_by_key(|id| (self.references[id.index()].range.pos, id.index()));
        debug!(
            scopes = self.scopes.len(),
            bindings = self.bindings.len(),
            references = self.references.len(),
            unresolved = unresolved.len(),
            anomalies = self.anomalies.len(),
            "analysis complete"
        );

        Ok(ScopeManager {
            file_name: self.file_name,
            interner: self.interner,
            source_type: self.options.source_type,
            scopes: self.scopes,
            bindings: self.bindings,
            definitions: self.definitions,
            references: self.references,
            node_scopes: self.node_scopes,
            enclosing: self.enclosing,
            reference_nodes: self.reference_nodes,
            declaration_bindings: self.declaration_bindings,
            unresolved,
            anomalies: self.anomalies,
        })
    }

    pub(crate) fn binding_hoisting(&self, binding: BindingId) -> HoistingClass {
        self.bindings[binding.index()].hoisting
    }
}

/// Whether a statement list opens with a `"use strict"` directive.
pub(crate) fn has_use_strict(statements: &[Statement<'_>], interner: &StringInterner) -> bool {
    for stmt in statements {
        let Statement::ExpressionStatement(expr_stmt) = stmt else {
            return false;
        };
        let Expression::Literal(lit) = expr_stmt.expression else {
            return false;
        };
        if lit.literal_kind != LiteralKind::String {
            return false;
        }
        let text = interner.resolve(lit.text).trim_matches(|c| c == '"' || c == '\'');
        if text == "use strict" {
            return true;
        }
    }
    false
}
