//! Declarations.
//!
//! Every declaration goes through [`Analyzer::declare`], which applies the
//! declaration-merging rules from [`crate::merge`]:
//!
//! - a redeclaration that merges with every definition of the binding already
//!   in the slot joins that binding and unions its meaning;
//! - otherwise a new binding takes the slots of its own meanings, and each
//!   displaced non-implicit binding that conflicts is reported.
//!
//! Library globals and `arguments` are implicit: any declaration replaces them
//! without an anomaly.

use crate::analyzer::{has_use_strict, Analyzer};
use crate::anomaly::Anomaly;
use crate::binding::{Binding, Definition, DefinitionKind, HoistingClass, Meaning};
use crate::error::ContractViolation;
use crate::ids::{BindingId, DefinitionId, ScopeId};
use crate::merge::{merge_rule, MergeRule};
use crate::pattern::{parameter_has_expressions, PatternTarget};
use crate::reference::{AccessMode, ReferenceFlags, ReferenceMode};
use crate::scope::{NameSlot, ScopeFlags, ScopeKind};
use smallvec::SmallVec;
use tracing::trace;
use tsscope_ast::visitor::AstVisitor;
use tsscope_ast::*;
use tsscope_core::intern::InternedString;
use tsscope_core::text::TextRange;

/// One name being declared.
pub(crate) struct DeclarationSite<'n> {
    pub ident: &'n Identifier,
    pub kind: DefinitionKind,
    pub declaration: NodeId,
    pub init_range: Option<TextRange>,
    pub meaning: Meaning,
    pub ambient: bool,
    pub exported: bool,
}

impl<'n> DeclarationSite<'n> {
    pub fn new(ident: &'n Identifier, kind: DefinitionKind, declaration: &NodeData) -> Self {
        Self {
            ident,
            kind,
            declaration: declaration.id,
            init_range: None,
            meaning: kind.meaning(),
            ambient: declaration.has_modifier(ModifierFlags::AMBIENT),
            exported: declaration.has_modifier(ModifierFlags::EXPORT),
        }
    }

    /// A site whose modifiers live elsewhere, like a declarator whose
    /// `export` is written on the enclosing statement.
    pub fn bare(ident: &'n Identifier, kind: DefinitionKind, declaration: NodeId) -> Self {
        Self {
            ident,
            kind,
            declaration,
            init_range: None,
            meaning: kind.meaning(),
            ambient: false,
            exported: false,
        }
    }

    pub fn init_range(mut self, range: TextRange) -> Self {
        self.init_range = Some(range);
        self
    }

    pub fn meaning(mut self, meaning: Meaning) -> Self {
        self.meaning = meaning;
        self
    }

    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    pub fn ambient(mut self, ambient: bool) -> Self {
        self.ambient = ambient;
        self
    }
}

pub(crate) enum FunctionBody<'n, 'a> {
    /// Overload signatures and ambient declarations.
    Missing,
    Block(&'n Block<'a>),
    Expression(&'n Expression<'a>),
}

/// The parts of a function-like node the binder needs.
pub(crate) struct FunctionLike<'n, 'a> {
    pub node: &'n NodeData,
    pub type_parameters: &'n [TypeParameterDeclaration<'a>],
    pub parameters: &'n [ParameterDeclaration<'a>],
    pub return_type: Option<&'n TypeNode<'a>>,
    pub body: FunctionBody<'n, 'a>,
    pub is_arrow: bool,
}

fn variable_kind(flags: NodeFlags) -> DefinitionKind {
    if flags.intersects(NodeFlags::CONST | NodeFlags::USING | NodeFlags::AWAIT_USING) {
        DefinitionKind::Const
    } else if flags.contains(NodeFlags::LET) {
        DefinitionKind::Let
    } else {
        DefinitionKind::Var
    }
}

fn import_meaning(type_only: bool) -> Meaning {
    if type_only {
        Meaning::TYPE
    } else {
        DefinitionKind::ImportBinding.meaning()
    }
}

fn occupants(slot: NameSlot) -> SmallVec<[BindingId; 2]> {
    let mut found = SmallVec::new();
    for binding in [slot.value, slot.type_].into_iter().flatten() {
        if !found.contains(&binding) {
            found.push(binding);
        }
    }
    found
}

impl<'o> Analyzer<'o> {
    // ========================================================================
    // Targets
    // ========================================================================

    /// `declare global` bodies declare into the root.
    fn redirect_augmentation(&self, scope: ScopeId) -> ScopeId {
        if self.scope(scope).flags.contains(ScopeFlags::GLOBAL_AUGMENTATION) {
            ScopeId::ROOT
        } else {
            scope
        }
    }

    /// Where a `var` lands: the nearest variable scope.
    pub(crate) fn var_target(&self) -> ScopeId {
        let scope = self.scope(self.current_scope()).variable_scope;
        self.redirect_augmentation(scope)
    }

    /// Where everything else lands: the innermost scope.
    pub(crate) fn lexical_target(&self) -> ScopeId {
        self.redirect_augmentation(self.current_scope())
    }

    // ========================================================================
    // Binding creation and merging
    // ========================================================================

    pub(crate) fn declare(&mut self, scope: ScopeId, site: DeclarationSite<'_>) -> Option<BindingId> {
        let name = site.ident.text;
        self.record_node(&site.ident.data);

        if site.meaning.contains(Meaning::VALUE) && self.scope(scope).is_type_only() {
            let name = self.resolve_text(name).to_owned();
            self.fail(ContractViolation::ValueInTypeOnlyScope { name, scope }.into());
            return None;
        }

        let slot = self.scope(scope).slot(name).copied().unwrap_or_default();
        let occupants = occupants(slot);

        let merge_target = occupants.iter().copied().find(|&b| {
            !self.bindings[b.index()].is_implicit() && self.rule_against(b, site.kind) == MergeRule::Merge
        });
        let binding = match merge_target {
            Some(existing) => {
                self.bindings[existing.index()].meaning |= site.meaning;
                existing
            }
            None => self.new_binding(name, scope, site.kind.hoisting_class(), site.meaning),
        };
        self.add_definition(binding, &site);

        let mut claim = site.meaning;
        for other in occupants {
            if other == binding || self.bindings[other.index()].is_implicit() {
                continue;
            }
            match self.rule_against(other, site.kind) {
                MergeRule::Conflict => {
                    let same_declaration = self.bindings[other.index()]
                        .definitions
                        .iter()
                        .any(|def| self.definitions[def.index()].declaration == site.declaration);
                    self.anomalies.push(Anomaly::duplicate_declaration(
                        other,
                        binding,
                        same_declaration,
                        name,
                        site.ident.data.range,
                    ));
                }
                // A second merge partner in the other meaning stays visible.
                MergeRule::Merge => claim.remove(self.bindings[other.index()].meaning),
                MergeRule::Coexist => {}
            }
        }
        self.occupy(scope, name, binding, claim);

        if site.exported {
            self.bindings[binding.index()].is_exported = true;
        }
        trace!(
            name = self.resolve_text(name),
            kind = %site.kind,
            binding = %binding,
            scope = %scope,
            "declare"
        );
        Some(binding)
    }

    /// The merge rule between `incoming` and every definition of `binding`:
    /// any conflict wins, then any coexistence.
    fn rule_against(&self, binding: BindingId, incoming: DefinitionKind) -> MergeRule {
        let mut rule = MergeRule::Merge;
        for def in &self.bindings[binding.index()].definitions {
            match merge_rule(self.definitions[def.index()].kind, incoming) {
                MergeRule::Conflict => return MergeRule::Conflict,
                MergeRule::Coexist => rule = MergeRule::Coexist,
                MergeRule::Merge => {}
            }
        }
        rule
    }

    fn new_binding(
        &mut self,
        name: InternedString,
        scope: ScopeId,
        hoisting: HoistingClass,
        meaning: Meaning,
    ) -> BindingId {
        let id = BindingId::from_index(self.bindings.len());
        self.bindings.push(Binding::new(id, name, scope, hoisting, meaning));
        self.scopes[scope.index()].bindings.push(id);
        id
    }

    fn add_definition(&mut self, binding: BindingId, site: &DeclarationSite<'_>) -> DefinitionId {
        let id = DefinitionId::from_index(self.definitions.len());
        let is_ambient = site.ambient || self.is_declaration_file || self.ambient_depth > 0;
        self.definitions.push(Definition {
            id,
            kind: site.kind,
            name: site.ident.text,
            node: site.ident.data.id,
            declaration: site.declaration,
            name_range: site.ident.data.range,
            init_range: site.init_range,
            meaning: site.meaning,
            is_ambient,
            binding,
        });
        self.bindings[binding.index()].definitions.push(id);
        let declared = self.declaration_bindings.entry(site.declaration).or_default();
        if !declared.contains(&binding) {
            declared.push(binding);
        }
        id
    }

    /// Point the slots of `meaning` at `binding`.
    fn occupy(&mut self, scope: ScopeId, name: InternedString, binding: BindingId, meaning: Meaning) {
        let slot = self.scopes[scope.index()].names.entry(name).or_default();
        if meaning.contains(Meaning::VALUE) {
            slot.value = Some(binding);
        }
        if meaning.contains(Meaning::TYPE) {
            slot.type_ = Some(binding);
        }
    }

    /// Declare a library global or `arguments`. Only free slots are taken;
    /// an implicit binding already holding the name absorbs the meaning.
    pub(crate) fn declare_implicit(&mut self, scope: ScopeId, name: InternedString, meaning: Meaning) {
        let slot = self.scope(scope).slot(name).copied().unwrap_or_default();
        let existing = occupants(slot)
            .into_iter()
            .find(|b| self.bindings[b.index()].is_implicit());
        let binding = match existing {
            Some(binding) => {
                self.bindings[binding.index()].meaning |= meaning;
                binding
            }
            None => self.new_binding(name, scope, HoistingClass::Implicit, meaning),
        };
        let mut free = Meaning::empty();
        if meaning.contains(Meaning::VALUE) && !matches!(slot.value, Some(b) if b != binding) {
            free |= Meaning::VALUE;
        }
        if meaning.contains(Meaning::TYPE) && !matches!(slot.type_, Some(b) if b != binding) {
            free |= Meaning::TYPE;
        }
        self.occupy(scope, name, binding, free);
    }

    // ========================================================================
    // Variables
    // ========================================================================

    pub(crate) fn bind_variable_statement<'a>(&mut self, node: &VariableStatement<'a>) {
        self.record_node(&node.data);
        self.with_ambient(&node.data, |this| {
            this.bind_variable_list(&node.declaration_list, node.data.modifier_flags, None)
        });
    }

    /// `for_head` is the iterated expression when the list heads a for-in/of.
    pub(crate) fn bind_variable_list<'a>(
        &mut self,
        list: &VariableDeclarationList<'a>,
        modifiers: ModifierFlags,
        for_head: Option<TextRange>,
    ) {
        self.record_node(&list.data);
        let kind = variable_kind(list.data.flags);
        for decl in list.declarations.iter() {
            self.record_node(&decl.data);
            let scope = if kind == DefinitionKind::Var {
                self.var_target()
            } else {
                self.lexical_target()
            };
            // Defaults inside a pattern run after the names to their left
            // are initialized, so only the declarator's initializer counts.
            let init_range = match kind {
                DefinitionKind::Var => None,
                _ => for_head.or_else(|| decl.initializer.map(|init| init.data().range)),
            };
            let target = PatternTarget {
                kind,
                scope,
                declaration: decl.data.id,
                init_range,
                has_init: decl.initializer.is_some() || for_head.is_some(),
                exported: modifiers.contains(ModifierFlags::EXPORT),
                ambient: modifiers.contains(ModifierFlags::AMBIENT),
            };
            self.bind_pattern(&decl.name, &target);
            if let Some(ty) = decl.type_annotation {
                self.visit_type_node(ty);
            }
            if let Some(init) = decl.initializer {
                self.visit_expression(init);
            }
        }
    }

    // ========================================================================
    // Functions
    // ========================================================================

    pub(crate) fn bind_function_declaration<'a>(&mut self, node: &FunctionDeclaration<'a>) {
        self.record_node(&node.data);
        if let Some(name) = &node.name {
            let scope = self.lexical_target();
            self.declare(scope, DeclarationSite::new(name, DefinitionKind::Function, &node.data));
        }
        let body = match &node.body {
            Some(block) => FunctionBody::Block(block),
            None => FunctionBody::Missing,
        };
        self.with_ambient(&node.data, |this| {
            this.bind_function_like(FunctionLike {
                node: &node.data,
                type_parameters: node.type_parameters,
                parameters: node.parameters,
                return_type: node.return_type,
                body,
                is_arrow: false,
            })
        });
    }

    pub(crate) fn bind_function_expression<'a>(&mut self, node: &FunctionExpression<'a>) {
        self.record_node(&node.data);
        if let Some(name) = &node.name {
            let scope = self.enter_scope(ScopeKind::FunctionExpressionName, &node.data, ScopeFlags::NONE);
            self.declare(
                scope,
                DeclarationSite::new(name, DefinitionKind::FunctionExpressionName, &node.data),
            );
        }
        self.bind_function_like(FunctionLike {
            node: &node.data,
            type_parameters: node.type_parameters,
            parameters: node.parameters,
            return_type: node.return_type,
            body: FunctionBody::Block(&node.body),
            is_arrow: false,
        });
        if node.name.is_some() {
            self.exit_scope();
        }
    }

    pub(crate) fn bind_arrow_function<'a>(&mut self, node: &ArrowFunction<'a>) {
        self.record_node(&node.data);
        let body = match node.body {
            ArrowFunctionBody::Block(block) => FunctionBody::Block(block),
            ArrowFunctionBody::Expression(expr) => FunctionBody::Expression(expr),
        };
        self.bind_function_like(FunctionLike {
            node: &node.data,
            type_parameters: node.type_parameters,
            parameters: node.parameters,
            return_type: node.return_type,
            body,
            is_arrow: true,
        });
    }

    /// Open the scopes of a function-like node, bind its parameters and visit
    /// its body. Scopes, outermost first: type parameters, parameters (only
    /// when a parameter contains an expression), then the body.
    pub(crate) fn bind_function_like<'a>(&mut self, function: FunctionLike<'_, 'a>) {
        let generic = !function.type_parameters.is_empty();
        if generic {
            self.enter_scope(ScopeKind::GenericTypeParameters, function.node, ScopeFlags::NONE);
            self.bind_type_parameters(function.type_parameters);
        }

        let mut flags = ScopeFlags::NONE;
        if let FunctionBody::Block(block) = function.body {
            if has_use_strict(block.statements, &self.interner) {
                flags |= ScopeFlags::STRICT;
            }
        }
        if function.is_arrow {
            flags |= ScopeFlags::ARROW;
        }

        let split = function.parameters.iter().any(parameter_has_expressions);
        if split {
            let scope = self.enter_scope(ScopeKind::FunctionParameters, function.node, flags);
            if !function.is_arrow {
                self.declare_implicit(scope, self.names.arguments, Meaning::VALUE);
            }
            self.bind_parameters(function.parameters);
        }

        let body_scope = self.enter_scope(ScopeKind::Function, function.node, flags);
        if !split {
            if !function.is_arrow {
                self.declare_implicit(body_scope, self.names.arguments, Meaning::VALUE);
            }
            self.bind_parameters(function.parameters);
        }
        if let Some(ret) = function.return_type {
            self.visit_type_node(ret);
        }
        match function.body {
            FunctionBody::Block(block) => {
                self.record_node(&block.data);
                for stmt in block.statements.iter() {
                    self.visit_statement(stmt);
                }
            }
            FunctionBody::Expression(expr) => self.visit_expression(expr),
            FunctionBody::Missing => {}
        }
        self.exit_scope();

        if split {
            self.exit_scope();
        }
        if generic {
            self.exit_scope();
        }
    }

    pub(crate) fn bind_parameters<'a>(&mut self, parameters: &[ParameterDeclaration<'a>]) {
        for param in parameters.iter() {
            self.bind_parameter(param);
        }
    }

    fn bind_parameter<'a>(&mut self, param: &ParameterDeclaration<'a>) {
        self.record_node(&param.data);
        for decorator in param.decorators.iter() {
            self.visit_decorator(decorator);
        }
        match &param.name {
            // `this` parameters only annotate the receiver.
            BindingName::Identifier(id) if id.text == self.names.this => self.record_node(&id.data),
            name => {
                let target = PatternTarget {
                    kind: DefinitionKind::Parameter,
                    scope: self.lexical_target(),
                    declaration: param.data.id,
                    init_range: param.initializer.map(|init| init.data().range),
                    has_init: param.initializer.is_some(),
                    exported: false,
                    ambient: false,
                };
                self.bind_pattern(name, &target);
            }
        }
        if let Some(ty) = param.type_annotation {
            self.visit_type_node(ty);
        }
        if let Some(init) = param.initializer {
            self.visit_expression(init);
        }
    }

    /// Declare every type parameter before visiting any constraint, so
    /// `<T extends U, U>` resolves.
    pub(crate) fn bind_type_parameters<'a>(&mut self, type_parameters: &[TypeParameterDeclaration<'a>]) {
        let scope = self.current_scope();
        for tp in type_parameters.iter() {
            self.record_node(&tp.data);
            self.declare(scope, DeclarationSite::new(&tp.name, DefinitionKind::TypeParameter, &tp.data));
        }
        for tp in type_parameters.iter() {
            if let Some(constraint) = tp.constraint {
                self.visit_type_node(constraint);
            }
            if let Some(default) = tp.default {
                self.visit_type_node(default);
            }
        }
    }

    // ========================================================================
    // Enums and namespaces
    // ========================================================================

    pub(crate) fn bind_enum_declaration<'a>(&mut self, node: &EnumDeclaration<'a>) {
        self.record_node(&node.data);
        let scope = self.lexical_target();
        self.declare(scope, DeclarationSite::new(&node.name, DefinitionKind::Enum, &node.data));
        self.with_ambient(&node.data, |this| {
            let enum_scope = this.enter_scope(ScopeKind::Enum, &node.data, ScopeFlags::NONE);
            for member in node.members.iter() {
                this.record_node(&member.data);
                match &member.name {
                    PropertyName::Identifier(id) => {
                        this.declare(
                            enum_scope,
                            DeclarationSite::new(id, DefinitionKind::EnumMember, &member.data),
                        );
                    }
                    other => this.visit_property_name(other),
                }
                if let Some(init) = member.initializer {
                    this.visit_expression(init);
                }
            }
            this.exit_scope();
        });
    }

    /// `nested` is set for the inner parts of a dotted name (`B` in
    /// `namespace A.B {}`), which are implicitly exported from their parent.
    pub(crate) fn bind_module_declaration<'a>(&mut self, node: &ModuleDeclaration<'a>, nested: bool) {
        self.record_node(&node.data);
        let mut flags = ScopeFlags::NONE;
        let mut opens_ambient = node.data.has_modifier(ModifierFlags::AMBIENT);
        match &node.name {
            ModuleName::Identifier(id) if node.data.flags.contains(NodeFlags::GLOBAL_AUGMENTATION) => {
                self.record_node(&id.data);
                flags |= ScopeFlags::GLOBAL_AUGMENTATION;
                opens_ambient = true;
            }
            ModuleName::Identifier(id) => {
                let scope = self.lexical_target();
                let exported = nested || node.data.has_modifier(ModifierFlags::EXPORT);
                self.declare(
                    scope,
                    DeclarationSite::new(id, DefinitionKind::Namespace, &node.data).exported(exported),
                );
            }
            ModuleName::StringLiteral(lit) => {
                self.record_node(&lit.data);
                flags |= ScopeFlags::AMBIENT_MODULE;
                opens_ambient = true;
            }
        }

        if opens_ambient {
            self.ambient_depth += 1;
        }
        self.enter_scope(ScopeKind::Namespace, &node.data, flags);
        match &node.body {
            Some(ModuleBody::Block(block)) => {
                self.record_node(&block.data);
                for stmt in block.statements.iter() {
                    self.visit_statement(stmt);
                }
            }
            Some(ModuleBody::Namespace(inner)) => self.bind_module_declaration(inner, true),
            None => {}
        }
        self.exit_scope();
        if opens_ambient {
            self.ambient_depth -= 1;
        }
    }

    // ========================================================================
    // Imports and exports
    // ========================================================================

    pub(crate) fn bind_import_declaration<'a>(&mut self, node: &ImportDeclaration<'a>) {
        self.record_node(&node.data);
        if let Some(clause) = &node.import_clause {
            self.record_node(&clause.data);
            let scope = self.lexical_target();
            let kind = DefinitionKind::ImportBinding;
            if let Some(name) = &clause.name {
                let site = DeclarationSite::new(name, kind, &clause.data).meaning(import_meaning(clause.is_type_only));
                self.declare(scope, site);
            }
            match &clause.named_bindings {
                Some(NamedImportBindings::NamespaceImport(ns)) => {
                    self.record_node(&ns.data);
                    let site = DeclarationSite::new(&ns.name, kind, &ns.data)
                        .meaning(import_meaning(clause.is_type_only));
                    self.declare(scope, site);
                }
                Some(NamedImportBindings::NamedImports(named)) => {
                    self.record_node(&named.data);
                    for spec in named.elements.iter() {
                        self.record_node(&spec.data);
                        if let Some(property) = &spec.property_name {
                            self.record_node(&property.data);
                        }
                        let site = DeclarationSite::new(&spec.name, kind, &spec.data)
                            .meaning(import_meaning(clause.is_type_only || spec.is_type_only));
                        self.declare(scope, site);
                    }
                }
                None => {}
            }
        }
        self.record_node(&node.module_specifier.data);
    }

    pub(crate) fn bind_import_equals_declaration<'a>(&mut self, node: &ImportEqualsDeclaration<'a>) {
        self.record_node(&node.data);
        let scope = self.lexical_target();
        let site = DeclarationSite::new(&node.name, DefinitionKind::ImportBinding, &node.data)
            .meaning(import_meaning(node.is_type_only));
        self.declare(scope, site);
        match &node.module_reference {
            ModuleReference::External(external) => {
                self.record_node(&external.data);
                self.record_node(&external.expression.data);
            }
            ModuleReference::EntityName(name) => {
                self.reference(name.leftmost(), AccessMode::Read, ReferenceMode::ValueOrType, ReferenceFlags::NONE);
                self.visit_entity_name(name);
            }
        }
    }

    /// Export specifiers of a local export list reference the exported
    /// bindings; re-exports from another module reference nothing.
    pub(crate) fn bind_export_declaration<'a>(&mut self, node: &ExportDeclaration<'a>) {
        self.record_node(&node.data);
        let local = node.module_specifier.is_none();
        match &node.export_clause {
            Some(NamedExportBindings::NamespaceExport(ns)) => {
                self.record_node(&ns.data);
                self.record_node(&ns.name.data);
            }
            Some(NamedExportBindings::NamedExports(named)) => {
                self.record_node(&named.data);
                for spec in named.elements.iter() {
                    self.record_node(&spec.data);
                    if local {
                        let mode = if node.is_type_only || spec.is_type_only {
                            ReferenceMode::Type
                        } else {
                            ReferenceMode::ValueOrType
                        };
                        self.reference(spec.local_name(), AccessMode::Read, mode, ReferenceFlags::EXPORT);
                    }
                    if let Some(property) = &spec.property_name {
                        self.record_node(&property.data);
                    }
                    self.record_node(&spec.name.data);
                }
            }
            None => {}
        }
        if let Some(specifier) = &node.module_specifier {
            self.record_node(&specifier.data);
        }
    }

    pub(crate) fn bind_export_assignment<'a>(&mut self, node: &ExportAssignment<'a>) {
        self.record_node(&node.data);
        match node.expression {
            Expression::Identifier(id) => {
                self.reference(id, AccessMode::Read, ReferenceMode::ValueOrType, ReferenceFlags::EXPORT);
            }
            other => self.visit_expression(other),
        }
    }
}
