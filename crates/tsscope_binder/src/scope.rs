//! Scopes and their name tables.

use crate::ids::{BindingId, ReferenceId, ScopeId};
use crate::reference::ReferenceMode;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::fmt;
use tsscope_ast::NodeId;
use tsscope_core::intern::InternedString;
use tsscope_core::text::TextRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Global,
    Module,
    Function,
    /// Holds the parameters of a function whose parameter list contains
    /// expressions. The body's function scope is its only child.
    FunctionParameters,
    /// Holds only the name of a named function expression.
    FunctionExpressionName,
    Block,
    Class,
    ClassFieldInitializer,
    ClassStaticBlock,
    Catch,
    Switch,
    For,
    With,
    TypeAlias,
    InterfaceBody,
    Enum,
    /// Namespaces, ambient modules and `declare global`.
    Namespace,
    ConditionalTypeInfer,
    MappedType,
    FunctionType,
    GenericTypeParameters,
}

impl ScopeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ScopeKind::Global => "global",
            ScopeKind::Module => "module",
            ScopeKind::Function => "function",
            ScopeKind::FunctionParameters => "function-parameters",
            ScopeKind::FunctionExpressionName => "function-expression-name",
            ScopeKind::Block => "block",
            ScopeKind::Class => "class",
            ScopeKind::ClassFieldInitializer => "class-field-initializer",
            ScopeKind::ClassStaticBlock => "class-static-block",
            ScopeKind::Catch => "catch",
            ScopeKind::Switch => "switch",
            ScopeKind::For => "for",
            ScopeKind::With => "with",
            ScopeKind::TypeAlias => "type-alias",
            ScopeKind::InterfaceBody => "interface-body",
            ScopeKind::Enum => "enum",
            ScopeKind::Namespace => "namespace",
            ScopeKind::ConditionalTypeInfer => "conditional-type-infer",
            ScopeKind::MappedType => "mapped-type",
            ScopeKind::FunctionType => "function-type",
            ScopeKind::GenericTypeParameters => "generic-type-parameters",
        }
    }

    /// Scopes that receive `var` declarations.
    pub fn is_variable_scope(self) -> bool {
        matches!(
            self,
            ScopeKind::Global
                | ScopeKind::Module
                | ScopeKind::Function
                | ScopeKind::Namespace
                | ScopeKind::ClassStaticBlock
        )
    }

    /// Scopes whose code does not run when the enclosing code runs. A
    /// reference leaving one of these can never observe a temporal dead zone.
    pub fn is_function_boundary(self) -> bool {
        matches!(
            self,
            ScopeKind::Function
                | ScopeKind::FunctionParameters
                | ScopeKind::ClassFieldInitializer
                | ScopeKind::ClassStaticBlock
        )
    }

    /// Scopes that can only host type-meaning bindings.
    pub fn is_type_only(self) -> bool {
        matches!(
            self,
            ScopeKind::TypeAlias
                | ScopeKind::InterfaceBody
                | ScopeKind::ConditionalTypeInfer
                | ScopeKind::MappedType
                | ScopeKind::GenericTypeParameters
        )
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ScopeFlags: u16 {
        const NONE                = 0;
        const STRICT              = 1 << 0;
        const TYPE_ONLY           = 1 << 1;
        /// Names may be introduced at run time (`with`, direct `eval`, the
        /// global object).
        const DYNAMIC             = 1 << 2;
        const HAS_DIRECT_EVAL     = 1 << 3;
        const GLOBAL_AUGMENTATION = 1 << 4;
        const AMBIENT_MODULE      = 1 << 5;
        const ARROW               = 1 << 6;
    }
}

/// What a name means in one scope: the binding seen by value lookups and the
/// binding seen by type lookups. A single binding may occupy both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NameSlot {
    pub value: Option<BindingId>,
    pub type_: Option<BindingId>,
}

impl NameSlot {
    pub fn get(&self, mode: ReferenceMode) -> Option<BindingId> {
        match mode {
            ReferenceMode::Value => self.value,
            ReferenceMode::Type => self.type_,
            ReferenceMode::ValueOrType => self.value.or(self.type_),
        }
    }
}

pub(crate) type NameTable = IndexMap<InternedString, NameSlot, FxBuildHasher>;

#[derive(Debug, Clone)]
pub struct Scope {
    pub id: ScopeId,
    pub kind: ScopeKind,
    /// The node that introduced this scope.
    pub node: NodeId,
    pub range: TextRange,
    pub parent: Option<ScopeId>,
    pub children: Vec<ScopeId>,
    /// Nearest enclosing scope (or self) receiving `var` declarations.
    pub variable_scope: ScopeId,
    pub flags: ScopeFlags,
    pub(crate) names: NameTable,
    /// Every binding created in this scope, in declaration order, including
    /// bindings later shadowed by a conflicting redeclaration.
    pub bindings: Vec<BindingId>,
    /// References raised directly inside this scope.
    pub references: Vec<ReferenceId>,
    /// References that left this scope unresolved.
    pub through: Vec<ReferenceId>,
}

impl Scope {
    pub(crate) fn new(
        id: ScopeId,
        kind: ScopeKind,
        node: NodeId,
        range: TextRange,
        parent: Option<ScopeId>,
        variable_scope: ScopeId,
        flags: ScopeFlags,
    ) -> Self {
        let mut flags = flags;
        if kind.is_type_only() {
            flags |= ScopeFlags::TYPE_ONLY;
        }
        Self {
            id,
            kind,
            node,
            range,
            parent,
            children: Vec::new(),
            variable_scope,
            flags,
            names: NameTable::default(),
            bindings: Vec::new(),
            references: Vec::new(),
            through: Vec::new(),
        }
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.flags.contains(ScopeFlags::STRICT)
    }

    #[inline]
    pub fn is_type_only(&self) -> bool {
        self.flags.contains(ScopeFlags::TYPE_ONLY)
    }

    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.flags.contains(ScopeFlags::DYNAMIC)
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// The binding visible for `name` in this scope alone.
    pub fn lookup(&self, name: InternedString, mode: ReferenceMode) -> Option<BindingId> {
        self.names.get(&name).and_then(|slot| slot.get(mode))
    }

    pub fn slot(&self, name: InternedString) -> Option<&NameSlot> {
        self.names.get(&name)
    }

    /// Visible names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = (InternedString, &NameSlot)> + '_ {
        self.names.iter().map(|(name, slot)| (*name, slot))
    }
}
