//! Bindings and the definitions that create them.

use crate::ids::{BindingId, DefinitionId, ReferenceId, ScopeId};
use std::fmt;
use tsscope_ast::NodeId;
use tsscope_core::intern::InternedString;
use tsscope_core::text::TextRange;

bitflags::bitflags! {
    /// The namespaces a binding is visible in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Meaning: u8 {
        const VALUE = 1 << 0;
        const TYPE  = 1 << 1;
        const BOTH  = Self::VALUE.bits() | Self::TYPE.bits();
    }
}

/// How a binding's visibility relates to its position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HoistingClass {
    /// `let`, `const`, `using`: scope-wide, but unusable before the
    /// declaration runs.
    BlockScopedLexical,
    FunctionScopedVar,
    FunctionDeclaration,
    TypeOnly,
    NamespaceOrEnum,
    Class,
    Import,
    Parameter,
    /// Library globals and `arguments`; no definitions.
    Implicit,
}

impl HoistingClass {
    /// Whether a value read can land in this binding's temporal dead zone.
    pub fn has_temporal_dead_zone(self) -> bool {
        matches!(self, HoistingClass::BlockScopedLexical | HoistingClass::Class)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    Var,
    Let,
    Const,
    Function,
    FunctionExpressionName,
    Class,
    Parameter,
    CatchParameter,
    ImportBinding,
    TypeAlias,
    Interface,
    Enum,
    EnumMember,
    Namespace,
    TypeParameter,
}

impl DefinitionKind {
    pub const ALL: [DefinitionKind; 15] = [
        DefinitionKind::Var,
        DefinitionKind::Let,
        DefinitionKind::Const,
        DefinitionKind::Function,
        DefinitionKind::FunctionExpressionName,
        DefinitionKind::Class,
        DefinitionKind::Parameter,
        DefinitionKind::CatchParameter,
        DefinitionKind::ImportBinding,
        DefinitionKind::TypeAlias,
        DefinitionKind::Interface,
        DefinitionKind::Enum,
        DefinitionKind::EnumMember,
        DefinitionKind::Namespace,
        DefinitionKind::TypeParameter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DefinitionKind::Var => "var",
            DefinitionKind::Let => "let",
            DefinitionKind::Const => "const",
            DefinitionKind::Function => "function",
            DefinitionKind::FunctionExpressionName => "function-expression-name",
            DefinitionKind::Class => "class",
            DefinitionKind::Parameter => "parameter",
            DefinitionKind::CatchParameter => "catch-parameter",
            DefinitionKind::ImportBinding => "import-binding",
            DefinitionKind::TypeAlias => "type-alias",
            DefinitionKind::Interface => "interface",
            DefinitionKind::Enum => "enum",
            DefinitionKind::EnumMember => "enum-member",
            DefinitionKind::Namespace => "namespace",
            DefinitionKind::TypeParameter => "type-parameter",
        }
    }

    /// The meaning a definition of this kind introduces. Imports are
    /// narrowed to [`Meaning::TYPE`] when written `import type`.
    pub fn meaning(self) -> Meaning {
        match self {
            DefinitionKind::Var
            | DefinitionKind::Let
            | DefinitionKind::Const
            | DefinitionKind::Function
            | DefinitionKind::FunctionExpressionName
            | DefinitionKind::Parameter
            | DefinitionKind::CatchParameter
            | DefinitionKind::EnumMember => Meaning::VALUE,
            DefinitionKind::TypeAlias | DefinitionKind::Interface | DefinitionKind::TypeParameter => {
                Meaning::TYPE
            }
            DefinitionKind::Class
            | DefinitionKind::Enum
            | DefinitionKind::Namespace
            | DefinitionKind::ImportBinding => Meaning::BOTH,
        }
    }

    pub fn hoisting_class(self) -> HoistingClass {
        match self {
            DefinitionKind::Var => HoistingClass::FunctionScopedVar,
            DefinitionKind::Let | DefinitionKind::Const => HoistingClass::BlockScopedLexical,
            DefinitionKind::Function | DefinitionKind::FunctionExpressionName => {
                HoistingClass::FunctionDeclaration
            }
            DefinitionKind::Class => HoistingClass::Class,
            DefinitionKind::Parameter | DefinitionKind::CatchParameter => HoistingClass::Parameter,
            DefinitionKind::ImportBinding => HoistingClass::Import,
            DefinitionKind::TypeAlias | DefinitionKind::Interface | DefinitionKind::TypeParameter => {
                HoistingClass::TypeOnly
            }
            DefinitionKind::Enum | DefinitionKind::EnumMember | DefinitionKind::Namespace => {
                HoistingClass::NamespaceOrEnum
            }
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declaration of a name.
#[derive(Debug, Clone)]
pub struct Definition {
    pub id: DefinitionId,
    pub kind: DefinitionKind,
    pub name: InternedString,
    /// The identifier node being declared.
    pub node: NodeId,
    /// The enclosing declaration (declarator, parameter, function, ...).
    pub declaration: NodeId,
    pub name_range: TextRange,
    /// Source evaluated before the binding is initialized; a read inside it
    /// is in the temporal dead zone.
    pub init_range: Option<TextRange>,
    pub meaning: Meaning,
    /// `declare`, a `.d.ts` file, or any enclosing ambient context.
    pub is_ambient: bool,
    pub binding: BindingId,
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub id: BindingId,
    pub name: InternedString,
    pub scope: ScopeId,
    pub definitions: Vec<DefinitionId>,
    pub hoisting: HoistingClass,
    pub meaning: Meaning,
    /// Resolved references in textual order.
    pub references: Vec<ReferenceId>,
    pub is_exported: bool,
}

impl Binding {
    pub(crate) fn new(
        id: BindingId,
        name: InternedString,
        scope: ScopeId,
        hoisting: HoistingClass,
        meaning: Meaning,
    ) -> Self {
        Self {
            id,
            name,
            scope,
            definitions: Vec::new(),
            hoisting,
            meaning,
            references: Vec::new(),
            is_exported: false,
        }
    }

    #[inline]
    pub fn is_implicit(&self) -> bool {
        self.hoisting == HoistingClass::Implicit
    }

    #[inline]
    pub fn is_value(&self) -> bool {
        self.meaning.contains(Meaning::VALUE)
    }

    #[inline]
    pub fn is_type(&self) -> bool {
        self.meaning.contains(Meaning::TYPE)
    }
}
