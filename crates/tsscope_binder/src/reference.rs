//! Identifier uses.

use crate::ids::{BindingId, ReferenceId, ScopeId};
use tsscope_ast::NodeId;
use tsscope_core::intern::InternedString;
use tsscope_core::text::TextRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessMode {
    Read,
    Write,
    ReadWrite,
}

impl AccessMode {
    #[inline]
    pub fn is_read(self) -> bool {
        matches!(self, AccessMode::Read | AccessMode::ReadWrite)
    }

    #[inline]
    pub fn is_write(self) -> bool {
        matches!(self, AccessMode::Write | AccessMode::ReadWrite)
    }
}

/// Which meaning a reference looks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceMode {
    Value,
    Type,
    /// Export specifiers and similar positions: the value meaning if there is
    /// one, otherwise the type meaning.
    ValueOrType,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ReferenceFlags: u8 {
        const NONE       = 0;
        /// Read before the binding is initialized.
        const TDZ        = 1 << 0;
        /// Passed through a `with` scope on the way to its binding.
        const TAINTED    = 1 << 1;
        /// `typeof x` in a type position, or a type-predicate parameter.
        const TYPE_QUERY = 1 << 2;
        /// Export specifier, `export default x` or `export = x`.
        const EXPORT     = 1 << 3;
        /// The initializing write of a declaration, as in `let x = 1`.
        const INIT       = 1 << 4;
    }
}

#[derive(Debug, Clone)]
pub struct Reference {
    pub id: ReferenceId,
    pub name: InternedString,
    /// The identifier node.
    pub node: NodeId,
    pub range: TextRange,
    /// The scope the reference was raised in.
    pub scope: ScopeId,
    pub access: AccessMode,
    pub mode: ReferenceMode,
    pub resolved: Option<BindingId>,
    pub flags: ReferenceFlags,
}

impl Reference {
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    #[inline]
    pub fn is_read(&self) -> bool {
        self.access.is_read()
    }

    #[inline]
    pub fn is_write(&self) -> bool {
        self.access.is_write()
    }

    #[inline]
    pub fn is_tdz(&self) -> bool {
        self.flags.contains(ReferenceFlags::TDZ)
    }

    #[inline]
    pub fn is_tainted(&self) -> bool {
        self.flags.contains(ReferenceFlags::TAINTED)
    }

    #[inline]
    pub fn is_type_query(&self) -> bool {
        self.flags.contains(ReferenceFlags::TYPE_QUERY)
    }

    #[inline]
    pub fn is_export(&self) -> bool {
        self.flags.contains(ReferenceFlags::EXPORT)
    }

    #[inline]
    pub fn is_init(&self) -> bool {
        self.flags.contains(ReferenceFlags::INIT)
    }
}
