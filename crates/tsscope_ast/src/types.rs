//! Node flags, modifier flags and node identities.

use std::fmt;

bitflags::bitflags! {
    /// Flags describing the syntactic form of a node.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u32 {
        const NONE                 = 0;
        const LET                  = 1 << 0;
        const CONST                = 1 << 1;
        const USING                = 1 << 2;
        const AWAIT_USING          = 1 << 3;
        /// `namespace X {}` as opposed to `module X {}`.
        const NAMESPACE            = 1 << 4;
        /// `declare global {}`.
        const GLOBAL_AUGMENTATION  = 1 << 5;
        const OPTIONAL_CHAIN       = 1 << 6;
        /// A generator function or method.
        const GENERATOR            = 1 << 7;

        const BLOCK_SCOPED = Self::LET.bits() | Self::CONST.bits() | Self::USING.bits() | Self::AWAIT_USING.bits();
    }
}

bitflags::bitflags! {
    /// Modifier keywords written on a declaration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u32 {
        const NONE       = 0;
        const EXPORT     = 1 << 0;
        /// `declare`.
        const AMBIENT    = 1 << 1;
        const PUBLIC     = 1 << 2;
        const PRIVATE    = 1 << 3;
        const PROTECTED  = 1 << 4;
        const STATIC     = 1 << 5;
        const READONLY   = 1 << 6;
        const ACCESSOR   = 1 << 7;
        const ABSTRACT   = 1 << 8;
        const ASYNC      = 1 << 9;
        const DEFAULT    = 1 << 10;
        const CONST      = 1 << 11;
        const OVERRIDE   = 1 << 12;
        const IN         = 1 << 13;
        const OUT        = 1 << 14;

        const ACCESSIBILITY_MODIFIER = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
        const PARAMETER_PROPERTY_MODIFIER = Self::ACCESSIBILITY_MODIFIER.bits() | Self::READONLY.bits() | Self::OVERRIDE.bits();
        const EXPORT_DEFAULT = Self::EXPORT.bits() | Self::DEFAULT.bits();
    }
}

/// Unique identity of a node within one tree.
///
/// Ids are assigned by the producer of the tree. The analyzer keys every
/// index on them and rejects trees where an id repeats or is
/// [`NodeId::INVALID`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
