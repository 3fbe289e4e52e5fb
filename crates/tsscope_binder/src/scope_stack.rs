//! The chain of open scopes during traversal.

use crate::error::ContractViolation;
use crate::ids::ScopeId;

#[derive(Debug, Default)]
pub(crate) struct ScopeStack {
    open: Vec<ScopeId>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, scope: ScopeId) {
        self.open.push(scope);
    }

    /// Pop a non-root scope.
    pub fn pop(&mut self) -> Result<ScopeId, ContractViolation> {
        match self.open.len() {
            0 => Err(ContractViolation::StackUnderflow),
            1 => Err(ContractViolation::RootPoppedEarly),
            _ => self.open.pop().ok_or(ContractViolation::StackUnderflow),
        }
    }

    /// Pop the root once traversal is complete.
    pub fn pop_root(&mut self) -> Result<ScopeId, ContractViolation> {
        match self.open.len() {
            0 => Err(ContractViolation::StackUnderflow),
            1 => self.open.pop().ok_or(ContractViolation::StackUnderflow),
            n => Err(ContractViolation::UnclosedScopes { open: n - 1 }),
        }
    }

    /// The innermost open scope. Before the root is pushed (and after it is
    /// popped) this is the root id.
    #[inline]
    pub fn current(&self) -> ScopeId {
        self.open.last().copied().unwrap_or(ScopeId::ROOT)
    }

    /// Open scopes, innermost first.
    pub fn iter(&self) -> impl Iterator<Item = ScopeId> + '_ {
        self.open.iter().rev().copied()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_order() {
        let mut stack = ScopeStack::new();
        stack.push(ScopeId(0));
        stack.push(ScopeId(1));
        stack.push(ScopeId(2));
        assert_eq!(stack.current(), ScopeId(2));
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![ScopeId(2), ScopeId(1), ScopeId(0)]);
        assert_eq!(stack.pop(), Ok(ScopeId(2)));
        assert_eq!(stack.pop(), Ok(ScopeId(1)));
        assert_eq!(stack.current(), ScopeId(0));
        assert_eq!(stack.pop_root(), Ok(ScopeId(0)));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_underflow() {
        let mut stack = ScopeStack::new();
        assert_eq!(stack.pop(), Err(ContractViolation::StackUnderflow));
        assert_eq!(stack.pop_root(), Err(ContractViolation::StackUnderflow));
    }

    #[test]
    fn test_root_cannot_be_popped_early() {
        let mut stack = ScopeStack::new();
        stack.push(ScopeId(0));
        assert_eq!(stack.pop(), Err(ContractViolation::RootPoppedEarly));
        stack.push(ScopeId(1));
        assert_eq!(stack.pop_root(), Err(ContractViolation::UnclosedScopes { open: 1 }));
    }
}
