//! Fatal analysis errors.
//!
//! Resolution anomalies are not errors; they are collected on the
//! [`ScopeManager`](crate::ScopeManager). An [`AnalyzeError`] means no manager
//! is produced at all.

use crate::ids::ScopeId;
use tsscope_ast::{NodeId, SyntaxKind};
use tsscope_core::text::TextRange;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum AnalyzeError {
    /// The tree does not satisfy the node-shape contract.
    #[error("malformed input tree at node {node} ({range:?}): {reason}")]
    #[diagnostic(code(tsscope::malformed_input))]
    MalformedInput {
        node: NodeId,
        range: TextRange,
        reason: MalformedReason,
    },

    /// The analyzer reached a state a well-formed tree cannot produce.
    #[error("scope analysis contract violated: {0}")]
    #[diagnostic(code(tsscope::contract_violation))]
    ContractViolation(ContractViolation),
}

impl AnalyzeError {
    pub(crate) fn malformed(node: NodeId, range: TextRange, reason: MalformedReason) -> Self {
        AnalyzeError::MalformedInput {
            node,
            range,
            reason,
        }
    }

    pub fn is_malformed_input(&self) -> bool {
        matches!(self, AnalyzeError::MalformedInput { .. })
    }
}

impl From<ContractViolation> for AnalyzeError {
    fn from(violation: ContractViolation) -> Self {
        AnalyzeError::ContractViolation(violation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("node id is not assigned")]
    InvalidNodeId,
    #[error("node id is used by more than one node")]
    DuplicateNodeId,
    #[error("kind tag {found:?} does not match a {expected:?} node")]
    KindMismatch {
        expected: SyntaxKind,
        found: SyntaxKind,
    },
    #[error("range ends before it starts")]
    InvertedRange,
    #[error("identifier has empty text")]
    EmptyIdentifier,
    #[error("expression is not a valid assignment target")]
    InvalidAssignmentTarget,
    #[error("for-in/of head declares {0} variables, expected exactly one")]
    ForInOfDeclaratorCount(usize),
    #[error("`infer` outside the extends clause of a conditional type")]
    InferOutsideConditional,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractViolation {
    #[error("scope exit with no open scope")]
    StackUnderflow,
    #[error("root scope closed before traversal finished")]
    RootPoppedEarly,
    #[error("{open} scopes still open at the end of traversal")]
    UnclosedScopes { open: usize },
    #[error("value binding '{name}' declared into type-only scope {scope}")]
    ValueInTypeOnlyScope { name: String, scope: ScopeId },
    #[error("reference to '{name}' still pending after settlement")]
    PendingReference { name: String },
}
