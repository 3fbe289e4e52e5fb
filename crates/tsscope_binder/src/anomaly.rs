//! Non-fatal findings: temporal-dead-zone reads, conflicting redeclarations
//! and names that resolve nowhere.

use crate::binding::{DefinitionKind, HoistingClass};
use crate::ids::{BindingId, ReferenceId};
use crate::manager::ScopeManager;
use tsscope_core::intern::InternedString;
use tsscope_core::text::TextRange;
use tsscope_diagnostics::{messages, Diagnostic};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnomalyKind {
    TemporalDeadZone {
        reference: ReferenceId,
        binding: BindingId,
    },
    /// `replacement` took the slot `existing` held. `same_declaration` is
    /// set when both come from one declaration, as in `let [a, a] = xs`.
    DuplicateDeclaration {
        existing: BindingId,
        replacement: BindingId,
        same_declaration: bool,
    },
    /// `tainted` when the reference passed through a `with` body, where the
    /// name may still exist at run time.
    Unresolved { reference: ReferenceId, tainted: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    pub kind: AnomalyKind,
    pub name: InternedString,
    /// The offending identifier: the reference, or the redeclared name.
    pub range: TextRange,
}

impl Anomaly {
    pub(crate) fn temporal_dead_zone(
        reference: ReferenceId,
        binding: BindingId,
        name: InternedString,
        range: TextRange,
    ) -> Self {
        Self {
            kind: AnomalyKind::TemporalDeadZone { reference, binding },
            name,
            range,
        }
    }

    pub(crate) fn duplicate_declaration(
        existing: BindingId,
        replacement: BindingId,
        same_declaration: bool,
        name: InternedString,
        range: TextRange,
    ) -> Self {
        Self {
            kind: AnomalyKind::DuplicateDeclaration {
                existing,
                replacement,
                same_declaration,
            },
            name,
            range,
        }
    }

    pub(crate) fn unresolved(reference: ReferenceId, tainted: bool, name: InternedString, range: TextRange) -> Self {
        Self {
            kind: AnomalyKind::Unresolved { reference, tainted },
            name,
            range,
        }
    }

    /// Tie-break for anomalies starting at the same offset.
    pub(crate) fn order(&self) -> u8 {
        match self.kind {
            AnomalyKind::DuplicateDeclaration { .. } => 0,
            AnomalyKind::TemporalDeadZone { .. } => 1,
            AnomalyKind::Unresolved { .. } => 2,
        }
    }

    pub fn is_temporal_dead_zone(&self) -> bool {
        matches!(self.kind, AnomalyKind::TemporalDeadZone { .. })
    }

    pub fn is_duplicate_declaration(&self) -> bool {
        matches!(self.kind, AnomalyKind::DuplicateDeclaration { .. })
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self.kind, AnomalyKind::Unresolved { .. })
    }

    /// Render as a checker-style diagnostic located in `manager`'s file.
    pub fn to_diagnostic(&self, manager: &ScopeManager) -> Diagnostic {
        let name = manager.name(self.name);
        let file = manager.file_name().to_owned();
        let span = self.range.to_span();
        match self.kind {
            AnomalyKind::TemporalDeadZone { binding, .. } => {
                let binding = manager.binding(binding);
                let message = match binding.hoisting {
                    HoistingClass::Class => &messages::CLASS_0_USED_BEFORE_ITS_DECLARATION,
                    HoistingClass::Parameter => &messages::PARAMETER_0_CANNOT_REFERENCE_ITSELF_OR_LATER_PARAMETER,
                    _ => &messages::BLOCK_SCOPED_VARIABLE_0_USED_BEFORE_ITS_DECLARATION,
                };
                let diagnostic = Diagnostic::with_location(file.clone(), span, message, &[name]);
                match manager.first_definition(binding.id) {
                    Some(def) => diagnostic.with_related(Diagnostic::with_location(
                        file,
                        def.name_range.to_span(),
                        &messages::_0_IS_DECLARED_HERE,
                        &[name],
                    )),
                    None => diagnostic,
                }
            }
            AnomalyKind::DuplicateDeclaration {
                existing,
                replacement,
                ..
            } => {
                let is_lexical = |kind: DefinitionKind| matches!(kind, DefinitionKind::Let | DefinitionKind::Const);
                let existing_def = manager.first_definition(existing);
                let block_scoped = existing_def.is_some_and(|def| is_lexical(def.kind))
                    || manager
                        .last_definition(replacement)
                        .is_some_and(|def| is_lexical(def.kind));
                let message = if block_scoped {
                    &messages::CANNOT_REDECLARE_BLOCK_SCOPED_VARIABLE_0
                } else {
                    &messages::DUPLICATE_IDENTIFIER_0
                };
                let diagnostic = Diagnostic::with_location(file.clone(), span, message, &[name]);
                match existing_def {
                    Some(def) => diagnostic.with_related(Diagnostic::with_location(
                        file,
                        def.name_range.to_span(),
                        &messages::_0_WAS_ALSO_DECLARED_HERE,
                        &[name],
                    )),
                    None => diagnostic,
                }
            }
            AnomalyKind::Unresolved { tainted: true, .. } => {
                Diagnostic::with_location(file, span, &messages::REFERENCE_TO_0_IS_AMBIGUOUS_INSIDE_WITH, &[name])
            }
            AnomalyKind::Unresolved { tainted: false, .. } => {
                Diagnostic::with_location(file, span, &messages::CANNOT_FIND_NAME_0, &[name])
            }
        }
    }
}
