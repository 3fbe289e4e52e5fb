//! tsscope_binder: scope graph construction and reference resolution.
//!
//! [`analyze`] walks a whole-file tree once. It opens a scope at every
//! scope-introducing node, creates a binding for every declaration
//! (applying hoisting and declaration merging), and records every identifier
//! use. References are resolved as their scopes close; a final pass settles
//! what is left and freezes the result into a [`ScopeManager`].

mod analyzer;
mod anomaly;
mod binder;
mod binding;
mod class_visitor;
mod dispatch;
mod error;
mod globals;
mod ids;
mod manager;
mod merge;
mod pattern;
mod reference;
mod referencer;
mod resolver;
mod scope;
mod scope_stack;
mod type_visitor;
mod validate;

pub use anomaly::{Anomaly, AnomalyKind};
pub use binding::{Binding, Definition, DefinitionKind, HoistingClass, Meaning};
pub use error::{AnalyzeError, ContractViolation, MalformedReason};
pub use globals::preset_globals;
pub use ids::{BindingId, DefinitionId, ReferenceId, ScopeId};
pub use manager::{ScopeManager, ScopeRef};
pub use merge::{merge_rule, MergeRule};
pub use reference::{AccessMode, Reference, ReferenceFlags, ReferenceMode};
pub use scope::{NameSlot, Scope, ScopeFlags, ScopeKind};
pub use tsscope_options::{AnalyzeOptions, GlobalPreset, SourceType};

use analyzer::Analyzer;
use rayon::prelude::*;
use tsscope_ast::SourceFile;

/// Analyze one file.
///
/// The tree is checked against the node-shape contract first; a malformed
/// tree yields [`AnalyzeError::MalformedInput`] and no manager.
#[tracing::instrument(level = "debug", skip_all, fields(file = %file.file_name))]
pub fn analyze(file: &SourceFile<'_>, options: &AnalyzeOptions) -> Result<ScopeManager, AnalyzeError> {
    let nodes = validate::validate_tree(file)?;
    tracing::trace!(nodes, source_type = %options.source_type, "tree validated");

    let mut analyzer = Analyzer::new(file, options);
    analyzer.analyze_file(file);
    analyzer.finish()
}

/// Analyze independent files in parallel. Results are in input order.
pub fn analyze_all(files: &[&SourceFile<'_>], options: &AnalyzeOptions) -> Vec<Result<ScopeManager, AnalyzeError>> {
    files.par_iter().map(|file| analyze(file, options)).collect()
}
