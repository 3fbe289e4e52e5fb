//! Destructuring in declarations and parameters.

use crate::analyzer::Analyzer;
use crate::binder::DeclarationSite;
use crate::binding::DefinitionKind;
use crate::ids::ScopeId;
use crate::reference::{AccessMode, ReferenceFlags, ReferenceMode};
use tsscope_ast::visitor::AstVisitor;
use tsscope_ast::*;
use tsscope_core::text::TextRange;

/// What every name in one pattern is declared as.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PatternTarget {
    pub kind: DefinitionKind,
    pub scope: ScopeId,
    pub declaration: NodeId,
    pub init_range: Option<TextRange>,
    /// Each name gets an initializing write reference.
    pub has_init: bool,
    pub exported: bool,
    pub ambient: bool,
}

/// Whether evaluating a parameter runs code: a default value or a computed
/// key anywhere in its pattern.
pub(crate) fn parameter_has_expressions(param: &ParameterDeclaration<'_>) -> bool {
    param.initializer.is_some() || pattern_has_expressions(&param.name)
}

fn pattern_has_expressions(name: &BindingName<'_>) -> bool {
    match name {
        BindingName::Identifier(_) => false,
        BindingName::ObjectBindingPattern(pattern) => pattern.elements.iter().any(element_has_expressions),
        BindingName::ArrayBindingPattern(pattern) => pattern.elements.iter().any(|elem| match elem {
            ArrayBindingElement::BindingElement(e) => element_has_expressions(e),
            ArrayBindingElement::OmittedExpression(_) => false,
        }),
    }
}

fn element_has_expressions(elem: &BindingElement<'_>) -> bool {
    elem.initializer.is_some()
        || matches!(elem.property_name, Some(PropertyName::Computed(_)))
        || pattern_has_expressions(&elem.name)
}

impl<'o> Analyzer<'o> {
    /// Declare every name in `name`, left to right. Computed keys and
    /// default values are visited in the current scope as they are met.
    pub(crate) fn bind_pattern<'a>(&mut self, name: &BindingName<'a>, target: &PatternTarget) {
        match name {
            BindingName::Identifier(id) => {
                let mut site = DeclarationSite::bare(id, target.kind, target.declaration)
                    .exported(target.exported)
                    .ambient(target.ambient);
                if let Some(range) = target.init_range {
                    site = site.init_range(range);
                }
                self.declare(target.scope, site);
                if target.has_init {
                    self.reference(id, AccessMode::Write, ReferenceMode::Value, ReferenceFlags::INIT);
                }
            }
            BindingName::ObjectBindingPattern(pattern) => {
                self.record_node(&pattern.data);
                for elem in pattern.elements.iter() {
                    self.bind_element(elem, target);
                }
            }
            BindingName::ArrayBindingPattern(pattern) => {
                self.record_node(&pattern.data);
                for elem in pattern.elements.iter() {
                    match elem {
                        ArrayBindingElement::BindingElement(e) => self.bind_element(e, target),
                        ArrayBindingElement::OmittedExpression(data) => self.record_node(data),
                    }
                }
            }
        }
    }

    fn bind_element<'a>(&mut self, elem: &BindingElement<'a>, target: &PatternTarget) {
        self.record_node(&elem.data);
        if let Some(property) = &elem.property_name {
            self.visit_property_name(property);
        }
        let mut element_target = *target;
        if elem.initializer.is_some() {
            element_target.has_init = true;
        }
        self.bind_pattern(&elem.name, &element_target);
        if let Some(init) = elem.initializer {
            self.visit_expression(init);
        }
    }
}
