//! Declaration merging.
//!
//! When a name is declared again in a scope that already has a binding for it,
//! the pair of definition kinds decides what happens:
//!
//! | rule | effect |
//! |---|---|
//! | [`MergeRule::Merge`] | the new definition joins the existing binding |
//! | [`MergeRule::Coexist`] | a separate binding in the other meaning |
//! | [`MergeRule::Conflict`] | the new binding wins, an anomaly is recorded |
//!
//! Besides the declaration-space merges (namespaces, interfaces, classes,
//! enums), the merge set holds the pairs the language itself lets you
//! redeclare: `var`/`var`, `var`/function, function/function, and `var` or
//! function over a parameter.

use crate::binding::DefinitionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeRule {
    Merge,
    Coexist,
    Conflict,
}

/// The rule for redeclaring a name of kind `existing` with kind `incoming`.
/// Symmetric.
pub fn merge_rule(existing: DefinitionKind, incoming: DefinitionKind) -> MergeRule {
    if merges(existing, incoming) || merges(incoming, existing) {
        MergeRule::Merge
    } else if coexists(existing, incoming) || coexists(incoming, existing) {
        MergeRule::Coexist
    } else {
        MergeRule::Conflict
    }
}

fn merges(a: DefinitionKind, b: DefinitionKind) -> bool {
    use DefinitionKind::*;
    matches!(
        (a, b),
        (Namespace, Namespace)
            | (Namespace, Class)
            | (Namespace, Enum)
            | (Namespace, Function)
            | (Namespace, Interface)
            | (Interface, Interface)
            | (Interface, Class)
            | (Enum, Enum)
            | (Function, Function)
            | (Var, Var)
            | (Var, Function)
            | (Var, Parameter)
            | (Function, Parameter)
    )
}

fn coexists(a: DefinitionKind, b: DefinitionKind) -> bool {
    is_value_only(a) && is_type_only(b)
}

fn is_value_only(kind: DefinitionKind) -> bool {
    use DefinitionKind::*;
    matches!(
        kind,
        Var | Let | Const | Function | Parameter | CatchParameter | EnumMember | FunctionExpressionName
    )
}

fn is_type_only(kind: DefinitionKind) -> bool {
    use DefinitionKind::*;
    matches!(kind, TypeAlias | Interface | TypeParameter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::Meaning;
    use DefinitionKind::*;

    #[test]
    fn test_table_is_symmetric() {
        for a in DefinitionKind::ALL {
            for b in DefinitionKind::ALL {
                assert_eq!(merge_rule(a, b), merge_rule(b, a), "{a} / {b}");
            }
        }
    }

    #[test]
    fn test_merging_pairs() {
        assert_eq!(merge_rule(Namespace, Namespace), MergeRule::Merge);
        assert_eq!(merge_rule(Class, Namespace), MergeRule::Merge);
        assert_eq!(merge_rule(Interface, Interface), MergeRule::Merge);
        assert_eq!(merge_rule(Class, Interface), MergeRule::Merge);
        assert_eq!(merge_rule(Function, Function), MergeRule::Merge);
        assert_eq!(merge_rule(Var, Var), MergeRule::Merge);
        assert_eq!(merge_rule(Parameter, Var), MergeRule::Merge);
        assert_eq!(merge_rule(Parameter, Function), MergeRule::Merge);
        assert_eq!(merge_rule(Enum, Enum), MergeRule::Merge);
    }

    #[test]
    fn test_legal_redeclarations_merge() {
        for (a, b) in [
            (Var, Var),
            (Var, Function),
            (Function, Function),
            (Function, Parameter),
            (Var, Parameter),
            (Enum, Enum),
        ] {
            assert_eq!(merge_rule(a, b), MergeRule::Merge, "{a} / {b}");
        }
        assert_eq!(merge_rule(Let, Function), MergeRule::Conflict);
        assert_eq!(merge_rule(Const, Parameter), MergeRule::Conflict);
    }

    #[test]
    fn test_value_and_type_coexist() {
        assert_eq!(merge_rule(Const, TypeAlias), MergeRule::Coexist);
        assert_eq!(merge_rule(Interface, Let), MergeRule::Coexist);
        assert_eq!(merge_rule(TypeParameter, Parameter), MergeRule::Coexist);
        assert_eq!(merge_rule(Function, TypeAlias), MergeRule::Coexist);
    }

    #[test]
    fn test_conflicts() {
        assert_eq!(merge_rule(Let, Let), MergeRule::Conflict);
        assert_eq!(merge_rule(Let, Var), MergeRule::Conflict);
        assert_eq!(merge_rule(Class, Class), MergeRule::Conflict);
        assert_eq!(merge_rule(Class, TypeAlias), MergeRule::Conflict);
        assert_eq!(merge_rule(TypeAlias, TypeAlias), MergeRule::Conflict);
        assert_eq!(merge_rule(ImportBinding, Var), MergeRule::Conflict);
        assert_eq!(merge_rule(Enum, Let), MergeRule::Conflict);
        assert_eq!(merge_rule(Parameter, Parameter), MergeRule::Conflict);
    }

    #[test]
    fn test_coexisting_kinds_have_disjoint_meanings() {
        for a in DefinitionKind::ALL {
            for b in DefinitionKind::ALL {
                if merge_rule(a, b) == MergeRule::Coexist {
                    assert!(
                        !a.meaning().intersects(b.meaning()),
                        "{a} and {b} coexist but share a meaning"
                    );
                }
            }
        }
        assert_eq!(Var.meaning() | Interface.meaning(), Meaning::BOTH);
    }
}
