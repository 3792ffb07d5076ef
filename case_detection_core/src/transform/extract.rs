use crate::view::{EnumDeclarationView, Member, NormalizedCaseList};

/// Flattens every case statement into one ordered list.
///
/// `case a(X), b(Y)` contributes `a` then `b`; statements contribute in member order.
/// Non-case members are skipped.
pub fn extract(declaration: &EnumDeclarationView) -> NormalizedCaseList {
    declaration
        .members
        .iter()
        .filter_map(|member| match member {
            Member::Case(decl) => Some(decl.elements.iter().cloned()),
            _ => None,
        })
        .flatten()
        .collect()
}
