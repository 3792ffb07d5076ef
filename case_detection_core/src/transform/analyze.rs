use proc_macro2::Span;
use tracing::debug;

use super::extract::extract;
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::view::{DeclarationView, EnumDeclarationView, Member, NormalizedCaseList};

/// Name the synthesized discriminator takes inside the host.
pub const DISCRIMINATOR_NAME: &str = "Case";

/// A declaration that passed validation, with its flattened cases.
pub struct Model<'a> {
    /// The validated enum.
    pub declaration: &'a EnumDeclarationView,
    /// Its flattened cases.
    pub cases: NormalizedCaseList,
}

/// Checks the structural preconditions in order; the first failure wins.
///
/// # Errors
///
/// `NotAnEnum`, `EmptyEnum`, `NoAssociatedValues` or `ConflictingCaseType`, anchored at
/// `anchor`.
pub fn validate(
    declaration: &DeclarationView,
    anchor: Span,
) -> Result<NormalizedCaseList, Diagnostic> {
    analyze(declaration, anchor).map(|model| model.cases)
}

/// Like [`validate`], keeping the enum alongside its cases.
///
/// # Errors
///
/// See [`validate`].
pub fn analyze(declaration: &DeclarationView, anchor: Span) -> Result<Model<'_>, Diagnostic> {
    let reject = |kind: DiagnosticKind| {
        debug!(declaration = declaration.name(), ?kind, "declaration rejected");
        Diagnostic::new(kind, anchor)
    };

    let DeclarationView::Enum(enum_decl) = declaration else {
        return Err(reject(DiagnosticKind::NotAnEnum));
    };

    let cases = extract(enum_decl);
    if cases.is_empty() {
        return Err(reject(DiagnosticKind::EmptyEnum));
    }

    if cases.iter().all(|case| case.payload_arity() == 0) {
        return Err(reject(DiagnosticKind::NoAssociatedValues));
    }

    let conflicting = enum_decl.existing_members().any(|member| {
        matches!(member, Member::Type(nested) if nested.name == DISCRIMINATOR_NAME)
    });
    if conflicting {
        return Err(reject(DiagnosticKind::ConflictingCaseType));
    }

    Ok(Model {
        declaration: enum_decl,
        cases,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{CaseElementView, DeclarationKind, NestedType, NestedTypeKind};
    use rstest::rstest;

    fn nested(name: &str, kind: NestedTypeKind) -> Member {
        Member::Type(NestedType {
            name: name.into(),
            kind,
        })
    }

    fn kind_of(declaration: DeclarationView) -> DiagnosticKind {
        validate(&declaration, Span::call_site()).unwrap_err().kind()
    }

    #[rstest]
    #[case(DeclarationKind::Struct)]
    #[case(DeclarationKind::Union)]
    #[case(DeclarationKind::Class)]
    #[case(DeclarationKind::Other)]
    fn test_non_enum_is_rejected(#[case] kind: DeclarationKind) {
        let declaration = DeclarationView::NonEnum {
            name: "Foo".into(),
            kind,
        };
        assert_eq!(kind_of(declaration), DiagnosticKind::NotAnEnum);
    }

    #[test]
    fn test_empty_enum() {
        let declaration = DeclarationView::Enum(EnumDeclarationView::new("Foo"));
        assert_eq!(kind_of(declaration), DiagnosticKind::EmptyEnum);
    }

    #[test]
    fn test_empty_statements_count_as_empty() {
        let declaration = DeclarationView::Enum(
            EnumDeclarationView::new("Foo")
                .with_case([])
                .with_member(Member::Function("f".into())),
        );
        assert_eq!(kind_of(declaration), DiagnosticKind::EmptyEnum);
    }

    #[test]
    fn test_payload_free_cases() {
        let declaration = DeclarationView::Enum(EnumDeclarationView::new("Foo").with_case([
            CaseElementView::unit("bar"),
            CaseElementView::unit("fooBar"),
        ]));
        assert_eq!(kind_of(declaration), DiagnosticKind::NoAssociatedValues);
    }

    #[test]
    fn test_nested_case_type_conflicts() {
        let declaration = DeclarationView::Enum(
            EnumDeclarationView::new("Foo")
                .with_case([CaseElementView::tuple("bar", 1)])
                .with_member(nested("Case", NestedTypeKind::Enum)),
        );
        assert_eq!(kind_of(declaration), DiagnosticKind::ConflictingCaseType);
    }

    #[rstest]
    #[case(Member::Function("Case".into()))]
    #[case(nested("Cases", NestedTypeKind::Enum))]
    #[case(nested("case", NestedTypeKind::Struct))]
    #[case(Member::Other)]
    fn test_other_members_do_not_conflict(#[case] member: Member) {
        let declaration = DeclarationView::Enum(
            EnumDeclarationView::new("Foo")
                .with_case([CaseElementView::tuple("bar", 1)])
                .with_member(member),
        );
        assert!(validate(&declaration, Span::call_site()).is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        // Payload-free and conflicting: the payload check runs first.
        let declaration = DeclarationView::Enum(
            EnumDeclarationView::new("Foo")
                .with_case([CaseElementView::unit("bar")])
                .with_member(nested("Case", NestedTypeKind::Enum)),
        );
        assert_eq!(kind_of(declaration), DiagnosticKind::NoAssociatedValues);

        // Empty and conflicting: emptiness runs first.
        let declaration = DeclarationView::Enum(
            EnumDeclarationView::new("Foo").with_member(nested("Case", NestedTypeKind::Enum)),
        );
        assert_eq!(kind_of(declaration), DiagnosticKind::EmptyEnum);
    }

    #[test]
    fn test_valid_declaration_returns_flattened_cases() {
        let declaration = DeclarationView::Enum(
            EnumDeclarationView::new("Foo")
                .with_case([CaseElementView::unit("a"), CaseElementView::tuple("b", 1)])
                .with_case([CaseElementView::record("c", ["x", "y"])]),
        );
        let cases = validate(&declaration, Span::call_site()).unwrap();
        let names: Vec<_> = cases.iter().map(|c| c.identifier.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
