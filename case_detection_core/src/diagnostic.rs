//! Rejections reported by the transformer and by the `syn` host.

use proc_macro2::Span;
use thiserror::Error;

/// Why a declaration was rejected. The `Display` strings are the messages shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DiagnosticKind {
    /// The attachment point is not an enum.
    #[error("should only be attached to an enum declaration")]
    NotAnEnum,
    /// The enum declares no cases.
    #[error("The attached enum has no cases")]
    EmptyEnum,
    /// Every case is payload-free.
    #[error("The cases have no associated values, no need to apply this macro")]
    NoAssociatedValues,
    /// A nested type named `Case` already exists.
    #[error(
        "There is already an enum declaration with name Case already, remove or rename the declared enum."
    )]
    ConflictingCaseType,
}

/// A rejection anchored at the attachment point of the transformation.
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct Diagnostic {
    kind: DiagnosticKind,
    anchor: Span,
}

impl Diagnostic {
    /// Creates a diagnostic of `kind` pointing at `anchor`.
    pub fn new(kind: DiagnosticKind, anchor: Span) -> Self {
        Self { kind, anchor }
    }

    /// The failure kind.
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// Where the diagnostic points.
    pub fn anchor(&self) -> Span {
        self.anchor
    }

    /// The user-facing message.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Converts into a `syn::Error` at the same anchor.
    pub fn into_syn_error(self) -> syn::Error {
        syn::Error::new(self.anchor, self.kind)
    }
}

/// Everything that can stop an expansion, core diagnostics and host errors alike.
#[derive(Debug, Error)]
pub enum ExpandError {
    /// The transformer rejected the declaration.
    #[error(transparent)]
    Diagnostic(#[from] Diagnostic),
    /// The host could not read the input or its helper attributes.
    #[error(transparent)]
    Syn(#[from] syn::Error),
}

impl ExpandError {
    /// Where the error should be reported.
    pub fn span(&self) -> Span {
        match self {
            Self::Diagnostic(diagnostic) => diagnostic.anchor(),
            Self::Syn(err) => err.span(),
        }
    }

    /// The core diagnostic kind, if this came from the transformer.
    pub fn kind(&self) -> Option<DiagnosticKind> {
        match self {
            Self::Diagnostic(diagnostic) => Some(diagnostic.kind()),
            Self::Syn(_) => None,
        }
    }

    /// Renders as `compile_error!` tokens.
    pub fn to_compile_error(&self) -> proc_macro2::TokenStream {
        match self {
            Self::Diagnostic(diagnostic) => diagnostic.clone().into_syn_error().to_compile_error(),
            Self::Syn(err) => err.to_compile_error(),
        }
    }
}
