use crate::view::{EnumDeclarationView, Modifier};

/// Visibility applied to all synthesized declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// The host language's default (module-private in Rust).
    #[default]
    Default,
    /// Unrestricted public visibility.
    Public,
}

impl Visibility {
    /// True for [`Visibility::Public`].
    pub fn is_public(self) -> bool {
        self == Self::Public
    }
}

/// `Public` only when the host carries an unrestricted public modifier.
///
/// Restricted scopes resolve to `Default`, never to something broader than the source.
pub fn resolve_visibility(declaration: &EnumDeclarationView) -> Visibility {
    if declaration.modifiers.contains(&Modifier::Public) {
        Visibility::Public
    } else {
        Visibility::Default
    }
}
