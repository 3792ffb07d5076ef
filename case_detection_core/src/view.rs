//! Structural view of the declaration a transformation is attached to.
//!
//! The view is the only input the transformer reads. A host (the `syn` adapter in
//! [`crate::transform::parse`], or any other language tool) builds it from its own syntax
//! tree; the transformer borrows it read-only.

/// The declaration the transformation was attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationView {
    /// An enum-shaped declaration.
    Enum(EnumDeclarationView),
    /// Anything else. Only the name and kind are kept.
    NonEnum {
        /// Declared name.
        name: String,
        /// Shape of the declaration.
        kind: DeclarationKind,
    },
}

impl DeclarationView {
    /// Name of the declaration, whatever its shape.
    pub fn name(&self) -> &str {
        match self {
            Self::Enum(decl) => &decl.name,
            Self::NonEnum { name, .. } => name,
        }
    }
}

/// Shape of a declaration that is not an enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// A record with named or positional fields.
    Struct,
    /// An untagged union.
    Union,
    /// A reference type with inheritance, for hosts that have one.
    Class,
    /// Any other declaration shape.
    Other,
}

/// An enum declaration: its name, modifiers and member list in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDeclarationView {
    /// Declared name.
    pub name: String,
    /// Declared modifiers, in source order.
    pub modifiers: Vec<Modifier>,
    /// Members in source order, case statements included.
    pub members: Vec<Member>,
}

impl EnumDeclarationView {
    /// Starts an empty view with no modifiers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Adds a modifier.
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    /// Adds one case statement holding the given elements.
    pub fn with_case<I>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = CaseElementView>,
    {
        self.members.push(Member::Case(CaseDecl {
            elements: elements.into_iter().collect(),
        }));
        self
    }

    /// Adds an arbitrary member.
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    /// Members that are not case statements.
    pub fn existing_members(&self) -> impl Iterator<Item = &Member> {
        self.members
            .iter()
            .filter(|member| !matches!(member, Member::Case(_)))
    }
}

/// A declared modifier on the host declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Unrestricted public visibility.
    Public,
    /// Visibility limited to a scope (`pub(crate)`, `pub(in path)`, package, internal).
    Restricted(String),
    /// Any non-visibility modifier, kept verbatim.
    Other(String),
}

/// One member of an enum body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    /// A case statement, possibly declaring several cases at once.
    Case(CaseDecl),
    /// A nested type declaration.
    Type(NestedType),
    /// A function or method.
    Function(String),
    /// Anything else the host exposes.
    Other,
}

/// A single case statement such as `case a(X), b(Y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDecl {
    /// Elements left to right.
    pub elements: Vec<CaseElementView>,
}

/// A nested type declared inside the enum body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedType {
    /// Declared name.
    pub name: String,
    /// Shape of the nested declaration.
    pub kind: NestedTypeKind,
}

/// Shape of a nested type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NestedTypeKind {
    /// A nested enum.
    Enum,
    /// A nested struct or record.
    Struct,
    /// A nested class.
    Class,
    /// A type alias.
    Alias,
}

/// One declared case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseElementView {
    /// Case name without any raw-identifier prefix.
    pub identifier: String,
    /// Associated value slots.
    pub payload: PayloadShape,
}

impl CaseElementView {
    /// A case without associated values.
    pub fn unit(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            payload: PayloadShape::Unit,
        }
    }

    /// A case with `arity` positional associated values.
    pub fn tuple(identifier: impl Into<String>, arity: usize) -> Self {
        let payload = if arity == 0 {
            PayloadShape::Unit
        } else {
            PayloadShape::Tuple(arity)
        };
        Self {
            identifier: identifier.into(),
            payload,
        }
    }

    /// A case whose associated values carry labels.
    pub fn record<I, S>(identifier: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let payload = if labels.is_empty() {
            PayloadShape::Unit
        } else {
            PayloadShape::Record(labels)
        };
        Self {
            identifier: identifier.into(),
            payload,
        }
    }

    /// Number of associated value slots.
    pub fn payload_arity(&self) -> usize {
        self.payload.arity()
    }
}

/// How a case carries its associated values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PayloadShape {
    /// No associated values.
    Unit,
    /// `n` positional slots.
    Tuple(usize),
    /// Labeled slots, in declaration order.
    Record(Vec<String>),
}

impl PayloadShape {
    /// Slot count. Labels do not matter.
    pub fn arity(&self) -> usize {
        match self {
            Self::Unit => 0,
            Self::Tuple(n) => *n,
            Self::Record(labels) => labels.len(),
        }
    }
}

/// Cases in source order after flattening grouped statements.
pub type NormalizedCaseList = Vec<CaseElementView>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_arity_ignores_labels() {
        let labeled = CaseElementView::record("bar", ["x", "y"]);
        let positional = CaseElementView::tuple("bar", 2);
        assert_eq!(labeled.payload_arity(), positional.payload_arity());
    }

    #[test]
    fn test_zero_arity_constructors_are_unit() {
        assert_eq!(CaseElementView::tuple("a", 0).payload, PayloadShape::Unit);
        assert_eq!(
            CaseElementView::record("a", Vec::<String>::new()).payload,
            PayloadShape::Unit
        );
    }

    #[test]
    fn test_existing_members_skip_cases() {
        let view = EnumDeclarationView::new("Foo")
            .with_case([CaseElementView::tuple("bar", 1)])
            .with_member(Member::Function("describe".into()))
            .with_member(Member::Other);

        let existing: Vec<_> = view.existing_members().collect();
        assert_eq!(existing.len(), 2);
        assert_eq!(existing[0], &Member::Function("describe".into()));
    }
}
