// Declaration synthesizer: builds the three generated declarations as plain data.
use super::analyze::DISCRIMINATOR_NAME;
use super::visibility::Visibility;
use crate::view::{CaseElementView, NormalizedCaseList, PayloadShape};

/// Name of the synthesized predicate.
pub const PREDICATE_NAME: &str = "is_case";

/// Name of the synthesized payload accessor.
pub const ACCESSOR_NAME: &str = "associated_value";

/// The payload-free discriminator type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discriminator {
    /// Logical name inside the host, always `Case`.
    pub name: &'static str,
    /// Resolved visibility.
    pub visibility: Visibility,
    /// One variant per case, in source order.
    pub variants: Vec<String>,
}

/// `is_case(candidate)`: pairs receiver case *i* with candidate variant *i*.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    /// Function name.
    pub name: &'static str,
    /// Resolved visibility.
    pub visibility: Visibility,
    /// Matching arms in source order. Each yields `true`.
    pub arms: Vec<String>,
    /// Value of the trailing catch-all, present when two or more cases exist.
    pub catch_all: Option<bool>,
}

/// `associated_value::<T>()`: one arm per payload-bearing case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    /// Function name.
    pub name: &'static str,
    /// Resolved visibility.
    pub visibility: Visibility,
    /// Extraction arms in source order.
    pub arms: Vec<AccessorArm>,
    /// Whether a trailing arm yields `None` for cases without an explicit arm.
    pub fallback: bool,
}

/// One accessor arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorArm {
    /// Case matched by this arm.
    pub case: String,
    /// Slots bound by the arm's pattern.
    pub payload: PayloadShape,
    /// What the arm tries to return as `T`.
    pub extraction: Extraction,
}

/// What an accessor arm hands to the fallible downcast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extraction {
    /// The single slot itself, not a one-element tuple.
    Value,
    /// An ordered tuple of all slots.
    Tuple(usize),
}

impl Extraction {
    /// Number of slots extracted.
    pub fn arity(self) -> usize {
        match self {
            Self::Value => 1,
            Self::Tuple(n) => n,
        }
    }
}

/// A synthesized declaration, borrowed from a [`Synthesis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration<'a> {
    /// See [`Discriminator`].
    Discriminator(&'a Discriminator),
    /// See [`Predicate`].
    Predicate(&'a Predicate),
    /// See [`Accessor`].
    Accessor(&'a Accessor),
}

impl Declaration<'_> {
    /// Declared name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Discriminator(d) => d.name,
            Self::Predicate(p) => p.name,
            Self::Accessor(a) => a.name,
        }
    }

    /// Declared visibility.
    pub fn visibility(&self) -> Visibility {
        match self {
            Self::Discriminator(d) => d.visibility,
            Self::Predicate(p) => p.visibility,
            Self::Accessor(a) => a.visibility,
        }
    }
}

/// Successful output of the transformer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synthesis {
    /// Name of the host enum.
    pub host: String,
    /// The discriminator type.
    pub discriminator: Discriminator,
    /// The predicate function.
    pub predicate: Predicate,
    /// The accessor function.
    pub accessor: Accessor,
}

impl Synthesis {
    /// The three declarations in emission order.
    pub fn declarations(&self) -> [Declaration<'_>; 3] {
        [
            Declaration::Discriminator(&self.discriminator),
            Declaration::Predicate(&self.predicate),
            Declaration::Accessor(&self.accessor),
        ]
    }
}

/// Builds the declarations. Callers validate first, so `cases` is non-empty and holds at
/// least one payload-bearing case.
pub fn synthesize(host: &str, cases: &NormalizedCaseList, visibility: Visibility) -> Synthesis {
    let names: Vec<String> = cases.iter().map(|case| case.identifier.clone()).collect();

    let discriminator = Discriminator {
        name: DISCRIMINATOR_NAME,
        visibility,
        variants: names.clone(),
    };

    let predicate = Predicate {
        name: PREDICATE_NAME,
        visibility,
        catch_all: (names.len() > 1).then_some(false),
        arms: names,
    };

    let arms: Vec<AccessorArm> = cases.iter().filter_map(accessor_arm).collect();
    let accessor = Accessor {
        name: ACCESSOR_NAME,
        visibility,
        fallback: arms.len() < cases.len(),
        arms,
    };

    Synthesis {
        host: host.to_string(),
        discriminator,
        predicate,
        accessor,
    }
}

fn accessor_arm(case: &CaseElementView) -> Option<AccessorArm> {
    let extraction = match case.payload_arity() {
        0 => return None,
        1 => Extraction::Value,
        n => Extraction::Tuple(n),
    };
    Some(AccessorArm {
        case: case.identifier.clone(),
        payload: case.payload.clone(),
        extraction,
    })
}
