//! Declaration transformer behind `#[derive(CaseDetection)]`.
//!
//! Given the structure of an enum, the transformer synthesizes a payload-free
//! discriminator (`Case`), a predicate (`is_case`) and a typed payload accessor
//! (`associated_value`). The core works on a host-agnostic [`view`] of the declaration;
//! [`transform::parse`] and [`transform::codegen`] connect it to `syn` and `quote`.

mod common;
/// Expansion options.
pub mod config;
/// Diagnostics and expansion errors.
pub mod diagnostic;
/// The transformation pipeline.
pub mod transform;
pub mod view;

pub use crate::common::escape_ident;
pub use crate::config::ExpandConfig;
pub use crate::diagnostic::{Diagnostic, DiagnosticKind, ExpandError};
pub use crate::transform::analyze::validate;
pub use crate::transform::extract::extract;
pub use crate::transform::lower::{
    Accessor, AccessorArm, Declaration, Discriminator, Extraction, Predicate, Synthesis,
    synthesize,
};
pub use crate::transform::visibility::{Visibility, resolve_visibility};
pub use crate::transform::{SynthesisResult, expand, transform};
pub use crate::view::{
    CaseDecl, CaseElementView, DeclarationKind, DeclarationView, EnumDeclarationView, Member,
    Modifier, NestedType, NestedTypeKind, NormalizedCaseList, PayloadShape,
};
