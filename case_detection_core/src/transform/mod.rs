//! The transformation pipeline: parse, validate, resolve visibility, synthesize, render.

/// Structural validation.
pub mod analyze;
/// Rendering of synthesized declarations as Rust items.
pub mod codegen;
/// Case extraction.
pub mod extract;
/// Declaration synthesis.
pub mod lower;
/// The `syn` host adapter.
pub mod parse;
/// Visibility resolution.
pub mod visibility;

use itertools::Itertools;
use proc_macro2::{Span, TokenStream};
use tracing::{debug, trace};

use crate::config::ExpandConfig;
use crate::diagnostic::{Diagnostic, ExpandError};
use crate::view::DeclarationView;
use lower::Synthesis;

/// Outcome of one transformation: three declarations or a single diagnostic.
pub type SynthesisResult = Result<Synthesis, Diagnostic>;

/// Runs validation, visibility resolution and synthesis over a declaration view.
///
/// Nothing is synthesized unless every check passes.
///
/// # Errors
///
/// The first failed structural check, anchored at `anchor`.
pub fn transform(declaration: &DeclarationView, anchor: Span) -> SynthesisResult {
    let model = analyze::analyze(declaration, anchor)?;
    let visibility = visibility::resolve_visibility(model.declaration);

    debug!(
        host = %model.declaration.name,
        cases = model.cases.len(),
        ?visibility,
        "synthesizing case detection members"
    );
    trace!(
        cases = %model.cases.iter().map(|case| &case.identifier).join(", "),
        "normalized case list"
    );

    Ok(lower::synthesize(
        &model.declaration.name,
        &model.cases,
        visibility,
    ))
}

/// Expands a `#[derive(CaseDetection)]` input into the generated items.
///
/// Diagnostics are anchored at the call site, which for a derive is its entry in the
/// `derive(...)` list.
///
/// # Errors
///
/// A `syn` error for unreadable input, bad helper attributes or generic enums, otherwise
/// the transformer's diagnostic.
pub fn expand(ts: TokenStream) -> Result<TokenStream, ExpandError> {
    let ast = parse::parse(ts)?;
    let config = ExpandConfig::from_attributes(&ast.input.attrs)?;
    let synthesis = transform(&ast.view, Span::call_site())?;
    Ok(codegen::codegen(&synthesis, &config))
}
