//! Options read from `#[case_detection(...)]` helper attributes.

use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, Lit, Meta, Token};

/// Name of the helper attribute read from the annotated enum.
pub const HELPER_ATTRIBUTE: &str = "case_detection";

/// Options controlling how synthesized declarations are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandConfig {
    /// Path of the runtime crate providing `extract`.
    pub runtime_path: syn::Path,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            runtime_path: syn::parse_quote!(::case_detection),
        }
    }
}

impl ExpandConfig {
    /// Same as [`ExpandConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the runtime crate path.
    pub fn with_runtime_path(mut self, path: syn::Path) -> Self {
        self.runtime_path = path;
        self
    }

    /// Reads every `#[case_detection(...)]` attribute, later keys overriding earlier ones.
    ///
    /// # Errors
    ///
    /// Returns a spanned error for unknown keys, non-string values, or a string that is
    /// not a path.
    pub fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut config = Self::default();

        for attr in attrs
            .iter()
            .filter(|attr| attr.path().is_ident(HELPER_ATTRIBUTE))
        {
            let nested = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
            for meta in nested {
                let Meta::NameValue(nv) = &meta else {
                    return Err(syn::Error::new_spanned(
                        &meta,
                        "expected `key = \"value\"` in case_detection attribute",
                    ));
                };

                if nv.path.is_ident("crate") {
                    let Expr::Lit(expr_lit) = &nv.value else {
                        return Err(syn::Error::new_spanned(&nv.value, "expected string literal"));
                    };
                    let Lit::Str(lit) = &expr_lit.lit else {
                        return Err(syn::Error::new_spanned(&nv.value, "expected string literal"));
                    };
                    config = config.with_runtime_path(lit.parse::<syn::Path>()?);
                } else {
                    return Err(syn::Error::new_spanned(
                        &nv.path,
                        "unknown case_detection option, expected `crate`",
                    ));
                }
            }
        }

        Ok(config)
    }
}
