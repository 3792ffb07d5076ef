use proc_macro2::Span;
use quote::format_ident;
use syn::Ident;

/// Names that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Builds a Rust identifier for a case name stored without escaping.
///
/// Keywords become raw identifiers (`type` -> `r#type`). The few keywords that cannot be
/// raw get a trailing underscore instead (`self` -> `self_`). Names that are not
/// identifiers at all are mangled: every character outside `[A-Za-z0-9_]` becomes `_`,
/// and a leading digit or an empty name gets a `_` prefix (`foo-bar` -> `foo_bar`,
/// `1st` -> `_1st`).
pub fn escape_ident(name: &str, span: Span) -> Ident {
    let bare = unescape(name);
    if NON_RAW_KEYWORDS.contains(&bare) {
        return format_ident!("{}_", bare, span = span);
    }

    let parsed = syn::parse_str::<Ident>(bare)
        .or_else(|_| syn::parse_str::<Ident>(&format!("r#{bare}")));
    match parsed {
        Ok(mut ident) => {
            ident.set_span(span);
            ident
        }
        Err(_) => escape_ident(&mangle(bare), span),
    }
}

/// Rewrites a non-identifier into plain ASCII identifier characters.
///
/// The result is never empty and never starts with a digit, so it parses as an identifier
/// or is `_`.
fn mangle(name: &str) -> String {
    let mut out: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Strips a leading `r#`.
pub fn unescape(name: &str) -> &str {
    name.strip_prefix("r#").unwrap_or(name)
}

/// Binding name for the `index`-th payload slot in generated patterns.
pub fn binding(index: usize) -> Ident {
    format_ident!("__{}", index)
}

/// Name of the discriminator type rendered next to `host`.
pub fn discriminator_ident(host: &str, name: &str) -> Ident {
    escape_ident(&format!("{}{}", unescape(host), name), Span::call_site())
}
