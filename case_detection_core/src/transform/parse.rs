// Host adapter: reads a `syn` derive input into a `DeclarationView`.
use proc_macro2::TokenStream;
use syn::{Data, DeriveInput, Fields, Visibility as SynVisibility};

use crate::common::unescape;
use crate::view::{
    CaseElementView, DeclarationKind, DeclarationView, EnumDeclarationView, Modifier,
};

/// Parsed derive input alongside its view.
pub struct Ast {
    /// The parsed input, kept for helper attributes.
    pub input: DeriveInput,
    /// What the transformer sees.
    pub view: DeclarationView,
}

/// Parses a derive input and builds its view.
///
/// # Errors
///
/// Input that is not a type declaration, or a generic enum.
pub fn parse(ts: TokenStream) -> syn::Result<Ast> {
    let input = syn::parse2::<DeriveInput>(ts)?;
    let view = declaration_view(&input)?;
    Ok(Ast { input, view })
}

/// Maps a derive input onto the transformer's view.
///
/// Rust enums cannot declare nested items, so the existing-member list is always empty.
pub fn declaration_view(input: &DeriveInput) -> syn::Result<DeclarationView> {
    let name = unescape(&input.ident.to_string()).to_string();

    let data = match &input.data {
        Data::Enum(data) => data,
        Data::Struct(_) => {
            return Ok(DeclarationView::NonEnum {
                name,
                kind: DeclarationKind::Struct,
            });
        }
        Data::Union(_) => {
            return Ok(DeclarationView::NonEnum {
                name,
                kind: DeclarationKind::Union,
            });
        }
    };

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics.params,
            "generic enums are not supported",
        ));
    }

    let mut view = EnumDeclarationView::new(name);
    if let Some(modifier) = modifier(&input.vis) {
        view = view.with_modifier(modifier);
    }

    for variant in &data.variants {
        let identifier = unescape(&variant.ident.to_string()).to_string();
        let element = match &variant.fields {
            Fields::Unit => CaseElementView::unit(identifier),
            Fields::Unnamed(fields) => CaseElementView::tuple(identifier, fields.unnamed.len()),
            Fields::Named(fields) => CaseElementView::record(
                identifier,
                fields
                    .named
                    .iter()
                    .filter_map(|field| field.ident.as_ref())
                    .map(|ident| unescape(&ident.to_string()).to_string()),
            ),
        };
        view = view.with_case([element]);
    }

    Ok(DeclarationView::Enum(view))
}

fn modifier(vis: &SynVisibility) -> Option<Modifier> {
    match vis {
        SynVisibility::Public(_) => Some(Modifier::Public),
        SynVisibility::Restricted(restricted) => {
            let path = &restricted.path;
            Some(Modifier::Restricted(quote::quote!(#path).to_string()))
        }
        SynVisibility::Inherited => None,
    }
}
