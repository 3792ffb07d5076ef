use proc_macro2::{Span, TokenStream};
use quote::quote;

use super::lower::{Accessor, AccessorArm, Discriminator, Extraction, Predicate, Synthesis};
use super::visibility::Visibility;
use crate::common::{binding, discriminator_ident, escape_ident};
use crate::config::ExpandConfig;
use crate::view::PayloadShape;

struct Codegen<'a> {
    host: syn::Ident,
    discriminator: syn::Ident,
    runtime: &'a syn::Path,
}

/// Renders the synthesized declarations as Rust items placed next to the host enum.
pub fn codegen(ir: &Synthesis, config: &ExpandConfig) -> TokenStream {
    let cg = Codegen {
        host: escape_ident(&ir.host, Span::call_site()),
        discriminator: discriminator_ident(&ir.host, ir.discriminator.name),
        runtime: &config.runtime_path,
    };

    let host = &cg.host;
    let discriminator = cg.discriminator(&ir.discriminator);
    let predicate = cg.predicate(&ir.predicate);
    let accessor = cg.accessor(&ir.accessor);

    quote! {
        #discriminator

        impl #host {
            #predicate

            #accessor
        }
    }
}

fn visibility(vis: Visibility) -> TokenStream {
    match vis {
        Visibility::Public => quote!(pub),
        Visibility::Default => TokenStream::new(),
    }
}

fn variant(name: &str) -> syn::Ident {
    escape_ident(name, Span::call_site())
}

impl Codegen<'_> {
    fn discriminator(&self, decl: &Discriminator) -> TokenStream {
        let vis = visibility(decl.visibility);
        let ident = &self.discriminator;
        let variants = decl.variants.iter().map(|name| variant(name));
        let doc = format!("Payload-free discriminator of [`{}`].", self.host);

        quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            #vis enum #ident {
                #(#variants),*
            }
        }
    }

    fn predicate(&self, decl: &Predicate) -> TokenStream {
        let vis = visibility(decl.visibility);
        let name = variant(decl.name);
        let discriminator = &self.discriminator;

        let arms = decl.arms.iter().map(|case| {
            let case = variant(case);
            quote! { (Self::#case { .. }, #discriminator::#case) => true, }
        });
        let catch_all = decl.catch_all.map(|value| quote! { _ => #value, });

        quote! {
            /// Returns `true` when `self` was built with the case named by `candidate`,
            /// whatever its associated values.
            #[must_use]
            #vis fn #name(&self, candidate: #discriminator) -> bool {
                match (self, candidate) {
                    #(#arms)*
                    #catch_all
                }
            }
        }
    }

    fn accessor(&self, decl: &Accessor) -> TokenStream {
        let vis = visibility(decl.visibility);
        let name = variant(decl.name);

        let arms = decl.arms.iter().map(|arm| self.accessor_arm(arm));
        let fallback = decl
            .fallback
            .then(|| quote! { _ => ::core::option::Option::None, });

        quote! {
            /// Returns the associated values of the current case as `T`, or `None` when
            /// the case has none or they are not of type `T`. Several values are returned
            /// as a tuple in declaration order.
            #[must_use]
            #vis fn #name<T: 'static>(&self) -> ::core::option::Option<T> {
                match self {
                    #(#arms)*
                    #fallback
                }
            }
        }
    }

    fn accessor_arm(&self, arm: &AccessorArm) -> TokenStream {
        let case = variant(&arm.case);
        let runtime = self.runtime;
        let bindings: Vec<syn::Ident> = (0..arm.extraction.arity()).map(binding).collect();

        let pattern = match &arm.payload {
            PayloadShape::Record(labels) => {
                let labels = labels.iter().map(|label| variant(label));
                quote! { Self::#case { #(#labels: #bindings),* } }
            }
            PayloadShape::Tuple(_) | PayloadShape::Unit => {
                quote! { Self::#case(#(#bindings),*) }
            }
        };

        let value = match arm.extraction {
            Extraction::Value => {
                let slot = &bindings[0];
                quote! { ::core::clone::Clone::clone(#slot) }
            }
            Extraction::Tuple(_) => {
                quote! { ( #(::core::clone::Clone::clone(#bindings)),* ) }
            }
        };

        quote! {
            #pattern => #runtime::extract::<T, _>(#value),
        }
    }
}
