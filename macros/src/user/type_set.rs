//! Candidate type set declaration
//!
//! - `type_set!` - marker struct + `TypeSet` / `Candidate` / `TextSet` impls

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    Attribute, Ident, Token, Type, Visibility,
};

use crate::common::{last_segment_is, normalize_type, take_marker_attrs};

// =============================================================================
// type_set! Input Parser
// =============================================================================

/// One entry of the list: `#[text]? Type`
pub struct CandidateEntry {
    pub ty: Type,
    pub text: Option<Attribute>,
}

impl Parse for CandidateEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attrs = Attribute::parse_outer(input)?;
        let mut text = take_marker_attrs(&mut attrs, "text")?;
        if let Some(attr) = attrs.first() {
            return Err(syn::Error::new_spanned(
                attr,
                "only `#[text]` is allowed on a candidate type",
            ));
        }
        if text.len() > 1 {
            return Err(syn::Error::new_spanned(&text[1], "duplicate `#[text]`"));
        }
        let ty: Type = input.parse()?;
        Ok(CandidateEntry { ty, text: text.pop() })
    }
}

/// One declaration: `#[attrs] VIS Name: A, B, C;`
pub struct TypeSetDecl {
    pub attrs: Vec<Attribute>,
    pub vis: Visibility,
    pub name: Ident,
    pub entries: Vec<CandidateEntry>,
}

impl Parse for TypeSetDecl {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let attrs = Attribute::parse_outer(input)?;
        let vis: Visibility = input.parse()?;
        let name: Ident = input.parse()?;
        input.parse::<Token![:]>()?;

        let mut entries = Vec::new();
        while !input.is_empty() && !input.peek(Token![;]) {
            entries.push(input.parse::<CandidateEntry>()?);
            if !input.peek(Token![,]) {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        if !input.is_empty() {
            input.parse::<Token![;]>()?;
        }

        Ok(TypeSetDecl { attrs, vis, name, entries })
    }
}

/// Whole macro input: one or more declarations
pub struct TypeSetInput {
    pub decls: Vec<TypeSetDecl>,
}

impl Parse for TypeSetInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut decls = Vec::new();
        while !input.is_empty() {
            decls.push(input.parse()?);
        }
        if decls.is_empty() {
            return Err(syn::Error::new(
                Span::call_site(),
                "expected at least one type set declaration, e.g. `pub Numbers: i32, i64;`",
            ));
        }
        Ok(TypeSetInput { decls })
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Check for duplicate candidate types in the list
pub fn check_duplicates(entries: &[CandidateEntry]) -> syn::Result<()> {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    for entry in entries {
        let ty_str = normalize_type(&entry.ty);
        if !seen.insert(ty_str.clone()) {
            return Err(syn::Error::new_spanned(
                &entry.ty,
                format!(
                    "duplicate candidate type `{}`\n\
                     \n\
                     Each type may appear only once in a type set.\n\
                     A type's ordinal must be unambiguous.",
                    ty_str
                ),
            ));
        }
    }
    Ok(())
}

/// Ordinal of the text candidate: explicit `#[text]`, else the first `String`.
pub fn resolve_text(entries: &[CandidateEntry]) -> syn::Result<Option<usize>> {
    let mut marked = entries
        .iter()
        .enumerate()
        .filter_map(|(ordinal, entry)| entry.text.as_ref().map(|attr| (ordinal, attr)));

    if let Some((ordinal, _)) = marked.next() {
        if let Some((_, second)) = marked.next() {
            return Err(syn::Error::new_spanned(
                second,
                "only one candidate may be marked `#[text]`",
            ));
        }
        return Ok(Some(ordinal));
    }

    Ok(entries
        .iter()
        .position(|entry| last_segment_is(&entry.ty, "String")))
}

// =============================================================================
// expand_type_sets
// =============================================================================

pub fn expand_type_sets(input: TypeSetInput) -> syn::Result<TokenStream2> {
    let mut out = TokenStream2::new();
    for decl in &input.decls {
        out.extend(expand_decl(decl)?);
    }
    Ok(out)
}

fn expand_decl(decl: &TypeSetDecl) -> syn::Result<TokenStream2> {
    let TypeSetDecl { attrs, vis, name, entries } = decl;

    if entries.is_empty() {
        return Err(syn::Error::new_spanned(
            name,
            format!("type set `{}` must list at least one type", name),
        ));
    }
    check_duplicates(entries)?;
    let text = resolve_text(entries)?;

    let name_str = name.to_string();
    let count = entries.len();

    // Exhaustive dispatch: one arm per ordinal
    let arms = entries.iter().enumerate().map(|(ordinal, entry)| {
        let ty = &entry.ty;
        quote! { #ordinal => visitor.visit::<#ty>(), }
    });

    let text_const = match text {
        Some(ordinal) => quote! { ::core::option::Option::Some(#ordinal) },
        None => quote! { ::core::option::Option::None },
    };

    let candidate_impls = entries.iter().enumerate().map(|(ordinal, entry)| {
        let ty = &entry.ty;
        let from_text = (text == Some(ordinal)).then(|| {
            quote! {
                #[inline]
                fn from_text(text: &str) -> ::core::option::Option<Self> {
                    ::core::option::Option::Some(<Self as ::core::convert::From<&str>>::from(text))
                }
            }
        });
        quote! {
            impl ::tola_variant::registry::Registered<#name> for #ty {}

            impl ::tola_variant::Candidate<#name> for #ty {
                const ORDINAL: ::tola_variant::Ordinal = #ordinal;
                #from_text
            }
        }
    });

    let text_set_impl = text.map(|ordinal| {
        let ty = &entries[ordinal].ty;
        quote! {
            impl ::tola_variant::TextSet for #name {
                type Text = #ty;
            }
        }
    });

    Ok(quote! {
        #(#attrs)*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #vis struct #name;

        impl ::tola_variant::TypeSet for #name {
            const NAME: &'static str = #name_str;
            const COUNT: usize = #count;
            const TEXT: ::core::option::Option<::tola_variant::Ordinal> = #text_const;

            #[inline]
            fn dispatch<V: ::tola_variant::Visitor<Self>>(
                ordinal: ::tola_variant::Ordinal,
                visitor: V,
            ) -> V::Output {
                match ordinal {
                    #(#arms)*
                    _ => ::tola_variant::registry::invalid_ordinal(#name_str, ordinal, #count),
                }
            }
        }

        #(#candidate_impls)*
        #text_set_impl
    })
}
